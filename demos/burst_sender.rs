use std::net::UdpSocket;
use std::thread;
use std::time::{Duration, Instant};
use rosc::{OscMessage, OscPacket, OscType, encoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Burst Sender - sending 10 messages to 127.0.0.1:53000");

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    let target_addr = "127.0.0.1:53000";
    let start = Instant::now();

    for n in 1..=10u64 {
        let osc_msg = OscMessage {
            addr: "/cue/title/liveText".to_string(),
            args: vec![OscType::String(format!(
                "{} messages and {:?} elapsed",
                n,
                start.elapsed()
            ))],
        };

        let packet = OscPacket::Message(osc_msg);
        let msg_buf = encoder::encode(&packet)?;

        socket.send_to(&msg_buf, target_addr)?;
        println!("Sent OSC message #{}", n);

        thread::sleep(Duration::from_millis(500));
    }

    println!("Burst completed!");
    Ok(())
}
