use std::net::UdpSocket;
use rosc::{OscPacket, decoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Simple OSC Receiver - listening on 127.0.0.1:53000");
    println!("This will receive the messages cue-slammer sends by default");

    let socket = UdpSocket::bind("127.0.0.1:53000")?;
    println!("Listening for OSC messages...");

    let mut buf = [0u8; rosc::decoder::MTU];

    loop {
        match socket.recv_from(&mut buf) {
            Ok((size, addr)) => {
                match decoder::decode_udp(&buf[..size]) {
                    Ok((_, packet)) => {
                        match packet {
                            OscPacket::Message(msg) => {
                                println!("  Message: {} with {} args", msg.addr, msg.args.len());
                                for (i, arg) in msg.args.iter().enumerate() {
                                    println!("    Arg {}: {:?}", i, arg);
                                }
                            }
                            OscPacket::Bundle(bundle) => {
                                println!("  Bundle with {} elements (from {})", bundle.content.len(), addr);
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("  Failed to decode OSC: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Failed to receive: {}", e);
            }
        }
    }
}
