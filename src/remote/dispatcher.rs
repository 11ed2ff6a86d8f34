use std::net::UdpSocket;
use std::thread;
use std::time::Duration;

use rosc::{encoder, OscMessage, OscPacket};
use thiserror::Error;

// Access global debug flag from crate root
use crate::is_debug_enabled;

/// Network endpoint the dispatcher delivers to. Built once at startup from
/// config and never mutated.
#[derive(Clone, Debug)]
pub struct DispatchTarget {
    pub host: String,
    pub port: u16,
}

impl DispatchTarget {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("OSC encode failed: {0}")]
    Encode(#[from] rosc::OscError),
    #[error("UDP send failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a message to the OSC 1.0 binary wire format.
pub fn encode(msg: &OscMessage) -> Result<Vec<u8>, SendError> {
    let packet = OscPacket::Message(msg.clone());
    Ok(encoder::encode(&packet)?)
}

/// Fire-and-forget OSC sender over UDP.
///
/// Holds one socket for the process lifetime, connected to the target at
/// construction so plain `send()` can be used per datagram. Stateless between
/// sends: a failed send leaves the dispatcher usable for the next one.
pub struct Dispatcher {
    socket: UdpSocket,
    target_addr: String,
}

impl Dispatcher {
    pub fn new(target: &DispatchTarget) -> Result<Self, SendError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        let target_addr = target.addr();
        // Resolves the hostname and pins the peer; failures surface here
        // rather than on the first send
        socket.connect(&target_addr)?;
        Ok(Dispatcher {
            socket,
            target_addr,
        })
    }

    pub fn target_addr(&self) -> &str {
        &self.target_addr
    }

    /// Encode `msg` and transmit it as a single UDP datagram. No reply is
    /// awaited.
    pub fn send(&self, msg: &OscMessage) -> Result<(), SendError> {
        let buf = encode(msg)?;
        match self.socket.send(&buf) {
            Ok(bytes_sent) => {
                if is_debug_enabled() {
                    println!(
                        "[OSC] Sent {} bytes to {}: {}",
                        bytes_sent, self.target_addr, msg.addr
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("[OSC] Failed to send to {}: {}", self.target_addr, e);
                Err(e.into())
            }
        }
    }

    /// Block the calling thread for `interval` between sends. A zero
    /// interval returns immediately (tight loop).
    pub fn pace(&self, interval: Duration) {
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
}
