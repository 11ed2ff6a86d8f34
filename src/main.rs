use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

mod config;
mod general;
mod message;
mod remote;

use general::status;
use general::stdin_handler::spawn_stdin_handler;
use remote::dispatcher::{DispatchTarget, Dispatcher};

// Global exit flag, set by the stdin handler
pub static EXIT_FLAG: AtomicBool = AtomicBool::new(false);
// Verbose per-send logging, toggled from config or the console
pub static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static CONFIG: OnceLock<config::Config> = OnceLock::new();

/// Configuration from config.json, loaded on first access.
pub fn get_config() -> &'static config::Config {
    CONFIG.get_or_init(|| config::load("config.json"))
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

fn main() {
    match run() {
        Ok(_) => (),
        Err(err) => println!("Error: {}", err),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = get_config();
    if config.debug {
        DEBUG_ENABLED.store(true, Ordering::SeqCst);
    }

    let target = DispatchTarget {
        host: config.osc.target_host.clone(),
        port: config.osc.target_port,
    };
    // One socket for the whole run; a client per send would leak ephemeral
    // ports at tight-loop rates
    let dispatcher = match Dispatcher::new(&target) {
        Ok(d) => d,
        Err(e) => {
            status::print_dispatch_broken(&target.addr());
            return Err(e.into());
        }
    };
    status::print_dispatch_active(dispatcher.target_addr());

    let stdin_handle = spawn_stdin_handler();

    let interval = config.pacing.interval();
    // Counter and clock are owned here; nothing else reads or writes them
    let start = Instant::now();
    let mut counter: u64 = 0;

    while !EXIT_FLAG.load(Ordering::SeqCst) {
        counter += 1;
        let msg = message::build(&config.osc.address, counter, start.elapsed())?;
        // The dispatcher already logs a failed send; skip it and let the
        // next iteration try again
        let _ = dispatcher.send(&msg);
        dispatcher.pace(interval);
    }

    println!("Closing socket and exiting...");
    // Dropping the dispatcher closes the socket
    drop(dispatcher);
    let _ = stdin_handle.join();

    Ok(())
}
