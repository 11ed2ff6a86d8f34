use std::fs;
use std::time::Duration;

use serde::Deserialize;

/// Runtime configuration, read from `config.json` in the working directory.
/// Every field is optional; anything missing falls back to the defaults
/// below (QLab on localhost, tight loop).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub osc: OscConfig,
    pub pacing: PacingConfig,
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub target_host: String,
    pub target_port: u16,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            osc: OscConfig::default(),
            pacing: PacingConfig::default(),
            debug: false,
        }
    }
}

impl Default for OscConfig {
    fn default() -> Self {
        OscConfig {
            target_host: "localhost".to_string(),
            // QLab listens for OSC on 53000
            target_port: 53000,
            address: "/cue/title/liveText".to_string(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig { interval_ms: 0 }
    }
}

impl PacingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Load `config.json`, falling back to defaults when the file is absent or
/// unparseable. A broken file is reported but never fatal.
pub fn load(path: &str) -> Config {
    match fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not parse {}: {} (using defaults)", path, e);
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

fn parse(contents: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(contents)
}
