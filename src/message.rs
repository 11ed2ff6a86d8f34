use std::time::Duration;

use rosc::{OscMessage, OscType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid OSC address: {0:?}")]
    InvalidAddress(String),
}

/// Build the status message sent once per loop iteration.
///
/// The single string argument reads `"<counter> messages and <elapsed>
/// elapsed"`, matching what a receiving console (e.g. QLab's live-text cue)
/// displays verbatim. Pure: no side effects, same inputs give the same
/// message.
pub fn build(address: &str, counter: u64, elapsed: Duration) -> Result<OscMessage, BuildError> {
    validate_address(address)?;
    Ok(OscMessage {
        addr: address.to_string(),
        args: vec![OscType::String(format!(
            "{} messages and {} elapsed",
            counter,
            format_elapsed(elapsed)
        ))],
    })
}

/// Check the basics of OSC 1.0 addressing: non-empty, leading '/', printable
/// ASCII, no spaces. A trailing space (seen in the wild when an address is
/// pasted from a console UI) is rejected like any other space.
fn validate_address(address: &str) -> Result<(), BuildError> {
    let valid = address.starts_with('/')
        && address
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_control() && c != ' ');
    if valid {
        Ok(())
    } else {
        Err(BuildError::InvalidAddress(address.to_string()))
    }
}

/// Render a duration in Go `time.Duration` notation: `150ms`, `1.5s`,
/// `2m30s`. Fractional parts are trimmed of trailing zeros.
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return scaled(nanos, 1_000, "µs");
    }
    if nanos < 1_000_000_000 {
        return scaled(nanos, 1_000_000, "ms");
    }
    let secs = elapsed.as_secs();
    if secs < 60 {
        return scaled(nanos, 1_000_000_000, "s");
    }
    // Go keeps the fractional second in minute-and-above forms ("1m30.5s")
    let mins = secs / 60;
    let secs_part = scaled(nanos % 60_000_000_000, 1_000_000_000, "s");
    if mins < 60 {
        format!("{}m{}", mins, secs_part)
    } else {
        format!("{}h{}m{}", mins / 60, mins % 60, secs_part)
    }
}

fn scaled(nanos: u128, unit: u128, suffix: &str) -> String {
    let value = nanos as f64 / unit as f64;
    let mut s = format!("{:.3}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    format!("{}{}", s, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_formats_counter_and_elapsed() {
        let msg = build("/cue/title/liveText", 3, Duration::from_millis(150)).unwrap();
        assert_eq!(msg.addr, "/cue/title/liveText");
        assert_eq!(
            msg.args,
            vec![OscType::String("3 messages and 150ms elapsed".to_string())]
        );
    }

    #[test]
    fn build_starts_counting_from_zero() {
        let msg = build("/ping", 0, Duration::ZERO).unwrap();
        assert_eq!(
            msg.args,
            vec![OscType::String("0 messages and 0s elapsed".to_string())]
        );
    }

    #[test]
    fn build_rejects_bad_addresses() {
        assert!(matches!(
            build("", 1, Duration::ZERO),
            Err(BuildError::InvalidAddress(_))
        ));
        assert!(matches!(
            build("cue/title", 1, Duration::ZERO),
            Err(BuildError::InvalidAddress(_))
        ));
        assert!(matches!(
            build("/cue title", 1, Duration::ZERO),
            Err(BuildError::InvalidAddress(_))
        ));
        // Trailing space, as in the original QLab script, is malformed too
        assert!(matches!(
            build("/cue/title/liveText ", 1, Duration::ZERO),
            Err(BuildError::InvalidAddress(_))
        ));
        assert!(matches!(
            build("/cue/\u{e9}t\u{e9}", 1, Duration::ZERO),
            Err(BuildError::InvalidAddress(_))
        ));
    }

    #[test]
    fn elapsed_uses_go_duration_notation() {
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
        assert_eq!(format_elapsed(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_elapsed(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250µs");
        assert_eq!(format_elapsed(Duration::from_millis(150)), "150ms");
        assert_eq!(format_elapsed(Duration::from_micros(1_250)), "1.25ms");
        assert_eq!(format_elapsed(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(format_elapsed(Duration::from_secs(42)), "42s");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_elapsed(Duration::from_millis(90_500)), "1m30.5s");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1m0s");
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "1h2m5s");
        assert_eq!(format_elapsed(Duration::from_millis(3_725_250)), "1h2m5.25s");
        assert_eq!(format_elapsed(Duration::from_secs(3_600)), "1h0m0s");
    }
}
