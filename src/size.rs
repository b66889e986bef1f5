//! Human-readable size parsing for ini values such as `memory_limit`.
//!
//! Sizes are a magnitude with an optional unit suffix from the ordered list
//! `bkmgtpezy`. Each step up the list multiplies by 1024.

/// Unit suffixes in ascending order of magnitude.
const UNITS: &str = "bkmgtpezy";

/// Convert a size string like `"128M"` or `"1.5g"` into a byte count.
///
/// Never fails: a missing or garbled magnitude counts as `0`, and a missing
/// suffix means the value is already in bytes. Every unit up to `y`
/// (1024^8) fits; only absurd magnitudes saturate.
///
/// ```
/// use zcompat::size::parse_size;
///
/// assert_eq!(parse_size("128M"), 134_217_728);
/// assert_eq!(parse_size("512"), 512);
/// ```
pub fn parse_size(text: &str) -> u128 {
    let unit = text
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .find(|c| UNITS.contains(*c));

    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let magnitude = parse_magnitude(&digits);

    let power = unit.and_then(|u| UNITS.find(u)).unwrap_or(0) as i32;
    let bytes = (magnitude * 1024f64.powi(power)).round();

    // `as` saturates on overflow and maps NaN to 0.
    bytes as u128
}

/// Parse the numeric part, keeping the leading valid prefix of something
/// like `"1.2.3"` rather than giving up on it.
fn parse_magnitude(digits: &str) -> f64 {
    if let Ok(value) = digits.parse::<f64>() {
        return value;
    }

    let mut seen_dot = false;
    let prefix: String = digits
        .chars()
        .take_while(|c| {
            if *c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .collect();

    prefix.parse::<f64>().unwrap_or(0.0)
}
