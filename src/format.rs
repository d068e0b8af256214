//! Human-readable sizes and ratios for diagnostic output

const UNITS: [&str; 4] = ["b", "K", "M", "G"];

/// Format a byte count with one decimal place and a single-letter unit.
///
/// Picks the largest unit that keeps the value below 1024, stopping at GiB.
pub fn humanize(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}

/// Percentage of `old` that `new` represents.
///
/// Precision shrinks with magnitude: two decimals below 1, one below 10,
/// none otherwise. A zero-byte original reports "100".
pub fn percent(old: u64, new: u64) -> String {
    if old == 0 {
        return "100".to_string();
    }
    let f = 100.0 * new as f64 / old as f64;
    if f < 1.0 {
        format!("{:.2}", f)
    } else if f < 10.0 {
        format!("{:.1}", f)
    } else {
        format!("{:.0}", f)
    }
}
