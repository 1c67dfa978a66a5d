const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const STEP: u64 = 1_024;

/// Render a byte count with binary (1024) steps, e.g. `4 KB` or `1.5 MB`.
///
/// Whole values drop the fraction; everything else keeps exactly one decimal.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    // Integer log so exact powers of 1024 never land one unit low
    let i = bytes.ilog(STEP) as usize;
    let num = bytes as f64 / (STEP as f64).powi(i as i32);

    if num.fract() == 0.0 {
        format!("{} {}", num as u64, UNITS[i])
    } else {
        format!("{:.1} {}", num, UNITS[i])
    }
}
