//! Signed MM:SS display formatting for time offsets

/// Format a signed seconds value as `<sign><MM>:<SS>`
///
/// The sign is `+` for values >= 0 and `-` below, computed on the absolute
/// value. Minutes and seconds are zero-padded to a minimum width of two;
/// offsets of 100 minutes or more render at their natural width. Fractional
/// seconds are truncated, not rounded.
///
/// # Examples
/// ```
/// use sailrace::core::timefmt::format_time_difference;
/// assert_eq!(format_time_difference(-75.0), "-01:15");
/// assert_eq!(format_time_difference(266.0), "+04:26");
/// ```
pub fn format_time_difference(seconds: f64) -> String {
    let abs_seconds = seconds.abs();
    let minutes = (abs_seconds / 60.0).floor() as u64;
    let remaining_seconds = (abs_seconds % 60.0).floor() as u64;
    let sign = if seconds >= 0.0 { '+' } else { '-' };
    format!("{}{:02}:{:02}", sign, minutes, remaining_seconds)
}
