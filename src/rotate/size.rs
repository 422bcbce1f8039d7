//! Size thresholds come out of config files as "10MB" or "2GiB"; rotation
//! decisions operate on raw byte counts.

/// Decimal units multiply by powers of 1000, binary units by powers of 1024.
const CONVERSION_TABLE: [(&str, i64); 7] = [
    ("B", 1),
    ("KB", 1_000),
    ("MB", 1_000_000),
    ("GB", 1_000_000_000),
    ("KiB", 1 << 10),
    ("MiB", 1 << 20),
    ("GiB", 1 << 30),
];

/// Converts "10MB"/"2GiB"/"512" notation into a byte count.
///
/// The unit is optional (bare numbers are bytes) and case-insensitive, and
/// whitespace around and between number and unit is ignored. Anything else,
/// including negative numbers, is rejected.
///
/// # Errors
/// [`crate::Error::SizeFormat`] when `size` does not match `<digits> [unit]`
/// or the multiplication overflows.
pub fn parse_size(size: &str) -> Result<i64, crate::Error> {
    let malformed = || crate::Error::SizeFormat(size.to_string());

    let trimmed = size.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, rest) = trimmed.split_at(digits_end);
    let value: i64 = digits.parse().map_err(|_| malformed())?;

    let unit = rest.trim();
    if unit.is_empty() {
        return Ok(value);
    }
    let factor = CONVERSION_TABLE
        .iter()
        .find(|(name, _)| unit.eq_ignore_ascii_case(name))
        .map(|(_, factor)| *factor)
        .ok_or_else(malformed)?;
    value.checked_mul(factor).ok_or_else(malformed)
}

/// Renders a byte count with binary units for console output.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", bytes_f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MiB", bytes_f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KiB", bytes_f / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
