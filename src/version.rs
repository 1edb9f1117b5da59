/// Leading character stripped from externally supplied versions (e.g. git tags).
pub const VERSION_PREFIX: char = 'v';

/// Normalizes a raw version identifier.
///
/// Removes exactly one leading [`VERSION_PREFIX`] if present. The remainder is
/// not validated: `v` followed by anything is accepted, and only lowercase `v`
/// is treated as a prefix.
///
/// # Example
/// ```
/// use version_stamp::version::normalize;
///
/// assert_eq!(normalize("v1.2.3"), "1.2.3");
/// assert_eq!(normalize("1.0.0-rc1"), "1.0.0-rc1");
/// ```
pub fn normalize(raw: &str) -> &str {
    raw.strip_prefix(VERSION_PREFIX).unwrap_or(raw)
}
