//! Upgrade grade extraction from item names.
//!
//! Catalog item names embed their upgrade level as a trailing `(+N)` marker
//! (e.g., `"Bone Crasher (+7)"`). The marker is part of the stored name, not
//! a structured field, so both the matcher and the resolver recover it by
//! scanning the name string.

/// Extract the upgrade grade from an item name.
///
/// Returns the integer captured from the first `(+digits)` occurrence, or
/// `None` when the name carries no grade marker.
///
/// # Examples
///
/// ```
/// use itemdex_core::grade::extract_grade;
///
/// assert_eq!(extract_grade("Bone Crasher (+7)"), Some(7));
/// assert_eq!(extract_grade("Wooden Shield"), None);
/// ```
pub fn extract_grade(name: &str) -> Option<u32> {
    grade_span(name, 0).map(|(_, _, grade)| grade)
}

/// Remove every `(+digits)` marker from a name, together with the
/// whitespace around it.
///
/// Used to form "gradeless names" for comparison: `"Bone Crasher (+7)"`
/// becomes `"Bone Crasher"`.
pub fn strip_grade(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pos = 0;
    while let Some((start, end, _)) = grade_span(name, pos) {
        out.push_str(name[pos..start].trim_end());
        let rest = &name[end..];
        pos = end + (rest.len() - rest.trim_start().len());
    }
    out.push_str(&name[pos..]);
    out
}

/// Locate the next `(+digits)` marker at or after byte offset `from`.
///
/// Returns the marker's byte range and the parsed grade. The marker is pure
/// ASCII, so byte scanning is safe on any UTF-8 name.
pub(crate) fn grade_span(name: &str, from: usize) -> Option<(usize, usize, u32)> {
    let bytes = name.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'(' && bytes.get(i + 1) == Some(&b'+') {
            let digits_start = i + 2;
            let mut digits_end = digits_start;
            while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
                digits_end += 1;
            }
            if digits_end > digits_start && bytes.get(digits_end) == Some(&b')') {
                if let Ok(grade) = name[digits_start..digits_end].parse() {
                    return Some((i, digits_end + 1, grade));
                }
            }
        }
        i += 1;
    }
    None
}
