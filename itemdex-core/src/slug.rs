//! URL slug encoding for item names.
//!
//! Slugs are the SEO-friendly form of an item name used in
//! `/{game}/{item-slug}` URLs. Encoding is lossy: case, punctuation, and
//! whitespace shape are all discarded, and only the `(+N)` grade marker
//! survives as a `-plus-N` token. Decoding is therefore a best-effort
//! inverse, which is why slug resolution goes through the fuzzy matcher
//! instead of an exact key lookup.

use crate::grade::grade_span;

/// Encode an item name into a URL slug.
///
/// `"Hepa's Bone Crasher (+21)"` becomes `"hepas-bone-crasher-plus-21"`.
pub fn encode(name: &str) -> String {
    let marked = mark_grades(&name.to_lowercase());

    // Strip everything that is not a word character, turn whitespace and
    // hyphen runs into single hyphens, and trim hyphens at the ends.
    let mut slug = String::with_capacity(marked.len());
    for c in marked.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Decode a slug back into an approximate item name.
///
/// Hyphens become spaces and `plus N` tokens become `(+N)` markers. The
/// characters `encode` stripped are gone for good; the result is only close
/// enough for fuzzy matching.
pub fn decode(slug: &str) -> String {
    restore_grades(&slug.replace('-', " "))
}

/// Rewrite every `(+N)` marker (with its surrounding whitespace) into a
/// `-plus-N` token, keeping the marker's digits verbatim.
fn mark_grades(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pos = 0;
    while let Some((start, end, _)) = grade_span(name, pos) {
        out.push_str(name[pos..start].trim_end());
        out.push_str("-plus-");
        // end - 1 is the closing parenthesis, start + 2 skips "(+"
        out.push_str(&name[start + 2..end - 1]);
        let rest = &name[end..];
        pos = end + (rest.len() - rest.trim_start().len());
    }
    out.push_str(&name[pos..]);
    out
}

/// Rewrite every `plus N` occurrence back into a `(+N)` marker.
fn restore_grades(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(at) = rest.find("plus ") {
        let after = &rest[at + "plus ".len()..];
        let digits_len = after
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            // "plus" without a number stays as-is
            out.push_str(&rest[..at + "plus ".len()]);
            rest = after;
            continue;
        }
        out.push_str(&rest[..at]);
        out.push_str("(+");
        out.push_str(&after[..digits_len]);
        out.push(')');
        rest = &after[digits_len..];
    }
    out.push_str(rest);
    out
}
