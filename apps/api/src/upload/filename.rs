//! Upload filename handling.

use unicode_normalization::UnicodeNormalization;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// Reduces a client-supplied filename to a safe ASCII name.
///
/// Directory components are dropped and accented letters are folded to ASCII
/// (NFKD, then combining marks fall away). Whitespace becomes `_`, anything
/// outside `[A-Za-z0-9._-]` is removed, and leading dots or underscores are
/// stripped. May return an empty string.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let folded: String = base.nfkd().collect();
    let cleaned: String = folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_start_matches(['.', '_']).to_string()
}

/// True when the name has an allowed extension (case-insensitive).
pub fn is_allowed(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        _ => false,
    }
}
