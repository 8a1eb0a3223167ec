/// Normalize a user-typed channel reference such as `" #general "`.
///
/// Surrounding whitespace and the leading `#` sigil are removed. Channel names
/// cannot contain `#`, so any run of leading sigils is dropped, which keeps the
/// function idempotent.
#[must_use]
pub fn normalize_channel(raw: &str) -> String {
    raw.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
        .to_string()
}
