//! Company code derivation.
//!
//! A code is a compact, lowercase token derived from the company's display
//! name: transliterated to ASCII, stripped of vowels, with word boundaries
//! kept as single hyphens. `"Tesla"` becomes `"tsl"`.
//!
//! Different names can map to the same code; uniqueness is enforced by the
//! company store, never here.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{EngineError, ResultEngine};

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Derive a company code from `name`.
///
/// Pure and deterministic. May return an empty string when the name has no
/// usable characters (e.g. `"Aeiou"`).
///
/// ```rust
/// assert_eq!(engine::generate_code("Tesla"), "tsl");
/// assert_eq!(engine::generate_code("Google Inc."), "ggl-nc");
/// ```
#[must_use]
pub fn generate_code(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.nfkd() {
        if is_combining_mark(ch) || !ch.is_ascii() {
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        if VOWELS.contains(&ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        } else if is_separator(ch) {
            pending_separator = true;
        }
    }

    out
}

/// Validate a client-supplied code and bring it to canonical form.
pub(crate) fn normalize_supplied_code(code: &str) -> ResultEngine<String> {
    let code = code.trim().to_ascii_lowercase();
    if code.starts_with('-')
        || code.ends_with('-')
        || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(EngineError::InvalidCode(format!(
            "'{code}' must contain only letters, digits and inner hyphens"
        )));
    }
    Ok(code)
}

fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || matches!(ch, '-' | '_' | '.' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_vowels_and_lowercases() {
        assert_eq!(generate_code("Tesla"), "tsl");
        assert_eq!(generate_code("Google"), "ggl");
        assert_eq!(generate_code("IBM"), "bm");
        assert_eq!(generate_code("Sony"), "sn");
    }

    #[test]
    fn keeps_word_boundaries_as_single_hyphen() {
        assert_eq!(generate_code("Google Inc."), "ggl-nc");
        assert_eq!(generate_code("  Bank   of  America "), "bnk-f-mrc");
        assert_eq!(generate_code("red_hat / linux"), "rd-ht-lnx");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(generate_code("AT&T"), "tt");
        assert_eq!(generate_code("Yahoo!"), "h");
        assert_eq!(generate_code("3M"), "3m");
    }

    #[test]
    fn transliterates_accents() {
        assert_eq!(generate_code("Crème Brûlée"), "crm-brl");
        assert_eq!(generate_code("Škoda"), "skd");
    }

    #[test]
    fn vowel_only_names_yield_empty_code() {
        assert_eq!(generate_code("Aeiou"), "");
        assert_eq!(generate_code("---"), "");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(generate_code("Tesla Motors"), generate_code("Tesla Motors"));
    }

    #[test]
    fn supplied_codes_are_lowercased_and_checked() {
        assert_eq!(normalize_supplied_code(" GOOGL ").unwrap(), "googl");
        assert_eq!(normalize_supplied_code("brk-b").unwrap(), "brk-b");
        assert!(normalize_supplied_code("goo gl").is_err());
        assert!(normalize_supplied_code("-abc").is_err());
        assert!(normalize_supplied_code("ab$").is_err());
    }
}
