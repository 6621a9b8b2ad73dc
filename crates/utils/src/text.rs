//! String helpers.

/// Uppercases `input` using full Unicode case mapping (`"ß"` becomes `"SS"`).
pub fn example_function(input: &str) -> String {
    input.to_uppercase()
}

/// `true` when `value` has at least one non-whitespace character.
///
/// Whitespace is the ECMAScript `trim` set, so inputs shared with
/// JavaScript callers classify the same way on both sides.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim_matches(is_trimmable).is_empty()
}

/// ECMAScript `WhiteSpace` plus `LineTerminator`.
///
/// Differs from [`char::is_whitespace`]: U+0085 (NEL) is Unicode
/// `White_Space` but is not stripped here, while U+FEFF is.
fn is_trimmable(c: char) -> bool {
    matches!(
        c,
        // TAB, LF, VT, FF, CR, SP
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' '
            // ZWNBSP
            | '\u{feff}'
            // Zs
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            // LS, PS
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_ascii() {
        assert_eq!(example_function("abc"), "ABC");
        assert_eq!(example_function("MiXeD 123"), "MIXED 123");
        assert_eq!(example_function(""), "");
    }

    #[test]
    fn uppercases_unicode() {
        assert_eq!(example_function("straße"), "STRASSE");
        assert_eq!(example_function("éa"), "ÉA");
    }

    #[test]
    fn whitespace_only_is_empty() {
        for s in [
            "",
            "   ",
            "\t\n\r\u{b}\u{c}",
            "\u{a0}\u{2003}",
            "\u{feff}",
            " \u{3000} ",
            "\u{2028}\u{2029}\u{1680}",
        ] {
            assert!(!is_not_empty(s), "{s:?} should count as empty");
        }
    }

    #[test]
    fn any_visible_char_is_not_empty() {
        assert!(is_not_empty("  x "));
        assert!(is_not_empty("x"));
        assert!(is_not_empty("\u{feff}a\u{feff}"));
        // NEL is Unicode whitespace but survives ECMAScript trimming.
        assert!(is_not_empty("\u{85}"));
        assert!(is_not_empty(" \u{1c} "));
    }
}
