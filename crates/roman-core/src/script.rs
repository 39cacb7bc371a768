//! Character-level Unicode classification for Urdu text.

/// Check the Arabic block (U+0600..U+06FF), which carries every Urdu letter
/// in the default tables.
fn is_arabic_script(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Short-vowel and other combining marks written above or below a letter:
/// harakat (U+064B..U+065F), superscript alef (U+0670) and the Quranic
/// annotation marks (U+06D6..U+06ED).
fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c)
        || c == '\u{0670}'
        || ('\u{06D6}'..='\u{06ED}').contains(&c)
}

/// Arabic-script code point that is not a diacritic, digit or punctuation.
fn is_urdu_letter(c: char) -> bool {
    is_arabic_script(c)
        && !is_diacritic(c)
        && !('\u{0660}'..='\u{0669}').contains(&c)
        && !('\u{06F0}'..='\u{06F9}').contains(&c)
        && !matches!(c, '\u{060C}' | '\u{061B}' | '\u{061F}' | '\u{06D4}')
}

/// Characters that separate words: Unicode `White_Space` plus the ASCII
/// information separators U+001C..U+001F.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Number of characters other than the ASCII space, as shown next to an
/// input box. Tabs and newlines are counted.
pub fn visible_char_count(s: &str) -> usize {
    s.chars().filter(|&c| c != ' ').count()
}

/// True when the string contains at least one Urdu letter.
pub fn has_urdu_letters(s: &str) -> bool {
    s.chars().any(is_urdu_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_arabic_script('ب'));
        assert!(is_arabic_script('ے'));
        assert!(!is_arabic_script('b'));
        assert!(is_urdu_letter('ک'));
        assert!(is_urdu_letter('ء'));
        assert!(!is_urdu_letter('؟'));
        assert!(!is_urdu_letter('۔'));
        assert!(!is_urdu_letter('۳'));
        assert!(!is_urdu_letter('a'));
    }

    #[test]
    fn test_diacritics() {
        assert!(is_diacritic('\u{064E}')); // zabar
        assert!(is_diacritic('\u{0650}')); // zer
        assert!(is_diacritic('\u{0670}'));
        assert!(!is_diacritic('ا'));
        assert!(!is_urdu_letter('\u{064F}'));
    }

    #[test]
    fn test_visible_char_count() {
        assert_eq!(visible_char_count(""), 0);
        assert_eq!(visible_char_count("   "), 0);
        assert_eq!(visible_char_count("  \n\t"), 2);
        assert_eq!(visible_char_count("السلام علیکم"), 11);
        assert_eq!(visible_char_count("کیا\nہے\tاب"), 9);
        assert_eq!(visible_char_count("a\u{00A0}b"), 3);
    }

    #[test]
    fn test_word_separators() {
        for c in [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{A0}', '\u{3000}'] {
            assert!(is_word_separator(c), "{c:?}");
        }
        for c in ['\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}'] {
            assert!(is_word_separator(c), "{c:?}");
        }
        assert!(!is_word_separator('\u{1B}'));
        assert!(!is_word_separator('\u{200C}')); // zero-width non-joiner
        assert!(!is_word_separator('ب'));
    }

    #[test]
    fn test_has_urdu_letters() {
        assert!(has_urdu_letters("hello دوست"));
        assert!(!has_urdu_letters("hello"));
        assert!(!has_urdu_letters("۔؟"));
    }
}
