//! Character classification for the identifier alphabet.
//!
//! Identifiers are drawn from the Arabic letter block `U+0621..=U+064A`,
//! plus ASCII digits and the underscore. The first character of an
//! identifier may not be a digit.

/// Whether `c` may start an identifier.
pub fn is_ident_start(c: char) -> bool {
    is_arabic_letter(c) || c == '_'
}

/// Whether `c` may continue an identifier after its first character.
pub fn is_ident_continue(c: char) -> bool {
    is_arabic_letter(c) || c == '_' || c.is_ascii_digit()
}

fn is_arabic_letter(c: char) -> bool {
    ('\u{0621}'..='\u{064A}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_arabic_letters() {
        assert!(is_ident_start('ع'));
        assert!(is_ident_continue('ف'));
    }

    #[test]
    fn rejects_digit_as_start() {
        assert!(!is_ident_start('5'));
        assert!(is_ident_continue('5'));
    }

    #[test]
    fn accepts_underscore_everywhere() {
        assert!(is_ident_start('_'));
        assert!(is_ident_continue('_'));
    }

    #[test]
    fn rejects_latin_letters() {
        assert!(!is_ident_start('a'));
        assert!(!is_ident_continue('a'));
    }
}
