//! Pure character transforms: ROT13 and ROT47.
//!
//! Both transforms are total over `char`. Characters outside a transform's
//! domain pass through unchanged, so applying one to arbitrary text never
//! fails and never changes line length.

/// Selectable substitution cipher, fixed for the duration of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transform {
    /// Rotate ASCII letters 13 places within their own case's alphabet.
    #[default]
    Rot13,
    /// Rotate printable ASCII (`'!'..='~'`) 47 places within the 94-symbol range.
    Rot47,
}

impl Transform {
    /// Apply the selected transform to one character.
    pub fn apply(self, ch: char) -> char {
        match self {
            Transform::Rot13 => rot13(ch),
            Transform::Rot47 => rot47(ch),
        }
    }
}

/// ROT13: letters rotate 13 places within their case, wrapping. Digits,
/// punctuation, whitespace, and non-ASCII are returned unchanged.
pub fn rot13(ch: char) -> char {
    if ch.is_ascii_alphabetic() {
        let base = if ch.is_ascii_lowercase() { b'a' } else { b'A' };
        ((ch as u8 - base + 13) % 26 + base) as char
    } else {
        ch
    }
}

/// ROT47: graphic ASCII rotates 47 places within `'!'..='~'`, wrapping.
/// Control characters, space, DEL, and non-ASCII are returned unchanged.
pub fn rot47(ch: char) -> char {
    if ch.is_ascii_graphic() {
        ((ch as u8 - b'!' + 47) % 94 + b'!') as char
    } else {
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot13_is_self_inverse_over_letters() {
        for ch in ('a'..='z').chain('A'..='Z') {
            assert_eq!(rot13(rot13(ch)), ch);
        }
    }

    #[test]
    fn rot13_preserves_case_and_wraps() {
        assert_eq!(rot13('a'), 'n');
        assert_eq!(rot13('n'), 'a');
        assert_eq!(rot13('Z'), 'M');
        assert_eq!(rot13('M'), 'Z');
    }

    #[test]
    fn rot13_passes_non_letters_through() {
        for ch in ['0', '9', ' ', '!', '~', '\t', '\u{7f}', 'é'] {
            assert_eq!(rot13(ch), ch);
        }
    }

    #[test]
    fn rot47_is_self_inverse_over_printable_range() {
        for ch in '!'..='~' {
            assert_eq!(rot47(rot47(ch)), ch);
        }
    }

    #[test]
    fn rot47_wraps_at_range_ends() {
        assert_eq!(rot47('!'), 'P');
        assert_eq!(rot47('~'), 'O');
    }

    #[test]
    fn rot47_passes_space_control_and_non_ascii_through() {
        for ch in [' ', '\t', '\n', '\u{7f}', 'é'] {
            assert_eq!(rot47(ch), ch);
        }
    }

    #[test]
    fn default_transform_is_rot13() {
        assert_eq!(Transform::default(), Transform::Rot13);
    }

    #[test]
    fn apply_dispatches_by_tag() {
        assert_eq!(Transform::Rot13.apply('H'), 'U');
        assert_eq!(Transform::Rot47.apply('H'), 'w');
    }
}
