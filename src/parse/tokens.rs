//! Character recognition for the script alphabet
//!
//! This module classifies raw characters into the classes the normalizer
//! and segmenter reason about, and converts them into phonetic tokens.

use serde::{Serialize, Deserialize};
use crate::models::elements::{
    PhoneticToken, Punctuation, BLANK_PLACEHOLDER, CONSONANTS, REPEAT_MARKER, VOWELS,
};

/// Character classes of the script alphabet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Consonant,
    Vowel,
    Repeat,
    Blank,
    Punctuation,
    Whitespace,
    Unsupported,
}

impl CharClass {
    /// Classify a single (already lowercased) character
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if CONSONANTS.contains(c) {
            CharClass::Consonant
        } else if VOWELS.contains(c) {
            CharClass::Vowel
        } else if c == REPEAT_MARKER {
            CharClass::Repeat
        } else if c == BLANK_PLACEHOLDER {
            CharClass::Blank
        } else if Punctuation::from_char(c).is_some() {
            CharClass::Punctuation
        } else {
            CharClass::Unsupported
        }
    }

    /// Anchors are the characters a glyph group is built around
    pub fn is_anchor(self) -> bool {
        matches!(self, CharClass::Consonant | CharClass::Blank | CharClass::Punctuation)
    }

    /// Diacritic characters attach to an anchor (vowels, `h`, repeat marker)
    pub fn is_diacritic(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::Repeat)
    }

    /// True for every character the segmenter must account for
    pub fn is_supported(self) -> bool {
        self.is_anchor() || self.is_diacritic()
    }
}

/// Token recognizer for normalized text
pub struct TokenRecognizer;

impl TokenRecognizer {
    /// Convert a character into its phonetic token, if it belongs to the alphabet
    pub fn recognize(c: char) -> Option<PhoneticToken> {
        match CharClass::of(c) {
            CharClass::Consonant => Some(PhoneticToken::Consonant(c)),
            CharClass::Vowel => Some(PhoneticToken::Vowel(c)),
            CharClass::Repeat => Some(PhoneticToken::Repeat),
            CharClass::Blank => Some(PhoneticToken::Blank),
            CharClass::Punctuation => Punctuation::from_char(c).map(PhoneticToken::Punctuation),
            CharClass::Whitespace | CharClass::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_alphabet() {
        assert_eq!(CharClass::of('t'), CharClass::Consonant);
        assert_eq!(CharClass::of('y'), CharClass::Consonant);
        assert_eq!(CharClass::of('a'), CharClass::Vowel);
        assert_eq!(CharClass::of('h'), CharClass::Vowel);
        assert_eq!(CharClass::of('+'), CharClass::Repeat);
        assert_eq!(CharClass::of('_'), CharClass::Blank);
        assert_eq!(CharClass::of('?'), CharClass::Punctuation);
        assert_eq!(CharClass::of('\t'), CharClass::Whitespace);
        assert_eq!(CharClass::of('7'), CharClass::Unsupported);
    }

    #[test]
    fn test_h_is_a_diacritic_not_an_anchor() {
        let class = CharClass::of('h');
        assert!(class.is_diacritic());
        assert!(!class.is_anchor());
    }

    #[test]
    fn test_recognize_tokens() {
        assert_eq!(TokenRecognizer::recognize('k'), Some(PhoneticToken::Consonant('k')));
        assert_eq!(TokenRecognizer::recognize('+'), Some(PhoneticToken::Repeat));
        assert_eq!(
            TokenRecognizer::recognize(','),
            Some(PhoneticToken::Punctuation(Punctuation::Comma))
        );
        assert_eq!(TokenRecognizer::recognize(' '), None);
        assert_eq!(TokenRecognizer::recognize('#'), None);
    }
}
