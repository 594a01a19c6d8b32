//! Phonetic token types and the script alphabet
//!
//! This module defines the alphabet constants and the `PhoneticToken`
//! enumeration produced from normalized text. Every token knows the name
//! of the symbol image that depicts it.

use serde::{Deserialize, Serialize};

/// Consonant letters; each one anchors its own glyph group
pub const CONSONANTS: &str = "bcdfgjklmnpqrstvwxyz";

/// Vowel-class letters, rendered as diacritics (`h` behaves like a vowel)
pub const VOWELS: &str = "aeiouh";

/// Gemination marker inserted after a collapsed consonant run
pub const REPEAT_MARKER: char = '+';

/// Structural placeholder anchoring vowel-only words
pub const BLANK_PLACEHOLDER: char = '_';

/// Symbol name of the repeat-marker diacritic
pub const REPEAT_SYMBOL: &str = "repeat";

/// Symbol name of the blank placeholder body
pub const BLANK_SYMBOL: &str = "blank";

/// Symbol name drawn for a start or end cap
pub const CAP_SYMBOL: &str = "cap";

/// Symbol name drawn for a start or end connector
pub const CONNECT_SYMBOL: &str = "connect";

/// Punctuation marks, each rendered as its own glyph group
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Punctuation {
    /// Full stop (.)
    Stop,
    /// Comma (,)
    Comma,
    /// Colon (:)
    Colon,
    /// Exclamation mark (!)
    Exclaim,
    /// Question mark (?)
    Question,
}

impl Punctuation {
    pub const ALL: [Punctuation; 5] = [
        Punctuation::Stop,
        Punctuation::Comma,
        Punctuation::Colon,
        Punctuation::Exclaim,
        Punctuation::Question,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Punctuation::Stop),
            ',' => Some(Punctuation::Comma),
            ':' => Some(Punctuation::Colon),
            '!' => Some(Punctuation::Exclaim),
            '?' => Some(Punctuation::Question),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Punctuation::Stop => '.',
            Punctuation::Comma => ',',
            Punctuation::Colon => ':',
            Punctuation::Exclaim => '!',
            Punctuation::Question => '?',
        }
    }

    /// Name of the symbol image for this mark
    pub fn symbol_name(self) -> &'static str {
        match self {
            Punctuation::Stop => "stop",
            Punctuation::Comma => "comma",
            Punctuation::Colon => "colon",
            Punctuation::Exclaim => "exclaim",
            Punctuation::Question => "question",
        }
    }
}

/// A single normalized character of the script
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PhoneticToken {
    /// A consonant letter (glyph body)
    Consonant(char),

    /// A vowel or `h` (diacritic)
    Vowel(char),

    /// Gemination marker following a consonant (diacritic)
    Repeat,

    /// Blank placeholder body
    Blank,

    /// Punctuation body
    Punctuation(Punctuation),
}

impl PhoneticToken {
    /// The character this token was recognized from
    pub fn as_char(&self) -> char {
        match self {
            PhoneticToken::Consonant(c) | PhoneticToken::Vowel(c) => *c,
            PhoneticToken::Repeat => REPEAT_MARKER,
            PhoneticToken::Blank => BLANK_PLACEHOLDER,
            PhoneticToken::Punctuation(p) => p.as_char(),
        }
    }

    /// Name of the symbol image depicting this token
    pub fn symbol_name(&self) -> String {
        match self {
            PhoneticToken::Consonant(c) | PhoneticToken::Vowel(c) => c.to_string(),
            PhoneticToken::Repeat => REPEAT_SYMBOL.to_string(),
            PhoneticToken::Blank => BLANK_SYMBOL.to_string(),
            PhoneticToken::Punctuation(p) => p.symbol_name().to_string(),
        }
    }

    /// Anchors sit at the center of a glyph group
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            PhoneticToken::Consonant(_) | PhoneticToken::Blank | PhoneticToken::Punctuation(_)
        )
    }

    /// Diacritics fill the vowel slots around an anchor
    pub fn is_diacritic(&self) -> bool {
        matches!(self, PhoneticToken::Vowel(_) | PhoneticToken::Repeat)
    }

    /// Separators never connect to their neighbours
    pub fn is_separator(&self) -> bool {
        matches!(self, PhoneticToken::Blank | PhoneticToken::Punctuation(_))
    }
}
