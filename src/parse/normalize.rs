//! Text normalization
//!
//! Turns raw user text into the canonical phonetic stream consumed by the
//! segmenter. Each step is a pure string transformation and the whole
//! pass is idempotent.

use super::tokens::CharClass;
use crate::models::elements::{BLANK_PLACEHOLDER, REPEAT_MARKER};

/// Normalize raw text into the canonical phonetic stream
pub fn normalize(raw: &str) -> String {
    let text = strip_unsupported(&raw.to_lowercase());
    let text = collapse_doubles(text.trim());
    let text = if has_anchor(&text) {
        text
    } else {
        map_words(&text, |word| word.chars().any(|c| CharClass::of(c).is_diacritic()))
    };
    let text = map_words(&text, |word| word.chars().all(|c| CharClass::of(c).is_diacritic()));
    let text = space_punctuation(&text);
    let normalized = collapse_whitespace(&text);

    log::debug!("normalize: {:?} -> {:?}", raw, normalized);
    normalized
}

/// Drop characters outside the alphabet so they neither split nor join words
fn strip_unsupported(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let class = CharClass::of(*c);
            class.is_supported() || class == CharClass::Whitespace
        })
        .collect()
}

/// Collapse runs of identical consonants into `consonant + repeat-marker`
fn collapse_doubles(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run: Option<char> = None;
    let mut marked = false;

    for c in text.chars() {
        if run == Some(c) {
            if !marked {
                out.push(REPEAT_MARKER);
                marked = true;
            }
            continue;
        }

        run = (CharClass::of(c) == CharClass::Consonant).then_some(c);
        marked = false;
        out.push(c);
    }

    out
}

fn has_anchor(text: &str) -> bool {
    text.chars().any(|c| CharClass::of(c).is_anchor())
}

/// Apply `balance_word` to every word matching `eligible`
///
/// Words are maximal runs of characters that are neither whitespace nor
/// punctuation, so a trailing mark does not hide a lone vowel word.
fn map_words(text: &str, eligible: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut word = String::new();

    for c in text.chars() {
        match CharClass::of(c) {
            CharClass::Whitespace | CharClass::Punctuation => {
                flush_word(&mut out, &mut word, &eligible);
                out.push(c);
            }
            _ => word.push(c),
        }
    }
    flush_word(&mut out, &mut word, &eligible);

    out
}

fn flush_word(out: &mut String, word: &mut String, eligible: &impl Fn(&str) -> bool) {
    if !word.is_empty() && eligible(word) {
        out.push_str(&balance_word(word));
    } else {
        out.push_str(word);
    }
    word.clear();
}

/// Insert a blank placeholder splitting a word into two balanced halves
///
/// The shorter half goes first: `a` -> `_a`, `aa` -> `a_a`, `aei` -> `a_ei`.
fn balance_word(word: &str) -> String {
    let split = word.chars().count() / 2;
    let mut out = String::with_capacity(word.len() + 1);
    for (i, c) in word.chars().enumerate() {
        if i == split {
            out.push(BLANK_PLACEHOLDER);
        }
        out.push(c);
    }
    out
}

/// Put a space before every punctuation mark not already preceded by one
fn space_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if CharClass::of(c) == CharClass::Punctuation && !previous.is_some_and(char::is_whitespace) {
            out.push(' ');
        }
        out.push(c);
        previous = Some(c);
    }

    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
