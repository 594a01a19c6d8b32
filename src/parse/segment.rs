//! Glyph group segmentation
//!
//! Scans normalized text left to right for non-overlapping matches of
//! "up to three diacritics, one anchor (optionally doubled), up to three
//! diacritics". Each match becomes a glyph group; word-boundary flags are
//! computed once here so later stages never re-scan the text.

use once_cell::sync::Lazy;
use regex::Regex;
use super::tokens::{CharClass, TokenRecognizer};
use crate::errors::SegmentError;
use crate::models::elements::{
    PhoneticToken, Punctuation, BLANK_PLACEHOLDER, CONSONANTS, REPEAT_MARKER, VOWELS,
};
use crate::models::glyph::{GlyphGroup, MAX_CLUSTER};

/// Pattern for one glyph group, built from the alphabet
static GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let diacritics = format!("[{}{}]", VOWELS, regex::escape(&REPEAT_MARKER.to_string()));

    let bases: Vec<char> = CONSONANTS
        .chars()
        .chain(std::iter::once(BLANK_PLACEHOLDER))
        .chain(Punctuation::ALL.iter().map(|p| p.as_char()))
        .collect();

    // Doubled consonants come first so the alternation prefers them
    let doubled = CONSONANTS
        .chars()
        .map(|c| format!("{c}{c}"))
        .collect::<Vec<_>>()
        .join("|");
    let single = bases
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        "{d}{{0,{max}}}(?:{doubled}|{single}){d}{{0,{max}}}",
        d = diacritics,
        max = MAX_CLUSTER,
    );
    Regex::new(&pattern).expect("glyph group pattern is valid")
});

/// Split normalized text into glyph groups
pub fn segment(normalized: &str) -> Result<Vec<GlyphGroup>, SegmentError> {
    let mut groups = Vec::new();
    let mut covered = 0;

    for m in GROUP_PATTERN.find_iter(normalized) {
        check_uncovered(normalized, covered, m.start())?;
        groups.push(build_group(normalized, m.start(), m.end()));
        covered = m.end();
    }
    check_uncovered(normalized, covered, normalized.len())?;

    mark_separator_boundaries(&mut groups);

    let mut groups: Vec<GlyphGroup> = groups
        .into_iter()
        .filter(|g| !g.is_pure_placeholder())
        .collect();

    if groups.is_empty() {
        return Err(SegmentError::EmptyInput);
    }

    for (index, group) in groups.iter_mut().enumerate() {
        group.index = index;
    }
    if let Some(first) = groups.first_mut() {
        first.is_word_start = true;
    }
    if let Some(last) = groups.last_mut() {
        last.is_word_end = true;
    }

    log::debug!(
        "segment: {:?} -> [{}]",
        normalized,
        groups.iter().map(GlyphGroup::text).collect::<Vec<_>>().join(" | ")
    );

    Ok(groups)
}

/// Reject diacritics the pattern could not attach to any anchor
fn check_uncovered(text: &str, from: usize, to: usize) -> Result<(), SegmentError> {
    match text[from..to]
        .char_indices()
        .find(|(_, c)| CharClass::of(*c).is_supported())
    {
        Some((offset, _)) => Err(SegmentError::ClusterTooLong {
            position: from + offset,
            max: MAX_CLUSTER,
        }),
        None => Ok(()),
    }
}

/// Build a group from one match; boundary flags come from the surrounding text
fn build_group(text: &str, start: usize, end: usize) -> GlyphGroup {
    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    let mut anchor: Option<PhoneticToken> = None;

    for c in text[start..end].chars() {
        let Some(token) = TokenRecognizer::recognize(c) else {
            continue;
        };

        match anchor {
            None if token.is_anchor() => anchor = Some(token),
            None => leading.push(token),
            // A doubled anchor reads as gemination
            Some(a) if token == a && trailing.is_empty() => trailing.push(PhoneticToken::Repeat),
            Some(_) => trailing.push(token),
        }
    }

    let preceding = text[..start].chars().next_back();
    let following = text[end..].chars().next();

    GlyphGroup {
        index: 0,
        leading,
        anchor: anchor.unwrap_or(PhoneticToken::Blank),
        trailing,
        is_word_start: preceding.map_or(true, char::is_whitespace),
        is_word_end: following.map_or(true, char::is_whitespace),
        span: (start, end),
    }
}

/// Separators stand alone and cut the words around them
fn mark_separator_boundaries(groups: &mut [GlyphGroup]) {
    for i in 0..groups.len() {
        if !groups[i].is_separator() {
            continue;
        }

        groups[i].is_word_start = true;
        groups[i].is_word_end = true;
        if i > 0 {
            groups[i - 1].is_word_end = true;
        }
        if i + 1 < groups.len() {
            groups[i + 1].is_word_start = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(groups: &[GlyphGroup]) -> Vec<String> {
        groups.iter().map(GlyphGroup::text).collect()
    }

    #[test]
    fn test_trailing_vowels_attach_to_previous_consonant() {
        let groups = segment("tala").unwrap();
        assert_eq!(texts(&groups), vec!["ta", "la"]);
    }

    #[test]
    fn test_leading_vowels_only_at_word_start() {
        let groups = segment("owl").unwrap();
        assert_eq!(texts(&groups), vec!["ow", "l"]);
        assert_eq!(groups[0].leading, vec![PhoneticToken::Vowel('o')]);
        assert_eq!(groups[0].anchor, PhoneticToken::Consonant('w'));
    }

    #[test]
    fn test_cluster_split_between_consonants() {
        let groups = segment("taeiob").unwrap();
        assert_eq!(texts(&groups), vec!["taei", "ob"]);
    }

    #[test]
    fn test_doubled_anchor_becomes_repeat() {
        let groups = segment("tta").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].anchor, PhoneticToken::Consonant('t'));
        assert_eq!(groups[0].trailing, vec![PhoneticToken::Repeat, PhoneticToken::Vowel('a')]);
    }

    #[test]
    fn test_word_boundaries() {
        let groups = segment("tala ta").unwrap();
        let flags: Vec<(bool, bool)> =
            groups.iter().map(|g| (g.is_word_start, g.is_word_end)).collect();
        assert_eq!(flags, vec![(true, false), (false, true), (true, true)]);
    }

    #[test]
    fn test_pure_placeholder_is_dropped_but_splits_words() {
        let groups = segment("ta_ta").unwrap();
        assert_eq!(texts(&groups), vec!["ta", "ta"]);
        assert!(groups[0].is_word_end);
        assert!(groups[1].is_word_start);
        assert_eq!(groups[1].index, 1);
    }

    #[test]
    fn test_punctuation_cuts_words() {
        let groups = segment("ta .la").unwrap();
        assert_eq!(texts(&groups), vec!["ta", ".", "la"]);
        assert!(groups[1].is_word_start && groups[1].is_word_end);
        assert!(groups[2].is_word_start);
    }

    #[test]
    fn test_unsupported_characters_are_skipped() {
        let groups = segment("ta-ta").unwrap();
        assert_eq!(texts(&groups), vec!["ta", "ta"]);
        assert!(!groups[0].is_word_end);
        assert!(!groups[1].is_word_start);
    }

    #[test]
    fn test_doubled_placeholder_is_two_separators() {
        let groups = segment("a__a").unwrap();
        assert_eq!(texts(&groups), vec!["a_", "_a"]);
        assert!(groups.iter().all(|g| !g.trailing.contains(&PhoneticToken::Repeat)));

        let groups = segment("ta__ta").unwrap();
        assert_eq!(texts(&groups), vec!["ta", "ta"]);
        assert!(groups[0].is_word_end && groups[1].is_word_start);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(""), Err(SegmentError::EmptyInput));
        assert_eq!(segment("_"), Err(SegmentError::EmptyInput));
        assert_eq!(segment("123"), Err(SegmentError::EmptyInput));
    }

    #[test]
    fn test_orphaned_cluster_is_rejected() {
        assert_eq!(
            segment("aeioub"),
            Err(SegmentError::ClusterTooLong { position: 0, max: 3 })
        );
        assert!(matches!(segment("tae_iouae"), Err(SegmentError::ClusterTooLong { .. })));
    }

    #[test]
    fn test_spans_cover_match() {
        let normalized = "ot+a la";
        let groups = segment(normalized).unwrap();
        let (start, end) = groups[1].span;
        assert_eq!(&normalized[start..end], "la");
    }
}
