// End-to-end scenarios: raw text through normalization, segmentation and layout

use glyph_script::errors::{ScriptError, SegmentError};
use glyph_script::layout::LayoutConfig;
use glyph_script::models::{Angle, PhoneticToken, Punctuation, ResolvedGroup, SideDecoration};
use glyph_script::parse::{normalize, segment};
use glyph_script::pipeline::layout_phrase;

fn layout(text: &str) -> Vec<ResolvedGroup> {
    layout_phrase(text, &LayoutConfig::default()).unwrap()
}

fn texts(groups: &[ResolvedGroup]) -> Vec<String> {
    groups.iter().map(|g| g.group.text()).collect()
}

#[test]
fn test_stop_splits_at_every_consonant() {
    let groups = layout("stop");
    assert_eq!(texts(&groups), vec!["s", "to", "p"]);

    // one word: caps only on the outer ends
    assert_eq!(groups[0].start, SideDecoration::Cap(Angle::Quarter0));
    assert!(!groups[0].end.is_cap());
    assert!(!groups[1].start.is_cap() && !groups[1].end.is_cap());
    assert!(groups[2].end.is_cap());
}

#[test]
fn test_lone_full_stop() {
    assert_eq!(normalize("."), ".");
    let groups = layout(".");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group.anchor, PhoneticToken::Punctuation(Punctuation::Stop));
    assert_eq!(groups[0].body_symbol(), "stop");
    assert!(groups[0].start.is_cap() && groups[0].end.is_cap());
    assert!(groups[0].diacritics.is_empty());
}

#[test]
fn test_blank_text_is_empty_input() {
    for text in ["", "   ", "\t\n"] {
        let err = layout_phrase(text, &LayoutConfig::default()).unwrap_err();
        assert!(
            matches!(err, ScriptError::Segment(SegmentError::EmptyInput)),
            "unexpected error for {:?}: {}",
            text,
            err
        );
    }
}

#[test]
fn test_vowel_only_words_sit_on_blanks() {
    assert_eq!(normalize("aa ee"), "a_a e_e");
    let groups = layout("aa ee");
    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert_eq!(group.group.anchor, PhoneticToken::Blank);
        assert_eq!(group.body_symbol(), "blank");
        assert_eq!(group.diacritics.len(), 2);
    }
}

#[test]
fn test_vowel_word_next_to_consonant_word() {
    assert_eq!(normalize("aa bb"), "a_a b+");
    let groups = layout("aa bb");
    assert_eq!(texts(&groups), vec!["a_a", "b+"]);
    assert_eq!(groups[1].group.trailing, vec![PhoneticToken::Repeat]);
}

#[test]
fn test_two_words_both_capped() {
    let groups = layout("ta ta");
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.start.is_cap() && g.end.is_cap()));

    let second = &groups[1];
    assert_eq!((second.row, second.column), (0, 1));
    assert_eq!(second.angle, Angle::Quarter3);
    assert_eq!(second.start_cap_angle(), Some(Angle::Quarter3));
    assert_eq!(second.end_cap_angle(), Some(Angle::Quarter0));
    assert_eq!(second.start_connect_angle(), None);
}

#[test]
fn test_geminate_consonant() {
    assert_eq!(normalize("tta"), "t+a");
    let groups = layout("tta");
    assert_eq!(groups.len(), 1);
    let symbols: Vec<String> = groups[0].diacritics.iter().map(|d| d.symbol_name()).collect();
    assert_eq!(symbols, vec!["repeat", "a"]);
}

#[test]
fn test_apostrophe_does_not_strand_a_vowel() {
    let groups = layout("I'm here");
    assert_eq!(texts(&groups), vec!["im", "here"]);
    assert!(groups[0].start.is_cap() && groups[0].end.is_cap());
}

#[test]
fn test_digit_does_not_hide_a_word_end() {
    let groups = layout("ta1 la");
    assert_eq!(texts(&groups), vec!["ta", "la"]);
    assert!(groups[0].end.is_cap());
    assert!(groups[1].start.is_cap());
}

#[test]
fn test_hyphenated_vowels_share_a_blank() {
    let groups = layout("a-ha");
    assert_eq!(texts(&groups), vec!["a_ha"]);
    assert_eq!(groups[0].group.anchor, PhoneticToken::Blank);
}

#[test]
fn test_long_vowel_only_word_is_rejected() {
    let err = layout_phrase("aaaaaaa", &LayoutConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Segment(SegmentError::ClusterTooLong { position: 7, max: 3 })
    ));
}

#[test]
fn test_overlong_cluster_is_reported_with_position() {
    let err = layout_phrase("aeioub", &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, ScriptError::Segment(SegmentError::ClusterTooLong { max: 3, .. })));
    assert!(err.to_string().contains("at most 3"));
}

#[test]
fn test_sentence_with_punctuation() {
    let normalized = normalize("Hello, world!");
    let groups = segment(&normalized).unwrap();
    let last = groups.last().unwrap();
    assert_eq!(last.anchor, PhoneticToken::Punctuation(Punctuation::Exclaim));

    let comma = groups
        .iter()
        .position(|g| g.anchor == PhoneticToken::Punctuation(Punctuation::Comma))
        .unwrap();
    assert!(groups[comma - 1].is_word_end);
    assert!(groups[comma + 1].is_word_start);
}
