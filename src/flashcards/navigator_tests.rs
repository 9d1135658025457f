use super::{
    filter::JlptFilter,
    navigator::{
        Navigator,
        Side,
        StudyMode,
    },
};
use crate::core::VocabCard;

fn card(word: &str, reading: &str, meaning: &str, jlpt: Option<&str>) -> VocabCard {
    VocabCard {
        word: word.to_string(),
        reading: reading.to_string(),
        meaning: meaning.to_string(),
        jlpt: jlpt.map(str::to_string),
        ..Default::default()
    }
}

fn sample_deck() -> Vec<VocabCard> {
    vec![
        card("猫", "ねこ", "cat", Some("jlpt-n5")),
        card("縁側", "えんがわ", "veranda", Some("JLPT-N3")),
        card("黄昏", "たそがれ", "twilight", Some("Non-JLPT Word")),
    ]
}

#[test]
fn both_mode_steps_through_reading_then_meaning() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::Both);

    let steps: Vec<(usize, Side)> =
        (0..4).filter_map(|_| navigator.advance()).collect();

    assert_eq!(
        steps,
        vec![
            (0, Side::Reading),
            (0, Side::Meaning),
            (1, Side::Word),
            (1, Side::Reading),
        ]
    );
}

#[test]
fn full_cycle_returns_to_start_in_every_mode() {
    for mode in [StudyMode::MeaningOnly, StudyMode::ReadingOnly, StudyMode::Both] {
        let mut navigator = Navigator::new(sample_deck());
        navigator.set_mode(mode);

        let total_steps = mode.steps_per_card() * navigator.len();
        for _ in 0..total_steps {
            navigator.advance();
        }

        assert_eq!(navigator.position(), Some((1, 3)), "mode {:?}", mode);
        assert_eq!(navigator.side(), Side::Word, "mode {:?}", mode);
    }
}

#[test]
fn retreat_is_the_exact_inverse_of_advance() {
    for mode in [StudyMode::MeaningOnly, StudyMode::ReadingOnly, StudyMode::Both] {
        let mut navigator = Navigator::new(sample_deck());
        navigator.set_mode(mode);

        // Walk every state in the cycle and check both round trips from it.
        let total_steps = mode.steps_per_card() * navigator.len();
        for step in 0..total_steps {
            let here = (navigator.position(), navigator.side());

            navigator.advance();
            navigator.retreat();
            assert_eq!((navigator.position(), navigator.side()), here, "mode {:?} step {}", mode, step);

            navigator.retreat();
            navigator.advance();
            assert_eq!((navigator.position(), navigator.side()), here, "mode {:?} step {}", mode, step);

            navigator.advance();
        }
    }
}

#[test]
fn retreat_from_first_word_wraps_to_last_cards_final_side() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::Both);

    assert_eq!(navigator.retreat(), Some((2, Side::Meaning)));

    navigator.set_mode(StudyMode::ReadingOnly);
    assert_eq!(navigator.retreat(), Some((1, Side::Reading)));
}

#[test]
fn single_card_wraps_in_meaning_only_mode() {
    let mut navigator = Navigator::new(vec![card("本", "ほん", "book", None)]);
    navigator.set_mode(StudyMode::MeaningOnly);

    assert_eq!(navigator.advance(), Some((0, Side::Meaning)));
    assert_eq!(navigator.advance(), Some((0, Side::Word)));
}

#[test]
fn mode_change_resets_side_but_keeps_index() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::Both);

    for _ in 0..4 {
        navigator.advance();
    }
    assert_eq!((navigator.position(), navigator.side()), (Some((2, 3)), Side::Reading));

    navigator.set_mode(StudyMode::MeaningOnly);
    assert_eq!(navigator.position(), Some((2, 3)));
    assert_eq!(navigator.side(), Side::Word);
}

#[test]
fn filter_keeps_current_card_when_it_still_matches() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::MeaningOnly);

    // Move onto the N3 card and flip it over.
    navigator.advance();
    navigator.advance();
    navigator.advance();
    assert_eq!((navigator.position(), navigator.side()), (Some((2, 3)), Side::Meaning));

    navigator.set_filter(JlptFilter::N3);
    assert_eq!(navigator.position(), Some((1, 1)));
    assert_eq!(navigator.side(), Side::Meaning);
    assert_eq!(navigator.current_display(), Some("veranda"));
}

#[test]
fn filter_resets_position_when_current_card_drops_out() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::Both);

    navigator.advance();
    assert_eq!(navigator.side(), Side::Reading);

    navigator.set_filter(JlptFilter::NonJlpt);
    assert_eq!(navigator.position(), Some((1, 1)));
    assert_eq!(navigator.side(), Side::Word);
    assert_eq!(navigator.current_display(), Some("黄昏"));
}

#[test]
fn empty_filter_result_is_a_no_op_state() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_filter(JlptFilter::N1);

    assert!(navigator.is_empty());
    assert_eq!(navigator.current_display(), None);
    assert_eq!(navigator.position(), None);
    assert_eq!(navigator.advance(), None);
    assert_eq!(navigator.retreat(), None);

    // Widening the filter again brings the deck back from the start.
    navigator.set_filter(JlptFilter::All);
    assert_eq!(navigator.position(), Some((1, 3)));
    assert_eq!(navigator.side(), Side::Word);
}

#[test]
fn empty_deck_never_steps() {
    let mut navigator = Navigator::new(Vec::new());

    assert!(navigator.source_is_empty());
    for mode in [StudyMode::MeaningOnly, StudyMode::ReadingOnly, StudyMode::Both] {
        navigator.set_mode(mode);
        assert_eq!(navigator.advance(), None);
        assert_eq!(navigator.retreat(), None);
        assert_eq!(navigator.current_display(), None);
    }
}

#[test]
fn display_tracks_the_visible_side() {
    let mut navigator = Navigator::new(sample_deck());
    navigator.set_mode(StudyMode::Both);

    assert_eq!(navigator.current_display(), Some("猫"));
    navigator.advance();
    assert_eq!(navigator.current_display(), Some("ねこ"));
    navigator.advance();
    assert_eq!(navigator.current_display(), Some("cat"));
}
