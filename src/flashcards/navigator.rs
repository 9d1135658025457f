use serde::{
    Deserialize,
    Serialize,
};

use super::filter::JlptFilter;
use crate::core::VocabCard;

/// Which face of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Word,
    Reading,
    Meaning,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Word => "Word",
            Side::Reading => "Reading",
            Side::Meaning => "Meaning",
        }
    }
}

/// Which faces a study pass shows per card, and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StudyMode {
    #[default]
    MeaningOnly,
    ReadingOnly,
    Both,
}

impl StudyMode {
    /// The side order for one card. Forward and backward stepping are both
    /// derived from this table, which keeps them exact inverses.
    pub fn sides(&self) -> &'static [Side] {
        match self {
            StudyMode::MeaningOnly => &[Side::Word, Side::Meaning],
            StudyMode::ReadingOnly => &[Side::Word, Side::Reading],
            StudyMode::Both => &[Side::Word, Side::Reading, Side::Meaning],
        }
    }

    pub fn steps_per_card(&self) -> usize {
        self.sides().len()
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyMode::MeaningOnly => "Meanings Only",
            StudyMode::ReadingOnly => "Readings Only",
            StudyMode::Both => "Study Both",
        }
    }
}

/// Tap/key-driven study loop over one book's vocab cards.
///
/// Holds a one-shot snapshot of the cards loaded for a book and a filtered
/// view into it. All stepping is circular; an empty filtered set is a
/// first-class state (`current_card` returns `None`), never an error.
pub struct Navigator {
    cards: Vec<VocabCard>,
    visible: Vec<usize>,
    filter: JlptFilter,
    mode: StudyMode,
    index: usize,
    side: Side,
}

impl Navigator {
    pub fn new(cards: Vec<VocabCard>) -> Self {
        let mut navigator = Self {
            cards,
            visible: Vec::new(),
            filter: JlptFilter::All,
            mode: StudyMode::default(),
            index: 0,
            side: Side::Word,
        };
        navigator.rebuild_visible(None);
        navigator
    }

    pub fn with_settings(cards: Vec<VocabCard>, mode: StudyMode, filter: JlptFilter) -> Self {
        let mut navigator = Self::new(cards);
        navigator.mode = mode;
        navigator.filter = filter;
        navigator.rebuild_visible(None);
        navigator
    }

    /// Step forward one face: through this card's remaining sides, then to
    /// the next card's word face, wrapping past the last card.
    pub fn advance(&mut self) -> Option<(usize, Side)> {
        if self.visible.is_empty() {
            return None;
        }

        let order = self.mode.sides();
        let position = self.side_position(order);
        if position + 1 < order.len() {
            self.side = order[position + 1];
        } else {
            self.index = (self.index + 1) % self.visible.len();
            self.side = Side::Word;
        }

        Some((self.index, self.side))
    }

    /// Exact inverse of [`advance`](Self::advance): back through this card's
    /// sides, then to the previous card's final side, wrapping before index 0.
    pub fn retreat(&mut self) -> Option<(usize, Side)> {
        if self.visible.is_empty() {
            return None;
        }

        let order = self.mode.sides();
        let position = self.side_position(order);
        if position > 0 {
            self.side = order[position - 1];
        } else {
            self.index = if self.index == 0 { self.visible.len() - 1 } else { self.index - 1 };
            self.side = order[order.len() - 1];
        }

        Some((self.index, self.side))
    }

    /// Switching modes restarts the current card at its word face but stays
    /// on the same card.
    pub fn set_mode(&mut self, mode: StudyMode) {
        self.mode = mode;
        self.side = Side::Word;
    }

    /// Re-derives the visible set. The current card is kept when it survives
    /// the new filter; otherwise the position resets to the first card's
    /// word face.
    pub fn set_filter(&mut self, filter: JlptFilter) {
        self.filter = filter;
        let current = self.visible.get(self.index).copied();
        self.rebuild_visible(current);
    }

    pub fn current_card(&self) -> Option<&VocabCard> {
        let card_index = self.visible.get(self.index).copied()?;
        self.cards.get(card_index)
    }

    /// The face text to render, or `None` when no cards match the filter.
    pub fn current_display(&self) -> Option<&str> {
        let card = self.current_card()?;
        Some(match self.side {
            Side::Word => card.word.as_str(),
            Side::Reading => card.reading.as_str(),
            Side::Meaning => card.meaning.as_str(),
        })
    }

    /// 1-based position and total, for the "Card 3 / 40" counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            None
        } else {
            Some((self.index + 1, self.visible.len()))
        }
    }

    /// Cards passing the current filter, in study order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &VocabCard> {
        self.visible.iter().filter_map(|&card_index| self.cards.get(card_index))
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn filter(&self) -> JlptFilter {
        self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// True when the loaded snapshot itself has no cards, filtered or not.
    pub fn source_is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn side_position(&self, order: &[Side]) -> usize {
        // The side is always a member of the current mode's table: every
        // transition assigns from it, and mode changes reset to Word.
        order.iter().position(|side| *side == self.side).unwrap_or(0)
    }

    fn rebuild_visible(&mut self, keep: Option<usize>) {
        self.visible = (0..self.cards.len())
            .filter(|&card_index| self.filter.matches(self.cards[card_index].jlpt.as_deref()))
            .collect();

        match keep.and_then(|card_index| self.visible.iter().position(|&i| i == card_index)) {
            Some(position) => self.index = position,
            None => {
                self.index = 0;
                self.side = Side::Word;
            }
        }
    }
}
