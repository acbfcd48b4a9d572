//! # Deck View
//!
//! Presentation state for a loaded deck: which card is on screen, which
//! side each card shows, and whether each navigation control is enabled.
//! This is the TUI's [`CardSurface`]; the navigator writes to it and the
//! components read from it.

use crate::core::deck::{Card, Deck};
use crate::core::navigator::{CardSurface, Control};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardView {
    pub visible: bool,
    pub flipped: bool,
}

#[derive(Debug)]
pub struct DeckView {
    deck: Deck,
    cards: Vec<CardView>,
    previous_disabled: bool,
    next_disabled: bool,
}

impl DeckView {
    pub fn new(deck: Deck) -> Self {
        let cards = vec![CardView::default(); deck.len()];
        Self {
            deck,
            cards,
            previous_disabled: false,
            next_disabled: false,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card_view(&self, index: usize) -> Option<CardView> {
        self.cards.get(index).copied()
    }

    /// The card on screen, if any.
    pub fn visible_index(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.visible)
    }

    pub fn visible_card(&self) -> Option<(usize, &Card, bool)> {
        let index = self.visible_index()?;
        let card = self.deck.get(index)?;
        Some((index, card, self.cards[index].flipped))
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_disabled,
            Control::Next => self.next_disabled,
        }
    }
}

impl CardSurface for DeckView {
    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.visible = visible;
        }
    }

    fn toggle_flipped(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.flipped = !card.flipped;
        }
    }

    fn set_flipped(&mut self, index: usize, flipped: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.flipped = flipped;
        }
    }

    fn set_disabled(&mut self, control: Control, disabled: bool) {
        match control {
            Control::Previous => self.previous_disabled = disabled,
            Control::Next => self.next_disabled = disabled,
        }
    }
}
