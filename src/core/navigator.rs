//! # Deck Navigator
//!
//! Walks a fixed deck one card at a time. The navigator owns a single
//! value, the current index, and writes everything else (which card is
//! visible, which side is up, which controls are enabled) to a
//! [`CardSurface`].
//!
//! ```text
//!   Empty ──(N = 0, terminal for the session)
//!
//!   0 ⇄ 1 ⇄ … ⇄ N-1        next: +1 if index < N-1
//!                          prev: -1 if index > 0
//! ```
//!
//! Flip state is orthogonal to this machine: any card can be flipped at any
//! time, and leaving a card always turns it face-down again.

use log::debug;

/// The two navigation controls the surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// The rendering collaborator. Holds per-card visibility and flip state.
///
/// Indices outside `0..card_count()` must be ignored.
pub trait CardSurface {
    /// Number of cards, in display order.
    fn card_count(&self) -> usize;

    fn set_visible(&mut self, index: usize, visible: bool);

    fn toggle_flipped(&mut self, index: usize);

    fn set_flipped(&mut self, index: usize, flipped: bool);

    fn set_disabled(&mut self, control: Control, disabled: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current_index: usize,
    /// Deck size, read from the surface at `initialize`.
    len: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the visible card, or `None` for an empty deck.
    pub fn current_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current_index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.len == 0 || self.current_index == self.len - 1
    }

    /// Cache the deck size and show the card at the current index.
    pub fn initialize<S: CardSurface + ?Sized>(&mut self, surface: &mut S) {
        self.len = surface.card_count();
        if self.current_index >= self.len {
            self.current_index = 0;
        }
        debug!("Navigator initialized with {} cards", self.len);
        self.show_card(surface, self.current_index);
    }

    /// Make `index` the only visible card, then refresh the controls.
    /// Flip state is left alone.
    pub fn show_card<S: CardSurface + ?Sized>(&self, surface: &mut S, index: usize) {
        for position in 0..self.len {
            surface.set_visible(position, position == index);
        }
        self.update_button_states(surface);
    }

    /// Toggle one card's face. Does not depend on the current index.
    pub fn flip_card<S: CardSurface + ?Sized>(&self, surface: &mut S, index: usize) {
        if index >= self.len {
            debug!("Flip ignored: index {} outside deck of {}", index, self.len);
            return;
        }
        surface.toggle_flipped(index);
    }

    /// Advance one card. Returns `false` when already at the last card.
    pub fn next_card<S: CardSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.len == 0 || self.current_index >= self.len - 1 {
            debug!("Next ignored at boundary (index {}, len {})", self.current_index, self.len);
            return false;
        }
        surface.set_flipped(self.current_index, false);
        self.current_index += 1;
        self.show_card(surface, self.current_index);
        true
    }

    /// Step back one card. Returns `false` when already at the first card.
    pub fn previous_card<S: CardSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.len == 0 || self.current_index == 0 {
            debug!("Previous ignored at boundary (index {}, len {})", self.current_index, self.len);
            return false;
        }
        surface.set_flipped(self.current_index, false);
        self.current_index -= 1;
        self.show_card(surface, self.current_index);
        true
    }

    /// An empty deck disables both controls outright.
    pub fn update_button_states<S: CardSurface + ?Sized>(&self, surface: &mut S) {
        if self.len == 0 {
            surface.set_disabled(Control::Previous, true);
            surface.set_disabled(Control::Next, true);
            return;
        }
        surface.set_disabled(Control::Previous, self.is_first());
        surface.set_disabled(Control::Next, self.is_last());
    }
}
