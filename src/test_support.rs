//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::deck::{Card, Deck};
use crate::core::navigator::{CardSurface, Control};

/// A surface that remembers every write, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    visible: Vec<bool>,
    flipped: Vec<bool>,
    previous_disabled: bool,
    next_disabled: bool,
    log: Vec<String>,
}

impl RecordingSurface {
    pub fn new(card_count: usize) -> Self {
        Self {
            visible: vec![false; card_count],
            flipped: vec![false; card_count],
            previous_disabled: false,
            next_disabled: false,
            log: Vec::new(),
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_disabled,
            Control::Next => self.next_disabled,
        }
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl CardSurface for RecordingSurface {
    fn card_count(&self) -> usize {
        self.visible.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = visible;
            self.log.push(format!("visible {index} {visible}"));
        }
    }

    fn toggle_flipped(&mut self, index: usize) {
        if let Some(slot) = self.flipped.get_mut(index) {
            *slot = !*slot;
            self.log.push(format!("toggle {index}"));
        }
    }

    fn set_flipped(&mut self, index: usize, flipped: bool) {
        if let Some(slot) = self.flipped.get_mut(index) {
            *slot = flipped;
            self.log.push(format!("flipped {index} {flipped}"));
        }
    }

    fn set_disabled(&mut self, control: Control, disabled: bool) {
        match control {
            Control::Previous => self.previous_disabled = disabled,
            Control::Next => self.next_disabled = disabled,
        }
        self.log.push(format!("disabled {control:?} {disabled}"));
    }
}

/// Three cards, A/B/C, with descending scores.
pub fn sample_deck() -> Deck {
    Deck::new(
        "Sample",
        vec![
            Card::new("A front", "A back").with_score(0.9),
            Card::new("B front", "B back").with_score(0.6),
            Card::new("C front", "C back").with_score(0.3),
        ],
    )
}
