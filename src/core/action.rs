//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Right? That's `Action::Next`.
//! User clicks the card? That's `Action::Flip`.
//!
//! `update()` applies an action to the navigator and its surface, then
//! returns an `Effect` telling the adapter what to do next. No terminal I/O
//! happens here.
//!
//! ```text
//! Navigator + Surface + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::navigator::{CardSurface, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Session start: cache the deck and show the first card.
    Initialize,
    /// Flip the card currently on screen.
    Flip,
    /// Flip a specific card, e.g. the one under a mouse click.
    FlipAt(usize),
    Next,
    Previous,
    Quit,
}

/// What the adapter should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    Redraw,
    Quit,
}

pub fn update<S: CardSurface + ?Sized>(
    nav: &mut Navigator,
    surface: &mut S,
    action: Action,
) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Initialize => {
            nav.initialize(surface);
            Effect::Redraw
        }
        Action::Flip => match nav.current_index() {
            Some(index) => {
                nav.flip_card(surface, index);
                Effect::Redraw
            }
            None => Effect::None,
        },
        Action::FlipAt(index) => {
            if index < nav.len() {
                nav.flip_card(surface, index);
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Next => redraw_if(nav.next_card(surface)),
        Action::Previous => redraw_if(nav.previous_card(surface)),
        Action::Quit => Effect::Quit,
    }
}

fn redraw_if(changed: bool) -> Effect {
    if changed { Effect::Redraw } else { Effect::None }
}
