//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck, and
//! translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms per poll and only
//! redraws when an action reports `Effect::Redraw` or the terminal resizes.
//! Boundary presses (Next on the last card) cost nothing.

mod component;
pub mod components;
pub mod deck_view;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::navigator::{Control, Navigator};
use crate::tui::deck_view::DeckView;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{ClickTarget, ScreenLayout, UiOptions};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub view: DeckView,
    pub options: UiOptions,
    /// Regions from the last draw; `None` before the first frame.
    pub layout: Option<ScreenLayout>,
}

impl TuiState {
    pub fn new(deck: Deck, options: UiOptions) -> Self {
        Self {
            view: DeckView::new(deck),
            options,
            layout: None,
        }
    }
}

/// Turn a TUI event into the action it stands for, if any.
///
/// Clicks resolve against the last drawn layout: a click on the card flips
/// that card, a click on a button fires that button.
pub fn action_for(event: TuiEvent, tui: &TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Flip => Some(Action::Flip),
        TuiEvent::Next => Some(Action::Next),
        TuiEvent::Previous => Some(Action::Previous),
        TuiEvent::Click(column, row) => {
            let layout = tui.layout.as_ref()?;
            match ui::hit_test(layout, column, row)? {
                ClickTarget::Card => tui.view.visible_index().map(Action::FlipAt),
                ClickTarget::Button(Control::Previous) => Some(Action::Previous),
                ClickTarget::Button(Control::Next) => Some(Action::Next),
            }
        }
        TuiEvent::Resize => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let options = UiOptions {
        show_score: config.show_score,
        show_hints: config.show_hints,
    };
    let mut tui = TuiState::new(deck, options);
    let mut nav = Navigator::new();
    update(&mut nav, &mut tui.view, Action::Initialize);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut tui, &mut nav);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    tui: &mut TuiState,
    nav: &mut Navigator,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| {
                tui.layout = Some(ui::draw_ui(f, &tui.view, tui.options));
            })?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };

        // Drain everything pending before the next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            if event == TuiEvent::Resize {
                needs_redraw = true;
                continue;
            }
            let Some(action) = action_for(event, tui) else {
                debug!("Unmapped event: {:?}", event);
                continue;
            };
            match update(nav, &mut tui.view, action) {
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
        }
    }
}
