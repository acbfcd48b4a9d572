//! # TitleBar Component
//!
//! Top line showing the deck title and where the user is in it.
//!
//! The title text depends on state:
//!
//! 1. **Scored card**: `"Cells | Card 2/5 | score 0.87"`
//! 2. **Unscored card** (or scores hidden): `"Cells | Card 2/5"`
//! 3. **Empty deck**: `"Cells | empty deck"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Position of the visible card: zero-based index and deck length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub len: usize,
}

pub struct TitleBar {
    pub deck_title: String,
    /// `None` for an empty deck.
    pub progress: Option<Progress>,
    /// Already filtered by the `show_score` setting.
    pub score: Option<f32>,
}

impl TitleBar {
    pub fn new(deck_title: String, progress: Option<Progress>, score: Option<f32>) -> Self {
        Self {
            deck_title,
            progress,
            score,
        }
    }

    pub fn text(&self) -> String {
        let position = match self.progress {
            Some(p) => format!("Card {}/{}", p.index + 1, p.len),
            None => "empty deck".to_string(),
        };
        match self.score {
            Some(score) => format!("{} | {} | score {:.2}", self.deck_title, position, score),
            None => format!("{} | {}", self.deck_title, position),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
