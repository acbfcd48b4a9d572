//! # Card Component
//!
//! Draws the visible card as a bordered panel. The border title names the
//! side that is up (`Front`/`Back`) and the face text is wrapped and
//! centered inside. With no card to show it draws the empty-deck notice.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub const EMPTY_DECK_MESSAGE: &str = "No flashcards available.";
const EMPTY_DECK_HINT: &str = "Load a deck with: flashdeck <DECK.json|DECK.toml>";

pub enum CardFace<'a> {
    Front(&'a str),
    Back(&'a str),
    Empty,
}

pub struct CardPanel<'a> {
    pub face: CardFace<'a>,
}

impl<'a> CardPanel<'a> {
    pub fn new(face: CardFace<'a>) -> Self {
        Self { face }
    }
}

/// Wrap `text` to `width` columns, keeping blank lines from the source.
pub fn wrap_face(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    text.trim()
        .lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Sub-rect of `area` of `height` rows, vertically centered.
fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect::new(area.x, area.y + top, area.width, height)
}

impl Component for CardPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, border_style, text_style, body_text) = match self.face {
            CardFace::Front(text) => (
                " Front ",
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                text,
            ),
            CardFace::Back(text) => (
                " Back ",
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow),
                text,
            ),
            CardFace::Empty => (
                " Empty ",
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
                "",
            ),
        };

        let block = Block::bordered()
            .title(title)
            .border_style(border_style)
            .title_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let wrapped: Vec<Line> = match self.face {
            CardFace::Empty => vec![
                Line::from(EMPTY_DECK_MESSAGE),
                Line::from(""),
                Line::from(EMPTY_DECK_HINT),
            ],
            _ => wrap_face(body_text, inner.width.saturating_sub(2))
                .into_iter()
                .map(Line::from)
                .collect(),
        };

        let body = center_vertically(inner, wrapped.len() as u16);
        let paragraph = Paragraph::new(wrapped)
            .style(text_style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, body);
    }
}
