//! # Controls Component
//!
//! The Previous/Next button row. Disabled buttons are drawn dimmed; the
//! navigator already refuses the move, so nothing else is needed here.
//!
//! ```text
//! [◀ Prev]                                  [Next ▶]
//! ```

use crate::core::navigator::Control;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

pub const PREVIOUS_LABEL: &str = "[◀ Prev]";
pub const NEXT_LABEL: &str = "[Next ▶]";

pub struct Controls {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl Controls {
    pub fn new(previous_disabled: bool, next_disabled: bool) -> Self {
        Self {
            previous_disabled,
            next_disabled,
        }
    }
}

/// Where each button sits within the controls row.
pub fn button_rect(area: Rect, control: Control) -> Rect {
    let (label, left_aligned) = match control {
        Control::Previous => (PREVIOUS_LABEL, true),
        Control::Next => (NEXT_LABEL, false),
    };
    let width = (UnicodeWidthStr::width(label) as u16).min(area.width);
    let x = if left_aligned {
        area.x
    } else {
        area.right().saturating_sub(width)
    };
    Rect::new(x, area.y, width, area.height.min(1))
}

fn button_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(PREVIOUS_LABEL, button_style(self.previous_disabled)),
            button_rect(area, Control::Previous),
        );
        frame.render_widget(
            Span::styled(NEXT_LABEL, button_style(self.next_disabled)),
            button_rect(area, Control::Next),
        );
    }
}
