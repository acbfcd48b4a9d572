use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const HINTS: &[(&str, &str)] = &[
    ("←/h/p", "prev"),
    ("→/l/n", "next"),
    ("space/enter/f", "flip"),
    ("q/esc", "quit"),
];

/// Key binding reminder shown under the controls.
pub struct HintBar;

impl Component for HintBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (i, (key, what)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {what}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
