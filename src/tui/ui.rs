use crate::core::navigator::Control;
use crate::tui::component::Component;
use crate::tui::components::controls::button_rect;
use crate::tui::components::{CardFace, CardPanel, Controls, HintBar, Progress, TitleBar};
use crate::tui::deck_view::DeckView;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Display switches taken from the resolved config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub show_score: bool,
    pub show_hints: bool,
}

/// Screen regions from the last draw, kept for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub card: Rect,
    pub controls: Rect,
    pub hints: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, show_hints: bool) -> Self {
        use Constraint::{Length, Min};
        let hints_height = if show_hints { 1 } else { 0 };
        let layout = Layout::vertical([Length(1), Min(3), Length(1), Length(hints_height)]);
        let [title, card, controls, hints] = layout.areas(area);
        Self {
            title,
            card,
            controls,
            hints,
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Card,
    Button(Control),
}

pub fn hit_test(layout: &ScreenLayout, column: u16, row: u16) -> Option<ClickTarget> {
    let pos = Position::new(column, row);
    if layout.card.contains(pos) {
        return Some(ClickTarget::Card);
    }
    [Control::Previous, Control::Next]
        .into_iter()
        .find(|&control| button_rect(layout.controls, control).contains(pos))
        .map(ClickTarget::Button)
}

pub fn draw_ui(frame: &mut Frame, view: &DeckView, options: UiOptions) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area(), options.show_hints);
    let deck = view.deck();

    let visible = view.visible_card();
    let progress = visible.map(|(index, _, _)| Progress {
        index,
        len: deck.len(),
    });
    let score = visible
        .and_then(|(_, card, _)| card.score)
        .filter(|_| options.show_score);
    TitleBar::new(deck.title.clone(), progress, score).render(frame, layout.title);

    let face = match visible {
        Some((_, card, false)) => CardFace::Front(&card.front),
        Some((_, card, true)) => CardFace::Back(&card.back),
        None => CardFace::Empty,
    };
    CardPanel::new(face).render(frame, layout.card);

    Controls::new(
        view.is_disabled(Control::Previous),
        view.is_disabled(Control::Next),
    )
    .render(frame, layout.controls);

    if options.show_hints {
        HintBar.render(frame, layout.hints);
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::deck::Deck;
    use crate::core::navigator::Navigator;
    use crate::test_support::sample_deck;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const OPTIONS: UiOptions = UiOptions {
        show_score: true,
        show_hints: true,
    };

    fn started_view(deck: Deck) -> (Navigator, DeckView) {
        let mut view = DeckView::new(deck);
        let mut nav = Navigator::new();
        update(&mut nav, &mut view, Action::Initialize);
        (nav, view)
    }

    fn draw(view: &DeckView, options: UiOptions) -> (String, ScreenLayout) {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| {
                layout = Some(draw_ui(f, view, options));
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, layout.unwrap())
    }

    #[test]
    fn test_layout_regions_stack_vertically() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 14), true);
        assert_eq!(layout.title, Rect::new(0, 0, 60, 1));
        assert_eq!(layout.card, Rect::new(0, 1, 60, 11));
        assert_eq!(layout.controls, Rect::new(0, 12, 60, 1));
        assert_eq!(layout.hints, Rect::new(0, 13, 60, 1));

        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 14), false);
        assert_eq!(layout.card.height, 12);
        assert_eq!(layout.hints.height, 0);
    }

    #[test]
    fn test_hit_test() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 14), true);
        assert_eq!(hit_test(&layout, 30, 5), Some(ClickTarget::Card));
        assert_eq!(
            hit_test(&layout, 1, 12),
            Some(ClickTarget::Button(Control::Previous))
        );
        assert_eq!(
            hit_test(&layout, 58, 12),
            Some(ClickTarget::Button(Control::Next))
        );
        assert_eq!(hit_test(&layout, 30, 12), None);
        assert_eq!(hit_test(&layout, 30, 0), None);
        assert_eq!(hit_test(&layout, 30, 13), None);
    }

    #[test]
    fn test_draw_first_card_front() {
        let (_, view) = started_view(sample_deck());
        let (text, _) = draw(&view, OPTIONS);
        assert!(text.contains("Sample | Card 1/3 | score 0.90"));
        assert!(text.contains("A front"));
        assert!(!text.contains("A back"));
        assert!(text.contains("Prev"));
        assert!(text.contains("space/enter/f flip"));
    }

    #[test]
    fn test_draw_flipped_card_shows_back() {
        let (mut nav, mut view) = started_view(sample_deck());
        update(&mut nav, &mut view, Action::Next);
        update(&mut nav, &mut view, Action::Flip);
        let (text, _) = draw(&view, OPTIONS);
        assert!(text.contains("Card 2/3"));
        assert!(text.contains("B back"));
        assert!(!text.contains("B front"));
    }

    #[test]
    fn test_draw_respects_display_switches() {
        let (_, view) = started_view(sample_deck());
        let (text, _) = draw(
            &view,
            UiOptions {
                show_score: false,
                show_hints: false,
            },
        );
        assert!(!text.contains("score"));
        assert!(!text.contains("space/enter/f flip"));
    }

    #[test]
    fn test_draw_empty_deck() {
        let (_, view) = started_view(Deck::new("Nothing", vec![]));
        let (text, _) = draw(&view, OPTIONS);
        assert!(text.contains("Nothing | empty deck"));
        assert!(text.contains("No flashcards available."));
    }
}
