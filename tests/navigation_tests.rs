use flashdeck::core::action::{Action, Effect, update};
use flashdeck::core::deck::{DeckFormat, LoadOptions, parse_deck};
use flashdeck::core::navigator::{CardSurface, Control, Navigator};
use flashdeck::tui::deck_view::DeckView;
use flashdeck::tui::ui::{UiOptions, draw_ui};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

// ============================================================================
// Helper Functions
// ============================================================================

const THREE_CARDS: &str = r#"{
    "title": "Letters",
    "cards": [
        {"question": "A?", "answer": "alpha", "score": 0.4},
        {"question": "B?", "answer": "bravo", "score": 0.8},
        {"question": "C?", "answer": "charlie", "score": 0.6}
    ]
}"#;

fn start(text: &str, format: DeckFormat, options: LoadOptions) -> (Navigator, DeckView) {
    let deck = parse_deck(text, format, "fallback", options).unwrap();
    let mut view = DeckView::new(deck);
    let mut nav = Navigator::new();
    assert_eq!(update(&mut nav, &mut view, Action::Initialize), Effect::Redraw);
    (nav, view)
}

fn screen_text(view: &DeckView) -> String {
    let backend = TestBackend::new(60, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            draw_ui(
                f,
                view,
                UiOptions {
                    show_score: true,
                    show_hints: true,
                },
            );
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn visible_front(view: &DeckView) -> Option<String> {
    view.visible_card().map(|(_, card, _)| card.front.clone())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_three_card_session() {
    let (mut nav, mut view) = start(THREE_CARDS, DeckFormat::Json, LoadOptions::default());

    assert_eq!(visible_front(&view).as_deref(), Some("A?"));
    assert!(view.is_disabled(Control::Previous));
    assert!(!view.is_disabled(Control::Next));

    update(&mut nav, &mut view, Action::Next);
    assert_eq!(visible_front(&view).as_deref(), Some("B?"));
    assert!(!view.is_disabled(Control::Previous));
    assert!(!view.is_disabled(Control::Next));

    // Flip B, then leave it
    update(&mut nav, &mut view, Action::Flip);
    assert!(screen_text(&view).contains("bravo"));
    update(&mut nav, &mut view, Action::Next);
    assert_eq!(visible_front(&view).as_deref(), Some("C?"));
    assert!(view.is_disabled(Control::Next));

    assert_eq!(update(&mut nav, &mut view, Action::Next), Effect::None);
    assert_eq!(visible_front(&view).as_deref(), Some("C?"));

    update(&mut nav, &mut view, Action::Previous);
    let (index, card, flipped) = view.visible_card().unwrap();
    assert_eq!(index, 1);
    assert_eq!(card.front, "B?");
    assert!(!flipped);
    assert!(screen_text(&view).contains("B?"));
}

#[test]
fn test_empty_deck_session() {
    let (mut nav, mut view) = start("[]", DeckFormat::Json, LoadOptions::default());

    assert!(view.visible_card().is_none());
    assert!(view.is_disabled(Control::Previous));
    assert!(view.is_disabled(Control::Next));
    assert_eq!(update(&mut nav, &mut view, Action::Next), Effect::None);
    assert_eq!(update(&mut nav, &mut view, Action::Previous), Effect::None);
    assert_eq!(update(&mut nav, &mut view, Action::Flip), Effect::None);
    assert!(screen_text(&view).contains("No flashcards available."));
}

#[test]
fn test_sorted_and_limited_deck_from_toml() {
    let text = r#"
title = "Scored"

[[cards]]
front = "low"
back = "1"
score = 0.1

[[cards]]
front = "high"
back = "2"
score = 0.9

[[cards]]
front = "mid"
back = "3"
score = 0.5
"#;
    let (mut nav, mut view) = start(
        text,
        DeckFormat::Toml,
        LoadOptions {
            sort_by_score: true,
            limit: Some(2),
        },
    );

    assert_eq!(view.card_count(), 2);
    assert_eq!(visible_front(&view).as_deref(), Some("high"));
    assert!(screen_text(&view).contains("Scored | Card 1/2 | score 0.90"));

    update(&mut nav, &mut view, Action::Next);
    assert_eq!(visible_front(&view).as_deref(), Some("mid"));
    assert!(view.is_disabled(Control::Next));
}

#[test]
fn test_walk_forward_and_back_keeps_single_visible_card() {
    let (mut nav, mut view) = start(THREE_CARDS, DeckFormat::Json, LoadOptions::default());
    let actions = [
        Action::Next,
        Action::Flip,
        Action::Next,
        Action::Next,
        Action::Previous,
        Action::Previous,
        Action::Previous,
        Action::Flip,
        Action::Next,
    ];
    for action in actions {
        update(&mut nav, &mut view, action);
        let visible: Vec<usize> = (0..view.card_count())
            .filter(|&i| view.card_view(i).is_some_and(|c| c.visible))
            .collect();
        assert_eq!(visible, vec![nav.current_index().unwrap()]);
    }
    // Card 0 was flipped, then left: it must be face-down again
    assert!(!view.card_view(0).unwrap().flipped);
}
