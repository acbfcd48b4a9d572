//! # TUI Components
//!
//! Stateless, props-based display components. Each receives everything it
//! draws as struct fields and knows nothing about the navigator:
//!
//! - `TitleBar`: deck title, position, score
//! - `CardPanel`: the visible card face, or the empty-deck notice
//! - `Controls`: Previous/Next buttons with their enabled state
//! - `HintBar`: key binding reminder
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs
//! ├── card.rs
//! ├── controls.rs
//! └── hint_bar.rs
//! ```

pub mod card;
pub mod controls;
mod hint_bar;
mod title_bar;

pub use card::{CardFace, CardPanel};
pub use controls::Controls;
pub use hint_bar::HintBar;
pub use title_bar::{Progress, TitleBar};
