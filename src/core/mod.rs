//! # Core Application Logic
//!
//! This module contains Flashdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (cards)         │
//!                    │  • Navigator (index)    │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No I/O    │
//!                    │  beyond file loading.   │
//!                    └───────────┬─────────────┘
//!                                │ CardSurface
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │    TUI     │        │   Tests    │
//!              │  DeckView  │        │ Recording  │
//!              │ (ratatui)  │        │  Surface   │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: `Card` and `Deck`, plus JSON/TOML loading
//! - [`navigator`]: the `Navigator` state machine and the `CardSurface` trait
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod deck;
pub mod navigator;
