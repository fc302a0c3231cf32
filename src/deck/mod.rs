//! Flashcard deck assembly for art recognition
//!
//! This module provides:
//! - the note model (fields, card template, styling)
//! - deck and `.apkg` package assembly on top of genanki-rs

pub mod builder;
pub mod models;

pub use builder::{DeckBuilder, DeckError};
pub use models::{artist_tag, CardSpec, DEFAULT_DECK_NAME};
