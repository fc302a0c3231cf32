//! Art image folder to Anki deck converter
//!
//! Scans a folder of art images, infers an artist name and artwork title
//! from each filename, and packages the results as an Anki deck (`.apkg`)
//! with one image-recognition card per parsed file.

pub mod deck;
pub mod filename;
pub mod import;

pub use deck::{CardSpec, DeckBuilder, DeckError, DEFAULT_DECK_NAME};
pub use filename::{parse_filename, ParsedEntry};
pub use import::{
    build_art_deck, preview_art_folder, ImportError, ImportPreview, ImportReport,
};
