//! Deck and package assembly on top of genanki-rs
//!
//! The `.apkg` binary format (SQLite collection + zipped media) is owned
//! entirely by genanki-rs; this module only assembles the model, notes,
//! and media list and asks the library to write the package.

use std::path::Path;

use genanki_rs::{Deck, Field, Model, Note, Package, Template};
use rand::Rng;
use thiserror::Error;

use super::models::{
    CardSpec, ANSWER_FORMAT, CARD_CSS, MODEL_NAME, QUESTION_FORMAT, TEMPLATE_NAME,
};

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("packaging error: {0}")]
    Packaging(#[from] genanki_rs::Error),

    #[error("refusing to write a deck with no cards")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Accumulates notes and media paths, then writes the `.apkg` package.
pub struct DeckBuilder {
    model: Model,
    deck: Deck,
    media: Vec<String>,
    card_count: usize,
}

impl DeckBuilder {
    pub fn new(deck_name: &str) -> Self {
        Self {
            model: art_model(random_id()),
            deck: Deck::new(
                random_id(),
                deck_name,
                "Art recognition cards generated from an image folder",
            ),
            media: Vec::new(),
            card_count: 0,
        }
    }

    /// Add one card and register its image for media bundling.
    pub fn add_card(&mut self, spec: &CardSpec, image_path: &Path) -> Result<()> {
        let tags: Vec<&str> = spec.tags.iter().map(String::as_str).collect();
        let note = Note::new_with_options(
            self.model.clone(),
            vec![
                spec.image_html.as_str(),
                spec.artist.as_str(),
                spec.artwork.as_str(),
            ],
            None,
            Some(tags),
            None,
        )?;
        self.deck.add_note(note);
        self.media.push(image_path.to_string_lossy().to_string());
        self.card_count += 1;
        Ok(())
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Write the package. The file is only created here, at the very end
    /// of a run, so a failed run leaves no partial output behind.
    pub fn write_to_file(self, output: &Path) -> Result<()> {
        if self.card_count == 0 {
            return Err(DeckError::EmptyDeck);
        }
        let media: Vec<&str> = self.media.iter().map(String::as_str).collect();
        let mut package = Package::new(vec![self.deck], media)?;
        package.write_to_file(&output.to_string_lossy())?;
        Ok(())
    }
}

/// The note model: image question, artist/artwork answer.
fn art_model(model_id: i64) -> Model {
    Model::new(
        model_id,
        MODEL_NAME,
        vec![
            Field::new("Image"),
            Field::new("Artist"),
            Field::new("Artwork"),
        ],
        vec![Template::new(TEMPLATE_NAME)
            .qfmt(QUESTION_FORMAT)
            .afmt(ANSWER_FORMAT)],
    )
    .css(CARD_CSS)
}

/// Random 31-bit id, the range Anki expects for model and deck ids.
fn random_id() -> i64 {
    rand::thread_rng().gen_range((1_i64 << 30)..(1_i64 << 31))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::ParsedEntry;

    fn sample_spec() -> CardSpec {
        let entry = ParsedEntry {
            artist: "Claude Monet".to_string(),
            artwork: "Water Lilies".to_string(),
        };
        CardSpec::new("Claude-Monet-Water-Lilies.jpg", &entry)
    }

    #[test]
    fn test_random_id_range() {
        for _ in 0..100 {
            let id = random_id();
            assert!((1_i64 << 30..1_i64 << 31).contains(&id));
        }
    }

    #[test]
    fn test_add_card_counts() {
        let mut builder = DeckBuilder::new("Test Deck");
        builder
            .add_card(&sample_spec(), Path::new("Claude-Monet-Water-Lilies.jpg"))
            .unwrap();
        assert_eq!(builder.card_count(), 1);
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let builder = DeckBuilder::new("Test Deck");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.apkg");
        assert!(matches!(
            builder.write_to_file(&out),
            Err(DeckError::EmptyDeck)
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_write_package_with_media() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("Claude-Monet-Water-Lilies.jpg");
        std::fs::write(&image, b"not really a jpeg").unwrap();

        let mut builder = DeckBuilder::new("Test Deck");
        builder.add_card(&sample_spec(), &image).unwrap();

        let out = dir.path().join("test.apkg");
        builder.write_to_file(&out).unwrap();
        assert!(out.exists());
    }
}
