//! Note model for art recognition cards

use serde::{Deserialize, Serialize};

use crate::filename::ParsedEntry;

pub const MODEL_NAME: &str = "Art History Model";
pub const TEMPLATE_NAME: &str = "Art Recognition";
pub const DEFAULT_DECK_NAME: &str = "Art History Collection";

/// Question side shows only the image.
pub const QUESTION_FORMAT: &str = "{{Image}}";

/// Answer side repeats the image and reveals artist and artwork.
pub const ANSWER_FORMAT: &str = concat!(
    r#"{{FrontSide}}<hr id="answer">"#,
    r#"<div style="text-align: center; font-size: 18px;">"#,
    r#"<strong>{{Artist}}</strong><br><em>{{Artwork}}</em></div>"#,
);

pub const CARD_CSS: &str = "
.card {
    font-family: Arial, sans-serif;
    text-align: center;
}
img {
    max-width: 100%;
    max-height: 400px;
    border-radius: 8px;
    box-shadow: 0 4px 8px rgba(0,0,0,0.1);
}
";

/// Tag applied to every generated card.
pub const COLLECTION_TAG: &str = "art_history";

/// The three note fields derived from one parsed image, plus tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    /// HTML reference to the bundled image file
    pub image_html: String,
    pub artist: String,
    pub artwork: String,
    pub tags: Vec<String>,
}

impl CardSpec {
    pub fn new(filename: &str, entry: &ParsedEntry) -> Self {
        Self {
            image_html: format!("<img src=\"{}\">", filename),
            artist: entry.artist.clone(),
            artwork: entry.artwork.clone(),
            tags: vec![artist_tag(&entry.artist), COLLECTION_TAG.to_string()],
        }
    }
}

/// Per-artist grouping tag: `"Claude Monet"` -> `"art_claude_monet"`.
pub fn artist_tag(artist: &str) -> String {
    format!("art_{}", artist.replace(' ', "_").to_lowercase())
}
