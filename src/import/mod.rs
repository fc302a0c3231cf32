//! Folder import: from an image folder to a packaged deck
//!
//! Scans a folder (non-recursive) for image files, runs the filename
//! heuristic on each, and either previews the outcome or builds the
//! `.apkg` package. Parsing failures are non-fatal: they are logged,
//! tallied, and reported back to the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;

use crate::deck::{CardSpec, DeckBuilder, DeckError};
use crate::filename::parse_filename;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("art folder does not exist or is not a directory: {}", .0.display())]
    NotAFolder(PathBuf),

    #[error("no image file in {} could be parsed into a card", .0.display())]
    NoCards(PathBuf),
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Image file extensions recognized by the scan (case-insensitive).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// How many parsed samples a preview carries.
const PREVIEW_SAMPLE_LIMIT: usize = 10;

/// Dry-run result: what a build would make of the folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    /// Number of image files found
    pub image_count: usize,
    /// Number of filenames the heuristic can parse
    pub parsed_count: usize,
    /// Number of filenames it cannot
    pub failed_count: usize,
    /// Sample parses for preview (first 10)
    pub samples: Vec<ParsedSample>,
    /// Filenames that failed to parse
    pub failed: Vec<String>,
    /// Warnings during preview
    pub warnings: Vec<String>,
}

/// Preview info for a single parsed filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSample {
    pub filename: String,
    pub artist: String,
    pub artwork: String,
}

/// Outcome of a completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub image_count: usize,
    pub parsed_count: usize,
    pub failed_count: usize,
    /// Filenames that failed to parse
    pub failed: Vec<String>,
    /// Path of the written package
    pub output: String,
}

/// Collect image files directly inside `folder`, sorted by name.
fn scan_images(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ImportError::NotAFolder(folder.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_image(path) {
            images.push(path.to_path_buf());
        }
    }

    images.sort();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map_or(false, |ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Preview an art folder without writing anything.
pub fn preview_art_folder(folder: &Path) -> Result<ImportPreview> {
    let images = scan_images(folder)?;

    let mut samples = Vec::new();
    let mut failed = Vec::new();
    let mut parsed_count = 0;

    for path in &images {
        let filename = file_name_string(path);
        match parse_filename(&filename) {
            Some(entry) => {
                parsed_count += 1;
                if samples.len() < PREVIEW_SAMPLE_LIMIT {
                    samples.push(ParsedSample {
                        filename,
                        artist: entry.artist,
                        artwork: entry.artwork,
                    });
                }
            }
            None => failed.push(filename),
        }
    }

    let mut warnings = Vec::new();
    if images.is_empty() {
        warnings.push("No image files found in folder".to_string());
    }

    Ok(ImportPreview {
        image_count: images.len(),
        parsed_count,
        failed_count: failed.len(),
        samples,
        failed,
        warnings,
    })
}

/// Build the deck package from an art folder.
///
/// Every parseable image becomes one card with the image bundled as
/// package media. Unparseable filenames are logged and tallied. The
/// package file is written only after all cards are assembled; a folder
/// yielding zero cards is an error and produces no output file.
pub fn build_art_deck(folder: &Path, output: &Path, deck_name: &str) -> Result<ImportReport> {
    let images = scan_images(folder)?;
    log::info!("Found {} image files in {}", images.len(), folder.display());

    let mut builder = DeckBuilder::new(deck_name);
    let mut failed = Vec::new();

    for path in &images {
        let filename = file_name_string(path);
        match parse_filename(&filename) {
            Some(entry) => {
                let spec = CardSpec::new(&filename, &entry);
                builder.add_card(&spec, path)?;
            }
            None => {
                log::warn!("Failed to parse filename: {}", filename);
                failed.push(filename);
            }
        }
    }

    let parsed_count = builder.card_count();
    if parsed_count == 0 {
        return Err(ImportError::NoCards(folder.to_path_buf()));
    }

    builder.write_to_file(output)?;
    log::info!("Wrote {} cards to {}", parsed_count, output.display());

    Ok(ImportReport {
        image_count: images.len(),
        parsed_count,
        failed_count: failed.len(),
        failed,
        output: output.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn art_folder() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Claude-Monet-Water-Lilies.jpg");
        touch(dir.path(), "Vincent-Van-Gogh-Starry-Night--S.jpg");
        touch(dir.path(), "Guernica.jpg");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("sub")).unwrap();
        dir
    }

    #[test]
    fn test_preview_counts() {
        let dir = art_folder();
        let preview = preview_art_folder(dir.path()).unwrap();

        assert_eq!(preview.image_count, 3);
        assert_eq!(preview.parsed_count, 2);
        assert_eq!(preview.failed_count, 1);
        assert_eq!(preview.failed, vec!["Guernica.jpg"]);
        assert!(preview.warnings.is_empty());
    }

    #[test]
    fn test_preview_samples_are_parsed_entries() {
        let dir = art_folder();
        let preview = preview_art_folder(dir.path()).unwrap();

        let monet = preview
            .samples
            .iter()
            .find(|s| s.filename == "Claude-Monet-Water-Lilies.jpg")
            .unwrap();
        assert_eq!(monet.artist, "Claude Monet");
        assert_eq!(monet.artwork, "Water Lilies");
    }

    #[test]
    fn test_preview_empty_folder_warns() {
        let dir = tempfile::tempdir().unwrap();
        let preview = preview_art_folder(dir.path()).unwrap();

        assert_eq!(preview.image_count, 0);
        assert_eq!(preview.warnings, vec!["No image files found in folder"]);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            preview_art_folder(&missing),
            Err(ImportError::NotAFolder(_))
        ));
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Edgar-Degas-The-Dance-Class.JPG");
        touch(dir.path(), "Gustav-Klimt-The-Kiss.PnG");

        let preview = preview_art_folder(dir.path()).unwrap();
        assert_eq!(preview.image_count, 2);
        assert_eq!(preview.parsed_count, 2);
    }

    #[test]
    fn test_build_writes_package_and_report() {
        let dir = art_folder();
        let out = dir.path().join("deck.apkg");

        let report = build_art_deck(dir.path(), &out, "Test Collection").unwrap();

        assert_eq!(report.image_count, 3);
        assert_eq!(report.parsed_count, 2);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.failed, vec!["Guernica.jpg"]);
        assert!(out.exists());
    }

    #[test]
    fn test_build_with_no_parseable_images_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Guernica.jpg");
        let out = dir.path().join("deck.apkg");

        assert!(matches!(
            build_art_deck(dir.path(), &out, "Test Collection"),
            Err(ImportError::NoCards(_))
        ));
        assert!(!out.exists());
    }
}
