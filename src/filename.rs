//! Filename heuristics for art images
//!
//! Infers an artist name and artwork title from filenames like
//! `Claude-Monet-Water-Lilies--S.jpg`. Segments are produced by splitting
//! on `-` (or `_` when the name contains no usable `-` split), then a
//! layered set of rules decides how many leading segments belong to the
//! artist. Parsing is a pure function; a filename that defeats every rule
//! yields `None` rather than an error.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Artist/artwork pair inferred from a single filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntry {
    pub artist: String,
    pub artwork: String,
}

/// Artist names spanning more than the usual one or two segments, matched
/// by prefix equality against the `-`-rejoined leading segments. Checked
/// in order; the segment count per name is fixed.
const COMPOUND_ARTISTS: &[(&str, usize)] = &[
    ("Albert-Charles-Lebourg", 3),
    ("Albert-Marie-Lebourg", 3),
    ("Diego-Rodriguez-De-Silva-Y-Velazquez", 5),
    ("Diego-Velazquez", 2),
    ("Michelangelo-Merisi", 2),
    ("Caravaggio-Michelangelo-Merisi", 3),
];

/// Words that commonly open an artwork title. A trial artist length is
/// accepted early when the first remaining segment is one of these.
const TITLE_INDICATORS: &[&str] = &[
    "the", "a", "an", "portrait", "self", "untitled", "study", "landscape",
    "still", "life", "scene", "view", "garden", "bridge", "river", "mountain",
    "woman", "man", "child", "family", "christ", "madonna", "saint", "angel",
    "battle", "war", "peace", "death", "birth", "creation", "fall", "rise",
    "morning", "evening", "night", "day", "sunset", "sunrise", "winter",
    "summer", "spring", "autumn", "snow", "rain", "storm", "calm", "wild",
];

/// Artist name lengths to try, in preference order.
const TRIAL_LENGTHS: &[usize] = &[2, 3, 1];

/// Parse a filename into an artist/artwork pair.
///
/// `"Vincent-Van-Gogh-Starry-Night--S.jpg"` -> artist `"Vincent Van"`,
/// artwork `"Gogh Starry Night"` (the two-segment trial wins whenever at
/// least three segments are present and no compound artist matches).
///
/// Returns `None` when the name cannot be split into at least two
/// segments, or when no rule produces a non-empty artwork remainder.
pub fn parse_filename(filename: &str) -> Option<ParsedEntry> {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.to_string());

    let name = strip_suffix_markers(&stem);

    let mut parts: Vec<&str> = name.split('-').collect();
    if parts.len() < 2 {
        parts = name.split('_').collect();
    }
    if parts.len() < 2 {
        return None;
    }

    // Known compound artists win over the generic trials.
    for &(compound, length) in COMPOUND_ARTISTS {
        if parts.len() > length && parts[..length].join("-") == compound {
            return Some(make_entry(&parts[..length], &parts[length..]));
        }
    }

    for &artist_len in TRIAL_LENGTHS {
        if artist_len > parts.len() {
            continue;
        }
        let (artist_parts, artwork_parts) = parts.split_at(artist_len);
        if artwork_parts.is_empty() {
            continue;
        }
        let first = artwork_parts[0].to_lowercase();
        if TITLE_INDICATORS.contains(&first.as_str())
            || artwork_parts.len() > 1
            || artist_len == 2
        {
            return Some(make_entry(artist_parts, artwork_parts));
        }
    }

    // Last resort: two leading segments as the artist.
    if parts.len() >= 3 {
        return Some(make_entry(&parts[..2], &parts[2..]));
    }

    None
}

/// Strip one trailing `--S` marker, then one trailing `-S` marker.
fn strip_suffix_markers(name: &str) -> &str {
    let name = name.strip_suffix("--S").unwrap_or(name);
    name.strip_suffix("-S").unwrap_or(name)
}

fn make_entry(artist_parts: &[&str], artwork_parts: &[&str]) -> ParsedEntry {
    ParsedEntry {
        artist: normalize_label(artist_parts),
        artwork: normalize_label(artwork_parts),
    }
}

/// Join segments with spaces, turn underscores into spaces, and collapse
/// whitespace runs.
fn normalize_label(parts: &[&str]) -> String {
    let joined = parts.join(" ").replace('_', " ");
    whitespace_regex()
        .replace_all(joined.trim(), " ")
        .to_string()
}

fn whitespace_regex() -> Regex {
    Regex::new(r"\s+").unwrap()
}
