use std::path::Path;

use anyhow::{Context, Result};

use artdeck::import::build_art_deck;

use crate::OutputFormat;

pub fn run(folder: &Path, output: &Path, deck_name: &str, format: &OutputFormat) -> Result<()> {
    let report = build_art_deck(folder, output, deck_name)
        .with_context(|| format!("Error generating deck from {}", folder.display()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            println!("Deck generation completed");
            println!("  Images found: {}", report.image_count);
            println!("  Cards created: {}", report.parsed_count);
            println!("  Failed to parse: {}", report.failed_count);
            for filename in &report.failed {
                println!("    {}", filename);
            }
            println!("  Deck saved as: {}", report.output);
            println!();
            println!("How to import:");
            println!("  1. Open Anki");
            println!("  2. Go to File > Import");
            println!("  3. Select: {}", report.output);
            println!("  4. Click Import");
        }
    }

    Ok(())
}
