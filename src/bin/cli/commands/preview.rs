use std::path::Path;

use anyhow::{Context, Result};

use artdeck::import::preview_art_folder;

use crate::OutputFormat;

pub fn run(folder: &Path, format: &OutputFormat) -> Result<()> {
    let preview = preview_art_folder(folder)
        .with_context(|| format!("Error previewing {}", folder.display()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        OutputFormat::Plain => {
            println!("Images found: {}", preview.image_count);
            println!("Parseable: {}", preview.parsed_count);
            println!("Unparseable: {}", preview.failed_count);

            if !preview.samples.is_empty() {
                println!();
                println!("Sample cards:");
                for sample in &preview.samples {
                    println!("  {} -> {} / {}", sample.filename, sample.artist, sample.artwork);
                }
            }

            if !preview.failed.is_empty() {
                println!();
                println!("Would be skipped:");
                for filename in &preview.failed {
                    println!("  {}", filename);
                }
            }

            for warning in &preview.warnings {
                println!();
                println!("Warning: {}", warning);
            }
        }
    }

    Ok(())
}
