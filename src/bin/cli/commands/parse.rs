use anyhow::Result;

use artdeck::filename::parse_filename;

use crate::OutputFormat;

pub fn run(filename: &str, format: &OutputFormat) -> Result<()> {
    let entry = parse_filename(filename);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "filename": filename,
                "artist": entry.as_ref().map(|e| e.artist.clone()),
                "artwork": entry.as_ref().map(|e| e.artwork.clone()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match entry {
            Some(entry) => {
                println!("Artist: {}", entry.artist);
                println!("Artwork: {}", entry.artwork);
            }
            None => {
                println!("No match: {}", filename);
            }
        },
    }

    Ok(())
}
