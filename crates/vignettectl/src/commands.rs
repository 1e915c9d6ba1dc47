//! Command handlers for vignettectl

use anyhow::{Context, Result};
use vignette_common::fetch::ReqwestTransport;
use vignette_common::menagerie::{Animal, Cat, Dog};

/// Target address for the fetch demonstration
const DATA_URL: &str = "https://api.example.com/data";

/// Fetch a JSON document from the demonstration address and print it
pub fn fetch() -> Result<()> {
    let transport = ReqwestTransport::new();

    match vignette_common::fetch::fetch(&transport, DATA_URL).context("Fetch failed")? {
        Some(doc) => {
            let pretty =
                serde_json::to_string_pretty(&doc).context("Failed to format JSON document")?;
            println!("{}", pretty);
        }
        None => println!("Failed to fetch data"),
    }

    Ok(())
}

/// Print the greeting of each animal in the menagerie
pub fn sounds() -> Result<()> {
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new("Buddy", "Canine")),
        Box::new(Cat::new("Whiskers", "Feline")),
    ];

    for animal in &animals {
        println!("{}", animal.make_sound());
    }

    Ok(())
}
