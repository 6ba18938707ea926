//! Classify a URL and print its embed form.
//!
//! Usage: cargo run --example classify_url -- <url> [type-hint]

use folio_core::content::MediaRecord;
use folio_core::media::{self, EmbedOptions};

fn main() {
    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://youtu.be/dQw4w9WgXcQ".to_string());
    let record = match args.next() {
        Some(hint) => MediaRecord::with_hint(url, hint),
        None => MediaRecord::new(url),
    };

    let result = media::resolve(&record, EmbedOptions::expanded());
    println!("kind:  {}", result.kind.label());
    match result.embed_url {
        Some(embed) => println!("embed: {embed}"),
        None if result.kind.requires_embed() => {
            println!("embed: none, render an \"open original\" link instead")
        }
        None => {
            let card = media::link_card(&record.url);
            println!("card:  {} ({:?})", card.domain, card.favicon_url);
        }
    }
}
