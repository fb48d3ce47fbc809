use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lingo::{generate_cards, Catalog, Grid};
use rand::{rngs::StdRng, SeedableRng};

/// Generates the card set for one bingo event.
#[derive(Parser)]
struct Args {
    /// How many cards to generate
    #[arg(short, long, default_value_t = 36)]
    count: u32,

    /// Path to the catalog JSON
    #[arg(long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Where to write the card set JSON
    #[arg(short, long, default_value = "cards.json")]
    output: PathBuf,

    /// Grid width (odd)
    #[arg(long, default_value_t = 5)]
    width: u8,

    /// Grid height (odd)
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// RNG seed, for reproducible card sets
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let grid = Grid::new(args.width, args.height)?;
    let catalog = Catalog::load(&args.catalog)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let cards = generate_cards(grid, catalog.len(), args.count, &mut rng)?;
    let file = File::create(&args.output)
        .with_context(|| format!("Could not create card file '{}'", args.output.display()))?;
    serde_json::to_writer(BufWriter::new(file), &cards)?;

    println!("Wrote {} cards to {}", cards.len(), args.output.display());
    for card in &cards {
        println!("  No. {:>3}  key {}", card.number, card.key);
    }
    Ok(())
}
