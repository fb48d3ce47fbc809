mod session;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use lingo::{render_card, Card, CardStore, Catalog, Evaluator, Grid, MarkedCells};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::session::Session;

/// Runs the reveal side of a bingo event from the terminal.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the card set JSON produced by cardgen
    #[arg(long, default_value = "cards.json")]
    cards: PathBuf,

    /// Path to the catalog JSON
    #[arg(long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Path to the file holding the event state
    #[arg(long, default_value = "session.json")]
    session: PathBuf,

    /// Admin token to present; defaults to the value of ADMIN_TOKEN
    #[arg(long)]
    token: Option<String>,

    /// Grid width (odd)
    #[arg(long, default_value_t = 5)]
    width: u8,

    /// Grid height (odd)
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// RNG seed for the draw
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Reveal one random unrevealed catalog entry
    Draw,
    /// Show the event state: reveals so far, bingo and reach cards
    Status,
    /// Show one card by its lookup key
    Card { key: String },
    /// Restart the event by clearing the session
    Reset,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let grid = Grid::new(args.width, args.height)?;
    let admin_token =
        env::var("ADMIN_TOKEN").context("The ADMIN_TOKEN environment variable must be set")?;
    let token = args.token.unwrap_or_else(|| admin_token.clone());

    let catalog = Catalog::load(&args.catalog)?;
    let store = CardStore::load(&args.cards, grid, admin_token)?;
    let evaluator = Evaluator::new(grid);
    let mut session = Session::load(&args.session)?;
    debug!(cards = store.len(), entries = catalog.len());

    match args.command {
        Command::Draw => draw(
            &mut session,
            &args.session,
            args.seed,
            &catalog,
            &store,
            &evaluator,
            &token,
        ),
        Command::Status => status(&session, &catalog, &store, &evaluator, &token),
        Command::Card { key } => show_card(&session, &store, &evaluator, &token, &key),
        Command::Reset => {
            session.reset();
            session.save(&args.session)?;
            warn!("Cleared all reveals and reported bingos");
            println!("The event has been reset.");
            Ok(())
        }
    }
}

fn draw(
    session: &mut Session,
    session_path: &Path,
    seed: Option<u64>,
    catalog: &Catalog,
    store: &CardStore,
    evaluator: &Evaluator,
    token: &str,
) -> anyhow::Result<()> {
    let cards = store
        .fetch_all(token)
        .context("The admin token was rejected")?;

    // Get a random seed
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let drawn = match session.draw(catalog, &mut rng) {
        Some(drawn) => drawn,
        None => {
            println!("Every catalog entry has been revealed already.");
            return Ok(());
        }
    };
    let entry = catalog
        .get(drawn)
        .context("The drawn entry is missing from the catalog")?;
    info!(number = drawn.display_number(), name = entry.name);

    let hits: Vec<u32> = cards
        .iter()
        .filter(|card| card.contains(drawn))
        .map(|card| card.number)
        .collect();
    let (bingos, reaches) = evaluate_cards(cards, evaluator, session.marked());
    let new_bingos = session.record_bingos(bingos.iter().copied());
    session.save(session_path)?;

    println!("Drawn: No. {} {}", drawn.display_number(), entry.name);
    if !entry.description.is_empty() {
        println!("       {}", entry.description);
    }
    println!("Cards holding it: {}", format_numbers(&hits));
    println!("Reach: {}", format_numbers(&reaches));
    if new_bingos.is_empty() {
        println!("Bingo: {}", format_numbers(&bingos));
    } else {
        info!(cards = format_numbers(&new_bingos), "BINGO");
        println!(
            "Bingo: {} (new: {})",
            format_numbers(&bingos),
            format_numbers(&new_bingos)
        );
    }
    Ok(())
}

fn status(
    session: &Session,
    catalog: &Catalog,
    store: &CardStore,
    evaluator: &Evaluator,
    token: &str,
) -> anyhow::Result<()> {
    let cards = store
        .fetch_all(token)
        .context("The admin token was rejected")?;

    println!("Revealed: {} of {}", session.marked().len(), catalog.len());
    for id in session.marked().iter() {
        let name = catalog
            .get(id)
            .map(|entry| entry.name.as_str())
            .unwrap_or("(not in catalog)");
        let latest = if session.last_drawn() == Some(id) {
            "   <- latest draw"
        } else {
            ""
        };
        println!("  No. {:>3} {}{}", id.display_number(), name, latest);
    }
    let (bingos, reaches) = evaluate_cards(cards, evaluator, session.marked());
    println!("Reach: {}", format_numbers(&reaches));
    println!("Bingo: {}", format_numbers(&bingos));
    Ok(())
}

fn show_card(
    session: &Session,
    store: &CardStore,
    evaluator: &Evaluator,
    token: &str,
    key: &str,
) -> anyhow::Result<()> {
    if store.fetch_all(token).is_none() {
        bail!("The admin token was rejected");
    }
    let card = match store.by_key(key, token) {
        Some(card) => card,
        None => bail!("No card with key '{}'", key),
    };
    let completed = evaluator.completed_line_cells(&card.cells, session.marked());
    let reach = evaluator.reach_cells(&card.cells, session.marked());
    println!(
        "{}",
        render_card(evaluator.grid(), card, session.marked(), &completed, &reach)
    );
    println!("(* revealed, + one away, # bingo line)");
    if !completed.is_empty() {
        println!("BINGO!");
    } else if !reach.is_empty() {
        println!("Reach: one more reveal can complete a line.");
    }
    Ok(())
}

/// Card numbers that currently show a bingo, and those one reveal away
/// from one. A card can be on both lists at once.
fn evaluate_cards(
    cards: &[Card],
    evaluator: &Evaluator,
    marked: &MarkedCells,
) -> (Vec<u32>, Vec<u32>) {
    let mut bingos = Vec::new();
    let mut reaches = Vec::new();
    for card in cards {
        if !evaluator.completed_line_cells(&card.cells, marked).is_empty() {
            bingos.push(card.number);
        }
        if !evaluator.reach_cells(&card.cells, marked).is_empty() {
            reaches.push(card.number);
        }
    }
    (bingos, reaches)
}

fn format_numbers(numbers: &[u32]) -> String {
    if numbers.is_empty() {
        return String::from("none");
    }
    let formatted: Vec<String> = numbers.iter().map(|n| format!("No. {}", n)).collect();
    formatted.join(", ")
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
