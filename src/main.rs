use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use birthfate::{BirthDate, Category, Deck, DeckError, FateSession, ParseError, SessionError};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates a birthdate and prints it as `YYYY-MM-DD`
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and `MM/DD/YYYY`, with or without zero padding.
    /// Exits with status 1 when the date is rejected.
    Parse {
        /// The birthdate to validate
        date: String,

        /// Treat this as the current year instead of reading the clock
        #[arg(long, value_name = "YEAR")]
        as_of_year: Option<i32>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Reveals a card for each of Love, Career and Health, then the combined fate
    Read {
        /// Birthdate in any accepted layout
        #[arg(short, long)]
        birthdate: String,

        /// `男性` / `女性` (or `male` / `female`)
        #[arg(short, long)]
        gender: String,

        /// JSON deck to draw from instead of the built-in one
        #[arg(long, value_name = "FILE")]
        deck: Option<PathBuf>,

        /// Seed for a reproducible reading
        #[arg(long)]
        seed: Option<u64>,

        /// Pause between reveals, in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 0)]
        reveal_delay_ms: u64,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
}

type Output = (String, i32);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Parse {
            date,
            as_of_year,
            json,
        } => {
            let result = as_of_year.map_or_else(
                || BirthDate::parse(&date),
                |year| BirthDate::parse_as_of(&date, year),
            );
            Ok(render_parse(&result, json))
        }
        Commands::Read {
            birthdate,
            gender,
            deck,
            seed,
            reveal_delay_ms,
            json,
        } => {
            let deck = match deck {
                Some(path) => Deck::from_path(&path)?,
                None => Deck::builtin()?,
            };
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let delay = Duration::from_millis(reveal_delay_ms);
            read_fate(&birthdate, &gender, &deck, &mut rng, delay, json)
        }
    }
}

fn render_parse(result: &Result<BirthDate, ParseError>, json: bool) -> Output {
    let exit_code = i32::from(result.is_err());
    let output = match (result, json) {
        (Ok(date), false) => date.to_string(),
        (Err(e), false) => format!("invalid: {e}"),
        (Ok(date), true) => json!({ "valid": true, "date": date }).to_string(),
        (Err(e), true) => json!({ "valid": false, "reason": e.to_string() }).to_string(),
    };
    (output, exit_code)
}

fn read_fate(
    birthdate: &str,
    gender: &str,
    deck: &Deck,
    rng: &mut StdRng,
    delay: Duration,
    json: bool,
) -> Result<Output, CliError> {
    let mut session = FateSession::begin(birthdate, gender)?;

    let mut reveals = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        reveals.push(session.reveal(category, deck, rng)?);
    }
    let fate = session.final_fate(rng)?;
    session.acknowledge();

    if json {
        let output = json!({
            "birthdate": session.birthdate(),
            "gender": session.gender(),
            "reveals": reveals,
            "fate": fate,
        });
        return Ok((serde_json::to_string_pretty(&output)?, 0));
    }

    let mut lines = Vec::new();
    for reveal in &reveals {
        lines.push(format!(
            "{} — {}",
            reveal.category,
            reveal.card.display_name()
        ));
        lines.push(format!("  {}", reveal.card.message));
        lines.push(format!("  Luck Score: {}", reveal.score));
        let aura = reveal.aura.map_or_else(String::new, |a| format!(" [{a}]"));
        lines.push(format!("  {}{aura}", reveal.image_path));
    }
    lines.push(String::new());
    lines.push("🌌あなたの運命は".to_owned());
    lines.push(format!(
        "  Love {}  Career {}  Health {}",
        fate.scores.love, fate.scores.career, fate.scores.health
    ));
    lines.push(format!("✨ Total Fate Energy: {}", fate.total));
    lines.push(fate.advice.to_owned());
    Ok((lines.join("\n"), 0))
}
