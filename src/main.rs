use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use pwd_generator::{
    Combination, GenerateError, GenerationMode, Generator, OutputError, Pattern, Pool, Pools,
    WordlistError, get_wordlist_path, load_word_pool, write_passwords_to_path,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_RANDOM_LENGTH: usize = 12;

const AFTER_HELP: &str = "\
Random mode combinations (-c):
 1. Words only
 2. Words and numbers
 3. Words and symbols
 4. Words and numbers and symbols
 5. Numbers only
 6. Symbols only
 7. Numbers and symbols

Examples:
  pwd-generator -w words.txt -l 10 -m r -c 4 -g 100 -o passwords.txt
  pwd-generator -w words.txt -l 15 -m c -p W,N,S,W -g 50 -o custom.txt
  pwd-generator -w words.txt -m c -p W,N,W -g 20 --numbers 1,2,3,4,5,6,7,8,9 --symbols '#,%,$' -o custom.txt";

#[derive(Parser, Debug)]
#[command(version, about = "Pattern-based bulk password generator", long_about = None, after_help = AFTER_HELP)]
struct Args {
    /// Path to the words file (defaults to $PWD_WORDLIST_PATH or ./assets/words.txt)
    #[arg(short, long)]
    wordslist: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Number of passwords to generate
    #[arg(short, long)]
    generate: usize,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Random mode combination type (1-7)
    #[arg(short, long)]
    combination: Option<String>,

    /// Custom mode password pattern (e.g. W,N,S,W)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Custom words (space- or comma-separated)
    #[arg(long, num_args = 1..)]
    words: Option<Vec<String>>,

    /// Custom numbers (space- or comma-separated)
    #[arg(long, num_args = 1..)]
    numbers: Option<Vec<String>>,

    /// Custom symbols (space- or comma-separated)
    #[arg(long, num_args = 1..)]
    symbols: Option<Vec<String>>,

    /// Custom mode: cut passwords to exactly --length instead of padding up to it
    #[arg(long)]
    truncate: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[value(alias = "r")]
    Random,
    #[value(alias = "c")]
    Custom,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(count) => {
            println!(
                "Generated {} passwords and saved to {}",
                count,
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, CliError> {
    let (pattern, mode) = match args.mode {
        Mode::Random => {
            let choice = args.combination.as_deref().ok_or(CliError::Usage(
                "you must specify a combination mode (-c) for random mode",
            ))?;
            let pattern = Combination::from_choice(choice).pattern();
            let length = args.length.unwrap_or(DEFAULT_RANDOM_LENGTH);
            (pattern, GenerationMode::FixedLength(length))
        }
        Mode::Custom => {
            let text = args.pattern.as_deref().ok_or(CliError::Usage(
                "you must specify a password pattern (-p) for custom mode",
            ))?;
            let pattern = Pattern::parse(text)?;
            let mode = match (args.length, args.truncate) {
                (Some(length), true) => GenerationMode::FixedLength(length),
                (None, true) => {
                    return Err(CliError::Usage("--truncate requires --length"));
                }
                (min_length, false) => GenerationMode::ExactPattern { min_length },
            };
            (pattern, mode)
        }
    };

    let pools = build_pools(args)?;
    let generator = Generator::new(pattern, pools, mode)?;

    info!(
        "Generating {} passwords with pattern {} ({:?})",
        args.generate,
        generator.pattern(),
        generator.mode()
    );

    let mut rng = rand::rng();
    let passwords = generator.iter(&mut rng).take(args.generate);
    let count = write_passwords_to_path(&args.output, passwords)?;
    Ok(count)
}

fn build_pools(args: &Args) -> Result<Pools, CliError> {
    let custom = args.mode == Mode::Custom;

    let words = match (&args.words, custom) {
        (Some(words), true) => pool_from_args(words),
        _ => {
            let path = args.wordslist.clone().unwrap_or_else(get_wordlist_path);
            load_word_pool(path)?
        }
    };

    let mut pools = Pools::with_words(words);
    if custom {
        if let Some(numbers) = &args.numbers {
            pools.numbers = pool_from_args(numbers);
        }
        if let Some(symbols) = &args.symbols {
            pools.symbols = pool_from_args(symbols);
        }
    }
    Ok(pools)
}

/// One entry per argument, each argument also split on commas.
fn pool_from_args(values: &[String]) -> Pool {
    Pool::new(values.iter().flat_map(|v| v.split(',')).map(str::trim))
}
