use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};
use rs_lm_core::model::model_config::{ModelConfig, Seeding, DEFAULT_SEED};

/// Trains a character language model on a corpus and prints generated text.
#[derive(Parser, Debug)]
#[command(author, version, about = "Character-level Markov text generator", long_about = None)]
struct Cli {
    /// Number of preceding characters used as context
    window_length: usize,

    /// Text the generation starts from
    initial_text: String,

    /// Length of the generated text, initial text included
    text_length: usize,

    /// 'random' for a different text on every run, anything else for a reproducible one
    mode: String,

    /// UTF-8 corpus file to learn from
    corpus: PathBuf,

    /// Seed of the reproducible mode (ignored in 'random' mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Print every learned context and its distribution before the generated text
    #[arg(long)]
    dump: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    /// Resolves the mode flag and the optional seed override.
    fn seeding(&self) -> Seeding {
        match Seeding::from_mode(&self.mode) {
            Seeding::Fixed(_) => Seeding::Fixed(self.seed.unwrap_or(DEFAULT_SEED)),
            Seeding::Random => Seeding::Random,
        }
    }
}

fn init_logger(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose > 0 || quiet > 0 {
        let level = if quiet > 0 {
            match quiet {
                1 => LevelFilter::Error,
                _ => LevelFilter::Off,
            }
        } else {
            match verbose {
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let mut config = ModelConfig::new(cli.window_length).map_err(|e| anyhow!(e))?;
    config.seeding = cli.seeding();
    info!("Window length {}, seeding {:?}", config.window_length(), config.seeding);

    let mut model = config.build();
    model
        .train_file(&cli.corpus)
        .with_context(|| format!("unable to read corpus {}", cli.corpus.display()))?;
    info!("Learned {} contexts from {}", model.len(), cli.corpus.display());

    if cli.dump {
        print!("{model}");
    }

    println!("{}", model.generate(&cli.initial_text, cli.text_length));

    Ok(())
}
