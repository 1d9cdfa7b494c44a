use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use wsd_lesk::{overlap, Disambiguator, GlossScorer, LeskConfig, Outcome, Score};
use wsd_lexicon::{InMemoryLexicon, Pos};
use wsd_text::EnglishTextProcessor;

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "wsd")]
#[command(about = "Word-sense disambiguation with the Adapted Lesk algorithm", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the sense of a word in a sentence
    Disambiguate(DisambiguateArgs),

    /// Gloss overlap score of two texts
    Score(GlossPairArgs),

    /// Longest shared phrase of two texts
    Overlap(GlossPairArgs),
}

#[derive(Args)]
struct DisambiguateArgs {
    /// JSON lexicon file
    #[arg(long)]
    lexicon: PathBuf,

    /// Target word
    #[arg(long)]
    word: String,

    /// Sentence containing the target word
    #[arg(long)]
    sentence: String,

    /// Part of speech of the target (noun|verb|adj|adv); tagged when omitted
    #[arg(long)]
    pos: Option<Pos>,

    /// Context window radius (overrides config)
    #[arg(long)]
    window: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// File receiving guessed senses (overrides config)
    #[arg(long)]
    guess_log: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GlossPairArgs {
    first: String,

    second: String,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GlossComparison {
    score: Score,
    overlap: Vec<String>,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Disambiguate(args) => run_disambiguate(args),
        Commands::Score(args) => run_compare(args, false),
        Commands::Overlap(args) => run_compare(args, true),
    }
}

fn run_disambiguate(args: DisambiguateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => LeskConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LeskConfig::default(),
    };
    if let Some(radius) = args.window {
        config.window_radius = radius;
    }
    if let Some(path) = args.guess_log {
        config.guess_log = path;
    }
    config.validate()?;

    let lexicon = Arc::new(
        InMemoryLexicon::load(&args.lexicon)
            .with_context(|| format!("Failed to load lexicon {}", args.lexicon.display()))?,
    );
    log::debug!("Lexicon has {} senses", lexicon.len());

    let radius = config.window_radius;
    let wsd = Disambiguator::new(
        Arc::clone(&lexicon),
        EnglishTextProcessor::new(Arc::clone(&lexicon)),
        config,
    );
    let report = wsd
        .analyze(&args.word, &args.sentence, radius, args.pos)
        .with_context(|| format!("Failed to disambiguate '{}'", args.word))?;

    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&report)?);
    }

    if report.outcome == Outcome::Fallback {
        log::warn!("'{}' not found in the sentence; first sense guessed", report.lemma);
    }
    print_stdout(&format!(
        "{}\t{}\t{}",
        report.sense.id, report.score, report.sense.definition
    ))
}

fn run_compare(args: GlossPairArgs, show_overlap: bool) -> Result<()> {
    let text = EnglishTextProcessor::new(InMemoryLexicon::new());
    let scorer = GlossScorer::new(&text);

    let first = scorer.normalize(&args.first)?;
    let second = scorer.normalize(&args.second)?;
    let comparison = GlossComparison {
        score: scorer.score_tokens(&first, &second),
        overlap: overlap(&first, &second),
    };

    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&comparison)?);
    }
    if show_overlap {
        print_stdout(&comparison.overlap.join(" "))
    } else {
        print_stdout(&comparison.score.to_string())
    }
}
