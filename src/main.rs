use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Context, Result};
use hangterm::core::engine::Engine;
use hangterm::games::hangman::{HangmanApp, Session, WordBank};
use tracing::info;

const USAGE: &str = "usage: hangterm [--words <file.json>] [--seed <number>] [--log <file>]";

/// Startup options read from the command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    words: Option<PathBuf>,
    seed: Option<u64>,
    log: Option<PathBuf>,
    help: bool,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("{name} needs a value\n{USAGE}"))
            };
            match arg.as_str() {
                "--words" => options.words = Some(value("--words")?.into()),
                "--log" => options.log = Some(value("--log")?.into()),
                "--seed" => {
                    let raw = value("--seed")?;
                    let seed = raw.parse().with_context(|| format!("invalid seed '{raw}'"))?;
                    options.seed = Some(seed);
                }
                "-h" | "--help" => options.help = true,
                other => bail!("unknown argument '{other}'\n{USAGE}"),
            }
        }

        Ok(options)
    }
}

/// The terminal belongs to the game, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    if let Some(path) = &options.log {
        init_logging(path)?;
    }

    let bank = match &options.words {
        Some(path) => WordBank::load(path)
            .with_context(|| format!("failed to load word bank from {}", path.display()))?,
        None => WordBank::builtin(),
    };
    info!(
        categories = bank.categories().len(),
        words = bank.word_count(),
        "word bank ready"
    );

    let bank = Arc::new(bank);
    let session = match options.seed {
        Some(seed) => Session::seeded(bank, seed),
        None => Session::from_entropy(bank),
    };

    let mut terminal = ratatui::init();
    let result = Engine::new(HangmanApp::new(session)).run(&mut terminal).await;
    ratatui::restore();

    result?.into_session()?;
    Ok(())
}
