use anyhow::{Context, Result};
use clap::Parser;
use sift::{answer, load_files, Config};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Answer a question from a directory of text files", long_about = None)]
struct Cli {
    /// Corpus directory of plain-text files
    corpus: PathBuf,
    /// Number of top files to search for sentences
    #[arg(long = "files", default_value_t = 1)]
    file_matches: usize,
    /// Number of answer sentences to print
    #[arg(long = "sentences", default_value_t = 1)]
    sentence_matches: usize,
    /// Answer a single query without prompting
    #[arg(long)]
    query: Option<String>,
    /// Emit the full result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let files = load_files(&cli.corpus)?;
    tracing::info!(corpus = %cli.corpus.display(), files = files.len(), "corpus loaded");

    let query = match cli.query {
        Some(q) => q,
        None => prompt()?,
    };

    let config = Config {
        file_matches: cli.file_matches,
        sentence_matches: cli.sentence_matches,
    };
    let result = answer(&files, &query, config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for sentence in &result.sentences {
            println!("{sentence}");
        }
    }
    Ok(())
}

fn prompt() -> Result<String> {
    print!("Query: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading query from stdin")?;
    Ok(line.trim().to_string())
}
