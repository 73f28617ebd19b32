use anyhow::{Context, Result};
use serde::Serialize;
use sift_core::text::split_sentences;
use sift_core::tokenizer::{query_tokens, tokenize};
use sift_core::{compute_idfs, top_files, top_sentences, Corpus};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Result counts for the two ranking stages.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Number of top files to carry into the sentence stage.
    pub file_matches: usize,
    /// Number of answer sentences to return.
    pub sentence_matches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1 }
    }
}

/// The outcome of answering one query.
#[derive(Debug, Serialize)]
pub struct Answer {
    pub query: String,
    /// Top-ranked filenames, best first.
    pub files: Vec<String>,
    /// Top-ranked sentences from those files, best first.
    pub sentences: Vec<String>,
}

/// Read every regular file under `dir` as text, keyed by filename.
///
/// Returned sorted by filename so the file corpus has a deterministic
/// insertion order across runs. An empty directory is not an error.
pub fn load_files(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry =
            entry.with_context(|| format!("walking corpus directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes = fs::read(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        files.push((name, String::from_utf8_lossy(&bytes).into_owned()));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Answer a query against loaded corpus files.
///
/// Ranks files by TF-IDF, then ranks the sentences of the winning file(s)
/// by matched IDF and query term density. Each stage computes its own IDF
/// table over its own corpus.
pub fn answer(files: &[(String, String)], query_text: &str, config: Config) -> Answer {
    let query = query_tokens(query_text);

    let mut file_corpus = Corpus::new();
    for (name, text) in files {
        file_corpus.push(name.clone(), tokenize(text));
    }
    let file_idfs = compute_idfs(&file_corpus);
    let top = top_files(&query, &file_corpus, &file_idfs, config.file_matches);
    tracing::info!(files = file_corpus.len(), matched = top.len(), "file stage complete");

    let mut sentence_corpus = Corpus::new();
    for name in &top {
        let Some((_, text)) = files.iter().find(|(n, _)| n == name) else { continue };
        for sentence in split_sentences(text) {
            let tokens = tokenize(&sentence);
            // sentences with no content tokens cannot match anything
            if tokens.is_empty() {
                continue;
            }
            sentence_corpus.push(sentence, tokens);
        }
    }
    let sentence_idfs = compute_idfs(&sentence_corpus);
    let sentences =
        top_sentences(&query, &sentence_corpus, &sentence_idfs, config.sentence_matches);
    tracing::info!(
        sentences = sentence_corpus.len(),
        matched = sentences.len(),
        "sentence stage complete"
    );

    Answer { query: query_text.to_string(), files: top, sentences }
}
