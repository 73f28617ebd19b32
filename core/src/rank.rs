use crate::corpus::Corpus;
use std::collections::{HashMap, HashSet};

/// Rank files by TF-IDF against a query and return the top `n` file ids.
///
/// `score(file) = Σ tf(t, file) · idf(t)` over the query terms. Query terms
/// with no IDF entry contribute nothing; they are not an error. The sort is
/// stable on descending score, so equal scores keep corpus insertion order.
pub fn top_files(
    query: &HashSet<String>,
    files: &Corpus,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, f64)> = files
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let mut tf: HashMap<&str, usize> = HashMap::new();
            for token in &doc.tokens {
                *tf.entry(token.as_str()).or_insert(0) += 1;
            }
            let score: f64 = query
                .iter()
                .filter_map(|term| {
                    let count = *tf.get(term.as_str())? as f64;
                    let idf = *idfs.get(term.as_str())?;
                    Some(count * idf)
                })
                .sum();
            (index, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    tracing::debug!(candidates = files.len(), requested = n, "ranked files by tf-idf");

    scored
        .into_iter()
        .take(n)
        .filter_map(|(index, _)| files.get(index).map(|doc| doc.text.clone()))
        .collect()
}

/// Rank sentences against a query and return the top `n` sentence texts.
///
/// Primary key: summed IDF of the distinct query terms present in the
/// sentence (once per term, not per occurrence). Ties fall to query term
/// density, the fraction of the sentence's tokens that are distinct query
/// matches; an empty token list has density 0 rather than dividing by zero.
/// Remaining ties keep corpus insertion order (stable sort).
pub fn top_sentences(
    query: &HashSet<String>,
    sentences: &Corpus,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, f64, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let present: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
            let mut matched_idf = 0.0;
            let mut matches = 0usize;
            for term in query {
                if present.contains(term.as_str()) {
                    matched_idf += idfs.get(term.as_str()).copied().unwrap_or(0.0);
                    matches += 1;
                }
            }
            let density = if doc.tokens.is_empty() {
                0.0
            } else {
                matches as f64 / doc.tokens.len() as f64
            };
            (index, matched_idf, density)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(b.2.total_cmp(&a.2)));
    tracing::debug!(candidates = sentences.len(), requested = n, "ranked sentences");

    scored
        .into_iter()
        .take(n)
        .filter_map(|(index, _, _)| sentences.get(index).map(|doc| doc.text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idf::compute_idfs;

    fn corpus(docs: &[(&str, &[&str])]) -> Corpus {
        let mut c = Corpus::new();
        for (id, tokens) in docs {
            c.push(*id, tokens.iter().map(|t| t.to_string()).collect());
        }
        c
    }

    fn query(terms: &[&str]) -> HashSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    fn idf_table(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(t, v)| (t.to_string(), *v)).collect()
    }

    #[test]
    fn single_file_corpus_is_trivially_top() {
        let files = corpus(&[("a.txt", &["cat", "sat"])]);
        let idfs = compute_idfs(&files);
        assert_eq!(idfs["cat"], 0.0);
        assert_eq!(top_files(&query(&["cat"]), &files, &idfs, 1), vec!["a.txt"]);
    }

    #[test]
    fn term_frequency_weights_file_score() {
        let files = corpus(&[
            ("once.txt", &["dog", "ran"]),
            ("thrice.txt", &["dog", "dog", "dog"]),
        ]);
        let idfs = idf_table(&[("dog", 0.5), ("ran", 1.0)]);
        let top = top_files(&query(&["dog"]), &files, &idfs, 2);
        assert_eq!(top, vec!["thrice.txt", "once.txt"]);
    }

    #[test]
    fn unknown_query_term_contributes_zero() {
        let files = corpus(&[("a.txt", &["cat"]), ("b.txt", &["dog"])]);
        let idfs = idf_table(&[("cat", 0.7), ("dog", 0.7)]);
        let top = top_files(&query(&["cat", "unseen"]), &files, &idfs, 1);
        assert_eq!(top, vec!["a.txt"]);
    }

    #[test]
    fn file_ties_keep_insertion_order() {
        let files = corpus(&[("b.txt", &["cat"]), ("a.txt", &["cat"]), ("c.txt", &["cat"])]);
        let idfs = idf_table(&[("cat", 1.0)]);
        for _ in 0..3 {
            let top = top_files(&query(&["cat"]), &files, &idfs, 3);
            assert_eq!(top, vec!["b.txt", "a.txt", "c.txt"]);
        }
    }

    #[test]
    fn n_larger_than_corpus_returns_all() {
        let files = corpus(&[("a.txt", &["cat"])]);
        let idfs = idf_table(&[("cat", 1.0)]);
        assert_eq!(top_files(&query(&["cat"]), &files, &idfs, 10).len(), 1);
        assert!(top_files(&query(&["cat"]), &Corpus::new(), &idfs, 3).is_empty());
    }

    #[test]
    fn higher_matched_idf_wins_outright() {
        let sentences = corpus(&[("S1", &["cat", "sat", "mat"]), ("S2", &["cat", "dog"])]);
        let idfs = idf_table(&[("cat", 0.5), ("dog", 1.0)]);
        // S1: matched 0.5, density 1/3; S2: matched 1.5, density 1.0
        let top = top_sentences(&query(&["cat", "dog"]), &sentences, &idfs, 1);
        assert_eq!(top, vec!["S2"]);
    }

    #[test]
    fn density_breaks_matched_idf_ties() {
        let sentences = corpus(&[("S4", &["cat", "x", "y", "z"]), ("S3", &["cat"])]);
        let idfs = idf_table(&[("cat", 1.0)]);
        // both matched 1.0; density 0.25 vs 1.0
        let top = top_sentences(&query(&["cat"]), &sentences, &idfs, 2);
        assert_eq!(top, vec!["S3", "S4"]);
    }

    #[test]
    fn matched_idf_counts_each_term_once() {
        let sentences = corpus(&[("rep", &["cat", "cat", "cat"]), ("pair", &["cat", "dog"])]);
        let idfs = idf_table(&[("cat", 1.0), ("dog", 0.5)]);
        // repetition does not inflate matched idf: 1.0 vs 1.5
        let top = top_sentences(&query(&["cat", "dog"]), &sentences, &idfs, 2);
        assert_eq!(top, vec!["pair", "rep"]);
    }

    #[test]
    fn empty_sentence_has_zero_density() {
        let mut sentences = Corpus::new();
        sentences.push("blank", Vec::new());
        sentences.push("hit", vec!["cat".to_string()]);
        let idfs = idf_table(&[("cat", 1.0)]);
        let top = top_sentences(&query(&["cat"]), &sentences, &idfs, 2);
        assert_eq!(top, vec!["hit", "blank"]);
    }

    #[test]
    fn full_ties_are_deterministic() {
        let sentences = corpus(&[("first", &["cat"]), ("second", &["cat"])]);
        let idfs = idf_table(&[("cat", 1.0)]);
        for _ in 0..3 {
            let top = top_sentences(&query(&["cat"]), &sentences, &idfs, 2);
            assert_eq!(top, vec!["first", "second"]);
        }
    }
}
