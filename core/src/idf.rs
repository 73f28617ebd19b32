use crate::corpus::Corpus;
use std::collections::{HashMap, HashSet};

/// Compute inverse document frequencies over a corpus.
///
/// `idf(t) = ln(N / df(t))` where `df(t)` counts documents containing `t`
/// at least once, regardless of how often. The table has an entry for every
/// token appearing in at least one document and no others, so `df` is never
/// zero for any key. A token present in every document gets an IDF of 0.
pub fn compute_idfs(corpus: &Corpus) -> HashMap<String, f64> {
    let total = corpus.len();
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in corpus {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in &doc.tokens {
            if seen.insert(token.as_str()) {
                *df.entry(token.as_str()).or_insert(0) += 1;
            }
        }
    }
    df.into_iter()
        .map(|(token, count)| (token.to_string(), (total as f64 / count as f64).ln()))
        .collect()
}
