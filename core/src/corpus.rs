/// One retrievable unit: a whole file in the first ranking stage, a single
/// sentence in the second.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display identifier: the filename at the file stage, the literal
    /// sentence text at the sentence stage.
    pub text: String,
    /// Normalized tokens in original order, duplicates preserved.
    pub tokens: Vec<String>,
}

/// An insertion-ordered collection of documents for one retrieval stage.
///
/// Documents are keyed by position rather than by their text, so two
/// identical sentences stay distinct entries instead of overwriting each
/// other. Insertion order is the deterministic tie-break for ranking.
#[derive(Debug, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, tokens: Vec<String>) {
        self.docs.push(Document { text: text.into(), tokens });
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.docs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
