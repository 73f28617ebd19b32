//! Two-stage lexical retrieval for question answering.
//!
//! Stage one ranks whole files by TF-IDF against a query; stage two ranks
//! the sentences of the winning file(s) by summed matched-term IDF, with
//! query term density breaking ties. IDF tables are computed fresh for each
//! stage over whatever corpus that stage sees.

pub mod corpus;
pub mod idf;
pub mod rank;
pub mod text;
pub mod tokenizer;

pub use corpus::{Corpus, Document};
pub use idf::compute_idfs;
pub use rank::{top_files, top_sentences};
