//! Service modules.
//!
//! Lookup and aggregation over an in-memory translation corpus.

pub mod scripture;

pub use scripture::{
    compare_refs, compare_translations, Comparison, Corpus, ScriptureProvider, Translation,
};
