//! Built-in demonstration corpus.
//!
//! Two Japanese translations with deliberately partial coverage, so the
//! default comparison shows both stored text and the placeholder.

use crate::services::{Corpus, Translation};

/// The sample corpus: `meiji` then `shinkai`.
pub fn corpus() -> Corpus {
    Corpus::new()
        .with(
            Translation::new("meiji")
                .with_verse("John 3:16", "神は、そのひとり子を賜うほどにこの世を愛し給えり...")
                .with_verse("Psalm 23:1", "主はわが牧者なり..."),
        )
        .with(
            Translation::new("shinkai")
                .with_verse(
                    "John 3:16",
                    "神は実に、そのひとり子をお与えになったほどに世を愛された...",
                )
                .with_verse("Psalm 23:1", "主は私の羊飼い。私は乏しいことがありません..."),
        )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::services::ScriptureProvider;

    #[test]
    fn sample_has_both_translations_in_order() {
        let corpus = corpus();
        assert_eq!(corpus.names(), ["meiji", "shinkai"]);
        assert!(corpus.iter().all(|t| t.len() == 2));
    }
}
