//! Application constants.
//!
//! Centralizes fixed strings shared by the comparator and the driver.

/// Text shown where a translation has no entry for a requested verse.
pub const UNTRANSLATED: &str = "[untranslated]";

/// Most verses a single range may expand to. The longest chapter (Psalm 119)
/// has 176.
pub const MAX_RANGE_VERSES: u32 = 200;

/// Driver defaults, overridable through [`crate::config::Config`].
pub mod driver {
    /// Reference compared when none is configured.
    pub const DEFAULT_REFERENCE: &str = "John 3:16, Psalm 23:1-3";

    /// Environment variable holding the reference to compare.
    pub const REFERENCE_VAR: &str = "VERSECOMPARE_REFERENCE";

    /// Environment variable selecting `text` or `json` output.
    pub const OUTPUT_VAR: &str = "VERSECOMPARE_OUTPUT";

    /// Log filter used when `RUST_LOG` is unset.
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
