//! `versecompare` - line up scripture passages across translations.
//!
//! Parse a reference like `"John 3:16-18, Psalm 23:1-3"` with
//! [`bible::parse_reference`], then look the verses up in every translation
//! of a [`services::Corpus`] with [`services::compare_translations`].

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod sample;
pub mod services;
