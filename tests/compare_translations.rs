//! Integration tests for reference parsing and translation comparison.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use versecompare::bible::{parse_reference, VerseRef};
use versecompare::constants::UNTRANSLATED;
use versecompare::error::{Error, FormatReason};
use versecompare::sample;
use versecompare::services::{compare_translations, Corpus, Translation};

#[test]
fn test_sample_comparison_pads_missing_verses() {
    let cmp = compare_translations("John 3:16, Psalm 23:1-3", &sample::corpus()).unwrap();

    let names: Vec<_> = cmp.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["meiji", "shinkai"]);

    let meiji = cmp.get("meiji").unwrap();
    assert_eq!(meiji.len(), 4);
    assert!(meiji[0].starts_with("神は、"));
    assert!(meiji[1].starts_with("主はわが牧者"));
    assert_eq!(meiji[2], UNTRANSLATED);
    assert_eq!(meiji[3], UNTRANSLATED);

    assert_eq!(cmp.missing_count(), 4);
}

#[test]
fn test_fully_covered_reference_has_no_placeholders() {
    let verses = parse_reference("Psalm 23:1-3, John 3:16").unwrap();
    let mut full = Translation::new("full");
    for verse in &verses {
        full.insert(verse.key(), format!("text of {verse}"));
    }
    let corpus = Corpus::new().with(full);

    let cmp = compare_translations("Psalm 23:1-3, John 3:16", &corpus).unwrap();
    assert_eq!(
        cmp.get("full").unwrap(),
        [
            "text of Psalm 23:1".to_string(),
            "text of Psalm 23:2".to_string(),
            "text of Psalm 23:3".to_string(),
            "text of John 3:16".to_string(),
        ]
    );
    assert_eq!(cmp.missing_count(), 0);
}

#[test]
fn test_list_length_matches_parsed_verses() {
    let reference = "Genesis 1:1-5, John 3:16-18";
    let expected = parse_reference(reference).unwrap().len();
    let cmp = compare_translations(reference, &sample::corpus()).unwrap();
    assert_eq!(expected, 8);
    assert!(cmp.iter().all(|(_, texts)| texts.len() == expected));
}

#[test]
fn test_repeated_verses_are_kept() {
    let verses = parse_reference("John 3:16, John 3:16").unwrap();
    assert_eq!(verses, [VerseRef::new("John 3", 16), VerseRef::new("John 3", 16)]);
}

#[test]
fn test_malformed_reference_is_reported() {
    let err = compare_translations("John 3:16, Psalm 23", &sample::corpus()).unwrap_err();
    match err {
        Error::Format { segment, reason } => {
            assert_eq!(segment, "Psalm 23");
            assert_eq!(reason, FormatReason::MissingColon);
        }
        other => panic!("Expected format error, got {other:?}"),
    }
}
