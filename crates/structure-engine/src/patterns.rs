//! Language-neutral shapes of numbered headings, TOC lines and page numbers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "2.1 Title ........ 12" with captures `num`, `title`, `page`
    pub static ref TOC_ENTRY: Regex = Regex::new(
        r"^\s*(?P<num>\d+(?:\.\d+)*)\.?\s+(?P<title>.*?)\s*\.{2,}\s*(?P<page>\d+)\s*$"
    )
    .unwrap();

    /// Any TOC-shaped line, used to drop artifacts from the body
    pub static ref TOC_ARTIFACT: Regex =
        Regex::new(r"^\s*\d+(?:\.\d+)*\.?\s+.+?\.{2,}\s*\d+\s*$").unwrap();

    /// Any listing line ending in leader dots and a page number, numbered or not
    pub static ref LEADER_LINE: Regex = Regex::new(r"\.{2,}\s*\d+\s*$").unwrap();

    /// Numbered prefix with at least two segments: "2.1", "5.5.4"
    pub static ref SUBSECTION: Regex =
        Regex::new(r"^\s*(?P<num>\d+(?:\.\d+)+)\.?\s*(?P<title>.+)$").unwrap();

    /// Numbered prefix directly followed by title text (no space, no dot)
    pub static ref SIMPLE_NUMBERED: Regex =
        Regex::new(r"^\s*(?P<num>\d+(?:\.\d+)*)\.?(?P<title>[^.\s].*)$").unwrap();

    /// "3. Title", closes the introduction block
    pub static ref NUMBERED_HEADING: Regex = Regex::new(r"^\d+\.\s+").unwrap();

    /// "3." at line start, closes an index region
    pub static ref NUMBERED_PREFIX: Regex = Regex::new(r"^\d+\.").unwrap();

    /// Well-formed numeral up to 3999; also matches the empty string
    pub static ref ROMAN_NUMERAL: Regex = Regex::new(
        r"(?i)^m{0,3}(?:cm|cd|d?c{0,3})(?:xc|xl|l?x{0,3})(?:ix|iv|v?i{0,3})$"
    )
    .unwrap();

    pub static ref PAGE_NUMBER: Regex = Regex::new(r"^\d+$").unwrap();

    /// "[12] Author ..." starts a new reference
    pub static ref NUMERIC_REFERENCE_LABEL: Regex = Regex::new(r"^\[\d+\]").unwrap();
}

/// Number of dot-separated segments in a numeric prefix
pub fn segment_count(number: &str) -> usize {
    number.matches('.').count() + 1
}

/// True when `text` has at least one cased letter and no lower-case ones
pub fn is_upper_title(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Front-matter page number such as "iv" or "XII"
pub fn is_roman_numeral(text: &str) -> bool {
    !text.is_empty() && ROMAN_NUMERAL.is_match(text)
}

pub fn is_toc_artifact(text: &str) -> bool {
    TOC_ARTIFACT.is_match(text)
}

/// TOC artifact or any other index listing line
pub fn is_listing_line(text: &str) -> bool {
    is_toc_artifact(text) || LEADER_LINE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_entry_captures() {
        let caps = TOC_ENTRY.captures("2.1 Osnove strojnega učenja ..... 9").unwrap();
        assert_eq!(&caps["num"], "2.1");
        assert_eq!(&caps["title"], "Osnove strojnega učenja");
        assert_eq!(&caps["page"], "9");

        let caps = TOC_ENTRY.captures("1. UVOD ....... 5").unwrap();
        assert_eq!(&caps["num"], "1");
        assert_eq!(&caps["title"], "UVOD");
    }

    #[test]
    fn test_toc_artifact() {
        assert!(is_toc_artifact("1. UVOD ................................. 5"));
        assert!(is_toc_artifact("2.1 Subsection .......................... 10"));
        assert!(!is_toc_artifact("This is regular content"));
        assert!(!is_toc_artifact("1. UVOD"));
    }

    #[test]
    fn test_listing_line() {
        assert!(is_listing_line("Priloge ..... 60"));
        assert!(is_listing_line("1. UVOD ..... 5"));
        assert!(!is_listing_line("Priloge"));
        assert!(!is_listing_line("Glej poglavje 3..."));
    }

    #[test]
    fn test_simple_numbered_requires_attached_title() {
        assert!(SIMPLE_NUMBERED.is_match("1.UVOD"));
        assert!(SIMPLE_NUMBERED.is_match("3Metode"));
        assert!(!SIMPLE_NUMBERED.is_match("1. UVOD"));
        assert!(!SIMPLE_NUMBERED.is_match("1 Uvod"));
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count("1"), 1);
        assert_eq!(segment_count("2.1"), 2);
        assert_eq!(segment_count("2.1.1"), 3);
    }

    #[test]
    fn test_is_upper_title() {
        assert!(is_upper_title("UVOD"));
        assert!(is_upper_title("ZAKLJUČEK 2"));
        assert!(!is_upper_title("Uvod"));
        assert!(!is_upper_title("123"));
    }

    #[test]
    fn test_roman_and_page_numbers() {
        assert!(is_roman_numeral("XIV"));
        assert!(is_roman_numeral("iv"));
        assert!(is_roman_numeral("MCMXCIX"));
        assert!(!is_roman_numeral("IV."));
        assert!(!is_roman_numeral(""));
        assert!(!is_roman_numeral("IIII"));
        assert!(!is_roman_numeral("Civil"));
        assert!(!is_roman_numeral("DID"));
        assert!(PAGE_NUMBER.is_match("123"));
        assert!(!PAGE_NUMBER.is_match("12a"));
    }
}
