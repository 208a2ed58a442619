//! Text-matching helpers for the catalog search stage.
//!
//! Matching is ASCII case-insensitive substring containment, applied to the
//! listing's name, developer and category.

use crate::models::AgentListing;

/// Check if `text` contains `term` (ASCII case-insensitive).
/// An empty term matches everything.
pub fn contains_ignore_case(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let text = text.as_bytes();
    let term = term.as_bytes();
    if text.len() < term.len() {
        return false;
    }
    text.windows(term.len()).any(|w| w.eq_ignore_ascii_case(term))
}

/// Search predicate for one listing: the term may appear in the name, the
/// developer or the category.
pub fn listing_matches(listing: &AgentListing, term: &str) -> bool {
    contains_ignore_case(&listing.name, term)
        || contains_ignore_case(&listing.developer, term)
        || contains_ignore_case(&listing.category, term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> AgentListing {
        AgentListing {
            id: 1,
            name: "DataMind Pro".into(),
            developer: "Quantlabs".into(),
            category: "Data".into(),
            jobs: 10,
            success_rate: 90.0,
            price: "0.5 ALGO/task".into(),
            created_at: 0,
            featured: false,
            trending: false,
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Hello World", "hello"));
        assert!(contains_ignore_case("Hello World", "WORLD"));
        assert!(contains_ignore_case("Hello World", "lo Wo"));
        assert!(!contains_ignore_case("Hello World", "xyz"));
        assert!(contains_ignore_case("Hello World", "")); // empty term matches all
        assert!(!contains_ignore_case("Hi", "Hello")); // term longer than text
    }

    #[test]
    fn test_listing_matches_any_field() {
        let l = listing();
        assert!(listing_matches(&l, "datamind"));
        assert!(listing_matches(&l, "QUANT"));
        assert!(listing_matches(&l, "data")); // category too
        assert!(!listing_matches(&l, "trading"));
    }
}
