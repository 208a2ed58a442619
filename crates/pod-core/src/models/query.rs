use serde::{Deserialize, Serialize};

/// Single-select preset filters offered by the sidebar.
///
/// `Newest` and `TopRated` reorder the surviving listings instead of
/// narrowing them; the dedicated sort stage still runs afterwards and wins
/// whenever it asks for a non-default order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickFilter {
    Featured,
    Newest,
    Trending,
    TopRated,
    Verified,
    Specialized,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 6] = [
        Self::Featured,
        Self::Newest,
        Self::Trending,
        Self::TopRated,
        Self::Verified,
        Self::Specialized,
    ];

    /// Parse a preset id. Unknown ids are `None`, which the query engine
    /// treats as a pass-through stage rather than an error.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "featured" => Some(Self::Featured),
            "newest" => Some(Self::Newest),
            "trending" => Some(Self::Trending),
            "top-rated" => Some(Self::TopRated),
            "verified" => Some(Self::Verified),
            "specialized" => Some(Self::Specialized),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Newest => "newest",
            Self::Trending => "trending",
            Self::TopRated => "top-rated",
            Self::Verified => "verified",
            Self::Specialized => "specialized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Newest => "Newest",
            Self::Trending => "Trending",
            Self::TopRated => "Top Rated",
            Self::Verified => "Verified",
            Self::Specialized => "Specialized",
        }
    }

    /// Cycle through None -> presets -> None, for single-key toggling.
    pub fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(f) => {
                let idx = Self::ALL.iter().position(|c| *c == f).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

/// Ordering selected in the "Sort by" dropdown. Applied after every filter
/// stage; `Featured` keeps whatever order the earlier stages produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    Popular,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::Featured, Self::Newest, Self::Popular, Self::Rating];

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "featured" => Some(Self::Featured),
            "newest" => Some(Self::Newest),
            "popular" => Some(Self::Popular),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Newest => "Newest",
            Self::Popular => "Most Popular",
            Self::Rating => "Highest Rated",
        }
    }

    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Everything the user currently has selected: free-text search, the
/// sidebar preset, the category, and the sort order. Rebuilt by the UI on
/// every interaction and handed to the query engine whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryDescriptor {
    pub search: String,
    pub quick_filter: Option<QuickFilter>,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl QueryDescriptor {
    /// A descriptor that keeps the catalog untouched.
    pub fn unfiltered() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_filter_parse_round_trip() {
        for filter in QuickFilter::ALL {
            assert_eq!(QuickFilter::parse(filter.id()), Some(filter));
        }
        assert_eq!(QuickFilter::parse("hot-new-agents"), None);
        assert_eq!(QuickFilter::parse(""), None);
    }

    #[test]
    fn test_quick_filter_cycle_covers_all_and_wraps() {
        let mut current = None;
        let mut seen = Vec::new();
        loop {
            current = QuickFilter::cycle_next(current);
            match current {
                Some(f) => seen.push(f),
                None => break,
            }
        }
        assert_eq!(seen, QuickFilter::ALL.to_vec());
    }

    #[test]
    fn test_sort_key_defaults_to_featured() {
        assert_eq!(SortKey::default(), SortKey::Featured);
        assert_eq!(QueryDescriptor::unfiltered().sort, SortKey::Featured);
    }

    #[test]
    fn test_sort_key_cycle_wraps() {
        assert_eq!(SortKey::Rating.cycle_next(), SortKey::Featured);
        assert_eq!(SortKey::Featured.cycle_next(), SortKey::Newest);
    }
}
