//! The catalog query engine: search, category, quick-filter and sort
//! composed into one derived view.
//!
//! `compute_view` is pure and total. It never fails: a descriptor stage
//! that does not apply (empty search, no category, no preset) passes the
//! listings through untouched, and the same inputs always produce the same
//! ordered output. All sorts are stable so that equal-key listings keep
//! their catalog order.

use std::cmp::Ordering;

use crate::constants::{SPECIALIZED_CATEGORY, VERIFIED_SUCCESS_RATE};
use crate::models::{AgentListing, QueryDescriptor, QuickFilter, SortKey};
use crate::search;

/// Compute the ordered subset of `catalog` selected by `descriptor`.
///
/// Stage order is fixed: search, then category, then quick-filter, then the
/// sort stage. The sort stage always runs last, so a reordering preset
/// (`Newest`, `TopRated`) only shows through while the sort key is the
/// `Featured` default.
pub fn compute_view(catalog: &[AgentListing], descriptor: &QueryDescriptor) -> Vec<AgentListing> {
    let mut view: Vec<&AgentListing> = catalog.iter().collect();

    if !descriptor.search.is_empty() {
        view.retain(|l| search::listing_matches(l, &descriptor.search));
    }

    if let Some(category) = descriptor.category.as_deref() {
        view.retain(|l| l.category == category);
    }

    if let Some(filter) = descriptor.quick_filter {
        apply_quick_filter(&mut view, filter);
    }

    apply_sort(&mut view, descriptor.sort);

    view.into_iter().cloned().collect()
}

fn apply_quick_filter(view: &mut Vec<&AgentListing>, filter: QuickFilter) {
    match filter {
        QuickFilter::Featured => view.retain(|l| l.featured),
        QuickFilter::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        QuickFilter::Trending => view.retain(|l| l.trending),
        QuickFilter::TopRated => view.sort_by(|a, b| cmp_rate(b, a)),
        QuickFilter::Verified => view.retain(|l| l.success_rate >= VERIFIED_SUCCESS_RATE),
        QuickFilter::Specialized => view.retain(|l| l.category == SPECIALIZED_CATEGORY),
    }
}

fn apply_sort(view: &mut [&AgentListing], sort: SortKey) {
    match sort {
        // Default: keep whatever order the filter stages produced.
        SortKey::Featured => {}
        SortKey::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Popular => view.sort_by(|a, b| b.jobs.cmp(&a.jobs)),
        SortKey::Rating => view.sort_by(|a, b| cmp_rate(b, a)),
    }
}

// Success rates are well-formed percentages; NaN would only appear from a
// hand-edited catalog file, in which case it sorts as equal.
fn cmp_rate(a: &AgentListing, b: &AgentListing) -> Ordering {
    a.success_rate
        .partial_cmp(&b.success_rate)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, name: &str, category: &str) -> AgentListing {
        AgentListing {
            id,
            name: name.into(),
            developer: format!("dev-{id}"),
            category: category.into(),
            jobs: 0,
            success_rate: 90.0,
            price: "1 ALGO/task".into(),
            created_at: u64::from(id),
            featured: false,
            trending: false,
        }
    }

    fn ids(view: &[AgentListing]) -> Vec<u32> {
        view.iter().map(|l| l.id).collect()
    }

    fn catalog() -> Vec<AgentListing> {
        vec![
            AgentListing {
                jobs: 10,
                success_rate: 90.0,
                created_at: 100,
                featured: true,
                ..listing(1, "Alpha", "Data")
            },
            AgentListing {
                jobs: 50,
                success_rate: 97.0,
                created_at: 200,
                trending: true,
                ..listing(2, "Beta", "Data")
            },
            AgentListing {
                jobs: 30,
                success_rate: 95.0,
                created_at: 150,
                ..listing(3, "Gamma", "Specialized")
            },
            AgentListing {
                jobs: 50,
                success_rate: 88.0,
                created_at: 50,
                featured: true,
                ..listing(4, "Delta", "Trading")
            },
        ]
    }

    #[test]
    fn test_unfiltered_descriptor_is_identity() {
        let catalog = catalog();
        let view = compute_view(&catalog, &QueryDescriptor::unfiltered());
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            quick_filter: Some(QuickFilter::TopRated),
            sort: SortKey::Popular,
            ..Default::default()
        };
        let first = compute_view(&catalog, &descriptor);
        let second = compute_view(&catalog, &descriptor);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_search_matches_name_developer_and_category() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            search: "ALPHA".into(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![1]);

        let descriptor = QueryDescriptor {
            search: "dev-3".into(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![3]);

        let descriptor = QueryDescriptor {
            search: "data".into(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![1, 2]);
    }

    #[test]
    fn test_category_stage_is_exact() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            category: Some("Data".into()),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![1, 2]);

        // Category matching is exact, unlike search.
        let descriptor = QueryDescriptor {
            category: Some("data".into()),
            ..Default::default()
        };
        assert!(compute_view(&catalog, &descriptor).is_empty());
    }

    #[test]
    fn test_verified_keeps_rate_at_or_above_threshold() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            quick_filter: Some(QuickFilter::Verified),
            ..Default::default()
        };
        // 97.0 and exactly 95.0 survive, 90.0 and 88.0 do not.
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![2, 3]);
    }

    #[test]
    fn test_featured_and_trending_filter_membership() {
        let catalog = catalog();
        let featured = QueryDescriptor {
            quick_filter: Some(QuickFilter::Featured),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &featured)), vec![1, 4]);

        let trending = QueryDescriptor {
            quick_filter: Some(QuickFilter::Trending),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &trending)), vec![2]);
    }

    #[test]
    fn test_specialized_preset_matches_category() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            quick_filter: Some(QuickFilter::Specialized),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![3]);
    }

    #[test]
    fn test_popular_sort_orders_by_jobs_descending() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            sort: SortKey::Popular,
            ..Default::default()
        };
        // 2 and 4 both have 50 jobs; stability keeps catalog order between them.
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_sort_stage_overrides_quick_filter_order() {
        let mut catalog = catalog();
        catalog[3].created_at = 300; // listing 4 becomes the newest
        let descriptor = QueryDescriptor {
            quick_filter: Some(QuickFilter::TopRated),
            sort: SortKey::Newest,
            ..Default::default()
        };
        // TopRated alone would give 2,3,1,4; the sort stage wins.
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_quick_filter_order_survives_featured_sort() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            quick_filter: Some(QuickFilter::TopRated),
            sort: SortKey::Featured,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_stages_compose_in_order() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            search: "a".into(), // matches every listing here
            category: Some("Data".into()),
            quick_filter: Some(QuickFilter::Verified),
            sort: SortKey::Popular,
        };
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![2]);
    }

    #[test]
    fn test_empty_result_is_empty_not_error() {
        let catalog = catalog();
        let descriptor = QueryDescriptor {
            search: "no such agent".into(),
            quick_filter: Some(QuickFilter::TopRated),
            sort: SortKey::Rating,
            ..Default::default()
        };
        assert!(compute_view(&catalog, &descriptor).is_empty());
        assert!(compute_view(&[], &QueryDescriptor::unfiltered()).is_empty());
    }

    #[test]
    fn test_rating_sort_is_stable_for_equal_rates() {
        let mut catalog = catalog();
        catalog[0].success_rate = 97.0; // ties listing 2
        let descriptor = QueryDescriptor {
            sort: SortKey::Rating,
            ..Default::default()
        };
        // 1 and 2 tie at 97.0; listing 1 comes first in the catalog.
        assert_eq!(ids(&compute_view(&catalog, &descriptor)), vec![1, 2, 3, 4]);
    }
}
