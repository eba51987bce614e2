//! Static routing table for the fixed intent categories.

use crate::types::{RoutingDirective, SearchCategory};

/// Backend category used for news searches.
pub const NEWS_CATEGORY: &str = "news";
/// Engines used for academic searches.
pub const ACADEMIC_ENGINES: &str = "arxiv,google scholar,pubmed";
/// Engines used for social searches.
pub const SOCIAL_ENGINES: &str = "reddit";

/// Look up the static directive for a category.
///
/// `General` maps to an unconstrained directive here; the caller is
/// expected to consult [`super::RoutingResolver`] for it instead.
pub fn lookup(category: SearchCategory) -> RoutingDirective {
    match category {
        SearchCategory::General => RoutingDirective::unconstrained(),
        SearchCategory::News => RoutingDirective::categories(NEWS_CATEGORY),
        SearchCategory::Academic => RoutingDirective::engines(ACADEMIC_ENGINES),
        SearchCategory::Social => RoutingDirective::engines(SOCIAL_ENGINES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_is_unconstrained() {
        assert!(lookup(SearchCategory::General).is_unconstrained());
    }

    #[test]
    fn news_routes_by_category_only() {
        let d = lookup(SearchCategory::News);
        assert_eq!(d.categories.as_deref(), Some("news"));
        assert!(d.engines.is_none());
    }

    #[test]
    fn academic_routes_to_research_engines() {
        let d = lookup(SearchCategory::Academic);
        assert_eq!(d.engines.as_deref(), Some("arxiv,google scholar,pubmed"));
        assert!(d.categories.is_none());
    }

    #[test]
    fn social_routes_to_reddit() {
        let d = lookup(SearchCategory::Social);
        assert_eq!(d.engines.as_deref(), Some("reddit"));
        assert!(d.categories.is_none());
    }

    #[test]
    fn no_entry_sets_both_keys() {
        for category in SearchCategory::all() {
            let d = lookup(*category);
            assert!(d.categories.is_none() || d.engines.is_none(), "{category}");
        }
    }
}
