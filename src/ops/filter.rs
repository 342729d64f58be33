//! Filter-match engine for the route/line picker.
//!
//! Every operation is a pure transformation: it takes the current selection
//! and returns a new one. Persisting the result is the caller's job (usually
//! via [`crate::store::SelectionStore::set_selection`]).

use indexmap::IndexSet;

use crate::model::{Catalog, Entity};

/// Selected entity ids. Insertion order is kept for chip display; equality
/// ignores order.
pub type Selection = IndexSet<String>;

/// Default cap on the number of candidates returned by [`search`]
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Normalize a raw query: trimmed and lowercased. Empty means "match all".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Candidates for `query` with the default cap.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Entity> {
    search_capped(catalog, query, DEFAULT_MAX_RESULTS)
}

/// Ordered subsequence of `catalog` whose id or label contains `query`
/// (case-insensitive, surrounding whitespace ignored), truncated to the first
/// `max_results` matches in catalog order.
pub fn search_capped<'a>(catalog: &'a Catalog, query: &str, max_results: usize) -> Vec<&'a Entity> {
    let needle = normalize_query(query);
    catalog
        .iter()
        .filter(|e| needle.is_empty() || e.matches_lowercase(&needle))
        .take(max_results)
        .collect()
}

/// Add `id` if absent, remove it if present.
pub fn toggle(selection: &Selection, id: &str) -> Selection {
    let mut next = selection.clone();
    if !next.shift_remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Union of the selection with every visible candidate. Hidden entries are
/// never touched.
pub fn select_all(selection: &Selection, candidates: &[&Entity]) -> Selection {
    let mut next = selection.clone();
    next.extend(candidates.iter().map(|e| e.id.clone()));
    next
}

/// Remove only the visible candidates from the selection.
pub fn clear_visible(selection: &Selection, candidates: &[&Entity]) -> Selection {
    selection
        .iter()
        .filter(|id| !candidates.iter().any(|e| &e.id == *id))
        .cloned()
        .collect()
}

pub fn clear_all(_selection: &Selection) -> Selection {
    Selection::new()
}

/// Union of the selection with the whole catalog, regardless of any query.
/// Distinct from [`select_all`], which only covers what is on screen.
pub fn select_entire_catalog(selection: &Selection, catalog: &Catalog) -> Selection {
    let mut next = selection.clone();
    next.extend(catalog.iter().map(|e| e.id.clone()));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::routes::bus_routes;

    fn abc() -> Catalog {
        Catalog::new(vec![
            Entity::new("A", "Alpha"),
            Entity::new("B", "Bravo"),
            Entity::new("C", "Charlie"),
        ])
    }

    fn sel(ids: &[&str]) -> Selection {
        ids.iter().map(|s| s.to_string()).collect()
    }

    const QUERIES: &[&str] = &["", "0", "05", "line", "  ROSS ", "xyz", "-", "1"];

    #[test]
    fn search_is_an_ordered_matching_subsequence() {
        let catalog = bus_routes();
        for q in QUERIES {
            let results = search(&catalog, q);
            let needle = normalize_query(q);
            // order-preserving: positions in the catalog strictly increase
            let positions: Vec<usize> = results
                .iter()
                .map(|r| catalog.iter().position(|e| e.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", q);
            for r in &results {
                assert!(
                    r.id.to_lowercase().contains(&needle)
                        || r.label.to_lowercase().contains(&needle),
                    "{} does not match {:?}",
                    r.id,
                    q
                );
            }
        }
    }

    #[test]
    fn search_route_005() {
        let catalog = bus_routes();
        let results = search(&catalog, "005");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "005");
        assert_eq!(results[0].label, "Love Field Shuttle");
    }

    #[test]
    fn search_is_case_insensitive_on_label() {
        let catalog = bus_routes();
        let ids: Vec<&str> = search(&catalog, "bus-")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["315", "408"]);
    }

    #[test]
    fn empty_query_returns_everything_up_to_cap() {
        let catalog = bus_routes();
        assert_eq!(search(&catalog, "   ").len(), catalog.len());

        let capped = search_capped(&catalog, "", 4);
        let ids: Vec<&str> = capped.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["001", "003", "005", "009"]);
    }

    #[test]
    fn search_on_empty_catalog() {
        let catalog = Catalog::default();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "anything").is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let start = sel(&["001", "009"]);
        for id in ["001", "009", "005", "stale"] {
            assert_eq!(toggle(&toggle(&start, id), id), start, "id {}", id);
        }
    }

    #[test]
    fn clear_all_always_empties() {
        assert!(clear_all(&sel(&["a", "b", "stale"])).is_empty());
        assert!(clear_all(&Selection::new()).is_empty());
    }

    #[test]
    fn select_all_then_toggle() {
        let catalog = abc();
        let candidates = search(&catalog, "");
        let all = select_all(&Selection::new(), &candidates);
        assert_eq!(all, sel(&["A", "B", "C"]));
        assert_eq!(toggle(&all, "B"), sel(&["A", "C"]));
    }

    #[test]
    fn select_all_respects_query() {
        let catalog = bus_routes();
        let candidates = search(&catalog, "bus-");
        let next = select_all(&sel(&["001"]), &candidates);
        assert_eq!(next, sel(&["001", "315", "408"]));
    }

    #[test]
    fn clear_visible_restores_pre_select_all_selection() {
        let catalog = bus_routes();
        // pre-selected ids all lie outside the visible set
        let before = sel(&["001", "003"]);
        for q in ["bus-", "05", "ridge"] {
            let candidates = search(&catalog, q);
            assert!(candidates.iter().all(|c| !before.contains(&c.id)));
            let after = clear_visible(&select_all(&before, &candidates), &candidates);
            assert_eq!(after, before, "query {:?}", q);
        }
    }

    #[test]
    fn clear_visible_leaves_hidden_ids() {
        let catalog = bus_routes();
        let candidates = search(&catalog, "bus-");
        let next = clear_visible(&sel(&["315", "001", "stale"]), &candidates);
        assert_eq!(next, sel(&["001", "stale"]));
    }

    #[test]
    fn select_entire_catalog_ignores_query() {
        let catalog = abc();
        let next = select_entire_catalog(&sel(&["stale"]), &catalog);
        assert_eq!(next, sel(&["stale", "A", "B", "C"]));
    }

    #[test]
    fn toggle_keeps_chip_order() {
        let s = toggle(&toggle(&sel(&["a"]), "b"), "c");
        let order: Vec<&str> = s.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
