//! In-memory tale predicates
//!
//! Used by the snapshot data path. The hosted path expresses the same
//! predicates as `ilike`/`eq` query filters, so both paths agree on results.

use crate::contract::{Tale, TaleQuery};
use std::collections::HashSet;

/// Case-insensitive substring match on a title
pub fn title_matches(title: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&search.to_lowercase())
}

/// Exact nation equality
pub fn nation_matches(nation: &str, wanted: &str) -> bool {
    nation == wanted
}

/// Whether a tale satisfies both predicates of the query
pub fn matches(tale: &Tale, query: &TaleQuery) -> bool {
    let search_ok = query
        .search
        .as_deref()
        .map_or(true, |s| title_matches(&tale.title, s));
    let nation_ok = query
        .nation
        .as_deref()
        .map_or(true, |n| nation_matches(&tale.nation, n));
    search_ok && nation_ok
}

/// Keep matching tales in their original order, truncated to the query limit
pub fn apply_filters(tales: Vec<Tale>, query: &TaleQuery) -> Vec<Tale> {
    tales
        .into_iter()
        .filter(|t| matches(t, query))
        .take(query.limit)
        .collect()
}

/// Unique nations in first-seen order
pub fn distinct_nations<I, S>(nations: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for nation in nations {
        let nation = nation.into();
        if seen.insert(nation.clone()) {
            out.push(nation);
        }
    }
    out
}
