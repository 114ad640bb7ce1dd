//! Search predicates shared by the list views

/// Case-insensitive substring match over any of `fields`
///
/// An empty search term matches everything, so unfiltered lists fall out of
/// the same code path.
#[must_use]
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
