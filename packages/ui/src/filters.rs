//! Pure filtering helpers shared by the listing views.
//!
//! All filtering is synchronous, case-insensitive substring matching over a
//! slice of searchable fields, combined with inclusion checks against
//! multi-select facet state. No pagination, no sort.

/// True when `query` is a case-insensitive substring of any haystack.
/// An empty (or whitespace-only) query matches everything.
pub fn matches_query(haystacks: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&query))
}

/// True when no facet is selected, or at least one selected facet value
/// appears among the item's tags.
pub fn facet_matches_any(selected: &[String], item_tags: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|s| item_tags.contains(s))
}

/// True when no value is selected, or the item's single tag is one of them.
pub fn facet_matches_one(selected: &[String], item_tag: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == item_tag)
}

/// Toggle `value` in a multi-select facet. Toggling twice restores the set.
pub fn toggle_facet(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|s| s == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn query_matching_is_case_insensitive_substring() {
        assert!(matches_query(&["Prenatal Yoga Flow"], "YOGA"));
        assert!(matches_query(&["calm", "Water birth support"], "water"));
        assert!(!matches_query(&["Prenatal Fitness"], "yoga"));
        assert!(matches_query(&["anything"], "  "));
    }

    #[test]
    fn yoga_query_matches_exactly_two_activities() {
        let matched: Vec<&str> = catalog::activities()
            .iter()
            .filter(|a| matches_query(&[&a.title, &a.description, &a.location], "yoga"))
            .map(|a| a.title)
            .collect();
        assert_eq!(matched, vec!["Prenatal Yoga Flow", "Prenatal Fitness Class"]);
    }

    #[test]
    fn cooking_facet_matches_exactly_three_doulas() {
        let selected = vec!["Cooking".to_string()];
        let matched: Vec<&str> = catalog::doulas()
            .iter()
            .filter(|d| facet_matches_any(&selected, &d.specialties))
            .map(|d| d.name)
            .collect();
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn doula_search_covers_name_location_and_specialties() {
        let doulas = catalog::doulas();
        let matched: Vec<&str> = doulas
            .iter()
            .filter(|d| {
                let mut fields: Vec<&str> = vec![d.name, d.location];
                fields.extend(d.specialties.iter().map(String::as_str));
                matches_query(&fields, "rachel")
            })
            .map(|d| d.name)
            .collect();
        assert_eq!(matched, vec!["Rachel Johnson"]);
    }

    #[test]
    fn facet_toggle_is_an_involution() {
        let original = vec!["Cooking".to_string(), "Newborn care".to_string()];

        // Toggling a value not in the set, twice.
        let mut set = original.clone();
        toggle_facet(&mut set, "Sibling support");
        assert_ne!(set, original);
        toggle_facet(&mut set, "Sibling support");
        assert_eq!(set, original);

        // Toggling a value already in the set, twice.
        let mut set = original.clone();
        toggle_facet(&mut set, "Cooking");
        assert!(!set.contains(&"Cooking".to_string()));
        toggle_facet(&mut set, "Cooking");
        assert_eq!(set.len(), original.len());
        assert!(set.contains(&"Cooking".to_string()));
    }

    #[test]
    fn empty_facet_selection_matches_everything() {
        assert!(facet_matches_any(&[], &["anything".to_string()]));
        assert!(facet_matches_one(&[], "anything"));
    }
}
