use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::data::models::CaseRecord;
use crate::{CaseStatus, Category};

/// Search and filter state of the cases list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub search: String,
    pub status: Option<CaseStatus>,
    pub category: Option<Category>,
}

impl CaseFilter {
    pub fn with_status(status: CaseStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.category.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Case-insensitive substring search over title, description and
    /// location, combined with exact status and category filters.
    pub fn matches(&self, case: &CaseRecord) -> bool {
        if let Some(status) = self.status {
            if case.status != status {
                return false;
            }
        }

        if let Some(category) = self.category {
            if case.category != category {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        [&case.title, &case.description, &case.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Indices of the matching cases, in collection order.
pub fn filter_indices(cases: &[CaseRecord], filter: &CaseFilter) -> Vec<usize> {
    cases
        .iter()
        .enumerate()
        .filter(|(_, case)| filter.matches(case))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter_by_status(cases: &[CaseRecord], status: Option<CaseStatus>) -> Vec<usize> {
    filter_indices(
        cases,
        &CaseFilter {
            status,
            ..CaseFilter::default()
        },
    )
}

/// Distinct categories in order of first appearance.
pub fn available_categories(cases: &[CaseRecord]) -> Vec<Category> {
    let mut categories = Vec::new();
    for case in cases {
        if !categories.contains(&case.category) {
            categories.push(case.category);
        }
    }
    categories
}

/// Other cases of the same category, excluding `case` itself.
pub fn related_cases(cases: &[CaseRecord], index: usize, limit: usize) -> Vec<usize> {
    let Some(case) = cases.get(index) else {
        return Vec::new();
    };

    cases
        .iter()
        .enumerate()
        .filter(|(other_index, other)| {
            *other_index != index && other.category == case.category && other.id != case.id
        })
        .map(|(other_index, _)| other_index)
        .take(limit)
        .collect()
}

/// First case with the given id. Ids are not unique, so later duplicates are
/// unreachable through this lookup.
pub fn find_by_id(cases: &[CaseRecord], id: &str) -> Option<usize> {
    cases.iter().position(|case| case.id == id)
}

/// Best fuzzy title match for the header search; ties go to the newest case.
pub fn quick_find(cases: &[CaseRecord], query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    cases
        .iter()
        .enumerate()
        .filter_map(|(index, case)| {
            matcher
                .fuzzy_match(&case.title, query)
                .map(|score| (index, score))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::fixed_now;

    fn case(id: &str, status: CaseStatus, category: Category, location: &str) -> CaseRecord {
        CaseRecord {
            id: id.to_string(),
            title: format!("{} Incident in {location}", category.label()),
            description: format!(
                "A {} incident was reported. ",
                category.label().to_lowercase()
            ),
            date: fixed_now(),
            location: location.to_string(),
            status,
            category,
        }
    }

    fn sample() -> Vec<CaseRecord> {
        vec![
            case("a1", CaseStatus::Open, Category::Fraud, "Harbor District"),
            case("b2", CaseStatus::Critical, Category::Theft, "Central Station"),
            case("c3", CaseStatus::Closed, Category::Fraud, "Riverside Park"),
            case("d4", CaseStatus::Critical, Category::Assault, "Harbor District"),
            case("e5", CaseStatus::Unsolved, Category::Fraud, "Hillside Neighborhood"),
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let cases = sample();
        let filter = CaseFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter_indices(&cases, &filter), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_text_fields() {
        let cases = sample();
        let mut filter = CaseFilter {
            search: "HARBOR".to_string(),
            ..CaseFilter::default()
        };
        assert_eq!(filter_indices(&cases, &filter), vec![0, 3]);

        filter.search = "theft incident".to_string();
        assert_eq!(filter_indices(&cases, &filter), vec![1]);

        filter.search = "assault incident was".to_string();
        assert_eq!(filter_indices(&cases, &filter), vec![3]);

        filter.search = "arson".to_string();
        assert!(filter_indices(&cases, &filter).is_empty());
    }

    #[test]
    fn status_and_category_filters_combine() {
        let cases = sample();
        let mut filter = CaseFilter::with_status(CaseStatus::Critical);
        assert_eq!(filter_indices(&cases, &filter), vec![1, 3]);

        filter.category = Some(Category::Assault);
        assert_eq!(filter_indices(&cases, &filter), vec![3]);

        filter.search = "station".to_string();
        assert!(filter_indices(&cases, &filter).is_empty());

        filter.clear();
        assert_eq!(filter, CaseFilter::default());
        assert_eq!(filter_by_status(&cases, None).len(), 5);
        assert_eq!(filter_by_status(&cases, Some(CaseStatus::Closed)), vec![2]);
    }

    #[test]
    fn categories_listed_in_first_appearance_order() {
        assert_eq!(
            available_categories(&sample()),
            vec![Category::Fraud, Category::Theft, Category::Assault]
        );
        assert!(available_categories(&[]).is_empty());
    }

    #[test]
    fn related_cases_share_category_and_exclude_self() {
        let cases = sample();
        assert_eq!(related_cases(&cases, 0, 3), vec![2, 4]);
        assert_eq!(related_cases(&cases, 2, 1), vec![0]);
        assert!(related_cases(&cases, 1, 3).is_empty());
        assert!(related_cases(&cases, 42, 3).is_empty());
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut cases = sample();
        cases[4].id = "a1".to_string();
        assert_eq!(find_by_id(&cases, "a1"), Some(0));
        assert_eq!(find_by_id(&cases, "d4"), Some(3));
        assert_eq!(find_by_id(&cases, "zz"), None);
    }

    #[test]
    fn quick_find_prefers_best_title_match() {
        let cases = sample();
        assert_eq!(quick_find(&cases, "assault"), Some(3));
        assert_eq!(quick_find(&cases, "theft central"), Some(1));
        assert_eq!(quick_find(&cases, "   "), None);
        assert_eq!(quick_find(&cases, "qqqq"), None);
    }
}
