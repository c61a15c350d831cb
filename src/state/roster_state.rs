//! RosterState - Employee List View State
//!
//! The client-side pagination/filter/sort state machine. All transitions are
//! synchronous array transforms over the already-fetched record set; the only
//! fallible operation (the fetch itself) lives in the service layer and lands
//! here via `finish_load` / `fail_load`.

use crate::constants::PAGE_SIZE;
use crate::domain::employee::{Employee, Gender, SortKey};

/// Gender filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
        }
    }

    /// Stable value used by the select control
    pub fn value(&self) -> &'static str {
        match self {
            GenderFilter::All => "",
            GenderFilter::Male => "male",
            GenderFilter::Female => "female",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "male" => GenderFilter::Male,
            "female" => GenderFilter::Female,
            _ => GenderFilter::All,
        }
    }
}

/// Current filter selections, mutated only by user input
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    /// Gender selection
    pub gender: GenderFilter,
    /// Free-text city substring, matched case-insensitively
    pub city: String,
}

impl RosterFilter {
    /// Predicate applied to every record when recomputing the visible set
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.gender.matches(employee.gender) {
            return false;
        }
        if self.city.is_empty() {
            return true;
        }
        employee
            .address
            .city
            .to_lowercase()
            .contains(&self.city.to_lowercase())
    }
}

/// State for the employee roster view.
///
/// Invariant: `visible` holds the first `(page_index + 1) * PAGE_SIZE` records
/// of `all` that satisfy `filter` (all of them when the filtered set is
/// shorter, in which case `has_more` is false). A column sort permutes
/// `visible` in place without changing its membership; the next filter change
/// rebuilds it in source order.
#[derive(Debug, Clone)]
pub struct RosterState {
    /// Every record returned by the fetch, in source order
    pub all: Vec<Employee>,
    /// The currently materialized rows
    pub visible: Vec<Employee>,
    /// Zero-based page index of the last revealed slice
    pub page_index: usize,
    /// Whether another `load_more` can reveal additional rows
    pub has_more: bool,
    /// Current filter selections
    pub filter: RosterFilter,
    /// Whether the initial fetch is in flight
    pub loading: bool,
    /// Error from the fetch, surfaced to the rendering layer
    pub fetch_error: Option<String>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            visible: Vec::new(),
            page_index: 0,
            has_more: true,
            filter: RosterFilter::default(),
            loading: false,
            fetch_error: None,
        }
    }
}

impl RosterState {
    /// Mark the fetch as in flight
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.fetch_error = None;
    }

    /// Install the fetched record set and materialize the first page
    pub fn finish_load(&mut self, records: Vec<Employee>) {
        self.all = records;
        self.loading = false;
        self.fetch_error = None;
        self.apply_filter();
    }

    /// Record a fetch failure; no retry happens here
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.fetch_error = Some(message.into());
    }

    /// Records of `all` satisfying the current filter, in source order
    pub fn filtered(&self) -> Vec<&Employee> {
        self.all.iter().filter(|e| self.filter.matches(e)).collect()
    }

    /// Number of records matching the current filter
    pub fn filtered_count(&self) -> usize {
        self.all.iter().filter(|e| self.filter.matches(e)).count()
    }

    /// Set the gender selection and re-filter
    pub fn set_gender(&mut self, gender: GenderFilter) {
        self.filter.gender = gender;
        self.apply_filter();
    }

    /// Set the city substring and re-filter. Called on every keystroke.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filter.city = city.into();
        self.apply_filter();
    }

    /// Reset both filter fields to their defaults and re-filter
    pub fn clear_filters(&mut self) {
        self.filter = RosterFilter::default();
        self.apply_filter();
    }

    /// Rebuild `visible` from scratch: first PAGE_SIZE filtered records in
    /// source order. Discards any column sort previously applied.
    pub fn apply_filter(&mut self) {
        let filtered: Vec<Employee> = self
            .all
            .iter()
            .filter(|e| self.filter.matches(e))
            .cloned()
            .collect();
        self.page_index = 0;
        self.has_more = filtered.len() > PAGE_SIZE;
        self.visible = filtered.into_iter().take(PAGE_SIZE).collect();
    }

    /// Reveal the next PAGE_SIZE slice of the filtered set.
    ///
    /// The slice is taken in source order even when a sort has permuted the
    /// rows already on screen, so later rows land unsorted after a sorted
    /// prefix. That mirrors the visible-rows-only sort semantics.
    pub fn load_more(&mut self) {
        if !self.has_more {
            return;
        }
        let filtered: Vec<Employee> = self
            .all
            .iter()
            .filter(|e| self.filter.matches(e))
            .cloned()
            .collect();
        let next = self.page_index + 1;
        let start = next * PAGE_SIZE;
        if start >= filtered.len() {
            // Terminal signal, not an error.
            self.has_more = false;
            return;
        }
        let end = (start + PAGE_SIZE).min(filtered.len());
        self.visible.extend_from_slice(&filtered[start..end]);
        self.page_index = next;
        if end == filtered.len() {
            self.has_more = false;
        }
    }

    /// Stable ascending sort of the rows currently on screen.
    ///
    /// Only `visible` is reordered; the full filtered set keeps source order.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Id => self.visible.sort_by_key(|e| e.id),
            SortKey::Age => self.visible.sort_by_key(|e| e.age),
            // Case-sensitive lexicographic order: uppercase sorts first.
            SortKey::FirstName => self
                .visible
                .sort_by(|a, b| a.first_name.cmp(&b.first_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{Address, Company};

    fn employee(id: u64, first: &str, gender: Gender, age: u32, city: &str) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            gender,
            age,
            company: Company {
                name: "Acme".to_string(),
                title: "Engineer".to_string(),
            },
            address: Address {
                city: city.to_string(),
            },
            image: String::new(),
        }
    }

    fn roster(count: usize) -> Vec<Employee> {
        (0..count)
            .map(|i| {
                let gender = if i % 5 == 0 { Gender::Female } else { Gender::Male };
                let city = if i % 2 == 0 { "London" } else { "Paris" };
                employee(i as u64 + 1, &format!("Name{i:02}"), gender, 20 + i as u32, city)
            })
            .collect()
    }

    fn loaded(count: usize) -> RosterState {
        let mut state = RosterState::default();
        state.finish_load(roster(count));
        state
    }

    #[test]
    fn test_initialize_caps_visible_at_page_size() {
        let state = loaded(25);
        assert_eq!(state.visible.len(), 10);
        assert_eq!(state.page_index, 0);
        assert!(state.has_more);
    }

    #[test]
    fn test_initialize_with_short_roster() {
        let state = loaded(4);
        assert_eq!(state.visible.len(), 4);
        assert!(!state.has_more);
    }

    #[test]
    fn test_initialize_with_empty_roster() {
        let state = loaded(0);
        assert!(state.visible.is_empty());
        assert!(!state.has_more);
        assert!(!state.loading);
    }

    #[test]
    fn test_initialize_with_exactly_one_page() {
        // has_more demands strictly more records than one page
        let state = loaded(10);
        assert_eq!(state.visible.len(), 10);
        assert!(!state.has_more);
    }

    #[test]
    fn test_fail_load_surfaces_error() {
        let mut state = RosterState::default();
        state.begin_loading();
        assert!(state.loading);
        state.fail_load("connection refused");
        assert!(!state.loading);
        assert_eq!(state.fetch_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_end_to_end_25_records() {
        let mut state = loaded(25);
        assert_eq!(state.visible.len(), 10);
        assert!(state.has_more);

        state.load_more();
        assert_eq!(state.visible.len(), 20);
        assert_eq!(state.page_index, 1);
        assert!(state.has_more);

        state.load_more();
        assert_eq!(state.visible.len(), 25);
        assert_eq!(state.page_index, 2);
        assert!(!state.has_more);

        // Exhausted: a further call changes nothing and is not an error.
        state.load_more();
        assert_eq!(state.visible.len(), 25);
        assert!(!state.has_more);
    }

    #[test]
    fn test_load_more_until_exhausted_reconstructs_filtered_set() {
        let mut state = loaded(37);
        while state.has_more {
            state.load_more();
        }
        let expected: Vec<u64> = state.filtered().iter().map(|e| e.id).collect();
        let got: Vec<u64> = state.visible.iter().map(|e| e.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_gender_filter_predicate_holds_on_visible() {
        let mut state = loaded(25);
        state.set_gender(GenderFilter::Female);
        assert!(state
            .visible
            .iter()
            .all(|e| e.gender == Gender::Female));
        assert_eq!(
            state.visible.len(),
            state.filtered_count().min(PAGE_SIZE)
        );
    }

    #[test]
    fn test_narrow_gender_filter_of_25() {
        let mut all = roster(25);
        for e in &mut all {
            e.gender = Gender::Male;
        }
        all[3].gender = Gender::Female;
        all[9].gender = Gender::Female;
        all[17].gender = Gender::Female;
        let mut state = RosterState::default();
        state.finish_load(all);

        state.set_gender(GenderFilter::Female);
        assert_eq!(state.visible.len(), 3);
        assert!(!state.has_more);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_city_filter_is_case_insensitive_substring() {
        let mut state = loaded(25);
        state.set_city("lond");
        assert!(!state.visible.is_empty());
        assert!(state
            .visible
            .iter()
            .all(|e| e.address.city.to_lowercase().contains("lond")));

        state.set_city("LONDON");
        assert!(!state.visible.is_empty());

        state.set_city("nowhere");
        assert!(state.visible.is_empty());
        assert!(!state.has_more);
    }

    #[test]
    fn test_filter_applies_per_keystroke() {
        // Each keystroke re-filters from the full set, so narrowing then
        // widening the text restores previously hidden rows.
        let mut state = loaded(25);
        state.set_city("P");
        let paris_count = state.filtered_count();
        state.set_city("Pa");
        assert_eq!(state.filtered_count(), paris_count);
        state.set_city("");
        assert_eq!(state.filtered_count(), 25);
        assert_eq!(state.visible.len(), 10);
        assert!(state.has_more);
    }

    #[test]
    fn test_combined_filters_and_paging() {
        let mut state = loaded(40);
        state.set_gender(GenderFilter::Male);
        state.set_city("paris");
        let matching = state.filtered_count();
        assert!(state.visible.len() <= PAGE_SIZE);
        while state.has_more {
            state.load_more();
        }
        assert_eq!(state.visible.len(), matching);
    }

    #[test]
    fn test_sort_by_age_ascending() {
        let mut state = RosterState::default();
        state.finish_load(vec![
            employee(1, "A", Gender::Male, 30, "London"),
            employee(2, "B", Gender::Male, 22, "London"),
            employee(3, "C", Gender::Male, 41, "London"),
        ]);
        state.sort_by(SortKey::Age);
        let ages: Vec<u32> = state.visible.iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![22, 30, 41]);
    }

    #[test]
    fn test_sort_by_first_name_is_case_sensitive() {
        // Byte-wise lexicographic order puts uppercase before lowercase.
        let mut state = RosterState::default();
        state.finish_load(vec![
            employee(1, "Bob", Gender::Male, 30, "London"),
            employee(2, "alice", Gender::Female, 22, "London"),
            employee(3, "Eve", Gender::Female, 41, "London"),
        ]);
        state.sort_by(SortKey::FirstName);
        let names: Vec<&str> = state.visible.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Eve", "alice"]);
    }

    #[test]
    fn test_sort_by_id_is_stable_numeric() {
        let mut state = RosterState::default();
        state.finish_load(vec![
            employee(30, "A", Gender::Male, 1, "London"),
            employee(4, "B", Gender::Male, 2, "London"),
            employee(100, "C", Gender::Male, 3, "London"),
        ]);
        state.sort_by(SortKey::Id);
        let ids: Vec<u64> = state.visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 30, 100]);
    }

    #[test]
    fn test_load_more_appends_unsorted_after_sorted_prefix() {
        // Visible-rows-only sorting: rows revealed later keep source order.
        let mut state = loaded(25);
        state.sort_by(SortKey::Age);
        let sorted_prefix: Vec<u64> = state.visible.iter().map(|e| e.id).collect();
        state.load_more();
        assert_eq!(state.visible.len(), 20);
        assert_eq!(
            &state.visible[..10].iter().map(|e| e.id).collect::<Vec<_>>(),
            &sorted_prefix
        );
        let appended: Vec<u64> = state.visible[10..].iter().map(|e| e.id).collect();
        assert_eq!(appended, (11..=20).collect::<Vec<u64>>());
    }

    #[test]
    fn test_filter_change_discards_sort() {
        let mut state = loaded(25);
        state.sort_by(SortKey::Age);
        state.set_city("");
        let ids: Vec<u64> = state.visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_clear_filters_restores_first_page() {
        let mut state = loaded(25);
        state.set_gender(GenderFilter::Female);
        state.set_city("paris");
        state.clear_filters();
        assert_eq!(state.filter.gender, GenderFilter::All);
        assert!(state.filter.city.is_empty());
        assert_eq!(state.visible.len(), 10);
        assert_eq!(state.page_index, 0);
        assert!(state.has_more);
    }

    #[test]
    fn test_visible_membership_is_prefix_of_filtered() {
        let mut state = loaded(33);
        state.set_gender(GenderFilter::Male);
        state.load_more();
        state.sort_by(SortKey::FirstName);

        let mut visible_ids: Vec<u64> = state.visible.iter().map(|e| e.id).collect();
        visible_ids.sort_unstable();
        let mut prefix_ids: Vec<u64> = state
            .filtered()
            .iter()
            .take(state.visible.len())
            .map(|e| e.id)
            .collect();
        prefix_ids.sort_unstable();
        assert_eq!(visible_ids, prefix_ids);
    }
}
