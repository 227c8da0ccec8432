use std::time::Instant;
use tracing::{debug, info};

use crate::data::query::{
    available_categories, filter_by_status, filter_indices, find_by_id, quick_find,
    related_cases, CaseFilter,
};
use crate::data::{CaseRecord, CaseStats};
use crate::{CaseStatus, Category};

/// Number of cases shown in the dashboard's recent list and mini map.
pub const RECENT_CASE_LIMIT: usize = 6;
/// Related cases listed on the detail screen.
pub const RELATED_CASE_LIMIT: usize = 3;
/// Quick-find prefix that looks a case up by id only.
pub const ID_PREFIX: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Dashboard,
    Cases,
    Map,
    Statistics,
    CaseDetail,
}

impl AppScreen {
    /// Screens reachable from the navigation bar, in tab order.
    pub const TABS: [Self; 4] = [Self::Dashboard, Self::Cases, Self::Map, Self::Statistics];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Cases => "Cases",
            Self::Map => "Crime Map",
            Self::Statistics => "Statistics",
            Self::CaseDetail => "Case Detail",
        }
    }

    pub fn tab_index(self) -> Option<usize> {
        Self::TABS.iter().position(|tab| *tab == self)
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub cases: Vec<CaseRecord>,
    pub stats: CaseStats,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub selected_recent_index: usize,
    pub quick_find_active: bool,
    pub quick_find_query: String,
    pub filter: CaseFilter,
    pub filtered_case_indices: Vec<usize>,
    pub selected_case_index: usize,
    pub search_active: bool,
    pub category_options: Vec<Category>,
    pub map_status_filter: Option<CaseStatus>,
    pub map_case_indices: Vec<usize>,
    pub selected_marker_index: usize,
    pub marker_popup_open: bool,
    pub detail_case_index: Option<usize>,
    pub detail_return_screen: AppScreen,
    pub related_selection_index: usize,
}

impl App {
    /// Takes ownership of the generated data; screens only ever read it.
    pub fn new(cases: Vec<CaseRecord>, stats: CaseStats) -> Self {
        let filtered_case_indices = (0..cases.len()).collect::<Vec<_>>();
        let map_case_indices = filtered_case_indices.clone();
        let category_options = available_categories(&cases);

        Self {
            running: true,
            screen: AppScreen::Dashboard,
            cases,
            stats,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            selected_recent_index: 0,
            quick_find_active: false,
            quick_find_query: String::new(),
            filter: CaseFilter::default(),
            filtered_case_indices,
            selected_case_index: 0,
            search_active: false,
            category_options,
            map_status_filter: None,
            map_case_indices,
            selected_marker_index: 0,
            marker_popup_open: false,
            detail_case_index: None,
            detail_return_screen: AppScreen::Cases,
            related_selection_index: 0,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
    }

    /// True while a screen is capturing typed characters.
    pub const fn is_text_entry(&self) -> bool {
        match self.screen {
            AppScreen::Dashboard => self.quick_find_active,
            AppScreen::Cases => self.search_active,
            _ => false,
        }
    }

    pub fn switch_screen(&mut self, screen: AppScreen) {
        if self.screen != screen {
            debug!(from = self.screen.label(), to = screen.label(), "switching screen");
        }
        self.screen = screen;
        self.marker_popup_open = false;
        self.status_message.clear();
    }

    pub fn recent_cases(&self) -> &[CaseRecord] {
        &self.cases[..self.cases.len().min(RECENT_CASE_LIMIT)]
    }

    // Cases list

    pub fn apply_filters(&mut self) {
        self.filtered_case_indices = filter_indices(&self.cases, &self.filter);
        if self.selected_case_index >= self.filtered_case_indices.len() {
            self.selected_case_index = self.filtered_case_indices.len().saturating_sub(1);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.search_active = false;
        self.selected_case_index = 0;
        self.apply_filters();
    }

    pub fn cycle_status_filter(&mut self, forward: bool) {
        self.filter.status = cycle_option(self.filter.status, &CaseStatus::ALL, forward);
        self.selected_case_index = 0;
        self.apply_filters();
    }

    pub fn cycle_category_filter(&mut self, forward: bool) {
        self.filter.category = cycle_option(self.filter.category, &self.category_options, forward);
        self.selected_case_index = 0;
        self.apply_filters();
    }

    /// Opens the cases list showing only cases with `status`.
    pub fn view_cases_with_status(&mut self, status: CaseStatus) {
        self.filter = CaseFilter::with_status(status);
        self.search_active = false;
        self.selected_case_index = 0;
        self.apply_filters();
        self.switch_screen(AppScreen::Cases);
    }

    pub fn selected_case_position(&self) -> Option<usize> {
        self.filtered_case_indices
            .get(self.selected_case_index)
            .copied()
    }

    pub fn filtered_cases(&self) -> impl Iterator<Item = &CaseRecord> + '_ {
        self.filtered_case_indices
            .iter()
            .filter_map(|index| self.cases.get(*index))
    }

    // Case detail

    pub fn open_case(&mut self, index: usize, return_screen: AppScreen) {
        if index >= self.cases.len() {
            return;
        }
        if self.screen != AppScreen::CaseDetail {
            self.detail_return_screen = return_screen;
        }
        self.detail_case_index = Some(index);
        self.related_selection_index = 0;
        self.switch_screen(AppScreen::CaseDetail);
    }

    /// Opens the case with `id`, falling back to the cases list when no such
    /// case exists.
    pub fn open_case_by_id(&mut self, id: &str) -> bool {
        if let Some(index) = find_by_id(&self.cases, id) {
            let return_screen = self.screen;
            self.open_case(index, return_screen);
            return true;
        }

        self.detail_case_index = None;
        self.switch_screen(AppScreen::Cases);
        self.status_message = format!("Case {id} not found");
        false
    }

    pub fn close_detail(&mut self) {
        self.detail_case_index = None;
        let screen = self.detail_return_screen;
        self.switch_screen(screen);
    }

    pub fn detail_case(&self) -> Option<&CaseRecord> {
        self.detail_case_index.and_then(|index| self.cases.get(index))
    }

    pub fn related_case_indices(&self) -> Vec<usize> {
        self.detail_case_index
            .map(|index| related_cases(&self.cases, index, RELATED_CASE_LIMIT))
            .unwrap_or_default()
    }

    pub fn open_selected_related(&mut self) {
        if let Some(index) = self
            .related_case_indices()
            .get(self.related_selection_index)
            .copied()
        {
            self.open_case(index, self.detail_return_screen);
        }
    }

    // Map

    pub fn cycle_map_filter(&mut self, forward: bool) {
        self.map_status_filter = cycle_option(self.map_status_filter, &CaseStatus::ALL, forward);
        self.map_case_indices = filter_by_status(&self.cases, self.map_status_filter);
        self.selected_marker_index = 0;
        self.marker_popup_open = false;
    }

    pub fn selected_marker_case(&self) -> Option<(usize, &CaseRecord)> {
        let index = *self.map_case_indices.get(self.selected_marker_index)?;
        self.cases.get(index).map(|case| (index, case))
    }

    // Quick find

    /// Runs the header search. `#<id>` opens a case by id; anything else opens
    /// the case with that exact id, or else the best fuzzy title match.
    pub fn run_quick_find(&mut self) {
        let query = self.quick_find_query.trim().to_string();
        self.quick_find_active = false;
        self.quick_find_query.clear();

        if query.is_empty() {
            return;
        }

        if let Some(id) = query.strip_prefix(ID_PREFIX) {
            self.open_case_by_id(id.trim());
            return;
        }

        if find_by_id(&self.cases, &query).is_some() {
            self.open_case_by_id(&query);
        } else if let Some(index) = quick_find(&self.cases, &query) {
            info!(query = %query, case_id = %self.cases[index].id, "quick find matched");
            self.open_case(index, AppScreen::Dashboard);
        } else {
            self.status_message = format!("No case matches \"{query}\"");
        }
    }
}

/// Steps through `None` followed by each option, wrapping at both ends.
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }

    let position = current
        .and_then(|value| options.iter().position(|option| *option == value))
        .map_or(0, |index| index + 1);
    let len = options.len() + 1;
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };

    next.checked_sub(1).map(|index| options[index])
}
