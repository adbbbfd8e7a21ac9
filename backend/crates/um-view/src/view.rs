//! The dashboard state container.

use crate::{
    CsvExport, Notice, Pagination, Result as ViewResult, UserFilter, UserSummary, ViewStats,
    render, to_csv,
};

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Local, TimeZone};
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

/// Owns the loaded users and everything derived from them.
///
/// `filtered` is always `all` narrowed by `filter`, in the same order; any
/// change to either recomputes it and sends pagination back to page 1.
#[derive(Debug, Default)]
pub struct UserView {
    all: Vec<UserSummary>,
    filtered: Vec<UserSummary>,
    filter: UserFilter,
    pagination: Pagination,
    mode: ViewMode,
    notices: VecDeque<Notice>,
}

impl UserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[UserSummary] {
        &self.all
    }

    pub fn filtered(&self) -> &[UserSummary] {
        &self.filtered
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Swap in a freshly loaded list and reapply the current filter.
    pub fn replace_all(&mut self, users: Vec<UserSummary>) {
        self.replace_all_at(users, &Local::now());
    }

    pub fn replace_all_at<Tz: TimeZone>(&mut self, users: Vec<UserSummary>, now: &DateTime<Tz>) {
        info!("Loaded {} users", users.len());
        self.all = users;
        self.apply_filter_at(now);
    }

    pub fn set_filter(&mut self, filter: UserFilter) {
        self.set_filter_at(filter, &Local::now());
    }

    pub fn set_filter_at<Tz: TimeZone>(&mut self, filter: UserFilter, now: &DateTime<Tz>) {
        self.filter = filter;
        self.apply_filter_at(now);
    }

    pub fn apply_filter(&mut self) {
        self.apply_filter_at(&Local::now());
    }

    pub fn apply_filter_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.filtered = self
            .all
            .iter()
            .filter(|user| self.filter.matches(user, now))
            .cloned()
            .collect();
        self.pagination.reset();

        debug!(
            "Filter {:?} kept {} of {} users",
            self.filter,
            self.filtered.len(),
            self.all.len()
        );
    }

    pub fn current_page(&self) -> &[UserSummary] {
        &self.filtered[self.pagination.range(self.filtered.len())]
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.filtered.len());
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev(self.filtered.len());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.filtered.len());
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered.len())
    }

    pub fn page_label(&self) -> String {
        self.pagination.page_label(self.filtered.len())
    }

    pub fn showing_label(&self) -> String {
        self.pagination.showing_label(self.filtered.len())
    }

    pub fn find(&self, user_id: i64) -> Option<&UserSummary> {
        self.all.iter().find(|user| user.user_id == user_id)
    }

    /// Sorted distinct non-empty countries across all loaded users.
    pub fn country_options(&self) -> Vec<String> {
        self.all
            .iter()
            .filter_map(|user| user.country.as_deref())
            .filter(|country| !country.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ViewStats {
        ViewStats::compute(&self.all, now)
    }

    /// The current page in the active layout, or the empty-result block.
    pub fn render_page(&self) -> String {
        let page = self.current_page();
        if page.is_empty() {
            return render::render_empty(&self.filter.query);
        }

        match self.mode {
            ViewMode::Table => render::render_table(page),
            ViewMode::Grid => render::render_grid(page),
        }
    }

    /// CSV of the whole filtered list. Pushes a notice either way.
    pub fn export_csv(&mut self) -> ViewResult<CsvExport> {
        self.export_csv_at(&Local::now())
    }

    pub fn export_csv_at<Tz>(&mut self, now: &DateTime<Tz>) -> ViewResult<CsvExport>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match to_csv(&self.filtered, &now.timezone(), now.date_naive()) {
            Ok(export) => {
                self.push_notice(Notice::success(format!(
                    "Exported {} users to CSV",
                    export.rows
                )));
                Ok(export)
            }
            Err(e) => {
                warn!("{}", e);
                self.push_notice(Notice::error("No data to export"));
                Err(e)
            }
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
