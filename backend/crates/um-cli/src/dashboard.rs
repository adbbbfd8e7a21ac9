//! Terminal dashboard: one `UserView` driven by shortcut lines.

use crate::{CliClientResult, Client};

use um_view::{
    DateBucket, Notice, NoticeLevel, UserFilter, UserSummary, UserView, ViewMode,
    placeholder_users, render_detail, users_from_response,
};

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{info, warn};
use serde_json::Value;

/// Users requested per reload
pub const LOAD_LIMIT: i64 = 1000;

pub const HELP: &str = "r refresh | e export | /text search | c <country> | d today|week|month|all | n/p page | t/g table/grid | v <id> details | q quit";

/// One input line in the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    Refresh,
    Export,
    Search(String),
    /// `None` clears the country filter
    Country(Option<String>),
    Date(DateBucket),
    NextPage,
    PrevPage,
    Table,
    Grid,
    Details(i64),
    Help,
    Quit,
}

impl Shortcut {
    /// Parse one line. Unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();

        if let Some(query) = line.strip_prefix('/') {
            return Some(Shortcut::Search(query.trim().to_string()));
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        let shortcut = match (command, arg) {
            ("r", "") => Shortcut::Refresh,
            ("e", "") => Shortcut::Export,
            ("c", "") => Shortcut::Country(None),
            ("c", country) => Shortcut::Country(Some(country.to_string())),
            ("d", bucket) => Shortcut::Date(bucket.parse().ok()?),
            ("n", "") => Shortcut::NextPage,
            ("p", "") => Shortcut::PrevPage,
            ("t", "") => Shortcut::Table,
            ("g", "") => Shortcut::Grid,
            ("v", id) => Shortcut::Details(id.parse().ok()?),
            ("h" | "?", "") => Shortcut::Help,
            ("q", "") => Shortcut::Quit,
            _ => return None,
        };

        Some(shortcut)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Dashboard {
    client: Client,
    view: UserView,
    export_dir: PathBuf,
    last_update: Option<DateTime<Local>>,
    detail: Option<String>,
}

impl Dashboard {
    pub fn new(client: Client, export_dir: impl AsRef<Path>) -> Self {
        Self {
            client,
            view: UserView::new(),
            export_dir: export_dir.as_ref().to_path_buf(),
            last_update: None,
            detail: None,
        }
    }

    pub fn view(&self) -> &UserView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut UserView {
        &mut self.view
    }

    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }

    async fn load_users(&self) -> CliClientResult<Vec<UserSummary>> {
        let body = self.client.list_users(Some(LOAD_LIMIT)).await?;
        Ok(users_from_response(body)?)
    }

    /// Reload the list from the server, falling back to placeholder users.
    pub async fn reload(&mut self) {
        match self.load_users().await {
            Ok(users) => self.view.replace_all(users),
            Err(e) => {
                warn!("Error loading users: {}", e);
                self.view
                    .push_notice(Notice::error(format!("Error loading users: {}", e.summary())));
                self.view.replace_all(placeholder_users());
                self.view
                    .push_notice(Notice::info("Loaded sample data for demonstration"));
            }
        }
    }

    /// Pull from the upstream API through the server, then reload.
    pub async fn refresh(&mut self) {
        self.view
            .push_notice(Notice::info("Fetching latest data from external API..."));

        match self.client.fetch_external().await {
            Ok(body) => info!("{}", sync_line(&body)),
            Err(e) => {
                warn!("Error fetching external data: {}", e);
                self.view
                    .push_notice(Notice::error(format!("Error fetching data: {}", e.summary())));
            }
        }

        self.reload().await;
        self.last_update = Some(Local::now());
    }

    /// Write the filtered list as CSV into the export directory.
    pub async fn export(&mut self) -> Option<PathBuf> {
        let export = self.view.export_csv().ok()?;
        let path = self.export_dir.join(&export.filename);

        match tokio::fs::write(&path, export.content).await {
            Ok(()) => {
                info!("Exported {} users to {}", export.rows, path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failed to write {}: {}", path.display(), e);
                self.view
                    .push_notice(Notice::error(format!("Failed to write {}: {}", path.display(), e)));
                None
            }
        }
    }

    /// Detail view for `user_id`. The server copy carries the stored payload;
    /// the loaded list is used when the server can't answer.
    pub async fn show_details(&mut self, user_id: i64) {
        let remote = match self.client.get_user(user_id).await {
            Ok(mut body) => body
                .get_mut("user")
                .map(Value::take)
                .and_then(|user| serde_json::from_value::<UserSummary>(user).ok()),
            Err(e) => {
                warn!("Failed to fetch user {}: {}", user_id, e);
                None
            }
        };

        match remote.as_ref().or_else(|| self.view.find(user_id)) {
            Some(user) => self.detail = Some(render_detail(user)),
            None => self
                .view
                .push_notice(Notice::error(format!("User {} not found", user_id))),
        }
    }

    pub async fn handle(&mut self, shortcut: Shortcut) -> Control {
        self.detail = None;

        match shortcut {
            Shortcut::Refresh => self.refresh().await,
            Shortcut::Export => {
                self.export().await;
            }
            Shortcut::Search(query) => {
                let filter = UserFilter {
                    query,
                    ..self.view.filter().clone()
                };
                self.view.set_filter(filter);
            }
            Shortcut::Country(country) => {
                let filter = UserFilter {
                    country,
                    ..self.view.filter().clone()
                };
                self.view.set_filter(filter);
            }
            Shortcut::Date(date) => {
                let filter = UserFilter {
                    date,
                    ..self.view.filter().clone()
                };
                self.view.set_filter(filter);
            }
            Shortcut::NextPage => self.view.next_page(),
            Shortcut::PrevPage => self.view.prev_page(),
            Shortcut::Table => self.view.set_mode(ViewMode::Table),
            Shortcut::Grid => self.view.set_mode(ViewMode::Grid),
            Shortcut::Details(id) => self.show_details(id).await,
            Shortcut::Help => self.view.push_notice(Notice::info(HELP)),
            Shortcut::Quit => return Control::Quit,
        }

        Control::Continue
    }

    /// Text for one redraw. Pending notices are consumed.
    pub fn screen(&mut self) -> String {
        let mut out = String::new();
        let stats = self.view.stats(&Local::now());
        let filter = self.view.filter();

        let _ = writeln!(
            out,
            "Users: {} | Today: {} | Last 7 days: {} | Countries: {}",
            stats.total, stats.today, stats.recent, stats.countries
        );
        let _ = writeln!(
            out,
            "Search: \"{}\" | Country: {} | Date: {} | Last update: {}",
            filter.query,
            filter.country.as_deref().unwrap_or("all"),
            filter.date,
            self.last_update
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "never".to_string())
        );
        let _ = writeln!(out, "Countries: {}", self.view.country_options().join(", "));
        let _ = writeln!(out);

        match &self.detail {
            Some(detail) => out.push_str(detail),
            None => {
                out.push_str(&self.view.render_page());
                let _ = writeln!(out);
                let _ = writeln!(
                    out,
                    "{} | {}",
                    self.view.showing_label(),
                    self.view.page_label()
                );
            }
        }

        for notice in self.view.drain_notices() {
            let tag = match notice.level {
                NoticeLevel::Info => "info",
                NoticeLevel::Success => "ok",
                NoticeLevel::Error => "error",
            };
            let _ = writeln!(out, "[{}] {}", tag, notice.message);
        }

        out
    }
}

/// Compact summary line for a sync response body
pub fn sync_line(body: &Value) -> String {
    let summary = &body["summary"];
    format!(
        "{}: {} received, {} new, {} updated, {} skipped, {} errors",
        body["message"].as_str().unwrap_or("Sync finished"),
        summary["totalReceived"],
        summary["newUsers"],
        summary["updatedUsers"],
        summary["skipped"],
        summary["errors"]
    )
}
