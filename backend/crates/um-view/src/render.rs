//! Plain-text layouts for the terminal dashboard.

use crate::{UserSummary, format_date};

use std::fmt::Write;

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

fn username_label(user: &UserSummary) -> String {
    match user.username.as_deref() {
        Some(name) if !name.is_empty() => format!("@{}", name),
        _ => "N/A".to_string(),
    }
}

fn account_label(user: &UserSummary) -> String {
    user.account_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn status_label(user: &UserSummary) -> &'static str {
    if user.email_verified {
        "Verified"
    } else {
        "Pending"
    }
}

/// Block shown in place of rows when nothing matches.
pub fn render_empty(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "No users found\nNo users match your search criteria".to_string()
    } else {
        format!(
            "No users found\nNo users match your search criteria for \"{}\"",
            query
        )
    }
}

pub fn render_table(users: &[UserSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<24} {:<18} {:<12} {:<10} {:<24} {}",
        "ID", "Name", "Username", "Country", "Account", "Join Date", "Status"
    );

    for user in users {
        let name = format!("[{}] {}", user.initial(), user.full_name());
        let _ = writeln!(
            out,
            "{:<10} {:<24} {:<18} {:<12} {:<10} {:<24} {}",
            user.user_id,
            name,
            username_label(user),
            user.country.as_deref().filter(|c| !c.is_empty()).unwrap_or("Unknown"),
            account_label(user),
            format_date(user.open_date),
            status_label(user)
        );
    }

    out
}

pub fn render_grid(users: &[UserSummary]) -> String {
    let mut cards = Vec::with_capacity(users.len());

    for user in users {
        let mut card = String::new();
        let _ = writeln!(card, "[{}] {}", user.initial(), user.full_name());
        let _ = writeln!(card, "    {}", username_label(user));
        let _ = writeln!(card, "    Country: {}", or_na(user.country.as_deref()));
        let _ = writeln!(card, "    Account ID: {}", account_label(user));
        let _ = writeln!(card, "    Joined: {}", format_date(user.open_date));
        let _ = write!(card, "    {} | ID {}", status_label(user), user.user_id);
        cards.push(card);
    }

    cards.join("\n\n")
}

pub fn render_detail(user: &UserSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", user.initial(), user.full_name());
    let _ = writeln!(out, "  User ID:        {}", user.user_id);
    let _ = writeln!(out, "  Username:       {}", or_na(user.username.as_deref()));
    let _ = writeln!(out, "  Country:        {}", or_na(user.country.as_deref()));
    let _ = writeln!(out, "  Account ID:     {}", account_label(user));
    let _ = writeln!(out, "  Join Date:      {}", format_date(user.open_date));
    let _ = writeln!(
        out,
        "  User Type:      {}",
        user.user_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    let _ = writeln!(
        out,
        "  Parent ID:      {}",
        user.parent_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    let _ = writeln!(
        out,
        "  Email Verified: {}",
        if user.email_verified { "Yes" } else { "No" }
    );

    if let Some(policy) = user.attribute("currenciesPoliciesID") {
        let policy = match policy {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let _ = writeln!(out, "  Additional Info:");
        let _ = writeln!(out, "    Currencies Policy ID: {}", policy);
    }

    out
}
