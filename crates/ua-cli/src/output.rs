//! Console rendering. Formatting functions return strings; the reporter
//! and command handlers print them.

use ua_core::{AccountStatus, Directory, Identity, Operation, OperationResult};
use ua_engine::{BatchPreview, RunReporter, RunStats};

use std::fmt::Write;

const PLACEHOLDER: &str = "—";
const RULE_WIDTH: usize = 50;

pub const SETUP_INSTRUCTIONS: &str = "\
✗ Error: UA_ORG_ID or UA_API_KEY is not set

Setup instructions:
1. Create a .env file in the working directory
2. Add the following:
   UA_ORG_ID=your-organization-id
   UA_API_KEY=your-api-key

How to get an API key:
1. Go to the organization admin console
2. Settings → API keys
3. Create an API key without scopes
4. Make sure you have Organization Admin rights

How to find the organization ID:
1. Open the organization admin console
2. The URL looks like: admin.atlassian.com/o/YOUR-ORG-ID/...";

pub const CONNECTION_RECOMMENDATIONS: &str = "\
Recommendations:
1. Make sure the API key was created without scopes
2. Check that you have Organization Admin rights
3. Check that the organization ID is correct
4. Make sure your organization's domain is verified";

/// Users per account status, as shown under the user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub active: usize,
    pub suspended: usize,
    pub deactivated: usize,
    pub unknown: usize,
    pub total: usize,
}

impl StatusBreakdown {
    pub fn of(users: &[Identity]) -> Self {
        users.iter().fold(Self::default(), |mut counts, user| {
            match user.status.unwrap_or_default() {
                AccountStatus::Active => counts.active += 1,
                AccountStatus::Suspended => counts.suspended += 1,
                AccountStatus::Deactivated => counts.deactivated += 1,
                AccountStatus::Unknown => counts.unknown += 1,
            }
            counts.total += 1;
            counts
        })
    }
}

fn short_directory(directory_id: &str) -> String {
    match directory_id.char_indices().nth(8) {
        Some((idx, _)) => format!("{}...", &directory_id[..idx]),
        None => directory_id.to_string(),
    }
}

fn user_row(user: &Identity) -> [String; 6] {
    [
        user.email.clone(),
        user.display_name.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        user.account_id.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        user.status.unwrap_or_default().to_string(),
        user.account_type.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        user.directory_id
            .as_deref()
            .map(short_directory)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ]
}

pub fn format_user_table(users: &[Identity], title: &str, directories: &[Directory]) -> String {
    let headers = ["Email", "Name", "Account ID", "Status", "Type", "Dir"];

    let mut sorted: Vec<&Identity> = users.iter().collect();
    sorted.sort_by(|a, b| a.email.cmp(&b.email));
    let rows: Vec<[String; 6]> = sorted.into_iter().map(user_row).collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if !directories.is_empty() {
        let info: Vec<String> = directories
            .iter()
            .map(|d| format!("{} ({}...)", d.name, d.short_id()))
            .collect();
        let _ = writeln!(out, "Directories: {}", info.join(", "));
    }

    let _ = writeln!(out, "{title}");
    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let _ = writeln!(out, "{}", line(&header_cells));
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(total_width));
    for row in &rows {
        let _ = writeln!(out, "{}", line(row));
    }

    let counts = StatusBreakdown::of(users);
    let _ = write!(
        out,
        "\nStatistics: ✓ Active: {} | ⏸ Suspended: {} | ✗ Deactivated: {} | ? Unknown: {} | Total: {}",
        counts.active, counts.suspended, counts.deactivated, counts.unknown, counts.total
    );

    out
}

pub fn format_user_details(user: &Identity) -> String {
    let mut out = String::from("✓ User found!\n");
    let _ = writeln!(out, "   Email: {}", user.email);
    let _ = writeln!(
        out,
        "   Account ID: {}",
        user.account_id.as_deref().unwrap_or(PLACEHOLDER)
    );
    let _ = writeln!(
        out,
        "   Name: {}",
        user.display_name.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(out, "   Status: {}", user.status.unwrap_or_default());
    let _ = write!(
        out,
        "   Type: {}",
        user.account_type.as_deref().unwrap_or(PLACEHOLDER)
    );
    if let Some(directory_id) = &user.directory_id {
        let _ = write!(out, "\n   Directory ID: {directory_id}");
    }
    out
}

pub fn format_preview(preview: &BatchPreview) -> String {
    let mut out = format!(
        "⚠️  WARNING: {} user(s) will be {}!\n\nFirst {} users:",
        preview.total,
        preview.action(),
        preview.shown.len()
    );
    for entry in &preview.shown {
        let _ = write!(out, "\n  - {entry}");
    }
    if preview.remaining > 0 {
        let _ = write!(out, "\n  ... and {} more users", preview.remaining);
    }
    out
}

/// One inline progress line per processed identity.
pub fn format_item_line(result: &OperationResult) -> String {
    if !result.success {
        return format!("  ✗ {} - {}", result.email, result.message);
    }

    let mut parts = Vec::new();
    if let Some(action) = result.lifecycle_action {
        parts.push(format!("✓ Lifecycle {action}"));
    }
    if let Some(action) = result.access_action {
        parts.push(format!("✓ Access {action}"));
    }
    let status = if parts.is_empty() {
        "✓".to_string()
    } else {
        parts.join(" | ")
    };

    format!("  {} {} - {}", status, result.email, result.message)
}

pub fn format_run_summary(stats: &RunStats, operation: Operation, dry_run: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "{rule}\nFINAL STATISTICS - {}:\n",
        operation.as_str().to_uppercase()
    );

    if dry_run {
        let _ = writeln!(out, "✓ Ready for operation: {}", stats.successful);
        let _ = writeln!(out, "✗ Check problems: {}", stats.failed);
    } else {
        let _ = writeln!(
            out,
            "✓ Successfully {}: {}",
            operation.past_tense(),
            stats.successful
        );
        if stats.lifecycle_applied > 0 {
            let _ = writeln!(
                out,
                "   └─ Lifecycle {}: {}",
                operation.lifecycle_action(),
                stats.lifecycle_applied
            );
        }
        if stats.access_applied > 0 {
            let _ = writeln!(
                out,
                "   └─ Access {}: {}",
                operation.access_action(),
                stats.access_applied
            );
        }
        let _ = writeln!(out, "✗ Failed to process: {}", stats.failed);
    }

    let _ = write!(out, "Total processed: {}\n{rule}", stats.total);

    if stats.failed > 0 {
        out.push_str(
            "\n\nError resolution recommendations:\n\
             1. Check API key permissions (Organization Admin rights required)\n\
             2. Ensure the user's domain is verified\n\
             3. Check account ids in the roster\n\
             4. Use the show-cloud-users command for verification",
        );
    }

    out
}

/// Prints run progress to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl RunReporter for ConsoleReporter {
    fn resuming(&self, processed: usize) {
        println!("\n📁 Resuming: {processed} users already processed");
    }

    fn preview(&self, preview: &BatchPreview) {
        println!("\n{}\n", format_preview(preview));
    }

    fn started(&self, total: usize, operation: Operation, dry_run: bool) {
        let verb = if dry_run { "Testing" } else { "Processing" };
        println!("{verb} {operation} for {total} users...");
    }

    fn item_finished(&self, index: usize, total: usize, result: &OperationResult) {
        println!("[{index}/{total}]{}", format_item_line(result));
    }
}
