// Output formatting utilities

use std::io::IsTerminal;

use chrono::NaiveDate;

use crate::mock::{hash_code, MockProfile};
use crate::models::{Member, MemberStatus};
use crate::pipeline::{AgingStatus, Board, StageConfig};
use crate::utils::format_relative_days;
use crate::view::{BrandSummary, Dashboard, LeadRow};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";
const ANSI_FG_BRIGHT_BLUE: &str = "\x1b[94m";
const ANSI_FG_BRIGHT_MAGENTA: &str = "\x1b[95m";
const ANSI_FG_BRIGHT_CYAN: &str = "\x1b[96m";

// Brands get a stable color from the same seed hash the mock data uses
const CATEGORICAL_FG_PALETTE: &[&str] = &[
    ANSI_FG_BLUE,
    ANSI_FG_CYAN,
    ANSI_FG_MAGENTA,
    ANSI_FG_BRIGHT_BLUE,
    ANSI_FG_BRIGHT_CYAN,
    ANSI_FG_BRIGHT_MAGENTA,
];

/// Narrowest a truncated column may get
const MIN_TRUNCATED_WIDTH: usize = 8;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, falling back to `COLUMNS` and then 120.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Rendering options shared by every formatter
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub color: bool,
    pub width: usize,
}

impl OutputStyle {
    pub fn plain() -> Self {
        OutputStyle { color: false, width: usize::MAX }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color && !code.is_empty() {
            format!("{}{}{}", code, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, ANSI_BOLD)
    }
}

pub fn aging_fg(status: AgingStatus) -> &'static str {
    match status {
        AgingStatus::Fresh => ANSI_FG_GREEN,
        AgingStatus::Aging => ANSI_FG_YELLOW,
        AgingStatus::Stale => ANSI_FG_RED,
    }
}

fn status_fg(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => ANSI_FG_GREEN,
        MemberStatus::Trial => ANSI_FG_CYAN,
        MemberStatus::Frozen => ANSI_FG_BLUE,
        MemberStatus::PastDue => ANSI_FG_RED,
        MemberStatus::Cancelled => ANSI_FG_BRIGHT_BLACK,
    }
}

fn brand_fg(brand: &str) -> &'static str {
    if brand.is_empty() {
        return ANSI_FG_BRIGHT_BLACK;
    }
    CATEGORICAL_FG_PALETTE[hash_code(brand) as usize % CATEGORICAL_FG_PALETTE.len()]
}

/// Format cents as dollars with thousands separators ("$1,299.00")
pub fn format_cents(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

struct Cell {
    text: String,
    color: &'static str,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Cell { text: text.into(), color: "" }
    }

    fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Cell { text: text.into(), color }
    }
}

/// Render aligned columns; the `shrink` column is truncated to fit the width
fn render_table(headers: &[&str], rows: &[Vec<Cell>], shrink: Option<usize>, style: &OutputStyle) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    if let Some(col) = shrink {
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        if total > style.width {
            let excess = total - style.width;
            widths[col] = widths[col].saturating_sub(excess).max(MIN_TRUNCATED_WIDTH);
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    lines.push(style.bold(header.join("  ").trim_end()));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let text = truncate(&cell.text, *w);
                let padded = format!("{:<width$}", text, width = *w);
                style.paint(&padded, cell.color)
            })
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

pub fn format_member_table(members: &[Member], today: NaiveDate, style: &OutputStyle) -> String {
    if members.is_empty() {
        return "No members found.".to_string();
    }
    let rows: Vec<Vec<Cell>> = members
        .iter()
        .map(|m| {
            vec![
                Cell::plain(m.id.clone()),
                Cell::plain(m.name.clone()),
                Cell::colored(m.brand.clone(), brand_fg(&m.brand)),
                Cell::plain(m.plan.clone()),
                Cell::colored(m.status.as_str(), status_fg(m.status)),
                Cell::plain(format!("{} ({})", m.joined, format_relative_days(m.joined, today))),
                Cell::plain(format_cents(m.monthly_fee_cents as u64)),
            ]
        })
        .collect();
    let table = render_table(&["ID", "Name", "Brand", "Plan", "Status", "Joined", "Fee"], &rows, Some(1), style);
    format!("{}\n\n{} member(s)", table, members.len())
}

pub fn format_member_detail(member: &Member, profile: &MockProfile, today: NaiveDate, style: &OutputStyle) -> String {
    let mut out = Vec::new();
    out.push(style.bold(&format!("{} ({})", member.name, member.id)));
    out.push(format!("  Brand:        {}", style.paint(&member.brand, brand_fg(&member.brand))));
    out.push(format!("  Plan:         {} ({}/mo)", member.plan, format_cents(member.monthly_fee_cents as u64)));
    out.push(format!("  Status:       {}", style.paint(member.status.as_str(), status_fg(member.status))));
    out.push(format!("  Joined:       {} ({})", member.joined, format_relative_days(member.joined, today)));
    out.push(String::new());
    out.extend(format_profile_lines(profile, today, style));
    out.join("\n")
}

pub fn format_lead_detail(row: &LeadRow, profile: &MockProfile, today: NaiveDate, style: &OutputStyle) -> String {
    let lead = &row.lead;
    let aging = match row.aging {
        Some(a) => style.paint(a.as_str(), aging_fg(a)),
        None => style.paint("unknown stage", ANSI_DIM),
    };
    let mut out = Vec::new();
    out.push(style.bold(&format!("{} ({})", lead.name, lead.id)));
    out.push(format!("  Brand:        {}", style.paint(&lead.brand, brand_fg(&lead.brand))));
    out.push(format!("  Source:       {}", lead.source));
    out.push(format!("  Stage:        {} for {} day(s), {}", row.stage_label, lead.days_in_stage, aging));
    out.push(format!("  Value:        {}", format_cents(lead.value_cents as u64)));
    out.push(String::new());
    out.extend(format_profile_lines(profile, today, style));
    out.join("\n")
}

fn format_profile_lines(profile: &MockProfile, today: NaiveDate, style: &OutputStyle) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!("  Coach:        {}", profile.coach));
    let appt = &profile.next_appointment;
    out.push(format!(
        "  Next appt:    {} {} ({})",
        appt.date,
        appt.time,
        format_relative_days(appt.date, today)
    ));
    if profile.alerts.is_empty() {
        out.push("  Alerts:       none".to_string());
    } else {
        out.push("  Alerts:".to_string());
        for alert in &profile.alerts {
            out.push(format!("    {}", style.paint(&format!("! {}", alert), ANSI_FG_RED)));
        }
    }
    out.push(format!("  Visits ({}):", profile.visits.len()));
    for visit in &profile.visits {
        out.push(format!(
            "    {}  {:<18} {}",
            visit.date,
            visit.kind,
            style.paint(&format_relative_days(visit.date, today), ANSI_DIM)
        ));
    }
    out
}

pub fn format_lead_table(rows: &[LeadRow], style: &OutputStyle) -> String {
    if rows.is_empty() {
        return "No leads found.".to_string();
    }
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            let (aging, color) = match row.aging {
                Some(a) => (a.as_str(), aging_fg(a)),
                None => ("?", ANSI_FG_BRIGHT_BLACK),
            };
            vec![
                Cell::plain(row.lead.id.clone()),
                Cell::plain(row.lead.name.clone()),
                Cell::colored(row.lead.brand.clone(), brand_fg(&row.lead.brand)),
                Cell::plain(row.lead.source.clone()),
                Cell::plain(row.stage_label.clone()),
                Cell::colored(row.lead.days_in_stage.to_string(), color),
                Cell::colored(aging, color),
                Cell::plain(format_cents(row.lead.value_cents as u64)),
            ]
        })
        .collect();
    let table = render_table(
        &["ID", "Name", "Brand", "Source", "Stage", "Days", "Aging", "Value"],
        &cells,
        Some(1),
        style,
    );
    format!("{}\n\n{} lead(s)", table, rows.len())
}

pub fn format_board(board: &Board, style: &OutputStyle) -> String {
    let mut out = Vec::new();
    for column in &board.columns {
        let counts = &column.counts;
        out.push(format!(
            "{}  [{} fresh / {} aging / {} stale]",
            style.bold(&format!("{} ({})", column.stage.label, column.cards.len())),
            counts.fresh,
            counts.aging,
            counts.stale
        ));
        if column.cards.is_empty() {
            out.push(format!("  {}", style.paint("(empty)", ANSI_DIM)));
        }
        for card in &column.cards {
            let marker = style.paint(&format!("{:>3}d", card.lead.days_in_stage), aging_fg(card.aging));
            out.push(format!(
                "  {} {:<9} {}  {}",
                marker,
                card.lead.id,
                card.lead.name,
                style.paint(&card.lead.brand, brand_fg(&card.lead.brand))
            ));
        }
        out.push(String::new());
    }
    out.push(format!("At risk (aging or stale, open stages): {}", board.at_risk()));
    if board.skipped > 0 {
        out.push(format!("Leads in unknown stages: {}", board.skipped));
    }
    out.join("\n")
}

pub fn format_stage_table(stages: &[StageConfig], style: &OutputStyle) -> String {
    if stages.is_empty() {
        return "No stages configured.".to_string();
    }
    let rows: Vec<Vec<Cell>> = stages
        .iter()
        .map(|s| {
            vec![
                Cell::plain(s.id.clone()),
                Cell::plain(s.label.clone()),
                Cell::plain(s.group.as_str()),
                Cell::colored(format!("<= {}", s.thresholds.fresh_max()), ANSI_FG_GREEN),
                Cell::colored(format!("<= {}", s.thresholds.aging_max()), ANSI_FG_YELLOW),
            ]
        })
        .collect();
    render_table(&["ID", "Label", "Group", "Fresh", "Aging"], &rows, None, style)
}

fn dashboard_row(summary: &BrandSummary) -> Vec<Cell> {
    let win_rate = summary
        .win_rate
        .map(|r| format!("{:.0}%", r * 100.0))
        .unwrap_or_else(|| "-".to_string());
    let risk_color = if summary.at_risk_leads > 0 { ANSI_FG_YELLOW } else { "" };
    vec![
        Cell::colored(summary.name.clone(), brand_fg(&summary.brand)),
        Cell::plain(summary.active_members.to_string()),
        Cell::plain(summary.trial_members.to_string()),
        Cell::plain(format_cents(summary.mrr_cents)),
        Cell::plain(summary.open_leads.to_string()),
        Cell::colored(summary.at_risk_leads.to_string(), risk_color),
        Cell::plain(format!("{}/{}", summary.won, summary.lost)),
        Cell::plain(win_rate),
    ]
}

pub fn format_dashboard(dashboard: &Dashboard, style: &OutputStyle) -> String {
    let mut rows: Vec<Vec<Cell>> = dashboard.brands.iter().map(dashboard_row).collect();
    let mut totals = dashboard_row(&dashboard.totals);
    totals[0] = Cell::colored(dashboard.totals.name.clone(), ANSI_BOLD);
    rows.push(totals);
    render_table(
        &["Brand", "Active", "Trial", "MRR", "Open leads", "At risk", "Won/Lost", "Win rate"],
        &rows,
        Some(0),
        style,
    )
}
