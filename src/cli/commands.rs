use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::cli::error::{user_error, validate_days, validate_non_empty};
use crate::cli::output::{
    format_board, format_dashboard, format_lead_detail, format_lead_table, format_member_detail,
    format_member_table, format_stage_table, get_terminal_width, is_tty, OutputStyle,
};
use crate::config::Config;
use crate::data::Dataset;
use crate::mock::{check_anchor, hash_code, MockProfile};
use crate::models::{Member, MemberStatus};
use crate::pipeline::{classify, find_stage, AgingStatus, Board, Thresholds};
use crate::utils::fuzzy::unknown_with_suggestions;
use crate::utils::parse_date_expr;
use crate::view::{parse_sort_specs, Dashboard, LeadQuery, LeadRow, MemberQuery};

#[derive(Parser)]
#[command(name = "gymdesk")]
#[command(about = "Franchise console data engine - deterministic mock members, leads, and pipeline aging")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Anchor date for mock data (YYYY-MM-DD, today, yesterday, +Nd, -Nd)
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the deterministic seed for one or more keys
    Hash {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Classify days-in-stage into fresh / aging / stale
    Classify {
        /// Days the item has been in its current stage
        #[arg(allow_hyphen_values = true)]
        days: String,
        /// Use the thresholds of a configured stage
        #[arg(long, conflicts_with_all = ["fresh", "aging"])]
        stage: Option<String>,
        /// Last day that still counts as fresh
        #[arg(long, requires = "aging")]
        fresh: Option<u32>,
        /// Last day that still counts as aging
        #[arg(long, requires = "fresh")]
        aging: Option<u32>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Member table commands
    Members {
        #[command(subcommand)]
        subcommand: MemberCommands,
    },
    /// Lead table commands
    Leads {
        #[command(subcommand)]
        subcommand: LeadCommands,
    },
    /// Show the sales pipeline board
    Pipeline {
        /// Only leads of this brand
        #[arg(long)]
        brand: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List pipeline stages and their aging thresholds
    Stages {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Per-brand summary of members, revenue, and leads
    Dashboard {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List members
    List {
        #[arg(long)]
        brand: Option<String>,
        /// active, trial, frozen, past_due, cancelled
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive match on id or name
        #[arg(long)]
        search: Option<String>,
        /// Sort column, prefix with '-' for descending (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        sort: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a member with their synthesized profile
    Show {
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum LeadCommands {
    /// List leads
    List {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        stage: Option<String>,
        /// fresh, aging, or stale
        #[arg(long)]
        aging: Option<String>,
        #[arg(long)]
        source: Option<String>,
        /// Case-insensitive match on id or name
        #[arg(long)]
        search: Option<String>,
        /// Sort column, prefix with '-' for descending (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        sort: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a lead with its synthesized profile
    Show {
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Loaded configuration plus everything derived from it for one invocation
struct Invocation {
    config: Config,
    today: NaiveDate,
    style: OutputStyle,
}

impl Invocation {
    fn new(today_arg: Option<&str>) -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        let local_today = Local::now().date_naive();
        let today = match today_arg {
            Some(expr) => parse_date_expr(expr, local_today).unwrap_or_else(|e| user_error(&e.to_string())),
            None => config.today.unwrap_or(local_today),
        };
        check_anchor(today).unwrap_or_else(|e| user_error(&e.to_string()));
        log::debug!("Anchor date {}", today);
        let style = OutputStyle {
            color: config.color.enabled(is_tty()),
            width: get_terminal_width(),
        };
        Ok(Invocation { config, today, style })
    }

    fn dataset(&self) -> Result<Dataset> {
        Dataset::load(&self.config, self.today).context("Failed to load data")
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());
    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        // Hashing needs neither the rc file nor an anchor date
        Commands::Hash { keys } => handle_hash(keys),
        command => {
            let inv = Invocation::new(cli.today.as_deref())?;
            dispatch(&inv, command)
        }
    }
}

fn dispatch(inv: &Invocation, command: Commands) -> Result<()> {
    match command {
        Commands::Hash { keys } => handle_hash(keys),
        Commands::Classify { days, stage, fresh, aging, json } => {
            handle_classify(inv, days, stage, fresh.zip(aging), json)
        }
        Commands::Members { subcommand } => match subcommand {
            MemberCommands::List { brand, status, search, sort, json } => {
                handle_member_list(inv, brand, status, search, sort, json)
            }
            MemberCommands::Show { id, json } => handle_member_show(inv, id, json),
        },
        Commands::Leads { subcommand } => match subcommand {
            LeadCommands::List { brand, stage, aging, source, search, sort, json } => {
                handle_lead_list(inv, brand, stage, aging, source, search, sort, json)
            }
            LeadCommands::Show { id, json } => handle_lead_show(inv, id, json),
        },
        Commands::Pipeline { brand, json } => handle_pipeline(inv, brand, json),
        Commands::Stages { json } => handle_stages(inv, json),
        Commands::Dashboard { json } => handle_dashboard(inv, json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn handle_hash(keys: Vec<String>) -> Result<()> {
    for key in keys {
        println!("{}\t{}", key, hash_code(&key));
    }
    Ok(())
}

#[derive(Serialize)]
struct Classification {
    days: u32,
    fresh_max: u32,
    aging_max: u32,
    status: AgingStatus,
    border_class: &'static str,
    text_class: &'static str,
}

fn handle_classify(
    inv: &Invocation,
    days: String,
    stage: Option<String>,
    pair: Option<(u32, u32)>,
    json: bool,
) -> Result<()> {
    let days = validate_days(&days).unwrap_or_else(|e| user_error(&e));

    let thresholds = match (stage, pair) {
        (Some(stage_id), _) => {
            let data = inv.dataset()?;
            match find_stage(&data.stages, &stage_id) {
                Ok(stage) => stage.thresholds,
                Err(_) => user_error(&unknown_with_suggestions("stage", &stage_id, &data.stage_ids())),
            }
        }
        (None, Some((fresh, aging))) => {
            Thresholds::new(fresh, aging).unwrap_or_else(|e| user_error(&e.to_string()))
        }
        (None, None) => user_error("Provide --stage <ID> or both --fresh <DAYS> and --aging <DAYS>."),
    };

    let status = classify(days, thresholds);
    if json {
        return print_json(&Classification {
            days,
            fresh_max: thresholds.fresh_max(),
            aging_max: thresholds.aging_max(),
            status,
            border_class: status.border_class(),
            text_class: status.text_class(),
        });
    }
    println!("{}", status.as_str());
    Ok(())
}

fn check_brand(data: &Dataset, brand: &Option<String>) {
    if let Some(b) = brand {
        let ids = data.brand_ids();
        if !ids.iter().any(|id| id.eq_ignore_ascii_case(b)) {
            user_error(&unknown_with_suggestions("brand", b, &ids));
        }
    }
}

fn handle_member_list(
    inv: &Invocation,
    brand: Option<String>,
    status: Option<String>,
    search: Option<String>,
    sort: Vec<String>,
    json: bool,
) -> Result<()> {
    let data = inv.dataset()?;
    check_brand(&data, &brand);
    let status = status.map(|s| {
        MemberStatus::from_str(&s).unwrap_or_else(|| {
            user_error(&format!(
                "Invalid status '{}'. Use active, trial, frozen, past_due, or cancelled.",
                s
            ))
        })
    });

    let query = MemberQuery { brand, status, search, sort: parse_sort_specs(&sort) };
    let rows = query.apply(&data.members).unwrap_or_else(|e| user_error(&e.to_string()));

    if json {
        return print_json(&rows);
    }
    println!("{}", format_member_table(&rows, inv.today, &inv.style));
    Ok(())
}

#[derive(Serialize)]
struct MemberDetail<'a> {
    member: &'a Member,
    profile: MockProfile,
}

fn handle_member_show(inv: &Invocation, id: String, json: bool) -> Result<()> {
    validate_non_empty(&id, "ID").unwrap_or_else(|e| user_error(&e));
    let data = inv.dataset()?;
    let member = data
        .member(&id)
        .unwrap_or_else(|| user_error(&format!("Member '{}' not found", id)));
    let profile = data.generator.profile(&member.id);

    if json {
        return print_json(&MemberDetail { member, profile });
    }
    println!("{}", format_member_detail(member, &profile, inv.today, &inv.style));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_lead_list(
    inv: &Invocation,
    brand: Option<String>,
    stage: Option<String>,
    aging: Option<String>,
    source: Option<String>,
    search: Option<String>,
    sort: Vec<String>,
    json: bool,
) -> Result<()> {
    let data = inv.dataset()?;
    check_brand(&data, &brand);
    if let Some(s) = &stage {
        if find_stage(&data.stages, s).is_err() {
            user_error(&unknown_with_suggestions("stage", s, &data.stage_ids()));
        }
    }
    let aging = aging.map(|a| {
        AgingStatus::from_str(&a)
            .unwrap_or_else(|| user_error(&format!("Invalid aging '{}'. Use fresh, aging, or stale.", a)))
    });

    let query = LeadQuery { brand, stage, aging, source, search, sort: parse_sort_specs(&sort) };
    let rows = query
        .apply(&data.leads, &data.stages)
        .unwrap_or_else(|e| user_error(&e.to_string()));

    if json {
        return print_json(&rows);
    }
    println!("{}", format_lead_table(&rows, &inv.style));
    Ok(())
}

#[derive(Serialize)]
struct LeadDetail {
    #[serde(flatten)]
    row: LeadRow,
    profile: MockProfile,
}

fn handle_lead_show(inv: &Invocation, id: String, json: bool) -> Result<()> {
    validate_non_empty(&id, "ID").unwrap_or_else(|e| user_error(&e));
    let data = inv.dataset()?;
    let lead = data
        .leads
        .iter()
        .find(|l| l.id.eq_ignore_ascii_case(&id))
        .unwrap_or_else(|| user_error(&format!("Lead '{}' not found", id)));
    let row = LeadRow::new(lead, &data.stages);
    let profile = data.generator.profile(&lead.id);

    if json {
        return print_json(&LeadDetail { row, profile });
    }
    println!("{}", format_lead_detail(&row, &profile, inv.today, &inv.style));
    Ok(())
}

fn handle_pipeline(inv: &Invocation, brand: Option<String>, json: bool) -> Result<()> {
    let data = inv.dataset()?;
    check_brand(&data, &brand);
    let leads: Vec<_> = data
        .leads
        .iter()
        .filter(|l| brand.as_ref().map_or(true, |b| l.brand.eq_ignore_ascii_case(b)))
        .cloned()
        .collect();
    let board = Board::build(&leads, &data.stages);

    if json {
        return print_json(&board);
    }
    println!("{}", format_board(&board, &inv.style));
    Ok(())
}

fn handle_stages(inv: &Invocation, json: bool) -> Result<()> {
    let data = inv.dataset()?;
    if json {
        return print_json(&data.stages);
    }
    println!("{}", format_stage_table(&data.stages, &inv.style));
    Ok(())
}

fn handle_dashboard(inv: &Invocation, json: bool) -> Result<()> {
    let data = inv.dataset()?;
    let dashboard = Dashboard::build(&data.brands, &data.members, &data.leads, &data.stages);

    if json {
        return print_json(&dashboard);
    }
    println!("{}", format_dashboard(&dashboard, &inv.style));
    Ok(())
}
