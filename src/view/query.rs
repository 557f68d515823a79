// Member and lead table queries: filter, then sort

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{Lead, Member, MemberStatus};
use crate::pipeline::{aging_status, AgingStatus, StageConfig};
use crate::utils::fuzzy::is_substring_match;
use crate::view::error::ViewError;
use crate::view::sort::{compare_ids, validate_sort_specs, SortSpec};

pub const MEMBER_SORT_COLUMNS: &[&str] = &["id", "name", "brand", "plan", "status", "joined", "fee"];
pub const LEAD_SORT_COLUMNS: &[&str] = &["id", "name", "brand", "source", "stage", "days", "value", "aging"];

fn matches_search(id: &str, name: &str, search: &Option<String>) -> bool {
    match search {
        Some(term) => is_substring_match(id, term) || is_substring_match(name, term),
        None => true,
    }
}

fn matches_brand(brand: &str, filter: &Option<String>) -> bool {
    filter.as_ref().map_or(true, |b| brand.eq_ignore_ascii_case(b))
}

#[derive(Debug, Clone, Default)]
pub struct MemberQuery {
    pub brand: Option<String>,
    pub status: Option<MemberStatus>,
    pub search: Option<String>,
    pub sort: Vec<SortSpec>,
}

impl MemberQuery {
    pub fn matches(&self, member: &Member) -> bool {
        matches_brand(&member.brand, &self.brand)
            && self.status.map_or(true, |s| member.status == s)
            && matches_search(&member.id, &member.name, &self.search)
    }

    /// Filtered members, sorted by the query's specs then by id
    pub fn apply(&self, members: &[Member]) -> Result<Vec<Member>, ViewError> {
        validate_sort_specs(&self.sort, MEMBER_SORT_COLUMNS)?;

        let mut rows: Vec<Member> = members.iter().filter(|m| self.matches(m)).cloned().collect();
        rows.sort_by(|a, b| {
            self.sort
                .iter()
                .fold(Ordering::Equal, |acc, spec| {
                    acc.then_with(|| spec.apply(compare_members(a, b, &spec.column)))
                })
                .then_with(|| compare_ids(&a.id, &b.id))
        });
        Ok(rows)
    }
}

fn compare_members(a: &Member, b: &Member, column: &str) -> Ordering {
    match column {
        "id" => compare_ids(&a.id, &b.id),
        "name" => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        "brand" => a.brand.cmp(&b.brand),
        "plan" => a.plan.cmp(&b.plan),
        "status" => a.status.cmp(&b.status),
        "joined" => a.joined.cmp(&b.joined),
        "fee" => a.monthly_fee_cents.cmp(&b.monthly_fee_cents),
        _ => Ordering::Equal,
    }
}

/// A lead joined with its stage label and aging bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRow {
    #[serde(flatten)]
    pub lead: Lead,
    pub stage_label: String,
    /// Position of the stage on the board; unknown stages sort last
    #[serde(skip)]
    pub stage_order: usize,
    /// None when the lead's stage is not configured
    pub aging: Option<AgingStatus>,
}

impl LeadRow {
    pub fn new(lead: &Lead, stages: &[StageConfig]) -> Self {
        match stages.iter().position(|s| s.id.eq_ignore_ascii_case(&lead.stage)) {
            Some(idx) => LeadRow {
                lead: lead.clone(),
                stage_label: stages[idx].label.clone(),
                stage_order: idx,
                aging: Some(aging_status(lead.days_in_stage, &stages[idx])),
            },
            None => LeadRow {
                lead: lead.clone(),
                stage_label: lead.stage.clone(),
                stage_order: usize::MAX,
                aging: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    pub brand: Option<String>,
    pub stage: Option<String>,
    pub aging: Option<AgingStatus>,
    pub source: Option<String>,
    pub search: Option<String>,
    pub sort: Vec<SortSpec>,
}

impl LeadQuery {
    pub fn matches(&self, row: &LeadRow) -> bool {
        let lead = &row.lead;
        matches_brand(&lead.brand, &self.brand)
            && self.stage.as_ref().map_or(true, |s| lead.stage.eq_ignore_ascii_case(s))
            && self.aging.map_or(true, |a| row.aging == Some(a))
            && self.source.as_ref().map_or(true, |s| lead.source.eq_ignore_ascii_case(s))
            && matches_search(&lead.id, &lead.name, &self.search)
    }

    /// Filtered lead rows, sorted by the query's specs then by id
    pub fn apply(&self, leads: &[Lead], stages: &[StageConfig]) -> Result<Vec<LeadRow>, ViewError> {
        validate_sort_specs(&self.sort, LEAD_SORT_COLUMNS)?;

        let mut rows: Vec<LeadRow> = leads
            .iter()
            .map(|lead| LeadRow::new(lead, stages))
            .filter(|row| self.matches(row))
            .collect();
        rows.sort_by(|a, b| {
            self.sort
                .iter()
                .fold(Ordering::Equal, |acc, spec| {
                    acc.then_with(|| spec.apply(compare_leads(a, b, &spec.column)))
                })
                .then_with(|| compare_ids(&a.lead.id, &b.lead.id))
        });
        Ok(rows)
    }
}

fn compare_leads(a: &LeadRow, b: &LeadRow, column: &str) -> Ordering {
    match column {
        "id" => compare_ids(&a.lead.id, &b.lead.id),
        "name" => a.lead.name.to_lowercase().cmp(&b.lead.name.to_lowercase()),
        "brand" => a.lead.brand.cmp(&b.lead.brand),
        "source" => a.lead.source.cmp(&b.lead.source),
        "stage" => a.stage_order.cmp(&b.stage_order),
        "days" => a.lead.days_in_stage.cmp(&b.lead.days_in_stage),
        "value" => a.lead.value_cents.cmp(&b.lead.value_cents),
        "aging" => a.aging.cmp(&b.aging),
        _ => Ordering::Equal,
    }
}
