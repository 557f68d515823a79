// Per-brand dashboard summary

use serde::Serialize;

use crate::models::{Brand, Lead, Member, MemberStatus};
use crate::pipeline::{find_stage, Board, StageConfig, StageOutcome};

pub const ALL_BRANDS: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSummary {
    pub brand: String,
    pub name: String,
    pub active_members: usize,
    pub trial_members: usize,
    /// Monthly recurring revenue from billing members
    pub mrr_cents: u64,
    pub open_leads: usize,
    pub at_risk_leads: usize,
    pub won: usize,
    pub lost: usize,
    /// `won / (won + lost)`, None until a lead has closed
    pub win_rate: Option<f64>,
}

impl BrandSummary {
    fn build(brand: &str, name: &str, members: &[&Member], leads: &[Lead], stages: &[StageConfig]) -> Self {
        let count_status = |status: MemberStatus| members.iter().filter(|m| m.status == status).count();
        let mrr_cents = members
            .iter()
            .filter(|m| m.status.is_billing())
            .map(|m| m.monthly_fee_cents as u64)
            .sum();

        let board = Board::build(leads, stages);
        let count_outcome = |outcome: StageOutcome| {
            leads
                .iter()
                .filter(|l| find_stage(stages, &l.stage).ok().and_then(|s| s.outcome()) == Some(outcome))
                .count()
        };
        let won = count_outcome(StageOutcome::Won);
        let lost = count_outcome(StageOutcome::Lost);
        let win_rate = if won + lost == 0 {
            None
        } else {
            Some(won as f64 / (won + lost) as f64)
        };

        BrandSummary {
            brand: brand.to_string(),
            name: name.to_string(),
            active_members: count_status(MemberStatus::Active),
            trial_members: count_status(MemberStatus::Trial),
            mrr_cents,
            open_leads: board.open_counts().total(),
            at_risk_leads: board.at_risk(),
            won,
            lost,
            win_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub brands: Vec<BrandSummary>,
    pub totals: BrandSummary,
}

impl Dashboard {
    pub fn build(brands: &[Brand], members: &[Member], leads: &[Lead], stages: &[StageConfig]) -> Self {
        for outcome in [StageOutcome::Won, StageOutcome::Lost] {
            if !stages.iter().any(|s| s.outcome() == Some(outcome)) {
                log::warn!("No closed stage has outcome {:?}; win rate will not count it", outcome);
            }
        }

        let rows = brands
            .iter()
            .map(|brand| {
                let brand_members: Vec<&Member> = members.iter().filter(|m| m.brand == brand.id).collect();
                let brand_leads: Vec<Lead> = leads.iter().filter(|l| l.brand == brand.id).cloned().collect();
                BrandSummary::build(&brand.id, &brand.name, &brand_members, &brand_leads, stages)
            })
            .collect();

        let all_members: Vec<&Member> = members.iter().collect();
        let totals = BrandSummary::build(ALL_BRANDS, "All brands", &all_members, leads, stages);

        Dashboard { brands: rows, totals }
    }
}
