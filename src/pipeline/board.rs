// Sales pipeline board: one column per stage, cards bucketed by aging

use serde::Serialize;

use crate::models::Lead;
use crate::pipeline::aging::{aging_status, AgingStatus};
use crate::pipeline::stage::StageConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgingCounts {
    pub fresh: usize,
    pub aging: usize,
    pub stale: usize,
}

impl AgingCounts {
    pub fn record(&mut self, status: AgingStatus) {
        match status {
            AgingStatus::Fresh => self.fresh += 1,
            AgingStatus::Aging => self.aging += 1,
            AgingStatus::Stale => self.stale += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.fresh + self.aging + self.stale
    }

    pub fn at_risk(&self) -> usize {
        self.aging + self.stale
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardCard {
    #[serde(flatten)]
    pub lead: Lead,
    pub aging: AgingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub stage: StageConfig,
    pub counts: AgingCounts,
    /// Longest-waiting first
    pub cards: Vec<BoardCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub columns: Vec<BoardColumn>,
    /// Leads whose stage id matched no configured stage
    pub skipped: usize,
}

impl Board {
    /// Group leads into stage columns in configuration order
    pub fn build(leads: &[Lead], stages: &[StageConfig]) -> Self {
        let mut columns: Vec<BoardColumn> = stages
            .iter()
            .map(|stage| BoardColumn {
                stage: stage.clone(),
                counts: AgingCounts::default(),
                cards: Vec::new(),
            })
            .collect();
        let mut skipped = 0;

        for lead in leads {
            let Some(column) = columns.iter_mut().find(|c| c.stage.id.eq_ignore_ascii_case(&lead.stage)) else {
                log::warn!("Lead {} is in unknown stage '{}'; leaving it off the board", lead.id, lead.stage);
                skipped += 1;
                continue;
            };
            let aging = aging_status(lead.days_in_stage, &column.stage);
            column.counts.record(aging);
            column.cards.push(BoardCard { lead: lead.clone(), aging });
        }

        for column in &mut columns {
            column.cards.sort_by(|a, b| {
                b.lead.days_in_stage
                    .cmp(&a.lead.days_in_stage)
                    .then_with(|| a.lead.id.cmp(&b.lead.id))
            });
        }

        log::debug!("Built board with {} columns from {} leads ({} skipped)", columns.len(), leads.len(), skipped);
        Board { columns, skipped }
    }

    pub fn column(&self, stage_id: &str) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.stage.id.eq_ignore_ascii_case(stage_id))
    }

    /// Aging counts across open (non-closed) stages
    pub fn open_counts(&self) -> AgingCounts {
        let mut total = AgingCounts::default();
        for column in self.columns.iter().filter(|c| !c.stage.is_closed()) {
            total.fresh += column.counts.fresh;
            total.aging += column.counts.aging;
            total.stale += column.counts.stale;
        }
        total
    }

    /// Aging or stale leads in open stages
    pub fn at_risk(&self) -> usize {
        self.open_counts().at_risk()
    }
}
