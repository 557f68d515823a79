use serde::{Deserialize, Serialize};

use crate::pipeline::error::PipelineError;

/// Day thresholds for one stage: `[fresh_max, aging_max]`
///
/// Always satisfies `fresh_max <= aging_max`; both the constructor and
/// deserialization reject inverted pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct Thresholds {
    fresh_max: u32,
    aging_max: u32,
}

impl Thresholds {
    pub fn new(fresh_max: u32, aging_max: u32) -> Result<Self, PipelineError> {
        if fresh_max > aging_max {
            return Err(PipelineError::InvertedThresholds { fresh_max, aging_max });
        }
        Ok(Self { fresh_max, aging_max })
    }

    pub fn fresh_max(&self) -> u32 {
        self.fresh_max
    }

    pub fn aging_max(&self) -> u32 {
        self.aging_max
    }
}

impl TryFrom<[u32; 2]> for Thresholds {
    type Error = PipelineError;

    fn try_from(pair: [u32; 2]) -> Result<Self, Self::Error> {
        Thresholds::new(pair[0], pair[1])
    }
}

impl From<Thresholds> for [u32; 2] {
    fn from(t: Thresholds) -> Self {
        [t.fresh_max, t.aging_max]
    }
}

/// Display grouping of pipeline stages on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageGroup {
    Prospect,
    Engaged,
    Closing,
    Closed,
}

impl StageGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageGroup::Prospect => "prospect",
            StageGroup::Engaged => "engaged",
            StageGroup::Closing => "closing",
            StageGroup::Closed => "closed",
        }
    }
}

/// How a deal in a closed stage ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub id: String,
    pub label: String,
    pub group: StageGroup,
    pub thresholds: Thresholds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<StageOutcome>,
}

impl StageConfig {
    pub fn new(id: &str, label: &str, group: StageGroup, thresholds: Thresholds) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            group,
            thresholds,
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: StageOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn is_closed(&self) -> bool {
        self.group == StageGroup::Closed
    }

    /// Won/lost for closed stages
    ///
    /// An explicit `outcome` wins; otherwise closed stages named `won` or
    /// `lost` count as such. Open stages never have an outcome.
    pub fn outcome(&self) -> Option<StageOutcome> {
        if !self.is_closed() {
            return None;
        }
        self.outcome.or_else(|| {
            if self.id.eq_ignore_ascii_case(WON_STAGE) {
                Some(StageOutcome::Won)
            } else if self.id.eq_ignore_ascii_case(LOST_STAGE) {
                Some(StageOutcome::Lost)
            } else {
                None
            }
        })
    }
}

/// Closed-stage ids that imply an outcome when none is configured
pub const WON_STAGE: &str = "won";
pub const LOST_STAGE: &str = "lost";

type StageRow = (&'static str, &'static str, StageGroup, u32, u32, Option<StageOutcome>);

const DEFAULT_STAGES: &[StageRow] = &[
    ("new_lead", "New Lead", StageGroup::Prospect, 2, 5, None),
    ("contacted", "Contacted", StageGroup::Prospect, 3, 7, None),
    ("tour_booked", "Tour Booked", StageGroup::Engaged, 5, 10, None),
    ("trial", "Trial Active", StageGroup::Engaged, 7, 14, None),
    ("negotiation", "Negotiation", StageGroup::Closing, 5, 12, None),
    (WON_STAGE, "Won", StageGroup::Closed, 30, 60, Some(StageOutcome::Won)),
    (LOST_STAGE, "Lost", StageGroup::Closed, 30, 60, Some(StageOutcome::Lost)),
];

/// The sales pipeline in board order
pub fn default_stages() -> Vec<StageConfig> {
    DEFAULT_STAGES
        .iter()
        .map(|&(id, label, group, fresh_max, aging_max, outcome)| StageConfig {
            outcome,
            ..StageConfig::new(id, label, group, Thresholds { fresh_max, aging_max })
        })
        .collect()
}

/// Look up a stage by id (case-insensitive)
pub fn find_stage<'a>(stages: &'a [StageConfig], id: &str) -> Result<&'a StageConfig, PipelineError> {
    stages
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| PipelineError::UnknownStage(id.to_string()))
}
