// Pipeline aging classification
//
// Buckets how long a lead has sat in its current stage. Used for color
// coding cards and counting at-risk leads.

use serde::{Deserialize, Serialize};

use crate::pipeline::stage::{StageConfig, Thresholds};

/// Aging bucket, ordered `Fresh < Aging < Stale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgingStatus {
    Fresh,
    Aging,
    Stale,
}

impl AgingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgingStatus::Fresh => "fresh",
            AgingStatus::Aging => "aging",
            AgingStatus::Stale => "stale",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fresh" => Some(AgingStatus::Fresh),
            "aging" => Some(AgingStatus::Aging),
            "stale" => Some(AgingStatus::Stale),
            _ => None,
        }
    }

    /// Card border class used by the console's board
    pub fn border_class(&self) -> &'static str {
        match self {
            AgingStatus::Fresh => "border-l-emerald-500",
            AgingStatus::Aging => "border-l-amber-500",
            AgingStatus::Stale => "border-l-red-500",
        }
    }

    /// Days-in-stage text class used by the console's board
    pub fn text_class(&self) -> &'static str {
        match self {
            AgingStatus::Fresh => "text-emerald-600",
            AgingStatus::Aging => "text-amber-600",
            AgingStatus::Stale => "text-red-600",
        }
    }

    pub fn is_at_risk(&self) -> bool {
        *self != AgingStatus::Fresh
    }
}

/// Classify days in stage against `[fresh_max, aging_max]`
pub fn classify(days_in_stage: u32, thresholds: Thresholds) -> AgingStatus {
    if days_in_stage <= thresholds.fresh_max() {
        AgingStatus::Fresh
    } else if days_in_stage <= thresholds.aging_max() {
        AgingStatus::Aging
    } else {
        AgingStatus::Stale
    }
}

pub fn aging_status(days_in_stage: u32, stage: &StageConfig) -> AgingStatus {
    classify(days_in_stage, stage.thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::stage::StageGroup;

    fn t(fresh: u32, aging: u32) -> Thresholds {
        Thresholds::new(fresh, aging).unwrap()
    }

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify(5, t(7, 14)), AgingStatus::Fresh);
        assert_eq!(classify(10, t(7, 14)), AgingStatus::Aging);
        assert_eq!(classify(20, t(7, 14)), AgingStatus::Stale);
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        assert_eq!(classify(0, t(7, 14)), AgingStatus::Fresh);
        assert_eq!(classify(7, t(7, 14)), AgingStatus::Fresh);
        assert_eq!(classify(8, t(7, 14)), AgingStatus::Aging);
        assert_eq!(classify(14, t(7, 14)), AgingStatus::Aging);
        assert_eq!(classify(15, t(7, 14)), AgingStatus::Stale);
    }

    #[test]
    fn test_classify_equal_thresholds_skip_aging() {
        assert_eq!(classify(3, t(3, 3)), AgingStatus::Fresh);
        assert_eq!(classify(4, t(3, 3)), AgingStatus::Stale);
    }

    #[test]
    fn test_classify_exhaustive_small_range() {
        for fresh in 0..10u32 {
            for aging in fresh..15 {
                for days in 0..20u32 {
                    let expected = if days <= fresh {
                        AgingStatus::Fresh
                    } else if days <= aging {
                        AgingStatus::Aging
                    } else {
                        AgingStatus::Stale
                    };
                    assert_eq!(classify(days, t(fresh, aging)), expected);
                }
            }
        }
    }

    #[test]
    fn test_classify_is_monotonic_in_days() {
        let thresholds = t(4, 9);
        let buckets: Vec<AgingStatus> = (0..30).map(|d| classify(d, thresholds)).collect();
        for pair in buckets.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_aging_status_uses_stage_thresholds() {
        let stage = StageConfig::new("trial", "Trial", StageGroup::Engaged, t(7, 14));
        assert_eq!(aging_status(10, &stage), AgingStatus::Aging);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(AgingStatus::Fresh.border_class(), "border-l-emerald-500");
        assert_eq!(AgingStatus::Stale.border_class(), "border-l-red-500");
        assert_eq!(AgingStatus::Aging.text_class(), "text-amber-600");
    }

    #[test]
    fn test_ordering_and_parsing() {
        assert!(AgingStatus::Fresh < AgingStatus::Aging);
        assert!(AgingStatus::Aging < AgingStatus::Stale);
        assert_eq!(AgingStatus::from_str("STALE"), Some(AgingStatus::Stale));
        assert_eq!(AgingStatus::from_str("old"), None);
        assert!(!AgingStatus::Fresh.is_at_risk());
        assert!(AgingStatus::Stale.is_at_risk());
    }
}
