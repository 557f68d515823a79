// Deterministic mock attribute synthesis
//
// Every value produced here is a function of (entity id, anchor date). The
// generator keeps no random state, so re-rendering an entity never changes
// what it shows.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::mock::error::MockError;
use crate::mock::hash::hash_code;
use crate::mock::tables::*;
use crate::models::{Lead, Member, MemberStatus};
use crate::pipeline::StageConfig;

// Field strides: seed + i*stride decorrelates fields derived from one id
const NAME_STRIDE: u64 = 3;
const BRAND_STRIDE: u64 = 5;
const SLOT_STRIDE: u64 = 5;
const VISIT_STRIDE: u64 = 7;
const APPOINTMENT_STRIDE: u64 = 11;
const VISIT_KIND_STRIDE: u64 = 13;
const ALERT_STRIDE: u64 = 17;
const STAGE_STRIDE: u64 = 19;
const DAYS_STRIDE: u64 = 23;

const VISIT_WINDOW_DAYS: u64 = 28;
const APPOINTMENT_WINDOW_DAYS: u64 = 14;
const TENURE_WINDOW_DAYS: u64 = 1095;
const MAX_DAYS_IN_STAGE: u64 = 30;

/// Fallback brand when no brands are configured
const UNASSIGNED_BRAND: &str = "unassigned";

/// Deterministic seed derived from an entity id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u32);

impl Seed {
    pub fn from_key(key: &str) -> Self {
        Seed(hash_code(key))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// `seed + i * stride`, computed without wrapping
    pub fn offset(self, i: u64, stride: u64) -> u64 {
        self.0 as u64 + i * stride
    }

    /// Index into a table of `len` entries. `len` must be non-zero.
    pub fn index(self, i: u64, stride: u64, len: usize) -> usize {
        (self.offset(i, stride) % len as u64) as usize
    }

    /// `table[seed % len]`
    ///
    /// Panics on an empty table; the lookup tables are fixed and non-empty.
    pub fn pick<T>(self, table: &[T]) -> &T {
        &table[self.index(0, 0, table.len())]
    }

    /// `table[(seed + i * stride) % len]`
    pub fn pick_offset<T>(self, table: &[T], i: u64, stride: u64) -> &T {
        &table[self.index(i, stride, table.len())]
    }

    /// Map into `lo..=hi`
    pub fn range(self, i: u64, stride: u64, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo <= hi);
        lo + self.offset(i, stride) % (hi - lo + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub date: NaiveDate,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub date: NaiveDate,
    pub time: String,
    pub coach: String,
}

/// Display attributes synthesized for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockProfile {
    pub id: String,
    pub seed: u32,
    pub coach: String,
    /// Newest first
    pub visits: Vec<Visit>,
    pub alerts: Vec<String>,
    pub next_appointment: Appointment,
}

/// Builds mock records relative to a fixed anchor date
#[derive(Debug, Clone)]
pub struct MockGenerator {
    today: NaiveDate,
    brands: Vec<String>,
}

/// Reject anchors whose visit, tenure, or appointment windows leave chrono's date range
pub fn check_anchor(today: NaiveDate) -> Result<(), MockError> {
    let back = Duration::days(VISIT_WINDOW_DAYS.max(TENURE_WINDOW_DAYS) as i64);
    let ahead = Duration::days(APPOINTMENT_WINDOW_DAYS as i64);
    match (today.checked_sub_signed(back), today.checked_add_signed(ahead)) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(MockError::AnchorOutOfRange(today)),
    }
}

impl MockGenerator {
    pub fn new(today: NaiveDate, brands: Vec<String>) -> Result<Self, MockError> {
        check_anchor(today)?;
        if brands.is_empty() {
            log::warn!("No brands configured; mock records will use '{}'", UNASSIGNED_BRAND);
        }
        Ok(Self { today, brands })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn brand_for(&self, seed: Seed) -> String {
        if self.brands.is_empty() {
            return UNASSIGNED_BRAND.to_string();
        }
        seed.pick_offset(&self.brands, 2, BRAND_STRIDE).clone()
    }

    fn name_for(seed: Seed) -> String {
        format!(
            "{} {}",
            seed.pick(FIRST_NAMES),
            seed.pick_offset(LAST_NAMES, 1, NAME_STRIDE)
        )
    }

    /// Synthesize visit history, alerts, coach, and next appointment for an id
    pub fn profile(&self, id: &str) -> MockProfile {
        let seed = Seed::from_key(id);
        let coach = seed.pick(COACHES).to_string();

        let visit_count = seed.range(0, 0, 2, 7);
        let mut visits: Vec<(u64, Visit)> = Vec::new();
        for i in 0..visit_count {
            let days_ago = seed.range(i, VISIT_STRIDE, 1, VISIT_WINDOW_DAYS);
            if visits.iter().any(|(d, _)| *d == days_ago) {
                continue;
            }
            visits.push((
                days_ago,
                Visit {
                    date: self.today - Duration::days(days_ago as i64),
                    kind: seed.pick_offset(VISIT_KINDS, i, VISIT_KIND_STRIDE).to_string(),
                },
            ));
        }
        visits.sort_by_key(|(days_ago, _)| *days_ago);

        let alerts = ALERT_KINDS
            .iter()
            .enumerate()
            .filter(|(j, _)| seed.offset(*j as u64, ALERT_STRIDE) % 5 == 0)
            .map(|(_, kind)| kind.to_string())
            .collect();

        let days_ahead = seed.range(1, APPOINTMENT_STRIDE, 1, APPOINTMENT_WINDOW_DAYS);
        let next_appointment = Appointment {
            date: self.today + Duration::days(days_ahead as i64),
            time: seed.pick_offset(APPOINTMENT_SLOTS, 2, SLOT_STRIDE).to_string(),
            coach: coach.clone(),
        };

        MockProfile {
            id: id.to_string(),
            seed: seed.value(),
            coach,
            visits: visits.into_iter().map(|(_, v)| v).collect(),
            alerts,
            next_appointment,
        }
    }

    /// Synthesize the member with the given id
    pub fn member(&self, id: &str) -> Member {
        let seed = Seed::from_key(id);
        let (plan, fee) = *seed.pick_offset(MEMBERSHIP_PLANS, 3, 7);
        let status = MemberStatus::from_str(*seed.pick_offset(MEMBER_STATUSES, 4, 11))
            .unwrap_or(MemberStatus::Active);
        let tenure = seed.range(5, 13, 1, TENURE_WINDOW_DAYS);

        Member {
            id: id.to_string(),
            name: Self::name_for(seed),
            brand: self.brand_for(seed),
            plan: plan.to_string(),
            status,
            joined: self.today - Duration::days(tenure as i64),
            monthly_fee_cents: fee,
        }
    }

    /// Synthesize `member-0` through `member-{count-1}`
    pub fn members(&self, count: usize) -> Vec<Member> {
        (0..count).map(|i| self.member(&format!("member-{}", i))).collect()
    }

    /// Synthesize the lead with the given id, placed in one of `stages`
    ///
    /// With no stages configured the lead gets an empty stage id.
    pub fn lead(&self, id: &str, stages: &[StageConfig]) -> Lead {
        let seed = Seed::from_key(id);
        let stage = if stages.is_empty() {
            String::new()
        } else {
            seed.pick_offset(stages, 6, STAGE_STRIDE).id.clone()
        };

        Lead {
            id: id.to_string(),
            name: Self::name_for(seed),
            brand: self.brand_for(seed),
            source: seed.pick_offset(LEAD_SOURCES, 1, VISIT_STRIDE).to_string(),
            stage,
            days_in_stage: seed.range(7, DAYS_STRIDE, 0, MAX_DAYS_IN_STAGE - 1) as u32,
            value_cents: *seed.pick_offset(LEAD_VALUES, 8, 3),
        }
    }

    /// Synthesize `lead-0` through `lead-{count-1}`
    pub fn leads(&self, count: usize, stages: &[StageConfig]) -> Vec<Lead> {
        (0..count)
            .map(|i| self.lead(&format!("lead-{}", i), stages))
            .collect()
    }
}
