use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Membership status
///
/// - Active: billing normally
/// - Trial: on a free or discounted intro period
/// - Frozen: billing paused at the member's request
/// - PastDue: last charge failed, still has access
/// - Cancelled: no longer a member (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Trial,
    Frozen,
    PastDue,
    Cancelled,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Trial => "trial",
            MemberStatus::Frozen => "frozen",
            MemberStatus::PastDue => "past_due",
            MemberStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "active" => Some(MemberStatus::Active),
            "trial" => Some(MemberStatus::Trial),
            "frozen" => Some(MemberStatus::Frozen),
            "past_due" | "pastdue" => Some(MemberStatus::PastDue),
            "cancelled" | "canceled" => Some(MemberStatus::Cancelled),
            _ => None,
        }
    }

    /// Statuses that still generate monthly revenue
    pub fn is_billing(&self) -> bool {
        matches!(self, Self::Active | Self::PastDue)
    }
}

/// Member model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub plan: String,
    pub status: MemberStatus,
    pub joined: NaiveDate,
    pub monthly_fee_cents: u32,
}
