// Fixed lookup tables for mock attribute synthesis.
// Order only matters for determinism: reordering changes every derived value.

pub const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Zoe", "Ethan", "Priya", "Lucas",
    "Chloe", "Mateo", "Hana", "Owen", "Isla", "Diego", "Nora", "Kai",
];

pub const LAST_NAMES: &[&str] = &[
    "Nguyen", "Garcia", "Smith", "Okafor", "Patel", "Kowalski", "Rossi",
    "Chen", "Murphy", "Silva", "Tanaka", "Johnson", "Haddad", "Larsen",
];

pub const COACHES: &[&str] = &[
    "Jordan Reyes", "Sam Whitaker", "Alex Moreau", "Taylor Brooks",
    "Casey Lindqvist", "Riley Osei",
];

pub const VISIT_KINDS: &[&str] = &[
    "Open gym", "Group class", "Personal training", "Swim", "Spin class", "Yoga",
];

pub const ALERT_KINDS: &[&str] = &[
    "Payment failed",
    "Waiver unsigned",
    "No visit in 14 days",
    "Contract ending soon",
    "Birthday this week",
];

pub const APPOINTMENT_SLOTS: &[&str] = &[
    "06:30", "08:00", "09:30", "12:00", "16:30", "18:00", "19:30",
];

/// Plan name and monthly fee in cents.
pub const MEMBERSHIP_PLANS: &[(&str, u32)] = &[
    ("Basic", 2_999),
    ("Plus", 4_999),
    ("Premium", 7_999),
    ("Student", 1_999),
    ("Family", 11_999),
];

/// Weighted toward active; repeated entries raise the odds.
pub const MEMBER_STATUSES: &[&str] = &[
    "active", "active", "active", "active", "active", "active",
    "trial", "trial", "frozen", "past_due", "cancelled",
];

pub const LEAD_SOURCES: &[&str] = &[
    "walk-in", "website", "referral", "instagram", "corporate", "event",
];

/// Deal values in cents for annual contracts.
pub const LEAD_VALUES: &[u32] = &[
    35_988, 59_988, 95_988, 23_988, 143_988,
];
