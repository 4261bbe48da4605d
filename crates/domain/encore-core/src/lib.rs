use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod checklist;
pub mod draft;
pub mod money;

pub use checklist::{default_checklist, readiness_percent, ChecklistCategory, ChecklistItem};
pub use draft::{CoverImage, DescriptionRequest, EventDraft, WizardStep};

pub type EventId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Music,
    Technology,
    Business,
    Workshop,
    Social,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Music,
        EventCategory::Technology,
        EventCategory::Business,
        EventCategory::Workshop,
        EventCategory::Social,
    ];

    /// Display name shown to attendees (and fed to the copywriter prompt).
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Music => "Música",
            EventCategory::Technology => "Tecnologia",
            EventCategory::Business => "Negócios",
            EventCategory::Workshop => "Workshop",
            EventCategory::Social => "Social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    Free,
    Paid,
    Donation,
}

/// A priced tier of tickets for an event (e.g. "early bird").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketBatch {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
    pub quantity: u32,
    pub sold: u32,
    pub ticket_type: TicketType,
}

impl TicketBatch {
    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.sold)
    }

    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub image_url: String,
    pub organizer: String,
    pub category: EventCategory,
    pub batches: Vec<TicketBatch>,
}

impl Event {
    /// The batch currently on sale. Mock events carry exactly one.
    pub fn lead_batch(&self) -> Option<&TicketBatch> {
        self.batches.first()
    }
}

/// How a dashboard metric value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Value is an amount in cents.
    Currency,
    /// Value is a plain count.
    Count,
    /// Value is a percentage.
    Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMetric {
    pub label: String,
    pub kind: MetricKind,
    pub value: f64,
    pub change_pct: f64,
    pub positive: bool,
}

/// One day of the weekly revenue series shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub day: String,
    pub revenue_cents: u64,
    pub tickets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub initials: String,
    pub label: String,
    pub event: String,
    pub amount_cents: u64,
}
