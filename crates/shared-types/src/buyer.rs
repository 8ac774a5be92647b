use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five panes of the buyer console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    Dashboard,
    #[default]
    FabricLibrary,
    Rfqs,
    Samples,
    Designs,
}

impl DashboardView {
    /// Sidebar order.
    pub const MENU: [DashboardView; 5] = [
        DashboardView::FabricLibrary,
        DashboardView::Dashboard,
        DashboardView::Rfqs,
        DashboardView::Samples,
        DashboardView::Designs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::FabricLibrary => "Fabric Library",
            DashboardView::Rfqs => "RFQs",
            DashboardView::Samples => "Samples",
            DashboardView::Designs => "Saved Designs",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "dashboard",
            DashboardView::FabricLibrary => "fabric-library",
            DashboardView::Rfqs => "rfqs",
            DashboardView::Samples => "samples",
            DashboardView::Designs => "designs",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::MENU.into_iter().find(|v| v.slug() == s)
    }
}

/// Envelope of the buyer dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerDashboardData {
    pub buyer_dashboard: BuyerDashboard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BuyerDashboard {
    pub stats: BuyerStats,
    #[serde(default)]
    pub recent_rfqs: Vec<Rfq>,
    #[serde(default)]
    pub sample_orders: Vec<SampleOrder>,
    #[serde(default)]
    pub saved_designs: Vec<SavedDesign>,
}

/// Headline counters on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuyerStats {
    pub active_rfqs: u32,
    pub samples_in_transit: u32,
    pub pending_actions: u32,
}

/// A request for quotation raised by the buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfq {
    pub rfq_id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub attendance_count: u32,
    #[serde(default)]
    pub actions: Vec<RfqAction>,
    #[serde(default)]
    pub attendees_preview: Vec<Attendee>,
}

impl Rfq {
    /// "1 Manufacturer Attending" / "12 Manufacturers Attending".
    pub fn attendance_label(&self) -> String {
        let noun = if self.attendance_count == 1 {
            "Manufacturer"
        } else {
            "Manufacturers"
        };
        format!("{} {} Attending", self.attendance_count, noun)
    }

    pub fn allows(&self, action: &RfqAction) -> bool {
        self.actions.contains(action)
    }
}

/// Buttons the server enables on an RFQ card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfqAction {
    ViewAttendees,
    CloseRfq,
    #[serde(other)]
    Unknown,
}

/// A manufacturer bidding on an RFQ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub manufacturer_name: String,
    pub bid_price: String,
    pub rating: f32,
}

/// A paid fabric sample on its way to the buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOrder {
    pub order_id: String,
    pub fabric_ref: String,
    pub manufacturer: String,
    pub status: String,
    #[serde(default)]
    pub tracking_timeline: Vec<TrackingEvent>,
    pub fee_status: String,
}

impl SampleOrder {
    /// Fee status with underscores turned into spaces.
    pub fn fee_status_label(&self) -> String {
        self.fee_status.replace('_', " ")
    }

    /// The most recent completed step, if any.
    pub fn latest_completed(&self) -> Option<&TrackingEvent> {
        self.tracking_timeline.iter().rev().find(|e| e.completed)
    }
}

/// One step of a sample order's tracking timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub details: Option<String>,
}

/// A mockup the buyer saved, optionally attached to an RFQ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: String,
    pub name: String,
    pub preview_url: String,
    #[serde(default)]
    pub linked_rfq_id: Option<String>,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// Label and tone for an RFQ or sample-order status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Known codes get a friendly label; anything else shows the raw code outlined.
    pub fn for_status(status: &str) -> Self {
        let known = match status {
            "APPROVED_OPEN" => Some(("Open", BadgeTone::Default)),
            "PENDING_ADMIN_APPROVAL" => Some(("Pending Approval", BadgeTone::Secondary)),
            "SHIPPED" => Some(("Shipped", BadgeTone::Default)),
            "DELIVERED" => Some(("Delivered", BadgeTone::Default)),
            "PLACED" => Some(("Placed", BadgeTone::Secondary)),
            "PAID" => Some(("Paid", BadgeTone::Default)),
            "PROCESSING" => Some(("Processing", BadgeTone::Secondary)),
            _ => None,
        };
        match known {
            Some((label, tone)) => Self {
                label: label.to_string(),
                tone,
            },
            None => Self {
                label: status.to_string(),
                tone: BadgeTone::Outline,
            },
        }
    }
}
