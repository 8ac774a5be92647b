use shared_types::{
    BuyerDashboard, BuyerStats, DashboardView, Fabric, Rfq, SampleOrder, SavedDesign,
};

use crate::console::BuyerConsole;

/// RFQs shown on the overview before "View All".
pub const OVERVIEW_RFQ_LIMIT: usize = 2;

/// Everything one console pane needs to render, and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleView {
    Overview {
        stats: BuyerStats,
        recent_rfqs: Vec<Rfq>,
    },
    FabricLibrary(LibraryView),
    Rfqs {
        rfqs: Vec<Rfq>,
    },
    Samples {
        orders: Vec<SampleOrder>,
    },
    Designs {
        designs: Vec<SavedDesign>,
    },
}

impl ConsoleView {
    pub fn build(console: &BuyerConsole, dashboard: &BuyerDashboard) -> Self {
        match console.view() {
            DashboardView::Dashboard => ConsoleView::Overview {
                stats: dashboard.stats,
                recent_rfqs: dashboard
                    .recent_rfqs
                    .iter()
                    .take(OVERVIEW_RFQ_LIMIT)
                    .cloned()
                    .collect(),
            },
            DashboardView::FabricLibrary => ConsoleView::FabricLibrary(LibraryView::build(console)),
            DashboardView::Rfqs => ConsoleView::Rfqs {
                rfqs: dashboard.recent_rfqs.clone(),
            },
            DashboardView::Samples => ConsoleView::Samples {
                orders: dashboard.sample_orders.clone(),
            },
            DashboardView::Designs => ConsoleView::Designs {
                designs: dashboard.saved_designs.clone(),
            },
        }
    }

    pub fn kind(&self) -> DashboardView {
        match self {
            ConsoleView::Overview { .. } => DashboardView::Dashboard,
            ConsoleView::FabricLibrary(_) => DashboardView::FabricLibrary,
            ConsoleView::Rfqs { .. } => DashboardView::Rfqs,
            ConsoleView::Samples { .. } => DashboardView::Samples,
            ConsoleView::Designs { .. } => DashboardView::Designs,
        }
    }
}

/// What the fabric library body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryPhase {
    /// No criteria entered yet.
    Prompt,
    /// A search is scheduled or running and nothing is on screen yet.
    Searching,
    NoResults,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryItem {
    pub fabric: Fabric,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryView {
    pub phase: LibraryPhase,
    pub items: Vec<LibraryItem>,
    pub total: i64,
    pub has_more: bool,
    pub is_loading: bool,
    pub selected_count: usize,
}

impl LibraryView {
    pub fn build(console: &BuyerConsole) -> Self {
        let has_items = !console.items().is_empty();
        let busy = console.is_loading() || console.is_pending();

        let phase = if has_items {
            LibraryPhase::Results
        } else if !console.query().is_active() {
            LibraryPhase::Prompt
        } else if busy {
            LibraryPhase::Searching
        } else {
            LibraryPhase::NoResults
        };

        Self {
            phase,
            items: console
                .items()
                .iter()
                .map(|fabric| LibraryItem {
                    selected: console.is_selected(fabric),
                    fabric: fabric.clone(),
                })
                .collect(),
            total: console.total(),
            has_more: console.has_more(),
            is_loading: console.is_loading(),
            selected_count: console.selection().len(),
        }
    }

    /// "1 fabric found" / "12 fabrics found".
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "fabric" } else { "fabrics" };
        format!("{} {} found", self.total, noun)
    }

    /// Load-more control: shown while more pages exist, disabled while loading.
    pub fn load_more_label(&self) -> Option<&'static str> {
        if !self.has_more {
            None
        } else if self.is_loading {
            Some("Loading...")
        } else {
            Some("Load More")
        }
    }
}
