use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdFileText, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{BuyerStats, DashboardView, Rfq};
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, StatCard};

use super::use_console;
use crate::components::StatusBadge;

/// Headline counts and the most recent RFQs.
#[component]
pub fn Overview(stats: BuyerStats, recent_rfqs: Vec<Rfq>) -> Element {
    let handle = use_console();

    rsx! {
        div { class: "console-view",
            div { class: "console-view-header",
                h1 { "Dashboard" }
                p { "Overview of your RFQs, samples, and activities" }
            }

            div { class: "overview-stats",
                StatCard {
                    label: "Active RFQs",
                    value: stats.active_rfqs.to_string(),
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Samples in Transit",
                    value: stats.samples_in_transit.to_string(),
                    tone: "accent",
                    icon: rsx! { Icon::<LdTruck> { icon: LdTruck, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Pending Actions",
                    value: stats.pending_actions.to_string(),
                    tone: "warning",
                    icon: rsx! { Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 24, height: 24 } },
                }
            }

            section {
                div { class: "overview-section-header",
                    h2 { "Recent RFQs" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: move |_: MouseEvent| handle.update(|c| c.set_view(DashboardView::Rfqs)),
                        "View All"
                    }
                }
                div { class: "console-stack",
                    for rfq in recent_rfqs {
                        Card { key: "{rfq.rfq_id}", class: "rfq-card",
                            div { class: "rfq-card-heading",
                                h3 { "{rfq.title}" }
                                StatusBadge { status: rfq.status.clone() }
                            }
                            p { class: "rfq-card-id", "RFQ ID: {rfq.rfq_id}" }
                            if let Some(note) = rfq.admin_note.clone() {
                                div { class: "rfq-card-note", "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
