use dioxus::prelude::*;
use shared_types::SampleOrder;
use shared_ui::{Card, Timeline, TimelineStep};

use crate::components::StatusBadge;
use crate::format_helpers::format_date;

fn timeline_steps(order: &SampleOrder) -> Vec<TimelineStep> {
    order
        .tracking_timeline
        .iter()
        .map(|event| TimelineStep {
            title: event.status.clone(),
            when: event.timestamp.as_ref().map(|ts| format_date(Some(ts))),
            details: event.details.clone(),
            completed: event.completed,
        })
        .collect()
}

/// Sample orders with their shipment tracking.
#[component]
pub fn Samples(orders: Vec<SampleOrder>) -> Element {
    rsx! {
        div { class: "console-view",
            div { class: "console-view-header",
                h1 { "Sample Orders" }
                p { "Track your sample orders and deliveries" }
            }
            div { class: "console-stack",
                for order in orders {
                    Card { key: "{order.order_id}", class: "sample-card",
                        div { class: "sample-card-heading",
                            div {
                                h3 { "{order.fabric_ref}" }
                                p { "Order ID: {order.order_id}" }
                                p { "Manufacturer: {order.manufacturer}" }
                            }
                            StatusBadge { status: order.status.clone() }
                        }
                        div { class: "sample-card-tracking",
                            h4 { "Tracking Timeline" }
                            Timeline { steps: timeline_steps(&order) }
                        }
                        div { class: "sample-card-fee",
                            "Fee Status: "
                            span { "{order.fee_status_label()}" }
                        }
                    }
                }
            }
        }
    }
}
