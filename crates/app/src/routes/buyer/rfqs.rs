use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdStar, LdX};
use dioxus_free_icons::Icon;
use shared_types::{Rfq, RfqAction};
use shared_ui::{Button, ButtonSize, ButtonVariant, Card};

use crate::components::StatusBadge;
use crate::format_helpers::format_date;

/// Every RFQ with its attendees and available actions.
#[component]
pub fn Rfqs(rfqs: Vec<Rfq>) -> Element {
    rsx! {
        div { class: "console-view",
            div { class: "console-view-header",
                h1 { "RFQs" }
                p { "Manage your Request for Quotations" }
            }
            div { class: "console-stack",
                for rfq in rfqs {
                    RfqCard { key: "{rfq.rfq_id}", rfq }
                }
            }
        }
    }
}

#[component]
fn RfqCard(rfq: Rfq) -> Element {
    let can_view = rfq.allows(&RfqAction::ViewAttendees);
    let can_close = rfq.allows(&RfqAction::CloseRfq);
    let created = rfq.created_at.as_ref().map(|at| format_date(Some(at)));
    let attendance = rfq.attendance_label();

    rsx! {
        Card { class: "rfq-card",
            div { class: "rfq-card-heading",
                h3 { "{rfq.title}" }
                StatusBadge { status: rfq.status.clone() }
            }
            p { class: "rfq-card-id", "RFQ ID: {rfq.rfq_id}" }
            if let Some(created) = created {
                p { class: "rfq-card-created", "Created: {created}" }
            }

            if let Some(note) = rfq.admin_note.clone() {
                div { class: "rfq-card-note", "{note}" }
            }

            if rfq.attendance_count > 0 {
                div { class: "rfq-attendance",
                    p { class: "rfq-attendance-count", "{attendance}" }
                    for (idx, attendee) in rfq.attendees_preview.iter().enumerate() {
                        div { key: "{idx}", class: "rfq-attendee",
                            div { class: "rfq-attendee-name",
                                span { "{attendee.manufacturer_name}" }
                                span { class: "rfq-attendee-rating",
                                    Icon::<LdStar> { icon: LdStar, width: 12, height: 12 }
                                    "{attendee.rating}"
                                }
                            }
                            span { class: "rfq-attendee-bid", "{attendee.bid_price}" }
                        }
                    }
                }
            }

            if can_view || can_close {
                div { class: "rfq-actions",
                    if can_view {
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                            "View Attendees"
                        }
                    }
                    if can_close {
                        Button { variant: ButtonVariant::Destructive, size: ButtonSize::Sm,
                            Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                            "Close RFQ"
                        }
                    }
                }
            }
        }
    }
}
