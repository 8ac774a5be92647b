use dioxus::prelude::*;
use shared_types::BadgeTone;
use shared_ui::{Badge, BadgeVariant};

fn variant(tone: BadgeTone) -> BadgeVariant {
    match tone {
        BadgeTone::Default => BadgeVariant::Default,
        BadgeTone::Secondary => BadgeVariant::Secondary,
        BadgeTone::Destructive => BadgeVariant::Destructive,
        BadgeTone::Outline => BadgeVariant::Outline,
    }
}

/// Badge for an RFQ or sample-order status code.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let badge = shared_types::StatusBadge::for_status(&status);

    rsx! {
        Badge { variant: variant(badge.tone), "{badge.label}" }
    }
}
