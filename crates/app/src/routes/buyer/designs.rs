use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdExternalLink, LdImage, LdLink};
use dioxus_free_icons::Icon;
use shared_types::SavedDesign;
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card};

#[component]
pub fn Designs(designs: Vec<SavedDesign>) -> Element {
    rsx! {
        div { class: "console-view",
            div { class: "console-view-header",
                h1 { "Saved Designs" }
                p { "Your saved mockup designs" }
            }
            div { class: "designs-grid",
                for design in designs {
                    Card { key: "{design.id}", class: "design-card",
                        div { class: "design-card-preview", title: "{design.preview_url}",
                            Icon::<LdImage> { icon: LdImage, width: 48, height: 48 }
                        }
                        h3 { "{design.name}" }
                        p { class: "design-card-id", "ID: {design.id}" }
                        if let Some(rfq) = design.linked_rfq_id.clone() {
                            div { class: "design-card-link",
                                Badge {
                                    variant: BadgeVariant::Outline,
                                    leading: rsx! { Icon::<LdLink> { icon: LdLink, width: 12, height: 12 } },
                                    "Linked to {rfq}"
                                }
                                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm,
                                    Icon::<LdExternalLink> { icon: LdExternalLink, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
