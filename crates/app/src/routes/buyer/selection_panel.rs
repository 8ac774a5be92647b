use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use shared_types::Fabric;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use super::use_console;

/// Fixed tray listing the fabrics picked for an RFQ.
#[component]
pub fn SelectionPanel(selected: Vec<Fabric>) -> Element {
    let handle = use_console();
    let count = selected.len();
    let noun = if count == 1 { "fabric" } else { "fabrics" };

    let on_clear = move |_: MouseEvent| handle.update(|c| c.clear_selection());

    rsx! {
        div { class: "selection-panel",
            div { class: "selection-panel-header",
                span { class: "selection-panel-count", "{count} {noun} selected" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    onclick: on_clear,
                    "Clear all"
                }
            }
            ul { class: "selection-panel-list",
                for fabric in selected {
                    SelectionItem { key: "{fabric.key()}", fabric }
                }
            }
        }
    }
}

#[component]
fn SelectionItem(fabric: Fabric) -> Element {
    let handle = use_console();
    let key = fabric.key();
    let title = fabric.title();

    rsx! {
        li { class: "selection-panel-item",
            span { "{title}" }
            button {
                class: "selection-panel-remove",
                title: "Remove",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    handle.update(|c| c.deselect(&key));
                },
                Icon::<LdX> { icon: LdX, width: 14, height: 14 }
            }
        }
    }
}
