use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdPlus, LdShirt};
use dioxus_free_icons::Icon;
use shared_types::Fabric;
use shared_ui::{
    Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
};

use super::use_console;
use crate::format_helpers::{format_gsm, format_snake_case_title, or_dash};

/// Garment preview for one fabric, with a shortcut to (de)select it.
#[component]
pub fn MockupModal(fabric: Fabric, selected: bool) -> Element {
    let handle = use_console();
    let title = fabric.title();
    let subtitle = format!(
        "{} · {}",
        or_dash(fabric.fabrication.as_deref()),
        format_gsm(fabric.gsm)
    );

    let on_open_change = {
        let handle = handle.clone();
        move |open: bool| {
            if !open {
                handle.update(|c| c.close_mockup());
            }
        }
    };
    let on_toggle = {
        let handle = handle.clone();
        let fabric = fabric.clone();
        move |_: MouseEvent| {
            handle.update(|c| c.toggle_select(fabric.clone()));
        }
    };
    let on_close = move |_: MouseEvent| handle.update(|c| c.close_mockup());

    rsx! {
        DialogRoot { open: true, on_open_change: on_open_change,
            DialogContent {
                DialogTitle { "Mockup: {title}" }
                DialogDescription { "{subtitle}" }
                div { class: "mockup-preview",
                    Icon::<LdShirt> { icon: LdShirt, width: 96, height: 96 }
                }
                div { class: "dialog-actions",
                    Button {
                        variant: if selected { ButtonVariant::Default } else { ButtonVariant::Outline },
                        onclick: on_toggle,
                        if selected {
                            Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                            "Selected"
                        } else {
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Add to selection"
                        }
                    }
                    Button { variant: ButtonVariant::Ghost, onclick: on_close, "Close" }
                }
            }
        }
    }
}

/// Rows for the techpack table: listed fields first, then `meta_data`.
fn techpack_rows(fabric: &Fabric) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Reference".to_string(), fabric.title()),
        ("Group".to_string(), or_dash(fabric.fabric_group.as_deref()).to_string()),
        ("Fabrication".to_string(), or_dash(fabric.fabrication.as_deref()).to_string()),
        ("Weight".to_string(), format_gsm(fabric.gsm)),
        ("Width".to_string(), or_dash(fabric.width.as_deref()).to_string()),
        ("Composition".to_string(), or_dash(fabric.composition.as_deref()).to_string()),
        ("Mill".to_string(), or_dash(fabric.owner_name.as_deref()).to_string()),
        ("Status".to_string(), or_dash(fabric.status.as_deref()).to_string()),
    ];

    if let Some(meta) = fabric.meta_data.as_object() {
        for (key, value) in meta {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => "-".to_string(),
                other => other.to_string(),
            };
            rows.push((format_snake_case_title(key), text));
        }
    }
    rows
}

/// Technical sheet for one fabric.
#[component]
pub fn TechpackModal(fabric: Fabric) -> Element {
    let handle = use_console();
    let title = fabric.title();
    let rows = techpack_rows(&fabric);

    let on_open_change = {
        let handle = handle.clone();
        move |open: bool| {
            if !open {
                handle.update(|c| c.close_techpack());
            }
        }
    };
    let on_close = move |_: MouseEvent| handle.update(|c| c.close_techpack());

    rsx! {
        DialogRoot { open: true, on_open_change: on_open_change,
            DialogContent {
                DialogTitle { "Techpack: {title}" }
                table { class: "techpack-table",
                    tbody {
                        for (label, value) in rows {
                            tr { key: "{label}",
                                th { "{label}" }
                                td { "{value}" }
                            }
                        }
                    }
                }
                div { class: "dialog-actions",
                    Button { variant: ButtonVariant::Ghost, onclick: on_close, "Close" }
                }
            }
        }
    }
}
