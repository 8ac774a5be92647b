use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdFileText, LdLayers, LdPlus, LdSearch, LdShirt};
use dioxus_free_icons::Icon;
use console_core::{LibraryItem, LibraryPhase, LibraryView};
use shared_types::{QueryPatch, SearchQuery, WeightClass};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, FormSelect, Input, Skeleton, Spinner};

use super::use_console;
use crate::format_helpers::{format_gsm, or_dash};

/// Construction types offered by the type filter.
const FABRIC_TYPES: [(&str, &str); 3] = [("knit", "Knit"), ("woven", "Woven"), ("non-woven", "Non-woven")];

/// Search box, filters and the result grid.
#[component]
pub fn FabricLibrary(library: LibraryView, query: SearchQuery, groups: Vec<String>) -> Element {
    let handle = use_console();

    let on_term = {
        let handle = handle.clone();
        move |e: FormEvent| handle.update_query(QueryPatch::term(e.value()))
    };
    let on_load_more = {
        let handle = handle.clone();
        move |_: MouseEvent| handle.load_more()
    };

    rsx! {
        div { class: "console-view",
            div { class: "console-view-header",
                h1 { "Fabric Library" }
                p { "Search by fabrication, code, composition, or mill." }
            }

            div { class: "library-search",
                Input {
                    value: query.term.clone(),
                    placeholder: "Search fabrics (e.g. 'Organic Cotton', 'Fleece', 'Masco Knits')...",
                    on_input: on_term,
                    leading: rsx! { Icon::<LdSearch> { icon: LdSearch, width: 20, height: 20 } },
                }
            }

            SearchFilters { query: query.clone(), groups }

            match library.phase {
                LibraryPhase::Prompt => rsx! {
                    div { class: "library-empty",
                        div { class: "library-empty-icon",
                            Icon::<LdSearch> { icon: LdSearch, width: 32, height: 32 }
                        }
                        p { class: "library-empty-title", "Start Your Fabric Search" }
                    }
                },
                LibraryPhase::Searching => rsx! {
                    Spinner { class: "library-searching", label: "Searching fabrics..." }
                    div { class: "library-grid",
                        Skeleton { count: 3, class: "fabric-card-placeholder" }
                    }
                },
                LibraryPhase::NoResults => rsx! {
                    div { class: "library-empty",
                        div { class: "library-empty-icon",
                            Icon::<LdSearch> { icon: LdSearch, width: 32, height: 32 }
                        }
                        p { "No fabrics found. Try adjusting your search." }
                    }
                },
                LibraryPhase::Results => rsx! {
                    p { class: "library-summary", "{library.summary()}" }
                    div { class: "library-grid",
                        for item in library.items.iter().cloned() {
                            FabricCard { key: "{item.fabric.key()}", item }
                        }
                    }
                },
            }

            if let Some(label) = library.load_more_label() {
                div { class: "library-load-more",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: library.is_loading,
                        onclick: on_load_more,
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Fabrication, type and weight selects.
#[component]
fn SearchFilters(query: SearchQuery, groups: Vec<String>) -> Element {
    let handle = use_console();
    let on_fabrication = {
        let handle = handle.clone();
        move |e: Event<FormData>| handle.update_query(QueryPatch::fabrication(e.value()))
    };
    let on_type = {
        let handle = handle.clone();
        move |e: Event<FormData>| handle.update_query(QueryPatch::fabric_type(e.value()))
    };
    let on_weight = {
        let handle = handle.clone();
        move |e: Event<FormData>| handle.update_query(QueryPatch::gsm_range(e.value()))
    };
    let any_filter = !query.fabrication.is_empty()
        || !query.fabric_type.is_empty()
        || !query.gsm_range.is_empty();
    let on_reset = move |_: MouseEvent| handle.update_query(QueryPatch::reset());

    rsx! {
        div { class: "library-filters",
            FormSelect {
                label: "Fabrication",
                value: query.fabrication.clone(),
                onchange: on_fabrication,
                option { value: "", "All fabrications" }
                for group in groups {
                    option { key: "{group}", value: "{group}", "{group}" }
                }
            }
            FormSelect {
                label: "Type",
                value: query.fabric_type.clone(),
                onchange: on_type,
                option { value: "", "All types" }
                for (value, label) in FABRIC_TYPES {
                    option { key: "{value}", value: "{value}", "{label}" }
                }
            }
            FormSelect {
                label: "Weight",
                value: query.gsm_range.clone(),
                onchange: on_weight,
                option { value: "", "Any weight" }
                for class in WeightClass::ALL {
                    option { key: "{class.as_param()}", value: "{class.as_param()}", "{class.label()}" }
                }
            }
            if any_filter {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    class: "library-filters-reset",
                    onclick: on_reset,
                    "Reset"
                }
            }
        }
    }
}

#[component]
fn FabricCard(item: LibraryItem) -> Element {
    let handle = use_console();
    let LibraryItem { fabric, selected } = item;
    let title = fabric.title();
    let gsm = format_gsm(fabric.gsm);
    let fabrication = or_dash(fabric.fabrication.as_deref()).to_string();
    let composition = or_dash(fabric.composition.as_deref()).to_string();
    let mill = or_dash(fabric.owner_name.as_deref()).to_string();
    let weight = fabric.weight_class().map(|w| w.as_param());

    let on_select = {
        let handle = handle.clone();
        let fabric = fabric.clone();
        move |_: MouseEvent| {
            handle.update(|c| c.toggle_select(fabric.clone()));
        }
    };
    let on_mockup = {
        let handle = handle.clone();
        let fabric = fabric.clone();
        move |_: MouseEvent| handle.update(|c| c.open_mockup(fabric.clone()))
    };
    let on_techpack = {
        let fabric = fabric.clone();
        move |_: MouseEvent| handle.update(|c| c.open_techpack(fabric.clone()))
    };

    rsx! {
        Card { class: if selected { "fabric-card fabric-card-selected" } else { "fabric-card" },
            div { class: "fabric-card-swatch",
                Icon::<LdLayers> { icon: LdLayers, width: 32, height: 32 }
                if let Some(weight) = weight {
                    Badge { variant: BadgeVariant::Secondary, class: "fabric-card-weight", "{weight}" }
                }
            }
            div { class: "fabric-card-body",
                h3 { class: "fabric-card-title", "{title}" }
                p { class: "fabric-card-fabrication", "{fabrication}" }
                dl { class: "fabric-card-specs",
                    dt { "Weight" }
                    dd { "{gsm}" }
                    dt { "Composition" }
                    dd { "{composition}" }
                    dt { "Mill" }
                    dd { "{mill}" }
                }
            }
            div { class: "fabric-card-actions",
                Button {
                    variant: if selected { ButtonVariant::Default } else { ButtonVariant::Outline },
                    size: ButtonSize::Sm,
                    onclick: on_select,
                    if selected {
                        Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                        "Selected"
                    } else {
                        Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                        "Select"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    title: "Preview on a garment",
                    onclick: on_mockup,
                    Icon::<LdShirt> { icon: LdShirt, width: 14, height: 14 }
                    "Mockup"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    title: "Technical details",
                    onclick: on_techpack,
                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                    "Techpack"
                }
            }
        }
    }
}
