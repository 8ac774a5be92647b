use dioxus::prelude::*;

/// Spinning ring with an optional caption underneath.
#[component]
pub fn Spinner(
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner-block", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "spinner" }
            if !label.is_empty() {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}
