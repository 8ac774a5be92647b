use dioxus::prelude::*;

/// Text input with an optional label and leading icon.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Rendered inside the field, before the text.
    #[props(default)]
    leading: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_leading = leading.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-field", "data-leading": has_leading,
                if let Some(icon) = leading {
                    span { class: "input-leading", {icon} }
                }
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
        }
    }
}
