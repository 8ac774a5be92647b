use dioxus::prelude::*;

/// `count` pulsing placeholder blocks, each carrying the given attributes.
/// Shown in place of content that is still loading.
#[component]
pub fn Skeleton(
    #[props(default = 1)] count: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        for attrs in std::iter::repeat(merged).take(count) {
            div {
                ..attrs,
            }
        }
    }
}
