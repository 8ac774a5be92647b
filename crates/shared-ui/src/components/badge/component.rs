use dioxus::prelude::*;

/// Colour scheme of a [`Badge`]. Maps onto `data-style` in `style.css`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Filled with the brand colour. Settled states such as Open or Paid.
    #[default]
    Default,
    /// Muted fill for states still in progress.
    Secondary,
    Destructive,
    /// Border only, for metadata and unknown statuses.
    Outline,
}

impl BadgeVariant {
    fn data_style(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Status or metadata pill, with an optional icon before the label.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] leading: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.data_style(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if let Some(icon) = leading {
                span { class: "badge-icon", {icon} }
            }
            {children}
        }
    }
}
