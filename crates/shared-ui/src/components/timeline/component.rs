use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;

/// One row of a [`Timeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub title: String,
    /// Pre-formatted date line, if the step has happened.
    pub when: Option<String>,
    pub details: Option<String>,
    pub completed: bool,
}

/// Vertical progress track: a dot per step joined by a rail.
#[component]
pub fn Timeline(steps: Vec<TimelineStep>) -> Element {
    let last = steps.len().saturating_sub(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class: "timeline",
            for (idx, step) in steps.into_iter().enumerate() {
                li {
                    key: "{idx}",
                    class: "timeline-step",
                    "data-completed": step.completed,
                    div { class: "timeline-marker",
                        div { class: "timeline-dot" }
                        if idx < last {
                            div { class: "timeline-rail" }
                        }
                    }
                    div { class: "timeline-body",
                        div { class: "timeline-title",
                            span { "{step.title}" }
                            if step.completed && step.when.is_some() {
                                Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                            }
                        }
                        if let Some(when) = step.when {
                            p { class: "timeline-when", "{when}" }
                        }
                        if let Some(details) = step.details {
                            p { class: "timeline-details", "{details}" }
                        }
                    }
                }
            }
        }
    }
}
