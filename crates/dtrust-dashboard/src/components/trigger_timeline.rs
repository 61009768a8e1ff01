//! Trigger events timeline.

use dioxus::prelude::*;

use crate::animation::{Entrance, TRIGGER_STAGGER};
use crate::data::TriggerEvent;
use crate::metrics::executed_count;
use crate::style::{Icon, Styled};

use super::IconGlyph;

/// Chronological list of triggers fired after consensus.
#[component]
pub fn TriggerTimeline(triggers: Vec<TriggerEvent>) -> Element {
    let executed = executed_count(&triggers);

    rsx! {
        section {
            class: "panel panel-fill",

            div {
                class: "panel-header",
                div {
                    class: "panel-heading",
                    IconGlyph { icon: Icon::Zap, class: "text-accent".to_string() }
                    span { class: "panel-title", "Trigger Events" }
                }
                span { class: "panel-meta text-muted mono", "{executed} executed today" }
            }

            div {
                class: "panel-scroll",
                div {
                    class: "timeline",
                    for (index, trigger) in triggers.into_iter().enumerate() {
                        TimelineItem {
                            key: "{trigger.id}",
                            trigger,
                            index,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(trigger: TriggerEvent, index: usize) -> Element {
    let motion = TRIGGER_STAGGER.motion(Entrance::SlideRight, index);
    let kind = trigger.kind.style();
    let status = trigger.status.style();
    let kind_bg = kind.tone.bg_class();
    let status_class = status.tone.text_class();

    rsx! {
        div {
            class: "timeline-item {motion.class}",
            style: "{motion.style}",

            div {
                class: "timeline-dot {kind_bg}",
                IconGlyph { icon: kind.icon, class: "timeline-dot-icon".to_string() }
            }

            div {
                class: "timeline-content",
                div {
                    class: "card-row",
                    div {
                        div {
                            class: "card-inline",
                            span { class: "kind-badge {kind_bg}", "{kind.label}" }
                            h4 { class: "card-name", "{trigger.title}" }
                        }
                        p { class: "card-sub", "{trigger.description}" }
                    }
                    div {
                        class: "card-status",
                        IconGlyph { icon: status.icon, class: status_class.clone() }
                        span { class: "{status_class}", "{status.label}" }
                    }
                }

                div {
                    class: "card-footnote",
                    span { "Ref: {trigger.disaster_ref}" }
                    span { "•" }
                    span { "{trigger.timestamp}" }
                    if let Some(hash) = &trigger.tx_hash {
                        span { "•" }
                        span { class: "mono text-primary", "{hash}" }
                    }
                }
            }
        }
    }
}
