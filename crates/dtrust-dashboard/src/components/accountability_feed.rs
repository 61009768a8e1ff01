//! Accountability ledger feed.

use dioxus::prelude::*;

use crate::animation::{ACCOUNTABILITY_STAGGER, Entrance};
use crate::data::AccountabilityEvent;
use crate::style::{Icon, Styled};

use super::IconGlyph;

/// Audit-trail entries rendered as given.
#[component]
pub fn AccountabilityFeed(events: Vec<AccountabilityEvent>) -> Element {
    rsx! {
        section {
            class: "panel panel-fill",

            div {
                class: "panel-header",
                div {
                    class: "panel-heading",
                    IconGlyph { icon: Icon::FileCheck, class: "text-success".to_string() }
                    span { class: "panel-title", "Accountability Ledger" }
                }
                span { class: "panel-meta text-muted mono", "Immutable Audit Trail" }
            }

            div {
                class: "panel-scroll",
                for (index, event) in events.into_iter().enumerate() {
                    LedgerEntry {
                        key: "{event.id}",
                        event,
                        index,
                    }
                }
            }
        }
    }
}

#[component]
fn LedgerEntry(event: AccountabilityEvent, index: usize) -> Element {
    let motion = ACCOUNTABILITY_STAGGER.motion(Entrance::Rise, index);
    let kind = event.kind.style();
    let actor = event.actor_kind.style();
    let (verified_icon, verified_class) = if event.verified {
        (Icon::CheckCircle, "text-success")
    } else {
        (Icon::XCircle, "text-destructive")
    };

    rsx! {
        div {
            class: "ledger-entry {kind.tone.soft_class()} {motion.class}",
            style: "{motion.style}",

            div {
                class: "icon-tile",
                title: "{kind.label}",
                IconGlyph { icon: kind.icon, class: kind.tone.text_class() }
            }

            div {
                class: "ledger-body",
                div {
                    class: "card-inline",
                    span { class: "card-name truncate", "{event.actor}" }
                    span { class: "actor-badge {actor.tone.soft_class()} {actor.tone.text_class()}", "{actor.label}" }
                }
                p { class: "card-sub", "{event.action}" }

                div {
                    class: "card-footnote",
                    span { "{event.disaster_ref}" }
                    span { "•" }
                    IconGlyph { icon: Icon::Clock }
                    span { "{event.timestamp}" }
                    if let Some(hash) = &event.hash {
                        span { "•" }
                        span { class: "mono text-primary", "{hash}" }
                    }
                }
            }

            div {
                class: "ledger-verified",
                IconGlyph { icon: verified_icon, class: verified_class.to_string() }
            }
        }
    }
}
