//! Reality consensus engine panel.

use dioxus::prelude::*;

use crate::animation::{BAR_DELAY_MS, CONSENSUS_STAGGER, Entrance, Motion};
use crate::data::{ConsensusRecord, ConsensusStatus};
use crate::metrics::{confidence_tone, severity_tone};
use crate::style::{Icon, Styled, Tone};

use super::IconGlyph;

/// Consensus cards with per-event progress toward the oracle quorum.
#[component]
pub fn ConsensusPanel(records: Vec<ConsensusRecord>, quorum_required: u32, quorum_total: u32) -> Element {
    rsx! {
        section {
            class: "panel panel-fill",

            div {
                class: "panel-header",
                div {
                    class: "panel-heading",
                    IconGlyph { icon: Icon::Fingerprint, class: "text-primary".to_string() }
                    span { class: "panel-title", "Reality Consensus Engine" }
                }
                span { class: "panel-meta text-muted mono", "Quorum: {quorum_required}/{quorum_total} oracles" }
            }

            div {
                class: "panel-scroll",
                for (index, record) in records.into_iter().enumerate() {
                    ConsensusCard {
                        key: "{record.id}",
                        record,
                        index,
                    }
                }
            }
        }
    }
}

#[component]
fn ConsensusCard(record: ConsensusRecord, index: usize) -> Element {
    let motion = CONSENSUS_STAGGER.motion(Entrance::SlideUp, index);
    let bar_motion = Motion::with_duration(
        Entrance::Grow,
        CONSENSUS_STAGGER.offset(BAR_DELAY_MS).delay_ms(index),
        600,
    );
    let status = record.status.style();
    let progress = record.progress();
    let fill = record.fill();
    let reached = record.status == ConsensusStatus::ConsensusReached;
    let card_class = if reached {
        format!("consensus-card consensus-card-reached {}", motion.class)
    } else {
        format!("consensus-card {}", motion.class)
    };
    let status_icon_class = if record.status == ConsensusStatus::Pending {
        format!("{} spin", status.tone.text_class())
    } else {
        status.tone.text_class()
    };
    let agreed_tone = if record.quorum_met() { Tone::Success } else { Tone::Warning };
    let severity = format!("{:.1}", record.severity);

    rsx! {
        div {
            class: "{card_class}",
            style: "{motion.style}",

            div {
                class: "card-row",
                div {
                    h3 { class: "card-name", "{record.disaster_name}" }
                    div {
                        class: "card-sub card-inline",
                        IconGlyph { icon: Icon::MapPin }
                        span { "{record.region}" }
                        span { "•" }
                        IconGlyph { icon: Icon::Clock }
                        span { "{record.timestamp}" }
                    }
                }
                div {
                    class: "status-pill {status.tone.soft_class()}",
                    IconGlyph { icon: status.icon, class: status_icon_class }
                    span { class: "{status.tone.text_class()}", "{status.label}" }
                }
            }

            div {
                class: "card-metrics",
                div {
                    class: "data-cell",
                    div {
                        class: "metric-label",
                        IconGlyph { icon: Icon::Users }
                        " Oracles"
                    }
                    div {
                        class: "metric-value large mono",
                        span { class: "{agreed_tone.text_class()}", "{record.oracles_agreed}" }
                        span { class: "text-muted", "/{record.oracles_required}" }
                    }
                }
                div {
                    class: "data-cell",
                    div { class: "metric-label", "Confidence" }
                    div {
                        class: "metric-value large mono {confidence_tone(record.confidence).text_class()}",
                        "{record.confidence}%"
                    }
                }
                div {
                    class: "data-cell",
                    div { class: "metric-label", "Severity" }
                    div {
                        class: "metric-value large mono {severity_tone(record.severity).text_class()}",
                        "{severity}"
                    }
                }
            }

            div {
                div {
                    class: "progress-caption",
                    span { class: "text-muted", "Consensus Progress" }
                    span { class: "mono", "{progress}%" }
                }
                div {
                    class: "bar-track bar-track-wide",
                    div {
                        class: "bar-fill {fill.css_class()} {bar_motion.class}",
                        style: "width: {progress}%; {bar_motion.style}",
                    }
                }
            }
        }
    }
}
