//! Oracle network panel.

use dioxus::prelude::*;

use crate::animation::{BAR_DELAY_MS, Entrance, Motion, ORACLE_STAGGER};
use crate::data::Oracle;
use crate::metrics::{active_count, avg_reputation, format_thousands, reputation_tone};
use crate::style::{Icon, Styled};

use super::IconGlyph;

/// Oracle cards with active count and average reputation in the header.
#[component]
pub fn OracleStatusPanel(oracles: Vec<Oracle>) -> Element {
    let total = oracles.len();
    let active = active_count(&oracles);
    let avg = avg_reputation(&oracles)
        .map(|rep| format!("{}%", rep))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        section {
            class: "panel panel-fill",

            div {
                class: "panel-header",
                div {
                    class: "panel-heading",
                    IconGlyph { icon: Icon::Shield, class: "text-primary".to_string() }
                    span { class: "panel-title", "Oracle Network" }
                }
                div {
                    class: "panel-meta",
                    span { class: "text-success mono", "{active}/{total} Active" }
                    span { class: "text-muted", "|" }
                    span { class: "text-muted mono", "Avg Rep: {avg}" }
                }
            }

            div {
                class: "panel-scroll",
                for (index, oracle) in oracles.into_iter().enumerate() {
                    OracleCard {
                        key: "{oracle.id}",
                        oracle,
                        index,
                    }
                }
            }
        }
    }
}

#[component]
fn OracleCard(oracle: Oracle, index: usize) -> Element {
    let motion = ORACLE_STAGGER.motion(Entrance::SlideRight, index);
    let bar_motion = Motion::new(Entrance::Grow, ORACLE_STAGGER.offset(BAR_DELAY_MS).delay_ms(index));
    let kind = oracle.kind.style();
    let status = oracle.status.style();
    let trend = oracle.trend.style();
    let rep_tone = reputation_tone(oracle.reputation);
    let submissions = format_thousands(oracle.submissions);

    rsx! {
        div {
            class: "oracle-card {motion.class}",
            style: "{motion.style}",

            div {
                class: "card-row",
                div {
                    class: "card-identity",
                    div {
                        class: "icon-tile",
                        IconGlyph { icon: kind.icon, class: kind.tone.text_class() }
                    }
                    div {
                        div { class: "card-name", "{oracle.name}" }
                        div { class: "card-sub", "{kind.label} Oracle" }
                    }
                }
                div {
                    class: "card-status",
                    span { class: "status-dot {status.tone.bg_class()}" }
                    span { class: "text-muted", "{status.label}" }
                }
            }

            div {
                class: "card-metrics",
                div {
                    div { class: "metric-label", "Reputation" }
                    div {
                        class: "metric-inline",
                        span { class: "metric-value mono {rep_tone.text_class()}", "{oracle.reputation}%" }
                        IconGlyph { icon: trend.icon, class: trend.tone.text_class() }
                    }
                }
                div {
                    div { class: "metric-label", "Last Update" }
                    div { class: "metric-value mono", "{oracle.last_update}" }
                }
                div {
                    div { class: "metric-label", "Submissions" }
                    div { class: "metric-value mono", "{submissions}" }
                }
            }

            // Reputation bar
            div {
                class: "bar-track",
                div {
                    class: "bar-fill {bar_motion.class}",
                    style: "width: {oracle.reputation}%; background: {rep_tone.css_var()}; {bar_motion.style}",
                }
            }
        }
    }
}
