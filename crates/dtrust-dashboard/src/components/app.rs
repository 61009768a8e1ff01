//! Root dashboard page.

use dioxus::prelude::*;

use crate::animation;
use crate::data::Dataset;
use crate::theme::ThemedRoot;

use super::{AccountabilityFeed, ConsensusPanel, DisasterMap, Header, OracleStatusPanel, StatsBar, TriggerTimeline};

/// Dashboard page composing every panel in the grid layout.
///
/// Each panel receives only its own records.
#[component]
pub fn Dashboard(dataset: Dataset) -> Element {
    let Dataset {
        network,
        stats,
        disasters,
        oracles,
        consensus,
        triggers,
        accountability,
    } = dataset;

    rsx! {
        ThemedRoot {
            div {
                class: "dashboard {animation::root_motion_class()}",

                Header { network: network.clone() }

                main {
                    class: "dashboard-main",

                    StatsBar { stats }

                    // Map and consensus on the left, oracles on the right
                    div {
                        class: "grid-main",

                        div {
                            class: "column-wide",
                            div { class: "slot slot-map", DisasterMap { disasters } }
                            div {
                                class: "slot slot-consensus",
                                ConsensusPanel {
                                    records: consensus,
                                    quorum_required: network.quorum_required,
                                    quorum_total: network.quorum_total,
                                }
                            }
                        }

                        div { class: "slot slot-oracles", OracleStatusPanel { oracles } }
                    }

                    div {
                        class: "grid-bottom",
                        div { class: "slot slot-feed", TriggerTimeline { triggers } }
                        div { class: "slot slot-feed", AccountabilityFeed { events: accountability } }
                    }

                    Footer {}
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",

            div {
                class: "footer-left",
                span { class: "gradient-text footer-brand", "D-TRUST" }
                span { "|" }
                span { "Decentralized Disaster Truth & Relief Triggering System" }
            }

            div {
                class: "footer-right",
                span { "Built for IIT Kharagpur Hackathon" }
                span { "•" }
                span { class: "mono", "Hyperledger Fabric" }
                span { "•" }
                span { "No on-chain payments" }
            }
        }
    }
}
