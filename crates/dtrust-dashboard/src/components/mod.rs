//! UI components for the D-TRUST dashboard.

mod accountability_feed;
mod app;
mod consensus_panel;
mod disaster_map;
mod header;
mod icon;
mod oracle_status;
mod stats_bar;
mod trigger_timeline;

pub use accountability_feed::*;
pub use app::*;
pub use consensus_panel::*;
pub use disaster_map::*;
pub use header::*;
pub use icon::*;
pub use oracle_status::*;
pub use stats_bar::*;
pub use trigger_timeline::*;

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::*;
    use crate::data::Dataset;

    /// Asserts each name first appears after the one before it.
    fn assert_in_order(html: &str, names: &[&str]) {
        let mut last = None;
        for name in names {
            let pos = html
                .find(name)
                .unwrap_or_else(|| panic!("{name:?} missing from rendered panel"));
            if let Some((prev_name, prev_pos)) = last {
                assert!(pos > prev_pos, "{name:?} rendered before {prev_name:?}");
            }
            last = Some((name, pos));
        }
    }

    #[test]
    fn test_oracle_panel_keeps_input_order() {
        let mut oracles = Dataset::builtin().oracles;
        oracles.reverse();
        let names: Vec<String> = oracles.iter().map(|o| o.name.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            OracleStatusPanel { oracles }
        });

        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_in_order(&html, &names);
    }

    #[test]
    fn test_oracle_panel_header_aggregates() {
        let oracles = Dataset::builtin().oracles;
        let html = dioxus_ssr::render_element(rsx! {
            OracleStatusPanel { oracles }
        });
        assert!(html.contains("5/6 Active"), "{html}");
        assert!(html.contains("Avg Rep: 94%"), "{html}");
    }

    #[test]
    fn test_oracle_panel_empty_average() {
        let html = dioxus_ssr::render_element(rsx! {
            OracleStatusPanel { oracles: Vec::new() }
        });
        assert!(html.contains("0/0 Active"));
        assert!(html.contains("Avg Rep: —"));
    }

    #[test]
    fn test_consensus_panel_keeps_input_order() {
        let data = Dataset::builtin();
        let mut records = data.consensus;
        records.swap(0, 2);
        let names: Vec<String> = records.iter().map(|r| r.disaster_name.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            ConsensusPanel {
                records,
                quorum_required: data.network.quorum_required,
                quorum_total: data.network.quorum_total,
            }
        });

        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(names, ["Kutch Tremor", "Cyclone Michaung", "Chennai Urban Flooding"]);
        assert_in_order(&html, &names);
        assert!(html.contains("Quorum: 4/6 oracles"));
    }

    #[test]
    fn test_trigger_timeline_keeps_input_order() {
        let mut triggers = Dataset::builtin().triggers;
        triggers.rotate_left(2);
        let titles: Vec<String> = triggers.iter().map(|t| t.title.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            TriggerTimeline { triggers }
        });

        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        assert_in_order(&html, &titles);
        assert!(html.contains("3 executed today"), "{html}");
    }

    #[test]
    fn test_accountability_feed_keeps_input_order() {
        let mut events = Dataset::builtin().accountability;
        events.reverse();
        let actors: Vec<String> = events.iter().map(|e| e.actor.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            AccountabilityFeed { events }
        });

        let actors: Vec<&str> = actors.iter().map(String::as_str).collect();
        assert_eq!(actors[0], "Tata Trusts");
        assert_in_order(&html, &actors);
    }

    #[test]
    fn test_disaster_map_keeps_input_order() {
        let mut disasters = Dataset::builtin().disasters;
        disasters.swap(0, 3);
        let names: Vec<String> = disasters.iter().map(|d| d.name.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            DisasterMap { disasters }
        });

        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_in_order(&html, &names);
        assert!(html.contains("4 Active Zones"));
    }

    #[test]
    fn test_stats_bar_keeps_input_order() {
        let mut stats = Dataset::builtin().stats;
        stats.reverse();
        let labels: Vec<String> = stats.iter().map(|s| s.label.clone()).collect();

        let html = dioxus_ssr::render_element(rsx! {
            StatsBar { stats }
        });

        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        assert_eq!(labels[0], "Consensus Rate");
        assert_in_order(&html, &labels);
    }
}
