//! Summary tiles across the top of the dashboard.

use dioxus::prelude::*;

use crate::animation::{Entrance, STATS_STAGGER};
use crate::data::Stat;
use crate::style::Styled;

use super::IconGlyph;

/// Row of summary tiles. Values are displayed as given.
#[component]
pub fn StatsBar(stats: Vec<Stat>) -> Element {
    rsx! {
        div {
            class: "stats-bar",

            for (index, stat) in stats.into_iter().enumerate() {
                StatTile {
                    key: "{stat.label}",
                    stat,
                    index,
                }
            }
        }
    }
}

#[component]
fn StatTile(stat: Stat, index: usize) -> Element {
    let motion = STATS_STAGGER.motion(Entrance::SlideUp, index);
    let value_class = stat.tone.text_class();
    let change_class = stat.trend.style().tone.text_class();

    rsx! {
        div {
            class: "panel stat-tile {motion.class}",
            style: "{motion.style}",

            div {
                class: "stat-body",
                p { class: "stat-label", "{stat.label}" }
                p { class: "stat-value mono {value_class}", "{stat.value}" }
                if let Some(change) = &stat.change {
                    p { class: "stat-change {change_class}", "{change}" }
                }
            }

            div {
                class: "stat-icon",
                IconGlyph { icon: stat.icon, class: value_class.clone() }
            }
        }
    }
}
