//! Live disaster map with severity markers.

use dioxus::prelude::*;

use crate::animation::{Entrance, MAP_STAGGER};
use crate::data::{DisasterLocation, DisasterSeverity};
use crate::style::{Icon, Styled};

use super::IconGlyph;

/// Outline drawn behind the markers, in the 0-100 viewBox.
const OUTLINE_PATH: &str =
    "M35 15 L55 10 L70 20 L75 35 L80 50 L75 65 L65 80 L50 85 L40 80 L30 70 L25 55 L30 40 L35 25 Z";

/// Map panel. Marker positions are percentages of the map area.
#[component]
pub fn DisasterMap(disasters: Vec<DisasterLocation>) -> Element {
    let zone_count = disasters.len();

    rsx! {
        section {
            class: "panel panel-fill",

            div {
                class: "panel-header",
                div {
                    class: "panel-heading",
                    span { class: "beacon" }
                    span { class: "panel-title", "Live Disaster Map" }
                }
                span { class: "panel-meta mono", "{zone_count} Active Zones" }
            }

            div {
                class: "map-container",

                div { class: "map-grid" }

                svg {
                    class: "map-outline",
                    view_box: "0 0 100 100",
                    preserve_aspect_ratio: "xMidYMid meet",
                    path {
                        d: OUTLINE_PATH,
                        fill: "none",
                        stroke: "var(--primary)",
                        stroke_width: "0.5",
                    }
                }

                for (index, disaster) in disasters.into_iter().enumerate() {
                    MapMarker {
                        key: "{disaster.id}",
                        disaster,
                        index,
                    }
                }

                SeverityLegend {}
            }
        }
    }
}

#[component]
fn MapMarker(disaster: DisasterLocation, index: usize) -> Element {
    let motion = MAP_STAGGER.motion(Entrance::Pop, index);
    let severity = disaster.severity.style();
    let status = disaster.status.style();
    let is_critical = disaster.severity == DisasterSeverity::Critical;
    let dot_class = severity.tone.bg_class();
    let status_class = status.tone.text_class();

    rsx! {
        div {
            class: "map-marker {motion.class}",
            style: "left: {disaster.lng}%; top: {disaster.lat}%; {motion.style}",

            if is_critical {
                span { class: "pulse-ring pulse-ring-outer" }
                span { class: "pulse-ring pulse-ring-inner" }
            }

            div {
                class: "marker-dot {dot_class}",
                IconGlyph { icon: Icon::MapPin, class: "marker-pin".to_string() }
            }

            div {
                class: "marker-tooltip glass",
                div {
                    class: "tooltip-title",
                    IconGlyph { icon: status.icon, class: status_class }
                    span { "{disaster.name}" }
                }
                div {
                    class: "tooltip-body",
                    div { "Type: {disaster.kind}" }
                    div { "Severity: {severity.label}" }
                    div { "Status: {status.label}" }
                }
            }
        }
    }
}

/// Legend listing every severity in declaration order.
#[component]
fn SeverityLegend() -> Element {
    rsx! {
        div {
            class: "map-legend glass",
            div { class: "legend-title", "SEVERITY" }
            div {
                class: "legend-items",
                for severity in DisasterSeverity::ALL {
                    div {
                        key: "{severity.style().label}",
                        class: "legend-item",
                        span { class: "legend-dot {severity.style().tone.bg_class()}" }
                        span { "{severity.style().label}" }
                    }
                }
            }
        }
    }
}
