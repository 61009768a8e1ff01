//! Branding bar with network status and operator actions.

use dioxus::prelude::*;

use crate::animation::{Entrance, Motion};
use crate::data::NetworkInfo;
use crate::metrics::format_thousands;
use crate::style::Icon;
use crate::theme::ThemeSwitcher;

use super::IconGlyph;

/// Header component with branding, network status and actions.
#[component]
pub fn Header(network: NetworkInfo) -> Element {
    let mut settings_open = use_signal(|| false);

    let brand_motion = Motion::new(Entrance::SlideRight, 0);
    let status_motion = Motion::new(Entrance::Drop, 200);
    let actions_motion = Motion::new(Entrance::SlideRight, 300);
    let block = format_thousands(network.block_height);

    rsx! {
        header {
            class: "header",

            div {
                class: "header-inner",

                // Logo
                div {
                    class: "header-brand {brand_motion.class}",
                    style: "{brand_motion.style}",

                    div {
                        class: "logo",
                        div {
                            class: "logo-mark",
                            IconGlyph { icon: Icon::Shield }
                        }
                        span { class: "logo-beacon" }
                    }
                    div {
                        h1 { class: "header-title gradient-text", "D-TRUST" }
                        p { class: "header-subtitle", "Decentralized Disaster Truth System" }
                    }
                }

                // Network status
                div {
                    class: "header-status {status_motion.class}",
                    style: "{status_motion.style}",
                    IconGlyph { icon: Icon::Activity, class: "text-success pulse".to_string() }
                    span { class: "status-label", "Network Active" }
                    span { class: "text-muted", "•" }
                    span { class: "text-muted mono", "Block #{block}" }
                }

                // Actions
                div {
                    class: "header-actions {actions_motion.class}",
                    style: "{actions_motion.style}",

                    button {
                        class: "icon-button",
                        title: "Notifications",
                        IconGlyph { icon: Icon::Bell }
                        span { class: "notification-dot" }
                    }

                    button {
                        class: if settings_open() { "icon-button icon-button-active" } else { "icon-button" },
                        title: "Settings",
                        onclick: move |_| settings_open.toggle(),
                        IconGlyph { icon: Icon::Settings }
                    }

                    if settings_open() {
                        div {
                            class: "settings-popover glass",
                            ThemeSwitcher {}
                        }
                    }

                    div {
                        class: "avatar",
                        "{network.operator_initials}"
                    }
                }
            }
        }
    }
}
