//! Icon renderer.

use dioxus::prelude::*;

use crate::style::Icon;

/// Draws an icon by symbolic name.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "icon {class}",
            "data-icon": "{icon.name()}",
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}
