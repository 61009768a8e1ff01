//! Theme system for the D-TRUST dashboard.
//!
//! Uses a wrapper div with a data-theme attribute; colours are CSS custom
//! properties defined per theme in `assets/styles.css`.

use std::sync::OnceLock;

use clap::ValueEnum;
use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Dark control-room palette
    #[default]
    Operations,
    /// Light palette for bright rooms and projectors
    Daylight,
}

impl Theme {
    /// CSS data-theme attribute value
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Operations => "operations",
            Theme::Daylight => "daylight",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Operations => "Operations",
            Theme::Daylight => "Daylight",
        }
    }

    /// All available themes
    pub fn all() -> &'static [Theme] {
        &[Theme::Operations, Theme::Daylight]
    }

    /// Parses a data-theme attribute value.
    pub fn from_css_value(value: &str) -> Option<Theme> {
        Theme::all().iter().copied().find(|t| t.css_value() == value)
    }
}

/// Theme chosen at start-up, read once when the signal is first used.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Records the start-up theme. Must run before the app launches; later
/// calls are ignored.
pub fn set_initial_theme(theme: Theme) {
    if INITIAL_THEME.set(theme).is_err() {
        tracing::warn!("Initial theme already set, ignoring {}", theme.display_name());
    }
}

/// Theme the dashboard opens with.
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(initial_theme);

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme dropdown shown from the header's settings action.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            label { class: "theme-label", "Theme" }
            select {
                class: "theme-select",
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    let value = evt.value();
                    if let Some(theme) = Theme::from_css_value(&value) {
                        tracing::debug!("Switching theme to {}", theme.display_name());
                        *CURRENT_THEME.write() = theme;
                    }
                },
                for theme in Theme::all() {
                    option {
                        value: "{theme.css_value()}",
                        selected: *theme == current_theme,
                        "{theme.display_name()}"
                    }
                }
            }
        }
    }
}
