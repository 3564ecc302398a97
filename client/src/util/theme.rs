//! Light/dark theme persistence.
//!
//! Reads the stored preference from `localStorage` and applies it as the
//! `<body>` class. Toggle writes back to `localStorage` and updates that
//! class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the body class of the chosen theme.
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Body class, also the persisted value.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    /// Parse a persisted value; anything unrecognised is `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "light-mode" => Some(Self::Light),
            "dark-mode" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toast text shown after switching to this theme.
    #[must_use]
    pub fn enabled_message(self) -> &'static str {
        match self {
            Self::Light => "Light mode enabled",
            Self::Dark => "Dark mode enabled",
        }
    }
}

/// Read the stored theme, defaulting to light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|value| Theme::from_stored(&value))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Set the `<body>` class for `theme`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(theme.class());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch theme, apply it and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.class());
            }
        }
    }
    next
}
