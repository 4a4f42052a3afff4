//! Light/dark palettes mapping semantic color keys to class strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::error::ConfigError;
use crate::token::ColorClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Color scheme.
pub enum ThemeMode {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

const fn builtin_class(mode: ThemeMode, color: ColorClass) -> &'static str {
    match (mode, color) {
        (ThemeMode::Light, ColorClass::Success) => "ui-tone-success",
        (ThemeMode::Light, ColorClass::Neutral) => "ui-tone-neutral",
        (ThemeMode::Light, ColorClass::Warning) => "ui-tone-warning",
        (ThemeMode::Light, ColorClass::PrimaryBold) => "ui-tone-primary ui-weight-bold",
        (ThemeMode::Light, ColorClass::Accent) => "ui-tone-accent",
        (ThemeMode::Light, ColorClass::Danger) => "ui-tone-danger",
        (ThemeMode::Light, ColorClass::Muted) => "ui-tone-muted",
        (ThemeMode::Dark, ColorClass::Success) => "ui-tone-success-dark",
        (ThemeMode::Dark, ColorClass::Neutral) => "ui-tone-neutral-dark",
        (ThemeMode::Dark, ColorClass::Warning) => "ui-tone-warning-dark",
        (ThemeMode::Dark, ColorClass::PrimaryBold) => "ui-tone-primary-dark ui-weight-bold",
        (ThemeMode::Dark, ColorClass::Accent) => "ui-tone-accent-dark",
        (ThemeMode::Dark, ColorClass::Danger) => "ui-tone-danger-dark",
        (ThemeMode::Dark, ColorClass::Muted) => "ui-tone-muted-dark",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Active palette: the built-in classes for a mode plus caller overrides.
pub struct Theme {
    mode: ThemeMode,
    overrides: BTreeMap<ColorClass, String>,
}

impl Theme {
    /// Built-in palette for `mode`.
    pub fn builtin(mode: ThemeMode) -> Self {
        Self {
            mode,
            overrides: BTreeMap::new(),
        }
    }

    /// Palette described by a configuration document. `fallback_mode` applies when the document
    /// does not choose a mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownColor`] when the document names an unknown color key.
    pub fn from_config(
        config: &ThemeConfig,
        fallback_mode: ThemeMode,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            mode: config.mode.unwrap_or(fallback_mode),
            overrides: config.color_overrides()?,
        })
    }

    /// Replaces the class for one color key.
    pub fn with_override(mut self, color: ColorClass, class: impl Into<String>) -> Self {
        self.overrides.insert(color, class.into());
        self
    }

    /// Switches the mode, keeping overrides.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Active mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Class string for `color`: the override when present, otherwise the mode's default.
    pub fn color_class(&self, color: ColorClass) -> &str {
        self.overrides
            .get(&color)
            .map(String::as_str)
            .unwrap_or(builtin_class(self.mode, color))
    }
}
