//! Typed theme configuration loaded from TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::ThemeMode;
use crate::token::ColorClass;
use crate::variant::VariantKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Theme configuration document.
///
/// ```toml
/// mode = "dark"
///
/// [colors]
/// success = "text-emerald-300"
/// ```
///
/// Unknown top-level keys are ignored. `[colors]` keys must name a [`ColorClass`] token.
pub struct ThemeConfig {
    /// Color scheme; when unset the caller's fallback applies.
    pub mode: Option<ThemeMode>,
    /// Per-color class overrides keyed by color token.
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped fields.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(body)?)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file is unreadable and [`ConfigError::Parse`] when
    /// its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&body)
    }

    /// Color overrides keyed by [`ColorClass`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownColor`] for the first key that is not a color token.
    pub fn color_overrides(&self) -> Result<BTreeMap<ColorClass, String>, ConfigError> {
        self.colors
            .iter()
            .map(|(key, class)| {
                ColorClass::from_token(key)
                    .map(|color| (color, class.clone()))
                    .ok_or_else(|| ConfigError::UnknownColor(key.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn parses_mode_and_colors() {
        let config = ThemeConfig::from_toml_str(
            "mode = \"dark\"\nunrelated = 3\n[colors]\nprimary-bold = \"strong\"\n",
        )
        .expect("parse");
        assert_eq!(config.mode, Some(ThemeMode::Dark));

        let theme = Theme::from_config(&config, ThemeMode::Light).expect("theme");
        assert_eq!(theme.color_class(ColorClass::PrimaryBold), "strong");
        assert_eq!(theme.color_class(ColorClass::Success), "ui-tone-success-dark");
    }

    #[test]
    fn empty_document_uses_fallback_mode() {
        let config = ThemeConfig::from_toml_str("").expect("parse");
        assert_eq!(
            Theme::from_config(&config, ThemeMode::Dark).expect("theme"),
            Theme::builtin(ThemeMode::Dark)
        );
    }

    #[test]
    fn unknown_color_key_is_rejected() {
        let config = ThemeConfig::from_toml_str("[colors]\nteal = \"x\"\n").expect("parse");
        let err = Theme::from_config(&config, ThemeMode::Light).expect_err("unknown color");
        assert!(matches!(err, ConfigError::UnknownColor(ref key) if key == "teal"));
    }

    #[test]
    fn malformed_mode_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("mode = \"sepia\"").expect_err("bad mode");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let root = std::env::temp_dir().join(format!(
            "dashboard-tokens-config-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ));
        fs::create_dir_all(&root).expect("create dir");
        let path = root.join("theme.toml");
        fs::write(&path, "mode = \"dark\"\n").expect("write config");

        assert_eq!(
            ThemeConfig::load(&path).expect("load").mode,
            Some(ThemeMode::Dark)
        );

        let err = ThemeConfig::load(&root.join("missing.toml")).expect_err("missing");
        assert!(err.to_string().contains("missing.toml"));

        fs::remove_dir_all(&root).expect("cleanup");
    }
}
