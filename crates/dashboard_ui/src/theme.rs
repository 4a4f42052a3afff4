//! Theme context shared by every primitive.

use dashboard_tokens::{
    ColorClass, ConfigError, ResolvedPresentation, Theme, ThemeConfig, ThemeMode,
};
use leptos::*;

#[derive(Clone, Copy)]
/// Reactive handle to the active [`Theme`].
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Wraps a theme in a new signal.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: create_rw_signal(theme),
        }
    }

    /// Read-only view of the active theme.
    pub fn theme(self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Switches between light and dark, keeping configured overrides.
    pub fn set_mode(self, mode: ThemeMode) {
        self.theme.update(|theme| theme.set_mode(mode));
    }

    /// Active mode token.
    pub fn mode_token(self) -> &'static str {
        self.theme.with(|theme| theme.mode().token())
    }

    /// Class list for a resolved presentation under the active theme.
    pub fn class_list(self, presentation: &ResolvedPresentation) -> String {
        self.theme.with(|theme| presentation.class_list(theme))
    }

    /// Class string for one color key under the active theme.
    pub fn color_class(self, color: ColorClass) -> String {
        self.theme.with(|theme| theme.color_class(color).to_string())
    }
}

/// Parses a TOML theme document; `fallback_mode` applies when the document sets no mode.
///
/// # Errors
///
/// Returns the [`ConfigError`] from parsing or from an unknown color key.
pub fn load_theme(body: &str, fallback_mode: ThemeMode) -> Result<Theme, ConfigError> {
    let config = ThemeConfig::from_toml_str(body)?;
    Theme::from_config(&config, fallback_mode)
}

/// Returns the nearest [`ThemeContext`], or a light built-in theme when none was provided.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext::new(Theme::default()))
}

#[component]
/// Provides the theme to descendants. A rejected `config` document is logged and replaced by the
/// built-in palette for `mode`.
pub fn ThemeProvider(
    #[prop(default = ThemeMode::Light)] mode: ThemeMode,
    #[prop(optional)] config: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = match config.map(|body| load_theme(body, mode)) {
        Some(Ok(theme)) => theme,
        Some(Err(err)) => {
            logging::warn!("theme config rejected, using built-in palette: {err}");
            Theme::builtin(mode)
        }
        None => Theme::builtin(mode),
    };
    let context = ThemeContext::new(theme);
    provide_context(context);

    view! {
        <div
            class="ui-theme"
            data-ui-primitive="true"
            data-ui-kind="theme"
            data-ui-theme=move || context.mode_token()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_theme_prefers_document_mode() {
        let theme = load_theme("mode = \"dark\"", ThemeMode::Light).expect("theme");
        assert_eq!(theme.mode(), ThemeMode::Dark);

        let theme = load_theme("[colors]\nsuccess = \"ok\"", ThemeMode::Dark).expect("theme");
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.color_class(ColorClass::Success), "ok");
    }

    #[test]
    fn load_theme_reports_bad_documents() {
        assert!(load_theme("mode = 1", ThemeMode::Light).is_err());
        assert!(load_theme("[colors]\nchartreuse = \"x\"", ThemeMode::Light).is_err());
    }
}
