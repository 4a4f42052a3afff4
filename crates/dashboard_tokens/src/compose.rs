//! Override and extra-class composition over resolved presentation records.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::token::{ColorClass, Icon, PresentationToken, SizeClass};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Output of one resolution call.
pub struct ResolvedPresentation {
    /// Icon, when the element shows one.
    pub icon: Option<Icon>,
    /// Color key.
    pub color: ColorClass,
    /// Display label.
    pub label: String,
    /// Size key.
    pub size: SizeClass,
    /// Caller classes appended after the base classes.
    pub extra_classes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Caller-supplied replacements for individual token fields.
///
/// Unknown fields are ignored when deserializing.
pub struct PresentationOverrides {
    /// Replacement icon.
    pub icon: Option<Icon>,
    /// Replacement color key.
    pub color: Option<ColorClass>,
    /// Replacement label.
    pub label: Option<String>,
    /// Replacement size key.
    pub size: Option<SizeClass>,
}

impl PresentationOverrides {
    /// Overrides nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the icon override.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the color override.
    pub fn color(mut self, color: ColorClass) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the label override.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the size override.
    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the override for the token's category. A later token of the same category
    /// replaces an earlier one.
    pub fn with_token(self, token: PresentationToken) -> Self {
        match token {
            PresentationToken::Icon(icon) => self.icon(icon),
            PresentationToken::Color(color) => self.color(color),
            PresentationToken::Label(label) => self.label(label),
            PresentationToken::Size(size) => self.size(size),
        }
    }
}

impl FromIterator<PresentationToken> for PresentationOverrides {
    fn from_iter<I: IntoIterator<Item = PresentationToken>>(tokens: I) -> Self {
        tokens.into_iter().fold(Self::none(), Self::with_token)
    }
}

/// Applies per-field overrides, then appends `extra_classes` after any classes already present.
///
/// A supplied override replaces its field entirely; fields without an override keep the
/// resolved value.
pub fn compose<I, S>(
    resolved: ResolvedPresentation,
    overrides: PresentationOverrides,
    extra_classes: I,
) -> ResolvedPresentation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ResolvedPresentation {
        icon,
        color,
        label,
        size,
        extra_classes: mut classes,
    } = resolved;
    classes.extend(
        extra_classes
            .into_iter()
            .map(Into::into)
            .filter(|class: &String| !class.trim().is_empty()),
    );
    ResolvedPresentation {
        icon: overrides.icon.or(icon),
        color: overrides.color.unwrap_or(color),
        label: overrides.label.unwrap_or(label),
        size: overrides.size.unwrap_or(size),
        extra_classes: classes,
    }
}

impl ResolvedPresentation {
    /// Base classes derived from the color and size tokens under `theme`.
    pub fn base_classes(&self, theme: &Theme) -> Vec<String> {
        vec![
            theme.color_class(self.color).to_string(),
            self.size.class_token(),
        ]
    }

    /// Space-separated class list: base classes first, then extra classes.
    pub fn class_list(&self, theme: &Theme) -> String {
        self.base_classes(theme)
            .into_iter()
            .chain(self.extra_classes.iter().cloned())
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::ThemeMode;

    fn resolved() -> ResolvedPresentation {
        ResolvedPresentation {
            icon: Some(Icon::Fire),
            color: ColorClass::Success,
            label: "WORK".to_string(),
            size: SizeClass::Md,
            extra_classes: vec!["badge".to_string()],
        }
    }

    #[test]
    fn label_override_leaves_other_fields() {
        let composed = compose(
            resolved(),
            PresentationOverrides::none().label("Burning"),
            Vec::<String>::new(),
        );
        assert_eq!(composed.label, "Burning");
        assert_eq!(composed.icon, Some(Icon::Fire));
        assert_eq!(composed.color, ColorClass::Success);
        assert_eq!(composed.size, SizeClass::Md);
    }

    #[test]
    fn extra_classes_append_after_existing_ones() {
        let composed = compose(resolved(), PresentationOverrides::none(), ["wide", " ", "x"]);
        assert_eq!(composed.extra_classes, vec!["badge", "wide", "x"]);

        let theme = Theme::builtin(ThemeMode::Light);
        assert_eq!(
            composed.class_list(&theme),
            "ui-tone-success ui-size-md badge wide x"
        );
    }

    #[test]
    fn extra_classes_never_remove_base_classes() {
        let theme = Theme::builtin(ThemeMode::Dark);
        let base = resolved().base_classes(&theme);
        let composed = compose(resolved(), PresentationOverrides::none(), ["ui-tone-danger"]);
        let classes = composed.class_list(&theme);
        for class in base {
            assert!(classes.contains(&class), "{class} kept");
        }
    }

    #[test]
    fn overrides_collect_from_tagged_tokens() {
        let overrides: PresentationOverrides = [
            PresentationToken::Icon(Icon::Gear),
            PresentationToken::Label("custom".to_string()),
            PresentationToken::Icon(Icon::Snow),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            overrides,
            PresentationOverrides::none().icon(Icon::Snow).label("custom")
        );

        let composed = compose(resolved(), overrides, Vec::<String>::new());
        assert_eq!(composed.icon, Some(Icon::Snow));
        assert_eq!(composed.label, "custom");
        assert_eq!(composed.color, resolved().color);
        assert_eq!(composed.size, resolved().size);
    }

    #[test]
    fn overrides_from_json_ignore_unknown_fields() {
        let overrides: PresentationOverrides = serde_json::from_str(
            r#"{ "icon": "snow", "tooltip": "ignored", "size": "lg" }"#,
        )
        .expect("deserialize");
        assert_eq!(
            overrides,
            PresentationOverrides::none().icon(Icon::Snow).size(SizeClass::Lg)
        );

        let composed = compose(resolved(), overrides, Vec::<String>::new());
        assert_eq!(composed.icon, Some(Icon::Snow));
        assert_eq!(composed.size, SizeClass::Lg);
        assert_eq!(composed.label, "WORK");
    }
}
