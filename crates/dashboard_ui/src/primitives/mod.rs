//! Dashboard layout, typography, control, status, navigation, and overlay primitives.

use dashboard_tokens::{
    compose, ColorClass, Icon, PresentationOverrides, ResolvedPresentation, SizeClass,
    VariantKey,
};
use leptos::*;

use crate::icon::IconGlyph;
use crate::theme::use_theme;

mod controls;
mod layout;
mod navigation;
mod overlays;
mod status;
mod typography;

pub use controls::{Input, Select, SelectOption};
pub use layout::{Card, Container, Divider, Grid, Panel};
pub use navigation::Pagination;
pub use overlays::{ConfirmDialog, ScrollLock};
pub use status::{room_option_label, ModeIndicator, Room, RoomSelector, StatusBadge};
pub use typography::{Heading, Label, Text};

/// Joins a base class with caller classes, skipping blanks. Caller classes never replace the base.
pub(crate) fn merge_classes(base: &str, extra_classes: &[&'static str]) -> String {
    std::iter::once(base)
        .chain(extra_classes.iter().copied())
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Presentation record for elements whose tokens are fixed by props rather than rule tables.
pub(crate) fn fixed_presentation(
    base_class: &'static str,
    icon: Option<Icon>,
    color: ColorClass,
    label: impl Into<String>,
    size: SizeClass,
    overrides: PresentationOverrides,
    extra_classes: &[&'static str],
) -> ResolvedPresentation {
    compose(
        ResolvedPresentation {
            icon,
            color,
            label: label.into(),
            size,
            extra_classes: vec![base_class.to_string()],
        },
        overrides,
        extra_classes.iter().copied(),
    )
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use dashboard_tokens::{Theme, ThemeMode};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_classes_keeps_base_first() {
        assert_eq!(merge_classes("ui-card", &[]), "ui-card");
        assert_eq!(
            merge_classes("ui-card", &["wide", "  ", "ui-card"]),
            "ui-card wide ui-card"
        );
    }

    #[test]
    fn fixed_presentation_applies_overrides_and_extras() {
        let presentation = fixed_presentation(
            "ui-text",
            None,
            ColorClass::Neutral,
            "",
            SizeClass::Md,
            PresentationOverrides::none().color(ColorClass::Danger),
            &["caps"],
        );
        assert_eq!(presentation.color, ColorClass::Danger);
        assert_eq!(
            presentation.class_list(&Theme::builtin(ThemeMode::Light)),
            "ui-tone-danger ui-size-md ui-text caps"
        );
    }
}
