//! Glyph rendering for semantic [`Icon`] tokens.

use dashboard_tokens::{Icon, SizeClass};
use leptos::*;

/// Text glyph rendered for an icon token.
pub const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Fire => "\u{1F525}",
        Icon::Snow => "\u{2744}",
        Icon::Hourglass => "\u{23F3}",
        Icon::WarningTriangle => "\u{26A0}",
        Icon::QuestionMark => "?",
        Icon::Gear => "\u{2699}",
        Icon::Clock => "\u{1F552}",
        Icon::Wrench => "\u{1F527}",
        Icon::WifiOff => "\u{1F4F5}",
        Icon::BatteryCritical => "\u{1FAAB}",
        Icon::BatteryLow => "\u{1F50B}",
        Icon::ChevronLeft => "\u{2039}",
        Icon::ChevronRight => "\u{203A}",
        Icon::Dismiss => "\u{2715}",
        Icon::Home => "\u{1F3E0}",
    }
}

#[component]
/// Decorative icon glyph; hidden from assistive technology.
pub fn IconGlyph(
    icon: Icon,
    #[prop(default = SizeClass::Md)] size: SizeClass,
) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {glyph(icon)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use dashboard_tokens::VariantKey;

    use super::*;

    #[test]
    fn every_icon_has_a_non_empty_glyph() {
        for icon in Icon::ALL {
            assert!(!glyph(*icon).is_empty(), "{icon:?}");
        }
    }
}
