//! Presentation token vocabulary shared by every resolver.

use serde::{Deserialize, Serialize};

use crate::variant::VariantKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon references. Glyph rendering belongs to the view layer.
pub enum Icon {
    /// Burner running.
    Fire,
    /// Device switched off.
    Snow,
    /// Waiting or standby.
    Hourglass,
    /// Device reports an error.
    WarningTriangle,
    /// Unknown or missing status.
    QuestionMark,
    /// Semi-automatic operation.
    Gear,
    /// Automatic, schedule-driven operation.
    Clock,
    /// Manual operation.
    Wrench,
    /// Room sensor unreachable.
    WifiOff,
    /// Room sensor battery nearly empty.
    BatteryCritical,
    /// Room sensor battery low.
    BatteryLow,
    /// Previous page.
    ChevronLeft,
    /// Next page.
    ChevronRight,
    /// Dismiss/close.
    Dismiss,
    /// Room or home marker.
    Home,
}

impl Icon {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Snow => "snow",
            Self::Hourglass => "hourglass",
            Self::WarningTriangle => "warning-triangle",
            Self::QuestionMark => "question-mark",
            Self::Gear => "gear",
            Self::Clock => "clock",
            Self::Wrench => "wrench",
            Self::WifiOff => "wifi-off",
            Self::BatteryCritical => "battery-critical",
            Self::BatteryLow => "battery-low",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Dismiss => "dismiss",
            Self::Home => "home",
        }
    }
}

impl VariantKey for Icon {
    const ALL: &'static [Self] = &[
        Self::Fire,
        Self::Snow,
        Self::Hourglass,
        Self::WarningTriangle,
        Self::QuestionMark,
        Self::Gear,
        Self::Clock,
        Self::Wrench,
        Self::WifiOff,
        Self::BatteryCritical,
        Self::BatteryLow,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Dismiss,
        Self::Home,
    ];

    fn token(self) -> &'static str {
        Icon::token(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color keys. The active [`crate::Theme`] maps them to class strings.
pub enum ColorClass {
    /// Healthy/active tone.
    Success,
    /// Neutral, informational tone.
    Neutral,
    /// Attention tone.
    Warning,
    /// Strong primary emphasis, used for device errors.
    PrimaryBold,
    /// Accent tone.
    Accent,
    /// Destructive or critical tone.
    Danger,
    /// De-emphasized tone.
    Muted,
}

impl Default for ColorClass {
    fn default() -> Self {
        Self::Neutral
    }
}

impl ColorClass {
    /// Stable token used for CSS hooks and theme configuration keys.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
            Self::PrimaryBold => "primary-bold",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Muted => "muted",
        }
    }
}

impl VariantKey for ColorClass {
    const ALL: &'static [Self] = &[
        Self::Success,
        Self::Neutral,
        Self::Warning,
        Self::PrimaryBold,
        Self::Accent,
        Self::Danger,
        Self::Muted,
    ];

    fn token(self) -> &'static str {
        ColorClass::token(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Semantic size keys, smallest first.
pub enum SizeClass {
    /// Extra small.
    #[serde(rename = "xs")]
    Xs,
    /// Small.
    #[serde(rename = "sm")]
    Sm,
    /// Medium.
    #[serde(rename = "md")]
    Md,
    /// Large.
    #[serde(rename = "lg")]
    Lg,
    /// Extra large.
    #[serde(rename = "xl")]
    Xl,
    /// Double extra large.
    #[serde(rename = "2xl")]
    Xxl,
    /// Triple extra large.
    #[serde(rename = "3xl")]
    Xxxl,
}

impl Default for SizeClass {
    fn default() -> Self {
        Self::Md
    }
}

impl SizeClass {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }

    /// Class string applied by the renderer for this size.
    pub fn class_token(self) -> String {
        format!("ui-size-{}", self.token())
    }
}

impl VariantKey for SizeClass {
    const ALL: &'static [Self] = &[
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
    ];

    fn token(self) -> &'static str {
        SizeClass::token(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "value", rename_all = "kebab-case")]
/// A single resolved presentation value tagged with its category.
pub enum PresentationToken {
    /// Icon reference.
    Icon(Icon),
    /// Semantic color key.
    Color(ColorClass),
    /// Display string.
    Label(String),
    /// Semantic size key.
    Size(SizeClass),
}

impl PresentationToken {
    /// Category name of this token.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Icon(_) => "icon",
            Self::Color(_) => "color",
            Self::Label(_) => "label",
            Self::Size(_) => "size",
        }
    }
}
