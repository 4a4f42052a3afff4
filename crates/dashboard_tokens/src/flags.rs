//! Priority-ordered resolution of small boolean flag sets into one tagged state.

use serde::{Deserialize, Serialize};

use crate::token::{ColorClass, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Heating operating mode derived from the `enabled` and `semi_manual` device flags.
///
/// Only three of the four flag combinations are distinct: semi-manual has no meaning while
/// the schedule is disabled, so `enabled = false, semi_manual = true` is [`Self::Manual`].
pub enum OperatingMode {
    /// Schedule enabled with manual adjustments allowed.
    SemiAutomatic,
    /// Schedule enabled.
    Automatic,
    /// Schedule disabled.
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Icon, color, and label for an [`OperatingMode`].
pub struct ModePresentation {
    /// Mode icon.
    pub icon: Icon,
    /// Mode color key.
    pub color: ColorClass,
    /// Mode display label.
    pub label: &'static str,
}

impl OperatingMode {
    /// Resolves the flags in fixed priority order: semi-automatic, automatic, manual.
    pub fn from_flags(enabled: bool, semi_manual: bool) -> Self {
        match (enabled, semi_manual) {
            (true, true) => Self::SemiAutomatic,
            (true, false) => Self::Automatic,
            (false, _) => Self::Manual,
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::SemiAutomatic => "semi-automatic",
            Self::Automatic => "automatic",
            Self::Manual => "manual",
        }
    }

    /// Presentation tokens for this mode.
    pub const fn presentation(self) -> ModePresentation {
        match self {
            Self::SemiAutomatic => ModePresentation {
                icon: Icon::Gear,
                color: ColorClass::Warning,
                label: "semi-automatic",
            },
            Self::Automatic => ModePresentation {
                icon: Icon::Clock,
                color: ColorClass::Success,
                label: "automatic",
            },
            Self::Manual => ModePresentation {
                icon: Icon::Wrench,
                color: ColorClass::Accent,
                label: "manual",
            },
        }
    }
}

/// Resolves the mode indicator tokens for a pair of device flags.
pub fn resolve_mode(enabled: bool, semi_manual: bool) -> ModePresentation {
    OperatingMode::from_flags(enabled, semi_manual).presentation()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
/// Connectivity and battery flags reported for one room sensor.
pub struct RoomFlags {
    /// Sensor is unreachable.
    pub offline: bool,
    /// Battery level is critical.
    pub critical_battery: bool,
    /// Battery level is low.
    pub low_battery: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Single suffix indicator shown next to a room name.
pub enum RoomIndicator {
    /// Sensor unreachable; battery readings are stale.
    Offline,
    /// Battery critical.
    CriticalBattery,
    /// Battery low.
    LowBattery,
    /// Nothing to report.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Icon, color, and label for a room suffix.
pub struct SuffixPresentation {
    /// Suffix icon.
    pub icon: Icon,
    /// Suffix color key.
    pub color: ColorClass,
    /// Accessible label.
    pub label: &'static str,
}

fn is_offline(flags: &RoomFlags) -> bool {
    flags.offline
}

fn is_critical_battery(flags: &RoomFlags) -> bool {
    flags.critical_battery
}

fn is_low_battery(flags: &RoomFlags) -> bool {
    flags.low_battery
}

/// Suffix priority, highest first. Offline outranks battery state because a disconnected
/// sensor's battery reading is no longer current.
pub const ROOM_INDICATOR_PRIORITY: [(RoomIndicator, fn(&RoomFlags) -> bool); 3] = [
    (RoomIndicator::Offline, is_offline),
    (RoomIndicator::CriticalBattery, is_critical_battery),
    (RoomIndicator::LowBattery, is_low_battery),
];

impl RoomIndicator {
    /// First indicator in [`ROOM_INDICATOR_PRIORITY`] whose flag is set.
    pub fn from_flags(flags: RoomFlags) -> Self {
        ROOM_INDICATOR_PRIORITY
            .iter()
            .find(|(_, applies)| applies(&flags))
            .map(|(indicator, _)| *indicator)
            .unwrap_or(Self::None)
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::CriticalBattery => "critical-battery",
            Self::LowBattery => "low-battery",
            Self::None => "none",
        }
    }

    /// Suffix tokens, or `None` when nothing is shown.
    pub const fn suffix(self) -> Option<SuffixPresentation> {
        match self {
            Self::Offline => Some(SuffixPresentation {
                icon: Icon::WifiOff,
                color: ColorClass::Muted,
                label: "offline",
            }),
            Self::CriticalBattery => Some(SuffixPresentation {
                icon: Icon::BatteryCritical,
                color: ColorClass::Danger,
                label: "battery critical",
            }),
            Self::LowBattery => Some(SuffixPresentation {
                icon: Icon::BatteryLow,
                color: ColorClass::Warning,
                label: "battery low",
            }),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Interaction state of a form control: disabled, then invalid, then default.
pub enum FieldState {
    /// Control does not accept input.
    Disabled,
    /// Control holds a value that failed validation.
    Invalid,
    /// Normal state.
    Default,
}

impl FieldState {
    /// Resolves the control flags; a disabled control never reports as invalid.
    pub fn from_flags(disabled: bool, invalid: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if invalid {
            Self::Invalid
        } else {
            Self::Default
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Invalid => "invalid",
            Self::Default => "default",
        }
    }

    /// Border/text color key for the state.
    pub const fn color(self) -> ColorClass {
        match self {
            Self::Disabled => ColorClass::Muted,
            Self::Invalid => ColorClass::Danger,
            Self::Default => ColorClass::Neutral,
        }
    }
}
