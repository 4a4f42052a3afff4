//! Device status resolution: status marker → icon, color, and label.

use std::sync::OnceLock;

use serde::Serialize;

use crate::compose::ResolvedPresentation;
use crate::rules::{Rule, RuleTable};
use crate::token::{ColorClass, Icon, SizeClass};

/// Marker for a burner that is running.
pub const WORK_MARKER: &str = "WORK";
/// Marker for a device switched off.
pub const OFF_MARKER: &str = "OFF";
/// Marker for a device waiting in standby.
pub const STANDBY_MARKER: &str = "STANDBY";
/// Marker for a device reporting a fault.
pub const ERROR_MARKER: &str = "ERROR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Icon, color, and label resolved for one device status.
pub struct StatusPresentation {
    /// Status icon.
    pub icon: Icon,
    /// Status color key.
    pub color: ColorClass,
    /// Raw status text, or empty when no status was reported.
    pub label: String,
}

impl StatusPresentation {
    /// Lifts the status tokens into a full presentation record.
    pub fn into_presentation(self, size: SizeClass) -> ResolvedPresentation {
        ResolvedPresentation {
            icon: Some(self.icon),
            color: self.color,
            label: self.label,
            size,
            extra_classes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Independent icon and color rule tables for status strings.
pub struct StatusRules {
    icon: RuleTable<Icon>,
    color: RuleTable<ColorClass>,
}

impl StatusRules {
    /// Combines caller-built tables.
    pub fn new(icon: RuleTable<Icon>, color: RuleTable<ColorClass>) -> Self {
        Self { icon, color }
    }

    /// Shared tables for stove operating statuses.
    pub fn device() -> &'static StatusRules {
        static DEVICE: OnceLock<StatusRules> = OnceLock::new();
        DEVICE.get_or_init(|| Self {
            icon: RuleTable::builtin(
                vec![
                    Rule::absent(Icon::QuestionMark),
                    Rule::contains(WORK_MARKER, Icon::Fire),
                    Rule::contains(OFF_MARKER, Icon::Snow),
                    Rule::contains(STANDBY_MARKER, Icon::Hourglass),
                    Rule::contains(ERROR_MARKER, Icon::WarningTriangle),
                ],
                Icon::QuestionMark,
            ),
            color: RuleTable::builtin(
                vec![
                    Rule::absent(ColorClass::Neutral),
                    Rule::contains(WORK_MARKER, ColorClass::Success),
                    Rule::contains(OFF_MARKER, ColorClass::Neutral),
                    Rule::contains(STANDBY_MARKER, ColorClass::Warning),
                    Rule::contains(ERROR_MARKER, ColorClass::PrimaryBold),
                ],
                ColorClass::Neutral,
            ),
        })
    }

    /// Icon table.
    pub fn icon_table(&self) -> &RuleTable<Icon> {
        &self.icon
    }

    /// Color table.
    pub fn color_table(&self) -> &RuleTable<ColorClass> {
        &self.color
    }

    /// Resolves each category independently. The label is the status itself.
    pub fn resolve(&self, status: Option<&str>) -> StatusPresentation {
        StatusPresentation {
            icon: *self.icon.resolve(status),
            color: *self.color.resolve(status),
            label: status.unwrap_or_default().to_string(),
        }
    }
}

/// Resolves a stove status against the shared device tables.
pub fn resolve_status(status: Option<&str>) -> StatusPresentation {
    StatusRules::device().resolve(status)
}
