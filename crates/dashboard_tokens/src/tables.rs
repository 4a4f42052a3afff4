//! Concrete variant and size tables used by the dashboard primitives.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::token::{ColorClass, Icon, SizeClass};
use crate::variant::{VariantKey, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Card surface levels, ordered by visual intensity.
pub enum SurfaceLevel {
    /// Opaque surface.
    Solid,
    /// Frosted translucent surface.
    Glass,
    /// Liquid-glass surface.
    Liquid,
    /// Liquid-glass surface with extra depth and highlights.
    LiquidEnhanced,
}

impl Default for SurfaceLevel {
    fn default() -> Self {
        Self::Solid
    }
}

impl VariantKey for SurfaceLevel {
    const ALL: &'static [Self] = &[Self::Solid, Self::Glass, Self::Liquid, Self::LiquidEnhanced];

    fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Glass => "glass",
            Self::Liquid => "liquid",
            Self::LiquidEnhanced => "liquid-enhanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Style bundle for one [`SurfaceLevel`].
pub struct SurfaceBundle {
    /// Surface class.
    pub class: &'static str,
    /// Visual intensity; each level strictly exceeds the previous one.
    pub intensity: u8,
    /// Marks the element for liquid-glass behavior downstream.
    pub liquid_glass: bool,
}

/// Card surface table.
pub fn surface_table() -> &'static VariantTable<SurfaceLevel, SurfaceBundle> {
    static TABLE: OnceLock<VariantTable<SurfaceLevel, SurfaceBundle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            SurfaceLevel::Solid,
            SurfaceBundle {
                class: "ui-surface-solid",
                intensity: 0,
                liquid_glass: false,
            },
            [
                (
                    SurfaceLevel::Glass,
                    SurfaceBundle {
                        class: "ui-surface-glass",
                        intensity: 1,
                        liquid_glass: false,
                    },
                ),
                (
                    SurfaceLevel::Liquid,
                    SurfaceBundle {
                        class: "ui-surface-liquid",
                        intensity: 2,
                        liquid_glass: true,
                    },
                ),
                (
                    SurfaceLevel::LiquidEnhanced,
                    SurfaceBundle {
                        class: "ui-surface-liquid-enhanced",
                        intensity: 3,
                        liquid_glass: true,
                    },
                ),
            ],
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Heading levels `h1`..`h6`.
pub enum HeadingLevel {
    /// `h1`.
    H1,
    /// `h2`.
    H2,
    /// `h3`.
    H3,
    /// `h4`.
    H4,
    /// `h5`.
    H5,
    /// `h6`.
    H6,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

impl HeadingLevel {
    /// Maps an integer level; anything outside `1..=6` yields `None`.
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// HTML tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl VariantKey for HeadingLevel {
    const ALL: &'static [Self] = &[Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    fn token(self) -> &'static str {
        self.tag()
    }
}

/// Default size for each heading level.
pub fn heading_size_table() -> &'static VariantTable<HeadingLevel, SizeClass> {
    static TABLE: OnceLock<VariantTable<HeadingLevel, SizeClass>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            HeadingLevel::H2,
            SizeClass::Xxl,
            [
                (HeadingLevel::H1, SizeClass::Xxxl),
                (HeadingLevel::H3, SizeClass::Xl),
                (HeadingLevel::H4, SizeClass::Lg),
                (HeadingLevel::H5, SizeClass::Md),
                (HeadingLevel::H6, SizeClass::Sm),
            ],
        )
    })
}

/// Heading size: an explicit size always wins over the size derived from the level.
pub fn heading_size(level: u8, explicit: Option<SizeClass>) -> SizeClass {
    explicit.unwrap_or_else(|| *heading_size_table().resolve(HeadingLevel::from_level(level)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared spacing scale for dividers and grids.
pub enum Spacing {
    /// No spacing.
    None,
    /// Compact.
    Sm,
    /// Default.
    Md,
    /// Spacious.
    Lg,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantKey for Spacing {
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Divider orientation.
pub enum Orientation {
    /// Horizontal rule.
    Horizontal,
    /// Vertical rule.
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl VariantKey for Orientation {
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Divider line style.
pub enum DividerVariant {
    /// Solid line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Fading gradient line.
    Gradient,
}

impl Default for DividerVariant {
    fn default() -> Self {
        Self::Solid
    }
}

impl VariantKey for DividerVariant {
    const ALL: &'static [Self] = &[Self::Solid, Self::Dashed, Self::Gradient];

    fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Gradient => "gradient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Divider tables: spacing per orientation, orientation classes, and line variants.
pub struct DividerTables {
    /// Spacing classes for horizontal dividers (vertical margin).
    pub horizontal_spacing: VariantTable<Spacing, &'static str>,
    /// Spacing classes for vertical dividers (horizontal margin).
    pub vertical_spacing: VariantTable<Spacing, &'static str>,
    /// Orientation classes.
    pub orientation: VariantTable<Orientation, &'static str>,
    /// Line variant classes.
    pub variant: VariantTable<DividerVariant, &'static str>,
}

impl DividerTables {
    /// Class list for a divider, orientation first.
    pub fn classes(
        &self,
        orientation: Orientation,
        spacing: Spacing,
        variant: DividerVariant,
    ) -> Vec<&'static str> {
        let spacing_table = match orientation {
            Orientation::Horizontal => &self.horizontal_spacing,
            Orientation::Vertical => &self.vertical_spacing,
        };
        vec![
            *self.orientation.resolve(Some(orientation)),
            *spacing_table.resolve(Some(spacing)),
            *self.variant.resolve(Some(variant)),
        ]
    }
}

/// Divider tables.
pub fn divider_tables() -> &'static DividerTables {
    static TABLES: OnceLock<DividerTables> = OnceLock::new();
    TABLES.get_or_init(|| DividerTables {
        horizontal_spacing: VariantTable::with_default(
            Spacing::Md,
            "ui-divider-my-md",
            [
                (Spacing::None, "ui-divider-my-none"),
                (Spacing::Sm, "ui-divider-my-sm"),
                (Spacing::Lg, "ui-divider-my-lg"),
            ],
        ),
        vertical_spacing: VariantTable::with_default(
            Spacing::Md,
            "ui-divider-mx-md",
            [
                (Spacing::None, "ui-divider-mx-none"),
                (Spacing::Sm, "ui-divider-mx-sm"),
                (Spacing::Lg, "ui-divider-mx-lg"),
            ],
        ),
        orientation: VariantTable::with_default(
            Orientation::Horizontal,
            "ui-divider-horizontal",
            [(Orientation::Vertical, "ui-divider-vertical")],
        ),
        variant: VariantTable::with_default(
            DividerVariant::Solid,
            "ui-divider-solid",
            [
                (DividerVariant::Dashed, "ui-divider-dashed"),
                (DividerVariant::Gradient, "ui-divider-gradient"),
            ],
        ),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Form label sizes.
pub enum LabelSize {
    /// Small label.
    Sm,
    /// Default label.
    Md,
    /// Large label.
    Lg,
}

impl Default for LabelSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantKey for LabelSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Form label variants.
pub enum LabelVariant {
    /// Standard label.
    Default,
    /// De-emphasized label.
    Muted,
    /// Label for a required field.
    Required,
    /// Label for a field with a validation error.
    Error,
}

impl Default for LabelVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for LabelVariant {
    const ALL: &'static [Self] = &[Self::Default, Self::Muted, Self::Required, Self::Error];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Muted => "muted",
            Self::Required => "required",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Style bundle for a [`LabelVariant`].
pub struct LabelVariantBundle {
    /// Text color key.
    pub color: ColorClass,
    /// Marker appended after the label text.
    pub marker: Option<&'static str>,
}

/// Label size table.
pub fn label_size_table() -> &'static VariantTable<LabelSize, SizeClass> {
    static TABLE: OnceLock<VariantTable<LabelSize, SizeClass>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            LabelSize::Md,
            SizeClass::Sm,
            [(LabelSize::Sm, SizeClass::Xs), (LabelSize::Lg, SizeClass::Md)],
        )
    })
}

/// Label variant table.
pub fn label_variant_table() -> &'static VariantTable<LabelVariant, LabelVariantBundle> {
    static TABLE: OnceLock<VariantTable<LabelVariant, LabelVariantBundle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            LabelVariant::Default,
            LabelVariantBundle {
                color: ColorClass::Neutral,
                marker: None,
            },
            [
                (
                    LabelVariant::Muted,
                    LabelVariantBundle {
                        color: ColorClass::Muted,
                        marker: None,
                    },
                ),
                (
                    LabelVariant::Required,
                    LabelVariantBundle {
                        color: ColorClass::Neutral,
                        marker: Some("*"),
                    },
                ),
                (
                    LabelVariant::Error,
                    LabelVariantBundle {
                        color: ColorClass::Danger,
                        marker: None,
                    },
                ),
            ],
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Supported grid column counts.
pub enum GridColumns {
    /// One column.
    #[serde(rename = "1")]
    One,
    /// Two columns.
    #[serde(rename = "2")]
    Two,
    /// Three columns.
    #[serde(rename = "3")]
    Three,
    /// Four columns.
    #[serde(rename = "4")]
    Four,
    /// Six columns.
    #[serde(rename = "6")]
    Six,
    /// Twelve columns.
    #[serde(rename = "12")]
    Twelve,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self::One
    }
}

impl GridColumns {
    /// Maps a column count; unsupported counts yield `None`.
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            6 => Some(Self::Six),
            12 => Some(Self::Twelve),
            _ => None,
        }
    }
}

impl VariantKey for GridColumns {
    const ALL: &'static [Self] = &[
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Six,
        Self::Twelve,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Six => "6",
            Self::Twelve => "12",
        }
    }
}

/// Grid column classes.
pub fn grid_columns_table() -> &'static VariantTable<GridColumns, &'static str> {
    static TABLE: OnceLock<VariantTable<GridColumns, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            GridColumns::One,
            "ui-grid-cols-1",
            [
                (GridColumns::Two, "ui-grid-cols-2"),
                (GridColumns::Three, "ui-grid-cols-3"),
                (GridColumns::Four, "ui-grid-cols-4"),
                (GridColumns::Six, "ui-grid-cols-6"),
                (GridColumns::Twelve, "ui-grid-cols-12"),
            ],
        )
    })
}

/// Grid gap classes.
pub fn grid_gap_table() -> &'static VariantTable<Spacing, &'static str> {
    static TABLE: OnceLock<VariantTable<Spacing, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            Spacing::Md,
            "ui-gap-md",
            [
                (Spacing::None, "ui-gap-none"),
                (Spacing::Sm, "ui-gap-sm"),
                (Spacing::Lg, "ui-gap-lg"),
            ],
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Interaction state of a pagination control.
pub enum PaginationItemState {
    /// Clickable.
    Enabled,
    /// Not clickable (edge of the range).
    Disabled,
    /// The page currently shown.
    Current,
}

impl Default for PaginationItemState {
    fn default() -> Self {
        Self::Enabled
    }
}

impl VariantKey for PaginationItemState {
    const ALL: &'static [Self] = &[Self::Enabled, Self::Disabled, Self::Current];

    fn token(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Current => "current",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Style bundle for a pagination control.
pub struct PaginationStyle {
    /// Control class.
    pub class: &'static str,
    /// Color key.
    pub color: ColorClass,
    /// Whether the control reacts to clicks.
    pub interactive: bool,
}

/// Pagination control styles.
pub fn pagination_table() -> &'static VariantTable<PaginationItemState, PaginationStyle> {
    static TABLE: OnceLock<VariantTable<PaginationItemState, PaginationStyle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            PaginationItemState::Enabled,
            PaginationStyle {
                class: "ui-page-enabled",
                color: ColorClass::Neutral,
                interactive: true,
            },
            [
                (
                    PaginationItemState::Disabled,
                    PaginationStyle {
                        class: "ui-page-disabled",
                        color: ColorClass::Muted,
                        interactive: false,
                    },
                ),
                (
                    PaginationItemState::Current,
                    PaginationStyle {
                        class: "ui-page-current",
                        color: ColorClass::Accent,
                        interactive: false,
                    },
                ),
            ],
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Confirmation dialog tones.
pub enum DialogTone {
    /// Destructive action.
    Danger,
    /// Risky action.
    Warning,
    /// Ordinary confirmation.
    Primary,
}

impl Default for DialogTone {
    fn default() -> Self {
        Self::Danger
    }
}

impl VariantKey for DialogTone {
    const ALL: &'static [Self] = &[Self::Danger, Self::Warning, Self::Primary];

    fn token(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Primary => "primary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Style bundle for a [`DialogTone`].
pub struct DialogToneBundle {
    /// Header icon.
    pub icon: Icon,
    /// Confirm button color key.
    pub confirm_color: ColorClass,
}

/// Confirmation dialog tone table.
pub fn dialog_tone_table() -> &'static VariantTable<DialogTone, DialogToneBundle> {
    static TABLE: OnceLock<VariantTable<DialogTone, DialogToneBundle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::with_default(
            DialogTone::Danger,
            DialogToneBundle {
                icon: Icon::WarningTriangle,
                confirm_color: ColorClass::Danger,
            },
            [
                (
                    DialogTone::Warning,
                    DialogToneBundle {
                        icon: Icon::WarningTriangle,
                        confirm_color: ColorClass::Warning,
                    },
                ),
                (
                    DialogTone::Primary,
                    DialogToneBundle {
                        icon: Icon::QuestionMark,
                        confirm_color: ColorClass::Accent,
                    },
                ),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_complete<K: VariantKey, B>(table: &VariantTable<K, B>) {
        assert_eq!(table.keys(), K::ALL.to_vec(), "every key has an entry");
    }

    #[test]
    fn builtin_tables_define_every_key() {
        assert_complete(surface_table());
        assert_complete(heading_size_table());
        assert_complete(&divider_tables().horizontal_spacing);
        assert_complete(&divider_tables().vertical_spacing);
        assert_complete(&divider_tables().orientation);
        assert_complete(&divider_tables().variant);
        assert_complete(label_size_table());
        assert_complete(label_variant_table());
        assert_complete(grid_columns_table());
        assert_complete(grid_gap_table());
        assert_complete(pagination_table());
        assert_complete(dialog_tone_table());
    }

    #[test]
    fn builtin_defaults_match_key_defaults() {
        assert_eq!(surface_table().default_key(), SurfaceLevel::default());
        assert_eq!(heading_size_table().default_key(), HeadingLevel::default());
        assert_eq!(label_size_table().default_key(), LabelSize::default());
        assert_eq!(grid_columns_table().default_key(), GridColumns::default());
        assert_eq!(grid_gap_table().default_key(), Spacing::default());
        assert_eq!(pagination_table().default_key(), PaginationItemState::default());
        assert_eq!(dialog_tone_table().default_key(), DialogTone::default());
    }

    #[test]
    fn surface_intensity_strictly_increases() {
        let intensities: Vec<u8> = SurfaceLevel::ALL
            .iter()
            .map(|level| surface_table().resolve(Some(*level)).intensity)
            .collect();
        assert_eq!(intensities, vec![0, 1, 2, 3]);

        let liquid: Vec<bool> = SurfaceLevel::ALL
            .iter()
            .map(|level| surface_table().resolve(Some(*level)).liquid_glass)
            .collect();
        assert_eq!(liquid, vec![false, false, true, true]);
    }

    #[test]
    fn surface_resolves_raw_tokens() {
        assert_eq!(
            surface_table().resolve_raw(Some("liquid-enhanced")).class,
            "ui-surface-liquid-enhanced"
        );
        assert_eq!(
            surface_table().resolve_raw(Some("chrome")),
            surface_table().resolve(None)
        );
    }

    #[test]
    fn heading_size_derives_from_level_unless_overridden() {
        assert_eq!(heading_size(1, None), SizeClass::Xxxl);
        assert_eq!(heading_size(6, None), SizeClass::Sm);
        assert_eq!(heading_size(0, None), SizeClass::Xxl);
        assert_eq!(heading_size(9, None), heading_size(2, None));
        assert_eq!(heading_size(1, Some(SizeClass::Xs)), SizeClass::Xs);
    }

    #[test]
    fn divider_spacing_follows_orientation() {
        let tables = divider_tables();
        assert_eq!(
            tables.classes(Orientation::Vertical, Spacing::Lg, DividerVariant::Dashed),
            vec!["ui-divider-vertical", "ui-divider-mx-lg", "ui-divider-dashed"]
        );
        assert_eq!(
            tables.classes(Orientation::Horizontal, Spacing::None, DividerVariant::Solid),
            vec!["ui-divider-horizontal", "ui-divider-my-none", "ui-divider-solid"]
        );
    }

    #[test]
    fn grid_columns_map_counts() {
        assert_eq!(
            *grid_columns_table().resolve(GridColumns::from_count(3)),
            "ui-grid-cols-3"
        );
        assert_eq!(
            *grid_columns_table().resolve(GridColumns::from_count(5)),
            "ui-grid-cols-1"
        );
    }

    #[test]
    fn required_label_carries_marker() {
        assert_eq!(
            label_variant_table().resolve(Some(LabelVariant::Required)).marker,
            Some("*")
        );
        assert_eq!(
            label_variant_table().resolve(Some(LabelVariant::Error)).color,
            ColorClass::Danger
        );
    }

    #[test]
    fn disabled_pagination_is_not_interactive() {
        assert!(!pagination_table().resolve(Some(PaginationItemState::Disabled)).interactive);
        assert!(pagination_table().resolve_raw(Some("bogus")).interactive);
    }
}
