//! Presentation token resolution for the home-device dashboard.
//!
//! The crate owns the pure decision logic behind the dashboard primitives: ordered rule tables
//! mapping device status strings to icon/color/label tokens, priority-ordered flag resolvers,
//! variant tables with a required default, and override composition merged with a light/dark
//! palette. Nothing here touches the DOM; `dashboard_ui` consumes these tokens and renders them.
//!
//! Every resolution call is a total function of its inputs. Table invariants are checked once,
//! when a table is built.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod compose;
mod config;
mod error;
mod flags;
mod pagination;
mod rules;
mod status;
mod tables;
mod theme;
mod token;
mod variant;

pub use compose::{compose, PresentationOverrides, ResolvedPresentation};
pub use config::ThemeConfig;
pub use error::{ConfigError, TableError};
pub use flags::{
    resolve_mode, FieldState, ModePresentation, OperatingMode, RoomFlags, RoomIndicator,
    SuffixPresentation, ROOM_INDICATOR_PRIORITY,
};
pub use pagination::{PageItem, PageWindow, MAX_SIBLINGS};
pub use rules::{validate, Matcher, Rule, RuleTable};
pub use status::{
    resolve_status, StatusPresentation, StatusRules, ERROR_MARKER, OFF_MARKER, STANDBY_MARKER,
    WORK_MARKER,
};
pub use tables::{
    dialog_tone_table, divider_tables, grid_columns_table, grid_gap_table, heading_size,
    heading_size_table, label_size_table, label_variant_table, pagination_table, surface_table,
    DialogTone, DialogToneBundle, DividerTables, DividerVariant, GridColumns, HeadingLevel,
    LabelSize, LabelVariant, LabelVariantBundle, Orientation, PaginationItemState,
    PaginationStyle, Spacing, SurfaceBundle, SurfaceLevel,
};
pub use theme::{Theme, ThemeMode};
pub use token::{ColorClass, Icon, PresentationToken, SizeClass};
pub use variant::{VariantKey, VariantTable};
