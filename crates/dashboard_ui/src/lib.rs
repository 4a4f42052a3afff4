//! Leptos primitives for the heating dashboard.
//!
//! Every component resolves its look through the token tables in [`dashboard_tokens`] and
//! emits the stable `data-ui-*` DOM contract consumed by the dashboard stylesheet. Color
//! keys become concrete classes through the [`ThemeProvider`] in scope, so pages never
//! spell palette classes by hand.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod theme;

pub use dashboard_tokens as tokens;
pub use icon::{glyph, IconGlyph};
pub use primitives::{
    room_option_label, Card, ConfirmDialog, Container, Divider, Grid, Heading, Input, Label,
    ModeIndicator, Pagination, Panel, Room, RoomSelector, ScrollLock, Select, SelectOption,
    StatusBadge, Text,
};
pub use theme::{load_theme, use_theme, ThemeContext, ThemeProvider};

/// Convenience imports for dashboard pages.
pub mod prelude {
    pub use crate::tokens::{
        ColorClass, DialogTone, DividerVariant, Icon, LabelSize, LabelVariant, Orientation,
        PresentationOverrides, RoomFlags, SizeClass, Spacing, SurfaceLevel, ThemeMode,
    };
    pub use crate::{
        Card, ConfirmDialog, Container, Divider, Grid, Heading, IconGlyph, Input, Label,
        ModeIndicator, Pagination, Panel, Room, RoomSelector, Select, SelectOption, StatusBadge,
        Text, ThemeProvider,
    };
}
