use dashboard_tokens::{
    divider_tables, grid_columns_table, grid_gap_table, surface_table, DividerVariant,
    GridColumns, Orientation, Spacing, SurfaceLevel,
};

use super::*;

#[component]
/// Centered page-width container.
pub fn Container(
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes("ui-container", &extra_classes)
            data-ui-primitive="true"
            data-ui-kind="container"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Grid layout with a column count and gap from the grid tables.
///
/// Unsupported column counts fall back to a single column.
pub fn Grid(
    #[prop(default = 1)] columns: u8,
    #[prop(default = Spacing::Md)] gap: Spacing,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let column_key = GridColumns::from_count(columns);
    let columns_class = *grid_columns_table().resolve(column_key);
    let gap_class = *grid_gap_table().resolve(Some(gap));
    let mut classes = vec![columns_class, gap_class];
    classes.extend(extra_classes);

    view! {
        <div
            class=merge_classes("ui-grid", &classes)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
            data-ui-columns=column_key.unwrap_or_default().token()
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Card surface. Liquid levels carry the `data-liquid-glass` marker for downstream effects.
pub fn Card(
    #[prop(default = SurfaceLevel::Solid)] surface: SurfaceLevel,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let bundle = *surface_table().resolve(Some(surface));
    let mut classes = vec![bundle.class];
    classes.extend(extra_classes);

    view! {
        <article
            class=merge_classes("ui-card", &classes)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-surface=surface.token()
            data-ui-intensity=bundle.intensity.to_string()
            data-liquid-glass=bundle.liquid_glass.then_some("true")
        >
            {children()}
        </article>
    }
}

#[component]
/// Titled panel section built on a card surface.
pub fn Panel(
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = SurfaceLevel::Glass)] surface: SurfaceLevel,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let bundle = *surface_table().resolve(Some(surface));
    let mut classes = vec![bundle.class];
    classes.extend(extra_classes);

    view! {
        <section
            class=merge_classes("ui-panel", &classes)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-surface=surface.token()
            data-liquid-glass=bundle.liquid_glass.then_some("true")
        >
            {title.map(|title| view! { <header class="ui-panel-header">{title}</header> })}
            <div class="ui-panel-body">{children()}</div>
        </section>
    }
}

#[component]
/// Horizontal or vertical separator.
pub fn Divider(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = Spacing::Md)] spacing: Spacing,
    #[prop(default = DividerVariant::Solid)] variant: DividerVariant,
    #[prop(optional)] extra_classes: Vec<&'static str>,
) -> impl IntoView {
    let mut classes = divider_tables().classes(orientation, spacing, variant);
    classes.extend(extra_classes);

    view! {
        <div
            class=merge_classes("ui-divider", &classes)
            role="separator"
            aria-orientation=orientation.token()
            data-ui-primitive="true"
            data-ui-kind="divider"
            data-ui-variant=variant.token()
        ></div>
    }
}
