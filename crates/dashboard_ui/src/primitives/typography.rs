use dashboard_tokens::{
    heading_size, label_size_table, label_variant_table, HeadingLevel, LabelSize, LabelVariant,
};

use super::*;

#[component]
/// Heading whose size follows its level unless `size` is given explicitly.
///
/// Levels outside `1..=6` render as the default level.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] size: Option<SizeClass>,
    #[prop(default = ColorClass::Neutral)] color: ColorClass,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let tag = HeadingLevel::from_level(level).unwrap_or_default();
    let presentation = fixed_presentation(
        "ui-heading",
        None,
        color,
        "",
        heading_size(level, size),
        PresentationOverrides::none(),
        &extra_classes,
    );
    let size_token = presentation.size.token();

    let element = match tag {
        HeadingLevel::H1 => html::h1().into_any(),
        HeadingLevel::H2 => html::h2().into_any(),
        HeadingLevel::H3 => html::h3().into_any(),
        HeadingLevel::H4 => html::h4().into_any(),
        HeadingLevel::H5 => html::h5().into_any(),
        HeadingLevel::H6 => html::h6().into_any(),
    };
    element
        .attr("class", move || theme.class_list(&presentation))
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "heading")
        .attr("data-ui-level", tag.tag())
        .attr("data-ui-size", size_token)
        .child(children())
}

#[component]
/// Inline text with a semantic color and size.
pub fn Text(
    #[prop(default = ColorClass::Neutral)] color: ColorClass,
    #[prop(default = SizeClass::Md)] size: SizeClass,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let presentation = fixed_presentation(
        "ui-text",
        None,
        color,
        "",
        size,
        PresentationOverrides::none(),
        &extra_classes,
    );

    view! {
        <span
            class=move || theme.class_list(&presentation)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-tone=color.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Form label with size and variant tables. Required labels append a marker.
pub fn Label(
    #[prop(default = LabelSize::Md)] size: LabelSize,
    #[prop(default = LabelVariant::Default)] variant: LabelVariant,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let bundle = *label_variant_table().resolve(Some(variant));
    let presentation = fixed_presentation(
        "ui-label",
        None,
        bundle.color,
        "",
        *label_size_table().resolve(Some(size)),
        PresentationOverrides::none(),
        &extra_classes,
    );

    view! {
        <label
            class=move || theme.class_list(&presentation)
            for=for_id
            data-ui-primitive="true"
            data-ui-kind="label"
            data-ui-size=size.token()
            data-ui-variant=variant.token()
        >
            {children()}
            {bundle.marker.map(|marker| view! {
                <span class="ui-label-marker" aria-hidden="true">{marker}</span>
            })}
        </label>
    }
}
