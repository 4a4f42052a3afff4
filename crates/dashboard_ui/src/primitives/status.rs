use dashboard_tokens::{resolve_status, OperatingMode, PresentationToken, RoomFlags, RoomIndicator};

use super::*;
use crate::primitives::controls::{Select, SelectOption};

#[component]
/// Device status badge. Icon, color, and label come from the status rule tables; explicit
/// `icon`, `color`, or `label` props replace the resolved value.
pub fn StatusBadge(
    #[prop(optional, into)] status: MaybeSignal<Option<String>>,
    #[prop(optional)] icon: Option<Icon>,
    #[prop(optional)] color: Option<ColorClass>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = SizeClass::Sm)] size: SizeClass,
    #[prop(optional)] extra_classes: Vec<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let overrides = [
        icon.map(PresentationToken::Icon),
        color.map(PresentationToken::Color),
        label.map(PresentationToken::Label),
    ]
    .into_iter()
    .flatten()
    .collect::<PresentationOverrides>();
    let presentation = create_memo(move |_| {
        let mut base = extra_classes.clone();
        base.insert(0, "ui-status-badge");
        compose(
            resolve_status(status.get().as_deref()).into_presentation(size),
            overrides.clone(),
            base,
        )
    });

    view! {
        <span
            class=move || presentation.with(|presentation| theme.class_list(presentation))
            role="status"
            data-ui-primitive="true"
            data-ui-kind="status-badge"
            data-ui-tone=move || presentation.with(|presentation| presentation.color.token())
            data-ui-icon=move || presentation.with(|presentation| presentation.icon.map(Icon::token))
        >
            {move || {
                presentation
                    .with(|presentation| presentation.icon)
                    .map(|icon| view! { <IconGlyph icon=icon size=size /> })
            }}
            <span class="ui-status-label">
                {move || presentation.with(|presentation| presentation.label.clone())}
            </span>
        </span>
    }
}

fn mode_presentation(
    mode: OperatingMode,
    size: SizeClass,
    extra_classes: &[&'static str],
) -> ResolvedPresentation {
    let tokens = mode.presentation();
    fixed_presentation(
        "ui-mode-indicator",
        Some(tokens.icon),
        tokens.color,
        tokens.label,
        size,
        PresentationOverrides::none(),
        extra_classes,
    )
}

#[component]
/// Heating mode indicator derived from the `enabled` and `semi_manual` flags.
pub fn ModeIndicator(
    #[prop(into)] enabled: MaybeSignal<bool>,
    #[prop(optional, into)] semi_manual: MaybeSignal<bool>,
    #[prop(default = true)] show_label: bool,
    #[prop(default = SizeClass::Sm)] size: SizeClass,
    #[prop(optional)] extra_classes: Vec<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let mode = create_memo(move |_| OperatingMode::from_flags(enabled.get(), semi_manual.get()));
    let presentation = create_memo(move |_| mode_presentation(mode.get(), size, &extra_classes));

    view! {
        <span
            class=move || presentation.with(|presentation| theme.class_list(presentation))
            title=move || presentation.with(|presentation| presentation.label.clone())
            data-ui-primitive="true"
            data-ui-kind="mode-indicator"
            data-ui-mode=move || mode.get().token()
        >
            {move || {
                presentation
                    .with(|presentation| presentation.icon)
                    .map(|icon| view! { <IconGlyph icon=icon size=size /> })
            }}
            {show_label.then(|| view! {
                <span class="ui-mode-label">
                    {move || presentation.with(|presentation| presentation.label.clone())}
                </span>
            })}
        </span>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A selectable room with its sensor flags.
pub struct Room {
    /// Stable room id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sensor flags.
    pub flags: RoomFlags,
}

impl Room {
    /// Room with no flags set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            flags: RoomFlags::default(),
        }
    }

    /// Replaces the sensor flags.
    pub fn with_flags(mut self, flags: RoomFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Highest-priority suffix indicator for this room.
    pub fn indicator(&self) -> RoomIndicator {
        RoomIndicator::from_flags(self.flags)
    }
}

/// Option text for a room: its name, plus one suffix when a flag is set.
pub fn room_option_label(room: &Room) -> String {
    match room.indicator().suffix() {
        Some(suffix) => format!("{} {} ({})", room.name, crate::icon::glyph(suffix.icon), suffix.label),
        None => room.name.clone(),
    }
}

#[component]
/// Room dropdown. Each option shows at most one suffix: offline, then critical battery, then
/// low battery.
pub fn RoomSelector(
    #[prop(into)] rooms: MaybeSignal<Vec<Room>>,
    #[prop(optional, into)] selected: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let theme = use_theme();
    let rooms = Signal::derive(move || rooms.get());
    let selected = Signal::derive(move || selected.get());
    let options = Signal::derive(move || {
        rooms.with(|rooms| {
            rooms
                .iter()
                .map(|room| SelectOption::new(room.id.clone(), room_option_label(room)))
                .collect::<Vec<_>>()
        })
    });
    let selected_indicator = move || {
        let id = selected.get();
        rooms.with(|rooms| {
            rooms
                .iter()
                .find(|room| room.id == id)
                .map(Room::indicator)
                .unwrap_or(RoomIndicator::None)
        })
    };

    view! {
        <div
            class=merge_classes("ui-room-selector", &extra_classes)
            data-ui-primitive="true"
            data-ui-kind="room-selector"
            data-ui-indicator=move || selected_indicator().token()
        >
            <Select
                options=options
                value=selected
                aria_label=aria_label.unwrap_or_else(|| "Room".to_string())
                on_change=Callback::new(move |id: String| {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(id);
                    }
                })
            />
            {move || {
                selected_indicator().suffix().map(|suffix| {
                    view! {
                        <span
                            class=theme.color_class(suffix.color)
                            title=suffix.label
                            data-ui-slot="room-suffix"
                        >
                            <IconGlyph icon=suffix.icon size=SizeClass::Sm />
                        </span>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mode_presentation_follows_the_resolved_mode() {
        let semi = mode_presentation(OperatingMode::from_flags(true, true), SizeClass::Sm, &[]);
        assert_eq!(semi.icon, Some(Icon::Gear));
        assert_eq!(semi.color, ColorClass::Warning);
        assert_eq!(semi.label, "semi-automatic");
        assert_eq!(semi.extra_classes, vec!["ui-mode-indicator".to_string()]);

        let manual = mode_presentation(OperatingMode::from_flags(false, true), SizeClass::Sm, &[]);
        assert_eq!(manual.icon, Some(Icon::Wrench));
        assert_eq!(manual.label, "manual");
    }

    #[test]
    fn option_label_shows_only_highest_priority_suffix() {
        let room = Room::new("kitchen", "Kitchen").with_flags(RoomFlags {
            offline: true,
            critical_battery: true,
            low_battery: false,
        });
        let label = room_option_label(&room);
        assert!(label.starts_with("Kitchen "));
        assert!(label.ends_with("(offline)"));
        assert!(!label.contains("battery"));
    }

    #[test]
    fn option_label_without_flags_is_the_name() {
        assert_eq!(room_option_label(&Room::new("bath", "Bathroom")), "Bathroom");
        let low = Room::new("hall", "Hall").with_flags(RoomFlags {
            low_battery: true,
            ..RoomFlags::default()
        });
        assert_eq!(low.indicator(), RoomIndicator::LowBattery);
        assert!(room_option_label(&low).ends_with("(battery low)"));
    }
}
