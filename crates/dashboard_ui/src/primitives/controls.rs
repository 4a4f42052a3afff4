use dashboard_tokens::FieldState;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `<option>` of a [`Select`].
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible text.
    pub label: String,
}

impl SelectOption {
    /// Builds an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn field_presentation(
    state: FieldState,
    base: &'static str,
    extra_classes: &[&'static str],
) -> ResolvedPresentation {
    fixed_presentation(
        base,
        None,
        state.color(),
        "",
        SizeClass::Md,
        PresentationOverrides::none(),
        extra_classes,
    )
}

#[component]
/// Text input. Disabled takes precedence over invalid when styling.
pub fn Input(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let theme = use_theme();
    let state = move || FieldState::from_flags(disabled.get(), invalid.get());

    view! {
        <input
            class=move || {
                theme.class_list(&field_presentation(state(), "ui-field", &extra_classes))
            }
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || bool_token(state() == FieldState::Invalid)
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-state=move || state().token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Dropdown over a list of options.
pub fn Select(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let theme = use_theme();
    let state = move || FieldState::from_flags(disabled.get(), invalid.get());
    let selected_value = value.clone();

    view! {
        <select
            class=move || {
                theme.class_list(&field_presentation(state(), "ui-select", &extra_classes))
            }
            id=id
            aria-label=aria_label
            aria-invalid=move || bool_token(state() == FieldState::Invalid)
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-state=move || state().token()
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
        >
            {move || {
                let current = selected_value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let selected = option.value == current;
                        view! {
                            <option value=option.value selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
