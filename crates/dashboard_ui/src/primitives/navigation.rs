use dashboard_tokens::{pagination_table, PageItem, PageWindow, PaginationItemState};

use super::*;

/// Target page for a control, or `None` when the control is inert.
fn target_page(state: PaginationItemState, page: usize) -> Option<usize> {
    pagination_table()
        .resolve(Some(state))
        .interactive
        .then_some(page)
}

/// Pages targeted by the previous and next controls.
fn adjacent_pages(window: PageWindow) -> (usize, usize) {
    (
        window.current.saturating_sub(1),
        window.current.saturating_add(1),
    )
}

#[component]
/// Page navigation with previous/next controls and a windowed page list.
pub fn Pagination(
    #[prop(into)] current_page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(default = 1)] siblings: usize,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let theme = use_theme();
    let window = create_memo(move |_| PageWindow::new(current_page.get(), total_pages.get()));

    let control = move |state: PaginationItemState, page: usize, content: View, label: String| {
        let style = *pagination_table().resolve(Some(state));
        let target = target_page(state, page);
        view! {
            <button
                type="button"
                class=format!("{} {}", style.class, theme.color_class(style.color))
                aria-label=label
                aria-current=(state == PaginationItemState::Current).then_some("page")
                disabled=!style.interactive
                data-ui-state=state.token()
                on:click=move |_| {
                    if let (Some(page), Some(on_change)) = (target, on_change.as_ref()) {
                        on_change.call(page);
                    }
                }
            >
                {content}
            </button>
        }
    };

    view! {
        <nav
            class=merge_classes("ui-pagination", &extra_classes)
            aria-label=aria_label.unwrap_or_else(|| "Pagination".to_string())
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-pages=move || window.get().total.to_string()
        >
            {move || {
                let window = window.get();
                let (previous_page, next_page) = adjacent_pages(window);
                let previous = control(
                    window.previous_state(),
                    previous_page,
                    view! { <IconGlyph icon=Icon::ChevronLeft size=SizeClass::Sm /> }.into_view(),
                    "Previous page".to_string(),
                );
                let pages = window
                    .items(siblings)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page { number, state } => control(
                            state,
                            number,
                            number.to_string().into_view(),
                            format!("Page {number}"),
                        )
                        .into_view(),
                        PageItem::Ellipsis => view! {
                            <span class="ui-page-ellipsis" aria-hidden="true">"…"</span>
                        }
                        .into_view(),
                    })
                    .collect_view();
                let next = control(
                    window.next_state(),
                    next_page,
                    view! { <IconGlyph icon=Icon::ChevronRight size=SizeClass::Sm /> }.into_view(),
                    "Next page".to_string(),
                );
                view! { {previous} {pages} {next} }
            }}
        </nav>
    }
}
