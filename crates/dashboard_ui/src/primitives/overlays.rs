use std::cell::RefCell;
use std::rc::Rc;

use dashboard_tokens::{dialog_tone_table, DialogTone};
use leptos::ev;

use super::*;

/// Holder count for one shared page resource and the state captured by its first holder.
#[derive(Debug)]
struct SharedLock {
    holders: usize,
    original: Option<String>,
}

impl SharedLock {
    const fn new() -> Self {
        Self {
            holders: 0,
            original: None,
        }
    }

    /// Registers a holder. `capture` runs only for the first holder; when it fails no holder is
    /// registered.
    fn enter(&mut self, capture: impl FnOnce() -> Option<String>) -> bool {
        if self.holders == 0 {
            match capture() {
                Some(original) => self.original = Some(original),
                None => return false,
            }
        }
        self.holders += 1;
        true
    }

    /// Removes a holder. Returns the captured state once the last holder leaves.
    fn leave(&mut self) -> Option<String> {
        if self.holders == 0 {
            return None;
        }
        self.holders -= 1;
        if self.holders == 0 {
            self.original.take()
        } else {
            None
        }
    }
}

thread_local! {
    static PAGE_SCROLL: RefCell<SharedLock> = const { RefCell::new(SharedLock::new()) };
}

fn hide_overflow(body: &web_sys::HtmlElement) -> Option<String> {
    let style = body.style();
    let original = style.get_property_value("overflow").unwrap_or_default();
    if let Err(err) = style.set_property("overflow", "hidden") {
        logging::warn!("failed to lock page scroll: {err:?}");
        return None;
    }
    Some(original)
}

fn restore_overflow(body: &web_sys::HtmlElement, original: &str) {
    let style = body.style();
    let restored = if original.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", original)
    };
    if let Err(err) = restored {
        logging::warn!("failed to restore page scroll: {err:?}");
    }
}

/// Page scroll lock held while a modal is open.
///
/// Locks are shared: the first one hides body overflow and the last one dropped restores the
/// value seen before any lock was taken, whatever order dialogs close in.
pub struct ScrollLock {
    body: web_sys::HtmlElement,
}

impl ScrollLock {
    /// Joins the page lock. Returns `None` when there is no body or the style write fails.
    pub fn acquire() -> Option<Self> {
        let Some(body) = document().body() else {
            logging::warn!("no document body; page scroll stays unlocked");
            return None;
        };
        let joined = PAGE_SCROLL.with(|lock| lock.borrow_mut().enter(|| hide_overflow(&body)));
        joined.then_some(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(original) = PAGE_SCROLL.with(|lock| lock.borrow_mut().leave()) {
            restore_overflow(&self.body, &original);
        }
    }
}

/// Holds a lock exactly while `open` is true. Acquires on open, drops on close.
fn sync_lock<L>(slot: &mut Option<L>, open: bool, acquire: impl FnOnce() -> Option<L>) {
    if open {
        if slot.is_none() {
            *slot = acquire();
        }
    } else {
        slot.take();
    }
}

#[component]
/// Modal confirmation dialog. Escape and the backdrop cancel; page scroll is locked while open.
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] message: MaybeSignal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(default = DialogTone::Danger)] tone: DialogTone,
    #[prop(optional)] extra_classes: Vec<&'static str>,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let theme = use_theme();
    let bundle = *dialog_tone_table().resolve(Some(tone));
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "Confirm".to_string()));
    let cancel_label = store_value(cancel_label.unwrap_or_else(|| "Cancel".to_string()));
    let classes = store_value(merge_classes("ui-confirm-dialog", &extra_classes));

    let cancel = move || {
        if let Some(on_cancel) = on_cancel.as_ref() {
            on_cancel.call(());
        }
    };
    let confirm = move || {
        if let Some(on_confirm) = on_confirm.as_ref() {
            on_confirm.call(());
        }
    };

    let scroll_lock: Rc<RefCell<Option<ScrollLock>>> = Rc::new(RefCell::new(None));
    create_effect({
        let scroll_lock = scroll_lock.clone();
        move |_| {
            let open = open.get();
            sync_lock(&mut *scroll_lock.borrow_mut(), open, ScrollLock::acquire);
        }
    });
    on_cleanup(move || {
        scroll_lock.borrow_mut().take();
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" || !open.get_untracked() {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        cancel();
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-dialog-backdrop"
                data-ui-slot="dialog-backdrop"
                on:click=move |_| cancel()
            >
                <div
                    class=classes.get_value()
                    role="alertdialog"
                    aria-modal="true"
                    aria-label=move || title.get()
                    data-ui-primitive="true"
                    data-ui-kind="confirm-dialog"
                    data-ui-tone=tone.token()
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="ui-dialog-header">
                        <span class=theme.color_class(bundle.confirm_color)>
                            <IconGlyph icon=bundle.icon size=SizeClass::Lg />
                        </span>
                        <h2 class="ui-dialog-title">{move || title.get()}</h2>
                    </header>
                    <p class="ui-dialog-message">{move || message.get()}</p>
                    <footer class="ui-dialog-actions">
                        <button
                            type="button"
                            class="ui-dialog-cancel"
                            data-ui-slot="dialog-cancel"
                            on:click=move |_| cancel()
                        >
                            {cancel_label.get_value()}
                        </button>
                        <button
                            type="button"
                            class=format!(
                                "ui-dialog-confirm {}",
                                theme.color_class(bundle.confirm_color),
                            )
                            data-ui-slot="dialog-confirm"
                            on:click=move |_| confirm()
                        >
                            {confirm_label.get_value()}
                        </button>
                    </footer>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct CountingLock(Rc<Cell<usize>>);

    impl Drop for CountingLock {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn lock_is_held_only_while_open() {
        let released = Rc::new(Cell::new(0));
        let acquired = Cell::new(0);
        let acquire = || {
            acquired.set(acquired.get() + 1);
            Some(CountingLock(released.clone()))
        };
        let mut slot = None;

        sync_lock(&mut slot, true, acquire);
        sync_lock(&mut slot, true, acquire);
        assert!(slot.is_some());
        assert_eq!(acquired.get(), 1);

        sync_lock(&mut slot, false, acquire);
        assert!(slot.is_none());
        assert_eq!(released.get(), 1);

        sync_lock(&mut slot, false, acquire);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn shared_lock_restores_only_after_last_holder_in_any_order() {
        let mut lock = SharedLock::new();
        assert!(lock.enter(|| Some(String::new())));
        assert!(lock.enter(|| panic!("only the first holder captures")));

        // First opened, first closed: the page must stay locked.
        assert_eq!(lock.leave(), None);
        assert_eq!(lock.leave(), Some(String::new()));
        assert_eq!(lock.leave(), None);
    }

    #[test]
    fn shared_lock_recaptures_after_full_release() {
        let mut lock = SharedLock::new();
        assert!(lock.enter(|| Some("auto".to_string())));
        assert_eq!(lock.leave(), Some("auto".to_string()));

        assert!(lock.enter(|| Some("scroll".to_string())));
        assert_eq!(lock.leave(), Some("scroll".to_string()));
    }

    #[test]
    fn failed_capture_registers_no_holder() {
        let mut lock = SharedLock::new();
        assert!(!lock.enter(|| None));
        assert_eq!(lock.leave(), None);
        assert!(lock.enter(|| Some(String::new())));
        assert_eq!(lock.leave(), Some(String::new()));
    }

    #[test]
    fn failed_acquire_leaves_slot_empty() {
        let mut slot: Option<CountingLock> = None;
        sync_lock(&mut slot, true, || None);
        assert!(slot.is_none());
    }
}
