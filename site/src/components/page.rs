//! Landing page composition - owns the theme store

use super::{Benefits, CoverageComparison, Hero, PlanComparison, ThemeToggle};
use crate::store::ThemeStore;
use crate::theme::Theme;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Reactive view of a [`ThemeStore`].
///
/// The store stays the single owner of the theme; the signal mirrors its
/// value after every toggle so fragments re-render from the same source.
#[derive(Clone)]
pub struct ThemeHandle {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    store: Rc<RefCell<ThemeStore>>,
}

impl ThemeHandle {
    /// Wrap a loaded store.
    pub fn new(store: ThemeStore) -> Self {
        let (theme, set_theme) = signal(store.theme());
        Self {
            theme,
            set_theme,
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Theme input for components.
    pub fn theme(&self) -> Signal<Theme> {
        Signal::from(self.theme)
    }

    /// Toggle the store, then publish the new value to the signal.
    pub fn toggle(&self) -> Theme {
        let next = self.store.borrow_mut().toggle();
        self.set_theme.set(next);
        next
    }
}

/// The whole landing page.
///
/// The theme is handed to every section as an explicit input, so all
/// fragments read the same value in the same render.
#[component]
pub fn LandingPage(store: ThemeStore) -> impl IntoView {
    let handle = ThemeHandle::new(store);
    let theme = handle.theme();
    let toggle = move || {
        handle.toggle();
    };

    view! {
        <div class=move || format!("page {}", theme.get().tokens().background)>
            <ThemeToggle theme=theme on_toggle=toggle />
            <main class="page-main">
                <Hero theme=theme />
                <CoverageComparison theme=theme />
                <Benefits theme=theme />
                <PlanComparison theme=theme />
            </main>
        </div>
    }
}
