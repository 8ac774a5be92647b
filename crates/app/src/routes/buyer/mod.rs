mod designs;
mod fabric_library;
mod modals;
mod overview;
mod rfqs;
mod samples;
mod selection_panel;

use crate::api;
use crate::auth::use_auth;
use crate::routes::Route;
use console_core::{
    bundled_dashboard, ApiClient, BuyerConsole, ConsoleStore, ConsoleView, FabricSearch,
    SearchDriver,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronLeft, LdFileText, LdImage, LdLayers, LdLayoutDashboard, LdLogOut, LdMenu, LdPackage,
    LdSearch,
};
use dioxus_free_icons::Icon;
use futures::future::LocalBoxFuture;
use futures::StreamExt;
use shared_types::{AppConfig, DashboardView, QueryPatch};
use shared_ui::{Button, ButtonSize, ButtonVariant};

use designs::Designs;
use fabric_library::FabricLibrary;
use modals::{MockupModal, TechpackModal};
use overview::Overview;
use rfqs::Rfqs;
use samples::Samples;
use selection_panel::SelectionPanel;

/// Below this width (px) picking a sidebar entry also closes the sidebar.
const COMPACT_WIDTH: f64 = 1024.0;

/// [`ConsoleStore`] over a signal, so every mutation re-renders.
#[derive(Clone, Copy)]
struct SignalStore(Signal<BuyerConsole>);

impl ConsoleStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> R {
        let mut console = self.0;
        console.with_mut(f)
    }

    fn read<R>(&self, f: impl FnOnce(&BuyerConsole) -> R) -> R {
        self.0.with_peek(f)
    }

    fn try_update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> Option<R> {
        let mut console = self.0;
        console.try_write().ok().map(|mut state| f(&mut state))
    }
}

type SearchTask = LocalBoxFuture<'static, ()>;

/// Console state plus the search driver, shared with every view.
///
/// Search tasks go to a coroutine owned by [`Buyer`], so switching views
/// never drops a search half way.
#[derive(Clone)]
pub struct ConsoleHandle {
    pub console: Signal<BuyerConsole>,
    driver: SearchDriver<SignalStore, ApiClient>,
    searches: Coroutine<SearchTask>,
}

impl ConsoleHandle {
    /// Apply a query edit and schedule the debounced search it produces.
    pub fn update_query(&self, patch: QueryPatch) {
        if let Some(task) = self.driver.update_query(patch) {
            self.searches.send(task);
        }
    }

    pub fn load_more(&self) {
        if let Some(task) = self.driver.load_more() {
            self.searches.send(task);
        }
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut BuyerConsole) -> R) -> R {
        let mut console = self.console;
        console.with_mut(f)
    }
}

pub fn use_console() -> ConsoleHandle {
    use_context::<ConsoleHandle>()
}

fn menu_icon(view: DashboardView) -> Element {
    match view {
        DashboardView::FabricLibrary => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 20, height: 20 } },
        DashboardView::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } },
        DashboardView::Rfqs => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
        DashboardView::Samples => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 20, height: 20 } },
        DashboardView::Designs => rsx! { Icon::<LdImage> { icon: LdImage, width: 20, height: 20 } },
    }
}

/// Buyer Console: sidebar, top bar and the active view.
#[component]
pub fn Buyer() -> Element {
    let mut auth = use_auth();
    let config: AppConfig = use_context();

    let mut console = use_signal(|| BuyerConsole::new(config.search.page_size));
    let mut compact = use_signal(|| false);
    let dashboard = use_hook(bundled_dashboard);

    // Runs in this scope, so tasks spawned here outlive the active view.
    let searches = use_coroutine(|mut rx: UnboundedReceiver<SearchTask>| async move {
        while let Some(task) = rx.next().await {
            spawn(task);
        }
    });

    use_context_provider(|| ConsoleHandle {
        console,
        driver: SearchDriver::new(
            SignalStore(console),
            api::client(auth.token()),
            config.search.debounce(),
        ),
        searches,
    });

    let fabric_groups = use_resource(move || async move {
        match api::client(None).fabric_groups().await {
            Ok(groups) => groups,
            Err(error) => {
                tracing::warn!(%error, "fabric groups unavailable");
                Vec::new()
            }
        }
    });
    let groups = fabric_groups.read().clone().unwrap_or_default();

    let user_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "Buyer".to_string());

    let state = console.read();
    let sidebar_open = state.sidebar_open();
    let active = state.view();
    let view = ConsoleView::build(&state, &dashboard);
    let query = state.query().clone();
    let selected: Vec<_> = state.selection().iter().cloned().collect();
    let mockup = state.mockup_target().cloned();
    let mockup_selected = mockup.as_ref().is_some_and(|f| state.is_selected(f));
    let techpack = state.techpack_target().cloned();
    drop(state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./console.css") }

        div {
            class: "console",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_border_box_size() {
                    compact.set(size.width < COMPACT_WIDTH);
                }
            },

            aside { class: "console-sidebar", "data-open": sidebar_open,
                if sidebar_open {
                    div { class: "console-brand",
                        div { class: "console-brand-mark",
                            Icon::<LdLayers> { icon: LdLayers, width: 24, height: 24 }
                        }
                        span { class: "console-brand-name", "LinkER" }
                    }

                    nav { class: "console-nav",
                        for item in DashboardView::MENU {
                            button {
                                key: "{item.slug()}",
                                class: "console-nav-item",
                                "data-active": item == active,
                                onclick: move |_| {
                                    let compact = compact();
                                    console.with_mut(|c| c.navigate(item, compact));
                                },
                                {menu_icon(item)}
                                span { "{item.label()}" }
                            }
                        }
                    }

                    div { class: "console-user",
                        div { class: "console-user-card",
                            p { class: "console-user-caption", "Logged in as" }
                            p { class: "console-user-name", "{user_name}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "console-logout",
                            onclick: move |_| {
                                auth.logout();
                                navigator().replace(Route::Login { redirect: None });
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            span { "Logout" }
                        }
                    }
                }
            }

            div { class: "console-main",
                header { class: "console-topbar",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        title: "Toggle sidebar",
                        onclick: move |_| console.with_mut(|c| c.toggle_sidebar()),
                        if sidebar_open {
                            Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 20, height: 20 }
                        } else {
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    }
                    p { class: "console-greeting", "Welcome back, {user_name}" }
                }

                main {
                    class: "console-content",
                    onclick: move |_| {
                        if console.with_mut(|c| c.dismiss_sidebar()) {
                            tracing::debug!("sidebar dismissed by content click");
                        }
                    },
                    div { class: "console-content-inner",
                        match view {
                            ConsoleView::FabricLibrary(library) => rsx! {
                                FabricLibrary { library, query, groups }
                            },
                            ConsoleView::Overview { stats, recent_rfqs } => rsx! {
                                Overview { stats, recent_rfqs }
                            },
                            ConsoleView::Rfqs { rfqs } => rsx! {
                                Rfqs { rfqs }
                            },
                            ConsoleView::Samples { orders } => rsx! {
                                Samples { orders }
                            },
                            ConsoleView::Designs { designs } => rsx! {
                                Designs { designs }
                            },
                        }
                    }
                }
            }

            if !selected.is_empty() {
                SelectionPanel { selected }
            }

            if let Some(fabric) = mockup {
                MockupModal { fabric, selected: mockup_selected }
            }
            if let Some(fabric) = techpack {
                TechpackModal { fabric }
            }
        }
    }
}
