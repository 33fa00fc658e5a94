use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::stats::provide_stat_registry;
use crate::system::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Контексты всего приложения: состояние каркаса и кеш модулей сводки.
    provide_context(AppGlobalContext::new());
    provide_stat_registry();

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
