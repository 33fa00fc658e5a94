use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::stats::{stats_index, use_stat_registry, StatIndexEntry, StatModule};
use crate::system::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let greeting = move || match session.user_name() {
        Some(name) => format!("Здравствуйте, {}!", name),
        None => "Здравствуйте!".to_string(),
    };

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <h2 class="page__title">"Дашборд"</h2>
                <div class="page__subtitle">{greeting}</div>
            </div>
            <div class="stats-grid">
                {stats_index()
                    .iter()
                    .map(|entry| view! { <StatWidget entry=entry.clone() /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Один виджет: просит модуль у реестра и показывает то, что прилетело.
/// Повторные заходы на дашборд переиспользуют уже загруженный модуль.
#[component]
fn StatWidget(entry: StatIndexEntry) -> impl IntoView {
    let registry = use_stat_registry();
    let module = RwSignal::new(None::<Result<StatModule, String>>);
    let title = entry.title.clone();

    let future = registry.load(&entry);
    spawn_local(async move {
        let result = future.await;
        module.set(Some(result));
    });

    view! {
        <div class="stat-widget">
            {move || match module.get() {
                None => view! {
                    <div class="stat-widget__loading">{format!("{}: загрузка...", title)}</div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <div class="stat-widget__error">{format!("{}: {}", title, err)}</div>
                }
                .into_any(),
                Some(Ok(module)) => (module.render)(),
            }}
        </div>
    }
}
