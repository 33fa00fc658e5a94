//! Индекс виджетов дашборда.
//!
//! Список фиксирован на этапе сборки: id, заголовок и загрузчик, который
//! тянет сводку с бэкенда и упаковывает её в готовый модуль с карточкой.

use std::sync::Arc;

use contracts::stats::StatSummaryDto;
use futures::future::FutureExt;
use leptos::prelude::*;
use once_cell::sync::Lazy;

use crate::shared::api_client::get_json;

use super::registry::{StatIndexEntry, StatModule};
use super::stat_card::{StatCard, ValueFormat};

fn summary_entry(
    id: &str,
    title: &str,
    icon_name: &str,
    route: &str,
    format: ValueFormat,
) -> StatIndexEntry {
    let id = id.to_string();
    let title = title.to_string();
    let icon_name = icon_name.to_string();
    let route = route.to_string();

    let loader_id = id.clone();
    let loader_title = title.clone();
    StatIndexEntry {
        id: id.clone(),
        title: title.clone(),
        loader: Arc::new(move || {
            let id = loader_id.clone();
            let title = loader_title.clone();
            let icon_name = icon_name.clone();
            let route = route.clone();
            let format = format.clone();
            async move {
                let summary = get_json::<StatSummaryDto>(&route).await?;
                let render_title = title.clone();
                Ok(StatModule {
                    id,
                    title,
                    render: Arc::new(move || {
                        let value = summary.value;
                        let change = summary.change_percent;
                        let subtitle = summary.subtitle.clone();
                        view! {
                            <StatCard
                                label=render_title.clone()
                                icon_name=icon_name.clone()
                                value=Signal::derive(move || Some(value))
                                format=format.clone()
                                change_percent=Signal::derive(move || change)
                                subtitle=Signal::derive({
                                    let subtitle = subtitle.clone();
                                    move || subtitle.clone()
                                })
                            />
                        }
                        .into_any()
                    }),
                })
            }
            .boxed_local()
        }),
    }
}

static STATS_INDEX: Lazy<Vec<StatIndexEntry>> = Lazy::new(|| {
    vec![
        summary_entry(
            "total-balance",
            "Остатки на счетах",
            "money",
            "/api/stats/total-balance",
            ValueFormat::Money {
                currency: "RUB".to_string(),
            },
        ),
        summary_entry(
            "loans-outstanding",
            "Задолженность по займам",
            "loans",
            "/api/stats/loans-outstanding",
            ValueFormat::Money {
                currency: "RUB".to_string(),
            },
        ),
        summary_entry(
            "credits-outstanding",
            "Задолженность по кредитам",
            "credits",
            "/api/stats/credits-outstanding",
            ValueFormat::Money {
                currency: "RUB".to_string(),
            },
        ),
        summary_entry(
            "property-count",
            "Объекты имущества",
            "buildings",
            "/api/stats/property-count",
            ValueFormat::Integer,
        ),
    ]
});

pub fn stats_index() -> &'static [StatIndexEntry] {
    &STATS_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_ids_are_unique() {
        let ids: HashSet<&str> = stats_index().iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids.len(), stats_index().len());
    }

    #[test]
    fn test_index_entries_are_titled() {
        assert!(!stats_index().is_empty());
        for entry in stats_index() {
            assert!(!entry.title.is_empty(), "виджет {} без заголовка", entry.id);
        }
    }
}
