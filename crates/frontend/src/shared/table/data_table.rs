//! Универсальная списочная таблица.
//!
//! Страницы отдают endpoint, колонки и фильтры - таблица сама ведёт состояние
//! запроса, ходит на сервер при каждой его мутации и рисует строки через
//! thaw-таблицу. Ответы разбираются через подключаемый адаптер конверта.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::api_client;

use super::columns::ColumnSpec;
use super::pagination_controls::{page_count, PaginationControls};
use super::query::TableQuery;
use super::response::{default_parser, ResponseParser};
use super::sortable_header_cell::SortableHeaderCell;

/// Декларативное описание текстового фильтра над таблицей.
#[derive(Clone)]
pub struct FilterSpec {
    /// Имя параметра запроса.
    pub key: String,
    pub label: String,
    pub placeholder: String,
}

impl FilterSpec {
    pub fn new(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// Кнопка действия в последней колонке строки.
#[derive(Clone)]
pub struct RowAction {
    pub label: String,
    pub title: String,
    pub on_click: Callback<Value>,
}

#[component]
pub fn DataTable(
    /// Endpoint списка ("/api/..."); None - не запрашивать вовсе.
    #[prop(optional)]
    url: Option<String>,

    columns: Vec<ColumnSpec>,

    #[prop(optional)] filters: Vec<FilterSpec>,

    /// Размеры страницы; первый - начальный.
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    /// Внешний ключ принудительной перезагрузки (инкремент - новый запрос).
    #[prop(optional, into)]
    refresh_key: Option<Signal<u64>>,

    /// Фиксированные параметры запроса страницы-владельца.
    #[prop(optional)]
    extra_params: Vec<(String, String)>,

    /// Адаптер конверта ответа; по умолчанию `{ items, total_count }`.
    #[prop(optional)]
    parse_response: Option<ResponseParser>,

    #[prop(optional)] row_action: Option<RowAction>,
) -> impl IntoView {
    let page_size_options = page_size_options.unwrap_or_else(|| vec![25, 50, 100]);
    let has_url = url.is_some();

    let query = RwSignal::new(TableQuery::new(&page_size_options));
    let rows: RwSignal<Vec<Value>> = RwSignal::new(Vec::new());
    let total_count = RwSignal::new(0usize);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    // Локальная кнопка "Обновить" и номер последнего запроса для отбрасывания
    // устаревших ответов.
    let reload = RwSignal::new(0u64);
    let generation = StoredValue::new(0u64);

    let parser = StoredValue::new(parse_response.unwrap_or_else(default_parser));
    let extra = StoredValue::new(extra_params);
    let columns_stored = StoredValue::new(columns.clone());

    Effect::new(move |_| {
        let query_string = query.with(|q| q.query_string_with(&extra.get_value()));
        reload.get();
        if let Some(key) = refresh_key {
            key.get();
        }

        let Some(endpoint) = url.clone() else {
            return;
        };

        let request_generation = generation.get_value() + 1;
        generation.set_value(request_generation);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let path = format!("{}?{}", endpoint, query_string);
            let result = api_client::get_json::<Value>(&path)
                .await
                .and_then(|body| parser.with_value(|parse| parse(body)));

            // Пока ждали ответ, состояние могло измениться - такой ответ не применяем.
            if generation.get_value() != request_generation {
                return;
            }

            match result {
                Ok(page) => {
                    rows.set(page.rows);
                    total_count.set(page.total_count);
                    set_loading.set(false);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    total_count.set(0);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let on_sort = Callback::new(move |field: String| {
        query.update(|q| q.toggle_sort(&field));
    });
    let on_page_change = Callback::new(move |page: usize| {
        query.update(|q| q.set_page(page));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        query.update(|q| q.set_page_size(size));
    });

    let total_pages =
        Signal::derive(move || page_count(total_count.get(), query.with(|q| q.page_size)));

    let active_sort_field = Signal::derive(move || query.with(|q| q.sort_field.clone()));
    let sort_direction = Signal::derive(move || query.with(|q| q.sort_direction));

    let header_cells = columns
        .into_iter()
        .map(|column| {
            if column.sortable {
                view! {
                    <SortableHeaderCell
                        label=column.label.clone()
                        field=column.data.clone()
                        active_field=active_sort_field
                        direction=sort_direction
                        on_sort=on_sort
                    />
                }
                .into_any()
            } else {
                view! {
                    <TableHeaderCell resizable=true class="resizable" min_width=100.0>
                        {column.label.clone()}
                    </TableHeaderCell>
                }
                .into_any()
            }
        })
        .collect_view();

    let action_header_cell = row_action.as_ref().map(|_| {
        view! {
            <TableHeaderCell resizable=false min_width=60.0>
            </TableHeaderCell>
        }
    });

    let filter_panel_title = if filters.is_empty() {
        None
    } else {
        Some(view! { <span class="filter-panel__title">"Фильтры"</span> })
    };

    let filter_content = if filters.is_empty() {
        None
    } else {
        let inputs = filters
            .into_iter()
            .map(|filter| {
                let key_for_change = filter.key.clone();
                let key_for_value = filter.key.clone();
                view! {
                    <div class="filter-field">
                        <Label>{filter.label.clone()}</Label>
                        <input
                            class="filter-field__input"
                            placeholder=filter.placeholder.clone()
                            prop:value=move || {
                                query
                                    .with(|q| {
                                        q.filter_value(&key_for_value)
                                            .unwrap_or_default()
                                            .to_string()
                                    })
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                query.update(|q| q.set_filter(&key_for_change, value.trim()));
                            }
                        />
                    </div>
                }
            })
            .collect_view();

        Some(view! {
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    {inputs}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.update(|q| q.filters.clear())
                    >
                        "Сбросить"
                    </Button>
                </Flex>
            </div>
        })
    };

    let row_action_stored = StoredValue::new(row_action);

    view! {
        <div class="data-table">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">{filter_panel_title}</div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || query.with(|q| q.page))
                            total_pages=total_pages
                            total_count=total_count
                            page_size=Signal::derive(move || query.with(|q| q.page_size))
                            on_page_change=on_page_change
                            on_page_size_change=on_page_size_change
                            page_size_options=page_size_options.clone()
                        />
                    </div>
                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload.update(|n| *n += 1)
                            disabled=Signal::derive(move || loading.get() || !has_url)
                        >
                            {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                        </Button>
                    </div>
                </div>
                {filter_content}
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {action_header_cell}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|row| {
                                row.get("id")
                                    .map(|id| id.to_string())
                                    .unwrap_or_else(|| row.to_string())
                            }
                            children=move |row| {
                                let cells = columns_stored
                                    .with_value(|cols| {
                                        cols.iter()
                                            .map(|column| column.cell_text(&row))
                                            .collect::<Vec<_>>()
                                    });
                                let action_cell = row_action_stored
                                    .with_value(|action| {
                                        action
                                            .as_ref()
                                            .map(|action| {
                                                let on_click = action.on_click;
                                                let title = action.title.clone();
                                                let label = action.label.clone();
                                                let row_for_click = row.clone();
                                                view! {
                                                    <TableCell>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| {
                                                                on_click.run(row_for_click.clone())
                                                            }
                                                            attr:title=title
                                                        >
                                                            {label}
                                                        </Button>
                                                    </TableCell>
                                                }
                                            })
                                    });
                                view! {
                                    <TableRow>
                                        {cells
                                            .into_iter()
                                            .map(|text| {
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {text}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                        {action_cell}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || {
                    !loading.get() && error.get().is_none() && rows.with(|r| r.is_empty())
                }>
                    <div class="table-empty">
                        {if has_url { "Нет данных" } else { "Источник данных не задан" }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
