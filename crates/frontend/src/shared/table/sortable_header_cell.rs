//! Сортируемая ячейка заголовка таблицы

use leptos::prelude::*;
use thaw::*;

use super::query::SortDirection;

/// Индикатор сортировки: стрелка у активного поля, "⇅" у остальных.
pub fn sort_indicator(
    active_field: Option<&str>,
    field: &str,
    direction: Option<SortDirection>,
) -> &'static str {
    if active_field == Some(field) {
        match direction.unwrap_or(SortDirection::Asc) {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Заголовок сортируемой колонки: клик отдаёт имя поля наружу,
/// индикатор считается от текущего состояния сортировки.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] field: String,
    #[prop(into)] active_field: Signal<Option<String>>,
    #[prop(into)] direction: Signal<Option<SortDirection>>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let field_for_click = field.clone();
    let field_for_indicator = field;

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px; max-width: calc(100% - 12px);"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class="sort-indicator">
                    {move || {
                        sort_indicator(
                            active_field.get().as_deref(),
                            &field_for_indicator,
                            direction.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator_active_field() {
        assert_eq!(
            sort_indicator(Some("name"), "name", Some(SortDirection::Asc)),
            " ▲"
        );
        assert_eq!(
            sort_indicator(Some("name"), "name", Some(SortDirection::Desc)),
            " ▼"
        );
    }

    #[test]
    fn test_sort_indicator_inactive_field() {
        assert_eq!(
            sort_indicator(Some("name"), "balance", Some(SortDirection::Asc)),
            " ⇅"
        );
        assert_eq!(sort_indicator(None, "balance", None), " ⇅");
    }
}
