use leptos::prelude::*;

use crate::shared::table::{date_cell, money_cell, ColumnSpec, DataTable, FilterSpec};

#[component]
pub fn BuildingsPage() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("name", "Наименование").sortable(),
        ColumnSpec::new("address", "Адрес"),
        ColumnSpec::new("cadastral_no", "Кадастровый номер"),
        ColumnSpec::new("area_sq_m", "Площадь, м²").sortable(),
        ColumnSpec::new("book_value", "Балансовая стоимость")
            .sortable()
            .with_render(money_cell),
        ColumnSpec::new("acquired_at", "Приобретено")
            .sortable()
            .with_render(date_cell),
    ];

    let filters = vec![
        FilterSpec::new("name", "Наименование", "Поиск по наименованию"),
        FilterSpec::new("address", "Адрес", "Поиск по адресу"),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Здания и помещения"</h2>
            </div>
            <DataTable
                url="/api/buildings".to_string()
                columns=columns
                filters=filters
            />
        </div>
    }
}
