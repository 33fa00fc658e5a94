use leptos::prelude::*;

use crate::shared::table::{date_cell, money_cell, ColumnSpec, DataTable, FilterSpec};

#[component]
pub fn VehiclesPage() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("model", "Модель").sortable(),
        ColumnSpec::new("plate_no", "Гос. номер"),
        ColumnSpec::new("vin", "VIN"),
        ColumnSpec::new("year_made", "Год выпуска").sortable(),
        ColumnSpec::new("book_value", "Балансовая стоимость")
            .sortable()
            .with_render(money_cell),
        ColumnSpec::new("acquired_at", "Приобретено")
            .sortable()
            .with_render(date_cell),
        ColumnSpec::new("is_operational", "В эксплуатации"),
    ];

    let filters = vec![
        FilterSpec::new("model", "Модель", "Поиск по модели"),
        FilterSpec::new("plate_no", "Гос. номер", "Поиск по номеру"),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Транспорт"</h2>
            </div>
            <DataTable
                url="/api/vehicles".to_string()
                columns=columns
                filters=filters
            />
        </div>
    }
}
