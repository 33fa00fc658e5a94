use leptos::prelude::*;

use crate::shared::table::{date_cell, money_cell, ColumnSpec, DataTable, FilterSpec};

#[component]
pub fn LandParcelsPage() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("name", "Наименование").sortable(),
        ColumnSpec::new("cadastral_no", "Кадастровый номер"),
        ColumnSpec::new("location", "Расположение"),
        ColumnSpec::new("area_hectares", "Площадь, га").sortable(),
        ColumnSpec::new("land_category", "Категория земель"),
        ColumnSpec::new("book_value", "Балансовая стоимость")
            .sortable()
            .with_render(money_cell),
        ColumnSpec::new("acquired_at", "Приобретено")
            .sortable()
            .with_render(date_cell),
    ];

    let filters = vec![
        FilterSpec::new("name", "Наименование", "Поиск по наименованию"),
        FilterSpec::new("cadastral_no", "Кадастровый номер", "Поиск по кадастровому номеру"),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Земельные участки"</h2>
            </div>
            <DataTable
                url="/api/land-parcels".to_string()
                columns=columns
                filters=filters
            />
        </div>
    }
}
