use leptos::prelude::*;

use crate::shared::table::{date_cell, money_cell, ColumnSpec, DataTable, FilterSpec};

#[component]
pub fn CreditsPage() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("bank_name", "Банк").sortable(),
        ColumnSpec::new("contract_no", "Договор"),
        ColumnSpec::new("principal_amount", "Сумма кредита")
            .sortable()
            .with_render(money_cell),
        ColumnSpec::new("outstanding_amount", "Остаток долга")
            .sortable()
            .with_render(money_cell),
        ColumnSpec::new("interest_rate", "Ставка, %"),
        ColumnSpec::new("currency_code", "Валюта"),
        ColumnSpec::new("opened_at", "Открыт")
            .sortable()
            .with_render(date_cell),
        ColumnSpec::new("closes_at", "Погашение")
            .sortable()
            .with_render(date_cell),
    ];

    let filters = vec![
        FilterSpec::new("bank_name", "Банк", "Поиск по банку"),
        FilterSpec::new("contract_no", "Договор", "Номер договора"),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Кредиты"</h2>
            </div>
            <DataTable
                url="/api/credits".to_string()
                columns=columns
                filters=filters
            />
        </div>
    }
}
