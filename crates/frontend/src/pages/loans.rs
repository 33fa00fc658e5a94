use contracts::common::OptionItemDto;
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::shared::form::multi_select::join_selected;
use crate::shared::form::MultiSelectField;
use crate::shared::table::{date_cell, money_cell, ColumnSpec, DataTable, FilterSpec};

/// Валюты договоров фиксированы, маршрут не нужен.
fn currency_options() -> Vec<OptionItemDto> {
    [("RUB", "Рубль"), ("USD", "Доллар"), ("EUR", "Евро"), ("CNY", "Юань")]
        .into_iter()
        .map(|(code, name)| OptionItemDto {
            id: json!(code),
            name: name.to_string(),
            extra: Default::default(),
        })
        .collect()
}

#[component]
pub fn LoansPage() -> impl IntoView {
    let selected_currencies = RwSignal::new(Vec::<Value>::new());
    let on_currencies_change =
        Callback::new(move |selected: Vec<Value>| selected_currencies.set(selected));

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Займы выданные"</h2>
            </div>

            <div class="page__filters">
                <MultiSelectField
                    label="Валюта договора"
                    value=selected_currencies
                    on_change=on_currencies_change
                    fallback_options=currency_options()
                />
            </div>

            {move || {
                let extra = join_selected(&selected_currencies.get())
                    .map(|codes| vec![("currency_codes".to_string(), codes)])
                    .unwrap_or_default();
                let columns = vec![
                    ColumnSpec::new("borrower_name", "Заёмщик").sortable(),
                    ColumnSpec::new("contract_no", "Договор"),
                    ColumnSpec::new("principal_amount", "Сумма")
                        .sortable()
                        .with_render(money_cell),
                    ColumnSpec::new("outstanding_amount", "Остаток долга")
                        .sortable()
                        .with_render(money_cell),
                    ColumnSpec::new("interest_rate", "Ставка, %"),
                    ColumnSpec::new("currency_code", "Валюта"),
                    ColumnSpec::new("issued_at", "Выдан")
                        .sortable()
                        .with_render(date_cell),
                    ColumnSpec::new("due_at", "Срок возврата")
                        .sortable()
                        .with_render(date_cell),
                ];
                let filters = vec![FilterSpec::new("borrower_name", "Заёмщик", "Поиск по заёмщику")];
                view! {
                    <DataTable
                        url="/api/loans".to_string()
                        columns=columns
                        filters=filters
                        extra_params=extra
                    />
                }
            }}
        </div>
    }
}
