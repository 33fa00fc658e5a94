use contracts::entities::BankAccountDto;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::fields::AccountBalanceList;
use crate::shared::table::{date_cell, ColumnSpec, DataTable, FilterSpec, RowAction};

#[component]
pub fn BankAccountsPage() -> impl IntoView {
    // счёт, выбранный для панели остатков
    let selected_account = RwSignal::new(None::<BankAccountDto>);

    let columns = vec![
        ColumnSpec::new("name", "Наименование").sortable(),
        ColumnSpec::new("account_no", "Номер счёта"),
        ColumnSpec::new("bank_name", "Банк").sortable(),
        ColumnSpec::new("bic", "БИК"),
        ColumnSpec::new("currency_code", "Валюта").sortable(),
        ColumnSpec::new("opened_at", "Открыт")
            .sortable()
            .with_render(date_cell),
        ColumnSpec::new("is_active", "Действует"),
    ];

    let filters = vec![
        FilterSpec::new("name", "Наименование", "Поиск по наименованию"),
        FilterSpec::new("bank_name", "Банк", "Поиск по банку"),
    ];

    let row_action = RowAction {
        label: "Остатки".to_string(),
        title: "Остатки по счёту".to_string(),
        on_click: Callback::new(move |row: Value| {
            match serde_json::from_value::<BankAccountDto>(row) {
                Ok(account) => selected_account.set(Some(account)),
                Err(err) => log::warn!("строка счёта не разобрана: {err}"),
            }
        }),
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Банковские счета"</h2>
            </div>
            <div class="page__split">
                <div class="page__main">
                    <DataTable
                        url="/api/bank-accounts".to_string()
                        columns=columns
                        filters=filters
                        row_action=row_action
                    />
                </div>
                {move || selected_account.get().map(|account| {
                    let id = account.id;
                    view! {
                        <div class="page__panel">
                            <div class="page__panel-header">
                                <h3>{format!("Остатки: {}", account.name)}</h3>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| selected_account.set(None)
                                >
                                    "Закрыть"
                                </Button>
                            </div>
                            <AccountBalanceList account_id=Signal::derive(move || id) />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
