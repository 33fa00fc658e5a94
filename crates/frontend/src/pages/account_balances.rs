use chrono::Datelike;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::fields::OthersBalancesTable;
use crate::shared::form::multi_select::join_selected;
use crate::shared::form::{GlobalFormState, MultiSelectField};
use crate::shared::table::{money_cell, ColumnSpec, DataTable};

/// Ключ формы фильтров в глобальном хранилище: выбор счетов переживает
/// переходы между страницами.
const FORM_KEY: &str = "account-balances";

/// "1,5,9" из содержимого поля "accounts"; None - фильтр не задан.
pub fn account_filter_param(field: Option<&Value>) -> Option<String> {
    join_selected(field?.as_array()?)
}

#[component]
pub fn AccountBalancesPage() -> impl IntoView {
    let ctx = use_app_context();

    let current_year = chrono::Utc::now().date_naive().year();
    let year = RwSignal::new(current_year);
    let refresh_key = RwSignal::new(0u64);

    let fallback_accounts = vec![];

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Остатки по счетам"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| refresh_key.update(|key| *key += 1)
                >
                    "Обновить"
                </Button>
            </div>

            <div class="page__filters">
                <MultiSelectField
                    label="Счета"
                    placeholder="Поиск по счетам..."
                    api_route="/api/bank-accounts/options"
                    fallback_options=fallback_accounts
                    field="accounts"
                    binding=GlobalFormState::new(ctx, FORM_KEY).handle()
                />
            </div>

            // смена выбора счетов пересоздаёт таблицу с новым фильтром
            {move || {
                let accounts = account_filter_param(ctx.form_field(FORM_KEY, "accounts").as_ref());
                let extra = accounts
                    .map(|ids| vec![("account_ids".to_string(), ids)])
                    .unwrap_or_default();
                let columns = vec![
                    ColumnSpec::new("account_name", "Счёт").sortable(),
                    ColumnSpec::new("year", "Год").sortable(),
                    ColumnSpec::new("month", "Месяц").sortable(),
                    ColumnSpec::new("opening_balance", "Входящий остаток")
                        .sortable()
                        .with_render(money_cell),
                    ColumnSpec::new("closing_balance", "Исходящий остаток")
                        .sortable()
                        .with_render(money_cell),
                    ColumnSpec::new("currency_code", "Валюта"),
                ];
                view! {
                    <DataTable
                        url="/api/account-balances".to_string()
                        columns=columns
                        extra_params=extra
                        refresh_key=refresh_key
                    />
                }
            }}

            <div class="page__section">
                <div class="page__section-header">
                    <h3>"Остатки прочих счетов за год"</h3>
                    <select
                        class="year-select"
                        prop:value=move || year.get().to_string()
                        on:change=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse::<i32>() {
                                year.set(parsed);
                            }
                        }
                    >
                        {(2020..=current_year)
                            .rev()
                            .map(|option_year| view! {
                                <option
                                    value=option_year.to_string()
                                    selected=move || year.get() == option_year
                                >
                                    {option_year.to_string()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                // смена года пересоздаёт таблицу с новым параметром
                {move || view! { <OthersBalancesTable year=year.get() /> }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_filter_param_joins_ids() {
        let field = json!([1, 5, 9]);
        assert_eq!(account_filter_param(Some(&field)), Some("1,5,9".to_string()));
    }

    #[test]
    fn test_account_filter_param_accepts_string_ids() {
        let field = json!(["a", "b"]);
        assert_eq!(account_filter_param(Some(&field)), Some("a,b".to_string()));
    }

    #[test]
    fn test_account_filter_param_empty_means_no_filter() {
        assert_eq!(account_filter_param(None), None);
        assert_eq!(account_filter_param(Some(&json!([]))), None);
        assert_eq!(account_filter_param(Some(&json!("не массив"))), None);
    }

    #[test]
    fn test_selection_survives_leaving_the_page() {
        let ctx = crate::layout::global_context::AppGlobalContext::new();
        let form = GlobalFormState::new(ctx, FORM_KEY);
        form.handle().set_field("accounts", json!([3, 8]));

        // новая привязка к тому же ключу видит прежний выбор
        let fresh = GlobalFormState::new(ctx, FORM_KEY);
        assert_eq!(
            account_filter_param(fresh.handle().get_field("accounts").as_ref()),
            Some("3,8".to_string())
        );
    }
}
