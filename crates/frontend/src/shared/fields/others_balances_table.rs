//! Таблица остатков прочих счетов за выбранный год.
//!
//! Обёртка над `DataTable` с зафиксированным параметром `year` и усечённым
//! набором колонок. Смена года делается пересозданием компонента
//! (родитель рендерит его внутри реактивного замыкания).

use leptos::prelude::*;

use crate::shared::table::{money_cell, ColumnSpec, DataTable};

pub fn others_balances_params(year: i32) -> Vec<(String, String)> {
    vec![("year".to_string(), year.to_string())]
}

#[component]
pub fn OthersBalancesTable(year: i32) -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("account_name", "Счёт").sortable(),
        ColumnSpec::new("month", "Месяц").sortable(),
        ColumnSpec::new("opening_balance", "Входящий остаток").with_render(money_cell),
        ColumnSpec::new("closing_balance", "Исходящий остаток").with_render(money_cell),
        ColumnSpec::new("currency_code", "Валюта"),
    ];

    view! {
        <DataTable
            url="/api/account-balances".to_string()
            columns=columns
            extra_params=others_balances_params(year)
            page_size_options=vec![10, 25, 50]
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_pin_exactly_the_year() {
        let params = others_balances_params(2025);
        assert_eq!(params, vec![("year".to_string(), "2025".to_string())]);
    }
}
