//! Компактный список остатков одного счёта, без пагинации.

use contracts::common::Paginated;
use contracts::entities::AccountBalanceDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::get_json;
use crate::shared::table::number_format::format_money_with_currency;

/// Сколько последних периодов показываем: два года помесячно.
const PERIOD_LIMIT: usize = 24;

pub fn balances_path(account_id: i64) -> String {
    format!(
        "/api/account-balances?account_id={}&page=1&page_size={}&sort_field=period&sort_direction=desc",
        account_id, PERIOD_LIMIT
    )
}

/// "3/2025" -> "03.2025"
pub fn format_period(month: i32, year: i32) -> String {
    format!("{:02}.{}", month, year)
}

#[component]
pub fn AccountBalanceList(#[prop(into)] account_id: Signal<i64>) -> impl IntoView {
    let balances = RwSignal::new(Vec::<AccountBalanceDto>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let generation = StoredValue::new(0u64);

    // перезагрузка при смене счёта; ответ устаревшего запроса не применяется
    Effect::new(move |_| {
        let id = account_id.get();
        let request_generation = generation.get_value() + 1;
        generation.set_value(request_generation);
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            let result = get_json::<Paginated<AccountBalanceDto>>(&balances_path(id)).await;
            if generation.get_value() != request_generation {
                return;
            }
            match result {
                Ok(page) => balances.set(page.items),
                Err(err) => {
                    balances.set(Vec::new());
                    error_msg.set(Some(err));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="balance-list">
            <div class="balance-list__row balance-list__row--header">
                <span class="balance-list__period">"Период"</span>
                <span class="balance-list__value">"Входящий"</span>
                <span class="balance-list__value">"Исходящий"</span>
            </div>
            {move || error_msg.get().map(|msg| view! {
                <div class="balance-list__error">{msg}</div>
            })}
            <Show when=move || !loading.get() fallback=|| view! { <div class="balance-list__loading">"Загрузка..."</div> }>
                <For
                    each=move || balances.get()
                    key=|balance| balance.id
                    children=|balance: AccountBalanceDto| {
                        view! {
                            <div class="balance-list__row">
                                <span class="balance-list__period">
                                    {format_period(balance.month, balance.year)}
                                </span>
                                <span class="balance-list__value">
                                    {format_money_with_currency(balance.opening_balance, &balance.currency_code)}
                                </span>
                                <span class="balance-list__value">
                                    {format_money_with_currency(balance.closing_balance, &balance.currency_code)}
                                </span>
                            </div>
                        }
                    }
                />
                <Show when=move || balances.get().is_empty() && error_msg.get().is_none()>
                    <div class="balance-list__empty">"Нет данных"</div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balances_path_pins_account_and_order() {
        let path = balances_path(17);
        assert!(path.starts_with("/api/account-balances?"));
        assert!(path.contains("account_id=17"));
        assert!(path.contains("page=1"));
        assert!(path.contains("sort_direction=desc"));
    }

    #[test]
    fn test_format_period_pads_month() {
        assert_eq!(format_period(3, 2025), "03.2025");
        assert_eq!(format_period(12, 2024), "12.2024");
    }
}
