use serde::{Deserialize, Serialize};

/// DTO банковского счёта.
///
/// Списочные страницы работают с сырыми JSON-строками; типизированная форма
/// нужна там, где выбранная строка используется дальше (панель остатков).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccountDto {
    pub id: i64,
    pub name: String,
    pub account_no: String,
    pub bank_name: String,
    pub bic: Option<String>,
    pub currency_code: String,
    pub opened_at: Option<String>, // NaiveDate as string "YYYY-MM-DD"
    pub is_active: bool,
}

/// DTO остатка по счёту за месяц.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalanceDto {
    pub id: i64,
    pub account_id: i64,
    pub account_name: String,
    pub year: i32,
    pub month: i32,
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub currency_code: String,
}
