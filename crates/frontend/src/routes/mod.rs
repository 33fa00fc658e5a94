pub mod routes;

pub use routes::AppRoutes;

// Таблица маршрутов. Константы используются для редиректов и ссылок,
// литералы в path!() должны совпадать с ними.
pub const SIGN_IN: &str = "/sign-in";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const DASHBOARD: &str = "/";
pub const BANK_ACCOUNTS: &str = "/bank-accounts";
pub const ACCOUNT_BALANCES: &str = "/account-balances";
pub const LOANS: &str = "/loans";
pub const CREDITS: &str = "/credits";
pub const BUILDINGS: &str = "/buildings";
pub const VEHICLES: &str = "/vehicles";
pub const LAND_PARCELS: &str = "/land-parcels";
