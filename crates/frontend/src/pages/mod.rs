pub mod account_balances;
pub mod bank_accounts;
pub mod buildings;
pub mod credits;
pub mod dashboard;
pub mod forgot_password;
pub mod land_parcels;
pub mod loans;
pub mod sign_in;
pub mod vehicles;

pub use account_balances::AccountBalancesPage;
pub use bank_accounts::BankAccountsPage;
pub use buildings::BuildingsPage;
pub use credits::CreditsPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use land_parcels::LandParcelsPage;
pub use loans::LoansPage;
pub use sign_in::SignInPage;
pub use vehicles::VehiclesPage;
