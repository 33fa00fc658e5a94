pub mod account_balance_list;
pub mod others_balances_table;

pub use account_balance_list::AccountBalanceList;
pub use others_balances_table::OthersBalancesTable;
