pub mod columns;
pub mod data_table;
pub mod number_format;
pub mod pagination_controls;
pub mod query;
pub mod response;
pub mod sortable_header_cell;

pub use columns::{date_cell, money_cell, ColumnSpec};
pub use data_table::{DataTable, FilterSpec, RowAction};
pub use response::{ResponseParser, TablePage};
