pub mod api_client;
pub mod fields;
pub mod form;
pub mod icons;
pub mod stats;
pub mod table;
