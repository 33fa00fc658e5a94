pub mod auth;
pub mod common;
pub mod entities;
pub mod stats;
