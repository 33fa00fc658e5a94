pub mod index;
pub mod registry;
pub mod stat_card;

pub use index::stats_index;
pub use registry::{
    provide_stat_registry, use_stat_registry, StatIndexEntry, StatModule, StatRegistry,
};
pub use stat_card::{StatCard, ValueFormat};
