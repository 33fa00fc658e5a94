pub mod global_context;
pub mod main_layout;
pub mod sidebar;

pub use global_context::{use_app_context, AppGlobalContext};
pub use main_layout::MainLayout;
pub use sidebar::Sidebar;
