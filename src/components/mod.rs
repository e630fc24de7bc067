pub mod fact_sidebar;
pub mod filter_bar;
pub mod gallery;
pub mod media;
pub mod modal;

pub use fact_sidebar::FactSidebar;
pub use filter_bar::FilterBar;
pub use modal::DetailModal;
