pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;
pub mod workflow;

pub use panel::LeavesPage;
