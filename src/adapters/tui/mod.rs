pub mod app;
pub mod event;
pub mod state;
pub mod validate;
pub mod views;
pub mod widgets;

pub use app::{run_tui, App};
