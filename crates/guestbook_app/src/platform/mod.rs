mod app;
mod controller;
mod effects;
mod headless;
mod ui;

pub use app::run_app;
pub use headless::{print_attribution, run_sign};
