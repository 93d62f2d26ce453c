pub mod finder;
pub mod github;
pub mod logger;
pub mod models;
pub mod render;
pub mod screen;
pub mod ui;

pub use models::*;
