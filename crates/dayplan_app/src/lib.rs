mod app;
mod args;
pub mod setup;
pub mod theme;
mod ui;

pub use app::{load_store, DayPlanApp};
pub use args::{Args, PlannerOptions};
