pub mod app;
pub mod data;
pub mod errors;
pub mod model;
pub mod report;
pub mod session;
pub mod store;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
