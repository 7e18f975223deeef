pub mod app;
pub mod config;
pub mod controller;
pub mod form;
pub mod notify;
pub mod steps;

pub use app::App;
