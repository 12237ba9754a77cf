//! SARView UI
//!
//! Yew pages, routes and the application shell. The WASM entry point lives in
//! `sarview-client`; this crate also builds on native so pages can be rendered
//! with Yew SSR in tests.

mod app;
pub mod pages;
mod routes;

pub use app::App;
pub use pages::set_panic_hook;
pub use routes::Route;
