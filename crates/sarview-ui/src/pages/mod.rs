//! Page components.

mod historical;
mod home;
mod not_found;
mod panic;

pub use historical::HistoricalPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use panic::{set_panic_hook, PanicPage};
