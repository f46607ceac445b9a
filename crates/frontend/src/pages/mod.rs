//! Page components.

mod event;
mod home;

pub use event::EventPage;
pub use home::HomePage;
