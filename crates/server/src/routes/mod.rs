//! API route handlers.

mod attendees;
mod events;
mod ws;

pub use attendees::*;
pub use events::*;
pub use ws::*;
