//! Reusable UI components.

mod attendee_list;
mod event_card;
mod loading;
mod toast;

pub use attendee_list::AttendeeList;
pub use event_card::EventCard;
pub use loading::Loading;
pub use toast::{Toast, ToastMessage};
