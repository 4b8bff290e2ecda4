//! Controller layer: UI events pushed by the backend worker and error
//! modeling for toast notifications.

pub mod events;
