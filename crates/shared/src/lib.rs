//! Types shared between the attendance client core and the desktop app:
//! domain identifiers, wire payloads for the checkpoint endpoint, and the
//! denial body it returns on a refused submission.

pub mod domain;
pub mod error;
pub mod protocol;
