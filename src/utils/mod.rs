//! Utility modules shared across the client.
//!
//! - [`datetime`] - parsing and formatting of due dates and timestamps

pub mod datetime;
