//! Payments domain - campaign economics
//!
//! Pure payout/fee arithmetic; no persisted state. Everything is integer
//! minor units (cents) so recomputation is bit-for-bit reproducible.

pub mod calculator;

pub use calculator::{compute, PaymentBreakdown, PaymentError};
