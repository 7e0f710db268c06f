//! Payment calculator
//!
//! Turns campaign economics inputs into the creator payout / platform fee /
//! brand total split. Pure and deterministic: identical inputs always yield
//! identical outputs.

use serde::Serialize;
use thiserror::Error;

use crate::config::PaymentPolicy;

/// Derived payout/fee breakdown, all amounts in integer cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentBreakdown {
    pub creator_payout_total_cents: i64,
    pub platform_fee_cents: i64,
    pub brand_total_cents: i64,
}

/// Validation errors for payment inputs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentError {
    #[error("At least {min} creator(s) required, got {got}")]
    TooFewCreators { min: i64, got: i64 },

    #[error("Payout per creator must be at least {min} cents, got {got}")]
    PayoutBelowMinimum { min: i64, got: i64 },

    #[error("Flat fee per creator cannot be negative")]
    NegativeFlatFee,

    #[error("Payment amounts overflow")]
    Overflow,
}

/// Compute the payout/fee breakdown for a campaign.
///
/// - `creator_payout_total = num_creators * (max_payout + flat_fee)`
/// - `platform_fee = creator_payout_total * fee_rate` (basis points,
///   rounded half up so the arithmetic stays integral)
/// - `brand_total = creator_payout_total + platform_fee`
pub fn compute(
    policy: &PaymentPolicy,
    num_creators: i64,
    max_payout_per_creator_cents: i64,
    flat_fee_per_creator_cents: i64,
) -> Result<PaymentBreakdown, PaymentError> {
    if num_creators < policy.min_creators {
        return Err(PaymentError::TooFewCreators {
            min: policy.min_creators,
            got: num_creators,
        });
    }
    if max_payout_per_creator_cents < policy.min_payout_per_creator_cents {
        return Err(PaymentError::PayoutBelowMinimum {
            min: policy.min_payout_per_creator_cents,
            got: max_payout_per_creator_cents,
        });
    }
    if flat_fee_per_creator_cents < 0 {
        return Err(PaymentError::NegativeFlatFee);
    }

    let per_creator = max_payout_per_creator_cents
        .checked_add(flat_fee_per_creator_cents)
        .ok_or(PaymentError::Overflow)?;
    let creator_payout_total_cents = num_creators
        .checked_mul(per_creator)
        .ok_or(PaymentError::Overflow)?;

    let platform_fee_cents = creator_payout_total_cents
        .checked_mul(policy.platform_fee_rate_bps)
        .and_then(|v| v.checked_add(5_000))
        .map(|v| v / 10_000)
        .ok_or(PaymentError::Overflow)?;

    let brand_total_cents = creator_payout_total_cents
        .checked_add(platform_fee_cents)
        .ok_or(PaymentError::Overflow)?;

    Ok(PaymentBreakdown {
        creator_payout_total_cents,
        platform_fee_cents,
        brand_total_cents,
    })
}
