use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub object_store_base_url: String,
    pub object_store_token: Option<String>,
    pub push_access_token: Option<String>,
    pub payments: PaymentPolicy,
}

/// Payment policy knobs for the calculator
///
/// All monetary values are integer minor units (cents). The platform fee
/// rate is expressed in basis points so fee arithmetic stays integral.
#[derive(Debug, Clone, Copy)]
pub struct PaymentPolicy {
    pub min_creators: i64,
    pub min_payout_per_creator_cents: i64,
    pub platform_fee_rate_bps: i64,
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            min_creators: 1,
            min_payout_per_creator_cents: 1,
            platform_fee_rate_bps: 3000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            object_store_base_url: env::var("OBJECT_STORE_BASE_URL")
                .context("OBJECT_STORE_BASE_URL must be set")?,
            object_store_token: env::var("OBJECT_STORE_TOKEN").ok(),
            push_access_token: env::var("PUSH_ACCESS_TOKEN").ok(),
            payments: PaymentPolicy {
                min_creators: env::var("PAYMENT_MIN_CREATORS")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()
                    .context("PAYMENT_MIN_CREATORS must be a valid number")?,
                min_payout_per_creator_cents: env::var("PAYMENT_MIN_PAYOUT_CENTS")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()
                    .context("PAYMENT_MIN_PAYOUT_CENTS must be a valid number")?,
                platform_fee_rate_bps: env::var("PLATFORM_FEE_RATE_BPS")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .context("PLATFORM_FEE_RATE_BPS must be a valid number")?,
            },
        })
    }
}
