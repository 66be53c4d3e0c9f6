//! Shared configuration and record types for clipscout.

pub mod config;
pub mod coupons;
pub mod scout_config;

pub use config::{build_scout_config, load_scout_config, load_scout_config_from_env};
pub use coupons::{CouponDetail, UNKNOWN_OFFER};
pub use scout_config::ScoutConfig;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
