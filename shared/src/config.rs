//! Configuration management for the Lambda function.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
///
/// The AWS region is left to the ambient credential chain resolved by
/// `aws_config::load_defaults`; the handler has no region concern of its own.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fully-qualified ARN of the schedule to toggle
    pub schedule_arn: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            schedule_arn: env::var("SCHEDULE_ARN")
                .map_err(|_| Error::Config("SCHEDULE_ARN not set".to_string()))?,
        })
    }
}
