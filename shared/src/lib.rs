//! Shared library for the schedule toggle Lambda.
//!
//! This crate provides the ARN parser, configuration, error taxonomy, and the
//! EventBridge Scheduler client abstraction used by the handler binary.

pub mod arn;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;

pub use arn::ScheduleArn;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{ToggleRequest, ToggleResponse};
pub use scheduler::{Action, ScheduleState, SchedulerService, UpdateScheduleState};
