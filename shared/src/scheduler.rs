//! EventBridge Scheduler client abstraction.

use async_trait::async_trait;
use aws_sdk_scheduler::types::ScheduleState as SdkScheduleState;
use aws_sdk_scheduler::Client as SchedulerClient;
use tracing::info;

use crate::{Error, Result};

/// The requested state-change keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enable,
    Disable,
}

impl Action {
    /// Validate the raw `action` field against the allow-list.
    ///
    /// Accepts the field as raw JSON so non-string shapes are rejected with
    /// the same 400 message, quoting whatever was supplied.
    pub fn parse(raw: Option<&serde_json::Value>) -> Result<Self> {
        match raw.map(|v| (v, v.as_str())) {
            Some((_, Some("enable"))) => Ok(Action::Enable),
            Some((_, Some("disable"))) => Ok(Action::Disable),
            Some((_, Some(other))) => Err(Error::InvalidAction(format!(
                "Invalid action '{}'. Must be 'enable' or 'disable'.",
                other
            ))),
            Some((value, None)) => Err(Error::InvalidAction(format!(
                "Invalid action '{}'. Must be 'enable' or 'disable'.",
                value
            ))),
            None => Err(Error::InvalidAction(
                "Invalid action: missing 'action' field. Must be 'enable' or 'disable'."
                    .to_string(),
            )),
        }
    }

    /// The target enabled/disabled flag for this action.
    pub fn desired_state(self) -> ScheduleState {
        match self {
            Action::Enable => ScheduleState::Enabled,
            Action::Disable => ScheduleState::Disabled,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Enable => "enable",
            Action::Disable => "disable",
        }
    }
}

/// The target enabled/disabled flag sent to the scheduling service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    Enabled,
    Disabled,
}

impl ScheduleState {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleState::Enabled => "ENABLED",
            ScheduleState::Disabled => "DISABLED",
        }
    }

    /// Past-tense wording for confirmation messages.
    pub fn past_tense(self) -> &'static str {
        match self {
            ScheduleState::Enabled => "enabled",
            ScheduleState::Disabled => "disabled",
        }
    }
}

/// The one consumed capability of the external scheduling service.
///
/// Failures are deliberately collapsed into a single opaque [`Error::Upstream`]
/// string; the handler does not discriminate throttling from not-found from
/// permission errors.
#[async_trait]
pub trait UpdateScheduleState: Send + Sync {
    async fn update_schedule_state(
        &self,
        group_name: &str,
        schedule_name: &str,
        state: ScheduleState,
    ) -> Result<()>;
}

/// EventBridge Scheduler client wrapper.
#[derive(Debug, Clone)]
pub struct SchedulerService {
    client: SchedulerClient,
}

impl SchedulerService {
    /// Build the service from the ambient AWS configuration.
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: SchedulerClient::new(&config),
        }
    }
}

#[async_trait]
impl UpdateScheduleState for SchedulerService {
    async fn update_schedule_state(
        &self,
        group_name: &str,
        schedule_name: &str,
        state: ScheduleState,
    ) -> Result<()> {
        let sdk_state = match state {
            ScheduleState::Enabled => SdkScheduleState::Enabled,
            ScheduleState::Disabled => SdkScheduleState::Disabled,
        };

        self.client
            .update_schedule()
            .group_name(group_name)
            .name(schedule_name)
            .state(sdk_state)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        info!(
            schedule = schedule_name,
            group = group_name,
            state = state.as_str(),
            "Schedule state updated"
        );

        Ok(())
    }
}
