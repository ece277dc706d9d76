//! Toggle Schedule Lambda - Enables or disables one EventBridge schedule.
//!
//! Invoked with `{"action": "enable"}` or `{"action": "disable"}` and issues a
//! single `UpdateSchedule` call against the schedule named by the
//! `SCHEDULE_ARN` environment variable. Every outcome is returned as a
//! structured `{statusCode, body}` response; no retries are attempted.
//!
//! The execution role needs `scheduler:UpdateSchedule` scoped to the target
//! schedule, plus the standard CloudWatch Logs permissions
//! (`logs:CreateLogGroup`, `logs:CreateLogStream`, `logs:PutLogEvents`).

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{
    Action, Config, ScheduleArn, SchedulerService, ToggleRequest, ToggleResponse,
    UpdateScheduleState,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// State resolved once at cold start and shared across invocations.
///
/// `schedule` is `None` when the configured ARN could not be resolved; every
/// invocation then short-circuits to a configuration error without touching
/// the network.
struct AppState<C> {
    schedule: Option<ScheduleArn>,
    client: C,
}

impl AppState<SchedulerService> {
    async fn new() -> Self {
        let schedule = match Config::from_env() {
            Ok(config) => {
                info!(arn = %config.schedule_arn, "Loaded configuration");
                match ScheduleArn::parse(&config.schedule_arn) {
                    Ok(arn) => Some(arn),
                    Err(e) => {
                        error!(error = %e, "Could not parse schedule ARN");
                        None
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Could not load configuration");
                None
            }
        };

        Self {
            schedule,
            client: SchedulerService::new().await,
        }
    }
}

async fn handle<C: UpdateScheduleState>(
    state: &AppState<C>,
    request: ToggleRequest,
) -> ToggleResponse {
    info!(request = ?request, "Received toggle request");

    let Some(schedule) = &state.schedule else {
        error!("Schedule ARN was not resolved at startup; aborting");
        return ToggleResponse::error(500, "Configuration error: Could not parse schedule ARN");
    };

    let action = match Action::parse(request.action.as_ref()) {
        Ok(action) => action,
        Err(e) => {
            error!(error = %e, "Rejecting invalid action");
            return ToggleResponse::from(&e);
        }
    };

    let desired = action.desired_state();
    info!(
        schedule = %schedule.schedule_name,
        group = %schedule.group_name,
        state = desired.as_str(),
        "Updating schedule state"
    );

    match state
        .client
        .update_schedule_state(&schedule.group_name, &schedule.schedule_name, desired)
        .await
    {
        Ok(()) => {
            let message = format!(
                "Schedule {} in group {} {} successfully.",
                schedule.schedule_name,
                schedule.group_name,
                desired.past_tense()
            );
            info!("{}", message);
            ToggleResponse::message(200, message)
        }
        Err(e) => {
            let error_message = format!(
                "Error performing '{}' on schedule {} in group {}: {}",
                action.as_str(),
                schedule.schedule_name,
                schedule.group_name,
                e
            );
            error!("{}", error_message);
            ToggleResponse::error(500, error_message)
        }
    }
}

async fn handler<C: UpdateScheduleState>(
    state: Arc<AppState<C>>,
    event: LambdaEvent<ToggleRequest>,
) -> Result<ToggleResponse, Error> {
    Ok(handle(&state, event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await);
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}
