//! Schedule ARN parsing.
//!
//! The configured ARN addresses one schedule. Everything after the last `:`
//! is the resource segment, either `group-name/schedule-name` or a bare
//! `schedule-name` (which implies the `default` group).

use crate::{Error, Result};

/// The (group, name) pair addressing one schedule, parsed once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleArn {
    pub group_name: String,
    pub schedule_name: String,
}

impl ScheduleArn {
    /// Parse a fully-qualified schedule ARN into group and schedule names.
    ///
    /// Splits on `:` and takes the last segment, then splits that on `/`:
    /// `group/name` yields both parts, a bare `name` implies the `default`
    /// group, anything else is malformed. Both parts must be non-empty.
    pub fn parse(arn: &str) -> Result<Self> {
        // rsplit always yields at least one segment; an ARN ending in `:`
        // produces an empty resource, caught by the non-empty check below.
        let resource = arn.rsplit(':').next().unwrap_or("");

        let parts: Vec<&str> = resource.split('/').collect();
        let (group_name, schedule_name) = match parts.as_slice() {
            [group, name] => (group.to_string(), name.to_string()),
            [name] => ("default".to_string(), name.to_string()),
            _ => {
                return Err(Error::Config(format!(
                    "Schedule ARN '{}' has an unexpected resource format",
                    arn
                )))
            }
        };

        if group_name.is_empty() || schedule_name.is_empty() {
            return Err(Error::Config(format!(
                "Schedule ARN '{}' has an empty group or schedule name",
                arn
            )));
        }

        Ok(Self {
            group_name,
            schedule_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_and_name() {
        let arn =
            ScheduleArn::parse("arn:aws:scheduler:us-east-1:123456789012:prod/nightly").unwrap();
        assert_eq!(arn.group_name, "prod");
        assert_eq!(arn.schedule_name, "nightly");
    }

    #[test]
    fn test_parse_bare_name_implies_default_group() {
        let arn =
            ScheduleArn::parse("arn:aws:scheduler:us-east-1:123456789012:nightly").unwrap();
        assert_eq!(arn.group_name, "default");
        assert_eq!(arn.schedule_name, "nightly");
    }

    #[test]
    fn test_parse_rejects_extra_path_segments() {
        let err = ScheduleArn::parse(
            "arn:aws:scheduler:us-east-1:123456789012:schedule/prod/nightly",
        )
        .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_parse_rejects_empty_resource() {
        assert!(ScheduleArn::parse("arn:aws:scheduler:us-east-1:123456789012:").is_err());
        assert!(ScheduleArn::parse("arn:aws:scheduler:us-east-1:123456789012:/nightly").is_err());
        assert!(ScheduleArn::parse("arn:aws:scheduler:us-east-1:123456789012:prod/").is_err());
    }
}
