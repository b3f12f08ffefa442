//! AWS regions offered in the provisioning dialog.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`AwsRegion`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The input matches neither a region code nor a display label.
    #[error("unknown AWS region: {0}")]
    Unknown(String),
}

/// An AWS region the user can pick in the dialog.
///
/// The dialog submits the display label as the option value, so both the
/// label and the region code parse.
///
/// ```
/// use iad_core::AwsRegion;
///
/// let region: AwsRegion = "US East (Ohio) Region".parse().unwrap();
/// assert_eq!(region, AwsRegion::UsEast2);
/// assert_eq!(region.code(), "us-east-2");
/// assert_eq!("us-west-2".parse::<AwsRegion>().unwrap(), AwsRegion::UsWest2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwsRegion {
    /// US West (Northern California).
    #[serde(rename = "us-west-1")]
    UsWest1,
    /// US East (Ohio).
    #[serde(rename = "us-east-2")]
    UsEast2,
    /// US West (Oregon).
    #[serde(rename = "us-west-2")]
    UsWest2,
}

impl AwsRegion {
    /// Every region, in dialog order.
    pub const ALL: [Self; 3] = [Self::UsWest1, Self::UsEast2, Self::UsWest2];

    /// AWS region code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UsWest1 => "us-west-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest2 => "us-west-2",
        }
    }

    /// Label shown in the dialog.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsWest1 => "US West (Northern California) Region",
            Self::UsEast2 => "US East (Ohio) Region",
            Self::UsWest2 => "US West (Oregon) Region",
        }
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AwsRegion {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code() == s || region.label() == s)
            .ok_or_else(|| RegionError::Unknown(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_code() {
        for region in AwsRegion::ALL {
            assert_eq!(region.label().parse::<AwsRegion>().unwrap(), region);
            assert_eq!(region.code().parse::<AwsRegion>().unwrap(), region);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "eu-central-1".parse::<AwsRegion>().unwrap_err();
        assert_eq!(err, RegionError::Unknown("eu-central-1".to_string()));
        assert_eq!(err.to_string(), "unknown AWS region: eu-central-1");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(AwsRegion::UsWest1.to_string(), "us-west-1");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&AwsRegion::UsEast2).unwrap();
        assert_eq!(json, "\"us-east-2\"");
    }
}
