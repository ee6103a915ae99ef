use super::deserialize_epoch;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// An object that represents the details of a registered consumer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Consumer {
    #[serde(rename = "ConsumerName")]
    name: String,
    #[serde(rename = "ConsumerARN")]
    arn: String,
    #[serde(rename = "ConsumerStatus")]
    status: ConsumerStatus,
    #[serde(rename = "ConsumerCreationTimestamp", deserialize_with = "deserialize_epoch")]
    creation_timestamp: DateTime<Utc>,
}

impl Consumer {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Needed to subscribe to shards of the stream with enhanced fan-out.
    pub fn arn(&self) -> &str {
        self.arn.as_str()
    }

    pub fn status(&self) -> &ConsumerStatus {
        &self.status
    }

    pub fn creation_timestamp(&self) -> DateTime<Utc> {
        self.creation_timestamp
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConsumerStatus {
    Active,
    Creating,
    Deleting,
    Unknown(String),
}

impl ConsumerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Creating => "CREATING",
            Self::Deleting => "DELETING",
            Self::Unknown(value) => value.as_str(),
        }
    }
}

impl From<&str> for ConsumerStatus {
    fn from(value: &str) -> ConsumerStatus {
        match value {
            "ACTIVE" => ConsumerStatus::Active,
            "CREATING" => ConsumerStatus::Creating,
            "DELETING" => ConsumerStatus::Deleting,
            other => ConsumerStatus::Unknown(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ConsumerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ConsumerStatus::from(value.as_str()))
    }
}
