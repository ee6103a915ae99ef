use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// The encryption type used on the records.
///
/// - `NONE`: Do not encrypt the records.
/// - `KMS`: Use server-side encryption on the records using a customer-managed KMS key.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EncryptionType {
    Kms,
    None,
    Unknown(String),
}

impl EncryptionType {
    pub const KMS: &'static str = "KMS";
    pub const NONE: &'static str = "NONE";

    pub fn exists(value: &str) -> bool {
        matches!(value, Self::KMS | Self::NONE)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Kms => Self::KMS,
            Self::None => Self::NONE,
            Self::Unknown(value) => value.as_str(),
        }
    }
}

impl From<&str> for EncryptionType {
    fn from(value: &str) -> EncryptionType {
        match value {
            Self::KMS => EncryptionType::Kms,
            Self::NONE => EncryptionType::None,
            other => EncryptionType::Unknown(other.to_string()),
        }
    }
}

impl FromStr for EncryptionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if Self::exists(value) {
            Ok(EncryptionType::from(value))
        } else {
            Err(format!("Invalid encryption type: `{value}`"))
        }
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for EncryptionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EncryptionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(EncryptionType::from(value.as_str()))
    }
}
