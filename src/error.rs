mod validation;

use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

pub use validation::ValidationErrorContent;

pub type Result<T> = std::result::Result<T, Error>;

/// Details of an error response returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub code: String,
    pub message: Option<String>,
    pub status: u16,
    pub request_id: Option<String>,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.code, self.status)?;
        if let Some(message) = self.message.as_deref() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Error codes an operation may declare as recoverable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    InvalidArgument,
    KmsAccessDenied,
    KmsDisabled,
    KmsInvalidState,
    KmsNotFound,
    KmsOptInRequired,
    KmsThrottling,
    LimitExceeded,
    ProvisionedThroughputExceeded,
    ResourceInUse,
    ResourceNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgumentException",
            Self::KmsAccessDenied => "KMSAccessDeniedException",
            Self::KmsDisabled => "KMSDisabledException",
            Self::KmsInvalidState => "KMSInvalidStateException",
            Self::KmsNotFound => "KMSNotFoundException",
            // The service reports this one without the `Exception` suffix.
            Self::KmsOptInRequired => "KMSOptInRequired",
            Self::KmsThrottling => "KMSThrottlingException",
            Self::LimitExceeded => "LimitExceededException",
            Self::ProvisionedThroughputExceeded => "ProvisionedThroughputExceededException",
            Self::ResourceInUse => "ResourceInUseException",
            Self::ResourceNotFound => "ResourceNotFoundException",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = match code {
            "InvalidArgumentException" => Self::InvalidArgument,
            "KMSAccessDeniedException" => Self::KmsAccessDenied,
            "KMSDisabledException" => Self::KmsDisabled,
            "KMSInvalidStateException" => Self::KmsInvalidState,
            "KMSNotFoundException" => Self::KmsNotFound,
            "KMSOptInRequired" => Self::KmsOptInRequired,
            "KMSThrottlingException" => Self::KmsThrottling,
            "LimitExceededException" => Self::LimitExceeded,
            "ProvisionedThroughputExceededException" => Self::ProvisionedThroughputExceeded,
            "ResourceInUseException" => Self::ResourceInUse,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            _ => return None,
        };
        Some(code)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {}", validation::describe(.0))]
    Validation(ValidationErrors),
    #[error("Invalid argument: {0}")]
    InvalidArgument(ServiceError),
    #[error("KMS access denied: {0}")]
    KmsAccessDenied(ServiceError),
    #[error("KMS key disabled: {0}")]
    KmsDisabled(ServiceError),
    #[error("KMS key in invalid state: {0}")]
    KmsInvalidState(ServiceError),
    #[error("KMS key not found: {0}")]
    KmsNotFound(ServiceError),
    #[error("KMS opt-in required: {0}")]
    KmsOptInRequired(ServiceError),
    #[error("KMS throttled: {0}")]
    KmsThrottling(ServiceError),
    #[error("Limit exceeded: {0}")]
    LimitExceeded(ServiceError),
    #[error("Provisioned throughput exceeded: {0}")]
    ProvisionedThroughputExceeded(ServiceError),
    #[error("Resource in use: {0}")]
    ResourceInUse(ServiceError),
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),
    #[error("Unhandled service error: {0}")]
    Unhandled(ServiceError),
    #[error("Failed to resolve credentials: {0}")]
    Credentials(String),
    #[error("Failed to sign request: {0}")]
    Signing(String),
    #[error("Failed to dispatch request: {0}")]
    Dispatch(#[from] anyhow::Error),
    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl Error {
    /// Maps a service error to the typed variant when `declared` lists its code.
    pub fn from_service(error: ServiceError, declared: &[ErrorCode]) -> Error {
        let code = match ErrorCode::from_code(&error.code) {
            Some(code) if declared.contains(&code) => code,
            _ => return Error::Unhandled(error),
        };

        match code {
            ErrorCode::InvalidArgument => Error::InvalidArgument(error),
            ErrorCode::KmsAccessDenied => Error::KmsAccessDenied(error),
            ErrorCode::KmsDisabled => Error::KmsDisabled(error),
            ErrorCode::KmsInvalidState => Error::KmsInvalidState(error),
            ErrorCode::KmsNotFound => Error::KmsNotFound(error),
            ErrorCode::KmsOptInRequired => Error::KmsOptInRequired(error),
            ErrorCode::KmsThrottling => Error::KmsThrottling(error),
            ErrorCode::LimitExceeded => Error::LimitExceeded(error),
            ErrorCode::ProvisionedThroughputExceeded => Error::ProvisionedThroughputExceeded(error),
            ErrorCode::ResourceInUse => Error::ResourceInUse(error),
            ErrorCode::ResourceNotFound => Error::ResourceNotFound(error),
        }
    }

    pub fn service(&self) -> Option<&ServiceError> {
        match self {
            Self::InvalidArgument(e)
            | Self::KmsAccessDenied(e)
            | Self::KmsDisabled(e)
            | Self::KmsInvalidState(e)
            | Self::KmsNotFound(e)
            | Self::KmsOptInRequired(e)
            | Self::KmsThrottling(e)
            | Self::LimitExceeded(e)
            | Self::ProvisionedThroughputExceeded(e)
            | Self::ResourceInUse(e)
            | Self::ResourceNotFound(e)
            | Self::Unhandled(e) => Some(e),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.service().map(|e| e.code.as_str())
    }

    pub fn validation_errors(&self) -> Vec<ValidationErrorContent> {
        match self {
            Self::Validation(errors) => ValidationErrorContent::from_errors(errors),
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(code: &str) -> ServiceError {
        ServiceError {
            code: code.into(),
            message: Some("boom".into()),
            status: 400,
            request_id: None,
        }
    }

    #[test]
    fn it_round_trips_every_error_code() {
        let codes = [
            ErrorCode::InvalidArgument,
            ErrorCode::KmsAccessDenied,
            ErrorCode::KmsDisabled,
            ErrorCode::KmsInvalidState,
            ErrorCode::KmsNotFound,
            ErrorCode::KmsOptInRequired,
            ErrorCode::KmsThrottling,
            ErrorCode::LimitExceeded,
            ErrorCode::ProvisionedThroughputExceeded,
            ErrorCode::ResourceInUse,
            ErrorCode::ResourceNotFound,
        ];

        for code in codes {
            assert_eq!(ErrorCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::from_code("KMSOptInRequiredException"), None);
    }

    #[test]
    fn it_maps_declared_codes_to_typed_variants() {
        let declared = [ErrorCode::ResourceNotFound, ErrorCode::KmsOptInRequired];

        let err = Error::from_service(service_error("ResourceNotFoundException"), &declared);
        assert!(matches!(err, Error::ResourceNotFound(_)));

        let err = Error::from_service(service_error("KMSOptInRequired"), &declared);
        assert!(matches!(err, Error::KmsOptInRequired(_)));
        assert_eq!(err.code(), Some("KMSOptInRequired"));
    }

    #[test]
    fn it_maps_undeclared_codes_to_unhandled() {
        let declared = [ErrorCode::ResourceNotFound];

        let err = Error::from_service(service_error("LimitExceededException"), &declared);
        assert!(matches!(err, Error::Unhandled(_)));

        let err = Error::from_service(service_error("InternalFailure"), &declared);
        assert!(matches!(err, Error::Unhandled(_)));
        assert_eq!(
            format!("{err}"),
            "Unhandled service error: InternalFailure (HTTP 400): boom"
        );
    }
}
