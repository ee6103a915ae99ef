use super::Consumer;
use crate::error::ErrorCode;
use crate::kinesis::operation::Operation;

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use validator::Validate;

/// Registers a consumer with a data stream.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterStreamConsumerInput {
    #[validate(required, length(min = 1, max = 2048))]
    stream_arn: Option<String>,

    #[validate(required, length(min = 1, max = 128))]
    consumer_name: Option<String>,

    region: Option<String>,
}

// Written by hand so validation errors keep the field names.
impl Serialize for RegisterStreamConsumerInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.stream_arn.iter().count() + self.consumer_name.iter().count();
        let mut state = serializer.serialize_struct("RegisterStreamConsumerInput", len)?;
        if let Some(stream_arn) = &self.stream_arn {
            state.serialize_field("StreamARN", stream_arn)?;
        }
        if let Some(consumer_name) = &self.consumer_name {
            state.serialize_field("ConsumerName", consumer_name)?;
        }
        state.end()
    }
}

impl RegisterStreamConsumerInput {
    pub fn builder() -> RegisterStreamConsumerInputBuilder {
        RegisterStreamConsumerInputBuilder::default()
    }

    pub fn stream_arn(&self) -> Option<&str> {
        self.stream_arn.as_deref()
    }

    pub fn consumer_name(&self) -> Option<&str> {
        self.consumer_name.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct RegisterStreamConsumerInputBuilder {
    input: RegisterStreamConsumerInput,
}

impl RegisterStreamConsumerInputBuilder {
    pub fn stream_arn<T: Into<String>>(mut self, stream_arn: T) -> Self {
        self.input.stream_arn = Some(stream_arn.into());
        self
    }

    pub fn consumer_name<T: Into<String>>(mut self, consumer_name: T) -> Self {
        self.input.consumer_name = Some(consumer_name.into());
        self
    }

    pub fn region<T: Into<String>>(mut self, region: T) -> Self {
        self.input.region = Some(region.into());
        self
    }

    pub fn build(self) -> RegisterStreamConsumerInput {
        self.input
    }
}

impl Operation for RegisterStreamConsumerInput {
    const NAME: &'static str = "RegisterStreamConsumer";
    const ERRORS: &'static [ErrorCode] = &[
        ErrorCode::InvalidArgument,
        ErrorCode::LimitExceeded,
        ErrorCode::ResourceInUse,
        ErrorCode::ResourceNotFound,
    ];

    type Output = RegisterStreamConsumerOutput;

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterStreamConsumerOutput {
    consumer: Consumer,
}

impl RegisterStreamConsumerOutput {
    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    pub fn into_consumer(self) -> Consumer {
        self.consumer
    }
}
