use super::{serialize_blob, validate_hash_key, validate_sequence_number, EncryptionType};
use crate::error::ErrorCode;
use crate::kinesis::operation::Operation;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Writes a single data record into a data stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordInput {
    #[validate(required, length(min = 1, max = 128))]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_name: Option<String>,

    #[validate(required, length(max = 1048576))]
    #[serde(serialize_with = "serialize_blob", skip_serializing_if = "Option::is_none")]
    data: Option<Vec<u8>>,

    #[validate(required, length(min = 1, max = 256))]
    #[serde(skip_serializing_if = "Option::is_none")]
    partition_key: Option<String>,

    #[validate(custom = "validate_hash_key")]
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_hash_key: Option<String>,

    #[validate(custom = "validate_sequence_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence_number_for_ordering: Option<String>,

    #[serde(skip)]
    region: Option<String>,
}

impl PutRecordInput {
    pub fn builder() -> PutRecordInputBuilder {
        PutRecordInputBuilder::default()
    }

    pub fn stream_name(&self) -> Option<&str> {
        self.stream_name.as_deref()
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn partition_key(&self) -> Option<&str> {
        self.partition_key.as_deref()
    }

    pub fn explicit_hash_key(&self) -> Option<&str> {
        self.explicit_hash_key.as_deref()
    }

    pub fn sequence_number_for_ordering(&self) -> Option<&str> {
        self.sequence_number_for_ordering.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct PutRecordInputBuilder {
    input: PutRecordInput,
}

impl PutRecordInputBuilder {
    pub fn stream_name<T: Into<String>>(mut self, stream_name: T) -> Self {
        self.input.stream_name = Some(stream_name.into());
        self
    }

    pub fn data<T: Into<Vec<u8>>>(mut self, data: T) -> Self {
        self.input.data = Some(data.into());
        self
    }

    pub fn partition_key<T: Into<String>>(mut self, partition_key: T) -> Self {
        self.input.partition_key = Some(partition_key.into());
        self
    }

    pub fn explicit_hash_key<T: Into<String>>(mut self, explicit_hash_key: T) -> Self {
        self.input.explicit_hash_key = Some(explicit_hash_key.into());
        self
    }

    /// Guarantees strictly increasing sequence numbers for puts from the same
    /// client and to the same partition key.
    pub fn sequence_number_for_ordering<T: Into<String>>(mut self, sequence_number: T) -> Self {
        self.input.sequence_number_for_ordering = Some(sequence_number.into());
        self
    }

    pub fn region<T: Into<String>>(mut self, region: T) -> Self {
        self.input.region = Some(region.into());
        self
    }

    pub fn build(self) -> PutRecordInput {
        self.input
    }
}

impl Operation for PutRecordInput {
    const NAME: &'static str = "PutRecord";
    const ERRORS: &'static [ErrorCode] = &[
        ErrorCode::ResourceNotFound,
        ErrorCode::InvalidArgument,
        ErrorCode::ProvisionedThroughputExceeded,
        ErrorCode::KmsDisabled,
        ErrorCode::KmsInvalidState,
        ErrorCode::KmsAccessDenied,
        ErrorCode::KmsNotFound,
        ErrorCode::KmsOptInRequired,
        ErrorCode::KmsThrottling,
    ];

    type Output = PutRecordOutput;

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordOutput {
    shard_id: String,
    sequence_number: String,
    #[serde(default)]
    encryption_type: Option<EncryptionType>,
}

impl PutRecordOutput {
    /// The shard ID of the shard where the data record was placed.
    pub fn shard_id(&self) -> &str {
        self.shard_id.as_str()
    }

    pub fn sequence_number(&self) -> &str {
        self.sequence_number.as_str()
    }

    pub fn encryption_type(&self) -> Option<&EncryptionType> {
        self.encryption_type.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_serializes_to_the_wire_shape() {
        let input = PutRecordInput::builder()
            .stream_name("People")
            .data("hello")
            .partition_key("pk")
            .explicit_hash_key("42")
            .region("eu-west-1")
            .build();

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "StreamName": "People",
                "Data": "aGVsbG8=",
                "PartitionKey": "pk",
                "ExplicitHashKey": "42",
            })
        );
        assert_eq!(Operation::region(&input), Some("eu-west-1"));
    }

    #[test]
    fn it_requires_stream_name_data_and_partition_key() {
        let input = PutRecordInput::builder().build();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("stream_name"));
        assert!(fields.contains_key("data"));
        assert!(fields.contains_key("partition_key"));
        assert!(!fields.contains_key("explicit_hash_key"));
    }

    #[test]
    fn it_rejects_oversized_fields() {
        let input = PutRecordInput::builder()
            .stream_name("s".repeat(129))
            .data(vec![0u8; 1024 * 1024 + 1])
            .partition_key("pk")
            .sequence_number_for_ordering("01")
            .build();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("stream_name"));
        assert!(fields.contains_key("data"));
        assert!(fields.contains_key("sequence_number_for_ordering"));
        assert!(!fields.contains_key("partition_key"));
    }

    #[test]
    fn it_deserializes_output() {
        let body = r#"{"ShardId":"shardId-000000000001","SequenceNumber":"4954","EncryptionType":"KMS"}"#;
        let output: PutRecordOutput = serde_json::from_str(body).unwrap();

        assert_eq!(output.shard_id(), "shardId-000000000001");
        assert_eq!(output.sequence_number(), "4954");
        assert_eq!(output.encryption_type(), Some(&EncryptionType::Kms));

        let body = r#"{"ShardId":"shardId-000000000001","SequenceNumber":"4954"}"#;
        let output: PutRecordOutput = serde_json::from_str(body).unwrap();
        assert!(output.encryption_type().is_none());
    }
}
