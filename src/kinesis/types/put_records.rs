use super::{serialize_blob, validate_hash_key, EncryptionType};
use crate::error::ErrorCode;
use crate::kinesis::operation::Operation;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Writes multiple data records into a data stream in a single call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsInput {
    #[validate(length(min = 1, max = 500))]
    #[validate]
    records: Vec<PutRecordsRequestEntry>,

    #[validate(required, length(min = 1, max = 128))]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_name: Option<String>,

    #[serde(skip)]
    region: Option<String>,
}

impl PutRecordsInput {
    pub fn builder() -> PutRecordsInputBuilder {
        PutRecordsInputBuilder::default()
    }

    pub fn records(&self) -> &[PutRecordsRequestEntry] {
        self.records.as_slice()
    }

    pub fn stream_name(&self) -> Option<&str> {
        self.stream_name.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct PutRecordsInputBuilder {
    input: PutRecordsInput,
}

impl PutRecordsInputBuilder {
    pub fn record(mut self, entry: PutRecordsRequestEntry) -> Self {
        self.input.records.push(entry);
        self
    }

    pub fn records<T: IntoIterator<Item = PutRecordsRequestEntry>>(mut self, entries: T) -> Self {
        self.input.records.extend(entries);
        self
    }

    pub fn stream_name<T: Into<String>>(mut self, stream_name: T) -> Self {
        self.input.stream_name = Some(stream_name.into());
        self
    }

    pub fn region<T: Into<String>>(mut self, region: T) -> Self {
        self.input.region = Some(region.into());
        self
    }

    pub fn build(self) -> PutRecordsInput {
        self.input
    }
}

impl Operation for PutRecordsInput {
    const NAME: &'static str = "PutRecords";
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

    type Output = PutRecordsOutput;

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsRequestEntry {
    #[validate(required, length(max = 1048576))]
    #[serde(serialize_with = "serialize_blob", skip_serializing_if = "Option::is_none")]
    data: Option<Vec<u8>>,

    #[validate(custom = "validate_hash_key")]
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_hash_key: Option<String>,

    #[validate(required, length(min = 1, max = 256))]
    #[serde(skip_serializing_if = "Option::is_none")]
    partition_key: Option<String>,
}

impl PutRecordsRequestEntry {
    pub fn builder() -> PutRecordsRequestEntryBuilder {
        PutRecordsRequestEntryBuilder::default()
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn explicit_hash_key(&self) -> Option<&str> {
        self.explicit_hash_key.as_deref()
    }

    pub fn partition_key(&self) -> Option<&str> {
        self.partition_key.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct PutRecordsRequestEntryBuilder {
    entry: PutRecordsRequestEntry,
}

impl PutRecordsRequestEntryBuilder {
    pub fn data<T: Into<Vec<u8>>>(mut self, data: T) -> Self {
        self.entry.data = Some(data.into());
        self
    }

    pub fn explicit_hash_key<T: Into<String>>(mut self, explicit_hash_key: T) -> Self {
        self.entry.explicit_hash_key = Some(explicit_hash_key.into());
        self
    }

    pub fn partition_key<T: Into<String>>(mut self, partition_key: T) -> Self {
        self.entry.partition_key = Some(partition_key.into());
        self
    }

    pub fn build(self) -> PutRecordsRequestEntry {
        self.entry
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsOutput {
    #[serde(default)]
    failed_record_count: Option<i64>,
    #[serde(default)]
    records: Vec<PutRecordsResultEntry>,
    #[serde(default)]
    encryption_type: Option<EncryptionType>,
}

impl PutRecordsOutput {
    pub fn failed_record_count(&self) -> Option<i64> {
        self.failed_record_count
    }

    /// Result entries in the same order as the request's records.
    pub fn records(&self) -> &[PutRecordsResultEntry] {
        self.records.as_slice()
    }

    pub fn encryption_type(&self) -> Option<&EncryptionType> {
        self.encryption_type.as_ref()
    }

    /// Failed entries paired with the index of the request record they belong to.
    pub fn failed(&self) -> impl Iterator<Item = (usize, &PutRecordsResultEntry)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_success())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsResultEntry {
    #[serde(default)]
    sequence_number: Option<String>,
    #[serde(default)]
    shard_id: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

impl PutRecordsResultEntry {
    pub fn sequence_number(&self) -> Option<&str> {
        self.sequence_number.as_deref()
    }

    pub fn shard_id(&self) -> Option<&str> {
        self.shard_id.as_deref()
    }

    /// `ProvisionedThroughputExceededException` or `InternalFailure` for a rejected record.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.error_code.is_none()
    }
}
