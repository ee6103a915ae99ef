mod consumer;
mod encryption_type;
mod put_record;
mod put_records;
mod register_stream_consumer;

pub use consumer::{Consumer, ConsumerStatus};
pub use encryption_type::EncryptionType;
pub use put_record::{PutRecordInput, PutRecordInputBuilder, PutRecordOutput};
pub use put_records::{
    PutRecordsInput, PutRecordsInputBuilder, PutRecordsOutput, PutRecordsRequestEntry,
    PutRecordsRequestEntryBuilder, PutRecordsResultEntry,
};
pub use register_stream_consumer::{
    RegisterStreamConsumerInput, RegisterStreamConsumerInputBuilder, RegisterStreamConsumerOutput,
};

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};
use std::borrow::Cow;
use validator::ValidationError;

fn serialize_blob<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
        None => serializer.serialize_none(),
    }
}

// Timestamps arrive as epoch seconds with an optional fractional part.
fn deserialize_epoch<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let value = f64::deserialize(deserializer)?;
    let (secs, nsecs) = split_epoch(value);
    DateTime::<Utc>::from_timestamp(secs, nsecs)
        .ok_or_else(|| de::Error::custom(format!("Invalid timestamp: {value}")))
}

// A fraction that rounds up to a whole second carries over.
fn split_epoch(value: f64) -> (i64, u32) {
    let secs = value.floor();
    let nsecs = ((value - secs) * 1_000_000_000.0).round() as u32;
    if nsecs >= 1_000_000_000 {
        (secs as i64 + 1, nsecs - 1_000_000_000)
    } else {
        (secs as i64, nsecs)
    }
}

fn validate_hash_key(value: &str) -> Result<(), ValidationError> {
    if is_decimal(value, 39) && value.parse::<u128>().is_ok() {
        Ok(())
    } else {
        Err(invalid("explicit_hash_key", "must be a decimal value in 0..2^128"))
    }
}

fn validate_sequence_number(value: &str) -> Result<(), ValidationError> {
    if is_decimal(value, 129) {
        Ok(())
    } else {
        Err(invalid("sequence_number", "must be a decimal sequence number"))
    }
}

fn is_decimal(value: &str, max_digits: usize) -> bool {
    !value.is_empty()
        && value.len() <= max_digits
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'))
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}
