//! Typed client for the Kinesis data streaming service.
//!
//! Supports `PutRecord`, `PutRecords` and `RegisterStreamConsumer` over the
//! JSON-RPC protocol, signed with Signature Version 4.
//!
//! ```rust,no_run
//! use kinesis_client::{types::PutRecordInput, KinesisClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = KinesisClient::builder().await.build();
//!     let input = PutRecordInput::builder()
//!         .stream_name("People")
//!         .data("hello")
//!         .partition_key("greeting")
//!         .build();
//!
//!     match client.put_record(input).await {
//!         Ok(output) => println!("stored in {}", output.shard_id()),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

mod config;
pub mod error;
mod kinesis;
pub mod transport;

pub use config::Config;
pub use error::{Error, ErrorCode, Result, ServiceError};
pub use kinesis::{client, endpoint, types, KinesisClient, KinesisClientBuilder, Operation};

pub const ENV_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";
pub const ENV_REGION: &str = "KINESIS_REGION";
pub const ENV_CONFIG_PATH: &str = "KINESIS_CONFIG_PATH";
