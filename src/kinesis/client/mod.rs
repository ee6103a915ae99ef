mod builder;

use super::{
    endpoint,
    operation::Operation,
    protocol,
    signer::{self, SigningParams},
    types::{
        PutRecordInput, PutRecordOutput, PutRecordsInput, PutRecordsOutput,
        RegisterStreamConsumerInput, RegisterStreamConsumerOutput,
    },
};
use crate::error::{Error, Result};
use crate::transport::Transport;

use aws_credential_types::{
    provider::{ProvideCredentials, SharedCredentialsProvider},
    Credentials,
};
use chrono::Utc;
use std::{fmt, sync::Arc};
use tracing::{debug, warn};
use validator::Validate;

pub use builder::KinesisClientBuilder;

#[derive(Clone)]
pub struct KinesisClient {
    transport: Arc<dyn Transport>,
    credentials: Option<SharedCredentialsProvider>,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl fmt::Debug for KinesisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KinesisClient")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish_non_exhaustive()
    }
}

impl KinesisClient {
    pub async fn builder() -> KinesisClientBuilder {
        KinesisClientBuilder::new().await
    }

    /// Writes a single data record into a data stream.
    ///
    /// Each shard supports writes up to 1,000 records per second, up to a
    /// maximum data write total of 1 MiB per second.
    pub async fn put_record(&self, input: PutRecordInput) -> Result<PutRecordOutput> {
        self.send(input).await
    }

    /// Writes up to 500 records into a data stream in a single call.
    ///
    /// A successful call may still contain failed records; check
    /// [`PutRecordsOutput::failed`] and resubmit those.
    pub async fn put_records(&self, input: PutRecordsInput) -> Result<PutRecordsOutput> {
        self.send(input).await
    }

    /// Registers a consumer with a data stream for enhanced fan-out reads.
    pub async fn register_stream_consumer(
        &self,
        input: RegisterStreamConsumerInput,
    ) -> Result<RegisterStreamConsumerOutput> {
        self.send(input).await
    }

    async fn send<O: Operation>(&self, input: O) -> Result<O::Output> {
        input.validate().map_err(Error::Validation)?;

        let region = input.region().or(self.region.as_deref());
        let mut endpoint = endpoint::resolve(region);
        if let Some(url) = self.endpoint_url.as_deref() {
            endpoint = endpoint.with_endpoint(url);
        }

        let mut request = protocol::build_request(&input, &endpoint)?;
        let credentials = self.credentials().await?;
        signer::sign(
            &mut request,
            &credentials,
            &SigningParams {
                region: &endpoint.sign_region,
                service: endpoint.sign_service,
                time: Utc::now(),
            },
        )?;

        debug!(
            operation = O::NAME,
            endpoint = endpoint.endpoint.as_str(),
            "Sending request"
        );
        let response = self.transport.send(request).await?;

        if response.is_success() {
            protocol::parse_output::<O>(&response)
        } else {
            let error = protocol::parse_error(&response);
            warn!("{} operation failed due to {error}", O::NAME);
            Err(Error::from_service(error, O::ERRORS))
        }
    }

    async fn credentials(&self) -> Result<Credentials> {
        let provider = self
            .credentials
            .as_ref()
            .ok_or_else(|| Error::Credentials("No credentials provider is configured".into()))?;

        provider
            .provide_credentials()
            .await
            .map_err(|err| Error::Credentials(format!("{err}")))
    }
}
