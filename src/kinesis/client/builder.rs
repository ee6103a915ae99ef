use super::KinesisClient;
use crate::config::Config;
use crate::transport::{ReqwestTransport, Transport};

use aws_config::SdkConfig;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use std::sync::Arc;

#[derive(Default)]
pub struct KinesisClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    credentials: Option<SharedCredentialsProvider>,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl KinesisClientBuilder {
    /// Seeds region, credentials and endpoint from the environment's AWS configuration.
    pub async fn new() -> Self {
        let config = aws_config::load_from_env().await;
        Self::from_sdk_config(&config)
    }

    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self {
            transport: None,
            credentials: config.credentials_provider().map(|provider| provider.clone()),
            region: config.region().map(|region| region.to_string()),
            endpoint_url: config.endpoint_url().map(String::from),
        }
    }

    /// Applies the values set in `config`, leaving the others untouched.
    pub fn config(self, config: &Config) -> Self {
        let Self {
            transport,
            credentials,
            region,
            endpoint_url,
        } = self;

        Self {
            transport,
            credentials,
            region: config.region().or(region),
            endpoint_url: config.endpoint_url().or(endpoint_url),
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                endpoint_url: Some(url),
                ..self
            },
            None => self,
        }
    }

    pub fn region(self, region: Option<String>) -> Self {
        match region {
            Some(region) => Self {
                region: Some(region),
                ..self
            },
            None => self,
        }
    }

    pub fn credentials_provider<P: ProvideCredentials + 'static>(self, provider: P) -> Self {
        Self {
            credentials: Some(SharedCredentialsProvider::new(provider)),
            ..self
        }
    }

    pub fn transport<T: Transport + 'static>(self, transport: T) -> Self {
        Self {
            transport: Some(Arc::new(transport)),
            ..self
        }
    }

    pub fn build(self) -> KinesisClient {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::default()));

        KinesisClient {
            transport,
            credentials: self.credentials,
            region: self.region,
            endpoint_url: self.endpoint_url,
        }
    }
}
