use crate::{ENV_CONFIG_PATH, ENV_ENDPOINT_URL, ENV_REGION};

use std::env;

mod file;

use file::ConfigFile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    endpoint_url: Option<String>,
    region: Option<String>,
    stream_name: Option<String>,
    stream_arn: Option<String>,
    consumer_name: Option<String>,
}

impl Config {
    /// Environment variables take precedence over the config file.
    pub fn new() -> Self {
        let conf_path = env::var(ENV_CONFIG_PATH).ok();
        let file = ConfigFile::new(conf_path);

        Self::merge(
            env::var(ENV_ENDPOINT_URL).ok(),
            env::var(ENV_REGION).ok(),
            file,
        )
    }

    fn merge(endpoint_url: Option<String>, region: Option<String>, file: ConfigFile) -> Self {
        Self {
            endpoint_url: endpoint_url.or(file.endpoint_url),
            region: region.or(file.region),
            stream_name: file.stream_name,
            stream_arn: file.stream_arn,
            consumer_name: file.consumer_name,
        }
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn region(&self) -> Option<String> {
        self.region.clone()
    }

    pub fn stream_name(&self) -> Option<String> {
        self.stream_name.clone()
    }

    pub fn stream_arn(&self) -> Option<String> {
        self.stream_arn.clone()
    }

    pub fn consumer_name(&self) -> Option<String> {
        self.consumer_name.clone()
    }
}
