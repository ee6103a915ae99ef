use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub stream_name: Option<String>,
    pub stream_arn: Option<String>,
    pub consumer_name: Option<String>,
}

impl ConfigFile {
    /// A missing or malformed file is logged and treated as empty.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                warn!("Skip reading config file. {err:#}");
                Self::default()
            }
        }
    }

    fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_loads_config() {
        let config = ConfigFile::load(Path::new("src/config/test/valid.yml")).unwrap();
        assert_eq!(
            config,
            ConfigFile {
                region: Some("ap-northeast-1".into()),
                endpoint_url: Some("http://localhost:4567".into()),
                stream_name: Some("People".into()),
                stream_arn: Some(
                    "arn:aws:kinesis:ap-northeast-1:000000000000:stream/People".into()
                ),
                consumer_name: Some("reader".into()),
            }
        );
    }

    #[test]
    fn it_returns_err_if_the_file_does_not_exist() {
        let err = ConfigFile::load(Path::new("src/config/test/non-exist.yml")).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Failed to read src/config/test/non-exist.yml: No such file or directory (os error 2)"
        );
    }

    #[test]
    fn it_returns_err_if_the_file_is_invalid() {
        let err = ConfigFile::load(Path::new("src/config/test/invalid.yml")).unwrap_err();
        assert_eq!(format!("{err}"), "Invalid config file src/config/test/invalid.yml");
        assert!(err.root_cause().to_string().starts_with("unknown field `stream`"));
    }

    #[test]
    fn it_skips_an_unreadable_file() {
        let config = ConfigFile::new(Some("src/config/test/non-exist.yml"));
        assert_eq!(config, ConfigFile::default());

        let config = ConfigFile::new(Some("src/config/test/invalid.yml"));
        assert_eq!(config, ConfigFile::default());

        assert_eq!(ConfigFile::new(None::<&str>), ConfigFile::default());
    }
}
