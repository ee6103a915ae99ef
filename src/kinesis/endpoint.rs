pub const DEFAULT_REGION: &str = "us-east-1";
pub const SIGN_SERVICE: &str = "kinesis";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMetadata {
    pub endpoint: String,
    pub sign_region: String,
    pub sign_service: &'static str,
    pub sign_versions: &'static [&'static str],
}

impl EndpointMetadata {
    fn new<E: Into<String>, R: Into<String>>(endpoint: E, sign_region: R) -> Self {
        Self {
            endpoint: endpoint.into(),
            sign_region: sign_region.into(),
            sign_service: SIGN_SERVICE,
            sign_versions: &["v4"],
        }
    }

    /// Replaces the URL while keeping the signing parameters of the region.
    pub fn with_endpoint<E: Into<String>>(self, endpoint: E) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self
        }
    }
}

/// Looks up the endpoint and signing parameters for `region`, falling back to
/// [`DEFAULT_REGION`] when none is given.
pub fn resolve(region: Option<&str>) -> EndpointMetadata {
    let region = region.unwrap_or(DEFAULT_REGION);

    match region {
        "cn-north-1" | "cn-northwest-1" => {
            EndpointMetadata::new(format!("https://kinesis.{region}.amazonaws.com.cn"), region)
        }
        "us-iso-east-1" => {
            EndpointMetadata::new(format!("https://kinesis.{region}.c2s.ic.gov"), region)
        }
        "us-isob-east-1" => {
            EndpointMetadata::new(format!("https://kinesis.{region}.sc2s.sgov.gov"), region)
        }
        "fips-us-east-1" | "fips-us-east-2" | "fips-us-west-1" | "fips-us-west-2" => {
            let sign_region = &region["fips-".len()..];
            EndpointMetadata::new(
                format!("https://kinesis-fips.{sign_region}.amazonaws.com"),
                sign_region,
            )
        }
        _ => EndpointMetadata::new(format!("https://kinesis.{region}.amazonaws.com"), region),
    }
}
