//! Signature Version 4 for JSON-RPC requests, backed by `aws-sigv4`.

use crate::error::{Error, Result};
use crate::transport::HttpRequest;

use aws_credential_types::Credentials;
use aws_sigv4::{
    http_request::{sign as sign_request, SignableBody, SignableRequest, SigningSettings},
    sign::v4,
};
use aws_smithy_runtime_api::client::identity::Identity;
use chrono::{DateTime, Utc};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct SigningParams<'a> {
    pub region: &'a str,
    pub service: &'a str,
    pub time: DateTime<Utc>,
}

/// Adds `x-amz-date`, the session token if any, and `authorization` to `request`.
pub fn sign(
    request: &mut HttpRequest,
    credentials: &Credentials,
    params: &SigningParams<'_>,
) -> Result<()> {
    let identity = Identity::new(credentials.clone(), credentials.expiry());
    let signing_params = v4::SigningParams::builder()
        .identity(&identity)
        .region(params.region)
        .name(params.service)
        .time(SystemTime::from(params.time))
        .settings(SigningSettings::default())
        .build()
        .map_err(|err| Error::Signing(format!("{err}")))?
        .into();

    let signable = SignableRequest::new(
        request.method.as_str(),
        request.url.as_str(),
        request
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
        SignableBody::Bytes(&request.body),
    )
    .map_err(|err| Error::Signing(format!("{err}")))?;

    let (instructions, _signature) = sign_request(signable, &signing_params)
        .map_err(|err| Error::Signing(format!("{err}")))?
        .into_parts();

    for (name, value) in instructions.headers() {
        request.set_header(name, value);
    }

    Ok(())
}
