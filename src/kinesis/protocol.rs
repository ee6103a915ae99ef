use super::{endpoint::EndpointMetadata, operation::Operation};
use crate::error::{Error, Result, ServiceError};
use crate::transport::{HttpRequest, HttpResponse};

use reqwest::{Method, Url};
use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const TARGET_PREFIX: &str = "Kinesis_20131202";

pub fn build_request<O: Operation>(input: &O, endpoint: &EndpointMetadata) -> Result<HttpRequest> {
    let url = Url::parse(&endpoint.endpoint)
        .map_err(|err| anyhow::anyhow!("Invalid endpoint `{}`: {err}", endpoint.endpoint))?;
    let body = serde_json::to_vec(input).map_err(Error::Serialize)?;

    Ok(HttpRequest::new(Method::POST, url)
        .header("content-type", CONTENT_TYPE)
        .header("x-amz-target", format!("{TARGET_PREFIX}.{}", O::NAME))
        .body(body))
}

pub fn parse_output<O: Operation>(response: &HttpResponse) -> Result<O::Output> {
    // Some operations answer with an empty body.
    let body: &[u8] = if response.body.is_empty() {
        b"{}"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(Error::Deserialize)
}

pub fn parse_error(response: &HttpResponse) -> ServiceError {
    let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);

    let from_header = response
        .get_header("x-amzn-errortype")
        .and_then(|value| value.split(':').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let from_type = string_field(&body, &["__type"]).and_then(|value| value.rsplit('#').next());
    let from_code = string_field(&body, &["code", "Code"]);

    let code = from_header
        .or(from_type)
        .or(from_code)
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP{}", response.status));

    ServiceError {
        code,
        message: string_field(&body, &["message", "Message"]).map(String::from),
        status: response.status,
        request_id: response.get_header("x-amzn-requestid").map(String::from),
    }
}

// First key holding a non-empty string wins.
fn string_field<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinesis::endpoint;
    use crate::kinesis::types::{PutRecordInput, RegisterStreamConsumerInput};

    #[test]
    fn it_builds_a_json_rpc_request() {
        let input = PutRecordInput::builder()
            .stream_name("People")
            .data("hi")
            .partition_key("pk")
            .build();
        let request = build_request(&input, &endpoint::resolve(Some("eu-west-1"))).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://kinesis.eu-west-1.amazonaws.com/");
        assert_eq!(request.headers.get("content-type").unwrap(), CONTENT_TYPE);
        assert_eq!(
            request.headers.get("x-amz-target").unwrap(),
            "Kinesis_20131202.PutRecord"
        );

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["StreamName"], "People");
        assert_eq!(body["Data"], "aGk=");
    }

    #[test]
    fn it_names_the_target_after_the_operation() {
        let input = RegisterStreamConsumerInput::builder()
            .stream_arn("arn")
            .consumer_name("reader")
            .build();
        let request = build_request(&input, &endpoint::resolve(None)).unwrap();
        assert_eq!(
            request.headers.get("x-amz-target").unwrap(),
            "Kinesis_20131202.RegisterStreamConsumer"
        );
    }

    #[test]
    fn it_rejects_an_invalid_endpoint() {
        let input = PutRecordInput::builder().build();
        let metadata = endpoint::resolve(None).with_endpoint("not a url");
        let result = build_request(&input, &metadata);
        assert!(matches!(result, Err(Error::Dispatch(_))));
    }

    #[test]
    fn it_parses_output() {
        let response = HttpResponse::new(200, r#"{"ShardId":"shardId-0","SequenceNumber":"1"}"#);
        let output = parse_output::<PutRecordInput>(&response).unwrap();
        assert_eq!(output.shard_id(), "shardId-0");

        let response = HttpResponse::new(200, "not json");
        let result = parse_output::<PutRecordInput>(&response);
        assert!(matches!(result, Err(Error::Deserialize(_))));
    }

    #[test]
    fn it_reads_the_error_code_from_the_header_first() {
        let response = HttpResponse::new(400, r#"{"__type":"Other","message":"body"}"#)
            .header(
                "X-Amzn-ErrorType",
                "ResourceNotFoundException:http://internal.amazon.com/coral/",
            )
            .header("x-amzn-RequestId", "req-1");
        let error = parse_error(&response);

        assert_eq!(error.code, "ResourceNotFoundException");
        assert_eq!(error.message.as_deref(), Some("body"));
        assert_eq!(error.status, 400);
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn it_reads_the_error_code_from_the_body() {
        let response = HttpResponse::new(
            400,
            r#"{"__type":"com.amazonaws.kinesis.v20131202#KMSOptInRequired","Message":"opt in"}"#,
        );
        let error = parse_error(&response);
        assert_eq!(error.code, "KMSOptInRequired");
        assert_eq!(error.message.as_deref(), Some("opt in"));

        let response = HttpResponse::new(400, r#"{"code":"LimitExceededException"}"#);
        assert_eq!(parse_error(&response).code, "LimitExceededException");
    }

    #[test]
    fn it_tolerates_duplicated_and_mistyped_keys() {
        let response = HttpResponse::new(
            400,
            r#"{"__type":"ResourceNotFoundException","message":"a","Message":"a"}"#,
        );
        let error = parse_error(&response);
        assert_eq!(error.code, "ResourceNotFoundException");
        assert_eq!(error.message.as_deref(), Some("a"));

        let response = HttpResponse::new(
            400,
            r#"{"code":42,"Code":"LimitExceededException","message":["x"],"Message":"busy"}"#,
        );
        let error = parse_error(&response);
        assert_eq!(error.code, "LimitExceededException");
        assert_eq!(error.message.as_deref(), Some("busy"));
    }

    #[test]
    fn it_falls_back_to_the_status_code() {
        let response = HttpResponse::new(503, "<html>Service Unavailable</html>");
        let error = parse_error(&response);
        assert_eq!(error.code, "HTTP503");
        assert!(error.message.is_none());
    }
}
