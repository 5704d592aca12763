/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::params::QueryParams;
use crate::QueryWriter;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Uri};
use smithy_http::body::SdkBody;
use smithy_http::endpoint::Endpoint;
use smithy_http::operation::BuildError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A marshalled query protocol request.
///
/// The request starts out addressed to `/` with its `Action` and `Version` set. Parameters can be
/// inspected and overridden before it is turned into an HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    method: Method,
    uri: Uri,
    params: QueryParams,
}

impl QueryRequest {
    pub fn new(action: &str, version: &str) -> Self {
        let mut params = QueryParams::new();
        params.insert("Action", action);
        params.insert("Version", version);
        QueryRequest {
            method: Method::POST,
            uri: Uri::from_static("/"),
            params,
        }
    }

    pub fn action(&self) -> Option<&str> {
        self.params.get("Action")
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets a parameter, replacing any value already written under `name`.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let previous = self.params.insert(name.clone(), value);
        if let Some(previous) = &previous {
            tracing::trace!(name = %name, previous = %previous, "replaced query parameter");
        }
        previous
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn parameters(&self) -> &QueryParams {
        &self.params
    }

    pub fn writer(&mut self) -> QueryWriter<'_> {
        QueryWriter::new(&mut self.params)
    }

    pub fn set_endpoint(&mut self, endpoint: &Endpoint) -> Result<(), BuildError> {
        endpoint.set_endpoint(&mut self.uri)
    }

    /// Form-encodes the parameters into the body of an HTTP request.
    pub fn into_http_request(self) -> Result<http::Request<SdkBody>, BuildError> {
        let body = self.params.to_form_body();
        tracing::debug!(
            action = ?self.params.get("Action"),
            content_length = body.len(),
            "encoded query request"
        );
        let request = http::Request::builder()
            .method(self.method)
            .uri(self.uri)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, body.len())
            .body(SdkBody::from(body))?;
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::QueryRequest;
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;
    use smithy_http::endpoint::Endpoint;

    #[test]
    fn new_request_has_action_and_version() {
        let request = QueryRequest::new("DescribeRegions", "2016-11-15");
        assert_eq!(request.action(), Some("DescribeRegions"));
        assert_eq!(request.parameter("Version"), Some("2016-11-15"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
    }

    #[test]
    fn add_parameter_overrides() {
        let mut request = QueryRequest::new("CreateVpc", "2016-11-15");
        request.writer().prefix("DryRun").boolean(false);
        assert_eq!(
            request.add_parameter("DryRun", "true"),
            Some("false".to_owned())
        );
        assert_eq!(request.parameter("DryRun"), Some("true"));
        assert_eq!(request.parameters().len(), 3);
    }

    #[test]
    fn into_http_request() {
        let mut request = QueryRequest::new("DescribeRegions", "2016-11-15");
        request.add_parameter("AllRegions", "true");
        request
            .set_endpoint(&Endpoint::immutable(Uri::from_static(
                "https://ec2.us-west-2.amazonaws.com",
            )))
            .expect("valid endpoint");
        let http_request = request.into_http_request().expect("valid request");
        let expected_body = "Action=DescribeRegions&Version=2016-11-15&AllRegions=true";
        assert_eq!(http_request.method(), "POST");
        assert_eq!(
            http_request.uri(),
            &Uri::from_static("https://ec2.us-west-2.amazonaws.com/")
        );
        assert_eq!(
            http_request.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            http_request.headers()[CONTENT_LENGTH],
            expected_body.len().to_string().as_str()
        );
        assert_eq!(
            http_request.body().bytes(),
            Some(expected_body.as_bytes())
        );
    }
}
