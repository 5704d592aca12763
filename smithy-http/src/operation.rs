/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use smithy_types::instant::DateTimeFormatError;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use thiserror::Error;

/// Name of an operation and the service it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// An input could not be written to the wire.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to serialize timestamp: {0}")]
    DateTimeFormatError(#[from] DateTimeFormatError),
}

/// An operation could not be turned into an HTTP request.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    /// A configuration value required to construct the request is absent.
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// The input could not be serialized.
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] SerializationError),

    /// The resolved endpoint is not a valid URI.
    #[error("invalid uri `{uri}`: {message}")]
    InvalidUri {
        uri: String,
        #[source]
        err: http::uri::InvalidUri,
        message: Cow<'static, str>,
    },

    /// The HTTP request could not be assembled.
    #[error("failed to construct http request: {0}")]
    Http(#[from] http::Error),
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    configuration: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            configuration: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let configuration: &mut PropertyBag = &mut self.configuration.as_ref().borrow_mut();
            f(self.inner, configuration)?
        };
        Ok(Request {
            inner,
            configuration: self.configuration,
        })
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn config_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.configuration.as_ref().borrow_mut()
    }

    pub fn config(&self) -> Ref<'_, PropertyBag> {
        self.configuration.as_ref().borrow()
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.configuration)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Request};
    use http::header::CONTENT_TYPE;
    use http::Uri;

    #[test]
    fn augment_shares_configuration() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://ec2.us-east-1.amazonaws.com/"))
                .method("POST")
                .body(SdkBody::from("Action=DescribeRegions&Version=2016-11-15"))
                .expect("valid request"),
        );
        request
            .config_mut()
            .insert(Metadata::new("DescribeRegions", "ec2"));
        let request = request
            .augment(|mut req, props| {
                let name = props
                    .get::<Metadata>()
                    .map(|m| m.name().to_owned())
                    .unwrap_or_default();
                req.headers_mut()
                    .insert("x-operation", name.parse().expect("valid header"));
                Ok::<_, BuildError>(req)
            })
            .expect("augment succeeds");
        assert_eq!(request.http().headers()["x-operation"], "DescribeRegions");
        assert!(request.http().headers().get(CONTENT_TYPE).is_none());

        let (http_request, config) = request.into_parts();
        assert_eq!(http_request.method(), "POST");
        assert_eq!(
            config.as_ref().borrow().get::<Metadata>().map(|m| m.service()),
            Some("ec2")
        );
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::MissingField {
            field: "region",
            details: "a region must be set",
        };
        assert_eq!(format!("{}", err), "region was missing. a region must be set");
    }
}
