/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;

use http::uri::{PathAndQuery, Uri};

use crate::operation::BuildError;

/// API Endpoint
///
/// The scheme, authority and base path that requests are sent to. The request's own path and
/// query are appended to the endpoint's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, the endpoint is used exactly as given and never rewritten by the service
    immutable: bool,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, keeping `uri`'s path and query.
    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), BuildError> {
        let (scheme, authority) = match (self.uri.scheme(), self.uri.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => {
                return Err(BuildError::MissingField {
                    field: "endpoint",
                    details: "an endpoint must have both a scheme and an authority",
                })
            }
        };
        let path_and_query = Self::merge_paths(&self.uri, uri);
        let path_and_query =
            path_and_query
                .parse::<PathAndQuery>()
                .map_err(|err| BuildError::InvalidUri {
                    uri: path_and_query.to_string(),
                    err,
                    message: "merged endpoint path is invalid".into(),
                })?;
        *uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()?;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use http::Uri;

    use crate::endpoint::Endpoint;
    use crate::operation::BuildError;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let mut uri = Uri::from_static("/");
        let endpoint = Endpoint::mutable(Uri::from_static("https://ec2.eu-west-1.amazonaws.com"));
        endpoint.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("https://ec2.eu-west-1.amazonaws.com/"));
    }

    #[test]
    fn endpoint_with_path() {
        let mut uri = Uri::from_static("/?k=v");
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000/ec2/"));
        endpoint.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/ec2/?k=v"));
        assert!(endpoint.is_immutable());
    }

    #[test]
    fn endpoint_without_scheme_is_rejected() {
        let mut uri = Uri::from_static("/");
        let endpoint = Endpoint::mutable(Uri::from_static("localhost:8000"));
        match endpoint.set_endpoint(&mut uri) {
            Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "endpoint"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
