/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::idempotency_token::MakeIdempotencyToken;
use aws_types::region::{ProvideRegion, Region};
use http::Uri;
use smithy_http::endpoint::Endpoint;
use smithy_http::operation::BuildError;
use std::fmt;
use std::sync::Arc;

/// Client configuration for EC2 operations.
///
/// ```rust
/// use ec2::{Config, Region};
/// let config = Config::builder().region(Region::new("eu-west-1")).build();
/// assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
/// ```
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint: Option<Endpoint>,
    pub(crate) idempotency_token_provider: Arc<dyn MakeIdempotencyToken>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint requests are sent to.
    ///
    /// An explicitly configured endpoint always wins. Otherwise the endpoint is derived from the
    /// region: `https://ec2.{region}.amazonaws.com`, or `amazonaws.com.cn` for China regions.
    pub fn endpoint(&self) -> Result<Endpoint, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().ok_or(BuildError::MissingField {
            field: "region",
            details: "a region must be set to resolve the EC2 endpoint",
        })?;
        let suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = format!("https://ec2.{}.{}", region, suffix);
        match uri.parse::<Uri>() {
            Ok(parsed) => Ok(Endpoint::mutable(parsed)),
            Err(err) => Err(BuildError::InvalidUri {
                uri,
                err,
                message: "region does not form a valid endpoint".into(),
            }),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        self.idempotency_token_provider.make_idempotency_token()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
    idempotency_token_provider: Option<Arc<dyn MakeIdempotencyToken>>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field(
                "idempotency_token_provider",
                &self.idempotency_token_provider.as_ref().map(|_| "custom"),
            )
            .finish()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region from any region provider: a `Region`, an `Option<Region>`, a static
    /// string, or a provider chain.
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Overrides the endpoint derived from the region.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn idempotency_token_provider(
        mut self,
        provider: impl MakeIdempotencyToken + 'static,
    ) -> Self {
        self.idempotency_token_provider = Some(Arc::new(provider));
        self
    }

    pub fn build(self) -> Config {
        let region = self.region.or_else(|| {
            let region = aws_types::region::default_provider().region();
            tracing::debug!(region = ?region, "no region configured, loaded region from the environment");
            region
        });
        Config {
            region,
            endpoint: self.endpoint,
            idempotency_token_provider: self
                .idempotency_token_provider
                .unwrap_or_else(|| Arc::new(crate::idempotency_token::default_provider())),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::operation::BuildError;
    use std::sync::Arc;

    #[test]
    fn endpoint_from_region() {
        let config = Config::builder().region(Region::new("us-west-2")).build();
        let endpoint = config.endpoint().expect("valid endpoint");
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).expect("valid uri");
        assert_eq!(uri, Uri::from_static("https://ec2.us-west-2.amazonaws.com/"));
    }

    #[test]
    fn china_regions_use_the_cn_partition() {
        let config = Config::builder().region("cn-north-1").build();
        let mut uri = Uri::from_static("/");
        config
            .endpoint()
            .expect("valid endpoint")
            .set_endpoint(&mut uri)
            .expect("valid uri");
        assert_eq!(uri, Uri::from_static("https://ec2.cn-north-1.amazonaws.com.cn/"));
    }

    #[test]
    fn explicit_endpoint_wins() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:4566"));
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint(endpoint.clone())
            .build();
        assert_eq!(config.endpoint().expect("valid endpoint"), endpoint);
    }

    #[test]
    fn invalid_region() {
        let config = Config::builder().region(Region::new("not a region")).build();
        match config.endpoint() {
            Err(BuildError::InvalidUri { uri, .. }) => {
                assert_eq!(uri, "https://ec2.not a region.amazonaws.com")
            }
            other => panic!("expected an invalid uri, got {:?}", other),
        }
    }

    #[test]
    fn missing_region() {
        let config = Config {
            region: None,
            endpoint: None,
            idempotency_token_provider: Arc::new("token-1"),
        };
        match config.endpoint() {
            Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "region"),
            other => panic!("expected a missing region, got {:?}", other),
        }
    }

    #[test]
    fn static_idempotency_token() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .idempotency_token_provider("token-1")
            .build();
        assert_eq!(config.make_idempotency_token(), "token-1");
    }
}
