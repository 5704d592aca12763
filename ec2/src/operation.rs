/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Turning inputs into requests.
//!
//! Every input implements [`MarshallRequest`], which writes it as an EC2 query
//! [`QueryRequest`](smithy_query::QueryRequest). Inputs with a `DryRun` member also implement
//! [`DryRunSupportedRequest`]:
//!
//! ```rust
//! use ec2::input::DescribeInstancesInput;
//! use ec2::operation::DryRunSupportedRequest;
//!
//! let input = DescribeInstancesInput::builder()
//!     .instance_ids("i-0123456789abcdef0")
//!     .dry_run(false)
//!     .build();
//! let request = input.dry_run_request().expect("serializable input");
//! assert_eq!(request.parameter("DryRun"), Some("true"));
//! assert_eq!(input.dry_run(), Some(false));
//! ```

use crate::config::Config;
use smithy_http::operation::{BuildError, Metadata, Request, SerializationError};
use smithy_query::QueryRequest;

/// Name of the service recorded in each operation's [`Metadata`].
pub const SERVICE_NAME: &str = "ec2";

/// An input that can be written as an EC2 query request.
pub trait MarshallRequest {
    /// Operation name, sent as the `Action` parameter.
    const NAME: &'static str;

    /// Member that receives a generated token when the caller leaves it unset.
    const IDEMPOTENCY_TOKEN: Option<&'static str> = None;

    /// Writes every member that is set. The input itself is not modified.
    fn marshall(&self) -> Result<QueryRequest, SerializationError>;

    /// Marshalls the input and builds the HTTP request for it.
    fn make_operation(&self, config: &Config) -> Result<Request, BuildError>
    where
        Self: Sized,
    {
        let request = self.marshall()?;
        tracing::debug!(operation = Self::NAME, "marshalled request");
        build_operation::<Self>(request, config)
    }
}

/// An input that can be sent as a dry run, checking permissions without performing the action.
pub trait DryRunSupportedRequest: MarshallRequest {
    /// Marshalls the input with `DryRun=true`, whatever the input's own `DryRun` member holds.
    fn dry_run_request(&self) -> Result<QueryRequest, SerializationError> {
        let mut request = self.marshall()?;
        request.add_parameter("DryRun", "true");
        tracing::debug!(operation = Self::NAME, "marshalled dry run request");
        Ok(request)
    }

    /// Builds the HTTP request for a dry run of this input.
    fn make_dry_run_operation(&self, config: &Config) -> Result<Request, BuildError>
    where
        Self: Sized,
    {
        let request = self.dry_run_request()?;
        build_operation::<Self>(request, config)
    }
}

fn build_operation<I: MarshallRequest>(
    mut request: QueryRequest,
    config: &Config,
) -> Result<Request, BuildError> {
    if let Some(member) = I::IDEMPOTENCY_TOKEN {
        if request.parameter(member).is_none() {
            tracing::trace!(operation = I::NAME, member, "generating idempotency token");
            request.add_parameter(member, config.make_idempotency_token());
        }
    }
    request.set_endpoint(&config.endpoint()?)?;
    let mut operation = Request::new(request.into_http_request()?);
    {
        let mut properties = operation.config_mut();
        properties.insert(Metadata::new(I::NAME, SERVICE_NAME));
        if let Some(region) = config.region() {
            properties.insert(region.clone());
        }
    }
    tracing::debug!(
        operation = I::NAME,
        uri = %operation.http().uri(),
        "built operation request"
    );
    Ok(operation)
}
