/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]
//! <fullname>Amazon Elastic Compute Cloud</fullname>
//!
//! <p>Amazon Elastic Compute Cloud (Amazon EC2) provides secure and resizable computing capacity
//! in the AWS cloud. Using Amazon EC2 eliminates the need to invest in hardware up front, so you
//! can develop and deploy applications faster.</p>
//!
//! This crate holds the request and response models for a set of EC2 operations together with
//! the EC2 query serializers for the requests:
//!
//! ```rust
//! use ec2::input::RunInstancesInput;
//! use ec2::model::{InstanceType, Placement, Tenancy};
//! use ec2::operation::MarshallRequest;
//!
//! let input = RunInstancesInput::builder()
//!     .image_id("ami-0abcdef1234567890")
//!     .instance_type(InstanceType::T3Micro)
//!     .min_count(1)
//!     .max_count(1)
//!     .placement(Placement::builder().tenancy(Tenancy::Dedicated).build())
//!     .build();
//! let request = input.marshall().expect("serializable input");
//! assert_eq!(request.parameter("Action"), Some("RunInstances"));
//! assert_eq!(request.parameter("Placement.Tenancy"), Some("dedicated"));
//! ```

pub mod config;
mod fmt;
pub mod idempotency_token;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod query_ser;

pub use aws_types::region::Region;
pub use config::Config;
pub use smithy_http::endpoint::Endpoint;

/// EC2 API version sent with every request.
pub const API_VERSION: &str = "2016-11-15";
