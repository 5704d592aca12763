/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use ec2::input::{
    CreateFlowLogsInput, DescribeInstancesInput, DescribeRegionsInput, RunInstancesInput,
};
use ec2::operation::{DryRunSupportedRequest, MarshallRequest};
use ec2::{Config, Endpoint, Region};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Uri;
use smithy_http::operation::{Metadata, Request};

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .idempotency_token_provider("00000000-0000-4000-8000-000000000000")
        .build()
}

fn body(operation: &Request) -> String {
    let bytes = operation
        .http()
        .body()
        .bytes()
        .expect("query bodies are in memory");
    String::from_utf8(bytes.to_vec()).expect("form bodies are ascii")
}

fn run_instances() -> RunInstancesInput {
    RunInstancesInput::builder()
        .image_id("ami-0abcdef1234567890")
        .min_count(1)
        .max_count(1)
        .build()
}

#[test]
fn describe_regions_request() {
    let input = DescribeRegionsInput::builder()
        .region_names("us-east-1")
        .build();
    let operation = input.make_operation(&config()).expect("valid operation");
    let request = operation.http();

    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://ec2.us-east-1.amazonaws.com/")
    );
    assert_eq!(
        request.headers().get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded"
    );
    let expected_body = "Action=DescribeRegions&Version=2016-11-15&RegionName.1=us-east-1";
    assert_eq!(body(&operation), expected_body);
    assert_eq!(
        request.headers().get(CONTENT_LENGTH).unwrap(),
        &expected_body.len().to_string()
    );
}

#[test]
fn operation_properties() {
    let operation = DescribeInstancesInput::default()
        .make_operation(&config())
        .expect("valid operation");
    let properties = operation.config();
    assert_eq!(
        properties.get::<Metadata>(),
        Some(&Metadata::new("DescribeInstances", "ec2"))
    );
    assert_eq!(properties.get::<Region>(), Some(&Region::new("us-east-1")));
}

#[test]
fn idempotency_token_is_generated_when_unset() {
    let operation = run_instances()
        .make_operation(&config())
        .expect("valid operation");
    assert!(body(&operation).ends_with("&ClientToken=00000000-0000-4000-8000-000000000000"));

    let flow_logs = CreateFlowLogsInput::builder()
        .resource_ids("vpc-1a2b3c4d")
        .build()
        .make_operation(&config())
        .expect("valid operation");
    assert!(body(&flow_logs).contains("ClientToken=00000000-0000-4000-8000-000000000000"));
}

#[test]
fn idempotency_token_is_kept_when_set() {
    let mut input = run_instances();
    input.client_token = Some("my-token".to_string());
    let operation = input.make_operation(&config()).expect("valid operation");
    let body = body(&operation);
    assert!(body.contains("ClientToken=my-token"));
    assert!(!body.contains("00000000-0000-4000-8000-000000000000"));
}

#[test]
fn random_idempotency_tokens_are_uuids() {
    let config = Config::builder().region(Region::new("us-east-1")).build();
    let operation = run_instances()
        .make_operation(&config)
        .expect("valid operation");
    let body = body(&operation);
    let token = body
        .split('&')
        .find_map(|pair| pair.strip_prefix("ClientToken="))
        .expect("token is set");
    assert_eq!(token.len(), 36);
    assert_eq!(token.matches('-').count(), 4);
}

#[test]
fn operations_without_tokens_are_untouched() {
    let operation = DescribeInstancesInput::default()
        .make_operation(&config())
        .expect("valid operation");
    assert!(!body(&operation).contains("ClientToken"));
}

#[test]
fn dry_run_operation() {
    let input = run_instances();
    let operation = input
        .make_dry_run_operation(&config())
        .expect("valid operation");
    let body = body(&operation);
    assert!(body.contains("&DryRun=true"));
    assert!(body.contains("ClientToken="));
    assert_eq!(
        operation.config().get::<Metadata>().map(|m| m.name().to_string()),
        Some("RunInstances".to_string())
    );
    assert_eq!(input.dry_run(), None);
}

#[test]
fn endpoint_override() {
    let config = Config::builder()
        .region(Region::new("us-west-2"))
        .endpoint(Endpoint::immutable(Uri::from_static("http://localhost:4566")))
        .build();
    let operation = DescribeRegionsInput::default()
        .make_operation(&config)
        .expect("valid operation");
    assert_eq!(
        operation.http().uri(),
        &Uri::from_static("http://localhost:4566/")
    );
}

#[test]
fn china_region_endpoint() {
    let config = Config::builder().region(Region::new("cn-north-1")).build();
    let operation = DescribeRegionsInput::default()
        .make_operation(&config)
        .expect("valid operation");
    assert_eq!(
        operation.http().uri(),
        &Uri::from_static("https://ec2.cn-north-1.amazonaws.com.cn/")
    );
}
