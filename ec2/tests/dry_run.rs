/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use ec2::input::*;
use ec2::model::Filter;
use ec2::operation::{DryRunSupportedRequest, MarshallRequest};
use proptest::prelude::*;
use smithy_http::operation::SerializationError;
use smithy_types::Instant;

fn check_dry_run<T: DryRunSupportedRequest + Default>() {
    let request = T::default()
        .dry_run_request()
        .expect("default input is serializable");
    assert_eq!(request.action(), Some(T::NAME));
    assert_eq!(request.parameter("DryRun"), Some("true"), "{}", T::NAME);
}

#[test]
fn every_operation_supports_dry_run() {
    check_dry_run::<CreateCapacityReservationInput>();
    check_dry_run::<CreateFlowLogsInput>();
    check_dry_run::<CreateNetworkAclEntryInput>();
    check_dry_run::<CreateVolumeInput>();
    check_dry_run::<CreateVpcInput>();
    check_dry_run::<DescribeCapacityReservationsInput>();
    check_dry_run::<DescribeImagesInput>();
    check_dry_run::<DescribeInstanceTypesInput>();
    check_dry_run::<DescribeInstancesInput>();
    check_dry_run::<DescribeNetworkInterfacesInput>();
    check_dry_run::<DescribeRegionsInput>();
    check_dry_run::<DescribeReservedInstancesOfferingsInput>();
    check_dry_run::<DescribeRouteTablesInput>();
    check_dry_run::<DescribeSecurityGroupsInput>();
    check_dry_run::<DescribeSpotInstanceRequestsInput>();
    check_dry_run::<RunInstancesInput>();
}

#[test]
fn dry_run_overrides_false_in_place() {
    let input = DescribeNetworkInterfacesInput::builder()
        .filters(Filter::builder().name("vpc-id").values("vpc-1a2b3c4d").build())
        .dry_run(false)
        .max_results(10)
        .build();
    let before = input.clone();

    let plain = input.marshall().expect("serializable input");
    let dry_run = input.dry_run_request().expect("serializable input");

    assert_eq!(plain.parameter("DryRun"), Some("false"));
    assert_eq!(dry_run.parameter("DryRun"), Some("true"));
    let names = |request: &smithy_query::QueryRequest| {
        request
            .parameters()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&plain), names(&dry_run));
    assert_eq!(input, before);
    assert_eq!(input.dry_run(), Some(false));
}

#[test]
fn dry_run_is_added_when_unset() {
    let input = DescribeRegionsInput::builder().all_regions(true).build();
    assert_eq!(input.marshall().unwrap().parameter("DryRun"), None);

    let dry_run = input.dry_run_request().unwrap();
    assert_eq!(
        dry_run.parameters().to_form_body(),
        "Action=DescribeRegions&Version=2016-11-15&AllRegions=true&DryRun=true"
    );
    assert_eq!(input.dry_run, None);
}

#[test]
fn dry_run_does_not_generate_idempotency_tokens() {
    let input = RunInstancesInput::builder()
        .image_id("ami-0abcdef1234567890")
        .min_count(1)
        .max_count(1)
        .build();
    let request = input.dry_run_request().unwrap();
    assert_eq!(request.parameter("ClientToken"), None);
    assert_eq!(request, input.dry_run_request().unwrap());
}

#[test]
fn serialization_errors_propagate() {
    let input = CreateCapacityReservationInput::builder()
        .instance_type("m5.large")
        .end_date(Instant::from_secs_and_nanos(0, 2_000_000_000))
        .build();
    match input.dry_run_request() {
        Err(SerializationError::DateTimeFormatError(_)) => {}
        other => panic!("expected a date-time error, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn dry_run_is_always_true(dry_run in proptest::option::of(any::<bool>()), ids in proptest::collection::vec("sg-[0-9a-f]{8}", 0..4)) {
        let input = DescribeSecurityGroupsInput::builder()
            .set_group_ids(Some(ids))
            .set_dry_run(dry_run)
            .build();
        let first = input.dry_run_request().unwrap();
        let second = input.dry_run_request().unwrap();
        prop_assert_eq!(first.parameter("DryRun"), Some("true"));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(input.dry_run(), dry_run);

        let plain = input.marshall().unwrap();
        for (name, value) in plain.parameters().iter().filter(|(name, _)| *name != "DryRun") {
            prop_assert_eq!(first.parameter(name), Some(value));
        }
    }
}
