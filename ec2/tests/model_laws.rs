/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use ec2::input::DescribeInstancesInput;
use ec2::model::{
    ArchitectureType, Filter, InstanceType, LaunchTemplateBlockDeviceMappingRequest,
    LaunchTemplateEbsBlockDeviceRequest, LaunchTemplateHttpTokensState,
    LaunchTemplateInstanceMetadataOptions, LaunchTemplateInstanceMetadataOptionsRequest,
    LaunchTemplateInstanceMetadataOptionsState,
    LaunchTemplatePlacement, Placement, ProcessorInfo, RIProductDescription, RecurringCharge,
    RecurringChargeFrequency, RequestLaunchTemplateData, ResponseLaunchTemplateData, RuleAction,
    ShutdownBehavior, Tag, Tenancy, VolumeType,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tenancy() -> impl Strategy<Value = Tenancy> {
    prop_oneof![
        Just(Tenancy::Default),
        Just(Tenancy::Dedicated),
        Just(Tenancy::Host),
        "[a-z]{1,8}".prop_map(|value| Tenancy::from(value.as_str())),
    ]
}

fn filter() -> impl Strategy<Value = Filter> {
    (
        option::of("[a-z:-]{1,20}"),
        option::of(vec("[a-z0-9-]{0,10}", 0..4)),
    )
        .prop_map(|(name, values)| Filter::builder().set_name(name).set_values(values).build())
}

fn placement() -> impl Strategy<Value = Placement> {
    (
        option::of("[a-z]{2}-[a-z]{4}-[1-3][a-c]"),
        option::of(any::<i32>()),
        option::of(tenancy()),
    )
        .prop_map(|(availability_zone, partition_number, tenancy)| {
            Placement::builder()
                .set_availability_zone(availability_zone)
                .set_partition_number(partition_number)
                .set_tenancy(tenancy)
                .build()
        })
}

fn recurring_charge() -> impl Strategy<Value = RecurringCharge> {
    (
        option::of(any::<f64>()),
        option::of(prop_oneof![
            Just(RecurringChargeFrequency::Hourly),
            "[A-Z][a-z]{3,6}".prop_map(|value| RecurringChargeFrequency::from(value.as_str())),
        ]),
    )
        .prop_map(|(amount, frequency)| {
            RecurringCharge::builder()
                .set_amount(amount)
                .set_frequency(frequency)
                .build()
        })
}

fn describe_instances() -> impl Strategy<Value = DescribeInstancesInput> {
    (
        option::of(vec(filter(), 0..3)),
        option::of(vec("i-[0-9a-f]{8}", 0..3)),
        option::of(any::<bool>()),
        option::of(5..1000i32),
        option::of("[A-Za-z0-9]{0,16}"),
    )
        .prop_map(
            |(filters, instance_ids, dry_run, max_results, next_token)| {
                DescribeInstancesInput::builder()
                    .set_filters(filters)
                    .set_instance_ids(instance_ids)
                    .set_dry_run(dry_run)
                    .set_max_results(max_results)
                    .set_next_token(next_token)
                    .build()
            },
        )
}

proptest! {
    #[test]
    fn accessors_return_what_was_stored(key in ".{0,12}", partition in any::<i32>(), tenancy in tenancy()) {
        let mut tag = Tag::default();
        tag.key = Some(key.clone());
        prop_assert_eq!(tag.key(), Some(key.as_str()));
        prop_assert_eq!(tag.value(), None);

        let mut placement = Placement::default();
        placement.partition_number = Some(partition);
        placement.tenancy = Some(tenancy.clone());
        prop_assert_eq!(placement.partition_number(), Some(partition));
        prop_assert_eq!(placement.tenancy(), Some(&tenancy));
        placement.tenancy = None;
        prop_assert_eq!(placement.tenancy(), None);
    }

    #[test]
    fn fluent_setters_match_set_setters(key in ".{0,12}", values in vec("[a-z0-9]{0,8}", 1..5)) {
        prop_assert_eq!(
            Tag::builder().key(key.clone()).build(),
            Tag::builder().set_key(Some(key)).build()
        );
        let fluent = values
            .iter()
            .fold(Filter::builder(), |builder, value| builder.values(value.clone()))
            .build();
        let set = Filter::builder().set_values(Some(values.clone())).build();
        prop_assert_eq!(fluent.values(), values.as_slice());
        prop_assert_eq!(fluent, set);
    }

    #[test]
    fn equality_and_hash_laws(a in describe_instances(), b in describe_instances()) {
        prop_assert!(a == a);
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn equality_and_hash_laws_with_floats(a in recurring_charge(), b in recurring_charge()) {
        // NaN amounts still compare equal to themselves
        prop_assert!(a == a);
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn unset_field_is_never_equal_to_set_field(placement in placement(), zone in "[a-z0-9-]{1,12}") {
        let mut set = placement.clone();
        set.availability_zone = Some(zone);
        let mut unset = placement;
        unset.availability_zone = None;
        prop_assert_ne!(&set, &unset);
        prop_assert_ne!(&unset, &set);
    }

    #[test]
    fn unknown_enum_values_round_trip(value in "[a-z0-9.]{1,16}") {
        let tenancy = Tenancy::from(value.as_str());
        prop_assert_eq!(tenancy.as_str(), value.as_str());
        prop_assert_eq!(value.parse::<Tenancy>().unwrap(), tenancy);
    }
}

#[test]
fn debug_lists_only_set_fields() {
    let tag = Tag::builder().key("Name").build();
    assert_eq!(format!("{:?}", tag), "{Key: \"Name\"}");

    let filter = Filter::builder()
        .name("instance-state-name")
        .values("running")
        .values("stopped")
        .build();
    assert_eq!(
        format!("{:?}", filter),
        "{Name: \"instance-state-name\", Values: [\"running\", \"stopped\"]}"
    );

    let placement = Placement::builder().tenancy(Tenancy::Dedicated).build();
    assert_eq!(format!("{:?}", placement), "{Tenancy: dedicated}");
    assert_eq!(format!("{:?}", Placement::default()), "{}");
}

#[test]
fn debug_prints_enum_wire_values() {
    let placement = Placement::builder()
        .tenancy(Tenancy::from("shared"))
        .build();
    assert_eq!(format!("{:?}", placement), "{Tenancy: shared}");

    let processor = ProcessorInfo::builder()
        .supported_architectures(ArchitectureType::X8664)
        .supported_architectures(ArchitectureType::Arm64)
        .build();
    assert_eq!(
        format!("{:?}", processor),
        "{SupportedArchitectures: [x86_64, arm64]}"
    );
}

#[test]
fn request_launch_template_data() {
    let data = RequestLaunchTemplateData::builder()
        .image_id("ami-0abcdef1234567890")
        .instance_type(InstanceType::T2Micro)
        .block_device_mappings(
            LaunchTemplateBlockDeviceMappingRequest::builder()
                .device_name("/dev/sdh")
                .ebs(
                    LaunchTemplateEbsBlockDeviceRequest::builder()
                        .volume_size(100)
                        .volume_type(VolumeType::Gp2)
                        .build(),
                )
                .build(),
        )
        .security_group_ids("sg-1a2b3c4d")
        .instance_initiated_shutdown_behavior(ShutdownBehavior::Terminate)
        .metadata_options(
            LaunchTemplateInstanceMetadataOptionsRequest::builder()
                .http_tokens(LaunchTemplateHttpTokensState::Required)
                .build(),
        )
        .build();

    assert_eq!(data.image_id(), Some("ami-0abcdef1234567890"));
    assert_eq!(
        data.block_device_mappings()[0]
            .ebs()
            .and_then(|ebs| ebs.volume_type()),
        Some(&VolumeType::Gp2)
    );
    assert!(data.network_interfaces().is_empty());
    assert_eq!(data.network_interfaces, None);
    assert_eq!(data.security_group_ids(), &["sg-1a2b3c4d".to_string()]);
    assert_eq!(
        format!("{:?}", data),
        "{BlockDeviceMappings: [{DeviceName: \"/dev/sdh\", Ebs: {VolumeSize: 100, VolumeType: gp2}}], \
         ImageId: \"ami-0abcdef1234567890\", InstanceType: t2.micro, \
         InstanceInitiatedShutdownBehavior: terminate, SecurityGroupIds: [\"sg-1a2b3c4d\"], \
         MetadataOptions: {HttpTokens: required}}"
    );

    let mut changed = data.clone();
    assert_eq!(hash_of(&changed), hash_of(&data));
    changed.metadata_options = None;
    assert_ne!(changed, data);
}

#[test]
fn response_launch_template_data() {
    let data = ResponseLaunchTemplateData::builder()
        .kernel_id("aki-1a2b3c4d")
        .placement(
            LaunchTemplatePlacement::builder()
                .availability_zone("us-east-1a")
                .tenancy(Tenancy::Host)
                .partition_number(2)
                .build(),
        )
        .metadata_options(
            LaunchTemplateInstanceMetadataOptions::builder()
                .state(LaunchTemplateInstanceMetadataOptionsState::Applied)
                .http_put_response_hop_limit(1)
                .build(),
        )
        .build();

    assert_eq!(data.kernel_id(), Some("aki-1a2b3c4d"));
    assert_eq!(
        data.placement().and_then(|placement| placement.partition_number()),
        Some(2)
    );
    assert!(data.tag_specifications().is_empty());
    assert_eq!(
        format!("{:?}", data),
        "{KernelId: \"aki-1a2b3c4d\", \
         Placement: {AvailabilityZone: \"us-east-1a\", Tenancy: host, PartitionNumber: 2}, \
         MetadataOptions: {State: applied, HttpPutResponseHopLimit: 1}}"
    );
    assert_eq!(data, data.clone());
    assert_ne!(data, ResponseLaunchTemplateData::default());
}

#[test]
fn debug_nests_set_fields() {
    let input = DescribeInstancesInput::builder()
        .filters(Filter::builder().name("vpc-id").build())
        .max_results(10)
        .build();
    assert_eq!(
        format!("{:?}", input),
        "{Filters: [{Name: \"vpc-id\"}], MaxResults: 10}"
    );
}

#[test]
fn unset_list_differs_from_explicitly_empty_list() {
    let unset = DescribeInstancesInput::default();
    let empty = DescribeInstancesInput::builder()
        .set_instance_ids(Some(vec![]))
        .build();

    assert!(unset.instance_ids().is_empty());
    assert!(empty.instance_ids().is_empty());
    assert_eq!(unset.instance_ids, None);
    assert_eq!(empty.instance_ids, Some(vec![]));
    assert_ne!(unset, empty);
    assert_eq!(format!("{:?}", unset), "{}");
    assert_eq!(format!("{:?}", empty), "{InstanceIds: []}");
}

#[test]
fn float_members_compare_by_bits() {
    let nan = RecurringCharge::builder().amount(f64::NAN).build();
    assert_eq!(nan, nan.clone());
    assert_eq!(hash_of(&nan), hash_of(&nan.clone()));

    let positive = RecurringCharge::builder().amount(0.0).build();
    let negative = RecurringCharge::builder().amount(-0.0).build();
    assert_ne!(positive, negative);
}

#[test]
fn known_enum_values_parse_to_known_variants() {
    for value in Tenancy::values() {
        let tenancy = Tenancy::from(*value);
        assert!(!matches!(tenancy, Tenancy::Unknown(_)), "{}", value);
        assert_eq!(tenancy.as_str(), *value);
    }
    for value in InstanceType::values() {
        let instance_type = InstanceType::from(*value);
        assert!(!matches!(instance_type, InstanceType::Unknown(_)), "{}", value);
        assert_eq!(instance_type.as_str(), *value);
    }
    for value in RIProductDescription::values() {
        assert_eq!(RIProductDescription::from(*value).as_str(), *value);
    }
    assert_eq!(RuleAction::values(), &["allow", "deny"]);
}

#[test]
fn enum_wire_values() {
    assert_eq!(InstanceType::from("t2.micro"), InstanceType::T2Micro);
    assert_eq!(
        RIProductDescription::from("Linux/UNIX (Amazon VPC)"),
        RIProductDescription::LinuxUnixAmazonVpc
    );
    assert_eq!("host".parse::<Tenancy>(), Ok(Tenancy::Host));
    assert_eq!(
        Tenancy::from("shared"),
        Tenancy::Unknown("shared".to_string())
    );
    assert_eq!(RuleAction::Deny.as_ref(), "deny");
}
