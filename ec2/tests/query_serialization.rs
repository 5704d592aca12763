/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use ec2::input::{
    CreateCapacityReservationInput, CreateNetworkAclEntryInput, DescribeImagesInput,
    DescribeInstancesInput, DescribeReservedInstancesOfferingsInput, RunInstancesInput,
};
use ec2::model::{
    BlockDeviceMapping, CapacityReservationInstancePlatform, CreditSpecificationRequest,
    EbsBlockDevice, EndDateType, Filter, HttpTokensState, IcmpTypeCode,
    InstanceMetadataOptionsRequest, InstanceNetworkInterfaceSpecification, InstanceType,
    Placement, PortRange, RIProductDescription, ResourceType, RuleAction, Tag, TagSpecification,
    Tenancy, VolumeType,
};
use ec2::operation::MarshallRequest;
use smithy_query::QueryRequest;
use smithy_types::Instant;

fn params(request: &QueryRequest) -> Vec<(String, String)> {
    request
        .parameters()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn describe_instances_flattens_filters_and_ids() {
    let input = DescribeInstancesInput::builder()
        .filters(
            Filter::builder()
                .name("tag:Name")
                .values("web")
                .values("db")
                .build(),
        )
        .instance_ids("i-0123456789abcdef0")
        .instance_ids("i-0fedcba9876543210")
        .max_results(5)
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(
        params(&request),
        expected(&[
            ("Action", "DescribeInstances"),
            ("Version", "2016-11-15"),
            ("Filter.1.Name", "tag:Name"),
            ("Filter.1.Value.1", "web"),
            ("Filter.1.Value.2", "db"),
            ("InstanceId.1", "i-0123456789abcdef0"),
            ("InstanceId.2", "i-0fedcba9876543210"),
            ("MaxResults", "5"),
        ])
    );
}

#[test]
fn unset_members_are_not_written() {
    let request = DescribeInstancesInput::default()
        .marshall()
        .expect("serializable input");
    assert_eq!(
        params(&request),
        expected(&[("Action", "DescribeInstances"), ("Version", "2016-11-15")])
    );
}

#[test]
fn explicitly_empty_list_is_written_as_empty_value() {
    let input = DescribeInstancesInput::builder()
        .set_instance_ids(Some(vec![]))
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(request.parameter("InstanceId"), Some(""));
    assert_eq!(
        request.parameters().to_form_body(),
        "Action=DescribeInstances&Version=2016-11-15&InstanceId="
    );
}

#[test]
fn run_instances_writes_nested_structures() {
    let input = RunInstancesInput::builder()
        .image_id("ami-0abcdef1234567890")
        .instance_type(InstanceType::T2Micro)
        .min_count(1)
        .max_count(2)
        .placement(Placement::builder().tenancy(Tenancy::Dedicated).build())
        .block_device_mappings(
            BlockDeviceMapping::builder()
                .device_name("/dev/sdh")
                .ebs(
                    EbsBlockDevice::builder()
                        .volume_size(100)
                        .volume_type(VolumeType::Gp2)
                        .delete_on_termination(true)
                        .build(),
                )
                .build(),
        )
        .tag_specifications(
            TagSpecification::builder()
                .resource_type(ResourceType::Instance)
                .tags(Tag::builder().key("Name").value("web").build())
                .build(),
        )
        .network_interfaces(
            InstanceNetworkInterfaceSpecification::builder()
                .device_index(0)
                .groups("sg-1a2b3c4d")
                .associate_public_ip_address(false)
                .build(),
        )
        .security_group_ids("sg-1a2b3c4d")
        .credit_specification(CreditSpecificationRequest::builder().cpu_credits("unlimited").build())
        .metadata_options(
            InstanceMetadataOptionsRequest::builder()
                .http_tokens(HttpTokensState::Required)
                .build(),
        )
        .build();
    let request = input.marshall().expect("serializable input");

    for (name, value) in &[
        ("Action", "RunInstances"),
        ("ImageId", "ami-0abcdef1234567890"),
        ("InstanceType", "t2.micro"),
        ("MinCount", "1"),
        ("MaxCount", "2"),
        ("Placement.Tenancy", "dedicated"),
        ("BlockDeviceMapping.1.DeviceName", "/dev/sdh"),
        ("BlockDeviceMapping.1.Ebs.VolumeSize", "100"),
        ("BlockDeviceMapping.1.Ebs.VolumeType", "gp2"),
        ("BlockDeviceMapping.1.Ebs.DeleteOnTermination", "true"),
        ("TagSpecification.1.ResourceType", "instance"),
        ("TagSpecification.1.Tag.1.Key", "Name"),
        ("TagSpecification.1.Tag.1.Value", "web"),
        ("NetworkInterface.1.DeviceIndex", "0"),
        ("NetworkInterface.1.SecurityGroupId.1", "sg-1a2b3c4d"),
        ("NetworkInterface.1.AssociatePublicIpAddress", "false"),
        ("SecurityGroupId.1", "sg-1a2b3c4d"),
        ("CreditSpecification.CpuCredits", "unlimited"),
        ("MetadataOptions.HttpTokens", "required"),
    ] {
        assert_eq!(request.parameter(name), Some(*value), "{}", name);
    }
    assert_eq!(request.parameter("ClientToken"), None);
    assert_eq!(request.parameter("DryRun"), None);
}

#[test]
fn network_acl_entry_uses_wire_names() {
    let input = CreateNetworkAclEntryInput::builder()
        .network_acl_id("acl-5fb85d36")
        .rule_number(100)
        .protocol("1")
        .rule_action(RuleAction::Deny)
        .egress(true)
        .cidr_block("0.0.0.0/0")
        .icmp_type_code(IcmpTypeCode::builder().code(-1).r#type(8).build())
        .port_range(PortRange::builder().from(53).to(53).build())
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(request.parameter("Icmp.Code"), Some("-1"));
    assert_eq!(request.parameter("Icmp.Type"), Some("8"));
    assert_eq!(request.parameter("PortRange.From"), Some("53"));
    assert_eq!(request.parameter("PortRange.To"), Some("53"));
    assert_eq!(request.parameter("RuleAction"), Some("deny"));
    assert_eq!(request.parameter("RuleNumber"), Some("100"));
    assert_eq!(request.parameter("Egress"), Some("true"));
    assert_eq!(request.parameter("IcmpTypeCode.Code"), None);
}

#[test]
fn describe_images_uses_singular_list_names() {
    let input = DescribeImagesInput::builder()
        .owners("self")
        .owners("amazon")
        .executable_users("all")
        .image_ids("ami-12345678")
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(request.parameter("Owner.1"), Some("self"));
    assert_eq!(request.parameter("Owner.2"), Some("amazon"));
    assert_eq!(request.parameter("ExecutableBy.1"), Some("all"));
    assert_eq!(request.parameter("ImageId.1"), Some("ami-12345678"));
}

#[test]
fn capacity_reservation_timestamps_and_tags() {
    let input = CreateCapacityReservationInput::builder()
        .instance_type("m5.large")
        .instance_platform(CapacityReservationInstancePlatform::LinuxUnix)
        .availability_zone("us-east-1a")
        .instance_count(3)
        .end_date(Instant::from_secs_and_nanos(1_577_836_800, 500_000_000))
        .end_date_type(EndDateType::Limited)
        .tag_specifications(
            TagSpecification::builder()
                .resource_type(ResourceType::Instance)
                .tags(Tag::builder().key("team").value("infra").build())
                .build(),
        )
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(request.parameter("EndDate"), Some("2020-01-01T00:00:00.5Z"));
    assert_eq!(request.parameter("EndDateType"), Some("limited"));
    assert_eq!(request.parameter("InstancePlatform"), Some("Linux/UNIX"));
    assert_eq!(request.parameter("TagSpecifications.1.Tag.1.Key"), Some("team"));
    assert_eq!(request.parameter("InstanceCount"), Some("3"));
}

#[test]
fn form_body_is_percent_encoded() {
    let input = DescribeReservedInstancesOfferingsInput::builder()
        .product_description(RIProductDescription::LinuxUnixAmazonVpc)
        .instance_tenancy(Tenancy::from("future-tenancy"))
        .min_duration(31_536_000)
        .include_marketplace(false)
        .build();
    let request = input.marshall().expect("serializable input");
    assert_eq!(
        request.parameters().to_form_body(),
        "Action=DescribeReservedInstancesOfferings&Version=2016-11-15\
         &IncludeMarketplace=false\
         &MinDuration=31536000\
         &ProductDescription=Linux%2FUNIX%20%28Amazon%20VPC%29\
         &InstanceTenancy=future-tenancy"
    );
}
