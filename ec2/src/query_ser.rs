/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_create_capacity_reservation(
    input: &crate::input::CreateCapacityReservationInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("CreateCapacityReservation", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.client_token {
        writer.prefix("ClientToken").string(var_1);
    }
    if let Some(var_2) = &input.instance_type {
        writer.prefix("InstanceType").string(var_2);
    }
    if let Some(var_3) = &input.instance_platform {
        writer.prefix("InstancePlatform").string(var_3.as_str());
    }
    if let Some(var_4) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(var_4);
    }
    if let Some(var_5) = &input.availability_zone_id {
        writer.prefix("AvailabilityZoneId").string(var_5);
    }
    if let Some(var_6) = &input.tenancy {
        writer.prefix("Tenancy").string(var_6.as_str());
    }
    if let Some(var_7) = &input.instance_count {
        writer.prefix("InstanceCount").number(smithy_types::Number::NegInt(i64::from(*var_7)));
    }
    if let Some(var_8) = &input.ebs_optimized {
        writer.prefix("EbsOptimized").boolean(*var_8);
    }
    if let Some(var_9) = &input.ephemeral_storage {
        writer.prefix("EphemeralStorage").boolean(*var_9);
    }
    if let Some(var_10) = &input.end_date {
        writer.prefix("EndDate").instant(var_10, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_11) = &input.end_date_type {
        writer.prefix("EndDateType").string(var_11.as_str());
    }
    if let Some(var_12) = &input.instance_match_criteria {
        writer.prefix("InstanceMatchCriteria").string(var_12.as_str());
    }
    if let Some(var_13) = &input.tag_specifications {
        let mut list_14 = writer.prefix("TagSpecifications").start_list(true, None);
        for item_15 in var_13 {
            crate::query_ser::serialize_structure_tag_specification(list_14.entry(), item_15)?;
        }
        list_14.finish();
    }
    if let Some(var_16) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_16);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_create_flow_logs(
    input: &crate::input::CreateFlowLogsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("CreateFlowLogs", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_1);
    }
    if let Some(var_2) = &input.client_token {
        writer.prefix("ClientToken").string(var_2);
    }
    if let Some(var_3) = &input.deliver_logs_permission_arn {
        writer.prefix("DeliverLogsPermissionArn").string(var_3);
    }
    if let Some(var_4) = &input.log_group_name {
        writer.prefix("LogGroupName").string(var_4);
    }
    if let Some(var_5) = &input.resource_ids {
        let mut list_6 = writer.prefix("ResourceId").start_list(true, None);
        for item_7 in var_5 {
            list_6.entry().string(item_7);
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.resource_type {
        writer.prefix("ResourceType").string(var_8.as_str());
    }
    if let Some(var_9) = &input.traffic_type {
        writer.prefix("TrafficType").string(var_9.as_str());
    }
    if let Some(var_10) = &input.log_destination_type {
        writer.prefix("LogDestinationType").string(var_10.as_str());
    }
    if let Some(var_11) = &input.log_destination {
        writer.prefix("LogDestination").string(var_11);
    }
    if let Some(var_12) = &input.log_format {
        writer.prefix("LogFormat").string(var_12);
    }
    if let Some(var_13) = &input.tag_specifications {
        let mut list_14 = writer.prefix("TagSpecification").start_list(true, None);
        for item_15 in var_13 {
            crate::query_ser::serialize_structure_tag_specification(list_14.entry(), item_15)?;
        }
        list_14.finish();
    }
    if let Some(var_16) = &input.max_aggregation_interval {
        writer.prefix("MaxAggregationInterval").number(smithy_types::Number::NegInt(i64::from(*var_16)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_create_network_acl_entry(
    input: &crate::input::CreateNetworkAclEntryInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("CreateNetworkAclEntry", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.cidr_block {
        writer.prefix("CidrBlock").string(var_1);
    }
    if let Some(var_2) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_2);
    }
    if let Some(var_3) = &input.egress {
        writer.prefix("Egress").boolean(*var_3);
    }
    if let Some(var_4) = &input.icmp_type_code {
        crate::query_ser::serialize_structure_icmp_type_code(writer.prefix("Icmp"), var_4)?;
    }
    if let Some(var_5) = &input.ipv6_cidr_block {
        writer.prefix("Ipv6CidrBlock").string(var_5);
    }
    if let Some(var_6) = &input.network_acl_id {
        writer.prefix("NetworkAclId").string(var_6);
    }
    if let Some(var_7) = &input.port_range {
        crate::query_ser::serialize_structure_port_range(writer.prefix("PortRange"), var_7)?;
    }
    if let Some(var_8) = &input.protocol {
        writer.prefix("Protocol").string(var_8);
    }
    if let Some(var_9) = &input.rule_action {
        writer.prefix("RuleAction").string(var_9.as_str());
    }
    if let Some(var_10) = &input.rule_number {
        writer.prefix("RuleNumber").number(smithy_types::Number::NegInt(i64::from(*var_10)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_create_volume(
    input: &crate::input::CreateVolumeInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("CreateVolume", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(var_1);
    }
    if let Some(var_2) = &input.encrypted {
        writer.prefix("Encrypted").boolean(*var_2);
    }
    if let Some(var_3) = &input.iops {
        writer.prefix("Iops").number(smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    if let Some(var_4) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(var_4);
    }
    if let Some(var_5) = &input.outpost_arn {
        writer.prefix("OutpostArn").string(var_5);
    }
    if let Some(var_6) = &input.size {
        writer.prefix("Size").number(smithy_types::Number::NegInt(i64::from(*var_6)));
    }
    if let Some(var_7) = &input.snapshot_id {
        writer.prefix("SnapshotId").string(var_7);
    }
    if let Some(var_8) = &input.volume_type {
        writer.prefix("VolumeType").string(var_8.as_str());
    }
    if let Some(var_9) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_9);
    }
    if let Some(var_10) = &input.tag_specifications {
        let mut list_11 = writer.prefix("TagSpecification").start_list(true, None);
        for item_12 in var_10 {
            crate::query_ser::serialize_structure_tag_specification(list_11.entry(), item_12)?;
        }
        list_11.finish();
    }
    if let Some(var_13) = &input.multi_attach_enabled {
        writer.prefix("MultiAttachEnabled").boolean(*var_13);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_create_vpc(
    input: &crate::input::CreateVpcInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("CreateVpc", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.cidr_block {
        writer.prefix("CidrBlock").string(var_1);
    }
    if let Some(var_2) = &input.amazon_provided_ipv6_cidr_block {
        writer.prefix("AmazonProvidedIpv6CidrBlock").boolean(*var_2);
    }
    if let Some(var_3) = &input.ipv6_pool {
        writer.prefix("Ipv6Pool").string(var_3);
    }
    if let Some(var_4) = &input.ipv6_cidr_block {
        writer.prefix("Ipv6CidrBlock").string(var_4);
    }
    if let Some(var_5) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_5);
    }
    if let Some(var_6) = &input.instance_tenancy {
        writer.prefix("InstanceTenancy").string(var_6.as_str());
    }
    if let Some(var_7) = &input.ipv6_cidr_block_network_border_group {
        writer.prefix("Ipv6CidrBlockNetworkBorderGroup").string(var_7);
    }
    if let Some(var_8) = &input.tag_specifications {
        let mut list_9 = writer.prefix("TagSpecification").start_list(true, None);
        for item_10 in var_8 {
            crate::query_ser::serialize_structure_tag_specification(list_9.entry(), item_10)?;
        }
        list_9.finish();
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_capacity_reservations(
    input: &crate::input::DescribeCapacityReservationsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeCapacityReservations", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.capacity_reservation_ids {
        let mut list_2 = writer.prefix("CapacityReservationId").start_list(true, None);
        for item_3 in var_1 {
            list_2.entry().string(item_3);
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.next_token {
        writer.prefix("NextToken").string(var_4);
    }
    if let Some(var_5) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_5)));
    }
    if let Some(var_6) = &input.filters {
        let mut list_7 = writer.prefix("Filter").start_list(true, None);
        for item_8 in var_6 {
            crate::query_ser::serialize_structure_filter(list_7.entry(), item_8)?;
        }
        list_7.finish();
    }
    if let Some(var_9) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_9);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_images(
    input: &crate::input::DescribeImagesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeImages", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.executable_users {
        let mut list_2 = writer.prefix("ExecutableBy").start_list(true, None);
        for item_3 in var_1 {
            list_2.entry().string(item_3);
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.filters {
        let mut list_5 = writer.prefix("Filter").start_list(true, None);
        for item_6 in var_4 {
            crate::query_ser::serialize_structure_filter(list_5.entry(), item_6)?;
        }
        list_5.finish();
    }
    if let Some(var_7) = &input.image_ids {
        let mut list_8 = writer.prefix("ImageId").start_list(true, None);
        for item_9 in var_7 {
            list_8.entry().string(item_9);
        }
        list_8.finish();
    }
    if let Some(var_10) = &input.owners {
        let mut list_11 = writer.prefix("Owner").start_list(true, None);
        for item_12 in var_10 {
            list_11.entry().string(item_12);
        }
        list_11.finish();
    }
    if let Some(var_13) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_13);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_instance_types(
    input: &crate::input::DescribeInstanceTypesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeInstanceTypes", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_1);
    }
    if let Some(var_2) = &input.instance_types {
        let mut list_3 = writer.prefix("InstanceType").start_list(true, None);
        for item_4 in var_2 {
            list_3.entry().string(item_4.as_str());
        }
        list_3.finish();
    }
    if let Some(var_5) = &input.filters {
        let mut list_6 = writer.prefix("Filter").start_list(true, None);
        for item_7 in var_5 {
            crate::query_ser::serialize_structure_filter(list_6.entry(), item_7)?;
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_8)));
    }
    if let Some(var_9) = &input.next_token {
        writer.prefix("NextToken").string(var_9);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_instances(
    input: &crate::input::DescribeInstancesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeInstances", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.instance_ids {
        let mut list_5 = writer.prefix("InstanceId").start_list(true, None);
        for item_6 in var_4 {
            list_5.entry().string(item_6);
        }
        list_5.finish();
    }
    if let Some(var_7) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_7);
    }
    if let Some(var_8) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_8)));
    }
    if let Some(var_9) = &input.next_token {
        writer.prefix("NextToken").string(var_9);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_network_interfaces(
    input: &crate::input::DescribeNetworkInterfacesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeNetworkInterfaces", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_4);
    }
    if let Some(var_5) = &input.network_interface_ids {
        let mut list_6 = writer.prefix("NetworkInterfaceId").start_list(true, None);
        for item_7 in var_5 {
            list_6.entry().string(item_7);
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.next_token {
        writer.prefix("NextToken").string(var_8);
    }
    if let Some(var_9) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_9)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_regions(
    input: &crate::input::DescribeRegionsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeRegions", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.region_names {
        let mut list_5 = writer.prefix("RegionName").start_list(true, None);
        for item_6 in var_4 {
            list_5.entry().string(item_6);
        }
        list_5.finish();
    }
    if let Some(var_7) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_7);
    }
    if let Some(var_8) = &input.all_regions {
        writer.prefix("AllRegions").boolean(*var_8);
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_reserved_instances_offerings(
    input: &crate::input::DescribeReservedInstancesOfferingsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeReservedInstancesOfferings", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(var_1);
    }
    if let Some(var_2) = &input.filters {
        let mut list_3 = writer.prefix("Filter").start_list(true, None);
        for item_4 in var_2 {
            crate::query_ser::serialize_structure_filter(list_3.entry(), item_4)?;
        }
        list_3.finish();
    }
    if let Some(var_5) = &input.include_marketplace {
        writer.prefix("IncludeMarketplace").boolean(*var_5);
    }
    if let Some(var_6) = &input.instance_type {
        writer.prefix("InstanceType").string(var_6.as_str());
    }
    if let Some(var_7) = &input.max_duration {
        writer.prefix("MaxDuration").number(smithy_types::Number::NegInt(*var_7));
    }
    if let Some(var_8) = &input.max_instance_count {
        writer.prefix("MaxInstanceCount").number(smithy_types::Number::NegInt(i64::from(*var_8)));
    }
    if let Some(var_9) = &input.min_duration {
        writer.prefix("MinDuration").number(smithy_types::Number::NegInt(*var_9));
    }
    if let Some(var_10) = &input.offering_class {
        writer.prefix("OfferingClass").string(var_10.as_str());
    }
    if let Some(var_11) = &input.product_description {
        writer.prefix("ProductDescription").string(var_11.as_str());
    }
    if let Some(var_12) = &input.reserved_instances_offering_ids {
        let mut list_13 = writer.prefix("ReservedInstancesOfferingId").start_list(true, None);
        for item_14 in var_12 {
            list_13.entry().string(item_14);
        }
        list_13.finish();
    }
    if let Some(var_15) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_15);
    }
    if let Some(var_16) = &input.instance_tenancy {
        writer.prefix("InstanceTenancy").string(var_16.as_str());
    }
    if let Some(var_17) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_17)));
    }
    if let Some(var_18) = &input.next_token {
        writer.prefix("NextToken").string(var_18);
    }
    if let Some(var_19) = &input.offering_type {
        writer.prefix("OfferingType").string(var_19.as_str());
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_route_tables(
    input: &crate::input::DescribeRouteTablesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeRouteTables", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_4);
    }
    if let Some(var_5) = &input.route_table_ids {
        let mut list_6 = writer.prefix("RouteTableId").start_list(true, None);
        for item_7 in var_5 {
            list_6.entry().string(item_7);
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.next_token {
        writer.prefix("NextToken").string(var_8);
    }
    if let Some(var_9) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_9)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_security_groups(
    input: &crate::input::DescribeSecurityGroupsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeSecurityGroups", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.group_ids {
        let mut list_5 = writer.prefix("GroupId").start_list(true, None);
        for item_6 in var_4 {
            list_5.entry().string(item_6);
        }
        list_5.finish();
    }
    if let Some(var_7) = &input.group_names {
        let mut list_8 = writer.prefix("GroupName").start_list(true, None);
        for item_9 in var_7 {
            list_8.entry().string(item_9);
        }
        list_8.finish();
    }
    if let Some(var_10) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_10);
    }
    if let Some(var_11) = &input.next_token {
        writer.prefix("NextToken").string(var_11);
    }
    if let Some(var_12) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_12)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_describe_spot_instance_requests(
    input: &crate::input::DescribeSpotInstanceRequestsInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("DescribeSpotInstanceRequests", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.filters {
        let mut list_2 = writer.prefix("Filter").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_filter(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_4);
    }
    if let Some(var_5) = &input.spot_instance_request_ids {
        let mut list_6 = writer.prefix("SpotInstanceRequestId").start_list(true, None);
        for item_7 in var_5 {
            list_6.entry().string(item_7);
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.next_token {
        writer.prefix("NextToken").string(var_8);
    }
    if let Some(var_9) = &input.max_results {
        writer.prefix("MaxResults").number(smithy_types::Number::NegInt(i64::from(*var_9)));
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_operation_run_instances(
    input: &crate::input::RunInstancesInput,
) -> Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError> {
    let mut request = smithy_query::QueryRequest::new("RunInstances", crate::API_VERSION);
    #[allow(unused_mut)]
    let mut writer = request.writer();
    if let Some(var_1) = &input.block_device_mappings {
        let mut list_2 = writer.prefix("BlockDeviceMapping").start_list(true, None);
        for item_3 in var_1 {
            crate::query_ser::serialize_structure_block_device_mapping(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    if let Some(var_4) = &input.image_id {
        writer.prefix("ImageId").string(var_4);
    }
    if let Some(var_5) = &input.instance_type {
        writer.prefix("InstanceType").string(var_5.as_str());
    }
    if let Some(var_6) = &input.ipv6_address_count {
        writer.prefix("Ipv6AddressCount").number(smithy_types::Number::NegInt(i64::from(*var_6)));
    }
    if let Some(var_7) = &input.ipv6_addresses {
        let mut list_8 = writer.prefix("Ipv6Address").start_list(true, None);
        for item_9 in var_7 {
            crate::query_ser::serialize_structure_instance_ipv6_address(list_8.entry(), item_9)?;
        }
        list_8.finish();
    }
    if let Some(var_10) = &input.kernel_id {
        writer.prefix("KernelId").string(var_10);
    }
    if let Some(var_11) = &input.key_name {
        writer.prefix("KeyName").string(var_11);
    }
    if let Some(var_12) = &input.max_count {
        writer.prefix("MaxCount").number(smithy_types::Number::NegInt(i64::from(*var_12)));
    }
    if let Some(var_13) = &input.min_count {
        writer.prefix("MinCount").number(smithy_types::Number::NegInt(i64::from(*var_13)));
    }
    if let Some(var_14) = &input.monitoring {
        crate::query_ser::serialize_structure_run_instances_monitoring_enabled(writer.prefix("Monitoring"), var_14)?;
    }
    if let Some(var_15) = &input.placement {
        crate::query_ser::serialize_structure_placement(writer.prefix("Placement"), var_15)?;
    }
    if let Some(var_16) = &input.ramdisk_id {
        writer.prefix("RamdiskId").string(var_16);
    }
    if let Some(var_17) = &input.security_group_ids {
        let mut list_18 = writer.prefix("SecurityGroupId").start_list(true, None);
        for item_19 in var_17 {
            list_18.entry().string(item_19);
        }
        list_18.finish();
    }
    if let Some(var_20) = &input.security_groups {
        let mut list_21 = writer.prefix("SecurityGroup").start_list(true, None);
        for item_22 in var_20 {
            list_21.entry().string(item_22);
        }
        list_21.finish();
    }
    if let Some(var_23) = &input.subnet_id {
        writer.prefix("SubnetId").string(var_23);
    }
    if let Some(var_24) = &input.user_data {
        writer.prefix("UserData").string(var_24);
    }
    if let Some(var_25) = &input.additional_info {
        writer.prefix("AdditionalInfo").string(var_25);
    }
    if let Some(var_26) = &input.client_token {
        writer.prefix("ClientToken").string(var_26);
    }
    if let Some(var_27) = &input.disable_api_termination {
        writer.prefix("DisableApiTermination").boolean(*var_27);
    }
    if let Some(var_28) = &input.dry_run {
        writer.prefix("DryRun").boolean(*var_28);
    }
    if let Some(var_29) = &input.ebs_optimized {
        writer.prefix("EbsOptimized").boolean(*var_29);
    }
    if let Some(var_30) = &input.iam_instance_profile {
        crate::query_ser::serialize_structure_iam_instance_profile_specification(writer.prefix("IamInstanceProfile"), var_30)?;
    }
    if let Some(var_31) = &input.instance_initiated_shutdown_behavior {
        writer.prefix("InstanceInitiatedShutdownBehavior").string(var_31.as_str());
    }
    if let Some(var_32) = &input.network_interfaces {
        let mut list_33 = writer.prefix("NetworkInterface").start_list(true, None);
        for item_34 in var_32 {
            crate::query_ser::serialize_structure_instance_network_interface_specification(list_33.entry(), item_34)?;
        }
        list_33.finish();
    }
    if let Some(var_35) = &input.private_ip_address {
        writer.prefix("PrivateIpAddress").string(var_35);
    }
    if let Some(var_36) = &input.elastic_gpu_specification {
        let mut list_37 = writer.prefix("ElasticGpuSpecification").start_list(true, None);
        for item_38 in var_36 {
            crate::query_ser::serialize_structure_elastic_gpu_specification(list_37.entry(), item_38)?;
        }
        list_37.finish();
    }
    if let Some(var_39) = &input.elastic_inference_accelerators {
        let mut list_40 = writer.prefix("ElasticInferenceAccelerator").start_list(true, None);
        for item_41 in var_39 {
            crate::query_ser::serialize_structure_elastic_inference_accelerator(list_40.entry(), item_41)?;
        }
        list_40.finish();
    }
    if let Some(var_42) = &input.tag_specifications {
        let mut list_43 = writer.prefix("TagSpecification").start_list(true, None);
        for item_44 in var_42 {
            crate::query_ser::serialize_structure_tag_specification(list_43.entry(), item_44)?;
        }
        list_43.finish();
    }
    if let Some(var_45) = &input.launch_template {
        crate::query_ser::serialize_structure_launch_template_specification(writer.prefix("LaunchTemplate"), var_45)?;
    }
    if let Some(var_46) = &input.instance_market_options {
        crate::query_ser::serialize_structure_instance_market_options_request(writer.prefix("InstanceMarketOptions"), var_46)?;
    }
    if let Some(var_47) = &input.credit_specification {
        crate::query_ser::serialize_structure_credit_specification_request(writer.prefix("CreditSpecification"), var_47)?;
    }
    if let Some(var_48) = &input.cpu_options {
        crate::query_ser::serialize_structure_cpu_options_request(writer.prefix("CpuOptions"), var_48)?;
    }
    if let Some(var_49) = &input.capacity_reservation_specification {
        crate::query_ser::serialize_structure_capacity_reservation_specification(writer.prefix("CapacityReservationSpecification"), var_49)?;
    }
    if let Some(var_50) = &input.hibernation_options {
        crate::query_ser::serialize_structure_hibernation_options_request(writer.prefix("HibernationOptions"), var_50)?;
    }
    if let Some(var_51) = &input.license_specifications {
        let mut list_52 = writer.prefix("LicenseSpecification").start_list(true, None);
        for item_53 in var_51 {
            crate::query_ser::serialize_structure_license_configuration_request(list_52.entry(), item_53)?;
        }
        list_52.finish();
    }
    if let Some(var_54) = &input.metadata_options {
        crate::query_ser::serialize_structure_instance_metadata_options_request(writer.prefix("MetadataOptions"), var_54)?;
    }
    writer.finish();
    Ok(request)
}

pub fn serialize_structure_tag_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::TagSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.resource_type {
        writer.prefix("ResourceType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.tags {
        let mut list_3 = writer.prefix("Tag").start_list(true, None);
        for item_4 in var_2 {
            crate::query_ser::serialize_structure_tag(list_3.entry(), item_4)?;
        }
        list_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_tag(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::Tag,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key {
        writer.prefix("Key").string(var_1);
    }
    if let Some(var_2) = &input.value {
        writer.prefix("Value").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_icmp_type_code(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::IcmpTypeCode,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.code {
        writer.prefix("Code").number(smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.r#type {
        writer.prefix("Type").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_port_range(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::PortRange,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.from {
        writer.prefix("From").number(smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.to {
        writer.prefix("To").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_filter(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::Filter,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    if let Some(var_2) = &input.values {
        let mut list_3 = writer.prefix("Value").start_list(true, None);
        for item_4 in var_2 {
            list_3.entry().string(item_4);
        }
        list_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_block_device_mapping(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::BlockDeviceMapping,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.device_name {
        writer.prefix("DeviceName").string(var_1);
    }
    if let Some(var_2) = &input.virtual_name {
        writer.prefix("VirtualName").string(var_2);
    }
    if let Some(var_3) = &input.ebs {
        crate::query_ser::serialize_structure_ebs_block_device(writer.prefix("Ebs"), var_3)?;
    }
    if let Some(var_4) = &input.no_device {
        writer.prefix("NoDevice").string(var_4);
    }
    Ok(())
}

pub fn serialize_structure_ebs_block_device(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::EbsBlockDevice,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.delete_on_termination {
        writer.prefix("DeleteOnTermination").boolean(*var_1);
    }
    if let Some(var_2) = &input.iops {
        writer.prefix("Iops").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.snapshot_id {
        writer.prefix("SnapshotId").string(var_3);
    }
    if let Some(var_4) = &input.volume_size {
        writer.prefix("VolumeSize").number(smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    if let Some(var_5) = &input.volume_type {
        writer.prefix("VolumeType").string(var_5.as_str());
    }
    if let Some(var_6) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(var_6);
    }
    if let Some(var_7) = &input.encrypted {
        writer.prefix("Encrypted").boolean(*var_7);
    }
    Ok(())
}

pub fn serialize_structure_instance_ipv6_address(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::InstanceIpv6Address,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.ipv6_address {
        writer.prefix("Ipv6Address").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_run_instances_monitoring_enabled(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::RunInstancesMonitoringEnabled,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.enabled {
        writer.prefix("Enabled").boolean(*var_1);
    }
    Ok(())
}

pub fn serialize_structure_placement(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::Placement,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(var_1);
    }
    if let Some(var_2) = &input.affinity {
        writer.prefix("Affinity").string(var_2);
    }
    if let Some(var_3) = &input.group_name {
        writer.prefix("GroupName").string(var_3);
    }
    if let Some(var_4) = &input.partition_number {
        writer.prefix("PartitionNumber").number(smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    if let Some(var_5) = &input.host_id {
        writer.prefix("HostId").string(var_5);
    }
    if let Some(var_6) = &input.tenancy {
        writer.prefix("Tenancy").string(var_6.as_str());
    }
    if let Some(var_7) = &input.spread_domain {
        writer.prefix("SpreadDomain").string(var_7);
    }
    if let Some(var_8) = &input.host_resource_group_arn {
        writer.prefix("HostResourceGroupArn").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_iam_instance_profile_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::IamInstanceProfileSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.arn {
        writer.prefix("Arn").string(var_1);
    }
    if let Some(var_2) = &input.name {
        writer.prefix("Name").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_instance_network_interface_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::InstanceNetworkInterfaceSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.associate_public_ip_address {
        writer.prefix("AssociatePublicIpAddress").boolean(*var_1);
    }
    if let Some(var_2) = &input.delete_on_termination {
        writer.prefix("DeleteOnTermination").boolean(*var_2);
    }
    if let Some(var_3) = &input.description {
        writer.prefix("Description").string(var_3);
    }
    if let Some(var_4) = &input.device_index {
        writer.prefix("DeviceIndex").number(smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    if let Some(var_5) = &input.groups {
        let mut list_6 = writer.prefix("SecurityGroupId").start_list(true, None);
        for item_7 in var_5 {
            list_6.entry().string(item_7);
        }
        list_6.finish();
    }
    if let Some(var_8) = &input.ipv6_address_count {
        writer.prefix("Ipv6AddressCount").number(smithy_types::Number::NegInt(i64::from(*var_8)));
    }
    if let Some(var_9) = &input.ipv6_addresses {
        let mut list_10 = writer.prefix("Ipv6Addresses").start_list(true, None);
        for item_11 in var_9 {
            crate::query_ser::serialize_structure_instance_ipv6_address(list_10.entry(), item_11)?;
        }
        list_10.finish();
    }
    if let Some(var_12) = &input.network_interface_id {
        writer.prefix("NetworkInterfaceId").string(var_12);
    }
    if let Some(var_13) = &input.private_ip_address {
        writer.prefix("PrivateIpAddress").string(var_13);
    }
    if let Some(var_14) = &input.private_ip_addresses {
        let mut list_15 = writer.prefix("PrivateIpAddresses").start_list(true, None);
        for item_16 in var_14 {
            crate::query_ser::serialize_structure_private_ip_address_specification(list_15.entry(), item_16)?;
        }
        list_15.finish();
    }
    if let Some(var_17) = &input.secondary_private_ip_address_count {
        writer.prefix("SecondaryPrivateIpAddressCount").number(smithy_types::Number::NegInt(i64::from(*var_17)));
    }
    if let Some(var_18) = &input.subnet_id {
        writer.prefix("SubnetId").string(var_18);
    }
    if let Some(var_19) = &input.interface_type {
        writer.prefix("InterfaceType").string(var_19);
    }
    Ok(())
}

pub fn serialize_structure_private_ip_address_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::PrivateIpAddressSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.primary {
        writer.prefix("Primary").boolean(*var_1);
    }
    if let Some(var_2) = &input.private_ip_address {
        writer.prefix("PrivateIpAddress").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_elastic_gpu_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::ElasticGpuSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.r#type {
        writer.prefix("Type").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_elastic_inference_accelerator(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::ElasticInferenceAccelerator,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.r#type {
        writer.prefix("Type").string(var_1);
    }
    if let Some(var_2) = &input.count {
        writer.prefix("Count").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_launch_template_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::LaunchTemplateSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.launch_template_id {
        writer.prefix("LaunchTemplateId").string(var_1);
    }
    if let Some(var_2) = &input.launch_template_name {
        writer.prefix("LaunchTemplateName").string(var_2);
    }
    if let Some(var_3) = &input.version {
        writer.prefix("Version").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_instance_market_options_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::InstanceMarketOptionsRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.market_type {
        writer.prefix("MarketType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.spot_options {
        crate::query_ser::serialize_structure_spot_market_options(writer.prefix("SpotOptions"), var_2)?;
    }
    Ok(())
}

pub fn serialize_structure_spot_market_options(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::SpotMarketOptions,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.max_price {
        writer.prefix("MaxPrice").string(var_1);
    }
    if let Some(var_2) = &input.spot_instance_type {
        writer.prefix("SpotInstanceType").string(var_2.as_str());
    }
    if let Some(var_3) = &input.block_duration_minutes {
        writer.prefix("BlockDurationMinutes").number(smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    if let Some(var_4) = &input.valid_until {
        writer.prefix("ValidUntil").instant(var_4, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_5) = &input.instance_interruption_behavior {
        writer.prefix("InstanceInterruptionBehavior").string(var_5.as_str());
    }
    Ok(())
}

pub fn serialize_structure_credit_specification_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::CreditSpecificationRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.cpu_credits {
        writer.prefix("CpuCredits").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_cpu_options_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::CpuOptionsRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.core_count {
        writer.prefix("CoreCount").number(smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.threads_per_core {
        writer.prefix("ThreadsPerCore").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_capacity_reservation_specification(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::CapacityReservationSpecification,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.capacity_reservation_preference {
        writer.prefix("CapacityReservationPreference").string(var_1.as_str());
    }
    if let Some(var_2) = &input.capacity_reservation_target {
        crate::query_ser::serialize_structure_capacity_reservation_target(writer.prefix("CapacityReservationTarget"), var_2)?;
    }
    Ok(())
}

pub fn serialize_structure_capacity_reservation_target(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::CapacityReservationTarget,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.capacity_reservation_id {
        writer.prefix("CapacityReservationId").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_hibernation_options_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::HibernationOptionsRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.configured {
        writer.prefix("Configured").boolean(*var_1);
    }
    Ok(())
}

pub fn serialize_structure_license_configuration_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::LicenseConfigurationRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.license_configuration_arn {
        writer.prefix("LicenseConfigurationArn").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_instance_metadata_options_request(
    #[allow(unused_mut)] mut writer: smithy_query::QueryValueWriter<'_>,
    input: &crate::model::InstanceMetadataOptionsRequest,
) -> Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.http_tokens {
        writer.prefix("HttpTokens").string(var_1.as_str());
    }
    if let Some(var_2) = &input.http_put_response_hop_limit {
        writer.prefix("HttpPutResponseHopLimit").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.http_endpoint {
        writer.prefix("HttpEndpoint").string(var_3.as_str());
    }
    Ok(())
}
