/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structural laws checked for every generated model, input and output type.

use smithy_types::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! model_laws {
    ($($test:ident: $ty:ty $(=> $setter:ident($value:expr), $member:literal)?;)*) => {
        $(
            #[test]
            fn $test() {
                let default = <$ty>::default();
                assert_eq!(format!("{:?}", default), "{}");
                assert_eq!(default, default.clone());
                assert_eq!(hash_of(&default), hash_of(&default.clone()));
                assert_eq!(<$ty>::builder().build(), default);
                $(
                    let set = <$ty>::builder().$setter(Some($value)).build();
                    let debug = format!("{:?}", set);
                    assert!(debug.starts_with(concat!("{", $member, ": ")), "{}", debug);
                    assert!(debug.ends_with('}'), "{}", debug);
                    assert_ne!(set, default);
                    assert_eq!(set, set.clone());
                    assert_eq!(hash_of(&set), hash_of(&set.clone()));
                    assert_eq!(<$ty>::builder().$setter(None).build(), default);
                )?
            }
        )*
    };
}

mod models {
    use super::*;

    model_laws! {
        filter: ec2::model::Filter => set_name("x".to_string()), "Name";
        tag: ec2::model::Tag => set_key("x".to_string()), "Key";
        tag_specification: ec2::model::TagSpecification => set_resource_type(ec2::model::ResourceType::from("x")), "ResourceType";
        ebs_block_device: ec2::model::EbsBlockDevice => set_delete_on_termination(true), "DeleteOnTermination";
        block_device_mapping: ec2::model::BlockDeviceMapping => set_device_name("x".to_string()), "DeviceName";
        placement: ec2::model::Placement => set_availability_zone("x".to_string()), "AvailabilityZone";
        instance_ipv6_address: ec2::model::InstanceIpv6Address => set_ipv6_address("x".to_string()), "Ipv6Address";
        private_ip_address_specification: ec2::model::PrivateIpAddressSpecification => set_primary(true), "Primary";
        instance_network_interface_specification: ec2::model::InstanceNetworkInterfaceSpecification => set_associate_public_ip_address(true), "AssociatePublicIpAddress";
        run_instances_monitoring_enabled: ec2::model::RunInstancesMonitoringEnabled => set_enabled(true), "Enabled";
        iam_instance_profile_specification: ec2::model::IamInstanceProfileSpecification => set_arn("x".to_string()), "Arn";
        elastic_gpu_specification: ec2::model::ElasticGpuSpecification => set_type("x".to_string()), "Type";
        elastic_inference_accelerator: ec2::model::ElasticInferenceAccelerator => set_type("x".to_string()), "Type";
        launch_template_specification: ec2::model::LaunchTemplateSpecification => set_launch_template_id("x".to_string()), "LaunchTemplateId";
        spot_market_options: ec2::model::SpotMarketOptions => set_max_price("x".to_string()), "MaxPrice";
        instance_market_options_request: ec2::model::InstanceMarketOptionsRequest => set_market_type(ec2::model::MarketType::from("x")), "MarketType";
        credit_specification_request: ec2::model::CreditSpecificationRequest => set_cpu_credits("x".to_string()), "CpuCredits";
        cpu_options_request: ec2::model::CpuOptionsRequest => set_core_count(1), "CoreCount";
        capacity_reservation_target: ec2::model::CapacityReservationTarget => set_capacity_reservation_id("x".to_string()), "CapacityReservationId";
        capacity_reservation_specification: ec2::model::CapacityReservationSpecification => set_capacity_reservation_preference(ec2::model::CapacityReservationPreference::from("x")), "CapacityReservationPreference";
        hibernation_options_request: ec2::model::HibernationOptionsRequest => set_configured(true), "Configured";
        license_configuration_request: ec2::model::LicenseConfigurationRequest => set_license_configuration_arn("x".to_string()), "LicenseConfigurationArn";
        instance_metadata_options_request: ec2::model::InstanceMetadataOptionsRequest => set_http_tokens(ec2::model::HttpTokensState::from("x")), "HttpTokens";
        icmp_type_code: ec2::model::IcmpTypeCode => set_code(1), "Code";
        port_range: ec2::model::PortRange => set_from(1), "From";
        monitoring: ec2::model::Monitoring => set_state(ec2::model::MonitoringState::from("x")), "State";
        product_code: ec2::model::ProductCode => set_product_code_id("x".to_string()), "ProductCodeId";
        instance_state: ec2::model::InstanceState => set_code(1), "Code";
        ebs_instance_block_device: ec2::model::EbsInstanceBlockDevice => set_attach_time(Instant::from_epoch_seconds(0)), "AttachTime";
        instance_block_device_mapping: ec2::model::InstanceBlockDeviceMapping => set_device_name("x".to_string()), "DeviceName";
        iam_instance_profile: ec2::model::IamInstanceProfile => set_arn("x".to_string()), "Arn";
        elastic_gpu_association: ec2::model::ElasticGpuAssociation => set_elastic_gpu_id("x".to_string()), "ElasticGpuId";
        elastic_inference_accelerator_association: ec2::model::ElasticInferenceAcceleratorAssociation => set_elastic_inference_accelerator_arn("x".to_string()), "ElasticInferenceAcceleratorArn";
        instance_network_interface_association: ec2::model::InstanceNetworkInterfaceAssociation => set_ip_owner_id("x".to_string()), "IpOwnerId";
        instance_network_interface_attachment: ec2::model::InstanceNetworkInterfaceAttachment => set_attach_time(Instant::from_epoch_seconds(0)), "AttachTime";
        group_identifier: ec2::model::GroupIdentifier => set_group_name("x".to_string()), "GroupName";
        instance_private_ip_address: ec2::model::InstancePrivateIpAddress => set_association(ec2::model::InstanceNetworkInterfaceAssociation::default()), "Association";
        instance_network_interface: ec2::model::InstanceNetworkInterface => set_association(ec2::model::InstanceNetworkInterfaceAssociation::default()), "Association";
        state_reason: ec2::model::StateReason => set_code("x".to_string()), "Code";
        cpu_options: ec2::model::CpuOptions => set_core_count(1), "CoreCount";
        capacity_reservation_target_response: ec2::model::CapacityReservationTargetResponse => set_capacity_reservation_id("x".to_string()), "CapacityReservationId";
        capacity_reservation_specification_response: ec2::model::CapacityReservationSpecificationResponse => set_capacity_reservation_preference(ec2::model::CapacityReservationPreference::from("x")), "CapacityReservationPreference";
        hibernation_options: ec2::model::HibernationOptions => set_configured(true), "Configured";
        license_configuration: ec2::model::LicenseConfiguration => set_license_configuration_arn("x".to_string()), "LicenseConfigurationArn";
        instance_metadata_options_response: ec2::model::InstanceMetadataOptionsResponse => set_state(ec2::model::InstanceMetadataOptionsState::from("x")), "State";
        instance: ec2::model::Instance => set_ami_launch_index(1), "AmiLaunchIndex";
        reservation: ec2::model::Reservation => set_groups(vec![]), "Groups";
        image: ec2::model::Image => set_architecture(ec2::model::ArchitectureValues::from("x")), "Architecture";
        capacity_reservation: ec2::model::CapacityReservation => set_capacity_reservation_id("x".to_string()), "CapacityReservationId";
        recurring_charge: ec2::model::RecurringCharge => set_amount(1.0), "Amount";
        reserved_instances: ec2::model::ReservedInstances => set_availability_zone("x".to_string()), "AvailabilityZone";
        pricing_detail: ec2::model::PricingDetail => set_count(1), "Count";
        reserved_instances_offering: ec2::model::ReservedInstancesOffering => set_availability_zone("x".to_string()), "AvailabilityZone";
        processor_info: ec2::model::ProcessorInfo => set_supported_architectures(vec![]), "SupportedArchitectures";
        v_cpu_info: ec2::model::VCpuInfo => set_default_v_cpus(1), "DefaultVCpus";
        memory_info: ec2::model::MemoryInfo => set_size_in_mi_b(1), "SizeInMiB";
        disk_info: ec2::model::DiskInfo => set_size_in_gb(1), "SizeInGB";
        instance_storage_info: ec2::model::InstanceStorageInfo => set_total_size_in_gb(1), "TotalSizeInGB";
        ebs_optimized_info: ec2::model::EbsOptimizedInfo => set_baseline_bandwidth_in_mbps(1), "BaselineBandwidthInMbps";
        ebs_info: ec2::model::EbsInfo => set_ebs_optimized_support(ec2::model::EbsOptimizedSupport::from("x")), "EbsOptimizedSupport";
        network_info: ec2::model::NetworkInfo => set_network_performance("x".to_string()), "NetworkPerformance";
        gpu_device_memory_info: ec2::model::GpuDeviceMemoryInfo => set_size_in_mi_b(1), "SizeInMiB";
        gpu_device_info: ec2::model::GpuDeviceInfo => set_name("x".to_string()), "Name";
        gpu_info: ec2::model::GpuInfo => set_gpus(vec![]), "Gpus";
        fpga_device_memory_info: ec2::model::FpgaDeviceMemoryInfo => set_size_in_mi_b(1), "SizeInMiB";
        fpga_device_info: ec2::model::FpgaDeviceInfo => set_name("x".to_string()), "Name";
        fpga_info: ec2::model::FpgaInfo => set_fpgas(vec![]), "Fpgas";
        placement_group_info: ec2::model::PlacementGroupInfo => set_supported_strategies(vec![]), "SupportedStrategies";
        inference_device_info: ec2::model::InferenceDeviceInfo => set_count(1), "Count";
        inference_accelerator_info: ec2::model::InferenceAcceleratorInfo => set_accelerators(vec![]), "Accelerators";
        instance_type_info: ec2::model::InstanceTypeInfo => set_instance_type(ec2::model::InstanceType::from("x")), "InstanceType";
        fleet_launch_template_specification: ec2::model::FleetLaunchTemplateSpecification => set_launch_template_id("x".to_string()), "LaunchTemplateId";
        placement_response: ec2::model::PlacementResponse => set_group_name("x".to_string()), "GroupName";
        fleet_launch_template_overrides: ec2::model::FleetLaunchTemplateOverrides => set_instance_type(ec2::model::InstanceType::from("x")), "InstanceType";
        fleet_launch_template_config: ec2::model::FleetLaunchTemplateConfig => set_launch_template_specification(ec2::model::FleetLaunchTemplateSpecification::default()), "LaunchTemplateSpecification";
        target_capacity_specification: ec2::model::TargetCapacitySpecification => set_total_target_capacity(1), "TotalTargetCapacity";
        spot_options: ec2::model::SpotOptions => set_allocation_strategy(ec2::model::SpotAllocationStrategy::from("x")), "AllocationStrategy";
        capacity_reservation_options: ec2::model::CapacityReservationOptions => set_usage_strategy(ec2::model::FleetCapacityReservationUsageStrategy::from("x")), "UsageStrategy";
        on_demand_options: ec2::model::OnDemandOptions => set_allocation_strategy(ec2::model::FleetOnDemandAllocationStrategy::from("x")), "AllocationStrategy";
        launch_template_and_overrides_response: ec2::model::LaunchTemplateAndOverridesResponse => set_launch_template_specification(ec2::model::FleetLaunchTemplateSpecification::default()), "LaunchTemplateSpecification";
        describe_fleet_error: ec2::model::DescribeFleetError => set_launch_template_and_overrides(ec2::model::LaunchTemplateAndOverridesResponse::default()), "LaunchTemplateAndOverrides";
        describe_fleets_instances: ec2::model::DescribeFleetsInstances => set_launch_template_and_overrides(ec2::model::LaunchTemplateAndOverridesResponse::default()), "LaunchTemplateAndOverrides";
        fleet_data: ec2::model::FleetData => set_activity_status(ec2::model::FleetActivityStatus::from("x")), "ActivityStatus";
        spot_fleet_monitoring: ec2::model::SpotFleetMonitoring => set_enabled(true), "Enabled";
        spot_placement: ec2::model::SpotPlacement => set_availability_zone("x".to_string()), "AvailabilityZone";
        spot_fleet_tag_specification: ec2::model::SpotFleetTagSpecification => set_resource_type(ec2::model::ResourceType::from("x")), "ResourceType";
        spot_fleet_launch_specification: ec2::model::SpotFleetLaunchSpecification => set_security_groups(vec![]), "SecurityGroups";
        launch_template_overrides: ec2::model::LaunchTemplateOverrides => set_instance_type(ec2::model::InstanceType::from("x")), "InstanceType";
        launch_template_config: ec2::model::LaunchTemplateConfig => set_launch_template_specification(ec2::model::FleetLaunchTemplateSpecification::default()), "LaunchTemplateSpecification";
        classic_load_balancer: ec2::model::ClassicLoadBalancer => set_name("x".to_string()), "Name";
        classic_load_balancers_config: ec2::model::ClassicLoadBalancersConfig => set_classic_load_balancers(vec![]), "ClassicLoadBalancers";
        target_group: ec2::model::TargetGroup => set_arn("x".to_string()), "Arn";
        target_groups_config: ec2::model::TargetGroupsConfig => set_target_groups(vec![]), "TargetGroups";
        load_balancers_config: ec2::model::LoadBalancersConfig => set_classic_load_balancers_config(ec2::model::ClassicLoadBalancersConfig::default()), "ClassicLoadBalancersConfig";
        spot_fleet_request_config_data: ec2::model::SpotFleetRequestConfigData => set_allocation_strategy(ec2::model::AllocationStrategy::from("x")), "AllocationStrategy";
        phase1_encryption_algorithms_request_list_value: ec2::model::Phase1EncryptionAlgorithmsRequestListValue => set_value("x".to_string()), "Value";
        phase2_encryption_algorithms_request_list_value: ec2::model::Phase2EncryptionAlgorithmsRequestListValue => set_value("x".to_string()), "Value";
        phase1_integrity_algorithms_request_list_value: ec2::model::Phase1IntegrityAlgorithmsRequestListValue => set_value("x".to_string()), "Value";
        phase2_integrity_algorithms_request_list_value: ec2::model::Phase2IntegrityAlgorithmsRequestListValue => set_value("x".to_string()), "Value";
        phase1_dh_group_numbers_request_list_value: ec2::model::Phase1DHGroupNumbersRequestListValue => set_value(1), "Value";
        phase2_dh_group_numbers_request_list_value: ec2::model::Phase2DHGroupNumbersRequestListValue => set_value(1), "Value";
        ike_versions_request_list_value: ec2::model::IKEVersionsRequestListValue => set_value("x".to_string()), "Value";
        vpn_tunnel_options_specification: ec2::model::VpnTunnelOptionsSpecification => set_tunnel_inside_cidr("x".to_string()), "TunnelInsideCidr";
        unsuccessful_item_error: ec2::model::UnsuccessfulItemError => set_code("x".to_string()), "Code";
        unsuccessful_item: ec2::model::UnsuccessfulItem => set_error(ec2::model::UnsuccessfulItemError::default()), "Error";
        vpc_cidr_block_state: ec2::model::VpcCidrBlockState => set_state(ec2::model::VpcCidrBlockStateCode::from("x")), "State";
        vpc_ipv6_cidr_block_association: ec2::model::VpcIpv6CidrBlockAssociation => set_association_id("x".to_string()), "AssociationId";
        vpc_cidr_block_association: ec2::model::VpcCidrBlockAssociation => set_association_id("x".to_string()), "AssociationId";
        vpc: ec2::model::Vpc => set_cidr_block("x".to_string()), "CidrBlock";
        network_interface_association: ec2::model::NetworkInterfaceAssociation => set_allocation_id("x".to_string()), "AllocationId";
        network_interface_attachment: ec2::model::NetworkInterfaceAttachment => set_attach_time(Instant::from_epoch_seconds(0)), "AttachTime";
        network_interface_ipv6_address: ec2::model::NetworkInterfaceIpv6Address => set_ipv6_address("x".to_string()), "Ipv6Address";
        network_interface_private_ip_address: ec2::model::NetworkInterfacePrivateIpAddress => set_association(ec2::model::NetworkInterfaceAssociation::default()), "Association";
        network_interface: ec2::model::NetworkInterface => set_association(ec2::model::NetworkInterfaceAssociation::default()), "Association";
        route_table_association_state: ec2::model::RouteTableAssociationState => set_state(ec2::model::RouteTableAssociationStateCode::from("x")), "State";
        route_table_association: ec2::model::RouteTableAssociation => set_main(true), "Main";
        propagating_vgw: ec2::model::PropagatingVgw => set_gateway_id("x".to_string()), "GatewayId";
        route: ec2::model::Route => set_destination_cidr_block("x".to_string()), "DestinationCidrBlock";
        route_table: ec2::model::RouteTable => set_associations(vec![]), "Associations";
        ip_range: ec2::model::IpRange => set_cidr_ip("x".to_string()), "CidrIp";
        ipv6_range: ec2::model::Ipv6Range => set_cidr_ipv6("x".to_string()), "CidrIpv6";
        prefix_list_id: ec2::model::PrefixListId => set_description("x".to_string()), "Description";
        user_id_group_pair: ec2::model::UserIdGroupPair => set_description("x".to_string()), "Description";
        ip_permission: ec2::model::IpPermission => set_from_port(1), "FromPort";
        security_group: ec2::model::SecurityGroup => set_description("x".to_string()), "Description";
        spot_instance_state_fault: ec2::model::SpotInstanceStateFault => set_code("x".to_string()), "Code";
        spot_instance_status: ec2::model::SpotInstanceStatus => set_code("x".to_string()), "Code";
        launch_specification: ec2::model::LaunchSpecification => set_user_data("x".to_string()), "UserData";
        spot_instance_request: ec2::model::SpotInstanceRequest => set_actual_block_hourly_price("x".to_string()), "ActualBlockHourlyPrice";
        region: ec2::model::Region => set_endpoint("x".to_string()), "Endpoint";
        launch_template_iam_instance_profile_specification_request: ec2::model::LaunchTemplateIamInstanceProfileSpecificationRequest => set_arn("x".to_string()), "Arn";
        launch_template_ebs_block_device_request: ec2::model::LaunchTemplateEbsBlockDeviceRequest => set_encrypted(true), "Encrypted";
        launch_template_block_device_mapping_request: ec2::model::LaunchTemplateBlockDeviceMappingRequest => set_device_name("x".to_string()), "DeviceName";
        instance_ipv6_address_request: ec2::model::InstanceIpv6AddressRequest => set_ipv6_address("x".to_string()), "Ipv6Address";
        launch_template_instance_network_interface_specification_request: ec2::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest => set_associate_public_ip_address(true), "AssociatePublicIpAddress";
        launch_templates_monitoring_request: ec2::model::LaunchTemplatesMonitoringRequest => set_enabled(true), "Enabled";
        launch_template_placement_request: ec2::model::LaunchTemplatePlacementRequest => set_availability_zone("x".to_string()), "AvailabilityZone";
        launch_template_tag_specification_request: ec2::model::LaunchTemplateTagSpecificationRequest => set_resource_type(ec2::model::ResourceType::from("x")), "ResourceType";
        launch_template_elastic_inference_accelerator: ec2::model::LaunchTemplateElasticInferenceAccelerator => set_type("x".to_string()), "Type";
        launch_template_spot_market_options_request: ec2::model::LaunchTemplateSpotMarketOptionsRequest => set_max_price("x".to_string()), "MaxPrice";
        launch_template_instance_market_options_request: ec2::model::LaunchTemplateInstanceMarketOptionsRequest => set_market_type(ec2::model::MarketType::from("x")), "MarketType";
        launch_template_cpu_options_request: ec2::model::LaunchTemplateCpuOptionsRequest => set_core_count(1), "CoreCount";
        launch_template_capacity_reservation_specification_request: ec2::model::LaunchTemplateCapacityReservationSpecificationRequest => set_capacity_reservation_preference(ec2::model::CapacityReservationPreference::from("x")), "CapacityReservationPreference";
        launch_template_license_configuration_request: ec2::model::LaunchTemplateLicenseConfigurationRequest => set_license_configuration_arn("x".to_string()), "LicenseConfigurationArn";
        launch_template_hibernation_options_request: ec2::model::LaunchTemplateHibernationOptionsRequest => set_configured(true), "Configured";
        launch_template_instance_metadata_options_request: ec2::model::LaunchTemplateInstanceMetadataOptionsRequest => set_http_tokens(ec2::model::LaunchTemplateHttpTokensState::from("x")), "HttpTokens";
        request_launch_template_data: ec2::model::RequestLaunchTemplateData => set_kernel_id("x".to_string()), "KernelId";
        launch_template_iam_instance_profile_specification: ec2::model::LaunchTemplateIamInstanceProfileSpecification => set_arn("x".to_string()), "Arn";
        launch_template_ebs_block_device: ec2::model::LaunchTemplateEbsBlockDevice => set_encrypted(true), "Encrypted";
        launch_template_block_device_mapping: ec2::model::LaunchTemplateBlockDeviceMapping => set_device_name("x".to_string()), "DeviceName";
        launch_template_instance_network_interface_specification: ec2::model::LaunchTemplateInstanceNetworkInterfaceSpecification => set_associate_public_ip_address(true), "AssociatePublicIpAddress";
        launch_templates_monitoring: ec2::model::LaunchTemplatesMonitoring => set_enabled(true), "Enabled";
        launch_template_placement: ec2::model::LaunchTemplatePlacement => set_availability_zone("x".to_string()), "AvailabilityZone";
        launch_template_tag_specification: ec2::model::LaunchTemplateTagSpecification => set_resource_type(ec2::model::ResourceType::from("x")), "ResourceType";
        elastic_gpu_specification_response: ec2::model::ElasticGpuSpecificationResponse => set_type("x".to_string()), "Type";
        launch_template_elastic_inference_accelerator_response: ec2::model::LaunchTemplateElasticInferenceAcceleratorResponse => set_type("x".to_string()), "Type";
        launch_template_spot_market_options: ec2::model::LaunchTemplateSpotMarketOptions => set_max_price("x".to_string()), "MaxPrice";
        launch_template_instance_market_options: ec2::model::LaunchTemplateInstanceMarketOptions => set_market_type(ec2::model::MarketType::from("x")), "MarketType";
        credit_specification: ec2::model::CreditSpecification => set_cpu_credits("x".to_string()), "CpuCredits";
        launch_template_cpu_options: ec2::model::LaunchTemplateCpuOptions => set_core_count(1), "CoreCount";
        launch_template_capacity_reservation_specification_response: ec2::model::LaunchTemplateCapacityReservationSpecificationResponse => set_capacity_reservation_preference(ec2::model::CapacityReservationPreference::from("x")), "CapacityReservationPreference";
        launch_template_license_configuration: ec2::model::LaunchTemplateLicenseConfiguration => set_license_configuration_arn("x".to_string()), "LicenseConfigurationArn";
        launch_template_hibernation_options: ec2::model::LaunchTemplateHibernationOptions => set_configured(true), "Configured";
        launch_template_instance_metadata_options: ec2::model::LaunchTemplateInstanceMetadataOptions => set_state(ec2::model::LaunchTemplateInstanceMetadataOptionsState::from("x")), "State";
        response_launch_template_data: ec2::model::ResponseLaunchTemplateData => set_kernel_id("x".to_string()), "KernelId";
    }
}

mod inputs {
    use super::*;

    model_laws! {
        create_capacity_reservation_input: ec2::input::CreateCapacityReservationInput => set_client_token("x".to_string()), "ClientToken";
        create_flow_logs_input: ec2::input::CreateFlowLogsInput => set_dry_run(true), "DryRun";
        create_network_acl_entry_input: ec2::input::CreateNetworkAclEntryInput => set_cidr_block("x".to_string()), "CidrBlock";
        create_volume_input: ec2::input::CreateVolumeInput => set_availability_zone("x".to_string()), "AvailabilityZone";
        create_vpc_input: ec2::input::CreateVpcInput => set_cidr_block("x".to_string()), "CidrBlock";
        describe_capacity_reservations_input: ec2::input::DescribeCapacityReservationsInput => set_capacity_reservation_ids(vec![]), "CapacityReservationIds";
        describe_images_input: ec2::input::DescribeImagesInput => set_executable_users(vec![]), "ExecutableUsers";
        describe_instance_types_input: ec2::input::DescribeInstanceTypesInput => set_dry_run(true), "DryRun";
        describe_instances_input: ec2::input::DescribeInstancesInput => set_filters(vec![]), "Filters";
        describe_network_interfaces_input: ec2::input::DescribeNetworkInterfacesInput => set_filters(vec![]), "Filters";
        describe_regions_input: ec2::input::DescribeRegionsInput => set_filters(vec![]), "Filters";
        describe_reserved_instances_offerings_input: ec2::input::DescribeReservedInstancesOfferingsInput => set_availability_zone("x".to_string()), "AvailabilityZone";
        describe_route_tables_input: ec2::input::DescribeRouteTablesInput => set_filters(vec![]), "Filters";
        describe_security_groups_input: ec2::input::DescribeSecurityGroupsInput => set_filters(vec![]), "Filters";
        describe_spot_instance_requests_input: ec2::input::DescribeSpotInstanceRequestsInput => set_filters(vec![]), "Filters";
        run_instances_input: ec2::input::RunInstancesInput => set_block_device_mappings(vec![]), "BlockDeviceMappings";
    }
}

mod outputs {
    use super::*;

    model_laws! {
        create_capacity_reservation_output: ec2::output::CreateCapacityReservationOutput => set_capacity_reservation(ec2::model::CapacityReservation::default()), "CapacityReservation";
        create_flow_logs_output: ec2::output::CreateFlowLogsOutput => set_client_token("x".to_string()), "ClientToken";
        create_network_acl_entry_output: ec2::output::CreateNetworkAclEntryOutput;
        create_volume_output: ec2::output::CreateVolumeOutput => set_availability_zone("x".to_string()), "AvailabilityZone";
        create_vpc_output: ec2::output::CreateVpcOutput => set_vpc(ec2::model::Vpc::default()), "Vpc";
        describe_capacity_reservations_output: ec2::output::DescribeCapacityReservationsOutput => set_next_token("x".to_string()), "NextToken";
        describe_images_output: ec2::output::DescribeImagesOutput => set_images(vec![]), "Images";
        describe_instance_types_output: ec2::output::DescribeInstanceTypesOutput => set_instance_types(vec![]), "InstanceTypes";
        describe_instances_output: ec2::output::DescribeInstancesOutput => set_reservations(vec![]), "Reservations";
        describe_network_interfaces_output: ec2::output::DescribeNetworkInterfacesOutput => set_network_interfaces(vec![]), "NetworkInterfaces";
        describe_regions_output: ec2::output::DescribeRegionsOutput => set_regions(vec![]), "Regions";
        describe_reserved_instances_offerings_output: ec2::output::DescribeReservedInstancesOfferingsOutput => set_reserved_instances_offerings(vec![]), "ReservedInstancesOfferings";
        describe_route_tables_output: ec2::output::DescribeRouteTablesOutput => set_route_tables(vec![]), "RouteTables";
        describe_security_groups_output: ec2::output::DescribeSecurityGroupsOutput => set_security_groups(vec![]), "SecurityGroups";
        describe_spot_instance_requests_output: ec2::output::DescribeSpotInstanceRequestsOutput => set_spot_instance_requests(vec![]), "SpotInstanceRequests";
        run_instances_output: ec2::output::RunInstancesOutput => set_groups(vec![]), "Groups";
    }
}
