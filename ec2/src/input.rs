/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// <p>Creates a new Capacity Reservation with the specified attributes.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateCapacityReservationInput {
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The type of operating system for which to reserve capacity.</p>
    pub instance_platform: std::option::Option<crate::model::CapacityReservationInstancePlatform>,
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The ID of the Availability Zone.</p>
    pub availability_zone_id: std::option::Option<std::string::String>,
    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
    pub tenancy: std::option::Option<crate::model::CapacityReservationTenancy>,
    /// <p>The number of instances.</p>
    pub instance_count: std::option::Option<i32>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
    pub ephemeral_storage: std::option::Option<bool>,
    /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it. The Capacity Reservation's state changes to <code>expired</code> when it reaches its end date and time.</p>
    pub end_date: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types: <code>unlimited</code> or <code>limited</code>.</p>
    pub end_date_type: std::option::Option<crate::model::EndDateType>,
    /// <p>Indicates the type of instance launches that the Capacity Reservation accepts.</p>
    pub instance_match_criteria: std::option::Option<crate::model::InstanceMatchCriteria>,
    /// <p>The tags to apply to the resources during launch.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
}
impl CreateCapacityReservationInput {
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }

    /// <p>The type of operating system for which to reserve capacity.</p>
    pub fn instance_platform(&self) -> std::option::Option<&crate::model::CapacityReservationInstancePlatform> {
        self.instance_platform.as_ref()
    }

    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The ID of the Availability Zone.</p>
    pub fn availability_zone_id(&self) -> std::option::Option<&str> {
        self.availability_zone_id.as_deref()
    }

    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::CapacityReservationTenancy> {
        self.tenancy.as_ref()
    }

    /// <p>The number of instances.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
    pub fn ephemeral_storage(&self) -> std::option::Option<bool> {
        self.ephemeral_storage
    }

    /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it. The Capacity Reservation's state changes to <code>expired</code> when it reaches its end date and time.</p>
    pub fn end_date(&self) -> std::option::Option<&smithy_types::Instant> {
        self.end_date.as_ref()
    }

    /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types: <code>unlimited</code> or <code>limited</code>.</p>
    pub fn end_date_type(&self) -> std::option::Option<&crate::model::EndDateType> {
        self.end_date_type.as_ref()
    }

    /// <p>Indicates the type of instance launches that the Capacity Reservation accepts.</p>
    pub fn instance_match_criteria(&self) -> std::option::Option<&crate::model::InstanceMatchCriteria> {
        self.instance_match_criteria.as_ref()
    }

    /// <p>The tags to apply to the resources during launch.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }
}
impl std::fmt::Debug for CreateCapacityReservationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ClientToken", &self.client_token);
        formatter.field("InstanceType", &self.instance_type);
        formatter.enum_field("InstancePlatform", &self.instance_platform);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("AvailabilityZoneId", &self.availability_zone_id);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.field("InstanceCount", &self.instance_count);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("EphemeralStorage", &self.ephemeral_storage);
        formatter.field("EndDate", &self.end_date);
        formatter.enum_field("EndDateType", &self.end_date_type);
        formatter.enum_field("InstanceMatchCriteria", &self.instance_match_criteria);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("DryRun", &self.dry_run);
        formatter.finish()
    }
}
/// See [`CreateCapacityReservationInput`](crate::input::CreateCapacityReservationInput)
pub mod create_capacity_reservation_input {
    /// A builder for [`CreateCapacityReservationInput`](crate::input::CreateCapacityReservationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_platform: std::option::Option<crate::model::CapacityReservationInstancePlatform>,
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) availability_zone_id: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::CapacityReservationTenancy>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) ephemeral_storage: std::option::Option<bool>,
        pub(crate) end_date: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_type: std::option::Option<crate::model::EndDateType>,
        pub(crate) instance_match_criteria: std::option::Option<crate::model::InstanceMatchCriteria>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
        pub(crate) dry_run: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>The instance type.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        /// <p>The instance type.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The type of operating system for which to reserve capacity.</p>
        pub fn instance_platform(mut self, input: crate::model::CapacityReservationInstancePlatform) -> Self {
            self.instance_platform = Some(input);
            self
        }
        /// <p>The type of operating system for which to reserve capacity.</p>
        pub fn set_instance_platform(mut self, input: std::option::Option<crate::model::CapacityReservationInstancePlatform>) -> Self {
            self.instance_platform = input;
            self
        }

        /// <p>The Availability Zone.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>The ID of the Availability Zone.</p>
        pub fn availability_zone_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone_id = Some(input.into());
            self
        }
        /// <p>The ID of the Availability Zone.</p>
        pub fn set_availability_zone_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone_id = input;
            self
        }

        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
        pub fn tenancy(mut self, input: crate::model::CapacityReservationTenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::CapacityReservationTenancy>) -> Self {
            self.tenancy = input;
            self
        }

        /// <p>The number of instances.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        /// <p>The number of instances.</p>
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }

        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }

        /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
        pub fn ephemeral_storage(mut self, input: bool) -> Self {
            self.ephemeral_storage = Some(input);
            self
        }
        /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
        pub fn set_ephemeral_storage(mut self, input: std::option::Option<bool>) -> Self {
            self.ephemeral_storage = input;
            self
        }

        /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it. The Capacity Reservation's state changes to <code>expired</code> when it reaches its end date and time.</p>
        pub fn end_date(mut self, input: smithy_types::Instant) -> Self {
            self.end_date = Some(input);
            self
        }
        /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it. The Capacity Reservation's state changes to <code>expired</code> when it reaches its end date and time.</p>
        pub fn set_end_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_date = input;
            self
        }

        /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types: <code>unlimited</code> or <code>limited</code>.</p>
        pub fn end_date_type(mut self, input: crate::model::EndDateType) -> Self {
            self.end_date_type = Some(input);
            self
        }
        /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types: <code>unlimited</code> or <code>limited</code>.</p>
        pub fn set_end_date_type(mut self, input: std::option::Option<crate::model::EndDateType>) -> Self {
            self.end_date_type = input;
            self
        }

        /// <p>Indicates the type of instance launches that the Capacity Reservation accepts.</p>
        pub fn instance_match_criteria(mut self, input: crate::model::InstanceMatchCriteria) -> Self {
            self.instance_match_criteria = Some(input);
            self
        }
        /// <p>Indicates the type of instance launches that the Capacity Reservation accepts.</p>
        pub fn set_instance_match_criteria(mut self, input: std::option::Option<crate::model::InstanceMatchCriteria>) -> Self {
            self.instance_match_criteria = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCapacityReservationInput`](crate::input::CreateCapacityReservationInput)
        pub fn build(self) -> crate::input::CreateCapacityReservationInput {
            crate::input::CreateCapacityReservationInput {
                client_token: self.client_token,
                instance_type: self.instance_type,
                instance_platform: self.instance_platform,
                availability_zone: self.availability_zone,
                availability_zone_id: self.availability_zone_id,
                tenancy: self.tenancy,
                instance_count: self.instance_count,
                ebs_optimized: self.ebs_optimized,
                ephemeral_storage: self.ephemeral_storage,
                end_date: self.end_date,
                end_date_type: self.end_date_type,
                instance_match_criteria: self.instance_match_criteria,
                tag_specifications: self.tag_specifications,
                dry_run: self.dry_run,
            }
        }
    }
}
impl CreateCapacityReservationInput {
    /// Creates a new builder-style object to manufacture [`CreateCapacityReservationInput`](crate::input::CreateCapacityReservationInput)
    pub fn builder() -> crate::input::create_capacity_reservation_input::Builder {
        crate::input::create_capacity_reservation_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for CreateCapacityReservationInput {
    const NAME: &'static str = "CreateCapacityReservation";
    const IDEMPOTENCY_TOKEN: std::option::Option<&'static str> = Some("ClientToken");

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_create_capacity_reservation(self)
    }
}
impl crate::operation::DryRunSupportedRequest for CreateCapacityReservationInput {}

/// <p>Creates one or more flow logs to capture information about IP traffic for a specific network interface, subnet, or VPC. </p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateFlowLogsInput {
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>The ARN for the IAM role that permits Amazon EC2 to publish flow logs to a CloudWatch Logs log group in your account.</p>
    pub deliver_logs_permission_arn: std::option::Option<std::string::String>,
    /// <p>The name of a new or existing CloudWatch Logs log group where Amazon EC2 publishes your flow logs.</p>
    pub log_group_name: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet, network interface, or VPC for which you want to create a flow log.</p>
    pub resource_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The type of resource.</p>
    pub resource_type: std::option::Option<crate::model::FlowLogsResourceType>,
    /// <p>The type of traffic to log. You can log traffic that the resource accepts or rejects, or all traffic.</p>
    pub traffic_type: std::option::Option<crate::model::TrafficType>,
    /// <p>Specifies the type of destination to which the flow log data is to be published. Flow log data can be published to CloudWatch Logs or Amazon S3.</p>
    pub log_destination_type: std::option::Option<crate::model::LogDestinationType>,
    /// <p>Specifies the destination to which the flow log data is to be published.</p>
    pub log_destination: std::option::Option<std::string::String>,
    /// <p>The fields to include in the flow log record, in the order in which they should appear.</p>
    pub log_format: std::option::Option<std::string::String>,
    /// <p>The tags to apply to the resources during launch.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    /// <p>The maximum interval of time during which a flow of packets is captured and aggregated into a flow log record. You can specify 60 seconds (1 minute) or 600 seconds (10 minutes).</p>
    pub max_aggregation_interval: std::option::Option<i32>,
}
impl CreateFlowLogsInput {
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>The ARN for the IAM role that permits Amazon EC2 to publish flow logs to a CloudWatch Logs log group in your account.</p>
    pub fn deliver_logs_permission_arn(&self) -> std::option::Option<&str> {
        self.deliver_logs_permission_arn.as_deref()
    }

    /// <p>The name of a new or existing CloudWatch Logs log group where Amazon EC2 publishes your flow logs.</p>
    pub fn log_group_name(&self) -> std::option::Option<&str> {
        self.log_group_name.as_deref()
    }

    /// <p>The ID of the subnet, network interface, or VPC for which you want to create a flow log.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.resource_ids.is_none()`.
    pub fn resource_ids(&self) -> &[std::string::String] {
        self.resource_ids.as_deref().unwrap_or_default()
    }

    /// <p>The type of resource.</p>
    pub fn resource_type(&self) -> std::option::Option<&crate::model::FlowLogsResourceType> {
        self.resource_type.as_ref()
    }

    /// <p>The type of traffic to log. You can log traffic that the resource accepts or rejects, or all traffic.</p>
    pub fn traffic_type(&self) -> std::option::Option<&crate::model::TrafficType> {
        self.traffic_type.as_ref()
    }

    /// <p>Specifies the type of destination to which the flow log data is to be published. Flow log data can be published to CloudWatch Logs or Amazon S3.</p>
    pub fn log_destination_type(&self) -> std::option::Option<&crate::model::LogDestinationType> {
        self.log_destination_type.as_ref()
    }

    /// <p>Specifies the destination to which the flow log data is to be published.</p>
    pub fn log_destination(&self) -> std::option::Option<&str> {
        self.log_destination.as_deref()
    }

    /// <p>The fields to include in the flow log record, in the order in which they should appear.</p>
    pub fn log_format(&self) -> std::option::Option<&str> {
        self.log_format.as_deref()
    }

    /// <p>The tags to apply to the resources during launch.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The maximum interval of time during which a flow of packets is captured and aggregated into a flow log record. You can specify 60 seconds (1 minute) or 600 seconds (10 minutes).</p>
    pub fn max_aggregation_interval(&self) -> std::option::Option<i32> {
        self.max_aggregation_interval
    }
}
impl std::fmt::Debug for CreateFlowLogsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("ClientToken", &self.client_token);
        formatter.field("DeliverLogsPermissionArn", &self.deliver_logs_permission_arn);
        formatter.field("LogGroupName", &self.log_group_name);
        formatter.field("ResourceIds", &self.resource_ids);
        formatter.enum_field("ResourceType", &self.resource_type);
        formatter.enum_field("TrafficType", &self.traffic_type);
        formatter.enum_field("LogDestinationType", &self.log_destination_type);
        formatter.field("LogDestination", &self.log_destination);
        formatter.field("LogFormat", &self.log_format);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("MaxAggregationInterval", &self.max_aggregation_interval);
        formatter.finish()
    }
}
/// See [`CreateFlowLogsInput`](crate::input::CreateFlowLogsInput)
pub mod create_flow_logs_input {
    /// A builder for [`CreateFlowLogsInput`](crate::input::CreateFlowLogsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) deliver_logs_permission_arn: std::option::Option<std::string::String>,
        pub(crate) log_group_name: std::option::Option<std::string::String>,
        pub(crate) resource_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) resource_type: std::option::Option<crate::model::FlowLogsResourceType>,
        pub(crate) traffic_type: std::option::Option<crate::model::TrafficType>,
        pub(crate) log_destination_type: std::option::Option<crate::model::LogDestinationType>,
        pub(crate) log_destination: std::option::Option<std::string::String>,
        pub(crate) log_format: std::option::Option<std::string::String>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
        pub(crate) max_aggregation_interval: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>The ARN for the IAM role that permits Amazon EC2 to publish flow logs to a CloudWatch Logs log group in your account.</p>
        pub fn deliver_logs_permission_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.deliver_logs_permission_arn = Some(input.into());
            self
        }
        /// <p>The ARN for the IAM role that permits Amazon EC2 to publish flow logs to a CloudWatch Logs log group in your account.</p>
        pub fn set_deliver_logs_permission_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.deliver_logs_permission_arn = input;
            self
        }

        /// <p>The name of a new or existing CloudWatch Logs log group where Amazon EC2 publishes your flow logs.</p>
        pub fn log_group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_group_name = Some(input.into());
            self
        }
        /// <p>The name of a new or existing CloudWatch Logs log group where Amazon EC2 publishes your flow logs.</p>
        pub fn set_log_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_group_name = input;
            self
        }

        /// Appends an item to `resource_ids`.
        ///
        /// To override the contents of this collection use [`set_resource_ids`](Self::set_resource_ids).
        ///
        /// <p>The ID of the subnet, network interface, or VPC for which you want to create a flow log.</p>
        pub fn resource_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.resource_ids.unwrap_or_default();
            v.push(input.into());
            self.resource_ids = Some(v);
            self
        }
        /// <p>The ID of the subnet, network interface, or VPC for which you want to create a flow log.</p>
        pub fn set_resource_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.resource_ids = input;
            self
        }

        /// <p>The type of resource.</p>
        pub fn resource_type(mut self, input: crate::model::FlowLogsResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        /// <p>The type of resource.</p>
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::FlowLogsResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        /// <p>The type of traffic to log. You can log traffic that the resource accepts or rejects, or all traffic.</p>
        pub fn traffic_type(mut self, input: crate::model::TrafficType) -> Self {
            self.traffic_type = Some(input);
            self
        }
        /// <p>The type of traffic to log. You can log traffic that the resource accepts or rejects, or all traffic.</p>
        pub fn set_traffic_type(mut self, input: std::option::Option<crate::model::TrafficType>) -> Self {
            self.traffic_type = input;
            self
        }

        /// <p>Specifies the type of destination to which the flow log data is to be published. Flow log data can be published to CloudWatch Logs or Amazon S3.</p>
        pub fn log_destination_type(mut self, input: crate::model::LogDestinationType) -> Self {
            self.log_destination_type = Some(input);
            self
        }
        /// <p>Specifies the type of destination to which the flow log data is to be published. Flow log data can be published to CloudWatch Logs or Amazon S3.</p>
        pub fn set_log_destination_type(mut self, input: std::option::Option<crate::model::LogDestinationType>) -> Self {
            self.log_destination_type = input;
            self
        }

        /// <p>Specifies the destination to which the flow log data is to be published.</p>
        pub fn log_destination(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_destination = Some(input.into());
            self
        }
        /// <p>Specifies the destination to which the flow log data is to be published.</p>
        pub fn set_log_destination(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_destination = input;
            self
        }

        /// <p>The fields to include in the flow log record, in the order in which they should appear.</p>
        pub fn log_format(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_format = Some(input.into());
            self
        }
        /// <p>The fields to include in the flow log record, in the order in which they should appear.</p>
        pub fn set_log_format(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_format = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// <p>The maximum interval of time during which a flow of packets is captured and aggregated into a flow log record. You can specify 60 seconds (1 minute) or 600 seconds (10 minutes).</p>
        pub fn max_aggregation_interval(mut self, input: i32) -> Self {
            self.max_aggregation_interval = Some(input);
            self
        }
        /// <p>The maximum interval of time during which a flow of packets is captured and aggregated into a flow log record. You can specify 60 seconds (1 minute) or 600 seconds (10 minutes).</p>
        pub fn set_max_aggregation_interval(mut self, input: std::option::Option<i32>) -> Self {
            self.max_aggregation_interval = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateFlowLogsInput`](crate::input::CreateFlowLogsInput)
        pub fn build(self) -> crate::input::CreateFlowLogsInput {
            crate::input::CreateFlowLogsInput {
                dry_run: self.dry_run,
                client_token: self.client_token,
                deliver_logs_permission_arn: self.deliver_logs_permission_arn,
                log_group_name: self.log_group_name,
                resource_ids: self.resource_ids,
                resource_type: self.resource_type,
                traffic_type: self.traffic_type,
                log_destination_type: self.log_destination_type,
                log_destination: self.log_destination,
                log_format: self.log_format,
                tag_specifications: self.tag_specifications,
                max_aggregation_interval: self.max_aggregation_interval,
            }
        }
    }
}
impl CreateFlowLogsInput {
    /// Creates a new builder-style object to manufacture [`CreateFlowLogsInput`](crate::input::CreateFlowLogsInput)
    pub fn builder() -> crate::input::create_flow_logs_input::Builder {
        crate::input::create_flow_logs_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for CreateFlowLogsInput {
    const NAME: &'static str = "CreateFlowLogs";
    const IDEMPOTENCY_TOKEN: std::option::Option<&'static str> = Some("ClientToken");

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_create_flow_logs(self)
    }
}
impl crate::operation::DryRunSupportedRequest for CreateFlowLogsInput {}

/// <p>Creates an entry (a rule) in a network ACL with the specified rule number. Each network ACL has a set of numbered ingress rules and a separate set of numbered egress rules. When determining whether a packet should be allowed in or out of a subnet associated with the ACL, we process the entries in the ACL according to the rule numbers, in ascending order.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateNetworkAclEntryInput {
    /// <p>The IPv4 network range, in CIDR notation.</p>
    pub cidr_block: std::option::Option<std::string::String>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>Indicates whether this is an egress rule (rule is applied to traffic leaving the subnet).</p>
    pub egress: std::option::Option<bool>,
    /// <p>ICMP protocol: The ICMP or ICMPv6 type and code. Required if specifying protocol 1 (ICMP) or protocol 58 (ICMPv6) with an IPv6 CIDR block.</p>
    pub icmp_type_code: std::option::Option<crate::model::IcmpTypeCode>,
    /// <p>The IPv6 CIDR block.</p>
    pub ipv6_cidr_block: std::option::Option<std::string::String>,
    /// <p>The ID of the network ACL.</p>
    pub network_acl_id: std::option::Option<std::string::String>,
    /// <p>TCP or UDP protocols: The range of ports the rule applies to. Required if specifying protocol 6 (TCP) or 17 (UDP).</p>
    pub port_range: std::option::Option<crate::model::PortRange>,
    /// <p>The protocol number. A value of "-1" means all protocols.</p>
    pub protocol: std::option::Option<std::string::String>,
    /// <p>Indicates whether to allow or deny the traffic that matches the rule.</p>
    pub rule_action: std::option::Option<crate::model::RuleAction>,
    /// <p>The rule number for the entry (for example, 100). ACL entries are processed in ascending order by rule number.</p>
    /// <p>Constraints: Positive integer from 1 to 32766. The range 32767 to 65535 is reserved for internal use.</p>
    pub rule_number: std::option::Option<i32>,
}
impl CreateNetworkAclEntryInput {
    /// <p>The IPv4 network range, in CIDR notation.</p>
    pub fn cidr_block(&self) -> std::option::Option<&str> {
        self.cidr_block.as_deref()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>Indicates whether this is an egress rule (rule is applied to traffic leaving the subnet).</p>
    pub fn egress(&self) -> std::option::Option<bool> {
        self.egress
    }

    /// <p>ICMP protocol: The ICMP or ICMPv6 type and code. Required if specifying protocol 1 (ICMP) or protocol 58 (ICMPv6) with an IPv6 CIDR block.</p>
    pub fn icmp_type_code(&self) -> std::option::Option<&crate::model::IcmpTypeCode> {
        self.icmp_type_code.as_ref()
    }

    /// <p>The IPv6 CIDR block.</p>
    pub fn ipv6_cidr_block(&self) -> std::option::Option<&str> {
        self.ipv6_cidr_block.as_deref()
    }

    /// <p>The ID of the network ACL.</p>
    pub fn network_acl_id(&self) -> std::option::Option<&str> {
        self.network_acl_id.as_deref()
    }

    /// <p>TCP or UDP protocols: The range of ports the rule applies to. Required if specifying protocol 6 (TCP) or 17 (UDP).</p>
    pub fn port_range(&self) -> std::option::Option<&crate::model::PortRange> {
        self.port_range.as_ref()
    }

    /// <p>The protocol number. A value of "-1" means all protocols.</p>
    pub fn protocol(&self) -> std::option::Option<&str> {
        self.protocol.as_deref()
    }

    /// <p>Indicates whether to allow or deny the traffic that matches the rule.</p>
    pub fn rule_action(&self) -> std::option::Option<&crate::model::RuleAction> {
        self.rule_action.as_ref()
    }

    /// <p>The rule number for the entry (for example, 100). ACL entries are processed in ascending order by rule number.</p>
    /// <p>Constraints: Positive integer from 1 to 32766. The range 32767 to 65535 is reserved for internal use.</p>
    pub fn rule_number(&self) -> std::option::Option<i32> {
        self.rule_number
    }
}
impl std::fmt::Debug for CreateNetworkAclEntryInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CidrBlock", &self.cidr_block);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("Egress", &self.egress);
        formatter.field("IcmpTypeCode", &self.icmp_type_code);
        formatter.field("Ipv6CidrBlock", &self.ipv6_cidr_block);
        formatter.field("NetworkAclId", &self.network_acl_id);
        formatter.field("PortRange", &self.port_range);
        formatter.field("Protocol", &self.protocol);
        formatter.enum_field("RuleAction", &self.rule_action);
        formatter.field("RuleNumber", &self.rule_number);
        formatter.finish()
    }
}
/// See [`CreateNetworkAclEntryInput`](crate::input::CreateNetworkAclEntryInput)
pub mod create_network_acl_entry_input {
    /// A builder for [`CreateNetworkAclEntryInput`](crate::input::CreateNetworkAclEntryInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr_block: std::option::Option<std::string::String>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) egress: std::option::Option<bool>,
        pub(crate) icmp_type_code: std::option::Option<crate::model::IcmpTypeCode>,
        pub(crate) ipv6_cidr_block: std::option::Option<std::string::String>,
        pub(crate) network_acl_id: std::option::Option<std::string::String>,
        pub(crate) port_range: std::option::Option<crate::model::PortRange>,
        pub(crate) protocol: std::option::Option<std::string::String>,
        pub(crate) rule_action: std::option::Option<crate::model::RuleAction>,
        pub(crate) rule_number: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The IPv4 network range, in CIDR notation.</p>
        pub fn cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv4 network range, in CIDR notation.</p>
        pub fn set_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_block = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>Indicates whether this is an egress rule (rule is applied to traffic leaving the subnet).</p>
        pub fn egress(mut self, input: bool) -> Self {
            self.egress = Some(input);
            self
        }
        /// <p>Indicates whether this is an egress rule (rule is applied to traffic leaving the subnet).</p>
        pub fn set_egress(mut self, input: std::option::Option<bool>) -> Self {
            self.egress = input;
            self
        }

        /// <p>ICMP protocol: The ICMP or ICMPv6 type and code. Required if specifying protocol 1 (ICMP) or protocol 58 (ICMPv6) with an IPv6 CIDR block.</p>
        pub fn icmp_type_code(mut self, input: crate::model::IcmpTypeCode) -> Self {
            self.icmp_type_code = Some(input);
            self
        }
        /// <p>ICMP protocol: The ICMP or ICMPv6 type and code. Required if specifying protocol 1 (ICMP) or protocol 58 (ICMPv6) with an IPv6 CIDR block.</p>
        pub fn set_icmp_type_code(mut self, input: std::option::Option<crate::model::IcmpTypeCode>) -> Self {
            self.icmp_type_code = input;
            self
        }

        /// <p>The IPv6 CIDR block.</p>
        pub fn ipv6_cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv6 CIDR block.</p>
        pub fn set_ipv6_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_cidr_block = input;
            self
        }

        /// <p>The ID of the network ACL.</p>
        pub fn network_acl_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_acl_id = Some(input.into());
            self
        }
        /// <p>The ID of the network ACL.</p>
        pub fn set_network_acl_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_acl_id = input;
            self
        }

        /// <p>TCP or UDP protocols: The range of ports the rule applies to. Required if specifying protocol 6 (TCP) or 17 (UDP).</p>
        pub fn port_range(mut self, input: crate::model::PortRange) -> Self {
            self.port_range = Some(input);
            self
        }
        /// <p>TCP or UDP protocols: The range of ports the rule applies to. Required if specifying protocol 6 (TCP) or 17 (UDP).</p>
        pub fn set_port_range(mut self, input: std::option::Option<crate::model::PortRange>) -> Self {
            self.port_range = input;
            self
        }

        /// <p>The protocol number. A value of "-1" means all protocols.</p>
        pub fn protocol(mut self, input: impl Into<std::string::String>) -> Self {
            self.protocol = Some(input.into());
            self
        }
        /// <p>The protocol number. A value of "-1" means all protocols.</p>
        pub fn set_protocol(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.protocol = input;
            self
        }

        /// <p>Indicates whether to allow or deny the traffic that matches the rule.</p>
        pub fn rule_action(mut self, input: crate::model::RuleAction) -> Self {
            self.rule_action = Some(input);
            self
        }
        /// <p>Indicates whether to allow or deny the traffic that matches the rule.</p>
        pub fn set_rule_action(mut self, input: std::option::Option<crate::model::RuleAction>) -> Self {
            self.rule_action = input;
            self
        }

        /// <p>The rule number for the entry (for example, 100). ACL entries are processed in ascending order by rule number.</p>
        /// <p>Constraints: Positive integer from 1 to 32766. The range 32767 to 65535 is reserved for internal use.</p>
        pub fn rule_number(mut self, input: i32) -> Self {
            self.rule_number = Some(input);
            self
        }
        /// <p>The rule number for the entry (for example, 100). ACL entries are processed in ascending order by rule number.</p>
        /// <p>Constraints: Positive integer from 1 to 32766. The range 32767 to 65535 is reserved for internal use.</p>
        pub fn set_rule_number(mut self, input: std::option::Option<i32>) -> Self {
            self.rule_number = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateNetworkAclEntryInput`](crate::input::CreateNetworkAclEntryInput)
        pub fn build(self) -> crate::input::CreateNetworkAclEntryInput {
            crate::input::CreateNetworkAclEntryInput {
                cidr_block: self.cidr_block,
                dry_run: self.dry_run,
                egress: self.egress,
                icmp_type_code: self.icmp_type_code,
                ipv6_cidr_block: self.ipv6_cidr_block,
                network_acl_id: self.network_acl_id,
                port_range: self.port_range,
                protocol: self.protocol,
                rule_action: self.rule_action,
                rule_number: self.rule_number,
            }
        }
    }
}
impl CreateNetworkAclEntryInput {
    /// Creates a new builder-style object to manufacture [`CreateNetworkAclEntryInput`](crate::input::CreateNetworkAclEntryInput)
    pub fn builder() -> crate::input::create_network_acl_entry_input::Builder {
        crate::input::create_network_acl_entry_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for CreateNetworkAclEntryInput {
    const NAME: &'static str = "CreateNetworkAclEntry";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_create_network_acl_entry(self)
    }
}
impl crate::operation::DryRunSupportedRequest for CreateNetworkAclEntryInput {}

/// <p>Creates an EBS volume that can be attached to an instance in the same Availability Zone.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateVolumeInput {
    /// <p>The Availability Zone in which to create the volume.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>Specifies whether the volume should be encrypted. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#encryption-by-default">Encryption by Default</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    /// <p>Encrypted Amazon EBS volumes must be attached to instances that support Amazon EBS encryption. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#EBSEncryption_supported_instances">Supported Instance Types</a>.</p>
    pub encrypted: std::option::Option<bool>,
    /// <p>The number of I/O operations per second (IOPS) to provision for the volume, with a maximum ratio of 50 IOPS/GiB. Range is 100 to 64,000 IOPS for volumes in most Regions. Maximum IOPS of 64,000 is guaranteed only on <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a>. Other instance families guarantee performance up to 32,000 IOPS. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSVolumeTypes.html">Amazon EBS Volume Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    /// <p>This parameter is valid only for Provisioned IOPS SSD (io1) volumes.</p>
    pub iops: std::option::Option<i32>,
    /// <p>The identifier of the AWS Key Management Service (AWS KMS) customer master key (CMK) to use for Amazon EBS encryption. If this parameter is not specified, your AWS managed CMK for EBS is used. If <code>KmsKeyId</code> is specified, the encrypted state must be <code>true</code>.</p>
    /// <p>You can specify the CMK using any of the following:</p>
    /// <ul>
    /// <li><p>Key ID. For example, key/1234abcd-12ab-34cd-56ef-1234567890ab.</p></li>
    /// <li><p>Key alias. For example, alias/ExampleAlias.</p></li>
    /// <li><p>Key ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:key /<i>abcd1234-a123-456a-a12b-a123b4cd56ef</i>.</p></li>
    /// <li><p>Alias ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:alias /<i>ExampleAlias</i>.</p></li></ul>
    /// <p>AWS authenticates the CMK asynchronously. Therefore, if you specify an ID, alias, or ARN that is not valid, the action can appear to complete, but eventually fails.</p>
    pub kms_key_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub outpost_arn: std::option::Option<std::string::String>,
    /// <p>The size of the volume, in GiBs. You must specify either a snapshot ID or a volume size.</p>
    pub size: std::option::Option<i32>,
    /// <p>The snapshot from which to create the volume. You must specify either a snapshot ID or a volume size.</p>
    pub snapshot_id: std::option::Option<std::string::String>,
    /// <p>The volume type. This can be <code>gp2</code> for General Purpose SSD, <code>io1</code> for Provisioned IOPS SSD, <code>st1</code> for Throughput Optimized HDD, <code>sc1</code> for Cold HDD, or <code>standard</code> for Magnetic volumes.</p>
    /// <p>Default: <code>gp2</code></p>
    pub volume_type: std::option::Option<crate::model::VolumeType>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The tags to apply to the volume during creation.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    /// <p>Specifies whether to enable Amazon EBS Multi-Attach. If you enable Multi-Attach, you can attach the volume to up to 16 <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a> in the same Availability Zone. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ebs-volumes-multi.html"> Amazon EBS Multi-Attach</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub multi_attach_enabled: std::option::Option<bool>,
}
impl CreateVolumeInput {
    /// <p>The Availability Zone in which to create the volume.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>Specifies whether the volume should be encrypted. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#encryption-by-default">Encryption by Default</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    /// <p>Encrypted Amazon EBS volumes must be attached to instances that support Amazon EBS encryption. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#EBSEncryption_supported_instances">Supported Instance Types</a>.</p>
    pub fn encrypted(&self) -> std::option::Option<bool> {
        self.encrypted
    }

    /// <p>The number of I/O operations per second (IOPS) to provision for the volume, with a maximum ratio of 50 IOPS/GiB. Range is 100 to 64,000 IOPS for volumes in most Regions. Maximum IOPS of 64,000 is guaranteed only on <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a>. Other instance families guarantee performance up to 32,000 IOPS. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSVolumeTypes.html">Amazon EBS Volume Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    /// <p>This parameter is valid only for Provisioned IOPS SSD (io1) volumes.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }

    /// <p>The identifier of the AWS Key Management Service (AWS KMS) customer master key (CMK) to use for Amazon EBS encryption. If this parameter is not specified, your AWS managed CMK for EBS is used. If <code>KmsKeyId</code> is specified, the encrypted state must be <code>true</code>.</p>
    /// <p>You can specify the CMK using any of the following:</p>
    /// <ul>
    /// <li><p>Key ID. For example, key/1234abcd-12ab-34cd-56ef-1234567890ab.</p></li>
    /// <li><p>Key alias. For example, alias/ExampleAlias.</p></li>
    /// <li><p>Key ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:key /<i>abcd1234-a123-456a-a12b-a123b4cd56ef</i>.</p></li>
    /// <li><p>Alias ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:alias /<i>ExampleAlias</i>.</p></li></ul>
    /// <p>AWS authenticates the CMK asynchronously. Therefore, if you specify an ID, alias, or ARN that is not valid, the action can appear to complete, but eventually fails.</p>
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }

    /// <p>The size of the volume, in GiBs. You must specify either a snapshot ID or a volume size.</p>
    pub fn size(&self) -> std::option::Option<i32> {
        self.size
    }

    /// <p>The snapshot from which to create the volume. You must specify either a snapshot ID or a volume size.</p>
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// <p>The volume type. This can be <code>gp2</code> for General Purpose SSD, <code>io1</code> for Provisioned IOPS SSD, <code>st1</code> for Throughput Optimized HDD, <code>sc1</code> for Cold HDD, or <code>standard</code> for Magnetic volumes.</p>
    /// <p>Default: <code>gp2</code></p>
    pub fn volume_type(&self) -> std::option::Option<&crate::model::VolumeType> {
        self.volume_type.as_ref()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The tags to apply to the volume during creation.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>Specifies whether to enable Amazon EBS Multi-Attach. If you enable Multi-Attach, you can attach the volume to up to 16 <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a> in the same Availability Zone. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ebs-volumes-multi.html"> Amazon EBS Multi-Attach</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn multi_attach_enabled(&self) -> std::option::Option<bool> {
        self.multi_attach_enabled
    }
}
impl std::fmt::Debug for CreateVolumeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Encrypted", &self.encrypted);
        formatter.field("Iops", &self.iops);
        formatter.field("KmsKeyId", &self.kms_key_id);
        formatter.field("OutpostArn", &self.outpost_arn);
        formatter.field("Size", &self.size);
        formatter.field("SnapshotId", &self.snapshot_id);
        formatter.enum_field("VolumeType", &self.volume_type);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("MultiAttachEnabled", &self.multi_attach_enabled);
        formatter.finish()
    }
}
/// See [`CreateVolumeInput`](crate::input::CreateVolumeInput)
pub mod create_volume_input {
    /// A builder for [`CreateVolumeInput`](crate::input::CreateVolumeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) encrypted: std::option::Option<bool>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
        pub(crate) size: std::option::Option<i32>,
        pub(crate) snapshot_id: std::option::Option<std::string::String>,
        pub(crate) volume_type: std::option::Option<crate::model::VolumeType>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
        pub(crate) multi_attach_enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>The Availability Zone in which to create the volume.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone in which to create the volume.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>Specifies whether the volume should be encrypted. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#encryption-by-default">Encryption by Default</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        /// <p>Encrypted Amazon EBS volumes must be attached to instances that support Amazon EBS encryption. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#EBSEncryption_supported_instances">Supported Instance Types</a>.</p>
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        /// <p>Specifies whether the volume should be encrypted. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#encryption-by-default">Encryption by Default</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        /// <p>Encrypted Amazon EBS volumes must be attached to instances that support Amazon EBS encryption. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSEncryption.html#EBSEncryption_supported_instances">Supported Instance Types</a>.</p>
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }

        /// <p>The number of I/O operations per second (IOPS) to provision for the volume, with a maximum ratio of 50 IOPS/GiB. Range is 100 to 64,000 IOPS for volumes in most Regions. Maximum IOPS of 64,000 is guaranteed only on <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a>. Other instance families guarantee performance up to 32,000 IOPS. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSVolumeTypes.html">Amazon EBS Volume Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        /// <p>This parameter is valid only for Provisioned IOPS SSD (io1) volumes.</p>
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        /// <p>The number of I/O operations per second (IOPS) to provision for the volume, with a maximum ratio of 50 IOPS/GiB. Range is 100 to 64,000 IOPS for volumes in most Regions. Maximum IOPS of 64,000 is guaranteed only on <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a>. Other instance families guarantee performance up to 32,000 IOPS. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSVolumeTypes.html">Amazon EBS Volume Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        /// <p>This parameter is valid only for Provisioned IOPS SSD (io1) volumes.</p>
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
            self
        }

        /// <p>The identifier of the AWS Key Management Service (AWS KMS) customer master key (CMK) to use for Amazon EBS encryption. If this parameter is not specified, your AWS managed CMK for EBS is used. If <code>KmsKeyId</code> is specified, the encrypted state must be <code>true</code>.</p>
        /// <p>You can specify the CMK using any of the following:</p>
        /// <ul>
        /// <li><p>Key ID. For example, key/1234abcd-12ab-34cd-56ef-1234567890ab.</p></li>
        /// <li><p>Key alias. For example, alias/ExampleAlias.</p></li>
        /// <li><p>Key ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:key /<i>abcd1234-a123-456a-a12b-a123b4cd56ef</i>.</p></li>
        /// <li><p>Alias ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:alias /<i>ExampleAlias</i>.</p></li></ul>
        /// <p>AWS authenticates the CMK asynchronously. Therefore, if you specify an ID, alias, or ARN that is not valid, the action can appear to complete, but eventually fails.</p>
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        /// <p>The identifier of the AWS Key Management Service (AWS KMS) customer master key (CMK) to use for Amazon EBS encryption. If this parameter is not specified, your AWS managed CMK for EBS is used. If <code>KmsKeyId</code> is specified, the encrypted state must be <code>true</code>.</p>
        /// <p>You can specify the CMK using any of the following:</p>
        /// <ul>
        /// <li><p>Key ID. For example, key/1234abcd-12ab-34cd-56ef-1234567890ab.</p></li>
        /// <li><p>Key alias. For example, alias/ExampleAlias.</p></li>
        /// <li><p>Key ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:key /<i>abcd1234-a123-456a-a12b-a123b4cd56ef</i>.</p></li>
        /// <li><p>Alias ARN. For example, arn:aws:kms:<i>us-east-1</i>:<i>012345678910</i>:alias /<i>ExampleAlias</i>.</p></li></ul>
        /// <p>AWS authenticates the CMK asynchronously. Therefore, if you specify an ID, alias, or ARN that is not valid, the action can appear to complete, but eventually fails.</p>
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }

        /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
        pub fn outpost_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.outpost_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
        pub fn set_outpost_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.outpost_arn = input;
            self
        }

        /// <p>The size of the volume, in GiBs. You must specify either a snapshot ID or a volume size.</p>
        pub fn size(mut self, input: i32) -> Self {
            self.size = Some(input);
            self
        }
        /// <p>The size of the volume, in GiBs. You must specify either a snapshot ID or a volume size.</p>
        pub fn set_size(mut self, input: std::option::Option<i32>) -> Self {
            self.size = input;
            self
        }

        /// <p>The snapshot from which to create the volume. You must specify either a snapshot ID or a volume size.</p>
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// <p>The snapshot from which to create the volume. You must specify either a snapshot ID or a volume size.</p>
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }

        /// <p>The volume type. This can be <code>gp2</code> for General Purpose SSD, <code>io1</code> for Provisioned IOPS SSD, <code>st1</code> for Throughput Optimized HDD, <code>sc1</code> for Cold HDD, or <code>standard</code> for Magnetic volumes.</p>
        /// <p>Default: <code>gp2</code></p>
        pub fn volume_type(mut self, input: crate::model::VolumeType) -> Self {
            self.volume_type = Some(input);
            self
        }
        /// <p>The volume type. This can be <code>gp2</code> for General Purpose SSD, <code>io1</code> for Provisioned IOPS SSD, <code>st1</code> for Throughput Optimized HDD, <code>sc1</code> for Cold HDD, or <code>standard</code> for Magnetic volumes.</p>
        /// <p>Default: <code>gp2</code></p>
        pub fn set_volume_type(mut self, input: std::option::Option<crate::model::VolumeType>) -> Self {
            self.volume_type = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the volume during creation.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the volume during creation.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// <p>Specifies whether to enable Amazon EBS Multi-Attach. If you enable Multi-Attach, you can attach the volume to up to 16 <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a> in the same Availability Zone. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ebs-volumes-multi.html"> Amazon EBS Multi-Attach</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn multi_attach_enabled(mut self, input: bool) -> Self {
            self.multi_attach_enabled = Some(input);
            self
        }
        /// <p>Specifies whether to enable Amazon EBS Multi-Attach. If you enable Multi-Attach, you can attach the volume to up to 16 <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances">Nitro-based instances</a> in the same Availability Zone. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ebs-volumes-multi.html"> Amazon EBS Multi-Attach</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_multi_attach_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.multi_attach_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateVolumeInput`](crate::input::CreateVolumeInput)
        pub fn build(self) -> crate::input::CreateVolumeInput {
            crate::input::CreateVolumeInput {
                availability_zone: self.availability_zone,
                encrypted: self.encrypted,
                iops: self.iops,
                kms_key_id: self.kms_key_id,
                outpost_arn: self.outpost_arn,
                size: self.size,
                snapshot_id: self.snapshot_id,
                volume_type: self.volume_type,
                dry_run: self.dry_run,
                tag_specifications: self.tag_specifications,
                multi_attach_enabled: self.multi_attach_enabled,
            }
        }
    }
}
impl CreateVolumeInput {
    /// Creates a new builder-style object to manufacture [`CreateVolumeInput`](crate::input::CreateVolumeInput)
    pub fn builder() -> crate::input::create_volume_input::Builder {
        crate::input::create_volume_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for CreateVolumeInput {
    const NAME: &'static str = "CreateVolume";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_create_volume(self)
    }
}
impl crate::operation::DryRunSupportedRequest for CreateVolumeInput {}

/// <p>Creates a VPC with the specified IPv4 CIDR block.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateVpcInput {
    /// <p>The IPv4 network range for the VPC, in CIDR notation. For example, <code>10.0.0.0/16</code>.</p>
    pub cidr_block: std::option::Option<std::string::String>,
    /// <p>Requests an Amazon-provided IPv6 CIDR block with a /56 prefix length for the VPC. You cannot specify the range of IP addresses, or the size of the CIDR block.</p>
    pub amazon_provided_ipv6_cidr_block: std::option::Option<bool>,
    /// <p>The ID of the IPv6 address pool from which to allocate the IPv6 CIDR block.</p>
    pub ipv6_pool: std::option::Option<std::string::String>,
    /// <p>The IPv6 CIDR block.</p>
    pub ipv6_cidr_block: std::option::Option<std::string::String>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The tenancy options for instances launched into the VPC. For <code>default</code>, instances are launched with shared tenancy by default. You can launch instances with any tenancy into a shared tenancy VPC. For <code>dedicated</code>, instances are launched as dedicated tenancy instances by default. You can only launch instances with a tenancy of <code>dedicated</code> or <code>host</code> into a dedicated tenancy VPC. </p>
    pub instance_tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>The name of the location from which we advertise the IPV6 CIDR block.</p>
    pub ipv6_cidr_block_network_border_group: std::option::Option<std::string::String>,
    /// <p>The tags to apply to the resources during launch.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
}
impl CreateVpcInput {
    /// <p>The IPv4 network range for the VPC, in CIDR notation. For example, <code>10.0.0.0/16</code>.</p>
    pub fn cidr_block(&self) -> std::option::Option<&str> {
        self.cidr_block.as_deref()
    }

    /// <p>Requests an Amazon-provided IPv6 CIDR block with a /56 prefix length for the VPC. You cannot specify the range of IP addresses, or the size of the CIDR block.</p>
    pub fn amazon_provided_ipv6_cidr_block(&self) -> std::option::Option<bool> {
        self.amazon_provided_ipv6_cidr_block
    }

    /// <p>The ID of the IPv6 address pool from which to allocate the IPv6 CIDR block.</p>
    pub fn ipv6_pool(&self) -> std::option::Option<&str> {
        self.ipv6_pool.as_deref()
    }

    /// <p>The IPv6 CIDR block.</p>
    pub fn ipv6_cidr_block(&self) -> std::option::Option<&str> {
        self.ipv6_cidr_block.as_deref()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The tenancy options for instances launched into the VPC. For <code>default</code>, instances are launched with shared tenancy by default. You can launch instances with any tenancy into a shared tenancy VPC. For <code>dedicated</code>, instances are launched as dedicated tenancy instances by default. You can only launch instances with a tenancy of <code>dedicated</code> or <code>host</code> into a dedicated tenancy VPC. </p>
    pub fn instance_tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// <p>The name of the location from which we advertise the IPV6 CIDR block.</p>
    pub fn ipv6_cidr_block_network_border_group(&self) -> std::option::Option<&str> {
        self.ipv6_cidr_block_network_border_group.as_deref()
    }

    /// <p>The tags to apply to the resources during launch.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for CreateVpcInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CidrBlock", &self.cidr_block);
        formatter.field("AmazonProvidedIpv6CidrBlock", &self.amazon_provided_ipv6_cidr_block);
        formatter.field("Ipv6Pool", &self.ipv6_pool);
        formatter.field("Ipv6CidrBlock", &self.ipv6_cidr_block);
        formatter.field("DryRun", &self.dry_run);
        formatter.enum_field("InstanceTenancy", &self.instance_tenancy);
        formatter.field("Ipv6CidrBlockNetworkBorderGroup", &self.ipv6_cidr_block_network_border_group);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.finish()
    }
}
/// See [`CreateVpcInput`](crate::input::CreateVpcInput)
pub mod create_vpc_input {
    /// A builder for [`CreateVpcInput`](crate::input::CreateVpcInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr_block: std::option::Option<std::string::String>,
        pub(crate) amazon_provided_ipv6_cidr_block: std::option::Option<bool>,
        pub(crate) ipv6_pool: std::option::Option<std::string::String>,
        pub(crate) ipv6_cidr_block: std::option::Option<std::string::String>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) instance_tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) ipv6_cidr_block_network_border_group: std::option::Option<std::string::String>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    }
    impl Builder {
        /// <p>The IPv4 network range for the VPC, in CIDR notation. For example, <code>10.0.0.0/16</code>.</p>
        pub fn cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv4 network range for the VPC, in CIDR notation. For example, <code>10.0.0.0/16</code>.</p>
        pub fn set_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_block = input;
            self
        }

        /// <p>Requests an Amazon-provided IPv6 CIDR block with a /56 prefix length for the VPC. You cannot specify the range of IP addresses, or the size of the CIDR block.</p>
        pub fn amazon_provided_ipv6_cidr_block(mut self, input: bool) -> Self {
            self.amazon_provided_ipv6_cidr_block = Some(input);
            self
        }
        /// <p>Requests an Amazon-provided IPv6 CIDR block with a /56 prefix length for the VPC. You cannot specify the range of IP addresses, or the size of the CIDR block.</p>
        pub fn set_amazon_provided_ipv6_cidr_block(mut self, input: std::option::Option<bool>) -> Self {
            self.amazon_provided_ipv6_cidr_block = input;
            self
        }

        /// <p>The ID of the IPv6 address pool from which to allocate the IPv6 CIDR block.</p>
        pub fn ipv6_pool(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_pool = Some(input.into());
            self
        }
        /// <p>The ID of the IPv6 address pool from which to allocate the IPv6 CIDR block.</p>
        pub fn set_ipv6_pool(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_pool = input;
            self
        }

        /// <p>The IPv6 CIDR block.</p>
        pub fn ipv6_cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv6 CIDR block.</p>
        pub fn set_ipv6_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_cidr_block = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>The tenancy options for instances launched into the VPC. For <code>default</code>, instances are launched with shared tenancy by default. You can launch instances with any tenancy into a shared tenancy VPC. For <code>dedicated</code>, instances are launched as dedicated tenancy instances by default. You can only launch instances with a tenancy of <code>dedicated</code> or <code>host</code> into a dedicated tenancy VPC. </p>
        pub fn instance_tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.instance_tenancy = Some(input);
            self
        }
        /// <p>The tenancy options for instances launched into the VPC. For <code>default</code>, instances are launched with shared tenancy by default. You can launch instances with any tenancy into a shared tenancy VPC. For <code>dedicated</code>, instances are launched as dedicated tenancy instances by default. You can only launch instances with a tenancy of <code>dedicated</code> or <code>host</code> into a dedicated tenancy VPC. </p>
        pub fn set_instance_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.instance_tenancy = input;
            self
        }

        /// <p>The name of the location from which we advertise the IPV6 CIDR block.</p>
        pub fn ipv6_cidr_block_network_border_group(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_cidr_block_network_border_group = Some(input.into());
            self
        }
        /// <p>The name of the location from which we advertise the IPV6 CIDR block.</p>
        pub fn set_ipv6_cidr_block_network_border_group(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_cidr_block_network_border_group = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateVpcInput`](crate::input::CreateVpcInput)
        pub fn build(self) -> crate::input::CreateVpcInput {
            crate::input::CreateVpcInput {
                cidr_block: self.cidr_block,
                amazon_provided_ipv6_cidr_block: self.amazon_provided_ipv6_cidr_block,
                ipv6_pool: self.ipv6_pool,
                ipv6_cidr_block: self.ipv6_cidr_block,
                dry_run: self.dry_run,
                instance_tenancy: self.instance_tenancy,
                ipv6_cidr_block_network_border_group: self.ipv6_cidr_block_network_border_group,
                tag_specifications: self.tag_specifications,
            }
        }
    }
}
impl CreateVpcInput {
    /// Creates a new builder-style object to manufacture [`CreateVpcInput`](crate::input::CreateVpcInput)
    pub fn builder() -> crate::input::create_vpc_input::Builder {
        crate::input::create_vpc_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for CreateVpcInput {
    const NAME: &'static str = "CreateVpc";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_create_vpc(self)
    }
}
impl crate::operation::DryRunSupportedRequest for CreateVpcInput {}

/// <p>Describes one or more of your Capacity Reservations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeCapacityReservationsInput {
    /// <p>The ID of the Capacity Reservation.</p>
    pub capacity_reservation_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub max_results: std::option::Option<i32>,
    /// <p>One or more filters.</p>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
}
impl DescribeCapacityReservationsInput {
    /// <p>The ID of the Capacity Reservation.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.capacity_reservation_ids.is_none()`.
    pub fn capacity_reservation_ids(&self) -> &[std::string::String] {
        self.capacity_reservation_ids.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    /// <p>One or more filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }
}
impl std::fmt::Debug for DescribeCapacityReservationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CapacityReservationIds", &self.capacity_reservation_ids);
        formatter.field("NextToken", &self.next_token);
        formatter.field("MaxResults", &self.max_results);
        formatter.field("Filters", &self.filters);
        formatter.field("DryRun", &self.dry_run);
        formatter.finish()
    }
}
/// See [`DescribeCapacityReservationsInput`](crate::input::DescribeCapacityReservationsInput)
pub mod describe_capacity_reservations_input {
    /// A builder for [`DescribeCapacityReservationsInput`](crate::input::DescribeCapacityReservationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) dry_run: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `capacity_reservation_ids`.
        ///
        /// To override the contents of this collection use [`set_capacity_reservation_ids`](Self::set_capacity_reservation_ids).
        ///
        /// <p>The ID of the Capacity Reservation.</p>
        pub fn capacity_reservation_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.capacity_reservation_ids.unwrap_or_default();
            v.push(input.into());
            self.capacity_reservation_ids = Some(v);
            self
        }
        /// <p>The ID of the Capacity Reservation.</p>
        pub fn set_capacity_reservation_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.capacity_reservation_ids = input;
            self
        }

        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }

        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCapacityReservationsInput`](crate::input::DescribeCapacityReservationsInput)
        pub fn build(self) -> crate::input::DescribeCapacityReservationsInput {
            crate::input::DescribeCapacityReservationsInput {
                capacity_reservation_ids: self.capacity_reservation_ids,
                next_token: self.next_token,
                max_results: self.max_results,
                filters: self.filters,
                dry_run: self.dry_run,
            }
        }
    }
}
impl DescribeCapacityReservationsInput {
    /// Creates a new builder-style object to manufacture [`DescribeCapacityReservationsInput`](crate::input::DescribeCapacityReservationsInput)
    pub fn builder() -> crate::input::describe_capacity_reservations_input::Builder {
        crate::input::describe_capacity_reservations_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeCapacityReservationsInput {
    const NAME: &'static str = "DescribeCapacityReservations";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_capacity_reservations(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeCapacityReservationsInput {}

/// <p>Describes the specified images (AMIs, AKIs, and ARIs) available to you or all of the images available to you.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeImagesInput {
    /// <p>Scopes the images by users with explicit launch permissions. Specify an AWS account ID, <code>self</code> (the sender of the request), or <code>all</code> (public AMIs).</p>
    pub executable_users: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The filters.</p>
    /// <ul>
    /// <li><p><code>architecture</code> - The image architecture (<code>i386</code> | <code>x86_64</code> | <code>arm64</code>).</p></li>
    /// <li><p><code>block-device-mapping.delete-on-termination</code> - A Boolean value that indicates whether the Amazon EBS volume is deleted on instance termination.</p></li>
    /// <li><p><code>block-device-mapping.device-name</code> - The device name specified in the block device mapping (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p></li>
    /// <li><p><code>block-device-mapping.snapshot-id</code> - The ID of the snapshot used for the EBS volume.</p></li>
    /// <li><p><code>block-device-mapping.volume-size</code> - The volume size of the EBS volume, in GiB.</p></li>
    /// <li><p><code>block-device-mapping.volume-type</code> - The volume type of the EBS volume (<code>gp2</code> | <code>io1</code> | <code>st1 </code>| <code>sc1</code> | <code>standard</code>).</p></li>
    /// <li><p><code>block-device-mapping.encrypted</code> - A Boolean that indicates whether the EBS volume is encrypted.</p></li>
    /// <li><p><code>description</code> - The description of the image (provided during image creation).</p></li>
    /// <li><p><code>ena-support</code> - A Boolean that indicates whether enhanced networking with ENA is enabled.</p></li>
    /// <li><p><code>hypervisor</code> - The hypervisor type (<code>ovm</code> | <code>xen</code>).</p></li>
    /// <li><p><code>image-id</code> - The ID of the image.</p></li>
    /// <li><p><code>image-type</code> - The image type (<code>machine</code> | <code>kernel</code> | <code>ramdisk</code>).</p></li>
    /// <li><p><code>is-public</code> - A Boolean that indicates whether the image is public.</p></li>
    /// <li><p><code>kernel-id</code> - The kernel ID.</p></li>
    /// <li><p><code>manifest-location</code> - The location of the image manifest.</p></li>
    /// <li><p><code>name</code> - The name of the AMI (provided during image creation).</p></li>
    /// <li><p><code>owner-alias</code> - String value from an Amazon-maintained list ( <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>) of snapshot owners. Not to be confused with the user-configured AWS account alias, which is set from the IAM console.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the image owner.</p></li>
    /// <li><p><code>platform</code> - The platform. To only list Windows-based AMIs, use <code>windows</code>.</p></li>
    /// <li><p><code>product-code</code> - The product code.</p></li>
    /// <li><p><code>product-code.type</code> - The type of the product code ( <code>devpay</code> | <code>marketplace</code>).</p></li>
    /// <li><p><code>ramdisk-id</code> - The RAM disk ID.</p></li>
    /// <li><p><code>root-device-name</code> - The device name of the root device volume (for example, <code>/dev/sda1</code>).</p></li>
    /// <li><p><code>root-device-type</code> - The type of the root device volume ( <code>ebs</code> | <code>instance-store</code>).</p></li>
    /// <li><p><code>state</code> - The state of the image (<code>available</code> | <code>pending</code> | <code>failed</code>).</p></li>
    /// <li><p><code>state-reason-code</code> - The reason code for the state change.</p></li>
    /// <li><p><code>state-reason-message</code> - The message for the state change.</p></li>
    /// <li><p><code>sriov-net-support</code> - A value of <code>simple</code> indicates that enhanced networking with the Intel 82599 VF interface is enabled.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>virtualization-type</code> - The virtualization type ( <code>paravirtual</code> | <code>hvm</code>).</p></li></ul>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>The image IDs.</p>
    /// <p>Default: Describes all images available to you.</p>
    pub image_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Filters the images by the owner. Specify an AWS account ID, <code>self</code> (owner is the sender of the request), or an AWS owner alias (valid values are <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>). Omitting this option returns all images for which you have launch permissions, regardless of ownership.</p>
    pub owners: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
}
impl DescribeImagesInput {
    /// <p>Scopes the images by users with explicit launch permissions. Specify an AWS account ID, <code>self</code> (the sender of the request), or <code>all</code> (public AMIs).</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.executable_users.is_none()`.
    pub fn executable_users(&self) -> &[std::string::String] {
        self.executable_users.as_deref().unwrap_or_default()
    }

    /// <p>The filters.</p>
    /// <ul>
    /// <li><p><code>architecture</code> - The image architecture (<code>i386</code> | <code>x86_64</code> | <code>arm64</code>).</p></li>
    /// <li><p><code>block-device-mapping.delete-on-termination</code> - A Boolean value that indicates whether the Amazon EBS volume is deleted on instance termination.</p></li>
    /// <li><p><code>block-device-mapping.device-name</code> - The device name specified in the block device mapping (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p></li>
    /// <li><p><code>block-device-mapping.snapshot-id</code> - The ID of the snapshot used for the EBS volume.</p></li>
    /// <li><p><code>block-device-mapping.volume-size</code> - The volume size of the EBS volume, in GiB.</p></li>
    /// <li><p><code>block-device-mapping.volume-type</code> - The volume type of the EBS volume (<code>gp2</code> | <code>io1</code> | <code>st1 </code>| <code>sc1</code> | <code>standard</code>).</p></li>
    /// <li><p><code>block-device-mapping.encrypted</code> - A Boolean that indicates whether the EBS volume is encrypted.</p></li>
    /// <li><p><code>description</code> - The description of the image (provided during image creation).</p></li>
    /// <li><p><code>ena-support</code> - A Boolean that indicates whether enhanced networking with ENA is enabled.</p></li>
    /// <li><p><code>hypervisor</code> - The hypervisor type (<code>ovm</code> | <code>xen</code>).</p></li>
    /// <li><p><code>image-id</code> - The ID of the image.</p></li>
    /// <li><p><code>image-type</code> - The image type (<code>machine</code> | <code>kernel</code> | <code>ramdisk</code>).</p></li>
    /// <li><p><code>is-public</code> - A Boolean that indicates whether the image is public.</p></li>
    /// <li><p><code>kernel-id</code> - The kernel ID.</p></li>
    /// <li><p><code>manifest-location</code> - The location of the image manifest.</p></li>
    /// <li><p><code>name</code> - The name of the AMI (provided during image creation).</p></li>
    /// <li><p><code>owner-alias</code> - String value from an Amazon-maintained list ( <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>) of snapshot owners. Not to be confused with the user-configured AWS account alias, which is set from the IAM console.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the image owner.</p></li>
    /// <li><p><code>platform</code> - The platform. To only list Windows-based AMIs, use <code>windows</code>.</p></li>
    /// <li><p><code>product-code</code> - The product code.</p></li>
    /// <li><p><code>product-code.type</code> - The type of the product code ( <code>devpay</code> | <code>marketplace</code>).</p></li>
    /// <li><p><code>ramdisk-id</code> - The RAM disk ID.</p></li>
    /// <li><p><code>root-device-name</code> - The device name of the root device volume (for example, <code>/dev/sda1</code>).</p></li>
    /// <li><p><code>root-device-type</code> - The type of the root device volume ( <code>ebs</code> | <code>instance-store</code>).</p></li>
    /// <li><p><code>state</code> - The state of the image (<code>available</code> | <code>pending</code> | <code>failed</code>).</p></li>
    /// <li><p><code>state-reason-code</code> - The reason code for the state change.</p></li>
    /// <li><p><code>state-reason-message</code> - The message for the state change.</p></li>
    /// <li><p><code>sriov-net-support</code> - A value of <code>simple</code> indicates that enhanced networking with the Intel 82599 VF interface is enabled.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>virtualization-type</code> - The virtualization type ( <code>paravirtual</code> | <code>hvm</code>).</p></li></ul>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>The image IDs.</p>
    /// <p>Default: Describes all images available to you.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.image_ids.is_none()`.
    pub fn image_ids(&self) -> &[std::string::String] {
        self.image_ids.as_deref().unwrap_or_default()
    }

    /// <p>Filters the images by the owner. Specify an AWS account ID, <code>self</code> (owner is the sender of the request), or an AWS owner alias (valid values are <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>). Omitting this option returns all images for which you have launch permissions, regardless of ownership.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.owners.is_none()`.
    pub fn owners(&self) -> &[std::string::String] {
        self.owners.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }
}
impl std::fmt::Debug for DescribeImagesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ExecutableUsers", &self.executable_users);
        formatter.field("Filters", &self.filters);
        formatter.field("ImageIds", &self.image_ids);
        formatter.field("Owners", &self.owners);
        formatter.field("DryRun", &self.dry_run);
        formatter.finish()
    }
}
/// See [`DescribeImagesInput`](crate::input::DescribeImagesInput)
pub mod describe_images_input {
    /// A builder for [`DescribeImagesInput`](crate::input::DescribeImagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) executable_users: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) image_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) owners: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) dry_run: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `executable_users`.
        ///
        /// To override the contents of this collection use [`set_executable_users`](Self::set_executable_users).
        ///
        /// <p>Scopes the images by users with explicit launch permissions. Specify an AWS account ID, <code>self</code> (the sender of the request), or <code>all</code> (public AMIs).</p>
        pub fn executable_users(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.executable_users.unwrap_or_default();
            v.push(input.into());
            self.executable_users = Some(v);
            self
        }
        /// <p>Scopes the images by users with explicit launch permissions. Specify an AWS account ID, <code>self</code> (the sender of the request), or <code>all</code> (public AMIs).</p>
        pub fn set_executable_users(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.executable_users = input;
            self
        }

        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>The filters.</p>
        /// <ul>
        /// <li><p><code>architecture</code> - The image architecture (<code>i386</code> | <code>x86_64</code> | <code>arm64</code>).</p></li>
        /// <li><p><code>block-device-mapping.delete-on-termination</code> - A Boolean value that indicates whether the Amazon EBS volume is deleted on instance termination.</p></li>
        /// <li><p><code>block-device-mapping.device-name</code> - The device name specified in the block device mapping (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p></li>
        /// <li><p><code>block-device-mapping.snapshot-id</code> - The ID of the snapshot used for the EBS volume.</p></li>
        /// <li><p><code>block-device-mapping.volume-size</code> - The volume size of the EBS volume, in GiB.</p></li>
        /// <li><p><code>block-device-mapping.volume-type</code> - The volume type of the EBS volume (<code>gp2</code> | <code>io1</code> | <code>st1 </code>| <code>sc1</code> | <code>standard</code>).</p></li>
        /// <li><p><code>block-device-mapping.encrypted</code> - A Boolean that indicates whether the EBS volume is encrypted.</p></li>
        /// <li><p><code>description</code> - The description of the image (provided during image creation).</p></li>
        /// <li><p><code>ena-support</code> - A Boolean that indicates whether enhanced networking with ENA is enabled.</p></li>
        /// <li><p><code>hypervisor</code> - The hypervisor type (<code>ovm</code> | <code>xen</code>).</p></li>
        /// <li><p><code>image-id</code> - The ID of the image.</p></li>
        /// <li><p><code>image-type</code> - The image type (<code>machine</code> | <code>kernel</code> | <code>ramdisk</code>).</p></li>
        /// <li><p><code>is-public</code> - A Boolean that indicates whether the image is public.</p></li>
        /// <li><p><code>kernel-id</code> - The kernel ID.</p></li>
        /// <li><p><code>manifest-location</code> - The location of the image manifest.</p></li>
        /// <li><p><code>name</code> - The name of the AMI (provided during image creation).</p></li>
        /// <li><p><code>owner-alias</code> - String value from an Amazon-maintained list ( <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>) of snapshot owners. Not to be confused with the user-configured AWS account alias, which is set from the IAM console.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the image owner.</p></li>
        /// <li><p><code>platform</code> - The platform. To only list Windows-based AMIs, use <code>windows</code>.</p></li>
        /// <li><p><code>product-code</code> - The product code.</p></li>
        /// <li><p><code>product-code.type</code> - The type of the product code ( <code>devpay</code> | <code>marketplace</code>).</p></li>
        /// <li><p><code>ramdisk-id</code> - The RAM disk ID.</p></li>
        /// <li><p><code>root-device-name</code> - The device name of the root device volume (for example, <code>/dev/sda1</code>).</p></li>
        /// <li><p><code>root-device-type</code> - The type of the root device volume ( <code>ebs</code> | <code>instance-store</code>).</p></li>
        /// <li><p><code>state</code> - The state of the image (<code>available</code> | <code>pending</code> | <code>failed</code>).</p></li>
        /// <li><p><code>state-reason-code</code> - The reason code for the state change.</p></li>
        /// <li><p><code>state-reason-message</code> - The message for the state change.</p></li>
        /// <li><p><code>sriov-net-support</code> - A value of <code>simple</code> indicates that enhanced networking with the Intel 82599 VF interface is enabled.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>virtualization-type</code> - The virtualization type ( <code>paravirtual</code> | <code>hvm</code>).</p></li></ul>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>The filters.</p>
        /// <ul>
        /// <li><p><code>architecture</code> - The image architecture (<code>i386</code> | <code>x86_64</code> | <code>arm64</code>).</p></li>
        /// <li><p><code>block-device-mapping.delete-on-termination</code> - A Boolean value that indicates whether the Amazon EBS volume is deleted on instance termination.</p></li>
        /// <li><p><code>block-device-mapping.device-name</code> - The device name specified in the block device mapping (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p></li>
        /// <li><p><code>block-device-mapping.snapshot-id</code> - The ID of the snapshot used for the EBS volume.</p></li>
        /// <li><p><code>block-device-mapping.volume-size</code> - The volume size of the EBS volume, in GiB.</p></li>
        /// <li><p><code>block-device-mapping.volume-type</code> - The volume type of the EBS volume (<code>gp2</code> | <code>io1</code> | <code>st1 </code>| <code>sc1</code> | <code>standard</code>).</p></li>
        /// <li><p><code>block-device-mapping.encrypted</code> - A Boolean that indicates whether the EBS volume is encrypted.</p></li>
        /// <li><p><code>description</code> - The description of the image (provided during image creation).</p></li>
        /// <li><p><code>ena-support</code> - A Boolean that indicates whether enhanced networking with ENA is enabled.</p></li>
        /// <li><p><code>hypervisor</code> - The hypervisor type (<code>ovm</code> | <code>xen</code>).</p></li>
        /// <li><p><code>image-id</code> - The ID of the image.</p></li>
        /// <li><p><code>image-type</code> - The image type (<code>machine</code> | <code>kernel</code> | <code>ramdisk</code>).</p></li>
        /// <li><p><code>is-public</code> - A Boolean that indicates whether the image is public.</p></li>
        /// <li><p><code>kernel-id</code> - The kernel ID.</p></li>
        /// <li><p><code>manifest-location</code> - The location of the image manifest.</p></li>
        /// <li><p><code>name</code> - The name of the AMI (provided during image creation).</p></li>
        /// <li><p><code>owner-alias</code> - String value from an Amazon-maintained list ( <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>) of snapshot owners. Not to be confused with the user-configured AWS account alias, which is set from the IAM console.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the image owner.</p></li>
        /// <li><p><code>platform</code> - The platform. To only list Windows-based AMIs, use <code>windows</code>.</p></li>
        /// <li><p><code>product-code</code> - The product code.</p></li>
        /// <li><p><code>product-code.type</code> - The type of the product code ( <code>devpay</code> | <code>marketplace</code>).</p></li>
        /// <li><p><code>ramdisk-id</code> - The RAM disk ID.</p></li>
        /// <li><p><code>root-device-name</code> - The device name of the root device volume (for example, <code>/dev/sda1</code>).</p></li>
        /// <li><p><code>root-device-type</code> - The type of the root device volume ( <code>ebs</code> | <code>instance-store</code>).</p></li>
        /// <li><p><code>state</code> - The state of the image (<code>available</code> | <code>pending</code> | <code>failed</code>).</p></li>
        /// <li><p><code>state-reason-code</code> - The reason code for the state change.</p></li>
        /// <li><p><code>state-reason-message</code> - The message for the state change.</p></li>
        /// <li><p><code>sriov-net-support</code> - A value of <code>simple</code> indicates that enhanced networking with the Intel 82599 VF interface is enabled.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>virtualization-type</code> - The virtualization type ( <code>paravirtual</code> | <code>hvm</code>).</p></li></ul>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// Appends an item to `image_ids`.
        ///
        /// To override the contents of this collection use [`set_image_ids`](Self::set_image_ids).
        ///
        /// <p>The image IDs.</p>
        /// <p>Default: Describes all images available to you.</p>
        pub fn image_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.image_ids.unwrap_or_default();
            v.push(input.into());
            self.image_ids = Some(v);
            self
        }
        /// <p>The image IDs.</p>
        /// <p>Default: Describes all images available to you.</p>
        pub fn set_image_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.image_ids = input;
            self
        }

        /// Appends an item to `owners`.
        ///
        /// To override the contents of this collection use [`set_owners`](Self::set_owners).
        ///
        /// <p>Filters the images by the owner. Specify an AWS account ID, <code>self</code> (owner is the sender of the request), or an AWS owner alias (valid values are <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>). Omitting this option returns all images for which you have launch permissions, regardless of ownership.</p>
        pub fn owners(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.owners.unwrap_or_default();
            v.push(input.into());
            self.owners = Some(v);
            self
        }
        /// <p>Filters the images by the owner. Specify an AWS account ID, <code>self</code> (owner is the sender of the request), or an AWS owner alias (valid values are <code>amazon</code> | <code>aws-marketplace</code> | <code>microsoft</code>). Omitting this option returns all images for which you have launch permissions, regardless of ownership.</p>
        pub fn set_owners(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.owners = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeImagesInput`](crate::input::DescribeImagesInput)
        pub fn build(self) -> crate::input::DescribeImagesInput {
            crate::input::DescribeImagesInput {
                executable_users: self.executable_users,
                filters: self.filters,
                image_ids: self.image_ids,
                owners: self.owners,
                dry_run: self.dry_run,
            }
        }
    }
}
impl DescribeImagesInput {
    /// Creates a new builder-style object to manufacture [`DescribeImagesInput`](crate::input::DescribeImagesInput)
    pub fn builder() -> crate::input::describe_images_input::Builder {
        crate::input::describe_images_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeImagesInput {
    const NAME: &'static str = "DescribeImages";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_images(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeImagesInput {}

/// <p>Describes the details of the instance types that are offered in a location.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeInstanceTypesInput {
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The instance types. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub instance_types: std::option::Option<std::vec::Vec<crate::model::InstanceType>>,
    /// <p>One or more filters. Filter names and values are case-sensitive.</p>
    /// <ul>
    /// <li><p><code>auto-recovery-supported</code> - Indicates whether auto recovery is supported. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>bare-metal</code> - Indicates whether it is a bare metal instance type. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>burstable-performance-supported</code> - Indicates whether it is a burstable performance instance type. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>current-generation</code> - Indicates whether this instance type is the latest generation instance type of an instance family. ( <code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>ebs-info.ebs-optimized-support</code> - Indicates whether the instance type is EBS-optimized. (<code>supported</code> | <code>unsupported</code> | <code>default</code>)</p></li>
    /// <li><p><code>ebs-info.encryption-support</code> - Indicates whether EBS encryption is supported. (<code>supported</code> | <code>unsupported</code>)</p></li>
    /// <li><p><code>free-tier-eligible</code> - Indicates whether the instance type is eligible to use in the free tier. (<code>true</code> | <code>false</code> )</p></li>
    /// <li><p><code>hibernation-supported</code> - Indicates whether On-Demand hibernation is supported. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>hypervisor</code> - The hypervisor used. (<code>nitro</code> | <code>xen</code>)</p></li>
    /// <li><p><code>instance-storage-info.disk.count</code> - The number of local disks.</p></li>
    /// <li><p><code>instance-storage-info.disk.size-in-gb</code> - The storage size of each instance storage disk, in GB.</p></li>
    /// <li><p><code>instance-storage-info.disk.type</code> - The storage technology for the local instance storage disks. (<code>hdd</code> | <code>ssd</code>)</p></li>
    /// <li><p><code>instance-storage-info.total-size-in-gb</code> - The total amount of storage available from all local instance storage, in GB.</p></li>
    /// <li><p><code>instance-storage-supported</code> - Indicates whether the instance type has local instance storage. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>memory-info.size-in-mib</code> - The memory size.</p></li>
    /// <li><p><code>network-info.ena-support</code> - Indicates whether Elastic Network Adapter (ENA) is supported or required. (<code>required</code> | <code>supported</code> | <code>unsupported</code>)</p></li>
    /// <li><p><code>network-info.ipv4-addresses-per-interface</code> - The maximum number of private IPv4 addresses per network interface.</p></li>
    /// <li><p><code>network-info.ipv6-addresses-per-interface</code> - The maximum number of private IPv6 addresses per network interface.</p></li>
    /// <li><p><code>network-info.ipv6-supported</code> - Indicates whether the instance type supports IPv6. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>network-info.maximum-network-interfaces</code> - The maximum number of network interfaces per instance.</p></li>
    /// <li><p><code>network-info.network-performance</code> - Describes the network performance.</p></li>
    /// <li><p><code>processor-info.sustained-clock-speed-in-ghz</code> - The CPU clock speed, in GHz.</p></li>
    /// <li><p><code>vcpu-info.default-cores</code> - The default number of cores for the instance type.</p></li>
    /// <li><p><code>vcpu-info.default-threads-per-core</code> - The default number of threads per core for the instance type.</p></li>
    /// <li><p><code>vcpu-info.default-vcpus</code> - The default number of vCPUs for the instance type.</p></li></ul>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>The maximum number of results to return for the request in a single page. The remaining results can be seen by sending another request with the next token value.</p>
    pub max_results: std::option::Option<i32>,
    /// <p>The token to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeInstanceTypesInput {
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The instance types. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instance_types.is_none()`.
    pub fn instance_types(&self) -> &[crate::model::InstanceType] {
        self.instance_types.as_deref().unwrap_or_default()
    }

    /// <p>One or more filters. Filter names and values are case-sensitive.</p>
    /// <ul>
    /// <li><p><code>auto-recovery-supported</code> - Indicates whether auto recovery is supported. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>bare-metal</code> - Indicates whether it is a bare metal instance type. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>burstable-performance-supported</code> - Indicates whether it is a burstable performance instance type. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>current-generation</code> - Indicates whether this instance type is the latest generation instance type of an instance family. ( <code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>ebs-info.ebs-optimized-support</code> - Indicates whether the instance type is EBS-optimized. (<code>supported</code> | <code>unsupported</code> | <code>default</code>)</p></li>
    /// <li><p><code>ebs-info.encryption-support</code> - Indicates whether EBS encryption is supported. (<code>supported</code> | <code>unsupported</code>)</p></li>
    /// <li><p><code>free-tier-eligible</code> - Indicates whether the instance type is eligible to use in the free tier. (<code>true</code> | <code>false</code> )</p></li>
    /// <li><p><code>hibernation-supported</code> - Indicates whether On-Demand hibernation is supported. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>hypervisor</code> - The hypervisor used. (<code>nitro</code> | <code>xen</code>)</p></li>
    /// <li><p><code>instance-storage-info.disk.count</code> - The number of local disks.</p></li>
    /// <li><p><code>instance-storage-info.disk.size-in-gb</code> - The storage size of each instance storage disk, in GB.</p></li>
    /// <li><p><code>instance-storage-info.disk.type</code> - The storage technology for the local instance storage disks. (<code>hdd</code> | <code>ssd</code>)</p></li>
    /// <li><p><code>instance-storage-info.total-size-in-gb</code> - The total amount of storage available from all local instance storage, in GB.</p></li>
    /// <li><p><code>instance-storage-supported</code> - Indicates whether the instance type has local instance storage. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>memory-info.size-in-mib</code> - The memory size.</p></li>
    /// <li><p><code>network-info.ena-support</code> - Indicates whether Elastic Network Adapter (ENA) is supported or required. (<code>required</code> | <code>supported</code> | <code>unsupported</code>)</p></li>
    /// <li><p><code>network-info.ipv4-addresses-per-interface</code> - The maximum number of private IPv4 addresses per network interface.</p></li>
    /// <li><p><code>network-info.ipv6-addresses-per-interface</code> - The maximum number of private IPv6 addresses per network interface.</p></li>
    /// <li><p><code>network-info.ipv6-supported</code> - Indicates whether the instance type supports IPv6. (<code>true</code> | <code>false</code>)</p></li>
    /// <li><p><code>network-info.maximum-network-interfaces</code> - The maximum number of network interfaces per instance.</p></li>
    /// <li><p><code>network-info.network-performance</code> - Describes the network performance.</p></li>
    /// <li><p><code>processor-info.sustained-clock-speed-in-ghz</code> - The CPU clock speed, in GHz.</p></li>
    /// <li><p><code>vcpu-info.default-cores</code> - The default number of cores for the instance type.</p></li>
    /// <li><p><code>vcpu-info.default-threads-per-core</code> - The default number of threads per core for the instance type.</p></li>
    /// <li><p><code>vcpu-info.default-vcpus</code> - The default number of vCPUs for the instance type.</p></li></ul>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>The maximum number of results to return for the request in a single page. The remaining results can be seen by sending another request with the next token value.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    /// <p>The token to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeInstanceTypesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DryRun", &self.dry_run);
        formatter.enum_list_field("InstanceTypes", &self.instance_types);
        formatter.field("Filters", &self.filters);
        formatter.field("MaxResults", &self.max_results);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeInstanceTypesInput`](crate::input::DescribeInstanceTypesInput)
pub mod describe_instance_types_input {
    /// A builder for [`DescribeInstanceTypesInput`](crate::input::DescribeInstanceTypesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) instance_types: std::option::Option<std::vec::Vec<crate::model::InstanceType>>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// Appends an item to `instance_types`.
        ///
        /// To override the contents of this collection use [`set_instance_types`](Self::set_instance_types).
        ///
        /// <p>The instance types. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn instance_types(mut self, input: impl std::convert::Into<crate::model::InstanceType>) -> Self {
            let mut v = self.instance_types.unwrap_or_default();
            v.push(input.into());
            self.instance_types = Some(v);
            self
        }
        /// <p>The instance types. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceType>>) -> Self {
            self.instance_types = input;
            self
        }

        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters. Filter names and values are case-sensitive.</p>
        /// <ul>
        /// <li><p><code>auto-recovery-supported</code> - Indicates whether auto recovery is supported. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>bare-metal</code> - Indicates whether it is a bare metal instance type. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>burstable-performance-supported</code> - Indicates whether it is a burstable performance instance type. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>current-generation</code> - Indicates whether this instance type is the latest generation instance type of an instance family. ( <code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>ebs-info.ebs-optimized-support</code> - Indicates whether the instance type is EBS-optimized. (<code>supported</code> | <code>unsupported</code> | <code>default</code>)</p></li>
        /// <li><p><code>ebs-info.encryption-support</code> - Indicates whether EBS encryption is supported. (<code>supported</code> | <code>unsupported</code>)</p></li>
        /// <li><p><code>free-tier-eligible</code> - Indicates whether the instance type is eligible to use in the free tier. (<code>true</code> | <code>false</code> )</p></li>
        /// <li><p><code>hibernation-supported</code> - Indicates whether On-Demand hibernation is supported. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>hypervisor</code> - The hypervisor used. (<code>nitro</code> | <code>xen</code>)</p></li>
        /// <li><p><code>instance-storage-info.disk.count</code> - The number of local disks.</p></li>
        /// <li><p><code>instance-storage-info.disk.size-in-gb</code> - The storage size of each instance storage disk, in GB.</p></li>
        /// <li><p><code>instance-storage-info.disk.type</code> - The storage technology for the local instance storage disks. (<code>hdd</code> | <code>ssd</code>)</p></li>
        /// <li><p><code>instance-storage-info.total-size-in-gb</code> - The total amount of storage available from all local instance storage, in GB.</p></li>
        /// <li><p><code>instance-storage-supported</code> - Indicates whether the instance type has local instance storage. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>memory-info.size-in-mib</code> - The memory size.</p></li>
        /// <li><p><code>network-info.ena-support</code> - Indicates whether Elastic Network Adapter (ENA) is supported or required. (<code>required</code> | <code>supported</code> | <code>unsupported</code>)</p></li>
        /// <li><p><code>network-info.ipv4-addresses-per-interface</code> - The maximum number of private IPv4 addresses per network interface.</p></li>
        /// <li><p><code>network-info.ipv6-addresses-per-interface</code> - The maximum number of private IPv6 addresses per network interface.</p></li>
        /// <li><p><code>network-info.ipv6-supported</code> - Indicates whether the instance type supports IPv6. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>network-info.maximum-network-interfaces</code> - The maximum number of network interfaces per instance.</p></li>
        /// <li><p><code>network-info.network-performance</code> - Describes the network performance.</p></li>
        /// <li><p><code>processor-info.sustained-clock-speed-in-ghz</code> - The CPU clock speed, in GHz.</p></li>
        /// <li><p><code>vcpu-info.default-cores</code> - The default number of cores for the instance type.</p></li>
        /// <li><p><code>vcpu-info.default-threads-per-core</code> - The default number of threads per core for the instance type.</p></li>
        /// <li><p><code>vcpu-info.default-vcpus</code> - The default number of vCPUs for the instance type.</p></li></ul>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters. Filter names and values are case-sensitive.</p>
        /// <ul>
        /// <li><p><code>auto-recovery-supported</code> - Indicates whether auto recovery is supported. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>bare-metal</code> - Indicates whether it is a bare metal instance type. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>burstable-performance-supported</code> - Indicates whether it is a burstable performance instance type. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>current-generation</code> - Indicates whether this instance type is the latest generation instance type of an instance family. ( <code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>ebs-info.ebs-optimized-support</code> - Indicates whether the instance type is EBS-optimized. (<code>supported</code> | <code>unsupported</code> | <code>default</code>)</p></li>
        /// <li><p><code>ebs-info.encryption-support</code> - Indicates whether EBS encryption is supported. (<code>supported</code> | <code>unsupported</code>)</p></li>
        /// <li><p><code>free-tier-eligible</code> - Indicates whether the instance type is eligible to use in the free tier. (<code>true</code> | <code>false</code> )</p></li>
        /// <li><p><code>hibernation-supported</code> - Indicates whether On-Demand hibernation is supported. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>hypervisor</code> - The hypervisor used. (<code>nitro</code> | <code>xen</code>)</p></li>
        /// <li><p><code>instance-storage-info.disk.count</code> - The number of local disks.</p></li>
        /// <li><p><code>instance-storage-info.disk.size-in-gb</code> - The storage size of each instance storage disk, in GB.</p></li>
        /// <li><p><code>instance-storage-info.disk.type</code> - The storage technology for the local instance storage disks. (<code>hdd</code> | <code>ssd</code>)</p></li>
        /// <li><p><code>instance-storage-info.total-size-in-gb</code> - The total amount of storage available from all local instance storage, in GB.</p></li>
        /// <li><p><code>instance-storage-supported</code> - Indicates whether the instance type has local instance storage. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>memory-info.size-in-mib</code> - The memory size.</p></li>
        /// <li><p><code>network-info.ena-support</code> - Indicates whether Elastic Network Adapter (ENA) is supported or required. (<code>required</code> | <code>supported</code> | <code>unsupported</code>)</p></li>
        /// <li><p><code>network-info.ipv4-addresses-per-interface</code> - The maximum number of private IPv4 addresses per network interface.</p></li>
        /// <li><p><code>network-info.ipv6-addresses-per-interface</code> - The maximum number of private IPv6 addresses per network interface.</p></li>
        /// <li><p><code>network-info.ipv6-supported</code> - Indicates whether the instance type supports IPv6. (<code>true</code> | <code>false</code>)</p></li>
        /// <li><p><code>network-info.maximum-network-interfaces</code> - The maximum number of network interfaces per instance.</p></li>
        /// <li><p><code>network-info.network-performance</code> - Describes the network performance.</p></li>
        /// <li><p><code>processor-info.sustained-clock-speed-in-ghz</code> - The CPU clock speed, in GHz.</p></li>
        /// <li><p><code>vcpu-info.default-cores</code> - The default number of cores for the instance type.</p></li>
        /// <li><p><code>vcpu-info.default-threads-per-core</code> - The default number of threads per core for the instance type.</p></li>
        /// <li><p><code>vcpu-info.default-vcpus</code> - The default number of vCPUs for the instance type.</p></li></ul>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>The maximum number of results to return for the request in a single page. The remaining results can be seen by sending another request with the next token value.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return for the request in a single page. The remaining results can be seen by sending another request with the next token value.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }

        /// <p>The token to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeInstanceTypesInput`](crate::input::DescribeInstanceTypesInput)
        pub fn build(self) -> crate::input::DescribeInstanceTypesInput {
            crate::input::DescribeInstanceTypesInput {
                dry_run: self.dry_run,
                instance_types: self.instance_types,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeInstanceTypesInput {
    /// Creates a new builder-style object to manufacture [`DescribeInstanceTypesInput`](crate::input::DescribeInstanceTypesInput)
    pub fn builder() -> crate::input::describe_instance_types_input::Builder {
        crate::input::describe_instance_types_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeInstanceTypesInput {
    const NAME: &'static str = "DescribeInstanceTypes";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_instance_types(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeInstanceTypesInput {}

/// <p>Describes the specified instances or all instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeInstancesInput {
    /// <p>One or more filters.</p>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>The instance IDs.</p>
    pub instance_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub max_results: std::option::Option<i32>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeInstancesInput {
    /// <p>One or more filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>The instance IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instance_ids.is_none()`.
    pub fn instance_ids(&self) -> &[std::string::String] {
        self.instance_ids.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("InstanceIds", &self.instance_ids);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("MaxResults", &self.max_results);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeInstancesInput`](crate::input::DescribeInstancesInput)
pub mod describe_instances_input {
    /// A builder for [`DescribeInstancesInput`](crate::input::DescribeInstancesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) instance_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// Appends an item to `instance_ids`.
        ///
        /// To override the contents of this collection use [`set_instance_ids`](Self::set_instance_ids).
        ///
        /// <p>The instance IDs.</p>
        pub fn instance_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.instance_ids.unwrap_or_default();
            v.push(input.into());
            self.instance_ids = Some(v);
            self
        }
        /// <p>The instance IDs.</p>
        pub fn set_instance_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.instance_ids = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }

        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeInstancesInput`](crate::input::DescribeInstancesInput)
        pub fn build(self) -> crate::input::DescribeInstancesInput {
            crate::input::DescribeInstancesInput {
                filters: self.filters,
                instance_ids: self.instance_ids,
                dry_run: self.dry_run,
                max_results: self.max_results,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeInstancesInput {
    /// Creates a new builder-style object to manufacture [`DescribeInstancesInput`](crate::input::DescribeInstancesInput)
    pub fn builder() -> crate::input::describe_instances_input::Builder {
        crate::input::describe_instances_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeInstancesInput {
    const NAME: &'static str = "DescribeInstances";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_instances(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeInstancesInput {}

/// <p>Describes one or more of your network interfaces.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeNetworkInterfacesInput {
    /// <p>One or more filters.</p>
    /// <ul>
    /// <li><p><code>addresses.private-ip-address</code> - The private IPv4 addresses associated with the network interface.</p></li>
    /// <li><p><code>addresses.primary</code> - Whether the private IPv4 address is the primary IP address associated with the network interface.</p></li>
    /// <li><p><code>addresses.association.public-ip</code> - The association ID returned when the network interface was associated with the Elastic IP address (IPv4).</p></li>
    /// <li><p><code>addresses.association.owner-id</code> - The owner ID of the addresses associated with the network interface.</p></li>
    /// <li><p><code>association.association-id</code> - The association ID returned when the network interface was associated with an IPv4 address.</p></li>
    /// <li><p><code>association.allocation-id</code> - The allocation ID returned when you allocated the Elastic IP address (IPv4) for your network interface.</p></li>
    /// <li><p><code>association.ip-owner-id</code> - The owner of the Elastic IP address (IPv4) associated with the network interface.</p></li>
    /// <li><p><code>association.public-ip</code> - The address of the Elastic IP address (IPv4) bound to the network interface.</p></li>
    /// <li><p><code>association.public-dns-name</code> - The public DNS name for the network interface (IPv4).</p></li>
    /// <li><p><code>attachment.attachment-id</code> - The ID of the interface attachment.</p></li>
    /// <li><p><code>attachment.attach-time</code> - The time that the network interface was attached to an instance.</p></li>
    /// <li><p><code>attachment.delete-on-termination</code> - Indicates whether the attachment is deleted when an instance is terminated.</p></li>
    /// <li><p><code>attachment.device-index</code> - The device index to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.instance-id</code> - The ID of the instance to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.instance-owner-id</code> - The owner ID of the instance to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.nat-gateway-id</code> - The ID of the NAT gateway to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.status</code> - The status of the attachment ( <code>attaching</code> | <code>attached</code> | <code>detaching</code> | <code>detached</code>).</p></li>
    /// <li><p><code>availability-zone</code> - The Availability Zone of the network interface.</p></li>
    /// <li><p><code>description</code> - The description of the network interface.</p></li>
    /// <li><p><code>group-id</code> - The ID of a security group associated with the network interface.</p></li>
    /// <li><p><code>group-name</code> - The name of a security group associated with the network interface.</p></li>
    /// <li><p><code>ipv6-addresses.ipv6-address</code> - An IPv6 address associated with the network interface.</p></li>
    /// <li><p><code>mac-address</code> - The MAC address of the network interface.</p></li>
    /// <li><p><code>network-interface-id</code> - The ID of the network interface.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the network interface owner.</p></li>
    /// <li><p><code>private-ip-address</code> - The private IPv4 address or addresses of the network interface.</p></li>
    /// <li><p><code>private-dns-name</code> - The private DNS name of the network interface (IPv4).</p></li>
    /// <li><p><code>requester-id</code> - The ID of the entity that launched the instance on your behalf (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
    /// <li><p><code>requester-managed</code> - Indicates whether the network interface is being managed by an AWS service (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
    /// <li><p><code>source-dest-check</code> - Indicates whether the network interface performs source/destination checking. A value of <code>true</code> means checking is enabled, and <code>false</code> means checking is disabled. The value must be <code>false</code> for the network interface to perform network address translation (NAT) in your VPC.</p></li>
    /// <li><p><code>status</code> - The status of the network interface. If the network interface is not attached to an instance, the status is <code>available</code>; if a network interface is attached to an instance the status is <code>in-use</code>.</p></li>
    /// <li><p><code>subnet-id</code> - The ID of the subnet for the network interface.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>vpc-id</code> - The ID of the VPC for the network interface.</p></li></ul>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>One or more network interface IDs.</p>
    /// <p>Default: Describes all your network interfaces.</p>
    pub network_interface_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The token to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of items to return for this request. The request returns a token that you can specify in a subsequent call to get the next set of results. You cannot specify this parameter and the network interface IDs parameter in the same request.</p>
    pub max_results: std::option::Option<i32>,
}
impl DescribeNetworkInterfacesInput {
    /// <p>One or more filters.</p>
    /// <ul>
    /// <li><p><code>addresses.private-ip-address</code> - The private IPv4 addresses associated with the network interface.</p></li>
    /// <li><p><code>addresses.primary</code> - Whether the private IPv4 address is the primary IP address associated with the network interface.</p></li>
    /// <li><p><code>addresses.association.public-ip</code> - The association ID returned when the network interface was associated with the Elastic IP address (IPv4).</p></li>
    /// <li><p><code>addresses.association.owner-id</code> - The owner ID of the addresses associated with the network interface.</p></li>
    /// <li><p><code>association.association-id</code> - The association ID returned when the network interface was associated with an IPv4 address.</p></li>
    /// <li><p><code>association.allocation-id</code> - The allocation ID returned when you allocated the Elastic IP address (IPv4) for your network interface.</p></li>
    /// <li><p><code>association.ip-owner-id</code> - The owner of the Elastic IP address (IPv4) associated with the network interface.</p></li>
    /// <li><p><code>association.public-ip</code> - The address of the Elastic IP address (IPv4) bound to the network interface.</p></li>
    /// <li><p><code>association.public-dns-name</code> - The public DNS name for the network interface (IPv4).</p></li>
    /// <li><p><code>attachment.attachment-id</code> - The ID of the interface attachment.</p></li>
    /// <li><p><code>attachment.attach-time</code> - The time that the network interface was attached to an instance.</p></li>
    /// <li><p><code>attachment.delete-on-termination</code> - Indicates whether the attachment is deleted when an instance is terminated.</p></li>
    /// <li><p><code>attachment.device-index</code> - The device index to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.instance-id</code> - The ID of the instance to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.instance-owner-id</code> - The owner ID of the instance to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.nat-gateway-id</code> - The ID of the NAT gateway to which the network interface is attached.</p></li>
    /// <li><p><code>attachment.status</code> - The status of the attachment ( <code>attaching</code> | <code>attached</code> | <code>detaching</code> | <code>detached</code>).</p></li>
    /// <li><p><code>availability-zone</code> - The Availability Zone of the network interface.</p></li>
    /// <li><p><code>description</code> - The description of the network interface.</p></li>
    /// <li><p><code>group-id</code> - The ID of a security group associated with the network interface.</p></li>
    /// <li><p><code>group-name</code> - The name of a security group associated with the network interface.</p></li>
    /// <li><p><code>ipv6-addresses.ipv6-address</code> - An IPv6 address associated with the network interface.</p></li>
    /// <li><p><code>mac-address</code> - The MAC address of the network interface.</p></li>
    /// <li><p><code>network-interface-id</code> - The ID of the network interface.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the network interface owner.</p></li>
    /// <li><p><code>private-ip-address</code> - The private IPv4 address or addresses of the network interface.</p></li>
    /// <li><p><code>private-dns-name</code> - The private DNS name of the network interface (IPv4).</p></li>
    /// <li><p><code>requester-id</code> - The ID of the entity that launched the instance on your behalf (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
    /// <li><p><code>requester-managed</code> - Indicates whether the network interface is being managed by an AWS service (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
    /// <li><p><code>source-dest-check</code> - Indicates whether the network interface performs source/destination checking. A value of <code>true</code> means checking is enabled, and <code>false</code> means checking is disabled. The value must be <code>false</code> for the network interface to perform network address translation (NAT) in your VPC.</p></li>
    /// <li><p><code>status</code> - The status of the network interface. If the network interface is not attached to an instance, the status is <code>available</code>; if a network interface is attached to an instance the status is <code>in-use</code>.</p></li>
    /// <li><p><code>subnet-id</code> - The ID of the subnet for the network interface.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>vpc-id</code> - The ID of the VPC for the network interface.</p></li></ul>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>One or more network interface IDs.</p>
    /// <p>Default: Describes all your network interfaces.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interface_ids.is_none()`.
    pub fn network_interface_ids(&self) -> &[std::string::String] {
        self.network_interface_ids.as_deref().unwrap_or_default()
    }

    /// <p>The token to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of items to return for this request. The request returns a token that you can specify in a subsequent call to get the next set of results. You cannot specify this parameter and the network interface IDs parameter in the same request.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Debug for DescribeNetworkInterfacesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("NetworkInterfaceIds", &self.network_interface_ids);
        formatter.field("NextToken", &self.next_token);
        formatter.field("MaxResults", &self.max_results);
        formatter.finish()
    }
}
/// See [`DescribeNetworkInterfacesInput`](crate::input::DescribeNetworkInterfacesInput)
pub mod describe_network_interfaces_input {
    /// A builder for [`DescribeNetworkInterfacesInput`](crate::input::DescribeNetworkInterfacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) network_interface_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        /// <ul>
        /// <li><p><code>addresses.private-ip-address</code> - The private IPv4 addresses associated with the network interface.</p></li>
        /// <li><p><code>addresses.primary</code> - Whether the private IPv4 address is the primary IP address associated with the network interface.</p></li>
        /// <li><p><code>addresses.association.public-ip</code> - The association ID returned when the network interface was associated with the Elastic IP address (IPv4).</p></li>
        /// <li><p><code>addresses.association.owner-id</code> - The owner ID of the addresses associated with the network interface.</p></li>
        /// <li><p><code>association.association-id</code> - The association ID returned when the network interface was associated with an IPv4 address.</p></li>
        /// <li><p><code>association.allocation-id</code> - The allocation ID returned when you allocated the Elastic IP address (IPv4) for your network interface.</p></li>
        /// <li><p><code>association.ip-owner-id</code> - The owner of the Elastic IP address (IPv4) associated with the network interface.</p></li>
        /// <li><p><code>association.public-ip</code> - The address of the Elastic IP address (IPv4) bound to the network interface.</p></li>
        /// <li><p><code>association.public-dns-name</code> - The public DNS name for the network interface (IPv4).</p></li>
        /// <li><p><code>attachment.attachment-id</code> - The ID of the interface attachment.</p></li>
        /// <li><p><code>attachment.attach-time</code> - The time that the network interface was attached to an instance.</p></li>
        /// <li><p><code>attachment.delete-on-termination</code> - Indicates whether the attachment is deleted when an instance is terminated.</p></li>
        /// <li><p><code>attachment.device-index</code> - The device index to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.instance-id</code> - The ID of the instance to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.instance-owner-id</code> - The owner ID of the instance to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.nat-gateway-id</code> - The ID of the NAT gateway to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.status</code> - The status of the attachment ( <code>attaching</code> | <code>attached</code> | <code>detaching</code> | <code>detached</code>).</p></li>
        /// <li><p><code>availability-zone</code> - The Availability Zone of the network interface.</p></li>
        /// <li><p><code>description</code> - The description of the network interface.</p></li>
        /// <li><p><code>group-id</code> - The ID of a security group associated with the network interface.</p></li>
        /// <li><p><code>group-name</code> - The name of a security group associated with the network interface.</p></li>
        /// <li><p><code>ipv6-addresses.ipv6-address</code> - An IPv6 address associated with the network interface.</p></li>
        /// <li><p><code>mac-address</code> - The MAC address of the network interface.</p></li>
        /// <li><p><code>network-interface-id</code> - The ID of the network interface.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the network interface owner.</p></li>
        /// <li><p><code>private-ip-address</code> - The private IPv4 address or addresses of the network interface.</p></li>
        /// <li><p><code>private-dns-name</code> - The private DNS name of the network interface (IPv4).</p></li>
        /// <li><p><code>requester-id</code> - The ID of the entity that launched the instance on your behalf (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
        /// <li><p><code>requester-managed</code> - Indicates whether the network interface is being managed by an AWS service (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
        /// <li><p><code>source-dest-check</code> - Indicates whether the network interface performs source/destination checking. A value of <code>true</code> means checking is enabled, and <code>false</code> means checking is disabled. The value must be <code>false</code> for the network interface to perform network address translation (NAT) in your VPC.</p></li>
        /// <li><p><code>status</code> - The status of the network interface. If the network interface is not attached to an instance, the status is <code>available</code>; if a network interface is attached to an instance the status is <code>in-use</code>.</p></li>
        /// <li><p><code>subnet-id</code> - The ID of the subnet for the network interface.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>vpc-id</code> - The ID of the VPC for the network interface.</p></li></ul>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        /// <ul>
        /// <li><p><code>addresses.private-ip-address</code> - The private IPv4 addresses associated with the network interface.</p></li>
        /// <li><p><code>addresses.primary</code> - Whether the private IPv4 address is the primary IP address associated with the network interface.</p></li>
        /// <li><p><code>addresses.association.public-ip</code> - The association ID returned when the network interface was associated with the Elastic IP address (IPv4).</p></li>
        /// <li><p><code>addresses.association.owner-id</code> - The owner ID of the addresses associated with the network interface.</p></li>
        /// <li><p><code>association.association-id</code> - The association ID returned when the network interface was associated with an IPv4 address.</p></li>
        /// <li><p><code>association.allocation-id</code> - The allocation ID returned when you allocated the Elastic IP address (IPv4) for your network interface.</p></li>
        /// <li><p><code>association.ip-owner-id</code> - The owner of the Elastic IP address (IPv4) associated with the network interface.</p></li>
        /// <li><p><code>association.public-ip</code> - The address of the Elastic IP address (IPv4) bound to the network interface.</p></li>
        /// <li><p><code>association.public-dns-name</code> - The public DNS name for the network interface (IPv4).</p></li>
        /// <li><p><code>attachment.attachment-id</code> - The ID of the interface attachment.</p></li>
        /// <li><p><code>attachment.attach-time</code> - The time that the network interface was attached to an instance.</p></li>
        /// <li><p><code>attachment.delete-on-termination</code> - Indicates whether the attachment is deleted when an instance is terminated.</p></li>
        /// <li><p><code>attachment.device-index</code> - The device index to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.instance-id</code> - The ID of the instance to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.instance-owner-id</code> - The owner ID of the instance to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.nat-gateway-id</code> - The ID of the NAT gateway to which the network interface is attached.</p></li>
        /// <li><p><code>attachment.status</code> - The status of the attachment ( <code>attaching</code> | <code>attached</code> | <code>detaching</code> | <code>detached</code>).</p></li>
        /// <li><p><code>availability-zone</code> - The Availability Zone of the network interface.</p></li>
        /// <li><p><code>description</code> - The description of the network interface.</p></li>
        /// <li><p><code>group-id</code> - The ID of a security group associated with the network interface.</p></li>
        /// <li><p><code>group-name</code> - The name of a security group associated with the network interface.</p></li>
        /// <li><p><code>ipv6-addresses.ipv6-address</code> - An IPv6 address associated with the network interface.</p></li>
        /// <li><p><code>mac-address</code> - The MAC address of the network interface.</p></li>
        /// <li><p><code>network-interface-id</code> - The ID of the network interface.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the network interface owner.</p></li>
        /// <li><p><code>private-ip-address</code> - The private IPv4 address or addresses of the network interface.</p></li>
        /// <li><p><code>private-dns-name</code> - The private DNS name of the network interface (IPv4).</p></li>
        /// <li><p><code>requester-id</code> - The ID of the entity that launched the instance on your behalf (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
        /// <li><p><code>requester-managed</code> - Indicates whether the network interface is being managed by an AWS service (for example, AWS Management Console, Auto Scaling, and so on).</p></li>
        /// <li><p><code>source-dest-check</code> - Indicates whether the network interface performs source/destination checking. A value of <code>true</code> means checking is enabled, and <code>false</code> means checking is disabled. The value must be <code>false</code> for the network interface to perform network address translation (NAT) in your VPC.</p></li>
        /// <li><p><code>status</code> - The status of the network interface. If the network interface is not attached to an instance, the status is <code>available</code>; if a network interface is attached to an instance the status is <code>in-use</code>.</p></li>
        /// <li><p><code>subnet-id</code> - The ID of the subnet for the network interface.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>vpc-id</code> - The ID of the VPC for the network interface.</p></li></ul>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// Appends an item to `network_interface_ids`.
        ///
        /// To override the contents of this collection use [`set_network_interface_ids`](Self::set_network_interface_ids).
        ///
        /// <p>One or more network interface IDs.</p>
        /// <p>Default: Describes all your network interfaces.</p>
        pub fn network_interface_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.network_interface_ids.unwrap_or_default();
            v.push(input.into());
            self.network_interface_ids = Some(v);
            self
        }
        /// <p>One or more network interface IDs.</p>
        /// <p>Default: Describes all your network interfaces.</p>
        pub fn set_network_interface_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.network_interface_ids = input;
            self
        }

        /// <p>The token to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The maximum number of items to return for this request. The request returns a token that you can specify in a subsequent call to get the next set of results. You cannot specify this parameter and the network interface IDs parameter in the same request.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of items to return for this request. The request returns a token that you can specify in a subsequent call to get the next set of results. You cannot specify this parameter and the network interface IDs parameter in the same request.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNetworkInterfacesInput`](crate::input::DescribeNetworkInterfacesInput)
        pub fn build(self) -> crate::input::DescribeNetworkInterfacesInput {
            crate::input::DescribeNetworkInterfacesInput {
                filters: self.filters,
                dry_run: self.dry_run,
                network_interface_ids: self.network_interface_ids,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl DescribeNetworkInterfacesInput {
    /// Creates a new builder-style object to manufacture [`DescribeNetworkInterfacesInput`](crate::input::DescribeNetworkInterfacesInput)
    pub fn builder() -> crate::input::describe_network_interfaces_input::Builder {
        crate::input::describe_network_interfaces_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeNetworkInterfacesInput {
    const NAME: &'static str = "DescribeNetworkInterfaces";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_network_interfaces(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeNetworkInterfacesInput {}

/// <p>Describes the Regions that are enabled for your account, or all Regions.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeRegionsInput {
    /// <p>One or more filters.</p>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>The names of the Regions. You can specify any Regions, whether they are enabled and disabled for your account.</p>
    pub region_names: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>Indicates whether to display all Regions, including Regions that are disabled for your account.</p>
    pub all_regions: std::option::Option<bool>,
}
impl DescribeRegionsInput {
    /// <p>One or more filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>The names of the Regions. You can specify any Regions, whether they are enabled and disabled for your account.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.region_names.is_none()`.
    pub fn region_names(&self) -> &[std::string::String] {
        self.region_names.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>Indicates whether to display all Regions, including Regions that are disabled for your account.</p>
    pub fn all_regions(&self) -> std::option::Option<bool> {
        self.all_regions
    }
}
impl std::fmt::Debug for DescribeRegionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("RegionNames", &self.region_names);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("AllRegions", &self.all_regions);
        formatter.finish()
    }
}
/// See [`DescribeRegionsInput`](crate::input::DescribeRegionsInput)
pub mod describe_regions_input {
    /// A builder for [`DescribeRegionsInput`](crate::input::DescribeRegionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) region_names: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) all_regions: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// Appends an item to `region_names`.
        ///
        /// To override the contents of this collection use [`set_region_names`](Self::set_region_names).
        ///
        /// <p>The names of the Regions. You can specify any Regions, whether they are enabled and disabled for your account.</p>
        pub fn region_names(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.region_names.unwrap_or_default();
            v.push(input.into());
            self.region_names = Some(v);
            self
        }
        /// <p>The names of the Regions. You can specify any Regions, whether they are enabled and disabled for your account.</p>
        pub fn set_region_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.region_names = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>Indicates whether to display all Regions, including Regions that are disabled for your account.</p>
        pub fn all_regions(mut self, input: bool) -> Self {
            self.all_regions = Some(input);
            self
        }
        /// <p>Indicates whether to display all Regions, including Regions that are disabled for your account.</p>
        pub fn set_all_regions(mut self, input: std::option::Option<bool>) -> Self {
            self.all_regions = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeRegionsInput`](crate::input::DescribeRegionsInput)
        pub fn build(self) -> crate::input::DescribeRegionsInput {
            crate::input::DescribeRegionsInput {
                filters: self.filters,
                region_names: self.region_names,
                dry_run: self.dry_run,
                all_regions: self.all_regions,
            }
        }
    }
}
impl DescribeRegionsInput {
    /// Creates a new builder-style object to manufacture [`DescribeRegionsInput`](crate::input::DescribeRegionsInput)
    pub fn builder() -> crate::input::describe_regions_input::Builder {
        crate::input::describe_regions_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeRegionsInput {
    const NAME: &'static str = "DescribeRegions";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_regions(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeRegionsInput {}

/// <p>Describes Reserved Instance offerings that are available for purchase.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeReservedInstancesOfferingsInput {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>One or more filters.</p>
    /// <ul>
    /// <li><p><code>availability-zone</code> - The Availability Zone where the Reserved Instance can be used.</p></li>
    /// <li><p><code>duration</code> - The duration of the Reserved Instance (for example, one year or three years), in seconds (<code>31536000</code> | <code>94608000</code>).</p></li>
    /// <li><p><code>fixed-price</code> - The purchase price of the Reserved Instance (for example, 9800.0).</p></li>
    /// <li><p><code>instance-type</code> - The instance type that is covered by the reservation.</p></li>
    /// <li><p><code>marketplace</code> - Set to <code>true</code> to show only Reserved Instance Marketplace offerings. When this filter is not used, which is the default behavior, all offerings from both AWS and the Reserved Instance Marketplace are listed.</p></li>
    /// <li><p><code>product-description</code> - The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the product platform description will only be displayed to EC2-Classic account holders and are for use with Amazon VPC. (<code>Linux/UNIX</code> | <code>Linux/UNIX (Amazon VPC)</code> | <code>SUSE Linux</code> | <code>SUSE Linux (Amazon VPC)</code> | <code>Red Hat Enterprise Linux</code> | <code>Red Hat Enterprise Linux (Amazon VPC)</code> | <code>Windows</code> | <code>Windows (Amazon VPC)</code> | <code>Windows with SQL Server Standard</code> | <code>Windows with SQL Server Standard (Amazon VPC)</code> | <code>Windows with SQL Server Web</code> | <code> Windows with SQL Server Web (Amazon VPC)</code> | <code>Windows with SQL Server Enterprise</code> | <code>Windows with SQL Server Enterprise (Amazon VPC)</code>)</p></li>
    /// <li><p><code>reserved-instances-offering-id</code> - The Reserved Instances offering ID.</p></li>
    /// <li><p><code>scope</code> - The scope of the Reserved Instance ( <code>Availability Zone</code> or <code>Region</code>).</p></li>
    /// <li><p><code>usage-price</code> - The usage price of the Reserved Instance, per hour (for example, 0.84).</p></li></ul>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>Include Reserved Instance Marketplace offerings in the response.</p>
    pub include_marketplace: std::option::Option<bool>,
    /// <p>The instance type that the reservation will cover (for example, <code>m1.small</code>). For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The maximum duration (in seconds) to filter when searching for offerings.</p>
    /// <p>Default: 94608000 (3 years)</p>
    pub max_duration: std::option::Option<i64>,
    /// <p>The maximum number of instances to filter when searching for offerings.</p>
    /// <p>Default: 20</p>
    pub max_instance_count: std::option::Option<i32>,
    /// <p>The minimum duration (in seconds) to filter when searching for offerings.</p>
    /// <p>Default: 2592000 (1 month)</p>
    pub min_duration: std::option::Option<i64>,
    /// <p>The offering class of the Reserved Instance. Can be <code>standard</code> or <code>convertible</code>.</p>
    pub offering_class: std::option::Option<crate::model::OfferingClassType>,
    /// <p>The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the description are for use with Amazon VPC.</p>
    pub product_description: std::option::Option<crate::model::RIProductDescription>,
    /// <p>One or more Reserved Instances offering IDs.</p>
    pub reserved_instances_offering_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The tenancy of the instances covered by the reservation. A Reserved Instance with a tenancy of <code>dedicated</code> is applied to instances that run in a VPC on single-tenant hardware (i.e., Dedicated Instances).</p>
    /// <p><b>Important:</b> The <code>host</code> value cannot be used with this parameter. Use the <code>default</code> or <code>dedicated</code> values only.</p>
    /// <p>Default: <code>default</code></p>
    pub instance_tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>The maximum number of results to return for the request in a single page. The remaining results of the initial request can be seen by sending another request with the returned <code>NextToken</code> value. The maximum is 100.</p>
    /// <p>Default: 100</p>
    pub max_results: std::option::Option<i32>,
    /// <p>The token to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The Reserved Instance offering type. If you are using tools that predate the 2011-11-01 API version, you only have access to the <code>Medium Utilization</code> Reserved Instance offering type.</p>
    pub offering_type: std::option::Option<crate::model::OfferingTypeValues>,
}
impl DescribeReservedInstancesOfferingsInput {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>One or more filters.</p>
    /// <ul>
    /// <li><p><code>availability-zone</code> - The Availability Zone where the Reserved Instance can be used.</p></li>
    /// <li><p><code>duration</code> - The duration of the Reserved Instance (for example, one year or three years), in seconds (<code>31536000</code> | <code>94608000</code>).</p></li>
    /// <li><p><code>fixed-price</code> - The purchase price of the Reserved Instance (for example, 9800.0).</p></li>
    /// <li><p><code>instance-type</code> - The instance type that is covered by the reservation.</p></li>
    /// <li><p><code>marketplace</code> - Set to <code>true</code> to show only Reserved Instance Marketplace offerings. When this filter is not used, which is the default behavior, all offerings from both AWS and the Reserved Instance Marketplace are listed.</p></li>
    /// <li><p><code>product-description</code> - The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the product platform description will only be displayed to EC2-Classic account holders and are for use with Amazon VPC. (<code>Linux/UNIX</code> | <code>Linux/UNIX (Amazon VPC)</code> | <code>SUSE Linux</code> | <code>SUSE Linux (Amazon VPC)</code> | <code>Red Hat Enterprise Linux</code> | <code>Red Hat Enterprise Linux (Amazon VPC)</code> | <code>Windows</code> | <code>Windows (Amazon VPC)</code> | <code>Windows with SQL Server Standard</code> | <code>Windows with SQL Server Standard (Amazon VPC)</code> | <code>Windows with SQL Server Web</code> | <code> Windows with SQL Server Web (Amazon VPC)</code> | <code>Windows with SQL Server Enterprise</code> | <code>Windows with SQL Server Enterprise (Amazon VPC)</code>)</p></li>
    /// <li><p><code>reserved-instances-offering-id</code> - The Reserved Instances offering ID.</p></li>
    /// <li><p><code>scope</code> - The scope of the Reserved Instance ( <code>Availability Zone</code> or <code>Region</code>).</p></li>
    /// <li><p><code>usage-price</code> - The usage price of the Reserved Instance, per hour (for example, 0.84).</p></li></ul>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>Include Reserved Instance Marketplace offerings in the response.</p>
    pub fn include_marketplace(&self) -> std::option::Option<bool> {
        self.include_marketplace
    }

    /// <p>The instance type that the reservation will cover (for example, <code>m1.small</code>). For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The maximum duration (in seconds) to filter when searching for offerings.</p>
    /// <p>Default: 94608000 (3 years)</p>
    pub fn max_duration(&self) -> std::option::Option<i64> {
        self.max_duration
    }

    /// <p>The maximum number of instances to filter when searching for offerings.</p>
    /// <p>Default: 20</p>
    pub fn max_instance_count(&self) -> std::option::Option<i32> {
        self.max_instance_count
    }

    /// <p>The minimum duration (in seconds) to filter when searching for offerings.</p>
    /// <p>Default: 2592000 (1 month)</p>
    pub fn min_duration(&self) -> std::option::Option<i64> {
        self.min_duration
    }

    /// <p>The offering class of the Reserved Instance. Can be <code>standard</code> or <code>convertible</code>.</p>
    pub fn offering_class(&self) -> std::option::Option<&crate::model::OfferingClassType> {
        self.offering_class.as_ref()
    }

    /// <p>The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the description are for use with Amazon VPC.</p>
    pub fn product_description(&self) -> std::option::Option<&crate::model::RIProductDescription> {
        self.product_description.as_ref()
    }

    /// <p>One or more Reserved Instances offering IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.reserved_instances_offering_ids.is_none()`.
    pub fn reserved_instances_offering_ids(&self) -> &[std::string::String] {
        self.reserved_instances_offering_ids.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The tenancy of the instances covered by the reservation. A Reserved Instance with a tenancy of <code>dedicated</code> is applied to instances that run in a VPC on single-tenant hardware (i.e., Dedicated Instances).</p>
    /// <p><b>Important:</b> The <code>host</code> value cannot be used with this parameter. Use the <code>default</code> or <code>dedicated</code> values only.</p>
    /// <p>Default: <code>default</code></p>
    pub fn instance_tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// <p>The maximum number of results to return for the request in a single page. The remaining results of the initial request can be seen by sending another request with the returned <code>NextToken</code> value. The maximum is 100.</p>
    /// <p>Default: 100</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    /// <p>The token to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The Reserved Instance offering type. If you are using tools that predate the 2011-11-01 API version, you only have access to the <code>Medium Utilization</code> Reserved Instance offering type.</p>
    pub fn offering_type(&self) -> std::option::Option<&crate::model::OfferingTypeValues> {
        self.offering_type.as_ref()
    }
}
impl std::fmt::Debug for DescribeReservedInstancesOfferingsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Filters", &self.filters);
        formatter.field("IncludeMarketplace", &self.include_marketplace);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("MaxDuration", &self.max_duration);
        formatter.field("MaxInstanceCount", &self.max_instance_count);
        formatter.field("MinDuration", &self.min_duration);
        formatter.enum_field("OfferingClass", &self.offering_class);
        formatter.enum_field("ProductDescription", &self.product_description);
        formatter.field("ReservedInstancesOfferingIds", &self.reserved_instances_offering_ids);
        formatter.field("DryRun", &self.dry_run);
        formatter.enum_field("InstanceTenancy", &self.instance_tenancy);
        formatter.field("MaxResults", &self.max_results);
        formatter.field("NextToken", &self.next_token);
        formatter.enum_field("OfferingType", &self.offering_type);
        formatter.finish()
    }
}
/// See [`DescribeReservedInstancesOfferingsInput`](crate::input::DescribeReservedInstancesOfferingsInput)
pub mod describe_reserved_instances_offerings_input {
    /// A builder for [`DescribeReservedInstancesOfferingsInput`](crate::input::DescribeReservedInstancesOfferingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) include_marketplace: std::option::Option<bool>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) max_duration: std::option::Option<i64>,
        pub(crate) max_instance_count: std::option::Option<i32>,
        pub(crate) min_duration: std::option::Option<i64>,
        pub(crate) offering_class: std::option::Option<crate::model::OfferingClassType>,
        pub(crate) product_description: std::option::Option<crate::model::RIProductDescription>,
        pub(crate) reserved_instances_offering_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) instance_tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) offering_type: std::option::Option<crate::model::OfferingTypeValues>,
    }
    impl Builder {
        /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        /// <ul>
        /// <li><p><code>availability-zone</code> - The Availability Zone where the Reserved Instance can be used.</p></li>
        /// <li><p><code>duration</code> - The duration of the Reserved Instance (for example, one year or three years), in seconds (<code>31536000</code> | <code>94608000</code>).</p></li>
        /// <li><p><code>fixed-price</code> - The purchase price of the Reserved Instance (for example, 9800.0).</p></li>
        /// <li><p><code>instance-type</code> - The instance type that is covered by the reservation.</p></li>
        /// <li><p><code>marketplace</code> - Set to <code>true</code> to show only Reserved Instance Marketplace offerings. When this filter is not used, which is the default behavior, all offerings from both AWS and the Reserved Instance Marketplace are listed.</p></li>
        /// <li><p><code>product-description</code> - The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the product platform description will only be displayed to EC2-Classic account holders and are for use with Amazon VPC. (<code>Linux/UNIX</code> | <code>Linux/UNIX (Amazon VPC)</code> | <code>SUSE Linux</code> | <code>SUSE Linux (Amazon VPC)</code> | <code>Red Hat Enterprise Linux</code> | <code>Red Hat Enterprise Linux (Amazon VPC)</code> | <code>Windows</code> | <code>Windows (Amazon VPC)</code> | <code>Windows with SQL Server Standard</code> | <code>Windows with SQL Server Standard (Amazon VPC)</code> | <code>Windows with SQL Server Web</code> | <code> Windows with SQL Server Web (Amazon VPC)</code> | <code>Windows with SQL Server Enterprise</code> | <code>Windows with SQL Server Enterprise (Amazon VPC)</code>)</p></li>
        /// <li><p><code>reserved-instances-offering-id</code> - The Reserved Instances offering ID.</p></li>
        /// <li><p><code>scope</code> - The scope of the Reserved Instance ( <code>Availability Zone</code> or <code>Region</code>).</p></li>
        /// <li><p><code>usage-price</code> - The usage price of the Reserved Instance, per hour (for example, 0.84).</p></li></ul>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        /// <ul>
        /// <li><p><code>availability-zone</code> - The Availability Zone where the Reserved Instance can be used.</p></li>
        /// <li><p><code>duration</code> - The duration of the Reserved Instance (for example, one year or three years), in seconds (<code>31536000</code> | <code>94608000</code>).</p></li>
        /// <li><p><code>fixed-price</code> - The purchase price of the Reserved Instance (for example, 9800.0).</p></li>
        /// <li><p><code>instance-type</code> - The instance type that is covered by the reservation.</p></li>
        /// <li><p><code>marketplace</code> - Set to <code>true</code> to show only Reserved Instance Marketplace offerings. When this filter is not used, which is the default behavior, all offerings from both AWS and the Reserved Instance Marketplace are listed.</p></li>
        /// <li><p><code>product-description</code> - The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the product platform description will only be displayed to EC2-Classic account holders and are for use with Amazon VPC. (<code>Linux/UNIX</code> | <code>Linux/UNIX (Amazon VPC)</code> | <code>SUSE Linux</code> | <code>SUSE Linux (Amazon VPC)</code> | <code>Red Hat Enterprise Linux</code> | <code>Red Hat Enterprise Linux (Amazon VPC)</code> | <code>Windows</code> | <code>Windows (Amazon VPC)</code> | <code>Windows with SQL Server Standard</code> | <code>Windows with SQL Server Standard (Amazon VPC)</code> | <code>Windows with SQL Server Web</code> | <code> Windows with SQL Server Web (Amazon VPC)</code> | <code>Windows with SQL Server Enterprise</code> | <code>Windows with SQL Server Enterprise (Amazon VPC)</code>)</p></li>
        /// <li><p><code>reserved-instances-offering-id</code> - The Reserved Instances offering ID.</p></li>
        /// <li><p><code>scope</code> - The scope of the Reserved Instance ( <code>Availability Zone</code> or <code>Region</code>).</p></li>
        /// <li><p><code>usage-price</code> - The usage price of the Reserved Instance, per hour (for example, 0.84).</p></li></ul>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>Include Reserved Instance Marketplace offerings in the response.</p>
        pub fn include_marketplace(mut self, input: bool) -> Self {
            self.include_marketplace = Some(input);
            self
        }
        /// <p>Include Reserved Instance Marketplace offerings in the response.</p>
        pub fn set_include_marketplace(mut self, input: std::option::Option<bool>) -> Self {
            self.include_marketplace = input;
            self
        }

        /// <p>The instance type that the reservation will cover (for example, <code>m1.small</code>). For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type that the reservation will cover (for example, <code>m1.small</code>). For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The maximum duration (in seconds) to filter when searching for offerings.</p>
        /// <p>Default: 94608000 (3 years)</p>
        pub fn max_duration(mut self, input: i64) -> Self {
            self.max_duration = Some(input);
            self
        }
        /// <p>The maximum duration (in seconds) to filter when searching for offerings.</p>
        /// <p>Default: 94608000 (3 years)</p>
        pub fn set_max_duration(mut self, input: std::option::Option<i64>) -> Self {
            self.max_duration = input;
            self
        }

        /// <p>The maximum number of instances to filter when searching for offerings.</p>
        /// <p>Default: 20</p>
        pub fn max_instance_count(mut self, input: i32) -> Self {
            self.max_instance_count = Some(input);
            self
        }
        /// <p>The maximum number of instances to filter when searching for offerings.</p>
        /// <p>Default: 20</p>
        pub fn set_max_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.max_instance_count = input;
            self
        }

        /// <p>The minimum duration (in seconds) to filter when searching for offerings.</p>
        /// <p>Default: 2592000 (1 month)</p>
        pub fn min_duration(mut self, input: i64) -> Self {
            self.min_duration = Some(input);
            self
        }
        /// <p>The minimum duration (in seconds) to filter when searching for offerings.</p>
        /// <p>Default: 2592000 (1 month)</p>
        pub fn set_min_duration(mut self, input: std::option::Option<i64>) -> Self {
            self.min_duration = input;
            self
        }

        /// <p>The offering class of the Reserved Instance. Can be <code>standard</code> or <code>convertible</code>.</p>
        pub fn offering_class(mut self, input: crate::model::OfferingClassType) -> Self {
            self.offering_class = Some(input);
            self
        }
        /// <p>The offering class of the Reserved Instance. Can be <code>standard</code> or <code>convertible</code>.</p>
        pub fn set_offering_class(mut self, input: std::option::Option<crate::model::OfferingClassType>) -> Self {
            self.offering_class = input;
            self
        }

        /// <p>The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the description are for use with Amazon VPC.</p>
        pub fn product_description(mut self, input: crate::model::RIProductDescription) -> Self {
            self.product_description = Some(input);
            self
        }
        /// <p>The Reserved Instance product platform description. Instances that include <code>(Amazon VPC)</code> in the description are for use with Amazon VPC.</p>
        pub fn set_product_description(mut self, input: std::option::Option<crate::model::RIProductDescription>) -> Self {
            self.product_description = input;
            self
        }

        /// Appends an item to `reserved_instances_offering_ids`.
        ///
        /// To override the contents of this collection use [`set_reserved_instances_offering_ids`](Self::set_reserved_instances_offering_ids).
        ///
        /// <p>One or more Reserved Instances offering IDs.</p>
        pub fn reserved_instances_offering_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.reserved_instances_offering_ids.unwrap_or_default();
            v.push(input.into());
            self.reserved_instances_offering_ids = Some(v);
            self
        }
        /// <p>One or more Reserved Instances offering IDs.</p>
        pub fn set_reserved_instances_offering_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.reserved_instances_offering_ids = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>The tenancy of the instances covered by the reservation. A Reserved Instance with a tenancy of <code>dedicated</code> is applied to instances that run in a VPC on single-tenant hardware (i.e., Dedicated Instances).</p>
        /// <p><b>Important:</b> The <code>host</code> value cannot be used with this parameter. Use the <code>default</code> or <code>dedicated</code> values only.</p>
        /// <p>Default: <code>default</code></p>
        pub fn instance_tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.instance_tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instances covered by the reservation. A Reserved Instance with a tenancy of <code>dedicated</code> is applied to instances that run in a VPC on single-tenant hardware (i.e., Dedicated Instances).</p>
        /// <p><b>Important:</b> The <code>host</code> value cannot be used with this parameter. Use the <code>default</code> or <code>dedicated</code> values only.</p>
        /// <p>Default: <code>default</code></p>
        pub fn set_instance_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.instance_tenancy = input;
            self
        }

        /// <p>The maximum number of results to return for the request in a single page. The remaining results of the initial request can be seen by sending another request with the returned <code>NextToken</code> value. The maximum is 100.</p>
        /// <p>Default: 100</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return for the request in a single page. The remaining results of the initial request can be seen by sending another request with the returned <code>NextToken</code> value. The maximum is 100.</p>
        /// <p>Default: 100</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }

        /// <p>The token to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The Reserved Instance offering type. If you are using tools that predate the 2011-11-01 API version, you only have access to the <code>Medium Utilization</code> Reserved Instance offering type.</p>
        pub fn offering_type(mut self, input: crate::model::OfferingTypeValues) -> Self {
            self.offering_type = Some(input);
            self
        }
        /// <p>The Reserved Instance offering type. If you are using tools that predate the 2011-11-01 API version, you only have access to the <code>Medium Utilization</code> Reserved Instance offering type.</p>
        pub fn set_offering_type(mut self, input: std::option::Option<crate::model::OfferingTypeValues>) -> Self {
            self.offering_type = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeReservedInstancesOfferingsInput`](crate::input::DescribeReservedInstancesOfferingsInput)
        pub fn build(self) -> crate::input::DescribeReservedInstancesOfferingsInput {
            crate::input::DescribeReservedInstancesOfferingsInput {
                availability_zone: self.availability_zone,
                filters: self.filters,
                include_marketplace: self.include_marketplace,
                instance_type: self.instance_type,
                max_duration: self.max_duration,
                max_instance_count: self.max_instance_count,
                min_duration: self.min_duration,
                offering_class: self.offering_class,
                product_description: self.product_description,
                reserved_instances_offering_ids: self.reserved_instances_offering_ids,
                dry_run: self.dry_run,
                instance_tenancy: self.instance_tenancy,
                max_results: self.max_results,
                next_token: self.next_token,
                offering_type: self.offering_type,
            }
        }
    }
}
impl DescribeReservedInstancesOfferingsInput {
    /// Creates a new builder-style object to manufacture [`DescribeReservedInstancesOfferingsInput`](crate::input::DescribeReservedInstancesOfferingsInput)
    pub fn builder() -> crate::input::describe_reserved_instances_offerings_input::Builder {
        crate::input::describe_reserved_instances_offerings_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeReservedInstancesOfferingsInput {
    const NAME: &'static str = "DescribeReservedInstancesOfferings";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_reserved_instances_offerings(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeReservedInstancesOfferingsInput {}

/// <p>Describes one or more of your route tables.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeRouteTablesInput {
    /// <p>One or more filters.</p>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>One or more route table IDs.</p>
    pub route_table_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub max_results: std::option::Option<i32>,
}
impl DescribeRouteTablesInput {
    /// <p>One or more filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>One or more route table IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.route_table_ids.is_none()`.
    pub fn route_table_ids(&self) -> &[std::string::String] {
        self.route_table_ids.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Debug for DescribeRouteTablesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("RouteTableIds", &self.route_table_ids);
        formatter.field("NextToken", &self.next_token);
        formatter.field("MaxResults", &self.max_results);
        formatter.finish()
    }
}
/// See [`DescribeRouteTablesInput`](crate::input::DescribeRouteTablesInput)
pub mod describe_route_tables_input {
    /// A builder for [`DescribeRouteTablesInput`](crate::input::DescribeRouteTablesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) route_table_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// Appends an item to `route_table_ids`.
        ///
        /// To override the contents of this collection use [`set_route_table_ids`](Self::set_route_table_ids).
        ///
        /// <p>One or more route table IDs.</p>
        pub fn route_table_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.route_table_ids.unwrap_or_default();
            v.push(input.into());
            self.route_table_ids = Some(v);
            self
        }
        /// <p>One or more route table IDs.</p>
        pub fn set_route_table_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.route_table_ids = input;
            self
        }

        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeRouteTablesInput`](crate::input::DescribeRouteTablesInput)
        pub fn build(self) -> crate::input::DescribeRouteTablesInput {
            crate::input::DescribeRouteTablesInput {
                filters: self.filters,
                dry_run: self.dry_run,
                route_table_ids: self.route_table_ids,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl DescribeRouteTablesInput {
    /// Creates a new builder-style object to manufacture [`DescribeRouteTablesInput`](crate::input::DescribeRouteTablesInput)
    pub fn builder() -> crate::input::describe_route_tables_input::Builder {
        crate::input::describe_route_tables_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeRouteTablesInput {
    const NAME: &'static str = "DescribeRouteTables";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_route_tables(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeRouteTablesInput {}

/// <p>Describes the specified security groups or all of your security groups.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeSecurityGroupsInput {
    /// <p>The filters. If using multiple filters for rules, the results include security groups for which any combination of rules - not necessarily a single rule - match all filters.</p>
    /// <ul>
    /// <li><p><code>description</code> - The description of the security group.</p></li>
    /// <li><p><code>egress.ip-permission.cidr</code> - An IPv4 CIDR block for an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.from-port</code> - For an outbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
    /// <li><p><code>egress.ip-permission.group-id</code> - The ID of a security group that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.group-name</code> - The name of a security group that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service to which a security group rule allows outbound access.</p></li>
    /// <li><p><code>egress.ip-permission.protocol</code> - The IP protocol for an outbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
    /// <li><p><code>egress.ip-permission.to-port</code> - For an outbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
    /// <li><p><code>egress.ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>group-id</code> - The ID of the security group.</p></li>
    /// <li><p><code>group-name</code> - The name of the security group.</p></li>
    /// <li><p><code>ip-permission.cidr</code> - An IPv4 CIDR block for an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.from-port</code> - For an inbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
    /// <li><p><code>ip-permission.group-id</code> - The ID of a security group that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.group-name</code> - The name of a security group that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service from which a security group rule allows inbound access.</p></li>
    /// <li><p><code>ip-permission.protocol</code> - The IP protocol for an inbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
    /// <li><p><code>ip-permission.to-port</code> - For an inbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
    /// <li><p><code>ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the owner of the security group.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>vpc-id</code> - The ID of the VPC specified when the security group was created.</p></li></ul>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>The IDs of the security groups. Required for security groups in a nondefault VPC.</p>
    /// <p>Default: Describes all your security groups.</p>
    pub group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>[EC2-Classic and default VPC only] The names of the security groups. You can specify either the security group name or the security group ID. For security groups in a nondefault VPC, use the <code>group-name</code> filter to describe security groups by name.</p>
    /// <p>Default: Describes all your security groups.</p>
    pub group_names: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>The token to request the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another request with the returned <code>NextToken</code> value. This value can be between 5 and 1000. If this parameter is not specified, then all results are returned.</p>
    pub max_results: std::option::Option<i32>,
}
impl DescribeSecurityGroupsInput {
    /// <p>The filters. If using multiple filters for rules, the results include security groups for which any combination of rules - not necessarily a single rule - match all filters.</p>
    /// <ul>
    /// <li><p><code>description</code> - The description of the security group.</p></li>
    /// <li><p><code>egress.ip-permission.cidr</code> - An IPv4 CIDR block for an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.from-port</code> - For an outbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
    /// <li><p><code>egress.ip-permission.group-id</code> - The ID of a security group that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.group-name</code> - The name of a security group that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an outbound security group rule.</p></li>
    /// <li><p><code>egress.ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service to which a security group rule allows outbound access.</p></li>
    /// <li><p><code>egress.ip-permission.protocol</code> - The IP protocol for an outbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
    /// <li><p><code>egress.ip-permission.to-port</code> - For an outbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
    /// <li><p><code>egress.ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an outbound security group rule.</p></li>
    /// <li><p><code>group-id</code> - The ID of the security group.</p></li>
    /// <li><p><code>group-name</code> - The name of the security group.</p></li>
    /// <li><p><code>ip-permission.cidr</code> - An IPv4 CIDR block for an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.from-port</code> - For an inbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
    /// <li><p><code>ip-permission.group-id</code> - The ID of a security group that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.group-name</code> - The name of a security group that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an inbound security group rule.</p></li>
    /// <li><p><code>ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service from which a security group rule allows inbound access.</p></li>
    /// <li><p><code>ip-permission.protocol</code> - The IP protocol for an inbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
    /// <li><p><code>ip-permission.to-port</code> - For an inbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
    /// <li><p><code>ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an inbound security group rule.</p></li>
    /// <li><p><code>owner-id</code> - The AWS account ID of the owner of the security group.</p></li>
    /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
    /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
    /// <li><p><code>vpc-id</code> - The ID of the VPC specified when the security group was created.</p></li></ul>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>The IDs of the security groups. Required for security groups in a nondefault VPC.</p>
    /// <p>Default: Describes all your security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.group_ids.is_none()`.
    pub fn group_ids(&self) -> &[std::string::String] {
        self.group_ids.as_deref().unwrap_or_default()
    }

    /// <p>[EC2-Classic and default VPC only] The names of the security groups. You can specify either the security group name or the security group ID. For security groups in a nondefault VPC, use the <code>group-name</code> filter to describe security groups by name.</p>
    /// <p>Default: Describes all your security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.group_names.is_none()`.
    pub fn group_names(&self) -> &[std::string::String] {
        self.group_names.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>The token to request the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another request with the returned <code>NextToken</code> value. This value can be between 5 and 1000. If this parameter is not specified, then all results are returned.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Debug for DescribeSecurityGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("GroupIds", &self.group_ids);
        formatter.field("GroupNames", &self.group_names);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("NextToken", &self.next_token);
        formatter.field("MaxResults", &self.max_results);
        formatter.finish()
    }
}
/// See [`DescribeSecurityGroupsInput`](crate::input::DescribeSecurityGroupsInput)
pub mod describe_security_groups_input {
    /// A builder for [`DescribeSecurityGroupsInput`](crate::input::DescribeSecurityGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) group_names: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>The filters. If using multiple filters for rules, the results include security groups for which any combination of rules - not necessarily a single rule - match all filters.</p>
        /// <ul>
        /// <li><p><code>description</code> - The description of the security group.</p></li>
        /// <li><p><code>egress.ip-permission.cidr</code> - An IPv4 CIDR block for an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.from-port</code> - For an outbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
        /// <li><p><code>egress.ip-permission.group-id</code> - The ID of a security group that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.group-name</code> - The name of a security group that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service to which a security group rule allows outbound access.</p></li>
        /// <li><p><code>egress.ip-permission.protocol</code> - The IP protocol for an outbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
        /// <li><p><code>egress.ip-permission.to-port</code> - For an outbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
        /// <li><p><code>egress.ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>group-id</code> - The ID of the security group.</p></li>
        /// <li><p><code>group-name</code> - The name of the security group.</p></li>
        /// <li><p><code>ip-permission.cidr</code> - An IPv4 CIDR block for an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.from-port</code> - For an inbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
        /// <li><p><code>ip-permission.group-id</code> - The ID of a security group that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.group-name</code> - The name of a security group that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service from which a security group rule allows inbound access.</p></li>
        /// <li><p><code>ip-permission.protocol</code> - The IP protocol for an inbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
        /// <li><p><code>ip-permission.to-port</code> - For an inbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
        /// <li><p><code>ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the owner of the security group.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>vpc-id</code> - The ID of the VPC specified when the security group was created.</p></li></ul>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>The filters. If using multiple filters for rules, the results include security groups for which any combination of rules - not necessarily a single rule - match all filters.</p>
        /// <ul>
        /// <li><p><code>description</code> - The description of the security group.</p></li>
        /// <li><p><code>egress.ip-permission.cidr</code> - An IPv4 CIDR block for an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.from-port</code> - For an outbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
        /// <li><p><code>egress.ip-permission.group-id</code> - The ID of a security group that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.group-name</code> - The name of a security group that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an outbound security group rule.</p></li>
        /// <li><p><code>egress.ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service to which a security group rule allows outbound access.</p></li>
        /// <li><p><code>egress.ip-permission.protocol</code> - The IP protocol for an outbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
        /// <li><p><code>egress.ip-permission.to-port</code> - For an outbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
        /// <li><p><code>egress.ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an outbound security group rule.</p></li>
        /// <li><p><code>group-id</code> - The ID of the security group.</p></li>
        /// <li><p><code>group-name</code> - The name of the security group.</p></li>
        /// <li><p><code>ip-permission.cidr</code> - An IPv4 CIDR block for an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.from-port</code> - For an inbound rule, the start of port range for the TCP and UDP protocols, or an ICMP type number.</p></li>
        /// <li><p><code>ip-permission.group-id</code> - The ID of a security group that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.group-name</code> - The name of a security group that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.ipv6-cidr</code> - An IPv6 CIDR block for an inbound security group rule.</p></li>
        /// <li><p><code>ip-permission.prefix-list-id</code> - The ID (prefix) of the AWS service from which a security group rule allows inbound access.</p></li>
        /// <li><p><code>ip-permission.protocol</code> - The IP protocol for an inbound security group rule (<code>tcp</code> | <code>udp</code> | <code>icmp</code> or a protocol number).</p></li>
        /// <li><p><code>ip-permission.to-port</code> - For an inbound rule, the end of port range for the TCP and UDP protocols, or an ICMP code.</p></li>
        /// <li><p><code>ip-permission.user-id</code> - The ID of an AWS account that has been referenced in an inbound security group rule.</p></li>
        /// <li><p><code>owner-id</code> - The AWS account ID of the owner of the security group.</p></li>
        /// <li><p><code>tag</code>:&lt;key&gt; - The key/value combination of a tag assigned to the resource. Use the tag key in the filter name and the tag value as the filter value. For example, to find all resources that have a tag with the key <code>Owner</code> and the value <code>TeamA</code>, specify <code>tag:Owner</code> for the filter name and <code>TeamA</code> for the filter value.</p></li>
        /// <li><p><code>tag-key</code> - The key of a tag assigned to the resource. Use this filter to find all resources assigned a tag with a specific key, regardless of the tag value.</p></li>
        /// <li><p><code>vpc-id</code> - The ID of the VPC specified when the security group was created.</p></li></ul>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// Appends an item to `group_ids`.
        ///
        /// To override the contents of this collection use [`set_group_ids`](Self::set_group_ids).
        ///
        /// <p>The IDs of the security groups. Required for security groups in a nondefault VPC.</p>
        /// <p>Default: Describes all your security groups.</p>
        pub fn group_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.group_ids.unwrap_or_default();
            v.push(input.into());
            self.group_ids = Some(v);
            self
        }
        /// <p>The IDs of the security groups. Required for security groups in a nondefault VPC.</p>
        /// <p>Default: Describes all your security groups.</p>
        pub fn set_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.group_ids = input;
            self
        }

        /// Appends an item to `group_names`.
        ///
        /// To override the contents of this collection use [`set_group_names`](Self::set_group_names).
        ///
        /// <p>[EC2-Classic and default VPC only] The names of the security groups. You can specify either the security group name or the security group ID. For security groups in a nondefault VPC, use the <code>group-name</code> filter to describe security groups by name.</p>
        /// <p>Default: Describes all your security groups.</p>
        pub fn group_names(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.group_names.unwrap_or_default();
            v.push(input.into());
            self.group_names = Some(v);
            self
        }
        /// <p>[EC2-Classic and default VPC only] The names of the security groups. You can specify either the security group name or the security group ID. For security groups in a nondefault VPC, use the <code>group-name</code> filter to describe security groups by name.</p>
        /// <p>Default: Describes all your security groups.</p>
        pub fn set_group_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.group_names = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>The token to request the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to request the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another request with the returned <code>NextToken</code> value. This value can be between 5 and 1000. If this parameter is not specified, then all results are returned.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another request with the returned <code>NextToken</code> value. This value can be between 5 and 1000. If this parameter is not specified, then all results are returned.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeSecurityGroupsInput`](crate::input::DescribeSecurityGroupsInput)
        pub fn build(self) -> crate::input::DescribeSecurityGroupsInput {
            crate::input::DescribeSecurityGroupsInput {
                filters: self.filters,
                group_ids: self.group_ids,
                group_names: self.group_names,
                dry_run: self.dry_run,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl DescribeSecurityGroupsInput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityGroupsInput`](crate::input::DescribeSecurityGroupsInput)
    pub fn builder() -> crate::input::describe_security_groups_input::Builder {
        crate::input::describe_security_groups_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeSecurityGroupsInput {
    const NAME: &'static str = "DescribeSecurityGroups";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_security_groups(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeSecurityGroupsInput {}

/// <p>Describes the specified Spot Instance requests.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeSpotInstanceRequestsInput {
    /// <p>One or more filters.</p>
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>One or more Spot Instance request IDs.</p>
    pub spot_instance_request_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub max_results: std::option::Option<i32>,
}
impl DescribeSpotInstanceRequestsInput {
    /// <p>One or more filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.filters.is_none()`.
    pub fn filters(&self) -> &[crate::model::Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>One or more Spot Instance request IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.spot_instance_request_ids.is_none()`.
    pub fn spot_instance_request_ids(&self) -> &[std::string::String] {
        self.spot_instance_request_ids.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Debug for DescribeSpotInstanceRequestsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Filters", &self.filters);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("SpotInstanceRequestIds", &self.spot_instance_request_ids);
        formatter.field("NextToken", &self.next_token);
        formatter.field("MaxResults", &self.max_results);
        formatter.finish()
    }
}
/// See [`DescribeSpotInstanceRequestsInput`](crate::input::DescribeSpotInstanceRequestsInput)
pub mod describe_spot_instance_requests_input {
    /// A builder for [`DescribeSpotInstanceRequestsInput`](crate::input::DescribeSpotInstanceRequestsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) spot_instance_request_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>One or more filters.</p>
        pub fn filters(mut self, input: impl std::convert::Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input.into());
            self.filters = Some(v);
            self
        }
        /// <p>One or more filters.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// Appends an item to `spot_instance_request_ids`.
        ///
        /// To override the contents of this collection use [`set_spot_instance_request_ids`](Self::set_spot_instance_request_ids).
        ///
        /// <p>One or more Spot Instance request IDs.</p>
        pub fn spot_instance_request_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.spot_instance_request_ids.unwrap_or_default();
            v.push(input.into());
            self.spot_instance_request_ids = Some(v);
            self
        }
        /// <p>One or more Spot Instance request IDs.</p>
        pub fn set_spot_instance_request_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.spot_instance_request_ids = input;
            self
        }

        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to retrieve the next page of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }

        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results to return in a single call. To retrieve the remaining results, make another call with the returned <code>NextToken</code> value.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeSpotInstanceRequestsInput`](crate::input::DescribeSpotInstanceRequestsInput)
        pub fn build(self) -> crate::input::DescribeSpotInstanceRequestsInput {
            crate::input::DescribeSpotInstanceRequestsInput {
                filters: self.filters,
                dry_run: self.dry_run,
                spot_instance_request_ids: self.spot_instance_request_ids,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl DescribeSpotInstanceRequestsInput {
    /// Creates a new builder-style object to manufacture [`DescribeSpotInstanceRequestsInput`](crate::input::DescribeSpotInstanceRequestsInput)
    pub fn builder() -> crate::input::describe_spot_instance_requests_input::Builder {
        crate::input::describe_spot_instance_requests_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for DescribeSpotInstanceRequestsInput {
    const NAME: &'static str = "DescribeSpotInstanceRequests";

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_describe_spot_instance_requests(self)
    }
}
impl crate::operation::DryRunSupportedRequest for DescribeSpotInstanceRequestsInput {}

/// <p>Launches the specified number of instances using an AMI for which you have permissions. </p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RunInstancesInput {
    /// <p>One or more block device mapping entries.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
    /// <p>The ID of the AMI.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
    pub ipv6_address_count: std::option::Option<i32>,
    /// <p>The IPv6 addresses associated with the network interface.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
    /// <p>The kernel associated with this instance, if applicable.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>The name of the key pair.</p>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>The maximum number of instances to launch. If you specify more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches the largest possible number of instances above <code>MinCount</code>.</p>
    pub max_count: std::option::Option<i32>,
    /// <p>The minimum number of instances to launch. If you specify a minimum that is more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches no instances.</p>
    pub min_count: std::option::Option<i32>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::RunInstancesMonitoringEnabled>,
    /// <p>The location where the instance launched, if applicable.</p>
    pub placement: std::option::Option<crate::model::Placement>,
    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub ramdisk_id: std::option::Option<std::string::String>,
    /// <p>The IDs of the security groups.</p>
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>One or more security groups.</p>
    pub security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The user data to make available to the instance. User data must be base64-encoded before it is sent.</p>
    pub user_data: std::option::Option<std::string::String>,
    /// <p>Reserved.</p>
    pub additional_info: std::option::Option<std::string::String>,
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request. If you do not specify a client token, a randomly generated token is used for the request to ensure idempotency.</p>
    /// <p>Constraints: Maximum 64 ASCII characters</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can.</p>
    pub disable_api_termination: std::option::Option<bool>,
    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub dry_run: std::option::Option<bool>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    pub instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
    /// <p>The network interfaces.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
    /// <p>The private IPv4 address.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>An elastic GPU to associate with the instance.</p>
    pub elastic_gpu_specification: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>,
    /// <p>An elastic inference accelerator to associate with the instance.</p>
    pub elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>,
    /// <p>The tags to apply to the resources during launch.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    /// <p>The launch template to use to launch the instances. Any parameters that you specify in <code>RunInstances</code> override the same parameters in the launch template. You can specify either the name or ID of a launch template, but not both.</p>
    pub launch_template: std::option::Option<crate::model::LaunchTemplateSpecification>,
    /// <p>The market (purchasing) option for the instances.</p>
    pub instance_market_options: std::option::Option<crate::model::InstanceMarketOptionsRequest>,
    /// <p>The credit option for CPU usage of the burstable performance instance.</p>
    pub credit_specification: std::option::Option<crate::model::CreditSpecificationRequest>,
    /// <p>The CPU options for the instance.</p>
    pub cpu_options: std::option::Option<crate::model::CpuOptionsRequest>,
    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub capacity_reservation_specification: std::option::Option<crate::model::CapacityReservationSpecification>,
    /// <p>Indicates whether the instance is enabled for hibernation.</p>
    pub hibernation_options: std::option::Option<crate::model::HibernationOptionsRequest>,
    /// <p>The license configurations.</p>
    pub license_specifications: std::option::Option<std::vec::Vec<crate::model::LicenseConfigurationRequest>>,
    /// <p>The metadata options for the instance.</p>
    pub metadata_options: std::option::Option<crate::model::InstanceMetadataOptionsRequest>,
}
impl RunInstancesInput {
    /// <p>One or more block device mapping entries.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::BlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the AMI.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
    pub fn ipv6_address_count(&self) -> std::option::Option<i32> {
        self.ipv6_address_count
    }

    /// <p>The IPv6 addresses associated with the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::InstanceIpv6Address] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The kernel associated with this instance, if applicable.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>The name of the key pair.</p>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>The maximum number of instances to launch. If you specify more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches the largest possible number of instances above <code>MinCount</code>.</p>
    pub fn max_count(&self) -> std::option::Option<i32> {
        self.max_count
    }

    /// <p>The minimum number of instances to launch. If you specify a minimum that is more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches no instances.</p>
    pub fn min_count(&self) -> std::option::Option<i32> {
        self.min_count
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::RunInstancesMonitoringEnabled> {
        self.monitoring.as_ref()
    }

    /// <p>The location where the instance launched, if applicable.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::Placement> {
        self.placement.as_ref()
    }

    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub fn ramdisk_id(&self) -> std::option::Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// <p>The IDs of the security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_group_ids.is_none()`.
    pub fn security_group_ids(&self) -> &[std::string::String] {
        self.security_group_ids.as_deref().unwrap_or_default()
    }

    /// <p>One or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[std::string::String] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The user data to make available to the instance. User data must be base64-encoded before it is sent.</p>
    pub fn user_data(&self) -> std::option::Option<&str> {
        self.user_data.as_deref()
    }

    /// <p>Reserved.</p>
    pub fn additional_info(&self) -> std::option::Option<&str> {
        self.additional_info.as_deref()
    }

    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request. If you do not specify a client token, a randomly generated token is used for the request to ensure idempotency.</p>
    /// <p>Constraints: Maximum 64 ASCII characters</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can.</p>
    pub fn disable_api_termination(&self) -> std::option::Option<bool> {
        self.disable_api_termination
    }

    /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::IamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    pub fn instance_initiated_shutdown_behavior(&self) -> std::option::Option<&crate::model::ShutdownBehavior> {
        self.instance_initiated_shutdown_behavior.as_ref()
    }

    /// <p>The network interfaces.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::InstanceNetworkInterfaceSpecification] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The private IPv4 address.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>An elastic GPU to associate with the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_gpu_specification.is_none()`.
    pub fn elastic_gpu_specification(&self) -> &[crate::model::ElasticGpuSpecification] {
        self.elastic_gpu_specification.as_deref().unwrap_or_default()
    }

    /// <p>An elastic inference accelerator to associate with the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_inference_accelerators.is_none()`.
    pub fn elastic_inference_accelerators(&self) -> &[crate::model::ElasticInferenceAccelerator] {
        self.elastic_inference_accelerators.as_deref().unwrap_or_default()
    }

    /// <p>The tags to apply to the resources during launch.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The launch template to use to launch the instances. Any parameters that you specify in <code>RunInstances</code> override the same parameters in the launch template. You can specify either the name or ID of a launch template, but not both.</p>
    pub fn launch_template(&self) -> std::option::Option<&crate::model::LaunchTemplateSpecification> {
        self.launch_template.as_ref()
    }

    /// <p>The market (purchasing) option for the instances.</p>
    pub fn instance_market_options(&self) -> std::option::Option<&crate::model::InstanceMarketOptionsRequest> {
        self.instance_market_options.as_ref()
    }

    /// <p>The credit option for CPU usage of the burstable performance instance.</p>
    pub fn credit_specification(&self) -> std::option::Option<&crate::model::CreditSpecificationRequest> {
        self.credit_specification.as_ref()
    }

    /// <p>The CPU options for the instance.</p>
    pub fn cpu_options(&self) -> std::option::Option<&crate::model::CpuOptionsRequest> {
        self.cpu_options.as_ref()
    }

    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub fn capacity_reservation_specification(&self) -> std::option::Option<&crate::model::CapacityReservationSpecification> {
        self.capacity_reservation_specification.as_ref()
    }

    /// <p>Indicates whether the instance is enabled for hibernation.</p>
    pub fn hibernation_options(&self) -> std::option::Option<&crate::model::HibernationOptionsRequest> {
        self.hibernation_options.as_ref()
    }

    /// <p>The license configurations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.license_specifications.is_none()`.
    pub fn license_specifications(&self) -> &[crate::model::LicenseConfigurationRequest] {
        self.license_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The metadata options for the instance.</p>
    pub fn metadata_options(&self) -> std::option::Option<&crate::model::InstanceMetadataOptionsRequest> {
        self.metadata_options.as_ref()
    }
}
impl std::fmt::Debug for RunInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("ImageId", &self.image_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("Ipv6AddressCount", &self.ipv6_address_count);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("KeyName", &self.key_name);
        formatter.field("MaxCount", &self.max_count);
        formatter.field("MinCount", &self.min_count);
        formatter.field("Monitoring", &self.monitoring);
        formatter.field("Placement", &self.placement);
        formatter.field("RamdiskId", &self.ramdisk_id);
        formatter.field("SecurityGroupIds", &self.security_group_ids);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("UserData", &self.user_data);
        formatter.field("AdditionalInfo", &self.additional_info);
        formatter.field("ClientToken", &self.client_token);
        formatter.field("DisableApiTermination", &self.disable_api_termination);
        formatter.field("DryRun", &self.dry_run);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.enum_field("InstanceInitiatedShutdownBehavior", &self.instance_initiated_shutdown_behavior);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("ElasticGpuSpecification", &self.elastic_gpu_specification);
        formatter.field("ElasticInferenceAccelerators", &self.elastic_inference_accelerators);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("LaunchTemplate", &self.launch_template);
        formatter.field("InstanceMarketOptions", &self.instance_market_options);
        formatter.field("CreditSpecification", &self.credit_specification);
        formatter.field("CpuOptions", &self.cpu_options);
        formatter.field("CapacityReservationSpecification", &self.capacity_reservation_specification);
        formatter.field("HibernationOptions", &self.hibernation_options);
        formatter.field("LicenseSpecifications", &self.license_specifications);
        formatter.field("MetadataOptions", &self.metadata_options);
        formatter.finish()
    }
}
/// See [`RunInstancesInput`](crate::input::RunInstancesInput)
pub mod run_instances_input {
    /// A builder for [`RunInstancesInput`](crate::input::RunInstancesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) ipv6_address_count: std::option::Option<i32>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) max_count: std::option::Option<i32>,
        pub(crate) min_count: std::option::Option<i32>,
        pub(crate) monitoring: std::option::Option<crate::model::RunInstancesMonitoringEnabled>,
        pub(crate) placement: std::option::Option<crate::model::Placement>,
        pub(crate) ramdisk_id: std::option::Option<std::string::String>,
        pub(crate) security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) user_data: std::option::Option<std::string::String>,
        pub(crate) additional_info: std::option::Option<std::string::String>,
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) disable_api_termination: std::option::Option<bool>,
        pub(crate) dry_run: std::option::Option<bool>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
        pub(crate) instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) elastic_gpu_specification: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>,
        pub(crate) elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
        pub(crate) launch_template: std::option::Option<crate::model::LaunchTemplateSpecification>,
        pub(crate) instance_market_options: std::option::Option<crate::model::InstanceMarketOptionsRequest>,
        pub(crate) credit_specification: std::option::Option<crate::model::CreditSpecificationRequest>,
        pub(crate) cpu_options: std::option::Option<crate::model::CpuOptionsRequest>,
        pub(crate) capacity_reservation_specification: std::option::Option<crate::model::CapacityReservationSpecification>,
        pub(crate) hibernation_options: std::option::Option<crate::model::HibernationOptionsRequest>,
        pub(crate) license_specifications: std::option::Option<std::vec::Vec<crate::model::LicenseConfigurationRequest>>,
        pub(crate) metadata_options: std::option::Option<crate::model::InstanceMetadataOptionsRequest>,
    }
    impl Builder {
        /// Appends an item to `block_device_mappings`.
        ///
        /// To override the contents of this collection use [`set_block_device_mappings`](Self::set_block_device_mappings).
        ///
        /// <p>One or more block device mapping entries.</p>
        pub fn block_device_mappings(mut self, input: impl std::convert::Into<crate::model::BlockDeviceMapping>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        /// <p>One or more block device mapping entries.</p>
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>) -> Self {
            self.block_device_mappings = input;
            self
        }

        /// <p>The ID of the AMI.</p>
        pub fn image_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_id = Some(input.into());
            self
        }
        /// <p>The ID of the AMI.</p>
        pub fn set_image_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_id = input;
            self
        }

        /// <p>The instance type.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
        pub fn ipv6_address_count(mut self, input: i32) -> Self {
            self.ipv6_address_count = Some(input);
            self
        }
        /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
        pub fn set_ipv6_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.ipv6_address_count = input;
            self
        }

        /// Appends an item to `ipv6_addresses`.
        ///
        /// To override the contents of this collection use [`set_ipv6_addresses`](Self::set_ipv6_addresses).
        ///
        /// <p>The IPv6 addresses associated with the network interface.</p>
        pub fn ipv6_addresses(mut self, input: impl std::convert::Into<crate::model::InstanceIpv6Address>) -> Self {
            let mut v = self.ipv6_addresses.unwrap_or_default();
            v.push(input.into());
            self.ipv6_addresses = Some(v);
            self
        }
        /// <p>The IPv6 addresses associated with the network interface.</p>
        pub fn set_ipv6_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>) -> Self {
            self.ipv6_addresses = input;
            self
        }

        /// <p>The kernel associated with this instance, if applicable.</p>
        pub fn kernel_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kernel_id = Some(input.into());
            self
        }
        /// <p>The kernel associated with this instance, if applicable.</p>
        pub fn set_kernel_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kernel_id = input;
            self
        }

        /// <p>The name of the key pair.</p>
        pub fn key_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_name = Some(input.into());
            self
        }
        /// <p>The name of the key pair.</p>
        pub fn set_key_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_name = input;
            self
        }

        /// <p>The maximum number of instances to launch. If you specify more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches the largest possible number of instances above <code>MinCount</code>.</p>
        pub fn max_count(mut self, input: i32) -> Self {
            self.max_count = Some(input);
            self
        }
        /// <p>The maximum number of instances to launch. If you specify more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches the largest possible number of instances above <code>MinCount</code>.</p>
        pub fn set_max_count(mut self, input: std::option::Option<i32>) -> Self {
            self.max_count = input;
            self
        }

        /// <p>The minimum number of instances to launch. If you specify a minimum that is more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches no instances.</p>
        pub fn min_count(mut self, input: i32) -> Self {
            self.min_count = Some(input);
            self
        }
        /// <p>The minimum number of instances to launch. If you specify a minimum that is more instances than Amazon EC2 can launch in the target Availability Zone, Amazon EC2 launches no instances.</p>
        pub fn set_min_count(mut self, input: std::option::Option<i32>) -> Self {
            self.min_count = input;
            self
        }

        /// <p>The monitoring for the instance.</p>
        pub fn monitoring(mut self, input: crate::model::RunInstancesMonitoringEnabled) -> Self {
            self.monitoring = Some(input);
            self
        }
        /// <p>The monitoring for the instance.</p>
        pub fn set_monitoring(mut self, input: std::option::Option<crate::model::RunInstancesMonitoringEnabled>) -> Self {
            self.monitoring = input;
            self
        }

        /// <p>The location where the instance launched, if applicable.</p>
        pub fn placement(mut self, input: crate::model::Placement) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The location where the instance launched, if applicable.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::Placement>) -> Self {
            self.placement = input;
            self
        }

        /// <p>The RAM disk ID associated with this resource, if applicable.</p>
        pub fn ramdisk_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ramdisk_id = Some(input.into());
            self
        }
        /// <p>The RAM disk ID associated with this resource, if applicable.</p>
        pub fn set_ramdisk_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ramdisk_id = input;
            self
        }

        /// Appends an item to `security_group_ids`.
        ///
        /// To override the contents of this collection use [`set_security_group_ids`](Self::set_security_group_ids).
        ///
        /// <p>The IDs of the security groups.</p>
        pub fn security_group_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        /// <p>The IDs of the security groups.</p>
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }

        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>One or more security groups.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>One or more security groups.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>The ID of the subnet.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>The ID of the subnet.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }

        /// <p>The user data to make available to the instance. User data must be base64-encoded before it is sent.</p>
        pub fn user_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_data = Some(input.into());
            self
        }
        /// <p>The user data to make available to the instance. User data must be base64-encoded before it is sent.</p>
        pub fn set_user_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_data = input;
            self
        }

        /// <p>Reserved.</p>
        pub fn additional_info(mut self, input: impl Into<std::string::String>) -> Self {
            self.additional_info = Some(input.into());
            self
        }
        /// <p>Reserved.</p>
        pub fn set_additional_info(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.additional_info = input;
            self
        }

        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request. If you do not specify a client token, a randomly generated token is used for the request to ensure idempotency.</p>
        /// <p>Constraints: Maximum 64 ASCII characters</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request. If you do not specify a client token, a randomly generated token is used for the request to ensure idempotency.</p>
        /// <p>Constraints: Maximum 64 ASCII characters</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can.</p>
        pub fn disable_api_termination(mut self, input: bool) -> Self {
            self.disable_api_termination = Some(input);
            self
        }
        /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can.</p>
        pub fn set_disable_api_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.disable_api_termination = input;
            self
        }

        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        /// <p>Checks whether you have the required permissions for the action, without actually making the request, and provides an error response. If you have the required permissions, the error response is <code>DryRunOperation</code>. Otherwise, it is <code>UnauthorizedOperation</code>.</p>
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }

        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }

        /// <p>The IAM instance profile.</p>
        pub fn iam_instance_profile(mut self, input: crate::model::IamInstanceProfileSpecification) -> Self {
            self.iam_instance_profile = Some(input);
            self
        }
        /// <p>The IAM instance profile.</p>
        pub fn set_iam_instance_profile(mut self, input: std::option::Option<crate::model::IamInstanceProfileSpecification>) -> Self {
            self.iam_instance_profile = input;
            self
        }

        /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
        pub fn instance_initiated_shutdown_behavior(mut self, input: crate::model::ShutdownBehavior) -> Self {
            self.instance_initiated_shutdown_behavior = Some(input);
            self
        }
        /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
        pub fn set_instance_initiated_shutdown_behavior(mut self, input: std::option::Option<crate::model::ShutdownBehavior>) -> Self {
            self.instance_initiated_shutdown_behavior = input;
            self
        }

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>The network interfaces.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::InstanceNetworkInterfaceSpecification>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>The network interfaces.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>) -> Self {
            self.network_interfaces = input;
            self
        }

        /// <p>The private IPv4 address.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The private IPv4 address.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }

        /// Appends an item to `elastic_gpu_specification`.
        ///
        /// To override the contents of this collection use [`set_elastic_gpu_specification`](Self::set_elastic_gpu_specification).
        ///
        /// <p>An elastic GPU to associate with the instance.</p>
        pub fn elastic_gpu_specification(mut self, input: impl std::convert::Into<crate::model::ElasticGpuSpecification>) -> Self {
            let mut v = self.elastic_gpu_specification.unwrap_or_default();
            v.push(input.into());
            self.elastic_gpu_specification = Some(v);
            self
        }
        /// <p>An elastic GPU to associate with the instance.</p>
        pub fn set_elastic_gpu_specification(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>) -> Self {
            self.elastic_gpu_specification = input;
            self
        }

        /// Appends an item to `elastic_inference_accelerators`.
        ///
        /// To override the contents of this collection use [`set_elastic_inference_accelerators`](Self::set_elastic_inference_accelerators).
        ///
        /// <p>An elastic inference accelerator to associate with the instance.</p>
        pub fn elastic_inference_accelerators(mut self, input: impl std::convert::Into<crate::model::ElasticInferenceAccelerator>) -> Self {
            let mut v = self.elastic_inference_accelerators.unwrap_or_default();
            v.push(input.into());
            self.elastic_inference_accelerators = Some(v);
            self
        }
        /// <p>An elastic inference accelerator to associate with the instance.</p>
        pub fn set_elastic_inference_accelerators(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>) -> Self {
            self.elastic_inference_accelerators = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the resources during launch.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// <p>The launch template to use to launch the instances. Any parameters that you specify in <code>RunInstances</code> override the same parameters in the launch template. You can specify either the name or ID of a launch template, but not both.</p>
        pub fn launch_template(mut self, input: crate::model::LaunchTemplateSpecification) -> Self {
            self.launch_template = Some(input);
            self
        }
        /// <p>The launch template to use to launch the instances. Any parameters that you specify in <code>RunInstances</code> override the same parameters in the launch template. You can specify either the name or ID of a launch template, but not both.</p>
        pub fn set_launch_template(mut self, input: std::option::Option<crate::model::LaunchTemplateSpecification>) -> Self {
            self.launch_template = input;
            self
        }

        /// <p>The market (purchasing) option for the instances.</p>
        pub fn instance_market_options(mut self, input: crate::model::InstanceMarketOptionsRequest) -> Self {
            self.instance_market_options = Some(input);
            self
        }
        /// <p>The market (purchasing) option for the instances.</p>
        pub fn set_instance_market_options(mut self, input: std::option::Option<crate::model::InstanceMarketOptionsRequest>) -> Self {
            self.instance_market_options = input;
            self
        }

        /// <p>The credit option for CPU usage of the burstable performance instance.</p>
        pub fn credit_specification(mut self, input: crate::model::CreditSpecificationRequest) -> Self {
            self.credit_specification = Some(input);
            self
        }
        /// <p>The credit option for CPU usage of the burstable performance instance.</p>
        pub fn set_credit_specification(mut self, input: std::option::Option<crate::model::CreditSpecificationRequest>) -> Self {
            self.credit_specification = input;
            self
        }

        /// <p>The CPU options for the instance.</p>
        pub fn cpu_options(mut self, input: crate::model::CpuOptionsRequest) -> Self {
            self.cpu_options = Some(input);
            self
        }
        /// <p>The CPU options for the instance.</p>
        pub fn set_cpu_options(mut self, input: std::option::Option<crate::model::CpuOptionsRequest>) -> Self {
            self.cpu_options = input;
            self
        }

        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn capacity_reservation_specification(mut self, input: crate::model::CapacityReservationSpecification) -> Self {
            self.capacity_reservation_specification = Some(input);
            self
        }
        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn set_capacity_reservation_specification(mut self, input: std::option::Option<crate::model::CapacityReservationSpecification>) -> Self {
            self.capacity_reservation_specification = input;
            self
        }

        /// <p>Indicates whether the instance is enabled for hibernation.</p>
        pub fn hibernation_options(mut self, input: crate::model::HibernationOptionsRequest) -> Self {
            self.hibernation_options = Some(input);
            self
        }
        /// <p>Indicates whether the instance is enabled for hibernation.</p>
        pub fn set_hibernation_options(mut self, input: std::option::Option<crate::model::HibernationOptionsRequest>) -> Self {
            self.hibernation_options = input;
            self
        }

        /// Appends an item to `license_specifications`.
        ///
        /// To override the contents of this collection use [`set_license_specifications`](Self::set_license_specifications).
        ///
        /// <p>The license configurations.</p>
        pub fn license_specifications(mut self, input: impl std::convert::Into<crate::model::LicenseConfigurationRequest>) -> Self {
            let mut v = self.license_specifications.unwrap_or_default();
            v.push(input.into());
            self.license_specifications = Some(v);
            self
        }
        /// <p>The license configurations.</p>
        pub fn set_license_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::LicenseConfigurationRequest>>) -> Self {
            self.license_specifications = input;
            self
        }

        /// <p>The metadata options for the instance.</p>
        pub fn metadata_options(mut self, input: crate::model::InstanceMetadataOptionsRequest) -> Self {
            self.metadata_options = Some(input);
            self
        }
        /// <p>The metadata options for the instance.</p>
        pub fn set_metadata_options(mut self, input: std::option::Option<crate::model::InstanceMetadataOptionsRequest>) -> Self {
            self.metadata_options = input;
            self
        }
        /// Consumes the builder and constructs a [`RunInstancesInput`](crate::input::RunInstancesInput)
        pub fn build(self) -> crate::input::RunInstancesInput {
            crate::input::RunInstancesInput {
                block_device_mappings: self.block_device_mappings,
                image_id: self.image_id,
                instance_type: self.instance_type,
                ipv6_address_count: self.ipv6_address_count,
                ipv6_addresses: self.ipv6_addresses,
                kernel_id: self.kernel_id,
                key_name: self.key_name,
                max_count: self.max_count,
                min_count: self.min_count,
                monitoring: self.monitoring,
                placement: self.placement,
                ramdisk_id: self.ramdisk_id,
                security_group_ids: self.security_group_ids,
                security_groups: self.security_groups,
                subnet_id: self.subnet_id,
                user_data: self.user_data,
                additional_info: self.additional_info,
                client_token: self.client_token,
                disable_api_termination: self.disable_api_termination,
                dry_run: self.dry_run,
                ebs_optimized: self.ebs_optimized,
                iam_instance_profile: self.iam_instance_profile,
                instance_initiated_shutdown_behavior: self.instance_initiated_shutdown_behavior,
                network_interfaces: self.network_interfaces,
                private_ip_address: self.private_ip_address,
                elastic_gpu_specification: self.elastic_gpu_specification,
                elastic_inference_accelerators: self.elastic_inference_accelerators,
                tag_specifications: self.tag_specifications,
                launch_template: self.launch_template,
                instance_market_options: self.instance_market_options,
                credit_specification: self.credit_specification,
                cpu_options: self.cpu_options,
                capacity_reservation_specification: self.capacity_reservation_specification,
                hibernation_options: self.hibernation_options,
                license_specifications: self.license_specifications,
                metadata_options: self.metadata_options,
            }
        }
    }
}
impl RunInstancesInput {
    /// Creates a new builder-style object to manufacture [`RunInstancesInput`](crate::input::RunInstancesInput)
    pub fn builder() -> crate::input::run_instances_input::Builder {
        crate::input::run_instances_input::Builder::default()
    }
}

impl crate::operation::MarshallRequest for RunInstancesInput {
    const NAME: &'static str = "RunInstances";
    const IDEMPOTENCY_TOKEN: std::option::Option<&'static str> = Some("ClientToken");

    fn marshall(
        &self,
    ) -> std::result::Result<smithy_query::QueryRequest, smithy_http::operation::SerializationError>
    {
        crate::query_ser::serialize_operation_run_instances(self)
    }
}
impl crate::operation::DryRunSupportedRequest for RunInstancesInput {}
