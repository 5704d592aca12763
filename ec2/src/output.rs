/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateCapacityReservationOutput {
    /// <p>Information about the Capacity Reservation.</p>
    pub capacity_reservation: std::option::Option<crate::model::CapacityReservation>,
}
impl CreateCapacityReservationOutput {
    /// <p>Information about the Capacity Reservation.</p>
    pub fn capacity_reservation(&self) -> std::option::Option<&crate::model::CapacityReservation> {
        self.capacity_reservation.as_ref()
    }
}
impl std::fmt::Debug for CreateCapacityReservationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CapacityReservation", &self.capacity_reservation);
        formatter.finish()
    }
}
/// See [`CreateCapacityReservationOutput`](crate::output::CreateCapacityReservationOutput)
pub mod create_capacity_reservation_output {
    /// A builder for [`CreateCapacityReservationOutput`](crate::output::CreateCapacityReservationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation: std::option::Option<crate::model::CapacityReservation>,
    }
    impl Builder {
        /// <p>Information about the Capacity Reservation.</p>
        pub fn capacity_reservation(mut self, input: crate::model::CapacityReservation) -> Self {
            self.capacity_reservation = Some(input);
            self
        }
        /// <p>Information about the Capacity Reservation.</p>
        pub fn set_capacity_reservation(mut self, input: std::option::Option<crate::model::CapacityReservation>) -> Self {
            self.capacity_reservation = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCapacityReservationOutput`](crate::output::CreateCapacityReservationOutput)
        pub fn build(self) -> crate::output::CreateCapacityReservationOutput {
            crate::output::CreateCapacityReservationOutput {
                capacity_reservation: self.capacity_reservation,
            }
        }
    }
}
impl CreateCapacityReservationOutput {
    /// Creates a new builder-style object to manufacture [`CreateCapacityReservationOutput`](crate::output::CreateCapacityReservationOutput)
    pub fn builder() -> crate::output::create_capacity_reservation_output::Builder {
        crate::output::create_capacity_reservation_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateFlowLogsOutput {
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>The IDs of the flow logs.</p>
    pub flow_log_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Information about the flow logs that could not be created successfully.</p>
    pub unsuccessful: std::option::Option<std::vec::Vec<crate::model::UnsuccessfulItem>>,
}
impl CreateFlowLogsOutput {
    /// <p>Unique, case-sensitive identifier you provide to ensure the idempotency of the request.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>The IDs of the flow logs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.flow_log_ids.is_none()`.
    pub fn flow_log_ids(&self) -> &[std::string::String] {
        self.flow_log_ids.as_deref().unwrap_or_default()
    }

    /// <p>Information about the flow logs that could not be created successfully.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.unsuccessful.is_none()`.
    pub fn unsuccessful(&self) -> &[crate::model::UnsuccessfulItem] {
        self.unsuccessful.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for CreateFlowLogsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ClientToken", &self.client_token);
        formatter.field("FlowLogIds", &self.flow_log_ids);
        formatter.field("Unsuccessful", &self.unsuccessful);
        formatter.finish()
    }
}
/// See [`CreateFlowLogsOutput`](crate::output::CreateFlowLogsOutput)
pub mod create_flow_logs_output {
    /// A builder for [`CreateFlowLogsOutput`](crate::output::CreateFlowLogsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) flow_log_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) unsuccessful: std::option::Option<std::vec::Vec<crate::model::UnsuccessfulItem>>,
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

        /// Appends an item to `flow_log_ids`.
        ///
        /// To override the contents of this collection use [`set_flow_log_ids`](Self::set_flow_log_ids).
        ///
        /// <p>The IDs of the flow logs.</p>
        pub fn flow_log_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.flow_log_ids.unwrap_or_default();
            v.push(input.into());
            self.flow_log_ids = Some(v);
            self
        }
        /// <p>The IDs of the flow logs.</p>
        pub fn set_flow_log_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.flow_log_ids = input;
            self
        }

        /// Appends an item to `unsuccessful`.
        ///
        /// To override the contents of this collection use [`set_unsuccessful`](Self::set_unsuccessful).
        ///
        /// <p>Information about the flow logs that could not be created successfully.</p>
        pub fn unsuccessful(mut self, input: impl std::convert::Into<crate::model::UnsuccessfulItem>) -> Self {
            let mut v = self.unsuccessful.unwrap_or_default();
            v.push(input.into());
            self.unsuccessful = Some(v);
            self
        }
        /// <p>Information about the flow logs that could not be created successfully.</p>
        pub fn set_unsuccessful(mut self, input: std::option::Option<std::vec::Vec<crate::model::UnsuccessfulItem>>) -> Self {
            self.unsuccessful = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateFlowLogsOutput`](crate::output::CreateFlowLogsOutput)
        pub fn build(self) -> crate::output::CreateFlowLogsOutput {
            crate::output::CreateFlowLogsOutput {
                client_token: self.client_token,
                flow_log_ids: self.flow_log_ids,
                unsuccessful: self.unsuccessful,
            }
        }
    }
}
impl CreateFlowLogsOutput {
    /// Creates a new builder-style object to manufacture [`CreateFlowLogsOutput`](crate::output::CreateFlowLogsOutput)
    pub fn builder() -> crate::output::create_flow_logs_output::Builder {
        crate::output::create_flow_logs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateNetworkAclEntryOutput {}
impl std::fmt::Debug for CreateNetworkAclEntryOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.finish()
    }
}
/// See [`CreateNetworkAclEntryOutput`](crate::output::CreateNetworkAclEntryOutput)
pub mod create_network_acl_entry_output {
    /// A builder for [`CreateNetworkAclEntryOutput`](crate::output::CreateNetworkAclEntryOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`CreateNetworkAclEntryOutput`](crate::output::CreateNetworkAclEntryOutput)
        pub fn build(self) -> crate::output::CreateNetworkAclEntryOutput {
            crate::output::CreateNetworkAclEntryOutput {}
        }
    }
}
impl CreateNetworkAclEntryOutput {
    /// Creates a new builder-style object to manufacture [`CreateNetworkAclEntryOutput`](crate::output::CreateNetworkAclEntryOutput)
    pub fn builder() -> crate::output::create_network_acl_entry_output::Builder {
        crate::output::create_network_acl_entry_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateVolumeOutput {
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The time stamp when volume creation was initiated.</p>
    pub create_time: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates whether the volume is encrypted.</p>
    pub encrypted: std::option::Option<bool>,
    /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
    pub kms_key_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub outpost_arn: std::option::Option<std::string::String>,
    /// <p>The size of the volume, in GiBs.</p>
    pub size: std::option::Option<i32>,
    /// <p>The snapshot from which the volume was created, if applicable.</p>
    pub snapshot_id: std::option::Option<std::string::String>,
    /// <p>The volume state.</p>
    pub state: std::option::Option<crate::model::VolumeState>,
    /// <p>The ID of the EBS volume.</p>
    pub volume_id: std::option::Option<std::string::String>,
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub iops: std::option::Option<i32>,
    /// <p>Any tags assigned to the volume.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The volume type.</p>
    pub volume_type: std::option::Option<crate::model::VolumeType>,
    /// <p>Indicates whether the volume was created using fast snapshot restore.</p>
    pub fast_restored: std::option::Option<bool>,
    /// <p>Indicates whether Amazon EBS Multi-Attach is enabled.</p>
    pub multi_attach_enabled: std::option::Option<bool>,
}
impl CreateVolumeOutput {
    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The time stamp when volume creation was initiated.</p>
    pub fn create_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.create_time.as_ref()
    }

    /// <p>Indicates whether the volume is encrypted.</p>
    pub fn encrypted(&self) -> std::option::Option<bool> {
        self.encrypted
    }

    /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }

    /// <p>The size of the volume, in GiBs.</p>
    pub fn size(&self) -> std::option::Option<i32> {
        self.size
    }

    /// <p>The snapshot from which the volume was created, if applicable.</p>
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// <p>The volume state.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::VolumeState> {
        self.state.as_ref()
    }

    /// <p>The ID of the EBS volume.</p>
    pub fn volume_id(&self) -> std::option::Option<&str> {
        self.volume_id.as_deref()
    }

    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }

    /// <p>Any tags assigned to the volume.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The volume type.</p>
    pub fn volume_type(&self) -> std::option::Option<&crate::model::VolumeType> {
        self.volume_type.as_ref()
    }

    /// <p>Indicates whether the volume was created using fast snapshot restore.</p>
    pub fn fast_restored(&self) -> std::option::Option<bool> {
        self.fast_restored
    }

    /// <p>Indicates whether Amazon EBS Multi-Attach is enabled.</p>
    pub fn multi_attach_enabled(&self) -> std::option::Option<bool> {
        self.multi_attach_enabled
    }
}
impl std::fmt::Debug for CreateVolumeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("CreateTime", &self.create_time);
        formatter.field("Encrypted", &self.encrypted);
        formatter.field("KmsKeyId", &self.kms_key_id);
        formatter.field("OutpostArn", &self.outpost_arn);
        formatter.field("Size", &self.size);
        formatter.field("SnapshotId", &self.snapshot_id);
        formatter.enum_field("State", &self.state);
        formatter.field("VolumeId", &self.volume_id);
        formatter.field("Iops", &self.iops);
        formatter.field("Tags", &self.tags);
        formatter.enum_field("VolumeType", &self.volume_type);
        formatter.field("FastRestored", &self.fast_restored);
        formatter.field("MultiAttachEnabled", &self.multi_attach_enabled);
        formatter.finish()
    }
}
/// See [`CreateVolumeOutput`](crate::output::CreateVolumeOutput)
pub mod create_volume_output {
    /// A builder for [`CreateVolumeOutput`](crate::output::CreateVolumeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) create_time: std::option::Option<smithy_types::Instant>,
        pub(crate) encrypted: std::option::Option<bool>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
        pub(crate) size: std::option::Option<i32>,
        pub(crate) snapshot_id: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<crate::model::VolumeState>,
        pub(crate) volume_id: std::option::Option<std::string::String>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) volume_type: std::option::Option<crate::model::VolumeType>,
        pub(crate) fast_restored: std::option::Option<bool>,
        pub(crate) multi_attach_enabled: std::option::Option<bool>,
    }
    impl Builder {
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

        /// <p>The time stamp when volume creation was initiated.</p>
        pub fn create_time(mut self, input: smithy_types::Instant) -> Self {
            self.create_time = Some(input);
            self
        }
        /// <p>The time stamp when volume creation was initiated.</p>
        pub fn set_create_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.create_time = input;
            self
        }

        /// <p>Indicates whether the volume is encrypted.</p>
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        /// <p>Indicates whether the volume is encrypted.</p>
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }

        /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
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

        /// <p>The size of the volume, in GiBs.</p>
        pub fn size(mut self, input: i32) -> Self {
            self.size = Some(input);
            self
        }
        /// <p>The size of the volume, in GiBs.</p>
        pub fn set_size(mut self, input: std::option::Option<i32>) -> Self {
            self.size = input;
            self
        }

        /// <p>The snapshot from which the volume was created, if applicable.</p>
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// <p>The snapshot from which the volume was created, if applicable.</p>
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }

        /// <p>The volume state.</p>
        pub fn state(mut self, input: crate::model::VolumeState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The volume state.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::VolumeState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The ID of the EBS volume.</p>
        pub fn volume_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        /// <p>The ID of the EBS volume.</p>
        pub fn set_volume_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_id = input;
            self
        }

        /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the volume.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the volume.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The volume type.</p>
        pub fn volume_type(mut self, input: crate::model::VolumeType) -> Self {
            self.volume_type = Some(input);
            self
        }
        /// <p>The volume type.</p>
        pub fn set_volume_type(mut self, input: std::option::Option<crate::model::VolumeType>) -> Self {
            self.volume_type = input;
            self
        }

        /// <p>Indicates whether the volume was created using fast snapshot restore.</p>
        pub fn fast_restored(mut self, input: bool) -> Self {
            self.fast_restored = Some(input);
            self
        }
        /// <p>Indicates whether the volume was created using fast snapshot restore.</p>
        pub fn set_fast_restored(mut self, input: std::option::Option<bool>) -> Self {
            self.fast_restored = input;
            self
        }

        /// <p>Indicates whether Amazon EBS Multi-Attach is enabled.</p>
        pub fn multi_attach_enabled(mut self, input: bool) -> Self {
            self.multi_attach_enabled = Some(input);
            self
        }
        /// <p>Indicates whether Amazon EBS Multi-Attach is enabled.</p>
        pub fn set_multi_attach_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.multi_attach_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateVolumeOutput`](crate::output::CreateVolumeOutput)
        pub fn build(self) -> crate::output::CreateVolumeOutput {
            crate::output::CreateVolumeOutput {
                availability_zone: self.availability_zone,
                create_time: self.create_time,
                encrypted: self.encrypted,
                kms_key_id: self.kms_key_id,
                outpost_arn: self.outpost_arn,
                size: self.size,
                snapshot_id: self.snapshot_id,
                state: self.state,
                volume_id: self.volume_id,
                iops: self.iops,
                tags: self.tags,
                volume_type: self.volume_type,
                fast_restored: self.fast_restored,
                multi_attach_enabled: self.multi_attach_enabled,
            }
        }
    }
}
impl CreateVolumeOutput {
    /// Creates a new builder-style object to manufacture [`CreateVolumeOutput`](crate::output::CreateVolumeOutput)
    pub fn builder() -> crate::output::create_volume_output::Builder {
        crate::output::create_volume_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreateVpcOutput {
    /// <p>Information about the VPC.</p>
    pub vpc: std::option::Option<crate::model::Vpc>,
}
impl CreateVpcOutput {
    /// <p>Information about the VPC.</p>
    pub fn vpc(&self) -> std::option::Option<&crate::model::Vpc> {
        self.vpc.as_ref()
    }
}
impl std::fmt::Debug for CreateVpcOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Vpc", &self.vpc);
        formatter.finish()
    }
}
/// See [`CreateVpcOutput`](crate::output::CreateVpcOutput)
pub mod create_vpc_output {
    /// A builder for [`CreateVpcOutput`](crate::output::CreateVpcOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) vpc: std::option::Option<crate::model::Vpc>,
    }
    impl Builder {
        /// <p>Information about the VPC.</p>
        pub fn vpc(mut self, input: crate::model::Vpc) -> Self {
            self.vpc = Some(input);
            self
        }
        /// <p>Information about the VPC.</p>
        pub fn set_vpc(mut self, input: std::option::Option<crate::model::Vpc>) -> Self {
            self.vpc = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateVpcOutput`](crate::output::CreateVpcOutput)
        pub fn build(self) -> crate::output::CreateVpcOutput {
            crate::output::CreateVpcOutput {
                vpc: self.vpc,
            }
        }
    }
}
impl CreateVpcOutput {
    /// Creates a new builder-style object to manufacture [`CreateVpcOutput`](crate::output::CreateVpcOutput)
    pub fn builder() -> crate::output::create_vpc_output::Builder {
        crate::output::create_vpc_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeCapacityReservationsOutput {
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
    /// <p>Information about the Capacity Reservations.</p>
    pub capacity_reservations: std::option::Option<std::vec::Vec<crate::model::CapacityReservation>>,
}
impl DescribeCapacityReservationsOutput {
    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    /// <p>Information about the Capacity Reservations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.capacity_reservations.is_none()`.
    pub fn capacity_reservations(&self) -> &[crate::model::CapacityReservation] {
        self.capacity_reservations.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for DescribeCapacityReservationsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("NextToken", &self.next_token);
        formatter.field("CapacityReservations", &self.capacity_reservations);
        formatter.finish()
    }
}
/// See [`DescribeCapacityReservationsOutput`](crate::output::DescribeCapacityReservationsOutput)
pub mod describe_capacity_reservations_output {
    /// A builder for [`DescribeCapacityReservationsOutput`](crate::output::DescribeCapacityReservationsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) capacity_reservations: std::option::Option<std::vec::Vec<crate::model::CapacityReservation>>,
    }
    impl Builder {
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

        /// Appends an item to `capacity_reservations`.
        ///
        /// To override the contents of this collection use [`set_capacity_reservations`](Self::set_capacity_reservations).
        ///
        /// <p>Information about the Capacity Reservations.</p>
        pub fn capacity_reservations(mut self, input: impl std::convert::Into<crate::model::CapacityReservation>) -> Self {
            let mut v = self.capacity_reservations.unwrap_or_default();
            v.push(input.into());
            self.capacity_reservations = Some(v);
            self
        }
        /// <p>Information about the Capacity Reservations.</p>
        pub fn set_capacity_reservations(mut self, input: std::option::Option<std::vec::Vec<crate::model::CapacityReservation>>) -> Self {
            self.capacity_reservations = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCapacityReservationsOutput`](crate::output::DescribeCapacityReservationsOutput)
        pub fn build(self) -> crate::output::DescribeCapacityReservationsOutput {
            crate::output::DescribeCapacityReservationsOutput {
                next_token: self.next_token,
                capacity_reservations: self.capacity_reservations,
            }
        }
    }
}
impl DescribeCapacityReservationsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeCapacityReservationsOutput`](crate::output::DescribeCapacityReservationsOutput)
    pub fn builder() -> crate::output::describe_capacity_reservations_output::Builder {
        crate::output::describe_capacity_reservations_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeImagesOutput {
    /// <p>Information about the images.</p>
    pub images: std::option::Option<std::vec::Vec<crate::model::Image>>,
}
impl DescribeImagesOutput {
    /// <p>Information about the images.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.images.is_none()`.
    pub fn images(&self) -> &[crate::model::Image] {
        self.images.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for DescribeImagesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Images", &self.images);
        formatter.finish()
    }
}
/// See [`DescribeImagesOutput`](crate::output::DescribeImagesOutput)
pub mod describe_images_output {
    /// A builder for [`DescribeImagesOutput`](crate::output::DescribeImagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) images: std::option::Option<std::vec::Vec<crate::model::Image>>,
    }
    impl Builder {
        /// Appends an item to `images`.
        ///
        /// To override the contents of this collection use [`set_images`](Self::set_images).
        ///
        /// <p>Information about the images.</p>
        pub fn images(mut self, input: impl std::convert::Into<crate::model::Image>) -> Self {
            let mut v = self.images.unwrap_or_default();
            v.push(input.into());
            self.images = Some(v);
            self
        }
        /// <p>Information about the images.</p>
        pub fn set_images(mut self, input: std::option::Option<std::vec::Vec<crate::model::Image>>) -> Self {
            self.images = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeImagesOutput`](crate::output::DescribeImagesOutput)
        pub fn build(self) -> crate::output::DescribeImagesOutput {
            crate::output::DescribeImagesOutput {
                images: self.images,
            }
        }
    }
}
impl DescribeImagesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeImagesOutput`](crate::output::DescribeImagesOutput)
    pub fn builder() -> crate::output::describe_images_output::Builder {
        crate::output::describe_images_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeInstanceTypesOutput {
    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub instance_types: std::option::Option<std::vec::Vec<crate::model::InstanceTypeInfo>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeInstanceTypesOutput {
    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instance_types.is_none()`.
    pub fn instance_types(&self) -> &[crate::model::InstanceTypeInfo] {
        self.instance_types.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeInstanceTypesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("InstanceTypes", &self.instance_types);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeInstanceTypesOutput`](crate::output::DescribeInstanceTypesOutput)
pub mod describe_instance_types_output {
    /// A builder for [`DescribeInstanceTypesOutput`](crate::output::DescribeInstanceTypesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_types: std::option::Option<std::vec::Vec<crate::model::InstanceTypeInfo>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instance_types`.
        ///
        /// To override the contents of this collection use [`set_instance_types`](Self::set_instance_types).
        ///
        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn instance_types(mut self, input: impl std::convert::Into<crate::model::InstanceTypeInfo>) -> Self {
            let mut v = self.instance_types.unwrap_or_default();
            v.push(input.into());
            self.instance_types = Some(v);
            self
        }
        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_instance_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceTypeInfo>>) -> Self {
            self.instance_types = input;
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
        /// Consumes the builder and constructs a [`DescribeInstanceTypesOutput`](crate::output::DescribeInstanceTypesOutput)
        pub fn build(self) -> crate::output::DescribeInstanceTypesOutput {
            crate::output::DescribeInstanceTypesOutput {
                instance_types: self.instance_types,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeInstanceTypesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeInstanceTypesOutput`](crate::output::DescribeInstanceTypesOutput)
    pub fn builder() -> crate::output::describe_instance_types_output::Builder {
        crate::output::describe_instance_types_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeInstancesOutput {
    /// <p>Information about the reservations.</p>
    pub reservations: std::option::Option<std::vec::Vec<crate::model::Reservation>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeInstancesOutput {
    /// <p>Information about the reservations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.reservations.is_none()`.
    pub fn reservations(&self) -> &[crate::model::Reservation] {
        self.reservations.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Reservations", &self.reservations);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeInstancesOutput`](crate::output::DescribeInstancesOutput)
pub mod describe_instances_output {
    /// A builder for [`DescribeInstancesOutput`](crate::output::DescribeInstancesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) reservations: std::option::Option<std::vec::Vec<crate::model::Reservation>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `reservations`.
        ///
        /// To override the contents of this collection use [`set_reservations`](Self::set_reservations).
        ///
        /// <p>Information about the reservations.</p>
        pub fn reservations(mut self, input: impl std::convert::Into<crate::model::Reservation>) -> Self {
            let mut v = self.reservations.unwrap_or_default();
            v.push(input.into());
            self.reservations = Some(v);
            self
        }
        /// <p>Information about the reservations.</p>
        pub fn set_reservations(mut self, input: std::option::Option<std::vec::Vec<crate::model::Reservation>>) -> Self {
            self.reservations = input;
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
        /// Consumes the builder and constructs a [`DescribeInstancesOutput`](crate::output::DescribeInstancesOutput)
        pub fn build(self) -> crate::output::DescribeInstancesOutput {
            crate::output::DescribeInstancesOutput {
                reservations: self.reservations,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeInstancesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeInstancesOutput`](crate::output::DescribeInstancesOutput)
    pub fn builder() -> crate::output::describe_instances_output::Builder {
        crate::output::describe_instances_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeNetworkInterfacesOutput {
    /// <p>Information about one or more network interfaces.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeNetworkInterfacesOutput {
    /// <p>Information about one or more network interfaces.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::NetworkInterface] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeNetworkInterfacesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeNetworkInterfacesOutput`](crate::output::DescribeNetworkInterfacesOutput)
pub mod describe_network_interfaces_output {
    /// A builder for [`DescribeNetworkInterfacesOutput`](crate::output::DescribeNetworkInterfacesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>Information about one or more network interfaces.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::NetworkInterface>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>Information about one or more network interfaces.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::NetworkInterface>>) -> Self {
            self.network_interfaces = input;
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
        /// Consumes the builder and constructs a [`DescribeNetworkInterfacesOutput`](crate::output::DescribeNetworkInterfacesOutput)
        pub fn build(self) -> crate::output::DescribeNetworkInterfacesOutput {
            crate::output::DescribeNetworkInterfacesOutput {
                network_interfaces: self.network_interfaces,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeNetworkInterfacesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeNetworkInterfacesOutput`](crate::output::DescribeNetworkInterfacesOutput)
    pub fn builder() -> crate::output::describe_network_interfaces_output::Builder {
        crate::output::describe_network_interfaces_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeRegionsOutput {
    /// <p>Information about the Regions.</p>
    pub regions: std::option::Option<std::vec::Vec<crate::model::Region>>,
}
impl DescribeRegionsOutput {
    /// <p>Information about the Regions.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.regions.is_none()`.
    pub fn regions(&self) -> &[crate::model::Region] {
        self.regions.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for DescribeRegionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Regions", &self.regions);
        formatter.finish()
    }
}
/// See [`DescribeRegionsOutput`](crate::output::DescribeRegionsOutput)
pub mod describe_regions_output {
    /// A builder for [`DescribeRegionsOutput`](crate::output::DescribeRegionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) regions: std::option::Option<std::vec::Vec<crate::model::Region>>,
    }
    impl Builder {
        /// Appends an item to `regions`.
        ///
        /// To override the contents of this collection use [`set_regions`](Self::set_regions).
        ///
        /// <p>Information about the Regions.</p>
        pub fn regions(mut self, input: impl std::convert::Into<crate::model::Region>) -> Self {
            let mut v = self.regions.unwrap_or_default();
            v.push(input.into());
            self.regions = Some(v);
            self
        }
        /// <p>Information about the Regions.</p>
        pub fn set_regions(mut self, input: std::option::Option<std::vec::Vec<crate::model::Region>>) -> Self {
            self.regions = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeRegionsOutput`](crate::output::DescribeRegionsOutput)
        pub fn build(self) -> crate::output::DescribeRegionsOutput {
            crate::output::DescribeRegionsOutput {
                regions: self.regions,
            }
        }
    }
}
impl DescribeRegionsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeRegionsOutput`](crate::output::DescribeRegionsOutput)
    pub fn builder() -> crate::output::describe_regions_output::Builder {
        crate::output::describe_regions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeReservedInstancesOfferingsOutput {
    /// <p>A list of Reserved Instances offerings.</p>
    pub reserved_instances_offerings: std::option::Option<std::vec::Vec<crate::model::ReservedInstancesOffering>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeReservedInstancesOfferingsOutput {
    /// <p>A list of Reserved Instances offerings.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.reserved_instances_offerings.is_none()`.
    pub fn reserved_instances_offerings(&self) -> &[crate::model::ReservedInstancesOffering] {
        self.reserved_instances_offerings.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeReservedInstancesOfferingsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ReservedInstancesOfferings", &self.reserved_instances_offerings);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeReservedInstancesOfferingsOutput`](crate::output::DescribeReservedInstancesOfferingsOutput)
pub mod describe_reserved_instances_offerings_output {
    /// A builder for [`DescribeReservedInstancesOfferingsOutput`](crate::output::DescribeReservedInstancesOfferingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) reserved_instances_offerings: std::option::Option<std::vec::Vec<crate::model::ReservedInstancesOffering>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `reserved_instances_offerings`.
        ///
        /// To override the contents of this collection use [`set_reserved_instances_offerings`](Self::set_reserved_instances_offerings).
        ///
        /// <p>A list of Reserved Instances offerings.</p>
        pub fn reserved_instances_offerings(mut self, input: impl std::convert::Into<crate::model::ReservedInstancesOffering>) -> Self {
            let mut v = self.reserved_instances_offerings.unwrap_or_default();
            v.push(input.into());
            self.reserved_instances_offerings = Some(v);
            self
        }
        /// <p>A list of Reserved Instances offerings.</p>
        pub fn set_reserved_instances_offerings(mut self, input: std::option::Option<std::vec::Vec<crate::model::ReservedInstancesOffering>>) -> Self {
            self.reserved_instances_offerings = input;
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
        /// Consumes the builder and constructs a [`DescribeReservedInstancesOfferingsOutput`](crate::output::DescribeReservedInstancesOfferingsOutput)
        pub fn build(self) -> crate::output::DescribeReservedInstancesOfferingsOutput {
            crate::output::DescribeReservedInstancesOfferingsOutput {
                reserved_instances_offerings: self.reserved_instances_offerings,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeReservedInstancesOfferingsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeReservedInstancesOfferingsOutput`](crate::output::DescribeReservedInstancesOfferingsOutput)
    pub fn builder() -> crate::output::describe_reserved_instances_offerings_output::Builder {
        crate::output::describe_reserved_instances_offerings_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeRouteTablesOutput {
    /// <p>Information about one or more route tables.</p>
    pub route_tables: std::option::Option<std::vec::Vec<crate::model::RouteTable>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeRouteTablesOutput {
    /// <p>Information about one or more route tables.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.route_tables.is_none()`.
    pub fn route_tables(&self) -> &[crate::model::RouteTable] {
        self.route_tables.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeRouteTablesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("RouteTables", &self.route_tables);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeRouteTablesOutput`](crate::output::DescribeRouteTablesOutput)
pub mod describe_route_tables_output {
    /// A builder for [`DescribeRouteTablesOutput`](crate::output::DescribeRouteTablesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) route_tables: std::option::Option<std::vec::Vec<crate::model::RouteTable>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `route_tables`.
        ///
        /// To override the contents of this collection use [`set_route_tables`](Self::set_route_tables).
        ///
        /// <p>Information about one or more route tables.</p>
        pub fn route_tables(mut self, input: impl std::convert::Into<crate::model::RouteTable>) -> Self {
            let mut v = self.route_tables.unwrap_or_default();
            v.push(input.into());
            self.route_tables = Some(v);
            self
        }
        /// <p>Information about one or more route tables.</p>
        pub fn set_route_tables(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteTable>>) -> Self {
            self.route_tables = input;
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
        /// Consumes the builder and constructs a [`DescribeRouteTablesOutput`](crate::output::DescribeRouteTablesOutput)
        pub fn build(self) -> crate::output::DescribeRouteTablesOutput {
            crate::output::DescribeRouteTablesOutput {
                route_tables: self.route_tables,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeRouteTablesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeRouteTablesOutput`](crate::output::DescribeRouteTablesOutput)
    pub fn builder() -> crate::output::describe_route_tables_output::Builder {
        crate::output::describe_route_tables_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeSecurityGroupsOutput {
    /// <p>Information about the security groups.</p>
    pub security_groups: std::option::Option<std::vec::Vec<crate::model::SecurityGroup>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeSecurityGroupsOutput {
    /// <p>Information about the security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[crate::model::SecurityGroup] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeSecurityGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeSecurityGroupsOutput`](crate::output::DescribeSecurityGroupsOutput)
pub mod describe_security_groups_output {
    /// A builder for [`DescribeSecurityGroupsOutput`](crate::output::DescribeSecurityGroupsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) security_groups: std::option::Option<std::vec::Vec<crate::model::SecurityGroup>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>Information about the security groups.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<crate::model::SecurityGroup>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>Information about the security groups.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::SecurityGroup>>) -> Self {
            self.security_groups = input;
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
        /// Consumes the builder and constructs a [`DescribeSecurityGroupsOutput`](crate::output::DescribeSecurityGroupsOutput)
        pub fn build(self) -> crate::output::DescribeSecurityGroupsOutput {
            crate::output::DescribeSecurityGroupsOutput {
                security_groups: self.security_groups,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeSecurityGroupsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityGroupsOutput`](crate::output::DescribeSecurityGroupsOutput)
    pub fn builder() -> crate::output::describe_security_groups_output::Builder {
        crate::output::describe_security_groups_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeSpotInstanceRequestsOutput {
    /// <p>One or more Spot Instance requests.</p>
    pub spot_instance_requests: std::option::Option<std::vec::Vec<crate::model::SpotInstanceRequest>>,
    /// <p>The token to use to retrieve the next page of results.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeSpotInstanceRequestsOutput {
    /// <p>One or more Spot Instance requests.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.spot_instance_requests.is_none()`.
    pub fn spot_instance_requests(&self) -> &[crate::model::SpotInstanceRequest] {
        self.spot_instance_requests.as_deref().unwrap_or_default()
    }

    /// <p>The token to use to retrieve the next page of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for DescribeSpotInstanceRequestsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SpotInstanceRequests", &self.spot_instance_requests);
        formatter.field("NextToken", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeSpotInstanceRequestsOutput`](crate::output::DescribeSpotInstanceRequestsOutput)
pub mod describe_spot_instance_requests_output {
    /// A builder for [`DescribeSpotInstanceRequestsOutput`](crate::output::DescribeSpotInstanceRequestsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) spot_instance_requests: std::option::Option<std::vec::Vec<crate::model::SpotInstanceRequest>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `spot_instance_requests`.
        ///
        /// To override the contents of this collection use [`set_spot_instance_requests`](Self::set_spot_instance_requests).
        ///
        /// <p>One or more Spot Instance requests.</p>
        pub fn spot_instance_requests(mut self, input: impl std::convert::Into<crate::model::SpotInstanceRequest>) -> Self {
            let mut v = self.spot_instance_requests.unwrap_or_default();
            v.push(input.into());
            self.spot_instance_requests = Some(v);
            self
        }
        /// <p>One or more Spot Instance requests.</p>
        pub fn set_spot_instance_requests(mut self, input: std::option::Option<std::vec::Vec<crate::model::SpotInstanceRequest>>) -> Self {
            self.spot_instance_requests = input;
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
        /// Consumes the builder and constructs a [`DescribeSpotInstanceRequestsOutput`](crate::output::DescribeSpotInstanceRequestsOutput)
        pub fn build(self) -> crate::output::DescribeSpotInstanceRequestsOutput {
            crate::output::DescribeSpotInstanceRequestsOutput {
                spot_instance_requests: self.spot_instance_requests,
                next_token: self.next_token,
            }
        }
    }
}
impl DescribeSpotInstanceRequestsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSpotInstanceRequestsOutput`](crate::output::DescribeSpotInstanceRequestsOutput)
    pub fn builder() -> crate::output::describe_spot_instance_requests_output::Builder {
        crate::output::describe_spot_instance_requests_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RunInstancesOutput {
    /// <p>[EC2-Classic only] The security groups.</p>
    pub groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>The instances.</p>
    pub instances: std::option::Option<std::vec::Vec<crate::model::Instance>>,
    /// <p>The ID of the AWS account that owns the reservation.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The ID of the requester that launched the instances on your behalf (for example, AWS Management Console or Auto Scaling).</p>
    pub requester_id: std::option::Option<std::string::String>,
    /// <p>The ID of the reservation.</p>
    pub reservation_id: std::option::Option<std::string::String>,
}
impl RunInstancesOutput {
    /// <p>[EC2-Classic only] The security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[crate::model::GroupIdentifier] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The instances.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instances.is_none()`.
    pub fn instances(&self) -> &[crate::model::Instance] {
        self.instances.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the AWS account that owns the reservation.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The ID of the requester that launched the instances on your behalf (for example, AWS Management Console or Auto Scaling).</p>
    pub fn requester_id(&self) -> std::option::Option<&str> {
        self.requester_id.as_deref()
    }

    /// <p>The ID of the reservation.</p>
    pub fn reservation_id(&self) -> std::option::Option<&str> {
        self.reservation_id.as_deref()
    }
}
impl std::fmt::Debug for RunInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Groups", &self.groups);
        formatter.field("Instances", &self.instances);
        formatter.field("OwnerId", &self.owner_id);
        formatter.field("RequesterId", &self.requester_id);
        formatter.field("ReservationId", &self.reservation_id);
        formatter.finish()
    }
}
/// See [`RunInstancesOutput`](crate::output::RunInstancesOutput)
pub mod run_instances_output {
    /// A builder for [`RunInstancesOutput`](crate::output::RunInstancesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) instances: std::option::Option<std::vec::Vec<crate::model::Instance>>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) requester_id: std::option::Option<std::string::String>,
        pub(crate) reservation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>[EC2-Classic only] The security groups.</p>
        pub fn groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>[EC2-Classic only] The security groups.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.groups = input;
            self
        }

        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>The instances.</p>
        pub fn instances(mut self, input: impl std::convert::Into<crate::model::Instance>) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input.into());
            self.instances = Some(v);
            self
        }
        /// <p>The instances.</p>
        pub fn set_instances(mut self, input: std::option::Option<std::vec::Vec<crate::model::Instance>>) -> Self {
            self.instances = input;
            self
        }

        /// <p>The ID of the AWS account that owns the reservation.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the AWS account that owns the reservation.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The ID of the requester that launched the instances on your behalf (for example, AWS Management Console or Auto Scaling).</p>
        pub fn requester_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.requester_id = Some(input.into());
            self
        }
        /// <p>The ID of the requester that launched the instances on your behalf (for example, AWS Management Console or Auto Scaling).</p>
        pub fn set_requester_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.requester_id = input;
            self
        }

        /// <p>The ID of the reservation.</p>
        pub fn reservation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.reservation_id = Some(input.into());
            self
        }
        /// <p>The ID of the reservation.</p>
        pub fn set_reservation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reservation_id = input;
            self
        }
        /// Consumes the builder and constructs a [`RunInstancesOutput`](crate::output::RunInstancesOutput)
        pub fn build(self) -> crate::output::RunInstancesOutput {
            crate::output::RunInstancesOutput {
                groups: self.groups,
                instances: self.instances,
                owner_id: self.owner_id,
                requester_id: self.requester_id,
                reservation_id: self.reservation_id,
            }
        }
    }
}
impl RunInstancesOutput {
    /// Creates a new builder-style object to manufacture [`RunInstancesOutput`](crate::output::RunInstancesOutput)
    pub fn builder() -> crate::output::run_instances_output::Builder {
        crate::output::run_instances_output::Builder::default()
    }
}
