/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CapacityReservationInstancePlatform {
    #[allow(missing_docs)] // documentation missing in model
    LinuxUnix,
    #[allow(missing_docs)] // documentation missing in model
    RedHatEnterpriseLinux,
    #[allow(missing_docs)] // documentation missing in model
    SuseLinux,
    #[allow(missing_docs)] // documentation missing in model
    Windows,
    #[allow(missing_docs)] // documentation missing in model
    WindowsWithSqlServer,
    #[allow(missing_docs)] // documentation missing in model
    WindowsWithSqlServerEnterprise,
    #[allow(missing_docs)] // documentation missing in model
    WindowsWithSqlServerStandard,
    #[allow(missing_docs)] // documentation missing in model
    WindowsWithSqlServerWeb,
    #[allow(missing_docs)] // documentation missing in model
    LinuxWithSqlServerStandard,
    #[allow(missing_docs)] // documentation missing in model
    LinuxWithSqlServerWeb,
    #[allow(missing_docs)] // documentation missing in model
    LinuxWithSqlServerEnterprise,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CapacityReservationInstancePlatform {
    fn from(s: &str) -> Self {
        match s {
            "Linux/UNIX" => CapacityReservationInstancePlatform::LinuxUnix,
            "Red Hat Enterprise Linux" => CapacityReservationInstancePlatform::RedHatEnterpriseLinux,
            "SUSE Linux" => CapacityReservationInstancePlatform::SuseLinux,
            "Windows" => CapacityReservationInstancePlatform::Windows,
            "Windows with SQL Server" => CapacityReservationInstancePlatform::WindowsWithSqlServer,
            "Windows with SQL Server Enterprise" => CapacityReservationInstancePlatform::WindowsWithSqlServerEnterprise,
            "Windows with SQL Server Standard" => CapacityReservationInstancePlatform::WindowsWithSqlServerStandard,
            "Windows with SQL Server Web" => CapacityReservationInstancePlatform::WindowsWithSqlServerWeb,
            "Linux with SQL Server Standard" => CapacityReservationInstancePlatform::LinuxWithSqlServerStandard,
            "Linux with SQL Server Web" => CapacityReservationInstancePlatform::LinuxWithSqlServerWeb,
            "Linux with SQL Server Enterprise" => CapacityReservationInstancePlatform::LinuxWithSqlServerEnterprise,
            other => CapacityReservationInstancePlatform::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CapacityReservationInstancePlatform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CapacityReservationInstancePlatform::from(s))
    }
}
impl CapacityReservationInstancePlatform {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CapacityReservationInstancePlatform::LinuxUnix => "Linux/UNIX",
            CapacityReservationInstancePlatform::RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
            CapacityReservationInstancePlatform::SuseLinux => "SUSE Linux",
            CapacityReservationInstancePlatform::Windows => "Windows",
            CapacityReservationInstancePlatform::WindowsWithSqlServer => "Windows with SQL Server",
            CapacityReservationInstancePlatform::WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
            CapacityReservationInstancePlatform::WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
            CapacityReservationInstancePlatform::WindowsWithSqlServerWeb => "Windows with SQL Server Web",
            CapacityReservationInstancePlatform::LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
            CapacityReservationInstancePlatform::LinuxWithSqlServerWeb => "Linux with SQL Server Web",
            CapacityReservationInstancePlatform::LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
            CapacityReservationInstancePlatform::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Linux/UNIX",
            "Red Hat Enterprise Linux",
            "SUSE Linux",
            "Windows",
            "Windows with SQL Server",
            "Windows with SQL Server Enterprise",
            "Windows with SQL Server Standard",
            "Windows with SQL Server Web",
            "Linux with SQL Server Standard",
            "Linux with SQL Server Web",
            "Linux with SQL Server Enterprise",
        ]
    }
}
impl AsRef<str> for CapacityReservationInstancePlatform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CapacityReservationTenancy {
    #[allow(missing_docs)] // documentation missing in model
    Default,
    #[allow(missing_docs)] // documentation missing in model
    Dedicated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CapacityReservationTenancy {
    fn from(s: &str) -> Self {
        match s {
            "default" => CapacityReservationTenancy::Default,
            "dedicated" => CapacityReservationTenancy::Dedicated,
            other => CapacityReservationTenancy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CapacityReservationTenancy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CapacityReservationTenancy::from(s))
    }
}
impl CapacityReservationTenancy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CapacityReservationTenancy::Default => "default",
            CapacityReservationTenancy::Dedicated => "dedicated",
            CapacityReservationTenancy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "default",
            "dedicated",
        ]
    }
}
impl AsRef<str> for CapacityReservationTenancy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EndDateType {
    #[allow(missing_docs)] // documentation missing in model
    Unlimited,
    #[allow(missing_docs)] // documentation missing in model
    Limited,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EndDateType {
    fn from(s: &str) -> Self {
        match s {
            "unlimited" => EndDateType::Unlimited,
            "limited" => EndDateType::Limited,
            other => EndDateType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EndDateType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EndDateType::from(s))
    }
}
impl EndDateType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            EndDateType::Unlimited => "unlimited",
            EndDateType::Limited => "limited",
            EndDateType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "unlimited",
            "limited",
        ]
    }
}
impl AsRef<str> for EndDateType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceMatchCriteria {
    #[allow(missing_docs)] // documentation missing in model
    Open,
    #[allow(missing_docs)] // documentation missing in model
    Targeted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceMatchCriteria {
    fn from(s: &str) -> Self {
        match s {
            "open" => InstanceMatchCriteria::Open,
            "targeted" => InstanceMatchCriteria::Targeted,
            other => InstanceMatchCriteria::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceMatchCriteria {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceMatchCriteria::from(s))
    }
}
impl InstanceMatchCriteria {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceMatchCriteria::Open => "open",
            InstanceMatchCriteria::Targeted => "targeted",
            InstanceMatchCriteria::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "open",
            "targeted",
        ]
    }
}
impl AsRef<str> for InstanceMatchCriteria {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FlowLogsResourceType {
    #[allow(missing_docs)] // documentation missing in model
    Vpc,
    #[allow(missing_docs)] // documentation missing in model
    Subnet,
    #[allow(missing_docs)] // documentation missing in model
    NetworkInterface,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FlowLogsResourceType {
    fn from(s: &str) -> Self {
        match s {
            "VPC" => FlowLogsResourceType::Vpc,
            "Subnet" => FlowLogsResourceType::Subnet,
            "NetworkInterface" => FlowLogsResourceType::NetworkInterface,
            other => FlowLogsResourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FlowLogsResourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FlowLogsResourceType::from(s))
    }
}
impl FlowLogsResourceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FlowLogsResourceType::Vpc => "VPC",
            FlowLogsResourceType::Subnet => "Subnet",
            FlowLogsResourceType::NetworkInterface => "NetworkInterface",
            FlowLogsResourceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "VPC",
            "Subnet",
            "NetworkInterface",
        ]
    }
}
impl AsRef<str> for FlowLogsResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum TrafficType {
    #[allow(missing_docs)] // documentation missing in model
    Accept,
    #[allow(missing_docs)] // documentation missing in model
    Reject,
    #[allow(missing_docs)] // documentation missing in model
    All,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for TrafficType {
    fn from(s: &str) -> Self {
        match s {
            "ACCEPT" => TrafficType::Accept,
            "REJECT" => TrafficType::Reject,
            "ALL" => TrafficType::All,
            other => TrafficType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrafficType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrafficType::from(s))
    }
}
impl TrafficType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            TrafficType::Accept => "ACCEPT",
            TrafficType::Reject => "REJECT",
            TrafficType::All => "ALL",
            TrafficType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "ACCEPT",
            "REJECT",
            "ALL",
        ]
    }
}
impl AsRef<str> for TrafficType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LogDestinationType {
    #[allow(missing_docs)] // documentation missing in model
    CloudWatchLogs,
    #[allow(missing_docs)] // documentation missing in model
    S3,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LogDestinationType {
    fn from(s: &str) -> Self {
        match s {
            "cloud-watch-logs" => LogDestinationType::CloudWatchLogs,
            "s3" => LogDestinationType::S3,
            other => LogDestinationType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LogDestinationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LogDestinationType::from(s))
    }
}
impl LogDestinationType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            LogDestinationType::CloudWatchLogs => "cloud-watch-logs",
            LogDestinationType::S3 => "s3",
            LogDestinationType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "cloud-watch-logs",
            "s3",
        ]
    }
}
impl AsRef<str> for LogDestinationType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RuleAction {
    #[allow(missing_docs)] // documentation missing in model
    Allow,
    #[allow(missing_docs)] // documentation missing in model
    Deny,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RuleAction {
    fn from(s: &str) -> Self {
        match s {
            "allow" => RuleAction::Allow,
            "deny" => RuleAction::Deny,
            other => RuleAction::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RuleAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RuleAction::from(s))
    }
}
impl RuleAction {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RuleAction::Allow => "allow",
            RuleAction::Deny => "deny",
            RuleAction::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "allow",
            "deny",
        ]
    }
}
impl AsRef<str> for RuleAction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VolumeType {
    #[allow(missing_docs)] // documentation missing in model
    Standard,
    #[allow(missing_docs)] // documentation missing in model
    Io1,
    #[allow(missing_docs)] // documentation missing in model
    Gp2,
    #[allow(missing_docs)] // documentation missing in model
    Sc1,
    #[allow(missing_docs)] // documentation missing in model
    St1,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VolumeType {
    fn from(s: &str) -> Self {
        match s {
            "standard" => VolumeType::Standard,
            "io1" => VolumeType::Io1,
            "gp2" => VolumeType::Gp2,
            "sc1" => VolumeType::Sc1,
            "st1" => VolumeType::St1,
            other => VolumeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VolumeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VolumeType::from(s))
    }
}
impl VolumeType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            VolumeType::Standard => "standard",
            VolumeType::Io1 => "io1",
            VolumeType::Gp2 => "gp2",
            VolumeType::Sc1 => "sc1",
            VolumeType::St1 => "st1",
            VolumeType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "standard",
            "io1",
            "gp2",
            "sc1",
            "st1",
        ]
    }
}
impl AsRef<str> for VolumeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VolumeState {
    #[allow(missing_docs)] // documentation missing in model
    Creating,
    #[allow(missing_docs)] // documentation missing in model
    Available,
    #[allow(missing_docs)] // documentation missing in model
    InUse,
    #[allow(missing_docs)] // documentation missing in model
    Deleting,
    #[allow(missing_docs)] // documentation missing in model
    Deleted,
    #[allow(missing_docs)] // documentation missing in model
    Error,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VolumeState {
    fn from(s: &str) -> Self {
        match s {
            "creating" => VolumeState::Creating,
            "available" => VolumeState::Available,
            "in-use" => VolumeState::InUse,
            "deleting" => VolumeState::Deleting,
            "deleted" => VolumeState::Deleted,
            "error" => VolumeState::Error,
            other => VolumeState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VolumeState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VolumeState::from(s))
    }
}
impl VolumeState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            VolumeState::Creating => "creating",
            VolumeState::Available => "available",
            VolumeState::InUse => "in-use",
            VolumeState::Deleting => "deleting",
            VolumeState::Deleted => "deleted",
            VolumeState::Error => "error",
            VolumeState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "creating",
            "available",
            "in-use",
            "deleting",
            "deleted",
            "error",
        ]
    }
}
impl AsRef<str> for VolumeState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Tenancy {
    #[allow(missing_docs)] // documentation missing in model
    Default,
    #[allow(missing_docs)] // documentation missing in model
    Dedicated,
    #[allow(missing_docs)] // documentation missing in model
    Host,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Tenancy {
    fn from(s: &str) -> Self {
        match s {
            "default" => Tenancy::Default,
            "dedicated" => Tenancy::Dedicated,
            "host" => Tenancy::Host,
            other => Tenancy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Tenancy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Tenancy::from(s))
    }
}
impl Tenancy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            Tenancy::Default => "default",
            Tenancy::Dedicated => "dedicated",
            Tenancy::Host => "host",
            Tenancy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "default",
            "dedicated",
            "host",
        ]
    }
}
impl AsRef<str> for Tenancy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceType {
    #[allow(missing_docs)] // documentation missing in model
    T1Micro,
    #[allow(missing_docs)] // documentation missing in model
    T2Nano,
    #[allow(missing_docs)] // documentation missing in model
    T2Micro,
    #[allow(missing_docs)] // documentation missing in model
    T2Small,
    #[allow(missing_docs)] // documentation missing in model
    T2Medium,
    #[allow(missing_docs)] // documentation missing in model
    T2Large,
    #[allow(missing_docs)] // documentation missing in model
    T2Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    T22xlarge,
    #[allow(missing_docs)] // documentation missing in model
    T3Nano,
    #[allow(missing_docs)] // documentation missing in model
    T3Micro,
    #[allow(missing_docs)] // documentation missing in model
    T3Small,
    #[allow(missing_docs)] // documentation missing in model
    T3Medium,
    #[allow(missing_docs)] // documentation missing in model
    T3Large,
    #[allow(missing_docs)] // documentation missing in model
    T3Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    T32xlarge,
    #[allow(missing_docs)] // documentation missing in model
    T3aNano,
    #[allow(missing_docs)] // documentation missing in model
    T3aMicro,
    #[allow(missing_docs)] // documentation missing in model
    T3aSmall,
    #[allow(missing_docs)] // documentation missing in model
    T3aMedium,
    #[allow(missing_docs)] // documentation missing in model
    T3aLarge,
    #[allow(missing_docs)] // documentation missing in model
    T3aXlarge,
    #[allow(missing_docs)] // documentation missing in model
    T3a2xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M1Small,
    #[allow(missing_docs)] // documentation missing in model
    M1Medium,
    #[allow(missing_docs)] // documentation missing in model
    M1Large,
    #[allow(missing_docs)] // documentation missing in model
    M1Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M3Medium,
    #[allow(missing_docs)] // documentation missing in model
    M3Large,
    #[allow(missing_docs)] // documentation missing in model
    M3Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M32xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M4Large,
    #[allow(missing_docs)] // documentation missing in model
    M4Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M42xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M44xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M410xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M416xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M5Large,
    #[allow(missing_docs)] // documentation missing in model
    M5Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M52xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M54xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M58xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M512xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M516xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M524xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M5Metal,
    #[allow(missing_docs)] // documentation missing in model
    M5aLarge,
    #[allow(missing_docs)] // documentation missing in model
    M5aXlarge,
    #[allow(missing_docs)] // documentation missing in model
    M5a2xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M5a4xlarge,
    #[allow(missing_docs)] // documentation missing in model
    M6gMedium,
    #[allow(missing_docs)] // documentation missing in model
    M6gLarge,
    #[allow(missing_docs)] // documentation missing in model
    M6gXlarge,
    #[allow(missing_docs)] // documentation missing in model
    M6gMetal,
    #[allow(missing_docs)] // documentation missing in model
    C4Large,
    #[allow(missing_docs)] // documentation missing in model
    C4Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C42xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C44xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C48xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C5Large,
    #[allow(missing_docs)] // documentation missing in model
    C5Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C52xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C54xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C59xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C512xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C518xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C524xlarge,
    #[allow(missing_docs)] // documentation missing in model
    C5Metal,
    #[allow(missing_docs)] // documentation missing in model
    C5nLarge,
    #[allow(missing_docs)] // documentation missing in model
    C5nXlarge,
    #[allow(missing_docs)] // documentation missing in model
    C5n18xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R4Large,
    #[allow(missing_docs)] // documentation missing in model
    R4Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R416xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R5Large,
    #[allow(missing_docs)] // documentation missing in model
    R5Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R52xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R54xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R524xlarge,
    #[allow(missing_docs)] // documentation missing in model
    R5Metal,
    #[allow(missing_docs)] // documentation missing in model
    X116xlarge,
    #[allow(missing_docs)] // documentation missing in model
    X132xlarge,
    #[allow(missing_docs)] // documentation missing in model
    X1eXlarge,
    #[allow(missing_docs)] // documentation missing in model
    X1e32xlarge,
    #[allow(missing_docs)] // documentation missing in model
    I3Large,
    #[allow(missing_docs)] // documentation missing in model
    I3Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    I316xlarge,
    #[allow(missing_docs)] // documentation missing in model
    I3Metal,
    #[allow(missing_docs)] // documentation missing in model
    I3enLarge,
    #[allow(missing_docs)] // documentation missing in model
    I3en24xlarge,
    #[allow(missing_docs)] // documentation missing in model
    D2Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    D28xlarge,
    #[allow(missing_docs)] // documentation missing in model
    H12xlarge,
    #[allow(missing_docs)] // documentation missing in model
    H116xlarge,
    #[allow(missing_docs)] // documentation missing in model
    P2Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    P216xlarge,
    #[allow(missing_docs)] // documentation missing in model
    P32xlarge,
    #[allow(missing_docs)] // documentation missing in model
    P316xlarge,
    #[allow(missing_docs)] // documentation missing in model
    P3dn24xlarge,
    #[allow(missing_docs)] // documentation missing in model
    G34xlarge,
    #[allow(missing_docs)] // documentation missing in model
    G3sXlarge,
    #[allow(missing_docs)] // documentation missing in model
    G4dnXlarge,
    #[allow(missing_docs)] // documentation missing in model
    G4dn12xlarge,
    #[allow(missing_docs)] // documentation missing in model
    G4dnMetal,
    #[allow(missing_docs)] // documentation missing in model
    F12xlarge,
    #[allow(missing_docs)] // documentation missing in model
    F116xlarge,
    #[allow(missing_docs)] // documentation missing in model
    Inf1Xlarge,
    #[allow(missing_docs)] // documentation missing in model
    Inf124xlarge,
    #[allow(missing_docs)] // documentation missing in model
    A1Medium,
    #[allow(missing_docs)] // documentation missing in model
    A1Large,
    #[allow(missing_docs)] // documentation missing in model
    A14xlarge,
    #[allow(missing_docs)] // documentation missing in model
    A1Metal,
    #[allow(missing_docs)] // documentation missing in model
    Z1dLarge,
    #[allow(missing_docs)] // documentation missing in model
    Z1d12xlarge,
    #[allow(missing_docs)] // documentation missing in model
    U6tb1Metal,
    #[allow(missing_docs)] // documentation missing in model
    U24tb1Metal,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceType {
    fn from(s: &str) -> Self {
        match s {
            "t1.micro" => InstanceType::T1Micro,
            "t2.nano" => InstanceType::T2Nano,
            "t2.micro" => InstanceType::T2Micro,
            "t2.small" => InstanceType::T2Small,
            "t2.medium" => InstanceType::T2Medium,
            "t2.large" => InstanceType::T2Large,
            "t2.xlarge" => InstanceType::T2Xlarge,
            "t2.2xlarge" => InstanceType::T22xlarge,
            "t3.nano" => InstanceType::T3Nano,
            "t3.micro" => InstanceType::T3Micro,
            "t3.small" => InstanceType::T3Small,
            "t3.medium" => InstanceType::T3Medium,
            "t3.large" => InstanceType::T3Large,
            "t3.xlarge" => InstanceType::T3Xlarge,
            "t3.2xlarge" => InstanceType::T32xlarge,
            "t3a.nano" => InstanceType::T3aNano,
            "t3a.micro" => InstanceType::T3aMicro,
            "t3a.small" => InstanceType::T3aSmall,
            "t3a.medium" => InstanceType::T3aMedium,
            "t3a.large" => InstanceType::T3aLarge,
            "t3a.xlarge" => InstanceType::T3aXlarge,
            "t3a.2xlarge" => InstanceType::T3a2xlarge,
            "m1.small" => InstanceType::M1Small,
            "m1.medium" => InstanceType::M1Medium,
            "m1.large" => InstanceType::M1Large,
            "m1.xlarge" => InstanceType::M1Xlarge,
            "m3.medium" => InstanceType::M3Medium,
            "m3.large" => InstanceType::M3Large,
            "m3.xlarge" => InstanceType::M3Xlarge,
            "m3.2xlarge" => InstanceType::M32xlarge,
            "m4.large" => InstanceType::M4Large,
            "m4.xlarge" => InstanceType::M4Xlarge,
            "m4.2xlarge" => InstanceType::M42xlarge,
            "m4.4xlarge" => InstanceType::M44xlarge,
            "m4.10xlarge" => InstanceType::M410xlarge,
            "m4.16xlarge" => InstanceType::M416xlarge,
            "m5.large" => InstanceType::M5Large,
            "m5.xlarge" => InstanceType::M5Xlarge,
            "m5.2xlarge" => InstanceType::M52xlarge,
            "m5.4xlarge" => InstanceType::M54xlarge,
            "m5.8xlarge" => InstanceType::M58xlarge,
            "m5.12xlarge" => InstanceType::M512xlarge,
            "m5.16xlarge" => InstanceType::M516xlarge,
            "m5.24xlarge" => InstanceType::M524xlarge,
            "m5.metal" => InstanceType::M5Metal,
            "m5a.large" => InstanceType::M5aLarge,
            "m5a.xlarge" => InstanceType::M5aXlarge,
            "m5a.2xlarge" => InstanceType::M5a2xlarge,
            "m5a.4xlarge" => InstanceType::M5a4xlarge,
            "m6g.medium" => InstanceType::M6gMedium,
            "m6g.large" => InstanceType::M6gLarge,
            "m6g.xlarge" => InstanceType::M6gXlarge,
            "m6g.metal" => InstanceType::M6gMetal,
            "c4.large" => InstanceType::C4Large,
            "c4.xlarge" => InstanceType::C4Xlarge,
            "c4.2xlarge" => InstanceType::C42xlarge,
            "c4.4xlarge" => InstanceType::C44xlarge,
            "c4.8xlarge" => InstanceType::C48xlarge,
            "c5.large" => InstanceType::C5Large,
            "c5.xlarge" => InstanceType::C5Xlarge,
            "c5.2xlarge" => InstanceType::C52xlarge,
            "c5.4xlarge" => InstanceType::C54xlarge,
            "c5.9xlarge" => InstanceType::C59xlarge,
            "c5.12xlarge" => InstanceType::C512xlarge,
            "c5.18xlarge" => InstanceType::C518xlarge,
            "c5.24xlarge" => InstanceType::C524xlarge,
            "c5.metal" => InstanceType::C5Metal,
            "c5n.large" => InstanceType::C5nLarge,
            "c5n.xlarge" => InstanceType::C5nXlarge,
            "c5n.18xlarge" => InstanceType::C5n18xlarge,
            "r4.large" => InstanceType::R4Large,
            "r4.xlarge" => InstanceType::R4Xlarge,
            "r4.16xlarge" => InstanceType::R416xlarge,
            "r5.large" => InstanceType::R5Large,
            "r5.xlarge" => InstanceType::R5Xlarge,
            "r5.2xlarge" => InstanceType::R52xlarge,
            "r5.4xlarge" => InstanceType::R54xlarge,
            "r5.24xlarge" => InstanceType::R524xlarge,
            "r5.metal" => InstanceType::R5Metal,
            "x1.16xlarge" => InstanceType::X116xlarge,
            "x1.32xlarge" => InstanceType::X132xlarge,
            "x1e.xlarge" => InstanceType::X1eXlarge,
            "x1e.32xlarge" => InstanceType::X1e32xlarge,
            "i3.large" => InstanceType::I3Large,
            "i3.xlarge" => InstanceType::I3Xlarge,
            "i3.16xlarge" => InstanceType::I316xlarge,
            "i3.metal" => InstanceType::I3Metal,
            "i3en.large" => InstanceType::I3enLarge,
            "i3en.24xlarge" => InstanceType::I3en24xlarge,
            "d2.xlarge" => InstanceType::D2Xlarge,
            "d2.8xlarge" => InstanceType::D28xlarge,
            "h1.2xlarge" => InstanceType::H12xlarge,
            "h1.16xlarge" => InstanceType::H116xlarge,
            "p2.xlarge" => InstanceType::P2Xlarge,
            "p2.16xlarge" => InstanceType::P216xlarge,
            "p3.2xlarge" => InstanceType::P32xlarge,
            "p3.16xlarge" => InstanceType::P316xlarge,
            "p3dn.24xlarge" => InstanceType::P3dn24xlarge,
            "g3.4xlarge" => InstanceType::G34xlarge,
            "g3s.xlarge" => InstanceType::G3sXlarge,
            "g4dn.xlarge" => InstanceType::G4dnXlarge,
            "g4dn.12xlarge" => InstanceType::G4dn12xlarge,
            "g4dn.metal" => InstanceType::G4dnMetal,
            "f1.2xlarge" => InstanceType::F12xlarge,
            "f1.16xlarge" => InstanceType::F116xlarge,
            "inf1.xlarge" => InstanceType::Inf1Xlarge,
            "inf1.24xlarge" => InstanceType::Inf124xlarge,
            "a1.medium" => InstanceType::A1Medium,
            "a1.large" => InstanceType::A1Large,
            "a1.4xlarge" => InstanceType::A14xlarge,
            "a1.metal" => InstanceType::A1Metal,
            "z1d.large" => InstanceType::Z1dLarge,
            "z1d.12xlarge" => InstanceType::Z1d12xlarge,
            "u-6tb1.metal" => InstanceType::U6tb1Metal,
            "u-24tb1.metal" => InstanceType::U24tb1Metal,
            other => InstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceType::from(s))
    }
}
impl InstanceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceType::T1Micro => "t1.micro",
            InstanceType::T2Nano => "t2.nano",
            InstanceType::T2Micro => "t2.micro",
            InstanceType::T2Small => "t2.small",
            InstanceType::T2Medium => "t2.medium",
            InstanceType::T2Large => "t2.large",
            InstanceType::T2Xlarge => "t2.xlarge",
            InstanceType::T22xlarge => "t2.2xlarge",
            InstanceType::T3Nano => "t3.nano",
            InstanceType::T3Micro => "t3.micro",
            InstanceType::T3Small => "t3.small",
            InstanceType::T3Medium => "t3.medium",
            InstanceType::T3Large => "t3.large",
            InstanceType::T3Xlarge => "t3.xlarge",
            InstanceType::T32xlarge => "t3.2xlarge",
            InstanceType::T3aNano => "t3a.nano",
            InstanceType::T3aMicro => "t3a.micro",
            InstanceType::T3aSmall => "t3a.small",
            InstanceType::T3aMedium => "t3a.medium",
            InstanceType::T3aLarge => "t3a.large",
            InstanceType::T3aXlarge => "t3a.xlarge",
            InstanceType::T3a2xlarge => "t3a.2xlarge",
            InstanceType::M1Small => "m1.small",
            InstanceType::M1Medium => "m1.medium",
            InstanceType::M1Large => "m1.large",
            InstanceType::M1Xlarge => "m1.xlarge",
            InstanceType::M3Medium => "m3.medium",
            InstanceType::M3Large => "m3.large",
            InstanceType::M3Xlarge => "m3.xlarge",
            InstanceType::M32xlarge => "m3.2xlarge",
            InstanceType::M4Large => "m4.large",
            InstanceType::M4Xlarge => "m4.xlarge",
            InstanceType::M42xlarge => "m4.2xlarge",
            InstanceType::M44xlarge => "m4.4xlarge",
            InstanceType::M410xlarge => "m4.10xlarge",
            InstanceType::M416xlarge => "m4.16xlarge",
            InstanceType::M5Large => "m5.large",
            InstanceType::M5Xlarge => "m5.xlarge",
            InstanceType::M52xlarge => "m5.2xlarge",
            InstanceType::M54xlarge => "m5.4xlarge",
            InstanceType::M58xlarge => "m5.8xlarge",
            InstanceType::M512xlarge => "m5.12xlarge",
            InstanceType::M516xlarge => "m5.16xlarge",
            InstanceType::M524xlarge => "m5.24xlarge",
            InstanceType::M5Metal => "m5.metal",
            InstanceType::M5aLarge => "m5a.large",
            InstanceType::M5aXlarge => "m5a.xlarge",
            InstanceType::M5a2xlarge => "m5a.2xlarge",
            InstanceType::M5a4xlarge => "m5a.4xlarge",
            InstanceType::M6gMedium => "m6g.medium",
            InstanceType::M6gLarge => "m6g.large",
            InstanceType::M6gXlarge => "m6g.xlarge",
            InstanceType::M6gMetal => "m6g.metal",
            InstanceType::C4Large => "c4.large",
            InstanceType::C4Xlarge => "c4.xlarge",
            InstanceType::C42xlarge => "c4.2xlarge",
            InstanceType::C44xlarge => "c4.4xlarge",
            InstanceType::C48xlarge => "c4.8xlarge",
            InstanceType::C5Large => "c5.large",
            InstanceType::C5Xlarge => "c5.xlarge",
            InstanceType::C52xlarge => "c5.2xlarge",
            InstanceType::C54xlarge => "c5.4xlarge",
            InstanceType::C59xlarge => "c5.9xlarge",
            InstanceType::C512xlarge => "c5.12xlarge",
            InstanceType::C518xlarge => "c5.18xlarge",
            InstanceType::C524xlarge => "c5.24xlarge",
            InstanceType::C5Metal => "c5.metal",
            InstanceType::C5nLarge => "c5n.large",
            InstanceType::C5nXlarge => "c5n.xlarge",
            InstanceType::C5n18xlarge => "c5n.18xlarge",
            InstanceType::R4Large => "r4.large",
            InstanceType::R4Xlarge => "r4.xlarge",
            InstanceType::R416xlarge => "r4.16xlarge",
            InstanceType::R5Large => "r5.large",
            InstanceType::R5Xlarge => "r5.xlarge",
            InstanceType::R52xlarge => "r5.2xlarge",
            InstanceType::R54xlarge => "r5.4xlarge",
            InstanceType::R524xlarge => "r5.24xlarge",
            InstanceType::R5Metal => "r5.metal",
            InstanceType::X116xlarge => "x1.16xlarge",
            InstanceType::X132xlarge => "x1.32xlarge",
            InstanceType::X1eXlarge => "x1e.xlarge",
            InstanceType::X1e32xlarge => "x1e.32xlarge",
            InstanceType::I3Large => "i3.large",
            InstanceType::I3Xlarge => "i3.xlarge",
            InstanceType::I316xlarge => "i3.16xlarge",
            InstanceType::I3Metal => "i3.metal",
            InstanceType::I3enLarge => "i3en.large",
            InstanceType::I3en24xlarge => "i3en.24xlarge",
            InstanceType::D2Xlarge => "d2.xlarge",
            InstanceType::D28xlarge => "d2.8xlarge",
            InstanceType::H12xlarge => "h1.2xlarge",
            InstanceType::H116xlarge => "h1.16xlarge",
            InstanceType::P2Xlarge => "p2.xlarge",
            InstanceType::P216xlarge => "p2.16xlarge",
            InstanceType::P32xlarge => "p3.2xlarge",
            InstanceType::P316xlarge => "p3.16xlarge",
            InstanceType::P3dn24xlarge => "p3dn.24xlarge",
            InstanceType::G34xlarge => "g3.4xlarge",
            InstanceType::G3sXlarge => "g3s.xlarge",
            InstanceType::G4dnXlarge => "g4dn.xlarge",
            InstanceType::G4dn12xlarge => "g4dn.12xlarge",
            InstanceType::G4dnMetal => "g4dn.metal",
            InstanceType::F12xlarge => "f1.2xlarge",
            InstanceType::F116xlarge => "f1.16xlarge",
            InstanceType::Inf1Xlarge => "inf1.xlarge",
            InstanceType::Inf124xlarge => "inf1.24xlarge",
            InstanceType::A1Medium => "a1.medium",
            InstanceType::A1Large => "a1.large",
            InstanceType::A14xlarge => "a1.4xlarge",
            InstanceType::A1Metal => "a1.metal",
            InstanceType::Z1dLarge => "z1d.large",
            InstanceType::Z1d12xlarge => "z1d.12xlarge",
            InstanceType::U6tb1Metal => "u-6tb1.metal",
            InstanceType::U24tb1Metal => "u-24tb1.metal",
            InstanceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "t1.micro",
            "t2.nano",
            "t2.micro",
            "t2.small",
            "t2.medium",
            "t2.large",
            "t2.xlarge",
            "t2.2xlarge",
            "t3.nano",
            "t3.micro",
            "t3.small",
            "t3.medium",
            "t3.large",
            "t3.xlarge",
            "t3.2xlarge",
            "t3a.nano",
            "t3a.micro",
            "t3a.small",
            "t3a.medium",
            "t3a.large",
            "t3a.xlarge",
            "t3a.2xlarge",
            "m1.small",
            "m1.medium",
            "m1.large",
            "m1.xlarge",
            "m3.medium",
            "m3.large",
            "m3.xlarge",
            "m3.2xlarge",
            "m4.large",
            "m4.xlarge",
            "m4.2xlarge",
            "m4.4xlarge",
            "m4.10xlarge",
            "m4.16xlarge",
            "m5.large",
            "m5.xlarge",
            "m5.2xlarge",
            "m5.4xlarge",
            "m5.8xlarge",
            "m5.12xlarge",
            "m5.16xlarge",
            "m5.24xlarge",
            "m5.metal",
            "m5a.large",
            "m5a.xlarge",
            "m5a.2xlarge",
            "m5a.4xlarge",
            "m6g.medium",
            "m6g.large",
            "m6g.xlarge",
            "m6g.metal",
            "c4.large",
            "c4.xlarge",
            "c4.2xlarge",
            "c4.4xlarge",
            "c4.8xlarge",
            "c5.large",
            "c5.xlarge",
            "c5.2xlarge",
            "c5.4xlarge",
            "c5.9xlarge",
            "c5.12xlarge",
            "c5.18xlarge",
            "c5.24xlarge",
            "c5.metal",
            "c5n.large",
            "c5n.xlarge",
            "c5n.18xlarge",
            "r4.large",
            "r4.xlarge",
            "r4.16xlarge",
            "r5.large",
            "r5.xlarge",
            "r5.2xlarge",
            "r5.4xlarge",
            "r5.24xlarge",
            "r5.metal",
            "x1.16xlarge",
            "x1.32xlarge",
            "x1e.xlarge",
            "x1e.32xlarge",
            "i3.large",
            "i3.xlarge",
            "i3.16xlarge",
            "i3.metal",
            "i3en.large",
            "i3en.24xlarge",
            "d2.xlarge",
            "d2.8xlarge",
            "h1.2xlarge",
            "h1.16xlarge",
            "p2.xlarge",
            "p2.16xlarge",
            "p3.2xlarge",
            "p3.16xlarge",
            "p3dn.24xlarge",
            "g3.4xlarge",
            "g3s.xlarge",
            "g4dn.xlarge",
            "g4dn.12xlarge",
            "g4dn.metal",
            "f1.2xlarge",
            "f1.16xlarge",
            "inf1.xlarge",
            "inf1.24xlarge",
            "a1.medium",
            "a1.large",
            "a1.4xlarge",
            "a1.metal",
            "z1d.large",
            "z1d.12xlarge",
            "u-6tb1.metal",
            "u-24tb1.metal",
        ]
    }
}
impl AsRef<str> for InstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum OfferingClassType {
    #[allow(missing_docs)] // documentation missing in model
    Standard,
    #[allow(missing_docs)] // documentation missing in model
    Convertible,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for OfferingClassType {
    fn from(s: &str) -> Self {
        match s {
            "standard" => OfferingClassType::Standard,
            "convertible" => OfferingClassType::Convertible,
            other => OfferingClassType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OfferingClassType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OfferingClassType::from(s))
    }
}
impl OfferingClassType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            OfferingClassType::Standard => "standard",
            OfferingClassType::Convertible => "convertible",
            OfferingClassType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "standard",
            "convertible",
        ]
    }
}
impl AsRef<str> for OfferingClassType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RIProductDescription {
    #[allow(missing_docs)] // documentation missing in model
    LinuxUnix,
    #[allow(missing_docs)] // documentation missing in model
    LinuxUnixAmazonVpc,
    #[allow(missing_docs)] // documentation missing in model
    Windows,
    #[allow(missing_docs)] // documentation missing in model
    WindowsAmazonVpc,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RIProductDescription {
    fn from(s: &str) -> Self {
        match s {
            "Linux/UNIX" => RIProductDescription::LinuxUnix,
            "Linux/UNIX (Amazon VPC)" => RIProductDescription::LinuxUnixAmazonVpc,
            "Windows" => RIProductDescription::Windows,
            "Windows (Amazon VPC)" => RIProductDescription::WindowsAmazonVpc,
            other => RIProductDescription::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RIProductDescription {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RIProductDescription::from(s))
    }
}
impl RIProductDescription {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RIProductDescription::LinuxUnix => "Linux/UNIX",
            RIProductDescription::LinuxUnixAmazonVpc => "Linux/UNIX (Amazon VPC)",
            RIProductDescription::Windows => "Windows",
            RIProductDescription::WindowsAmazonVpc => "Windows (Amazon VPC)",
            RIProductDescription::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Linux/UNIX",
            "Linux/UNIX (Amazon VPC)",
            "Windows",
            "Windows (Amazon VPC)",
        ]
    }
}
impl AsRef<str> for RIProductDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum OfferingTypeValues {
    #[allow(missing_docs)] // documentation missing in model
    HeavyUtilization,
    #[allow(missing_docs)] // documentation missing in model
    MediumUtilization,
    #[allow(missing_docs)] // documentation missing in model
    LightUtilization,
    #[allow(missing_docs)] // documentation missing in model
    NoUpfront,
    #[allow(missing_docs)] // documentation missing in model
    PartialUpfront,
    #[allow(missing_docs)] // documentation missing in model
    AllUpfront,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for OfferingTypeValues {
    fn from(s: &str) -> Self {
        match s {
            "Heavy Utilization" => OfferingTypeValues::HeavyUtilization,
            "Medium Utilization" => OfferingTypeValues::MediumUtilization,
            "Light Utilization" => OfferingTypeValues::LightUtilization,
            "No Upfront" => OfferingTypeValues::NoUpfront,
            "Partial Upfront" => OfferingTypeValues::PartialUpfront,
            "All Upfront" => OfferingTypeValues::AllUpfront,
            other => OfferingTypeValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OfferingTypeValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OfferingTypeValues::from(s))
    }
}
impl OfferingTypeValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            OfferingTypeValues::HeavyUtilization => "Heavy Utilization",
            OfferingTypeValues::MediumUtilization => "Medium Utilization",
            OfferingTypeValues::LightUtilization => "Light Utilization",
            OfferingTypeValues::NoUpfront => "No Upfront",
            OfferingTypeValues::PartialUpfront => "Partial Upfront",
            OfferingTypeValues::AllUpfront => "All Upfront",
            OfferingTypeValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Heavy Utilization",
            "Medium Utilization",
            "Light Utilization",
            "No Upfront",
            "Partial Upfront",
            "All Upfront",
        ]
    }
}
impl AsRef<str> for OfferingTypeValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ShutdownBehavior {
    #[allow(missing_docs)] // documentation missing in model
    Stop,
    #[allow(missing_docs)] // documentation missing in model
    Terminate,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ShutdownBehavior {
    fn from(s: &str) -> Self {
        match s {
            "stop" => ShutdownBehavior::Stop,
            "terminate" => ShutdownBehavior::Terminate,
            other => ShutdownBehavior::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ShutdownBehavior {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ShutdownBehavior::from(s))
    }
}
impl ShutdownBehavior {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ShutdownBehavior::Stop => "stop",
            ShutdownBehavior::Terminate => "terminate",
            ShutdownBehavior::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "stop",
            "terminate",
        ]
    }
}
impl AsRef<str> for ShutdownBehavior {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>A filter name and value pair that is used to return a more specific list of results from a describe operation. Filters can be used to match a set of resources by specific criteria, such as tags, attributes, or IDs.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Filter {
    /// <p>The name of the filter. Filter names are case-sensitive.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The filter values. Filter values are case-sensitive.</p>
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl Filter {
    /// <p>The name of the filter. Filter names are case-sensitive.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The filter values. Filter values are case-sensitive.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.values.is_none()`.
    pub fn values(&self) -> &[std::string::String] {
        self.values.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Name", &self.name);
        formatter.field("Values", &self.values);
        formatter.finish()
    }
}
/// See [`Filter`](crate::model::Filter)
pub mod filter {
    /// A builder for [`Filter`](crate::model::Filter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The name of the filter. Filter names are case-sensitive.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the filter. Filter names are case-sensitive.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }

        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        /// <p>The filter values. Filter values are case-sensitive.</p>
        pub fn values(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        /// <p>The filter values. Filter values are case-sensitive.</p>
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`Filter`](crate::model::Filter)
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                name: self.name,
                values: self.values,
            }
        }
    }
}
impl Filter {
    /// Creates a new builder-style object to manufacture [`Filter`](crate::model::Filter)
    pub fn builder() -> crate::model::filter::Builder {
        crate::model::filter::Builder::default()
    }
}

/// <p>Describes a tag.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Tag {
    /// <p>The key of the tag.</p>
    /// <p>Constraints: Tag keys are case-sensitive and accept a maximum of 127 Unicode characters. May not begin with <code>aws:</code>.</p>
    pub key: std::option::Option<std::string::String>,
    /// <p>The value of the tag.</p>
    /// <p>Constraints: Tag values are case-sensitive and accept a maximum of 255 Unicode characters.</p>
    pub value: std::option::Option<std::string::String>,
}
impl Tag {
    /// <p>The key of the tag.</p>
    /// <p>Constraints: Tag keys are case-sensitive and accept a maximum of 127 Unicode characters. May not begin with <code>aws:</code>.</p>
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }

    /// <p>The value of the tag.</p>
    /// <p>Constraints: Tag values are case-sensitive and accept a maximum of 255 Unicode characters.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Key", &self.key);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The key of the tag.</p>
        /// <p>Constraints: Tag keys are case-sensitive and accept a maximum of 127 Unicode characters. May not begin with <code>aws:</code>.</p>
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        /// <p>The key of the tag.</p>
        /// <p>Constraints: Tag keys are case-sensitive and accept a maximum of 127 Unicode characters. May not begin with <code>aws:</code>.</p>
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }

        /// <p>The value of the tag.</p>
        /// <p>Constraints: Tag values are case-sensitive and accept a maximum of 255 Unicode characters.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The value of the tag.</p>
        /// <p>Constraints: Tag values are case-sensitive and accept a maximum of 255 Unicode characters.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

/// <p>The tags to apply to a resource when the resource is being created.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct TagSpecification {
    /// <p>The type of resource to tag.</p>
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    /// <p>The tags to apply to the resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl TagSpecification {
    /// <p>The type of resource to tag.</p>
    pub fn resource_type(&self) -> std::option::Option<&crate::model::ResourceType> {
        self.resource_type.as_ref()
    }

    /// <p>The tags to apply to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for TagSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("ResourceType", &self.resource_type);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`TagSpecification`](crate::model::TagSpecification)
pub mod tag_specification {
    /// A builder for [`TagSpecification`](crate::model::TagSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The type of resource to tag.</p>
        pub fn resource_type(mut self, input: crate::model::ResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        /// <p>The type of resource to tag.</p>
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::ResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to apply to the resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>The tags to apply to the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`TagSpecification`](crate::model::TagSpecification)
        pub fn build(self) -> crate::model::TagSpecification {
            crate::model::TagSpecification {
                resource_type: self.resource_type,
                tags: self.tags,
            }
        }
    }
}
impl TagSpecification {
    /// Creates a new builder-style object to manufacture [`TagSpecification`](crate::model::TagSpecification)
    pub fn builder() -> crate::model::tag_specification::Builder {
        crate::model::tag_specification::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ResourceType {
    #[allow(missing_docs)] // documentation missing in model
    ClientVpnEndpoint,
    #[allow(missing_docs)] // documentation missing in model
    CustomerGateway,
    #[allow(missing_docs)] // documentation missing in model
    DedicatedHost,
    #[allow(missing_docs)] // documentation missing in model
    DhcpOptions,
    #[allow(missing_docs)] // documentation missing in model
    ElasticIp,
    #[allow(missing_docs)] // documentation missing in model
    ElasticGpu,
    #[allow(missing_docs)] // documentation missing in model
    Fleet,
    #[allow(missing_docs)] // documentation missing in model
    FpgaImage,
    #[allow(missing_docs)] // documentation missing in model
    HostReservation,
    #[allow(missing_docs)] // documentation missing in model
    Image,
    #[allow(missing_docs)] // documentation missing in model
    Instance,
    #[allow(missing_docs)] // documentation missing in model
    InternetGateway,
    #[allow(missing_docs)] // documentation missing in model
    KeyPair,
    #[allow(missing_docs)] // documentation missing in model
    LaunchTemplate,
    #[allow(missing_docs)] // documentation missing in model
    Natgateway,
    #[allow(missing_docs)] // documentation missing in model
    NetworkAcl,
    #[allow(missing_docs)] // documentation missing in model
    NetworkInterface,
    #[allow(missing_docs)] // documentation missing in model
    PlacementGroup,
    #[allow(missing_docs)] // documentation missing in model
    ReservedInstances,
    #[allow(missing_docs)] // documentation missing in model
    RouteTable,
    #[allow(missing_docs)] // documentation missing in model
    SecurityGroup,
    #[allow(missing_docs)] // documentation missing in model
    Snapshot,
    #[allow(missing_docs)] // documentation missing in model
    SpotFleetRequest,
    #[allow(missing_docs)] // documentation missing in model
    SpotInstancesRequest,
    #[allow(missing_docs)] // documentation missing in model
    Subnet,
    #[allow(missing_docs)] // documentation missing in model
    TrafficMirrorFilter,
    #[allow(missing_docs)] // documentation missing in model
    TrafficMirrorSession,
    #[allow(missing_docs)] // documentation missing in model
    TrafficMirrorTarget,
    #[allow(missing_docs)] // documentation missing in model
    TransitGateway,
    #[allow(missing_docs)] // documentation missing in model
    TransitGatewayAttachment,
    #[allow(missing_docs)] // documentation missing in model
    TransitGatewayRouteTable,
    #[allow(missing_docs)] // documentation missing in model
    Volume,
    #[allow(missing_docs)] // documentation missing in model
    Vpc,
    #[allow(missing_docs)] // documentation missing in model
    VpcFlowLog,
    #[allow(missing_docs)] // documentation missing in model
    VpcPeeringConnection,
    #[allow(missing_docs)] // documentation missing in model
    VpnConnection,
    #[allow(missing_docs)] // documentation missing in model
    VpnGateway,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        match s {
            "client-vpn-endpoint" => ResourceType::ClientVpnEndpoint,
            "customer-gateway" => ResourceType::CustomerGateway,
            "dedicated-host" => ResourceType::DedicatedHost,
            "dhcp-options" => ResourceType::DhcpOptions,
            "elastic-ip" => ResourceType::ElasticIp,
            "elastic-gpu" => ResourceType::ElasticGpu,
            "fleet" => ResourceType::Fleet,
            "fpga-image" => ResourceType::FpgaImage,
            "host-reservation" => ResourceType::HostReservation,
            "image" => ResourceType::Image,
            "instance" => ResourceType::Instance,
            "internet-gateway" => ResourceType::InternetGateway,
            "key-pair" => ResourceType::KeyPair,
            "launch-template" => ResourceType::LaunchTemplate,
            "natgateway" => ResourceType::Natgateway,
            "network-acl" => ResourceType::NetworkAcl,
            "network-interface" => ResourceType::NetworkInterface,
            "placement-group" => ResourceType::PlacementGroup,
            "reserved-instances" => ResourceType::ReservedInstances,
            "route-table" => ResourceType::RouteTable,
            "security-group" => ResourceType::SecurityGroup,
            "snapshot" => ResourceType::Snapshot,
            "spot-fleet-request" => ResourceType::SpotFleetRequest,
            "spot-instances-request" => ResourceType::SpotInstancesRequest,
            "subnet" => ResourceType::Subnet,
            "traffic-mirror-filter" => ResourceType::TrafficMirrorFilter,
            "traffic-mirror-session" => ResourceType::TrafficMirrorSession,
            "traffic-mirror-target" => ResourceType::TrafficMirrorTarget,
            "transit-gateway" => ResourceType::TransitGateway,
            "transit-gateway-attachment" => ResourceType::TransitGatewayAttachment,
            "transit-gateway-route-table" => ResourceType::TransitGatewayRouteTable,
            "volume" => ResourceType::Volume,
            "vpc" => ResourceType::Vpc,
            "vpc-flow-log" => ResourceType::VpcFlowLog,
            "vpc-peering-connection" => ResourceType::VpcPeeringConnection,
            "vpn-connection" => ResourceType::VpnConnection,
            "vpn-gateway" => ResourceType::VpnGateway,
            other => ResourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ResourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ResourceType::from(s))
    }
}
impl ResourceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::ClientVpnEndpoint => "client-vpn-endpoint",
            ResourceType::CustomerGateway => "customer-gateway",
            ResourceType::DedicatedHost => "dedicated-host",
            ResourceType::DhcpOptions => "dhcp-options",
            ResourceType::ElasticIp => "elastic-ip",
            ResourceType::ElasticGpu => "elastic-gpu",
            ResourceType::Fleet => "fleet",
            ResourceType::FpgaImage => "fpga-image",
            ResourceType::HostReservation => "host-reservation",
            ResourceType::Image => "image",
            ResourceType::Instance => "instance",
            ResourceType::InternetGateway => "internet-gateway",
            ResourceType::KeyPair => "key-pair",
            ResourceType::LaunchTemplate => "launch-template",
            ResourceType::Natgateway => "natgateway",
            ResourceType::NetworkAcl => "network-acl",
            ResourceType::NetworkInterface => "network-interface",
            ResourceType::PlacementGroup => "placement-group",
            ResourceType::ReservedInstances => "reserved-instances",
            ResourceType::RouteTable => "route-table",
            ResourceType::SecurityGroup => "security-group",
            ResourceType::Snapshot => "snapshot",
            ResourceType::SpotFleetRequest => "spot-fleet-request",
            ResourceType::SpotInstancesRequest => "spot-instances-request",
            ResourceType::Subnet => "subnet",
            ResourceType::TrafficMirrorFilter => "traffic-mirror-filter",
            ResourceType::TrafficMirrorSession => "traffic-mirror-session",
            ResourceType::TrafficMirrorTarget => "traffic-mirror-target",
            ResourceType::TransitGateway => "transit-gateway",
            ResourceType::TransitGatewayAttachment => "transit-gateway-attachment",
            ResourceType::TransitGatewayRouteTable => "transit-gateway-route-table",
            ResourceType::Volume => "volume",
            ResourceType::Vpc => "vpc",
            ResourceType::VpcFlowLog => "vpc-flow-log",
            ResourceType::VpcPeeringConnection => "vpc-peering-connection",
            ResourceType::VpnConnection => "vpn-connection",
            ResourceType::VpnGateway => "vpn-gateway",
            ResourceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "client-vpn-endpoint",
            "customer-gateway",
            "dedicated-host",
            "dhcp-options",
            "elastic-ip",
            "elastic-gpu",
            "fleet",
            "fpga-image",
            "host-reservation",
            "image",
            "instance",
            "internet-gateway",
            "key-pair",
            "launch-template",
            "natgateway",
            "network-acl",
            "network-interface",
            "placement-group",
            "reserved-instances",
            "route-table",
            "security-group",
            "snapshot",
            "spot-fleet-request",
            "spot-instances-request",
            "subnet",
            "traffic-mirror-filter",
            "traffic-mirror-session",
            "traffic-mirror-target",
            "transit-gateway",
            "transit-gateway-attachment",
            "transit-gateway-route-table",
            "volume",
            "vpc",
            "vpc-flow-log",
            "vpc-peering-connection",
            "vpn-connection",
            "vpn-gateway",
        ]
    }
}
impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a block device for an EBS volume.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct EbsBlockDevice {
    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The number of I/O operations per second (IOPS) that the volume supports. For <code>io1</code> volumes, this represents the number of IOPS that are provisioned for the volume. For <code>gp2</code> volumes, this represents the baseline performance of the volume and the rate at which the volume accumulates I/O credits for bursting.</p>
    pub iops: std::option::Option<i32>,
    /// <p>The ID of the snapshot.</p>
    pub snapshot_id: std::option::Option<std::string::String>,
    /// <p>The size of the volume, in GiB.</p>
    pub volume_size: std::option::Option<i32>,
    /// <p>The volume type.</p>
    pub volume_type: std::option::Option<crate::model::VolumeType>,
    /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
    pub kms_key_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the encryption state of an EBS volume is changed while being restored from a backing snapshot. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled.</p>
    pub encrypted: std::option::Option<bool>,
}
impl EbsBlockDevice {
    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The number of I/O operations per second (IOPS) that the volume supports. For <code>io1</code> volumes, this represents the number of IOPS that are provisioned for the volume. For <code>gp2</code> volumes, this represents the baseline performance of the volume and the rate at which the volume accumulates I/O credits for bursting.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }

    /// <p>The ID of the snapshot.</p>
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// <p>The size of the volume, in GiB.</p>
    pub fn volume_size(&self) -> std::option::Option<i32> {
        self.volume_size
    }

    /// <p>The volume type.</p>
    pub fn volume_type(&self) -> std::option::Option<&crate::model::VolumeType> {
        self.volume_type.as_ref()
    }

    /// <p>Identifier (key ID, key alias, ID ARN, or alias ARN) for a customer managed CMK under which the EBS volume is encrypted.</p>
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// <p>Indicates whether the encryption state of an EBS volume is changed while being restored from a backing snapshot. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled.</p>
    pub fn encrypted(&self) -> std::option::Option<bool> {
        self.encrypted
    }
}
impl std::fmt::Debug for EbsBlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Iops", &self.iops);
        formatter.field("SnapshotId", &self.snapshot_id);
        formatter.field("VolumeSize", &self.volume_size);
        formatter.enum_field("VolumeType", &self.volume_type);
        formatter.field("KmsKeyId", &self.kms_key_id);
        formatter.field("Encrypted", &self.encrypted);
        formatter.finish()
    }
}
/// See [`EbsBlockDevice`](crate::model::EbsBlockDevice)
pub mod ebs_block_device {
    /// A builder for [`EbsBlockDevice`](crate::model::EbsBlockDevice)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) snapshot_id: std::option::Option<std::string::String>,
        pub(crate) volume_size: std::option::Option<i32>,
        pub(crate) volume_type: std::option::Option<crate::model::VolumeType>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) encrypted: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The number of I/O operations per second (IOPS) that the volume supports. For <code>io1</code> volumes, this represents the number of IOPS that are provisioned for the volume. For <code>gp2</code> volumes, this represents the baseline performance of the volume and the rate at which the volume accumulates I/O credits for bursting.</p>
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        /// <p>The number of I/O operations per second (IOPS) that the volume supports. For <code>io1</code> volumes, this represents the number of IOPS that are provisioned for the volume. For <code>gp2</code> volumes, this represents the baseline performance of the volume and the rate at which the volume accumulates I/O credits for bursting.</p>
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
            self
        }

        /// <p>The ID of the snapshot.</p>
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// <p>The ID of the snapshot.</p>
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }

        /// <p>The size of the volume, in GiB.</p>
        pub fn volume_size(mut self, input: i32) -> Self {
            self.volume_size = Some(input);
            self
        }
        /// <p>The size of the volume, in GiB.</p>
        pub fn set_volume_size(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size = input;
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

        /// <p>Indicates whether the encryption state of an EBS volume is changed while being restored from a backing snapshot. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled.</p>
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        /// <p>Indicates whether the encryption state of an EBS volume is changed while being restored from a backing snapshot. The effect of setting the encryption state to <code>true</code> depends on the volume origin (new or from a snapshot), starting encryption state, ownership, and whether encryption by default is enabled.</p>
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }
        /// Consumes the builder and constructs a [`EbsBlockDevice`](crate::model::EbsBlockDevice)
        pub fn build(self) -> crate::model::EbsBlockDevice {
            crate::model::EbsBlockDevice {
                delete_on_termination: self.delete_on_termination,
                iops: self.iops,
                snapshot_id: self.snapshot_id,
                volume_size: self.volume_size,
                volume_type: self.volume_type,
                kms_key_id: self.kms_key_id,
                encrypted: self.encrypted,
            }
        }
    }
}
impl EbsBlockDevice {
    /// Creates a new builder-style object to manufacture [`EbsBlockDevice`](crate::model::EbsBlockDevice)
    pub fn builder() -> crate::model::ebs_block_device::Builder {
        crate::model::ebs_block_device::Builder::default()
    }
}

/// <p>Describes a block device mapping.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct BlockDeviceMapping {
    /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
    pub device_name: std::option::Option<std::string::String>,
    /// <p>The virtual device name (<code>ephemeral</code>N). Instance store volumes are numbered starting from 0.</p>
    pub virtual_name: std::option::Option<std::string::String>,
    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub ebs: std::option::Option<crate::model::EbsBlockDevice>,
    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub no_device: std::option::Option<std::string::String>,
}
impl BlockDeviceMapping {
    /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
    pub fn device_name(&self) -> std::option::Option<&str> {
        self.device_name.as_deref()
    }

    /// <p>The virtual device name (<code>ephemeral</code>N). Instance store volumes are numbered starting from 0.</p>
    pub fn virtual_name(&self) -> std::option::Option<&str> {
        self.virtual_name.as_deref()
    }

    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub fn ebs(&self) -> std::option::Option<&crate::model::EbsBlockDevice> {
        self.ebs.as_ref()
    }

    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub fn no_device(&self) -> std::option::Option<&str> {
        self.no_device.as_deref()
    }
}
impl std::fmt::Debug for BlockDeviceMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DeviceName", &self.device_name);
        formatter.field("VirtualName", &self.virtual_name);
        formatter.field("Ebs", &self.ebs);
        formatter.field("NoDevice", &self.no_device);
        formatter.finish()
    }
}
/// See [`BlockDeviceMapping`](crate::model::BlockDeviceMapping)
pub mod block_device_mapping {
    /// A builder for [`BlockDeviceMapping`](crate::model::BlockDeviceMapping)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device_name: std::option::Option<std::string::String>,
        pub(crate) virtual_name: std::option::Option<std::string::String>,
        pub(crate) ebs: std::option::Option<crate::model::EbsBlockDevice>,
        pub(crate) no_device: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
        pub fn device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.device_name = Some(input.into());
            self
        }
        /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
        pub fn set_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device_name = input;
            self
        }

        /// <p>The virtual device name (<code>ephemeral</code>N). Instance store volumes are numbered starting from 0.</p>
        pub fn virtual_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_name = Some(input.into());
            self
        }
        /// <p>The virtual device name (<code>ephemeral</code>N). Instance store volumes are numbered starting from 0.</p>
        pub fn set_virtual_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_name = input;
            self
        }

        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn ebs(mut self, input: crate::model::EbsBlockDevice) -> Self {
            self.ebs = Some(input);
            self
        }
        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn set_ebs(mut self, input: std::option::Option<crate::model::EbsBlockDevice>) -> Self {
            self.ebs = input;
            self
        }

        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn no_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.no_device = Some(input.into());
            self
        }
        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn set_no_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.no_device = input;
            self
        }
        /// Consumes the builder and constructs a [`BlockDeviceMapping`](crate::model::BlockDeviceMapping)
        pub fn build(self) -> crate::model::BlockDeviceMapping {
            crate::model::BlockDeviceMapping {
                device_name: self.device_name,
                virtual_name: self.virtual_name,
                ebs: self.ebs,
                no_device: self.no_device,
            }
        }
    }
}
impl BlockDeviceMapping {
    /// Creates a new builder-style object to manufacture [`BlockDeviceMapping`](crate::model::BlockDeviceMapping)
    pub fn builder() -> crate::model::block_device_mapping::Builder {
        crate::model::block_device_mapping::Builder::default()
    }
}

/// <p>Describes the placement of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Placement {
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The affinity setting for the instance on the Dedicated Host.</p>
    pub affinity: std::option::Option<std::string::String>,
    /// <p>The name of the placement group the instance is in.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The number of the partition the instance is in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub partition_number: std::option::Option<i32>,
    /// <p>The ID of the Dedicated Host on which the instance resides.</p>
    pub host_id: std::option::Option<std::string::String>,
    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for the <code>ImportInstance</code> command.</p>
    pub tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>Reserved for future use.</p>
    pub spread_domain: std::option::Option<std::string::String>,
    /// <p>The ARN of the host resource group in which to launch the instances.</p>
    pub host_resource_group_arn: std::option::Option<std::string::String>,
}
impl Placement {
    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The affinity setting for the instance on the Dedicated Host.</p>
    pub fn affinity(&self) -> std::option::Option<&str> {
        self.affinity.as_deref()
    }

    /// <p>The name of the placement group the instance is in.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The number of the partition the instance is in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub fn partition_number(&self) -> std::option::Option<i32> {
        self.partition_number
    }

    /// <p>The ID of the Dedicated Host on which the instance resides.</p>
    pub fn host_id(&self) -> std::option::Option<&str> {
        self.host_id.as_deref()
    }

    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for the <code>ImportInstance</code> command.</p>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.tenancy.as_ref()
    }

    /// <p>Reserved for future use.</p>
    pub fn spread_domain(&self) -> std::option::Option<&str> {
        self.spread_domain.as_deref()
    }

    /// <p>The ARN of the host resource group in which to launch the instances.</p>
    pub fn host_resource_group_arn(&self) -> std::option::Option<&str> {
        self.host_resource_group_arn.as_deref()
    }
}
impl std::fmt::Debug for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Affinity", &self.affinity);
        formatter.field("GroupName", &self.group_name);
        formatter.field("PartitionNumber", &self.partition_number);
        formatter.field("HostId", &self.host_id);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.field("SpreadDomain", &self.spread_domain);
        formatter.field("HostResourceGroupArn", &self.host_resource_group_arn);
        formatter.finish()
    }
}
/// See [`Placement`](crate::model::Placement)
pub mod placement {
    /// A builder for [`Placement`](crate::model::Placement)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) affinity: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) partition_number: std::option::Option<i32>,
        pub(crate) host_id: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) spread_domain: std::option::Option<std::string::String>,
        pub(crate) host_resource_group_arn: std::option::Option<std::string::String>,
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

        /// <p>The affinity setting for the instance on the Dedicated Host.</p>
        pub fn affinity(mut self, input: impl Into<std::string::String>) -> Self {
            self.affinity = Some(input.into());
            self
        }
        /// <p>The affinity setting for the instance on the Dedicated Host.</p>
        pub fn set_affinity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.affinity = input;
            self
        }

        /// <p>The name of the placement group the instance is in.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the placement group the instance is in.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The number of the partition the instance is in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn partition_number(mut self, input: i32) -> Self {
            self.partition_number = Some(input);
            self
        }
        /// <p>The number of the partition the instance is in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn set_partition_number(mut self, input: std::option::Option<i32>) -> Self {
            self.partition_number = input;
            self
        }

        /// <p>The ID of the Dedicated Host on which the instance resides.</p>
        pub fn host_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_id = Some(input.into());
            self
        }
        /// <p>The ID of the Dedicated Host on which the instance resides.</p>
        pub fn set_host_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_id = input;
            self
        }

        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for the <code>ImportInstance</code> command.</p>
        pub fn tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for the <code>ImportInstance</code> command.</p>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.tenancy = input;
            self
        }

        /// <p>Reserved for future use.</p>
        pub fn spread_domain(mut self, input: impl Into<std::string::String>) -> Self {
            self.spread_domain = Some(input.into());
            self
        }
        /// <p>Reserved for future use.</p>
        pub fn set_spread_domain(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spread_domain = input;
            self
        }

        /// <p>The ARN of the host resource group in which to launch the instances.</p>
        pub fn host_resource_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_resource_group_arn = Some(input.into());
            self
        }
        /// <p>The ARN of the host resource group in which to launch the instances.</p>
        pub fn set_host_resource_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_resource_group_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`Placement`](crate::model::Placement)
        pub fn build(self) -> crate::model::Placement {
            crate::model::Placement {
                availability_zone: self.availability_zone,
                affinity: self.affinity,
                group_name: self.group_name,
                partition_number: self.partition_number,
                host_id: self.host_id,
                tenancy: self.tenancy,
                spread_domain: self.spread_domain,
                host_resource_group_arn: self.host_resource_group_arn,
            }
        }
    }
}
impl Placement {
    /// Creates a new builder-style object to manufacture [`Placement`](crate::model::Placement)
    pub fn builder() -> crate::model::placement::Builder {
        crate::model::placement::Builder::default()
    }
}

/// <p>Describes an IPv6 address.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceIpv6Address {
    /// <p>The IPv6 address.</p>
    pub ipv6_address: std::option::Option<std::string::String>,
}
impl InstanceIpv6Address {
    /// <p>The IPv6 address.</p>
    pub fn ipv6_address(&self) -> std::option::Option<&str> {
        self.ipv6_address.as_deref()
    }
}
impl std::fmt::Debug for InstanceIpv6Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Ipv6Address", &self.ipv6_address);
        formatter.finish()
    }
}
/// See [`InstanceIpv6Address`](crate::model::InstanceIpv6Address)
pub mod instance_ipv6_address {
    /// A builder for [`InstanceIpv6Address`](crate::model::InstanceIpv6Address)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ipv6_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv6 address.</p>
        pub fn ipv6_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_address = Some(input.into());
            self
        }
        /// <p>The IPv6 address.</p>
        pub fn set_ipv6_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_address = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceIpv6Address`](crate::model::InstanceIpv6Address)
        pub fn build(self) -> crate::model::InstanceIpv6Address {
            crate::model::InstanceIpv6Address {
                ipv6_address: self.ipv6_address,
            }
        }
    }
}
impl InstanceIpv6Address {
    /// Creates a new builder-style object to manufacture [`InstanceIpv6Address`](crate::model::InstanceIpv6Address)
    pub fn builder() -> crate::model::instance_ipv6_address::Builder {
        crate::model::instance_ipv6_address::Builder::default()
    }
}

/// <p>Describes a secondary private IPv4 address for a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct PrivateIpAddressSpecification {
    /// <p>Indicates whether the private IPv4 address is the primary private IPv4 address. Only one IPv4 address can be designated as primary.</p>
    pub primary: std::option::Option<bool>,
    /// <p>The private IPv4 addresses.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
}
impl PrivateIpAddressSpecification {
    /// <p>Indicates whether the private IPv4 address is the primary private IPv4 address. Only one IPv4 address can be designated as primary.</p>
    pub fn primary(&self) -> std::option::Option<bool> {
        self.primary
    }

    /// <p>The private IPv4 addresses.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }
}
impl std::fmt::Debug for PrivateIpAddressSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Primary", &self.primary);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.finish()
    }
}
/// See [`PrivateIpAddressSpecification`](crate::model::PrivateIpAddressSpecification)
pub mod private_ip_address_specification {
    /// A builder for [`PrivateIpAddressSpecification`](crate::model::PrivateIpAddressSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) primary: std::option::Option<bool>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Indicates whether the private IPv4 address is the primary private IPv4 address. Only one IPv4 address can be designated as primary.</p>
        pub fn primary(mut self, input: bool) -> Self {
            self.primary = Some(input);
            self
        }
        /// <p>Indicates whether the private IPv4 address is the primary private IPv4 address. Only one IPv4 address can be designated as primary.</p>
        pub fn set_primary(mut self, input: std::option::Option<bool>) -> Self {
            self.primary = input;
            self
        }

        /// <p>The private IPv4 addresses.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The private IPv4 addresses.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }
        /// Consumes the builder and constructs a [`PrivateIpAddressSpecification`](crate::model::PrivateIpAddressSpecification)
        pub fn build(self) -> crate::model::PrivateIpAddressSpecification {
            crate::model::PrivateIpAddressSpecification {
                primary: self.primary,
                private_ip_address: self.private_ip_address,
            }
        }
    }
}
impl PrivateIpAddressSpecification {
    /// Creates a new builder-style object to manufacture [`PrivateIpAddressSpecification`](crate::model::PrivateIpAddressSpecification)
    pub fn builder() -> crate::model::private_ip_address_specification::Builder {
        crate::model::private_ip_address_specification::Builder::default()
    }
}

/// <p>Describes a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceNetworkInterfaceSpecification {
    /// <p>Indicates whether to assign a public IPv4 address to an instance you launch in a VPC. The public IP address can only be assigned to a network interface for eth0, and can only be assigned to a new network interface, not an existing one.</p>
    pub associate_public_ip_address: std::option::Option<bool>,
    /// <p>If set to <code>true</code>, the interface is deleted when the instance is terminated. You can specify <code>true</code> only if creating a new network interface when launching an instance.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The description of the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The position of the network interface in the attachment order. A primary network interface has a device index of 0.</p>
    pub device_index: std::option::Option<i32>,
    /// <p>The IDs of the security groups for the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
    pub ipv6_address_count: std::option::Option<i32>,
    /// <p>One or more IPv6 addresses to assign to the network interface. You cannot specify this option and the option to assign a number of IPv6 addresses in the same request.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
    /// <p>The ID of the network interface. If you are creating a Spot Fleet, omit this parameter because you can’t specify a network interface ID in a launch specification.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address of the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>One or more private IPv4 addresses to assign to the network interface. Only one private IPv4 address can be designated as primary.</p>
    pub private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
    /// <p>The number of secondary private IPv4 addresses. You can't specify this option and specify more than one private IP address using the private IP addresses option.</p>
    pub secondary_private_ip_address_count: std::option::Option<i32>,
    /// <p>The ID of the subnet associated with the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>. If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
    pub interface_type: std::option::Option<std::string::String>,
}
impl InstanceNetworkInterfaceSpecification {
    /// <p>Indicates whether to assign a public IPv4 address to an instance you launch in a VPC. The public IP address can only be assigned to a network interface for eth0, and can only be assigned to a new network interface, not an existing one.</p>
    pub fn associate_public_ip_address(&self) -> std::option::Option<bool> {
        self.associate_public_ip_address
    }

    /// <p>If set to <code>true</code>, the interface is deleted when the instance is terminated. You can specify <code>true</code> only if creating a new network interface when launching an instance.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The description of the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The position of the network interface in the attachment order. A primary network interface has a device index of 0.</p>
    pub fn device_index(&self) -> std::option::Option<i32> {
        self.device_index
    }

    /// <p>The IDs of the security groups for the network interface. Applies only if creating a network interface when launching an instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[std::string::String] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The number of IPv6 addresses to associate with the primary network interface. Amazon EC2 chooses the IPv6 addresses from the range of your subnet.</p>
    pub fn ipv6_address_count(&self) -> std::option::Option<i32> {
        self.ipv6_address_count
    }

    /// <p>One or more IPv6 addresses to assign to the network interface. You cannot specify this option and the option to assign a number of IPv6 addresses in the same request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::InstanceIpv6Address] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the network interface. If you are creating a Spot Fleet, omit this parameter because you can’t specify a network interface ID in a launch specification.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>The private IPv4 address of the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>One or more private IPv4 addresses to assign to the network interface. Only one private IPv4 address can be designated as primary.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.private_ip_addresses.is_none()`.
    pub fn private_ip_addresses(&self) -> &[crate::model::PrivateIpAddressSpecification] {
        self.private_ip_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The number of secondary private IPv4 addresses. You can't specify this option and specify more than one private IP address using the private IP addresses option.</p>
    pub fn secondary_private_ip_address_count(&self) -> std::option::Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// <p>The ID of the subnet associated with the network interface. Applies only if creating a network interface when launching an instance.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>. If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
    pub fn interface_type(&self) -> std::option::Option<&str> {
        self.interface_type.as_deref()
    }
}
impl std::fmt::Debug for InstanceNetworkInterfaceSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AssociatePublicIpAddress", &self.associate_public_ip_address);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Description", &self.description);
        formatter.field("DeviceIndex", &self.device_index);
        formatter.field("Groups", &self.groups);
        formatter.field("Ipv6AddressCount", &self.ipv6_address_count);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("PrivateIpAddresses", &self.private_ip_addresses);
        formatter.field("SecondaryPrivateIpAddressCount", &self.secondary_private_ip_address_count);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("InterfaceType", &self.interface_type);
        formatter.finish()
    }
}
/// See [`InstanceNetworkInterfaceSpecification`](crate::model::InstanceNetworkInterfaceSpecification)
pub mod instance_network_interface_specification {
    /// A builder for [`InstanceNetworkInterfaceSpecification`](crate::model::InstanceNetworkInterfaceSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) associate_public_ip_address: std::option::Option<bool>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) device_index: std::option::Option<i32>,
        pub(crate) groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) ipv6_address_count: std::option::Option<i32>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
        pub(crate) secondary_private_ip_address_count: std::option::Option<i32>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) interface_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Indicates whether to assign a public IPv4 address to an instance you launch in a VPC. The public IP address can only be assigned to a network interface for eth0, and can only be assigned to a new network interface, not an existing one.</p>
        pub fn associate_public_ip_address(mut self, input: bool) -> Self {
            self.associate_public_ip_address = Some(input);
            self
        }
        /// <p>Indicates whether to assign a public IPv4 address to an instance you launch in a VPC. The public IP address can only be assigned to a network interface for eth0, and can only be assigned to a new network interface, not an existing one.</p>
        pub fn set_associate_public_ip_address(mut self, input: std::option::Option<bool>) -> Self {
            self.associate_public_ip_address = input;
            self
        }

        /// <p>If set to <code>true</code>, the interface is deleted when the instance is terminated. You can specify <code>true</code> only if creating a new network interface when launching an instance.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>If set to <code>true</code>, the interface is deleted when the instance is terminated. You can specify <code>true</code> only if creating a new network interface when launching an instance.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The description of the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description of the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The position of the network interface in the attachment order. A primary network interface has a device index of 0.</p>
        pub fn device_index(mut self, input: i32) -> Self {
            self.device_index = Some(input);
            self
        }
        /// <p>The position of the network interface in the attachment order. A primary network interface has a device index of 0.</p>
        pub fn set_device_index(mut self, input: std::option::Option<i32>) -> Self {
            self.device_index = input;
            self
        }

        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>The IDs of the security groups for the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>The IDs of the security groups for the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.groups = input;
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
        /// <p>One or more IPv6 addresses to assign to the network interface. You cannot specify this option and the option to assign a number of IPv6 addresses in the same request.</p>
        pub fn ipv6_addresses(mut self, input: impl std::convert::Into<crate::model::InstanceIpv6Address>) -> Self {
            let mut v = self.ipv6_addresses.unwrap_or_default();
            v.push(input.into());
            self.ipv6_addresses = Some(v);
            self
        }
        /// <p>One or more IPv6 addresses to assign to the network interface. You cannot specify this option and the option to assign a number of IPv6 addresses in the same request.</p>
        pub fn set_ipv6_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>) -> Self {
            self.ipv6_addresses = input;
            self
        }

        /// <p>The ID of the network interface. If you are creating a Spot Fleet, omit this parameter because you can’t specify a network interface ID in a launch specification.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface. If you are creating a Spot Fleet, omit this parameter because you can’t specify a network interface ID in a launch specification.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }

        /// <p>The private IPv4 address of the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The private IPv4 address of the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }

        /// Appends an item to `private_ip_addresses`.
        ///
        /// To override the contents of this collection use [`set_private_ip_addresses`](Self::set_private_ip_addresses).
        ///
        /// <p>One or more private IPv4 addresses to assign to the network interface. Only one private IPv4 address can be designated as primary.</p>
        pub fn private_ip_addresses(mut self, input: impl std::convert::Into<crate::model::PrivateIpAddressSpecification>) -> Self {
            let mut v = self.private_ip_addresses.unwrap_or_default();
            v.push(input.into());
            self.private_ip_addresses = Some(v);
            self
        }
        /// <p>One or more private IPv4 addresses to assign to the network interface. Only one private IPv4 address can be designated as primary.</p>
        pub fn set_private_ip_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>) -> Self {
            self.private_ip_addresses = input;
            self
        }

        /// <p>The number of secondary private IPv4 addresses. You can't specify this option and specify more than one private IP address using the private IP addresses option.</p>
        pub fn secondary_private_ip_address_count(mut self, input: i32) -> Self {
            self.secondary_private_ip_address_count = Some(input);
            self
        }
        /// <p>The number of secondary private IPv4 addresses. You can't specify this option and specify more than one private IP address using the private IP addresses option.</p>
        pub fn set_secondary_private_ip_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.secondary_private_ip_address_count = input;
            self
        }

        /// <p>The ID of the subnet associated with the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>The ID of the subnet associated with the network interface. Applies only if creating a network interface when launching an instance.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }

        /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>. If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
        pub fn interface_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.interface_type = Some(input.into());
            self
        }
        /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>. If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
        pub fn set_interface_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interface_type = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceNetworkInterfaceSpecification`](crate::model::InstanceNetworkInterfaceSpecification)
        pub fn build(self) -> crate::model::InstanceNetworkInterfaceSpecification {
            crate::model::InstanceNetworkInterfaceSpecification {
                associate_public_ip_address: self.associate_public_ip_address,
                delete_on_termination: self.delete_on_termination,
                description: self.description,
                device_index: self.device_index,
                groups: self.groups,
                ipv6_address_count: self.ipv6_address_count,
                ipv6_addresses: self.ipv6_addresses,
                network_interface_id: self.network_interface_id,
                private_ip_address: self.private_ip_address,
                private_ip_addresses: self.private_ip_addresses,
                secondary_private_ip_address_count: self.secondary_private_ip_address_count,
                subnet_id: self.subnet_id,
                interface_type: self.interface_type,
            }
        }
    }
}
impl InstanceNetworkInterfaceSpecification {
    /// Creates a new builder-style object to manufacture [`InstanceNetworkInterfaceSpecification`](crate::model::InstanceNetworkInterfaceSpecification)
    pub fn builder() -> crate::model::instance_network_interface_specification::Builder {
        crate::model::instance_network_interface_specification::Builder::default()
    }
}

/// <p>Describes the monitoring of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RunInstancesMonitoringEnabled {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub enabled: std::option::Option<bool>,
}
impl RunInstancesMonitoringEnabled {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
}
impl std::fmt::Debug for RunInstancesMonitoringEnabled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Enabled", &self.enabled);
        formatter.finish()
    }
}
/// See [`RunInstancesMonitoringEnabled`](crate::model::RunInstancesMonitoringEnabled)
pub mod run_instances_monitoring_enabled {
    /// A builder for [`RunInstancesMonitoringEnabled`](crate::model::RunInstancesMonitoringEnabled)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`RunInstancesMonitoringEnabled`](crate::model::RunInstancesMonitoringEnabled)
        pub fn build(self) -> crate::model::RunInstancesMonitoringEnabled {
            crate::model::RunInstancesMonitoringEnabled {
                enabled: self.enabled,
            }
        }
    }
}
impl RunInstancesMonitoringEnabled {
    /// Creates a new builder-style object to manufacture [`RunInstancesMonitoringEnabled`](crate::model::RunInstancesMonitoringEnabled)
    pub fn builder() -> crate::model::run_instances_monitoring_enabled::Builder {
        crate::model::run_instances_monitoring_enabled::Builder::default()
    }
}

/// <p>Describes an IAM instance profile.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IamInstanceProfileSpecification {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the instance profile.</p>
    pub name: std::option::Option<std::string::String>,
}
impl IamInstanceProfileSpecification {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }

    /// <p>The name of the instance profile.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for IamInstanceProfileSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Arn", &self.arn);
        formatter.field("Name", &self.name);
        formatter.finish()
    }
}
/// See [`IamInstanceProfileSpecification`](crate::model::IamInstanceProfileSpecification)
pub mod iam_instance_profile_specification {
    /// A builder for [`IamInstanceProfileSpecification`](crate::model::IamInstanceProfileSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }

        /// <p>The name of the instance profile.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the instance profile.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`IamInstanceProfileSpecification`](crate::model::IamInstanceProfileSpecification)
        pub fn build(self) -> crate::model::IamInstanceProfileSpecification {
            crate::model::IamInstanceProfileSpecification {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}
impl IamInstanceProfileSpecification {
    /// Creates a new builder-style object to manufacture [`IamInstanceProfileSpecification`](crate::model::IamInstanceProfileSpecification)
    pub fn builder() -> crate::model::iam_instance_profile_specification::Builder {
        crate::model::iam_instance_profile_specification::Builder::default()
    }
}

/// <p>A specification for an Elastic Graphics accelerator.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ElasticGpuSpecification {
    /// <p>The type of Elastic Graphics accelerator.</p>
    pub r#type: std::option::Option<std::string::String>,
}
impl ElasticGpuSpecification {
    /// <p>The type of Elastic Graphics accelerator.</p>
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }
}
impl std::fmt::Debug for ElasticGpuSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Type", &self.r#type);
        formatter.finish()
    }
}
/// See [`ElasticGpuSpecification`](crate::model::ElasticGpuSpecification)
pub mod elastic_gpu_specification {
    /// A builder for [`ElasticGpuSpecification`](crate::model::ElasticGpuSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The type of Elastic Graphics accelerator.</p>
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        /// <p>The type of Elastic Graphics accelerator.</p>
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`ElasticGpuSpecification`](crate::model::ElasticGpuSpecification)
        pub fn build(self) -> crate::model::ElasticGpuSpecification {
            crate::model::ElasticGpuSpecification {
                r#type: self.r#type,
            }
        }
    }
}
impl ElasticGpuSpecification {
    /// Creates a new builder-style object to manufacture [`ElasticGpuSpecification`](crate::model::ElasticGpuSpecification)
    pub fn builder() -> crate::model::elastic_gpu_specification::Builder {
        crate::model::elastic_gpu_specification::Builder::default()
    }
}

/// <p>Describes an elastic inference accelerator.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ElasticInferenceAccelerator {
    /// <p>The type of elastic inference accelerator. The possible values are <code>eia1.medium</code>, <code>eia1.large</code>, <code>eia1.xlarge</code>, <code>eia2.medium</code>, <code>eia2.large</code>, and <code>eia2.xlarge</code>.</p>
    pub r#type: std::option::Option<std::string::String>,
    /// <p>The number of elastic inference accelerators to attach to the instance.</p>
    pub count: std::option::Option<i32>,
}
impl ElasticInferenceAccelerator {
    /// <p>The type of elastic inference accelerator. The possible values are <code>eia1.medium</code>, <code>eia1.large</code>, <code>eia1.xlarge</code>, <code>eia2.medium</code>, <code>eia2.large</code>, and <code>eia2.xlarge</code>.</p>
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }

    /// <p>The number of elastic inference accelerators to attach to the instance.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }
}
impl std::fmt::Debug for ElasticInferenceAccelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Type", &self.r#type);
        formatter.field("Count", &self.count);
        formatter.finish()
    }
}
/// See [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
pub mod elastic_inference_accelerator {
    /// A builder for [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<std::string::String>,
        pub(crate) count: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The type of elastic inference accelerator. The possible values are <code>eia1.medium</code>, <code>eia1.large</code>, <code>eia1.xlarge</code>, <code>eia2.medium</code>, <code>eia2.large</code>, and <code>eia2.xlarge</code>.</p>
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        /// <p>The type of elastic inference accelerator. The possible values are <code>eia1.medium</code>, <code>eia1.large</code>, <code>eia1.xlarge</code>, <code>eia2.medium</code>, <code>eia2.large</code>, and <code>eia2.xlarge</code>.</p>
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }

        /// <p>The number of elastic inference accelerators to attach to the instance.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The number of elastic inference accelerators to attach to the instance.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }
        /// Consumes the builder and constructs a [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
        pub fn build(self) -> crate::model::ElasticInferenceAccelerator {
            crate::model::ElasticInferenceAccelerator {
                r#type: self.r#type,
                count: self.count,
            }
        }
    }
}
impl ElasticInferenceAccelerator {
    /// Creates a new builder-style object to manufacture [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
    pub fn builder() -> crate::model::elastic_inference_accelerator::Builder {
        crate::model::elastic_inference_accelerator::Builder::default()
    }
}

/// <p>The launch template to use. You must specify either the launch template ID or launch template name in the request, but not both.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateSpecification {
    /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
    pub launch_template_id: std::option::Option<std::string::String>,
    /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
    pub launch_template_name: std::option::Option<std::string::String>,
    /// <p>The version number of the launch template. Default: The default version for the launch template.</p>
    pub version: std::option::Option<std::string::String>,
}
impl LaunchTemplateSpecification {
    /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
    pub fn launch_template_id(&self) -> std::option::Option<&str> {
        self.launch_template_id.as_deref()
    }

    /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
    pub fn launch_template_name(&self) -> std::option::Option<&str> {
        self.launch_template_name.as_deref()
    }

    /// <p>The version number of the launch template. Default: The default version for the launch template.</p>
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateId", &self.launch_template_id);
        formatter.field("LaunchTemplateName", &self.launch_template_name);
        formatter.field("Version", &self.version);
        formatter.finish()
    }
}
/// See [`LaunchTemplateSpecification`](crate::model::LaunchTemplateSpecification)
pub mod launch_template_specification {
    /// A builder for [`LaunchTemplateSpecification`](crate::model::LaunchTemplateSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_id: std::option::Option<std::string::String>,
        pub(crate) launch_template_name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
        pub fn launch_template_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.launch_template_id = Some(input.into());
            self
        }
        /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
        pub fn set_launch_template_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launch_template_id = input;
            self
        }

        /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
        pub fn launch_template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.launch_template_name = Some(input.into());
            self
        }
        /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
        pub fn set_launch_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launch_template_name = input;
            self
        }

        /// <p>The version number of the launch template. Default: The default version for the launch template.</p>
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        /// <p>The version number of the launch template. Default: The default version for the launch template.</p>
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateSpecification`](crate::model::LaunchTemplateSpecification)
        pub fn build(self) -> crate::model::LaunchTemplateSpecification {
            crate::model::LaunchTemplateSpecification {
                launch_template_id: self.launch_template_id,
                launch_template_name: self.launch_template_name,
                version: self.version,
            }
        }
    }
}
impl LaunchTemplateSpecification {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateSpecification`](crate::model::LaunchTemplateSpecification)
    pub fn builder() -> crate::model::launch_template_specification::Builder {
        crate::model::launch_template_specification::Builder::default()
    }
}

/// <p>The options for Spot Instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotMarketOptions {
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub max_price: std::option::Option<std::string::String>,
    /// <p>The Spot Instance request type.</p>
    pub spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
    /// <p>The duration for the Spot Instance, in minutes.</p>
    pub block_duration_minutes: std::option::Option<i32>,
    /// <p>The end date of the request. After the end date, no new instance requests are placed or able to fulfill the request.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
}
impl SpotMarketOptions {
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub fn max_price(&self) -> std::option::Option<&str> {
        self.max_price.as_deref()
    }

    /// <p>The Spot Instance request type.</p>
    pub fn spot_instance_type(&self) -> std::option::Option<&crate::model::SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// <p>The duration for the Spot Instance, in minutes.</p>
    pub fn block_duration_minutes(&self) -> std::option::Option<i32> {
        self.block_duration_minutes
    }

    /// <p>The end date of the request. After the end date, no new instance requests are placed or able to fulfill the request.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }
}
impl std::fmt::Debug for SpotMarketOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("MaxPrice", &self.max_price);
        formatter.enum_field("SpotInstanceType", &self.spot_instance_type);
        formatter.field("BlockDurationMinutes", &self.block_duration_minutes);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.finish()
    }
}
/// See [`SpotMarketOptions`](crate::model::SpotMarketOptions)
pub mod spot_market_options {
    /// A builder for [`SpotMarketOptions`](crate::model::SpotMarketOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) max_price: std::option::Option<std::string::String>,
        pub(crate) spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
        pub(crate) block_duration_minutes: std::option::Option<i32>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
    }
    impl Builder {
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn max_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_price = Some(input.into());
            self
        }
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn set_max_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_price = input;
            self
        }

        /// <p>The Spot Instance request type.</p>
        pub fn spot_instance_type(mut self, input: crate::model::SpotInstanceType) -> Self {
            self.spot_instance_type = Some(input);
            self
        }
        /// <p>The Spot Instance request type.</p>
        pub fn set_spot_instance_type(mut self, input: std::option::Option<crate::model::SpotInstanceType>) -> Self {
            self.spot_instance_type = input;
            self
        }

        /// <p>The duration for the Spot Instance, in minutes.</p>
        pub fn block_duration_minutes(mut self, input: i32) -> Self {
            self.block_duration_minutes = Some(input);
            self
        }
        /// <p>The duration for the Spot Instance, in minutes.</p>
        pub fn set_block_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.block_duration_minutes = input;
            self
        }

        /// <p>The end date of the request. After the end date, no new instance requests are placed or able to fulfill the request.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date of the request. After the end date, no new instance requests are placed or able to fulfill the request.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::InstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::InstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotMarketOptions`](crate::model::SpotMarketOptions)
        pub fn build(self) -> crate::model::SpotMarketOptions {
            crate::model::SpotMarketOptions {
                max_price: self.max_price,
                spot_instance_type: self.spot_instance_type,
                block_duration_minutes: self.block_duration_minutes,
                valid_until: self.valid_until,
                instance_interruption_behavior: self.instance_interruption_behavior,
            }
        }
    }
}
impl SpotMarketOptions {
    /// Creates a new builder-style object to manufacture [`SpotMarketOptions`](crate::model::SpotMarketOptions)
    pub fn builder() -> crate::model::spot_market_options::Builder {
        crate::model::spot_market_options::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SpotInstanceType {
    #[allow(missing_docs)] // documentation missing in model
    OneTime,
    #[allow(missing_docs)] // documentation missing in model
    Persistent,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SpotInstanceType {
    fn from(s: &str) -> Self {
        match s {
            "one-time" => SpotInstanceType::OneTime,
            "persistent" => SpotInstanceType::Persistent,
            other => SpotInstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SpotInstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpotInstanceType::from(s))
    }
}
impl SpotInstanceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            SpotInstanceType::OneTime => "one-time",
            SpotInstanceType::Persistent => "persistent",
            SpotInstanceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "one-time",
            "persistent",
        ]
    }
}
impl AsRef<str> for SpotInstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceInterruptionBehavior {
    #[allow(missing_docs)] // documentation missing in model
    Hibernate,
    #[allow(missing_docs)] // documentation missing in model
    Stop,
    #[allow(missing_docs)] // documentation missing in model
    Terminate,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceInterruptionBehavior {
    fn from(s: &str) -> Self {
        match s {
            "hibernate" => InstanceInterruptionBehavior::Hibernate,
            "stop" => InstanceInterruptionBehavior::Stop,
            "terminate" => InstanceInterruptionBehavior::Terminate,
            other => InstanceInterruptionBehavior::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceInterruptionBehavior {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceInterruptionBehavior::from(s))
    }
}
impl InstanceInterruptionBehavior {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceInterruptionBehavior::Hibernate => "hibernate",
            InstanceInterruptionBehavior::Stop => "stop",
            InstanceInterruptionBehavior::Terminate => "terminate",
            InstanceInterruptionBehavior::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "hibernate",
            "stop",
            "terminate",
        ]
    }
}
impl AsRef<str> for InstanceInterruptionBehavior {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the market (purchasing) option for the instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceMarketOptionsRequest {
    /// <p>The market type.</p>
    pub market_type: std::option::Option<crate::model::MarketType>,
    /// <p>The configuration of Spot Instances.</p>
    pub spot_options: std::option::Option<crate::model::SpotMarketOptions>,
}
impl InstanceMarketOptionsRequest {
    /// <p>The market type.</p>
    pub fn market_type(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market_type.as_ref()
    }

    /// <p>The configuration of Spot Instances.</p>
    pub fn spot_options(&self) -> std::option::Option<&crate::model::SpotMarketOptions> {
        self.spot_options.as_ref()
    }
}
impl std::fmt::Debug for InstanceMarketOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("MarketType", &self.market_type);
        formatter.field("SpotOptions", &self.spot_options);
        formatter.finish()
    }
}
/// See [`InstanceMarketOptionsRequest`](crate::model::InstanceMarketOptionsRequest)
pub mod instance_market_options_request {
    /// A builder for [`InstanceMarketOptionsRequest`](crate::model::InstanceMarketOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) market_type: std::option::Option<crate::model::MarketType>,
        pub(crate) spot_options: std::option::Option<crate::model::SpotMarketOptions>,
    }
    impl Builder {
        /// <p>The market type.</p>
        pub fn market_type(mut self, input: crate::model::MarketType) -> Self {
            self.market_type = Some(input);
            self
        }
        /// <p>The market type.</p>
        pub fn set_market_type(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market_type = input;
            self
        }

        /// <p>The configuration of Spot Instances.</p>
        pub fn spot_options(mut self, input: crate::model::SpotMarketOptions) -> Self {
            self.spot_options = Some(input);
            self
        }
        /// <p>The configuration of Spot Instances.</p>
        pub fn set_spot_options(mut self, input: std::option::Option<crate::model::SpotMarketOptions>) -> Self {
            self.spot_options = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceMarketOptionsRequest`](crate::model::InstanceMarketOptionsRequest)
        pub fn build(self) -> crate::model::InstanceMarketOptionsRequest {
            crate::model::InstanceMarketOptionsRequest {
                market_type: self.market_type,
                spot_options: self.spot_options,
            }
        }
    }
}
impl InstanceMarketOptionsRequest {
    /// Creates a new builder-style object to manufacture [`InstanceMarketOptionsRequest`](crate::model::InstanceMarketOptionsRequest)
    pub fn builder() -> crate::model::instance_market_options_request::Builder {
        crate::model::instance_market_options_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum MarketType {
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for MarketType {
    fn from(s: &str) -> Self {
        match s {
            "spot" => MarketType::Spot,
            other => MarketType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MarketType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MarketType::from(s))
    }
}
impl MarketType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            MarketType::Spot => "spot",
            MarketType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "spot",
        ]
    }
}
impl AsRef<str> for MarketType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>The credit option for CPU usage of a T2, T3, or T3a instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreditSpecificationRequest {
    /// <p>The credit option for CPU usage of the instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
    pub cpu_credits: std::option::Option<std::string::String>,
}
impl CreditSpecificationRequest {
    /// <p>The credit option for CPU usage of the instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
    pub fn cpu_credits(&self) -> std::option::Option<&str> {
        self.cpu_credits.as_deref()
    }
}
impl std::fmt::Debug for CreditSpecificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CpuCredits", &self.cpu_credits);
        formatter.finish()
    }
}
/// See [`CreditSpecificationRequest`](crate::model::CreditSpecificationRequest)
pub mod credit_specification_request {
    /// A builder for [`CreditSpecificationRequest`](crate::model::CreditSpecificationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cpu_credits: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The credit option for CPU usage of the instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
        pub fn cpu_credits(mut self, input: impl Into<std::string::String>) -> Self {
            self.cpu_credits = Some(input.into());
            self
        }
        /// <p>The credit option for CPU usage of the instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
        pub fn set_cpu_credits(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cpu_credits = input;
            self
        }
        /// Consumes the builder and constructs a [`CreditSpecificationRequest`](crate::model::CreditSpecificationRequest)
        pub fn build(self) -> crate::model::CreditSpecificationRequest {
            crate::model::CreditSpecificationRequest {
                cpu_credits: self.cpu_credits,
            }
        }
    }
}
impl CreditSpecificationRequest {
    /// Creates a new builder-style object to manufacture [`CreditSpecificationRequest`](crate::model::CreditSpecificationRequest)
    pub fn builder() -> crate::model::credit_specification_request::Builder {
        crate::model::credit_specification_request::Builder::default()
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
pub struct CpuOptionsRequest {
    /// <p>The number of CPU cores for the instance.</p>
    pub core_count: std::option::Option<i32>,
    /// <p>The number of threads per CPU core.</p>
    pub threads_per_core: std::option::Option<i32>,
}
impl CpuOptionsRequest {
    /// <p>The number of CPU cores for the instance.</p>
    pub fn core_count(&self) -> std::option::Option<i32> {
        self.core_count
    }

    /// <p>The number of threads per CPU core.</p>
    pub fn threads_per_core(&self) -> std::option::Option<i32> {
        self.threads_per_core
    }
}
impl std::fmt::Debug for CpuOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CoreCount", &self.core_count);
        formatter.field("ThreadsPerCore", &self.threads_per_core);
        formatter.finish()
    }
}
/// See [`CpuOptionsRequest`](crate::model::CpuOptionsRequest)
pub mod cpu_options_request {
    /// A builder for [`CpuOptionsRequest`](crate::model::CpuOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) core_count: std::option::Option<i32>,
        pub(crate) threads_per_core: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of CPU cores for the instance.</p>
        pub fn core_count(mut self, input: i32) -> Self {
            self.core_count = Some(input);
            self
        }
        /// <p>The number of CPU cores for the instance.</p>
        pub fn set_core_count(mut self, input: std::option::Option<i32>) -> Self {
            self.core_count = input;
            self
        }

        /// <p>The number of threads per CPU core.</p>
        pub fn threads_per_core(mut self, input: i32) -> Self {
            self.threads_per_core = Some(input);
            self
        }
        /// <p>The number of threads per CPU core.</p>
        pub fn set_threads_per_core(mut self, input: std::option::Option<i32>) -> Self {
            self.threads_per_core = input;
            self
        }
        /// Consumes the builder and constructs a [`CpuOptionsRequest`](crate::model::CpuOptionsRequest)
        pub fn build(self) -> crate::model::CpuOptionsRequest {
            crate::model::CpuOptionsRequest {
                core_count: self.core_count,
                threads_per_core: self.threads_per_core,
            }
        }
    }
}
impl CpuOptionsRequest {
    /// Creates a new builder-style object to manufacture [`CpuOptionsRequest`](crate::model::CpuOptionsRequest)
    pub fn builder() -> crate::model::cpu_options_request::Builder {
        crate::model::cpu_options_request::Builder::default()
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
pub struct CapacityReservationTarget {
    /// <p>The ID of the Capacity Reservation in which to run the instance.</p>
    pub capacity_reservation_id: std::option::Option<std::string::String>,
}
impl CapacityReservationTarget {
    /// <p>The ID of the Capacity Reservation in which to run the instance.</p>
    pub fn capacity_reservation_id(&self) -> std::option::Option<&str> {
        self.capacity_reservation_id.as_deref()
    }
}
impl std::fmt::Debug for CapacityReservationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CapacityReservationId", &self.capacity_reservation_id);
        formatter.finish()
    }
}
/// See [`CapacityReservationTarget`](crate::model::CapacityReservationTarget)
pub mod capacity_reservation_target {
    /// A builder for [`CapacityReservationTarget`](crate::model::CapacityReservationTarget)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the Capacity Reservation in which to run the instance.</p>
        pub fn capacity_reservation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.capacity_reservation_id = Some(input.into());
            self
        }
        /// <p>The ID of the Capacity Reservation in which to run the instance.</p>
        pub fn set_capacity_reservation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.capacity_reservation_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservationTarget`](crate::model::CapacityReservationTarget)
        pub fn build(self) -> crate::model::CapacityReservationTarget {
            crate::model::CapacityReservationTarget {
                capacity_reservation_id: self.capacity_reservation_id,
            }
        }
    }
}
impl CapacityReservationTarget {
    /// Creates a new builder-style object to manufacture [`CapacityReservationTarget`](crate::model::CapacityReservationTarget)
    pub fn builder() -> crate::model::capacity_reservation_target::Builder {
        crate::model::capacity_reservation_target::Builder::default()
    }
}

/// <p>Describes an instance's Capacity Reservation targeting option. You can specify only one parameter at a time. If you specify <code>CapacityReservationPreference</code> and <code>CapacityReservationTarget</code>, the request fails.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CapacityReservationSpecification {
    /// <p>Describes the instance's Capacity Reservation preferences.</p>
    pub capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
    /// <p>Information about the targeted Capacity Reservation.</p>
    pub capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTarget>,
}
impl CapacityReservationSpecification {
    /// <p>Describes the instance's Capacity Reservation preferences.</p>
    pub fn capacity_reservation_preference(&self) -> std::option::Option<&crate::model::CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// <p>Information about the targeted Capacity Reservation.</p>
    pub fn capacity_reservation_target(&self) -> std::option::Option<&crate::model::CapacityReservationTarget> {
        self.capacity_reservation_target.as_ref()
    }
}
impl std::fmt::Debug for CapacityReservationSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("CapacityReservationPreference", &self.capacity_reservation_preference);
        formatter.field("CapacityReservationTarget", &self.capacity_reservation_target);
        formatter.finish()
    }
}
/// See [`CapacityReservationSpecification`](crate::model::CapacityReservationSpecification)
pub mod capacity_reservation_specification {
    /// A builder for [`CapacityReservationSpecification`](crate::model::CapacityReservationSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
        pub(crate) capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTarget>,
    }
    impl Builder {
        /// <p>Describes the instance's Capacity Reservation preferences.</p>
        pub fn capacity_reservation_preference(mut self, input: crate::model::CapacityReservationPreference) -> Self {
            self.capacity_reservation_preference = Some(input);
            self
        }
        /// <p>Describes the instance's Capacity Reservation preferences.</p>
        pub fn set_capacity_reservation_preference(mut self, input: std::option::Option<crate::model::CapacityReservationPreference>) -> Self {
            self.capacity_reservation_preference = input;
            self
        }

        /// <p>Information about the targeted Capacity Reservation.</p>
        pub fn capacity_reservation_target(mut self, input: crate::model::CapacityReservationTarget) -> Self {
            self.capacity_reservation_target = Some(input);
            self
        }
        /// <p>Information about the targeted Capacity Reservation.</p>
        pub fn set_capacity_reservation_target(mut self, input: std::option::Option<crate::model::CapacityReservationTarget>) -> Self {
            self.capacity_reservation_target = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservationSpecification`](crate::model::CapacityReservationSpecification)
        pub fn build(self) -> crate::model::CapacityReservationSpecification {
            crate::model::CapacityReservationSpecification {
                capacity_reservation_preference: self.capacity_reservation_preference,
                capacity_reservation_target: self.capacity_reservation_target,
            }
        }
    }
}
impl CapacityReservationSpecification {
    /// Creates a new builder-style object to manufacture [`CapacityReservationSpecification`](crate::model::CapacityReservationSpecification)
    pub fn builder() -> crate::model::capacity_reservation_specification::Builder {
        crate::model::capacity_reservation_specification::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CapacityReservationPreference {
    #[allow(missing_docs)] // documentation missing in model
    Open,
    #[allow(missing_docs)] // documentation missing in model
    None,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CapacityReservationPreference {
    fn from(s: &str) -> Self {
        match s {
            "open" => CapacityReservationPreference::Open,
            "none" => CapacityReservationPreference::None,
            other => CapacityReservationPreference::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CapacityReservationPreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CapacityReservationPreference::from(s))
    }
}
impl CapacityReservationPreference {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CapacityReservationPreference::Open => "open",
            CapacityReservationPreference::None => "none",
            CapacityReservationPreference::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "open",
            "none",
        ]
    }
}
impl AsRef<str> for CapacityReservationPreference {
    fn as_ref(&self) -> &str {
        self.as_str()
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
pub struct HibernationOptionsRequest {
    /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub configured: std::option::Option<bool>,
}
impl HibernationOptionsRequest {
    /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub fn configured(&self) -> std::option::Option<bool> {
        self.configured
    }
}
impl std::fmt::Debug for HibernationOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Configured", &self.configured);
        formatter.finish()
    }
}
/// See [`HibernationOptionsRequest`](crate::model::HibernationOptionsRequest)
pub mod hibernation_options_request {
    /// A builder for [`HibernationOptionsRequest`](crate::model::HibernationOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) configured: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn configured(mut self, input: bool) -> Self {
            self.configured = Some(input);
            self
        }
        /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn set_configured(mut self, input: std::option::Option<bool>) -> Self {
            self.configured = input;
            self
        }
        /// Consumes the builder and constructs a [`HibernationOptionsRequest`](crate::model::HibernationOptionsRequest)
        pub fn build(self) -> crate::model::HibernationOptionsRequest {
            crate::model::HibernationOptionsRequest {
                configured: self.configured,
            }
        }
    }
}
impl HibernationOptionsRequest {
    /// Creates a new builder-style object to manufacture [`HibernationOptionsRequest`](crate::model::HibernationOptionsRequest)
    pub fn builder() -> crate::model::hibernation_options_request::Builder {
        crate::model::hibernation_options_request::Builder::default()
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
pub struct LicenseConfigurationRequest {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub license_configuration_arn: std::option::Option<std::string::String>,
}
impl LicenseConfigurationRequest {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub fn license_configuration_arn(&self) -> std::option::Option<&str> {
        self.license_configuration_arn.as_deref()
    }
}
impl std::fmt::Debug for LicenseConfigurationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LicenseConfigurationArn", &self.license_configuration_arn);
        formatter.finish()
    }
}
/// See [`LicenseConfigurationRequest`](crate::model::LicenseConfigurationRequest)
pub mod license_configuration_request {
    /// A builder for [`LicenseConfigurationRequest`](crate::model::LicenseConfigurationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) license_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn license_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.license_configuration_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn set_license_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.license_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`LicenseConfigurationRequest`](crate::model::LicenseConfigurationRequest)
        pub fn build(self) -> crate::model::LicenseConfigurationRequest {
            crate::model::LicenseConfigurationRequest {
                license_configuration_arn: self.license_configuration_arn,
            }
        }
    }
}
impl LicenseConfigurationRequest {
    /// Creates a new builder-style object to manufacture [`LicenseConfigurationRequest`](crate::model::LicenseConfigurationRequest)
    pub fn builder() -> crate::model::license_configuration_request::Builder {
        crate::model::license_configuration_request::Builder::default()
    }
}

/// <p>The metadata options for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceMetadataOptionsRequest {
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub http_tokens: std::option::Option<crate::model::HttpTokensState>,
    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    pub http_put_response_hop_limit: std::option::Option<i32>,
    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub http_endpoint: std::option::Option<crate::model::InstanceMetadataEndpointState>,
}
impl InstanceMetadataOptionsRequest {
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub fn http_tokens(&self) -> std::option::Option<&crate::model::HttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    pub fn http_put_response_hop_limit(&self) -> std::option::Option<i32> {
        self.http_put_response_hop_limit
    }

    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub fn http_endpoint(&self) -> std::option::Option<&crate::model::InstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }
}
impl std::fmt::Debug for InstanceMetadataOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("HttpTokens", &self.http_tokens);
        formatter.field("HttpPutResponseHopLimit", &self.http_put_response_hop_limit);
        formatter.enum_field("HttpEndpoint", &self.http_endpoint);
        formatter.finish()
    }
}
/// See [`InstanceMetadataOptionsRequest`](crate::model::InstanceMetadataOptionsRequest)
pub mod instance_metadata_options_request {
    /// A builder for [`InstanceMetadataOptionsRequest`](crate::model::InstanceMetadataOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) http_tokens: std::option::Option<crate::model::HttpTokensState>,
        pub(crate) http_put_response_hop_limit: std::option::Option<i32>,
        pub(crate) http_endpoint: std::option::Option<crate::model::InstanceMetadataEndpointState>,
    }
    impl Builder {
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn http_tokens(mut self, input: crate::model::HttpTokensState) -> Self {
            self.http_tokens = Some(input);
            self
        }
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn set_http_tokens(mut self, input: std::option::Option<crate::model::HttpTokensState>) -> Self {
            self.http_tokens = input;
            self
        }

        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        pub fn http_put_response_hop_limit(mut self, input: i32) -> Self {
            self.http_put_response_hop_limit = Some(input);
            self
        }
        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        pub fn set_http_put_response_hop_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.http_put_response_hop_limit = input;
            self
        }

        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn http_endpoint(mut self, input: crate::model::InstanceMetadataEndpointState) -> Self {
            self.http_endpoint = Some(input);
            self
        }
        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn set_http_endpoint(mut self, input: std::option::Option<crate::model::InstanceMetadataEndpointState>) -> Self {
            self.http_endpoint = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceMetadataOptionsRequest`](crate::model::InstanceMetadataOptionsRequest)
        pub fn build(self) -> crate::model::InstanceMetadataOptionsRequest {
            crate::model::InstanceMetadataOptionsRequest {
                http_tokens: self.http_tokens,
                http_put_response_hop_limit: self.http_put_response_hop_limit,
                http_endpoint: self.http_endpoint,
            }
        }
    }
}
impl InstanceMetadataOptionsRequest {
    /// Creates a new builder-style object to manufacture [`InstanceMetadataOptionsRequest`](crate::model::InstanceMetadataOptionsRequest)
    pub fn builder() -> crate::model::instance_metadata_options_request::Builder {
        crate::model::instance_metadata_options_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum HttpTokensState {
    #[allow(missing_docs)] // documentation missing in model
    Optional,
    #[allow(missing_docs)] // documentation missing in model
    Required,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for HttpTokensState {
    fn from(s: &str) -> Self {
        match s {
            "optional" => HttpTokensState::Optional,
            "required" => HttpTokensState::Required,
            other => HttpTokensState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HttpTokensState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HttpTokensState::from(s))
    }
}
impl HttpTokensState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            HttpTokensState::Optional => "optional",
            HttpTokensState::Required => "required",
            HttpTokensState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "optional",
            "required",
        ]
    }
}
impl AsRef<str> for HttpTokensState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceMetadataEndpointState {
    #[allow(missing_docs)] // documentation missing in model
    Disabled,
    #[allow(missing_docs)] // documentation missing in model
    Enabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceMetadataEndpointState {
    fn from(s: &str) -> Self {
        match s {
            "disabled" => InstanceMetadataEndpointState::Disabled,
            "enabled" => InstanceMetadataEndpointState::Enabled,
            other => InstanceMetadataEndpointState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceMetadataEndpointState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceMetadataEndpointState::from(s))
    }
}
impl InstanceMetadataEndpointState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceMetadataEndpointState::Disabled => "disabled",
            InstanceMetadataEndpointState::Enabled => "enabled",
            InstanceMetadataEndpointState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "disabled",
            "enabled",
        ]
    }
}
impl AsRef<str> for InstanceMetadataEndpointState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the ICMP type and code.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IcmpTypeCode {
    /// <p>The ICMP code. A value of -1 means all codes for the specified ICMP type.</p>
    pub code: std::option::Option<i32>,
    /// <p>The ICMP type. A value of -1 means all types.</p>
    pub r#type: std::option::Option<i32>,
}
impl IcmpTypeCode {
    /// <p>The ICMP code. A value of -1 means all codes for the specified ICMP type.</p>
    pub fn code(&self) -> std::option::Option<i32> {
        self.code
    }

    /// <p>The ICMP type. A value of -1 means all types.</p>
    pub fn r#type(&self) -> std::option::Option<i32> {
        self.r#type
    }
}
impl std::fmt::Debug for IcmpTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.field("Type", &self.r#type);
        formatter.finish()
    }
}
/// See [`IcmpTypeCode`](crate::model::IcmpTypeCode)
pub mod icmp_type_code {
    /// A builder for [`IcmpTypeCode`](crate::model::IcmpTypeCode)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<i32>,
        pub(crate) r#type: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The ICMP code. A value of -1 means all codes for the specified ICMP type.</p>
        pub fn code(mut self, input: i32) -> Self {
            self.code = Some(input);
            self
        }
        /// <p>The ICMP code. A value of -1 means all codes for the specified ICMP type.</p>
        pub fn set_code(mut self, input: std::option::Option<i32>) -> Self {
            self.code = input;
            self
        }

        /// <p>The ICMP type. A value of -1 means all types.</p>
        pub fn r#type(mut self, input: i32) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The ICMP type. A value of -1 means all types.</p>
        pub fn set_type(mut self, input: std::option::Option<i32>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`IcmpTypeCode`](crate::model::IcmpTypeCode)
        pub fn build(self) -> crate::model::IcmpTypeCode {
            crate::model::IcmpTypeCode {
                code: self.code,
                r#type: self.r#type,
            }
        }
    }
}
impl IcmpTypeCode {
    /// Creates a new builder-style object to manufacture [`IcmpTypeCode`](crate::model::IcmpTypeCode)
    pub fn builder() -> crate::model::icmp_type_code::Builder {
        crate::model::icmp_type_code::Builder::default()
    }
}

/// <p>Describes a range of ports.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct PortRange {
    /// <p>The first port in the range.</p>
    pub from: std::option::Option<i32>,
    /// <p>The last port in the range.</p>
    pub to: std::option::Option<i32>,
}
impl PortRange {
    /// <p>The first port in the range.</p>
    pub fn from(&self) -> std::option::Option<i32> {
        self.from
    }

    /// <p>The last port in the range.</p>
    pub fn to(&self) -> std::option::Option<i32> {
        self.to
    }
}
impl std::fmt::Debug for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("From", &self.from);
        formatter.field("To", &self.to);
        formatter.finish()
    }
}
/// See [`PortRange`](crate::model::PortRange)
pub mod port_range {
    /// A builder for [`PortRange`](crate::model::PortRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) from: std::option::Option<i32>,
        pub(crate) to: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The first port in the range.</p>
        pub fn from(mut self, input: i32) -> Self {
            self.from = Some(input);
            self
        }
        /// <p>The first port in the range.</p>
        pub fn set_from(mut self, input: std::option::Option<i32>) -> Self {
            self.from = input;
            self
        }

        /// <p>The last port in the range.</p>
        pub fn to(mut self, input: i32) -> Self {
            self.to = Some(input);
            self
        }
        /// <p>The last port in the range.</p>
        pub fn set_to(mut self, input: std::option::Option<i32>) -> Self {
            self.to = input;
            self
        }
        /// Consumes the builder and constructs a [`PortRange`](crate::model::PortRange)
        pub fn build(self) -> crate::model::PortRange {
            crate::model::PortRange {
                from: self.from,
                to: self.to,
            }
        }
    }
}
impl PortRange {
    /// Creates a new builder-style object to manufacture [`PortRange`](crate::model::PortRange)
    pub fn builder() -> crate::model::port_range::Builder {
        crate::model::port_range::Builder::default()
    }
}

/// <p>Describes the monitoring of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Monitoring {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub state: std::option::Option<crate::model::MonitoringState>,
}
impl Monitoring {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::MonitoringState> {
        self.state.as_ref()
    }
}
impl std::fmt::Debug for Monitoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("State", &self.state);
        formatter.finish()
    }
}
/// See [`Monitoring`](crate::model::Monitoring)
pub mod monitoring {
    /// A builder for [`Monitoring`](crate::model::Monitoring)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::MonitoringState>,
    }
    impl Builder {
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn state(mut self, input: crate::model::MonitoringState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::MonitoringState>) -> Self {
            self.state = input;
            self
        }
        /// Consumes the builder and constructs a [`Monitoring`](crate::model::Monitoring)
        pub fn build(self) -> crate::model::Monitoring {
            crate::model::Monitoring {
                state: self.state,
            }
        }
    }
}
impl Monitoring {
    /// Creates a new builder-style object to manufacture [`Monitoring`](crate::model::Monitoring)
    pub fn builder() -> crate::model::monitoring::Builder {
        crate::model::monitoring::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum MonitoringState {
    #[allow(missing_docs)] // documentation missing in model
    Disabled,
    #[allow(missing_docs)] // documentation missing in model
    Disabling,
    #[allow(missing_docs)] // documentation missing in model
    Enabled,
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for MonitoringState {
    fn from(s: &str) -> Self {
        match s {
            "disabled" => MonitoringState::Disabled,
            "disabling" => MonitoringState::Disabling,
            "enabled" => MonitoringState::Enabled,
            "pending" => MonitoringState::Pending,
            other => MonitoringState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MonitoringState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MonitoringState::from(s))
    }
}
impl MonitoringState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            MonitoringState::Disabled => "disabled",
            MonitoringState::Disabling => "disabling",
            MonitoringState::Enabled => "enabled",
            MonitoringState::Pending => "pending",
            MonitoringState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "disabled",
            "disabling",
            "enabled",
            "pending",
        ]
    }
}
impl AsRef<str> for MonitoringState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a product code.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ProductCode {
    /// <p>The product code.</p>
    pub product_code_id: std::option::Option<std::string::String>,
    /// <p>The type of product code.</p>
    pub product_code_type: std::option::Option<crate::model::ProductCodeValues>,
}
impl ProductCode {
    /// <p>The product code.</p>
    pub fn product_code_id(&self) -> std::option::Option<&str> {
        self.product_code_id.as_deref()
    }

    /// <p>The type of product code.</p>
    pub fn product_code_type(&self) -> std::option::Option<&crate::model::ProductCodeValues> {
        self.product_code_type.as_ref()
    }
}
impl std::fmt::Debug for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ProductCodeId", &self.product_code_id);
        formatter.enum_field("ProductCodeType", &self.product_code_type);
        formatter.finish()
    }
}
/// See [`ProductCode`](crate::model::ProductCode)
pub mod product_code {
    /// A builder for [`ProductCode`](crate::model::ProductCode)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) product_code_id: std::option::Option<std::string::String>,
        pub(crate) product_code_type: std::option::Option<crate::model::ProductCodeValues>,
    }
    impl Builder {
        /// <p>The product code.</p>
        pub fn product_code_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.product_code_id = Some(input.into());
            self
        }
        /// <p>The product code.</p>
        pub fn set_product_code_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.product_code_id = input;
            self
        }

        /// <p>The type of product code.</p>
        pub fn product_code_type(mut self, input: crate::model::ProductCodeValues) -> Self {
            self.product_code_type = Some(input);
            self
        }
        /// <p>The type of product code.</p>
        pub fn set_product_code_type(mut self, input: std::option::Option<crate::model::ProductCodeValues>) -> Self {
            self.product_code_type = input;
            self
        }
        /// Consumes the builder and constructs a [`ProductCode`](crate::model::ProductCode)
        pub fn build(self) -> crate::model::ProductCode {
            crate::model::ProductCode {
                product_code_id: self.product_code_id,
                product_code_type: self.product_code_type,
            }
        }
    }
}
impl ProductCode {
    /// Creates a new builder-style object to manufacture [`ProductCode`](crate::model::ProductCode)
    pub fn builder() -> crate::model::product_code::Builder {
        crate::model::product_code::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ProductCodeValues {
    #[allow(missing_docs)] // documentation missing in model
    Devpay,
    #[allow(missing_docs)] // documentation missing in model
    Marketplace,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ProductCodeValues {
    fn from(s: &str) -> Self {
        match s {
            "devpay" => ProductCodeValues::Devpay,
            "marketplace" => ProductCodeValues::Marketplace,
            other => ProductCodeValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProductCodeValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProductCodeValues::from(s))
    }
}
impl ProductCodeValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ProductCodeValues::Devpay => "devpay",
            ProductCodeValues::Marketplace => "marketplace",
            ProductCodeValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "devpay",
            "marketplace",
        ]
    }
}
impl AsRef<str> for ProductCodeValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the current state of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceState {
    /// <p>The state of the instance as a 16-bit unsigned integer.</p>
    /// <p>The high byte is all of the bits between 2^8 and (2^16)-1, which equals decimal values between 256 and 65,535. These numerical values are used for internal purposes and should be ignored.</p>
    pub code: std::option::Option<i32>,
    /// <p>The current state of the instance.</p>
    pub name: std::option::Option<crate::model::InstanceStateName>,
}
impl InstanceState {
    /// <p>The state of the instance as a 16-bit unsigned integer.</p>
    /// <p>The high byte is all of the bits between 2^8 and (2^16)-1, which equals decimal values between 256 and 65,535. These numerical values are used for internal purposes and should be ignored.</p>
    pub fn code(&self) -> std::option::Option<i32> {
        self.code
    }

    /// <p>The current state of the instance.</p>
    pub fn name(&self) -> std::option::Option<&crate::model::InstanceStateName> {
        self.name.as_ref()
    }
}
impl std::fmt::Debug for InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.enum_field("Name", &self.name);
        formatter.finish()
    }
}
/// See [`InstanceState`](crate::model::InstanceState)
pub mod instance_state {
    /// A builder for [`InstanceState`](crate::model::InstanceState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<i32>,
        pub(crate) name: std::option::Option<crate::model::InstanceStateName>,
    }
    impl Builder {
        /// <p>The state of the instance as a 16-bit unsigned integer.</p>
        /// <p>The high byte is all of the bits between 2^8 and (2^16)-1, which equals decimal values between 256 and 65,535. These numerical values are used for internal purposes and should be ignored.</p>
        pub fn code(mut self, input: i32) -> Self {
            self.code = Some(input);
            self
        }
        /// <p>The state of the instance as a 16-bit unsigned integer.</p>
        /// <p>The high byte is all of the bits between 2^8 and (2^16)-1, which equals decimal values between 256 and 65,535. These numerical values are used for internal purposes and should be ignored.</p>
        pub fn set_code(mut self, input: std::option::Option<i32>) -> Self {
            self.code = input;
            self
        }

        /// <p>The current state of the instance.</p>
        pub fn name(mut self, input: crate::model::InstanceStateName) -> Self {
            self.name = Some(input);
            self
        }
        /// <p>The current state of the instance.</p>
        pub fn set_name(mut self, input: std::option::Option<crate::model::InstanceStateName>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceState`](crate::model::InstanceState)
        pub fn build(self) -> crate::model::InstanceState {
            crate::model::InstanceState {
                code: self.code,
                name: self.name,
            }
        }
    }
}
impl InstanceState {
    /// Creates a new builder-style object to manufacture [`InstanceState`](crate::model::InstanceState)
    pub fn builder() -> crate::model::instance_state::Builder {
        crate::model::instance_state::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceStateName {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    ShuttingDown,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    Stopping,
    #[allow(missing_docs)] // documentation missing in model
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceStateName {
    fn from(s: &str) -> Self {
        match s {
            "pending" => InstanceStateName::Pending,
            "running" => InstanceStateName::Running,
            "shutting-down" => InstanceStateName::ShuttingDown,
            "terminated" => InstanceStateName::Terminated,
            "stopping" => InstanceStateName::Stopping,
            "stopped" => InstanceStateName::Stopped,
            other => InstanceStateName::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceStateName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceStateName::from(s))
    }
}
impl InstanceStateName {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceStateName::Pending => "pending",
            InstanceStateName::Running => "running",
            InstanceStateName::ShuttingDown => "shutting-down",
            InstanceStateName::Terminated => "terminated",
            InstanceStateName::Stopping => "stopping",
            InstanceStateName::Stopped => "stopped",
            InstanceStateName::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "pending",
            "running",
            "shutting-down",
            "terminated",
            "stopping",
            "stopped",
        ]
    }
}
impl AsRef<str> for InstanceStateName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a parameter used to set up an EBS volume in a block device mapping.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct EbsInstanceBlockDevice {
    /// <p>The time stamp when the attachment initiated.</p>
    pub attach_time: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates whether the volume is deleted on instance termination.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The attachment state.</p>
    pub status: std::option::Option<crate::model::AttachmentStatus>,
    /// <p>The ID of the EBS volume.</p>
    pub volume_id: std::option::Option<std::string::String>,
}
impl EbsInstanceBlockDevice {
    /// <p>The time stamp when the attachment initiated.</p>
    pub fn attach_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.attach_time.as_ref()
    }

    /// <p>Indicates whether the volume is deleted on instance termination.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The attachment state.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::AttachmentStatus> {
        self.status.as_ref()
    }

    /// <p>The ID of the EBS volume.</p>
    pub fn volume_id(&self) -> std::option::Option<&str> {
        self.volume_id.as_deref()
    }
}
impl std::fmt::Debug for EbsInstanceBlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AttachTime", &self.attach_time);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.enum_field("Status", &self.status);
        formatter.field("VolumeId", &self.volume_id);
        formatter.finish()
    }
}
/// See [`EbsInstanceBlockDevice`](crate::model::EbsInstanceBlockDevice)
pub mod ebs_instance_block_device {
    /// A builder for [`EbsInstanceBlockDevice`](crate::model::EbsInstanceBlockDevice)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attach_time: std::option::Option<smithy_types::Instant>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) status: std::option::Option<crate::model::AttachmentStatus>,
        pub(crate) volume_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The time stamp when the attachment initiated.</p>
        pub fn attach_time(mut self, input: smithy_types::Instant) -> Self {
            self.attach_time = Some(input);
            self
        }
        /// <p>The time stamp when the attachment initiated.</p>
        pub fn set_attach_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.attach_time = input;
            self
        }

        /// <p>Indicates whether the volume is deleted on instance termination.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the volume is deleted on instance termination.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The attachment state.</p>
        pub fn status(mut self, input: crate::model::AttachmentStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The attachment state.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::AttachmentStatus>) -> Self {
            self.status = input;
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
        /// Consumes the builder and constructs a [`EbsInstanceBlockDevice`](crate::model::EbsInstanceBlockDevice)
        pub fn build(self) -> crate::model::EbsInstanceBlockDevice {
            crate::model::EbsInstanceBlockDevice {
                attach_time: self.attach_time,
                delete_on_termination: self.delete_on_termination,
                status: self.status,
                volume_id: self.volume_id,
            }
        }
    }
}
impl EbsInstanceBlockDevice {
    /// Creates a new builder-style object to manufacture [`EbsInstanceBlockDevice`](crate::model::EbsInstanceBlockDevice)
    pub fn builder() -> crate::model::ebs_instance_block_device::Builder {
        crate::model::ebs_instance_block_device::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AttachmentStatus {
    #[allow(missing_docs)] // documentation missing in model
    Attaching,
    #[allow(missing_docs)] // documentation missing in model
    Attached,
    #[allow(missing_docs)] // documentation missing in model
    Detaching,
    #[allow(missing_docs)] // documentation missing in model
    Detached,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AttachmentStatus {
    fn from(s: &str) -> Self {
        match s {
            "attaching" => AttachmentStatus::Attaching,
            "attached" => AttachmentStatus::Attached,
            "detaching" => AttachmentStatus::Detaching,
            "detached" => AttachmentStatus::Detached,
            other => AttachmentStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AttachmentStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AttachmentStatus::from(s))
    }
}
impl AttachmentStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            AttachmentStatus::Attaching => "attaching",
            AttachmentStatus::Attached => "attached",
            AttachmentStatus::Detaching => "detaching",
            AttachmentStatus::Detached => "detached",
            AttachmentStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "attaching",
            "attached",
            "detaching",
            "detached",
        ]
    }
}
impl AsRef<str> for AttachmentStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a block device mapping.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceBlockDeviceMapping {
    /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
    pub device_name: std::option::Option<std::string::String>,
    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub ebs: std::option::Option<crate::model::EbsInstanceBlockDevice>,
}
impl InstanceBlockDeviceMapping {
    /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
    pub fn device_name(&self) -> std::option::Option<&str> {
        self.device_name.as_deref()
    }

    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub fn ebs(&self) -> std::option::Option<&crate::model::EbsInstanceBlockDevice> {
        self.ebs.as_ref()
    }
}
impl std::fmt::Debug for InstanceBlockDeviceMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DeviceName", &self.device_name);
        formatter.field("Ebs", &self.ebs);
        formatter.finish()
    }
}
/// See [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
pub mod instance_block_device_mapping {
    /// A builder for [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device_name: std::option::Option<std::string::String>,
        pub(crate) ebs: std::option::Option<crate::model::EbsInstanceBlockDevice>,
    }
    impl Builder {
        /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
        pub fn device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.device_name = Some(input.into());
            self
        }
        /// <p>The device name (for example, <code>/dev/sdh</code> or <code>xvdh</code>).</p>
        pub fn set_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device_name = input;
            self
        }

        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn ebs(mut self, input: crate::model::EbsInstanceBlockDevice) -> Self {
            self.ebs = Some(input);
            self
        }
        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn set_ebs(mut self, input: std::option::Option<crate::model::EbsInstanceBlockDevice>) -> Self {
            self.ebs = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
        pub fn build(self) -> crate::model::InstanceBlockDeviceMapping {
            crate::model::InstanceBlockDeviceMapping {
                device_name: self.device_name,
                ebs: self.ebs,
            }
        }
    }
}
impl InstanceBlockDeviceMapping {
    /// Creates a new builder-style object to manufacture [`InstanceBlockDeviceMapping`](crate::model::InstanceBlockDeviceMapping)
    pub fn builder() -> crate::model::instance_block_device_mapping::Builder {
        crate::model::instance_block_device_mapping::Builder::default()
    }
}

/// <p>Describes an IAM instance profile.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IamInstanceProfile {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub arn: std::option::Option<std::string::String>,
    /// <p>The ID of the instance profile.</p>
    pub id: std::option::Option<std::string::String>,
}
impl IamInstanceProfile {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }

    /// <p>The ID of the instance profile.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
}
impl std::fmt::Debug for IamInstanceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Arn", &self.arn);
        formatter.field("Id", &self.id);
        formatter.finish()
    }
}
/// See [`IamInstanceProfile`](crate::model::IamInstanceProfile)
pub mod iam_instance_profile {
    /// A builder for [`IamInstanceProfile`](crate::model::IamInstanceProfile)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }

        /// <p>The ID of the instance profile.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the instance profile.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// Consumes the builder and constructs a [`IamInstanceProfile`](crate::model::IamInstanceProfile)
        pub fn build(self) -> crate::model::IamInstanceProfile {
            crate::model::IamInstanceProfile {
                arn: self.arn,
                id: self.id,
            }
        }
    }
}
impl IamInstanceProfile {
    /// Creates a new builder-style object to manufacture [`IamInstanceProfile`](crate::model::IamInstanceProfile)
    pub fn builder() -> crate::model::iam_instance_profile::Builder {
        crate::model::iam_instance_profile::Builder::default()
    }
}

/// <p>Describes the association between an instance and an Elastic Graphics accelerator.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ElasticGpuAssociation {
    /// <p>The ID of the Elastic Graphics accelerator.</p>
    pub elastic_gpu_id: std::option::Option<std::string::String>,
    /// <p>The ID of the association.</p>
    pub elastic_gpu_association_id: std::option::Option<std::string::String>,
    /// <p>The state of the association between the instance and the Elastic Graphics accelerator.</p>
    pub elastic_gpu_association_state: std::option::Option<std::string::String>,
    /// <p>The time the Elastic Graphics accelerator was associated with the instance.</p>
    pub elastic_gpu_association_time: std::option::Option<std::string::String>,
}
impl ElasticGpuAssociation {
    /// <p>The ID of the Elastic Graphics accelerator.</p>
    pub fn elastic_gpu_id(&self) -> std::option::Option<&str> {
        self.elastic_gpu_id.as_deref()
    }

    /// <p>The ID of the association.</p>
    pub fn elastic_gpu_association_id(&self) -> std::option::Option<&str> {
        self.elastic_gpu_association_id.as_deref()
    }

    /// <p>The state of the association between the instance and the Elastic Graphics accelerator.</p>
    pub fn elastic_gpu_association_state(&self) -> std::option::Option<&str> {
        self.elastic_gpu_association_state.as_deref()
    }

    /// <p>The time the Elastic Graphics accelerator was associated with the instance.</p>
    pub fn elastic_gpu_association_time(&self) -> std::option::Option<&str> {
        self.elastic_gpu_association_time.as_deref()
    }
}
impl std::fmt::Debug for ElasticGpuAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ElasticGpuId", &self.elastic_gpu_id);
        formatter.field("ElasticGpuAssociationId", &self.elastic_gpu_association_id);
        formatter.field("ElasticGpuAssociationState", &self.elastic_gpu_association_state);
        formatter.field("ElasticGpuAssociationTime", &self.elastic_gpu_association_time);
        formatter.finish()
    }
}
/// See [`ElasticGpuAssociation`](crate::model::ElasticGpuAssociation)
pub mod elastic_gpu_association {
    /// A builder for [`ElasticGpuAssociation`](crate::model::ElasticGpuAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) elastic_gpu_id: std::option::Option<std::string::String>,
        pub(crate) elastic_gpu_association_id: std::option::Option<std::string::String>,
        pub(crate) elastic_gpu_association_state: std::option::Option<std::string::String>,
        pub(crate) elastic_gpu_association_time: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the Elastic Graphics accelerator.</p>
        pub fn elastic_gpu_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_gpu_id = Some(input.into());
            self
        }
        /// <p>The ID of the Elastic Graphics accelerator.</p>
        pub fn set_elastic_gpu_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_gpu_id = input;
            self
        }

        /// <p>The ID of the association.</p>
        pub fn elastic_gpu_association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_gpu_association_id = Some(input.into());
            self
        }
        /// <p>The ID of the association.</p>
        pub fn set_elastic_gpu_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_gpu_association_id = input;
            self
        }

        /// <p>The state of the association between the instance and the Elastic Graphics accelerator.</p>
        pub fn elastic_gpu_association_state(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_gpu_association_state = Some(input.into());
            self
        }
        /// <p>The state of the association between the instance and the Elastic Graphics accelerator.</p>
        pub fn set_elastic_gpu_association_state(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_gpu_association_state = input;
            self
        }

        /// <p>The time the Elastic Graphics accelerator was associated with the instance.</p>
        pub fn elastic_gpu_association_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_gpu_association_time = Some(input.into());
            self
        }
        /// <p>The time the Elastic Graphics accelerator was associated with the instance.</p>
        pub fn set_elastic_gpu_association_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_gpu_association_time = input;
            self
        }
        /// Consumes the builder and constructs a [`ElasticGpuAssociation`](crate::model::ElasticGpuAssociation)
        pub fn build(self) -> crate::model::ElasticGpuAssociation {
            crate::model::ElasticGpuAssociation {
                elastic_gpu_id: self.elastic_gpu_id,
                elastic_gpu_association_id: self.elastic_gpu_association_id,
                elastic_gpu_association_state: self.elastic_gpu_association_state,
                elastic_gpu_association_time: self.elastic_gpu_association_time,
            }
        }
    }
}
impl ElasticGpuAssociation {
    /// Creates a new builder-style object to manufacture [`ElasticGpuAssociation`](crate::model::ElasticGpuAssociation)
    pub fn builder() -> crate::model::elastic_gpu_association::Builder {
        crate::model::elastic_gpu_association::Builder::default()
    }
}

/// <p>Describes the association between an instance and an elastic inference accelerator.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ElasticInferenceAcceleratorAssociation {
    /// <p>The Amazon Resource Name (ARN) of the elastic inference accelerator.</p>
    pub elastic_inference_accelerator_arn: std::option::Option<std::string::String>,
    /// <p>The ID of the association.</p>
    pub elastic_inference_accelerator_association_id: std::option::Option<std::string::String>,
    /// <p>The state of the elastic inference accelerator.</p>
    pub elastic_inference_accelerator_association_state: std::option::Option<std::string::String>,
    /// <p>The time at which the elastic inference accelerator is associated with an instance.</p>
    pub elastic_inference_accelerator_association_time: std::option::Option<smithy_types::Instant>,
}
impl ElasticInferenceAcceleratorAssociation {
    /// <p>The Amazon Resource Name (ARN) of the elastic inference accelerator.</p>
    pub fn elastic_inference_accelerator_arn(&self) -> std::option::Option<&str> {
        self.elastic_inference_accelerator_arn.as_deref()
    }

    /// <p>The ID of the association.</p>
    pub fn elastic_inference_accelerator_association_id(&self) -> std::option::Option<&str> {
        self.elastic_inference_accelerator_association_id.as_deref()
    }

    /// <p>The state of the elastic inference accelerator.</p>
    pub fn elastic_inference_accelerator_association_state(&self) -> std::option::Option<&str> {
        self.elastic_inference_accelerator_association_state.as_deref()
    }

    /// <p>The time at which the elastic inference accelerator is associated with an instance.</p>
    pub fn elastic_inference_accelerator_association_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.elastic_inference_accelerator_association_time.as_ref()
    }
}
impl std::fmt::Debug for ElasticInferenceAcceleratorAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ElasticInferenceAcceleratorArn", &self.elastic_inference_accelerator_arn);
        formatter.field("ElasticInferenceAcceleratorAssociationId", &self.elastic_inference_accelerator_association_id);
        formatter.field("ElasticInferenceAcceleratorAssociationState", &self.elastic_inference_accelerator_association_state);
        formatter.field("ElasticInferenceAcceleratorAssociationTime", &self.elastic_inference_accelerator_association_time);
        formatter.finish()
    }
}
/// See [`ElasticInferenceAcceleratorAssociation`](crate::model::ElasticInferenceAcceleratorAssociation)
pub mod elastic_inference_accelerator_association {
    /// A builder for [`ElasticInferenceAcceleratorAssociation`](crate::model::ElasticInferenceAcceleratorAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) elastic_inference_accelerator_arn: std::option::Option<std::string::String>,
        pub(crate) elastic_inference_accelerator_association_id: std::option::Option<std::string::String>,
        pub(crate) elastic_inference_accelerator_association_state: std::option::Option<std::string::String>,
        pub(crate) elastic_inference_accelerator_association_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the elastic inference accelerator.</p>
        pub fn elastic_inference_accelerator_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_inference_accelerator_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the elastic inference accelerator.</p>
        pub fn set_elastic_inference_accelerator_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_inference_accelerator_arn = input;
            self
        }

        /// <p>The ID of the association.</p>
        pub fn elastic_inference_accelerator_association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_inference_accelerator_association_id = Some(input.into());
            self
        }
        /// <p>The ID of the association.</p>
        pub fn set_elastic_inference_accelerator_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_inference_accelerator_association_id = input;
            self
        }

        /// <p>The state of the elastic inference accelerator.</p>
        pub fn elastic_inference_accelerator_association_state(mut self, input: impl Into<std::string::String>) -> Self {
            self.elastic_inference_accelerator_association_state = Some(input.into());
            self
        }
        /// <p>The state of the elastic inference accelerator.</p>
        pub fn set_elastic_inference_accelerator_association_state(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.elastic_inference_accelerator_association_state = input;
            self
        }

        /// <p>The time at which the elastic inference accelerator is associated with an instance.</p>
        pub fn elastic_inference_accelerator_association_time(mut self, input: smithy_types::Instant) -> Self {
            self.elastic_inference_accelerator_association_time = Some(input);
            self
        }
        /// <p>The time at which the elastic inference accelerator is associated with an instance.</p>
        pub fn set_elastic_inference_accelerator_association_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.elastic_inference_accelerator_association_time = input;
            self
        }
        /// Consumes the builder and constructs a [`ElasticInferenceAcceleratorAssociation`](crate::model::ElasticInferenceAcceleratorAssociation)
        pub fn build(self) -> crate::model::ElasticInferenceAcceleratorAssociation {
            crate::model::ElasticInferenceAcceleratorAssociation {
                elastic_inference_accelerator_arn: self.elastic_inference_accelerator_arn,
                elastic_inference_accelerator_association_id: self.elastic_inference_accelerator_association_id,
                elastic_inference_accelerator_association_state: self.elastic_inference_accelerator_association_state,
                elastic_inference_accelerator_association_time: self.elastic_inference_accelerator_association_time,
            }
        }
    }
}
impl ElasticInferenceAcceleratorAssociation {
    /// Creates a new builder-style object to manufacture [`ElasticInferenceAcceleratorAssociation`](crate::model::ElasticInferenceAcceleratorAssociation)
    pub fn builder() -> crate::model::elastic_inference_accelerator_association::Builder {
        crate::model::elastic_inference_accelerator_association::Builder::default()
    }
}

/// <p>Describes association information for an Elastic IP address (IPv4).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceNetworkInterfaceAssociation {
    /// <p>The ID of the owner of the Elastic IP address.</p>
    pub ip_owner_id: std::option::Option<std::string::String>,
    /// <p>The public DNS name.</p>
    pub public_dns_name: std::option::Option<std::string::String>,
    /// <p>The public IP address or Elastic IP address bound to the network interface.</p>
    pub public_ip: std::option::Option<std::string::String>,
}
impl InstanceNetworkInterfaceAssociation {
    /// <p>The ID of the owner of the Elastic IP address.</p>
    pub fn ip_owner_id(&self) -> std::option::Option<&str> {
        self.ip_owner_id.as_deref()
    }

    /// <p>The public DNS name.</p>
    pub fn public_dns_name(&self) -> std::option::Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// <p>The public IP address or Elastic IP address bound to the network interface.</p>
    pub fn public_ip(&self) -> std::option::Option<&str> {
        self.public_ip.as_deref()
    }
}
impl std::fmt::Debug for InstanceNetworkInterfaceAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("IpOwnerId", &self.ip_owner_id);
        formatter.field("PublicDnsName", &self.public_dns_name);
        formatter.field("PublicIp", &self.public_ip);
        formatter.finish()
    }
}
/// See [`InstanceNetworkInterfaceAssociation`](crate::model::InstanceNetworkInterfaceAssociation)
pub mod instance_network_interface_association {
    /// A builder for [`InstanceNetworkInterfaceAssociation`](crate::model::InstanceNetworkInterfaceAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ip_owner_id: std::option::Option<std::string::String>,
        pub(crate) public_dns_name: std::option::Option<std::string::String>,
        pub(crate) public_ip: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the owner of the Elastic IP address.</p>
        pub fn ip_owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ip_owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the owner of the Elastic IP address.</p>
        pub fn set_ip_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ip_owner_id = input;
            self
        }

        /// <p>The public DNS name.</p>
        pub fn public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_dns_name = Some(input.into());
            self
        }
        /// <p>The public DNS name.</p>
        pub fn set_public_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_dns_name = input;
            self
        }

        /// <p>The public IP address or Elastic IP address bound to the network interface.</p>
        pub fn public_ip(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_ip = Some(input.into());
            self
        }
        /// <p>The public IP address or Elastic IP address bound to the network interface.</p>
        pub fn set_public_ip(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_ip = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceNetworkInterfaceAssociation`](crate::model::InstanceNetworkInterfaceAssociation)
        pub fn build(self) -> crate::model::InstanceNetworkInterfaceAssociation {
            crate::model::InstanceNetworkInterfaceAssociation {
                ip_owner_id: self.ip_owner_id,
                public_dns_name: self.public_dns_name,
                public_ip: self.public_ip,
            }
        }
    }
}
impl InstanceNetworkInterfaceAssociation {
    /// Creates a new builder-style object to manufacture [`InstanceNetworkInterfaceAssociation`](crate::model::InstanceNetworkInterfaceAssociation)
    pub fn builder() -> crate::model::instance_network_interface_association::Builder {
        crate::model::instance_network_interface_association::Builder::default()
    }
}

/// <p>Describes a network interface attachment.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceNetworkInterfaceAttachment {
    /// <p>The time stamp when the attachment initiated.</p>
    pub attach_time: std::option::Option<smithy_types::Instant>,
    /// <p>The ID of the network interface attachment.</p>
    pub attachment_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The index of the device on the instance for the network interface attachment.</p>
    pub device_index: std::option::Option<i32>,
    /// <p>The attachment state.</p>
    pub status: std::option::Option<crate::model::AttachmentStatus>,
}
impl InstanceNetworkInterfaceAttachment {
    /// <p>The time stamp when the attachment initiated.</p>
    pub fn attach_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.attach_time.as_ref()
    }

    /// <p>The ID of the network interface attachment.</p>
    pub fn attachment_id(&self) -> std::option::Option<&str> {
        self.attachment_id.as_deref()
    }

    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The index of the device on the instance for the network interface attachment.</p>
    pub fn device_index(&self) -> std::option::Option<i32> {
        self.device_index
    }

    /// <p>The attachment state.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::AttachmentStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Debug for InstanceNetworkInterfaceAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AttachTime", &self.attach_time);
        formatter.field("AttachmentId", &self.attachment_id);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("DeviceIndex", &self.device_index);
        formatter.enum_field("Status", &self.status);
        formatter.finish()
    }
}
/// See [`InstanceNetworkInterfaceAttachment`](crate::model::InstanceNetworkInterfaceAttachment)
pub mod instance_network_interface_attachment {
    /// A builder for [`InstanceNetworkInterfaceAttachment`](crate::model::InstanceNetworkInterfaceAttachment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attach_time: std::option::Option<smithy_types::Instant>,
        pub(crate) attachment_id: std::option::Option<std::string::String>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) device_index: std::option::Option<i32>,
        pub(crate) status: std::option::Option<crate::model::AttachmentStatus>,
    }
    impl Builder {
        /// <p>The time stamp when the attachment initiated.</p>
        pub fn attach_time(mut self, input: smithy_types::Instant) -> Self {
            self.attach_time = Some(input);
            self
        }
        /// <p>The time stamp when the attachment initiated.</p>
        pub fn set_attach_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.attach_time = input;
            self
        }

        /// <p>The ID of the network interface attachment.</p>
        pub fn attachment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.attachment_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface attachment.</p>
        pub fn set_attachment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.attachment_id = input;
            self
        }

        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The index of the device on the instance for the network interface attachment.</p>
        pub fn device_index(mut self, input: i32) -> Self {
            self.device_index = Some(input);
            self
        }
        /// <p>The index of the device on the instance for the network interface attachment.</p>
        pub fn set_device_index(mut self, input: std::option::Option<i32>) -> Self {
            self.device_index = input;
            self
        }

        /// <p>The attachment state.</p>
        pub fn status(mut self, input: crate::model::AttachmentStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The attachment state.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::AttachmentStatus>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceNetworkInterfaceAttachment`](crate::model::InstanceNetworkInterfaceAttachment)
        pub fn build(self) -> crate::model::InstanceNetworkInterfaceAttachment {
            crate::model::InstanceNetworkInterfaceAttachment {
                attach_time: self.attach_time,
                attachment_id: self.attachment_id,
                delete_on_termination: self.delete_on_termination,
                device_index: self.device_index,
                status: self.status,
            }
        }
    }
}
impl InstanceNetworkInterfaceAttachment {
    /// Creates a new builder-style object to manufacture [`InstanceNetworkInterfaceAttachment`](crate::model::InstanceNetworkInterfaceAttachment)
    pub fn builder() -> crate::model::instance_network_interface_attachment::Builder {
        crate::model::instance_network_interface_attachment::Builder::default()
    }
}

/// <p>Describes a security group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct GroupIdentifier {
    /// <p>The name of the security group.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The ID of the security group.</p>
    pub group_id: std::option::Option<std::string::String>,
}
impl GroupIdentifier {
    /// <p>The name of the security group.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The ID of the security group.</p>
    pub fn group_id(&self) -> std::option::Option<&str> {
        self.group_id.as_deref()
    }
}
impl std::fmt::Debug for GroupIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("GroupName", &self.group_name);
        formatter.field("GroupId", &self.group_id);
        formatter.finish()
    }
}
/// See [`GroupIdentifier`](crate::model::GroupIdentifier)
pub mod group_identifier {
    /// A builder for [`GroupIdentifier`](crate::model::GroupIdentifier)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) group_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of the security group.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the security group.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The ID of the security group.</p>
        pub fn group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_id = Some(input.into());
            self
        }
        /// <p>The ID of the security group.</p>
        pub fn set_group_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GroupIdentifier`](crate::model::GroupIdentifier)
        pub fn build(self) -> crate::model::GroupIdentifier {
            crate::model::GroupIdentifier {
                group_name: self.group_name,
                group_id: self.group_id,
            }
        }
    }
}
impl GroupIdentifier {
    /// Creates a new builder-style object to manufacture [`GroupIdentifier`](crate::model::GroupIdentifier)
    pub fn builder() -> crate::model::group_identifier::Builder {
        crate::model::group_identifier::Builder::default()
    }
}

/// <p>Describes a private IPv4 address.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstancePrivateIpAddress {
    /// <p>The association information for an Elastic IP address for the network interface.</p>
    pub association: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>,
    /// <p>Indicates whether this IPv4 address is the primary private IP address of the network interface.</p>
    pub primary: std::option::Option<bool>,
    /// <p>The private IPv4 DNS name.</p>
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address of the network interface.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
}
impl InstancePrivateIpAddress {
    /// <p>The association information for an Elastic IP address for the network interface.</p>
    pub fn association(&self) -> std::option::Option<&crate::model::InstanceNetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// <p>Indicates whether this IPv4 address is the primary private IP address of the network interface.</p>
    pub fn primary(&self) -> std::option::Option<bool> {
        self.primary
    }

    /// <p>The private IPv4 DNS name.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// <p>The private IPv4 address of the network interface.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }
}
impl std::fmt::Debug for InstancePrivateIpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Association", &self.association);
        formatter.field("Primary", &self.primary);
        formatter.field("PrivateDnsName", &self.private_dns_name);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.finish()
    }
}
/// See [`InstancePrivateIpAddress`](crate::model::InstancePrivateIpAddress)
pub mod instance_private_ip_address {
    /// A builder for [`InstancePrivateIpAddress`](crate::model::InstancePrivateIpAddress)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>,
        pub(crate) primary: std::option::Option<bool>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The association information for an Elastic IP address for the network interface.</p>
        pub fn association(mut self, input: crate::model::InstanceNetworkInterfaceAssociation) -> Self {
            self.association = Some(input);
            self
        }
        /// <p>The association information for an Elastic IP address for the network interface.</p>
        pub fn set_association(mut self, input: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>) -> Self {
            self.association = input;
            self
        }

        /// <p>Indicates whether this IPv4 address is the primary private IP address of the network interface.</p>
        pub fn primary(mut self, input: bool) -> Self {
            self.primary = Some(input);
            self
        }
        /// <p>Indicates whether this IPv4 address is the primary private IP address of the network interface.</p>
        pub fn set_primary(mut self, input: std::option::Option<bool>) -> Self {
            self.primary = input;
            self
        }

        /// <p>The private IPv4 DNS name.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        /// <p>The private IPv4 DNS name.</p>
        pub fn set_private_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_dns_name = input;
            self
        }

        /// <p>The private IPv4 address of the network interface.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The private IPv4 address of the network interface.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }
        /// Consumes the builder and constructs a [`InstancePrivateIpAddress`](crate::model::InstancePrivateIpAddress)
        pub fn build(self) -> crate::model::InstancePrivateIpAddress {
            crate::model::InstancePrivateIpAddress {
                association: self.association,
                primary: self.primary,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
            }
        }
    }
}
impl InstancePrivateIpAddress {
    /// Creates a new builder-style object to manufacture [`InstancePrivateIpAddress`](crate::model::InstancePrivateIpAddress)
    pub fn builder() -> crate::model::instance_private_ip_address::Builder {
        crate::model::instance_private_ip_address::Builder::default()
    }
}

/// <p>Describes a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceNetworkInterface {
    /// <p>The association information for an Elastic IPv4 associated with the network interface.</p>
    pub association: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>,
    /// <p>The network interface attachment.</p>
    pub attachment: std::option::Option<crate::model::InstanceNetworkInterfaceAttachment>,
    /// <p>The description.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>One or more security groups.</p>
    pub groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>The IPv6 addresses associated with the network interface.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
    /// <p>The MAC address.</p>
    pub mac_address: std::option::Option<std::string::String>,
    /// <p>The ID of the network interface.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>The ID of the AWS account that created the network interface.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>The private IPv4 addresses associated with the network interface.</p>
    pub private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::InstancePrivateIpAddress>>,
    /// <p>Indicates whether to validate network traffic to or from this network interface.</p>
    pub source_dest_check: std::option::Option<bool>,
    /// <p>The status of the network interface.</p>
    pub status: std::option::Option<crate::model::NetworkInterfaceStatus>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The ID of the VPC.</p>
    pub vpc_id: std::option::Option<std::string::String>,
    /// <p>Describes the type of network interface. Valid values: <code>interface</code> | <code>efa</code></p>
    pub interface_type: std::option::Option<std::string::String>,
}
impl InstanceNetworkInterface {
    /// <p>The association information for an Elastic IPv4 associated with the network interface.</p>
    pub fn association(&self) -> std::option::Option<&crate::model::InstanceNetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// <p>The network interface attachment.</p>
    pub fn attachment(&self) -> std::option::Option<&crate::model::InstanceNetworkInterfaceAttachment> {
        self.attachment.as_ref()
    }

    /// <p>The description.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>One or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[crate::model::GroupIdentifier] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The IPv6 addresses associated with the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::InstanceIpv6Address] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The MAC address.</p>
    pub fn mac_address(&self) -> std::option::Option<&str> {
        self.mac_address.as_deref()
    }

    /// <p>The ID of the network interface.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>The ID of the AWS account that created the network interface.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// <p>The private IPv4 address.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>The private IPv4 addresses associated with the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.private_ip_addresses.is_none()`.
    pub fn private_ip_addresses(&self) -> &[crate::model::InstancePrivateIpAddress] {
        self.private_ip_addresses.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether to validate network traffic to or from this network interface.</p>
    pub fn source_dest_check(&self) -> std::option::Option<bool> {
        self.source_dest_check
    }

    /// <p>The status of the network interface.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::NetworkInterfaceStatus> {
        self.status.as_ref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The ID of the VPC.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }

    /// <p>Describes the type of network interface. Valid values: <code>interface</code> | <code>efa</code></p>
    pub fn interface_type(&self) -> std::option::Option<&str> {
        self.interface_type.as_deref()
    }
}
impl std::fmt::Debug for InstanceNetworkInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Association", &self.association);
        formatter.field("Attachment", &self.attachment);
        formatter.field("Description", &self.description);
        formatter.field("Groups", &self.groups);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("MacAddress", &self.mac_address);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.field("OwnerId", &self.owner_id);
        formatter.field("PrivateDnsName", &self.private_dns_name);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("PrivateIpAddresses", &self.private_ip_addresses);
        formatter.field("SourceDestCheck", &self.source_dest_check);
        formatter.enum_field("Status", &self.status);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("VpcId", &self.vpc_id);
        formatter.field("InterfaceType", &self.interface_type);
        formatter.finish()
    }
}
/// See [`InstanceNetworkInterface`](crate::model::InstanceNetworkInterface)
pub mod instance_network_interface {
    /// A builder for [`InstanceNetworkInterface`](crate::model::InstanceNetworkInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>,
        pub(crate) attachment: std::option::Option<crate::model::InstanceNetworkInterfaceAttachment>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
        pub(crate) mac_address: std::option::Option<std::string::String>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::InstancePrivateIpAddress>>,
        pub(crate) source_dest_check: std::option::Option<bool>,
        pub(crate) status: std::option::Option<crate::model::NetworkInterfaceStatus>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) interface_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The association information for an Elastic IPv4 associated with the network interface.</p>
        pub fn association(mut self, input: crate::model::InstanceNetworkInterfaceAssociation) -> Self {
            self.association = Some(input);
            self
        }
        /// <p>The association information for an Elastic IPv4 associated with the network interface.</p>
        pub fn set_association(mut self, input: std::option::Option<crate::model::InstanceNetworkInterfaceAssociation>) -> Self {
            self.association = input;
            self
        }

        /// <p>The network interface attachment.</p>
        pub fn attachment(mut self, input: crate::model::InstanceNetworkInterfaceAttachment) -> Self {
            self.attachment = Some(input);
            self
        }
        /// <p>The network interface attachment.</p>
        pub fn set_attachment(mut self, input: std::option::Option<crate::model::InstanceNetworkInterfaceAttachment>) -> Self {
            self.attachment = input;
            self
        }

        /// <p>The description.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>One or more security groups.</p>
        pub fn groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>One or more security groups.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.groups = input;
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

        /// <p>The MAC address.</p>
        pub fn mac_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.mac_address = Some(input.into());
            self
        }
        /// <p>The MAC address.</p>
        pub fn set_mac_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mac_address = input;
            self
        }

        /// <p>The ID of the network interface.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }

        /// <p>The ID of the AWS account that created the network interface.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the AWS account that created the network interface.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn set_private_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_dns_name = input;
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

        /// Appends an item to `private_ip_addresses`.
        ///
        /// To override the contents of this collection use [`set_private_ip_addresses`](Self::set_private_ip_addresses).
        ///
        /// <p>The private IPv4 addresses associated with the network interface.</p>
        pub fn private_ip_addresses(mut self, input: impl std::convert::Into<crate::model::InstancePrivateIpAddress>) -> Self {
            let mut v = self.private_ip_addresses.unwrap_or_default();
            v.push(input.into());
            self.private_ip_addresses = Some(v);
            self
        }
        /// <p>The private IPv4 addresses associated with the network interface.</p>
        pub fn set_private_ip_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstancePrivateIpAddress>>) -> Self {
            self.private_ip_addresses = input;
            self
        }

        /// <p>Indicates whether to validate network traffic to or from this network interface.</p>
        pub fn source_dest_check(mut self, input: bool) -> Self {
            self.source_dest_check = Some(input);
            self
        }
        /// <p>Indicates whether to validate network traffic to or from this network interface.</p>
        pub fn set_source_dest_check(mut self, input: std::option::Option<bool>) -> Self {
            self.source_dest_check = input;
            self
        }

        /// <p>The status of the network interface.</p>
        pub fn status(mut self, input: crate::model::NetworkInterfaceStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The status of the network interface.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::NetworkInterfaceStatus>) -> Self {
            self.status = input;
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

        /// <p>The ID of the VPC.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }

        /// <p>Describes the type of network interface. Valid values: <code>interface</code> | <code>efa</code></p>
        pub fn interface_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.interface_type = Some(input.into());
            self
        }
        /// <p>Describes the type of network interface. Valid values: <code>interface</code> | <code>efa</code></p>
        pub fn set_interface_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interface_type = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceNetworkInterface`](crate::model::InstanceNetworkInterface)
        pub fn build(self) -> crate::model::InstanceNetworkInterface {
            crate::model::InstanceNetworkInterface {
                association: self.association,
                attachment: self.attachment,
                description: self.description,
                groups: self.groups,
                ipv6_addresses: self.ipv6_addresses,
                mac_address: self.mac_address,
                network_interface_id: self.network_interface_id,
                owner_id: self.owner_id,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
                private_ip_addresses: self.private_ip_addresses,
                source_dest_check: self.source_dest_check,
                status: self.status,
                subnet_id: self.subnet_id,
                vpc_id: self.vpc_id,
                interface_type: self.interface_type,
            }
        }
    }
}
impl InstanceNetworkInterface {
    /// Creates a new builder-style object to manufacture [`InstanceNetworkInterface`](crate::model::InstanceNetworkInterface)
    pub fn builder() -> crate::model::instance_network_interface::Builder {
        crate::model::instance_network_interface::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum NetworkInterfaceStatus {
    #[allow(missing_docs)] // documentation missing in model
    Available,
    #[allow(missing_docs)] // documentation missing in model
    Associated,
    #[allow(missing_docs)] // documentation missing in model
    Attaching,
    #[allow(missing_docs)] // documentation missing in model
    InUse,
    #[allow(missing_docs)] // documentation missing in model
    Detaching,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for NetworkInterfaceStatus {
    fn from(s: &str) -> Self {
        match s {
            "available" => NetworkInterfaceStatus::Available,
            "associated" => NetworkInterfaceStatus::Associated,
            "attaching" => NetworkInterfaceStatus::Attaching,
            "in-use" => NetworkInterfaceStatus::InUse,
            "detaching" => NetworkInterfaceStatus::Detaching,
            other => NetworkInterfaceStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NetworkInterfaceStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NetworkInterfaceStatus::from(s))
    }
}
impl NetworkInterfaceStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            NetworkInterfaceStatus::Available => "available",
            NetworkInterfaceStatus::Associated => "associated",
            NetworkInterfaceStatus::Attaching => "attaching",
            NetworkInterfaceStatus::InUse => "in-use",
            NetworkInterfaceStatus::Detaching => "detaching",
            NetworkInterfaceStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "available",
            "associated",
            "attaching",
            "in-use",
            "detaching",
        ]
    }
}
impl AsRef<str> for NetworkInterfaceStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a state change.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct StateReason {
    /// <p>The reason code for the state change.</p>
    pub code: std::option::Option<std::string::String>,
    /// <p>The message for the state change.</p>
    pub message: std::option::Option<std::string::String>,
}
impl StateReason {
    /// <p>The reason code for the state change.</p>
    pub fn code(&self) -> std::option::Option<&str> {
        self.code.as_deref()
    }

    /// <p>The message for the state change.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for StateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.field("Message", &self.message);
        formatter.finish()
    }
}
/// See [`StateReason`](crate::model::StateReason)
pub mod state_reason {
    /// A builder for [`StateReason`](crate::model::StateReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The reason code for the state change.</p>
        pub fn code(mut self, input: impl Into<std::string::String>) -> Self {
            self.code = Some(input.into());
            self
        }
        /// <p>The reason code for the state change.</p>
        pub fn set_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.code = input;
            self
        }

        /// <p>The message for the state change.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The message for the state change.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`StateReason`](crate::model::StateReason)
        pub fn build(self) -> crate::model::StateReason {
            crate::model::StateReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl StateReason {
    /// Creates a new builder-style object to manufacture [`StateReason`](crate::model::StateReason)
    pub fn builder() -> crate::model::state_reason::Builder {
        crate::model::state_reason::Builder::default()
    }
}

/// <p>The CPU options for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CpuOptions {
    /// <p>The number of CPU cores for the instance.</p>
    pub core_count: std::option::Option<i32>,
    /// <p>The number of threads per CPU core.</p>
    pub threads_per_core: std::option::Option<i32>,
}
impl CpuOptions {
    /// <p>The number of CPU cores for the instance.</p>
    pub fn core_count(&self) -> std::option::Option<i32> {
        self.core_count
    }

    /// <p>The number of threads per CPU core.</p>
    pub fn threads_per_core(&self) -> std::option::Option<i32> {
        self.threads_per_core
    }
}
impl std::fmt::Debug for CpuOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CoreCount", &self.core_count);
        formatter.field("ThreadsPerCore", &self.threads_per_core);
        formatter.finish()
    }
}
/// See [`CpuOptions`](crate::model::CpuOptions)
pub mod cpu_options {
    /// A builder for [`CpuOptions`](crate::model::CpuOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) core_count: std::option::Option<i32>,
        pub(crate) threads_per_core: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of CPU cores for the instance.</p>
        pub fn core_count(mut self, input: i32) -> Self {
            self.core_count = Some(input);
            self
        }
        /// <p>The number of CPU cores for the instance.</p>
        pub fn set_core_count(mut self, input: std::option::Option<i32>) -> Self {
            self.core_count = input;
            self
        }

        /// <p>The number of threads per CPU core.</p>
        pub fn threads_per_core(mut self, input: i32) -> Self {
            self.threads_per_core = Some(input);
            self
        }
        /// <p>The number of threads per CPU core.</p>
        pub fn set_threads_per_core(mut self, input: std::option::Option<i32>) -> Self {
            self.threads_per_core = input;
            self
        }
        /// Consumes the builder and constructs a [`CpuOptions`](crate::model::CpuOptions)
        pub fn build(self) -> crate::model::CpuOptions {
            crate::model::CpuOptions {
                core_count: self.core_count,
                threads_per_core: self.threads_per_core,
            }
        }
    }
}
impl CpuOptions {
    /// Creates a new builder-style object to manufacture [`CpuOptions`](crate::model::CpuOptions)
    pub fn builder() -> crate::model::cpu_options::Builder {
        crate::model::cpu_options::Builder::default()
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
pub struct CapacityReservationTargetResponse {
    /// <p>The ID of the targeted Capacity Reservation.</p>
    pub capacity_reservation_id: std::option::Option<std::string::String>,
}
impl CapacityReservationTargetResponse {
    /// <p>The ID of the targeted Capacity Reservation.</p>
    pub fn capacity_reservation_id(&self) -> std::option::Option<&str> {
        self.capacity_reservation_id.as_deref()
    }
}
impl std::fmt::Debug for CapacityReservationTargetResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CapacityReservationId", &self.capacity_reservation_id);
        formatter.finish()
    }
}
/// See [`CapacityReservationTargetResponse`](crate::model::CapacityReservationTargetResponse)
pub mod capacity_reservation_target_response {
    /// A builder for [`CapacityReservationTargetResponse`](crate::model::CapacityReservationTargetResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the targeted Capacity Reservation.</p>
        pub fn capacity_reservation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.capacity_reservation_id = Some(input.into());
            self
        }
        /// <p>The ID of the targeted Capacity Reservation.</p>
        pub fn set_capacity_reservation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.capacity_reservation_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservationTargetResponse`](crate::model::CapacityReservationTargetResponse)
        pub fn build(self) -> crate::model::CapacityReservationTargetResponse {
            crate::model::CapacityReservationTargetResponse {
                capacity_reservation_id: self.capacity_reservation_id,
            }
        }
    }
}
impl CapacityReservationTargetResponse {
    /// Creates a new builder-style object to manufacture [`CapacityReservationTargetResponse`](crate::model::CapacityReservationTargetResponse)
    pub fn builder() -> crate::model::capacity_reservation_target_response::Builder {
        crate::model::capacity_reservation_target_response::Builder::default()
    }
}

/// <p>Describes the instance's Capacity Reservation targeting preferences.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CapacityReservationSpecificationResponse {
    /// <p>Describes the instance's Capacity Reservation preferences.</p>
    pub capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
    /// <p>Information about the targeted Capacity Reservation.</p>
    pub capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTargetResponse>,
}
impl CapacityReservationSpecificationResponse {
    /// <p>Describes the instance's Capacity Reservation preferences.</p>
    pub fn capacity_reservation_preference(&self) -> std::option::Option<&crate::model::CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// <p>Information about the targeted Capacity Reservation.</p>
    pub fn capacity_reservation_target(&self) -> std::option::Option<&crate::model::CapacityReservationTargetResponse> {
        self.capacity_reservation_target.as_ref()
    }
}
impl std::fmt::Debug for CapacityReservationSpecificationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("CapacityReservationPreference", &self.capacity_reservation_preference);
        formatter.field("CapacityReservationTarget", &self.capacity_reservation_target);
        formatter.finish()
    }
}
/// See [`CapacityReservationSpecificationResponse`](crate::model::CapacityReservationSpecificationResponse)
pub mod capacity_reservation_specification_response {
    /// A builder for [`CapacityReservationSpecificationResponse`](crate::model::CapacityReservationSpecificationResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
        pub(crate) capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTargetResponse>,
    }
    impl Builder {
        /// <p>Describes the instance's Capacity Reservation preferences.</p>
        pub fn capacity_reservation_preference(mut self, input: crate::model::CapacityReservationPreference) -> Self {
            self.capacity_reservation_preference = Some(input);
            self
        }
        /// <p>Describes the instance's Capacity Reservation preferences.</p>
        pub fn set_capacity_reservation_preference(mut self, input: std::option::Option<crate::model::CapacityReservationPreference>) -> Self {
            self.capacity_reservation_preference = input;
            self
        }

        /// <p>Information about the targeted Capacity Reservation.</p>
        pub fn capacity_reservation_target(mut self, input: crate::model::CapacityReservationTargetResponse) -> Self {
            self.capacity_reservation_target = Some(input);
            self
        }
        /// <p>Information about the targeted Capacity Reservation.</p>
        pub fn set_capacity_reservation_target(mut self, input: std::option::Option<crate::model::CapacityReservationTargetResponse>) -> Self {
            self.capacity_reservation_target = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservationSpecificationResponse`](crate::model::CapacityReservationSpecificationResponse)
        pub fn build(self) -> crate::model::CapacityReservationSpecificationResponse {
            crate::model::CapacityReservationSpecificationResponse {
                capacity_reservation_preference: self.capacity_reservation_preference,
                capacity_reservation_target: self.capacity_reservation_target,
            }
        }
    }
}
impl CapacityReservationSpecificationResponse {
    /// Creates a new builder-style object to manufacture [`CapacityReservationSpecificationResponse`](crate::model::CapacityReservationSpecificationResponse)
    pub fn builder() -> crate::model::capacity_reservation_specification_response::Builder {
        crate::model::capacity_reservation_specification_response::Builder::default()
    }
}

/// <p>Indicates whether your instance is configured for hibernation.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct HibernationOptions {
    /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub configured: std::option::Option<bool>,
}
impl HibernationOptions {
    /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub fn configured(&self) -> std::option::Option<bool> {
        self.configured
    }
}
impl std::fmt::Debug for HibernationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Configured", &self.configured);
        formatter.finish()
    }
}
/// See [`HibernationOptions`](crate::model::HibernationOptions)
pub mod hibernation_options {
    /// A builder for [`HibernationOptions`](crate::model::HibernationOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) configured: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn configured(mut self, input: bool) -> Self {
            self.configured = Some(input);
            self
        }
        /// <p>If this parameter is set to <code>true</code>, your instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn set_configured(mut self, input: std::option::Option<bool>) -> Self {
            self.configured = input;
            self
        }
        /// Consumes the builder and constructs a [`HibernationOptions`](crate::model::HibernationOptions)
        pub fn build(self) -> crate::model::HibernationOptions {
            crate::model::HibernationOptions {
                configured: self.configured,
            }
        }
    }
}
impl HibernationOptions {
    /// Creates a new builder-style object to manufacture [`HibernationOptions`](crate::model::HibernationOptions)
    pub fn builder() -> crate::model::hibernation_options::Builder {
        crate::model::hibernation_options::Builder::default()
    }
}

/// <p>Describes a license configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LicenseConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub license_configuration_arn: std::option::Option<std::string::String>,
}
impl LicenseConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub fn license_configuration_arn(&self) -> std::option::Option<&str> {
        self.license_configuration_arn.as_deref()
    }
}
impl std::fmt::Debug for LicenseConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LicenseConfigurationArn", &self.license_configuration_arn);
        formatter.finish()
    }
}
/// See [`LicenseConfiguration`](crate::model::LicenseConfiguration)
pub mod license_configuration {
    /// A builder for [`LicenseConfiguration`](crate::model::LicenseConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) license_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn license_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.license_configuration_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn set_license_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.license_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`LicenseConfiguration`](crate::model::LicenseConfiguration)
        pub fn build(self) -> crate::model::LicenseConfiguration {
            crate::model::LicenseConfiguration {
                license_configuration_arn: self.license_configuration_arn,
            }
        }
    }
}
impl LicenseConfiguration {
    /// Creates a new builder-style object to manufacture [`LicenseConfiguration`](crate::model::LicenseConfiguration)
    pub fn builder() -> crate::model::license_configuration::Builder {
        crate::model::license_configuration::Builder::default()
    }
}

/// <p>The metadata options for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceMetadataOptionsResponse {
    /// <p>The state of the metadata option changes.</p>
    pub state: std::option::Option<crate::model::InstanceMetadataOptionsState>,
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub http_tokens: std::option::Option<crate::model::HttpTokensState>,
    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    pub http_put_response_hop_limit: std::option::Option<i32>,
    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub http_endpoint: std::option::Option<crate::model::InstanceMetadataEndpointState>,
}
impl InstanceMetadataOptionsResponse {
    /// <p>The state of the metadata option changes.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceMetadataOptionsState> {
        self.state.as_ref()
    }

    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub fn http_tokens(&self) -> std::option::Option<&crate::model::HttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    pub fn http_put_response_hop_limit(&self) -> std::option::Option<i32> {
        self.http_put_response_hop_limit
    }

    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub fn http_endpoint(&self) -> std::option::Option<&crate::model::InstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }
}
impl std::fmt::Debug for InstanceMetadataOptionsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("State", &self.state);
        formatter.enum_field("HttpTokens", &self.http_tokens);
        formatter.field("HttpPutResponseHopLimit", &self.http_put_response_hop_limit);
        formatter.enum_field("HttpEndpoint", &self.http_endpoint);
        formatter.finish()
    }
}
/// See [`InstanceMetadataOptionsResponse`](crate::model::InstanceMetadataOptionsResponse)
pub mod instance_metadata_options_response {
    /// A builder for [`InstanceMetadataOptionsResponse`](crate::model::InstanceMetadataOptionsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::InstanceMetadataOptionsState>,
        pub(crate) http_tokens: std::option::Option<crate::model::HttpTokensState>,
        pub(crate) http_put_response_hop_limit: std::option::Option<i32>,
        pub(crate) http_endpoint: std::option::Option<crate::model::InstanceMetadataEndpointState>,
    }
    impl Builder {
        /// <p>The state of the metadata option changes.</p>
        pub fn state(mut self, input: crate::model::InstanceMetadataOptionsState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the metadata option changes.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::InstanceMetadataOptionsState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn http_tokens(mut self, input: crate::model::HttpTokensState) -> Self {
            self.http_tokens = Some(input);
            self
        }
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn set_http_tokens(mut self, input: std::option::Option<crate::model::HttpTokensState>) -> Self {
            self.http_tokens = input;
            self
        }

        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        pub fn http_put_response_hop_limit(mut self, input: i32) -> Self {
            self.http_put_response_hop_limit = Some(input);
            self
        }
        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        pub fn set_http_put_response_hop_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.http_put_response_hop_limit = input;
            self
        }

        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn http_endpoint(mut self, input: crate::model::InstanceMetadataEndpointState) -> Self {
            self.http_endpoint = Some(input);
            self
        }
        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn set_http_endpoint(mut self, input: std::option::Option<crate::model::InstanceMetadataEndpointState>) -> Self {
            self.http_endpoint = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceMetadataOptionsResponse`](crate::model::InstanceMetadataOptionsResponse)
        pub fn build(self) -> crate::model::InstanceMetadataOptionsResponse {
            crate::model::InstanceMetadataOptionsResponse {
                state: self.state,
                http_tokens: self.http_tokens,
                http_put_response_hop_limit: self.http_put_response_hop_limit,
                http_endpoint: self.http_endpoint,
            }
        }
    }
}
impl InstanceMetadataOptionsResponse {
    /// Creates a new builder-style object to manufacture [`InstanceMetadataOptionsResponse`](crate::model::InstanceMetadataOptionsResponse)
    pub fn builder() -> crate::model::instance_metadata_options_response::Builder {
        crate::model::instance_metadata_options_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceMetadataOptionsState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Applied,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceMetadataOptionsState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => InstanceMetadataOptionsState::Pending,
            "applied" => InstanceMetadataOptionsState::Applied,
            other => InstanceMetadataOptionsState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceMetadataOptionsState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceMetadataOptionsState::from(s))
    }
}
impl InstanceMetadataOptionsState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceMetadataOptionsState::Pending => "pending",
            InstanceMetadataOptionsState::Applied => "applied",
            InstanceMetadataOptionsState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "pending",
            "applied",
        ]
    }
}
impl AsRef<str> for InstanceMetadataOptionsState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Instance {
    /// <p>The AMI launch index, which can be used to find this instance in the launch group.</p>
    pub ami_launch_index: std::option::Option<i32>,
    /// <p>The ID of the AMI used to launch the instance.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The ID of the instance.</p>
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The kernel associated with this instance, if applicable.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>The name of the key pair.</p>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>The time the instance was launched.</p>
    pub launch_time: std::option::Option<smithy_types::Instant>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::Monitoring>,
    /// <p>The location where the instance launched, if applicable.</p>
    pub placement: std::option::Option<crate::model::Placement>,
    /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
    pub platform: std::option::Option<crate::model::PlatformValues>,
    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address assigned to the instance.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>The product codes attached to this resource, if applicable.</p>
    pub product_codes: std::option::Option<std::vec::Vec<crate::model::ProductCode>>,
    /// <p>The public DNS name.</p>
    pub public_dns_name: std::option::Option<std::string::String>,
    /// <p>The public IPv4 address, or the Carrier IP address assigned to the instance, if applicable.</p>
    pub public_ip_address: std::option::Option<std::string::String>,
    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub ramdisk_id: std::option::Option<std::string::String>,
    /// <p>The current state of the instance.</p>
    pub state: std::option::Option<crate::model::InstanceState>,
    /// <p>The reason for the most recent state transition. This might be an empty string.</p>
    pub state_transition_reason: std::option::Option<std::string::String>,
    /// <p>[EC2-VPC] The ID of the subnet in which the instance is running.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>[EC2-VPC] The ID of the VPC in which the instance is running.</p>
    pub vpc_id: std::option::Option<std::string::String>,
    /// <p>The architecture of the image.</p>
    pub architecture: std::option::Option<crate::model::ArchitectureValues>,
    /// <p>Any block device mapping entries for the instance.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
    /// <p>The idempotency token you provided when you launched the instance, if applicable.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS Optimized instance.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
    pub ena_support: std::option::Option<bool>,
    /// <p>The hypervisor type of the instance. The value <code>xen</code> is used for both Xen and Nitro hypervisors.</p>
    pub hypervisor: std::option::Option<crate::model::HypervisorType>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::IamInstanceProfile>,
    /// <p>Indicates whether this is a Spot Instance or a Scheduled Instance.</p>
    pub instance_lifecycle: std::option::Option<crate::model::InstanceLifecycleType>,
    /// <p>The Elastic GPU associated with the instance.</p>
    pub elastic_gpu_associations: std::option::Option<std::vec::Vec<crate::model::ElasticGpuAssociation>>,
    /// <p>The elastic inference accelerator associated with the instance.</p>
    pub elastic_inference_accelerator_associations: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAcceleratorAssociation>>,
    /// <p>[EC2-VPC] The network interfaces for the instance.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterface>>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub outpost_arn: std::option::Option<std::string::String>,
    /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
    pub root_device_name: std::option::Option<std::string::String>,
    /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
    pub root_device_type: std::option::Option<crate::model::DeviceType>,
    /// <p>The security groups for the instance.</p>
    pub security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>Specifies whether to enable an instance launched in a VPC to perform NAT. This controls whether source/destination checking is enabled on the instance. A value of <code>true</code> means that checking is enabled, and <code>false</code> means that checking is disabled. The value must be <code>false</code> for the instance to perform NAT.</p>
    pub source_dest_check: std::option::Option<bool>,
    /// <p>If the request is a Spot Instance request, the ID of the request.</p>
    pub spot_instance_request_id: std::option::Option<std::string::String>,
    /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
    pub sriov_net_support: std::option::Option<std::string::String>,
    /// <p>The reason for the most recent state transition.</p>
    pub state_reason: std::option::Option<crate::model::StateReason>,
    /// <p>Any tags assigned to the instance.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The virtualization type.</p>
    pub virtualization_type: std::option::Option<crate::model::VirtualizationType>,
    /// <p>The CPU options for the instance.</p>
    pub cpu_options: std::option::Option<crate::model::CpuOptions>,
    /// <p>The ID of the Capacity Reservation.</p>
    pub capacity_reservation_id: std::option::Option<std::string::String>,
    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub capacity_reservation_specification: std::option::Option<crate::model::CapacityReservationSpecificationResponse>,
    /// <p>Indicates whether the instance is enabled for hibernation.</p>
    pub hibernation_options: std::option::Option<crate::model::HibernationOptions>,
    /// <p>The license configurations.</p>
    pub licenses: std::option::Option<std::vec::Vec<crate::model::LicenseConfiguration>>,
    /// <p>The metadata options for the instance.</p>
    pub metadata_options: std::option::Option<crate::model::InstanceMetadataOptionsResponse>,
}
impl Instance {
    /// <p>The AMI launch index, which can be used to find this instance in the launch group.</p>
    pub fn ami_launch_index(&self) -> std::option::Option<i32> {
        self.ami_launch_index
    }

    /// <p>The ID of the AMI used to launch the instance.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The ID of the instance.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The kernel associated with this instance, if applicable.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>The name of the key pair.</p>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>The time the instance was launched.</p>
    pub fn launch_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.launch_time.as_ref()
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::Monitoring> {
        self.monitoring.as_ref()
    }

    /// <p>The location where the instance launched, if applicable.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::Placement> {
        self.placement.as_ref()
    }

    /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
    pub fn platform(&self) -> std::option::Option<&crate::model::PlatformValues> {
        self.platform.as_ref()
    }

    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// <p>The private IPv4 address assigned to the instance.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>The product codes attached to this resource, if applicable.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.product_codes.is_none()`.
    pub fn product_codes(&self) -> &[crate::model::ProductCode] {
        self.product_codes.as_deref().unwrap_or_default()
    }

    /// <p>The public DNS name.</p>
    pub fn public_dns_name(&self) -> std::option::Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// <p>The public IPv4 address, or the Carrier IP address assigned to the instance, if applicable.</p>
    pub fn public_ip_address(&self) -> std::option::Option<&str> {
        self.public_ip_address.as_deref()
    }

    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub fn ramdisk_id(&self) -> std::option::Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// <p>The current state of the instance.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceState> {
        self.state.as_ref()
    }

    /// <p>The reason for the most recent state transition. This might be an empty string.</p>
    pub fn state_transition_reason(&self) -> std::option::Option<&str> {
        self.state_transition_reason.as_deref()
    }

    /// <p>[EC2-VPC] The ID of the subnet in which the instance is running.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>[EC2-VPC] The ID of the VPC in which the instance is running.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }

    /// <p>The architecture of the image.</p>
    pub fn architecture(&self) -> std::option::Option<&crate::model::ArchitectureValues> {
        self.architecture.as_ref()
    }

    /// <p>Any block device mapping entries for the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::InstanceBlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>The idempotency token you provided when you launched the instance, if applicable.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS Optimized instance.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
    pub fn ena_support(&self) -> std::option::Option<bool> {
        self.ena_support
    }

    /// <p>The hypervisor type of the instance. The value <code>xen</code> is used for both Xen and Nitro hypervisors.</p>
    pub fn hypervisor(&self) -> std::option::Option<&crate::model::HypervisorType> {
        self.hypervisor.as_ref()
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::IamInstanceProfile> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>Indicates whether this is a Spot Instance or a Scheduled Instance.</p>
    pub fn instance_lifecycle(&self) -> std::option::Option<&crate::model::InstanceLifecycleType> {
        self.instance_lifecycle.as_ref()
    }

    /// <p>The Elastic GPU associated with the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_gpu_associations.is_none()`.
    pub fn elastic_gpu_associations(&self) -> &[crate::model::ElasticGpuAssociation] {
        self.elastic_gpu_associations.as_deref().unwrap_or_default()
    }

    /// <p>The elastic inference accelerator associated with the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_inference_accelerator_associations.is_none()`.
    pub fn elastic_inference_accelerator_associations(&self) -> &[crate::model::ElasticInferenceAcceleratorAssociation] {
        self.elastic_inference_accelerator_associations.as_deref().unwrap_or_default()
    }

    /// <p>[EC2-VPC] The network interfaces for the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::InstanceNetworkInterface] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }

    /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
    pub fn root_device_name(&self) -> std::option::Option<&str> {
        self.root_device_name.as_deref()
    }

    /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
    pub fn root_device_type(&self) -> std::option::Option<&crate::model::DeviceType> {
        self.root_device_type.as_ref()
    }

    /// <p>The security groups for the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[crate::model::GroupIdentifier] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>Specifies whether to enable an instance launched in a VPC to perform NAT. This controls whether source/destination checking is enabled on the instance. A value of <code>true</code> means that checking is enabled, and <code>false</code> means that checking is disabled. The value must be <code>false</code> for the instance to perform NAT.</p>
    pub fn source_dest_check(&self) -> std::option::Option<bool> {
        self.source_dest_check
    }

    /// <p>If the request is a Spot Instance request, the ID of the request.</p>
    pub fn spot_instance_request_id(&self) -> std::option::Option<&str> {
        self.spot_instance_request_id.as_deref()
    }

    /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
    pub fn sriov_net_support(&self) -> std::option::Option<&str> {
        self.sriov_net_support.as_deref()
    }

    /// <p>The reason for the most recent state transition.</p>
    pub fn state_reason(&self) -> std::option::Option<&crate::model::StateReason> {
        self.state_reason.as_ref()
    }

    /// <p>Any tags assigned to the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The virtualization type.</p>
    pub fn virtualization_type(&self) -> std::option::Option<&crate::model::VirtualizationType> {
        self.virtualization_type.as_ref()
    }

    /// <p>The CPU options for the instance.</p>
    pub fn cpu_options(&self) -> std::option::Option<&crate::model::CpuOptions> {
        self.cpu_options.as_ref()
    }

    /// <p>The ID of the Capacity Reservation.</p>
    pub fn capacity_reservation_id(&self) -> std::option::Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub fn capacity_reservation_specification(&self) -> std::option::Option<&crate::model::CapacityReservationSpecificationResponse> {
        self.capacity_reservation_specification.as_ref()
    }

    /// <p>Indicates whether the instance is enabled for hibernation.</p>
    pub fn hibernation_options(&self) -> std::option::Option<&crate::model::HibernationOptions> {
        self.hibernation_options.as_ref()
    }

    /// <p>The license configurations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.licenses.is_none()`.
    pub fn licenses(&self) -> &[crate::model::LicenseConfiguration] {
        self.licenses.as_deref().unwrap_or_default()
    }

    /// <p>The metadata options for the instance.</p>
    pub fn metadata_options(&self) -> std::option::Option<&crate::model::InstanceMetadataOptionsResponse> {
        self.metadata_options.as_ref()
    }
}
impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AmiLaunchIndex", &self.ami_launch_index);
        formatter.field("ImageId", &self.image_id);
        formatter.field("InstanceId", &self.instance_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("KeyName", &self.key_name);
        formatter.field("LaunchTime", &self.launch_time);
        formatter.field("Monitoring", &self.monitoring);
        formatter.field("Placement", &self.placement);
        formatter.enum_field("Platform", &self.platform);
        formatter.field("PrivateDnsName", &self.private_dns_name);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("ProductCodes", &self.product_codes);
        formatter.field("PublicDnsName", &self.public_dns_name);
        formatter.field("PublicIpAddress", &self.public_ip_address);
        formatter.field("RamdiskId", &self.ramdisk_id);
        formatter.field("State", &self.state);
        formatter.field("StateTransitionReason", &self.state_transition_reason);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("VpcId", &self.vpc_id);
        formatter.enum_field("Architecture", &self.architecture);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("ClientToken", &self.client_token);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("EnaSupport", &self.ena_support);
        formatter.enum_field("Hypervisor", &self.hypervisor);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.enum_field("InstanceLifecycle", &self.instance_lifecycle);
        formatter.field("ElasticGpuAssociations", &self.elastic_gpu_associations);
        formatter.field("ElasticInferenceAcceleratorAssociations", &self.elastic_inference_accelerator_associations);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("OutpostArn", &self.outpost_arn);
        formatter.field("RootDeviceName", &self.root_device_name);
        formatter.enum_field("RootDeviceType", &self.root_device_type);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("SourceDestCheck", &self.source_dest_check);
        formatter.field("SpotInstanceRequestId", &self.spot_instance_request_id);
        formatter.field("SriovNetSupport", &self.sriov_net_support);
        formatter.field("StateReason", &self.state_reason);
        formatter.field("Tags", &self.tags);
        formatter.enum_field("VirtualizationType", &self.virtualization_type);
        formatter.field("CpuOptions", &self.cpu_options);
        formatter.field("CapacityReservationId", &self.capacity_reservation_id);
        formatter.field("CapacityReservationSpecification", &self.capacity_reservation_specification);
        formatter.field("HibernationOptions", &self.hibernation_options);
        formatter.field("Licenses", &self.licenses);
        formatter.field("MetadataOptions", &self.metadata_options);
        formatter.finish()
    }
}
/// See [`Instance`](crate::model::Instance)
pub mod instance {
    /// A builder for [`Instance`](crate::model::Instance)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ami_launch_index: std::option::Option<i32>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) launch_time: std::option::Option<smithy_types::Instant>,
        pub(crate) monitoring: std::option::Option<crate::model::Monitoring>,
        pub(crate) placement: std::option::Option<crate::model::Placement>,
        pub(crate) platform: std::option::Option<crate::model::PlatformValues>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) product_codes: std::option::Option<std::vec::Vec<crate::model::ProductCode>>,
        pub(crate) public_dns_name: std::option::Option<std::string::String>,
        pub(crate) public_ip_address: std::option::Option<std::string::String>,
        pub(crate) ramdisk_id: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<crate::model::InstanceState>,
        pub(crate) state_transition_reason: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) architecture: std::option::Option<crate::model::ArchitectureValues>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>,
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) ena_support: std::option::Option<bool>,
        pub(crate) hypervisor: std::option::Option<crate::model::HypervisorType>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::IamInstanceProfile>,
        pub(crate) instance_lifecycle: std::option::Option<crate::model::InstanceLifecycleType>,
        pub(crate) elastic_gpu_associations: std::option::Option<std::vec::Vec<crate::model::ElasticGpuAssociation>>,
        pub(crate) elastic_inference_accelerator_associations: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAcceleratorAssociation>>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterface>>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
        pub(crate) root_device_name: std::option::Option<std::string::String>,
        pub(crate) root_device_type: std::option::Option<crate::model::DeviceType>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) source_dest_check: std::option::Option<bool>,
        pub(crate) spot_instance_request_id: std::option::Option<std::string::String>,
        pub(crate) sriov_net_support: std::option::Option<std::string::String>,
        pub(crate) state_reason: std::option::Option<crate::model::StateReason>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) virtualization_type: std::option::Option<crate::model::VirtualizationType>,
        pub(crate) cpu_options: std::option::Option<crate::model::CpuOptions>,
        pub(crate) capacity_reservation_id: std::option::Option<std::string::String>,
        pub(crate) capacity_reservation_specification: std::option::Option<crate::model::CapacityReservationSpecificationResponse>,
        pub(crate) hibernation_options: std::option::Option<crate::model::HibernationOptions>,
        pub(crate) licenses: std::option::Option<std::vec::Vec<crate::model::LicenseConfiguration>>,
        pub(crate) metadata_options: std::option::Option<crate::model::InstanceMetadataOptionsResponse>,
    }
    impl Builder {
        /// <p>The AMI launch index, which can be used to find this instance in the launch group.</p>
        pub fn ami_launch_index(mut self, input: i32) -> Self {
            self.ami_launch_index = Some(input);
            self
        }
        /// <p>The AMI launch index, which can be used to find this instance in the launch group.</p>
        pub fn set_ami_launch_index(mut self, input: std::option::Option<i32>) -> Self {
            self.ami_launch_index = input;
            self
        }

        /// <p>The ID of the AMI used to launch the instance.</p>
        pub fn image_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_id = Some(input.into());
            self
        }
        /// <p>The ID of the AMI used to launch the instance.</p>
        pub fn set_image_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_id = input;
            self
        }

        /// <p>The ID of the instance.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of the instance.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
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

        /// <p>The time the instance was launched.</p>
        pub fn launch_time(mut self, input: smithy_types::Instant) -> Self {
            self.launch_time = Some(input);
            self
        }
        /// <p>The time the instance was launched.</p>
        pub fn set_launch_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.launch_time = input;
            self
        }

        /// <p>The monitoring for the instance.</p>
        pub fn monitoring(mut self, input: crate::model::Monitoring) -> Self {
            self.monitoring = Some(input);
            self
        }
        /// <p>The monitoring for the instance.</p>
        pub fn set_monitoring(mut self, input: std::option::Option<crate::model::Monitoring>) -> Self {
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

        /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
        pub fn platform(mut self, input: crate::model::PlatformValues) -> Self {
            self.platform = Some(input);
            self
        }
        /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
        pub fn set_platform(mut self, input: std::option::Option<crate::model::PlatformValues>) -> Self {
            self.platform = input;
            self
        }

        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn set_private_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_dns_name = input;
            self
        }

        /// <p>The private IPv4 address assigned to the instance.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The private IPv4 address assigned to the instance.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }

        /// Appends an item to `product_codes`.
        ///
        /// To override the contents of this collection use [`set_product_codes`](Self::set_product_codes).
        ///
        /// <p>The product codes attached to this resource, if applicable.</p>
        pub fn product_codes(mut self, input: impl std::convert::Into<crate::model::ProductCode>) -> Self {
            let mut v = self.product_codes.unwrap_or_default();
            v.push(input.into());
            self.product_codes = Some(v);
            self
        }
        /// <p>The product codes attached to this resource, if applicable.</p>
        pub fn set_product_codes(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProductCode>>) -> Self {
            self.product_codes = input;
            self
        }

        /// <p>The public DNS name.</p>
        pub fn public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_dns_name = Some(input.into());
            self
        }
        /// <p>The public DNS name.</p>
        pub fn set_public_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_dns_name = input;
            self
        }

        /// <p>The public IPv4 address, or the Carrier IP address assigned to the instance, if applicable.</p>
        pub fn public_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_ip_address = Some(input.into());
            self
        }
        /// <p>The public IPv4 address, or the Carrier IP address assigned to the instance, if applicable.</p>
        pub fn set_public_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_ip_address = input;
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

        /// <p>The current state of the instance.</p>
        pub fn state(mut self, input: crate::model::InstanceState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The current state of the instance.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::InstanceState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The reason for the most recent state transition. This might be an empty string.</p>
        pub fn state_transition_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.state_transition_reason = Some(input.into());
            self
        }
        /// <p>The reason for the most recent state transition. This might be an empty string.</p>
        pub fn set_state_transition_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state_transition_reason = input;
            self
        }

        /// <p>[EC2-VPC] The ID of the subnet in which the instance is running.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>[EC2-VPC] The ID of the subnet in which the instance is running.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }

        /// <p>[EC2-VPC] The ID of the VPC in which the instance is running.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>[EC2-VPC] The ID of the VPC in which the instance is running.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }

        /// <p>The architecture of the image.</p>
        pub fn architecture(mut self, input: crate::model::ArchitectureValues) -> Self {
            self.architecture = Some(input);
            self
        }
        /// <p>The architecture of the image.</p>
        pub fn set_architecture(mut self, input: std::option::Option<crate::model::ArchitectureValues>) -> Self {
            self.architecture = input;
            self
        }

        /// Appends an item to `block_device_mappings`.
        ///
        /// To override the contents of this collection use [`set_block_device_mappings`](Self::set_block_device_mappings).
        ///
        /// <p>Any block device mapping entries for the instance.</p>
        pub fn block_device_mappings(mut self, input: impl std::convert::Into<crate::model::InstanceBlockDeviceMapping>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        /// <p>Any block device mapping entries for the instance.</p>
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceBlockDeviceMapping>>) -> Self {
            self.block_device_mappings = input;
            self
        }

        /// <p>The idempotency token you provided when you launched the instance, if applicable.</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>The idempotency token you provided when you launched the instance, if applicable.</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS Optimized instance.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS Optimized instance.</p>
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }

        /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
        pub fn ena_support(mut self, input: bool) -> Self {
            self.ena_support = Some(input);
            self
        }
        /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
        pub fn set_ena_support(mut self, input: std::option::Option<bool>) -> Self {
            self.ena_support = input;
            self
        }

        /// <p>The hypervisor type of the instance. The value <code>xen</code> is used for both Xen and Nitro hypervisors.</p>
        pub fn hypervisor(mut self, input: crate::model::HypervisorType) -> Self {
            self.hypervisor = Some(input);
            self
        }
        /// <p>The hypervisor type of the instance. The value <code>xen</code> is used for both Xen and Nitro hypervisors.</p>
        pub fn set_hypervisor(mut self, input: std::option::Option<crate::model::HypervisorType>) -> Self {
            self.hypervisor = input;
            self
        }

        /// <p>The IAM instance profile.</p>
        pub fn iam_instance_profile(mut self, input: crate::model::IamInstanceProfile) -> Self {
            self.iam_instance_profile = Some(input);
            self
        }
        /// <p>The IAM instance profile.</p>
        pub fn set_iam_instance_profile(mut self, input: std::option::Option<crate::model::IamInstanceProfile>) -> Self {
            self.iam_instance_profile = input;
            self
        }

        /// <p>Indicates whether this is a Spot Instance or a Scheduled Instance.</p>
        pub fn instance_lifecycle(mut self, input: crate::model::InstanceLifecycleType) -> Self {
            self.instance_lifecycle = Some(input);
            self
        }
        /// <p>Indicates whether this is a Spot Instance or a Scheduled Instance.</p>
        pub fn set_instance_lifecycle(mut self, input: std::option::Option<crate::model::InstanceLifecycleType>) -> Self {
            self.instance_lifecycle = input;
            self
        }

        /// Appends an item to `elastic_gpu_associations`.
        ///
        /// To override the contents of this collection use [`set_elastic_gpu_associations`](Self::set_elastic_gpu_associations).
        ///
        /// <p>The Elastic GPU associated with the instance.</p>
        pub fn elastic_gpu_associations(mut self, input: impl std::convert::Into<crate::model::ElasticGpuAssociation>) -> Self {
            let mut v = self.elastic_gpu_associations.unwrap_or_default();
            v.push(input.into());
            self.elastic_gpu_associations = Some(v);
            self
        }
        /// <p>The Elastic GPU associated with the instance.</p>
        pub fn set_elastic_gpu_associations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticGpuAssociation>>) -> Self {
            self.elastic_gpu_associations = input;
            self
        }

        /// Appends an item to `elastic_inference_accelerator_associations`.
        ///
        /// To override the contents of this collection use [`set_elastic_inference_accelerator_associations`](Self::set_elastic_inference_accelerator_associations).
        ///
        /// <p>The elastic inference accelerator associated with the instance.</p>
        pub fn elastic_inference_accelerator_associations(mut self, input: impl std::convert::Into<crate::model::ElasticInferenceAcceleratorAssociation>) -> Self {
            let mut v = self.elastic_inference_accelerator_associations.unwrap_or_default();
            v.push(input.into());
            self.elastic_inference_accelerator_associations = Some(v);
            self
        }
        /// <p>The elastic inference accelerator associated with the instance.</p>
        pub fn set_elastic_inference_accelerator_associations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAcceleratorAssociation>>) -> Self {
            self.elastic_inference_accelerator_associations = input;
            self
        }

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>[EC2-VPC] The network interfaces for the instance.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::InstanceNetworkInterface>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>[EC2-VPC] The network interfaces for the instance.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterface>>) -> Self {
            self.network_interfaces = input;
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

        /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
        pub fn root_device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.root_device_name = Some(input.into());
            self
        }
        /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
        pub fn set_root_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.root_device_name = input;
            self
        }

        /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
        pub fn root_device_type(mut self, input: crate::model::DeviceType) -> Self {
            self.root_device_type = Some(input);
            self
        }
        /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
        pub fn set_root_device_type(mut self, input: std::option::Option<crate::model::DeviceType>) -> Self {
            self.root_device_type = input;
            self
        }

        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>The security groups for the instance.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>The security groups for the instance.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>Specifies whether to enable an instance launched in a VPC to perform NAT. This controls whether source/destination checking is enabled on the instance. A value of <code>true</code> means that checking is enabled, and <code>false</code> means that checking is disabled. The value must be <code>false</code> for the instance to perform NAT.</p>
        pub fn source_dest_check(mut self, input: bool) -> Self {
            self.source_dest_check = Some(input);
            self
        }
        /// <p>Specifies whether to enable an instance launched in a VPC to perform NAT. This controls whether source/destination checking is enabled on the instance. A value of <code>true</code> means that checking is enabled, and <code>false</code> means that checking is disabled. The value must be <code>false</code> for the instance to perform NAT.</p>
        pub fn set_source_dest_check(mut self, input: std::option::Option<bool>) -> Self {
            self.source_dest_check = input;
            self
        }

        /// <p>If the request is a Spot Instance request, the ID of the request.</p>
        pub fn spot_instance_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_instance_request_id = Some(input.into());
            self
        }
        /// <p>If the request is a Spot Instance request, the ID of the request.</p>
        pub fn set_spot_instance_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_instance_request_id = input;
            self
        }

        /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
        pub fn sriov_net_support(mut self, input: impl Into<std::string::String>) -> Self {
            self.sriov_net_support = Some(input.into());
            self
        }
        /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
        pub fn set_sriov_net_support(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sriov_net_support = input;
            self
        }

        /// <p>The reason for the most recent state transition.</p>
        pub fn state_reason(mut self, input: crate::model::StateReason) -> Self {
            self.state_reason = Some(input);
            self
        }
        /// <p>The reason for the most recent state transition.</p>
        pub fn set_state_reason(mut self, input: std::option::Option<crate::model::StateReason>) -> Self {
            self.state_reason = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the instance.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the instance.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The virtualization type.</p>
        pub fn virtualization_type(mut self, input: crate::model::VirtualizationType) -> Self {
            self.virtualization_type = Some(input);
            self
        }
        /// <p>The virtualization type.</p>
        pub fn set_virtualization_type(mut self, input: std::option::Option<crate::model::VirtualizationType>) -> Self {
            self.virtualization_type = input;
            self
        }

        /// <p>The CPU options for the instance.</p>
        pub fn cpu_options(mut self, input: crate::model::CpuOptions) -> Self {
            self.cpu_options = Some(input);
            self
        }
        /// <p>The CPU options for the instance.</p>
        pub fn set_cpu_options(mut self, input: std::option::Option<crate::model::CpuOptions>) -> Self {
            self.cpu_options = input;
            self
        }

        /// <p>The ID of the Capacity Reservation.</p>
        pub fn capacity_reservation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.capacity_reservation_id = Some(input.into());
            self
        }
        /// <p>The ID of the Capacity Reservation.</p>
        pub fn set_capacity_reservation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.capacity_reservation_id = input;
            self
        }

        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn capacity_reservation_specification(mut self, input: crate::model::CapacityReservationSpecificationResponse) -> Self {
            self.capacity_reservation_specification = Some(input);
            self
        }
        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn set_capacity_reservation_specification(mut self, input: std::option::Option<crate::model::CapacityReservationSpecificationResponse>) -> Self {
            self.capacity_reservation_specification = input;
            self
        }

        /// <p>Indicates whether the instance is enabled for hibernation.</p>
        pub fn hibernation_options(mut self, input: crate::model::HibernationOptions) -> Self {
            self.hibernation_options = Some(input);
            self
        }
        /// <p>Indicates whether the instance is enabled for hibernation.</p>
        pub fn set_hibernation_options(mut self, input: std::option::Option<crate::model::HibernationOptions>) -> Self {
            self.hibernation_options = input;
            self
        }

        /// Appends an item to `licenses`.
        ///
        /// To override the contents of this collection use [`set_licenses`](Self::set_licenses).
        ///
        /// <p>The license configurations.</p>
        pub fn licenses(mut self, input: impl std::convert::Into<crate::model::LicenseConfiguration>) -> Self {
            let mut v = self.licenses.unwrap_or_default();
            v.push(input.into());
            self.licenses = Some(v);
            self
        }
        /// <p>The license configurations.</p>
        pub fn set_licenses(mut self, input: std::option::Option<std::vec::Vec<crate::model::LicenseConfiguration>>) -> Self {
            self.licenses = input;
            self
        }

        /// <p>The metadata options for the instance.</p>
        pub fn metadata_options(mut self, input: crate::model::InstanceMetadataOptionsResponse) -> Self {
            self.metadata_options = Some(input);
            self
        }
        /// <p>The metadata options for the instance.</p>
        pub fn set_metadata_options(mut self, input: std::option::Option<crate::model::InstanceMetadataOptionsResponse>) -> Self {
            self.metadata_options = input;
            self
        }
        /// Consumes the builder and constructs a [`Instance`](crate::model::Instance)
        pub fn build(self) -> crate::model::Instance {
            crate::model::Instance {
                ami_launch_index: self.ami_launch_index,
                image_id: self.image_id,
                instance_id: self.instance_id,
                instance_type: self.instance_type,
                kernel_id: self.kernel_id,
                key_name: self.key_name,
                launch_time: self.launch_time,
                monitoring: self.monitoring,
                placement: self.placement,
                platform: self.platform,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
                product_codes: self.product_codes,
                public_dns_name: self.public_dns_name,
                public_ip_address: self.public_ip_address,
                ramdisk_id: self.ramdisk_id,
                state: self.state,
                state_transition_reason: self.state_transition_reason,
                subnet_id: self.subnet_id,
                vpc_id: self.vpc_id,
                architecture: self.architecture,
                block_device_mappings: self.block_device_mappings,
                client_token: self.client_token,
                ebs_optimized: self.ebs_optimized,
                ena_support: self.ena_support,
                hypervisor: self.hypervisor,
                iam_instance_profile: self.iam_instance_profile,
                instance_lifecycle: self.instance_lifecycle,
                elastic_gpu_associations: self.elastic_gpu_associations,
                elastic_inference_accelerator_associations: self.elastic_inference_accelerator_associations,
                network_interfaces: self.network_interfaces,
                outpost_arn: self.outpost_arn,
                root_device_name: self.root_device_name,
                root_device_type: self.root_device_type,
                security_groups: self.security_groups,
                source_dest_check: self.source_dest_check,
                spot_instance_request_id: self.spot_instance_request_id,
                sriov_net_support: self.sriov_net_support,
                state_reason: self.state_reason,
                tags: self.tags,
                virtualization_type: self.virtualization_type,
                cpu_options: self.cpu_options,
                capacity_reservation_id: self.capacity_reservation_id,
                capacity_reservation_specification: self.capacity_reservation_specification,
                hibernation_options: self.hibernation_options,
                licenses: self.licenses,
                metadata_options: self.metadata_options,
            }
        }
    }
}
impl Instance {
    /// Creates a new builder-style object to manufacture [`Instance`](crate::model::Instance)
    pub fn builder() -> crate::model::instance::Builder {
        crate::model::instance::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum PlatformValues {
    #[allow(missing_docs)] // documentation missing in model
    Windows,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for PlatformValues {
    fn from(s: &str) -> Self {
        match s {
            "Windows" => PlatformValues::Windows,
            other => PlatformValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PlatformValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PlatformValues::from(s))
    }
}
impl PlatformValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            PlatformValues::Windows => "Windows",
            PlatformValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Windows",
        ]
    }
}
impl AsRef<str> for PlatformValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ArchitectureValues {
    #[allow(missing_docs)] // documentation missing in model
    I386,
    #[allow(missing_docs)] // documentation missing in model
    X8664,
    #[allow(missing_docs)] // documentation missing in model
    Arm64,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ArchitectureValues {
    fn from(s: &str) -> Self {
        match s {
            "i386" => ArchitectureValues::I386,
            "x86_64" => ArchitectureValues::X8664,
            "arm64" => ArchitectureValues::Arm64,
            other => ArchitectureValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ArchitectureValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ArchitectureValues::from(s))
    }
}
impl ArchitectureValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ArchitectureValues::I386 => "i386",
            ArchitectureValues::X8664 => "x86_64",
            ArchitectureValues::Arm64 => "arm64",
            ArchitectureValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "i386",
            "x86_64",
            "arm64",
        ]
    }
}
impl AsRef<str> for ArchitectureValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum HypervisorType {
    #[allow(missing_docs)] // documentation missing in model
    Ovm,
    #[allow(missing_docs)] // documentation missing in model
    Xen,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for HypervisorType {
    fn from(s: &str) -> Self {
        match s {
            "ovm" => HypervisorType::Ovm,
            "xen" => HypervisorType::Xen,
            other => HypervisorType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HypervisorType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HypervisorType::from(s))
    }
}
impl HypervisorType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            HypervisorType::Ovm => "ovm",
            HypervisorType::Xen => "xen",
            HypervisorType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "ovm",
            "xen",
        ]
    }
}
impl AsRef<str> for HypervisorType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceLifecycleType {
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    #[allow(missing_docs)] // documentation missing in model
    Scheduled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceLifecycleType {
    fn from(s: &str) -> Self {
        match s {
            "spot" => InstanceLifecycleType::Spot,
            "scheduled" => InstanceLifecycleType::Scheduled,
            other => InstanceLifecycleType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceLifecycleType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceLifecycleType::from(s))
    }
}
impl InstanceLifecycleType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceLifecycleType::Spot => "spot",
            InstanceLifecycleType::Scheduled => "scheduled",
            InstanceLifecycleType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "spot",
            "scheduled",
        ]
    }
}
impl AsRef<str> for InstanceLifecycleType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DeviceType {
    #[allow(missing_docs)] // documentation missing in model
    Ebs,
    #[allow(missing_docs)] // documentation missing in model
    InstanceStore,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DeviceType {
    fn from(s: &str) -> Self {
        match s {
            "ebs" => DeviceType::Ebs,
            "instance-store" => DeviceType::InstanceStore,
            other => DeviceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DeviceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DeviceType::from(s))
    }
}
impl DeviceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            DeviceType::Ebs => "ebs",
            DeviceType::InstanceStore => "instance-store",
            DeviceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "ebs",
            "instance-store",
        ]
    }
}
impl AsRef<str> for DeviceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VirtualizationType {
    #[allow(missing_docs)] // documentation missing in model
    Hvm,
    #[allow(missing_docs)] // documentation missing in model
    Paravirtual,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VirtualizationType {
    fn from(s: &str) -> Self {
        match s {
            "hvm" => VirtualizationType::Hvm,
            "paravirtual" => VirtualizationType::Paravirtual,
            other => VirtualizationType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VirtualizationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VirtualizationType::from(s))
    }
}
impl VirtualizationType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            VirtualizationType::Hvm => "hvm",
            VirtualizationType::Paravirtual => "paravirtual",
            VirtualizationType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "hvm",
            "paravirtual",
        ]
    }
}
impl AsRef<str> for VirtualizationType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a reservation.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Reservation {
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
impl Reservation {
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
impl std::fmt::Debug for Reservation {
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
/// See [`Reservation`](crate::model::Reservation)
pub mod reservation {
    /// A builder for [`Reservation`](crate::model::Reservation)
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
        /// Consumes the builder and constructs a [`Reservation`](crate::model::Reservation)
        pub fn build(self) -> crate::model::Reservation {
            crate::model::Reservation {
                groups: self.groups,
                instances: self.instances,
                owner_id: self.owner_id,
                requester_id: self.requester_id,
                reservation_id: self.reservation_id,
            }
        }
    }
}
impl Reservation {
    /// Creates a new builder-style object to manufacture [`Reservation`](crate::model::Reservation)
    pub fn builder() -> crate::model::reservation::Builder {
        crate::model::reservation::Builder::default()
    }
}

/// <p>Describes an image.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Image {
    /// <p>The architecture of the image.</p>
    pub architecture: std::option::Option<crate::model::ArchitectureValues>,
    /// <p>The date and time the image was created.</p>
    pub creation_date: std::option::Option<std::string::String>,
    /// <p>The ID of the AMI.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The location of the AMI.</p>
    pub image_location: std::option::Option<std::string::String>,
    /// <p>The type of image.</p>
    pub image_type: std::option::Option<crate::model::ImageTypeValues>,
    /// <p>Indicates whether the image has public launch permissions. The value is <code>true</code> if this image has public launch permissions or <code>false</code> if it has only implicit and explicit launch permissions.</p>
    pub public: std::option::Option<bool>,
    /// <p>The kernel associated with the image, if any. Only applicable for machine images.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>The AWS account ID of the image owner.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>This value is set to <code>windows</code> for Windows AMIs; otherwise, it is blank.</p>
    pub platform: std::option::Option<crate::model::PlatformValues>,
    /// <p>The platform details associated with the billing code of the AMI.</p>
    pub platform_details: std::option::Option<std::string::String>,
    /// <p>The operation of the Amazon EC2 instance and the billing code that is associated with the AMI.</p>
    pub usage_operation: std::option::Option<std::string::String>,
    /// <p>Any product codes associated with the AMI.</p>
    pub product_codes: std::option::Option<std::vec::Vec<crate::model::ProductCode>>,
    /// <p>The RAM disk associated with the image, if any. Only applicable for machine images.</p>
    pub ramdisk_id: std::option::Option<std::string::String>,
    /// <p>The current state of the AMI. If the state is <code>available</code>, the image is successfully registered and can be used to launch an instance.</p>
    pub state: std::option::Option<crate::model::ImageState>,
    /// <p>Any block device mapping entries.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
    /// <p>The description of the AMI that was provided during image creation.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
    pub ena_support: std::option::Option<bool>,
    /// <p>The hypervisor type of the image.</p>
    pub hypervisor: std::option::Option<crate::model::HypervisorType>,
    /// <p>The AWS account alias (for example, <code>amazon</code>, <code>self</code>) or the AWS account ID of the AMI owner.</p>
    pub image_owner_alias: std::option::Option<std::string::String>,
    /// <p>The name of the AMI that was provided during image creation.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
    pub root_device_name: std::option::Option<std::string::String>,
    /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
    pub root_device_type: std::option::Option<crate::model::DeviceType>,
    /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
    pub sriov_net_support: std::option::Option<std::string::String>,
    /// <p>The reason for the state change.</p>
    pub state_reason: std::option::Option<crate::model::StateReason>,
    /// <p>Any tags assigned to the image.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The type of virtualization of the AMI.</p>
    pub virtualization_type: std::option::Option<crate::model::VirtualizationType>,
}
impl Image {
    /// <p>The architecture of the image.</p>
    pub fn architecture(&self) -> std::option::Option<&crate::model::ArchitectureValues> {
        self.architecture.as_ref()
    }

    /// <p>The date and time the image was created.</p>
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }

    /// <p>The ID of the AMI.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The location of the AMI.</p>
    pub fn image_location(&self) -> std::option::Option<&str> {
        self.image_location.as_deref()
    }

    /// <p>The type of image.</p>
    pub fn image_type(&self) -> std::option::Option<&crate::model::ImageTypeValues> {
        self.image_type.as_ref()
    }

    /// <p>Indicates whether the image has public launch permissions. The value is <code>true</code> if this image has public launch permissions or <code>false</code> if it has only implicit and explicit launch permissions.</p>
    pub fn public(&self) -> std::option::Option<bool> {
        self.public
    }

    /// <p>The kernel associated with the image, if any. Only applicable for machine images.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>The AWS account ID of the image owner.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>This value is set to <code>windows</code> for Windows AMIs; otherwise, it is blank.</p>
    pub fn platform(&self) -> std::option::Option<&crate::model::PlatformValues> {
        self.platform.as_ref()
    }

    /// <p>The platform details associated with the billing code of the AMI.</p>
    pub fn platform_details(&self) -> std::option::Option<&str> {
        self.platform_details.as_deref()
    }

    /// <p>The operation of the Amazon EC2 instance and the billing code that is associated with the AMI.</p>
    pub fn usage_operation(&self) -> std::option::Option<&str> {
        self.usage_operation.as_deref()
    }

    /// <p>Any product codes associated with the AMI.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.product_codes.is_none()`.
    pub fn product_codes(&self) -> &[crate::model::ProductCode] {
        self.product_codes.as_deref().unwrap_or_default()
    }

    /// <p>The RAM disk associated with the image, if any. Only applicable for machine images.</p>
    pub fn ramdisk_id(&self) -> std::option::Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// <p>The current state of the AMI. If the state is <code>available</code>, the image is successfully registered and can be used to launch an instance.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::ImageState> {
        self.state.as_ref()
    }

    /// <p>Any block device mapping entries.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::BlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>The description of the AMI that was provided during image creation.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
    pub fn ena_support(&self) -> std::option::Option<bool> {
        self.ena_support
    }

    /// <p>The hypervisor type of the image.</p>
    pub fn hypervisor(&self) -> std::option::Option<&crate::model::HypervisorType> {
        self.hypervisor.as_ref()
    }

    /// <p>The AWS account alias (for example, <code>amazon</code>, <code>self</code>) or the AWS account ID of the AMI owner.</p>
    pub fn image_owner_alias(&self) -> std::option::Option<&str> {
        self.image_owner_alias.as_deref()
    }

    /// <p>The name of the AMI that was provided during image creation.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
    pub fn root_device_name(&self) -> std::option::Option<&str> {
        self.root_device_name.as_deref()
    }

    /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
    pub fn root_device_type(&self) -> std::option::Option<&crate::model::DeviceType> {
        self.root_device_type.as_ref()
    }

    /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
    pub fn sriov_net_support(&self) -> std::option::Option<&str> {
        self.sriov_net_support.as_deref()
    }

    /// <p>The reason for the state change.</p>
    pub fn state_reason(&self) -> std::option::Option<&crate::model::StateReason> {
        self.state_reason.as_ref()
    }

    /// <p>Any tags assigned to the image.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The type of virtualization of the AMI.</p>
    pub fn virtualization_type(&self) -> std::option::Option<&crate::model::VirtualizationType> {
        self.virtualization_type.as_ref()
    }
}
impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("Architecture", &self.architecture);
        formatter.field("CreationDate", &self.creation_date);
        formatter.field("ImageId", &self.image_id);
        formatter.field("ImageLocation", &self.image_location);
        formatter.enum_field("ImageType", &self.image_type);
        formatter.field("Public", &self.public);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("OwnerId", &self.owner_id);
        formatter.enum_field("Platform", &self.platform);
        formatter.field("PlatformDetails", &self.platform_details);
        formatter.field("UsageOperation", &self.usage_operation);
        formatter.field("ProductCodes", &self.product_codes);
        formatter.field("RamdiskId", &self.ramdisk_id);
        formatter.enum_field("State", &self.state);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("Description", &self.description);
        formatter.field("EnaSupport", &self.ena_support);
        formatter.enum_field("Hypervisor", &self.hypervisor);
        formatter.field("ImageOwnerAlias", &self.image_owner_alias);
        formatter.field("Name", &self.name);
        formatter.field("RootDeviceName", &self.root_device_name);
        formatter.enum_field("RootDeviceType", &self.root_device_type);
        formatter.field("SriovNetSupport", &self.sriov_net_support);
        formatter.field("StateReason", &self.state_reason);
        formatter.field("Tags", &self.tags);
        formatter.enum_field("VirtualizationType", &self.virtualization_type);
        formatter.finish()
    }
}
/// See [`Image`](crate::model::Image)
pub mod image {
    /// A builder for [`Image`](crate::model::Image)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) architecture: std::option::Option<crate::model::ArchitectureValues>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) image_location: std::option::Option<std::string::String>,
        pub(crate) image_type: std::option::Option<crate::model::ImageTypeValues>,
        pub(crate) public: std::option::Option<bool>,
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<crate::model::PlatformValues>,
        pub(crate) platform_details: std::option::Option<std::string::String>,
        pub(crate) usage_operation: std::option::Option<std::string::String>,
        pub(crate) product_codes: std::option::Option<std::vec::Vec<crate::model::ProductCode>>,
        pub(crate) ramdisk_id: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<crate::model::ImageState>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) ena_support: std::option::Option<bool>,
        pub(crate) hypervisor: std::option::Option<crate::model::HypervisorType>,
        pub(crate) image_owner_alias: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) root_device_name: std::option::Option<std::string::String>,
        pub(crate) root_device_type: std::option::Option<crate::model::DeviceType>,
        pub(crate) sriov_net_support: std::option::Option<std::string::String>,
        pub(crate) state_reason: std::option::Option<crate::model::StateReason>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) virtualization_type: std::option::Option<crate::model::VirtualizationType>,
    }
    impl Builder {
        /// <p>The architecture of the image.</p>
        pub fn architecture(mut self, input: crate::model::ArchitectureValues) -> Self {
            self.architecture = Some(input);
            self
        }
        /// <p>The architecture of the image.</p>
        pub fn set_architecture(mut self, input: std::option::Option<crate::model::ArchitectureValues>) -> Self {
            self.architecture = input;
            self
        }

        /// <p>The date and time the image was created.</p>
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        /// <p>The date and time the image was created.</p>
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
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

        /// <p>The location of the AMI.</p>
        pub fn image_location(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_location = Some(input.into());
            self
        }
        /// <p>The location of the AMI.</p>
        pub fn set_image_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_location = input;
            self
        }

        /// <p>The type of image.</p>
        pub fn image_type(mut self, input: crate::model::ImageTypeValues) -> Self {
            self.image_type = Some(input);
            self
        }
        /// <p>The type of image.</p>
        pub fn set_image_type(mut self, input: std::option::Option<crate::model::ImageTypeValues>) -> Self {
            self.image_type = input;
            self
        }

        /// <p>Indicates whether the image has public launch permissions. The value is <code>true</code> if this image has public launch permissions or <code>false</code> if it has only implicit and explicit launch permissions.</p>
        pub fn public(mut self, input: bool) -> Self {
            self.public = Some(input);
            self
        }
        /// <p>Indicates whether the image has public launch permissions. The value is <code>true</code> if this image has public launch permissions or <code>false</code> if it has only implicit and explicit launch permissions.</p>
        pub fn set_public(mut self, input: std::option::Option<bool>) -> Self {
            self.public = input;
            self
        }

        /// <p>The kernel associated with the image, if any. Only applicable for machine images.</p>
        pub fn kernel_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kernel_id = Some(input.into());
            self
        }
        /// <p>The kernel associated with the image, if any. Only applicable for machine images.</p>
        pub fn set_kernel_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kernel_id = input;
            self
        }

        /// <p>The AWS account ID of the image owner.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The AWS account ID of the image owner.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>This value is set to <code>windows</code> for Windows AMIs; otherwise, it is blank.</p>
        pub fn platform(mut self, input: crate::model::PlatformValues) -> Self {
            self.platform = Some(input);
            self
        }
        /// <p>This value is set to <code>windows</code> for Windows AMIs; otherwise, it is blank.</p>
        pub fn set_platform(mut self, input: std::option::Option<crate::model::PlatformValues>) -> Self {
            self.platform = input;
            self
        }

        /// <p>The platform details associated with the billing code of the AMI.</p>
        pub fn platform_details(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform_details = Some(input.into());
            self
        }
        /// <p>The platform details associated with the billing code of the AMI.</p>
        pub fn set_platform_details(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform_details = input;
            self
        }

        /// <p>The operation of the Amazon EC2 instance and the billing code that is associated with the AMI.</p>
        pub fn usage_operation(mut self, input: impl Into<std::string::String>) -> Self {
            self.usage_operation = Some(input.into());
            self
        }
        /// <p>The operation of the Amazon EC2 instance and the billing code that is associated with the AMI.</p>
        pub fn set_usage_operation(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.usage_operation = input;
            self
        }

        /// Appends an item to `product_codes`.
        ///
        /// To override the contents of this collection use [`set_product_codes`](Self::set_product_codes).
        ///
        /// <p>Any product codes associated with the AMI.</p>
        pub fn product_codes(mut self, input: impl std::convert::Into<crate::model::ProductCode>) -> Self {
            let mut v = self.product_codes.unwrap_or_default();
            v.push(input.into());
            self.product_codes = Some(v);
            self
        }
        /// <p>Any product codes associated with the AMI.</p>
        pub fn set_product_codes(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProductCode>>) -> Self {
            self.product_codes = input;
            self
        }

        /// <p>The RAM disk associated with the image, if any. Only applicable for machine images.</p>
        pub fn ramdisk_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ramdisk_id = Some(input.into());
            self
        }
        /// <p>The RAM disk associated with the image, if any. Only applicable for machine images.</p>
        pub fn set_ramdisk_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ramdisk_id = input;
            self
        }

        /// <p>The current state of the AMI. If the state is <code>available</code>, the image is successfully registered and can be used to launch an instance.</p>
        pub fn state(mut self, input: crate::model::ImageState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The current state of the AMI. If the state is <code>available</code>, the image is successfully registered and can be used to launch an instance.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::ImageState>) -> Self {
            self.state = input;
            self
        }

        /// Appends an item to `block_device_mappings`.
        ///
        /// To override the contents of this collection use [`set_block_device_mappings`](Self::set_block_device_mappings).
        ///
        /// <p>Any block device mapping entries.</p>
        pub fn block_device_mappings(mut self, input: impl std::convert::Into<crate::model::BlockDeviceMapping>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        /// <p>Any block device mapping entries.</p>
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>) -> Self {
            self.block_device_mappings = input;
            self
        }

        /// <p>The description of the AMI that was provided during image creation.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description of the AMI that was provided during image creation.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
        pub fn ena_support(mut self, input: bool) -> Self {
            self.ena_support = Some(input);
            self
        }
        /// <p>Specifies whether enhanced networking with ENA is enabled.</p>
        pub fn set_ena_support(mut self, input: std::option::Option<bool>) -> Self {
            self.ena_support = input;
            self
        }

        /// <p>The hypervisor type of the image.</p>
        pub fn hypervisor(mut self, input: crate::model::HypervisorType) -> Self {
            self.hypervisor = Some(input);
            self
        }
        /// <p>The hypervisor type of the image.</p>
        pub fn set_hypervisor(mut self, input: std::option::Option<crate::model::HypervisorType>) -> Self {
            self.hypervisor = input;
            self
        }

        /// <p>The AWS account alias (for example, <code>amazon</code>, <code>self</code>) or the AWS account ID of the AMI owner.</p>
        pub fn image_owner_alias(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_owner_alias = Some(input.into());
            self
        }
        /// <p>The AWS account alias (for example, <code>amazon</code>, <code>self</code>) or the AWS account ID of the AMI owner.</p>
        pub fn set_image_owner_alias(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_owner_alias = input;
            self
        }

        /// <p>The name of the AMI that was provided during image creation.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the AMI that was provided during image creation.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }

        /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
        pub fn root_device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.root_device_name = Some(input.into());
            self
        }
        /// <p>The device name of the root device volume (for example, <code>/dev/sda1</code>).</p>
        pub fn set_root_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.root_device_name = input;
            self
        }

        /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
        pub fn root_device_type(mut self, input: crate::model::DeviceType) -> Self {
            self.root_device_type = Some(input);
            self
        }
        /// <p>The root device type used by the AMI. The AMI can use an EBS volume or an instance store volume.</p>
        pub fn set_root_device_type(mut self, input: std::option::Option<crate::model::DeviceType>) -> Self {
            self.root_device_type = input;
            self
        }

        /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
        pub fn sriov_net_support(mut self, input: impl Into<std::string::String>) -> Self {
            self.sriov_net_support = Some(input.into());
            self
        }
        /// <p>Specifies whether enhanced networking with the Intel 82599 Virtual Function interface is enabled.</p>
        pub fn set_sriov_net_support(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sriov_net_support = input;
            self
        }

        /// <p>The reason for the state change.</p>
        pub fn state_reason(mut self, input: crate::model::StateReason) -> Self {
            self.state_reason = Some(input);
            self
        }
        /// <p>The reason for the state change.</p>
        pub fn set_state_reason(mut self, input: std::option::Option<crate::model::StateReason>) -> Self {
            self.state_reason = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the image.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the image.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The type of virtualization of the AMI.</p>
        pub fn virtualization_type(mut self, input: crate::model::VirtualizationType) -> Self {
            self.virtualization_type = Some(input);
            self
        }
        /// <p>The type of virtualization of the AMI.</p>
        pub fn set_virtualization_type(mut self, input: std::option::Option<crate::model::VirtualizationType>) -> Self {
            self.virtualization_type = input;
            self
        }
        /// Consumes the builder and constructs a [`Image`](crate::model::Image)
        pub fn build(self) -> crate::model::Image {
            crate::model::Image {
                architecture: self.architecture,
                creation_date: self.creation_date,
                image_id: self.image_id,
                image_location: self.image_location,
                image_type: self.image_type,
                public: self.public,
                kernel_id: self.kernel_id,
                owner_id: self.owner_id,
                platform: self.platform,
                platform_details: self.platform_details,
                usage_operation: self.usage_operation,
                product_codes: self.product_codes,
                ramdisk_id: self.ramdisk_id,
                state: self.state,
                block_device_mappings: self.block_device_mappings,
                description: self.description,
                ena_support: self.ena_support,
                hypervisor: self.hypervisor,
                image_owner_alias: self.image_owner_alias,
                name: self.name,
                root_device_name: self.root_device_name,
                root_device_type: self.root_device_type,
                sriov_net_support: self.sriov_net_support,
                state_reason: self.state_reason,
                tags: self.tags,
                virtualization_type: self.virtualization_type,
            }
        }
    }
}
impl Image {
    /// Creates a new builder-style object to manufacture [`Image`](crate::model::Image)
    pub fn builder() -> crate::model::image::Builder {
        crate::model::image::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImageTypeValues {
    #[allow(missing_docs)] // documentation missing in model
    Machine,
    #[allow(missing_docs)] // documentation missing in model
    Kernel,
    #[allow(missing_docs)] // documentation missing in model
    Ramdisk,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ImageTypeValues {
    fn from(s: &str) -> Self {
        match s {
            "machine" => ImageTypeValues::Machine,
            "kernel" => ImageTypeValues::Kernel,
            "ramdisk" => ImageTypeValues::Ramdisk,
            other => ImageTypeValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImageTypeValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImageTypeValues::from(s))
    }
}
impl ImageTypeValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ImageTypeValues::Machine => "machine",
            ImageTypeValues::Kernel => "kernel",
            ImageTypeValues::Ramdisk => "ramdisk",
            ImageTypeValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "machine",
            "kernel",
            "ramdisk",
        ]
    }
}
impl AsRef<str> for ImageTypeValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImageState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Available,
    #[allow(missing_docs)] // documentation missing in model
    Invalid,
    #[allow(missing_docs)] // documentation missing in model
    Deregistered,
    #[allow(missing_docs)] // documentation missing in model
    Transient,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    #[allow(missing_docs)] // documentation missing in model
    Error,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ImageState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => ImageState::Pending,
            "available" => ImageState::Available,
            "invalid" => ImageState::Invalid,
            "deregistered" => ImageState::Deregistered,
            "transient" => ImageState::Transient,
            "failed" => ImageState::Failed,
            "error" => ImageState::Error,
            other => ImageState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImageState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImageState::from(s))
    }
}
impl ImageState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ImageState::Pending => "pending",
            ImageState::Available => "available",
            ImageState::Invalid => "invalid",
            ImageState::Deregistered => "deregistered",
            ImageState::Transient => "transient",
            ImageState::Failed => "failed",
            ImageState::Error => "error",
            ImageState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "pending",
            "available",
            "invalid",
            "deregistered",
            "transient",
            "failed",
            "error",
        ]
    }
}
impl AsRef<str> for ImageState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a Capacity Reservation.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CapacityReservation {
    /// <p>The ID of the Capacity Reservation.</p>
    pub capacity_reservation_id: std::option::Option<std::string::String>,
    /// <p>The ID of the AWS account that owns the Capacity Reservation.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Capacity Reservation.</p>
    pub capacity_reservation_arn: std::option::Option<std::string::String>,
    /// <p>The Availability Zone ID of the Capacity Reservation.</p>
    pub availability_zone_id: std::option::Option<std::string::String>,
    /// <p>The type of instance for which the Capacity Reservation reserves capacity.</p>
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The type of operating system for which the Capacity Reservation reserves capacity.</p>
    pub instance_platform: std::option::Option<crate::model::CapacityReservationInstancePlatform>,
    /// <p>The Availability Zone in which the capacity is reserved.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>Indicates the tenancy of the Capacity Reservation. A Capacity Reservation can have one of the following tenancy settings:</p>
    /// <ul>
    /// <li><p><code>default</code> - The Capacity Reservation is created on hardware that is shared with other AWS accounts.</p></li>
    /// <li><p><code>dedicated</code> - The Capacity Reservation is created on single-tenant hardware that is dedicated to a single AWS account.</p></li></ul>
    pub tenancy: std::option::Option<crate::model::CapacityReservationTenancy>,
    /// <p>The total number of instances for which the Capacity Reservation reserves capacity.</p>
    pub total_instance_count: std::option::Option<i32>,
    /// <p>The remaining capacity. Indicates the number of instances that can be launched in the Capacity Reservation.</p>
    pub available_instance_count: std::option::Option<i32>,
    /// <p>Indicates whether the Capacity Reservation supports EBS-optimized instances. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS- optimized instance.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
    pub ephemeral_storage: std::option::Option<bool>,
    /// <p>The current state of the Capacity Reservation. A Capacity Reservation can be in one of the following states:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>active</code> - The Capacity Reservation is active and the capacity is available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>expired</code> - The Capacity Reservation expired automatically at the date and time specified in your request. The reserved capacity is no longer available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>cancelled</code> - The Capacity Reservation was manually cancelled. The reserved capacity is no longer available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>pending</code> - The Capacity Reservation request was successful but the capacity provisioning is still pending.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>failed</code> - The Capacity Reservation request has failed.</p>
    /// </li>
    /// </ul>
    pub state: std::option::Option<crate::model::CapacityReservationState>,
    /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it.</p>
    pub end_date: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types:</p>
    /// <ul>
    /// <li><p><code>unlimited</code> - The Capacity Reservation remains active until you explicitly cancel it.</p></li>
    /// <li><p><code>limited</code> - The Capacity Reservation expires automatically at a specified date and time.</p></li></ul>
    pub end_date_type: std::option::Option<crate::model::EndDateType>,
    /// <p>Indicates the type of instance launches that the Capacity Reservation accepts. The options include:</p>
    /// <ul>
    /// <li><p><code>open</code> - The Capacity Reservation accepts all instances that have matching attributes (instance type, platform, and Availability Zone). Instances that have matching attributes launch into the Capacity Reservation automatically without specifying any additional parameters.</p></li>
    /// <li><p><code>targeted</code> - The Capacity Reservation only accepts instances that have matching attributes (instance type, platform, and Availability Zone), and explicitly target the Capacity Reservation. This ensures that only permitted instances can use the reserved capacity.</p></li></ul>
    pub instance_match_criteria: std::option::Option<crate::model::InstanceMatchCriteria>,
    /// <p>The date and time at which the Capacity Reservation was created.</p>
    pub create_date: std::option::Option<smithy_types::Instant>,
    /// <p>Any tags assigned to the Capacity Reservation.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CapacityReservation {
    /// <p>The ID of the Capacity Reservation.</p>
    pub fn capacity_reservation_id(&self) -> std::option::Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// <p>The ID of the AWS account that owns the Capacity Reservation.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The Amazon Resource Name (ARN) of the Capacity Reservation.</p>
    pub fn capacity_reservation_arn(&self) -> std::option::Option<&str> {
        self.capacity_reservation_arn.as_deref()
    }

    /// <p>The Availability Zone ID of the Capacity Reservation.</p>
    pub fn availability_zone_id(&self) -> std::option::Option<&str> {
        self.availability_zone_id.as_deref()
    }

    /// <p>The type of instance for which the Capacity Reservation reserves capacity.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }

    /// <p>The type of operating system for which the Capacity Reservation reserves capacity.</p>
    pub fn instance_platform(&self) -> std::option::Option<&crate::model::CapacityReservationInstancePlatform> {
        self.instance_platform.as_ref()
    }

    /// <p>The Availability Zone in which the capacity is reserved.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>Indicates the tenancy of the Capacity Reservation. A Capacity Reservation can have one of the following tenancy settings:</p>
    /// <ul>
    /// <li><p><code>default</code> - The Capacity Reservation is created on hardware that is shared with other AWS accounts.</p></li>
    /// <li><p><code>dedicated</code> - The Capacity Reservation is created on single-tenant hardware that is dedicated to a single AWS account.</p></li></ul>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::CapacityReservationTenancy> {
        self.tenancy.as_ref()
    }

    /// <p>The total number of instances for which the Capacity Reservation reserves capacity.</p>
    pub fn total_instance_count(&self) -> std::option::Option<i32> {
        self.total_instance_count
    }

    /// <p>The remaining capacity. Indicates the number of instances that can be launched in the Capacity Reservation.</p>
    pub fn available_instance_count(&self) -> std::option::Option<i32> {
        self.available_instance_count
    }

    /// <p>Indicates whether the Capacity Reservation supports EBS-optimized instances. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS- optimized instance.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>Indicates whether the Capacity Reservation supports instances with temporary, block-level storage.</p>
    pub fn ephemeral_storage(&self) -> std::option::Option<bool> {
        self.ephemeral_storage
    }

    /// <p>The current state of the Capacity Reservation. A Capacity Reservation can be in one of the following states:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>active</code> - The Capacity Reservation is active and the capacity is available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>expired</code> - The Capacity Reservation expired automatically at the date and time specified in your request. The reserved capacity is no longer available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>cancelled</code> - The Capacity Reservation was manually cancelled. The reserved capacity is no longer available for your use.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>pending</code> - The Capacity Reservation request was successful but the capacity provisioning is still pending.</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>failed</code> - The Capacity Reservation request has failed.</p>
    /// </li>
    /// </ul>
    pub fn state(&self) -> std::option::Option<&crate::model::CapacityReservationState> {
        self.state.as_ref()
    }

    /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it.</p>
    pub fn end_date(&self) -> std::option::Option<&smithy_types::Instant> {
        self.end_date.as_ref()
    }

    /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types:</p>
    /// <ul>
    /// <li><p><code>unlimited</code> - The Capacity Reservation remains active until you explicitly cancel it.</p></li>
    /// <li><p><code>limited</code> - The Capacity Reservation expires automatically at a specified date and time.</p></li></ul>
    pub fn end_date_type(&self) -> std::option::Option<&crate::model::EndDateType> {
        self.end_date_type.as_ref()
    }

    /// <p>Indicates the type of instance launches that the Capacity Reservation accepts. The options include:</p>
    /// <ul>
    /// <li><p><code>open</code> - The Capacity Reservation accepts all instances that have matching attributes (instance type, platform, and Availability Zone). Instances that have matching attributes launch into the Capacity Reservation automatically without specifying any additional parameters.</p></li>
    /// <li><p><code>targeted</code> - The Capacity Reservation only accepts instances that have matching attributes (instance type, platform, and Availability Zone), and explicitly target the Capacity Reservation. This ensures that only permitted instances can use the reserved capacity.</p></li></ul>
    pub fn instance_match_criteria(&self) -> std::option::Option<&crate::model::InstanceMatchCriteria> {
        self.instance_match_criteria.as_ref()
    }

    /// <p>The date and time at which the Capacity Reservation was created.</p>
    pub fn create_date(&self) -> std::option::Option<&smithy_types::Instant> {
        self.create_date.as_ref()
    }

    /// <p>Any tags assigned to the Capacity Reservation.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for CapacityReservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CapacityReservationId", &self.capacity_reservation_id);
        formatter.field("OwnerId", &self.owner_id);
        formatter.field("CapacityReservationArn", &self.capacity_reservation_arn);
        formatter.field("AvailabilityZoneId", &self.availability_zone_id);
        formatter.field("InstanceType", &self.instance_type);
        formatter.enum_field("InstancePlatform", &self.instance_platform);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.field("TotalInstanceCount", &self.total_instance_count);
        formatter.field("AvailableInstanceCount", &self.available_instance_count);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("EphemeralStorage", &self.ephemeral_storage);
        formatter.enum_field("State", &self.state);
        formatter.field("EndDate", &self.end_date);
        formatter.enum_field("EndDateType", &self.end_date_type);
        formatter.enum_field("InstanceMatchCriteria", &self.instance_match_criteria);
        formatter.field("CreateDate", &self.create_date);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`CapacityReservation`](crate::model::CapacityReservation)
pub mod capacity_reservation {
    /// A builder for [`CapacityReservation`](crate::model::CapacityReservation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_id: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) capacity_reservation_arn: std::option::Option<std::string::String>,
        pub(crate) availability_zone_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_platform: std::option::Option<crate::model::CapacityReservationInstancePlatform>,
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::CapacityReservationTenancy>,
        pub(crate) total_instance_count: std::option::Option<i32>,
        pub(crate) available_instance_count: std::option::Option<i32>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) ephemeral_storage: std::option::Option<bool>,
        pub(crate) state: std::option::Option<crate::model::CapacityReservationState>,
        pub(crate) end_date: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_type: std::option::Option<crate::model::EndDateType>,
        pub(crate) instance_match_criteria: std::option::Option<crate::model::InstanceMatchCriteria>,
        pub(crate) create_date: std::option::Option<smithy_types::Instant>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The ID of the Capacity Reservation.</p>
        pub fn capacity_reservation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.capacity_reservation_id = Some(input.into());
            self
        }
        /// <p>The ID of the Capacity Reservation.</p>
        pub fn set_capacity_reservation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.capacity_reservation_id = input;
            self
        }

        /// <p>The ID of the AWS account that owns the Capacity Reservation.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the AWS account that owns the Capacity Reservation.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The Amazon Resource Name (ARN) of the Capacity Reservation.</p>
        pub fn capacity_reservation_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.capacity_reservation_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the Capacity Reservation.</p>
        pub fn set_capacity_reservation_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.capacity_reservation_arn = input;
            self
        }

        /// <p>The Availability Zone ID of the Capacity Reservation.</p>
        pub fn availability_zone_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone_id = Some(input.into());
            self
        }
        /// <p>The Availability Zone ID of the Capacity Reservation.</p>
        pub fn set_availability_zone_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone_id = input;
            self
        }

        /// <p>The type of instance for which the Capacity Reservation reserves capacity.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        /// <p>The type of instance for which the Capacity Reservation reserves capacity.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The type of operating system for which the Capacity Reservation reserves capacity.</p>
        pub fn instance_platform(mut self, input: crate::model::CapacityReservationInstancePlatform) -> Self {
            self.instance_platform = Some(input);
            self
        }
        /// <p>The type of operating system for which the Capacity Reservation reserves capacity.</p>
        pub fn set_instance_platform(mut self, input: std::option::Option<crate::model::CapacityReservationInstancePlatform>) -> Self {
            self.instance_platform = input;
            self
        }

        /// <p>The Availability Zone in which the capacity is reserved.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone in which the capacity is reserved.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>Indicates the tenancy of the Capacity Reservation. A Capacity Reservation can have one of the following tenancy settings:</p>
        /// <ul>
        /// <li><p><code>default</code> - The Capacity Reservation is created on hardware that is shared with other AWS accounts.</p></li>
        /// <li><p><code>dedicated</code> - The Capacity Reservation is created on single-tenant hardware that is dedicated to a single AWS account.</p></li></ul>
        pub fn tenancy(mut self, input: crate::model::CapacityReservationTenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>Indicates the tenancy of the Capacity Reservation. A Capacity Reservation can have one of the following tenancy settings:</p>
        /// <ul>
        /// <li><p><code>default</code> - The Capacity Reservation is created on hardware that is shared with other AWS accounts.</p></li>
        /// <li><p><code>dedicated</code> - The Capacity Reservation is created on single-tenant hardware that is dedicated to a single AWS account.</p></li></ul>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::CapacityReservationTenancy>) -> Self {
            self.tenancy = input;
            self
        }

        /// <p>The total number of instances for which the Capacity Reservation reserves capacity.</p>
        pub fn total_instance_count(mut self, input: i32) -> Self {
            self.total_instance_count = Some(input);
            self
        }
        /// <p>The total number of instances for which the Capacity Reservation reserves capacity.</p>
        pub fn set_total_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.total_instance_count = input;
            self
        }

        /// <p>The remaining capacity. Indicates the number of instances that can be launched in the Capacity Reservation.</p>
        pub fn available_instance_count(mut self, input: i32) -> Self {
            self.available_instance_count = Some(input);
            self
        }
        /// <p>The remaining capacity. Indicates the number of instances that can be launched in the Capacity Reservation.</p>
        pub fn set_available_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.available_instance_count = input;
            self
        }

        /// <p>Indicates whether the Capacity Reservation supports EBS-optimized instances. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS- optimized instance.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        /// <p>Indicates whether the Capacity Reservation supports EBS-optimized instances. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS- optimized instance.</p>
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

        /// <p>The current state of the Capacity Reservation. A Capacity Reservation can be in one of the following states:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>active</code> - The Capacity Reservation is active and the capacity is available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>expired</code> - The Capacity Reservation expired automatically at the date and time specified in your request. The reserved capacity is no longer available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>cancelled</code> - The Capacity Reservation was manually cancelled. The reserved capacity is no longer available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>pending</code> - The Capacity Reservation request was successful but the capacity provisioning is still pending.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>failed</code> - The Capacity Reservation request has failed.</p>
        /// </li>
        /// </ul>
        pub fn state(mut self, input: crate::model::CapacityReservationState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The current state of the Capacity Reservation. A Capacity Reservation can be in one of the following states:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>active</code> - The Capacity Reservation is active and the capacity is available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>expired</code> - The Capacity Reservation expired automatically at the date and time specified in your request. The reserved capacity is no longer available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>cancelled</code> - The Capacity Reservation was manually cancelled. The reserved capacity is no longer available for your use.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>pending</code> - The Capacity Reservation request was successful but the capacity provisioning is still pending.</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>failed</code> - The Capacity Reservation request has failed.</p>
        /// </li>
        /// </ul>
        pub fn set_state(mut self, input: std::option::Option<crate::model::CapacityReservationState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it.</p>
        pub fn end_date(mut self, input: smithy_types::Instant) -> Self {
            self.end_date = Some(input);
            self
        }
        /// <p>The date and time at which the Capacity Reservation expires. When a Capacity Reservation expires, the reserved capacity is released and you can no longer launch instances into it.</p>
        pub fn set_end_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_date = input;
            self
        }

        /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types:</p>
        /// <ul>
        /// <li><p><code>unlimited</code> - The Capacity Reservation remains active until you explicitly cancel it.</p></li>
        /// <li><p><code>limited</code> - The Capacity Reservation expires automatically at a specified date and time.</p></li></ul>
        pub fn end_date_type(mut self, input: crate::model::EndDateType) -> Self {
            self.end_date_type = Some(input);
            self
        }
        /// <p>Indicates the way in which the Capacity Reservation ends. A Capacity Reservation can have one of the following end types:</p>
        /// <ul>
        /// <li><p><code>unlimited</code> - The Capacity Reservation remains active until you explicitly cancel it.</p></li>
        /// <li><p><code>limited</code> - The Capacity Reservation expires automatically at a specified date and time.</p></li></ul>
        pub fn set_end_date_type(mut self, input: std::option::Option<crate::model::EndDateType>) -> Self {
            self.end_date_type = input;
            self
        }

        /// <p>Indicates the type of instance launches that the Capacity Reservation accepts. The options include:</p>
        /// <ul>
        /// <li><p><code>open</code> - The Capacity Reservation accepts all instances that have matching attributes (instance type, platform, and Availability Zone). Instances that have matching attributes launch into the Capacity Reservation automatically without specifying any additional parameters.</p></li>
        /// <li><p><code>targeted</code> - The Capacity Reservation only accepts instances that have matching attributes (instance type, platform, and Availability Zone), and explicitly target the Capacity Reservation. This ensures that only permitted instances can use the reserved capacity.</p></li></ul>
        pub fn instance_match_criteria(mut self, input: crate::model::InstanceMatchCriteria) -> Self {
            self.instance_match_criteria = Some(input);
            self
        }
        /// <p>Indicates the type of instance launches that the Capacity Reservation accepts. The options include:</p>
        /// <ul>
        /// <li><p><code>open</code> - The Capacity Reservation accepts all instances that have matching attributes (instance type, platform, and Availability Zone). Instances that have matching attributes launch into the Capacity Reservation automatically without specifying any additional parameters.</p></li>
        /// <li><p><code>targeted</code> - The Capacity Reservation only accepts instances that have matching attributes (instance type, platform, and Availability Zone), and explicitly target the Capacity Reservation. This ensures that only permitted instances can use the reserved capacity.</p></li></ul>
        pub fn set_instance_match_criteria(mut self, input: std::option::Option<crate::model::InstanceMatchCriteria>) -> Self {
            self.instance_match_criteria = input;
            self
        }

        /// <p>The date and time at which the Capacity Reservation was created.</p>
        pub fn create_date(mut self, input: smithy_types::Instant) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date and time at which the Capacity Reservation was created.</p>
        pub fn set_create_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.create_date = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the Capacity Reservation.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the Capacity Reservation.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservation`](crate::model::CapacityReservation)
        pub fn build(self) -> crate::model::CapacityReservation {
            crate::model::CapacityReservation {
                capacity_reservation_id: self.capacity_reservation_id,
                owner_id: self.owner_id,
                capacity_reservation_arn: self.capacity_reservation_arn,
                availability_zone_id: self.availability_zone_id,
                instance_type: self.instance_type,
                instance_platform: self.instance_platform,
                availability_zone: self.availability_zone,
                tenancy: self.tenancy,
                total_instance_count: self.total_instance_count,
                available_instance_count: self.available_instance_count,
                ebs_optimized: self.ebs_optimized,
                ephemeral_storage: self.ephemeral_storage,
                state: self.state,
                end_date: self.end_date,
                end_date_type: self.end_date_type,
                instance_match_criteria: self.instance_match_criteria,
                create_date: self.create_date,
                tags: self.tags,
            }
        }
    }
}
impl CapacityReservation {
    /// Creates a new builder-style object to manufacture [`CapacityReservation`](crate::model::CapacityReservation)
    pub fn builder() -> crate::model::capacity_reservation::Builder {
        crate::model::capacity_reservation::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CapacityReservationState {
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Expired,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CapacityReservationState {
    fn from(s: &str) -> Self {
        match s {
            "active" => CapacityReservationState::Active,
            "expired" => CapacityReservationState::Expired,
            "cancelled" => CapacityReservationState::Cancelled,
            "pending" => CapacityReservationState::Pending,
            "failed" => CapacityReservationState::Failed,
            other => CapacityReservationState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CapacityReservationState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CapacityReservationState::from(s))
    }
}
impl CapacityReservationState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CapacityReservationState::Active => "active",
            CapacityReservationState::Expired => "expired",
            CapacityReservationState::Cancelled => "cancelled",
            CapacityReservationState::Pending => "pending",
            CapacityReservationState::Failed => "failed",
            CapacityReservationState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "active",
            "expired",
            "cancelled",
            "pending",
            "failed",
        ]
    }
}
impl AsRef<str> for CapacityReservationState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a recurring charge.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct RecurringCharge {
    /// <p>The amount of the recurring charge.</p>
    pub amount: std::option::Option<f64>,
    /// <p>The frequency of the recurring charge.</p>
    pub frequency: std::option::Option<crate::model::RecurringChargeFrequency>,
}
impl RecurringCharge {
    /// <p>The amount of the recurring charge.</p>
    pub fn amount(&self) -> std::option::Option<f64> {
        self.amount
    }

    /// <p>The frequency of the recurring charge.</p>
    pub fn frequency(&self) -> std::option::Option<&crate::model::RecurringChargeFrequency> {
        self.frequency.as_ref()
    }
}
impl std::fmt::Debug for RecurringCharge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Amount", &self.amount);
        formatter.enum_field("Frequency", &self.frequency);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for RecurringCharge {
    fn eq(&self, other: &Self) -> bool {
        self.amount.map(f64::to_bits) == other.amount.map(f64::to_bits)
            && self.frequency == other.frequency
    }
}
impl std::cmp::Eq for RecurringCharge {}
impl std::hash::Hash for RecurringCharge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.amount.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.frequency, state);
    }
}
/// See [`RecurringCharge`](crate::model::RecurringCharge)
pub mod recurring_charge {
    /// A builder for [`RecurringCharge`](crate::model::RecurringCharge)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) amount: std::option::Option<f64>,
        pub(crate) frequency: std::option::Option<crate::model::RecurringChargeFrequency>,
    }
    impl Builder {
        /// <p>The amount of the recurring charge.</p>
        pub fn amount(mut self, input: f64) -> Self {
            self.amount = Some(input);
            self
        }
        /// <p>The amount of the recurring charge.</p>
        pub fn set_amount(mut self, input: std::option::Option<f64>) -> Self {
            self.amount = input;
            self
        }

        /// <p>The frequency of the recurring charge.</p>
        pub fn frequency(mut self, input: crate::model::RecurringChargeFrequency) -> Self {
            self.frequency = Some(input);
            self
        }
        /// <p>The frequency of the recurring charge.</p>
        pub fn set_frequency(mut self, input: std::option::Option<crate::model::RecurringChargeFrequency>) -> Self {
            self.frequency = input;
            self
        }
        /// Consumes the builder and constructs a [`RecurringCharge`](crate::model::RecurringCharge)
        pub fn build(self) -> crate::model::RecurringCharge {
            crate::model::RecurringCharge {
                amount: self.amount,
                frequency: self.frequency,
            }
        }
    }
}
impl RecurringCharge {
    /// Creates a new builder-style object to manufacture [`RecurringCharge`](crate::model::RecurringCharge)
    pub fn builder() -> crate::model::recurring_charge::Builder {
        crate::model::recurring_charge::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RecurringChargeFrequency {
    #[allow(missing_docs)] // documentation missing in model
    Hourly,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RecurringChargeFrequency {
    fn from(s: &str) -> Self {
        match s {
            "Hourly" => RecurringChargeFrequency::Hourly,
            other => RecurringChargeFrequency::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RecurringChargeFrequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RecurringChargeFrequency::from(s))
    }
}
impl RecurringChargeFrequency {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RecurringChargeFrequency::Hourly => "Hourly",
            RecurringChargeFrequency::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Hourly",
        ]
    }
}
impl AsRef<str> for RecurringChargeFrequency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a Reserved Instance.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct ReservedInstances {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The duration of the Reserved Instance, in seconds.</p>
    pub duration: std::option::Option<i64>,
    /// <p>The time when the Reserved Instance expires.</p>
    pub end: std::option::Option<smithy_types::Instant>,
    /// <p>The purchase price of the Reserved Instance.</p>
    pub fixed_price: std::option::Option<f32>,
    /// <p>The number of reservations purchased.</p>
    pub instance_count: std::option::Option<i32>,
    /// <p>The instance type on which the Reserved Instance can be used.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The Reserved Instance product platform description.</p>
    pub product_description: std::option::Option<crate::model::RIProductDescription>,
    /// <p>The ID of the Reserved Instance.</p>
    pub reserved_instances_id: std::option::Option<std::string::String>,
    /// <p>The date and time the Reserved Instance started.</p>
    pub start: std::option::Option<smithy_types::Instant>,
    /// <p>The state of the Reserved Instance purchase.</p>
    pub state: std::option::Option<crate::model::ReservedInstanceState>,
    /// <p>The usage price of the Reserved Instance, per hour.</p>
    pub usage_price: std::option::Option<f32>,
    /// <p>The currency of the Reserved Instance. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
    pub currency_code: std::option::Option<crate::model::CurrencyCodeValues>,
    /// <p>The tenancy of the instance.</p>
    pub instance_tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>The offering class of the Reserved Instance.</p>
    pub offering_class: std::option::Option<crate::model::OfferingClassType>,
    /// <p>The Reserved Instance offering type.</p>
    pub offering_type: std::option::Option<crate::model::OfferingTypeValues>,
    /// <p>The recurring charge tag assigned to the resource.</p>
    pub recurring_charges: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>,
    /// <p>The scope of the Reserved Instance.</p>
    pub scope: std::option::Option<crate::model::Scope>,
    /// <p>Any tags assigned to the resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl ReservedInstances {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The duration of the Reserved Instance, in seconds.</p>
    pub fn duration(&self) -> std::option::Option<i64> {
        self.duration
    }

    /// <p>The time when the Reserved Instance expires.</p>
    pub fn end(&self) -> std::option::Option<&smithy_types::Instant> {
        self.end.as_ref()
    }

    /// <p>The purchase price of the Reserved Instance.</p>
    pub fn fixed_price(&self) -> std::option::Option<f32> {
        self.fixed_price
    }

    /// <p>The number of reservations purchased.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }

    /// <p>The instance type on which the Reserved Instance can be used.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The Reserved Instance product platform description.</p>
    pub fn product_description(&self) -> std::option::Option<&crate::model::RIProductDescription> {
        self.product_description.as_ref()
    }

    /// <p>The ID of the Reserved Instance.</p>
    pub fn reserved_instances_id(&self) -> std::option::Option<&str> {
        self.reserved_instances_id.as_deref()
    }

    /// <p>The date and time the Reserved Instance started.</p>
    pub fn start(&self) -> std::option::Option<&smithy_types::Instant> {
        self.start.as_ref()
    }

    /// <p>The state of the Reserved Instance purchase.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::ReservedInstanceState> {
        self.state.as_ref()
    }

    /// <p>The usage price of the Reserved Instance, per hour.</p>
    pub fn usage_price(&self) -> std::option::Option<f32> {
        self.usage_price
    }

    /// <p>The currency of the Reserved Instance. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
    pub fn currency_code(&self) -> std::option::Option<&crate::model::CurrencyCodeValues> {
        self.currency_code.as_ref()
    }

    /// <p>The tenancy of the instance.</p>
    pub fn instance_tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// <p>The offering class of the Reserved Instance.</p>
    pub fn offering_class(&self) -> std::option::Option<&crate::model::OfferingClassType> {
        self.offering_class.as_ref()
    }

    /// <p>The Reserved Instance offering type.</p>
    pub fn offering_type(&self) -> std::option::Option<&crate::model::OfferingTypeValues> {
        self.offering_type.as_ref()
    }

    /// <p>The recurring charge tag assigned to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.recurring_charges.is_none()`.
    pub fn recurring_charges(&self) -> &[crate::model::RecurringCharge] {
        self.recurring_charges.as_deref().unwrap_or_default()
    }

    /// <p>The scope of the Reserved Instance.</p>
    pub fn scope(&self) -> std::option::Option<&crate::model::Scope> {
        self.scope.as_ref()
    }

    /// <p>Any tags assigned to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for ReservedInstances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Duration", &self.duration);
        formatter.field("End", &self.end);
        formatter.field("FixedPrice", &self.fixed_price);
        formatter.field("InstanceCount", &self.instance_count);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.enum_field("ProductDescription", &self.product_description);
        formatter.field("ReservedInstancesId", &self.reserved_instances_id);
        formatter.field("Start", &self.start);
        formatter.enum_field("State", &self.state);
        formatter.field("UsagePrice", &self.usage_price);
        formatter.enum_field("CurrencyCode", &self.currency_code);
        formatter.enum_field("InstanceTenancy", &self.instance_tenancy);
        formatter.enum_field("OfferingClass", &self.offering_class);
        formatter.enum_field("OfferingType", &self.offering_type);
        formatter.field("RecurringCharges", &self.recurring_charges);
        formatter.enum_field("Scope", &self.scope);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for ReservedInstances {
    fn eq(&self, other: &Self) -> bool {
        self.availability_zone == other.availability_zone
            && self.duration == other.duration
            && self.end == other.end
            && self.fixed_price.map(f32::to_bits) == other.fixed_price.map(f32::to_bits)
            && self.instance_count == other.instance_count
            && self.instance_type == other.instance_type
            && self.product_description == other.product_description
            && self.reserved_instances_id == other.reserved_instances_id
            && self.start == other.start
            && self.state == other.state
            && self.usage_price.map(f32::to_bits) == other.usage_price.map(f32::to_bits)
            && self.currency_code == other.currency_code
            && self.instance_tenancy == other.instance_tenancy
            && self.offering_class == other.offering_class
            && self.offering_type == other.offering_type
            && self.recurring_charges == other.recurring_charges
            && self.scope == other.scope
            && self.tags == other.tags
    }
}
impl std::cmp::Eq for ReservedInstances {}
impl std::hash::Hash for ReservedInstances {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.availability_zone, state);
        std::hash::Hash::hash(&self.duration, state);
        std::hash::Hash::hash(&self.end, state);
        std::hash::Hash::hash(&self.fixed_price.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.instance_count, state);
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.product_description, state);
        std::hash::Hash::hash(&self.reserved_instances_id, state);
        std::hash::Hash::hash(&self.start, state);
        std::hash::Hash::hash(&self.state, state);
        std::hash::Hash::hash(&self.usage_price.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.currency_code, state);
        std::hash::Hash::hash(&self.instance_tenancy, state);
        std::hash::Hash::hash(&self.offering_class, state);
        std::hash::Hash::hash(&self.offering_type, state);
        std::hash::Hash::hash(&self.recurring_charges, state);
        std::hash::Hash::hash(&self.scope, state);
        std::hash::Hash::hash(&self.tags, state);
    }
}
/// See [`ReservedInstances`](crate::model::ReservedInstances)
pub mod reserved_instances {
    /// A builder for [`ReservedInstances`](crate::model::ReservedInstances)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) duration: std::option::Option<i64>,
        pub(crate) end: std::option::Option<smithy_types::Instant>,
        pub(crate) fixed_price: std::option::Option<f32>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) product_description: std::option::Option<crate::model::RIProductDescription>,
        pub(crate) reserved_instances_id: std::option::Option<std::string::String>,
        pub(crate) start: std::option::Option<smithy_types::Instant>,
        pub(crate) state: std::option::Option<crate::model::ReservedInstanceState>,
        pub(crate) usage_price: std::option::Option<f32>,
        pub(crate) currency_code: std::option::Option<crate::model::CurrencyCodeValues>,
        pub(crate) instance_tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) offering_class: std::option::Option<crate::model::OfferingClassType>,
        pub(crate) offering_type: std::option::Option<crate::model::OfferingTypeValues>,
        pub(crate) recurring_charges: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>,
        pub(crate) scope: std::option::Option<crate::model::Scope>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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

        /// <p>The duration of the Reserved Instance, in seconds.</p>
        pub fn duration(mut self, input: i64) -> Self {
            self.duration = Some(input);
            self
        }
        /// <p>The duration of the Reserved Instance, in seconds.</p>
        pub fn set_duration(mut self, input: std::option::Option<i64>) -> Self {
            self.duration = input;
            self
        }

        /// <p>The time when the Reserved Instance expires.</p>
        pub fn end(mut self, input: smithy_types::Instant) -> Self {
            self.end = Some(input);
            self
        }
        /// <p>The time when the Reserved Instance expires.</p>
        pub fn set_end(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end = input;
            self
        }

        /// <p>The purchase price of the Reserved Instance.</p>
        pub fn fixed_price(mut self, input: f32) -> Self {
            self.fixed_price = Some(input);
            self
        }
        /// <p>The purchase price of the Reserved Instance.</p>
        pub fn set_fixed_price(mut self, input: std::option::Option<f32>) -> Self {
            self.fixed_price = input;
            self
        }

        /// <p>The number of reservations purchased.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        /// <p>The number of reservations purchased.</p>
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }

        /// <p>The instance type on which the Reserved Instance can be used.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type on which the Reserved Instance can be used.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The Reserved Instance product platform description.</p>
        pub fn product_description(mut self, input: crate::model::RIProductDescription) -> Self {
            self.product_description = Some(input);
            self
        }
        /// <p>The Reserved Instance product platform description.</p>
        pub fn set_product_description(mut self, input: std::option::Option<crate::model::RIProductDescription>) -> Self {
            self.product_description = input;
            self
        }

        /// <p>The ID of the Reserved Instance.</p>
        pub fn reserved_instances_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.reserved_instances_id = Some(input.into());
            self
        }
        /// <p>The ID of the Reserved Instance.</p>
        pub fn set_reserved_instances_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reserved_instances_id = input;
            self
        }

        /// <p>The date and time the Reserved Instance started.</p>
        pub fn start(mut self, input: smithy_types::Instant) -> Self {
            self.start = Some(input);
            self
        }
        /// <p>The date and time the Reserved Instance started.</p>
        pub fn set_start(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start = input;
            self
        }

        /// <p>The state of the Reserved Instance purchase.</p>
        pub fn state(mut self, input: crate::model::ReservedInstanceState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the Reserved Instance purchase.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::ReservedInstanceState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The usage price of the Reserved Instance, per hour.</p>
        pub fn usage_price(mut self, input: f32) -> Self {
            self.usage_price = Some(input);
            self
        }
        /// <p>The usage price of the Reserved Instance, per hour.</p>
        pub fn set_usage_price(mut self, input: std::option::Option<f32>) -> Self {
            self.usage_price = input;
            self
        }

        /// <p>The currency of the Reserved Instance. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
        pub fn currency_code(mut self, input: crate::model::CurrencyCodeValues) -> Self {
            self.currency_code = Some(input);
            self
        }
        /// <p>The currency of the Reserved Instance. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
        pub fn set_currency_code(mut self, input: std::option::Option<crate::model::CurrencyCodeValues>) -> Self {
            self.currency_code = input;
            self
        }

        /// <p>The tenancy of the instance.</p>
        pub fn instance_tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.instance_tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance.</p>
        pub fn set_instance_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.instance_tenancy = input;
            self
        }

        /// <p>The offering class of the Reserved Instance.</p>
        pub fn offering_class(mut self, input: crate::model::OfferingClassType) -> Self {
            self.offering_class = Some(input);
            self
        }
        /// <p>The offering class of the Reserved Instance.</p>
        pub fn set_offering_class(mut self, input: std::option::Option<crate::model::OfferingClassType>) -> Self {
            self.offering_class = input;
            self
        }

        /// <p>The Reserved Instance offering type.</p>
        pub fn offering_type(mut self, input: crate::model::OfferingTypeValues) -> Self {
            self.offering_type = Some(input);
            self
        }
        /// <p>The Reserved Instance offering type.</p>
        pub fn set_offering_type(mut self, input: std::option::Option<crate::model::OfferingTypeValues>) -> Self {
            self.offering_type = input;
            self
        }

        /// Appends an item to `recurring_charges`.
        ///
        /// To override the contents of this collection use [`set_recurring_charges`](Self::set_recurring_charges).
        ///
        /// <p>The recurring charge tag assigned to the resource.</p>
        pub fn recurring_charges(mut self, input: impl std::convert::Into<crate::model::RecurringCharge>) -> Self {
            let mut v = self.recurring_charges.unwrap_or_default();
            v.push(input.into());
            self.recurring_charges = Some(v);
            self
        }
        /// <p>The recurring charge tag assigned to the resource.</p>
        pub fn set_recurring_charges(mut self, input: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>) -> Self {
            self.recurring_charges = input;
            self
        }

        /// <p>The scope of the Reserved Instance.</p>
        pub fn scope(mut self, input: crate::model::Scope) -> Self {
            self.scope = Some(input);
            self
        }
        /// <p>The scope of the Reserved Instance.</p>
        pub fn set_scope(mut self, input: std::option::Option<crate::model::Scope>) -> Self {
            self.scope = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`ReservedInstances`](crate::model::ReservedInstances)
        pub fn build(self) -> crate::model::ReservedInstances {
            crate::model::ReservedInstances {
                availability_zone: self.availability_zone,
                duration: self.duration,
                end: self.end,
                fixed_price: self.fixed_price,
                instance_count: self.instance_count,
                instance_type: self.instance_type,
                product_description: self.product_description,
                reserved_instances_id: self.reserved_instances_id,
                start: self.start,
                state: self.state,
                usage_price: self.usage_price,
                currency_code: self.currency_code,
                instance_tenancy: self.instance_tenancy,
                offering_class: self.offering_class,
                offering_type: self.offering_type,
                recurring_charges: self.recurring_charges,
                scope: self.scope,
                tags: self.tags,
            }
        }
    }
}
impl ReservedInstances {
    /// Creates a new builder-style object to manufacture [`ReservedInstances`](crate::model::ReservedInstances)
    pub fn builder() -> crate::model::reserved_instances::Builder {
        crate::model::reserved_instances::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReservedInstanceState {
    #[allow(missing_docs)] // documentation missing in model
    PaymentPending,
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    PaymentFailed,
    #[allow(missing_docs)] // documentation missing in model
    Retired,
    #[allow(missing_docs)] // documentation missing in model
    Queued,
    #[allow(missing_docs)] // documentation missing in model
    QueuedDeleted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReservedInstanceState {
    fn from(s: &str) -> Self {
        match s {
            "payment-pending" => ReservedInstanceState::PaymentPending,
            "active" => ReservedInstanceState::Active,
            "payment-failed" => ReservedInstanceState::PaymentFailed,
            "retired" => ReservedInstanceState::Retired,
            "queued" => ReservedInstanceState::Queued,
            "queued-deleted" => ReservedInstanceState::QueuedDeleted,
            other => ReservedInstanceState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReservedInstanceState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReservedInstanceState::from(s))
    }
}
impl ReservedInstanceState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ReservedInstanceState::PaymentPending => "payment-pending",
            ReservedInstanceState::Active => "active",
            ReservedInstanceState::PaymentFailed => "payment-failed",
            ReservedInstanceState::Retired => "retired",
            ReservedInstanceState::Queued => "queued",
            ReservedInstanceState::QueuedDeleted => "queued-deleted",
            ReservedInstanceState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "payment-pending",
            "active",
            "payment-failed",
            "retired",
            "queued",
            "queued-deleted",
        ]
    }
}
impl AsRef<str> for ReservedInstanceState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CurrencyCodeValues {
    #[allow(missing_docs)] // documentation missing in model
    Usd,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CurrencyCodeValues {
    fn from(s: &str) -> Self {
        match s {
            "USD" => CurrencyCodeValues::Usd,
            other => CurrencyCodeValues::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CurrencyCodeValues {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CurrencyCodeValues::from(s))
    }
}
impl CurrencyCodeValues {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCodeValues::Usd => "USD",
            CurrencyCodeValues::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "USD",
        ]
    }
}
impl AsRef<str> for CurrencyCodeValues {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Scope {
    #[allow(missing_docs)] // documentation missing in model
    AvailabilityZone,
    #[allow(missing_docs)] // documentation missing in model
    Region,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Scope {
    fn from(s: &str) -> Self {
        match s {
            "Availability Zone" => Scope::AvailabilityZone,
            "Region" => Scope::Region,
            other => Scope::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Scope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Scope::from(s))
    }
}
impl Scope {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            Scope::AvailabilityZone => "Availability Zone",
            Scope::Region => "Region",
            Scope::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "Availability Zone",
            "Region",
        ]
    }
}
impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a Reserved Instance offering.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct PricingDetail {
    /// <p>The number of reservations available for the price.</p>
    pub count: std::option::Option<i32>,
    /// <p>The price per instance.</p>
    pub price: std::option::Option<f64>,
}
impl PricingDetail {
    /// <p>The number of reservations available for the price.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }

    /// <p>The price per instance.</p>
    pub fn price(&self) -> std::option::Option<f64> {
        self.price
    }
}
impl std::fmt::Debug for PricingDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Count", &self.count);
        formatter.field("Price", &self.price);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for PricingDetail {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
            && self.price.map(f64::to_bits) == other.price.map(f64::to_bits)
    }
}
impl std::cmp::Eq for PricingDetail {}
impl std::hash::Hash for PricingDetail {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.count, state);
        std::hash::Hash::hash(&self.price.map(f64::to_bits), state);
    }
}
/// See [`PricingDetail`](crate::model::PricingDetail)
pub mod pricing_detail {
    /// A builder for [`PricingDetail`](crate::model::PricingDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) count: std::option::Option<i32>,
        pub(crate) price: std::option::Option<f64>,
    }
    impl Builder {
        /// <p>The number of reservations available for the price.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The number of reservations available for the price.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }

        /// <p>The price per instance.</p>
        pub fn price(mut self, input: f64) -> Self {
            self.price = Some(input);
            self
        }
        /// <p>The price per instance.</p>
        pub fn set_price(mut self, input: std::option::Option<f64>) -> Self {
            self.price = input;
            self
        }
        /// Consumes the builder and constructs a [`PricingDetail`](crate::model::PricingDetail)
        pub fn build(self) -> crate::model::PricingDetail {
            crate::model::PricingDetail {
                count: self.count,
                price: self.price,
            }
        }
    }
}
impl PricingDetail {
    /// Creates a new builder-style object to manufacture [`PricingDetail`](crate::model::PricingDetail)
    pub fn builder() -> crate::model::pricing_detail::Builder {
        crate::model::pricing_detail::Builder::default()
    }
}

/// <p>Describes a Reserved Instance offering.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct ReservedInstancesOffering {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The duration of the Reserved Instance, in seconds.</p>
    pub duration: std::option::Option<i64>,
    /// <p>The purchase price of the Reserved Instance.</p>
    pub fixed_price: std::option::Option<f32>,
    /// <p>The instance type on which the Reserved Instance can be used.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The Reserved Instance product platform description.</p>
    pub product_description: std::option::Option<crate::model::RIProductDescription>,
    /// <p>The ID of the Reserved Instance offering. This is the offering ID used in <code>GetReservedInstancesExchangeQuote</code> to confirm that an exchange can be made.</p>
    pub reserved_instances_offering_id: std::option::Option<std::string::String>,
    /// <p>The usage price of the Reserved Instance, per hour.</p>
    pub usage_price: std::option::Option<f32>,
    /// <p>The currency of the Reserved Instance offering you are purchasing. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
    pub currency_code: std::option::Option<crate::model::CurrencyCodeValues>,
    /// <p>The tenancy of the instance.</p>
    pub instance_tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>Indicates whether the offering is available through the Reserved Instance Marketplace (resale) or AWS.</p>
    pub marketplace: std::option::Option<bool>,
    /// <p>If <code>convertible</code> it can be exchanged for Reserved Instances of the same or higher monetary value, with different configurations. If <code>standard</code>, it is not possible to perform an exchange.</p>
    pub offering_class: std::option::Option<crate::model::OfferingClassType>,
    /// <p>The Reserved Instance offering type.</p>
    pub offering_type: std::option::Option<crate::model::OfferingTypeValues>,
    /// <p>The pricing details of the Reserved Instance offering.</p>
    pub pricing_details: std::option::Option<std::vec::Vec<crate::model::PricingDetail>>,
    /// <p>The recurring charge tag assigned to the resource.</p>
    pub recurring_charges: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>,
    /// <p>Whether the Reserved Instance is applied to instances in a Region or an Availability Zone.</p>
    pub scope: std::option::Option<crate::model::Scope>,
}
impl ReservedInstancesOffering {
    /// <p>The Availability Zone in which the Reserved Instance can be used.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The duration of the Reserved Instance, in seconds.</p>
    pub fn duration(&self) -> std::option::Option<i64> {
        self.duration
    }

    /// <p>The purchase price of the Reserved Instance.</p>
    pub fn fixed_price(&self) -> std::option::Option<f32> {
        self.fixed_price
    }

    /// <p>The instance type on which the Reserved Instance can be used.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The Reserved Instance product platform description.</p>
    pub fn product_description(&self) -> std::option::Option<&crate::model::RIProductDescription> {
        self.product_description.as_ref()
    }

    /// <p>The ID of the Reserved Instance offering. This is the offering ID used in <code>GetReservedInstancesExchangeQuote</code> to confirm that an exchange can be made.</p>
    pub fn reserved_instances_offering_id(&self) -> std::option::Option<&str> {
        self.reserved_instances_offering_id.as_deref()
    }

    /// <p>The usage price of the Reserved Instance, per hour.</p>
    pub fn usage_price(&self) -> std::option::Option<f32> {
        self.usage_price
    }

    /// <p>The currency of the Reserved Instance offering you are purchasing. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
    pub fn currency_code(&self) -> std::option::Option<&crate::model::CurrencyCodeValues> {
        self.currency_code.as_ref()
    }

    /// <p>The tenancy of the instance.</p>
    pub fn instance_tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// <p>Indicates whether the offering is available through the Reserved Instance Marketplace (resale) or AWS.</p>
    pub fn marketplace(&self) -> std::option::Option<bool> {
        self.marketplace
    }

    /// <p>If <code>convertible</code> it can be exchanged for Reserved Instances of the same or higher monetary value, with different configurations. If <code>standard</code>, it is not possible to perform an exchange.</p>
    pub fn offering_class(&self) -> std::option::Option<&crate::model::OfferingClassType> {
        self.offering_class.as_ref()
    }

    /// <p>The Reserved Instance offering type.</p>
    pub fn offering_type(&self) -> std::option::Option<&crate::model::OfferingTypeValues> {
        self.offering_type.as_ref()
    }

    /// <p>The pricing details of the Reserved Instance offering.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.pricing_details.is_none()`.
    pub fn pricing_details(&self) -> &[crate::model::PricingDetail] {
        self.pricing_details.as_deref().unwrap_or_default()
    }

    /// <p>The recurring charge tag assigned to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.recurring_charges.is_none()`.
    pub fn recurring_charges(&self) -> &[crate::model::RecurringCharge] {
        self.recurring_charges.as_deref().unwrap_or_default()
    }

    /// <p>Whether the Reserved Instance is applied to instances in a Region or an Availability Zone.</p>
    pub fn scope(&self) -> std::option::Option<&crate::model::Scope> {
        self.scope.as_ref()
    }
}
impl std::fmt::Debug for ReservedInstancesOffering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Duration", &self.duration);
        formatter.field("FixedPrice", &self.fixed_price);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.enum_field("ProductDescription", &self.product_description);
        formatter.field("ReservedInstancesOfferingId", &self.reserved_instances_offering_id);
        formatter.field("UsagePrice", &self.usage_price);
        formatter.enum_field("CurrencyCode", &self.currency_code);
        formatter.enum_field("InstanceTenancy", &self.instance_tenancy);
        formatter.field("Marketplace", &self.marketplace);
        formatter.enum_field("OfferingClass", &self.offering_class);
        formatter.enum_field("OfferingType", &self.offering_type);
        formatter.field("PricingDetails", &self.pricing_details);
        formatter.field("RecurringCharges", &self.recurring_charges);
        formatter.enum_field("Scope", &self.scope);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for ReservedInstancesOffering {
    fn eq(&self, other: &Self) -> bool {
        self.availability_zone == other.availability_zone
            && self.duration == other.duration
            && self.fixed_price.map(f32::to_bits) == other.fixed_price.map(f32::to_bits)
            && self.instance_type == other.instance_type
            && self.product_description == other.product_description
            && self.reserved_instances_offering_id == other.reserved_instances_offering_id
            && self.usage_price.map(f32::to_bits) == other.usage_price.map(f32::to_bits)
            && self.currency_code == other.currency_code
            && self.instance_tenancy == other.instance_tenancy
            && self.marketplace == other.marketplace
            && self.offering_class == other.offering_class
            && self.offering_type == other.offering_type
            && self.pricing_details == other.pricing_details
            && self.recurring_charges == other.recurring_charges
            && self.scope == other.scope
    }
}
impl std::cmp::Eq for ReservedInstancesOffering {}
impl std::hash::Hash for ReservedInstancesOffering {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.availability_zone, state);
        std::hash::Hash::hash(&self.duration, state);
        std::hash::Hash::hash(&self.fixed_price.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.product_description, state);
        std::hash::Hash::hash(&self.reserved_instances_offering_id, state);
        std::hash::Hash::hash(&self.usage_price.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.currency_code, state);
        std::hash::Hash::hash(&self.instance_tenancy, state);
        std::hash::Hash::hash(&self.marketplace, state);
        std::hash::Hash::hash(&self.offering_class, state);
        std::hash::Hash::hash(&self.offering_type, state);
        std::hash::Hash::hash(&self.pricing_details, state);
        std::hash::Hash::hash(&self.recurring_charges, state);
        std::hash::Hash::hash(&self.scope, state);
    }
}
/// See [`ReservedInstancesOffering`](crate::model::ReservedInstancesOffering)
pub mod reserved_instances_offering {
    /// A builder for [`ReservedInstancesOffering`](crate::model::ReservedInstancesOffering)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) duration: std::option::Option<i64>,
        pub(crate) fixed_price: std::option::Option<f32>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) product_description: std::option::Option<crate::model::RIProductDescription>,
        pub(crate) reserved_instances_offering_id: std::option::Option<std::string::String>,
        pub(crate) usage_price: std::option::Option<f32>,
        pub(crate) currency_code: std::option::Option<crate::model::CurrencyCodeValues>,
        pub(crate) instance_tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) marketplace: std::option::Option<bool>,
        pub(crate) offering_class: std::option::Option<crate::model::OfferingClassType>,
        pub(crate) offering_type: std::option::Option<crate::model::OfferingTypeValues>,
        pub(crate) pricing_details: std::option::Option<std::vec::Vec<crate::model::PricingDetail>>,
        pub(crate) recurring_charges: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>,
        pub(crate) scope: std::option::Option<crate::model::Scope>,
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

        /// <p>The duration of the Reserved Instance, in seconds.</p>
        pub fn duration(mut self, input: i64) -> Self {
            self.duration = Some(input);
            self
        }
        /// <p>The duration of the Reserved Instance, in seconds.</p>
        pub fn set_duration(mut self, input: std::option::Option<i64>) -> Self {
            self.duration = input;
            self
        }

        /// <p>The purchase price of the Reserved Instance.</p>
        pub fn fixed_price(mut self, input: f32) -> Self {
            self.fixed_price = Some(input);
            self
        }
        /// <p>The purchase price of the Reserved Instance.</p>
        pub fn set_fixed_price(mut self, input: std::option::Option<f32>) -> Self {
            self.fixed_price = input;
            self
        }

        /// <p>The instance type on which the Reserved Instance can be used.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type on which the Reserved Instance can be used.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The Reserved Instance product platform description.</p>
        pub fn product_description(mut self, input: crate::model::RIProductDescription) -> Self {
            self.product_description = Some(input);
            self
        }
        /// <p>The Reserved Instance product platform description.</p>
        pub fn set_product_description(mut self, input: std::option::Option<crate::model::RIProductDescription>) -> Self {
            self.product_description = input;
            self
        }

        /// <p>The ID of the Reserved Instance offering. This is the offering ID used in <code>GetReservedInstancesExchangeQuote</code> to confirm that an exchange can be made.</p>
        pub fn reserved_instances_offering_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.reserved_instances_offering_id = Some(input.into());
            self
        }
        /// <p>The ID of the Reserved Instance offering. This is the offering ID used in <code>GetReservedInstancesExchangeQuote</code> to confirm that an exchange can be made.</p>
        pub fn set_reserved_instances_offering_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reserved_instances_offering_id = input;
            self
        }

        /// <p>The usage price of the Reserved Instance, per hour.</p>
        pub fn usage_price(mut self, input: f32) -> Self {
            self.usage_price = Some(input);
            self
        }
        /// <p>The usage price of the Reserved Instance, per hour.</p>
        pub fn set_usage_price(mut self, input: std::option::Option<f32>) -> Self {
            self.usage_price = input;
            self
        }

        /// <p>The currency of the Reserved Instance offering you are purchasing. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
        pub fn currency_code(mut self, input: crate::model::CurrencyCodeValues) -> Self {
            self.currency_code = Some(input);
            self
        }
        /// <p>The currency of the Reserved Instance offering you are purchasing. It's specified using ISO 4217 standard currency codes. At this time, the only supported currency is <code>USD</code>.</p>
        pub fn set_currency_code(mut self, input: std::option::Option<crate::model::CurrencyCodeValues>) -> Self {
            self.currency_code = input;
            self
        }

        /// <p>The tenancy of the instance.</p>
        pub fn instance_tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.instance_tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance.</p>
        pub fn set_instance_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.instance_tenancy = input;
            self
        }

        /// <p>Indicates whether the offering is available through the Reserved Instance Marketplace (resale) or AWS.</p>
        pub fn marketplace(mut self, input: bool) -> Self {
            self.marketplace = Some(input);
            self
        }
        /// <p>Indicates whether the offering is available through the Reserved Instance Marketplace (resale) or AWS.</p>
        pub fn set_marketplace(mut self, input: std::option::Option<bool>) -> Self {
            self.marketplace = input;
            self
        }

        /// <p>If <code>convertible</code> it can be exchanged for Reserved Instances of the same or higher monetary value, with different configurations. If <code>standard</code>, it is not possible to perform an exchange.</p>
        pub fn offering_class(mut self, input: crate::model::OfferingClassType) -> Self {
            self.offering_class = Some(input);
            self
        }
        /// <p>If <code>convertible</code> it can be exchanged for Reserved Instances of the same or higher monetary value, with different configurations. If <code>standard</code>, it is not possible to perform an exchange.</p>
        pub fn set_offering_class(mut self, input: std::option::Option<crate::model::OfferingClassType>) -> Self {
            self.offering_class = input;
            self
        }

        /// <p>The Reserved Instance offering type.</p>
        pub fn offering_type(mut self, input: crate::model::OfferingTypeValues) -> Self {
            self.offering_type = Some(input);
            self
        }
        /// <p>The Reserved Instance offering type.</p>
        pub fn set_offering_type(mut self, input: std::option::Option<crate::model::OfferingTypeValues>) -> Self {
            self.offering_type = input;
            self
        }

        /// Appends an item to `pricing_details`.
        ///
        /// To override the contents of this collection use [`set_pricing_details`](Self::set_pricing_details).
        ///
        /// <p>The pricing details of the Reserved Instance offering.</p>
        pub fn pricing_details(mut self, input: impl std::convert::Into<crate::model::PricingDetail>) -> Self {
            let mut v = self.pricing_details.unwrap_or_default();
            v.push(input.into());
            self.pricing_details = Some(v);
            self
        }
        /// <p>The pricing details of the Reserved Instance offering.</p>
        pub fn set_pricing_details(mut self, input: std::option::Option<std::vec::Vec<crate::model::PricingDetail>>) -> Self {
            self.pricing_details = input;
            self
        }

        /// Appends an item to `recurring_charges`.
        ///
        /// To override the contents of this collection use [`set_recurring_charges`](Self::set_recurring_charges).
        ///
        /// <p>The recurring charge tag assigned to the resource.</p>
        pub fn recurring_charges(mut self, input: impl std::convert::Into<crate::model::RecurringCharge>) -> Self {
            let mut v = self.recurring_charges.unwrap_or_default();
            v.push(input.into());
            self.recurring_charges = Some(v);
            self
        }
        /// <p>The recurring charge tag assigned to the resource.</p>
        pub fn set_recurring_charges(mut self, input: std::option::Option<std::vec::Vec<crate::model::RecurringCharge>>) -> Self {
            self.recurring_charges = input;
            self
        }

        /// <p>Whether the Reserved Instance is applied to instances in a Region or an Availability Zone.</p>
        pub fn scope(mut self, input: crate::model::Scope) -> Self {
            self.scope = Some(input);
            self
        }
        /// <p>Whether the Reserved Instance is applied to instances in a Region or an Availability Zone.</p>
        pub fn set_scope(mut self, input: std::option::Option<crate::model::Scope>) -> Self {
            self.scope = input;
            self
        }
        /// Consumes the builder and constructs a [`ReservedInstancesOffering`](crate::model::ReservedInstancesOffering)
        pub fn build(self) -> crate::model::ReservedInstancesOffering {
            crate::model::ReservedInstancesOffering {
                availability_zone: self.availability_zone,
                duration: self.duration,
                fixed_price: self.fixed_price,
                instance_type: self.instance_type,
                product_description: self.product_description,
                reserved_instances_offering_id: self.reserved_instances_offering_id,
                usage_price: self.usage_price,
                currency_code: self.currency_code,
                instance_tenancy: self.instance_tenancy,
                marketplace: self.marketplace,
                offering_class: self.offering_class,
                offering_type: self.offering_type,
                pricing_details: self.pricing_details,
                recurring_charges: self.recurring_charges,
                scope: self.scope,
            }
        }
    }
}
impl ReservedInstancesOffering {
    /// Creates a new builder-style object to manufacture [`ReservedInstancesOffering`](crate::model::ReservedInstancesOffering)
    pub fn builder() -> crate::model::reserved_instances_offering::Builder {
        crate::model::reserved_instances_offering::Builder::default()
    }
}

/// <p>Describes the processor used by the instance type.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct ProcessorInfo {
    /// <p>The architectures supported by the instance type.</p>
    pub supported_architectures: std::option::Option<std::vec::Vec<crate::model::ArchitectureType>>,
    /// <p>The speed of the processor, in GHz.</p>
    pub sustained_clock_speed_in_ghz: std::option::Option<f64>,
}
impl ProcessorInfo {
    /// <p>The architectures supported by the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_architectures.is_none()`.
    pub fn supported_architectures(&self) -> &[crate::model::ArchitectureType] {
        self.supported_architectures.as_deref().unwrap_or_default()
    }

    /// <p>The speed of the processor, in GHz.</p>
    pub fn sustained_clock_speed_in_ghz(&self) -> std::option::Option<f64> {
        self.sustained_clock_speed_in_ghz
    }
}
impl std::fmt::Debug for ProcessorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_list_field("SupportedArchitectures", &self.supported_architectures);
        formatter.field("SustainedClockSpeedInGhz", &self.sustained_clock_speed_in_ghz);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for ProcessorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.supported_architectures == other.supported_architectures
            && self.sustained_clock_speed_in_ghz.map(f64::to_bits) == other.sustained_clock_speed_in_ghz.map(f64::to_bits)
    }
}
impl std::cmp::Eq for ProcessorInfo {}
impl std::hash::Hash for ProcessorInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.supported_architectures, state);
        std::hash::Hash::hash(&self.sustained_clock_speed_in_ghz.map(f64::to_bits), state);
    }
}
/// See [`ProcessorInfo`](crate::model::ProcessorInfo)
pub mod processor_info {
    /// A builder for [`ProcessorInfo`](crate::model::ProcessorInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) supported_architectures: std::option::Option<std::vec::Vec<crate::model::ArchitectureType>>,
        pub(crate) sustained_clock_speed_in_ghz: std::option::Option<f64>,
    }
    impl Builder {
        /// Appends an item to `supported_architectures`.
        ///
        /// To override the contents of this collection use [`set_supported_architectures`](Self::set_supported_architectures).
        ///
        /// <p>The architectures supported by the instance type.</p>
        pub fn supported_architectures(mut self, input: impl std::convert::Into<crate::model::ArchitectureType>) -> Self {
            let mut v = self.supported_architectures.unwrap_or_default();
            v.push(input.into());
            self.supported_architectures = Some(v);
            self
        }
        /// <p>The architectures supported by the instance type.</p>
        pub fn set_supported_architectures(mut self, input: std::option::Option<std::vec::Vec<crate::model::ArchitectureType>>) -> Self {
            self.supported_architectures = input;
            self
        }

        /// <p>The speed of the processor, in GHz.</p>
        pub fn sustained_clock_speed_in_ghz(mut self, input: f64) -> Self {
            self.sustained_clock_speed_in_ghz = Some(input);
            self
        }
        /// <p>The speed of the processor, in GHz.</p>
        pub fn set_sustained_clock_speed_in_ghz(mut self, input: std::option::Option<f64>) -> Self {
            self.sustained_clock_speed_in_ghz = input;
            self
        }
        /// Consumes the builder and constructs a [`ProcessorInfo`](crate::model::ProcessorInfo)
        pub fn build(self) -> crate::model::ProcessorInfo {
            crate::model::ProcessorInfo {
                supported_architectures: self.supported_architectures,
                sustained_clock_speed_in_ghz: self.sustained_clock_speed_in_ghz,
            }
        }
    }
}
impl ProcessorInfo {
    /// Creates a new builder-style object to manufacture [`ProcessorInfo`](crate::model::ProcessorInfo)
    pub fn builder() -> crate::model::processor_info::Builder {
        crate::model::processor_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ArchitectureType {
    #[allow(missing_docs)] // documentation missing in model
    I386,
    #[allow(missing_docs)] // documentation missing in model
    X8664,
    #[allow(missing_docs)] // documentation missing in model
    Arm64,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ArchitectureType {
    fn from(s: &str) -> Self {
        match s {
            "i386" => ArchitectureType::I386,
            "x86_64" => ArchitectureType::X8664,
            "arm64" => ArchitectureType::Arm64,
            other => ArchitectureType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ArchitectureType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ArchitectureType::from(s))
    }
}
impl ArchitectureType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ArchitectureType::I386 => "i386",
            ArchitectureType::X8664 => "x86_64",
            ArchitectureType::Arm64 => "arm64",
            ArchitectureType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "i386",
            "x86_64",
            "arm64",
        ]
    }
}
impl AsRef<str> for ArchitectureType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the vCPU configurations for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct VCpuInfo {
    /// <p>The default number of vCPUs for the instance type.</p>
    pub default_v_cpus: std::option::Option<i32>,
    /// <p>The default number of cores for the instance type.</p>
    pub default_cores: std::option::Option<i32>,
    /// <p>The default number of threads per core for the instance type.</p>
    pub default_threads_per_core: std::option::Option<i32>,
    /// <p>The valid number of cores that can be configured for the instance type.</p>
    pub valid_cores: std::option::Option<std::vec::Vec<i32>>,
    /// <p>The valid number of threads per core that can be configured for the instance type.</p>
    pub valid_threads_per_core: std::option::Option<std::vec::Vec<i32>>,
}
impl VCpuInfo {
    /// <p>The default number of vCPUs for the instance type.</p>
    pub fn default_v_cpus(&self) -> std::option::Option<i32> {
        self.default_v_cpus
    }

    /// <p>The default number of cores for the instance type.</p>
    pub fn default_cores(&self) -> std::option::Option<i32> {
        self.default_cores
    }

    /// <p>The default number of threads per core for the instance type.</p>
    pub fn default_threads_per_core(&self) -> std::option::Option<i32> {
        self.default_threads_per_core
    }

    /// <p>The valid number of cores that can be configured for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.valid_cores.is_none()`.
    pub fn valid_cores(&self) -> &[i32] {
        self.valid_cores.as_deref().unwrap_or_default()
    }

    /// <p>The valid number of threads per core that can be configured for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.valid_threads_per_core.is_none()`.
    pub fn valid_threads_per_core(&self) -> &[i32] {
        self.valid_threads_per_core.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for VCpuInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DefaultVCpus", &self.default_v_cpus);
        formatter.field("DefaultCores", &self.default_cores);
        formatter.field("DefaultThreadsPerCore", &self.default_threads_per_core);
        formatter.field("ValidCores", &self.valid_cores);
        formatter.field("ValidThreadsPerCore", &self.valid_threads_per_core);
        formatter.finish()
    }
}
/// See [`VCpuInfo`](crate::model::VCpuInfo)
pub mod v_cpu_info {
    /// A builder for [`VCpuInfo`](crate::model::VCpuInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) default_v_cpus: std::option::Option<i32>,
        pub(crate) default_cores: std::option::Option<i32>,
        pub(crate) default_threads_per_core: std::option::Option<i32>,
        pub(crate) valid_cores: std::option::Option<std::vec::Vec<i32>>,
        pub(crate) valid_threads_per_core: std::option::Option<std::vec::Vec<i32>>,
    }
    impl Builder {
        /// <p>The default number of vCPUs for the instance type.</p>
        pub fn default_v_cpus(mut self, input: i32) -> Self {
            self.default_v_cpus = Some(input);
            self
        }
        /// <p>The default number of vCPUs for the instance type.</p>
        pub fn set_default_v_cpus(mut self, input: std::option::Option<i32>) -> Self {
            self.default_v_cpus = input;
            self
        }

        /// <p>The default number of cores for the instance type.</p>
        pub fn default_cores(mut self, input: i32) -> Self {
            self.default_cores = Some(input);
            self
        }
        /// <p>The default number of cores for the instance type.</p>
        pub fn set_default_cores(mut self, input: std::option::Option<i32>) -> Self {
            self.default_cores = input;
            self
        }

        /// <p>The default number of threads per core for the instance type.</p>
        pub fn default_threads_per_core(mut self, input: i32) -> Self {
            self.default_threads_per_core = Some(input);
            self
        }
        /// <p>The default number of threads per core for the instance type.</p>
        pub fn set_default_threads_per_core(mut self, input: std::option::Option<i32>) -> Self {
            self.default_threads_per_core = input;
            self
        }

        /// Appends an item to `valid_cores`.
        ///
        /// To override the contents of this collection use [`set_valid_cores`](Self::set_valid_cores).
        ///
        /// <p>The valid number of cores that can be configured for the instance type.</p>
        pub fn valid_cores(mut self, input: i32) -> Self {
            let mut v = self.valid_cores.unwrap_or_default();
            v.push(input);
            self.valid_cores = Some(v);
            self
        }
        /// <p>The valid number of cores that can be configured for the instance type.</p>
        pub fn set_valid_cores(mut self, input: std::option::Option<std::vec::Vec<i32>>) -> Self {
            self.valid_cores = input;
            self
        }

        /// Appends an item to `valid_threads_per_core`.
        ///
        /// To override the contents of this collection use [`set_valid_threads_per_core`](Self::set_valid_threads_per_core).
        ///
        /// <p>The valid number of threads per core that can be configured for the instance type.</p>
        pub fn valid_threads_per_core(mut self, input: i32) -> Self {
            let mut v = self.valid_threads_per_core.unwrap_or_default();
            v.push(input);
            self.valid_threads_per_core = Some(v);
            self
        }
        /// <p>The valid number of threads per core that can be configured for the instance type.</p>
        pub fn set_valid_threads_per_core(mut self, input: std::option::Option<std::vec::Vec<i32>>) -> Self {
            self.valid_threads_per_core = input;
            self
        }
        /// Consumes the builder and constructs a [`VCpuInfo`](crate::model::VCpuInfo)
        pub fn build(self) -> crate::model::VCpuInfo {
            crate::model::VCpuInfo {
                default_v_cpus: self.default_v_cpus,
                default_cores: self.default_cores,
                default_threads_per_core: self.default_threads_per_core,
                valid_cores: self.valid_cores,
                valid_threads_per_core: self.valid_threads_per_core,
            }
        }
    }
}
impl VCpuInfo {
    /// Creates a new builder-style object to manufacture [`VCpuInfo`](crate::model::VCpuInfo)
    pub fn builder() -> crate::model::v_cpu_info::Builder {
        crate::model::v_cpu_info::Builder::default()
    }
}

/// <p>Describes the memory for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct MemoryInfo {
    /// <p>The size of the memory, in MiB.</p>
    pub size_in_mi_b: std::option::Option<i64>,
}
impl MemoryInfo {
    /// <p>The size of the memory, in MiB.</p>
    pub fn size_in_mi_b(&self) -> std::option::Option<i64> {
        self.size_in_mi_b
    }
}
impl std::fmt::Debug for MemoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SizeInMiB", &self.size_in_mi_b);
        formatter.finish()
    }
}
/// See [`MemoryInfo`](crate::model::MemoryInfo)
pub mod memory_info {
    /// A builder for [`MemoryInfo`](crate::model::MemoryInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) size_in_mi_b: std::option::Option<i64>,
    }
    impl Builder {
        /// <p>The size of the memory, in MiB.</p>
        pub fn size_in_mi_b(mut self, input: i64) -> Self {
            self.size_in_mi_b = Some(input);
            self
        }
        /// <p>The size of the memory, in MiB.</p>
        pub fn set_size_in_mi_b(mut self, input: std::option::Option<i64>) -> Self {
            self.size_in_mi_b = input;
            self
        }
        /// Consumes the builder and constructs a [`MemoryInfo`](crate::model::MemoryInfo)
        pub fn build(self) -> crate::model::MemoryInfo {
            crate::model::MemoryInfo {
                size_in_mi_b: self.size_in_mi_b,
            }
        }
    }
}
impl MemoryInfo {
    /// Creates a new builder-style object to manufacture [`MemoryInfo`](crate::model::MemoryInfo)
    pub fn builder() -> crate::model::memory_info::Builder {
        crate::model::memory_info::Builder::default()
    }
}

/// <p>Describes the disk.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DiskInfo {
    /// <p>The size of the disk in GB.</p>
    pub size_in_gb: std::option::Option<i64>,
    /// <p>The number of disks with this configuration.</p>
    pub count: std::option::Option<i32>,
    /// <p>The type of disk.</p>
    pub r#type: std::option::Option<crate::model::DiskType>,
}
impl DiskInfo {
    /// <p>The size of the disk in GB.</p>
    pub fn size_in_gb(&self) -> std::option::Option<i64> {
        self.size_in_gb
    }

    /// <p>The number of disks with this configuration.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }

    /// <p>The type of disk.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::DiskType> {
        self.r#type.as_ref()
    }
}
impl std::fmt::Debug for DiskInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SizeInGB", &self.size_in_gb);
        formatter.field("Count", &self.count);
        formatter.enum_field("Type", &self.r#type);
        formatter.finish()
    }
}
/// See [`DiskInfo`](crate::model::DiskInfo)
pub mod disk_info {
    /// A builder for [`DiskInfo`](crate::model::DiskInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) size_in_gb: std::option::Option<i64>,
        pub(crate) count: std::option::Option<i32>,
        pub(crate) r#type: std::option::Option<crate::model::DiskType>,
    }
    impl Builder {
        /// <p>The size of the disk in GB.</p>
        pub fn size_in_gb(mut self, input: i64) -> Self {
            self.size_in_gb = Some(input);
            self
        }
        /// <p>The size of the disk in GB.</p>
        pub fn set_size_in_gb(mut self, input: std::option::Option<i64>) -> Self {
            self.size_in_gb = input;
            self
        }

        /// <p>The number of disks with this configuration.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The number of disks with this configuration.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }

        /// <p>The type of disk.</p>
        pub fn r#type(mut self, input: crate::model::DiskType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of disk.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::DiskType>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`DiskInfo`](crate::model::DiskInfo)
        pub fn build(self) -> crate::model::DiskInfo {
            crate::model::DiskInfo {
                size_in_gb: self.size_in_gb,
                count: self.count,
                r#type: self.r#type,
            }
        }
    }
}
impl DiskInfo {
    /// Creates a new builder-style object to manufacture [`DiskInfo`](crate::model::DiskInfo)
    pub fn builder() -> crate::model::disk_info::Builder {
        crate::model::disk_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DiskType {
    #[allow(missing_docs)] // documentation missing in model
    Hdd,
    #[allow(missing_docs)] // documentation missing in model
    Ssd,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DiskType {
    fn from(s: &str) -> Self {
        match s {
            "hdd" => DiskType::Hdd,
            "ssd" => DiskType::Ssd,
            other => DiskType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DiskType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DiskType::from(s))
    }
}
impl DiskType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            DiskType::Hdd => "hdd",
            DiskType::Ssd => "ssd",
            DiskType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "hdd",
            "ssd",
        ]
    }
}
impl AsRef<str> for DiskType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the disks that are available for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceStorageInfo {
    /// <p>The total size of the disks, in GB.</p>
    pub total_size_in_gb: std::option::Option<i64>,
    /// <p>Describes the disks that are available for the instance type.</p>
    pub disks: std::option::Option<std::vec::Vec<crate::model::DiskInfo>>,
}
impl InstanceStorageInfo {
    /// <p>The total size of the disks, in GB.</p>
    pub fn total_size_in_gb(&self) -> std::option::Option<i64> {
        self.total_size_in_gb
    }

    /// <p>Describes the disks that are available for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.disks.is_none()`.
    pub fn disks(&self) -> &[crate::model::DiskInfo] {
        self.disks.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for InstanceStorageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("TotalSizeInGB", &self.total_size_in_gb);
        formatter.field("Disks", &self.disks);
        formatter.finish()
    }
}
/// See [`InstanceStorageInfo`](crate::model::InstanceStorageInfo)
pub mod instance_storage_info {
    /// A builder for [`InstanceStorageInfo`](crate::model::InstanceStorageInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) total_size_in_gb: std::option::Option<i64>,
        pub(crate) disks: std::option::Option<std::vec::Vec<crate::model::DiskInfo>>,
    }
    impl Builder {
        /// <p>The total size of the disks, in GB.</p>
        pub fn total_size_in_gb(mut self, input: i64) -> Self {
            self.total_size_in_gb = Some(input);
            self
        }
        /// <p>The total size of the disks, in GB.</p>
        pub fn set_total_size_in_gb(mut self, input: std::option::Option<i64>) -> Self {
            self.total_size_in_gb = input;
            self
        }

        /// Appends an item to `disks`.
        ///
        /// To override the contents of this collection use [`set_disks`](Self::set_disks).
        ///
        /// <p>Describes the disks that are available for the instance type.</p>
        pub fn disks(mut self, input: impl std::convert::Into<crate::model::DiskInfo>) -> Self {
            let mut v = self.disks.unwrap_or_default();
            v.push(input.into());
            self.disks = Some(v);
            self
        }
        /// <p>Describes the disks that are available for the instance type.</p>
        pub fn set_disks(mut self, input: std::option::Option<std::vec::Vec<crate::model::DiskInfo>>) -> Self {
            self.disks = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceStorageInfo`](crate::model::InstanceStorageInfo)
        pub fn build(self) -> crate::model::InstanceStorageInfo {
            crate::model::InstanceStorageInfo {
                total_size_in_gb: self.total_size_in_gb,
                disks: self.disks,
            }
        }
    }
}
impl InstanceStorageInfo {
    /// Creates a new builder-style object to manufacture [`InstanceStorageInfo`](crate::model::InstanceStorageInfo)
    pub fn builder() -> crate::model::instance_storage_info::Builder {
        crate::model::instance_storage_info::Builder::default()
    }
}

/// <p>Describes the optimized EBS performance for supported instance types.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct EbsOptimizedInfo {
    /// <p>The baseline bandwidth performance for an instance type, in Mbps.</p>
    pub baseline_bandwidth_in_mbps: std::option::Option<i32>,
    /// <p>The baseline throughput performance for an instance type, in MB/s.</p>
    pub baseline_throughput_in_m_bps: std::option::Option<f64>,
    /// <p>The baseline input/output storage operations per seconds for an instance type.</p>
    pub baseline_iops: std::option::Option<i32>,
    /// <p>The maximum bandwidth performance for an instance type, in Mbps.</p>
    pub maximum_bandwidth_in_mbps: std::option::Option<i32>,
    /// <p>The maximum throughput performance for an instance type, in MB/s.</p>
    pub maximum_throughput_in_m_bps: std::option::Option<f64>,
    /// <p>The maximum input/output storage operations per second for an instance type.</p>
    pub maximum_iops: std::option::Option<i32>,
}
impl EbsOptimizedInfo {
    /// <p>The baseline bandwidth performance for an instance type, in Mbps.</p>
    pub fn baseline_bandwidth_in_mbps(&self) -> std::option::Option<i32> {
        self.baseline_bandwidth_in_mbps
    }

    /// <p>The baseline throughput performance for an instance type, in MB/s.</p>
    pub fn baseline_throughput_in_m_bps(&self) -> std::option::Option<f64> {
        self.baseline_throughput_in_m_bps
    }

    /// <p>The baseline input/output storage operations per seconds for an instance type.</p>
    pub fn baseline_iops(&self) -> std::option::Option<i32> {
        self.baseline_iops
    }

    /// <p>The maximum bandwidth performance for an instance type, in Mbps.</p>
    pub fn maximum_bandwidth_in_mbps(&self) -> std::option::Option<i32> {
        self.maximum_bandwidth_in_mbps
    }

    /// <p>The maximum throughput performance for an instance type, in MB/s.</p>
    pub fn maximum_throughput_in_m_bps(&self) -> std::option::Option<f64> {
        self.maximum_throughput_in_m_bps
    }

    /// <p>The maximum input/output storage operations per second for an instance type.</p>
    pub fn maximum_iops(&self) -> std::option::Option<i32> {
        self.maximum_iops
    }
}
impl std::fmt::Debug for EbsOptimizedInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("BaselineBandwidthInMbps", &self.baseline_bandwidth_in_mbps);
        formatter.field("BaselineThroughputInMBps", &self.baseline_throughput_in_m_bps);
        formatter.field("BaselineIops", &self.baseline_iops);
        formatter.field("MaximumBandwidthInMbps", &self.maximum_bandwidth_in_mbps);
        formatter.field("MaximumThroughputInMBps", &self.maximum_throughput_in_m_bps);
        formatter.field("MaximumIops", &self.maximum_iops);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for EbsOptimizedInfo {
    fn eq(&self, other: &Self) -> bool {
        self.baseline_bandwidth_in_mbps == other.baseline_bandwidth_in_mbps
            && self.baseline_throughput_in_m_bps.map(f64::to_bits) == other.baseline_throughput_in_m_bps.map(f64::to_bits)
            && self.baseline_iops == other.baseline_iops
            && self.maximum_bandwidth_in_mbps == other.maximum_bandwidth_in_mbps
            && self.maximum_throughput_in_m_bps.map(f64::to_bits) == other.maximum_throughput_in_m_bps.map(f64::to_bits)
            && self.maximum_iops == other.maximum_iops
    }
}
impl std::cmp::Eq for EbsOptimizedInfo {}
impl std::hash::Hash for EbsOptimizedInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.baseline_bandwidth_in_mbps, state);
        std::hash::Hash::hash(&self.baseline_throughput_in_m_bps.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.baseline_iops, state);
        std::hash::Hash::hash(&self.maximum_bandwidth_in_mbps, state);
        std::hash::Hash::hash(&self.maximum_throughput_in_m_bps.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.maximum_iops, state);
    }
}
/// See [`EbsOptimizedInfo`](crate::model::EbsOptimizedInfo)
pub mod ebs_optimized_info {
    /// A builder for [`EbsOptimizedInfo`](crate::model::EbsOptimizedInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) baseline_bandwidth_in_mbps: std::option::Option<i32>,
        pub(crate) baseline_throughput_in_m_bps: std::option::Option<f64>,
        pub(crate) baseline_iops: std::option::Option<i32>,
        pub(crate) maximum_bandwidth_in_mbps: std::option::Option<i32>,
        pub(crate) maximum_throughput_in_m_bps: std::option::Option<f64>,
        pub(crate) maximum_iops: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The baseline bandwidth performance for an instance type, in Mbps.</p>
        pub fn baseline_bandwidth_in_mbps(mut self, input: i32) -> Self {
            self.baseline_bandwidth_in_mbps = Some(input);
            self
        }
        /// <p>The baseline bandwidth performance for an instance type, in Mbps.</p>
        pub fn set_baseline_bandwidth_in_mbps(mut self, input: std::option::Option<i32>) -> Self {
            self.baseline_bandwidth_in_mbps = input;
            self
        }

        /// <p>The baseline throughput performance for an instance type, in MB/s.</p>
        pub fn baseline_throughput_in_m_bps(mut self, input: f64) -> Self {
            self.baseline_throughput_in_m_bps = Some(input);
            self
        }
        /// <p>The baseline throughput performance for an instance type, in MB/s.</p>
        pub fn set_baseline_throughput_in_m_bps(mut self, input: std::option::Option<f64>) -> Self {
            self.baseline_throughput_in_m_bps = input;
            self
        }

        /// <p>The baseline input/output storage operations per seconds for an instance type.</p>
        pub fn baseline_iops(mut self, input: i32) -> Self {
            self.baseline_iops = Some(input);
            self
        }
        /// <p>The baseline input/output storage operations per seconds for an instance type.</p>
        pub fn set_baseline_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.baseline_iops = input;
            self
        }

        /// <p>The maximum bandwidth performance for an instance type, in Mbps.</p>
        pub fn maximum_bandwidth_in_mbps(mut self, input: i32) -> Self {
            self.maximum_bandwidth_in_mbps = Some(input);
            self
        }
        /// <p>The maximum bandwidth performance for an instance type, in Mbps.</p>
        pub fn set_maximum_bandwidth_in_mbps(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_bandwidth_in_mbps = input;
            self
        }

        /// <p>The maximum throughput performance for an instance type, in MB/s.</p>
        pub fn maximum_throughput_in_m_bps(mut self, input: f64) -> Self {
            self.maximum_throughput_in_m_bps = Some(input);
            self
        }
        /// <p>The maximum throughput performance for an instance type, in MB/s.</p>
        pub fn set_maximum_throughput_in_m_bps(mut self, input: std::option::Option<f64>) -> Self {
            self.maximum_throughput_in_m_bps = input;
            self
        }

        /// <p>The maximum input/output storage operations per second for an instance type.</p>
        pub fn maximum_iops(mut self, input: i32) -> Self {
            self.maximum_iops = Some(input);
            self
        }
        /// <p>The maximum input/output storage operations per second for an instance type.</p>
        pub fn set_maximum_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_iops = input;
            self
        }
        /// Consumes the builder and constructs a [`EbsOptimizedInfo`](crate::model::EbsOptimizedInfo)
        pub fn build(self) -> crate::model::EbsOptimizedInfo {
            crate::model::EbsOptimizedInfo {
                baseline_bandwidth_in_mbps: self.baseline_bandwidth_in_mbps,
                baseline_throughput_in_m_bps: self.baseline_throughput_in_m_bps,
                baseline_iops: self.baseline_iops,
                maximum_bandwidth_in_mbps: self.maximum_bandwidth_in_mbps,
                maximum_throughput_in_m_bps: self.maximum_throughput_in_m_bps,
                maximum_iops: self.maximum_iops,
            }
        }
    }
}
impl EbsOptimizedInfo {
    /// Creates a new builder-style object to manufacture [`EbsOptimizedInfo`](crate::model::EbsOptimizedInfo)
    pub fn builder() -> crate::model::ebs_optimized_info::Builder {
        crate::model::ebs_optimized_info::Builder::default()
    }
}

/// <p>Describes the Amazon EBS features supported by the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct EbsInfo {
    /// <p>Indicates that the instance type is Amazon EBS-optimized.</p>
    pub ebs_optimized_support: std::option::Option<crate::model::EbsOptimizedSupport>,
    /// <p>Indicates whether Amazon EBS encryption is supported.</p>
    pub encryption_support: std::option::Option<crate::model::EbsEncryptionSupport>,
    /// <p>Describes the optimized EBS performance for the instance type.</p>
    pub ebs_optimized_info: std::option::Option<crate::model::EbsOptimizedInfo>,
}
impl EbsInfo {
    /// <p>Indicates that the instance type is Amazon EBS-optimized.</p>
    pub fn ebs_optimized_support(&self) -> std::option::Option<&crate::model::EbsOptimizedSupport> {
        self.ebs_optimized_support.as_ref()
    }

    /// <p>Indicates whether Amazon EBS encryption is supported.</p>
    pub fn encryption_support(&self) -> std::option::Option<&crate::model::EbsEncryptionSupport> {
        self.encryption_support.as_ref()
    }

    /// <p>Describes the optimized EBS performance for the instance type.</p>
    pub fn ebs_optimized_info(&self) -> std::option::Option<&crate::model::EbsOptimizedInfo> {
        self.ebs_optimized_info.as_ref()
    }
}
impl std::fmt::Debug for EbsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("EbsOptimizedSupport", &self.ebs_optimized_support);
        formatter.enum_field("EncryptionSupport", &self.encryption_support);
        formatter.field("EbsOptimizedInfo", &self.ebs_optimized_info);
        formatter.finish()
    }
}
/// See [`EbsInfo`](crate::model::EbsInfo)
pub mod ebs_info {
    /// A builder for [`EbsInfo`](crate::model::EbsInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ebs_optimized_support: std::option::Option<crate::model::EbsOptimizedSupport>,
        pub(crate) encryption_support: std::option::Option<crate::model::EbsEncryptionSupport>,
        pub(crate) ebs_optimized_info: std::option::Option<crate::model::EbsOptimizedInfo>,
    }
    impl Builder {
        /// <p>Indicates that the instance type is Amazon EBS-optimized.</p>
        pub fn ebs_optimized_support(mut self, input: crate::model::EbsOptimizedSupport) -> Self {
            self.ebs_optimized_support = Some(input);
            self
        }
        /// <p>Indicates that the instance type is Amazon EBS-optimized.</p>
        pub fn set_ebs_optimized_support(mut self, input: std::option::Option<crate::model::EbsOptimizedSupport>) -> Self {
            self.ebs_optimized_support = input;
            self
        }

        /// <p>Indicates whether Amazon EBS encryption is supported.</p>
        pub fn encryption_support(mut self, input: crate::model::EbsEncryptionSupport) -> Self {
            self.encryption_support = Some(input);
            self
        }
        /// <p>Indicates whether Amazon EBS encryption is supported.</p>
        pub fn set_encryption_support(mut self, input: std::option::Option<crate::model::EbsEncryptionSupport>) -> Self {
            self.encryption_support = input;
            self
        }

        /// <p>Describes the optimized EBS performance for the instance type.</p>
        pub fn ebs_optimized_info(mut self, input: crate::model::EbsOptimizedInfo) -> Self {
            self.ebs_optimized_info = Some(input);
            self
        }
        /// <p>Describes the optimized EBS performance for the instance type.</p>
        pub fn set_ebs_optimized_info(mut self, input: std::option::Option<crate::model::EbsOptimizedInfo>) -> Self {
            self.ebs_optimized_info = input;
            self
        }
        /// Consumes the builder and constructs a [`EbsInfo`](crate::model::EbsInfo)
        pub fn build(self) -> crate::model::EbsInfo {
            crate::model::EbsInfo {
                ebs_optimized_support: self.ebs_optimized_support,
                encryption_support: self.encryption_support,
                ebs_optimized_info: self.ebs_optimized_info,
            }
        }
    }
}
impl EbsInfo {
    /// Creates a new builder-style object to manufacture [`EbsInfo`](crate::model::EbsInfo)
    pub fn builder() -> crate::model::ebs_info::Builder {
        crate::model::ebs_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EbsOptimizedSupport {
    #[allow(missing_docs)] // documentation missing in model
    Unsupported,
    #[allow(missing_docs)] // documentation missing in model
    Supported,
    #[allow(missing_docs)] // documentation missing in model
    Default,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EbsOptimizedSupport {
    fn from(s: &str) -> Self {
        match s {
            "unsupported" => EbsOptimizedSupport::Unsupported,
            "supported" => EbsOptimizedSupport::Supported,
            "default" => EbsOptimizedSupport::Default,
            other => EbsOptimizedSupport::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EbsOptimizedSupport {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EbsOptimizedSupport::from(s))
    }
}
impl EbsOptimizedSupport {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            EbsOptimizedSupport::Unsupported => "unsupported",
            EbsOptimizedSupport::Supported => "supported",
            EbsOptimizedSupport::Default => "default",
            EbsOptimizedSupport::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "unsupported",
            "supported",
            "default",
        ]
    }
}
impl AsRef<str> for EbsOptimizedSupport {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EbsEncryptionSupport {
    #[allow(missing_docs)] // documentation missing in model
    Unsupported,
    #[allow(missing_docs)] // documentation missing in model
    Supported,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EbsEncryptionSupport {
    fn from(s: &str) -> Self {
        match s {
            "unsupported" => EbsEncryptionSupport::Unsupported,
            "supported" => EbsEncryptionSupport::Supported,
            other => EbsEncryptionSupport::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EbsEncryptionSupport {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EbsEncryptionSupport::from(s))
    }
}
impl EbsEncryptionSupport {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            EbsEncryptionSupport::Unsupported => "unsupported",
            EbsEncryptionSupport::Supported => "supported",
            EbsEncryptionSupport::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "unsupported",
            "supported",
        ]
    }
}
impl AsRef<str> for EbsEncryptionSupport {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the networking features of the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInfo {
    /// <p>Describes the network performance.</p>
    pub network_performance: std::option::Option<std::string::String>,
    /// <p>The maximum number of network interfaces for the instance type.</p>
    pub maximum_network_interfaces: std::option::Option<i32>,
    /// <p>The maximum number of IPv4 addresses per network interface.</p>
    pub ipv4_addresses_per_interface: std::option::Option<i32>,
    /// <p>The maximum number of IPv6 addresses per network interface.</p>
    pub ipv6_addresses_per_interface: std::option::Option<i32>,
    /// <p>Indicates whether IPv6 is supported.</p>
    pub ipv6_supported: std::option::Option<bool>,
    /// <p>Indicates whether Elastic Network Adapter (ENA) is supported.</p>
    pub ena_support: std::option::Option<crate::model::EnaSupport>,
    /// <p>Indicates whether Elastic Fabric Adapter (EFA) is supported.</p>
    pub efa_supported: std::option::Option<bool>,
}
impl NetworkInfo {
    /// <p>Describes the network performance.</p>
    pub fn network_performance(&self) -> std::option::Option<&str> {
        self.network_performance.as_deref()
    }

    /// <p>The maximum number of network interfaces for the instance type.</p>
    pub fn maximum_network_interfaces(&self) -> std::option::Option<i32> {
        self.maximum_network_interfaces
    }

    /// <p>The maximum number of IPv4 addresses per network interface.</p>
    pub fn ipv4_addresses_per_interface(&self) -> std::option::Option<i32> {
        self.ipv4_addresses_per_interface
    }

    /// <p>The maximum number of IPv6 addresses per network interface.</p>
    pub fn ipv6_addresses_per_interface(&self) -> std::option::Option<i32> {
        self.ipv6_addresses_per_interface
    }

    /// <p>Indicates whether IPv6 is supported.</p>
    pub fn ipv6_supported(&self) -> std::option::Option<bool> {
        self.ipv6_supported
    }

    /// <p>Indicates whether Elastic Network Adapter (ENA) is supported.</p>
    pub fn ena_support(&self) -> std::option::Option<&crate::model::EnaSupport> {
        self.ena_support.as_ref()
    }

    /// <p>Indicates whether Elastic Fabric Adapter (EFA) is supported.</p>
    pub fn efa_supported(&self) -> std::option::Option<bool> {
        self.efa_supported
    }
}
impl std::fmt::Debug for NetworkInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("NetworkPerformance", &self.network_performance);
        formatter.field("MaximumNetworkInterfaces", &self.maximum_network_interfaces);
        formatter.field("Ipv4AddressesPerInterface", &self.ipv4_addresses_per_interface);
        formatter.field("Ipv6AddressesPerInterface", &self.ipv6_addresses_per_interface);
        formatter.field("Ipv6Supported", &self.ipv6_supported);
        formatter.enum_field("EnaSupport", &self.ena_support);
        formatter.field("EfaSupported", &self.efa_supported);
        formatter.finish()
    }
}
/// See [`NetworkInfo`](crate::model::NetworkInfo)
pub mod network_info {
    /// A builder for [`NetworkInfo`](crate::model::NetworkInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) network_performance: std::option::Option<std::string::String>,
        pub(crate) maximum_network_interfaces: std::option::Option<i32>,
        pub(crate) ipv4_addresses_per_interface: std::option::Option<i32>,
        pub(crate) ipv6_addresses_per_interface: std::option::Option<i32>,
        pub(crate) ipv6_supported: std::option::Option<bool>,
        pub(crate) ena_support: std::option::Option<crate::model::EnaSupport>,
        pub(crate) efa_supported: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Describes the network performance.</p>
        pub fn network_performance(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_performance = Some(input.into());
            self
        }
        /// <p>Describes the network performance.</p>
        pub fn set_network_performance(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_performance = input;
            self
        }

        /// <p>The maximum number of network interfaces for the instance type.</p>
        pub fn maximum_network_interfaces(mut self, input: i32) -> Self {
            self.maximum_network_interfaces = Some(input);
            self
        }
        /// <p>The maximum number of network interfaces for the instance type.</p>
        pub fn set_maximum_network_interfaces(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_network_interfaces = input;
            self
        }

        /// <p>The maximum number of IPv4 addresses per network interface.</p>
        pub fn ipv4_addresses_per_interface(mut self, input: i32) -> Self {
            self.ipv4_addresses_per_interface = Some(input);
            self
        }
        /// <p>The maximum number of IPv4 addresses per network interface.</p>
        pub fn set_ipv4_addresses_per_interface(mut self, input: std::option::Option<i32>) -> Self {
            self.ipv4_addresses_per_interface = input;
            self
        }

        /// <p>The maximum number of IPv6 addresses per network interface.</p>
        pub fn ipv6_addresses_per_interface(mut self, input: i32) -> Self {
            self.ipv6_addresses_per_interface = Some(input);
            self
        }
        /// <p>The maximum number of IPv6 addresses per network interface.</p>
        pub fn set_ipv6_addresses_per_interface(mut self, input: std::option::Option<i32>) -> Self {
            self.ipv6_addresses_per_interface = input;
            self
        }

        /// <p>Indicates whether IPv6 is supported.</p>
        pub fn ipv6_supported(mut self, input: bool) -> Self {
            self.ipv6_supported = Some(input);
            self
        }
        /// <p>Indicates whether IPv6 is supported.</p>
        pub fn set_ipv6_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.ipv6_supported = input;
            self
        }

        /// <p>Indicates whether Elastic Network Adapter (ENA) is supported.</p>
        pub fn ena_support(mut self, input: crate::model::EnaSupport) -> Self {
            self.ena_support = Some(input);
            self
        }
        /// <p>Indicates whether Elastic Network Adapter (ENA) is supported.</p>
        pub fn set_ena_support(mut self, input: std::option::Option<crate::model::EnaSupport>) -> Self {
            self.ena_support = input;
            self
        }

        /// <p>Indicates whether Elastic Fabric Adapter (EFA) is supported.</p>
        pub fn efa_supported(mut self, input: bool) -> Self {
            self.efa_supported = Some(input);
            self
        }
        /// <p>Indicates whether Elastic Fabric Adapter (EFA) is supported.</p>
        pub fn set_efa_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.efa_supported = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInfo`](crate::model::NetworkInfo)
        pub fn build(self) -> crate::model::NetworkInfo {
            crate::model::NetworkInfo {
                network_performance: self.network_performance,
                maximum_network_interfaces: self.maximum_network_interfaces,
                ipv4_addresses_per_interface: self.ipv4_addresses_per_interface,
                ipv6_addresses_per_interface: self.ipv6_addresses_per_interface,
                ipv6_supported: self.ipv6_supported,
                ena_support: self.ena_support,
                efa_supported: self.efa_supported,
            }
        }
    }
}
impl NetworkInfo {
    /// Creates a new builder-style object to manufacture [`NetworkInfo`](crate::model::NetworkInfo)
    pub fn builder() -> crate::model::network_info::Builder {
        crate::model::network_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EnaSupport {
    #[allow(missing_docs)] // documentation missing in model
    Unsupported,
    #[allow(missing_docs)] // documentation missing in model
    Supported,
    #[allow(missing_docs)] // documentation missing in model
    Required,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EnaSupport {
    fn from(s: &str) -> Self {
        match s {
            "unsupported" => EnaSupport::Unsupported,
            "supported" => EnaSupport::Supported,
            "required" => EnaSupport::Required,
            other => EnaSupport::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EnaSupport {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EnaSupport::from(s))
    }
}
impl EnaSupport {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            EnaSupport::Unsupported => "unsupported",
            EnaSupport::Supported => "supported",
            EnaSupport::Required => "required",
            EnaSupport::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "unsupported",
            "supported",
            "required",
        ]
    }
}
impl AsRef<str> for EnaSupport {
    fn as_ref(&self) -> &str {
        self.as_str()
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
pub struct GpuDeviceMemoryInfo {
    /// <p>The size of the memory available to the GPU accelerator, in MiB.</p>
    pub size_in_mi_b: std::option::Option<i32>,
}
impl GpuDeviceMemoryInfo {
    /// <p>The size of the memory available to the GPU accelerator, in MiB.</p>
    pub fn size_in_mi_b(&self) -> std::option::Option<i32> {
        self.size_in_mi_b
    }
}
impl std::fmt::Debug for GpuDeviceMemoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SizeInMiB", &self.size_in_mi_b);
        formatter.finish()
    }
}
/// See [`GpuDeviceMemoryInfo`](crate::model::GpuDeviceMemoryInfo)
pub mod gpu_device_memory_info {
    /// A builder for [`GpuDeviceMemoryInfo`](crate::model::GpuDeviceMemoryInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) size_in_mi_b: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The size of the memory available to the GPU accelerator, in MiB.</p>
        pub fn size_in_mi_b(mut self, input: i32) -> Self {
            self.size_in_mi_b = Some(input);
            self
        }
        /// <p>The size of the memory available to the GPU accelerator, in MiB.</p>
        pub fn set_size_in_mi_b(mut self, input: std::option::Option<i32>) -> Self {
            self.size_in_mi_b = input;
            self
        }
        /// Consumes the builder and constructs a [`GpuDeviceMemoryInfo`](crate::model::GpuDeviceMemoryInfo)
        pub fn build(self) -> crate::model::GpuDeviceMemoryInfo {
            crate::model::GpuDeviceMemoryInfo {
                size_in_mi_b: self.size_in_mi_b,
            }
        }
    }
}
impl GpuDeviceMemoryInfo {
    /// Creates a new builder-style object to manufacture [`GpuDeviceMemoryInfo`](crate::model::GpuDeviceMemoryInfo)
    pub fn builder() -> crate::model::gpu_device_memory_info::Builder {
        crate::model::gpu_device_memory_info::Builder::default()
    }
}

/// <p>Describes the GPU accelerators for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct GpuDeviceInfo {
    /// <p>The name of the GPU accelerator.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The manufacturer of the GPU accelerator.</p>
    pub manufacturer: std::option::Option<std::string::String>,
    /// <p>The number of GPUs for the instance type.</p>
    pub count: std::option::Option<i32>,
    /// <p>Describes the memory available to the GPU accelerator.</p>
    pub memory_info: std::option::Option<crate::model::GpuDeviceMemoryInfo>,
}
impl GpuDeviceInfo {
    /// <p>The name of the GPU accelerator.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The manufacturer of the GPU accelerator.</p>
    pub fn manufacturer(&self) -> std::option::Option<&str> {
        self.manufacturer.as_deref()
    }

    /// <p>The number of GPUs for the instance type.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }

    /// <p>Describes the memory available to the GPU accelerator.</p>
    pub fn memory_info(&self) -> std::option::Option<&crate::model::GpuDeviceMemoryInfo> {
        self.memory_info.as_ref()
    }
}
impl std::fmt::Debug for GpuDeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Name", &self.name);
        formatter.field("Manufacturer", &self.manufacturer);
        formatter.field("Count", &self.count);
        formatter.field("MemoryInfo", &self.memory_info);
        formatter.finish()
    }
}
/// See [`GpuDeviceInfo`](crate::model::GpuDeviceInfo)
pub mod gpu_device_info {
    /// A builder for [`GpuDeviceInfo`](crate::model::GpuDeviceInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) manufacturer: std::option::Option<std::string::String>,
        pub(crate) count: std::option::Option<i32>,
        pub(crate) memory_info: std::option::Option<crate::model::GpuDeviceMemoryInfo>,
    }
    impl Builder {
        /// <p>The name of the GPU accelerator.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the GPU accelerator.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }

        /// <p>The manufacturer of the GPU accelerator.</p>
        pub fn manufacturer(mut self, input: impl Into<std::string::String>) -> Self {
            self.manufacturer = Some(input.into());
            self
        }
        /// <p>The manufacturer of the GPU accelerator.</p>
        pub fn set_manufacturer(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.manufacturer = input;
            self
        }

        /// <p>The number of GPUs for the instance type.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The number of GPUs for the instance type.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }

        /// <p>Describes the memory available to the GPU accelerator.</p>
        pub fn memory_info(mut self, input: crate::model::GpuDeviceMemoryInfo) -> Self {
            self.memory_info = Some(input);
            self
        }
        /// <p>Describes the memory available to the GPU accelerator.</p>
        pub fn set_memory_info(mut self, input: std::option::Option<crate::model::GpuDeviceMemoryInfo>) -> Self {
            self.memory_info = input;
            self
        }
        /// Consumes the builder and constructs a [`GpuDeviceInfo`](crate::model::GpuDeviceInfo)
        pub fn build(self) -> crate::model::GpuDeviceInfo {
            crate::model::GpuDeviceInfo {
                name: self.name,
                manufacturer: self.manufacturer,
                count: self.count,
                memory_info: self.memory_info,
            }
        }
    }
}
impl GpuDeviceInfo {
    /// Creates a new builder-style object to manufacture [`GpuDeviceInfo`](crate::model::GpuDeviceInfo)
    pub fn builder() -> crate::model::gpu_device_info::Builder {
        crate::model::gpu_device_info::Builder::default()
    }
}

/// <p>Describes the GPU accelerators for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct GpuInfo {
    /// <p>Describes the GPU accelerators for the instance type.</p>
    pub gpus: std::option::Option<std::vec::Vec<crate::model::GpuDeviceInfo>>,
    /// <p>The total size of the memory for the GPU accelerators for the instance type, in MiB.</p>
    pub total_gpu_memory_in_mi_b: std::option::Option<i32>,
}
impl GpuInfo {
    /// <p>Describes the GPU accelerators for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.gpus.is_none()`.
    pub fn gpus(&self) -> &[crate::model::GpuDeviceInfo] {
        self.gpus.as_deref().unwrap_or_default()
    }

    /// <p>The total size of the memory for the GPU accelerators for the instance type, in MiB.</p>
    pub fn total_gpu_memory_in_mi_b(&self) -> std::option::Option<i32> {
        self.total_gpu_memory_in_mi_b
    }
}
impl std::fmt::Debug for GpuInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Gpus", &self.gpus);
        formatter.field("TotalGpuMemoryInMiB", &self.total_gpu_memory_in_mi_b);
        formatter.finish()
    }
}
/// See [`GpuInfo`](crate::model::GpuInfo)
pub mod gpu_info {
    /// A builder for [`GpuInfo`](crate::model::GpuInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gpus: std::option::Option<std::vec::Vec<crate::model::GpuDeviceInfo>>,
        pub(crate) total_gpu_memory_in_mi_b: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `gpus`.
        ///
        /// To override the contents of this collection use [`set_gpus`](Self::set_gpus).
        ///
        /// <p>Describes the GPU accelerators for the instance type.</p>
        pub fn gpus(mut self, input: impl std::convert::Into<crate::model::GpuDeviceInfo>) -> Self {
            let mut v = self.gpus.unwrap_or_default();
            v.push(input.into());
            self.gpus = Some(v);
            self
        }
        /// <p>Describes the GPU accelerators for the instance type.</p>
        pub fn set_gpus(mut self, input: std::option::Option<std::vec::Vec<crate::model::GpuDeviceInfo>>) -> Self {
            self.gpus = input;
            self
        }

        /// <p>The total size of the memory for the GPU accelerators for the instance type, in MiB.</p>
        pub fn total_gpu_memory_in_mi_b(mut self, input: i32) -> Self {
            self.total_gpu_memory_in_mi_b = Some(input);
            self
        }
        /// <p>The total size of the memory for the GPU accelerators for the instance type, in MiB.</p>
        pub fn set_total_gpu_memory_in_mi_b(mut self, input: std::option::Option<i32>) -> Self {
            self.total_gpu_memory_in_mi_b = input;
            self
        }
        /// Consumes the builder and constructs a [`GpuInfo`](crate::model::GpuInfo)
        pub fn build(self) -> crate::model::GpuInfo {
            crate::model::GpuInfo {
                gpus: self.gpus,
                total_gpu_memory_in_mi_b: self.total_gpu_memory_in_mi_b,
            }
        }
    }
}
impl GpuInfo {
    /// Creates a new builder-style object to manufacture [`GpuInfo`](crate::model::GpuInfo)
    pub fn builder() -> crate::model::gpu_info::Builder {
        crate::model::gpu_info::Builder::default()
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
pub struct FpgaDeviceMemoryInfo {
    /// <p>The size of the memory available to the FPGA accelerator, in MiB.</p>
    pub size_in_mi_b: std::option::Option<i32>,
}
impl FpgaDeviceMemoryInfo {
    /// <p>The size of the memory available to the FPGA accelerator, in MiB.</p>
    pub fn size_in_mi_b(&self) -> std::option::Option<i32> {
        self.size_in_mi_b
    }
}
impl std::fmt::Debug for FpgaDeviceMemoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SizeInMiB", &self.size_in_mi_b);
        formatter.finish()
    }
}
/// See [`FpgaDeviceMemoryInfo`](crate::model::FpgaDeviceMemoryInfo)
pub mod fpga_device_memory_info {
    /// A builder for [`FpgaDeviceMemoryInfo`](crate::model::FpgaDeviceMemoryInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) size_in_mi_b: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The size of the memory available to the FPGA accelerator, in MiB.</p>
        pub fn size_in_mi_b(mut self, input: i32) -> Self {
            self.size_in_mi_b = Some(input);
            self
        }
        /// <p>The size of the memory available to the FPGA accelerator, in MiB.</p>
        pub fn set_size_in_mi_b(mut self, input: std::option::Option<i32>) -> Self {
            self.size_in_mi_b = input;
            self
        }
        /// Consumes the builder and constructs a [`FpgaDeviceMemoryInfo`](crate::model::FpgaDeviceMemoryInfo)
        pub fn build(self) -> crate::model::FpgaDeviceMemoryInfo {
            crate::model::FpgaDeviceMemoryInfo {
                size_in_mi_b: self.size_in_mi_b,
            }
        }
    }
}
impl FpgaDeviceMemoryInfo {
    /// Creates a new builder-style object to manufacture [`FpgaDeviceMemoryInfo`](crate::model::FpgaDeviceMemoryInfo)
    pub fn builder() -> crate::model::fpga_device_memory_info::Builder {
        crate::model::fpga_device_memory_info::Builder::default()
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
pub struct FpgaDeviceInfo {
    /// <p>The name of the FPGA accelerator.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The manufacturer of the FPGA accelerator.</p>
    pub manufacturer: std::option::Option<std::string::String>,
    /// <p>The count of FPGA accelerators for the instance type.</p>
    pub count: std::option::Option<i32>,
    /// <p>Describes the memory for the FPGA accelerator for the instance type.</p>
    pub memory_info: std::option::Option<crate::model::FpgaDeviceMemoryInfo>,
}
impl FpgaDeviceInfo {
    /// <p>The name of the FPGA accelerator.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The manufacturer of the FPGA accelerator.</p>
    pub fn manufacturer(&self) -> std::option::Option<&str> {
        self.manufacturer.as_deref()
    }

    /// <p>The count of FPGA accelerators for the instance type.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }

    /// <p>Describes the memory for the FPGA accelerator for the instance type.</p>
    pub fn memory_info(&self) -> std::option::Option<&crate::model::FpgaDeviceMemoryInfo> {
        self.memory_info.as_ref()
    }
}
impl std::fmt::Debug for FpgaDeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Name", &self.name);
        formatter.field("Manufacturer", &self.manufacturer);
        formatter.field("Count", &self.count);
        formatter.field("MemoryInfo", &self.memory_info);
        formatter.finish()
    }
}
/// See [`FpgaDeviceInfo`](crate::model::FpgaDeviceInfo)
pub mod fpga_device_info {
    /// A builder for [`FpgaDeviceInfo`](crate::model::FpgaDeviceInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) manufacturer: std::option::Option<std::string::String>,
        pub(crate) count: std::option::Option<i32>,
        pub(crate) memory_info: std::option::Option<crate::model::FpgaDeviceMemoryInfo>,
    }
    impl Builder {
        /// <p>The name of the FPGA accelerator.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the FPGA accelerator.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }

        /// <p>The manufacturer of the FPGA accelerator.</p>
        pub fn manufacturer(mut self, input: impl Into<std::string::String>) -> Self {
            self.manufacturer = Some(input.into());
            self
        }
        /// <p>The manufacturer of the FPGA accelerator.</p>
        pub fn set_manufacturer(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.manufacturer = input;
            self
        }

        /// <p>The count of FPGA accelerators for the instance type.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The count of FPGA accelerators for the instance type.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }

        /// <p>Describes the memory for the FPGA accelerator for the instance type.</p>
        pub fn memory_info(mut self, input: crate::model::FpgaDeviceMemoryInfo) -> Self {
            self.memory_info = Some(input);
            self
        }
        /// <p>Describes the memory for the FPGA accelerator for the instance type.</p>
        pub fn set_memory_info(mut self, input: std::option::Option<crate::model::FpgaDeviceMemoryInfo>) -> Self {
            self.memory_info = input;
            self
        }
        /// Consumes the builder and constructs a [`FpgaDeviceInfo`](crate::model::FpgaDeviceInfo)
        pub fn build(self) -> crate::model::FpgaDeviceInfo {
            crate::model::FpgaDeviceInfo {
                name: self.name,
                manufacturer: self.manufacturer,
                count: self.count,
                memory_info: self.memory_info,
            }
        }
    }
}
impl FpgaDeviceInfo {
    /// Creates a new builder-style object to manufacture [`FpgaDeviceInfo`](crate::model::FpgaDeviceInfo)
    pub fn builder() -> crate::model::fpga_device_info::Builder {
        crate::model::fpga_device_info::Builder::default()
    }
}

/// <p>Describes the FPGAs for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct FpgaInfo {
    /// <p>Describes the FPGAs for the instance type.</p>
    pub fpgas: std::option::Option<std::vec::Vec<crate::model::FpgaDeviceInfo>>,
    /// <p>The total memory of all FPGA accelerators for the instance type.</p>
    pub total_fpga_memory_in_mi_b: std::option::Option<i32>,
}
impl FpgaInfo {
    /// <p>Describes the FPGAs for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.fpgas.is_none()`.
    pub fn fpgas(&self) -> &[crate::model::FpgaDeviceInfo] {
        self.fpgas.as_deref().unwrap_or_default()
    }

    /// <p>The total memory of all FPGA accelerators for the instance type.</p>
    pub fn total_fpga_memory_in_mi_b(&self) -> std::option::Option<i32> {
        self.total_fpga_memory_in_mi_b
    }
}
impl std::fmt::Debug for FpgaInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Fpgas", &self.fpgas);
        formatter.field("TotalFpgaMemoryInMiB", &self.total_fpga_memory_in_mi_b);
        formatter.finish()
    }
}
/// See [`FpgaInfo`](crate::model::FpgaInfo)
pub mod fpga_info {
    /// A builder for [`FpgaInfo`](crate::model::FpgaInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) fpgas: std::option::Option<std::vec::Vec<crate::model::FpgaDeviceInfo>>,
        pub(crate) total_fpga_memory_in_mi_b: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `fpgas`.
        ///
        /// To override the contents of this collection use [`set_fpgas`](Self::set_fpgas).
        ///
        /// <p>Describes the FPGAs for the instance type.</p>
        pub fn fpgas(mut self, input: impl std::convert::Into<crate::model::FpgaDeviceInfo>) -> Self {
            let mut v = self.fpgas.unwrap_or_default();
            v.push(input.into());
            self.fpgas = Some(v);
            self
        }
        /// <p>Describes the FPGAs for the instance type.</p>
        pub fn set_fpgas(mut self, input: std::option::Option<std::vec::Vec<crate::model::FpgaDeviceInfo>>) -> Self {
            self.fpgas = input;
            self
        }

        /// <p>The total memory of all FPGA accelerators for the instance type.</p>
        pub fn total_fpga_memory_in_mi_b(mut self, input: i32) -> Self {
            self.total_fpga_memory_in_mi_b = Some(input);
            self
        }
        /// <p>The total memory of all FPGA accelerators for the instance type.</p>
        pub fn set_total_fpga_memory_in_mi_b(mut self, input: std::option::Option<i32>) -> Self {
            self.total_fpga_memory_in_mi_b = input;
            self
        }
        /// Consumes the builder and constructs a [`FpgaInfo`](crate::model::FpgaInfo)
        pub fn build(self) -> crate::model::FpgaInfo {
            crate::model::FpgaInfo {
                fpgas: self.fpgas,
                total_fpga_memory_in_mi_b: self.total_fpga_memory_in_mi_b,
            }
        }
    }
}
impl FpgaInfo {
    /// Creates a new builder-style object to manufacture [`FpgaInfo`](crate::model::FpgaInfo)
    pub fn builder() -> crate::model::fpga_info::Builder {
        crate::model::fpga_info::Builder::default()
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
pub struct PlacementGroupInfo {
    /// <p>The supported placement group types.</p>
    pub supported_strategies: std::option::Option<std::vec::Vec<crate::model::PlacementGroupStrategy>>,
}
impl PlacementGroupInfo {
    /// <p>The supported placement group types.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_strategies.is_none()`.
    pub fn supported_strategies(&self) -> &[crate::model::PlacementGroupStrategy] {
        self.supported_strategies.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for PlacementGroupInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_list_field("SupportedStrategies", &self.supported_strategies);
        formatter.finish()
    }
}
/// See [`PlacementGroupInfo`](crate::model::PlacementGroupInfo)
pub mod placement_group_info {
    /// A builder for [`PlacementGroupInfo`](crate::model::PlacementGroupInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) supported_strategies: std::option::Option<std::vec::Vec<crate::model::PlacementGroupStrategy>>,
    }
    impl Builder {
        /// Appends an item to `supported_strategies`.
        ///
        /// To override the contents of this collection use [`set_supported_strategies`](Self::set_supported_strategies).
        ///
        /// <p>The supported placement group types.</p>
        pub fn supported_strategies(mut self, input: impl std::convert::Into<crate::model::PlacementGroupStrategy>) -> Self {
            let mut v = self.supported_strategies.unwrap_or_default();
            v.push(input.into());
            self.supported_strategies = Some(v);
            self
        }
        /// <p>The supported placement group types.</p>
        pub fn set_supported_strategies(mut self, input: std::option::Option<std::vec::Vec<crate::model::PlacementGroupStrategy>>) -> Self {
            self.supported_strategies = input;
            self
        }
        /// Consumes the builder and constructs a [`PlacementGroupInfo`](crate::model::PlacementGroupInfo)
        pub fn build(self) -> crate::model::PlacementGroupInfo {
            crate::model::PlacementGroupInfo {
                supported_strategies: self.supported_strategies,
            }
        }
    }
}
impl PlacementGroupInfo {
    /// Creates a new builder-style object to manufacture [`PlacementGroupInfo`](crate::model::PlacementGroupInfo)
    pub fn builder() -> crate::model::placement_group_info::Builder {
        crate::model::placement_group_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum PlacementGroupStrategy {
    #[allow(missing_docs)] // documentation missing in model
    Cluster,
    #[allow(missing_docs)] // documentation missing in model
    Partition,
    #[allow(missing_docs)] // documentation missing in model
    Spread,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for PlacementGroupStrategy {
    fn from(s: &str) -> Self {
        match s {
            "cluster" => PlacementGroupStrategy::Cluster,
            "partition" => PlacementGroupStrategy::Partition,
            "spread" => PlacementGroupStrategy::Spread,
            other => PlacementGroupStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PlacementGroupStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PlacementGroupStrategy::from(s))
    }
}
impl PlacementGroupStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            PlacementGroupStrategy::Cluster => "cluster",
            PlacementGroupStrategy::Partition => "partition",
            PlacementGroupStrategy::Spread => "spread",
            PlacementGroupStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "cluster",
            "partition",
            "spread",
        ]
    }
}
impl AsRef<str> for PlacementGroupStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
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
pub struct InferenceDeviceInfo {
    /// <p>The number of Inference accelerators for the instance type.</p>
    pub count: std::option::Option<i32>,
    /// <p>The name of the Inference accelerator.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>The manufacturer of the Inference accelerator.</p>
    pub manufacturer: std::option::Option<std::string::String>,
}
impl InferenceDeviceInfo {
    /// <p>The number of Inference accelerators for the instance type.</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }

    /// <p>The name of the Inference accelerator.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The manufacturer of the Inference accelerator.</p>
    pub fn manufacturer(&self) -> std::option::Option<&str> {
        self.manufacturer.as_deref()
    }
}
impl std::fmt::Debug for InferenceDeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Count", &self.count);
        formatter.field("Name", &self.name);
        formatter.field("Manufacturer", &self.manufacturer);
        formatter.finish()
    }
}
/// See [`InferenceDeviceInfo`](crate::model::InferenceDeviceInfo)
pub mod inference_device_info {
    /// A builder for [`InferenceDeviceInfo`](crate::model::InferenceDeviceInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) count: std::option::Option<i32>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) manufacturer: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The number of Inference accelerators for the instance type.</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p>The number of Inference accelerators for the instance type.</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }

        /// <p>The name of the Inference accelerator.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the Inference accelerator.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }

        /// <p>The manufacturer of the Inference accelerator.</p>
        pub fn manufacturer(mut self, input: impl Into<std::string::String>) -> Self {
            self.manufacturer = Some(input.into());
            self
        }
        /// <p>The manufacturer of the Inference accelerator.</p>
        pub fn set_manufacturer(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.manufacturer = input;
            self
        }
        /// Consumes the builder and constructs a [`InferenceDeviceInfo`](crate::model::InferenceDeviceInfo)
        pub fn build(self) -> crate::model::InferenceDeviceInfo {
            crate::model::InferenceDeviceInfo {
                count: self.count,
                name: self.name,
                manufacturer: self.manufacturer,
            }
        }
    }
}
impl InferenceDeviceInfo {
    /// Creates a new builder-style object to manufacture [`InferenceDeviceInfo`](crate::model::InferenceDeviceInfo)
    pub fn builder() -> crate::model::inference_device_info::Builder {
        crate::model::inference_device_info::Builder::default()
    }
}

/// <p>Describes the Inference accelerators for the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InferenceAcceleratorInfo {
    /// <p>Describes the Inference accelerators for the instance type.</p>
    pub accelerators: std::option::Option<std::vec::Vec<crate::model::InferenceDeviceInfo>>,
}
impl InferenceAcceleratorInfo {
    /// <p>Describes the Inference accelerators for the instance type.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.accelerators.is_none()`.
    pub fn accelerators(&self) -> &[crate::model::InferenceDeviceInfo] {
        self.accelerators.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for InferenceAcceleratorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Accelerators", &self.accelerators);
        formatter.finish()
    }
}
/// See [`InferenceAcceleratorInfo`](crate::model::InferenceAcceleratorInfo)
pub mod inference_accelerator_info {
    /// A builder for [`InferenceAcceleratorInfo`](crate::model::InferenceAcceleratorInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) accelerators: std::option::Option<std::vec::Vec<crate::model::InferenceDeviceInfo>>,
    }
    impl Builder {
        /// Appends an item to `accelerators`.
        ///
        /// To override the contents of this collection use [`set_accelerators`](Self::set_accelerators).
        ///
        /// <p>Describes the Inference accelerators for the instance type.</p>
        pub fn accelerators(mut self, input: impl std::convert::Into<crate::model::InferenceDeviceInfo>) -> Self {
            let mut v = self.accelerators.unwrap_or_default();
            v.push(input.into());
            self.accelerators = Some(v);
            self
        }
        /// <p>Describes the Inference accelerators for the instance type.</p>
        pub fn set_accelerators(mut self, input: std::option::Option<std::vec::Vec<crate::model::InferenceDeviceInfo>>) -> Self {
            self.accelerators = input;
            self
        }
        /// Consumes the builder and constructs a [`InferenceAcceleratorInfo`](crate::model::InferenceAcceleratorInfo)
        pub fn build(self) -> crate::model::InferenceAcceleratorInfo {
            crate::model::InferenceAcceleratorInfo {
                accelerators: self.accelerators,
            }
        }
    }
}
impl InferenceAcceleratorInfo {
    /// Creates a new builder-style object to manufacture [`InferenceAcceleratorInfo`](crate::model::InferenceAcceleratorInfo)
    pub fn builder() -> crate::model::inference_accelerator_info::Builder {
        crate::model::inference_accelerator_info::Builder::default()
    }
}

/// <p>Describes the instance type.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceTypeInfo {
    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>Indicates whether the instance type is current generation.</p>
    pub current_generation: std::option::Option<bool>,
    /// <p>Indicates whether the instance type is eligible for the free tier.</p>
    pub free_tier_eligible: std::option::Option<bool>,
    /// <p>Indicates whether the instance type is offered for spot or On-Demand.</p>
    pub supported_usage_classes: std::option::Option<std::vec::Vec<crate::model::UsageClassType>>,
    /// <p>The supported root device types.</p>
    pub supported_root_device_types: std::option::Option<std::vec::Vec<crate::model::RootDeviceType>>,
    /// <p>The supported virtualization types.</p>
    pub supported_virtualization_types: std::option::Option<std::vec::Vec<crate::model::VirtualizationType>>,
    /// <p>Indicates whether the instance is a bare metal instance type.</p>
    pub bare_metal: std::option::Option<bool>,
    /// <p>The hypervisor for the instance type.</p>
    pub hypervisor: std::option::Option<crate::model::InstanceTypeHypervisor>,
    /// <p>Describes the processor.</p>
    pub processor_info: std::option::Option<crate::model::ProcessorInfo>,
    /// <p>Describes the vCPU configurations for the instance type.</p>
    pub v_cpu_info: std::option::Option<crate::model::VCpuInfo>,
    /// <p>Describes the memory for the instance type.</p>
    pub memory_info: std::option::Option<crate::model::MemoryInfo>,
    /// <p>Indicates whether instance storage is supported.</p>
    pub instance_storage_supported: std::option::Option<bool>,
    /// <p>Describes the instance storage for the instance type.</p>
    pub instance_storage_info: std::option::Option<crate::model::InstanceStorageInfo>,
    /// <p>Describes the Amazon EBS settings for the instance type.</p>
    pub ebs_info: std::option::Option<crate::model::EbsInfo>,
    /// <p>Describes the network settings for the instance type.</p>
    pub network_info: std::option::Option<crate::model::NetworkInfo>,
    /// <p>Describes the GPU accelerator settings for the instance type.</p>
    pub gpu_info: std::option::Option<crate::model::GpuInfo>,
    /// <p>Describes the FPGA accelerator settings for the instance type.</p>
    pub fpga_info: std::option::Option<crate::model::FpgaInfo>,
    /// <p>Describes the placement group settings for the instance type.</p>
    pub placement_group_info: std::option::Option<crate::model::PlacementGroupInfo>,
    /// <p>Describes the Inference accelerator settings for the instance type.</p>
    pub inference_accelerator_info: std::option::Option<crate::model::InferenceAcceleratorInfo>,
    /// <p>Indicates whether On-Demand hibernation is supported.</p>
    pub hibernation_supported: std::option::Option<bool>,
    /// <p>Indicates whether the instance type is a burstable performance instance type.</p>
    pub burstable_performance_supported: std::option::Option<bool>,
    /// <p>Indicates whether Dedicated Hosts are supported on the instance type.</p>
    pub dedicated_hosts_supported: std::option::Option<bool>,
    /// <p>Indicates whether auto recovery is supported.</p>
    pub auto_recovery_supported: std::option::Option<bool>,
}
impl InstanceTypeInfo {
    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>Indicates whether the instance type is current generation.</p>
    pub fn current_generation(&self) -> std::option::Option<bool> {
        self.current_generation
    }

    /// <p>Indicates whether the instance type is eligible for the free tier.</p>
    pub fn free_tier_eligible(&self) -> std::option::Option<bool> {
        self.free_tier_eligible
    }

    /// <p>Indicates whether the instance type is offered for spot or On-Demand.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_usage_classes.is_none()`.
    pub fn supported_usage_classes(&self) -> &[crate::model::UsageClassType] {
        self.supported_usage_classes.as_deref().unwrap_or_default()
    }

    /// <p>The supported root device types.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_root_device_types.is_none()`.
    pub fn supported_root_device_types(&self) -> &[crate::model::RootDeviceType] {
        self.supported_root_device_types.as_deref().unwrap_or_default()
    }

    /// <p>The supported virtualization types.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_virtualization_types.is_none()`.
    pub fn supported_virtualization_types(&self) -> &[crate::model::VirtualizationType] {
        self.supported_virtualization_types.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether the instance is a bare metal instance type.</p>
    pub fn bare_metal(&self) -> std::option::Option<bool> {
        self.bare_metal
    }

    /// <p>The hypervisor for the instance type.</p>
    pub fn hypervisor(&self) -> std::option::Option<&crate::model::InstanceTypeHypervisor> {
        self.hypervisor.as_ref()
    }

    /// <p>Describes the processor.</p>
    pub fn processor_info(&self) -> std::option::Option<&crate::model::ProcessorInfo> {
        self.processor_info.as_ref()
    }

    /// <p>Describes the vCPU configurations for the instance type.</p>
    pub fn v_cpu_info(&self) -> std::option::Option<&crate::model::VCpuInfo> {
        self.v_cpu_info.as_ref()
    }

    /// <p>Describes the memory for the instance type.</p>
    pub fn memory_info(&self) -> std::option::Option<&crate::model::MemoryInfo> {
        self.memory_info.as_ref()
    }

    /// <p>Indicates whether instance storage is supported.</p>
    pub fn instance_storage_supported(&self) -> std::option::Option<bool> {
        self.instance_storage_supported
    }

    /// <p>Describes the instance storage for the instance type.</p>
    pub fn instance_storage_info(&self) -> std::option::Option<&crate::model::InstanceStorageInfo> {
        self.instance_storage_info.as_ref()
    }

    /// <p>Describes the Amazon EBS settings for the instance type.</p>
    pub fn ebs_info(&self) -> std::option::Option<&crate::model::EbsInfo> {
        self.ebs_info.as_ref()
    }

    /// <p>Describes the network settings for the instance type.</p>
    pub fn network_info(&self) -> std::option::Option<&crate::model::NetworkInfo> {
        self.network_info.as_ref()
    }

    /// <p>Describes the GPU accelerator settings for the instance type.</p>
    pub fn gpu_info(&self) -> std::option::Option<&crate::model::GpuInfo> {
        self.gpu_info.as_ref()
    }

    /// <p>Describes the FPGA accelerator settings for the instance type.</p>
    pub fn fpga_info(&self) -> std::option::Option<&crate::model::FpgaInfo> {
        self.fpga_info.as_ref()
    }

    /// <p>Describes the placement group settings for the instance type.</p>
    pub fn placement_group_info(&self) -> std::option::Option<&crate::model::PlacementGroupInfo> {
        self.placement_group_info.as_ref()
    }

    /// <p>Describes the Inference accelerator settings for the instance type.</p>
    pub fn inference_accelerator_info(&self) -> std::option::Option<&crate::model::InferenceAcceleratorInfo> {
        self.inference_accelerator_info.as_ref()
    }

    /// <p>Indicates whether On-Demand hibernation is supported.</p>
    pub fn hibernation_supported(&self) -> std::option::Option<bool> {
        self.hibernation_supported
    }

    /// <p>Indicates whether the instance type is a burstable performance instance type.</p>
    pub fn burstable_performance_supported(&self) -> std::option::Option<bool> {
        self.burstable_performance_supported
    }

    /// <p>Indicates whether Dedicated Hosts are supported on the instance type.</p>
    pub fn dedicated_hosts_supported(&self) -> std::option::Option<bool> {
        self.dedicated_hosts_supported
    }

    /// <p>Indicates whether auto recovery is supported.</p>
    pub fn auto_recovery_supported(&self) -> std::option::Option<bool> {
        self.auto_recovery_supported
    }
}
impl std::fmt::Debug for InstanceTypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("CurrentGeneration", &self.current_generation);
        formatter.field("FreeTierEligible", &self.free_tier_eligible);
        formatter.enum_list_field("SupportedUsageClasses", &self.supported_usage_classes);
        formatter.enum_list_field("SupportedRootDeviceTypes", &self.supported_root_device_types);
        formatter.enum_list_field("SupportedVirtualizationTypes", &self.supported_virtualization_types);
        formatter.field("BareMetal", &self.bare_metal);
        formatter.enum_field("Hypervisor", &self.hypervisor);
        formatter.field("ProcessorInfo", &self.processor_info);
        formatter.field("VCpuInfo", &self.v_cpu_info);
        formatter.field("MemoryInfo", &self.memory_info);
        formatter.field("InstanceStorageSupported", &self.instance_storage_supported);
        formatter.field("InstanceStorageInfo", &self.instance_storage_info);
        formatter.field("EbsInfo", &self.ebs_info);
        formatter.field("NetworkInfo", &self.network_info);
        formatter.field("GpuInfo", &self.gpu_info);
        formatter.field("FpgaInfo", &self.fpga_info);
        formatter.field("PlacementGroupInfo", &self.placement_group_info);
        formatter.field("InferenceAcceleratorInfo", &self.inference_accelerator_info);
        formatter.field("HibernationSupported", &self.hibernation_supported);
        formatter.field("BurstablePerformanceSupported", &self.burstable_performance_supported);
        formatter.field("DedicatedHostsSupported", &self.dedicated_hosts_supported);
        formatter.field("AutoRecoverySupported", &self.auto_recovery_supported);
        formatter.finish()
    }
}
/// See [`InstanceTypeInfo`](crate::model::InstanceTypeInfo)
pub mod instance_type_info {
    /// A builder for [`InstanceTypeInfo`](crate::model::InstanceTypeInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) current_generation: std::option::Option<bool>,
        pub(crate) free_tier_eligible: std::option::Option<bool>,
        pub(crate) supported_usage_classes: std::option::Option<std::vec::Vec<crate::model::UsageClassType>>,
        pub(crate) supported_root_device_types: std::option::Option<std::vec::Vec<crate::model::RootDeviceType>>,
        pub(crate) supported_virtualization_types: std::option::Option<std::vec::Vec<crate::model::VirtualizationType>>,
        pub(crate) bare_metal: std::option::Option<bool>,
        pub(crate) hypervisor: std::option::Option<crate::model::InstanceTypeHypervisor>,
        pub(crate) processor_info: std::option::Option<crate::model::ProcessorInfo>,
        pub(crate) v_cpu_info: std::option::Option<crate::model::VCpuInfo>,
        pub(crate) memory_info: std::option::Option<crate::model::MemoryInfo>,
        pub(crate) instance_storage_supported: std::option::Option<bool>,
        pub(crate) instance_storage_info: std::option::Option<crate::model::InstanceStorageInfo>,
        pub(crate) ebs_info: std::option::Option<crate::model::EbsInfo>,
        pub(crate) network_info: std::option::Option<crate::model::NetworkInfo>,
        pub(crate) gpu_info: std::option::Option<crate::model::GpuInfo>,
        pub(crate) fpga_info: std::option::Option<crate::model::FpgaInfo>,
        pub(crate) placement_group_info: std::option::Option<crate::model::PlacementGroupInfo>,
        pub(crate) inference_accelerator_info: std::option::Option<crate::model::InferenceAcceleratorInfo>,
        pub(crate) hibernation_supported: std::option::Option<bool>,
        pub(crate) burstable_performance_supported: std::option::Option<bool>,
        pub(crate) dedicated_hosts_supported: std::option::Option<bool>,
        pub(crate) auto_recovery_supported: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>Indicates whether the instance type is current generation.</p>
        pub fn current_generation(mut self, input: bool) -> Self {
            self.current_generation = Some(input);
            self
        }
        /// <p>Indicates whether the instance type is current generation.</p>
        pub fn set_current_generation(mut self, input: std::option::Option<bool>) -> Self {
            self.current_generation = input;
            self
        }

        /// <p>Indicates whether the instance type is eligible for the free tier.</p>
        pub fn free_tier_eligible(mut self, input: bool) -> Self {
            self.free_tier_eligible = Some(input);
            self
        }
        /// <p>Indicates whether the instance type is eligible for the free tier.</p>
        pub fn set_free_tier_eligible(mut self, input: std::option::Option<bool>) -> Self {
            self.free_tier_eligible = input;
            self
        }

        /// Appends an item to `supported_usage_classes`.
        ///
        /// To override the contents of this collection use [`set_supported_usage_classes`](Self::set_supported_usage_classes).
        ///
        /// <p>Indicates whether the instance type is offered for spot or On-Demand.</p>
        pub fn supported_usage_classes(mut self, input: impl std::convert::Into<crate::model::UsageClassType>) -> Self {
            let mut v = self.supported_usage_classes.unwrap_or_default();
            v.push(input.into());
            self.supported_usage_classes = Some(v);
            self
        }
        /// <p>Indicates whether the instance type is offered for spot or On-Demand.</p>
        pub fn set_supported_usage_classes(mut self, input: std::option::Option<std::vec::Vec<crate::model::UsageClassType>>) -> Self {
            self.supported_usage_classes = input;
            self
        }

        /// Appends an item to `supported_root_device_types`.
        ///
        /// To override the contents of this collection use [`set_supported_root_device_types`](Self::set_supported_root_device_types).
        ///
        /// <p>The supported root device types.</p>
        pub fn supported_root_device_types(mut self, input: impl std::convert::Into<crate::model::RootDeviceType>) -> Self {
            let mut v = self.supported_root_device_types.unwrap_or_default();
            v.push(input.into());
            self.supported_root_device_types = Some(v);
            self
        }
        /// <p>The supported root device types.</p>
        pub fn set_supported_root_device_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::RootDeviceType>>) -> Self {
            self.supported_root_device_types = input;
            self
        }

        /// Appends an item to `supported_virtualization_types`.
        ///
        /// To override the contents of this collection use [`set_supported_virtualization_types`](Self::set_supported_virtualization_types).
        ///
        /// <p>The supported virtualization types.</p>
        pub fn supported_virtualization_types(mut self, input: impl std::convert::Into<crate::model::VirtualizationType>) -> Self {
            let mut v = self.supported_virtualization_types.unwrap_or_default();
            v.push(input.into());
            self.supported_virtualization_types = Some(v);
            self
        }
        /// <p>The supported virtualization types.</p>
        pub fn set_supported_virtualization_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::VirtualizationType>>) -> Self {
            self.supported_virtualization_types = input;
            self
        }

        /// <p>Indicates whether the instance is a bare metal instance type.</p>
        pub fn bare_metal(mut self, input: bool) -> Self {
            self.bare_metal = Some(input);
            self
        }
        /// <p>Indicates whether the instance is a bare metal instance type.</p>
        pub fn set_bare_metal(mut self, input: std::option::Option<bool>) -> Self {
            self.bare_metal = input;
            self
        }

        /// <p>The hypervisor for the instance type.</p>
        pub fn hypervisor(mut self, input: crate::model::InstanceTypeHypervisor) -> Self {
            self.hypervisor = Some(input);
            self
        }
        /// <p>The hypervisor for the instance type.</p>
        pub fn set_hypervisor(mut self, input: std::option::Option<crate::model::InstanceTypeHypervisor>) -> Self {
            self.hypervisor = input;
            self
        }

        /// <p>Describes the processor.</p>
        pub fn processor_info(mut self, input: crate::model::ProcessorInfo) -> Self {
            self.processor_info = Some(input);
            self
        }
        /// <p>Describes the processor.</p>
        pub fn set_processor_info(mut self, input: std::option::Option<crate::model::ProcessorInfo>) -> Self {
            self.processor_info = input;
            self
        }

        /// <p>Describes the vCPU configurations for the instance type.</p>
        pub fn v_cpu_info(mut self, input: crate::model::VCpuInfo) -> Self {
            self.v_cpu_info = Some(input);
            self
        }
        /// <p>Describes the vCPU configurations for the instance type.</p>
        pub fn set_v_cpu_info(mut self, input: std::option::Option<crate::model::VCpuInfo>) -> Self {
            self.v_cpu_info = input;
            self
        }

        /// <p>Describes the memory for the instance type.</p>
        pub fn memory_info(mut self, input: crate::model::MemoryInfo) -> Self {
            self.memory_info = Some(input);
            self
        }
        /// <p>Describes the memory for the instance type.</p>
        pub fn set_memory_info(mut self, input: std::option::Option<crate::model::MemoryInfo>) -> Self {
            self.memory_info = input;
            self
        }

        /// <p>Indicates whether instance storage is supported.</p>
        pub fn instance_storage_supported(mut self, input: bool) -> Self {
            self.instance_storage_supported = Some(input);
            self
        }
        /// <p>Indicates whether instance storage is supported.</p>
        pub fn set_instance_storage_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.instance_storage_supported = input;
            self
        }

        /// <p>Describes the instance storage for the instance type.</p>
        pub fn instance_storage_info(mut self, input: crate::model::InstanceStorageInfo) -> Self {
            self.instance_storage_info = Some(input);
            self
        }
        /// <p>Describes the instance storage for the instance type.</p>
        pub fn set_instance_storage_info(mut self, input: std::option::Option<crate::model::InstanceStorageInfo>) -> Self {
            self.instance_storage_info = input;
            self
        }

        /// <p>Describes the Amazon EBS settings for the instance type.</p>
        pub fn ebs_info(mut self, input: crate::model::EbsInfo) -> Self {
            self.ebs_info = Some(input);
            self
        }
        /// <p>Describes the Amazon EBS settings for the instance type.</p>
        pub fn set_ebs_info(mut self, input: std::option::Option<crate::model::EbsInfo>) -> Self {
            self.ebs_info = input;
            self
        }

        /// <p>Describes the network settings for the instance type.</p>
        pub fn network_info(mut self, input: crate::model::NetworkInfo) -> Self {
            self.network_info = Some(input);
            self
        }
        /// <p>Describes the network settings for the instance type.</p>
        pub fn set_network_info(mut self, input: std::option::Option<crate::model::NetworkInfo>) -> Self {
            self.network_info = input;
            self
        }

        /// <p>Describes the GPU accelerator settings for the instance type.</p>
        pub fn gpu_info(mut self, input: crate::model::GpuInfo) -> Self {
            self.gpu_info = Some(input);
            self
        }
        /// <p>Describes the GPU accelerator settings for the instance type.</p>
        pub fn set_gpu_info(mut self, input: std::option::Option<crate::model::GpuInfo>) -> Self {
            self.gpu_info = input;
            self
        }

        /// <p>Describes the FPGA accelerator settings for the instance type.</p>
        pub fn fpga_info(mut self, input: crate::model::FpgaInfo) -> Self {
            self.fpga_info = Some(input);
            self
        }
        /// <p>Describes the FPGA accelerator settings for the instance type.</p>
        pub fn set_fpga_info(mut self, input: std::option::Option<crate::model::FpgaInfo>) -> Self {
            self.fpga_info = input;
            self
        }

        /// <p>Describes the placement group settings for the instance type.</p>
        pub fn placement_group_info(mut self, input: crate::model::PlacementGroupInfo) -> Self {
            self.placement_group_info = Some(input);
            self
        }
        /// <p>Describes the placement group settings for the instance type.</p>
        pub fn set_placement_group_info(mut self, input: std::option::Option<crate::model::PlacementGroupInfo>) -> Self {
            self.placement_group_info = input;
            self
        }

        /// <p>Describes the Inference accelerator settings for the instance type.</p>
        pub fn inference_accelerator_info(mut self, input: crate::model::InferenceAcceleratorInfo) -> Self {
            self.inference_accelerator_info = Some(input);
            self
        }
        /// <p>Describes the Inference accelerator settings for the instance type.</p>
        pub fn set_inference_accelerator_info(mut self, input: std::option::Option<crate::model::InferenceAcceleratorInfo>) -> Self {
            self.inference_accelerator_info = input;
            self
        }

        /// <p>Indicates whether On-Demand hibernation is supported.</p>
        pub fn hibernation_supported(mut self, input: bool) -> Self {
            self.hibernation_supported = Some(input);
            self
        }
        /// <p>Indicates whether On-Demand hibernation is supported.</p>
        pub fn set_hibernation_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.hibernation_supported = input;
            self
        }

        /// <p>Indicates whether the instance type is a burstable performance instance type.</p>
        pub fn burstable_performance_supported(mut self, input: bool) -> Self {
            self.burstable_performance_supported = Some(input);
            self
        }
        /// <p>Indicates whether the instance type is a burstable performance instance type.</p>
        pub fn set_burstable_performance_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.burstable_performance_supported = input;
            self
        }

        /// <p>Indicates whether Dedicated Hosts are supported on the instance type.</p>
        pub fn dedicated_hosts_supported(mut self, input: bool) -> Self {
            self.dedicated_hosts_supported = Some(input);
            self
        }
        /// <p>Indicates whether Dedicated Hosts are supported on the instance type.</p>
        pub fn set_dedicated_hosts_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.dedicated_hosts_supported = input;
            self
        }

        /// <p>Indicates whether auto recovery is supported.</p>
        pub fn auto_recovery_supported(mut self, input: bool) -> Self {
            self.auto_recovery_supported = Some(input);
            self
        }
        /// <p>Indicates whether auto recovery is supported.</p>
        pub fn set_auto_recovery_supported(mut self, input: std::option::Option<bool>) -> Self {
            self.auto_recovery_supported = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceTypeInfo`](crate::model::InstanceTypeInfo)
        pub fn build(self) -> crate::model::InstanceTypeInfo {
            crate::model::InstanceTypeInfo {
                instance_type: self.instance_type,
                current_generation: self.current_generation,
                free_tier_eligible: self.free_tier_eligible,
                supported_usage_classes: self.supported_usage_classes,
                supported_root_device_types: self.supported_root_device_types,
                supported_virtualization_types: self.supported_virtualization_types,
                bare_metal: self.bare_metal,
                hypervisor: self.hypervisor,
                processor_info: self.processor_info,
                v_cpu_info: self.v_cpu_info,
                memory_info: self.memory_info,
                instance_storage_supported: self.instance_storage_supported,
                instance_storage_info: self.instance_storage_info,
                ebs_info: self.ebs_info,
                network_info: self.network_info,
                gpu_info: self.gpu_info,
                fpga_info: self.fpga_info,
                placement_group_info: self.placement_group_info,
                inference_accelerator_info: self.inference_accelerator_info,
                hibernation_supported: self.hibernation_supported,
                burstable_performance_supported: self.burstable_performance_supported,
                dedicated_hosts_supported: self.dedicated_hosts_supported,
                auto_recovery_supported: self.auto_recovery_supported,
            }
        }
    }
}
impl InstanceTypeInfo {
    /// Creates a new builder-style object to manufacture [`InstanceTypeInfo`](crate::model::InstanceTypeInfo)
    pub fn builder() -> crate::model::instance_type_info::Builder {
        crate::model::instance_type_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum UsageClassType {
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    #[allow(missing_docs)] // documentation missing in model
    OnDemand,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for UsageClassType {
    fn from(s: &str) -> Self {
        match s {
            "spot" => UsageClassType::Spot,
            "on-demand" => UsageClassType::OnDemand,
            other => UsageClassType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for UsageClassType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(UsageClassType::from(s))
    }
}
impl UsageClassType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            UsageClassType::Spot => "spot",
            UsageClassType::OnDemand => "on-demand",
            UsageClassType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "spot",
            "on-demand",
        ]
    }
}
impl AsRef<str> for UsageClassType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RootDeviceType {
    #[allow(missing_docs)] // documentation missing in model
    Ebs,
    #[allow(missing_docs)] // documentation missing in model
    InstanceStore,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RootDeviceType {
    fn from(s: &str) -> Self {
        match s {
            "ebs" => RootDeviceType::Ebs,
            "instance-store" => RootDeviceType::InstanceStore,
            other => RootDeviceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RootDeviceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RootDeviceType::from(s))
    }
}
impl RootDeviceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RootDeviceType::Ebs => "ebs",
            RootDeviceType::InstanceStore => "instance-store",
            RootDeviceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "ebs",
            "instance-store",
        ]
    }
}
impl AsRef<str> for RootDeviceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceTypeHypervisor {
    #[allow(missing_docs)] // documentation missing in model
    Nitro,
    #[allow(missing_docs)] // documentation missing in model
    Xen,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceTypeHypervisor {
    fn from(s: &str) -> Self {
        match s {
            "nitro" => InstanceTypeHypervisor::Nitro,
            "xen" => InstanceTypeHypervisor::Xen,
            other => InstanceTypeHypervisor::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceTypeHypervisor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceTypeHypervisor::from(s))
    }
}
impl InstanceTypeHypervisor {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceTypeHypervisor::Nitro => "nitro",
            InstanceTypeHypervisor::Xen => "xen",
            InstanceTypeHypervisor::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "nitro",
            "xen",
        ]
    }
}
impl AsRef<str> for InstanceTypeHypervisor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the Amazon EC2 launch template and the launch template version that can be used by a Spot Fleet request to configure Amazon EC2 instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct FleetLaunchTemplateSpecification {
    /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
    pub launch_template_id: std::option::Option<std::string::String>,
    /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
    pub launch_template_name: std::option::Option<std::string::String>,
    /// <p>The launch template version number, <code>$Latest</code>, or <code>$Default</code>. You must specify a value, otherwise the request fails.</p>
    pub version: std::option::Option<std::string::String>,
}
impl FleetLaunchTemplateSpecification {
    /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
    pub fn launch_template_id(&self) -> std::option::Option<&str> {
        self.launch_template_id.as_deref()
    }

    /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
    pub fn launch_template_name(&self) -> std::option::Option<&str> {
        self.launch_template_name.as_deref()
    }

    /// <p>The launch template version number, <code>$Latest</code>, or <code>$Default</code>. You must specify a value, otherwise the request fails.</p>
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}
impl std::fmt::Debug for FleetLaunchTemplateSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateId", &self.launch_template_id);
        formatter.field("LaunchTemplateName", &self.launch_template_name);
        formatter.field("Version", &self.version);
        formatter.finish()
    }
}
/// See [`FleetLaunchTemplateSpecification`](crate::model::FleetLaunchTemplateSpecification)
pub mod fleet_launch_template_specification {
    /// A builder for [`FleetLaunchTemplateSpecification`](crate::model::FleetLaunchTemplateSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_id: std::option::Option<std::string::String>,
        pub(crate) launch_template_name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
        pub fn launch_template_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.launch_template_id = Some(input.into());
            self
        }
        /// <p>The ID of the launch template. If you specify the template ID, you can't specify the template name.</p>
        pub fn set_launch_template_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launch_template_id = input;
            self
        }

        /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
        pub fn launch_template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.launch_template_name = Some(input.into());
            self
        }
        /// <p>The name of the launch template. If you specify the template name, you can't specify the template ID.</p>
        pub fn set_launch_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launch_template_name = input;
            self
        }

        /// <p>The launch template version number, <code>$Latest</code>, or <code>$Default</code>. You must specify a value, otherwise the request fails.</p>
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        /// <p>The launch template version number, <code>$Latest</code>, or <code>$Default</code>. You must specify a value, otherwise the request fails.</p>
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`FleetLaunchTemplateSpecification`](crate::model::FleetLaunchTemplateSpecification)
        pub fn build(self) -> crate::model::FleetLaunchTemplateSpecification {
            crate::model::FleetLaunchTemplateSpecification {
                launch_template_id: self.launch_template_id,
                launch_template_name: self.launch_template_name,
                version: self.version,
            }
        }
    }
}
impl FleetLaunchTemplateSpecification {
    /// Creates a new builder-style object to manufacture [`FleetLaunchTemplateSpecification`](crate::model::FleetLaunchTemplateSpecification)
    pub fn builder() -> crate::model::fleet_launch_template_specification::Builder {
        crate::model::fleet_launch_template_specification::Builder::default()
    }
}

/// <p>Describes the placement of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct PlacementResponse {
    /// <p>The name of the placement group that the instance is in.</p>
    pub group_name: std::option::Option<std::string::String>,
}
impl PlacementResponse {
    /// <p>The name of the placement group that the instance is in.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }
}
impl std::fmt::Debug for PlacementResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("GroupName", &self.group_name);
        formatter.finish()
    }
}
/// See [`PlacementResponse`](crate::model::PlacementResponse)
pub mod placement_response {
    /// A builder for [`PlacementResponse`](crate::model::PlacementResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) group_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of the placement group that the instance is in.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the placement group that the instance is in.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }
        /// Consumes the builder and constructs a [`PlacementResponse`](crate::model::PlacementResponse)
        pub fn build(self) -> crate::model::PlacementResponse {
            crate::model::PlacementResponse {
                group_name: self.group_name,
            }
        }
    }
}
impl PlacementResponse {
    /// Creates a new builder-style object to manufacture [`PlacementResponse`](crate::model::PlacementResponse)
    pub fn builder() -> crate::model::placement_response::Builder {
        crate::model::placement_response::Builder::default()
    }
}

/// <p>Describes overrides for a launch template.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct FleetLaunchTemplateOverrides {
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub max_price: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The number of units provided by the specified instance type.</p>
    pub weighted_capacity: std::option::Option<f64>,
    /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
    pub priority: std::option::Option<f64>,
    /// <p>The location where the instance launched, if applicable.</p>
    pub placement: std::option::Option<crate::model::PlacementResponse>,
}
impl FleetLaunchTemplateOverrides {
    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub fn max_price(&self) -> std::option::Option<&str> {
        self.max_price.as_deref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The number of units provided by the specified instance type.</p>
    pub fn weighted_capacity(&self) -> std::option::Option<f64> {
        self.weighted_capacity
    }

    /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
    pub fn priority(&self) -> std::option::Option<f64> {
        self.priority
    }

    /// <p>The location where the instance launched, if applicable.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::PlacementResponse> {
        self.placement.as_ref()
    }
}
impl std::fmt::Debug for FleetLaunchTemplateOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("MaxPrice", &self.max_price);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("WeightedCapacity", &self.weighted_capacity);
        formatter.field("Priority", &self.priority);
        formatter.field("Placement", &self.placement);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for FleetLaunchTemplateOverrides {
    fn eq(&self, other: &Self) -> bool {
        self.instance_type == other.instance_type
            && self.max_price == other.max_price
            && self.subnet_id == other.subnet_id
            && self.availability_zone == other.availability_zone
            && self.weighted_capacity.map(f64::to_bits) == other.weighted_capacity.map(f64::to_bits)
            && self.priority.map(f64::to_bits) == other.priority.map(f64::to_bits)
            && self.placement == other.placement
    }
}
impl std::cmp::Eq for FleetLaunchTemplateOverrides {}
impl std::hash::Hash for FleetLaunchTemplateOverrides {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.max_price, state);
        std::hash::Hash::hash(&self.subnet_id, state);
        std::hash::Hash::hash(&self.availability_zone, state);
        std::hash::Hash::hash(&self.weighted_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.priority.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.placement, state);
    }
}
/// See [`FleetLaunchTemplateOverrides`](crate::model::FleetLaunchTemplateOverrides)
pub mod fleet_launch_template_overrides {
    /// A builder for [`FleetLaunchTemplateOverrides`](crate::model::FleetLaunchTemplateOverrides)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) max_price: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) weighted_capacity: std::option::Option<f64>,
        pub(crate) priority: std::option::Option<f64>,
        pub(crate) placement: std::option::Option<crate::model::PlacementResponse>,
    }
    impl Builder {
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

        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn max_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_price = Some(input.into());
            self
        }
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn set_max_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_price = input;
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

        /// <p>The number of units provided by the specified instance type.</p>
        pub fn weighted_capacity(mut self, input: f64) -> Self {
            self.weighted_capacity = Some(input);
            self
        }
        /// <p>The number of units provided by the specified instance type.</p>
        pub fn set_weighted_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.weighted_capacity = input;
            self
        }

        /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
        pub fn priority(mut self, input: f64) -> Self {
            self.priority = Some(input);
            self
        }
        /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
        pub fn set_priority(mut self, input: std::option::Option<f64>) -> Self {
            self.priority = input;
            self
        }

        /// <p>The location where the instance launched, if applicable.</p>
        pub fn placement(mut self, input: crate::model::PlacementResponse) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The location where the instance launched, if applicable.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::PlacementResponse>) -> Self {
            self.placement = input;
            self
        }
        /// Consumes the builder and constructs a [`FleetLaunchTemplateOverrides`](crate::model::FleetLaunchTemplateOverrides)
        pub fn build(self) -> crate::model::FleetLaunchTemplateOverrides {
            crate::model::FleetLaunchTemplateOverrides {
                instance_type: self.instance_type,
                max_price: self.max_price,
                subnet_id: self.subnet_id,
                availability_zone: self.availability_zone,
                weighted_capacity: self.weighted_capacity,
                priority: self.priority,
                placement: self.placement,
            }
        }
    }
}
impl FleetLaunchTemplateOverrides {
    /// Creates a new builder-style object to manufacture [`FleetLaunchTemplateOverrides`](crate::model::FleetLaunchTemplateOverrides)
    pub fn builder() -> crate::model::fleet_launch_template_overrides::Builder {
        crate::model::fleet_launch_template_overrides::Builder::default()
    }
}

/// <p>Describes a launch template and overrides.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct FleetLaunchTemplateConfig {
    /// <p>The launch template.</p>
    pub launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    pub overrides: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateOverrides>>,
}
impl FleetLaunchTemplateConfig {
    /// <p>The launch template.</p>
    pub fn launch_template_specification(&self) -> std::option::Option<&crate::model::FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.overrides.is_none()`.
    pub fn overrides(&self) -> &[crate::model::FleetLaunchTemplateOverrides] {
        self.overrides.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for FleetLaunchTemplateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateSpecification", &self.launch_template_specification);
        formatter.field("Overrides", &self.overrides);
        formatter.finish()
    }
}
/// See [`FleetLaunchTemplateConfig`](crate::model::FleetLaunchTemplateConfig)
pub mod fleet_launch_template_config {
    /// A builder for [`FleetLaunchTemplateConfig`](crate::model::FleetLaunchTemplateConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
        pub(crate) overrides: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateOverrides>>,
    }
    impl Builder {
        /// <p>The launch template.</p>
        pub fn launch_template_specification(mut self, input: crate::model::FleetLaunchTemplateSpecification) -> Self {
            self.launch_template_specification = Some(input);
            self
        }
        /// <p>The launch template.</p>
        pub fn set_launch_template_specification(mut self, input: std::option::Option<crate::model::FleetLaunchTemplateSpecification>) -> Self {
            self.launch_template_specification = input;
            self
        }

        /// Appends an item to `overrides`.
        ///
        /// To override the contents of this collection use [`set_overrides`](Self::set_overrides).
        ///
        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn overrides(mut self, input: impl std::convert::Into<crate::model::FleetLaunchTemplateOverrides>) -> Self {
            let mut v = self.overrides.unwrap_or_default();
            v.push(input.into());
            self.overrides = Some(v);
            self
        }
        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn set_overrides(mut self, input: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateOverrides>>) -> Self {
            self.overrides = input;
            self
        }
        /// Consumes the builder and constructs a [`FleetLaunchTemplateConfig`](crate::model::FleetLaunchTemplateConfig)
        pub fn build(self) -> crate::model::FleetLaunchTemplateConfig {
            crate::model::FleetLaunchTemplateConfig {
                launch_template_specification: self.launch_template_specification,
                overrides: self.overrides,
            }
        }
    }
}
impl FleetLaunchTemplateConfig {
    /// Creates a new builder-style object to manufacture [`FleetLaunchTemplateConfig`](crate::model::FleetLaunchTemplateConfig)
    pub fn builder() -> crate::model::fleet_launch_template_config::Builder {
        crate::model::fleet_launch_template_config::Builder::default()
    }
}

/// <p>The number of units to request. You can choose to set the target capacity in terms of instances or a performance characteristic that is important to your application workload, such as vCPUs, memory, or I/O.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct TargetCapacitySpecification {
    /// <p>The number of units to request, filled using <code>DefaultTargetCapacityType</code>.</p>
    pub total_target_capacity: std::option::Option<i32>,
    /// <p>The number of On-Demand units to request.</p>
    pub on_demand_target_capacity: std::option::Option<i32>,
    /// <p>The number of Spot units to launch.</p>
    pub spot_target_capacity: std::option::Option<i32>,
    /// <p>The default <code>TotalTargetCapacity</code>, which is either <code>Spot</code> or <code>On-Demand</code>.</p>
    pub default_target_capacity_type: std::option::Option<crate::model::DefaultTargetCapacityType>,
}
impl TargetCapacitySpecification {
    /// <p>The number of units to request, filled using <code>DefaultTargetCapacityType</code>.</p>
    pub fn total_target_capacity(&self) -> std::option::Option<i32> {
        self.total_target_capacity
    }

    /// <p>The number of On-Demand units to request.</p>
    pub fn on_demand_target_capacity(&self) -> std::option::Option<i32> {
        self.on_demand_target_capacity
    }

    /// <p>The number of Spot units to launch.</p>
    pub fn spot_target_capacity(&self) -> std::option::Option<i32> {
        self.spot_target_capacity
    }

    /// <p>The default <code>TotalTargetCapacity</code>, which is either <code>Spot</code> or <code>On-Demand</code>.</p>
    pub fn default_target_capacity_type(&self) -> std::option::Option<&crate::model::DefaultTargetCapacityType> {
        self.default_target_capacity_type.as_ref()
    }
}
impl std::fmt::Debug for TargetCapacitySpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("TotalTargetCapacity", &self.total_target_capacity);
        formatter.field("OnDemandTargetCapacity", &self.on_demand_target_capacity);
        formatter.field("SpotTargetCapacity", &self.spot_target_capacity);
        formatter.enum_field("DefaultTargetCapacityType", &self.default_target_capacity_type);
        formatter.finish()
    }
}
/// See [`TargetCapacitySpecification`](crate::model::TargetCapacitySpecification)
pub mod target_capacity_specification {
    /// A builder for [`TargetCapacitySpecification`](crate::model::TargetCapacitySpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) total_target_capacity: std::option::Option<i32>,
        pub(crate) on_demand_target_capacity: std::option::Option<i32>,
        pub(crate) spot_target_capacity: std::option::Option<i32>,
        pub(crate) default_target_capacity_type: std::option::Option<crate::model::DefaultTargetCapacityType>,
    }
    impl Builder {
        /// <p>The number of units to request, filled using <code>DefaultTargetCapacityType</code>.</p>
        pub fn total_target_capacity(mut self, input: i32) -> Self {
            self.total_target_capacity = Some(input);
            self
        }
        /// <p>The number of units to request, filled using <code>DefaultTargetCapacityType</code>.</p>
        pub fn set_total_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.total_target_capacity = input;
            self
        }

        /// <p>The number of On-Demand units to request.</p>
        pub fn on_demand_target_capacity(mut self, input: i32) -> Self {
            self.on_demand_target_capacity = Some(input);
            self
        }
        /// <p>The number of On-Demand units to request.</p>
        pub fn set_on_demand_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.on_demand_target_capacity = input;
            self
        }

        /// <p>The number of Spot units to launch.</p>
        pub fn spot_target_capacity(mut self, input: i32) -> Self {
            self.spot_target_capacity = Some(input);
            self
        }
        /// <p>The number of Spot units to launch.</p>
        pub fn set_spot_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.spot_target_capacity = input;
            self
        }

        /// <p>The default <code>TotalTargetCapacity</code>, which is either <code>Spot</code> or <code>On-Demand</code>.</p>
        pub fn default_target_capacity_type(mut self, input: crate::model::DefaultTargetCapacityType) -> Self {
            self.default_target_capacity_type = Some(input);
            self
        }
        /// <p>The default <code>TotalTargetCapacity</code>, which is either <code>Spot</code> or <code>On-Demand</code>.</p>
        pub fn set_default_target_capacity_type(mut self, input: std::option::Option<crate::model::DefaultTargetCapacityType>) -> Self {
            self.default_target_capacity_type = input;
            self
        }
        /// Consumes the builder and constructs a [`TargetCapacitySpecification`](crate::model::TargetCapacitySpecification)
        pub fn build(self) -> crate::model::TargetCapacitySpecification {
            crate::model::TargetCapacitySpecification {
                total_target_capacity: self.total_target_capacity,
                on_demand_target_capacity: self.on_demand_target_capacity,
                spot_target_capacity: self.spot_target_capacity,
                default_target_capacity_type: self.default_target_capacity_type,
            }
        }
    }
}
impl TargetCapacitySpecification {
    /// Creates a new builder-style object to manufacture [`TargetCapacitySpecification`](crate::model::TargetCapacitySpecification)
    pub fn builder() -> crate::model::target_capacity_specification::Builder {
        crate::model::target_capacity_specification::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DefaultTargetCapacityType {
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    #[allow(missing_docs)] // documentation missing in model
    OnDemand,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DefaultTargetCapacityType {
    fn from(s: &str) -> Self {
        match s {
            "spot" => DefaultTargetCapacityType::Spot,
            "on-demand" => DefaultTargetCapacityType::OnDemand,
            other => DefaultTargetCapacityType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DefaultTargetCapacityType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DefaultTargetCapacityType::from(s))
    }
}
impl DefaultTargetCapacityType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            DefaultTargetCapacityType::Spot => "spot",
            DefaultTargetCapacityType::OnDemand => "on-demand",
            DefaultTargetCapacityType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "spot",
            "on-demand",
        ]
    }
}
impl AsRef<str> for DefaultTargetCapacityType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the configuration of Spot Instances in an EC2 Fleet.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotOptions {
    /// <p>Indicates how to allocate the target Spot Instance capacity across the Spot Instance pools specified by the EC2 Fleet.</p>
    pub allocation_strategy: std::option::Option<crate::model::SpotAllocationStrategy>,
    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::SpotInstanceInterruptionBehavior>,
    /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
    pub instance_pools_to_use_count: std::option::Option<i32>,
    /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
    pub single_instance_type: std::option::Option<bool>,
    /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
    pub single_availability_zone: std::option::Option<bool>,
    /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
    pub min_target_capacity: std::option::Option<i32>,
    /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
    pub max_total_price: std::option::Option<std::string::String>,
}
impl SpotOptions {
    /// <p>Indicates how to allocate the target Spot Instance capacity across the Spot Instance pools specified by the EC2 Fleet.</p>
    pub fn allocation_strategy(&self) -> std::option::Option<&crate::model::SpotAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::SpotInstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
    pub fn instance_pools_to_use_count(&self) -> std::option::Option<i32> {
        self.instance_pools_to_use_count
    }

    /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
    pub fn single_instance_type(&self) -> std::option::Option<bool> {
        self.single_instance_type
    }

    /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
    pub fn single_availability_zone(&self) -> std::option::Option<bool> {
        self.single_availability_zone
    }

    /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
    pub fn min_target_capacity(&self) -> std::option::Option<i32> {
        self.min_target_capacity
    }

    /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
    pub fn max_total_price(&self) -> std::option::Option<&str> {
        self.max_total_price.as_deref()
    }
}
impl std::fmt::Debug for SpotOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("AllocationStrategy", &self.allocation_strategy);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.field("InstancePoolsToUseCount", &self.instance_pools_to_use_count);
        formatter.field("SingleInstanceType", &self.single_instance_type);
        formatter.field("SingleAvailabilityZone", &self.single_availability_zone);
        formatter.field("MinTargetCapacity", &self.min_target_capacity);
        formatter.field("MaxTotalPrice", &self.max_total_price);
        formatter.finish()
    }
}
/// See [`SpotOptions`](crate::model::SpotOptions)
pub mod spot_options {
    /// A builder for [`SpotOptions`](crate::model::SpotOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) allocation_strategy: std::option::Option<crate::model::SpotAllocationStrategy>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::SpotInstanceInterruptionBehavior>,
        pub(crate) instance_pools_to_use_count: std::option::Option<i32>,
        pub(crate) single_instance_type: std::option::Option<bool>,
        pub(crate) single_availability_zone: std::option::Option<bool>,
        pub(crate) min_target_capacity: std::option::Option<i32>,
        pub(crate) max_total_price: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Indicates how to allocate the target Spot Instance capacity across the Spot Instance pools specified by the EC2 Fleet.</p>
        pub fn allocation_strategy(mut self, input: crate::model::SpotAllocationStrategy) -> Self {
            self.allocation_strategy = Some(input);
            self
        }
        /// <p>Indicates how to allocate the target Spot Instance capacity across the Spot Instance pools specified by the EC2 Fleet.</p>
        pub fn set_allocation_strategy(mut self, input: std::option::Option<crate::model::SpotAllocationStrategy>) -> Self {
            self.allocation_strategy = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::SpotInstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::SpotInstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }

        /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
        pub fn instance_pools_to_use_count(mut self, input: i32) -> Self {
            self.instance_pools_to_use_count = Some(input);
            self
        }
        /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
        pub fn set_instance_pools_to_use_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_pools_to_use_count = input;
            self
        }

        /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
        pub fn single_instance_type(mut self, input: bool) -> Self {
            self.single_instance_type = Some(input);
            self
        }
        /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
        pub fn set_single_instance_type(mut self, input: std::option::Option<bool>) -> Self {
            self.single_instance_type = input;
            self
        }

        /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
        pub fn single_availability_zone(mut self, input: bool) -> Self {
            self.single_availability_zone = Some(input);
            self
        }
        /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
        pub fn set_single_availability_zone(mut self, input: std::option::Option<bool>) -> Self {
            self.single_availability_zone = input;
            self
        }

        /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
        pub fn min_target_capacity(mut self, input: i32) -> Self {
            self.min_target_capacity = Some(input);
            self
        }
        /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
        pub fn set_min_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.min_target_capacity = input;
            self
        }

        /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
        pub fn max_total_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_total_price = Some(input.into());
            self
        }
        /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
        pub fn set_max_total_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_total_price = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotOptions`](crate::model::SpotOptions)
        pub fn build(self) -> crate::model::SpotOptions {
            crate::model::SpotOptions {
                allocation_strategy: self.allocation_strategy,
                instance_interruption_behavior: self.instance_interruption_behavior,
                instance_pools_to_use_count: self.instance_pools_to_use_count,
                single_instance_type: self.single_instance_type,
                single_availability_zone: self.single_availability_zone,
                min_target_capacity: self.min_target_capacity,
                max_total_price: self.max_total_price,
            }
        }
    }
}
impl SpotOptions {
    /// Creates a new builder-style object to manufacture [`SpotOptions`](crate::model::SpotOptions)
    pub fn builder() -> crate::model::spot_options::Builder {
        crate::model::spot_options::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SpotAllocationStrategy {
    #[allow(missing_docs)] // documentation missing in model
    LowestPrice,
    #[allow(missing_docs)] // documentation missing in model
    Diversified,
    #[allow(missing_docs)] // documentation missing in model
    CapacityOptimized,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SpotAllocationStrategy {
    fn from(s: &str) -> Self {
        match s {
            "lowest-price" => SpotAllocationStrategy::LowestPrice,
            "diversified" => SpotAllocationStrategy::Diversified,
            "capacity-optimized" => SpotAllocationStrategy::CapacityOptimized,
            other => SpotAllocationStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SpotAllocationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpotAllocationStrategy::from(s))
    }
}
impl SpotAllocationStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            SpotAllocationStrategy::LowestPrice => "lowest-price",
            SpotAllocationStrategy::Diversified => "diversified",
            SpotAllocationStrategy::CapacityOptimized => "capacity-optimized",
            SpotAllocationStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "lowest-price",
            "diversified",
            "capacity-optimized",
        ]
    }
}
impl AsRef<str> for SpotAllocationStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SpotInstanceInterruptionBehavior {
    #[allow(missing_docs)] // documentation missing in model
    Hibernate,
    #[allow(missing_docs)] // documentation missing in model
    Stop,
    #[allow(missing_docs)] // documentation missing in model
    Terminate,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SpotInstanceInterruptionBehavior {
    fn from(s: &str) -> Self {
        match s {
            "hibernate" => SpotInstanceInterruptionBehavior::Hibernate,
            "stop" => SpotInstanceInterruptionBehavior::Stop,
            "terminate" => SpotInstanceInterruptionBehavior::Terminate,
            other => SpotInstanceInterruptionBehavior::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SpotInstanceInterruptionBehavior {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpotInstanceInterruptionBehavior::from(s))
    }
}
impl SpotInstanceInterruptionBehavior {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            SpotInstanceInterruptionBehavior::Hibernate => "hibernate",
            SpotInstanceInterruptionBehavior::Stop => "stop",
            SpotInstanceInterruptionBehavior::Terminate => "terminate",
            SpotInstanceInterruptionBehavior::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "hibernate",
            "stop",
            "terminate",
        ]
    }
}
impl AsRef<str> for SpotInstanceInterruptionBehavior {
    fn as_ref(&self) -> &str {
        self.as_str()
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
pub struct CapacityReservationOptions {
    /// <p>Indicates whether to use unused Capacity Reservations for fulfilling On-Demand capacity.</p>
    pub usage_strategy: std::option::Option<crate::model::FleetCapacityReservationUsageStrategy>,
}
impl CapacityReservationOptions {
    /// <p>Indicates whether to use unused Capacity Reservations for fulfilling On-Demand capacity.</p>
    pub fn usage_strategy(&self) -> std::option::Option<&crate::model::FleetCapacityReservationUsageStrategy> {
        self.usage_strategy.as_ref()
    }
}
impl std::fmt::Debug for CapacityReservationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("UsageStrategy", &self.usage_strategy);
        formatter.finish()
    }
}
/// See [`CapacityReservationOptions`](crate::model::CapacityReservationOptions)
pub mod capacity_reservation_options {
    /// A builder for [`CapacityReservationOptions`](crate::model::CapacityReservationOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) usage_strategy: std::option::Option<crate::model::FleetCapacityReservationUsageStrategy>,
    }
    impl Builder {
        /// <p>Indicates whether to use unused Capacity Reservations for fulfilling On-Demand capacity.</p>
        pub fn usage_strategy(mut self, input: crate::model::FleetCapacityReservationUsageStrategy) -> Self {
            self.usage_strategy = Some(input);
            self
        }
        /// <p>Indicates whether to use unused Capacity Reservations for fulfilling On-Demand capacity.</p>
        pub fn set_usage_strategy(mut self, input: std::option::Option<crate::model::FleetCapacityReservationUsageStrategy>) -> Self {
            self.usage_strategy = input;
            self
        }
        /// Consumes the builder and constructs a [`CapacityReservationOptions`](crate::model::CapacityReservationOptions)
        pub fn build(self) -> crate::model::CapacityReservationOptions {
            crate::model::CapacityReservationOptions {
                usage_strategy: self.usage_strategy,
            }
        }
    }
}
impl CapacityReservationOptions {
    /// Creates a new builder-style object to manufacture [`CapacityReservationOptions`](crate::model::CapacityReservationOptions)
    pub fn builder() -> crate::model::capacity_reservation_options::Builder {
        crate::model::capacity_reservation_options::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetCapacityReservationUsageStrategy {
    #[allow(missing_docs)] // documentation missing in model
    UseCapacityReservationsFirst,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetCapacityReservationUsageStrategy {
    fn from(s: &str) -> Self {
        match s {
            "use-capacity-reservations-first" => FleetCapacityReservationUsageStrategy::UseCapacityReservationsFirst,
            other => FleetCapacityReservationUsageStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetCapacityReservationUsageStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetCapacityReservationUsageStrategy::from(s))
    }
}
impl FleetCapacityReservationUsageStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetCapacityReservationUsageStrategy::UseCapacityReservationsFirst => "use-capacity-reservations-first",
            FleetCapacityReservationUsageStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "use-capacity-reservations-first",
        ]
    }
}
impl AsRef<str> for FleetCapacityReservationUsageStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the configuration of On-Demand Instances in an EC2 Fleet.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct OnDemandOptions {
    /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
    pub allocation_strategy: std::option::Option<crate::model::FleetOnDemandAllocationStrategy>,
    /// <p>The strategy for using unused Capacity Reservations for fulfilling On-Demand capacity.</p>
    pub capacity_reservation_options: std::option::Option<crate::model::CapacityReservationOptions>,
    /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
    pub single_instance_type: std::option::Option<bool>,
    /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
    pub single_availability_zone: std::option::Option<bool>,
    /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
    pub min_target_capacity: std::option::Option<i32>,
    /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
    pub max_total_price: std::option::Option<std::string::String>,
}
impl OnDemandOptions {
    /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
    pub fn allocation_strategy(&self) -> std::option::Option<&crate::model::FleetOnDemandAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// <p>The strategy for using unused Capacity Reservations for fulfilling On-Demand capacity.</p>
    pub fn capacity_reservation_options(&self) -> std::option::Option<&crate::model::CapacityReservationOptions> {
        self.capacity_reservation_options.as_ref()
    }

    /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
    pub fn single_instance_type(&self) -> std::option::Option<bool> {
        self.single_instance_type
    }

    /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
    pub fn single_availability_zone(&self) -> std::option::Option<bool> {
        self.single_availability_zone
    }

    /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
    pub fn min_target_capacity(&self) -> std::option::Option<i32> {
        self.min_target_capacity
    }

    /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
    pub fn max_total_price(&self) -> std::option::Option<&str> {
        self.max_total_price.as_deref()
    }
}
impl std::fmt::Debug for OnDemandOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("AllocationStrategy", &self.allocation_strategy);
        formatter.field("CapacityReservationOptions", &self.capacity_reservation_options);
        formatter.field("SingleInstanceType", &self.single_instance_type);
        formatter.field("SingleAvailabilityZone", &self.single_availability_zone);
        formatter.field("MinTargetCapacity", &self.min_target_capacity);
        formatter.field("MaxTotalPrice", &self.max_total_price);
        formatter.finish()
    }
}
/// See [`OnDemandOptions`](crate::model::OnDemandOptions)
pub mod on_demand_options {
    /// A builder for [`OnDemandOptions`](crate::model::OnDemandOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) allocation_strategy: std::option::Option<crate::model::FleetOnDemandAllocationStrategy>,
        pub(crate) capacity_reservation_options: std::option::Option<crate::model::CapacityReservationOptions>,
        pub(crate) single_instance_type: std::option::Option<bool>,
        pub(crate) single_availability_zone: std::option::Option<bool>,
        pub(crate) min_target_capacity: std::option::Option<i32>,
        pub(crate) max_total_price: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
        pub fn allocation_strategy(mut self, input: crate::model::FleetOnDemandAllocationStrategy) -> Self {
            self.allocation_strategy = Some(input);
            self
        }
        /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
        pub fn set_allocation_strategy(mut self, input: std::option::Option<crate::model::FleetOnDemandAllocationStrategy>) -> Self {
            self.allocation_strategy = input;
            self
        }

        /// <p>The strategy for using unused Capacity Reservations for fulfilling On-Demand capacity.</p>
        pub fn capacity_reservation_options(mut self, input: crate::model::CapacityReservationOptions) -> Self {
            self.capacity_reservation_options = Some(input);
            self
        }
        /// <p>The strategy for using unused Capacity Reservations for fulfilling On-Demand capacity.</p>
        pub fn set_capacity_reservation_options(mut self, input: std::option::Option<crate::model::CapacityReservationOptions>) -> Self {
            self.capacity_reservation_options = input;
            self
        }

        /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
        pub fn single_instance_type(mut self, input: bool) -> Self {
            self.single_instance_type = Some(input);
            self
        }
        /// <p>Indicates that the fleet uses a single instance type to launch all instances in the fleet.</p>
        pub fn set_single_instance_type(mut self, input: std::option::Option<bool>) -> Self {
            self.single_instance_type = input;
            self
        }

        /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
        pub fn single_availability_zone(mut self, input: bool) -> Self {
            self.single_availability_zone = Some(input);
            self
        }
        /// <p>Indicates that the fleet launches all instances into a single Availability Zone.</p>
        pub fn set_single_availability_zone(mut self, input: std::option::Option<bool>) -> Self {
            self.single_availability_zone = input;
            self
        }

        /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
        pub fn min_target_capacity(mut self, input: i32) -> Self {
            self.min_target_capacity = Some(input);
            self
        }
        /// <p>The minimum target capacity that must be reached in the fleet. If the minimum target capacity is not reached, the fleet launches no instances.</p>
        pub fn set_min_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.min_target_capacity = input;
            self
        }

        /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
        pub fn max_total_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_total_price = Some(input.into());
            self
        }
        /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
        pub fn set_max_total_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_total_price = input;
            self
        }
        /// Consumes the builder and constructs a [`OnDemandOptions`](crate::model::OnDemandOptions)
        pub fn build(self) -> crate::model::OnDemandOptions {
            crate::model::OnDemandOptions {
                allocation_strategy: self.allocation_strategy,
                capacity_reservation_options: self.capacity_reservation_options,
                single_instance_type: self.single_instance_type,
                single_availability_zone: self.single_availability_zone,
                min_target_capacity: self.min_target_capacity,
                max_total_price: self.max_total_price,
            }
        }
    }
}
impl OnDemandOptions {
    /// Creates a new builder-style object to manufacture [`OnDemandOptions`](crate::model::OnDemandOptions)
    pub fn builder() -> crate::model::on_demand_options::Builder {
        crate::model::on_demand_options::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetOnDemandAllocationStrategy {
    #[allow(missing_docs)] // documentation missing in model
    LowestPrice,
    #[allow(missing_docs)] // documentation missing in model
    Prioritized,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetOnDemandAllocationStrategy {
    fn from(s: &str) -> Self {
        match s {
            "lowest-price" => FleetOnDemandAllocationStrategy::LowestPrice,
            "prioritized" => FleetOnDemandAllocationStrategy::Prioritized,
            other => FleetOnDemandAllocationStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetOnDemandAllocationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetOnDemandAllocationStrategy::from(s))
    }
}
impl FleetOnDemandAllocationStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetOnDemandAllocationStrategy::LowestPrice => "lowest-price",
            FleetOnDemandAllocationStrategy::Prioritized => "prioritized",
            FleetOnDemandAllocationStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "lowest-price",
            "prioritized",
        ]
    }
}
impl AsRef<str> for FleetOnDemandAllocationStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a launch template and overrides.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateAndOverridesResponse {
    /// <p>The launch template.</p>
    pub launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    pub overrides: std::option::Option<crate::model::FleetLaunchTemplateOverrides>,
}
impl LaunchTemplateAndOverridesResponse {
    /// <p>The launch template.</p>
    pub fn launch_template_specification(&self) -> std::option::Option<&crate::model::FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    pub fn overrides(&self) -> std::option::Option<&crate::model::FleetLaunchTemplateOverrides> {
        self.overrides.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateAndOverridesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateSpecification", &self.launch_template_specification);
        formatter.field("Overrides", &self.overrides);
        formatter.finish()
    }
}
/// See [`LaunchTemplateAndOverridesResponse`](crate::model::LaunchTemplateAndOverridesResponse)
pub mod launch_template_and_overrides_response {
    /// A builder for [`LaunchTemplateAndOverridesResponse`](crate::model::LaunchTemplateAndOverridesResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
        pub(crate) overrides: std::option::Option<crate::model::FleetLaunchTemplateOverrides>,
    }
    impl Builder {
        /// <p>The launch template.</p>
        pub fn launch_template_specification(mut self, input: crate::model::FleetLaunchTemplateSpecification) -> Self {
            self.launch_template_specification = Some(input);
            self
        }
        /// <p>The launch template.</p>
        pub fn set_launch_template_specification(mut self, input: std::option::Option<crate::model::FleetLaunchTemplateSpecification>) -> Self {
            self.launch_template_specification = input;
            self
        }

        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn overrides(mut self, input: crate::model::FleetLaunchTemplateOverrides) -> Self {
            self.overrides = Some(input);
            self
        }
        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn set_overrides(mut self, input: std::option::Option<crate::model::FleetLaunchTemplateOverrides>) -> Self {
            self.overrides = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateAndOverridesResponse`](crate::model::LaunchTemplateAndOverridesResponse)
        pub fn build(self) -> crate::model::LaunchTemplateAndOverridesResponse {
            crate::model::LaunchTemplateAndOverridesResponse {
                launch_template_specification: self.launch_template_specification,
                overrides: self.overrides,
            }
        }
    }
}
impl LaunchTemplateAndOverridesResponse {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateAndOverridesResponse`](crate::model::LaunchTemplateAndOverridesResponse)
    pub fn builder() -> crate::model::launch_template_and_overrides_response::Builder {
        crate::model::launch_template_and_overrides_response::Builder::default()
    }
}

/// <p>Describes the instances that could not be launched by the fleet.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeFleetError {
    /// <p>The launch templates and overrides that were used for launching the instances.</p>
    pub launch_template_and_overrides: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>,
    /// <p>Indicates if the instance that could not be launched was a Spot Instance or On-Demand Instance.</p>
    pub lifecycle: std::option::Option<crate::model::InstanceLifecycle>,
    /// <p>The error code that indicates why the instance could not be launched.</p>
    pub error_code: std::option::Option<std::string::String>,
    /// <p>The error message that describes why the instance could not be launched.</p>
    pub error_message: std::option::Option<std::string::String>,
}
impl DescribeFleetError {
    /// <p>The launch templates and overrides that were used for launching the instances.</p>
    pub fn launch_template_and_overrides(&self) -> std::option::Option<&crate::model::LaunchTemplateAndOverridesResponse> {
        self.launch_template_and_overrides.as_ref()
    }

    /// <p>Indicates if the instance that could not be launched was a Spot Instance or On-Demand Instance.</p>
    pub fn lifecycle(&self) -> std::option::Option<&crate::model::InstanceLifecycle> {
        self.lifecycle.as_ref()
    }

    /// <p>The error code that indicates why the instance could not be launched.</p>
    pub fn error_code(&self) -> std::option::Option<&str> {
        self.error_code.as_deref()
    }

    /// <p>The error message that describes why the instance could not be launched.</p>
    pub fn error_message(&self) -> std::option::Option<&str> {
        self.error_message.as_deref()
    }
}
impl std::fmt::Debug for DescribeFleetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateAndOverrides", &self.launch_template_and_overrides);
        formatter.enum_field("Lifecycle", &self.lifecycle);
        formatter.field("ErrorCode", &self.error_code);
        formatter.field("ErrorMessage", &self.error_message);
        formatter.finish()
    }
}
/// See [`DescribeFleetError`](crate::model::DescribeFleetError)
pub mod describe_fleet_error {
    /// A builder for [`DescribeFleetError`](crate::model::DescribeFleetError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_and_overrides: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>,
        pub(crate) lifecycle: std::option::Option<crate::model::InstanceLifecycle>,
        pub(crate) error_code: std::option::Option<std::string::String>,
        pub(crate) error_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The launch templates and overrides that were used for launching the instances.</p>
        pub fn launch_template_and_overrides(mut self, input: crate::model::LaunchTemplateAndOverridesResponse) -> Self {
            self.launch_template_and_overrides = Some(input);
            self
        }
        /// <p>The launch templates and overrides that were used for launching the instances.</p>
        pub fn set_launch_template_and_overrides(mut self, input: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>) -> Self {
            self.launch_template_and_overrides = input;
            self
        }

        /// <p>Indicates if the instance that could not be launched was a Spot Instance or On-Demand Instance.</p>
        pub fn lifecycle(mut self, input: crate::model::InstanceLifecycle) -> Self {
            self.lifecycle = Some(input);
            self
        }
        /// <p>Indicates if the instance that could not be launched was a Spot Instance or On-Demand Instance.</p>
        pub fn set_lifecycle(mut self, input: std::option::Option<crate::model::InstanceLifecycle>) -> Self {
            self.lifecycle = input;
            self
        }

        /// <p>The error code that indicates why the instance could not be launched.</p>
        pub fn error_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        /// <p>The error code that indicates why the instance could not be launched.</p>
        pub fn set_error_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error_code = input;
            self
        }

        /// <p>The error message that describes why the instance could not be launched.</p>
        pub fn error_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.error_message = Some(input.into());
            self
        }
        /// <p>The error message that describes why the instance could not be launched.</p>
        pub fn set_error_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error_message = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeFleetError`](crate::model::DescribeFleetError)
        pub fn build(self) -> crate::model::DescribeFleetError {
            crate::model::DescribeFleetError {
                launch_template_and_overrides: self.launch_template_and_overrides,
                lifecycle: self.lifecycle,
                error_code: self.error_code,
                error_message: self.error_message,
            }
        }
    }
}
impl DescribeFleetError {
    /// Creates a new builder-style object to manufacture [`DescribeFleetError`](crate::model::DescribeFleetError)
    pub fn builder() -> crate::model::describe_fleet_error::Builder {
        crate::model::describe_fleet_error::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InstanceLifecycle {
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    #[allow(missing_docs)] // documentation missing in model
    OnDemand,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InstanceLifecycle {
    fn from(s: &str) -> Self {
        match s {
            "spot" => InstanceLifecycle::Spot,
            "on-demand" => InstanceLifecycle::OnDemand,
            other => InstanceLifecycle::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceLifecycle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceLifecycle::from(s))
    }
}
impl InstanceLifecycle {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceLifecycle::Spot => "spot",
            InstanceLifecycle::OnDemand => "on-demand",
            InstanceLifecycle::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "spot",
            "on-demand",
        ]
    }
}
impl AsRef<str> for InstanceLifecycle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the instances that were launched by the fleet.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct DescribeFleetsInstances {
    /// <p>The launch templates and overrides that were used for launching the instances.</p>
    pub launch_template_and_overrides: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>,
    /// <p>Indicates if the instance that was launched is a Spot Instance or On-Demand Instance.</p>
    pub lifecycle: std::option::Option<crate::model::InstanceLifecycle>,
    /// <p>The IDs of the instances.</p>
    pub instance_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
    pub platform: std::option::Option<crate::model::PlatformValues>,
}
impl DescribeFleetsInstances {
    /// <p>The launch templates and overrides that were used for launching the instances.</p>
    pub fn launch_template_and_overrides(&self) -> std::option::Option<&crate::model::LaunchTemplateAndOverridesResponse> {
        self.launch_template_and_overrides.as_ref()
    }

    /// <p>Indicates if the instance that was launched is a Spot Instance or On-Demand Instance.</p>
    pub fn lifecycle(&self) -> std::option::Option<&crate::model::InstanceLifecycle> {
        self.lifecycle.as_ref()
    }

    /// <p>The IDs of the instances.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instance_ids.is_none()`.
    pub fn instance_ids(&self) -> &[std::string::String] {
        self.instance_ids.as_deref().unwrap_or_default()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
    pub fn platform(&self) -> std::option::Option<&crate::model::PlatformValues> {
        self.platform.as_ref()
    }
}
impl std::fmt::Debug for DescribeFleetsInstances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateAndOverrides", &self.launch_template_and_overrides);
        formatter.enum_field("Lifecycle", &self.lifecycle);
        formatter.field("InstanceIds", &self.instance_ids);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.enum_field("Platform", &self.platform);
        formatter.finish()
    }
}
/// See [`DescribeFleetsInstances`](crate::model::DescribeFleetsInstances)
pub mod describe_fleets_instances {
    /// A builder for [`DescribeFleetsInstances`](crate::model::DescribeFleetsInstances)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_and_overrides: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>,
        pub(crate) lifecycle: std::option::Option<crate::model::InstanceLifecycle>,
        pub(crate) instance_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) platform: std::option::Option<crate::model::PlatformValues>,
    }
    impl Builder {
        /// <p>The launch templates and overrides that were used for launching the instances.</p>
        pub fn launch_template_and_overrides(mut self, input: crate::model::LaunchTemplateAndOverridesResponse) -> Self {
            self.launch_template_and_overrides = Some(input);
            self
        }
        /// <p>The launch templates and overrides that were used for launching the instances.</p>
        pub fn set_launch_template_and_overrides(mut self, input: std::option::Option<crate::model::LaunchTemplateAndOverridesResponse>) -> Self {
            self.launch_template_and_overrides = input;
            self
        }

        /// <p>Indicates if the instance that was launched is a Spot Instance or On-Demand Instance.</p>
        pub fn lifecycle(mut self, input: crate::model::InstanceLifecycle) -> Self {
            self.lifecycle = Some(input);
            self
        }
        /// <p>Indicates if the instance that was launched is a Spot Instance or On-Demand Instance.</p>
        pub fn set_lifecycle(mut self, input: std::option::Option<crate::model::InstanceLifecycle>) -> Self {
            self.lifecycle = input;
            self
        }

        /// Appends an item to `instance_ids`.
        ///
        /// To override the contents of this collection use [`set_instance_ids`](Self::set_instance_ids).
        ///
        /// <p>The IDs of the instances.</p>
        pub fn instance_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.instance_ids.unwrap_or_default();
            v.push(input.into());
            self.instance_ids = Some(v);
            self
        }
        /// <p>The IDs of the instances.</p>
        pub fn set_instance_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.instance_ids = input;
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

        /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
        pub fn platform(mut self, input: crate::model::PlatformValues) -> Self {
            self.platform = Some(input);
            self
        }
        /// <p>The value is <code>Windows</code> for Windows instances; otherwise blank.</p>
        pub fn set_platform(mut self, input: std::option::Option<crate::model::PlatformValues>) -> Self {
            self.platform = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeFleetsInstances`](crate::model::DescribeFleetsInstances)
        pub fn build(self) -> crate::model::DescribeFleetsInstances {
            crate::model::DescribeFleetsInstances {
                launch_template_and_overrides: self.launch_template_and_overrides,
                lifecycle: self.lifecycle,
                instance_ids: self.instance_ids,
                instance_type: self.instance_type,
                platform: self.platform,
            }
        }
    }
}
impl DescribeFleetsInstances {
    /// Creates a new builder-style object to manufacture [`DescribeFleetsInstances`](crate::model::DescribeFleetsInstances)
    pub fn builder() -> crate::model::describe_fleets_instances::Builder {
        crate::model::describe_fleets_instances::Builder::default()
    }
}

/// <p>Describes an EC2 Fleet.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct FleetData {
    /// <p>The progress of the EC2 Fleet. If there is an error, the status is <code>error</code>. After all requests are placed, the status is <code>pending_fulfillment</code>. If the size of the EC2 Fleet is equal to or greater than its target capacity, the status is <code>fulfilled</code>. If the size of the EC2 Fleet is decreased, the status is <code>pending_termination</code> while instances are terminating.</p>
    pub activity_status: std::option::Option<crate::model::FleetActivityStatus>,
    /// <p>The creation date and time of the EC2 Fleet.</p>
    pub create_time: std::option::Option<smithy_types::Instant>,
    /// <p>The ID of the EC2 Fleet.</p>
    pub fleet_id: std::option::Option<std::string::String>,
    /// <p>The state of the EC2 Fleet.</p>
    pub fleet_state: std::option::Option<crate::model::FleetStateCode>,
    /// <p>Unique, case-sensitive identifier that you provide to ensure the idempotency of the request.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
    pub excess_capacity_termination_policy: std::option::Option<crate::model::FleetExcessCapacityTerminationPolicy>,
    /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
    pub fulfilled_capacity: std::option::Option<f64>,
    /// <p>The number of units fulfilled by this request compared to the set target On-Demand capacity.</p>
    pub fulfilled_on_demand_capacity: std::option::Option<f64>,
    /// <p>The launch template and overrides.</p>
    pub launch_template_configs: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateConfig>>,
    /// <p>The number of units to request.</p>
    pub target_capacity_specification: std::option::Option<crate::model::TargetCapacitySpecification>,
    /// <p>Indicates whether running instances should be terminated when the request expires.</p>
    pub terminate_instances_with_expiration: std::option::Option<bool>,
    /// <p>The type of request. Indicates whether the EC2 Fleet only <code>requests</code> the target capacity, or also attempts to <code>maintain</code> it.</p>
    pub r#type: std::option::Option<crate::model::FleetType>,
    /// <p>The start date and time of the request, in UTC format. The default is to start fulfilling the request immediately.</p>
    pub valid_from: std::option::Option<smithy_types::Instant>,
    /// <p>The end date and time of the request, in UTC format. At this point, no new instance requests are placed or able to fulfill the request.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
    pub replace_unhealthy_instances: std::option::Option<bool>,
    /// <p>The configuration of Spot Instances in an EC2 Fleet.</p>
    pub spot_options: std::option::Option<crate::model::SpotOptions>,
    /// <p>The allocation strategy of On-Demand Instances in an EC2 Fleet.</p>
    pub on_demand_options: std::option::Option<crate::model::OnDemandOptions>,
    /// <p>The tags for an EC2 Fleet resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>Information about the instances that could not be launched by the fleet.</p>
    pub errors: std::option::Option<std::vec::Vec<crate::model::DescribeFleetError>>,
    /// <p>Information about the instances that were launched by the fleet.</p>
    pub instances: std::option::Option<std::vec::Vec<crate::model::DescribeFleetsInstances>>,
}
impl FleetData {
    /// <p>The progress of the EC2 Fleet. If there is an error, the status is <code>error</code>. After all requests are placed, the status is <code>pending_fulfillment</code>. If the size of the EC2 Fleet is equal to or greater than its target capacity, the status is <code>fulfilled</code>. If the size of the EC2 Fleet is decreased, the status is <code>pending_termination</code> while instances are terminating.</p>
    pub fn activity_status(&self) -> std::option::Option<&crate::model::FleetActivityStatus> {
        self.activity_status.as_ref()
    }

    /// <p>The creation date and time of the EC2 Fleet.</p>
    pub fn create_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.create_time.as_ref()
    }

    /// <p>The ID of the EC2 Fleet.</p>
    pub fn fleet_id(&self) -> std::option::Option<&str> {
        self.fleet_id.as_deref()
    }

    /// <p>The state of the EC2 Fleet.</p>
    pub fn fleet_state(&self) -> std::option::Option<&crate::model::FleetStateCode> {
        self.fleet_state.as_ref()
    }

    /// <p>Unique, case-sensitive identifier that you provide to ensure the idempotency of the request.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
    pub fn excess_capacity_termination_policy(&self) -> std::option::Option<&crate::model::FleetExcessCapacityTerminationPolicy> {
        self.excess_capacity_termination_policy.as_ref()
    }

    /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
    pub fn fulfilled_capacity(&self) -> std::option::Option<f64> {
        self.fulfilled_capacity
    }

    /// <p>The number of units fulfilled by this request compared to the set target On-Demand capacity.</p>
    pub fn fulfilled_on_demand_capacity(&self) -> std::option::Option<f64> {
        self.fulfilled_on_demand_capacity
    }

    /// <p>The launch template and overrides.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.launch_template_configs.is_none()`.
    pub fn launch_template_configs(&self) -> &[crate::model::FleetLaunchTemplateConfig] {
        self.launch_template_configs.as_deref().unwrap_or_default()
    }

    /// <p>The number of units to request.</p>
    pub fn target_capacity_specification(&self) -> std::option::Option<&crate::model::TargetCapacitySpecification> {
        self.target_capacity_specification.as_ref()
    }

    /// <p>Indicates whether running instances should be terminated when the request expires.</p>
    pub fn terminate_instances_with_expiration(&self) -> std::option::Option<bool> {
        self.terminate_instances_with_expiration
    }

    /// <p>The type of request. Indicates whether the EC2 Fleet only <code>requests</code> the target capacity, or also attempts to <code>maintain</code> it.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::FleetType> {
        self.r#type.as_ref()
    }

    /// <p>The start date and time of the request, in UTC format. The default is to start fulfilling the request immediately.</p>
    pub fn valid_from(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_from.as_ref()
    }

    /// <p>The end date and time of the request, in UTC format. At this point, no new instance requests are placed or able to fulfill the request.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
    pub fn replace_unhealthy_instances(&self) -> std::option::Option<bool> {
        self.replace_unhealthy_instances
    }

    /// <p>The configuration of Spot Instances in an EC2 Fleet.</p>
    pub fn spot_options(&self) -> std::option::Option<&crate::model::SpotOptions> {
        self.spot_options.as_ref()
    }

    /// <p>The allocation strategy of On-Demand Instances in an EC2 Fleet.</p>
    pub fn on_demand_options(&self) -> std::option::Option<&crate::model::OnDemandOptions> {
        self.on_demand_options.as_ref()
    }

    /// <p>The tags for an EC2 Fleet resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>Information about the instances that could not be launched by the fleet.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.errors.is_none()`.
    pub fn errors(&self) -> &[crate::model::DescribeFleetError] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// <p>Information about the instances that were launched by the fleet.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.instances.is_none()`.
    pub fn instances(&self) -> &[crate::model::DescribeFleetsInstances] {
        self.instances.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for FleetData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("ActivityStatus", &self.activity_status);
        formatter.field("CreateTime", &self.create_time);
        formatter.field("FleetId", &self.fleet_id);
        formatter.enum_field("FleetState", &self.fleet_state);
        formatter.field("ClientToken", &self.client_token);
        formatter.enum_field("ExcessCapacityTerminationPolicy", &self.excess_capacity_termination_policy);
        formatter.field("FulfilledCapacity", &self.fulfilled_capacity);
        formatter.field("FulfilledOnDemandCapacity", &self.fulfilled_on_demand_capacity);
        formatter.field("LaunchTemplateConfigs", &self.launch_template_configs);
        formatter.field("TargetCapacitySpecification", &self.target_capacity_specification);
        formatter.field("TerminateInstancesWithExpiration", &self.terminate_instances_with_expiration);
        formatter.enum_field("Type", &self.r#type);
        formatter.field("ValidFrom", &self.valid_from);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.field("ReplaceUnhealthyInstances", &self.replace_unhealthy_instances);
        formatter.field("SpotOptions", &self.spot_options);
        formatter.field("OnDemandOptions", &self.on_demand_options);
        formatter.field("Tags", &self.tags);
        formatter.field("Errors", &self.errors);
        formatter.field("Instances", &self.instances);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for FleetData {
    fn eq(&self, other: &Self) -> bool {
        self.activity_status == other.activity_status
            && self.create_time == other.create_time
            && self.fleet_id == other.fleet_id
            && self.fleet_state == other.fleet_state
            && self.client_token == other.client_token
            && self.excess_capacity_termination_policy == other.excess_capacity_termination_policy
            && self.fulfilled_capacity.map(f64::to_bits) == other.fulfilled_capacity.map(f64::to_bits)
            && self.fulfilled_on_demand_capacity.map(f64::to_bits) == other.fulfilled_on_demand_capacity.map(f64::to_bits)
            && self.launch_template_configs == other.launch_template_configs
            && self.target_capacity_specification == other.target_capacity_specification
            && self.terminate_instances_with_expiration == other.terminate_instances_with_expiration
            && self.r#type == other.r#type
            && self.valid_from == other.valid_from
            && self.valid_until == other.valid_until
            && self.replace_unhealthy_instances == other.replace_unhealthy_instances
            && self.spot_options == other.spot_options
            && self.on_demand_options == other.on_demand_options
            && self.tags == other.tags
            && self.errors == other.errors
            && self.instances == other.instances
    }
}
impl std::cmp::Eq for FleetData {}
impl std::hash::Hash for FleetData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.activity_status, state);
        std::hash::Hash::hash(&self.create_time, state);
        std::hash::Hash::hash(&self.fleet_id, state);
        std::hash::Hash::hash(&self.fleet_state, state);
        std::hash::Hash::hash(&self.client_token, state);
        std::hash::Hash::hash(&self.excess_capacity_termination_policy, state);
        std::hash::Hash::hash(&self.fulfilled_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.fulfilled_on_demand_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.launch_template_configs, state);
        std::hash::Hash::hash(&self.target_capacity_specification, state);
        std::hash::Hash::hash(&self.terminate_instances_with_expiration, state);
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.valid_from, state);
        std::hash::Hash::hash(&self.valid_until, state);
        std::hash::Hash::hash(&self.replace_unhealthy_instances, state);
        std::hash::Hash::hash(&self.spot_options, state);
        std::hash::Hash::hash(&self.on_demand_options, state);
        std::hash::Hash::hash(&self.tags, state);
        std::hash::Hash::hash(&self.errors, state);
        std::hash::Hash::hash(&self.instances, state);
    }
}
/// See [`FleetData`](crate::model::FleetData)
pub mod fleet_data {
    /// A builder for [`FleetData`](crate::model::FleetData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activity_status: std::option::Option<crate::model::FleetActivityStatus>,
        pub(crate) create_time: std::option::Option<smithy_types::Instant>,
        pub(crate) fleet_id: std::option::Option<std::string::String>,
        pub(crate) fleet_state: std::option::Option<crate::model::FleetStateCode>,
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) excess_capacity_termination_policy: std::option::Option<crate::model::FleetExcessCapacityTerminationPolicy>,
        pub(crate) fulfilled_capacity: std::option::Option<f64>,
        pub(crate) fulfilled_on_demand_capacity: std::option::Option<f64>,
        pub(crate) launch_template_configs: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateConfig>>,
        pub(crate) target_capacity_specification: std::option::Option<crate::model::TargetCapacitySpecification>,
        pub(crate) terminate_instances_with_expiration: std::option::Option<bool>,
        pub(crate) r#type: std::option::Option<crate::model::FleetType>,
        pub(crate) valid_from: std::option::Option<smithy_types::Instant>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) replace_unhealthy_instances: std::option::Option<bool>,
        pub(crate) spot_options: std::option::Option<crate::model::SpotOptions>,
        pub(crate) on_demand_options: std::option::Option<crate::model::OnDemandOptions>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) errors: std::option::Option<std::vec::Vec<crate::model::DescribeFleetError>>,
        pub(crate) instances: std::option::Option<std::vec::Vec<crate::model::DescribeFleetsInstances>>,
    }
    impl Builder {
        /// <p>The progress of the EC2 Fleet. If there is an error, the status is <code>error</code>. After all requests are placed, the status is <code>pending_fulfillment</code>. If the size of the EC2 Fleet is equal to or greater than its target capacity, the status is <code>fulfilled</code>. If the size of the EC2 Fleet is decreased, the status is <code>pending_termination</code> while instances are terminating.</p>
        pub fn activity_status(mut self, input: crate::model::FleetActivityStatus) -> Self {
            self.activity_status = Some(input);
            self
        }
        /// <p>The progress of the EC2 Fleet. If there is an error, the status is <code>error</code>. After all requests are placed, the status is <code>pending_fulfillment</code>. If the size of the EC2 Fleet is equal to or greater than its target capacity, the status is <code>fulfilled</code>. If the size of the EC2 Fleet is decreased, the status is <code>pending_termination</code> while instances are terminating.</p>
        pub fn set_activity_status(mut self, input: std::option::Option<crate::model::FleetActivityStatus>) -> Self {
            self.activity_status = input;
            self
        }

        /// <p>The creation date and time of the EC2 Fleet.</p>
        pub fn create_time(mut self, input: smithy_types::Instant) -> Self {
            self.create_time = Some(input);
            self
        }
        /// <p>The creation date and time of the EC2 Fleet.</p>
        pub fn set_create_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.create_time = input;
            self
        }

        /// <p>The ID of the EC2 Fleet.</p>
        pub fn fleet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.fleet_id = Some(input.into());
            self
        }
        /// <p>The ID of the EC2 Fleet.</p>
        pub fn set_fleet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.fleet_id = input;
            self
        }

        /// <p>The state of the EC2 Fleet.</p>
        pub fn fleet_state(mut self, input: crate::model::FleetStateCode) -> Self {
            self.fleet_state = Some(input);
            self
        }
        /// <p>The state of the EC2 Fleet.</p>
        pub fn set_fleet_state(mut self, input: std::option::Option<crate::model::FleetStateCode>) -> Self {
            self.fleet_state = input;
            self
        }

        /// <p>Unique, case-sensitive identifier that you provide to ensure the idempotency of the request.</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>Unique, case-sensitive identifier that you provide to ensure the idempotency of the request.</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
        pub fn excess_capacity_termination_policy(mut self, input: crate::model::FleetExcessCapacityTerminationPolicy) -> Self {
            self.excess_capacity_termination_policy = Some(input);
            self
        }
        /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
        pub fn set_excess_capacity_termination_policy(mut self, input: std::option::Option<crate::model::FleetExcessCapacityTerminationPolicy>) -> Self {
            self.excess_capacity_termination_policy = input;
            self
        }

        /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
        pub fn fulfilled_capacity(mut self, input: f64) -> Self {
            self.fulfilled_capacity = Some(input);
            self
        }
        /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
        pub fn set_fulfilled_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.fulfilled_capacity = input;
            self
        }

        /// <p>The number of units fulfilled by this request compared to the set target On-Demand capacity.</p>
        pub fn fulfilled_on_demand_capacity(mut self, input: f64) -> Self {
            self.fulfilled_on_demand_capacity = Some(input);
            self
        }
        /// <p>The number of units fulfilled by this request compared to the set target On-Demand capacity.</p>
        pub fn set_fulfilled_on_demand_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.fulfilled_on_demand_capacity = input;
            self
        }

        /// Appends an item to `launch_template_configs`.
        ///
        /// To override the contents of this collection use [`set_launch_template_configs`](Self::set_launch_template_configs).
        ///
        /// <p>The launch template and overrides.</p>
        pub fn launch_template_configs(mut self, input: impl std::convert::Into<crate::model::FleetLaunchTemplateConfig>) -> Self {
            let mut v = self.launch_template_configs.unwrap_or_default();
            v.push(input.into());
            self.launch_template_configs = Some(v);
            self
        }
        /// <p>The launch template and overrides.</p>
        pub fn set_launch_template_configs(mut self, input: std::option::Option<std::vec::Vec<crate::model::FleetLaunchTemplateConfig>>) -> Self {
            self.launch_template_configs = input;
            self
        }

        /// <p>The number of units to request.</p>
        pub fn target_capacity_specification(mut self, input: crate::model::TargetCapacitySpecification) -> Self {
            self.target_capacity_specification = Some(input);
            self
        }
        /// <p>The number of units to request.</p>
        pub fn set_target_capacity_specification(mut self, input: std::option::Option<crate::model::TargetCapacitySpecification>) -> Self {
            self.target_capacity_specification = input;
            self
        }

        /// <p>Indicates whether running instances should be terminated when the request expires.</p>
        pub fn terminate_instances_with_expiration(mut self, input: bool) -> Self {
            self.terminate_instances_with_expiration = Some(input);
            self
        }
        /// <p>Indicates whether running instances should be terminated when the request expires.</p>
        pub fn set_terminate_instances_with_expiration(mut self, input: std::option::Option<bool>) -> Self {
            self.terminate_instances_with_expiration = input;
            self
        }

        /// <p>The type of request. Indicates whether the EC2 Fleet only <code>requests</code> the target capacity, or also attempts to <code>maintain</code> it.</p>
        pub fn r#type(mut self, input: crate::model::FleetType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of request. Indicates whether the EC2 Fleet only <code>requests</code> the target capacity, or also attempts to <code>maintain</code> it.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::FleetType>) -> Self {
            self.r#type = input;
            self
        }

        /// <p>The start date and time of the request, in UTC format. The default is to start fulfilling the request immediately.</p>
        pub fn valid_from(mut self, input: smithy_types::Instant) -> Self {
            self.valid_from = Some(input);
            self
        }
        /// <p>The start date and time of the request, in UTC format. The default is to start fulfilling the request immediately.</p>
        pub fn set_valid_from(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_from = input;
            self
        }

        /// <p>The end date and time of the request, in UTC format. At this point, no new instance requests are placed or able to fulfill the request.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date and time of the request, in UTC format. At this point, no new instance requests are placed or able to fulfill the request.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
        pub fn replace_unhealthy_instances(mut self, input: bool) -> Self {
            self.replace_unhealthy_instances = Some(input);
            self
        }
        /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
        pub fn set_replace_unhealthy_instances(mut self, input: std::option::Option<bool>) -> Self {
            self.replace_unhealthy_instances = input;
            self
        }

        /// <p>The configuration of Spot Instances in an EC2 Fleet.</p>
        pub fn spot_options(mut self, input: crate::model::SpotOptions) -> Self {
            self.spot_options = Some(input);
            self
        }
        /// <p>The configuration of Spot Instances in an EC2 Fleet.</p>
        pub fn set_spot_options(mut self, input: std::option::Option<crate::model::SpotOptions>) -> Self {
            self.spot_options = input;
            self
        }

        /// <p>The allocation strategy of On-Demand Instances in an EC2 Fleet.</p>
        pub fn on_demand_options(mut self, input: crate::model::OnDemandOptions) -> Self {
            self.on_demand_options = Some(input);
            self
        }
        /// <p>The allocation strategy of On-Demand Instances in an EC2 Fleet.</p>
        pub fn set_on_demand_options(mut self, input: std::option::Option<crate::model::OnDemandOptions>) -> Self {
            self.on_demand_options = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags for an EC2 Fleet resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>The tags for an EC2 Fleet resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// Appends an item to `errors`.
        ///
        /// To override the contents of this collection use [`set_errors`](Self::set_errors).
        ///
        /// <p>Information about the instances that could not be launched by the fleet.</p>
        pub fn errors(mut self, input: impl std::convert::Into<crate::model::DescribeFleetError>) -> Self {
            let mut v = self.errors.unwrap_or_default();
            v.push(input.into());
            self.errors = Some(v);
            self
        }
        /// <p>Information about the instances that could not be launched by the fleet.</p>
        pub fn set_errors(mut self, input: std::option::Option<std::vec::Vec<crate::model::DescribeFleetError>>) -> Self {
            self.errors = input;
            self
        }

        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>Information about the instances that were launched by the fleet.</p>
        pub fn instances(mut self, input: impl std::convert::Into<crate::model::DescribeFleetsInstances>) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input.into());
            self.instances = Some(v);
            self
        }
        /// <p>Information about the instances that were launched by the fleet.</p>
        pub fn set_instances(mut self, input: std::option::Option<std::vec::Vec<crate::model::DescribeFleetsInstances>>) -> Self {
            self.instances = input;
            self
        }
        /// Consumes the builder and constructs a [`FleetData`](crate::model::FleetData)
        pub fn build(self) -> crate::model::FleetData {
            crate::model::FleetData {
                activity_status: self.activity_status,
                create_time: self.create_time,
                fleet_id: self.fleet_id,
                fleet_state: self.fleet_state,
                client_token: self.client_token,
                excess_capacity_termination_policy: self.excess_capacity_termination_policy,
                fulfilled_capacity: self.fulfilled_capacity,
                fulfilled_on_demand_capacity: self.fulfilled_on_demand_capacity,
                launch_template_configs: self.launch_template_configs,
                target_capacity_specification: self.target_capacity_specification,
                terminate_instances_with_expiration: self.terminate_instances_with_expiration,
                r#type: self.r#type,
                valid_from: self.valid_from,
                valid_until: self.valid_until,
                replace_unhealthy_instances: self.replace_unhealthy_instances,
                spot_options: self.spot_options,
                on_demand_options: self.on_demand_options,
                tags: self.tags,
                errors: self.errors,
                instances: self.instances,
            }
        }
    }
}
impl FleetData {
    /// Creates a new builder-style object to manufacture [`FleetData`](crate::model::FleetData)
    pub fn builder() -> crate::model::fleet_data::Builder {
        crate::model::fleet_data::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetActivityStatus {
    #[allow(missing_docs)] // documentation missing in model
    Error,
    #[allow(missing_docs)] // documentation missing in model
    PendingFulfillment,
    #[allow(missing_docs)] // documentation missing in model
    PendingTermination,
    #[allow(missing_docs)] // documentation missing in model
    Fulfilled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetActivityStatus {
    fn from(s: &str) -> Self {
        match s {
            "error" => FleetActivityStatus::Error,
            "pending_fulfillment" => FleetActivityStatus::PendingFulfillment,
            "pending_termination" => FleetActivityStatus::PendingTermination,
            "fulfilled" => FleetActivityStatus::Fulfilled,
            other => FleetActivityStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetActivityStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetActivityStatus::from(s))
    }
}
impl FleetActivityStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetActivityStatus::Error => "error",
            FleetActivityStatus::PendingFulfillment => "pending_fulfillment",
            FleetActivityStatus::PendingTermination => "pending_termination",
            FleetActivityStatus::Fulfilled => "fulfilled",
            FleetActivityStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "error",
            "pending_fulfillment",
            "pending_termination",
            "fulfilled",
        ]
    }
}
impl AsRef<str> for FleetActivityStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetStateCode {
    #[allow(missing_docs)] // documentation missing in model
    Submitted,
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Deleted,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    #[allow(missing_docs)] // documentation missing in model
    DeletedRunning,
    #[allow(missing_docs)] // documentation missing in model
    DeletedTerminating,
    #[allow(missing_docs)] // documentation missing in model
    Modifying,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetStateCode {
    fn from(s: &str) -> Self {
        match s {
            "submitted" => FleetStateCode::Submitted,
            "active" => FleetStateCode::Active,
            "deleted" => FleetStateCode::Deleted,
            "failed" => FleetStateCode::Failed,
            "deleted_running" => FleetStateCode::DeletedRunning,
            "deleted_terminating" => FleetStateCode::DeletedTerminating,
            "modifying" => FleetStateCode::Modifying,
            other => FleetStateCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetStateCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetStateCode::from(s))
    }
}
impl FleetStateCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetStateCode::Submitted => "submitted",
            FleetStateCode::Active => "active",
            FleetStateCode::Deleted => "deleted",
            FleetStateCode::Failed => "failed",
            FleetStateCode::DeletedRunning => "deleted_running",
            FleetStateCode::DeletedTerminating => "deleted_terminating",
            FleetStateCode::Modifying => "modifying",
            FleetStateCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "submitted",
            "active",
            "deleted",
            "failed",
            "deleted_running",
            "deleted_terminating",
            "modifying",
        ]
    }
}
impl AsRef<str> for FleetStateCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetExcessCapacityTerminationPolicy {
    #[allow(missing_docs)] // documentation missing in model
    NoTermination,
    #[allow(missing_docs)] // documentation missing in model
    Termination,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetExcessCapacityTerminationPolicy {
    fn from(s: &str) -> Self {
        match s {
            "no-termination" => FleetExcessCapacityTerminationPolicy::NoTermination,
            "termination" => FleetExcessCapacityTerminationPolicy::Termination,
            other => FleetExcessCapacityTerminationPolicy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetExcessCapacityTerminationPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetExcessCapacityTerminationPolicy::from(s))
    }
}
impl FleetExcessCapacityTerminationPolicy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetExcessCapacityTerminationPolicy::NoTermination => "no-termination",
            FleetExcessCapacityTerminationPolicy::Termination => "termination",
            FleetExcessCapacityTerminationPolicy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "no-termination",
            "termination",
        ]
    }
}
impl AsRef<str> for FleetExcessCapacityTerminationPolicy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FleetType {
    #[allow(missing_docs)] // documentation missing in model
    Request,
    #[allow(missing_docs)] // documentation missing in model
    Maintain,
    #[allow(missing_docs)] // documentation missing in model
    Instant,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FleetType {
    fn from(s: &str) -> Self {
        match s {
            "request" => FleetType::Request,
            "maintain" => FleetType::Maintain,
            "instant" => FleetType::Instant,
            other => FleetType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FleetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FleetType::from(s))
    }
}
impl FleetType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            FleetType::Request => "request",
            FleetType::Maintain => "maintain",
            FleetType::Instant => "instant",
            FleetType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "request",
            "maintain",
            "instant",
        ]
    }
}
impl AsRef<str> for FleetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes whether monitoring is enabled.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotFleetMonitoring {
    /// <p>Enables monitoring for the instance.</p>
    pub enabled: std::option::Option<bool>,
}
impl SpotFleetMonitoring {
    /// <p>Enables monitoring for the instance.</p>
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
}
impl std::fmt::Debug for SpotFleetMonitoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Enabled", &self.enabled);
        formatter.finish()
    }
}
/// See [`SpotFleetMonitoring`](crate::model::SpotFleetMonitoring)
pub mod spot_fleet_monitoring {
    /// A builder for [`SpotFleetMonitoring`](crate::model::SpotFleetMonitoring)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Enables monitoring for the instance.</p>
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        /// <p>Enables monitoring for the instance.</p>
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotFleetMonitoring`](crate::model::SpotFleetMonitoring)
        pub fn build(self) -> crate::model::SpotFleetMonitoring {
            crate::model::SpotFleetMonitoring {
                enabled: self.enabled,
            }
        }
    }
}
impl SpotFleetMonitoring {
    /// Creates a new builder-style object to manufacture [`SpotFleetMonitoring`](crate::model::SpotFleetMonitoring)
    pub fn builder() -> crate::model::spot_fleet_monitoring::Builder {
        crate::model::spot_fleet_monitoring::Builder::default()
    }
}

/// <p>Describes Spot Instance placement.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotPlacement {
    /// <p>The Availability Zone. [Spot Fleet only] To specify multiple Availability Zones, separate them using commas; for example, "us-west-2a, us-west-2b".</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The name of the placement group.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for Spot Instances.</p>
    pub tenancy: std::option::Option<crate::model::Tenancy>,
}
impl SpotPlacement {
    /// <p>The Availability Zone. [Spot Fleet only] To specify multiple Availability Zones, separate them using commas; for example, "us-west-2a, us-west-2b".</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The name of the placement group.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for Spot Instances.</p>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.tenancy.as_ref()
    }
}
impl std::fmt::Debug for SpotPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("GroupName", &self.group_name);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.finish()
    }
}
/// See [`SpotPlacement`](crate::model::SpotPlacement)
pub mod spot_placement {
    /// A builder for [`SpotPlacement`](crate::model::SpotPlacement)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::Tenancy>,
    }
    impl Builder {
        /// <p>The Availability Zone. [Spot Fleet only] To specify multiple Availability Zones, separate them using commas; for example, "us-west-2a, us-west-2b".</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone. [Spot Fleet only] To specify multiple Availability Zones, separate them using commas; for example, "us-west-2a, us-west-2b".</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>The name of the placement group.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the placement group.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for Spot Instances.</p>
        pub fn tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware. The <code>host</code> tenancy is not supported for Spot Instances.</p>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.tenancy = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotPlacement`](crate::model::SpotPlacement)
        pub fn build(self) -> crate::model::SpotPlacement {
            crate::model::SpotPlacement {
                availability_zone: self.availability_zone,
                group_name: self.group_name,
                tenancy: self.tenancy,
            }
        }
    }
}
impl SpotPlacement {
    /// Creates a new builder-style object to manufacture [`SpotPlacement`](crate::model::SpotPlacement)
    pub fn builder() -> crate::model::spot_placement::Builder {
        crate::model::spot_placement::Builder::default()
    }
}

/// <p>The tags for a Spot Fleet resource.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotFleetTagSpecification {
    /// <p>The type of resource. Currently, the only resource type that is supported is <code>instance</code>.</p>
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    /// <p>The tags.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl SpotFleetTagSpecification {
    /// <p>The type of resource. Currently, the only resource type that is supported is <code>instance</code>.</p>
    pub fn resource_type(&self) -> std::option::Option<&crate::model::ResourceType> {
        self.resource_type.as_ref()
    }

    /// <p>The tags.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for SpotFleetTagSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("ResourceType", &self.resource_type);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`SpotFleetTagSpecification`](crate::model::SpotFleetTagSpecification)
pub mod spot_fleet_tag_specification {
    /// A builder for [`SpotFleetTagSpecification`](crate::model::SpotFleetTagSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The type of resource. Currently, the only resource type that is supported is <code>instance</code>.</p>
        pub fn resource_type(mut self, input: crate::model::ResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        /// <p>The type of resource. Currently, the only resource type that is supported is <code>instance</code>.</p>
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::ResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>The tags.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotFleetTagSpecification`](crate::model::SpotFleetTagSpecification)
        pub fn build(self) -> crate::model::SpotFleetTagSpecification {
            crate::model::SpotFleetTagSpecification {
                resource_type: self.resource_type,
                tags: self.tags,
            }
        }
    }
}
impl SpotFleetTagSpecification {
    /// Creates a new builder-style object to manufacture [`SpotFleetTagSpecification`](crate::model::SpotFleetTagSpecification)
    pub fn builder() -> crate::model::spot_fleet_tag_specification::Builder {
        crate::model::spot_fleet_tag_specification::Builder::default()
    }
}

/// <p>Describes the launch specification for one or more Spot Instances. If you include On-Demand capacity in your fleet request or want to specify an EFA network device, you can't use <code>SpotFleetLaunchSpecification</code>; you must use <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_LaunchTemplateConfig.html">LaunchTemplateConfig</a>.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct SpotFleetLaunchSpecification {
    /// <p>One or more security groups.</p>
    pub security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>Deprecated.</p>
    pub addressing_type: std::option::Option<std::string::String>,
    /// <p>One or more block device mapping entries.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
    /// <p>The ID of the AMI.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The kernel associated with this instance, if applicable.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>The name of the key pair.</p>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::SpotFleetMonitoring>,
    /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
    /// <p>The placement information.</p>
    pub placement: std::option::Option<crate::model::SpotPlacement>,
    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub ramdisk_id: std::option::Option<std::string::String>,
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. If this value is not specified, the default is the Spot price specified for the fleet.</p>
    pub spot_price: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The Base64-encoded user data for the instance.</p>
    pub user_data: std::option::Option<std::string::String>,
    /// <p>The number of units provided by the specified instance type. These are the same units that you chose to set the target capacity in terms of instances, or a performance characteristic such as vCPUs, memory, or I/O.</p>
    pub weighted_capacity: std::option::Option<f64>,
    /// <p>The tags to apply during creation.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::SpotFleetTagSpecification>>,
}
impl SpotFleetLaunchSpecification {
    /// <p>One or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[crate::model::GroupIdentifier] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>Deprecated.</p>
    pub fn addressing_type(&self) -> std::option::Option<&str> {
        self.addressing_type.as_deref()
    }

    /// <p>One or more block device mapping entries.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::BlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::IamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>The ID of the AMI.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The kernel associated with this instance, if applicable.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>The name of the key pair.</p>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::SpotFleetMonitoring> {
        self.monitoring.as_ref()
    }

    /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::InstanceNetworkInterfaceSpecification] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The placement information.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::SpotPlacement> {
        self.placement.as_ref()
    }

    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub fn ramdisk_id(&self) -> std::option::Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. If this value is not specified, the default is the Spot price specified for the fleet.</p>
    pub fn spot_price(&self) -> std::option::Option<&str> {
        self.spot_price.as_deref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The Base64-encoded user data for the instance.</p>
    pub fn user_data(&self) -> std::option::Option<&str> {
        self.user_data.as_deref()
    }

    /// <p>The number of units provided by the specified instance type. These are the same units that you chose to set the target capacity in terms of instances, or a performance characteristic such as vCPUs, memory, or I/O.</p>
    pub fn weighted_capacity(&self) -> std::option::Option<f64> {
        self.weighted_capacity
    }

    /// <p>The tags to apply during creation.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::SpotFleetTagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for SpotFleetLaunchSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("AddressingType", &self.addressing_type);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.field("ImageId", &self.image_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("KeyName", &self.key_name);
        formatter.field("Monitoring", &self.monitoring);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("Placement", &self.placement);
        formatter.field("RamdiskId", &self.ramdisk_id);
        formatter.field("SpotPrice", &self.spot_price);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("UserData", &self.user_data);
        formatter.field("WeightedCapacity", &self.weighted_capacity);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for SpotFleetLaunchSpecification {
    fn eq(&self, other: &Self) -> bool {
        self.security_groups == other.security_groups
            && self.addressing_type == other.addressing_type
            && self.block_device_mappings == other.block_device_mappings
            && self.ebs_optimized == other.ebs_optimized
            && self.iam_instance_profile == other.iam_instance_profile
            && self.image_id == other.image_id
            && self.instance_type == other.instance_type
            && self.kernel_id == other.kernel_id
            && self.key_name == other.key_name
            && self.monitoring == other.monitoring
            && self.network_interfaces == other.network_interfaces
            && self.placement == other.placement
            && self.ramdisk_id == other.ramdisk_id
            && self.spot_price == other.spot_price
            && self.subnet_id == other.subnet_id
            && self.user_data == other.user_data
            && self.weighted_capacity.map(f64::to_bits) == other.weighted_capacity.map(f64::to_bits)
            && self.tag_specifications == other.tag_specifications
    }
}
impl std::cmp::Eq for SpotFleetLaunchSpecification {}
impl std::hash::Hash for SpotFleetLaunchSpecification {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.security_groups, state);
        std::hash::Hash::hash(&self.addressing_type, state);
        std::hash::Hash::hash(&self.block_device_mappings, state);
        std::hash::Hash::hash(&self.ebs_optimized, state);
        std::hash::Hash::hash(&self.iam_instance_profile, state);
        std::hash::Hash::hash(&self.image_id, state);
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.kernel_id, state);
        std::hash::Hash::hash(&self.key_name, state);
        std::hash::Hash::hash(&self.monitoring, state);
        std::hash::Hash::hash(&self.network_interfaces, state);
        std::hash::Hash::hash(&self.placement, state);
        std::hash::Hash::hash(&self.ramdisk_id, state);
        std::hash::Hash::hash(&self.spot_price, state);
        std::hash::Hash::hash(&self.subnet_id, state);
        std::hash::Hash::hash(&self.user_data, state);
        std::hash::Hash::hash(&self.weighted_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.tag_specifications, state);
    }
}
/// See [`SpotFleetLaunchSpecification`](crate::model::SpotFleetLaunchSpecification)
pub mod spot_fleet_launch_specification {
    /// A builder for [`SpotFleetLaunchSpecification`](crate::model::SpotFleetLaunchSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) addressing_type: std::option::Option<std::string::String>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) monitoring: std::option::Option<crate::model::SpotFleetMonitoring>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
        pub(crate) placement: std::option::Option<crate::model::SpotPlacement>,
        pub(crate) ramdisk_id: std::option::Option<std::string::String>,
        pub(crate) spot_price: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) user_data: std::option::Option<std::string::String>,
        pub(crate) weighted_capacity: std::option::Option<f64>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::SpotFleetTagSpecification>>,
    }
    impl Builder {
        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>One or more security groups.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>One or more security groups.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>Deprecated.</p>
        pub fn addressing_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.addressing_type = Some(input.into());
            self
        }
        /// <p>Deprecated.</p>
        pub fn set_addressing_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.addressing_type = input;
            self
        }

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

        /// <p>The monitoring for the instance.</p>
        pub fn monitoring(mut self, input: crate::model::SpotFleetMonitoring) -> Self {
            self.monitoring = Some(input);
            self
        }
        /// <p>The monitoring for the instance.</p>
        pub fn set_monitoring(mut self, input: std::option::Option<crate::model::SpotFleetMonitoring>) -> Self {
            self.monitoring = input;
            self
        }

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::InstanceNetworkInterfaceSpecification>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>) -> Self {
            self.network_interfaces = input;
            self
        }

        /// <p>The placement information.</p>
        pub fn placement(mut self, input: crate::model::SpotPlacement) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The placement information.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::SpotPlacement>) -> Self {
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

        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. If this value is not specified, the default is the Spot price specified for the fleet.</p>
        pub fn spot_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_price = Some(input.into());
            self
        }
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. If this value is not specified, the default is the Spot price specified for the fleet.</p>
        pub fn set_spot_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_price = input;
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

        /// <p>The Base64-encoded user data for the instance.</p>
        pub fn user_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_data = Some(input.into());
            self
        }
        /// <p>The Base64-encoded user data for the instance.</p>
        pub fn set_user_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_data = input;
            self
        }

        /// <p>The number of units provided by the specified instance type. These are the same units that you chose to set the target capacity in terms of instances, or a performance characteristic such as vCPUs, memory, or I/O.</p>
        pub fn weighted_capacity(mut self, input: f64) -> Self {
            self.weighted_capacity = Some(input);
            self
        }
        /// <p>The number of units provided by the specified instance type. These are the same units that you chose to set the target capacity in terms of instances, or a performance characteristic such as vCPUs, memory, or I/O.</p>
        pub fn set_weighted_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.weighted_capacity = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply during creation.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::SpotFleetTagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply during creation.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::SpotFleetTagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotFleetLaunchSpecification`](crate::model::SpotFleetLaunchSpecification)
        pub fn build(self) -> crate::model::SpotFleetLaunchSpecification {
            crate::model::SpotFleetLaunchSpecification {
                security_groups: self.security_groups,
                addressing_type: self.addressing_type,
                block_device_mappings: self.block_device_mappings,
                ebs_optimized: self.ebs_optimized,
                iam_instance_profile: self.iam_instance_profile,
                image_id: self.image_id,
                instance_type: self.instance_type,
                kernel_id: self.kernel_id,
                key_name: self.key_name,
                monitoring: self.monitoring,
                network_interfaces: self.network_interfaces,
                placement: self.placement,
                ramdisk_id: self.ramdisk_id,
                spot_price: self.spot_price,
                subnet_id: self.subnet_id,
                user_data: self.user_data,
                weighted_capacity: self.weighted_capacity,
                tag_specifications: self.tag_specifications,
            }
        }
    }
}
impl SpotFleetLaunchSpecification {
    /// Creates a new builder-style object to manufacture [`SpotFleetLaunchSpecification`](crate::model::SpotFleetLaunchSpecification)
    pub fn builder() -> crate::model::spot_fleet_launch_specification::Builder {
        crate::model::spot_fleet_launch_specification::Builder::default()
    }
}

/// <p>Describes overrides for a launch template.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct LaunchTemplateOverrides {
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub spot_price: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The number of units provided by the specified instance type.</p>
    pub weighted_capacity: std::option::Option<f64>,
    /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
    pub priority: std::option::Option<f64>,
}
impl LaunchTemplateOverrides {
    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
    pub fn spot_price(&self) -> std::option::Option<&str> {
        self.spot_price.as_deref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The number of units provided by the specified instance type.</p>
    pub fn weighted_capacity(&self) -> std::option::Option<f64> {
        self.weighted_capacity
    }

    /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
    pub fn priority(&self) -> std::option::Option<f64> {
        self.priority
    }
}
impl std::fmt::Debug for LaunchTemplateOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("SpotPrice", &self.spot_price);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("WeightedCapacity", &self.weighted_capacity);
        formatter.field("Priority", &self.priority);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for LaunchTemplateOverrides {
    fn eq(&self, other: &Self) -> bool {
        self.instance_type == other.instance_type
            && self.spot_price == other.spot_price
            && self.subnet_id == other.subnet_id
            && self.availability_zone == other.availability_zone
            && self.weighted_capacity.map(f64::to_bits) == other.weighted_capacity.map(f64::to_bits)
            && self.priority.map(f64::to_bits) == other.priority.map(f64::to_bits)
    }
}
impl std::cmp::Eq for LaunchTemplateOverrides {}
impl std::hash::Hash for LaunchTemplateOverrides {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.spot_price, state);
        std::hash::Hash::hash(&self.subnet_id, state);
        std::hash::Hash::hash(&self.availability_zone, state);
        std::hash::Hash::hash(&self.weighted_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.priority.map(f64::to_bits), state);
    }
}
/// See [`LaunchTemplateOverrides`](crate::model::LaunchTemplateOverrides)
pub mod launch_template_overrides {
    /// A builder for [`LaunchTemplateOverrides`](crate::model::LaunchTemplateOverrides)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) spot_price: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) weighted_capacity: std::option::Option<f64>,
        pub(crate) priority: std::option::Option<f64>,
    }
    impl Builder {
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

        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn spot_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_price = Some(input.into());
            self
        }
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance.</p>
        pub fn set_spot_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_price = input;
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

        /// <p>The number of units provided by the specified instance type.</p>
        pub fn weighted_capacity(mut self, input: f64) -> Self {
            self.weighted_capacity = Some(input);
            self
        }
        /// <p>The number of units provided by the specified instance type.</p>
        pub fn set_weighted_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.weighted_capacity = input;
            self
        }

        /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
        pub fn priority(mut self, input: f64) -> Self {
            self.priority = Some(input);
            self
        }
        /// <p>The priority for the launch template override. If multiple overrides match, the one with the lowest number is used first.</p>
        pub fn set_priority(mut self, input: std::option::Option<f64>) -> Self {
            self.priority = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateOverrides`](crate::model::LaunchTemplateOverrides)
        pub fn build(self) -> crate::model::LaunchTemplateOverrides {
            crate::model::LaunchTemplateOverrides {
                instance_type: self.instance_type,
                spot_price: self.spot_price,
                subnet_id: self.subnet_id,
                availability_zone: self.availability_zone,
                weighted_capacity: self.weighted_capacity,
                priority: self.priority,
            }
        }
    }
}
impl LaunchTemplateOverrides {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateOverrides`](crate::model::LaunchTemplateOverrides)
    pub fn builder() -> crate::model::launch_template_overrides::Builder {
        crate::model::launch_template_overrides::Builder::default()
    }
}

/// <p>Describes a launch template and overrides.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateConfig {
    /// <p>The launch template.</p>
    pub launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    pub overrides: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateOverrides>>,
}
impl LaunchTemplateConfig {
    /// <p>The launch template.</p>
    pub fn launch_template_specification(&self) -> std::option::Option<&crate::model::FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.overrides.is_none()`.
    pub fn overrides(&self) -> &[crate::model::LaunchTemplateOverrides] {
        self.overrides.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for LaunchTemplateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LaunchTemplateSpecification", &self.launch_template_specification);
        formatter.field("Overrides", &self.overrides);
        formatter.finish()
    }
}
/// See [`LaunchTemplateConfig`](crate::model::LaunchTemplateConfig)
pub mod launch_template_config {
    /// A builder for [`LaunchTemplateConfig`](crate::model::LaunchTemplateConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) launch_template_specification: std::option::Option<crate::model::FleetLaunchTemplateSpecification>,
        pub(crate) overrides: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateOverrides>>,
    }
    impl Builder {
        /// <p>The launch template.</p>
        pub fn launch_template_specification(mut self, input: crate::model::FleetLaunchTemplateSpecification) -> Self {
            self.launch_template_specification = Some(input);
            self
        }
        /// <p>The launch template.</p>
        pub fn set_launch_template_specification(mut self, input: std::option::Option<crate::model::FleetLaunchTemplateSpecification>) -> Self {
            self.launch_template_specification = input;
            self
        }

        /// Appends an item to `overrides`.
        ///
        /// To override the contents of this collection use [`set_overrides`](Self::set_overrides).
        ///
        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn overrides(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateOverrides>) -> Self {
            let mut v = self.overrides.unwrap_or_default();
            v.push(input.into());
            self.overrides = Some(v);
            self
        }
        /// <p>Any parameters that you specify override the same parameters in the launch template.</p>
        pub fn set_overrides(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateOverrides>>) -> Self {
            self.overrides = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateConfig`](crate::model::LaunchTemplateConfig)
        pub fn build(self) -> crate::model::LaunchTemplateConfig {
            crate::model::LaunchTemplateConfig {
                launch_template_specification: self.launch_template_specification,
                overrides: self.overrides,
            }
        }
    }
}
impl LaunchTemplateConfig {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateConfig`](crate::model::LaunchTemplateConfig)
    pub fn builder() -> crate::model::launch_template_config::Builder {
        crate::model::launch_template_config::Builder::default()
    }
}

/// <p>Describes a Classic Load Balancer.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ClassicLoadBalancer {
    /// <p>The name of the load balancer.</p>
    pub name: std::option::Option<std::string::String>,
}
impl ClassicLoadBalancer {
    /// <p>The name of the load balancer.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for ClassicLoadBalancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Name", &self.name);
        formatter.finish()
    }
}
/// See [`ClassicLoadBalancer`](crate::model::ClassicLoadBalancer)
pub mod classic_load_balancer {
    /// A builder for [`ClassicLoadBalancer`](crate::model::ClassicLoadBalancer)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of the load balancer.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the load balancer.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`ClassicLoadBalancer`](crate::model::ClassicLoadBalancer)
        pub fn build(self) -> crate::model::ClassicLoadBalancer {
            crate::model::ClassicLoadBalancer {
                name: self.name,
            }
        }
    }
}
impl ClassicLoadBalancer {
    /// Creates a new builder-style object to manufacture [`ClassicLoadBalancer`](crate::model::ClassicLoadBalancer)
    pub fn builder() -> crate::model::classic_load_balancer::Builder {
        crate::model::classic_load_balancer::Builder::default()
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
pub struct ClassicLoadBalancersConfig {
    /// <p>One or more Classic Load Balancers.</p>
    pub classic_load_balancers: std::option::Option<std::vec::Vec<crate::model::ClassicLoadBalancer>>,
}
impl ClassicLoadBalancersConfig {
    /// <p>One or more Classic Load Balancers.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.classic_load_balancers.is_none()`.
    pub fn classic_load_balancers(&self) -> &[crate::model::ClassicLoadBalancer] {
        self.classic_load_balancers.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for ClassicLoadBalancersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ClassicLoadBalancers", &self.classic_load_balancers);
        formatter.finish()
    }
}
/// See [`ClassicLoadBalancersConfig`](crate::model::ClassicLoadBalancersConfig)
pub mod classic_load_balancers_config {
    /// A builder for [`ClassicLoadBalancersConfig`](crate::model::ClassicLoadBalancersConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) classic_load_balancers: std::option::Option<std::vec::Vec<crate::model::ClassicLoadBalancer>>,
    }
    impl Builder {
        /// Appends an item to `classic_load_balancers`.
        ///
        /// To override the contents of this collection use [`set_classic_load_balancers`](Self::set_classic_load_balancers).
        ///
        /// <p>One or more Classic Load Balancers.</p>
        pub fn classic_load_balancers(mut self, input: impl std::convert::Into<crate::model::ClassicLoadBalancer>) -> Self {
            let mut v = self.classic_load_balancers.unwrap_or_default();
            v.push(input.into());
            self.classic_load_balancers = Some(v);
            self
        }
        /// <p>One or more Classic Load Balancers.</p>
        pub fn set_classic_load_balancers(mut self, input: std::option::Option<std::vec::Vec<crate::model::ClassicLoadBalancer>>) -> Self {
            self.classic_load_balancers = input;
            self
        }
        /// Consumes the builder and constructs a [`ClassicLoadBalancersConfig`](crate::model::ClassicLoadBalancersConfig)
        pub fn build(self) -> crate::model::ClassicLoadBalancersConfig {
            crate::model::ClassicLoadBalancersConfig {
                classic_load_balancers: self.classic_load_balancers,
            }
        }
    }
}
impl ClassicLoadBalancersConfig {
    /// Creates a new builder-style object to manufacture [`ClassicLoadBalancersConfig`](crate::model::ClassicLoadBalancersConfig)
    pub fn builder() -> crate::model::classic_load_balancers_config::Builder {
        crate::model::classic_load_balancers_config::Builder::default()
    }
}

/// <p>Describes a load balancer target group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct TargetGroup {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    pub arn: std::option::Option<std::string::String>,
}
impl TargetGroup {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
}
impl std::fmt::Debug for TargetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Arn", &self.arn);
        formatter.finish()
    }
}
/// See [`TargetGroup`](crate::model::TargetGroup)
pub mod target_group {
    /// A builder for [`TargetGroup`](crate::model::TargetGroup)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the target group.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the target group.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// Consumes the builder and constructs a [`TargetGroup`](crate::model::TargetGroup)
        pub fn build(self) -> crate::model::TargetGroup {
            crate::model::TargetGroup {
                arn: self.arn,
            }
        }
    }
}
impl TargetGroup {
    /// Creates a new builder-style object to manufacture [`TargetGroup`](crate::model::TargetGroup)
    pub fn builder() -> crate::model::target_group::Builder {
        crate::model::target_group::Builder::default()
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
pub struct TargetGroupsConfig {
    /// <p>One or more target groups.</p>
    pub target_groups: std::option::Option<std::vec::Vec<crate::model::TargetGroup>>,
}
impl TargetGroupsConfig {
    /// <p>One or more target groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.target_groups.is_none()`.
    pub fn target_groups(&self) -> &[crate::model::TargetGroup] {
        self.target_groups.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for TargetGroupsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("TargetGroups", &self.target_groups);
        formatter.finish()
    }
}
/// See [`TargetGroupsConfig`](crate::model::TargetGroupsConfig)
pub mod target_groups_config {
    /// A builder for [`TargetGroupsConfig`](crate::model::TargetGroupsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) target_groups: std::option::Option<std::vec::Vec<crate::model::TargetGroup>>,
    }
    impl Builder {
        /// Appends an item to `target_groups`.
        ///
        /// To override the contents of this collection use [`set_target_groups`](Self::set_target_groups).
        ///
        /// <p>One or more target groups.</p>
        pub fn target_groups(mut self, input: impl std::convert::Into<crate::model::TargetGroup>) -> Self {
            let mut v = self.target_groups.unwrap_or_default();
            v.push(input.into());
            self.target_groups = Some(v);
            self
        }
        /// <p>One or more target groups.</p>
        pub fn set_target_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::TargetGroup>>) -> Self {
            self.target_groups = input;
            self
        }
        /// Consumes the builder and constructs a [`TargetGroupsConfig`](crate::model::TargetGroupsConfig)
        pub fn build(self) -> crate::model::TargetGroupsConfig {
            crate::model::TargetGroupsConfig {
                target_groups: self.target_groups,
            }
        }
    }
}
impl TargetGroupsConfig {
    /// Creates a new builder-style object to manufacture [`TargetGroupsConfig`](crate::model::TargetGroupsConfig)
    pub fn builder() -> crate::model::target_groups_config::Builder {
        crate::model::target_groups_config::Builder::default()
    }
}

/// <p>Describes the Classic Load Balancers and target groups to attach to a Spot Fleet request.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LoadBalancersConfig {
    /// <p>The Classic Load Balancers.</p>
    pub classic_load_balancers_config: std::option::Option<crate::model::ClassicLoadBalancersConfig>,
    /// <p>The target groups.</p>
    pub target_groups_config: std::option::Option<crate::model::TargetGroupsConfig>,
}
impl LoadBalancersConfig {
    /// <p>The Classic Load Balancers.</p>
    pub fn classic_load_balancers_config(&self) -> std::option::Option<&crate::model::ClassicLoadBalancersConfig> {
        self.classic_load_balancers_config.as_ref()
    }

    /// <p>The target groups.</p>
    pub fn target_groups_config(&self) -> std::option::Option<&crate::model::TargetGroupsConfig> {
        self.target_groups_config.as_ref()
    }
}
impl std::fmt::Debug for LoadBalancersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ClassicLoadBalancersConfig", &self.classic_load_balancers_config);
        formatter.field("TargetGroupsConfig", &self.target_groups_config);
        formatter.finish()
    }
}
/// See [`LoadBalancersConfig`](crate::model::LoadBalancersConfig)
pub mod load_balancers_config {
    /// A builder for [`LoadBalancersConfig`](crate::model::LoadBalancersConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) classic_load_balancers_config: std::option::Option<crate::model::ClassicLoadBalancersConfig>,
        pub(crate) target_groups_config: std::option::Option<crate::model::TargetGroupsConfig>,
    }
    impl Builder {
        /// <p>The Classic Load Balancers.</p>
        pub fn classic_load_balancers_config(mut self, input: crate::model::ClassicLoadBalancersConfig) -> Self {
            self.classic_load_balancers_config = Some(input);
            self
        }
        /// <p>The Classic Load Balancers.</p>
        pub fn set_classic_load_balancers_config(mut self, input: std::option::Option<crate::model::ClassicLoadBalancersConfig>) -> Self {
            self.classic_load_balancers_config = input;
            self
        }

        /// <p>The target groups.</p>
        pub fn target_groups_config(mut self, input: crate::model::TargetGroupsConfig) -> Self {
            self.target_groups_config = Some(input);
            self
        }
        /// <p>The target groups.</p>
        pub fn set_target_groups_config(mut self, input: std::option::Option<crate::model::TargetGroupsConfig>) -> Self {
            self.target_groups_config = input;
            self
        }
        /// Consumes the builder and constructs a [`LoadBalancersConfig`](crate::model::LoadBalancersConfig)
        pub fn build(self) -> crate::model::LoadBalancersConfig {
            crate::model::LoadBalancersConfig {
                classic_load_balancers_config: self.classic_load_balancers_config,
                target_groups_config: self.target_groups_config,
            }
        }
    }
}
impl LoadBalancersConfig {
    /// Creates a new builder-style object to manufacture [`LoadBalancersConfig`](crate::model::LoadBalancersConfig)
    pub fn builder() -> crate::model::load_balancers_config::Builder {
        crate::model::load_balancers_config::Builder::default()
    }
}

/// <p>Describes the configuration of a Spot Fleet request.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::default::Default)]
pub struct SpotFleetRequestConfigData {
    /// <p>The strategy that determines how to allocate the target capacity across the Spot Instance pools.</p>
    pub allocation_strategy: std::option::Option<crate::model::AllocationStrategy>,
    /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
    pub on_demand_allocation_strategy: std::option::Option<crate::model::OnDemandAllocationStrategy>,
    /// <p>A unique, case-sensitive identifier that you provide to ensure the idempotency of your listings. This helps to avoid duplicate listings.</p>
    pub client_token: std::option::Option<std::string::String>,
    /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
    pub excess_capacity_termination_policy: std::option::Option<crate::model::ExcessCapacityTerminationPolicy>,
    /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
    pub fulfilled_capacity: std::option::Option<f64>,
    /// <p>The number of On-Demand units fulfilled by this request compared to the set target On-Demand capacity.</p>
    pub on_demand_fulfilled_capacity: std::option::Option<f64>,
    /// <p>The Amazon Resource Name (ARN) of an AWS Identity and Access Management (IAM) role that grants the Spot Fleet the permission to request, launch, terminate, and tag instances on your behalf.</p>
    pub iam_fleet_role: std::option::Option<std::string::String>,
    /// <p>The launch specifications for the Spot Fleet request.</p>
    pub launch_specifications: std::option::Option<std::vec::Vec<crate::model::SpotFleetLaunchSpecification>>,
    /// <p>The launch template and overrides.</p>
    pub launch_template_configs: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateConfig>>,
    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. The default is the On-Demand price.</p>
    pub spot_price: std::option::Option<std::string::String>,
    /// <p>The number of units to request for the Spot Fleet. You can choose to set the target capacity in terms of instances or a performance characteristic that is important to your application workload, such as vCPUs, memory, or I/O.</p>
    pub target_capacity: std::option::Option<i32>,
    /// <p>The number of On-Demand units to request.</p>
    pub on_demand_target_capacity: std::option::Option<i32>,
    /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
    pub on_demand_max_total_price: std::option::Option<std::string::String>,
    /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
    pub spot_max_total_price: std::option::Option<std::string::String>,
    /// <p>Indicates whether running instances should be terminated when the request expires.</p>
    pub terminate_instances_with_expiration: std::option::Option<bool>,
    /// <p>The type of request. Indicates whether the Spot Fleet only requests the target capacity or also attempts to maintain it.</p>
    pub r#type: std::option::Option<crate::model::FleetType>,
    /// <p>The start date and time of the request, in UTC format. By default, Amazon EC2 starts fulfilling the request immediately.</p>
    pub valid_from: std::option::Option<smithy_types::Instant>,
    /// <p>The end date and time of the request, in UTC format. After the end date and time, no new Spot Instance requests are placed or able to fulfill the request.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
    pub replace_unhealthy_instances: std::option::Option<bool>,
    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
    /// <p>One or more Classic Load Balancers and target groups to attach to the Spot Fleet request.</p>
    pub load_balancers_config: std::option::Option<crate::model::LoadBalancersConfig>,
    /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
    pub instance_pools_to_use_count: std::option::Option<i32>,
    /// <p>The key-value pair for tagging the Spot Fleet request on creation.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
}
impl SpotFleetRequestConfigData {
    /// <p>The strategy that determines how to allocate the target capacity across the Spot Instance pools.</p>
    pub fn allocation_strategy(&self) -> std::option::Option<&crate::model::AllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
    pub fn on_demand_allocation_strategy(&self) -> std::option::Option<&crate::model::OnDemandAllocationStrategy> {
        self.on_demand_allocation_strategy.as_ref()
    }

    /// <p>A unique, case-sensitive identifier that you provide to ensure the idempotency of your listings. This helps to avoid duplicate listings.</p>
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
    pub fn excess_capacity_termination_policy(&self) -> std::option::Option<&crate::model::ExcessCapacityTerminationPolicy> {
        self.excess_capacity_termination_policy.as_ref()
    }

    /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
    pub fn fulfilled_capacity(&self) -> std::option::Option<f64> {
        self.fulfilled_capacity
    }

    /// <p>The number of On-Demand units fulfilled by this request compared to the set target On-Demand capacity.</p>
    pub fn on_demand_fulfilled_capacity(&self) -> std::option::Option<f64> {
        self.on_demand_fulfilled_capacity
    }

    /// <p>The Amazon Resource Name (ARN) of an AWS Identity and Access Management (IAM) role that grants the Spot Fleet the permission to request, launch, terminate, and tag instances on your behalf.</p>
    pub fn iam_fleet_role(&self) -> std::option::Option<&str> {
        self.iam_fleet_role.as_deref()
    }

    /// <p>The launch specifications for the Spot Fleet request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.launch_specifications.is_none()`.
    pub fn launch_specifications(&self) -> &[crate::model::SpotFleetLaunchSpecification] {
        self.launch_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The launch template and overrides.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.launch_template_configs.is_none()`.
    pub fn launch_template_configs(&self) -> &[crate::model::LaunchTemplateConfig] {
        self.launch_template_configs.as_deref().unwrap_or_default()
    }

    /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. The default is the On-Demand price.</p>
    pub fn spot_price(&self) -> std::option::Option<&str> {
        self.spot_price.as_deref()
    }

    /// <p>The number of units to request for the Spot Fleet. You can choose to set the target capacity in terms of instances or a performance characteristic that is important to your application workload, such as vCPUs, memory, or I/O.</p>
    pub fn target_capacity(&self) -> std::option::Option<i32> {
        self.target_capacity
    }

    /// <p>The number of On-Demand units to request.</p>
    pub fn on_demand_target_capacity(&self) -> std::option::Option<i32> {
        self.on_demand_target_capacity
    }

    /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
    pub fn on_demand_max_total_price(&self) -> std::option::Option<&str> {
        self.on_demand_max_total_price.as_deref()
    }

    /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
    pub fn spot_max_total_price(&self) -> std::option::Option<&str> {
        self.spot_max_total_price.as_deref()
    }

    /// <p>Indicates whether running instances should be terminated when the request expires.</p>
    pub fn terminate_instances_with_expiration(&self) -> std::option::Option<bool> {
        self.terminate_instances_with_expiration
    }

    /// <p>The type of request. Indicates whether the Spot Fleet only requests the target capacity or also attempts to maintain it.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::FleetType> {
        self.r#type.as_ref()
    }

    /// <p>The start date and time of the request, in UTC format. By default, Amazon EC2 starts fulfilling the request immediately.</p>
    pub fn valid_from(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_from.as_ref()
    }

    /// <p>The end date and time of the request, in UTC format. After the end date and time, no new Spot Instance requests are placed or able to fulfill the request.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
    pub fn replace_unhealthy_instances(&self) -> std::option::Option<bool> {
        self.replace_unhealthy_instances
    }

    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// <p>One or more Classic Load Balancers and target groups to attach to the Spot Fleet request.</p>
    pub fn load_balancers_config(&self) -> std::option::Option<&crate::model::LoadBalancersConfig> {
        self.load_balancers_config.as_ref()
    }

    /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
    pub fn instance_pools_to_use_count(&self) -> std::option::Option<i32> {
        self.instance_pools_to_use_count
    }

    /// <p>The key-value pair for tagging the Spot Fleet request on creation.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::TagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for SpotFleetRequestConfigData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("AllocationStrategy", &self.allocation_strategy);
        formatter.enum_field("OnDemandAllocationStrategy", &self.on_demand_allocation_strategy);
        formatter.field("ClientToken", &self.client_token);
        formatter.enum_field("ExcessCapacityTerminationPolicy", &self.excess_capacity_termination_policy);
        formatter.field("FulfilledCapacity", &self.fulfilled_capacity);
        formatter.field("OnDemandFulfilledCapacity", &self.on_demand_fulfilled_capacity);
        formatter.field("IamFleetRole", &self.iam_fleet_role);
        formatter.field("LaunchSpecifications", &self.launch_specifications);
        formatter.field("LaunchTemplateConfigs", &self.launch_template_configs);
        formatter.field("SpotPrice", &self.spot_price);
        formatter.field("TargetCapacity", &self.target_capacity);
        formatter.field("OnDemandTargetCapacity", &self.on_demand_target_capacity);
        formatter.field("OnDemandMaxTotalPrice", &self.on_demand_max_total_price);
        formatter.field("SpotMaxTotalPrice", &self.spot_max_total_price);
        formatter.field("TerminateInstancesWithExpiration", &self.terminate_instances_with_expiration);
        formatter.enum_field("Type", &self.r#type);
        formatter.field("ValidFrom", &self.valid_from);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.field("ReplaceUnhealthyInstances", &self.replace_unhealthy_instances);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.field("LoadBalancersConfig", &self.load_balancers_config);
        formatter.field("InstancePoolsToUseCount", &self.instance_pools_to_use_count);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.finish()
    }
}
impl std::cmp::PartialEq for SpotFleetRequestConfigData {
    fn eq(&self, other: &Self) -> bool {
        self.allocation_strategy == other.allocation_strategy
            && self.on_demand_allocation_strategy == other.on_demand_allocation_strategy
            && self.client_token == other.client_token
            && self.excess_capacity_termination_policy == other.excess_capacity_termination_policy
            && self.fulfilled_capacity.map(f64::to_bits) == other.fulfilled_capacity.map(f64::to_bits)
            && self.on_demand_fulfilled_capacity.map(f64::to_bits) == other.on_demand_fulfilled_capacity.map(f64::to_bits)
            && self.iam_fleet_role == other.iam_fleet_role
            && self.launch_specifications == other.launch_specifications
            && self.launch_template_configs == other.launch_template_configs
            && self.spot_price == other.spot_price
            && self.target_capacity == other.target_capacity
            && self.on_demand_target_capacity == other.on_demand_target_capacity
            && self.on_demand_max_total_price == other.on_demand_max_total_price
            && self.spot_max_total_price == other.spot_max_total_price
            && self.terminate_instances_with_expiration == other.terminate_instances_with_expiration
            && self.r#type == other.r#type
            && self.valid_from == other.valid_from
            && self.valid_until == other.valid_until
            && self.replace_unhealthy_instances == other.replace_unhealthy_instances
            && self.instance_interruption_behavior == other.instance_interruption_behavior
            && self.load_balancers_config == other.load_balancers_config
            && self.instance_pools_to_use_count == other.instance_pools_to_use_count
            && self.tag_specifications == other.tag_specifications
    }
}
impl std::cmp::Eq for SpotFleetRequestConfigData {}
impl std::hash::Hash for SpotFleetRequestConfigData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.allocation_strategy, state);
        std::hash::Hash::hash(&self.on_demand_allocation_strategy, state);
        std::hash::Hash::hash(&self.client_token, state);
        std::hash::Hash::hash(&self.excess_capacity_termination_policy, state);
        std::hash::Hash::hash(&self.fulfilled_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.on_demand_fulfilled_capacity.map(f64::to_bits), state);
        std::hash::Hash::hash(&self.iam_fleet_role, state);
        std::hash::Hash::hash(&self.launch_specifications, state);
        std::hash::Hash::hash(&self.launch_template_configs, state);
        std::hash::Hash::hash(&self.spot_price, state);
        std::hash::Hash::hash(&self.target_capacity, state);
        std::hash::Hash::hash(&self.on_demand_target_capacity, state);
        std::hash::Hash::hash(&self.on_demand_max_total_price, state);
        std::hash::Hash::hash(&self.spot_max_total_price, state);
        std::hash::Hash::hash(&self.terminate_instances_with_expiration, state);
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.valid_from, state);
        std::hash::Hash::hash(&self.valid_until, state);
        std::hash::Hash::hash(&self.replace_unhealthy_instances, state);
        std::hash::Hash::hash(&self.instance_interruption_behavior, state);
        std::hash::Hash::hash(&self.load_balancers_config, state);
        std::hash::Hash::hash(&self.instance_pools_to_use_count, state);
        std::hash::Hash::hash(&self.tag_specifications, state);
    }
}
/// See [`SpotFleetRequestConfigData`](crate::model::SpotFleetRequestConfigData)
pub mod spot_fleet_request_config_data {
    /// A builder for [`SpotFleetRequestConfigData`](crate::model::SpotFleetRequestConfigData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) allocation_strategy: std::option::Option<crate::model::AllocationStrategy>,
        pub(crate) on_demand_allocation_strategy: std::option::Option<crate::model::OnDemandAllocationStrategy>,
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) excess_capacity_termination_policy: std::option::Option<crate::model::ExcessCapacityTerminationPolicy>,
        pub(crate) fulfilled_capacity: std::option::Option<f64>,
        pub(crate) on_demand_fulfilled_capacity: std::option::Option<f64>,
        pub(crate) iam_fleet_role: std::option::Option<std::string::String>,
        pub(crate) launch_specifications: std::option::Option<std::vec::Vec<crate::model::SpotFleetLaunchSpecification>>,
        pub(crate) launch_template_configs: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateConfig>>,
        pub(crate) spot_price: std::option::Option<std::string::String>,
        pub(crate) target_capacity: std::option::Option<i32>,
        pub(crate) on_demand_target_capacity: std::option::Option<i32>,
        pub(crate) on_demand_max_total_price: std::option::Option<std::string::String>,
        pub(crate) spot_max_total_price: std::option::Option<std::string::String>,
        pub(crate) terminate_instances_with_expiration: std::option::Option<bool>,
        pub(crate) r#type: std::option::Option<crate::model::FleetType>,
        pub(crate) valid_from: std::option::Option<smithy_types::Instant>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) replace_unhealthy_instances: std::option::Option<bool>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
        pub(crate) load_balancers_config: std::option::Option<crate::model::LoadBalancersConfig>,
        pub(crate) instance_pools_to_use_count: std::option::Option<i32>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>,
    }
    impl Builder {
        /// <p>The strategy that determines how to allocate the target capacity across the Spot Instance pools.</p>
        pub fn allocation_strategy(mut self, input: crate::model::AllocationStrategy) -> Self {
            self.allocation_strategy = Some(input);
            self
        }
        /// <p>The strategy that determines how to allocate the target capacity across the Spot Instance pools.</p>
        pub fn set_allocation_strategy(mut self, input: std::option::Option<crate::model::AllocationStrategy>) -> Self {
            self.allocation_strategy = input;
            self
        }

        /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
        pub fn on_demand_allocation_strategy(mut self, input: crate::model::OnDemandAllocationStrategy) -> Self {
            self.on_demand_allocation_strategy = Some(input);
            self
        }
        /// <p>The order of the launch template overrides to use in fulfilling On-Demand capacity.</p>
        pub fn set_on_demand_allocation_strategy(mut self, input: std::option::Option<crate::model::OnDemandAllocationStrategy>) -> Self {
            self.on_demand_allocation_strategy = input;
            self
        }

        /// <p>A unique, case-sensitive identifier that you provide to ensure the idempotency of your listings. This helps to avoid duplicate listings.</p>
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// <p>A unique, case-sensitive identifier that you provide to ensure the idempotency of your listings. This helps to avoid duplicate listings.</p>
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }

        /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
        pub fn excess_capacity_termination_policy(mut self, input: crate::model::ExcessCapacityTerminationPolicy) -> Self {
            self.excess_capacity_termination_policy = Some(input);
            self
        }
        /// <p>Indicates whether running instances should be terminated if the target capacity is decreased below the current size.</p>
        pub fn set_excess_capacity_termination_policy(mut self, input: std::option::Option<crate::model::ExcessCapacityTerminationPolicy>) -> Self {
            self.excess_capacity_termination_policy = input;
            self
        }

        /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
        pub fn fulfilled_capacity(mut self, input: f64) -> Self {
            self.fulfilled_capacity = Some(input);
            self
        }
        /// <p>The number of units fulfilled by this request compared to the set target capacity.</p>
        pub fn set_fulfilled_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.fulfilled_capacity = input;
            self
        }

        /// <p>The number of On-Demand units fulfilled by this request compared to the set target On-Demand capacity.</p>
        pub fn on_demand_fulfilled_capacity(mut self, input: f64) -> Self {
            self.on_demand_fulfilled_capacity = Some(input);
            self
        }
        /// <p>The number of On-Demand units fulfilled by this request compared to the set target On-Demand capacity.</p>
        pub fn set_on_demand_fulfilled_capacity(mut self, input: std::option::Option<f64>) -> Self {
            self.on_demand_fulfilled_capacity = input;
            self
        }

        /// <p>The Amazon Resource Name (ARN) of an AWS Identity and Access Management (IAM) role that grants the Spot Fleet the permission to request, launch, terminate, and tag instances on your behalf.</p>
        pub fn iam_fleet_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.iam_fleet_role = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of an AWS Identity and Access Management (IAM) role that grants the Spot Fleet the permission to request, launch, terminate, and tag instances on your behalf.</p>
        pub fn set_iam_fleet_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.iam_fleet_role = input;
            self
        }

        /// Appends an item to `launch_specifications`.
        ///
        /// To override the contents of this collection use [`set_launch_specifications`](Self::set_launch_specifications).
        ///
        /// <p>The launch specifications for the Spot Fleet request.</p>
        pub fn launch_specifications(mut self, input: impl std::convert::Into<crate::model::SpotFleetLaunchSpecification>) -> Self {
            let mut v = self.launch_specifications.unwrap_or_default();
            v.push(input.into());
            self.launch_specifications = Some(v);
            self
        }
        /// <p>The launch specifications for the Spot Fleet request.</p>
        pub fn set_launch_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::SpotFleetLaunchSpecification>>) -> Self {
            self.launch_specifications = input;
            self
        }

        /// Appends an item to `launch_template_configs`.
        ///
        /// To override the contents of this collection use [`set_launch_template_configs`](Self::set_launch_template_configs).
        ///
        /// <p>The launch template and overrides.</p>
        pub fn launch_template_configs(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateConfig>) -> Self {
            let mut v = self.launch_template_configs.unwrap_or_default();
            v.push(input.into());
            self.launch_template_configs = Some(v);
            self
        }
        /// <p>The launch template and overrides.</p>
        pub fn set_launch_template_configs(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateConfig>>) -> Self {
            self.launch_template_configs = input;
            self
        }

        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. The default is the On-Demand price.</p>
        pub fn spot_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_price = Some(input.into());
            self
        }
        /// <p>The maximum price per unit hour that you are willing to pay for a Spot Instance. The default is the On-Demand price.</p>
        pub fn set_spot_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_price = input;
            self
        }

        /// <p>The number of units to request for the Spot Fleet. You can choose to set the target capacity in terms of instances or a performance characteristic that is important to your application workload, such as vCPUs, memory, or I/O.</p>
        pub fn target_capacity(mut self, input: i32) -> Self {
            self.target_capacity = Some(input);
            self
        }
        /// <p>The number of units to request for the Spot Fleet. You can choose to set the target capacity in terms of instances or a performance characteristic that is important to your application workload, such as vCPUs, memory, or I/O.</p>
        pub fn set_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_capacity = input;
            self
        }

        /// <p>The number of On-Demand units to request.</p>
        pub fn on_demand_target_capacity(mut self, input: i32) -> Self {
            self.on_demand_target_capacity = Some(input);
            self
        }
        /// <p>The number of On-Demand units to request.</p>
        pub fn set_on_demand_target_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.on_demand_target_capacity = input;
            self
        }

        /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
        pub fn on_demand_max_total_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.on_demand_max_total_price = Some(input.into());
            self
        }
        /// <p>The maximum amount per hour for On-Demand Instances that you're willing to pay.</p>
        pub fn set_on_demand_max_total_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.on_demand_max_total_price = input;
            self
        }

        /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
        pub fn spot_max_total_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_max_total_price = Some(input.into());
            self
        }
        /// <p>The maximum amount per hour for Spot Instances that you're willing to pay.</p>
        pub fn set_spot_max_total_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_max_total_price = input;
            self
        }

        /// <p>Indicates whether running instances should be terminated when the request expires.</p>
        pub fn terminate_instances_with_expiration(mut self, input: bool) -> Self {
            self.terminate_instances_with_expiration = Some(input);
            self
        }
        /// <p>Indicates whether running instances should be terminated when the request expires.</p>
        pub fn set_terminate_instances_with_expiration(mut self, input: std::option::Option<bool>) -> Self {
            self.terminate_instances_with_expiration = input;
            self
        }

        /// <p>The type of request. Indicates whether the Spot Fleet only requests the target capacity or also attempts to maintain it.</p>
        pub fn r#type(mut self, input: crate::model::FleetType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of request. Indicates whether the Spot Fleet only requests the target capacity or also attempts to maintain it.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::FleetType>) -> Self {
            self.r#type = input;
            self
        }

        /// <p>The start date and time of the request, in UTC format. By default, Amazon EC2 starts fulfilling the request immediately.</p>
        pub fn valid_from(mut self, input: smithy_types::Instant) -> Self {
            self.valid_from = Some(input);
            self
        }
        /// <p>The start date and time of the request, in UTC format. By default, Amazon EC2 starts fulfilling the request immediately.</p>
        pub fn set_valid_from(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_from = input;
            self
        }

        /// <p>The end date and time of the request, in UTC format. After the end date and time, no new Spot Instance requests are placed or able to fulfill the request.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date and time of the request, in UTC format. After the end date and time, no new Spot Instance requests are placed or able to fulfill the request.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
        pub fn replace_unhealthy_instances(mut self, input: bool) -> Self {
            self.replace_unhealthy_instances = Some(input);
            self
        }
        /// <p>Indicates whether the fleet should replace unhealthy instances.</p>
        pub fn set_replace_unhealthy_instances(mut self, input: std::option::Option<bool>) -> Self {
            self.replace_unhealthy_instances = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::InstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::InstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }

        /// <p>One or more Classic Load Balancers and target groups to attach to the Spot Fleet request.</p>
        pub fn load_balancers_config(mut self, input: crate::model::LoadBalancersConfig) -> Self {
            self.load_balancers_config = Some(input);
            self
        }
        /// <p>One or more Classic Load Balancers and target groups to attach to the Spot Fleet request.</p>
        pub fn set_load_balancers_config(mut self, input: std::option::Option<crate::model::LoadBalancersConfig>) -> Self {
            self.load_balancers_config = input;
            self
        }

        /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
        pub fn instance_pools_to_use_count(mut self, input: i32) -> Self {
            self.instance_pools_to_use_count = Some(input);
            self
        }
        /// <p>The number of Spot pools across which to allocate your target Spot capacity. Valid only when the Spot allocation strategy is <code>lowest-price</code>.</p>
        pub fn set_instance_pools_to_use_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_pools_to_use_count = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The key-value pair for tagging the Spot Fleet request on creation.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::TagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The key-value pair for tagging the Spot Fleet request on creation.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotFleetRequestConfigData`](crate::model::SpotFleetRequestConfigData)
        pub fn build(self) -> crate::model::SpotFleetRequestConfigData {
            crate::model::SpotFleetRequestConfigData {
                allocation_strategy: self.allocation_strategy,
                on_demand_allocation_strategy: self.on_demand_allocation_strategy,
                client_token: self.client_token,
                excess_capacity_termination_policy: self.excess_capacity_termination_policy,
                fulfilled_capacity: self.fulfilled_capacity,
                on_demand_fulfilled_capacity: self.on_demand_fulfilled_capacity,
                iam_fleet_role: self.iam_fleet_role,
                launch_specifications: self.launch_specifications,
                launch_template_configs: self.launch_template_configs,
                spot_price: self.spot_price,
                target_capacity: self.target_capacity,
                on_demand_target_capacity: self.on_demand_target_capacity,
                on_demand_max_total_price: self.on_demand_max_total_price,
                spot_max_total_price: self.spot_max_total_price,
                terminate_instances_with_expiration: self.terminate_instances_with_expiration,
                r#type: self.r#type,
                valid_from: self.valid_from,
                valid_until: self.valid_until,
                replace_unhealthy_instances: self.replace_unhealthy_instances,
                instance_interruption_behavior: self.instance_interruption_behavior,
                load_balancers_config: self.load_balancers_config,
                instance_pools_to_use_count: self.instance_pools_to_use_count,
                tag_specifications: self.tag_specifications,
            }
        }
    }
}
impl SpotFleetRequestConfigData {
    /// Creates a new builder-style object to manufacture [`SpotFleetRequestConfigData`](crate::model::SpotFleetRequestConfigData)
    pub fn builder() -> crate::model::spot_fleet_request_config_data::Builder {
        crate::model::spot_fleet_request_config_data::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AllocationStrategy {
    #[allow(missing_docs)] // documentation missing in model
    LowestPrice,
    #[allow(missing_docs)] // documentation missing in model
    Diversified,
    #[allow(missing_docs)] // documentation missing in model
    CapacityOptimized,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AllocationStrategy {
    fn from(s: &str) -> Self {
        match s {
            "lowestPrice" => AllocationStrategy::LowestPrice,
            "diversified" => AllocationStrategy::Diversified,
            "capacityOptimized" => AllocationStrategy::CapacityOptimized,
            other => AllocationStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AllocationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AllocationStrategy::from(s))
    }
}
impl AllocationStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            AllocationStrategy::LowestPrice => "lowestPrice",
            AllocationStrategy::Diversified => "diversified",
            AllocationStrategy::CapacityOptimized => "capacityOptimized",
            AllocationStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "lowestPrice",
            "diversified",
            "capacityOptimized",
        ]
    }
}
impl AsRef<str> for AllocationStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum OnDemandAllocationStrategy {
    #[allow(missing_docs)] // documentation missing in model
    LowestPrice,
    #[allow(missing_docs)] // documentation missing in model
    Prioritized,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for OnDemandAllocationStrategy {
    fn from(s: &str) -> Self {
        match s {
            "lowestPrice" => OnDemandAllocationStrategy::LowestPrice,
            "prioritized" => OnDemandAllocationStrategy::Prioritized,
            other => OnDemandAllocationStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OnDemandAllocationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OnDemandAllocationStrategy::from(s))
    }
}
impl OnDemandAllocationStrategy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            OnDemandAllocationStrategy::LowestPrice => "lowestPrice",
            OnDemandAllocationStrategy::Prioritized => "prioritized",
            OnDemandAllocationStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "lowestPrice",
            "prioritized",
        ]
    }
}
impl AsRef<str> for OnDemandAllocationStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ExcessCapacityTerminationPolicy {
    #[allow(missing_docs)] // documentation missing in model
    NoTermination,
    #[allow(missing_docs)] // documentation missing in model
    Default,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ExcessCapacityTerminationPolicy {
    fn from(s: &str) -> Self {
        match s {
            "noTermination" => ExcessCapacityTerminationPolicy::NoTermination,
            "default" => ExcessCapacityTerminationPolicy::Default,
            other => ExcessCapacityTerminationPolicy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ExcessCapacityTerminationPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ExcessCapacityTerminationPolicy::from(s))
    }
}
impl ExcessCapacityTerminationPolicy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ExcessCapacityTerminationPolicy::NoTermination => "noTermination",
            ExcessCapacityTerminationPolicy::Default => "default",
            ExcessCapacityTerminationPolicy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "noTermination",
            "default",
        ]
    }
}
impl AsRef<str> for ExcessCapacityTerminationPolicy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Specifies the encryption algorithm for the VPN tunnel for phase 1 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase1EncryptionAlgorithmsRequestListValue {
    /// <p>The value for the encryption algorithm.</p>
    pub value: std::option::Option<std::string::String>,
}
impl Phase1EncryptionAlgorithmsRequestListValue {
    /// <p>The value for the encryption algorithm.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Phase1EncryptionAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase1EncryptionAlgorithmsRequestListValue`](crate::model::Phase1EncryptionAlgorithmsRequestListValue)
pub mod phase1_encryption_algorithms_request_list_value {
    /// A builder for [`Phase1EncryptionAlgorithmsRequestListValue`](crate::model::Phase1EncryptionAlgorithmsRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The value for the encryption algorithm.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The value for the encryption algorithm.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase1EncryptionAlgorithmsRequestListValue`](crate::model::Phase1EncryptionAlgorithmsRequestListValue)
        pub fn build(self) -> crate::model::Phase1EncryptionAlgorithmsRequestListValue {
            crate::model::Phase1EncryptionAlgorithmsRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase1EncryptionAlgorithmsRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase1EncryptionAlgorithmsRequestListValue`](crate::model::Phase1EncryptionAlgorithmsRequestListValue)
    pub fn builder() -> crate::model::phase1_encryption_algorithms_request_list_value::Builder {
        crate::model::phase1_encryption_algorithms_request_list_value::Builder::default()
    }
}

/// <p>Specifies the encryption algorithm for the VPN tunnel for phase 2 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase2EncryptionAlgorithmsRequestListValue {
    /// <p>The encryption algorithm.</p>
    pub value: std::option::Option<std::string::String>,
}
impl Phase2EncryptionAlgorithmsRequestListValue {
    /// <p>The encryption algorithm.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Phase2EncryptionAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase2EncryptionAlgorithmsRequestListValue`](crate::model::Phase2EncryptionAlgorithmsRequestListValue)
pub mod phase2_encryption_algorithms_request_list_value {
    /// A builder for [`Phase2EncryptionAlgorithmsRequestListValue`](crate::model::Phase2EncryptionAlgorithmsRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The encryption algorithm.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The encryption algorithm.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase2EncryptionAlgorithmsRequestListValue`](crate::model::Phase2EncryptionAlgorithmsRequestListValue)
        pub fn build(self) -> crate::model::Phase2EncryptionAlgorithmsRequestListValue {
            crate::model::Phase2EncryptionAlgorithmsRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase2EncryptionAlgorithmsRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase2EncryptionAlgorithmsRequestListValue`](crate::model::Phase2EncryptionAlgorithmsRequestListValue)
    pub fn builder() -> crate::model::phase2_encryption_algorithms_request_list_value::Builder {
        crate::model::phase2_encryption_algorithms_request_list_value::Builder::default()
    }
}

/// <p>Specifies the integrity algorithm for the VPN tunnel for phase 1 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase1IntegrityAlgorithmsRequestListValue {
    /// <p>The value for the integrity algorithm.</p>
    pub value: std::option::Option<std::string::String>,
}
impl Phase1IntegrityAlgorithmsRequestListValue {
    /// <p>The value for the integrity algorithm.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Phase1IntegrityAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase1IntegrityAlgorithmsRequestListValue`](crate::model::Phase1IntegrityAlgorithmsRequestListValue)
pub mod phase1_integrity_algorithms_request_list_value {
    /// A builder for [`Phase1IntegrityAlgorithmsRequestListValue`](crate::model::Phase1IntegrityAlgorithmsRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The value for the integrity algorithm.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The value for the integrity algorithm.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase1IntegrityAlgorithmsRequestListValue`](crate::model::Phase1IntegrityAlgorithmsRequestListValue)
        pub fn build(self) -> crate::model::Phase1IntegrityAlgorithmsRequestListValue {
            crate::model::Phase1IntegrityAlgorithmsRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase1IntegrityAlgorithmsRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase1IntegrityAlgorithmsRequestListValue`](crate::model::Phase1IntegrityAlgorithmsRequestListValue)
    pub fn builder() -> crate::model::phase1_integrity_algorithms_request_list_value::Builder {
        crate::model::phase1_integrity_algorithms_request_list_value::Builder::default()
    }
}

/// <p>Specifies the integrity algorithm for the VPN tunnel for phase 2 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase2IntegrityAlgorithmsRequestListValue {
    /// <p>The integrity algorithm.</p>
    pub value: std::option::Option<std::string::String>,
}
impl Phase2IntegrityAlgorithmsRequestListValue {
    /// <p>The integrity algorithm.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Phase2IntegrityAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase2IntegrityAlgorithmsRequestListValue`](crate::model::Phase2IntegrityAlgorithmsRequestListValue)
pub mod phase2_integrity_algorithms_request_list_value {
    /// A builder for [`Phase2IntegrityAlgorithmsRequestListValue`](crate::model::Phase2IntegrityAlgorithmsRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The integrity algorithm.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The integrity algorithm.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase2IntegrityAlgorithmsRequestListValue`](crate::model::Phase2IntegrityAlgorithmsRequestListValue)
        pub fn build(self) -> crate::model::Phase2IntegrityAlgorithmsRequestListValue {
            crate::model::Phase2IntegrityAlgorithmsRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase2IntegrityAlgorithmsRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase2IntegrityAlgorithmsRequestListValue`](crate::model::Phase2IntegrityAlgorithmsRequestListValue)
    pub fn builder() -> crate::model::phase2_integrity_algorithms_request_list_value::Builder {
        crate::model::phase2_integrity_algorithms_request_list_value::Builder::default()
    }
}

/// <p>Specifies a Diffie-Hellman group number for the VPN tunnel for phase 1 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase1DHGroupNumbersRequestListValue {
    /// <p>The Diffie-Hellmann group number.</p>
    pub value: std::option::Option<i32>,
}
impl Phase1DHGroupNumbersRequestListValue {
    /// <p>The Diffie-Hellmann group number.</p>
    pub fn value(&self) -> std::option::Option<i32> {
        self.value
    }
}
impl std::fmt::Debug for Phase1DHGroupNumbersRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase1DHGroupNumbersRequestListValue`](crate::model::Phase1DHGroupNumbersRequestListValue)
pub mod phase1_dh_group_numbers_request_list_value {
    /// A builder for [`Phase1DHGroupNumbersRequestListValue`](crate::model::Phase1DHGroupNumbersRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The Diffie-Hellmann group number.</p>
        pub fn value(mut self, input: i32) -> Self {
            self.value = Some(input);
            self
        }
        /// <p>The Diffie-Hellmann group number.</p>
        pub fn set_value(mut self, input: std::option::Option<i32>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase1DHGroupNumbersRequestListValue`](crate::model::Phase1DHGroupNumbersRequestListValue)
        pub fn build(self) -> crate::model::Phase1DHGroupNumbersRequestListValue {
            crate::model::Phase1DHGroupNumbersRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase1DHGroupNumbersRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase1DHGroupNumbersRequestListValue`](crate::model::Phase1DHGroupNumbersRequestListValue)
    pub fn builder() -> crate::model::phase1_dh_group_numbers_request_list_value::Builder {
        crate::model::phase1_dh_group_numbers_request_list_value::Builder::default()
    }
}

/// <p>Specifies a Diffie-Hellman group number for the VPN tunnel for phase 2 IKE negotiations.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Phase2DHGroupNumbersRequestListValue {
    /// <p>The Diffie-Hellmann group number.</p>
    pub value: std::option::Option<i32>,
}
impl Phase2DHGroupNumbersRequestListValue {
    /// <p>The Diffie-Hellmann group number.</p>
    pub fn value(&self) -> std::option::Option<i32> {
        self.value
    }
}
impl std::fmt::Debug for Phase2DHGroupNumbersRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`Phase2DHGroupNumbersRequestListValue`](crate::model::Phase2DHGroupNumbersRequestListValue)
pub mod phase2_dh_group_numbers_request_list_value {
    /// A builder for [`Phase2DHGroupNumbersRequestListValue`](crate::model::Phase2DHGroupNumbersRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The Diffie-Hellmann group number.</p>
        pub fn value(mut self, input: i32) -> Self {
            self.value = Some(input);
            self
        }
        /// <p>The Diffie-Hellmann group number.</p>
        pub fn set_value(mut self, input: std::option::Option<i32>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Phase2DHGroupNumbersRequestListValue`](crate::model::Phase2DHGroupNumbersRequestListValue)
        pub fn build(self) -> crate::model::Phase2DHGroupNumbersRequestListValue {
            crate::model::Phase2DHGroupNumbersRequestListValue {
                value: self.value,
            }
        }
    }
}
impl Phase2DHGroupNumbersRequestListValue {
    /// Creates a new builder-style object to manufacture [`Phase2DHGroupNumbersRequestListValue`](crate::model::Phase2DHGroupNumbersRequestListValue)
    pub fn builder() -> crate::model::phase2_dh_group_numbers_request_list_value::Builder {
        crate::model::phase2_dh_group_numbers_request_list_value::Builder::default()
    }
}

/// <p>The IKE version that is permitted for the VPN tunnel.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IKEVersionsRequestListValue {
    /// <p>The IKE version.</p>
    pub value: std::option::Option<std::string::String>,
}
impl IKEVersionsRequestListValue {
    /// <p>The IKE version.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for IKEVersionsRequestListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Value", &self.value);
        formatter.finish()
    }
}
/// See [`IKEVersionsRequestListValue`](crate::model::IKEVersionsRequestListValue)
pub mod ike_versions_request_list_value {
    /// A builder for [`IKEVersionsRequestListValue`](crate::model::IKEVersionsRequestListValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IKE version.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The IKE version.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`IKEVersionsRequestListValue`](crate::model::IKEVersionsRequestListValue)
        pub fn build(self) -> crate::model::IKEVersionsRequestListValue {
            crate::model::IKEVersionsRequestListValue {
                value: self.value,
            }
        }
    }
}
impl IKEVersionsRequestListValue {
    /// Creates a new builder-style object to manufacture [`IKEVersionsRequestListValue`](crate::model::IKEVersionsRequestListValue)
    pub fn builder() -> crate::model::ike_versions_request_list_value::Builder {
        crate::model::ike_versions_request_list_value::Builder::default()
    }
}

/// <p>The tunnel options for a single VPN tunnel.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct VpnTunnelOptionsSpecification {
    /// <p>The range of inside IP addresses for the tunnel. Any specified CIDR blocks must be unique across all VPN connections that use the same virtual private gateway. </p>
    /// <p>Constraints: A size /30 CIDR block from the <code>169.254.0.0/16</code> range.</p>
    pub tunnel_inside_cidr: std::option::Option<std::string::String>,
    /// <p>The pre-shared key (PSK) to establish initial authentication between the virtual private gateway and customer gateway.</p>
    /// <p>Constraints: Allowed characters are alphanumeric characters, periods (.), and underscores (_). Must be between 8 and 64 characters in length and cannot start with zero (0).</p>
    pub pre_shared_key: std::option::Option<std::string::String>,
    /// <p>The lifetime for phase 1 of the IKE negotiation, in seconds.</p>
    /// <p>Constraints: A value between 900 and 28,800.</p>
    /// <p>Default: <code>28800</code></p>
    pub phase1_lifetime_seconds: std::option::Option<i32>,
    /// <p>The lifetime for phase 2 of the IKE negotiation, in seconds.</p>
    /// <p>Constraints: A value between 900 and 3,600. The value must be less than the value for <code>Phase1LifetimeSeconds</code>.</p>
    /// <p>Default: <code>3600</code></p>
    pub phase2_lifetime_seconds: std::option::Option<i32>,
    /// <p>The margin time, in seconds, before the phase 2 lifetime expires, during which the AWS side of the VPN connection performs an IKE rekey. The exact time of the rekey is randomly selected based on the value for <code>RekeyFuzzPercentage</code>.</p>
    /// <p>Constraints: A value between 60 and half of <code>Phase2LifetimeSeconds</code>.</p>
    /// <p>Default: <code>540</code></p>
    pub rekey_margin_time_seconds: std::option::Option<i32>,
    /// <p>The percentage of the rekey window (determined by <code>RekeyMarginTimeSeconds</code>) during which the rekey time is randomly selected.</p>
    /// <p>Constraints: A value between 0 and 100.</p>
    /// <p>Default: <code>100</code></p>
    pub rekey_fuzz_percentage: std::option::Option<i32>,
    /// <p>The number of packets in an IKE replay window.</p>
    /// <p>Constraints: A value between 64 and 2048.</p>
    /// <p>Default: <code>1024</code></p>
    pub replay_window_size: std::option::Option<i32>,
    /// <p>The number of seconds after which a DPD timeout occurs.</p>
    /// <p>Constraints: A value between 0 and 30.</p>
    /// <p>Default: <code>30</code>
    /// </p>
    pub dpd_timeout_seconds: std::option::Option<i32>,
    /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
    pub phase1_encryption_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase1EncryptionAlgorithmsRequestListValue>>,
    /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
    pub phase2_encryption_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase2EncryptionAlgorithmsRequestListValue>>,
    /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
    pub phase1_integrity_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase1IntegrityAlgorithmsRequestListValue>>,
    /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
    pub phase2_integrity_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase2IntegrityAlgorithmsRequestListValue>>,
    /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>2</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
    pub phase1_dh_group_numbers: std::option::Option<std::vec::Vec<crate::model::Phase1DHGroupNumbersRequestListValue>>,
    /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>2</code> | <code>5</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
    pub phase2_dh_group_numbers: std::option::Option<std::vec::Vec<crate::model::Phase2DHGroupNumbersRequestListValue>>,
    /// <p>The IKE versions that are permitted for the VPN tunnel.</p>
    /// <p>Valid values: <code>ikev1</code> | <code>ikev2</code></p>
    pub ike_versions: std::option::Option<std::vec::Vec<crate::model::IKEVersionsRequestListValue>>,
}
impl VpnTunnelOptionsSpecification {
    /// <p>The range of inside IP addresses for the tunnel. Any specified CIDR blocks must be unique across all VPN connections that use the same virtual private gateway. </p>
    /// <p>Constraints: A size /30 CIDR block from the <code>169.254.0.0/16</code> range.</p>
    pub fn tunnel_inside_cidr(&self) -> std::option::Option<&str> {
        self.tunnel_inside_cidr.as_deref()
    }

    /// <p>The pre-shared key (PSK) to establish initial authentication between the virtual private gateway and customer gateway.</p>
    /// <p>Constraints: Allowed characters are alphanumeric characters, periods (.), and underscores (_). Must be between 8 and 64 characters in length and cannot start with zero (0).</p>
    pub fn pre_shared_key(&self) -> std::option::Option<&str> {
        self.pre_shared_key.as_deref()
    }

    /// <p>The lifetime for phase 1 of the IKE negotiation, in seconds.</p>
    /// <p>Constraints: A value between 900 and 28,800.</p>
    /// <p>Default: <code>28800</code></p>
    pub fn phase1_lifetime_seconds(&self) -> std::option::Option<i32> {
        self.phase1_lifetime_seconds
    }

    /// <p>The lifetime for phase 2 of the IKE negotiation, in seconds.</p>
    /// <p>Constraints: A value between 900 and 3,600. The value must be less than the value for <code>Phase1LifetimeSeconds</code>.</p>
    /// <p>Default: <code>3600</code></p>
    pub fn phase2_lifetime_seconds(&self) -> std::option::Option<i32> {
        self.phase2_lifetime_seconds
    }

    /// <p>The margin time, in seconds, before the phase 2 lifetime expires, during which the AWS side of the VPN connection performs an IKE rekey. The exact time of the rekey is randomly selected based on the value for <code>RekeyFuzzPercentage</code>.</p>
    /// <p>Constraints: A value between 60 and half of <code>Phase2LifetimeSeconds</code>.</p>
    /// <p>Default: <code>540</code></p>
    pub fn rekey_margin_time_seconds(&self) -> std::option::Option<i32> {
        self.rekey_margin_time_seconds
    }

    /// <p>The percentage of the rekey window (determined by <code>RekeyMarginTimeSeconds</code>) during which the rekey time is randomly selected.</p>
    /// <p>Constraints: A value between 0 and 100.</p>
    /// <p>Default: <code>100</code></p>
    pub fn rekey_fuzz_percentage(&self) -> std::option::Option<i32> {
        self.rekey_fuzz_percentage
    }

    /// <p>The number of packets in an IKE replay window.</p>
    /// <p>Constraints: A value between 64 and 2048.</p>
    /// <p>Default: <code>1024</code></p>
    pub fn replay_window_size(&self) -> std::option::Option<i32> {
        self.replay_window_size
    }

    /// <p>The number of seconds after which a DPD timeout occurs.</p>
    /// <p>Constraints: A value between 0 and 30.</p>
    /// <p>Default: <code>30</code>
    /// </p>
    pub fn dpd_timeout_seconds(&self) -> std::option::Option<i32> {
        self.dpd_timeout_seconds
    }

    /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase1_encryption_algorithms.is_none()`.
    pub fn phase1_encryption_algorithms(&self) -> &[crate::model::Phase1EncryptionAlgorithmsRequestListValue] {
        self.phase1_encryption_algorithms.as_deref().unwrap_or_default()
    }

    /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase2_encryption_algorithms.is_none()`.
    pub fn phase2_encryption_algorithms(&self) -> &[crate::model::Phase2EncryptionAlgorithmsRequestListValue] {
        self.phase2_encryption_algorithms.as_deref().unwrap_or_default()
    }

    /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase1_integrity_algorithms.is_none()`.
    pub fn phase1_integrity_algorithms(&self) -> &[crate::model::Phase1IntegrityAlgorithmsRequestListValue] {
        self.phase1_integrity_algorithms.as_deref().unwrap_or_default()
    }

    /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase2_integrity_algorithms.is_none()`.
    pub fn phase2_integrity_algorithms(&self) -> &[crate::model::Phase2IntegrityAlgorithmsRequestListValue] {
        self.phase2_integrity_algorithms.as_deref().unwrap_or_default()
    }

    /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
    /// <p>Valid values: <code>2</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase1_dh_group_numbers.is_none()`.
    pub fn phase1_dh_group_numbers(&self) -> &[crate::model::Phase1DHGroupNumbersRequestListValue] {
        self.phase1_dh_group_numbers.as_deref().unwrap_or_default()
    }

    /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
    /// <p>Valid values: <code>2</code> | <code>5</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.phase2_dh_group_numbers.is_none()`.
    pub fn phase2_dh_group_numbers(&self) -> &[crate::model::Phase2DHGroupNumbersRequestListValue] {
        self.phase2_dh_group_numbers.as_deref().unwrap_or_default()
    }

    /// <p>The IKE versions that are permitted for the VPN tunnel.</p>
    /// <p>Valid values: <code>ikev1</code> | <code>ikev2</code></p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ike_versions.is_none()`.
    pub fn ike_versions(&self) -> &[crate::model::IKEVersionsRequestListValue] {
        self.ike_versions.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for VpnTunnelOptionsSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("TunnelInsideCidr", &self.tunnel_inside_cidr);
        formatter.field("PreSharedKey", &self.pre_shared_key);
        formatter.field("Phase1LifetimeSeconds", &self.phase1_lifetime_seconds);
        formatter.field("Phase2LifetimeSeconds", &self.phase2_lifetime_seconds);
        formatter.field("RekeyMarginTimeSeconds", &self.rekey_margin_time_seconds);
        formatter.field("RekeyFuzzPercentage", &self.rekey_fuzz_percentage);
        formatter.field("ReplayWindowSize", &self.replay_window_size);
        formatter.field("DPDTimeoutSeconds", &self.dpd_timeout_seconds);
        formatter.field("Phase1EncryptionAlgorithms", &self.phase1_encryption_algorithms);
        formatter.field("Phase2EncryptionAlgorithms", &self.phase2_encryption_algorithms);
        formatter.field("Phase1IntegrityAlgorithms", &self.phase1_integrity_algorithms);
        formatter.field("Phase2IntegrityAlgorithms", &self.phase2_integrity_algorithms);
        formatter.field("Phase1DHGroupNumbers", &self.phase1_dh_group_numbers);
        formatter.field("Phase2DHGroupNumbers", &self.phase2_dh_group_numbers);
        formatter.field("IKEVersions", &self.ike_versions);
        formatter.finish()
    }
}
/// See [`VpnTunnelOptionsSpecification`](crate::model::VpnTunnelOptionsSpecification)
pub mod vpn_tunnel_options_specification {
    /// A builder for [`VpnTunnelOptionsSpecification`](crate::model::VpnTunnelOptionsSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) tunnel_inside_cidr: std::option::Option<std::string::String>,
        pub(crate) pre_shared_key: std::option::Option<std::string::String>,
        pub(crate) phase1_lifetime_seconds: std::option::Option<i32>,
        pub(crate) phase2_lifetime_seconds: std::option::Option<i32>,
        pub(crate) rekey_margin_time_seconds: std::option::Option<i32>,
        pub(crate) rekey_fuzz_percentage: std::option::Option<i32>,
        pub(crate) replay_window_size: std::option::Option<i32>,
        pub(crate) dpd_timeout_seconds: std::option::Option<i32>,
        pub(crate) phase1_encryption_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase1EncryptionAlgorithmsRequestListValue>>,
        pub(crate) phase2_encryption_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase2EncryptionAlgorithmsRequestListValue>>,
        pub(crate) phase1_integrity_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase1IntegrityAlgorithmsRequestListValue>>,
        pub(crate) phase2_integrity_algorithms: std::option::Option<std::vec::Vec<crate::model::Phase2IntegrityAlgorithmsRequestListValue>>,
        pub(crate) phase1_dh_group_numbers: std::option::Option<std::vec::Vec<crate::model::Phase1DHGroupNumbersRequestListValue>>,
        pub(crate) phase2_dh_group_numbers: std::option::Option<std::vec::Vec<crate::model::Phase2DHGroupNumbersRequestListValue>>,
        pub(crate) ike_versions: std::option::Option<std::vec::Vec<crate::model::IKEVersionsRequestListValue>>,
    }
    impl Builder {
        /// <p>The range of inside IP addresses for the tunnel. Any specified CIDR blocks must be unique across all VPN connections that use the same virtual private gateway. </p>
        /// <p>Constraints: A size /30 CIDR block from the <code>169.254.0.0/16</code> range.</p>
        pub fn tunnel_inside_cidr(mut self, input: impl Into<std::string::String>) -> Self {
            self.tunnel_inside_cidr = Some(input.into());
            self
        }
        /// <p>The range of inside IP addresses for the tunnel. Any specified CIDR blocks must be unique across all VPN connections that use the same virtual private gateway. </p>
        /// <p>Constraints: A size /30 CIDR block from the <code>169.254.0.0/16</code> range.</p>
        pub fn set_tunnel_inside_cidr(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tunnel_inside_cidr = input;
            self
        }

        /// <p>The pre-shared key (PSK) to establish initial authentication between the virtual private gateway and customer gateway.</p>
        /// <p>Constraints: Allowed characters are alphanumeric characters, periods (.), and underscores (_). Must be between 8 and 64 characters in length and cannot start with zero (0).</p>
        pub fn pre_shared_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.pre_shared_key = Some(input.into());
            self
        }
        /// <p>The pre-shared key (PSK) to establish initial authentication between the virtual private gateway and customer gateway.</p>
        /// <p>Constraints: Allowed characters are alphanumeric characters, periods (.), and underscores (_). Must be between 8 and 64 characters in length and cannot start with zero (0).</p>
        pub fn set_pre_shared_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pre_shared_key = input;
            self
        }

        /// <p>The lifetime for phase 1 of the IKE negotiation, in seconds.</p>
        /// <p>Constraints: A value between 900 and 28,800.</p>
        /// <p>Default: <code>28800</code></p>
        pub fn phase1_lifetime_seconds(mut self, input: i32) -> Self {
            self.phase1_lifetime_seconds = Some(input);
            self
        }
        /// <p>The lifetime for phase 1 of the IKE negotiation, in seconds.</p>
        /// <p>Constraints: A value between 900 and 28,800.</p>
        /// <p>Default: <code>28800</code></p>
        pub fn set_phase1_lifetime_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.phase1_lifetime_seconds = input;
            self
        }

        /// <p>The lifetime for phase 2 of the IKE negotiation, in seconds.</p>
        /// <p>Constraints: A value between 900 and 3,600. The value must be less than the value for <code>Phase1LifetimeSeconds</code>.</p>
        /// <p>Default: <code>3600</code></p>
        pub fn phase2_lifetime_seconds(mut self, input: i32) -> Self {
            self.phase2_lifetime_seconds = Some(input);
            self
        }
        /// <p>The lifetime for phase 2 of the IKE negotiation, in seconds.</p>
        /// <p>Constraints: A value between 900 and 3,600. The value must be less than the value for <code>Phase1LifetimeSeconds</code>.</p>
        /// <p>Default: <code>3600</code></p>
        pub fn set_phase2_lifetime_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.phase2_lifetime_seconds = input;
            self
        }

        /// <p>The margin time, in seconds, before the phase 2 lifetime expires, during which the AWS side of the VPN connection performs an IKE rekey. The exact time of the rekey is randomly selected based on the value for <code>RekeyFuzzPercentage</code>.</p>
        /// <p>Constraints: A value between 60 and half of <code>Phase2LifetimeSeconds</code>.</p>
        /// <p>Default: <code>540</code></p>
        pub fn rekey_margin_time_seconds(mut self, input: i32) -> Self {
            self.rekey_margin_time_seconds = Some(input);
            self
        }
        /// <p>The margin time, in seconds, before the phase 2 lifetime expires, during which the AWS side of the VPN connection performs an IKE rekey. The exact time of the rekey is randomly selected based on the value for <code>RekeyFuzzPercentage</code>.</p>
        /// <p>Constraints: A value between 60 and half of <code>Phase2LifetimeSeconds</code>.</p>
        /// <p>Default: <code>540</code></p>
        pub fn set_rekey_margin_time_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.rekey_margin_time_seconds = input;
            self
        }

        /// <p>The percentage of the rekey window (determined by <code>RekeyMarginTimeSeconds</code>) during which the rekey time is randomly selected.</p>
        /// <p>Constraints: A value between 0 and 100.</p>
        /// <p>Default: <code>100</code></p>
        pub fn rekey_fuzz_percentage(mut self, input: i32) -> Self {
            self.rekey_fuzz_percentage = Some(input);
            self
        }
        /// <p>The percentage of the rekey window (determined by <code>RekeyMarginTimeSeconds</code>) during which the rekey time is randomly selected.</p>
        /// <p>Constraints: A value between 0 and 100.</p>
        /// <p>Default: <code>100</code></p>
        pub fn set_rekey_fuzz_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.rekey_fuzz_percentage = input;
            self
        }

        /// <p>The number of packets in an IKE replay window.</p>
        /// <p>Constraints: A value between 64 and 2048.</p>
        /// <p>Default: <code>1024</code></p>
        pub fn replay_window_size(mut self, input: i32) -> Self {
            self.replay_window_size = Some(input);
            self
        }
        /// <p>The number of packets in an IKE replay window.</p>
        /// <p>Constraints: A value between 64 and 2048.</p>
        /// <p>Default: <code>1024</code></p>
        pub fn set_replay_window_size(mut self, input: std::option::Option<i32>) -> Self {
            self.replay_window_size = input;
            self
        }

        /// <p>The number of seconds after which a DPD timeout occurs.</p>
        /// <p>Constraints: A value between 0 and 30.</p>
        /// <p>Default: <code>30</code>
        /// </p>
        pub fn dpd_timeout_seconds(mut self, input: i32) -> Self {
            self.dpd_timeout_seconds = Some(input);
            self
        }
        /// <p>The number of seconds after which a DPD timeout occurs.</p>
        /// <p>Constraints: A value between 0 and 30.</p>
        /// <p>Default: <code>30</code>
        /// </p>
        pub fn set_dpd_timeout_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.dpd_timeout_seconds = input;
            self
        }

        /// Appends an item to `phase1_encryption_algorithms`.
        ///
        /// To override the contents of this collection use [`set_phase1_encryption_algorithms`](Self::set_phase1_encryption_algorithms).
        ///
        /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
        pub fn phase1_encryption_algorithms(mut self, input: impl std::convert::Into<crate::model::Phase1EncryptionAlgorithmsRequestListValue>) -> Self {
            let mut v = self.phase1_encryption_algorithms.unwrap_or_default();
            v.push(input.into());
            self.phase1_encryption_algorithms = Some(v);
            self
        }
        /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
        pub fn set_phase1_encryption_algorithms(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase1EncryptionAlgorithmsRequestListValue>>) -> Self {
            self.phase1_encryption_algorithms = input;
            self
        }

        /// Appends an item to `phase2_encryption_algorithms`.
        ///
        /// To override the contents of this collection use [`set_phase2_encryption_algorithms`](Self::set_phase2_encryption_algorithms).
        ///
        /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
        pub fn phase2_encryption_algorithms(mut self, input: impl std::convert::Into<crate::model::Phase2EncryptionAlgorithmsRequestListValue>) -> Self {
            let mut v = self.phase2_encryption_algorithms.unwrap_or_default();
            v.push(input.into());
            self.phase2_encryption_algorithms = Some(v);
            self
        }
        /// <p>One or more encryption algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>AES128</code> | <code>AES256</code></p>
        pub fn set_phase2_encryption_algorithms(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase2EncryptionAlgorithmsRequestListValue>>) -> Self {
            self.phase2_encryption_algorithms = input;
            self
        }

        /// Appends an item to `phase1_integrity_algorithms`.
        ///
        /// To override the contents of this collection use [`set_phase1_integrity_algorithms`](Self::set_phase1_integrity_algorithms).
        ///
        /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
        pub fn phase1_integrity_algorithms(mut self, input: impl std::convert::Into<crate::model::Phase1IntegrityAlgorithmsRequestListValue>) -> Self {
            let mut v = self.phase1_integrity_algorithms.unwrap_or_default();
            v.push(input.into());
            self.phase1_integrity_algorithms = Some(v);
            self
        }
        /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
        pub fn set_phase1_integrity_algorithms(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase1IntegrityAlgorithmsRequestListValue>>) -> Self {
            self.phase1_integrity_algorithms = input;
            self
        }

        /// Appends an item to `phase2_integrity_algorithms`.
        ///
        /// To override the contents of this collection use [`set_phase2_integrity_algorithms`](Self::set_phase2_integrity_algorithms).
        ///
        /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
        pub fn phase2_integrity_algorithms(mut self, input: impl std::convert::Into<crate::model::Phase2IntegrityAlgorithmsRequestListValue>) -> Self {
            let mut v = self.phase2_integrity_algorithms.unwrap_or_default();
            v.push(input.into());
            self.phase2_integrity_algorithms = Some(v);
            self
        }
        /// <p>One or more integrity algorithms that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>SHA1</code> | <code>SHA2-256</code></p>
        pub fn set_phase2_integrity_algorithms(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase2IntegrityAlgorithmsRequestListValue>>) -> Self {
            self.phase2_integrity_algorithms = input;
            self
        }

        /// Appends an item to `phase1_dh_group_numbers`.
        ///
        /// To override the contents of this collection use [`set_phase1_dh_group_numbers`](Self::set_phase1_dh_group_numbers).
        ///
        /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>2</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
        pub fn phase1_dh_group_numbers(mut self, input: impl std::convert::Into<crate::model::Phase1DHGroupNumbersRequestListValue>) -> Self {
            let mut v = self.phase1_dh_group_numbers.unwrap_or_default();
            v.push(input.into());
            self.phase1_dh_group_numbers = Some(v);
            self
        }
        /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 1 IKE negotiations.</p>
        /// <p>Valid values: <code>2</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
        pub fn set_phase1_dh_group_numbers(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase1DHGroupNumbersRequestListValue>>) -> Self {
            self.phase1_dh_group_numbers = input;
            self
        }

        /// Appends an item to `phase2_dh_group_numbers`.
        ///
        /// To override the contents of this collection use [`set_phase2_dh_group_numbers`](Self::set_phase2_dh_group_numbers).
        ///
        /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>2</code> | <code>5</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
        pub fn phase2_dh_group_numbers(mut self, input: impl std::convert::Into<crate::model::Phase2DHGroupNumbersRequestListValue>) -> Self {
            let mut v = self.phase2_dh_group_numbers.unwrap_or_default();
            v.push(input.into());
            self.phase2_dh_group_numbers = Some(v);
            self
        }
        /// <p>One or more Diffie-Hellman group numbers that are permitted for the VPN tunnel for phase 2 IKE negotiations.</p>
        /// <p>Valid values: <code>2</code> | <code>5</code> | <code>14</code> | <code>15</code> | <code>16</code> | <code>17</code> | <code>18</code> | <code>22</code> | <code>23</code> | <code>24</code></p>
        pub fn set_phase2_dh_group_numbers(mut self, input: std::option::Option<std::vec::Vec<crate::model::Phase2DHGroupNumbersRequestListValue>>) -> Self {
            self.phase2_dh_group_numbers = input;
            self
        }

        /// Appends an item to `ike_versions`.
        ///
        /// To override the contents of this collection use [`set_ike_versions`](Self::set_ike_versions).
        ///
        /// <p>The IKE versions that are permitted for the VPN tunnel.</p>
        /// <p>Valid values: <code>ikev1</code> | <code>ikev2</code></p>
        pub fn ike_versions(mut self, input: impl std::convert::Into<crate::model::IKEVersionsRequestListValue>) -> Self {
            let mut v = self.ike_versions.unwrap_or_default();
            v.push(input.into());
            self.ike_versions = Some(v);
            self
        }
        /// <p>The IKE versions that are permitted for the VPN tunnel.</p>
        /// <p>Valid values: <code>ikev1</code> | <code>ikev2</code></p>
        pub fn set_ike_versions(mut self, input: std::option::Option<std::vec::Vec<crate::model::IKEVersionsRequestListValue>>) -> Self {
            self.ike_versions = input;
            self
        }
        /// Consumes the builder and constructs a [`VpnTunnelOptionsSpecification`](crate::model::VpnTunnelOptionsSpecification)
        pub fn build(self) -> crate::model::VpnTunnelOptionsSpecification {
            crate::model::VpnTunnelOptionsSpecification {
                tunnel_inside_cidr: self.tunnel_inside_cidr,
                pre_shared_key: self.pre_shared_key,
                phase1_lifetime_seconds: self.phase1_lifetime_seconds,
                phase2_lifetime_seconds: self.phase2_lifetime_seconds,
                rekey_margin_time_seconds: self.rekey_margin_time_seconds,
                rekey_fuzz_percentage: self.rekey_fuzz_percentage,
                replay_window_size: self.replay_window_size,
                dpd_timeout_seconds: self.dpd_timeout_seconds,
                phase1_encryption_algorithms: self.phase1_encryption_algorithms,
                phase2_encryption_algorithms: self.phase2_encryption_algorithms,
                phase1_integrity_algorithms: self.phase1_integrity_algorithms,
                phase2_integrity_algorithms: self.phase2_integrity_algorithms,
                phase1_dh_group_numbers: self.phase1_dh_group_numbers,
                phase2_dh_group_numbers: self.phase2_dh_group_numbers,
                ike_versions: self.ike_versions,
            }
        }
    }
}
impl VpnTunnelOptionsSpecification {
    /// Creates a new builder-style object to manufacture [`VpnTunnelOptionsSpecification`](crate::model::VpnTunnelOptionsSpecification)
    pub fn builder() -> crate::model::vpn_tunnel_options_specification::Builder {
        crate::model::vpn_tunnel_options_specification::Builder::default()
    }
}

/// <p>Information about the error that occurred. For more information about errors, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/errors-overview.html">Error Codes</a>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct UnsuccessfulItemError {
    /// <p>The error code.</p>
    pub code: std::option::Option<std::string::String>,
    /// <p>The error message accompanying the error code.</p>
    pub message: std::option::Option<std::string::String>,
}
impl UnsuccessfulItemError {
    /// <p>The error code.</p>
    pub fn code(&self) -> std::option::Option<&str> {
        self.code.as_deref()
    }

    /// <p>The error message accompanying the error code.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for UnsuccessfulItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.field("Message", &self.message);
        formatter.finish()
    }
}
/// See [`UnsuccessfulItemError`](crate::model::UnsuccessfulItemError)
pub mod unsuccessful_item_error {
    /// A builder for [`UnsuccessfulItemError`](crate::model::UnsuccessfulItemError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The error code.</p>
        pub fn code(mut self, input: impl Into<std::string::String>) -> Self {
            self.code = Some(input.into());
            self
        }
        /// <p>The error code.</p>
        pub fn set_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.code = input;
            self
        }

        /// <p>The error message accompanying the error code.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message accompanying the error code.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`UnsuccessfulItemError`](crate::model::UnsuccessfulItemError)
        pub fn build(self) -> crate::model::UnsuccessfulItemError {
            crate::model::UnsuccessfulItemError {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl UnsuccessfulItemError {
    /// Creates a new builder-style object to manufacture [`UnsuccessfulItemError`](crate::model::UnsuccessfulItemError)
    pub fn builder() -> crate::model::unsuccessful_item_error::Builder {
        crate::model::unsuccessful_item_error::Builder::default()
    }
}

/// <p>Information about items that were not successfully processed in a batch call.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct UnsuccessfulItem {
    /// <p>Information about the error.</p>
    pub error: std::option::Option<crate::model::UnsuccessfulItemError>,
    /// <p>The ID of the resource.</p>
    pub resource_id: std::option::Option<std::string::String>,
}
impl UnsuccessfulItem {
    /// <p>Information about the error.</p>
    pub fn error(&self) -> std::option::Option<&crate::model::UnsuccessfulItemError> {
        self.error.as_ref()
    }

    /// <p>The ID of the resource.</p>
    pub fn resource_id(&self) -> std::option::Option<&str> {
        self.resource_id.as_deref()
    }
}
impl std::fmt::Debug for UnsuccessfulItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Error", &self.error);
        formatter.field("ResourceId", &self.resource_id);
        formatter.finish()
    }
}
/// See [`UnsuccessfulItem`](crate::model::UnsuccessfulItem)
pub mod unsuccessful_item {
    /// A builder for [`UnsuccessfulItem`](crate::model::UnsuccessfulItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) error: std::option::Option<crate::model::UnsuccessfulItemError>,
        pub(crate) resource_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Information about the error.</p>
        pub fn error(mut self, input: crate::model::UnsuccessfulItemError) -> Self {
            self.error = Some(input);
            self
        }
        /// <p>Information about the error.</p>
        pub fn set_error(mut self, input: std::option::Option<crate::model::UnsuccessfulItemError>) -> Self {
            self.error = input;
            self
        }

        /// <p>The ID of the resource.</p>
        pub fn resource_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(input.into());
            self
        }
        /// <p>The ID of the resource.</p>
        pub fn set_resource_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_id = input;
            self
        }
        /// Consumes the builder and constructs a [`UnsuccessfulItem`](crate::model::UnsuccessfulItem)
        pub fn build(self) -> crate::model::UnsuccessfulItem {
            crate::model::UnsuccessfulItem {
                error: self.error,
                resource_id: self.resource_id,
            }
        }
    }
}
impl UnsuccessfulItem {
    /// Creates a new builder-style object to manufacture [`UnsuccessfulItem`](crate::model::UnsuccessfulItem)
    pub fn builder() -> crate::model::unsuccessful_item::Builder {
        crate::model::unsuccessful_item::Builder::default()
    }
}

/// <p>Describes the state of a CIDR block.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct VpcCidrBlockState {
    /// <p>The state of the CIDR block.</p>
    pub state: std::option::Option<crate::model::VpcCidrBlockStateCode>,
    /// <p>A message about the status, if applicable.</p>
    pub status_message: std::option::Option<std::string::String>,
}
impl VpcCidrBlockState {
    /// <p>The state of the CIDR block.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::VpcCidrBlockStateCode> {
        self.state.as_ref()
    }

    /// <p>A message about the status, if applicable.</p>
    pub fn status_message(&self) -> std::option::Option<&str> {
        self.status_message.as_deref()
    }
}
impl std::fmt::Debug for VpcCidrBlockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("State", &self.state);
        formatter.field("StatusMessage", &self.status_message);
        formatter.finish()
    }
}
/// See [`VpcCidrBlockState`](crate::model::VpcCidrBlockState)
pub mod vpc_cidr_block_state {
    /// A builder for [`VpcCidrBlockState`](crate::model::VpcCidrBlockState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::VpcCidrBlockStateCode>,
        pub(crate) status_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The state of the CIDR block.</p>
        pub fn state(mut self, input: crate::model::VpcCidrBlockStateCode) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the CIDR block.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::VpcCidrBlockStateCode>) -> Self {
            self.state = input;
            self
        }

        /// <p>A message about the status, if applicable.</p>
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        /// <p>A message about the status, if applicable.</p>
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        /// Consumes the builder and constructs a [`VpcCidrBlockState`](crate::model::VpcCidrBlockState)
        pub fn build(self) -> crate::model::VpcCidrBlockState {
            crate::model::VpcCidrBlockState {
                state: self.state,
                status_message: self.status_message,
            }
        }
    }
}
impl VpcCidrBlockState {
    /// Creates a new builder-style object to manufacture [`VpcCidrBlockState`](crate::model::VpcCidrBlockState)
    pub fn builder() -> crate::model::vpc_cidr_block_state::Builder {
        crate::model::vpc_cidr_block_state::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VpcCidrBlockStateCode {
    #[allow(missing_docs)] // documentation missing in model
    Associating,
    #[allow(missing_docs)] // documentation missing in model
    Associated,
    #[allow(missing_docs)] // documentation missing in model
    Disassociating,
    #[allow(missing_docs)] // documentation missing in model
    Disassociated,
    #[allow(missing_docs)] // documentation missing in model
    Failing,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VpcCidrBlockStateCode {
    fn from(s: &str) -> Self {
        match s {
            "associating" => VpcCidrBlockStateCode::Associating,
            "associated" => VpcCidrBlockStateCode::Associated,
            "disassociating" => VpcCidrBlockStateCode::Disassociating,
            "disassociated" => VpcCidrBlockStateCode::Disassociated,
            "failing" => VpcCidrBlockStateCode::Failing,
            "failed" => VpcCidrBlockStateCode::Failed,
            other => VpcCidrBlockStateCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VpcCidrBlockStateCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VpcCidrBlockStateCode::from(s))
    }
}
impl VpcCidrBlockStateCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            VpcCidrBlockStateCode::Associating => "associating",
            VpcCidrBlockStateCode::Associated => "associated",
            VpcCidrBlockStateCode::Disassociating => "disassociating",
            VpcCidrBlockStateCode::Disassociated => "disassociated",
            VpcCidrBlockStateCode::Failing => "failing",
            VpcCidrBlockStateCode::Failed => "failed",
            VpcCidrBlockStateCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "associating",
            "associated",
            "disassociating",
            "disassociated",
            "failing",
            "failed",
        ]
    }
}
impl AsRef<str> for VpcCidrBlockStateCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes an IPv6 CIDR block associated with a VPC.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct VpcIpv6CidrBlockAssociation {
    /// <p>The association ID for the IPv6 CIDR block.</p>
    pub association_id: std::option::Option<std::string::String>,
    /// <p>The IPv6 CIDR block.</p>
    pub ipv6_cidr_block: std::option::Option<std::string::String>,
    /// <p>Information about the state of the CIDR block.</p>
    pub ipv6_cidr_block_state: std::option::Option<crate::model::VpcCidrBlockState>,
    /// <p>The name of the unique set of Availability Zones, Local Zones, or Wavelength Zones from which AWS advertises IP addresses.</p>
    pub network_border_group: std::option::Option<std::string::String>,
    /// <p>The ID of the IPv6 address pool from which the IPv6 CIDR block is allocated.</p>
    pub ipv6_pool: std::option::Option<std::string::String>,
}
impl VpcIpv6CidrBlockAssociation {
    /// <p>The association ID for the IPv6 CIDR block.</p>
    pub fn association_id(&self) -> std::option::Option<&str> {
        self.association_id.as_deref()
    }

    /// <p>The IPv6 CIDR block.</p>
    pub fn ipv6_cidr_block(&self) -> std::option::Option<&str> {
        self.ipv6_cidr_block.as_deref()
    }

    /// <p>Information about the state of the CIDR block.</p>
    pub fn ipv6_cidr_block_state(&self) -> std::option::Option<&crate::model::VpcCidrBlockState> {
        self.ipv6_cidr_block_state.as_ref()
    }

    /// <p>The name of the unique set of Availability Zones, Local Zones, or Wavelength Zones from which AWS advertises IP addresses.</p>
    pub fn network_border_group(&self) -> std::option::Option<&str> {
        self.network_border_group.as_deref()
    }

    /// <p>The ID of the IPv6 address pool from which the IPv6 CIDR block is allocated.</p>
    pub fn ipv6_pool(&self) -> std::option::Option<&str> {
        self.ipv6_pool.as_deref()
    }
}
impl std::fmt::Debug for VpcIpv6CidrBlockAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AssociationId", &self.association_id);
        formatter.field("Ipv6CidrBlock", &self.ipv6_cidr_block);
        formatter.field("Ipv6CidrBlockState", &self.ipv6_cidr_block_state);
        formatter.field("NetworkBorderGroup", &self.network_border_group);
        formatter.field("Ipv6Pool", &self.ipv6_pool);
        formatter.finish()
    }
}
/// See [`VpcIpv6CidrBlockAssociation`](crate::model::VpcIpv6CidrBlockAssociation)
pub mod vpc_ipv6_cidr_block_association {
    /// A builder for [`VpcIpv6CidrBlockAssociation`](crate::model::VpcIpv6CidrBlockAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) ipv6_cidr_block: std::option::Option<std::string::String>,
        pub(crate) ipv6_cidr_block_state: std::option::Option<crate::model::VpcCidrBlockState>,
        pub(crate) network_border_group: std::option::Option<std::string::String>,
        pub(crate) ipv6_pool: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The association ID for the IPv6 CIDR block.</p>
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        /// <p>The association ID for the IPv6 CIDR block.</p>
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
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

        /// <p>Information about the state of the CIDR block.</p>
        pub fn ipv6_cidr_block_state(mut self, input: crate::model::VpcCidrBlockState) -> Self {
            self.ipv6_cidr_block_state = Some(input);
            self
        }
        /// <p>Information about the state of the CIDR block.</p>
        pub fn set_ipv6_cidr_block_state(mut self, input: std::option::Option<crate::model::VpcCidrBlockState>) -> Self {
            self.ipv6_cidr_block_state = input;
            self
        }

        /// <p>The name of the unique set of Availability Zones, Local Zones, or Wavelength Zones from which AWS advertises IP addresses.</p>
        pub fn network_border_group(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_border_group = Some(input.into());
            self
        }
        /// <p>The name of the unique set of Availability Zones, Local Zones, or Wavelength Zones from which AWS advertises IP addresses.</p>
        pub fn set_network_border_group(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_border_group = input;
            self
        }

        /// <p>The ID of the IPv6 address pool from which the IPv6 CIDR block is allocated.</p>
        pub fn ipv6_pool(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_pool = Some(input.into());
            self
        }
        /// <p>The ID of the IPv6 address pool from which the IPv6 CIDR block is allocated.</p>
        pub fn set_ipv6_pool(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_pool = input;
            self
        }
        /// Consumes the builder and constructs a [`VpcIpv6CidrBlockAssociation`](crate::model::VpcIpv6CidrBlockAssociation)
        pub fn build(self) -> crate::model::VpcIpv6CidrBlockAssociation {
            crate::model::VpcIpv6CidrBlockAssociation {
                association_id: self.association_id,
                ipv6_cidr_block: self.ipv6_cidr_block,
                ipv6_cidr_block_state: self.ipv6_cidr_block_state,
                network_border_group: self.network_border_group,
                ipv6_pool: self.ipv6_pool,
            }
        }
    }
}
impl VpcIpv6CidrBlockAssociation {
    /// Creates a new builder-style object to manufacture [`VpcIpv6CidrBlockAssociation`](crate::model::VpcIpv6CidrBlockAssociation)
    pub fn builder() -> crate::model::vpc_ipv6_cidr_block_association::Builder {
        crate::model::vpc_ipv6_cidr_block_association::Builder::default()
    }
}

/// <p>Describes an IPv4 CIDR block associated with a VPC.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct VpcCidrBlockAssociation {
    /// <p>The association ID for the IPv4 CIDR block.</p>
    pub association_id: std::option::Option<std::string::String>,
    /// <p>The IPv4 CIDR block.</p>
    pub cidr_block: std::option::Option<std::string::String>,
    /// <p>Information about the state of the CIDR block.</p>
    pub cidr_block_state: std::option::Option<crate::model::VpcCidrBlockState>,
}
impl VpcCidrBlockAssociation {
    /// <p>The association ID for the IPv4 CIDR block.</p>
    pub fn association_id(&self) -> std::option::Option<&str> {
        self.association_id.as_deref()
    }

    /// <p>The IPv4 CIDR block.</p>
    pub fn cidr_block(&self) -> std::option::Option<&str> {
        self.cidr_block.as_deref()
    }

    /// <p>Information about the state of the CIDR block.</p>
    pub fn cidr_block_state(&self) -> std::option::Option<&crate::model::VpcCidrBlockState> {
        self.cidr_block_state.as_ref()
    }
}
impl std::fmt::Debug for VpcCidrBlockAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AssociationId", &self.association_id);
        formatter.field("CidrBlock", &self.cidr_block);
        formatter.field("CidrBlockState", &self.cidr_block_state);
        formatter.finish()
    }
}
/// See [`VpcCidrBlockAssociation`](crate::model::VpcCidrBlockAssociation)
pub mod vpc_cidr_block_association {
    /// A builder for [`VpcCidrBlockAssociation`](crate::model::VpcCidrBlockAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) cidr_block: std::option::Option<std::string::String>,
        pub(crate) cidr_block_state: std::option::Option<crate::model::VpcCidrBlockState>,
    }
    impl Builder {
        /// <p>The association ID for the IPv4 CIDR block.</p>
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        /// <p>The association ID for the IPv4 CIDR block.</p>
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
            self
        }

        /// <p>The IPv4 CIDR block.</p>
        pub fn cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv4 CIDR block.</p>
        pub fn set_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_block = input;
            self
        }

        /// <p>Information about the state of the CIDR block.</p>
        pub fn cidr_block_state(mut self, input: crate::model::VpcCidrBlockState) -> Self {
            self.cidr_block_state = Some(input);
            self
        }
        /// <p>Information about the state of the CIDR block.</p>
        pub fn set_cidr_block_state(mut self, input: std::option::Option<crate::model::VpcCidrBlockState>) -> Self {
            self.cidr_block_state = input;
            self
        }
        /// Consumes the builder and constructs a [`VpcCidrBlockAssociation`](crate::model::VpcCidrBlockAssociation)
        pub fn build(self) -> crate::model::VpcCidrBlockAssociation {
            crate::model::VpcCidrBlockAssociation {
                association_id: self.association_id,
                cidr_block: self.cidr_block,
                cidr_block_state: self.cidr_block_state,
            }
        }
    }
}
impl VpcCidrBlockAssociation {
    /// Creates a new builder-style object to manufacture [`VpcCidrBlockAssociation`](crate::model::VpcCidrBlockAssociation)
    pub fn builder() -> crate::model::vpc_cidr_block_association::Builder {
        crate::model::vpc_cidr_block_association::Builder::default()
    }
}

/// <p>Describes a VPC.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Vpc {
    /// <p>The primary IPv4 CIDR block for the VPC.</p>
    pub cidr_block: std::option::Option<std::string::String>,
    /// <p>The ID of the set of DHCP options you've associated with the VPC.</p>
    pub dhcp_options_id: std::option::Option<std::string::String>,
    /// <p>The current state of the VPC.</p>
    pub state: std::option::Option<crate::model::VpcState>,
    /// <p>The ID of the VPC.</p>
    pub vpc_id: std::option::Option<std::string::String>,
    /// <p>The ID of the AWS account that owns the VPC.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The allowed tenancy of instances launched into the VPC.</p>
    pub instance_tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>Information about the IPv6 CIDR blocks associated with the VPC.</p>
    pub ipv6_cidr_block_association_set: std::option::Option<std::vec::Vec<crate::model::VpcIpv6CidrBlockAssociation>>,
    /// <p>Information about the IPv4 CIDR blocks associated with the VPC.</p>
    pub cidr_block_association_set: std::option::Option<std::vec::Vec<crate::model::VpcCidrBlockAssociation>>,
    /// <p>Indicates whether the VPC is the default VPC.</p>
    pub is_default: std::option::Option<bool>,
    /// <p>Any tags assigned to the VPC.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl Vpc {
    /// <p>The primary IPv4 CIDR block for the VPC.</p>
    pub fn cidr_block(&self) -> std::option::Option<&str> {
        self.cidr_block.as_deref()
    }

    /// <p>The ID of the set of DHCP options you've associated with the VPC.</p>
    pub fn dhcp_options_id(&self) -> std::option::Option<&str> {
        self.dhcp_options_id.as_deref()
    }

    /// <p>The current state of the VPC.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::VpcState> {
        self.state.as_ref()
    }

    /// <p>The ID of the VPC.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }

    /// <p>The ID of the AWS account that owns the VPC.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The allowed tenancy of instances launched into the VPC.</p>
    pub fn instance_tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// <p>Information about the IPv6 CIDR blocks associated with the VPC.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_cidr_block_association_set.is_none()`.
    pub fn ipv6_cidr_block_association_set(&self) -> &[crate::model::VpcIpv6CidrBlockAssociation] {
        self.ipv6_cidr_block_association_set.as_deref().unwrap_or_default()
    }

    /// <p>Information about the IPv4 CIDR blocks associated with the VPC.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.cidr_block_association_set.is_none()`.
    pub fn cidr_block_association_set(&self) -> &[crate::model::VpcCidrBlockAssociation] {
        self.cidr_block_association_set.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether the VPC is the default VPC.</p>
    pub fn is_default(&self) -> std::option::Option<bool> {
        self.is_default
    }

    /// <p>Any tags assigned to the VPC.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for Vpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CidrBlock", &self.cidr_block);
        formatter.field("DhcpOptionsId", &self.dhcp_options_id);
        formatter.enum_field("State", &self.state);
        formatter.field("VpcId", &self.vpc_id);
        formatter.field("OwnerId", &self.owner_id);
        formatter.enum_field("InstanceTenancy", &self.instance_tenancy);
        formatter.field("Ipv6CidrBlockAssociationSet", &self.ipv6_cidr_block_association_set);
        formatter.field("CidrBlockAssociationSet", &self.cidr_block_association_set);
        formatter.field("IsDefault", &self.is_default);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`Vpc`](crate::model::Vpc)
pub mod vpc {
    /// A builder for [`Vpc`](crate::model::Vpc)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr_block: std::option::Option<std::string::String>,
        pub(crate) dhcp_options_id: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<crate::model::VpcState>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) instance_tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) ipv6_cidr_block_association_set: std::option::Option<std::vec::Vec<crate::model::VpcIpv6CidrBlockAssociation>>,
        pub(crate) cidr_block_association_set: std::option::Option<std::vec::Vec<crate::model::VpcCidrBlockAssociation>>,
        pub(crate) is_default: std::option::Option<bool>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The primary IPv4 CIDR block for the VPC.</p>
        pub fn cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_block = Some(input.into());
            self
        }
        /// <p>The primary IPv4 CIDR block for the VPC.</p>
        pub fn set_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_block = input;
            self
        }

        /// <p>The ID of the set of DHCP options you've associated with the VPC.</p>
        pub fn dhcp_options_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.dhcp_options_id = Some(input.into());
            self
        }
        /// <p>The ID of the set of DHCP options you've associated with the VPC.</p>
        pub fn set_dhcp_options_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.dhcp_options_id = input;
            self
        }

        /// <p>The current state of the VPC.</p>
        pub fn state(mut self, input: crate::model::VpcState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The current state of the VPC.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::VpcState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The ID of the VPC.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }

        /// <p>The ID of the AWS account that owns the VPC.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the AWS account that owns the VPC.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The allowed tenancy of instances launched into the VPC.</p>
        pub fn instance_tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.instance_tenancy = Some(input);
            self
        }
        /// <p>The allowed tenancy of instances launched into the VPC.</p>
        pub fn set_instance_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.instance_tenancy = input;
            self
        }

        /// Appends an item to `ipv6_cidr_block_association_set`.
        ///
        /// To override the contents of this collection use [`set_ipv6_cidr_block_association_set`](Self::set_ipv6_cidr_block_association_set).
        ///
        /// <p>Information about the IPv6 CIDR blocks associated with the VPC.</p>
        pub fn ipv6_cidr_block_association_set(mut self, input: impl std::convert::Into<crate::model::VpcIpv6CidrBlockAssociation>) -> Self {
            let mut v = self.ipv6_cidr_block_association_set.unwrap_or_default();
            v.push(input.into());
            self.ipv6_cidr_block_association_set = Some(v);
            self
        }
        /// <p>Information about the IPv6 CIDR blocks associated with the VPC.</p>
        pub fn set_ipv6_cidr_block_association_set(mut self, input: std::option::Option<std::vec::Vec<crate::model::VpcIpv6CidrBlockAssociation>>) -> Self {
            self.ipv6_cidr_block_association_set = input;
            self
        }

        /// Appends an item to `cidr_block_association_set`.
        ///
        /// To override the contents of this collection use [`set_cidr_block_association_set`](Self::set_cidr_block_association_set).
        ///
        /// <p>Information about the IPv4 CIDR blocks associated with the VPC.</p>
        pub fn cidr_block_association_set(mut self, input: impl std::convert::Into<crate::model::VpcCidrBlockAssociation>) -> Self {
            let mut v = self.cidr_block_association_set.unwrap_or_default();
            v.push(input.into());
            self.cidr_block_association_set = Some(v);
            self
        }
        /// <p>Information about the IPv4 CIDR blocks associated with the VPC.</p>
        pub fn set_cidr_block_association_set(mut self, input: std::option::Option<std::vec::Vec<crate::model::VpcCidrBlockAssociation>>) -> Self {
            self.cidr_block_association_set = input;
            self
        }

        /// <p>Indicates whether the VPC is the default VPC.</p>
        pub fn is_default(mut self, input: bool) -> Self {
            self.is_default = Some(input);
            self
        }
        /// <p>Indicates whether the VPC is the default VPC.</p>
        pub fn set_is_default(mut self, input: std::option::Option<bool>) -> Self {
            self.is_default = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the VPC.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the VPC.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`Vpc`](crate::model::Vpc)
        pub fn build(self) -> crate::model::Vpc {
            crate::model::Vpc {
                cidr_block: self.cidr_block,
                dhcp_options_id: self.dhcp_options_id,
                state: self.state,
                vpc_id: self.vpc_id,
                owner_id: self.owner_id,
                instance_tenancy: self.instance_tenancy,
                ipv6_cidr_block_association_set: self.ipv6_cidr_block_association_set,
                cidr_block_association_set: self.cidr_block_association_set,
                is_default: self.is_default,
                tags: self.tags,
            }
        }
    }
}
impl Vpc {
    /// Creates a new builder-style object to manufacture [`Vpc`](crate::model::Vpc)
    pub fn builder() -> crate::model::vpc::Builder {
        crate::model::vpc::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VpcState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Available,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VpcState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => VpcState::Pending,
            "available" => VpcState::Available,
            other => VpcState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VpcState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VpcState::from(s))
    }
}
impl VpcState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            VpcState::Pending => "pending",
            VpcState::Available => "available",
            VpcState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "pending",
            "available",
        ]
    }
}
impl AsRef<str> for VpcState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes association information for an Elastic IP address (IPv4 only).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInterfaceAssociation {
    /// <p>The allocation ID.</p>
    pub allocation_id: std::option::Option<std::string::String>,
    /// <p>The association ID.</p>
    pub association_id: std::option::Option<std::string::String>,
    /// <p>The ID of the owner of the Elastic IP address.</p>
    pub ip_owner_id: std::option::Option<std::string::String>,
    /// <p>The public DNS name.</p>
    pub public_dns_name: std::option::Option<std::string::String>,
    /// <p>The address of the Elastic IP address bound to the network interface.</p>
    pub public_ip: std::option::Option<std::string::String>,
}
impl NetworkInterfaceAssociation {
    /// <p>The allocation ID.</p>
    pub fn allocation_id(&self) -> std::option::Option<&str> {
        self.allocation_id.as_deref()
    }

    /// <p>The association ID.</p>
    pub fn association_id(&self) -> std::option::Option<&str> {
        self.association_id.as_deref()
    }

    /// <p>The ID of the owner of the Elastic IP address.</p>
    pub fn ip_owner_id(&self) -> std::option::Option<&str> {
        self.ip_owner_id.as_deref()
    }

    /// <p>The public DNS name.</p>
    pub fn public_dns_name(&self) -> std::option::Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// <p>The address of the Elastic IP address bound to the network interface.</p>
    pub fn public_ip(&self) -> std::option::Option<&str> {
        self.public_ip.as_deref()
    }
}
impl std::fmt::Debug for NetworkInterfaceAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AllocationId", &self.allocation_id);
        formatter.field("AssociationId", &self.association_id);
        formatter.field("IpOwnerId", &self.ip_owner_id);
        formatter.field("PublicDnsName", &self.public_dns_name);
        formatter.field("PublicIp", &self.public_ip);
        formatter.finish()
    }
}
/// See [`NetworkInterfaceAssociation`](crate::model::NetworkInterfaceAssociation)
pub mod network_interface_association {
    /// A builder for [`NetworkInterfaceAssociation`](crate::model::NetworkInterfaceAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) allocation_id: std::option::Option<std::string::String>,
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) ip_owner_id: std::option::Option<std::string::String>,
        pub(crate) public_dns_name: std::option::Option<std::string::String>,
        pub(crate) public_ip: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The allocation ID.</p>
        pub fn allocation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.allocation_id = Some(input.into());
            self
        }
        /// <p>The allocation ID.</p>
        pub fn set_allocation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.allocation_id = input;
            self
        }

        /// <p>The association ID.</p>
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        /// <p>The association ID.</p>
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
            self
        }

        /// <p>The ID of the owner of the Elastic IP address.</p>
        pub fn ip_owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ip_owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the owner of the Elastic IP address.</p>
        pub fn set_ip_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ip_owner_id = input;
            self
        }

        /// <p>The public DNS name.</p>
        pub fn public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_dns_name = Some(input.into());
            self
        }
        /// <p>The public DNS name.</p>
        pub fn set_public_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_dns_name = input;
            self
        }

        /// <p>The address of the Elastic IP address bound to the network interface.</p>
        pub fn public_ip(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_ip = Some(input.into());
            self
        }
        /// <p>The address of the Elastic IP address bound to the network interface.</p>
        pub fn set_public_ip(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.public_ip = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterfaceAssociation`](crate::model::NetworkInterfaceAssociation)
        pub fn build(self) -> crate::model::NetworkInterfaceAssociation {
            crate::model::NetworkInterfaceAssociation {
                allocation_id: self.allocation_id,
                association_id: self.association_id,
                ip_owner_id: self.ip_owner_id,
                public_dns_name: self.public_dns_name,
                public_ip: self.public_ip,
            }
        }
    }
}
impl NetworkInterfaceAssociation {
    /// Creates a new builder-style object to manufacture [`NetworkInterfaceAssociation`](crate::model::NetworkInterfaceAssociation)
    pub fn builder() -> crate::model::network_interface_association::Builder {
        crate::model::network_interface_association::Builder::default()
    }
}

/// <p>Describes a network interface attachment.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInterfaceAttachment {
    /// <p>The timestamp indicating when the attachment initiated.</p>
    pub attach_time: std::option::Option<smithy_types::Instant>,
    /// <p>The ID of the network interface attachment.</p>
    pub attachment_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The device index of the network interface attachment on the instance.</p>
    pub device_index: std::option::Option<i32>,
    /// <p>The ID of the instance.</p>
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The AWS account ID of the owner of the instance.</p>
    pub instance_owner_id: std::option::Option<std::string::String>,
    /// <p>The attachment state.</p>
    pub status: std::option::Option<crate::model::AttachmentStatus>,
}
impl NetworkInterfaceAttachment {
    /// <p>The timestamp indicating when the attachment initiated.</p>
    pub fn attach_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.attach_time.as_ref()
    }

    /// <p>The ID of the network interface attachment.</p>
    pub fn attachment_id(&self) -> std::option::Option<&str> {
        self.attachment_id.as_deref()
    }

    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The device index of the network interface attachment on the instance.</p>
    pub fn device_index(&self) -> std::option::Option<i32> {
        self.device_index
    }

    /// <p>The ID of the instance.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }

    /// <p>The AWS account ID of the owner of the instance.</p>
    pub fn instance_owner_id(&self) -> std::option::Option<&str> {
        self.instance_owner_id.as_deref()
    }

    /// <p>The attachment state.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::AttachmentStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Debug for NetworkInterfaceAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AttachTime", &self.attach_time);
        formatter.field("AttachmentId", &self.attachment_id);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("DeviceIndex", &self.device_index);
        formatter.field("InstanceId", &self.instance_id);
        formatter.field("InstanceOwnerId", &self.instance_owner_id);
        formatter.enum_field("Status", &self.status);
        formatter.finish()
    }
}
/// See [`NetworkInterfaceAttachment`](crate::model::NetworkInterfaceAttachment)
pub mod network_interface_attachment {
    /// A builder for [`NetworkInterfaceAttachment`](crate::model::NetworkInterfaceAttachment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attach_time: std::option::Option<smithy_types::Instant>,
        pub(crate) attachment_id: std::option::Option<std::string::String>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) device_index: std::option::Option<i32>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) instance_owner_id: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::AttachmentStatus>,
    }
    impl Builder {
        /// <p>The timestamp indicating when the attachment initiated.</p>
        pub fn attach_time(mut self, input: smithy_types::Instant) -> Self {
            self.attach_time = Some(input);
            self
        }
        /// <p>The timestamp indicating when the attachment initiated.</p>
        pub fn set_attach_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.attach_time = input;
            self
        }

        /// <p>The ID of the network interface attachment.</p>
        pub fn attachment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.attachment_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface attachment.</p>
        pub fn set_attachment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.attachment_id = input;
            self
        }

        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The device index of the network interface attachment on the instance.</p>
        pub fn device_index(mut self, input: i32) -> Self {
            self.device_index = Some(input);
            self
        }
        /// <p>The device index of the network interface attachment on the instance.</p>
        pub fn set_device_index(mut self, input: std::option::Option<i32>) -> Self {
            self.device_index = input;
            self
        }

        /// <p>The ID of the instance.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of the instance.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }

        /// <p>The AWS account ID of the owner of the instance.</p>
        pub fn instance_owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_owner_id = Some(input.into());
            self
        }
        /// <p>The AWS account ID of the owner of the instance.</p>
        pub fn set_instance_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_owner_id = input;
            self
        }

        /// <p>The attachment state.</p>
        pub fn status(mut self, input: crate::model::AttachmentStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The attachment state.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::AttachmentStatus>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterfaceAttachment`](crate::model::NetworkInterfaceAttachment)
        pub fn build(self) -> crate::model::NetworkInterfaceAttachment {
            crate::model::NetworkInterfaceAttachment {
                attach_time: self.attach_time,
                attachment_id: self.attachment_id,
                delete_on_termination: self.delete_on_termination,
                device_index: self.device_index,
                instance_id: self.instance_id,
                instance_owner_id: self.instance_owner_id,
                status: self.status,
            }
        }
    }
}
impl NetworkInterfaceAttachment {
    /// Creates a new builder-style object to manufacture [`NetworkInterfaceAttachment`](crate::model::NetworkInterfaceAttachment)
    pub fn builder() -> crate::model::network_interface_attachment::Builder {
        crate::model::network_interface_attachment::Builder::default()
    }
}

/// <p>Describes an IPv6 address associated with a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInterfaceIpv6Address {
    /// <p>The IPv6 address.</p>
    pub ipv6_address: std::option::Option<std::string::String>,
}
impl NetworkInterfaceIpv6Address {
    /// <p>The IPv6 address.</p>
    pub fn ipv6_address(&self) -> std::option::Option<&str> {
        self.ipv6_address.as_deref()
    }
}
impl std::fmt::Debug for NetworkInterfaceIpv6Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Ipv6Address", &self.ipv6_address);
        formatter.finish()
    }
}
/// See [`NetworkInterfaceIpv6Address`](crate::model::NetworkInterfaceIpv6Address)
pub mod network_interface_ipv6_address {
    /// A builder for [`NetworkInterfaceIpv6Address`](crate::model::NetworkInterfaceIpv6Address)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ipv6_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv6 address.</p>
        pub fn ipv6_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_address = Some(input.into());
            self
        }
        /// <p>The IPv6 address.</p>
        pub fn set_ipv6_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_address = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterfaceIpv6Address`](crate::model::NetworkInterfaceIpv6Address)
        pub fn build(self) -> crate::model::NetworkInterfaceIpv6Address {
            crate::model::NetworkInterfaceIpv6Address {
                ipv6_address: self.ipv6_address,
            }
        }
    }
}
impl NetworkInterfaceIpv6Address {
    /// Creates a new builder-style object to manufacture [`NetworkInterfaceIpv6Address`](crate::model::NetworkInterfaceIpv6Address)
    pub fn builder() -> crate::model::network_interface_ipv6_address::Builder {
        crate::model::network_interface_ipv6_address::Builder::default()
    }
}

/// <p>Describes the private IPv4 address of a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInterfacePrivateIpAddress {
    /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
    pub association: std::option::Option<crate::model::NetworkInterfaceAssociation>,
    /// <p>Indicates whether this IPv4 address is the primary private IPv4 address of the network interface.</p>
    pub primary: std::option::Option<bool>,
    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
}
impl NetworkInterfacePrivateIpAddress {
    /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
    pub fn association(&self) -> std::option::Option<&crate::model::NetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// <p>Indicates whether this IPv4 address is the primary private IPv4 address of the network interface.</p>
    pub fn primary(&self) -> std::option::Option<bool> {
        self.primary
    }

    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// <p>The private IPv4 address.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }
}
impl std::fmt::Debug for NetworkInterfacePrivateIpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Association", &self.association);
        formatter.field("Primary", &self.primary);
        formatter.field("PrivateDnsName", &self.private_dns_name);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.finish()
    }
}
/// See [`NetworkInterfacePrivateIpAddress`](crate::model::NetworkInterfacePrivateIpAddress)
pub mod network_interface_private_ip_address {
    /// A builder for [`NetworkInterfacePrivateIpAddress`](crate::model::NetworkInterfacePrivateIpAddress)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association: std::option::Option<crate::model::NetworkInterfaceAssociation>,
        pub(crate) primary: std::option::Option<bool>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
        pub fn association(mut self, input: crate::model::NetworkInterfaceAssociation) -> Self {
            self.association = Some(input);
            self
        }
        /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
        pub fn set_association(mut self, input: std::option::Option<crate::model::NetworkInterfaceAssociation>) -> Self {
            self.association = input;
            self
        }

        /// <p>Indicates whether this IPv4 address is the primary private IPv4 address of the network interface.</p>
        pub fn primary(mut self, input: bool) -> Self {
            self.primary = Some(input);
            self
        }
        /// <p>Indicates whether this IPv4 address is the primary private IPv4 address of the network interface.</p>
        pub fn set_primary(mut self, input: std::option::Option<bool>) -> Self {
            self.primary = input;
            self
        }

        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn set_private_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_dns_name = input;
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
        /// Consumes the builder and constructs a [`NetworkInterfacePrivateIpAddress`](crate::model::NetworkInterfacePrivateIpAddress)
        pub fn build(self) -> crate::model::NetworkInterfacePrivateIpAddress {
            crate::model::NetworkInterfacePrivateIpAddress {
                association: self.association,
                primary: self.primary,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
            }
        }
    }
}
impl NetworkInterfacePrivateIpAddress {
    /// Creates a new builder-style object to manufacture [`NetworkInterfacePrivateIpAddress`](crate::model::NetworkInterfacePrivateIpAddress)
    pub fn builder() -> crate::model::network_interface_private_ip_address::Builder {
        crate::model::network_interface_private_ip_address::Builder::default()
    }
}

/// <p>Describes a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct NetworkInterface {
    /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
    pub association: std::option::Option<crate::model::NetworkInterfaceAssociation>,
    /// <p>The network interface attachment.</p>
    pub attachment: std::option::Option<crate::model::NetworkInterfaceAttachment>,
    /// <p>The Availability Zone.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>A description.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>Any security groups for the network interface.</p>
    pub groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>The type of network interface.</p>
    pub interface_type: std::option::Option<crate::model::NetworkInterfaceType>,
    /// <p>The IPv6 addresses associated with the network interface.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::NetworkInterfaceIpv6Address>>,
    /// <p>The MAC address.</p>
    pub mac_address: std::option::Option<std::string::String>,
    /// <p>The ID of the network interface.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub outpost_arn: std::option::Option<std::string::String>,
    /// <p>The AWS account ID of the owner of the network interface.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IPv4 address.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>The private IPv4 addresses associated with the network interface.</p>
    pub private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::NetworkInterfacePrivateIpAddress>>,
    /// <p>The ID of the entity that launched the instance on your behalf (for example, AWS Management Console or Auto Scaling).</p>
    pub requester_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the network interface is being managed by AWS.</p>
    pub requester_managed: std::option::Option<bool>,
    /// <p>Indicates whether traffic to or from the instance is validated.</p>
    pub source_dest_check: std::option::Option<bool>,
    /// <p>The status of the network interface.</p>
    pub status: std::option::Option<crate::model::NetworkInterfaceStatus>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>Any tags assigned to the network interface.</p>
    pub tag_set: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The ID of the VPC.</p>
    pub vpc_id: std::option::Option<std::string::String>,
}
impl NetworkInterface {
    /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
    pub fn association(&self) -> std::option::Option<&crate::model::NetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// <p>The network interface attachment.</p>
    pub fn attachment(&self) -> std::option::Option<&crate::model::NetworkInterfaceAttachment> {
        self.attachment.as_ref()
    }

    /// <p>The Availability Zone.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>A description.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>Any security groups for the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[crate::model::GroupIdentifier] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The type of network interface.</p>
    pub fn interface_type(&self) -> std::option::Option<&crate::model::NetworkInterfaceType> {
        self.interface_type.as_ref()
    }

    /// <p>The IPv6 addresses associated with the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::NetworkInterfaceIpv6Address] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The MAC address.</p>
    pub fn mac_address(&self) -> std::option::Option<&str> {
        self.mac_address.as_deref()
    }

    /// <p>The ID of the network interface.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>The Amazon Resource Name (ARN) of the Outpost.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }

    /// <p>The AWS account ID of the owner of the network interface.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The private DNS hostname name assigned to the instance.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// <p>The private IPv4 address.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>The private IPv4 addresses associated with the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.private_ip_addresses.is_none()`.
    pub fn private_ip_addresses(&self) -> &[crate::model::NetworkInterfacePrivateIpAddress] {
        self.private_ip_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the entity that launched the instance on your behalf (for example, AWS Management Console or Auto Scaling).</p>
    pub fn requester_id(&self) -> std::option::Option<&str> {
        self.requester_id.as_deref()
    }

    /// <p>Indicates whether the network interface is being managed by AWS.</p>
    pub fn requester_managed(&self) -> std::option::Option<bool> {
        self.requester_managed
    }

    /// <p>Indicates whether traffic to or from the instance is validated.</p>
    pub fn source_dest_check(&self) -> std::option::Option<bool> {
        self.source_dest_check
    }

    /// <p>The status of the network interface.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::NetworkInterfaceStatus> {
        self.status.as_ref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>Any tags assigned to the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_set.is_none()`.
    pub fn tag_set(&self) -> &[crate::model::Tag] {
        self.tag_set.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the VPC.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }
}
impl std::fmt::Debug for NetworkInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Association", &self.association);
        formatter.field("Attachment", &self.attachment);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Description", &self.description);
        formatter.field("Groups", &self.groups);
        formatter.enum_field("InterfaceType", &self.interface_type);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("MacAddress", &self.mac_address);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.field("OutpostArn", &self.outpost_arn);
        formatter.field("OwnerId", &self.owner_id);
        formatter.field("PrivateDnsName", &self.private_dns_name);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("PrivateIpAddresses", &self.private_ip_addresses);
        formatter.field("RequesterId", &self.requester_id);
        formatter.field("RequesterManaged", &self.requester_managed);
        formatter.field("SourceDestCheck", &self.source_dest_check);
        formatter.enum_field("Status", &self.status);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("TagSet", &self.tag_set);
        formatter.field("VpcId", &self.vpc_id);
        formatter.finish()
    }
}
/// See [`NetworkInterface`](crate::model::NetworkInterface)
pub mod network_interface {
    /// A builder for [`NetworkInterface`](crate::model::NetworkInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association: std::option::Option<crate::model::NetworkInterfaceAssociation>,
        pub(crate) attachment: std::option::Option<crate::model::NetworkInterfaceAttachment>,
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) interface_type: std::option::Option<crate::model::NetworkInterfaceType>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::NetworkInterfaceIpv6Address>>,
        pub(crate) mac_address: std::option::Option<std::string::String>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::NetworkInterfacePrivateIpAddress>>,
        pub(crate) requester_id: std::option::Option<std::string::String>,
        pub(crate) requester_managed: std::option::Option<bool>,
        pub(crate) source_dest_check: std::option::Option<bool>,
        pub(crate) status: std::option::Option<crate::model::NetworkInterfaceStatus>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) tag_set: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
        pub fn association(mut self, input: crate::model::NetworkInterfaceAssociation) -> Self {
            self.association = Some(input);
            self
        }
        /// <p>The association information for an Elastic IP address (IPv4) associated with the network interface.</p>
        pub fn set_association(mut self, input: std::option::Option<crate::model::NetworkInterfaceAssociation>) -> Self {
            self.association = input;
            self
        }

        /// <p>The network interface attachment.</p>
        pub fn attachment(mut self, input: crate::model::NetworkInterfaceAttachment) -> Self {
            self.attachment = Some(input);
            self
        }
        /// <p>The network interface attachment.</p>
        pub fn set_attachment(mut self, input: std::option::Option<crate::model::NetworkInterfaceAttachment>) -> Self {
            self.attachment = input;
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

        /// <p>A description.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>Any security groups for the network interface.</p>
        pub fn groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>Any security groups for the network interface.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.groups = input;
            self
        }

        /// <p>The type of network interface.</p>
        pub fn interface_type(mut self, input: crate::model::NetworkInterfaceType) -> Self {
            self.interface_type = Some(input);
            self
        }
        /// <p>The type of network interface.</p>
        pub fn set_interface_type(mut self, input: std::option::Option<crate::model::NetworkInterfaceType>) -> Self {
            self.interface_type = input;
            self
        }

        /// Appends an item to `ipv6_addresses`.
        ///
        /// To override the contents of this collection use [`set_ipv6_addresses`](Self::set_ipv6_addresses).
        ///
        /// <p>The IPv6 addresses associated with the network interface.</p>
        pub fn ipv6_addresses(mut self, input: impl std::convert::Into<crate::model::NetworkInterfaceIpv6Address>) -> Self {
            let mut v = self.ipv6_addresses.unwrap_or_default();
            v.push(input.into());
            self.ipv6_addresses = Some(v);
            self
        }
        /// <p>The IPv6 addresses associated with the network interface.</p>
        pub fn set_ipv6_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::NetworkInterfaceIpv6Address>>) -> Self {
            self.ipv6_addresses = input;
            self
        }

        /// <p>The MAC address.</p>
        pub fn mac_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.mac_address = Some(input.into());
            self
        }
        /// <p>The MAC address.</p>
        pub fn set_mac_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mac_address = input;
            self
        }

        /// <p>The ID of the network interface.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
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

        /// <p>The AWS account ID of the owner of the network interface.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The AWS account ID of the owner of the network interface.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        /// <p>The private DNS hostname name assigned to the instance.</p>
        pub fn set_private_dns_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_dns_name = input;
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

        /// Appends an item to `private_ip_addresses`.
        ///
        /// To override the contents of this collection use [`set_private_ip_addresses`](Self::set_private_ip_addresses).
        ///
        /// <p>The private IPv4 addresses associated with the network interface.</p>
        pub fn private_ip_addresses(mut self, input: impl std::convert::Into<crate::model::NetworkInterfacePrivateIpAddress>) -> Self {
            let mut v = self.private_ip_addresses.unwrap_or_default();
            v.push(input.into());
            self.private_ip_addresses = Some(v);
            self
        }
        /// <p>The private IPv4 addresses associated with the network interface.</p>
        pub fn set_private_ip_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::NetworkInterfacePrivateIpAddress>>) -> Self {
            self.private_ip_addresses = input;
            self
        }

        /// <p>The ID of the entity that launched the instance on your behalf (for example, AWS Management Console or Auto Scaling).</p>
        pub fn requester_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.requester_id = Some(input.into());
            self
        }
        /// <p>The ID of the entity that launched the instance on your behalf (for example, AWS Management Console or Auto Scaling).</p>
        pub fn set_requester_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.requester_id = input;
            self
        }

        /// <p>Indicates whether the network interface is being managed by AWS.</p>
        pub fn requester_managed(mut self, input: bool) -> Self {
            self.requester_managed = Some(input);
            self
        }
        /// <p>Indicates whether the network interface is being managed by AWS.</p>
        pub fn set_requester_managed(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_managed = input;
            self
        }

        /// <p>Indicates whether traffic to or from the instance is validated.</p>
        pub fn source_dest_check(mut self, input: bool) -> Self {
            self.source_dest_check = Some(input);
            self
        }
        /// <p>Indicates whether traffic to or from the instance is validated.</p>
        pub fn set_source_dest_check(mut self, input: std::option::Option<bool>) -> Self {
            self.source_dest_check = input;
            self
        }

        /// <p>The status of the network interface.</p>
        pub fn status(mut self, input: crate::model::NetworkInterfaceStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The status of the network interface.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::NetworkInterfaceStatus>) -> Self {
            self.status = input;
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

        /// Appends an item to `tag_set`.
        ///
        /// To override the contents of this collection use [`set_tag_set`](Self::set_tag_set).
        ///
        /// <p>Any tags assigned to the network interface.</p>
        pub fn tag_set(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tag_set.unwrap_or_default();
            v.push(input.into());
            self.tag_set = Some(v);
            self
        }
        /// <p>Any tags assigned to the network interface.</p>
        pub fn set_tag_set(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tag_set = input;
            self
        }

        /// <p>The ID of the VPC.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterface`](crate::model::NetworkInterface)
        pub fn build(self) -> crate::model::NetworkInterface {
            crate::model::NetworkInterface {
                association: self.association,
                attachment: self.attachment,
                availability_zone: self.availability_zone,
                description: self.description,
                groups: self.groups,
                interface_type: self.interface_type,
                ipv6_addresses: self.ipv6_addresses,
                mac_address: self.mac_address,
                network_interface_id: self.network_interface_id,
                outpost_arn: self.outpost_arn,
                owner_id: self.owner_id,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
                private_ip_addresses: self.private_ip_addresses,
                requester_id: self.requester_id,
                requester_managed: self.requester_managed,
                source_dest_check: self.source_dest_check,
                status: self.status,
                subnet_id: self.subnet_id,
                tag_set: self.tag_set,
                vpc_id: self.vpc_id,
            }
        }
    }
}
impl NetworkInterface {
    /// Creates a new builder-style object to manufacture [`NetworkInterface`](crate::model::NetworkInterface)
    pub fn builder() -> crate::model::network_interface::Builder {
        crate::model::network_interface::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum NetworkInterfaceType {
    #[allow(missing_docs)] // documentation missing in model
    Interface,
    #[allow(missing_docs)] // documentation missing in model
    NatGateway,
    #[allow(missing_docs)] // documentation missing in model
    Efa,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for NetworkInterfaceType {
    fn from(s: &str) -> Self {
        match s {
            "interface" => NetworkInterfaceType::Interface,
            "natGateway" => NetworkInterfaceType::NatGateway,
            "efa" => NetworkInterfaceType::Efa,
            other => NetworkInterfaceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NetworkInterfaceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NetworkInterfaceType::from(s))
    }
}
impl NetworkInterfaceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            NetworkInterfaceType::Interface => "interface",
            NetworkInterfaceType::NatGateway => "natGateway",
            NetworkInterfaceType::Efa => "efa",
            NetworkInterfaceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "interface",
            "natGateway",
            "efa",
        ]
    }
}
impl AsRef<str> for NetworkInterfaceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes the state of an association between a route table and a subnet or gateway.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RouteTableAssociationState {
    /// <p>The state of the association.</p>
    pub state: std::option::Option<crate::model::RouteTableAssociationStateCode>,
    /// <p>A message about the status, if applicable.</p>
    pub status_message: std::option::Option<std::string::String>,
}
impl RouteTableAssociationState {
    /// <p>The state of the association.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::RouteTableAssociationStateCode> {
        self.state.as_ref()
    }

    /// <p>A message about the status, if applicable.</p>
    pub fn status_message(&self) -> std::option::Option<&str> {
        self.status_message.as_deref()
    }
}
impl std::fmt::Debug for RouteTableAssociationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("State", &self.state);
        formatter.field("StatusMessage", &self.status_message);
        formatter.finish()
    }
}
/// See [`RouteTableAssociationState`](crate::model::RouteTableAssociationState)
pub mod route_table_association_state {
    /// A builder for [`RouteTableAssociationState`](crate::model::RouteTableAssociationState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::RouteTableAssociationStateCode>,
        pub(crate) status_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The state of the association.</p>
        pub fn state(mut self, input: crate::model::RouteTableAssociationStateCode) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the association.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::RouteTableAssociationStateCode>) -> Self {
            self.state = input;
            self
        }

        /// <p>A message about the status, if applicable.</p>
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        /// <p>A message about the status, if applicable.</p>
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        /// Consumes the builder and constructs a [`RouteTableAssociationState`](crate::model::RouteTableAssociationState)
        pub fn build(self) -> crate::model::RouteTableAssociationState {
            crate::model::RouteTableAssociationState {
                state: self.state,
                status_message: self.status_message,
            }
        }
    }
}
impl RouteTableAssociationState {
    /// Creates a new builder-style object to manufacture [`RouteTableAssociationState`](crate::model::RouteTableAssociationState)
    pub fn builder() -> crate::model::route_table_association_state::Builder {
        crate::model::route_table_association_state::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RouteTableAssociationStateCode {
    #[allow(missing_docs)] // documentation missing in model
    Associating,
    #[allow(missing_docs)] // documentation missing in model
    Associated,
    #[allow(missing_docs)] // documentation missing in model
    Disassociating,
    #[allow(missing_docs)] // documentation missing in model
    Disassociated,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RouteTableAssociationStateCode {
    fn from(s: &str) -> Self {
        match s {
            "associating" => RouteTableAssociationStateCode::Associating,
            "associated" => RouteTableAssociationStateCode::Associated,
            "disassociating" => RouteTableAssociationStateCode::Disassociating,
            "disassociated" => RouteTableAssociationStateCode::Disassociated,
            "failed" => RouteTableAssociationStateCode::Failed,
            other => RouteTableAssociationStateCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RouteTableAssociationStateCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RouteTableAssociationStateCode::from(s))
    }
}
impl RouteTableAssociationStateCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RouteTableAssociationStateCode::Associating => "associating",
            RouteTableAssociationStateCode::Associated => "associated",
            RouteTableAssociationStateCode::Disassociating => "disassociating",
            RouteTableAssociationStateCode::Disassociated => "disassociated",
            RouteTableAssociationStateCode::Failed => "failed",
            RouteTableAssociationStateCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "associating",
            "associated",
            "disassociating",
            "disassociated",
            "failed",
        ]
    }
}
impl AsRef<str> for RouteTableAssociationStateCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes an association between a route table and a subnet or gateway.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RouteTableAssociation {
    /// <p>Indicates whether this is the main route table.</p>
    pub main: std::option::Option<bool>,
    /// <p>The ID of the association.</p>
    pub route_table_association_id: std::option::Option<std::string::String>,
    /// <p>The ID of the route table.</p>
    pub route_table_id: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet. A subnet ID is not returned for an implicit association.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The ID of the internet gateway or virtual private gateway.</p>
    pub gateway_id: std::option::Option<std::string::String>,
    /// <p>The state of the association.</p>
    pub association_state: std::option::Option<crate::model::RouteTableAssociationState>,
}
impl RouteTableAssociation {
    /// <p>Indicates whether this is the main route table.</p>
    pub fn main(&self) -> std::option::Option<bool> {
        self.main
    }

    /// <p>The ID of the association.</p>
    pub fn route_table_association_id(&self) -> std::option::Option<&str> {
        self.route_table_association_id.as_deref()
    }

    /// <p>The ID of the route table.</p>
    pub fn route_table_id(&self) -> std::option::Option<&str> {
        self.route_table_id.as_deref()
    }

    /// <p>The ID of the subnet. A subnet ID is not returned for an implicit association.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The ID of the internet gateway or virtual private gateway.</p>
    pub fn gateway_id(&self) -> std::option::Option<&str> {
        self.gateway_id.as_deref()
    }

    /// <p>The state of the association.</p>
    pub fn association_state(&self) -> std::option::Option<&crate::model::RouteTableAssociationState> {
        self.association_state.as_ref()
    }
}
impl std::fmt::Debug for RouteTableAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Main", &self.main);
        formatter.field("RouteTableAssociationId", &self.route_table_association_id);
        formatter.field("RouteTableId", &self.route_table_id);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("GatewayId", &self.gateway_id);
        formatter.field("AssociationState", &self.association_state);
        formatter.finish()
    }
}
/// See [`RouteTableAssociation`](crate::model::RouteTableAssociation)
pub mod route_table_association {
    /// A builder for [`RouteTableAssociation`](crate::model::RouteTableAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) main: std::option::Option<bool>,
        pub(crate) route_table_association_id: std::option::Option<std::string::String>,
        pub(crate) route_table_id: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) gateway_id: std::option::Option<std::string::String>,
        pub(crate) association_state: std::option::Option<crate::model::RouteTableAssociationState>,
    }
    impl Builder {
        /// <p>Indicates whether this is the main route table.</p>
        pub fn main(mut self, input: bool) -> Self {
            self.main = Some(input);
            self
        }
        /// <p>Indicates whether this is the main route table.</p>
        pub fn set_main(mut self, input: std::option::Option<bool>) -> Self {
            self.main = input;
            self
        }

        /// <p>The ID of the association.</p>
        pub fn route_table_association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.route_table_association_id = Some(input.into());
            self
        }
        /// <p>The ID of the association.</p>
        pub fn set_route_table_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.route_table_association_id = input;
            self
        }

        /// <p>The ID of the route table.</p>
        pub fn route_table_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.route_table_id = Some(input.into());
            self
        }
        /// <p>The ID of the route table.</p>
        pub fn set_route_table_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.route_table_id = input;
            self
        }

        /// <p>The ID of the subnet. A subnet ID is not returned for an implicit association.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>The ID of the subnet. A subnet ID is not returned for an implicit association.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }

        /// <p>The ID of the internet gateway or virtual private gateway.</p>
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of the internet gateway or virtual private gateway.</p>
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gateway_id = input;
            self
        }

        /// <p>The state of the association.</p>
        pub fn association_state(mut self, input: crate::model::RouteTableAssociationState) -> Self {
            self.association_state = Some(input);
            self
        }
        /// <p>The state of the association.</p>
        pub fn set_association_state(mut self, input: std::option::Option<crate::model::RouteTableAssociationState>) -> Self {
            self.association_state = input;
            self
        }
        /// Consumes the builder and constructs a [`RouteTableAssociation`](crate::model::RouteTableAssociation)
        pub fn build(self) -> crate::model::RouteTableAssociation {
            crate::model::RouteTableAssociation {
                main: self.main,
                route_table_association_id: self.route_table_association_id,
                route_table_id: self.route_table_id,
                subnet_id: self.subnet_id,
                gateway_id: self.gateway_id,
                association_state: self.association_state,
            }
        }
    }
}
impl RouteTableAssociation {
    /// Creates a new builder-style object to manufacture [`RouteTableAssociation`](crate::model::RouteTableAssociation)
    pub fn builder() -> crate::model::route_table_association::Builder {
        crate::model::route_table_association::Builder::default()
    }
}

/// <p>Describes a virtual private gateway propagating route.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct PropagatingVgw {
    /// <p>The ID of the virtual private gateway.</p>
    pub gateway_id: std::option::Option<std::string::String>,
}
impl PropagatingVgw {
    /// <p>The ID of the virtual private gateway.</p>
    pub fn gateway_id(&self) -> std::option::Option<&str> {
        self.gateway_id.as_deref()
    }
}
impl std::fmt::Debug for PropagatingVgw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("GatewayId", &self.gateway_id);
        formatter.finish()
    }
}
/// See [`PropagatingVgw`](crate::model::PropagatingVgw)
pub mod propagating_vgw {
    /// A builder for [`PropagatingVgw`](crate::model::PropagatingVgw)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gateway_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the virtual private gateway.</p>
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of the virtual private gateway.</p>
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gateway_id = input;
            self
        }
        /// Consumes the builder and constructs a [`PropagatingVgw`](crate::model::PropagatingVgw)
        pub fn build(self) -> crate::model::PropagatingVgw {
            crate::model::PropagatingVgw {
                gateway_id: self.gateway_id,
            }
        }
    }
}
impl PropagatingVgw {
    /// Creates a new builder-style object to manufacture [`PropagatingVgw`](crate::model::PropagatingVgw)
    pub fn builder() -> crate::model::propagating_vgw::Builder {
        crate::model::propagating_vgw::Builder::default()
    }
}

/// <p>Describes a route in a route table.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Route {
    /// <p>The IPv4 CIDR block used for the destination match.</p>
    pub destination_cidr_block: std::option::Option<std::string::String>,
    /// <p>The IPv6 CIDR block used for the destination match.</p>
    pub destination_ipv6_cidr_block: std::option::Option<std::string::String>,
    /// <p>The prefix of the AWS service.</p>
    pub destination_prefix_list_id: std::option::Option<std::string::String>,
    /// <p>The ID of the egress-only internet gateway.</p>
    pub egress_only_internet_gateway_id: std::option::Option<std::string::String>,
    /// <p>The ID of a gateway attached to your VPC.</p>
    pub gateway_id: std::option::Option<std::string::String>,
    /// <p>The ID of a NAT instance in your VPC.</p>
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The AWS account ID of the owner of the instance.</p>
    pub instance_owner_id: std::option::Option<std::string::String>,
    /// <p>The ID of a NAT gateway.</p>
    pub nat_gateway_id: std::option::Option<std::string::String>,
    /// <p>The ID of a transit gateway.</p>
    pub transit_gateway_id: std::option::Option<std::string::String>,
    /// <p>The ID of the local gateway.</p>
    pub local_gateway_id: std::option::Option<std::string::String>,
    /// <p>The ID of the network interface.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>Describes how the route was created.</p>
    pub origin: std::option::Option<crate::model::RouteOrigin>,
    /// <p>The state of the route. The <code>blackhole</code> state indicates that the route's target isn't available (for example, the specified gateway isn't attached to the VPC, or the specified NAT instance has been terminated).</p>
    pub state: std::option::Option<crate::model::RouteState>,
    /// <p>The ID of the VPC peering connection, if applicable.</p>
    pub vpc_peering_connection_id: std::option::Option<std::string::String>,
}
impl Route {
    /// <p>The IPv4 CIDR block used for the destination match.</p>
    pub fn destination_cidr_block(&self) -> std::option::Option<&str> {
        self.destination_cidr_block.as_deref()
    }

    /// <p>The IPv6 CIDR block used for the destination match.</p>
    pub fn destination_ipv6_cidr_block(&self) -> std::option::Option<&str> {
        self.destination_ipv6_cidr_block.as_deref()
    }

    /// <p>The prefix of the AWS service.</p>
    pub fn destination_prefix_list_id(&self) -> std::option::Option<&str> {
        self.destination_prefix_list_id.as_deref()
    }

    /// <p>The ID of the egress-only internet gateway.</p>
    pub fn egress_only_internet_gateway_id(&self) -> std::option::Option<&str> {
        self.egress_only_internet_gateway_id.as_deref()
    }

    /// <p>The ID of a gateway attached to your VPC.</p>
    pub fn gateway_id(&self) -> std::option::Option<&str> {
        self.gateway_id.as_deref()
    }

    /// <p>The ID of a NAT instance in your VPC.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }

    /// <p>The AWS account ID of the owner of the instance.</p>
    pub fn instance_owner_id(&self) -> std::option::Option<&str> {
        self.instance_owner_id.as_deref()
    }

    /// <p>The ID of a NAT gateway.</p>
    pub fn nat_gateway_id(&self) -> std::option::Option<&str> {
        self.nat_gateway_id.as_deref()
    }

    /// <p>The ID of a transit gateway.</p>
    pub fn transit_gateway_id(&self) -> std::option::Option<&str> {
        self.transit_gateway_id.as_deref()
    }

    /// <p>The ID of the local gateway.</p>
    pub fn local_gateway_id(&self) -> std::option::Option<&str> {
        self.local_gateway_id.as_deref()
    }

    /// <p>The ID of the network interface.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>Describes how the route was created.</p>
    pub fn origin(&self) -> std::option::Option<&crate::model::RouteOrigin> {
        self.origin.as_ref()
    }

    /// <p>The state of the route. The <code>blackhole</code> state indicates that the route's target isn't available (for example, the specified gateway isn't attached to the VPC, or the specified NAT instance has been terminated).</p>
    pub fn state(&self) -> std::option::Option<&crate::model::RouteState> {
        self.state.as_ref()
    }

    /// <p>The ID of the VPC peering connection, if applicable.</p>
    pub fn vpc_peering_connection_id(&self) -> std::option::Option<&str> {
        self.vpc_peering_connection_id.as_deref()
    }
}
impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DestinationCidrBlock", &self.destination_cidr_block);
        formatter.field("DestinationIpv6CidrBlock", &self.destination_ipv6_cidr_block);
        formatter.field("DestinationPrefixListId", &self.destination_prefix_list_id);
        formatter.field("EgressOnlyInternetGatewayId", &self.egress_only_internet_gateway_id);
        formatter.field("GatewayId", &self.gateway_id);
        formatter.field("InstanceId", &self.instance_id);
        formatter.field("InstanceOwnerId", &self.instance_owner_id);
        formatter.field("NatGatewayId", &self.nat_gateway_id);
        formatter.field("TransitGatewayId", &self.transit_gateway_id);
        formatter.field("LocalGatewayId", &self.local_gateway_id);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.enum_field("Origin", &self.origin);
        formatter.enum_field("State", &self.state);
        formatter.field("VpcPeeringConnectionId", &self.vpc_peering_connection_id);
        formatter.finish()
    }
}
/// See [`Route`](crate::model::Route)
pub mod route {
    /// A builder for [`Route`](crate::model::Route)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) destination_cidr_block: std::option::Option<std::string::String>,
        pub(crate) destination_ipv6_cidr_block: std::option::Option<std::string::String>,
        pub(crate) destination_prefix_list_id: std::option::Option<std::string::String>,
        pub(crate) egress_only_internet_gateway_id: std::option::Option<std::string::String>,
        pub(crate) gateway_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) instance_owner_id: std::option::Option<std::string::String>,
        pub(crate) nat_gateway_id: std::option::Option<std::string::String>,
        pub(crate) transit_gateway_id: std::option::Option<std::string::String>,
        pub(crate) local_gateway_id: std::option::Option<std::string::String>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) origin: std::option::Option<crate::model::RouteOrigin>,
        pub(crate) state: std::option::Option<crate::model::RouteState>,
        pub(crate) vpc_peering_connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv4 CIDR block used for the destination match.</p>
        pub fn destination_cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv4 CIDR block used for the destination match.</p>
        pub fn set_destination_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_cidr_block = input;
            self
        }

        /// <p>The IPv6 CIDR block used for the destination match.</p>
        pub fn destination_ipv6_cidr_block(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_ipv6_cidr_block = Some(input.into());
            self
        }
        /// <p>The IPv6 CIDR block used for the destination match.</p>
        pub fn set_destination_ipv6_cidr_block(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_ipv6_cidr_block = input;
            self
        }

        /// <p>The prefix of the AWS service.</p>
        pub fn destination_prefix_list_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_prefix_list_id = Some(input.into());
            self
        }
        /// <p>The prefix of the AWS service.</p>
        pub fn set_destination_prefix_list_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_prefix_list_id = input;
            self
        }

        /// <p>The ID of the egress-only internet gateway.</p>
        pub fn egress_only_internet_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.egress_only_internet_gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of the egress-only internet gateway.</p>
        pub fn set_egress_only_internet_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.egress_only_internet_gateway_id = input;
            self
        }

        /// <p>The ID of a gateway attached to your VPC.</p>
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of a gateway attached to your VPC.</p>
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gateway_id = input;
            self
        }

        /// <p>The ID of a NAT instance in your VPC.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of a NAT instance in your VPC.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }

        /// <p>The AWS account ID of the owner of the instance.</p>
        pub fn instance_owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_owner_id = Some(input.into());
            self
        }
        /// <p>The AWS account ID of the owner of the instance.</p>
        pub fn set_instance_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_owner_id = input;
            self
        }

        /// <p>The ID of a NAT gateway.</p>
        pub fn nat_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.nat_gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of a NAT gateway.</p>
        pub fn set_nat_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.nat_gateway_id = input;
            self
        }

        /// <p>The ID of a transit gateway.</p>
        pub fn transit_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.transit_gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of a transit gateway.</p>
        pub fn set_transit_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transit_gateway_id = input;
            self
        }

        /// <p>The ID of the local gateway.</p>
        pub fn local_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.local_gateway_id = Some(input.into());
            self
        }
        /// <p>The ID of the local gateway.</p>
        pub fn set_local_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.local_gateway_id = input;
            self
        }

        /// <p>The ID of the network interface.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }

        /// <p>Describes how the route was created.</p>
        pub fn origin(mut self, input: crate::model::RouteOrigin) -> Self {
            self.origin = Some(input);
            self
        }
        /// <p>Describes how the route was created.</p>
        pub fn set_origin(mut self, input: std::option::Option<crate::model::RouteOrigin>) -> Self {
            self.origin = input;
            self
        }

        /// <p>The state of the route. The <code>blackhole</code> state indicates that the route's target isn't available (for example, the specified gateway isn't attached to the VPC, or the specified NAT instance has been terminated).</p>
        pub fn state(mut self, input: crate::model::RouteState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the route. The <code>blackhole</code> state indicates that the route's target isn't available (for example, the specified gateway isn't attached to the VPC, or the specified NAT instance has been terminated).</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::RouteState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The ID of the VPC peering connection, if applicable.</p>
        pub fn vpc_peering_connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_peering_connection_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC peering connection, if applicable.</p>
        pub fn set_vpc_peering_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_peering_connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`Route`](crate::model::Route)
        pub fn build(self) -> crate::model::Route {
            crate::model::Route {
                destination_cidr_block: self.destination_cidr_block,
                destination_ipv6_cidr_block: self.destination_ipv6_cidr_block,
                destination_prefix_list_id: self.destination_prefix_list_id,
                egress_only_internet_gateway_id: self.egress_only_internet_gateway_id,
                gateway_id: self.gateway_id,
                instance_id: self.instance_id,
                instance_owner_id: self.instance_owner_id,
                nat_gateway_id: self.nat_gateway_id,
                transit_gateway_id: self.transit_gateway_id,
                local_gateway_id: self.local_gateway_id,
                network_interface_id: self.network_interface_id,
                origin: self.origin,
                state: self.state,
                vpc_peering_connection_id: self.vpc_peering_connection_id,
            }
        }
    }
}
impl Route {
    /// Creates a new builder-style object to manufacture [`Route`](crate::model::Route)
    pub fn builder() -> crate::model::route::Builder {
        crate::model::route::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RouteOrigin {
    #[allow(missing_docs)] // documentation missing in model
    CreateRouteTable,
    #[allow(missing_docs)] // documentation missing in model
    CreateRoute,
    #[allow(missing_docs)] // documentation missing in model
    EnableVgwRoutePropagation,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RouteOrigin {
    fn from(s: &str) -> Self {
        match s {
            "CreateRouteTable" => RouteOrigin::CreateRouteTable,
            "CreateRoute" => RouteOrigin::CreateRoute,
            "EnableVgwRoutePropagation" => RouteOrigin::EnableVgwRoutePropagation,
            other => RouteOrigin::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RouteOrigin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RouteOrigin::from(s))
    }
}
impl RouteOrigin {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RouteOrigin::CreateRouteTable => "CreateRouteTable",
            RouteOrigin::CreateRoute => "CreateRoute",
            RouteOrigin::EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
            RouteOrigin::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "CreateRouteTable",
            "CreateRoute",
            "EnableVgwRoutePropagation",
        ]
    }
}
impl AsRef<str> for RouteOrigin {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RouteState {
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Blackhole,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RouteState {
    fn from(s: &str) -> Self {
        match s {
            "active" => RouteState::Active,
            "blackhole" => RouteState::Blackhole,
            other => RouteState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RouteState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RouteState::from(s))
    }
}
impl RouteState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RouteState::Active => "active",
            RouteState::Blackhole => "blackhole",
            RouteState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "active",
            "blackhole",
        ]
    }
}
impl AsRef<str> for RouteState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a route table.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RouteTable {
    /// <p>The associations between the route table and one or more subnets or a gateway.</p>
    pub associations: std::option::Option<std::vec::Vec<crate::model::RouteTableAssociation>>,
    /// <p>Any virtual private gateway (VGW) propagating routes.</p>
    pub propagating_vgws: std::option::Option<std::vec::Vec<crate::model::PropagatingVgw>>,
    /// <p>The ID of the route table.</p>
    pub route_table_id: std::option::Option<std::string::String>,
    /// <p>The routes in the route table.</p>
    pub routes: std::option::Option<std::vec::Vec<crate::model::Route>>,
    /// <p>Any tags assigned to the route table.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The ID of the VPC.</p>
    pub vpc_id: std::option::Option<std::string::String>,
    /// <p>The ID of the AWS account that owns the route table.</p>
    pub owner_id: std::option::Option<std::string::String>,
}
impl RouteTable {
    /// <p>The associations between the route table and one or more subnets or a gateway.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.associations.is_none()`.
    pub fn associations(&self) -> &[crate::model::RouteTableAssociation] {
        self.associations.as_deref().unwrap_or_default()
    }

    /// <p>Any virtual private gateway (VGW) propagating routes.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.propagating_vgws.is_none()`.
    pub fn propagating_vgws(&self) -> &[crate::model::PropagatingVgw] {
        self.propagating_vgws.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the route table.</p>
    pub fn route_table_id(&self) -> std::option::Option<&str> {
        self.route_table_id.as_deref()
    }

    /// <p>The routes in the route table.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.routes.is_none()`.
    pub fn routes(&self) -> &[crate::model::Route] {
        self.routes.as_deref().unwrap_or_default()
    }

    /// <p>Any tags assigned to the route table.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the VPC.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }

    /// <p>The ID of the AWS account that owns the route table.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }
}
impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Associations", &self.associations);
        formatter.field("PropagatingVgws", &self.propagating_vgws);
        formatter.field("RouteTableId", &self.route_table_id);
        formatter.field("Routes", &self.routes);
        formatter.field("Tags", &self.tags);
        formatter.field("VpcId", &self.vpc_id);
        formatter.field("OwnerId", &self.owner_id);
        formatter.finish()
    }
}
/// See [`RouteTable`](crate::model::RouteTable)
pub mod route_table {
    /// A builder for [`RouteTable`](crate::model::RouteTable)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) associations: std::option::Option<std::vec::Vec<crate::model::RouteTableAssociation>>,
        pub(crate) propagating_vgws: std::option::Option<std::vec::Vec<crate::model::PropagatingVgw>>,
        pub(crate) route_table_id: std::option::Option<std::string::String>,
        pub(crate) routes: std::option::Option<std::vec::Vec<crate::model::Route>>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `associations`.
        ///
        /// To override the contents of this collection use [`set_associations`](Self::set_associations).
        ///
        /// <p>The associations between the route table and one or more subnets or a gateway.</p>
        pub fn associations(mut self, input: impl std::convert::Into<crate::model::RouteTableAssociation>) -> Self {
            let mut v = self.associations.unwrap_or_default();
            v.push(input.into());
            self.associations = Some(v);
            self
        }
        /// <p>The associations between the route table and one or more subnets or a gateway.</p>
        pub fn set_associations(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteTableAssociation>>) -> Self {
            self.associations = input;
            self
        }

        /// Appends an item to `propagating_vgws`.
        ///
        /// To override the contents of this collection use [`set_propagating_vgws`](Self::set_propagating_vgws).
        ///
        /// <p>Any virtual private gateway (VGW) propagating routes.</p>
        pub fn propagating_vgws(mut self, input: impl std::convert::Into<crate::model::PropagatingVgw>) -> Self {
            let mut v = self.propagating_vgws.unwrap_or_default();
            v.push(input.into());
            self.propagating_vgws = Some(v);
            self
        }
        /// <p>Any virtual private gateway (VGW) propagating routes.</p>
        pub fn set_propagating_vgws(mut self, input: std::option::Option<std::vec::Vec<crate::model::PropagatingVgw>>) -> Self {
            self.propagating_vgws = input;
            self
        }

        /// <p>The ID of the route table.</p>
        pub fn route_table_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.route_table_id = Some(input.into());
            self
        }
        /// <p>The ID of the route table.</p>
        pub fn set_route_table_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.route_table_id = input;
            self
        }

        /// Appends an item to `routes`.
        ///
        /// To override the contents of this collection use [`set_routes`](Self::set_routes).
        ///
        /// <p>The routes in the route table.</p>
        pub fn routes(mut self, input: impl std::convert::Into<crate::model::Route>) -> Self {
            let mut v = self.routes.unwrap_or_default();
            v.push(input.into());
            self.routes = Some(v);
            self
        }
        /// <p>The routes in the route table.</p>
        pub fn set_routes(mut self, input: std::option::Option<std::vec::Vec<crate::model::Route>>) -> Self {
            self.routes = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the route table.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the route table.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The ID of the VPC.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }

        /// <p>The ID of the AWS account that owns the route table.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The ID of the AWS account that owns the route table.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }
        /// Consumes the builder and constructs a [`RouteTable`](crate::model::RouteTable)
        pub fn build(self) -> crate::model::RouteTable {
            crate::model::RouteTable {
                associations: self.associations,
                propagating_vgws: self.propagating_vgws,
                route_table_id: self.route_table_id,
                routes: self.routes,
                tags: self.tags,
                vpc_id: self.vpc_id,
                owner_id: self.owner_id,
            }
        }
    }
}
impl RouteTable {
    /// Creates a new builder-style object to manufacture [`RouteTable`](crate::model::RouteTable)
    pub fn builder() -> crate::model::route_table::Builder {
        crate::model::route_table::Builder::default()
    }
}

/// <p>Describes an IPv4 range.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IpRange {
    /// <p>The IPv4 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv4 address, use the /32 prefix length.</p>
    pub cidr_ip: std::option::Option<std::string::String>,
    /// <p>A description for the security group rule that references this IPv4 address range.</p>
    pub description: std::option::Option<std::string::String>,
}
impl IpRange {
    /// <p>The IPv4 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv4 address, use the /32 prefix length.</p>
    pub fn cidr_ip(&self) -> std::option::Option<&str> {
        self.cidr_ip.as_deref()
    }

    /// <p>A description for the security group rule that references this IPv4 address range.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
}
impl std::fmt::Debug for IpRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CidrIp", &self.cidr_ip);
        formatter.field("Description", &self.description);
        formatter.finish()
    }
}
/// See [`IpRange`](crate::model::IpRange)
pub mod ip_range {
    /// A builder for [`IpRange`](crate::model::IpRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr_ip: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv4 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv4 address, use the /32 prefix length.</p>
        pub fn cidr_ip(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_ip = Some(input.into());
            self
        }
        /// <p>The IPv4 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv4 address, use the /32 prefix length.</p>
        pub fn set_cidr_ip(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_ip = input;
            self
        }

        /// <p>A description for the security group rule that references this IPv4 address range.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the security group rule that references this IPv4 address range.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// Consumes the builder and constructs a [`IpRange`](crate::model::IpRange)
        pub fn build(self) -> crate::model::IpRange {
            crate::model::IpRange {
                cidr_ip: self.cidr_ip,
                description: self.description,
            }
        }
    }
}
impl IpRange {
    /// Creates a new builder-style object to manufacture [`IpRange`](crate::model::IpRange)
    pub fn builder() -> crate::model::ip_range::Builder {
        crate::model::ip_range::Builder::default()
    }
}

/// <p>[EC2-VPC only] Describes an IPv6 range.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Ipv6Range {
    /// <p>The IPv6 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv6 address, use the /128 prefix length.</p>
    pub cidr_ipv6: std::option::Option<std::string::String>,
    /// <p>A description for the security group rule that references this IPv6 address range.</p>
    pub description: std::option::Option<std::string::String>,
}
impl Ipv6Range {
    /// <p>The IPv6 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv6 address, use the /128 prefix length.</p>
    pub fn cidr_ipv6(&self) -> std::option::Option<&str> {
        self.cidr_ipv6.as_deref()
    }

    /// <p>A description for the security group rule that references this IPv6 address range.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
}
impl std::fmt::Debug for Ipv6Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CidrIpv6", &self.cidr_ipv6);
        formatter.field("Description", &self.description);
        formatter.finish()
    }
}
/// See [`Ipv6Range`](crate::model::Ipv6Range)
pub mod ipv6_range {
    /// A builder for [`Ipv6Range`](crate::model::Ipv6Range)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr_ipv6: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv6 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv6 address, use the /128 prefix length.</p>
        pub fn cidr_ipv6(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr_ipv6 = Some(input.into());
            self
        }
        /// <p>The IPv6 CIDR range. You can either specify a CIDR range or a source security group, not both. To specify a single IPv6 address, use the /128 prefix length.</p>
        pub fn set_cidr_ipv6(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr_ipv6 = input;
            self
        }

        /// <p>A description for the security group rule that references this IPv6 address range.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the security group rule that references this IPv6 address range.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// Consumes the builder and constructs a [`Ipv6Range`](crate::model::Ipv6Range)
        pub fn build(self) -> crate::model::Ipv6Range {
            crate::model::Ipv6Range {
                cidr_ipv6: self.cidr_ipv6,
                description: self.description,
            }
        }
    }
}
impl Ipv6Range {
    /// Creates a new builder-style object to manufacture [`Ipv6Range`](crate::model::Ipv6Range)
    pub fn builder() -> crate::model::ipv6_range::Builder {
        crate::model::ipv6_range::Builder::default()
    }
}

/// <p>Describes a prefix list ID.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct PrefixListId {
    /// <p>A description for the security group rule that references this prefix list ID.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The ID of the prefix.</p>
    pub prefix_list_id: std::option::Option<std::string::String>,
}
impl PrefixListId {
    /// <p>A description for the security group rule that references this prefix list ID.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The ID of the prefix.</p>
    pub fn prefix_list_id(&self) -> std::option::Option<&str> {
        self.prefix_list_id.as_deref()
    }
}
impl std::fmt::Debug for PrefixListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Description", &self.description);
        formatter.field("PrefixListId", &self.prefix_list_id);
        formatter.finish()
    }
}
/// See [`PrefixListId`](crate::model::PrefixListId)
pub mod prefix_list_id {
    /// A builder for [`PrefixListId`](crate::model::PrefixListId)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) prefix_list_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A description for the security group rule that references this prefix list ID.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the security group rule that references this prefix list ID.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The ID of the prefix.</p>
        pub fn prefix_list_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.prefix_list_id = Some(input.into());
            self
        }
        /// <p>The ID of the prefix.</p>
        pub fn set_prefix_list_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.prefix_list_id = input;
            self
        }
        /// Consumes the builder and constructs a [`PrefixListId`](crate::model::PrefixListId)
        pub fn build(self) -> crate::model::PrefixListId {
            crate::model::PrefixListId {
                description: self.description,
                prefix_list_id: self.prefix_list_id,
            }
        }
    }
}
impl PrefixListId {
    /// Creates a new builder-style object to manufacture [`PrefixListId`](crate::model::PrefixListId)
    pub fn builder() -> crate::model::prefix_list_id::Builder {
        crate::model::prefix_list_id::Builder::default()
    }
}

/// <p>Describes a security group and AWS account ID pair.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct UserIdGroupPair {
    /// <p>A description for the security group rule that references this user ID group pair.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The ID of the security group.</p>
    pub group_id: std::option::Option<std::string::String>,
    /// <p>The name of the security group. In a request, use this parameter for a security group in EC2-Classic or a default VPC only. For a security group in a nondefault VPC, use the security group ID.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The status of a VPC peering connection, if applicable.</p>
    pub peering_status: std::option::Option<std::string::String>,
    /// <p>The ID of an AWS account.</p>
    pub user_id: std::option::Option<std::string::String>,
    /// <p>The ID of the VPC for the referenced security group, if applicable.</p>
    pub vpc_id: std::option::Option<std::string::String>,
    /// <p>The ID of the VPC peering connection, if applicable.</p>
    pub vpc_peering_connection_id: std::option::Option<std::string::String>,
}
impl UserIdGroupPair {
    /// <p>A description for the security group rule that references this user ID group pair.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The ID of the security group.</p>
    pub fn group_id(&self) -> std::option::Option<&str> {
        self.group_id.as_deref()
    }

    /// <p>The name of the security group. In a request, use this parameter for a security group in EC2-Classic or a default VPC only. For a security group in a nondefault VPC, use the security group ID.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The status of a VPC peering connection, if applicable.</p>
    pub fn peering_status(&self) -> std::option::Option<&str> {
        self.peering_status.as_deref()
    }

    /// <p>The ID of an AWS account.</p>
    pub fn user_id(&self) -> std::option::Option<&str> {
        self.user_id.as_deref()
    }

    /// <p>The ID of the VPC for the referenced security group, if applicable.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }

    /// <p>The ID of the VPC peering connection, if applicable.</p>
    pub fn vpc_peering_connection_id(&self) -> std::option::Option<&str> {
        self.vpc_peering_connection_id.as_deref()
    }
}
impl std::fmt::Debug for UserIdGroupPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Description", &self.description);
        formatter.field("GroupId", &self.group_id);
        formatter.field("GroupName", &self.group_name);
        formatter.field("PeeringStatus", &self.peering_status);
        formatter.field("UserId", &self.user_id);
        formatter.field("VpcId", &self.vpc_id);
        formatter.field("VpcPeeringConnectionId", &self.vpc_peering_connection_id);
        formatter.finish()
    }
}
/// See [`UserIdGroupPair`](crate::model::UserIdGroupPair)
pub mod user_id_group_pair {
    /// A builder for [`UserIdGroupPair`](crate::model::UserIdGroupPair)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) group_id: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) peering_status: std::option::Option<std::string::String>,
        pub(crate) user_id: std::option::Option<std::string::String>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) vpc_peering_connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A description for the security group rule that references this user ID group pair.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the security group rule that references this user ID group pair.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The ID of the security group.</p>
        pub fn group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_id = Some(input.into());
            self
        }
        /// <p>The ID of the security group.</p>
        pub fn set_group_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_id = input;
            self
        }

        /// <p>The name of the security group. In a request, use this parameter for a security group in EC2-Classic or a default VPC only. For a security group in a nondefault VPC, use the security group ID.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the security group. In a request, use this parameter for a security group in EC2-Classic or a default VPC only. For a security group in a nondefault VPC, use the security group ID.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The status of a VPC peering connection, if applicable.</p>
        pub fn peering_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.peering_status = Some(input.into());
            self
        }
        /// <p>The status of a VPC peering connection, if applicable.</p>
        pub fn set_peering_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.peering_status = input;
            self
        }

        /// <p>The ID of an AWS account.</p>
        pub fn user_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        /// <p>The ID of an AWS account.</p>
        pub fn set_user_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_id = input;
            self
        }

        /// <p>The ID of the VPC for the referenced security group, if applicable.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC for the referenced security group, if applicable.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }

        /// <p>The ID of the VPC peering connection, if applicable.</p>
        pub fn vpc_peering_connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_peering_connection_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC peering connection, if applicable.</p>
        pub fn set_vpc_peering_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_peering_connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`UserIdGroupPair`](crate::model::UserIdGroupPair)
        pub fn build(self) -> crate::model::UserIdGroupPair {
            crate::model::UserIdGroupPair {
                description: self.description,
                group_id: self.group_id,
                group_name: self.group_name,
                peering_status: self.peering_status,
                user_id: self.user_id,
                vpc_id: self.vpc_id,
                vpc_peering_connection_id: self.vpc_peering_connection_id,
            }
        }
    }
}
impl UserIdGroupPair {
    /// Creates a new builder-style object to manufacture [`UserIdGroupPair`](crate::model::UserIdGroupPair)
    pub fn builder() -> crate::model::user_id_group_pair::Builder {
        crate::model::user_id_group_pair::Builder::default()
    }
}

/// <p>Describes a set of permissions for a security group rule.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct IpPermission {
    /// <p>The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number. A value of <code>-1</code> indicates all ICMP/ICMPv6 types.</p>
    pub from_port: std::option::Option<i32>,
    /// <p>The IP protocol name (<code>tcp</code>, <code>udp</code>, <code>icmp</code>, <code>icmpv6</code>) or number. Use <code>-1</code> to specify all protocols.</p>
    pub ip_protocol: std::option::Option<std::string::String>,
    /// <p>The IPv4 ranges.</p>
    pub ip_ranges: std::option::Option<std::vec::Vec<crate::model::IpRange>>,
    /// <p>[VPC only] The IPv6 ranges.</p>
    pub ipv6_ranges: std::option::Option<std::vec::Vec<crate::model::Ipv6Range>>,
    /// <p>[VPC only] The prefix list IDs.</p>
    pub prefix_list_ids: std::option::Option<std::vec::Vec<crate::model::PrefixListId>>,
    /// <p>The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code. A value of <code>-1</code> indicates all ICMP/ICMPv6 codes.</p>
    pub to_port: std::option::Option<i32>,
    /// <p>The security group and AWS account ID pairs.</p>
    pub user_id_group_pairs: std::option::Option<std::vec::Vec<crate::model::UserIdGroupPair>>,
}
impl IpPermission {
    /// <p>The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number. A value of <code>-1</code> indicates all ICMP/ICMPv6 types.</p>
    pub fn from_port(&self) -> std::option::Option<i32> {
        self.from_port
    }

    /// <p>The IP protocol name (<code>tcp</code>, <code>udp</code>, <code>icmp</code>, <code>icmpv6</code>) or number. Use <code>-1</code> to specify all protocols.</p>
    pub fn ip_protocol(&self) -> std::option::Option<&str> {
        self.ip_protocol.as_deref()
    }

    /// <p>The IPv4 ranges.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ip_ranges.is_none()`.
    pub fn ip_ranges(&self) -> &[crate::model::IpRange] {
        self.ip_ranges.as_deref().unwrap_or_default()
    }

    /// <p>[VPC only] The IPv6 ranges.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_ranges.is_none()`.
    pub fn ipv6_ranges(&self) -> &[crate::model::Ipv6Range] {
        self.ipv6_ranges.as_deref().unwrap_or_default()
    }

    /// <p>[VPC only] The prefix list IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.prefix_list_ids.is_none()`.
    pub fn prefix_list_ids(&self) -> &[crate::model::PrefixListId] {
        self.prefix_list_ids.as_deref().unwrap_or_default()
    }

    /// <p>The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code. A value of <code>-1</code> indicates all ICMP/ICMPv6 codes.</p>
    pub fn to_port(&self) -> std::option::Option<i32> {
        self.to_port
    }

    /// <p>The security group and AWS account ID pairs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_id_group_pairs.is_none()`.
    pub fn user_id_group_pairs(&self) -> &[crate::model::UserIdGroupPair] {
        self.user_id_group_pairs.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for IpPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("FromPort", &self.from_port);
        formatter.field("IpProtocol", &self.ip_protocol);
        formatter.field("IpRanges", &self.ip_ranges);
        formatter.field("Ipv6Ranges", &self.ipv6_ranges);
        formatter.field("PrefixListIds", &self.prefix_list_ids);
        formatter.field("ToPort", &self.to_port);
        formatter.field("UserIdGroupPairs", &self.user_id_group_pairs);
        formatter.finish()
    }
}
/// See [`IpPermission`](crate::model::IpPermission)
pub mod ip_permission {
    /// A builder for [`IpPermission`](crate::model::IpPermission)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) from_port: std::option::Option<i32>,
        pub(crate) ip_protocol: std::option::Option<std::string::String>,
        pub(crate) ip_ranges: std::option::Option<std::vec::Vec<crate::model::IpRange>>,
        pub(crate) ipv6_ranges: std::option::Option<std::vec::Vec<crate::model::Ipv6Range>>,
        pub(crate) prefix_list_ids: std::option::Option<std::vec::Vec<crate::model::PrefixListId>>,
        pub(crate) to_port: std::option::Option<i32>,
        pub(crate) user_id_group_pairs: std::option::Option<std::vec::Vec<crate::model::UserIdGroupPair>>,
    }
    impl Builder {
        /// <p>The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number. A value of <code>-1</code> indicates all ICMP/ICMPv6 types.</p>
        pub fn from_port(mut self, input: i32) -> Self {
            self.from_port = Some(input);
            self
        }
        /// <p>The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number. A value of <code>-1</code> indicates all ICMP/ICMPv6 types.</p>
        pub fn set_from_port(mut self, input: std::option::Option<i32>) -> Self {
            self.from_port = input;
            self
        }

        /// <p>The IP protocol name (<code>tcp</code>, <code>udp</code>, <code>icmp</code>, <code>icmpv6</code>) or number. Use <code>-1</code> to specify all protocols.</p>
        pub fn ip_protocol(mut self, input: impl Into<std::string::String>) -> Self {
            self.ip_protocol = Some(input.into());
            self
        }
        /// <p>The IP protocol name (<code>tcp</code>, <code>udp</code>, <code>icmp</code>, <code>icmpv6</code>) or number. Use <code>-1</code> to specify all protocols.</p>
        pub fn set_ip_protocol(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ip_protocol = input;
            self
        }

        /// Appends an item to `ip_ranges`.
        ///
        /// To override the contents of this collection use [`set_ip_ranges`](Self::set_ip_ranges).
        ///
        /// <p>The IPv4 ranges.</p>
        pub fn ip_ranges(mut self, input: impl std::convert::Into<crate::model::IpRange>) -> Self {
            let mut v = self.ip_ranges.unwrap_or_default();
            v.push(input.into());
            self.ip_ranges = Some(v);
            self
        }
        /// <p>The IPv4 ranges.</p>
        pub fn set_ip_ranges(mut self, input: std::option::Option<std::vec::Vec<crate::model::IpRange>>) -> Self {
            self.ip_ranges = input;
            self
        }

        /// Appends an item to `ipv6_ranges`.
        ///
        /// To override the contents of this collection use [`set_ipv6_ranges`](Self::set_ipv6_ranges).
        ///
        /// <p>[VPC only] The IPv6 ranges.</p>
        pub fn ipv6_ranges(mut self, input: impl std::convert::Into<crate::model::Ipv6Range>) -> Self {
            let mut v = self.ipv6_ranges.unwrap_or_default();
            v.push(input.into());
            self.ipv6_ranges = Some(v);
            self
        }
        /// <p>[VPC only] The IPv6 ranges.</p>
        pub fn set_ipv6_ranges(mut self, input: std::option::Option<std::vec::Vec<crate::model::Ipv6Range>>) -> Self {
            self.ipv6_ranges = input;
            self
        }

        /// Appends an item to `prefix_list_ids`.
        ///
        /// To override the contents of this collection use [`set_prefix_list_ids`](Self::set_prefix_list_ids).
        ///
        /// <p>[VPC only] The prefix list IDs.</p>
        pub fn prefix_list_ids(mut self, input: impl std::convert::Into<crate::model::PrefixListId>) -> Self {
            let mut v = self.prefix_list_ids.unwrap_or_default();
            v.push(input.into());
            self.prefix_list_ids = Some(v);
            self
        }
        /// <p>[VPC only] The prefix list IDs.</p>
        pub fn set_prefix_list_ids(mut self, input: std::option::Option<std::vec::Vec<crate::model::PrefixListId>>) -> Self {
            self.prefix_list_ids = input;
            self
        }

        /// <p>The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code. A value of <code>-1</code> indicates all ICMP/ICMPv6 codes.</p>
        pub fn to_port(mut self, input: i32) -> Self {
            self.to_port = Some(input);
            self
        }
        /// <p>The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code. A value of <code>-1</code> indicates all ICMP/ICMPv6 codes.</p>
        pub fn set_to_port(mut self, input: std::option::Option<i32>) -> Self {
            self.to_port = input;
            self
        }

        /// Appends an item to `user_id_group_pairs`.
        ///
        /// To override the contents of this collection use [`set_user_id_group_pairs`](Self::set_user_id_group_pairs).
        ///
        /// <p>The security group and AWS account ID pairs.</p>
        pub fn user_id_group_pairs(mut self, input: impl std::convert::Into<crate::model::UserIdGroupPair>) -> Self {
            let mut v = self.user_id_group_pairs.unwrap_or_default();
            v.push(input.into());
            self.user_id_group_pairs = Some(v);
            self
        }
        /// <p>The security group and AWS account ID pairs.</p>
        pub fn set_user_id_group_pairs(mut self, input: std::option::Option<std::vec::Vec<crate::model::UserIdGroupPair>>) -> Self {
            self.user_id_group_pairs = input;
            self
        }
        /// Consumes the builder and constructs a [`IpPermission`](crate::model::IpPermission)
        pub fn build(self) -> crate::model::IpPermission {
            crate::model::IpPermission {
                from_port: self.from_port,
                ip_protocol: self.ip_protocol,
                ip_ranges: self.ip_ranges,
                ipv6_ranges: self.ipv6_ranges,
                prefix_list_ids: self.prefix_list_ids,
                to_port: self.to_port,
                user_id_group_pairs: self.user_id_group_pairs,
            }
        }
    }
}
impl IpPermission {
    /// Creates a new builder-style object to manufacture [`IpPermission`](crate::model::IpPermission)
    pub fn builder() -> crate::model::ip_permission::Builder {
        crate::model::ip_permission::Builder::default()
    }
}

/// <p>Describes a security group</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SecurityGroup {
    /// <p>A description of the security group.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The name of the security group.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The inbound rules associated with the security group.</p>
    pub ip_permissions: std::option::Option<std::vec::Vec<crate::model::IpPermission>>,
    /// <p>The AWS account ID of the owner of the security group.</p>
    pub owner_id: std::option::Option<std::string::String>,
    /// <p>The ID of the security group.</p>
    pub group_id: std::option::Option<std::string::String>,
    /// <p>[VPC only] The outbound rules associated with the security group.</p>
    pub ip_permissions_egress: std::option::Option<std::vec::Vec<crate::model::IpPermission>>,
    /// <p>Any tags assigned to the security group.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The ID of the VPC.</p>
    pub vpc_id: std::option::Option<std::string::String>,
}
impl SecurityGroup {
    /// <p>A description of the security group.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The name of the security group.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The inbound rules associated with the security group.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ip_permissions.is_none()`.
    pub fn ip_permissions(&self) -> &[crate::model::IpPermission] {
        self.ip_permissions.as_deref().unwrap_or_default()
    }

    /// <p>The AWS account ID of the owner of the security group.</p>
    pub fn owner_id(&self) -> std::option::Option<&str> {
        self.owner_id.as_deref()
    }

    /// <p>The ID of the security group.</p>
    pub fn group_id(&self) -> std::option::Option<&str> {
        self.group_id.as_deref()
    }

    /// <p>[VPC only] The outbound rules associated with the security group.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ip_permissions_egress.is_none()`.
    pub fn ip_permissions_egress(&self) -> &[crate::model::IpPermission] {
        self.ip_permissions_egress.as_deref().unwrap_or_default()
    }

    /// <p>Any tags assigned to the security group.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the VPC.</p>
    pub fn vpc_id(&self) -> std::option::Option<&str> {
        self.vpc_id.as_deref()
    }
}
impl std::fmt::Debug for SecurityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Description", &self.description);
        formatter.field("GroupName", &self.group_name);
        formatter.field("IpPermissions", &self.ip_permissions);
        formatter.field("OwnerId", &self.owner_id);
        formatter.field("GroupId", &self.group_id);
        formatter.field("IpPermissionsEgress", &self.ip_permissions_egress);
        formatter.field("Tags", &self.tags);
        formatter.field("VpcId", &self.vpc_id);
        formatter.finish()
    }
}
/// See [`SecurityGroup`](crate::model::SecurityGroup)
pub mod security_group {
    /// A builder for [`SecurityGroup`](crate::model::SecurityGroup)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) ip_permissions: std::option::Option<std::vec::Vec<crate::model::IpPermission>>,
        pub(crate) owner_id: std::option::Option<std::string::String>,
        pub(crate) group_id: std::option::Option<std::string::String>,
        pub(crate) ip_permissions_egress: std::option::Option<std::vec::Vec<crate::model::IpPermission>>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) vpc_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A description of the security group.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description of the security group.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The name of the security group.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the security group.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// Appends an item to `ip_permissions`.
        ///
        /// To override the contents of this collection use [`set_ip_permissions`](Self::set_ip_permissions).
        ///
        /// <p>The inbound rules associated with the security group.</p>
        pub fn ip_permissions(mut self, input: impl std::convert::Into<crate::model::IpPermission>) -> Self {
            let mut v = self.ip_permissions.unwrap_or_default();
            v.push(input.into());
            self.ip_permissions = Some(v);
            self
        }
        /// <p>The inbound rules associated with the security group.</p>
        pub fn set_ip_permissions(mut self, input: std::option::Option<std::vec::Vec<crate::model::IpPermission>>) -> Self {
            self.ip_permissions = input;
            self
        }

        /// <p>The AWS account ID of the owner of the security group.</p>
        pub fn owner_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_id = Some(input.into());
            self
        }
        /// <p>The AWS account ID of the owner of the security group.</p>
        pub fn set_owner_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_id = input;
            self
        }

        /// <p>The ID of the security group.</p>
        pub fn group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_id = Some(input.into());
            self
        }
        /// <p>The ID of the security group.</p>
        pub fn set_group_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_id = input;
            self
        }

        /// Appends an item to `ip_permissions_egress`.
        ///
        /// To override the contents of this collection use [`set_ip_permissions_egress`](Self::set_ip_permissions_egress).
        ///
        /// <p>[VPC only] The outbound rules associated with the security group.</p>
        pub fn ip_permissions_egress(mut self, input: impl std::convert::Into<crate::model::IpPermission>) -> Self {
            let mut v = self.ip_permissions_egress.unwrap_or_default();
            v.push(input.into());
            self.ip_permissions_egress = Some(v);
            self
        }
        /// <p>[VPC only] The outbound rules associated with the security group.</p>
        pub fn set_ip_permissions_egress(mut self, input: std::option::Option<std::vec::Vec<crate::model::IpPermission>>) -> Self {
            self.ip_permissions_egress = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the security group.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the security group.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The ID of the VPC.</p>
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// <p>The ID of the VPC.</p>
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }
        /// Consumes the builder and constructs a [`SecurityGroup`](crate::model::SecurityGroup)
        pub fn build(self) -> crate::model::SecurityGroup {
            crate::model::SecurityGroup {
                description: self.description,
                group_name: self.group_name,
                ip_permissions: self.ip_permissions,
                owner_id: self.owner_id,
                group_id: self.group_id,
                ip_permissions_egress: self.ip_permissions_egress,
                tags: self.tags,
                vpc_id: self.vpc_id,
            }
        }
    }
}
impl SecurityGroup {
    /// Creates a new builder-style object to manufacture [`SecurityGroup`](crate::model::SecurityGroup)
    pub fn builder() -> crate::model::security_group::Builder {
        crate::model::security_group::Builder::default()
    }
}

/// <p>Describes a Spot Instance state change.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotInstanceStateFault {
    /// <p>The reason code for the Spot Instance state change.</p>
    pub code: std::option::Option<std::string::String>,
    /// <p>The message for the Spot Instance state change.</p>
    pub message: std::option::Option<std::string::String>,
}
impl SpotInstanceStateFault {
    /// <p>The reason code for the Spot Instance state change.</p>
    pub fn code(&self) -> std::option::Option<&str> {
        self.code.as_deref()
    }

    /// <p>The message for the Spot Instance state change.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for SpotInstanceStateFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.field("Message", &self.message);
        formatter.finish()
    }
}
/// See [`SpotInstanceStateFault`](crate::model::SpotInstanceStateFault)
pub mod spot_instance_state_fault {
    /// A builder for [`SpotInstanceStateFault`](crate::model::SpotInstanceStateFault)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The reason code for the Spot Instance state change.</p>
        pub fn code(mut self, input: impl Into<std::string::String>) -> Self {
            self.code = Some(input.into());
            self
        }
        /// <p>The reason code for the Spot Instance state change.</p>
        pub fn set_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.code = input;
            self
        }

        /// <p>The message for the Spot Instance state change.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The message for the Spot Instance state change.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotInstanceStateFault`](crate::model::SpotInstanceStateFault)
        pub fn build(self) -> crate::model::SpotInstanceStateFault {
            crate::model::SpotInstanceStateFault {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl SpotInstanceStateFault {
    /// Creates a new builder-style object to manufacture [`SpotInstanceStateFault`](crate::model::SpotInstanceStateFault)
    pub fn builder() -> crate::model::spot_instance_state_fault::Builder {
        crate::model::spot_instance_state_fault::Builder::default()
    }
}

/// <p>Describes the status of a Spot Instance request.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotInstanceStatus {
    /// <p>The status code.</p>
    pub code: std::option::Option<std::string::String>,
    /// <p>The description for the status code.</p>
    pub message: std::option::Option<std::string::String>,
    /// <p>The date and time of the most recent status update, in UTC format.</p>
    pub update_time: std::option::Option<smithy_types::Instant>,
}
impl SpotInstanceStatus {
    /// <p>The status code.</p>
    pub fn code(&self) -> std::option::Option<&str> {
        self.code.as_deref()
    }

    /// <p>The description for the status code.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }

    /// <p>The date and time of the most recent status update, in UTC format.</p>
    pub fn update_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.update_time.as_ref()
    }
}
impl std::fmt::Debug for SpotInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Code", &self.code);
        formatter.field("Message", &self.message);
        formatter.field("UpdateTime", &self.update_time);
        formatter.finish()
    }
}
/// See [`SpotInstanceStatus`](crate::model::SpotInstanceStatus)
pub mod spot_instance_status {
    /// A builder for [`SpotInstanceStatus`](crate::model::SpotInstanceStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) update_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The status code.</p>
        pub fn code(mut self, input: impl Into<std::string::String>) -> Self {
            self.code = Some(input.into());
            self
        }
        /// <p>The status code.</p>
        pub fn set_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.code = input;
            self
        }

        /// <p>The description for the status code.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The description for the status code.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }

        /// <p>The date and time of the most recent status update, in UTC format.</p>
        pub fn update_time(mut self, input: smithy_types::Instant) -> Self {
            self.update_time = Some(input);
            self
        }
        /// <p>The date and time of the most recent status update, in UTC format.</p>
        pub fn set_update_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.update_time = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotInstanceStatus`](crate::model::SpotInstanceStatus)
        pub fn build(self) -> crate::model::SpotInstanceStatus {
            crate::model::SpotInstanceStatus {
                code: self.code,
                message: self.message,
                update_time: self.update_time,
            }
        }
    }
}
impl SpotInstanceStatus {
    /// Creates a new builder-style object to manufacture [`SpotInstanceStatus`](crate::model::SpotInstanceStatus)
    pub fn builder() -> crate::model::spot_instance_status::Builder {
        crate::model::spot_instance_status::Builder::default()
    }
}

/// <p>Describes the launch specification for an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchSpecification {
    /// <p>The Base64-encoded user data for the instance.</p>
    pub user_data: std::option::Option<std::string::String>,
    /// <p>One or more security groups.</p>
    pub security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
    /// <p>Deprecated.</p>
    pub addressing_type: std::option::Option<std::string::String>,
    /// <p>One or more block device mapping entries.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
    /// <p>The ID of the AMI.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The kernel associated with this instance, if applicable.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>The name of the key pair.</p>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
    /// <p>The placement information for the instance.</p>
    pub placement: std::option::Option<crate::model::SpotPlacement>,
    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub ramdisk_id: std::option::Option<std::string::String>,
    /// <p>The ID of the subnet.</p>
    pub subnet_id: std::option::Option<std::string::String>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::RunInstancesMonitoringEnabled>,
}
impl LaunchSpecification {
    /// <p>The Base64-encoded user data for the instance.</p>
    pub fn user_data(&self) -> std::option::Option<&str> {
        self.user_data.as_deref()
    }

    /// <p>One or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[crate::model::GroupIdentifier] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>Deprecated.</p>
    pub fn addressing_type(&self) -> std::option::Option<&str> {
        self.addressing_type.as_deref()
    }

    /// <p>One or more block device mapping entries.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::BlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::IamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>The ID of the AMI.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The kernel associated with this instance, if applicable.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>The name of the key pair.</p>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::InstanceNetworkInterfaceSpecification] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The placement information for the instance.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::SpotPlacement> {
        self.placement.as_ref()
    }

    /// <p>The RAM disk ID associated with this resource, if applicable.</p>
    pub fn ramdisk_id(&self) -> std::option::Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// <p>The ID of the subnet.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::RunInstancesMonitoringEnabled> {
        self.monitoring.as_ref()
    }
}
impl std::fmt::Debug for LaunchSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("UserData", &self.user_data);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("AddressingType", &self.addressing_type);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.field("ImageId", &self.image_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("KeyName", &self.key_name);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("Placement", &self.placement);
        formatter.field("RamdiskId", &self.ramdisk_id);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.field("Monitoring", &self.monitoring);
        formatter.finish()
    }
}
/// See [`LaunchSpecification`](crate::model::LaunchSpecification)
pub mod launch_specification {
    /// A builder for [`LaunchSpecification`](crate::model::LaunchSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) user_data: std::option::Option<std::string::String>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>,
        pub(crate) addressing_type: std::option::Option<std::string::String>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::BlockDeviceMapping>>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::IamInstanceProfileSpecification>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>,
        pub(crate) placement: std::option::Option<crate::model::SpotPlacement>,
        pub(crate) ramdisk_id: std::option::Option<std::string::String>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) monitoring: std::option::Option<crate::model::RunInstancesMonitoringEnabled>,
    }
    impl Builder {
        /// <p>The Base64-encoded user data for the instance.</p>
        pub fn user_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_data = Some(input.into());
            self
        }
        /// <p>The Base64-encoded user data for the instance.</p>
        pub fn set_user_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_data = input;
            self
        }

        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>One or more security groups.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<crate::model::GroupIdentifier>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>One or more security groups.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>Deprecated.</p>
        pub fn addressing_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.addressing_type = Some(input.into());
            self
        }
        /// <p>Deprecated.</p>
        pub fn set_addressing_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.addressing_type = input;
            self
        }

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

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::InstanceNetworkInterfaceSpecification>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>One or more network interfaces. If you specify a network interface, you must specify subnet IDs and security group IDs using the network interface.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceNetworkInterfaceSpecification>>) -> Self {
            self.network_interfaces = input;
            self
        }

        /// <p>The placement information for the instance.</p>
        pub fn placement(mut self, input: crate::model::SpotPlacement) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The placement information for the instance.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::SpotPlacement>) -> Self {
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
        /// Consumes the builder and constructs a [`LaunchSpecification`](crate::model::LaunchSpecification)
        pub fn build(self) -> crate::model::LaunchSpecification {
            crate::model::LaunchSpecification {
                user_data: self.user_data,
                security_groups: self.security_groups,
                addressing_type: self.addressing_type,
                block_device_mappings: self.block_device_mappings,
                ebs_optimized: self.ebs_optimized,
                iam_instance_profile: self.iam_instance_profile,
                image_id: self.image_id,
                instance_type: self.instance_type,
                kernel_id: self.kernel_id,
                key_name: self.key_name,
                network_interfaces: self.network_interfaces,
                placement: self.placement,
                ramdisk_id: self.ramdisk_id,
                subnet_id: self.subnet_id,
                monitoring: self.monitoring,
            }
        }
    }
}
impl LaunchSpecification {
    /// Creates a new builder-style object to manufacture [`LaunchSpecification`](crate::model::LaunchSpecification)
    pub fn builder() -> crate::model::launch_specification::Builder {
        crate::model::launch_specification::Builder::default()
    }
}

/// <p>Describes a Spot Instance request.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct SpotInstanceRequest {
    /// <p>If you specified a duration and your Spot Instance request was fulfilled, this is the fixed hourly price in effect for the Spot Instance while it runs.</p>
    pub actual_block_hourly_price: std::option::Option<std::string::String>,
    /// <p>The Availability Zone group. If you specify the same Availability Zone group for all Spot Instance requests, all Spot Instances are launched in the same Availability Zone.</p>
    pub availability_zone_group: std::option::Option<std::string::String>,
    /// <p>The duration for the Spot Instance, in minutes.</p>
    pub block_duration_minutes: std::option::Option<i32>,
    /// <p>The date and time when the Spot Instance request was created, in UTC format.</p>
    pub create_time: std::option::Option<smithy_types::Instant>,
    /// <p>The fault codes for the Spot Instance request, if any.</p>
    pub fault: std::option::Option<crate::model::SpotInstanceStateFault>,
    /// <p>The instance ID, if an instance has been launched to fulfill the Spot Instance request.</p>
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The instance launch group. Launch groups are Spot Instances that launch together and terminate together.</p>
    pub launch_group: std::option::Option<std::string::String>,
    /// <p>Additional information for launching instances.</p>
    pub launch_specification: std::option::Option<crate::model::LaunchSpecification>,
    /// <p>The Availability Zone in which the request is launched.</p>
    pub launched_availability_zone: std::option::Option<std::string::String>,
    /// <p>The product description associated with the Spot Instance.</p>
    pub product_description: std::option::Option<crate::model::RIProductDescription>,
    /// <p>The ID of the Spot Instance request.</p>
    pub spot_instance_request_id: std::option::Option<std::string::String>,
    /// <p>The maximum price per hour that you are willing to pay for a Spot Instance.</p>
    pub spot_price: std::option::Option<std::string::String>,
    /// <p>The state of the Spot Instance request. Spot status information helps track your Spot Instance requests.</p>
    pub state: std::option::Option<crate::model::SpotInstanceState>,
    /// <p>The status code and status message describing the Spot Instance request.</p>
    pub status: std::option::Option<crate::model::SpotInstanceStatus>,
    /// <p>Any tags assigned to the resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The Spot Instance request type.</p>
    pub r#type: std::option::Option<crate::model::SpotInstanceType>,
    /// <p>The start date of the request, in UTC format. The request becomes active at this date and time.</p>
    pub valid_from: std::option::Option<smithy_types::Instant>,
    /// <p>The end date of the request, in UTC format.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
}
impl SpotInstanceRequest {
    /// <p>If you specified a duration and your Spot Instance request was fulfilled, this is the fixed hourly price in effect for the Spot Instance while it runs.</p>
    pub fn actual_block_hourly_price(&self) -> std::option::Option<&str> {
        self.actual_block_hourly_price.as_deref()
    }

    /// <p>The Availability Zone group. If you specify the same Availability Zone group for all Spot Instance requests, all Spot Instances are launched in the same Availability Zone.</p>
    pub fn availability_zone_group(&self) -> std::option::Option<&str> {
        self.availability_zone_group.as_deref()
    }

    /// <p>The duration for the Spot Instance, in minutes.</p>
    pub fn block_duration_minutes(&self) -> std::option::Option<i32> {
        self.block_duration_minutes
    }

    /// <p>The date and time when the Spot Instance request was created, in UTC format.</p>
    pub fn create_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.create_time.as_ref()
    }

    /// <p>The fault codes for the Spot Instance request, if any.</p>
    pub fn fault(&self) -> std::option::Option<&crate::model::SpotInstanceStateFault> {
        self.fault.as_ref()
    }

    /// <p>The instance ID, if an instance has been launched to fulfill the Spot Instance request.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }

    /// <p>The instance launch group. Launch groups are Spot Instances that launch together and terminate together.</p>
    pub fn launch_group(&self) -> std::option::Option<&str> {
        self.launch_group.as_deref()
    }

    /// <p>Additional information for launching instances.</p>
    pub fn launch_specification(&self) -> std::option::Option<&crate::model::LaunchSpecification> {
        self.launch_specification.as_ref()
    }

    /// <p>The Availability Zone in which the request is launched.</p>
    pub fn launched_availability_zone(&self) -> std::option::Option<&str> {
        self.launched_availability_zone.as_deref()
    }

    /// <p>The product description associated with the Spot Instance.</p>
    pub fn product_description(&self) -> std::option::Option<&crate::model::RIProductDescription> {
        self.product_description.as_ref()
    }

    /// <p>The ID of the Spot Instance request.</p>
    pub fn spot_instance_request_id(&self) -> std::option::Option<&str> {
        self.spot_instance_request_id.as_deref()
    }

    /// <p>The maximum price per hour that you are willing to pay for a Spot Instance.</p>
    pub fn spot_price(&self) -> std::option::Option<&str> {
        self.spot_price.as_deref()
    }

    /// <p>The state of the Spot Instance request. Spot status information helps track your Spot Instance requests.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::SpotInstanceState> {
        self.state.as_ref()
    }

    /// <p>The status code and status message describing the Spot Instance request.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::SpotInstanceStatus> {
        self.status.as_ref()
    }

    /// <p>Any tags assigned to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// <p>The Spot Instance request type.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::SpotInstanceType> {
        self.r#type.as_ref()
    }

    /// <p>The start date of the request, in UTC format. The request becomes active at this date and time.</p>
    pub fn valid_from(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_from.as_ref()
    }

    /// <p>The end date of the request, in UTC format.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }
}
impl std::fmt::Debug for SpotInstanceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("ActualBlockHourlyPrice", &self.actual_block_hourly_price);
        formatter.field("AvailabilityZoneGroup", &self.availability_zone_group);
        formatter.field("BlockDurationMinutes", &self.block_duration_minutes);
        formatter.field("CreateTime", &self.create_time);
        formatter.field("Fault", &self.fault);
        formatter.field("InstanceId", &self.instance_id);
        formatter.field("LaunchGroup", &self.launch_group);
        formatter.field("LaunchSpecification", &self.launch_specification);
        formatter.field("LaunchedAvailabilityZone", &self.launched_availability_zone);
        formatter.enum_field("ProductDescription", &self.product_description);
        formatter.field("SpotInstanceRequestId", &self.spot_instance_request_id);
        formatter.field("SpotPrice", &self.spot_price);
        formatter.enum_field("State", &self.state);
        formatter.field("Status", &self.status);
        formatter.field("Tags", &self.tags);
        formatter.enum_field("Type", &self.r#type);
        formatter.field("ValidFrom", &self.valid_from);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.finish()
    }
}
/// See [`SpotInstanceRequest`](crate::model::SpotInstanceRequest)
pub mod spot_instance_request {
    /// A builder for [`SpotInstanceRequest`](crate::model::SpotInstanceRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) actual_block_hourly_price: std::option::Option<std::string::String>,
        pub(crate) availability_zone_group: std::option::Option<std::string::String>,
        pub(crate) block_duration_minutes: std::option::Option<i32>,
        pub(crate) create_time: std::option::Option<smithy_types::Instant>,
        pub(crate) fault: std::option::Option<crate::model::SpotInstanceStateFault>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) launch_group: std::option::Option<std::string::String>,
        pub(crate) launch_specification: std::option::Option<crate::model::LaunchSpecification>,
        pub(crate) launched_availability_zone: std::option::Option<std::string::String>,
        pub(crate) product_description: std::option::Option<crate::model::RIProductDescription>,
        pub(crate) spot_instance_request_id: std::option::Option<std::string::String>,
        pub(crate) spot_price: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<crate::model::SpotInstanceState>,
        pub(crate) status: std::option::Option<crate::model::SpotInstanceStatus>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) r#type: std::option::Option<crate::model::SpotInstanceType>,
        pub(crate) valid_from: std::option::Option<smithy_types::Instant>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
    }
    impl Builder {
        /// <p>If you specified a duration and your Spot Instance request was fulfilled, this is the fixed hourly price in effect for the Spot Instance while it runs.</p>
        pub fn actual_block_hourly_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.actual_block_hourly_price = Some(input.into());
            self
        }
        /// <p>If you specified a duration and your Spot Instance request was fulfilled, this is the fixed hourly price in effect for the Spot Instance while it runs.</p>
        pub fn set_actual_block_hourly_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.actual_block_hourly_price = input;
            self
        }

        /// <p>The Availability Zone group. If you specify the same Availability Zone group for all Spot Instance requests, all Spot Instances are launched in the same Availability Zone.</p>
        pub fn availability_zone_group(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone_group = Some(input.into());
            self
        }
        /// <p>The Availability Zone group. If you specify the same Availability Zone group for all Spot Instance requests, all Spot Instances are launched in the same Availability Zone.</p>
        pub fn set_availability_zone_group(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone_group = input;
            self
        }

        /// <p>The duration for the Spot Instance, in minutes.</p>
        pub fn block_duration_minutes(mut self, input: i32) -> Self {
            self.block_duration_minutes = Some(input);
            self
        }
        /// <p>The duration for the Spot Instance, in minutes.</p>
        pub fn set_block_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.block_duration_minutes = input;
            self
        }

        /// <p>The date and time when the Spot Instance request was created, in UTC format.</p>
        pub fn create_time(mut self, input: smithy_types::Instant) -> Self {
            self.create_time = Some(input);
            self
        }
        /// <p>The date and time when the Spot Instance request was created, in UTC format.</p>
        pub fn set_create_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.create_time = input;
            self
        }

        /// <p>The fault codes for the Spot Instance request, if any.</p>
        pub fn fault(mut self, input: crate::model::SpotInstanceStateFault) -> Self {
            self.fault = Some(input);
            self
        }
        /// <p>The fault codes for the Spot Instance request, if any.</p>
        pub fn set_fault(mut self, input: std::option::Option<crate::model::SpotInstanceStateFault>) -> Self {
            self.fault = input;
            self
        }

        /// <p>The instance ID, if an instance has been launched to fulfill the Spot Instance request.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The instance ID, if an instance has been launched to fulfill the Spot Instance request.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }

        /// <p>The instance launch group. Launch groups are Spot Instances that launch together and terminate together.</p>
        pub fn launch_group(mut self, input: impl Into<std::string::String>) -> Self {
            self.launch_group = Some(input.into());
            self
        }
        /// <p>The instance launch group. Launch groups are Spot Instances that launch together and terminate together.</p>
        pub fn set_launch_group(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launch_group = input;
            self
        }

        /// <p>Additional information for launching instances.</p>
        pub fn launch_specification(mut self, input: crate::model::LaunchSpecification) -> Self {
            self.launch_specification = Some(input);
            self
        }
        /// <p>Additional information for launching instances.</p>
        pub fn set_launch_specification(mut self, input: std::option::Option<crate::model::LaunchSpecification>) -> Self {
            self.launch_specification = input;
            self
        }

        /// <p>The Availability Zone in which the request is launched.</p>
        pub fn launched_availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.launched_availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone in which the request is launched.</p>
        pub fn set_launched_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.launched_availability_zone = input;
            self
        }

        /// <p>The product description associated with the Spot Instance.</p>
        pub fn product_description(mut self, input: crate::model::RIProductDescription) -> Self {
            self.product_description = Some(input);
            self
        }
        /// <p>The product description associated with the Spot Instance.</p>
        pub fn set_product_description(mut self, input: std::option::Option<crate::model::RIProductDescription>) -> Self {
            self.product_description = input;
            self
        }

        /// <p>The ID of the Spot Instance request.</p>
        pub fn spot_instance_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_instance_request_id = Some(input.into());
            self
        }
        /// <p>The ID of the Spot Instance request.</p>
        pub fn set_spot_instance_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_instance_request_id = input;
            self
        }

        /// <p>The maximum price per hour that you are willing to pay for a Spot Instance.</p>
        pub fn spot_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.spot_price = Some(input.into());
            self
        }
        /// <p>The maximum price per hour that you are willing to pay for a Spot Instance.</p>
        pub fn set_spot_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spot_price = input;
            self
        }

        /// <p>The state of the Spot Instance request. Spot status information helps track your Spot Instance requests.</p>
        pub fn state(mut self, input: crate::model::SpotInstanceState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the Spot Instance request. Spot status information helps track your Spot Instance requests.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::SpotInstanceState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The status code and status message describing the Spot Instance request.</p>
        pub fn status(mut self, input: crate::model::SpotInstanceStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The status code and status message describing the Spot Instance request.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::SpotInstanceStatus>) -> Self {
            self.status = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>Any tags assigned to the resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>Any tags assigned to the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }

        /// <p>The Spot Instance request type.</p>
        pub fn r#type(mut self, input: crate::model::SpotInstanceType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The Spot Instance request type.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::SpotInstanceType>) -> Self {
            self.r#type = input;
            self
        }

        /// <p>The start date of the request, in UTC format. The request becomes active at this date and time.</p>
        pub fn valid_from(mut self, input: smithy_types::Instant) -> Self {
            self.valid_from = Some(input);
            self
        }
        /// <p>The start date of the request, in UTC format. The request becomes active at this date and time.</p>
        pub fn set_valid_from(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_from = input;
            self
        }

        /// <p>The end date of the request, in UTC format.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date of the request, in UTC format.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::InstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::InstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }
        /// Consumes the builder and constructs a [`SpotInstanceRequest`](crate::model::SpotInstanceRequest)
        pub fn build(self) -> crate::model::SpotInstanceRequest {
            crate::model::SpotInstanceRequest {
                actual_block_hourly_price: self.actual_block_hourly_price,
                availability_zone_group: self.availability_zone_group,
                block_duration_minutes: self.block_duration_minutes,
                create_time: self.create_time,
                fault: self.fault,
                instance_id: self.instance_id,
                launch_group: self.launch_group,
                launch_specification: self.launch_specification,
                launched_availability_zone: self.launched_availability_zone,
                product_description: self.product_description,
                spot_instance_request_id: self.spot_instance_request_id,
                spot_price: self.spot_price,
                state: self.state,
                status: self.status,
                tags: self.tags,
                r#type: self.r#type,
                valid_from: self.valid_from,
                valid_until: self.valid_until,
                instance_interruption_behavior: self.instance_interruption_behavior,
            }
        }
    }
}
impl SpotInstanceRequest {
    /// Creates a new builder-style object to manufacture [`SpotInstanceRequest`](crate::model::SpotInstanceRequest)
    pub fn builder() -> crate::model::spot_instance_request::Builder {
        crate::model::spot_instance_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SpotInstanceState {
    #[allow(missing_docs)] // documentation missing in model
    Open,
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Closed,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SpotInstanceState {
    fn from(s: &str) -> Self {
        match s {
            "open" => SpotInstanceState::Open,
            "active" => SpotInstanceState::Active,
            "closed" => SpotInstanceState::Closed,
            "cancelled" => SpotInstanceState::Cancelled,
            "failed" => SpotInstanceState::Failed,
            other => SpotInstanceState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SpotInstanceState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpotInstanceState::from(s))
    }
}
impl SpotInstanceState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            SpotInstanceState::Open => "open",
            SpotInstanceState::Active => "active",
            SpotInstanceState::Closed => "closed",
            SpotInstanceState::Cancelled => "cancelled",
            SpotInstanceState::Failed => "failed",
            SpotInstanceState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "open",
            "active",
            "closed",
            "cancelled",
            "failed",
        ]
    }
}
impl AsRef<str> for SpotInstanceState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>Describes a Region.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct Region {
    /// <p>The Region service endpoint.</p>
    pub endpoint: std::option::Option<std::string::String>,
    /// <p>The name of the Region.</p>
    pub region_name: std::option::Option<std::string::String>,
    /// <p>The Region opt-in status. The possible values are <code>opt-in-not-required</code>, <code>opted-in</code>, and <code>not-opted-in</code>.</p>
    pub opt_in_status: std::option::Option<std::string::String>,
}
impl Region {
    /// <p>The Region service endpoint.</p>
    pub fn endpoint(&self) -> std::option::Option<&str> {
        self.endpoint.as_deref()
    }

    /// <p>The name of the Region.</p>
    pub fn region_name(&self) -> std::option::Option<&str> {
        self.region_name.as_deref()
    }

    /// <p>The Region opt-in status. The possible values are <code>opt-in-not-required</code>, <code>opted-in</code>, and <code>not-opted-in</code>.</p>
    pub fn opt_in_status(&self) -> std::option::Option<&str> {
        self.opt_in_status.as_deref()
    }
}
impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Endpoint", &self.endpoint);
        formatter.field("RegionName", &self.region_name);
        formatter.field("OptInStatus", &self.opt_in_status);
        formatter.finish()
    }
}
/// See [`Region`](crate::model::Region)
pub mod region {
    /// A builder for [`Region`](crate::model::Region)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint: std::option::Option<std::string::String>,
        pub(crate) region_name: std::option::Option<std::string::String>,
        pub(crate) opt_in_status: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Region service endpoint.</p>
        pub fn endpoint(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint = Some(input.into());
            self
        }
        /// <p>The Region service endpoint.</p>
        pub fn set_endpoint(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint = input;
            self
        }

        /// <p>The name of the Region.</p>
        pub fn region_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.region_name = Some(input.into());
            self
        }
        /// <p>The name of the Region.</p>
        pub fn set_region_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region_name = input;
            self
        }

        /// <p>The Region opt-in status. The possible values are <code>opt-in-not-required</code>, <code>opted-in</code>, and <code>not-opted-in</code>.</p>
        pub fn opt_in_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_in_status = Some(input.into());
            self
        }
        /// <p>The Region opt-in status. The possible values are <code>opt-in-not-required</code>, <code>opted-in</code>, and <code>not-opted-in</code>.</p>
        pub fn set_opt_in_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_in_status = input;
            self
        }
        /// Consumes the builder and constructs a [`Region`](crate::model::Region)
        pub fn build(self) -> crate::model::Region {
            crate::model::Region {
                endpoint: self.endpoint,
                region_name: self.region_name,
                opt_in_status: self.opt_in_status,
            }
        }
    }
}
impl Region {
    /// Creates a new builder-style object to manufacture [`Region`](crate::model::Region)
    pub fn builder() -> crate::model::region::Builder {
        crate::model::region::Builder::default()
    }
}

/// <p>An IAM instance profile.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateIamInstanceProfileSpecificationRequest {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the instance profile.</p>
    pub name: std::option::Option<std::string::String>,
}
impl LaunchTemplateIamInstanceProfileSpecificationRequest {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }

    /// <p>The name of the instance profile.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateIamInstanceProfileSpecificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Arn", &self.arn);
        formatter.field("Name", &self.name);
        formatter.finish()
    }
}
/// See [`LaunchTemplateIamInstanceProfileSpecificationRequest`](crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest)
pub mod launch_template_iam_instance_profile_specification_request {
    /// A builder for [`LaunchTemplateIamInstanceProfileSpecificationRequest`](crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }

        /// <p>The name of the instance profile.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the instance profile.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateIamInstanceProfileSpecificationRequest`](crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest)
        pub fn build(self) -> crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest {
            crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}
impl LaunchTemplateIamInstanceProfileSpecificationRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateIamInstanceProfileSpecificationRequest`](crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest)
    pub fn builder() -> crate::model::launch_template_iam_instance_profile_specification_request::Builder {
        crate::model::launch_template_iam_instance_profile_specification_request::Builder::default()
    }
}

/// <p>The parameters for a block device for an EBS volume.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateEbsBlockDeviceRequest {
    /// <p>Indicates whether the EBS volume is encrypted. Encrypted volumes can only be attached to instances that support Amazon EBS encryption. If you are creating a volume from a snapshot, you can't specify an encryption value.</p>
    pub encrypted: std::option::Option<bool>,
    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The number of I/O operations per second (IOPS) to provision for an <code>io1</code> volume. This parameter is not supported for <code>gp2</code>, <code>st1</code>, <code>sc1</code>, or <code>standard</code> volumes.</p>
    pub iops: std::option::Option<i32>,
    /// <p>The ARN of the symmetric AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
    pub kms_key_id: std::option::Option<std::string::String>,
    /// <p>The ID of the snapshot.</p>
    pub snapshot_id: std::option::Option<std::string::String>,
    /// <p>The size of the volume, in GiB.</p>
    /// <p>Default: If you're creating the volume from a snapshot and don't specify a volume size, the default is the snapshot size.</p>
    pub volume_size: std::option::Option<i32>,
    /// <p>The volume type.</p>
    pub volume_type: std::option::Option<crate::model::VolumeType>,
}
impl LaunchTemplateEbsBlockDeviceRequest {
    /// <p>Indicates whether the EBS volume is encrypted. Encrypted volumes can only be attached to instances that support Amazon EBS encryption. If you are creating a volume from a snapshot, you can't specify an encryption value.</p>
    pub fn encrypted(&self) -> std::option::Option<bool> {
        self.encrypted
    }

    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The number of I/O operations per second (IOPS) to provision for an <code>io1</code> volume. This parameter is not supported for <code>gp2</code>, <code>st1</code>, <code>sc1</code>, or <code>standard</code> volumes.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }

    /// <p>The ARN of the symmetric AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// <p>The ID of the snapshot.</p>
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// <p>The size of the volume, in GiB.</p>
    /// <p>Default: If you're creating the volume from a snapshot and don't specify a volume size, the default is the snapshot size.</p>
    pub fn volume_size(&self) -> std::option::Option<i32> {
        self.volume_size
    }

    /// <p>The volume type.</p>
    pub fn volume_type(&self) -> std::option::Option<&crate::model::VolumeType> {
        self.volume_type.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateEbsBlockDeviceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Encrypted", &self.encrypted);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Iops", &self.iops);
        formatter.field("KmsKeyId", &self.kms_key_id);
        formatter.field("SnapshotId", &self.snapshot_id);
        formatter.field("VolumeSize", &self.volume_size);
        formatter.enum_field("VolumeType", &self.volume_type);
        formatter.finish()
    }
}
/// See [`LaunchTemplateEbsBlockDeviceRequest`](crate::model::LaunchTemplateEbsBlockDeviceRequest)
pub mod launch_template_ebs_block_device_request {
    /// A builder for [`LaunchTemplateEbsBlockDeviceRequest`](crate::model::LaunchTemplateEbsBlockDeviceRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) encrypted: std::option::Option<bool>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) snapshot_id: std::option::Option<std::string::String>,
        pub(crate) volume_size: std::option::Option<i32>,
        pub(crate) volume_type: std::option::Option<crate::model::VolumeType>,
    }
    impl Builder {
        /// <p>Indicates whether the EBS volume is encrypted. Encrypted volumes can only be attached to instances that support Amazon EBS encryption. If you are creating a volume from a snapshot, you can't specify an encryption value.</p>
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        /// <p>Indicates whether the EBS volume is encrypted. Encrypted volumes can only be attached to instances that support Amazon EBS encryption. If you are creating a volume from a snapshot, you can't specify an encryption value.</p>
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }

        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>The number of I/O operations per second (IOPS) to provision for an <code>io1</code> volume. This parameter is not supported for <code>gp2</code>, <code>st1</code>, <code>sc1</code>, or <code>standard</code> volumes.</p>
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        /// <p>The number of I/O operations per second (IOPS) to provision for an <code>io1</code> volume. This parameter is not supported for <code>gp2</code>, <code>st1</code>, <code>sc1</code>, or <code>standard</code> volumes.</p>
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
            self
        }

        /// <p>The ARN of the symmetric AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        /// <p>The ARN of the symmetric AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }

        /// <p>The ID of the snapshot.</p>
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// <p>The ID of the snapshot.</p>
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }

        /// <p>The size of the volume, in GiB.</p>
        /// <p>Default: If you're creating the volume from a snapshot and don't specify a volume size, the default is the snapshot size.</p>
        pub fn volume_size(mut self, input: i32) -> Self {
            self.volume_size = Some(input);
            self
        }
        /// <p>The size of the volume, in GiB.</p>
        /// <p>Default: If you're creating the volume from a snapshot and don't specify a volume size, the default is the snapshot size.</p>
        pub fn set_volume_size(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size = input;
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
        /// Consumes the builder and constructs a [`LaunchTemplateEbsBlockDeviceRequest`](crate::model::LaunchTemplateEbsBlockDeviceRequest)
        pub fn build(self) -> crate::model::LaunchTemplateEbsBlockDeviceRequest {
            crate::model::LaunchTemplateEbsBlockDeviceRequest {
                encrypted: self.encrypted,
                delete_on_termination: self.delete_on_termination,
                iops: self.iops,
                kms_key_id: self.kms_key_id,
                snapshot_id: self.snapshot_id,
                volume_size: self.volume_size,
                volume_type: self.volume_type,
            }
        }
    }
}
impl LaunchTemplateEbsBlockDeviceRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateEbsBlockDeviceRequest`](crate::model::LaunchTemplateEbsBlockDeviceRequest)
    pub fn builder() -> crate::model::launch_template_ebs_block_device_request::Builder {
        crate::model::launch_template_ebs_block_device_request::Builder::default()
    }
}

/// <p>Describes a block device mapping.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateBlockDeviceMappingRequest {
    /// <p>The device name (for example, /dev/sdh or xvdh).</p>
    pub device_name: std::option::Option<std::string::String>,
    /// <p>The virtual device name (ephemeralN). Instance store volumes are numbered starting from 0. An instance type with 2 available instance store volumes can specify mappings for ephemeral0 and ephemeral1. The number of available instance store volumes depends on the instance type. After you connect to the instance, you must mount the volume.</p>
    pub virtual_name: std::option::Option<std::string::String>,
    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub ebs: std::option::Option<crate::model::LaunchTemplateEbsBlockDeviceRequest>,
    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub no_device: std::option::Option<std::string::String>,
}
impl LaunchTemplateBlockDeviceMappingRequest {
    /// <p>The device name (for example, /dev/sdh or xvdh).</p>
    pub fn device_name(&self) -> std::option::Option<&str> {
        self.device_name.as_deref()
    }

    /// <p>The virtual device name (ephemeralN). Instance store volumes are numbered starting from 0. An instance type with 2 available instance store volumes can specify mappings for ephemeral0 and ephemeral1. The number of available instance store volumes depends on the instance type. After you connect to the instance, you must mount the volume.</p>
    pub fn virtual_name(&self) -> std::option::Option<&str> {
        self.virtual_name.as_deref()
    }

    /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
    pub fn ebs(&self) -> std::option::Option<&crate::model::LaunchTemplateEbsBlockDeviceRequest> {
        self.ebs.as_ref()
    }

    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub fn no_device(&self) -> std::option::Option<&str> {
        self.no_device.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateBlockDeviceMappingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DeviceName", &self.device_name);
        formatter.field("VirtualName", &self.virtual_name);
        formatter.field("Ebs", &self.ebs);
        formatter.field("NoDevice", &self.no_device);
        formatter.finish()
    }
}
/// See [`LaunchTemplateBlockDeviceMappingRequest`](crate::model::LaunchTemplateBlockDeviceMappingRequest)
pub mod launch_template_block_device_mapping_request {
    /// A builder for [`LaunchTemplateBlockDeviceMappingRequest`](crate::model::LaunchTemplateBlockDeviceMappingRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device_name: std::option::Option<std::string::String>,
        pub(crate) virtual_name: std::option::Option<std::string::String>,
        pub(crate) ebs: std::option::Option<crate::model::LaunchTemplateEbsBlockDeviceRequest>,
        pub(crate) no_device: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The device name (for example, /dev/sdh or xvdh).</p>
        pub fn device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.device_name = Some(input.into());
            self
        }
        /// <p>The device name (for example, /dev/sdh or xvdh).</p>
        pub fn set_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device_name = input;
            self
        }

        /// <p>The virtual device name (ephemeralN). Instance store volumes are numbered starting from 0. An instance type with 2 available instance store volumes can specify mappings for ephemeral0 and ephemeral1. The number of available instance store volumes depends on the instance type. After you connect to the instance, you must mount the volume.</p>
        pub fn virtual_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_name = Some(input.into());
            self
        }
        /// <p>The virtual device name (ephemeralN). Instance store volumes are numbered starting from 0. An instance type with 2 available instance store volumes can specify mappings for ephemeral0 and ephemeral1. The number of available instance store volumes depends on the instance type. After you connect to the instance, you must mount the volume.</p>
        pub fn set_virtual_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_name = input;
            self
        }

        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn ebs(mut self, input: crate::model::LaunchTemplateEbsBlockDeviceRequest) -> Self {
            self.ebs = Some(input);
            self
        }
        /// <p>Parameters used to automatically set up EBS volumes when the instance is launched.</p>
        pub fn set_ebs(mut self, input: std::option::Option<crate::model::LaunchTemplateEbsBlockDeviceRequest>) -> Self {
            self.ebs = input;
            self
        }

        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn no_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.no_device = Some(input.into());
            self
        }
        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn set_no_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.no_device = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateBlockDeviceMappingRequest`](crate::model::LaunchTemplateBlockDeviceMappingRequest)
        pub fn build(self) -> crate::model::LaunchTemplateBlockDeviceMappingRequest {
            crate::model::LaunchTemplateBlockDeviceMappingRequest {
                device_name: self.device_name,
                virtual_name: self.virtual_name,
                ebs: self.ebs,
                no_device: self.no_device,
            }
        }
    }
}
impl LaunchTemplateBlockDeviceMappingRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateBlockDeviceMappingRequest`](crate::model::LaunchTemplateBlockDeviceMappingRequest)
    pub fn builder() -> crate::model::launch_template_block_device_mapping_request::Builder {
        crate::model::launch_template_block_device_mapping_request::Builder::default()
    }
}

/// <p>Describes an IPv6 address.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct InstanceIpv6AddressRequest {
    /// <p>The IPv6 address.</p>
    pub ipv6_address: std::option::Option<std::string::String>,
}
impl InstanceIpv6AddressRequest {
    /// <p>The IPv6 address.</p>
    pub fn ipv6_address(&self) -> std::option::Option<&str> {
        self.ipv6_address.as_deref()
    }
}
impl std::fmt::Debug for InstanceIpv6AddressRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Ipv6Address", &self.ipv6_address);
        formatter.finish()
    }
}
/// See [`InstanceIpv6AddressRequest`](crate::model::InstanceIpv6AddressRequest)
pub mod instance_ipv6_address_request {
    /// A builder for [`InstanceIpv6AddressRequest`](crate::model::InstanceIpv6AddressRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ipv6_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The IPv6 address.</p>
        pub fn ipv6_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.ipv6_address = Some(input.into());
            self
        }
        /// <p>The IPv6 address.</p>
        pub fn set_ipv6_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ipv6_address = input;
            self
        }
        /// Consumes the builder and constructs a [`InstanceIpv6AddressRequest`](crate::model::InstanceIpv6AddressRequest)
        pub fn build(self) -> crate::model::InstanceIpv6AddressRequest {
            crate::model::InstanceIpv6AddressRequest {
                ipv6_address: self.ipv6_address,
            }
        }
    }
}
impl InstanceIpv6AddressRequest {
    /// Creates a new builder-style object to manufacture [`InstanceIpv6AddressRequest`](crate::model::InstanceIpv6AddressRequest)
    pub fn builder() -> crate::model::instance_ipv6_address_request::Builder {
        crate::model::instance_ipv6_address_request::Builder::default()
    }
}

/// <p>The parameters for a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    /// <p>Associates a public IPv4 address with eth0 for a new network interface.</p>
    pub associate_public_ip_address: std::option::Option<bool>,
    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>A description for the network interface.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The device index for the network interface attachment.</p>
    pub device_index: std::option::Option<i32>,
    /// <p>The IDs of one or more security groups.</p>
    pub groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>.</p>
    /// <p>If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
    /// <p>Valid values: <code>interface</code> | <code>efa</code></p>
    pub interface_type: std::option::Option<std::string::String>,
    /// <p>The number of IPv6 addresses to assign to a network interface. Amazon EC2 automatically selects the IPv6 addresses from the subnet range. You can't use this option if specifying specific IPv6 addresses.</p>
    pub ipv6_address_count: std::option::Option<i32>,
    /// <p>One or more specific IPv6 addresses from the IPv6 CIDR block range of your subnet. You can't use this option if you're specifying a number of IPv6 addresses.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6AddressRequest>>,
    /// <p>The ID of the network interface.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>The primary private IPv4 address of the network interface.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>One or more private IPv4 addresses.</p>
    pub private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
    /// <p>The number of secondary private IPv4 addresses to assign to a network interface.</p>
    pub secondary_private_ip_address_count: std::option::Option<i32>,
    /// <p>The ID of the subnet for the network interface.</p>
    pub subnet_id: std::option::Option<std::string::String>,
}
impl LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    /// <p>Associates a public IPv4 address with eth0 for a new network interface.</p>
    pub fn associate_public_ip_address(&self) -> std::option::Option<bool> {
        self.associate_public_ip_address
    }

    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>A description for the network interface.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The device index for the network interface attachment.</p>
    pub fn device_index(&self) -> std::option::Option<i32> {
        self.device_index
    }

    /// <p>The IDs of one or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[std::string::String] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>.</p>
    /// <p>If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
    /// <p>Valid values: <code>interface</code> | <code>efa</code></p>
    pub fn interface_type(&self) -> std::option::Option<&str> {
        self.interface_type.as_deref()
    }

    /// <p>The number of IPv6 addresses to assign to a network interface. Amazon EC2 automatically selects the IPv6 addresses from the subnet range. You can't use this option if specifying specific IPv6 addresses.</p>
    pub fn ipv6_address_count(&self) -> std::option::Option<i32> {
        self.ipv6_address_count
    }

    /// <p>One or more specific IPv6 addresses from the IPv6 CIDR block range of your subnet. You can't use this option if you're specifying a number of IPv6 addresses.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::InstanceIpv6AddressRequest] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the network interface.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>The primary private IPv4 address of the network interface.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>One or more private IPv4 addresses.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.private_ip_addresses.is_none()`.
    pub fn private_ip_addresses(&self) -> &[crate::model::PrivateIpAddressSpecification] {
        self.private_ip_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The number of secondary private IPv4 addresses to assign to a network interface.</p>
    pub fn secondary_private_ip_address_count(&self) -> std::option::Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// <p>The ID of the subnet for the network interface.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AssociatePublicIpAddress", &self.associate_public_ip_address);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Description", &self.description);
        formatter.field("DeviceIndex", &self.device_index);
        formatter.field("Groups", &self.groups);
        formatter.field("InterfaceType", &self.interface_type);
        formatter.field("Ipv6AddressCount", &self.ipv6_address_count);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("PrivateIpAddresses", &self.private_ip_addresses);
        formatter.field("SecondaryPrivateIpAddressCount", &self.secondary_private_ip_address_count);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceNetworkInterfaceSpecificationRequest`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest)
pub mod launch_template_instance_network_interface_specification_request {
    /// A builder for [`LaunchTemplateInstanceNetworkInterfaceSpecificationRequest`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) associate_public_ip_address: std::option::Option<bool>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) device_index: std::option::Option<i32>,
        pub(crate) groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) interface_type: std::option::Option<std::string::String>,
        pub(crate) ipv6_address_count: std::option::Option<i32>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6AddressRequest>>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
        pub(crate) secondary_private_ip_address_count: std::option::Option<i32>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Associates a public IPv4 address with eth0 for a new network interface.</p>
        pub fn associate_public_ip_address(mut self, input: bool) -> Self {
            self.associate_public_ip_address = Some(input);
            self
        }
        /// <p>Associates a public IPv4 address with eth0 for a new network interface.</p>
        pub fn set_associate_public_ip_address(mut self, input: std::option::Option<bool>) -> Self {
            self.associate_public_ip_address = input;
            self
        }

        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>A description for the network interface.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the network interface.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The device index for the network interface attachment.</p>
        pub fn device_index(mut self, input: i32) -> Self {
            self.device_index = Some(input);
            self
        }
        /// <p>The device index for the network interface attachment.</p>
        pub fn set_device_index(mut self, input: std::option::Option<i32>) -> Self {
            self.device_index = input;
            self
        }

        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>The IDs of one or more security groups.</p>
        pub fn groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>The IDs of one or more security groups.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.groups = input;
            self
        }

        /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>.</p>
        /// <p>If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
        /// <p>Valid values: <code>interface</code> | <code>efa</code></p>
        pub fn interface_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.interface_type = Some(input.into());
            self
        }
        /// <p>The type of network interface. To create an Elastic Fabric Adapter (EFA), specify <code>efa</code>.</p>
        /// <p>If you are not creating an EFA, specify <code>interface</code> or omit this parameter.</p>
        /// <p>Valid values: <code>interface</code> | <code>efa</code></p>
        pub fn set_interface_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interface_type = input;
            self
        }

        /// <p>The number of IPv6 addresses to assign to a network interface. Amazon EC2 automatically selects the IPv6 addresses from the subnet range. You can't use this option if specifying specific IPv6 addresses.</p>
        pub fn ipv6_address_count(mut self, input: i32) -> Self {
            self.ipv6_address_count = Some(input);
            self
        }
        /// <p>The number of IPv6 addresses to assign to a network interface. Amazon EC2 automatically selects the IPv6 addresses from the subnet range. You can't use this option if specifying specific IPv6 addresses.</p>
        pub fn set_ipv6_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.ipv6_address_count = input;
            self
        }

        /// Appends an item to `ipv6_addresses`.
        ///
        /// To override the contents of this collection use [`set_ipv6_addresses`](Self::set_ipv6_addresses).
        ///
        /// <p>One or more specific IPv6 addresses from the IPv6 CIDR block range of your subnet. You can't use this option if you're specifying a number of IPv6 addresses.</p>
        pub fn ipv6_addresses(mut self, input: impl std::convert::Into<crate::model::InstanceIpv6AddressRequest>) -> Self {
            let mut v = self.ipv6_addresses.unwrap_or_default();
            v.push(input.into());
            self.ipv6_addresses = Some(v);
            self
        }
        /// <p>One or more specific IPv6 addresses from the IPv6 CIDR block range of your subnet. You can't use this option if you're specifying a number of IPv6 addresses.</p>
        pub fn set_ipv6_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6AddressRequest>>) -> Self {
            self.ipv6_addresses = input;
            self
        }

        /// <p>The ID of the network interface.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }

        /// <p>The primary private IPv4 address of the network interface.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The primary private IPv4 address of the network interface.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }

        /// Appends an item to `private_ip_addresses`.
        ///
        /// To override the contents of this collection use [`set_private_ip_addresses`](Self::set_private_ip_addresses).
        ///
        /// <p>One or more private IPv4 addresses.</p>
        pub fn private_ip_addresses(mut self, input: impl std::convert::Into<crate::model::PrivateIpAddressSpecification>) -> Self {
            let mut v = self.private_ip_addresses.unwrap_or_default();
            v.push(input.into());
            self.private_ip_addresses = Some(v);
            self
        }
        /// <p>One or more private IPv4 addresses.</p>
        pub fn set_private_ip_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>) -> Self {
            self.private_ip_addresses = input;
            self
        }

        /// <p>The number of secondary private IPv4 addresses to assign to a network interface.</p>
        pub fn secondary_private_ip_address_count(mut self, input: i32) -> Self {
            self.secondary_private_ip_address_count = Some(input);
            self
        }
        /// <p>The number of secondary private IPv4 addresses to assign to a network interface.</p>
        pub fn set_secondary_private_ip_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.secondary_private_ip_address_count = input;
            self
        }

        /// <p>The ID of the subnet for the network interface.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>The ID of the subnet for the network interface.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceNetworkInterfaceSpecificationRequest`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
            crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
                associate_public_ip_address: self.associate_public_ip_address,
                delete_on_termination: self.delete_on_termination,
                description: self.description,
                device_index: self.device_index,
                groups: self.groups,
                interface_type: self.interface_type,
                ipv6_address_count: self.ipv6_address_count,
                ipv6_addresses: self.ipv6_addresses,
                network_interface_id: self.network_interface_id,
                private_ip_address: self.private_ip_address,
                private_ip_addresses: self.private_ip_addresses,
                secondary_private_ip_address_count: self.secondary_private_ip_address_count,
                subnet_id: self.subnet_id,
            }
        }
    }
}
impl LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceNetworkInterfaceSpecificationRequest`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest)
    pub fn builder() -> crate::model::launch_template_instance_network_interface_specification_request::Builder {
        crate::model::launch_template_instance_network_interface_specification_request::Builder::default()
    }
}

/// <p>Describes the monitoring for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplatesMonitoringRequest {
    /// <p>Specify <code>true</code> to enable detailed monitoring. Otherwise, basic monitoring is enabled.</p>
    pub enabled: std::option::Option<bool>,
}
impl LaunchTemplatesMonitoringRequest {
    /// <p>Specify <code>true</code> to enable detailed monitoring. Otherwise, basic monitoring is enabled.</p>
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
}
impl std::fmt::Debug for LaunchTemplatesMonitoringRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Enabled", &self.enabled);
        formatter.finish()
    }
}
/// See [`LaunchTemplatesMonitoringRequest`](crate::model::LaunchTemplatesMonitoringRequest)
pub mod launch_templates_monitoring_request {
    /// A builder for [`LaunchTemplatesMonitoringRequest`](crate::model::LaunchTemplatesMonitoringRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Specify <code>true</code> to enable detailed monitoring. Otherwise, basic monitoring is enabled.</p>
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        /// <p>Specify <code>true</code> to enable detailed monitoring. Otherwise, basic monitoring is enabled.</p>
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplatesMonitoringRequest`](crate::model::LaunchTemplatesMonitoringRequest)
        pub fn build(self) -> crate::model::LaunchTemplatesMonitoringRequest {
            crate::model::LaunchTemplatesMonitoringRequest {
                enabled: self.enabled,
            }
        }
    }
}
impl LaunchTemplatesMonitoringRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplatesMonitoringRequest`](crate::model::LaunchTemplatesMonitoringRequest)
    pub fn builder() -> crate::model::launch_templates_monitoring_request::Builder {
        crate::model::launch_templates_monitoring_request::Builder::default()
    }
}

/// <p>Describes the placement of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplatePlacementRequest {
    /// <p>The Availability Zone for the instance.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The affinity setting for an instance on a Dedicated Host.</p>
    pub affinity: std::option::Option<std::string::String>,
    /// <p>The name of the placement group for the instance.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The ID of the Dedicated Host for the instance.</p>
    pub host_id: std::option::Option<std::string::String>,
    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of dedicated runs on single-tenant hardware.</p>
    pub tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>Reserved for future use.</p>
    pub spread_domain: std::option::Option<std::string::String>,
    /// <p>The ARN of the host resource group in which to launch the instances. If you specify a host resource group ARN, omit the <b>Tenancy</b> parameter or set it to <code>host</code>.</p>
    pub host_resource_group_arn: std::option::Option<std::string::String>,
    /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub partition_number: std::option::Option<i32>,
}
impl LaunchTemplatePlacementRequest {
    /// <p>The Availability Zone for the instance.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The affinity setting for an instance on a Dedicated Host.</p>
    pub fn affinity(&self) -> std::option::Option<&str> {
        self.affinity.as_deref()
    }

    /// <p>The name of the placement group for the instance.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The ID of the Dedicated Host for the instance.</p>
    pub fn host_id(&self) -> std::option::Option<&str> {
        self.host_id.as_deref()
    }

    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of dedicated runs on single-tenant hardware.</p>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.tenancy.as_ref()
    }

    /// <p>Reserved for future use.</p>
    pub fn spread_domain(&self) -> std::option::Option<&str> {
        self.spread_domain.as_deref()
    }

    /// <p>The ARN of the host resource group in which to launch the instances. If you specify a host resource group ARN, omit the <b>Tenancy</b> parameter or set it to <code>host</code>.</p>
    pub fn host_resource_group_arn(&self) -> std::option::Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub fn partition_number(&self) -> std::option::Option<i32> {
        self.partition_number
    }
}
impl std::fmt::Debug for LaunchTemplatePlacementRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Affinity", &self.affinity);
        formatter.field("GroupName", &self.group_name);
        formatter.field("HostId", &self.host_id);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.field("SpreadDomain", &self.spread_domain);
        formatter.field("HostResourceGroupArn", &self.host_resource_group_arn);
        formatter.field("PartitionNumber", &self.partition_number);
        formatter.finish()
    }
}
/// See [`LaunchTemplatePlacementRequest`](crate::model::LaunchTemplatePlacementRequest)
pub mod launch_template_placement_request {
    /// A builder for [`LaunchTemplatePlacementRequest`](crate::model::LaunchTemplatePlacementRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) affinity: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) host_id: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) spread_domain: std::option::Option<std::string::String>,
        pub(crate) host_resource_group_arn: std::option::Option<std::string::String>,
        pub(crate) partition_number: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The Availability Zone for the instance.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone for the instance.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>The affinity setting for an instance on a Dedicated Host.</p>
        pub fn affinity(mut self, input: impl Into<std::string::String>) -> Self {
            self.affinity = Some(input.into());
            self
        }
        /// <p>The affinity setting for an instance on a Dedicated Host.</p>
        pub fn set_affinity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.affinity = input;
            self
        }

        /// <p>The name of the placement group for the instance.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the placement group for the instance.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The ID of the Dedicated Host for the instance.</p>
        pub fn host_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_id = Some(input.into());
            self
        }
        /// <p>The ID of the Dedicated Host for the instance.</p>
        pub fn set_host_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_id = input;
            self
        }

        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of dedicated runs on single-tenant hardware.</p>
        pub fn tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of dedicated runs on single-tenant hardware.</p>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.tenancy = input;
            self
        }

        /// <p>Reserved for future use.</p>
        pub fn spread_domain(mut self, input: impl Into<std::string::String>) -> Self {
            self.spread_domain = Some(input.into());
            self
        }
        /// <p>Reserved for future use.</p>
        pub fn set_spread_domain(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spread_domain = input;
            self
        }

        /// <p>The ARN of the host resource group in which to launch the instances. If you specify a host resource group ARN, omit the <b>Tenancy</b> parameter or set it to <code>host</code>.</p>
        pub fn host_resource_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_resource_group_arn = Some(input.into());
            self
        }
        /// <p>The ARN of the host resource group in which to launch the instances. If you specify a host resource group ARN, omit the <b>Tenancy</b> parameter or set it to <code>host</code>.</p>
        pub fn set_host_resource_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_resource_group_arn = input;
            self
        }

        /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn partition_number(mut self, input: i32) -> Self {
            self.partition_number = Some(input);
            self
        }
        /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn set_partition_number(mut self, input: std::option::Option<i32>) -> Self {
            self.partition_number = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplatePlacementRequest`](crate::model::LaunchTemplatePlacementRequest)
        pub fn build(self) -> crate::model::LaunchTemplatePlacementRequest {
            crate::model::LaunchTemplatePlacementRequest {
                availability_zone: self.availability_zone,
                affinity: self.affinity,
                group_name: self.group_name,
                host_id: self.host_id,
                tenancy: self.tenancy,
                spread_domain: self.spread_domain,
                host_resource_group_arn: self.host_resource_group_arn,
                partition_number: self.partition_number,
            }
        }
    }
}
impl LaunchTemplatePlacementRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplatePlacementRequest`](crate::model::LaunchTemplatePlacementRequest)
    pub fn builder() -> crate::model::launch_template_placement_request::Builder {
        crate::model::launch_template_placement_request::Builder::default()
    }
}

/// <p>The tags specification for the launch template.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateTagSpecificationRequest {
    /// <p>The type of resource to tag. Currently, the resource types that support tagging on creation are <code>instance</code> and <code>volume</code>. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    /// <p>The tags to apply to the resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl LaunchTemplateTagSpecificationRequest {
    /// <p>The type of resource to tag. Currently, the resource types that support tagging on creation are <code>instance</code> and <code>volume</code>. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
    pub fn resource_type(&self) -> std::option::Option<&crate::model::ResourceType> {
        self.resource_type.as_ref()
    }

    /// <p>The tags to apply to the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for LaunchTemplateTagSpecificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("ResourceType", &self.resource_type);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`LaunchTemplateTagSpecificationRequest`](crate::model::LaunchTemplateTagSpecificationRequest)
pub mod launch_template_tag_specification_request {
    /// A builder for [`LaunchTemplateTagSpecificationRequest`](crate::model::LaunchTemplateTagSpecificationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The type of resource to tag. Currently, the resource types that support tagging on creation are <code>instance</code> and <code>volume</code>. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
        pub fn resource_type(mut self, input: crate::model::ResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        /// <p>The type of resource to tag. Currently, the resource types that support tagging on creation are <code>instance</code> and <code>volume</code>. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::ResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to apply to the resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>The tags to apply to the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateTagSpecificationRequest`](crate::model::LaunchTemplateTagSpecificationRequest)
        pub fn build(self) -> crate::model::LaunchTemplateTagSpecificationRequest {
            crate::model::LaunchTemplateTagSpecificationRequest {
                resource_type: self.resource_type,
                tags: self.tags,
            }
        }
    }
}
impl LaunchTemplateTagSpecificationRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateTagSpecificationRequest`](crate::model::LaunchTemplateTagSpecificationRequest)
    pub fn builder() -> crate::model::launch_template_tag_specification_request::Builder {
        crate::model::launch_template_tag_specification_request::Builder::default()
    }
}

/// <p> Describes an elastic inference accelerator. </p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateElasticInferenceAccelerator {
    /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
    pub r#type: std::option::Option<std::string::String>,
    /// <p> The number of elastic inference accelerators to attach to the instance. </p>
    /// <p>Default: 1</p>
    pub count: std::option::Option<i32>,
}
impl LaunchTemplateElasticInferenceAccelerator {
    /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }

    /// <p> The number of elastic inference accelerators to attach to the instance. </p>
    /// <p>Default: 1</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }
}
impl std::fmt::Debug for LaunchTemplateElasticInferenceAccelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Type", &self.r#type);
        formatter.field("Count", &self.count);
        formatter.finish()
    }
}
/// See [`LaunchTemplateElasticInferenceAccelerator`](crate::model::LaunchTemplateElasticInferenceAccelerator)
pub mod launch_template_elastic_inference_accelerator {
    /// A builder for [`LaunchTemplateElasticInferenceAccelerator`](crate::model::LaunchTemplateElasticInferenceAccelerator)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<std::string::String>,
        pub(crate) count: std::option::Option<i32>,
    }
    impl Builder {
        /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }

        /// <p> The number of elastic inference accelerators to attach to the instance. </p>
        /// <p>Default: 1</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p> The number of elastic inference accelerators to attach to the instance. </p>
        /// <p>Default: 1</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateElasticInferenceAccelerator`](crate::model::LaunchTemplateElasticInferenceAccelerator)
        pub fn build(self) -> crate::model::LaunchTemplateElasticInferenceAccelerator {
            crate::model::LaunchTemplateElasticInferenceAccelerator {
                r#type: self.r#type,
                count: self.count,
            }
        }
    }
}
impl LaunchTemplateElasticInferenceAccelerator {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateElasticInferenceAccelerator`](crate::model::LaunchTemplateElasticInferenceAccelerator)
    pub fn builder() -> crate::model::launch_template_elastic_inference_accelerator::Builder {
        crate::model::launch_template_elastic_inference_accelerator::Builder::default()
    }
}

/// <p>The options for Spot Instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateSpotMarketOptionsRequest {
    /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
    pub max_price: std::option::Option<std::string::String>,
    /// <p>The Spot Instance request type.</p>
    pub spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
    /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
    pub block_duration_minutes: std::option::Option<i32>,
    /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached. The default end date is 7 days from the current date.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>The behavior when a Spot Instance is interrupted. The default is <code>terminate</code>.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
}
impl LaunchTemplateSpotMarketOptionsRequest {
    /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
    pub fn max_price(&self) -> std::option::Option<&str> {
        self.max_price.as_deref()
    }

    /// <p>The Spot Instance request type.</p>
    pub fn spot_instance_type(&self) -> std::option::Option<&crate::model::SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
    pub fn block_duration_minutes(&self) -> std::option::Option<i32> {
        self.block_duration_minutes
    }

    /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached. The default end date is 7 days from the current date.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>The behavior when a Spot Instance is interrupted. The default is <code>terminate</code>.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateSpotMarketOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("MaxPrice", &self.max_price);
        formatter.enum_field("SpotInstanceType", &self.spot_instance_type);
        formatter.field("BlockDurationMinutes", &self.block_duration_minutes);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.finish()
    }
}
/// See [`LaunchTemplateSpotMarketOptionsRequest`](crate::model::LaunchTemplateSpotMarketOptionsRequest)
pub mod launch_template_spot_market_options_request {
    /// A builder for [`LaunchTemplateSpotMarketOptionsRequest`](crate::model::LaunchTemplateSpotMarketOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) max_price: std::option::Option<std::string::String>,
        pub(crate) spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
        pub(crate) block_duration_minutes: std::option::Option<i32>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
    }
    impl Builder {
        /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
        pub fn max_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_price = Some(input.into());
            self
        }
        /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
        pub fn set_max_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_price = input;
            self
        }

        /// <p>The Spot Instance request type.</p>
        pub fn spot_instance_type(mut self, input: crate::model::SpotInstanceType) -> Self {
            self.spot_instance_type = Some(input);
            self
        }
        /// <p>The Spot Instance request type.</p>
        pub fn set_spot_instance_type(mut self, input: std::option::Option<crate::model::SpotInstanceType>) -> Self {
            self.spot_instance_type = input;
            self
        }

        /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
        pub fn block_duration_minutes(mut self, input: i32) -> Self {
            self.block_duration_minutes = Some(input);
            self
        }
        /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
        pub fn set_block_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.block_duration_minutes = input;
            self
        }

        /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached. The default end date is 7 days from the current date.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached. The default end date is 7 days from the current date.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted. The default is <code>terminate</code>.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::InstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted. The default is <code>terminate</code>.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::InstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateSpotMarketOptionsRequest`](crate::model::LaunchTemplateSpotMarketOptionsRequest)
        pub fn build(self) -> crate::model::LaunchTemplateSpotMarketOptionsRequest {
            crate::model::LaunchTemplateSpotMarketOptionsRequest {
                max_price: self.max_price,
                spot_instance_type: self.spot_instance_type,
                block_duration_minutes: self.block_duration_minutes,
                valid_until: self.valid_until,
                instance_interruption_behavior: self.instance_interruption_behavior,
            }
        }
    }
}
impl LaunchTemplateSpotMarketOptionsRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateSpotMarketOptionsRequest`](crate::model::LaunchTemplateSpotMarketOptionsRequest)
    pub fn builder() -> crate::model::launch_template_spot_market_options_request::Builder {
        crate::model::launch_template_spot_market_options_request::Builder::default()
    }
}

/// <p>The market (purchasing) option for the instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceMarketOptionsRequest {
    /// <p>The market type.</p>
    pub market_type: std::option::Option<crate::model::MarketType>,
    /// <p>The options for Spot Instances.</p>
    pub spot_options: std::option::Option<crate::model::LaunchTemplateSpotMarketOptionsRequest>,
}
impl LaunchTemplateInstanceMarketOptionsRequest {
    /// <p>The market type.</p>
    pub fn market_type(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market_type.as_ref()
    }

    /// <p>The options for Spot Instances.</p>
    pub fn spot_options(&self) -> std::option::Option<&crate::model::LaunchTemplateSpotMarketOptionsRequest> {
        self.spot_options.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceMarketOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("MarketType", &self.market_type);
        formatter.field("SpotOptions", &self.spot_options);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceMarketOptionsRequest`](crate::model::LaunchTemplateInstanceMarketOptionsRequest)
pub mod launch_template_instance_market_options_request {
    /// A builder for [`LaunchTemplateInstanceMarketOptionsRequest`](crate::model::LaunchTemplateInstanceMarketOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) market_type: std::option::Option<crate::model::MarketType>,
        pub(crate) spot_options: std::option::Option<crate::model::LaunchTemplateSpotMarketOptionsRequest>,
    }
    impl Builder {
        /// <p>The market type.</p>
        pub fn market_type(mut self, input: crate::model::MarketType) -> Self {
            self.market_type = Some(input);
            self
        }
        /// <p>The market type.</p>
        pub fn set_market_type(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market_type = input;
            self
        }

        /// <p>The options for Spot Instances.</p>
        pub fn spot_options(mut self, input: crate::model::LaunchTemplateSpotMarketOptionsRequest) -> Self {
            self.spot_options = Some(input);
            self
        }
        /// <p>The options for Spot Instances.</p>
        pub fn set_spot_options(mut self, input: std::option::Option<crate::model::LaunchTemplateSpotMarketOptionsRequest>) -> Self {
            self.spot_options = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceMarketOptionsRequest`](crate::model::LaunchTemplateInstanceMarketOptionsRequest)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceMarketOptionsRequest {
            crate::model::LaunchTemplateInstanceMarketOptionsRequest {
                market_type: self.market_type,
                spot_options: self.spot_options,
            }
        }
    }
}
impl LaunchTemplateInstanceMarketOptionsRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceMarketOptionsRequest`](crate::model::LaunchTemplateInstanceMarketOptionsRequest)
    pub fn builder() -> crate::model::launch_template_instance_market_options_request::Builder {
        crate::model::launch_template_instance_market_options_request::Builder::default()
    }
}

/// <p>The CPU options for the instance. Both the core count and threads per core must be specified in the request.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateCpuOptionsRequest {
    /// <p>The number of CPU cores for the instance.</p>
    pub core_count: std::option::Option<i32>,
    /// <p>The number of threads per CPU core. To disable multithreading for the instance, specify a value of 1. Otherwise, specify the default value of 2.</p>
    pub threads_per_core: std::option::Option<i32>,
}
impl LaunchTemplateCpuOptionsRequest {
    /// <p>The number of CPU cores for the instance.</p>
    pub fn core_count(&self) -> std::option::Option<i32> {
        self.core_count
    }

    /// <p>The number of threads per CPU core. To disable multithreading for the instance, specify a value of 1. Otherwise, specify the default value of 2.</p>
    pub fn threads_per_core(&self) -> std::option::Option<i32> {
        self.threads_per_core
    }
}
impl std::fmt::Debug for LaunchTemplateCpuOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CoreCount", &self.core_count);
        formatter.field("ThreadsPerCore", &self.threads_per_core);
        formatter.finish()
    }
}
/// See [`LaunchTemplateCpuOptionsRequest`](crate::model::LaunchTemplateCpuOptionsRequest)
pub mod launch_template_cpu_options_request {
    /// A builder for [`LaunchTemplateCpuOptionsRequest`](crate::model::LaunchTemplateCpuOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) core_count: std::option::Option<i32>,
        pub(crate) threads_per_core: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of CPU cores for the instance.</p>
        pub fn core_count(mut self, input: i32) -> Self {
            self.core_count = Some(input);
            self
        }
        /// <p>The number of CPU cores for the instance.</p>
        pub fn set_core_count(mut self, input: std::option::Option<i32>) -> Self {
            self.core_count = input;
            self
        }

        /// <p>The number of threads per CPU core. To disable multithreading for the instance, specify a value of 1. Otherwise, specify the default value of 2.</p>
        pub fn threads_per_core(mut self, input: i32) -> Self {
            self.threads_per_core = Some(input);
            self
        }
        /// <p>The number of threads per CPU core. To disable multithreading for the instance, specify a value of 1. Otherwise, specify the default value of 2.</p>
        pub fn set_threads_per_core(mut self, input: std::option::Option<i32>) -> Self {
            self.threads_per_core = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateCpuOptionsRequest`](crate::model::LaunchTemplateCpuOptionsRequest)
        pub fn build(self) -> crate::model::LaunchTemplateCpuOptionsRequest {
            crate::model::LaunchTemplateCpuOptionsRequest {
                core_count: self.core_count,
                threads_per_core: self.threads_per_core,
            }
        }
    }
}
impl LaunchTemplateCpuOptionsRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateCpuOptionsRequest`](crate::model::LaunchTemplateCpuOptionsRequest)
    pub fn builder() -> crate::model::launch_template_cpu_options_request::Builder {
        crate::model::launch_template_cpu_options_request::Builder::default()
    }
}

/// <p>Describes an instance's Capacity Reservation targeting option. You can specify only one option at a time. Use the <code>CapacityReservationPreference</code> parameter to configure the instance to run in On-Demand capacity or to run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone). Use the <code>CapacityReservationTarget</code> parameter to explicitly target a specific Capacity Reservation.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateCapacityReservationSpecificationRequest {
    /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
    /// </li>
    /// </ul>
    pub capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
    /// <p>Information about the target Capacity Reservation.</p>
    pub capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTarget>,
}
impl LaunchTemplateCapacityReservationSpecificationRequest {
    /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
    /// </li>
    /// </ul>
    pub fn capacity_reservation_preference(&self) -> std::option::Option<&crate::model::CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// <p>Information about the target Capacity Reservation.</p>
    pub fn capacity_reservation_target(&self) -> std::option::Option<&crate::model::CapacityReservationTarget> {
        self.capacity_reservation_target.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateCapacityReservationSpecificationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("CapacityReservationPreference", &self.capacity_reservation_preference);
        formatter.field("CapacityReservationTarget", &self.capacity_reservation_target);
        formatter.finish()
    }
}
/// See [`LaunchTemplateCapacityReservationSpecificationRequest`](crate::model::LaunchTemplateCapacityReservationSpecificationRequest)
pub mod launch_template_capacity_reservation_specification_request {
    /// A builder for [`LaunchTemplateCapacityReservationSpecificationRequest`](crate::model::LaunchTemplateCapacityReservationSpecificationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
        pub(crate) capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTarget>,
    }
    impl Builder {
        /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
        /// </li>
        /// </ul>
        pub fn capacity_reservation_preference(mut self, input: crate::model::CapacityReservationPreference) -> Self {
            self.capacity_reservation_preference = Some(input);
            self
        }
        /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
        /// </li>
        /// </ul>
        pub fn set_capacity_reservation_preference(mut self, input: std::option::Option<crate::model::CapacityReservationPreference>) -> Self {
            self.capacity_reservation_preference = input;
            self
        }

        /// <p>Information about the target Capacity Reservation.</p>
        pub fn capacity_reservation_target(mut self, input: crate::model::CapacityReservationTarget) -> Self {
            self.capacity_reservation_target = Some(input);
            self
        }
        /// <p>Information about the target Capacity Reservation.</p>
        pub fn set_capacity_reservation_target(mut self, input: std::option::Option<crate::model::CapacityReservationTarget>) -> Self {
            self.capacity_reservation_target = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateCapacityReservationSpecificationRequest`](crate::model::LaunchTemplateCapacityReservationSpecificationRequest)
        pub fn build(self) -> crate::model::LaunchTemplateCapacityReservationSpecificationRequest {
            crate::model::LaunchTemplateCapacityReservationSpecificationRequest {
                capacity_reservation_preference: self.capacity_reservation_preference,
                capacity_reservation_target: self.capacity_reservation_target,
            }
        }
    }
}
impl LaunchTemplateCapacityReservationSpecificationRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateCapacityReservationSpecificationRequest`](crate::model::LaunchTemplateCapacityReservationSpecificationRequest)
    pub fn builder() -> crate::model::launch_template_capacity_reservation_specification_request::Builder {
        crate::model::launch_template_capacity_reservation_specification_request::Builder::default()
    }
}

/// <p>Describes a license configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateLicenseConfigurationRequest {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub license_configuration_arn: std::option::Option<std::string::String>,
}
impl LaunchTemplateLicenseConfigurationRequest {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub fn license_configuration_arn(&self) -> std::option::Option<&str> {
        self.license_configuration_arn.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateLicenseConfigurationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LicenseConfigurationArn", &self.license_configuration_arn);
        formatter.finish()
    }
}
/// See [`LaunchTemplateLicenseConfigurationRequest`](crate::model::LaunchTemplateLicenseConfigurationRequest)
pub mod launch_template_license_configuration_request {
    /// A builder for [`LaunchTemplateLicenseConfigurationRequest`](crate::model::LaunchTemplateLicenseConfigurationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) license_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn license_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.license_configuration_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn set_license_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.license_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateLicenseConfigurationRequest`](crate::model::LaunchTemplateLicenseConfigurationRequest)
        pub fn build(self) -> crate::model::LaunchTemplateLicenseConfigurationRequest {
            crate::model::LaunchTemplateLicenseConfigurationRequest {
                license_configuration_arn: self.license_configuration_arn,
            }
        }
    }
}
impl LaunchTemplateLicenseConfigurationRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateLicenseConfigurationRequest`](crate::model::LaunchTemplateLicenseConfigurationRequest)
    pub fn builder() -> crate::model::launch_template_license_configuration_request::Builder {
        crate::model::launch_template_license_configuration_request::Builder::default()
    }
}

/// <p>Indicates whether the instance is configured for hibernation. This parameter is valid only if the instance meets the <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html#hibernating-prerequisites">hibernation prerequisites</a>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateHibernationOptionsRequest {
    /// <p>If you set this parameter to <code>true</code>, the instance is enabled for hibernation.</p>
    /// <p>Default: <code>false</code></p>
    pub configured: std::option::Option<bool>,
}
impl LaunchTemplateHibernationOptionsRequest {
    /// <p>If you set this parameter to <code>true</code>, the instance is enabled for hibernation.</p>
    /// <p>Default: <code>false</code></p>
    pub fn configured(&self) -> std::option::Option<bool> {
        self.configured
    }
}
impl std::fmt::Debug for LaunchTemplateHibernationOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Configured", &self.configured);
        formatter.finish()
    }
}
/// See [`LaunchTemplateHibernationOptionsRequest`](crate::model::LaunchTemplateHibernationOptionsRequest)
pub mod launch_template_hibernation_options_request {
    /// A builder for [`LaunchTemplateHibernationOptionsRequest`](crate::model::LaunchTemplateHibernationOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) configured: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>If you set this parameter to <code>true</code>, the instance is enabled for hibernation.</p>
        /// <p>Default: <code>false</code></p>
        pub fn configured(mut self, input: bool) -> Self {
            self.configured = Some(input);
            self
        }
        /// <p>If you set this parameter to <code>true</code>, the instance is enabled for hibernation.</p>
        /// <p>Default: <code>false</code></p>
        pub fn set_configured(mut self, input: std::option::Option<bool>) -> Self {
            self.configured = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateHibernationOptionsRequest`](crate::model::LaunchTemplateHibernationOptionsRequest)
        pub fn build(self) -> crate::model::LaunchTemplateHibernationOptionsRequest {
            crate::model::LaunchTemplateHibernationOptionsRequest {
                configured: self.configured,
            }
        }
    }
}
impl LaunchTemplateHibernationOptionsRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateHibernationOptionsRequest`](crate::model::LaunchTemplateHibernationOptionsRequest)
    pub fn builder() -> crate::model::launch_template_hibernation_options_request::Builder {
        crate::model::launch_template_hibernation_options_request::Builder::default()
    }
}

/// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceMetadataOptionsRequest {
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    /// <p>If the state is <code>optional</code>, you can choose to retrieve instance metadata with or without a signed token header on your request. If you retrieve the IAM role credentials without a token, the version 1.0 role credentials are returned. If you retrieve the IAM role credentials using a valid signed token, the version 2.0 role credentials are returned.</p>
    /// <p>If the state is <code>required</code>, you must send a signed token header with any instance metadata retrieval requests. In this state, retrieving the IAM role credentials always returns the version 2.0 credentials; the version 1.0 credentials are not available.</p>
    pub http_tokens: std::option::Option<crate::model::LaunchTemplateHttpTokensState>,
    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    /// <p>Default: 1</p>
    /// <p>Possible values: Integers from 1 to 64</p>
    pub http_put_response_hop_limit: std::option::Option<i32>,
    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    /// <note>
    /// <p>If you specify a value of <code>disabled</code>, you will not be able to access your instance metadata. </p>
    /// </note>
    pub http_endpoint: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>,
}
impl LaunchTemplateInstanceMetadataOptionsRequest {
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    /// <p>If the state is <code>optional</code>, you can choose to retrieve instance metadata with or without a signed token header on your request. If you retrieve the IAM role credentials without a token, the version 1.0 role credentials are returned. If you retrieve the IAM role credentials using a valid signed token, the version 2.0 role credentials are returned.</p>
    /// <p>If the state is <code>required</code>, you must send a signed token header with any instance metadata retrieval requests. In this state, retrieving the IAM role credentials always returns the version 2.0 credentials; the version 1.0 credentials are not available.</p>
    pub fn http_tokens(&self) -> std::option::Option<&crate::model::LaunchTemplateHttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    /// <p>Default: 1</p>
    /// <p>Possible values: Integers from 1 to 64</p>
    pub fn http_put_response_hop_limit(&self) -> std::option::Option<i32> {
        self.http_put_response_hop_limit
    }

    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    /// <note>
    /// <p>If you specify a value of <code>disabled</code>, you will not be able to access your instance metadata. </p>
    /// </note>
    pub fn http_endpoint(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceMetadataOptionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("HttpTokens", &self.http_tokens);
        formatter.field("HttpPutResponseHopLimit", &self.http_put_response_hop_limit);
        formatter.enum_field("HttpEndpoint", &self.http_endpoint);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceMetadataOptionsRequest`](crate::model::LaunchTemplateInstanceMetadataOptionsRequest)
pub mod launch_template_instance_metadata_options_request {
    /// A builder for [`LaunchTemplateInstanceMetadataOptionsRequest`](crate::model::LaunchTemplateInstanceMetadataOptionsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) http_tokens: std::option::Option<crate::model::LaunchTemplateHttpTokensState>,
        pub(crate) http_put_response_hop_limit: std::option::Option<i32>,
        pub(crate) http_endpoint: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>,
    }
    impl Builder {
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        /// <p>If the state is <code>optional</code>, you can choose to retrieve instance metadata with or without a signed token header on your request. If you retrieve the IAM role credentials without a token, the version 1.0 role credentials are returned. If you retrieve the IAM role credentials using a valid signed token, the version 2.0 role credentials are returned.</p>
        /// <p>If the state is <code>required</code>, you must send a signed token header with any instance metadata retrieval requests. In this state, retrieving the IAM role credentials always returns the version 2.0 credentials; the version 1.0 credentials are not available.</p>
        pub fn http_tokens(mut self, input: crate::model::LaunchTemplateHttpTokensState) -> Self {
            self.http_tokens = Some(input);
            self
        }
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        /// <p>If the state is <code>optional</code>, you can choose to retrieve instance metadata with or without a signed token header on your request. If you retrieve the IAM role credentials without a token, the version 1.0 role credentials are returned. If you retrieve the IAM role credentials using a valid signed token, the version 2.0 role credentials are returned.</p>
        /// <p>If the state is <code>required</code>, you must send a signed token header with any instance metadata retrieval requests. In this state, retrieving the IAM role credentials always returns the version 2.0 credentials; the version 1.0 credentials are not available.</p>
        pub fn set_http_tokens(mut self, input: std::option::Option<crate::model::LaunchTemplateHttpTokensState>) -> Self {
            self.http_tokens = input;
            self
        }

        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        /// <p>Default: 1</p>
        /// <p>Possible values: Integers from 1 to 64</p>
        pub fn http_put_response_hop_limit(mut self, input: i32) -> Self {
            self.http_put_response_hop_limit = Some(input);
            self
        }
        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        /// <p>Default: 1</p>
        /// <p>Possible values: Integers from 1 to 64</p>
        pub fn set_http_put_response_hop_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.http_put_response_hop_limit = input;
            self
        }

        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        /// <note>
        /// <p>If you specify a value of <code>disabled</code>, you will not be able to access your instance metadata. </p>
        /// </note>
        pub fn http_endpoint(mut self, input: crate::model::LaunchTemplateInstanceMetadataEndpointState) -> Self {
            self.http_endpoint = Some(input);
            self
        }
        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        /// <note>
        /// <p>If you specify a value of <code>disabled</code>, you will not be able to access your instance metadata. </p>
        /// </note>
        pub fn set_http_endpoint(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>) -> Self {
            self.http_endpoint = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceMetadataOptionsRequest`](crate::model::LaunchTemplateInstanceMetadataOptionsRequest)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceMetadataOptionsRequest {
            crate::model::LaunchTemplateInstanceMetadataOptionsRequest {
                http_tokens: self.http_tokens,
                http_put_response_hop_limit: self.http_put_response_hop_limit,
                http_endpoint: self.http_endpoint,
            }
        }
    }
}
impl LaunchTemplateInstanceMetadataOptionsRequest {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceMetadataOptionsRequest`](crate::model::LaunchTemplateInstanceMetadataOptionsRequest)
    pub fn builder() -> crate::model::launch_template_instance_metadata_options_request::Builder {
        crate::model::launch_template_instance_metadata_options_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LaunchTemplateHttpTokensState {
    #[allow(missing_docs)] // documentation missing in model
    Optional,
    #[allow(missing_docs)] // documentation missing in model
    Required,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LaunchTemplateHttpTokensState {
    fn from(s: &str) -> Self {
        match s {
            "optional" => LaunchTemplateHttpTokensState::Optional,
            "required" => LaunchTemplateHttpTokensState::Required,
            other => LaunchTemplateHttpTokensState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LaunchTemplateHttpTokensState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LaunchTemplateHttpTokensState::from(s))
    }
}
impl LaunchTemplateHttpTokensState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            LaunchTemplateHttpTokensState::Optional => "optional",
            LaunchTemplateHttpTokensState::Required => "required",
            LaunchTemplateHttpTokensState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "optional",
            "required",
        ]
    }
}
impl AsRef<str> for LaunchTemplateHttpTokensState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LaunchTemplateInstanceMetadataEndpointState {
    #[allow(missing_docs)] // documentation missing in model
    Disabled,
    #[allow(missing_docs)] // documentation missing in model
    Enabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LaunchTemplateInstanceMetadataEndpointState {
    fn from(s: &str) -> Self {
        match s {
            "disabled" => LaunchTemplateInstanceMetadataEndpointState::Disabled,
            "enabled" => LaunchTemplateInstanceMetadataEndpointState::Enabled,
            other => LaunchTemplateInstanceMetadataEndpointState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LaunchTemplateInstanceMetadataEndpointState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LaunchTemplateInstanceMetadataEndpointState::from(s))
    }
}
impl LaunchTemplateInstanceMetadataEndpointState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            LaunchTemplateInstanceMetadataEndpointState::Disabled => "disabled",
            LaunchTemplateInstanceMetadataEndpointState::Enabled => "enabled",
            LaunchTemplateInstanceMetadataEndpointState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "disabled",
            "enabled",
        ]
    }
}
impl AsRef<str> for LaunchTemplateInstanceMetadataEndpointState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>The information to include in the launch template.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct RequestLaunchTemplateData {
    /// <p>The ID of the kernel.</p>
    /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal Amazon EBS I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS-optimized instance.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest>,
    /// <p>The block device mapping.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMappingRequest>>,
    /// <p>One or more network interfaces. If you specify a network interface, you must specify any security groups and subnets as part of the network interface.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>,
    /// <p>The ID of the AMI.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The name of the key pair. You can create a key pair using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateKeyPair.html">CreateKeyPair</a> or <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ImportKeyPair.html">ImportKeyPair</a>.</p>
    /// <important><p>If you do not specify a key pair, you can't connect to the instance unless you choose an AMI that is configured to allow users another way to log in.</p></important>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::LaunchTemplatesMonitoringRequest>,
    /// <p>The placement for the instance.</p>
    pub placement: std::option::Option<crate::model::LaunchTemplatePlacementRequest>,
    /// <p>The ID of the RAM disk.</p>
    /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
    pub ram_disk_id: std::option::Option<std::string::String>,
    /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can. To change this attribute after launch, use <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html">ModifyInstanceAttribute</a>. Alternatively, if you set <code>InstanceInitiatedShutdownBehavior</code> to <code>terminate</code>, you can terminate the instance by running the shutdown command from the instance.</p>
    pub disable_api_termination: std::option::Option<bool>,
    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    /// <p>Default: <code>stop</code></p>
    pub instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
    /// <p>The Base64-encoded user data to make available to the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/user-data.html">Running Commands on Your Linux Instance at Launch</a> (Linux) and <a href="https://docs.aws.amazon.com/AWSEC2/latest/WindowsGuide/ec2-instance-metadata.html#instancedata-add-user-data">Adding User Data</a> (Windows).</p>
    pub user_data: std::option::Option<std::string::String>,
    /// <p>The tags to apply to the resources during launch. You can only tag instances and volumes on launch. The specified tags are applied to all instances or volumes that are created during launch. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecificationRequest>>,
    /// <p>An elastic GPU to associate with the instance.</p>
    pub elastic_gpu_specifications: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>,
    /// <p>The elastic inference accelerator for the instance.</p>
    pub elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAccelerator>>,
    /// <p>One or more security group IDs. You can create a security group using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSecurityGroup.html">CreateSecurityGroup</a>. You cannot specify both a security group ID and security name in the same request.</p>
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>[EC2-Classic, default VPC] One or more security group names. For a nondefault VPC, you must use security group IDs instead. You cannot specify both a security group ID and security name in the same request.</p>
    pub security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The market (purchasing) option for the instances.</p>
    pub instance_market_options: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptionsRequest>,
    /// <p>The credit option for CPU usage of the instance. Valid for T2 or T3 instances only.</p>
    pub credit_specification: std::option::Option<crate::model::CreditSpecificationRequest>,
    /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub cpu_options: std::option::Option<crate::model::LaunchTemplateCpuOptionsRequest>,
    /// <p>The Capacity Reservation targeting option. If you do not specify this parameter, the instance's Capacity Reservation preference defaults to <code>open</code>, which enables it to run in any open Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    pub capacity_reservation_specification: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationRequest>,
    /// <p>The license configurations.</p>
    pub license_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfigurationRequest>>,
    /// <p>Indicates whether an instance is enabled for hibernation. This parameter is valid only if the instance meets the <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html#hibernating-prerequisites">hibernation prerequisites</a>. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub hibernation_options: std::option::Option<crate::model::LaunchTemplateHibernationOptionsRequest>,
    /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub metadata_options: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsRequest>,
}
impl RequestLaunchTemplateData {
    /// <p>The ID of the kernel.</p>
    /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal Amazon EBS I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS-optimized instance.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>The block device mapping.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::LaunchTemplateBlockDeviceMappingRequest] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>One or more network interfaces. If you specify a network interface, you must specify any security groups and subnets as part of the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the AMI.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The name of the key pair. You can create a key pair using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateKeyPair.html">CreateKeyPair</a> or <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ImportKeyPair.html">ImportKeyPair</a>.</p>
    /// <important><p>If you do not specify a key pair, you can't connect to the instance unless you choose an AMI that is configured to allow users another way to log in.</p></important>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::LaunchTemplatesMonitoringRequest> {
        self.monitoring.as_ref()
    }

    /// <p>The placement for the instance.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::LaunchTemplatePlacementRequest> {
        self.placement.as_ref()
    }

    /// <p>The ID of the RAM disk.</p>
    /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
    pub fn ram_disk_id(&self) -> std::option::Option<&str> {
        self.ram_disk_id.as_deref()
    }

    /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can. To change this attribute after launch, use <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html">ModifyInstanceAttribute</a>. Alternatively, if you set <code>InstanceInitiatedShutdownBehavior</code> to <code>terminate</code>, you can terminate the instance by running the shutdown command from the instance.</p>
    pub fn disable_api_termination(&self) -> std::option::Option<bool> {
        self.disable_api_termination
    }

    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    /// <p>Default: <code>stop</code></p>
    pub fn instance_initiated_shutdown_behavior(&self) -> std::option::Option<&crate::model::ShutdownBehavior> {
        self.instance_initiated_shutdown_behavior.as_ref()
    }

    /// <p>The Base64-encoded user data to make available to the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/user-data.html">Running Commands on Your Linux Instance at Launch</a> (Linux) and <a href="https://docs.aws.amazon.com/AWSEC2/latest/WindowsGuide/ec2-instance-metadata.html#instancedata-add-user-data">Adding User Data</a> (Windows).</p>
    pub fn user_data(&self) -> std::option::Option<&str> {
        self.user_data.as_deref()
    }

    /// <p>The tags to apply to the resources during launch. You can only tag instances and volumes on launch. The specified tags are applied to all instances or volumes that are created during launch. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::LaunchTemplateTagSpecificationRequest] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>An elastic GPU to associate with the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_gpu_specifications.is_none()`.
    pub fn elastic_gpu_specifications(&self) -> &[crate::model::ElasticGpuSpecification] {
        self.elastic_gpu_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The elastic inference accelerator for the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_inference_accelerators.is_none()`.
    pub fn elastic_inference_accelerators(&self) -> &[crate::model::LaunchTemplateElasticInferenceAccelerator] {
        self.elastic_inference_accelerators.as_deref().unwrap_or_default()
    }

    /// <p>One or more security group IDs. You can create a security group using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSecurityGroup.html">CreateSecurityGroup</a>. You cannot specify both a security group ID and security name in the same request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_group_ids.is_none()`.
    pub fn security_group_ids(&self) -> &[std::string::String] {
        self.security_group_ids.as_deref().unwrap_or_default()
    }

    /// <p>[EC2-Classic, default VPC] One or more security group names. For a nondefault VPC, you must use security group IDs instead. You cannot specify both a security group ID and security name in the same request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[std::string::String] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>The market (purchasing) option for the instances.</p>
    pub fn instance_market_options(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMarketOptionsRequest> {
        self.instance_market_options.as_ref()
    }

    /// <p>The credit option for CPU usage of the instance. Valid for T2 or T3 instances only.</p>
    pub fn credit_specification(&self) -> std::option::Option<&crate::model::CreditSpecificationRequest> {
        self.credit_specification.as_ref()
    }

    /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn cpu_options(&self) -> std::option::Option<&crate::model::LaunchTemplateCpuOptionsRequest> {
        self.cpu_options.as_ref()
    }

    /// <p>The Capacity Reservation targeting option. If you do not specify this parameter, the instance's Capacity Reservation preference defaults to <code>open</code>, which enables it to run in any open Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    pub fn capacity_reservation_specification(&self) -> std::option::Option<&crate::model::LaunchTemplateCapacityReservationSpecificationRequest> {
        self.capacity_reservation_specification.as_ref()
    }

    /// <p>The license configurations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.license_specifications.is_none()`.
    pub fn license_specifications(&self) -> &[crate::model::LaunchTemplateLicenseConfigurationRequest] {
        self.license_specifications.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether an instance is enabled for hibernation. This parameter is valid only if the instance meets the <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html#hibernating-prerequisites">hibernation prerequisites</a>. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn hibernation_options(&self) -> std::option::Option<&crate::model::LaunchTemplateHibernationOptionsRequest> {
        self.hibernation_options.as_ref()
    }

    /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn metadata_options(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMetadataOptionsRequest> {
        self.metadata_options.as_ref()
    }
}
impl std::fmt::Debug for RequestLaunchTemplateData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("ImageId", &self.image_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("KeyName", &self.key_name);
        formatter.field("Monitoring", &self.monitoring);
        formatter.field("Placement", &self.placement);
        formatter.field("RamDiskId", &self.ram_disk_id);
        formatter.field("DisableApiTermination", &self.disable_api_termination);
        formatter.enum_field("InstanceInitiatedShutdownBehavior", &self.instance_initiated_shutdown_behavior);
        formatter.field("UserData", &self.user_data);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("ElasticGpuSpecifications", &self.elastic_gpu_specifications);
        formatter.field("ElasticInferenceAccelerators", &self.elastic_inference_accelerators);
        formatter.field("SecurityGroupIds", &self.security_group_ids);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("InstanceMarketOptions", &self.instance_market_options);
        formatter.field("CreditSpecification", &self.credit_specification);
        formatter.field("CpuOptions", &self.cpu_options);
        formatter.field("CapacityReservationSpecification", &self.capacity_reservation_specification);
        formatter.field("LicenseSpecifications", &self.license_specifications);
        formatter.field("HibernationOptions", &self.hibernation_options);
        formatter.field("MetadataOptions", &self.metadata_options);
        formatter.finish()
    }
}
/// See [`RequestLaunchTemplateData`](crate::model::RequestLaunchTemplateData)
pub mod request_launch_template_data {
    /// A builder for [`RequestLaunchTemplateData`](crate::model::RequestLaunchTemplateData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMappingRequest>>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) monitoring: std::option::Option<crate::model::LaunchTemplatesMonitoringRequest>,
        pub(crate) placement: std::option::Option<crate::model::LaunchTemplatePlacementRequest>,
        pub(crate) ram_disk_id: std::option::Option<std::string::String>,
        pub(crate) disable_api_termination: std::option::Option<bool>,
        pub(crate) instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
        pub(crate) user_data: std::option::Option<std::string::String>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecificationRequest>>,
        pub(crate) elastic_gpu_specifications: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>,
        pub(crate) elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAccelerator>>,
        pub(crate) security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) instance_market_options: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptionsRequest>,
        pub(crate) credit_specification: std::option::Option<crate::model::CreditSpecificationRequest>,
        pub(crate) cpu_options: std::option::Option<crate::model::LaunchTemplateCpuOptionsRequest>,
        pub(crate) capacity_reservation_specification: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationRequest>,
        pub(crate) license_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfigurationRequest>>,
        pub(crate) hibernation_options: std::option::Option<crate::model::LaunchTemplateHibernationOptionsRequest>,
        pub(crate) metadata_options: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsRequest>,
    }
    impl Builder {
        /// <p>The ID of the kernel.</p>
        /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
        pub fn kernel_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kernel_id = Some(input.into());
            self
        }
        /// <p>The ID of the kernel.</p>
        /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
        pub fn set_kernel_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kernel_id = input;
            self
        }

        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal Amazon EBS I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS-optimized instance.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        /// <p>Indicates whether the instance is optimized for Amazon EBS I/O. This optimization provides dedicated throughput to Amazon EBS and an optimized configuration stack to provide optimal Amazon EBS I/O performance. This optimization isn't available with all instance types. Additional usage charges apply when using an EBS-optimized instance.</p>
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }

        /// <p>The IAM instance profile.</p>
        pub fn iam_instance_profile(mut self, input: crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest) -> Self {
            self.iam_instance_profile = Some(input);
            self
        }
        /// <p>The IAM instance profile.</p>
        pub fn set_iam_instance_profile(mut self, input: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecificationRequest>) -> Self {
            self.iam_instance_profile = input;
            self
        }

        /// Appends an item to `block_device_mappings`.
        ///
        /// To override the contents of this collection use [`set_block_device_mappings`](Self::set_block_device_mappings).
        ///
        /// <p>The block device mapping.</p>
        pub fn block_device_mappings(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateBlockDeviceMappingRequest>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        /// <p>The block device mapping.</p>
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMappingRequest>>) -> Self {
            self.block_device_mappings = input;
            self
        }

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>One or more network interfaces. If you specify a network interface, you must specify any security groups and subnets as part of the network interface.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>One or more network interfaces. If you specify a network interface, you must specify any security groups and subnets as part of the network interface.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>) -> Self {
            self.network_interfaces = input;
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

        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        /// <p>The instance type. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html">Instance Types</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }

        /// <p>The name of the key pair. You can create a key pair using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateKeyPair.html">CreateKeyPair</a> or <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ImportKeyPair.html">ImportKeyPair</a>.</p>
        /// <important><p>If you do not specify a key pair, you can't connect to the instance unless you choose an AMI that is configured to allow users another way to log in.</p></important>
        pub fn key_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_name = Some(input.into());
            self
        }
        /// <p>The name of the key pair. You can create a key pair using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateKeyPair.html">CreateKeyPair</a> or <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ImportKeyPair.html">ImportKeyPair</a>.</p>
        /// <important><p>If you do not specify a key pair, you can't connect to the instance unless you choose an AMI that is configured to allow users another way to log in.</p></important>
        pub fn set_key_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_name = input;
            self
        }

        /// <p>The monitoring for the instance.</p>
        pub fn monitoring(mut self, input: crate::model::LaunchTemplatesMonitoringRequest) -> Self {
            self.monitoring = Some(input);
            self
        }
        /// <p>The monitoring for the instance.</p>
        pub fn set_monitoring(mut self, input: std::option::Option<crate::model::LaunchTemplatesMonitoringRequest>) -> Self {
            self.monitoring = input;
            self
        }

        /// <p>The placement for the instance.</p>
        pub fn placement(mut self, input: crate::model::LaunchTemplatePlacementRequest) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The placement for the instance.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::LaunchTemplatePlacementRequest>) -> Self {
            self.placement = input;
            self
        }

        /// <p>The ID of the RAM disk.</p>
        /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
        pub fn ram_disk_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ram_disk_id = Some(input.into());
            self
        }
        /// <p>The ID of the RAM disk.</p>
        /// <important><p>We recommend that you use PV-GRUB instead of kernels and RAM disks. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/UserProvidedkernels.html">User Provided Kernels</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p></important>
        pub fn set_ram_disk_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ram_disk_id = input;
            self
        }

        /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can. To change this attribute after launch, use <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html">ModifyInstanceAttribute</a>. Alternatively, if you set <code>InstanceInitiatedShutdownBehavior</code> to <code>terminate</code>, you can terminate the instance by running the shutdown command from the instance.</p>
        pub fn disable_api_termination(mut self, input: bool) -> Self {
            self.disable_api_termination = Some(input);
            self
        }
        /// <p>If you set this parameter to <code>true</code>, you can't terminate the instance using the Amazon EC2 console, CLI, or API; otherwise, you can. To change this attribute after launch, use <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html">ModifyInstanceAttribute</a>. Alternatively, if you set <code>InstanceInitiatedShutdownBehavior</code> to <code>terminate</code>, you can terminate the instance by running the shutdown command from the instance.</p>
        pub fn set_disable_api_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.disable_api_termination = input;
            self
        }

        /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
        /// <p>Default: <code>stop</code></p>
        pub fn instance_initiated_shutdown_behavior(mut self, input: crate::model::ShutdownBehavior) -> Self {
            self.instance_initiated_shutdown_behavior = Some(input);
            self
        }
        /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
        /// <p>Default: <code>stop</code></p>
        pub fn set_instance_initiated_shutdown_behavior(mut self, input: std::option::Option<crate::model::ShutdownBehavior>) -> Self {
            self.instance_initiated_shutdown_behavior = input;
            self
        }

        /// <p>The Base64-encoded user data to make available to the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/user-data.html">Running Commands on Your Linux Instance at Launch</a> (Linux) and <a href="https://docs.aws.amazon.com/AWSEC2/latest/WindowsGuide/ec2-instance-metadata.html#instancedata-add-user-data">Adding User Data</a> (Windows).</p>
        pub fn user_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_data = Some(input.into());
            self
        }
        /// <p>The Base64-encoded user data to make available to the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/user-data.html">Running Commands on Your Linux Instance at Launch</a> (Linux) and <a href="https://docs.aws.amazon.com/AWSEC2/latest/WindowsGuide/ec2-instance-metadata.html#instancedata-add-user-data">Adding User Data</a> (Windows).</p>
        pub fn set_user_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_data = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags to apply to the resources during launch. You can only tag instances and volumes on launch. The specified tags are applied to all instances or volumes that are created during launch. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateTagSpecificationRequest>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags to apply to the resources during launch. You can only tag instances and volumes on launch. The specified tags are applied to all instances or volumes that are created during launch. To tag a resource after it has been created, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html">CreateTags</a>.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecificationRequest>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// Appends an item to `elastic_gpu_specifications`.
        ///
        /// To override the contents of this collection use [`set_elastic_gpu_specifications`](Self::set_elastic_gpu_specifications).
        ///
        /// <p>An elastic GPU to associate with the instance.</p>
        pub fn elastic_gpu_specifications(mut self, input: impl std::convert::Into<crate::model::ElasticGpuSpecification>) -> Self {
            let mut v = self.elastic_gpu_specifications.unwrap_or_default();
            v.push(input.into());
            self.elastic_gpu_specifications = Some(v);
            self
        }
        /// <p>An elastic GPU to associate with the instance.</p>
        pub fn set_elastic_gpu_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecification>>) -> Self {
            self.elastic_gpu_specifications = input;
            self
        }

        /// Appends an item to `elastic_inference_accelerators`.
        ///
        /// To override the contents of this collection use [`set_elastic_inference_accelerators`](Self::set_elastic_inference_accelerators).
        ///
        /// <p>The elastic inference accelerator for the instance.</p>
        pub fn elastic_inference_accelerators(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateElasticInferenceAccelerator>) -> Self {
            let mut v = self.elastic_inference_accelerators.unwrap_or_default();
            v.push(input.into());
            self.elastic_inference_accelerators = Some(v);
            self
        }
        /// <p>The elastic inference accelerator for the instance.</p>
        pub fn set_elastic_inference_accelerators(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAccelerator>>) -> Self {
            self.elastic_inference_accelerators = input;
            self
        }

        /// Appends an item to `security_group_ids`.
        ///
        /// To override the contents of this collection use [`set_security_group_ids`](Self::set_security_group_ids).
        ///
        /// <p>One or more security group IDs. You can create a security group using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSecurityGroup.html">CreateSecurityGroup</a>. You cannot specify both a security group ID and security name in the same request.</p>
        pub fn security_group_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        /// <p>One or more security group IDs. You can create a security group using <a href="https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSecurityGroup.html">CreateSecurityGroup</a>. You cannot specify both a security group ID and security name in the same request.</p>
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }

        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>[EC2-Classic, default VPC] One or more security group names. For a nondefault VPC, you must use security group IDs instead. You cannot specify both a security group ID and security name in the same request.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>[EC2-Classic, default VPC] One or more security group names. For a nondefault VPC, you must use security group IDs instead. You cannot specify both a security group ID and security name in the same request.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>The market (purchasing) option for the instances.</p>
        pub fn instance_market_options(mut self, input: crate::model::LaunchTemplateInstanceMarketOptionsRequest) -> Self {
            self.instance_market_options = Some(input);
            self
        }
        /// <p>The market (purchasing) option for the instances.</p>
        pub fn set_instance_market_options(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptionsRequest>) -> Self {
            self.instance_market_options = input;
            self
        }

        /// <p>The credit option for CPU usage of the instance. Valid for T2 or T3 instances only.</p>
        pub fn credit_specification(mut self, input: crate::model::CreditSpecificationRequest) -> Self {
            self.credit_specification = Some(input);
            self
        }
        /// <p>The credit option for CPU usage of the instance. Valid for T2 or T3 instances only.</p>
        pub fn set_credit_specification(mut self, input: std::option::Option<crate::model::CreditSpecificationRequest>) -> Self {
            self.credit_specification = input;
            self
        }

        /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn cpu_options(mut self, input: crate::model::LaunchTemplateCpuOptionsRequest) -> Self {
            self.cpu_options = Some(input);
            self
        }
        /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_cpu_options(mut self, input: std::option::Option<crate::model::LaunchTemplateCpuOptionsRequest>) -> Self {
            self.cpu_options = input;
            self
        }

        /// <p>The Capacity Reservation targeting option. If you do not specify this parameter, the instance's Capacity Reservation preference defaults to <code>open</code>, which enables it to run in any open Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        pub fn capacity_reservation_specification(mut self, input: crate::model::LaunchTemplateCapacityReservationSpecificationRequest) -> Self {
            self.capacity_reservation_specification = Some(input);
            self
        }
        /// <p>The Capacity Reservation targeting option. If you do not specify this parameter, the instance's Capacity Reservation preference defaults to <code>open</code>, which enables it to run in any open Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        pub fn set_capacity_reservation_specification(mut self, input: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationRequest>) -> Self {
            self.capacity_reservation_specification = input;
            self
        }

        /// Appends an item to `license_specifications`.
        ///
        /// To override the contents of this collection use [`set_license_specifications`](Self::set_license_specifications).
        ///
        /// <p>The license configurations.</p>
        pub fn license_specifications(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateLicenseConfigurationRequest>) -> Self {
            let mut v = self.license_specifications.unwrap_or_default();
            v.push(input.into());
            self.license_specifications = Some(v);
            self
        }
        /// <p>The license configurations.</p>
        pub fn set_license_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfigurationRequest>>) -> Self {
            self.license_specifications = input;
            self
        }

        /// <p>Indicates whether an instance is enabled for hibernation. This parameter is valid only if the instance meets the <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html#hibernating-prerequisites">hibernation prerequisites</a>. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn hibernation_options(mut self, input: crate::model::LaunchTemplateHibernationOptionsRequest) -> Self {
            self.hibernation_options = Some(input);
            self
        }
        /// <p>Indicates whether an instance is enabled for hibernation. This parameter is valid only if the instance meets the <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html#hibernating-prerequisites">hibernation prerequisites</a>. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_hibernation_options(mut self, input: std::option::Option<crate::model::LaunchTemplateHibernationOptionsRequest>) -> Self {
            self.hibernation_options = input;
            self
        }

        /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn metadata_options(mut self, input: crate::model::LaunchTemplateInstanceMetadataOptionsRequest) -> Self {
            self.metadata_options = Some(input);
            self
        }
        /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_metadata_options(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsRequest>) -> Self {
            self.metadata_options = input;
            self
        }
        /// Consumes the builder and constructs a [`RequestLaunchTemplateData`](crate::model::RequestLaunchTemplateData)
        pub fn build(self) -> crate::model::RequestLaunchTemplateData {
            crate::model::RequestLaunchTemplateData {
                kernel_id: self.kernel_id,
                ebs_optimized: self.ebs_optimized,
                iam_instance_profile: self.iam_instance_profile,
                block_device_mappings: self.block_device_mappings,
                network_interfaces: self.network_interfaces,
                image_id: self.image_id,
                instance_type: self.instance_type,
                key_name: self.key_name,
                monitoring: self.monitoring,
                placement: self.placement,
                ram_disk_id: self.ram_disk_id,
                disable_api_termination: self.disable_api_termination,
                instance_initiated_shutdown_behavior: self.instance_initiated_shutdown_behavior,
                user_data: self.user_data,
                tag_specifications: self.tag_specifications,
                elastic_gpu_specifications: self.elastic_gpu_specifications,
                elastic_inference_accelerators: self.elastic_inference_accelerators,
                security_group_ids: self.security_group_ids,
                security_groups: self.security_groups,
                instance_market_options: self.instance_market_options,
                credit_specification: self.credit_specification,
                cpu_options: self.cpu_options,
                capacity_reservation_specification: self.capacity_reservation_specification,
                license_specifications: self.license_specifications,
                hibernation_options: self.hibernation_options,
                metadata_options: self.metadata_options,
            }
        }
    }
}
impl RequestLaunchTemplateData {
    /// Creates a new builder-style object to manufacture [`RequestLaunchTemplateData`](crate::model::RequestLaunchTemplateData)
    pub fn builder() -> crate::model::request_launch_template_data::Builder {
        crate::model::request_launch_template_data::Builder::default()
    }
}

/// <p>Describes an IAM instance profile.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateIamInstanceProfileSpecification {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the instance profile.</p>
    pub name: std::option::Option<std::string::String>,
}
impl LaunchTemplateIamInstanceProfileSpecification {
    /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }

    /// <p>The name of the instance profile.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateIamInstanceProfileSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Arn", &self.arn);
        formatter.field("Name", &self.name);
        formatter.finish()
    }
}
/// See [`LaunchTemplateIamInstanceProfileSpecification`](crate::model::LaunchTemplateIamInstanceProfileSpecification)
pub mod launch_template_iam_instance_profile_specification {
    /// A builder for [`LaunchTemplateIamInstanceProfileSpecification`](crate::model::LaunchTemplateIamInstanceProfileSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the instance profile.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }

        /// <p>The name of the instance profile.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the instance profile.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateIamInstanceProfileSpecification`](crate::model::LaunchTemplateIamInstanceProfileSpecification)
        pub fn build(self) -> crate::model::LaunchTemplateIamInstanceProfileSpecification {
            crate::model::LaunchTemplateIamInstanceProfileSpecification {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}
impl LaunchTemplateIamInstanceProfileSpecification {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateIamInstanceProfileSpecification`](crate::model::LaunchTemplateIamInstanceProfileSpecification)
    pub fn builder() -> crate::model::launch_template_iam_instance_profile_specification::Builder {
        crate::model::launch_template_iam_instance_profile_specification::Builder::default()
    }
}

/// <p>Describes a block device for an EBS volume.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateEbsBlockDevice {
    /// <p>Indicates whether the EBS volume is encrypted.</p>
    pub encrypted: std::option::Option<bool>,
    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub iops: std::option::Option<i32>,
    /// <p>The ARN of the AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
    pub kms_key_id: std::option::Option<std::string::String>,
    /// <p>The ID of the snapshot.</p>
    pub snapshot_id: std::option::Option<std::string::String>,
    /// <p>The size of the volume, in GiB.</p>
    pub volume_size: std::option::Option<i32>,
    /// <p>The volume type.</p>
    pub volume_type: std::option::Option<crate::model::VolumeType>,
}
impl LaunchTemplateEbsBlockDevice {
    /// <p>Indicates whether the EBS volume is encrypted.</p>
    pub fn encrypted(&self) -> std::option::Option<bool> {
        self.encrypted
    }

    /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }

    /// <p>The ARN of the AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// <p>The ID of the snapshot.</p>
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// <p>The size of the volume, in GiB.</p>
    pub fn volume_size(&self) -> std::option::Option<i32> {
        self.volume_size
    }

    /// <p>The volume type.</p>
    pub fn volume_type(&self) -> std::option::Option<&crate::model::VolumeType> {
        self.volume_type.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateEbsBlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Encrypted", &self.encrypted);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Iops", &self.iops);
        formatter.field("KmsKeyId", &self.kms_key_id);
        formatter.field("SnapshotId", &self.snapshot_id);
        formatter.field("VolumeSize", &self.volume_size);
        formatter.enum_field("VolumeType", &self.volume_type);
        formatter.finish()
    }
}
/// See [`LaunchTemplateEbsBlockDevice`](crate::model::LaunchTemplateEbsBlockDevice)
pub mod launch_template_ebs_block_device {
    /// A builder for [`LaunchTemplateEbsBlockDevice`](crate::model::LaunchTemplateEbsBlockDevice)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) encrypted: std::option::Option<bool>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) kms_key_id: std::option::Option<std::string::String>,
        pub(crate) snapshot_id: std::option::Option<std::string::String>,
        pub(crate) volume_size: std::option::Option<i32>,
        pub(crate) volume_type: std::option::Option<crate::model::VolumeType>,
    }
    impl Builder {
        /// <p>Indicates whether the EBS volume is encrypted.</p>
        pub fn encrypted(mut self, input: bool) -> Self {
            self.encrypted = Some(input);
            self
        }
        /// <p>Indicates whether the EBS volume is encrypted.</p>
        pub fn set_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.encrypted = input;
            self
        }

        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the EBS volume is deleted on instance termination.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
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

        /// <p>The ARN of the AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        /// <p>The ARN of the AWS Key Management Service (AWS KMS) CMK used for encryption.</p>
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }

        /// <p>The ID of the snapshot.</p>
        pub fn snapshot_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// <p>The ID of the snapshot.</p>
        pub fn set_snapshot_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.snapshot_id = input;
            self
        }

        /// <p>The size of the volume, in GiB.</p>
        pub fn volume_size(mut self, input: i32) -> Self {
            self.volume_size = Some(input);
            self
        }
        /// <p>The size of the volume, in GiB.</p>
        pub fn set_volume_size(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size = input;
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
        /// Consumes the builder and constructs a [`LaunchTemplateEbsBlockDevice`](crate::model::LaunchTemplateEbsBlockDevice)
        pub fn build(self) -> crate::model::LaunchTemplateEbsBlockDevice {
            crate::model::LaunchTemplateEbsBlockDevice {
                encrypted: self.encrypted,
                delete_on_termination: self.delete_on_termination,
                iops: self.iops,
                kms_key_id: self.kms_key_id,
                snapshot_id: self.snapshot_id,
                volume_size: self.volume_size,
                volume_type: self.volume_type,
            }
        }
    }
}
impl LaunchTemplateEbsBlockDevice {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateEbsBlockDevice`](crate::model::LaunchTemplateEbsBlockDevice)
    pub fn builder() -> crate::model::launch_template_ebs_block_device::Builder {
        crate::model::launch_template_ebs_block_device::Builder::default()
    }
}

/// <p>Describes a block device mapping.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateBlockDeviceMapping {
    /// <p>The device name.</p>
    pub device_name: std::option::Option<std::string::String>,
    /// <p>The virtual device name (ephemeralN).</p>
    pub virtual_name: std::option::Option<std::string::String>,
    /// <p>Information about the block device for an EBS volume.</p>
    pub ebs: std::option::Option<crate::model::LaunchTemplateEbsBlockDevice>,
    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub no_device: std::option::Option<std::string::String>,
}
impl LaunchTemplateBlockDeviceMapping {
    /// <p>The device name.</p>
    pub fn device_name(&self) -> std::option::Option<&str> {
        self.device_name.as_deref()
    }

    /// <p>The virtual device name (ephemeralN).</p>
    pub fn virtual_name(&self) -> std::option::Option<&str> {
        self.virtual_name.as_deref()
    }

    /// <p>Information about the block device for an EBS volume.</p>
    pub fn ebs(&self) -> std::option::Option<&crate::model::LaunchTemplateEbsBlockDevice> {
        self.ebs.as_ref()
    }

    /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
    pub fn no_device(&self) -> std::option::Option<&str> {
        self.no_device.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateBlockDeviceMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("DeviceName", &self.device_name);
        formatter.field("VirtualName", &self.virtual_name);
        formatter.field("Ebs", &self.ebs);
        formatter.field("NoDevice", &self.no_device);
        formatter.finish()
    }
}
/// See [`LaunchTemplateBlockDeviceMapping`](crate::model::LaunchTemplateBlockDeviceMapping)
pub mod launch_template_block_device_mapping {
    /// A builder for [`LaunchTemplateBlockDeviceMapping`](crate::model::LaunchTemplateBlockDeviceMapping)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device_name: std::option::Option<std::string::String>,
        pub(crate) virtual_name: std::option::Option<std::string::String>,
        pub(crate) ebs: std::option::Option<crate::model::LaunchTemplateEbsBlockDevice>,
        pub(crate) no_device: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The device name.</p>
        pub fn device_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.device_name = Some(input.into());
            self
        }
        /// <p>The device name.</p>
        pub fn set_device_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device_name = input;
            self
        }

        /// <p>The virtual device name (ephemeralN).</p>
        pub fn virtual_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_name = Some(input.into());
            self
        }
        /// <p>The virtual device name (ephemeralN).</p>
        pub fn set_virtual_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_name = input;
            self
        }

        /// <p>Information about the block device for an EBS volume.</p>
        pub fn ebs(mut self, input: crate::model::LaunchTemplateEbsBlockDevice) -> Self {
            self.ebs = Some(input);
            self
        }
        /// <p>Information about the block device for an EBS volume.</p>
        pub fn set_ebs(mut self, input: std::option::Option<crate::model::LaunchTemplateEbsBlockDevice>) -> Self {
            self.ebs = input;
            self
        }

        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn no_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.no_device = Some(input.into());
            self
        }
        /// <p>Suppresses the specified device included in the block device mapping of the AMI.</p>
        pub fn set_no_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.no_device = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateBlockDeviceMapping`](crate::model::LaunchTemplateBlockDeviceMapping)
        pub fn build(self) -> crate::model::LaunchTemplateBlockDeviceMapping {
            crate::model::LaunchTemplateBlockDeviceMapping {
                device_name: self.device_name,
                virtual_name: self.virtual_name,
                ebs: self.ebs,
                no_device: self.no_device,
            }
        }
    }
}
impl LaunchTemplateBlockDeviceMapping {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateBlockDeviceMapping`](crate::model::LaunchTemplateBlockDeviceMapping)
    pub fn builder() -> crate::model::launch_template_block_device_mapping::Builder {
        crate::model::launch_template_block_device_mapping::Builder::default()
    }
}

/// <p>Describes a network interface.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceNetworkInterfaceSpecification {
    /// <p>Indicates whether to associate a public IPv4 address with eth0 for a new network interface.</p>
    pub associate_public_ip_address: std::option::Option<bool>,
    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub delete_on_termination: std::option::Option<bool>,
    /// <p>A description for the network interface.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>The device index for the network interface attachment.</p>
    pub device_index: std::option::Option<i32>,
    /// <p>The IDs of one or more security groups.</p>
    pub groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The type of network interface.</p>
    pub interface_type: std::option::Option<std::string::String>,
    /// <p>The number of IPv6 addresses for the network interface.</p>
    pub ipv6_address_count: std::option::Option<i32>,
    /// <p>The IPv6 addresses for the network interface.</p>
    pub ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
    /// <p>The ID of the network interface.</p>
    pub network_interface_id: std::option::Option<std::string::String>,
    /// <p>The primary private IPv4 address of the network interface.</p>
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>One or more private IPv4 addresses.</p>
    pub private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
    /// <p>The number of secondary private IPv4 addresses for the network interface.</p>
    pub secondary_private_ip_address_count: std::option::Option<i32>,
    /// <p>The ID of the subnet for the network interface.</p>
    pub subnet_id: std::option::Option<std::string::String>,
}
impl LaunchTemplateInstanceNetworkInterfaceSpecification {
    /// <p>Indicates whether to associate a public IPv4 address with eth0 for a new network interface.</p>
    pub fn associate_public_ip_address(&self) -> std::option::Option<bool> {
        self.associate_public_ip_address
    }

    /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
    pub fn delete_on_termination(&self) -> std::option::Option<bool> {
        self.delete_on_termination
    }

    /// <p>A description for the network interface.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The device index for the network interface attachment.</p>
    pub fn device_index(&self) -> std::option::Option<i32> {
        self.device_index
    }

    /// <p>The IDs of one or more security groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[std::string::String] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>The type of network interface.</p>
    pub fn interface_type(&self) -> std::option::Option<&str> {
        self.interface_type.as_deref()
    }

    /// <p>The number of IPv6 addresses for the network interface.</p>
    pub fn ipv6_address_count(&self) -> std::option::Option<i32> {
        self.ipv6_address_count
    }

    /// <p>The IPv6 addresses for the network interface.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.ipv6_addresses.is_none()`.
    pub fn ipv6_addresses(&self) -> &[crate::model::InstanceIpv6Address] {
        self.ipv6_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the network interface.</p>
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// <p>The primary private IPv4 address of the network interface.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// <p>One or more private IPv4 addresses.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.private_ip_addresses.is_none()`.
    pub fn private_ip_addresses(&self) -> &[crate::model::PrivateIpAddressSpecification] {
        self.private_ip_addresses.as_deref().unwrap_or_default()
    }

    /// <p>The number of secondary private IPv4 addresses for the network interface.</p>
    pub fn secondary_private_ip_address_count(&self) -> std::option::Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// <p>The ID of the subnet for the network interface.</p>
    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceNetworkInterfaceSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AssociatePublicIpAddress", &self.associate_public_ip_address);
        formatter.field("DeleteOnTermination", &self.delete_on_termination);
        formatter.field("Description", &self.description);
        formatter.field("DeviceIndex", &self.device_index);
        formatter.field("Groups", &self.groups);
        formatter.field("InterfaceType", &self.interface_type);
        formatter.field("Ipv6AddressCount", &self.ipv6_address_count);
        formatter.field("Ipv6Addresses", &self.ipv6_addresses);
        formatter.field("NetworkInterfaceId", &self.network_interface_id);
        formatter.field("PrivateIpAddress", &self.private_ip_address);
        formatter.field("PrivateIpAddresses", &self.private_ip_addresses);
        formatter.field("SecondaryPrivateIpAddressCount", &self.secondary_private_ip_address_count);
        formatter.field("SubnetId", &self.subnet_id);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceNetworkInterfaceSpecification`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification)
pub mod launch_template_instance_network_interface_specification {
    /// A builder for [`LaunchTemplateInstanceNetworkInterfaceSpecification`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) associate_public_ip_address: std::option::Option<bool>,
        pub(crate) delete_on_termination: std::option::Option<bool>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) device_index: std::option::Option<i32>,
        pub(crate) groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) interface_type: std::option::Option<std::string::String>,
        pub(crate) ipv6_address_count: std::option::Option<i32>,
        pub(crate) ipv6_addresses: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_ip_addresses: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>,
        pub(crate) secondary_private_ip_address_count: std::option::Option<i32>,
        pub(crate) subnet_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Indicates whether to associate a public IPv4 address with eth0 for a new network interface.</p>
        pub fn associate_public_ip_address(mut self, input: bool) -> Self {
            self.associate_public_ip_address = Some(input);
            self
        }
        /// <p>Indicates whether to associate a public IPv4 address with eth0 for a new network interface.</p>
        pub fn set_associate_public_ip_address(mut self, input: std::option::Option<bool>) -> Self {
            self.associate_public_ip_address = input;
            self
        }

        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn delete_on_termination(mut self, input: bool) -> Self {
            self.delete_on_termination = Some(input);
            self
        }
        /// <p>Indicates whether the network interface is deleted when the instance is terminated.</p>
        pub fn set_delete_on_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.delete_on_termination = input;
            self
        }

        /// <p>A description for the network interface.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the network interface.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }

        /// <p>The device index for the network interface attachment.</p>
        pub fn device_index(mut self, input: i32) -> Self {
            self.device_index = Some(input);
            self
        }
        /// <p>The device index for the network interface attachment.</p>
        pub fn set_device_index(mut self, input: std::option::Option<i32>) -> Self {
            self.device_index = input;
            self
        }

        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        /// <p>The IDs of one or more security groups.</p>
        pub fn groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input.into());
            self.groups = Some(v);
            self
        }
        /// <p>The IDs of one or more security groups.</p>
        pub fn set_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.groups = input;
            self
        }

        /// <p>The type of network interface.</p>
        pub fn interface_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.interface_type = Some(input.into());
            self
        }
        /// <p>The type of network interface.</p>
        pub fn set_interface_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interface_type = input;
            self
        }

        /// <p>The number of IPv6 addresses for the network interface.</p>
        pub fn ipv6_address_count(mut self, input: i32) -> Self {
            self.ipv6_address_count = Some(input);
            self
        }
        /// <p>The number of IPv6 addresses for the network interface.</p>
        pub fn set_ipv6_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.ipv6_address_count = input;
            self
        }

        /// Appends an item to `ipv6_addresses`.
        ///
        /// To override the contents of this collection use [`set_ipv6_addresses`](Self::set_ipv6_addresses).
        ///
        /// <p>The IPv6 addresses for the network interface.</p>
        pub fn ipv6_addresses(mut self, input: impl std::convert::Into<crate::model::InstanceIpv6Address>) -> Self {
            let mut v = self.ipv6_addresses.unwrap_or_default();
            v.push(input.into());
            self.ipv6_addresses = Some(v);
            self
        }
        /// <p>The IPv6 addresses for the network interface.</p>
        pub fn set_ipv6_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceIpv6Address>>) -> Self {
            self.ipv6_addresses = input;
            self
        }

        /// <p>The ID of the network interface.</p>
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// <p>The ID of the network interface.</p>
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }

        /// <p>The primary private IPv4 address of the network interface.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        /// <p>The primary private IPv4 address of the network interface.</p>
        pub fn set_private_ip_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_ip_address = input;
            self
        }

        /// Appends an item to `private_ip_addresses`.
        ///
        /// To override the contents of this collection use [`set_private_ip_addresses`](Self::set_private_ip_addresses).
        ///
        /// <p>One or more private IPv4 addresses.</p>
        pub fn private_ip_addresses(mut self, input: impl std::convert::Into<crate::model::PrivateIpAddressSpecification>) -> Self {
            let mut v = self.private_ip_addresses.unwrap_or_default();
            v.push(input.into());
            self.private_ip_addresses = Some(v);
            self
        }
        /// <p>One or more private IPv4 addresses.</p>
        pub fn set_private_ip_addresses(mut self, input: std::option::Option<std::vec::Vec<crate::model::PrivateIpAddressSpecification>>) -> Self {
            self.private_ip_addresses = input;
            self
        }

        /// <p>The number of secondary private IPv4 addresses for the network interface.</p>
        pub fn secondary_private_ip_address_count(mut self, input: i32) -> Self {
            self.secondary_private_ip_address_count = Some(input);
            self
        }
        /// <p>The number of secondary private IPv4 addresses for the network interface.</p>
        pub fn set_secondary_private_ip_address_count(mut self, input: std::option::Option<i32>) -> Self {
            self.secondary_private_ip_address_count = input;
            self
        }

        /// <p>The ID of the subnet for the network interface.</p>
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        /// <p>The ID of the subnet for the network interface.</p>
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceNetworkInterfaceSpecification`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification {
            crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification {
                associate_public_ip_address: self.associate_public_ip_address,
                delete_on_termination: self.delete_on_termination,
                description: self.description,
                device_index: self.device_index,
                groups: self.groups,
                interface_type: self.interface_type,
                ipv6_address_count: self.ipv6_address_count,
                ipv6_addresses: self.ipv6_addresses,
                network_interface_id: self.network_interface_id,
                private_ip_address: self.private_ip_address,
                private_ip_addresses: self.private_ip_addresses,
                secondary_private_ip_address_count: self.secondary_private_ip_address_count,
                subnet_id: self.subnet_id,
            }
        }
    }
}
impl LaunchTemplateInstanceNetworkInterfaceSpecification {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceNetworkInterfaceSpecification`](crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification)
    pub fn builder() -> crate::model::launch_template_instance_network_interface_specification::Builder {
        crate::model::launch_template_instance_network_interface_specification::Builder::default()
    }
}

/// <p>Describes the monitoring for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplatesMonitoring {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub enabled: std::option::Option<bool>,
}
impl LaunchTemplatesMonitoring {
    /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
}
impl std::fmt::Debug for LaunchTemplatesMonitoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Enabled", &self.enabled);
        formatter.finish()
    }
}
/// See [`LaunchTemplatesMonitoring`](crate::model::LaunchTemplatesMonitoring)
pub mod launch_templates_monitoring {
    /// A builder for [`LaunchTemplatesMonitoring`](crate::model::LaunchTemplatesMonitoring)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        /// <p>Indicates whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.</p>
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplatesMonitoring`](crate::model::LaunchTemplatesMonitoring)
        pub fn build(self) -> crate::model::LaunchTemplatesMonitoring {
            crate::model::LaunchTemplatesMonitoring {
                enabled: self.enabled,
            }
        }
    }
}
impl LaunchTemplatesMonitoring {
    /// Creates a new builder-style object to manufacture [`LaunchTemplatesMonitoring`](crate::model::LaunchTemplatesMonitoring)
    pub fn builder() -> crate::model::launch_templates_monitoring::Builder {
        crate::model::launch_templates_monitoring::Builder::default()
    }
}

/// <p>Describes the placement of an instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplatePlacement {
    /// <p>The Availability Zone of the instance.</p>
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>The affinity setting for the instance on the Dedicated Host.</p>
    pub affinity: std::option::Option<std::string::String>,
    /// <p>The name of the placement group for the instance.</p>
    pub group_name: std::option::Option<std::string::String>,
    /// <p>The ID of the Dedicated Host for the instance.</p>
    pub host_id: std::option::Option<std::string::String>,
    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
    pub tenancy: std::option::Option<crate::model::Tenancy>,
    /// <p>Reserved for future use.</p>
    pub spread_domain: std::option::Option<std::string::String>,
    /// <p>The ARN of the host resource group in which to launch the instances.</p>
    pub host_resource_group_arn: std::option::Option<std::string::String>,
    /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub partition_number: std::option::Option<i32>,
}
impl LaunchTemplatePlacement {
    /// <p>The Availability Zone of the instance.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }

    /// <p>The affinity setting for the instance on the Dedicated Host.</p>
    pub fn affinity(&self) -> std::option::Option<&str> {
        self.affinity.as_deref()
    }

    /// <p>The name of the placement group for the instance.</p>
    pub fn group_name(&self) -> std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The ID of the Dedicated Host for the instance.</p>
    pub fn host_id(&self) -> std::option::Option<&str> {
        self.host_id.as_deref()
    }

    /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
    pub fn tenancy(&self) -> std::option::Option<&crate::model::Tenancy> {
        self.tenancy.as_ref()
    }

    /// <p>Reserved for future use.</p>
    pub fn spread_domain(&self) -> std::option::Option<&str> {
        self.spread_domain.as_deref()
    }

    /// <p>The ARN of the host resource group in which to launch the instances.</p>
    pub fn host_resource_group_arn(&self) -> std::option::Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
    pub fn partition_number(&self) -> std::option::Option<i32> {
        self.partition_number
    }
}
impl std::fmt::Debug for LaunchTemplatePlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("AvailabilityZone", &self.availability_zone);
        formatter.field("Affinity", &self.affinity);
        formatter.field("GroupName", &self.group_name);
        formatter.field("HostId", &self.host_id);
        formatter.enum_field("Tenancy", &self.tenancy);
        formatter.field("SpreadDomain", &self.spread_domain);
        formatter.field("HostResourceGroupArn", &self.host_resource_group_arn);
        formatter.field("PartitionNumber", &self.partition_number);
        formatter.finish()
    }
}
/// See [`LaunchTemplatePlacement`](crate::model::LaunchTemplatePlacement)
pub mod launch_template_placement {
    /// A builder for [`LaunchTemplatePlacement`](crate::model::LaunchTemplatePlacement)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) affinity: std::option::Option<std::string::String>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) host_id: std::option::Option<std::string::String>,
        pub(crate) tenancy: std::option::Option<crate::model::Tenancy>,
        pub(crate) spread_domain: std::option::Option<std::string::String>,
        pub(crate) host_resource_group_arn: std::option::Option<std::string::String>,
        pub(crate) partition_number: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The Availability Zone of the instance.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        /// <p>The Availability Zone of the instance.</p>
        pub fn set_availability_zone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.availability_zone = input;
            self
        }

        /// <p>The affinity setting for the instance on the Dedicated Host.</p>
        pub fn affinity(mut self, input: impl Into<std::string::String>) -> Self {
            self.affinity = Some(input.into());
            self
        }
        /// <p>The affinity setting for the instance on the Dedicated Host.</p>
        pub fn set_affinity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.affinity = input;
            self
        }

        /// <p>The name of the placement group for the instance.</p>
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        /// <p>The name of the placement group for the instance.</p>
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }

        /// <p>The ID of the Dedicated Host for the instance.</p>
        pub fn host_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_id = Some(input.into());
            self
        }
        /// <p>The ID of the Dedicated Host for the instance.</p>
        pub fn set_host_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_id = input;
            self
        }

        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
        pub fn tenancy(mut self, input: crate::model::Tenancy) -> Self {
            self.tenancy = Some(input);
            self
        }
        /// <p>The tenancy of the instance (if the instance is running in a VPC). An instance with a tenancy of <code>dedicated</code> runs on single-tenant hardware.</p>
        pub fn set_tenancy(mut self, input: std::option::Option<crate::model::Tenancy>) -> Self {
            self.tenancy = input;
            self
        }

        /// <p>Reserved for future use.</p>
        pub fn spread_domain(mut self, input: impl Into<std::string::String>) -> Self {
            self.spread_domain = Some(input.into());
            self
        }
        /// <p>Reserved for future use.</p>
        pub fn set_spread_domain(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.spread_domain = input;
            self
        }

        /// <p>The ARN of the host resource group in which to launch the instances.</p>
        pub fn host_resource_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.host_resource_group_arn = Some(input.into());
            self
        }
        /// <p>The ARN of the host resource group in which to launch the instances.</p>
        pub fn set_host_resource_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.host_resource_group_arn = input;
            self
        }

        /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn partition_number(mut self, input: i32) -> Self {
            self.partition_number = Some(input);
            self
        }
        /// <p>The number of the partition the instance should launch in. Valid only if the placement group strategy is set to <code>partition</code>.</p>
        pub fn set_partition_number(mut self, input: std::option::Option<i32>) -> Self {
            self.partition_number = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplatePlacement`](crate::model::LaunchTemplatePlacement)
        pub fn build(self) -> crate::model::LaunchTemplatePlacement {
            crate::model::LaunchTemplatePlacement {
                availability_zone: self.availability_zone,
                affinity: self.affinity,
                group_name: self.group_name,
                host_id: self.host_id,
                tenancy: self.tenancy,
                spread_domain: self.spread_domain,
                host_resource_group_arn: self.host_resource_group_arn,
                partition_number: self.partition_number,
            }
        }
    }
}
impl LaunchTemplatePlacement {
    /// Creates a new builder-style object to manufacture [`LaunchTemplatePlacement`](crate::model::LaunchTemplatePlacement)
    pub fn builder() -> crate::model::launch_template_placement::Builder {
        crate::model::launch_template_placement::Builder::default()
    }
}

/// <p>The tag specification for the launch template.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateTagSpecification {
    /// <p>The type of resource.</p>
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    /// <p>The tags for the resource.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl LaunchTemplateTagSpecification {
    /// <p>The type of resource.</p>
    pub fn resource_type(&self) -> std::option::Option<&crate::model::ResourceType> {
        self.resource_type.as_ref()
    }

    /// <p>The tags for the resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tags.is_none()`.
    pub fn tags(&self) -> &[crate::model::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}
impl std::fmt::Debug for LaunchTemplateTagSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("ResourceType", &self.resource_type);
        formatter.field("Tags", &self.tags);
        formatter.finish()
    }
}
/// See [`LaunchTemplateTagSpecification`](crate::model::LaunchTemplateTagSpecification)
pub mod launch_template_tag_specification {
    /// A builder for [`LaunchTemplateTagSpecification`](crate::model::LaunchTemplateTagSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_type: std::option::Option<crate::model::ResourceType>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The type of resource.</p>
        pub fn resource_type(mut self, input: crate::model::ResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }
        /// <p>The type of resource.</p>
        pub fn set_resource_type(mut self, input: std::option::Option<crate::model::ResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags for the resource.</p>
        pub fn tags(mut self, input: impl std::convert::Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        /// <p>The tags for the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateTagSpecification`](crate::model::LaunchTemplateTagSpecification)
        pub fn build(self) -> crate::model::LaunchTemplateTagSpecification {
            crate::model::LaunchTemplateTagSpecification {
                resource_type: self.resource_type,
                tags: self.tags,
            }
        }
    }
}
impl LaunchTemplateTagSpecification {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateTagSpecification`](crate::model::LaunchTemplateTagSpecification)
    pub fn builder() -> crate::model::launch_template_tag_specification::Builder {
        crate::model::launch_template_tag_specification::Builder::default()
    }
}

/// <p>Describes an elastic GPU.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ElasticGpuSpecificationResponse {
    /// <p>The elastic GPU type.</p>
    pub r#type: std::option::Option<std::string::String>,
}
impl ElasticGpuSpecificationResponse {
    /// <p>The elastic GPU type.</p>
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }
}
impl std::fmt::Debug for ElasticGpuSpecificationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Type", &self.r#type);
        formatter.finish()
    }
}
/// See [`ElasticGpuSpecificationResponse`](crate::model::ElasticGpuSpecificationResponse)
pub mod elastic_gpu_specification_response {
    /// A builder for [`ElasticGpuSpecificationResponse`](crate::model::ElasticGpuSpecificationResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The elastic GPU type.</p>
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        /// <p>The elastic GPU type.</p>
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`ElasticGpuSpecificationResponse`](crate::model::ElasticGpuSpecificationResponse)
        pub fn build(self) -> crate::model::ElasticGpuSpecificationResponse {
            crate::model::ElasticGpuSpecificationResponse {
                r#type: self.r#type,
            }
        }
    }
}
impl ElasticGpuSpecificationResponse {
    /// Creates a new builder-style object to manufacture [`ElasticGpuSpecificationResponse`](crate::model::ElasticGpuSpecificationResponse)
    pub fn builder() -> crate::model::elastic_gpu_specification_response::Builder {
        crate::model::elastic_gpu_specification_response::Builder::default()
    }
}

/// <p> Describes an elastic inference accelerator. </p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateElasticInferenceAcceleratorResponse {
    /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
    pub r#type: std::option::Option<std::string::String>,
    /// <p> The number of elastic inference accelerators to attach to the instance. </p>
    /// <p>Default: 1</p>
    pub count: std::option::Option<i32>,
}
impl LaunchTemplateElasticInferenceAcceleratorResponse {
    /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }

    /// <p> The number of elastic inference accelerators to attach to the instance. </p>
    /// <p>Default: 1</p>
    pub fn count(&self) -> std::option::Option<i32> {
        self.count
    }
}
impl std::fmt::Debug for LaunchTemplateElasticInferenceAcceleratorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Type", &self.r#type);
        formatter.field("Count", &self.count);
        formatter.finish()
    }
}
/// See [`LaunchTemplateElasticInferenceAcceleratorResponse`](crate::model::LaunchTemplateElasticInferenceAcceleratorResponse)
pub mod launch_template_elastic_inference_accelerator_response {
    /// A builder for [`LaunchTemplateElasticInferenceAcceleratorResponse`](crate::model::LaunchTemplateElasticInferenceAcceleratorResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<std::string::String>,
        pub(crate) count: std::option::Option<i32>,
    }
    impl Builder {
        /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        /// <p> The type of elastic inference accelerator. The possible values are eia1.medium, eia1.large, and eia1.xlarge. </p>
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }

        /// <p> The number of elastic inference accelerators to attach to the instance. </p>
        /// <p>Default: 1</p>
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        /// <p> The number of elastic inference accelerators to attach to the instance. </p>
        /// <p>Default: 1</p>
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateElasticInferenceAcceleratorResponse`](crate::model::LaunchTemplateElasticInferenceAcceleratorResponse)
        pub fn build(self) -> crate::model::LaunchTemplateElasticInferenceAcceleratorResponse {
            crate::model::LaunchTemplateElasticInferenceAcceleratorResponse {
                r#type: self.r#type,
                count: self.count,
            }
        }
    }
}
impl LaunchTemplateElasticInferenceAcceleratorResponse {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateElasticInferenceAcceleratorResponse`](crate::model::LaunchTemplateElasticInferenceAcceleratorResponse)
    pub fn builder() -> crate::model::launch_template_elastic_inference_accelerator_response::Builder {
        crate::model::launch_template_elastic_inference_accelerator_response::Builder::default()
    }
}

/// <p>The options for Spot Instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateSpotMarketOptions {
    /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
    pub max_price: std::option::Option<std::string::String>,
    /// <p>The Spot Instance request type.</p>
    pub spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
    /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
    pub block_duration_minutes: std::option::Option<i32>,
    /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached.</p>
    pub valid_until: std::option::Option<smithy_types::Instant>,
    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
}
impl LaunchTemplateSpotMarketOptions {
    /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
    pub fn max_price(&self) -> std::option::Option<&str> {
        self.max_price.as_deref()
    }

    /// <p>The Spot Instance request type.</p>
    pub fn spot_instance_type(&self) -> std::option::Option<&crate::model::SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
    pub fn block_duration_minutes(&self) -> std::option::Option<i32> {
        self.block_duration_minutes
    }

    /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached.</p>
    pub fn valid_until(&self) -> std::option::Option<&smithy_types::Instant> {
        self.valid_until.as_ref()
    }

    /// <p>The behavior when a Spot Instance is interrupted.</p>
    pub fn instance_interruption_behavior(&self) -> std::option::Option<&crate::model::InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateSpotMarketOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("MaxPrice", &self.max_price);
        formatter.enum_field("SpotInstanceType", &self.spot_instance_type);
        formatter.field("BlockDurationMinutes", &self.block_duration_minutes);
        formatter.field("ValidUntil", &self.valid_until);
        formatter.enum_field("InstanceInterruptionBehavior", &self.instance_interruption_behavior);
        formatter.finish()
    }
}
/// See [`LaunchTemplateSpotMarketOptions`](crate::model::LaunchTemplateSpotMarketOptions)
pub mod launch_template_spot_market_options {
    /// A builder for [`LaunchTemplateSpotMarketOptions`](crate::model::LaunchTemplateSpotMarketOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) max_price: std::option::Option<std::string::String>,
        pub(crate) spot_instance_type: std::option::Option<crate::model::SpotInstanceType>,
        pub(crate) block_duration_minutes: std::option::Option<i32>,
        pub(crate) valid_until: std::option::Option<smithy_types::Instant>,
        pub(crate) instance_interruption_behavior: std::option::Option<crate::model::InstanceInterruptionBehavior>,
    }
    impl Builder {
        /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
        pub fn max_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_price = Some(input.into());
            self
        }
        /// <p>The maximum hourly price you're willing to pay for the Spot Instances.</p>
        pub fn set_max_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_price = input;
            self
        }

        /// <p>The Spot Instance request type.</p>
        pub fn spot_instance_type(mut self, input: crate::model::SpotInstanceType) -> Self {
            self.spot_instance_type = Some(input);
            self
        }
        /// <p>The Spot Instance request type.</p>
        pub fn set_spot_instance_type(mut self, input: std::option::Option<crate::model::SpotInstanceType>) -> Self {
            self.spot_instance_type = input;
            self
        }

        /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
        pub fn block_duration_minutes(mut self, input: i32) -> Self {
            self.block_duration_minutes = Some(input);
            self
        }
        /// <p>The required duration for the Spot Instances (also known as Spot blocks), in minutes. This value must be a multiple of 60 (60, 120, 180, 240, 300, or 360).</p>
        pub fn set_block_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.block_duration_minutes = input;
            self
        }

        /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached.</p>
        pub fn valid_until(mut self, input: smithy_types::Instant) -> Self {
            self.valid_until = Some(input);
            self
        }
        /// <p>The end date of the request. For a one-time request, the request remains active until all instances launch, the request is canceled, or this date is reached. If the request is persistent, it remains active until it is canceled or this date and time is reached.</p>
        pub fn set_valid_until(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.valid_until = input;
            self
        }

        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn instance_interruption_behavior(mut self, input: crate::model::InstanceInterruptionBehavior) -> Self {
            self.instance_interruption_behavior = Some(input);
            self
        }
        /// <p>The behavior when a Spot Instance is interrupted.</p>
        pub fn set_instance_interruption_behavior(mut self, input: std::option::Option<crate::model::InstanceInterruptionBehavior>) -> Self {
            self.instance_interruption_behavior = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateSpotMarketOptions`](crate::model::LaunchTemplateSpotMarketOptions)
        pub fn build(self) -> crate::model::LaunchTemplateSpotMarketOptions {
            crate::model::LaunchTemplateSpotMarketOptions {
                max_price: self.max_price,
                spot_instance_type: self.spot_instance_type,
                block_duration_minutes: self.block_duration_minutes,
                valid_until: self.valid_until,
                instance_interruption_behavior: self.instance_interruption_behavior,
            }
        }
    }
}
impl LaunchTemplateSpotMarketOptions {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateSpotMarketOptions`](crate::model::LaunchTemplateSpotMarketOptions)
    pub fn builder() -> crate::model::launch_template_spot_market_options::Builder {
        crate::model::launch_template_spot_market_options::Builder::default()
    }
}

/// <p>The market (purchasing) option for the instances.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceMarketOptions {
    /// <p>The market type.</p>
    pub market_type: std::option::Option<crate::model::MarketType>,
    /// <p>The options for Spot Instances.</p>
    pub spot_options: std::option::Option<crate::model::LaunchTemplateSpotMarketOptions>,
}
impl LaunchTemplateInstanceMarketOptions {
    /// <p>The market type.</p>
    pub fn market_type(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market_type.as_ref()
    }

    /// <p>The options for Spot Instances.</p>
    pub fn spot_options(&self) -> std::option::Option<&crate::model::LaunchTemplateSpotMarketOptions> {
        self.spot_options.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceMarketOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("MarketType", &self.market_type);
        formatter.field("SpotOptions", &self.spot_options);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceMarketOptions`](crate::model::LaunchTemplateInstanceMarketOptions)
pub mod launch_template_instance_market_options {
    /// A builder for [`LaunchTemplateInstanceMarketOptions`](crate::model::LaunchTemplateInstanceMarketOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) market_type: std::option::Option<crate::model::MarketType>,
        pub(crate) spot_options: std::option::Option<crate::model::LaunchTemplateSpotMarketOptions>,
    }
    impl Builder {
        /// <p>The market type.</p>
        pub fn market_type(mut self, input: crate::model::MarketType) -> Self {
            self.market_type = Some(input);
            self
        }
        /// <p>The market type.</p>
        pub fn set_market_type(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market_type = input;
            self
        }

        /// <p>The options for Spot Instances.</p>
        pub fn spot_options(mut self, input: crate::model::LaunchTemplateSpotMarketOptions) -> Self {
            self.spot_options = Some(input);
            self
        }
        /// <p>The options for Spot Instances.</p>
        pub fn set_spot_options(mut self, input: std::option::Option<crate::model::LaunchTemplateSpotMarketOptions>) -> Self {
            self.spot_options = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceMarketOptions`](crate::model::LaunchTemplateInstanceMarketOptions)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceMarketOptions {
            crate::model::LaunchTemplateInstanceMarketOptions {
                market_type: self.market_type,
                spot_options: self.spot_options,
            }
        }
    }
}
impl LaunchTemplateInstanceMarketOptions {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceMarketOptions`](crate::model::LaunchTemplateInstanceMarketOptions)
    pub fn builder() -> crate::model::launch_template_instance_market_options::Builder {
        crate::model::launch_template_instance_market_options::Builder::default()
    }
}

/// <p>Describes the credit option for CPU usage of a T2, T3, or T3a instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct CreditSpecification {
    /// <p>The credit option for CPU usage of a T2, T3, or T3a instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
    pub cpu_credits: std::option::Option<std::string::String>,
}
impl CreditSpecification {
    /// <p>The credit option for CPU usage of a T2, T3, or T3a instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
    pub fn cpu_credits(&self) -> std::option::Option<&str> {
        self.cpu_credits.as_deref()
    }
}
impl std::fmt::Debug for CreditSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CpuCredits", &self.cpu_credits);
        formatter.finish()
    }
}
/// See [`CreditSpecification`](crate::model::CreditSpecification)
pub mod credit_specification {
    /// A builder for [`CreditSpecification`](crate::model::CreditSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cpu_credits: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The credit option for CPU usage of a T2, T3, or T3a instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
        pub fn cpu_credits(mut self, input: impl Into<std::string::String>) -> Self {
            self.cpu_credits = Some(input.into());
            self
        }
        /// <p>The credit option for CPU usage of a T2, T3, or T3a instance. Valid values are <code>standard</code> and <code>unlimited</code>.</p>
        pub fn set_cpu_credits(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cpu_credits = input;
            self
        }
        /// Consumes the builder and constructs a [`CreditSpecification`](crate::model::CreditSpecification)
        pub fn build(self) -> crate::model::CreditSpecification {
            crate::model::CreditSpecification {
                cpu_credits: self.cpu_credits,
            }
        }
    }
}
impl CreditSpecification {
    /// Creates a new builder-style object to manufacture [`CreditSpecification`](crate::model::CreditSpecification)
    pub fn builder() -> crate::model::credit_specification::Builder {
        crate::model::credit_specification::Builder::default()
    }
}

/// <p>The CPU options for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateCpuOptions {
    /// <p>The number of CPU cores for the instance.</p>
    pub core_count: std::option::Option<i32>,
    /// <p>The number of threads per CPU core.</p>
    pub threads_per_core: std::option::Option<i32>,
}
impl LaunchTemplateCpuOptions {
    /// <p>The number of CPU cores for the instance.</p>
    pub fn core_count(&self) -> std::option::Option<i32> {
        self.core_count
    }

    /// <p>The number of threads per CPU core.</p>
    pub fn threads_per_core(&self) -> std::option::Option<i32> {
        self.threads_per_core
    }
}
impl std::fmt::Debug for LaunchTemplateCpuOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("CoreCount", &self.core_count);
        formatter.field("ThreadsPerCore", &self.threads_per_core);
        formatter.finish()
    }
}
/// See [`LaunchTemplateCpuOptions`](crate::model::LaunchTemplateCpuOptions)
pub mod launch_template_cpu_options {
    /// A builder for [`LaunchTemplateCpuOptions`](crate::model::LaunchTemplateCpuOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) core_count: std::option::Option<i32>,
        pub(crate) threads_per_core: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of CPU cores for the instance.</p>
        pub fn core_count(mut self, input: i32) -> Self {
            self.core_count = Some(input);
            self
        }
        /// <p>The number of CPU cores for the instance.</p>
        pub fn set_core_count(mut self, input: std::option::Option<i32>) -> Self {
            self.core_count = input;
            self
        }

        /// <p>The number of threads per CPU core.</p>
        pub fn threads_per_core(mut self, input: i32) -> Self {
            self.threads_per_core = Some(input);
            self
        }
        /// <p>The number of threads per CPU core.</p>
        pub fn set_threads_per_core(mut self, input: std::option::Option<i32>) -> Self {
            self.threads_per_core = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateCpuOptions`](crate::model::LaunchTemplateCpuOptions)
        pub fn build(self) -> crate::model::LaunchTemplateCpuOptions {
            crate::model::LaunchTemplateCpuOptions {
                core_count: self.core_count,
                threads_per_core: self.threads_per_core,
            }
        }
    }
}
impl LaunchTemplateCpuOptions {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateCpuOptions`](crate::model::LaunchTemplateCpuOptions)
    pub fn builder() -> crate::model::launch_template_cpu_options::Builder {
        crate::model::launch_template_cpu_options::Builder::default()
    }
}

/// <p>Information about the Capacity Reservation targeting option.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateCapacityReservationSpecificationResponse {
    /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
    /// </li>
    /// </ul>
    pub capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
    /// <p>Information about the target Capacity Reservation.</p>
    pub capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTargetResponse>,
}
impl LaunchTemplateCapacityReservationSpecificationResponse {
    /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
    /// <ul>
    /// <li>
    /// <p>
    /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
    /// </li>
    /// <li>
    /// <p>
    /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
    /// </li>
    /// </ul>
    pub fn capacity_reservation_preference(&self) -> std::option::Option<&crate::model::CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// <p>Information about the target Capacity Reservation.</p>
    pub fn capacity_reservation_target(&self) -> std::option::Option<&crate::model::CapacityReservationTargetResponse> {
        self.capacity_reservation_target.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateCapacityReservationSpecificationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("CapacityReservationPreference", &self.capacity_reservation_preference);
        formatter.field("CapacityReservationTarget", &self.capacity_reservation_target);
        formatter.finish()
    }
}
/// See [`LaunchTemplateCapacityReservationSpecificationResponse`](crate::model::LaunchTemplateCapacityReservationSpecificationResponse)
pub mod launch_template_capacity_reservation_specification_response {
    /// A builder for [`LaunchTemplateCapacityReservationSpecificationResponse`](crate::model::LaunchTemplateCapacityReservationSpecificationResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) capacity_reservation_preference: std::option::Option<crate::model::CapacityReservationPreference>,
        pub(crate) capacity_reservation_target: std::option::Option<crate::model::CapacityReservationTargetResponse>,
    }
    impl Builder {
        /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
        /// </li>
        /// </ul>
        pub fn capacity_reservation_preference(mut self, input: crate::model::CapacityReservationPreference) -> Self {
            self.capacity_reservation_preference = Some(input);
            self
        }
        /// <p>Indicates the instance's Capacity Reservation preferences. Possible preferences include:</p>
        /// <ul>
        /// <li>
        /// <p>
        /// <code>open</code> - The instance can run in any <code>open</code> Capacity Reservation that has matching attributes (instance type, platform, Availability Zone).</p>
        /// </li>
        /// <li>
        /// <p>
        /// <code>none</code> - The instance avoids running in a Capacity Reservation even if one is available. The instance runs in On-Demand capacity.</p>
        /// </li>
        /// </ul>
        pub fn set_capacity_reservation_preference(mut self, input: std::option::Option<crate::model::CapacityReservationPreference>) -> Self {
            self.capacity_reservation_preference = input;
            self
        }

        /// <p>Information about the target Capacity Reservation.</p>
        pub fn capacity_reservation_target(mut self, input: crate::model::CapacityReservationTargetResponse) -> Self {
            self.capacity_reservation_target = Some(input);
            self
        }
        /// <p>Information about the target Capacity Reservation.</p>
        pub fn set_capacity_reservation_target(mut self, input: std::option::Option<crate::model::CapacityReservationTargetResponse>) -> Self {
            self.capacity_reservation_target = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateCapacityReservationSpecificationResponse`](crate::model::LaunchTemplateCapacityReservationSpecificationResponse)
        pub fn build(self) -> crate::model::LaunchTemplateCapacityReservationSpecificationResponse {
            crate::model::LaunchTemplateCapacityReservationSpecificationResponse {
                capacity_reservation_preference: self.capacity_reservation_preference,
                capacity_reservation_target: self.capacity_reservation_target,
            }
        }
    }
}
impl LaunchTemplateCapacityReservationSpecificationResponse {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateCapacityReservationSpecificationResponse`](crate::model::LaunchTemplateCapacityReservationSpecificationResponse)
    pub fn builder() -> crate::model::launch_template_capacity_reservation_specification_response::Builder {
        crate::model::launch_template_capacity_reservation_specification_response::Builder::default()
    }
}

/// <p>Describes a license configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateLicenseConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub license_configuration_arn: std::option::Option<std::string::String>,
}
impl LaunchTemplateLicenseConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
    pub fn license_configuration_arn(&self) -> std::option::Option<&str> {
        self.license_configuration_arn.as_deref()
    }
}
impl std::fmt::Debug for LaunchTemplateLicenseConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("LicenseConfigurationArn", &self.license_configuration_arn);
        formatter.finish()
    }
}
/// See [`LaunchTemplateLicenseConfiguration`](crate::model::LaunchTemplateLicenseConfiguration)
pub mod launch_template_license_configuration {
    /// A builder for [`LaunchTemplateLicenseConfiguration`](crate::model::LaunchTemplateLicenseConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) license_configuration_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn license_configuration_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.license_configuration_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the license configuration.</p>
        pub fn set_license_configuration_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.license_configuration_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateLicenseConfiguration`](crate::model::LaunchTemplateLicenseConfiguration)
        pub fn build(self) -> crate::model::LaunchTemplateLicenseConfiguration {
            crate::model::LaunchTemplateLicenseConfiguration {
                license_configuration_arn: self.license_configuration_arn,
            }
        }
    }
}
impl LaunchTemplateLicenseConfiguration {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateLicenseConfiguration`](crate::model::LaunchTemplateLicenseConfiguration)
    pub fn builder() -> crate::model::launch_template_license_configuration::Builder {
        crate::model::launch_template_license_configuration::Builder::default()
    }
}

/// <p>Indicates whether an instance is configured for hibernation.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateHibernationOptions {
    /// <p>If this parameter is set to <code>true</code>, the instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub configured: std::option::Option<bool>,
}
impl LaunchTemplateHibernationOptions {
    /// <p>If this parameter is set to <code>true</code>, the instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
    pub fn configured(&self) -> std::option::Option<bool> {
        self.configured
    }
}
impl std::fmt::Debug for LaunchTemplateHibernationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("Configured", &self.configured);
        formatter.finish()
    }
}
/// See [`LaunchTemplateHibernationOptions`](crate::model::LaunchTemplateHibernationOptions)
pub mod launch_template_hibernation_options {
    /// A builder for [`LaunchTemplateHibernationOptions`](crate::model::LaunchTemplateHibernationOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) configured: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>If this parameter is set to <code>true</code>, the instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn configured(mut self, input: bool) -> Self {
            self.configured = Some(input);
            self
        }
        /// <p>If this parameter is set to <code>true</code>, the instance is enabled for hibernation; otherwise, it is not enabled for hibernation.</p>
        pub fn set_configured(mut self, input: std::option::Option<bool>) -> Self {
            self.configured = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateHibernationOptions`](crate::model::LaunchTemplateHibernationOptions)
        pub fn build(self) -> crate::model::LaunchTemplateHibernationOptions {
            crate::model::LaunchTemplateHibernationOptions {
                configured: self.configured,
            }
        }
    }
}
impl LaunchTemplateHibernationOptions {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateHibernationOptions`](crate::model::LaunchTemplateHibernationOptions)
    pub fn builder() -> crate::model::launch_template_hibernation_options::Builder {
        crate::model::launch_template_hibernation_options::Builder::default()
    }
}

/// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct LaunchTemplateInstanceMetadataOptions {
    /// <p>The state of the metadata option changes.</p>
    /// <p>
    /// <code>pending</code> - The metadata options are being updated and the instance is not ready to process metadata traffic with the new selection.</p>
    /// <p>
    /// <code>applied</code> - The metadata options have been successfully applied on the instance.</p>
    pub state: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsState>,
    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub http_tokens: std::option::Option<crate::model::LaunchTemplateHttpTokensState>,
    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    /// <p>Default: 1</p>
    /// <p>Possible values: Integers from 1 to 64</p>
    pub http_put_response_hop_limit: std::option::Option<i32>,
    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub http_endpoint: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>,
}
impl LaunchTemplateInstanceMetadataOptions {
    /// <p>The state of the metadata option changes.</p>
    /// <p>
    /// <code>pending</code> - The metadata options are being updated and the instance is not ready to process metadata traffic with the new selection.</p>
    /// <p>
    /// <code>applied</code> - The metadata options have been successfully applied on the instance.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMetadataOptionsState> {
        self.state.as_ref()
    }

    /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
    pub fn http_tokens(&self) -> std::option::Option<&crate::model::LaunchTemplateHttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
    /// <p>Default: 1</p>
    /// <p>Possible values: Integers from 1 to 64</p>
    pub fn http_put_response_hop_limit(&self) -> std::option::Option<i32> {
        self.http_put_response_hop_limit
    }

    /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
    pub fn http_endpoint(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }
}
impl std::fmt::Debug for LaunchTemplateInstanceMetadataOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.enum_field("State", &self.state);
        formatter.enum_field("HttpTokens", &self.http_tokens);
        formatter.field("HttpPutResponseHopLimit", &self.http_put_response_hop_limit);
        formatter.enum_field("HttpEndpoint", &self.http_endpoint);
        formatter.finish()
    }
}
/// See [`LaunchTemplateInstanceMetadataOptions`](crate::model::LaunchTemplateInstanceMetadataOptions)
pub mod launch_template_instance_metadata_options {
    /// A builder for [`LaunchTemplateInstanceMetadataOptions`](crate::model::LaunchTemplateInstanceMetadataOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsState>,
        pub(crate) http_tokens: std::option::Option<crate::model::LaunchTemplateHttpTokensState>,
        pub(crate) http_put_response_hop_limit: std::option::Option<i32>,
        pub(crate) http_endpoint: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>,
    }
    impl Builder {
        /// <p>The state of the metadata option changes.</p>
        /// <p>
        /// <code>pending</code> - The metadata options are being updated and the instance is not ready to process metadata traffic with the new selection.</p>
        /// <p>
        /// <code>applied</code> - The metadata options have been successfully applied on the instance.</p>
        pub fn state(mut self, input: crate::model::LaunchTemplateInstanceMetadataOptionsState) -> Self {
            self.state = Some(input);
            self
        }
        /// <p>The state of the metadata option changes.</p>
        /// <p>
        /// <code>pending</code> - The metadata options are being updated and the instance is not ready to process metadata traffic with the new selection.</p>
        /// <p>
        /// <code>applied</code> - The metadata options have been successfully applied on the instance.</p>
        pub fn set_state(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptionsState>) -> Self {
            self.state = input;
            self
        }

        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn http_tokens(mut self, input: crate::model::LaunchTemplateHttpTokensState) -> Self {
            self.http_tokens = Some(input);
            self
        }
        /// <p>The state of token usage for your instance metadata requests. If the parameter is not specified in the request, the default state is <code>optional</code>.</p>
        pub fn set_http_tokens(mut self, input: std::option::Option<crate::model::LaunchTemplateHttpTokensState>) -> Self {
            self.http_tokens = input;
            self
        }

        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        /// <p>Default: 1</p>
        /// <p>Possible values: Integers from 1 to 64</p>
        pub fn http_put_response_hop_limit(mut self, input: i32) -> Self {
            self.http_put_response_hop_limit = Some(input);
            self
        }
        /// <p>The desired HTTP PUT response hop limit for instance metadata requests. The larger the number, the further instance metadata requests can travel.</p>
        /// <p>Default: 1</p>
        /// <p>Possible values: Integers from 1 to 64</p>
        pub fn set_http_put_response_hop_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.http_put_response_hop_limit = input;
            self
        }

        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn http_endpoint(mut self, input: crate::model::LaunchTemplateInstanceMetadataEndpointState) -> Self {
            self.http_endpoint = Some(input);
            self
        }
        /// <p>This parameter enables or disables the HTTP metadata endpoint on your instances. If the parameter is not specified, the default state is <code>enabled</code>.</p>
        pub fn set_http_endpoint(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMetadataEndpointState>) -> Self {
            self.http_endpoint = input;
            self
        }
        /// Consumes the builder and constructs a [`LaunchTemplateInstanceMetadataOptions`](crate::model::LaunchTemplateInstanceMetadataOptions)
        pub fn build(self) -> crate::model::LaunchTemplateInstanceMetadataOptions {
            crate::model::LaunchTemplateInstanceMetadataOptions {
                state: self.state,
                http_tokens: self.http_tokens,
                http_put_response_hop_limit: self.http_put_response_hop_limit,
                http_endpoint: self.http_endpoint,
            }
        }
    }
}
impl LaunchTemplateInstanceMetadataOptions {
    /// Creates a new builder-style object to manufacture [`LaunchTemplateInstanceMetadataOptions`](crate::model::LaunchTemplateInstanceMetadataOptions)
    pub fn builder() -> crate::model::launch_template_instance_metadata_options::Builder {
        crate::model::launch_template_instance_metadata_options::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LaunchTemplateInstanceMetadataOptionsState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Applied,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LaunchTemplateInstanceMetadataOptionsState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => LaunchTemplateInstanceMetadataOptionsState::Pending,
            "applied" => LaunchTemplateInstanceMetadataOptionsState::Applied,
            other => LaunchTemplateInstanceMetadataOptionsState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LaunchTemplateInstanceMetadataOptionsState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LaunchTemplateInstanceMetadataOptionsState::from(s))
    }
}
impl LaunchTemplateInstanceMetadataOptionsState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            LaunchTemplateInstanceMetadataOptionsState::Pending => "pending",
            LaunchTemplateInstanceMetadataOptionsState::Applied => "applied",
            LaunchTemplateInstanceMetadataOptionsState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "pending",
            "applied",
        ]
    }
}
impl AsRef<str> for LaunchTemplateInstanceMetadataOptionsState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// <p>The information for a launch template.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::hash::Hash,
    std::default::Default,
)]
pub struct ResponseLaunchTemplateData {
    /// <p>The ID of the kernel, if applicable.</p>
    pub kernel_id: std::option::Option<std::string::String>,
    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>The IAM instance profile.</p>
    pub iam_instance_profile: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecification>,
    /// <p>The block device mappings.</p>
    pub block_device_mappings: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMapping>>,
    /// <p>The network interfaces.</p>
    pub network_interfaces: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification>>,
    /// <p>The ID of the AMI that was used to launch the instance.</p>
    pub image_id: std::option::Option<std::string::String>,
    /// <p>The instance type.</p>
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    /// <p>The name of the key pair.</p>
    pub key_name: std::option::Option<std::string::String>,
    /// <p>The monitoring for the instance.</p>
    pub monitoring: std::option::Option<crate::model::LaunchTemplatesMonitoring>,
    /// <p>The placement of the instance.</p>
    pub placement: std::option::Option<crate::model::LaunchTemplatePlacement>,
    /// <p>The ID of the RAM disk, if applicable.</p>
    pub ram_disk_id: std::option::Option<std::string::String>,
    /// <p>If set to <code>true</code>, indicates that the instance cannot be terminated using the Amazon EC2 console, command line tool, or API.</p>
    pub disable_api_termination: std::option::Option<bool>,
    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    pub instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
    /// <p>The user data for the instance.</p>
    pub user_data: std::option::Option<std::string::String>,
    /// <p>The tags.</p>
    pub tag_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecification>>,
    /// <p>The elastic GPU specification.</p>
    pub elastic_gpu_specifications: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecificationResponse>>,
    /// <p>The elastic inference accelerator for the instance.</p>
    pub elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAcceleratorResponse>>,
    /// <p>The security group IDs.</p>
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The security group names.</p>
    pub security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The market (purchasing) option for the instances.</p>
    pub instance_market_options: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptions>,
    /// <p>The credit option for CPU usage of the instance.</p>
    pub credit_specification: std::option::Option<crate::model::CreditSpecification>,
    /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub cpu_options: std::option::Option<crate::model::LaunchTemplateCpuOptions>,
    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub capacity_reservation_specification: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationResponse>,
    /// <p>The license configurations.</p>
    pub license_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfiguration>>,
    /// <p>Indicates whether an instance is configured for hibernation. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub hibernation_options: std::option::Option<crate::model::LaunchTemplateHibernationOptions>,
    /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub metadata_options: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptions>,
}
impl ResponseLaunchTemplateData {
    /// <p>The ID of the kernel, if applicable.</p>
    pub fn kernel_id(&self) -> std::option::Option<&str> {
        self.kernel_id.as_deref()
    }

    /// <p>Indicates whether the instance is optimized for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }

    /// <p>The IAM instance profile.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&crate::model::LaunchTemplateIamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// <p>The block device mappings.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.block_device_mappings.is_none()`.
    pub fn block_device_mappings(&self) -> &[crate::model::LaunchTemplateBlockDeviceMapping] {
        self.block_device_mappings.as_deref().unwrap_or_default()
    }

    /// <p>The network interfaces.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.network_interfaces.is_none()`.
    pub fn network_interfaces(&self) -> &[crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification] {
        self.network_interfaces.as_deref().unwrap_or_default()
    }

    /// <p>The ID of the AMI that was used to launch the instance.</p>
    pub fn image_id(&self) -> std::option::Option<&str> {
        self.image_id.as_deref()
    }

    /// <p>The instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    /// <p>The name of the key pair.</p>
    pub fn key_name(&self) -> std::option::Option<&str> {
        self.key_name.as_deref()
    }

    /// <p>The monitoring for the instance.</p>
    pub fn monitoring(&self) -> std::option::Option<&crate::model::LaunchTemplatesMonitoring> {
        self.monitoring.as_ref()
    }

    /// <p>The placement of the instance.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::LaunchTemplatePlacement> {
        self.placement.as_ref()
    }

    /// <p>The ID of the RAM disk, if applicable.</p>
    pub fn ram_disk_id(&self) -> std::option::Option<&str> {
        self.ram_disk_id.as_deref()
    }

    /// <p>If set to <code>true</code>, indicates that the instance cannot be terminated using the Amazon EC2 console, command line tool, or API.</p>
    pub fn disable_api_termination(&self) -> std::option::Option<bool> {
        self.disable_api_termination
    }

    /// <p>Indicates whether an instance stops or terminates when you initiate shutdown from the instance (using the operating system command for system shutdown).</p>
    pub fn instance_initiated_shutdown_behavior(&self) -> std::option::Option<&crate::model::ShutdownBehavior> {
        self.instance_initiated_shutdown_behavior.as_ref()
    }

    /// <p>The user data for the instance.</p>
    pub fn user_data(&self) -> std::option::Option<&str> {
        self.user_data.as_deref()
    }

    /// <p>The tags.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.tag_specifications.is_none()`.
    pub fn tag_specifications(&self) -> &[crate::model::LaunchTemplateTagSpecification] {
        self.tag_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The elastic GPU specification.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_gpu_specifications.is_none()`.
    pub fn elastic_gpu_specifications(&self) -> &[crate::model::ElasticGpuSpecificationResponse] {
        self.elastic_gpu_specifications.as_deref().unwrap_or_default()
    }

    /// <p>The elastic inference accelerator for the instance.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.elastic_inference_accelerators.is_none()`.
    pub fn elastic_inference_accelerators(&self) -> &[crate::model::LaunchTemplateElasticInferenceAcceleratorResponse] {
        self.elastic_inference_accelerators.as_deref().unwrap_or_default()
    }

    /// <p>The security group IDs.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_group_ids.is_none()`.
    pub fn security_group_ids(&self) -> &[std::string::String] {
        self.security_group_ids.as_deref().unwrap_or_default()
    }

    /// <p>The security group names.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.security_groups.is_none()`.
    pub fn security_groups(&self) -> &[std::string::String] {
        self.security_groups.as_deref().unwrap_or_default()
    }

    /// <p>The market (purchasing) option for the instances.</p>
    pub fn instance_market_options(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMarketOptions> {
        self.instance_market_options.as_ref()
    }

    /// <p>The credit option for CPU usage of the instance.</p>
    pub fn credit_specification(&self) -> std::option::Option<&crate::model::CreditSpecification> {
        self.credit_specification.as_ref()
    }

    /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn cpu_options(&self) -> std::option::Option<&crate::model::LaunchTemplateCpuOptions> {
        self.cpu_options.as_ref()
    }

    /// <p>Information about the Capacity Reservation targeting option.</p>
    pub fn capacity_reservation_specification(&self) -> std::option::Option<&crate::model::LaunchTemplateCapacityReservationSpecificationResponse> {
        self.capacity_reservation_specification.as_ref()
    }

    /// <p>The license configurations.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.license_specifications.is_none()`.
    pub fn license_specifications(&self) -> &[crate::model::LaunchTemplateLicenseConfiguration] {
        self.license_specifications.as_deref().unwrap_or_default()
    }

    /// <p>Indicates whether an instance is configured for hibernation. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn hibernation_options(&self) -> std::option::Option<&crate::model::LaunchTemplateHibernationOptions> {
        self.hibernation_options.as_ref()
    }

    /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
    pub fn metadata_options(&self) -> std::option::Option<&crate::model::LaunchTemplateInstanceMetadataOptions> {
        self.metadata_options.as_ref()
    }
}
impl std::fmt::Debug for ResponseLaunchTemplateData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = crate::fmt::SetFields::new(f);
        formatter.field("KernelId", &self.kernel_id);
        formatter.field("EbsOptimized", &self.ebs_optimized);
        formatter.field("IamInstanceProfile", &self.iam_instance_profile);
        formatter.field("BlockDeviceMappings", &self.block_device_mappings);
        formatter.field("NetworkInterfaces", &self.network_interfaces);
        formatter.field("ImageId", &self.image_id);
        formatter.enum_field("InstanceType", &self.instance_type);
        formatter.field("KeyName", &self.key_name);
        formatter.field("Monitoring", &self.monitoring);
        formatter.field("Placement", &self.placement);
        formatter.field("RamDiskId", &self.ram_disk_id);
        formatter.field("DisableApiTermination", &self.disable_api_termination);
        formatter.enum_field("InstanceInitiatedShutdownBehavior", &self.instance_initiated_shutdown_behavior);
        formatter.field("UserData", &self.user_data);
        formatter.field("TagSpecifications", &self.tag_specifications);
        formatter.field("ElasticGpuSpecifications", &self.elastic_gpu_specifications);
        formatter.field("ElasticInferenceAccelerators", &self.elastic_inference_accelerators);
        formatter.field("SecurityGroupIds", &self.security_group_ids);
        formatter.field("SecurityGroups", &self.security_groups);
        formatter.field("InstanceMarketOptions", &self.instance_market_options);
        formatter.field("CreditSpecification", &self.credit_specification);
        formatter.field("CpuOptions", &self.cpu_options);
        formatter.field("CapacityReservationSpecification", &self.capacity_reservation_specification);
        formatter.field("LicenseSpecifications", &self.license_specifications);
        formatter.field("HibernationOptions", &self.hibernation_options);
        formatter.field("MetadataOptions", &self.metadata_options);
        formatter.finish()
    }
}
/// See [`ResponseLaunchTemplateData`](crate::model::ResponseLaunchTemplateData)
pub mod response_launch_template_data {
    /// A builder for [`ResponseLaunchTemplateData`](crate::model::ResponseLaunchTemplateData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) kernel_id: std::option::Option<std::string::String>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) iam_instance_profile: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecification>,
        pub(crate) block_device_mappings: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMapping>>,
        pub(crate) network_interfaces: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification>>,
        pub(crate) image_id: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<crate::model::InstanceType>,
        pub(crate) key_name: std::option::Option<std::string::String>,
        pub(crate) monitoring: std::option::Option<crate::model::LaunchTemplatesMonitoring>,
        pub(crate) placement: std::option::Option<crate::model::LaunchTemplatePlacement>,
        pub(crate) ram_disk_id: std::option::Option<std::string::String>,
        pub(crate) disable_api_termination: std::option::Option<bool>,
        pub(crate) instance_initiated_shutdown_behavior: std::option::Option<crate::model::ShutdownBehavior>,
        pub(crate) user_data: std::option::Option<std::string::String>,
        pub(crate) tag_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecification>>,
        pub(crate) elastic_gpu_specifications: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecificationResponse>>,
        pub(crate) elastic_inference_accelerators: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAcceleratorResponse>>,
        pub(crate) security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) instance_market_options: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptions>,
        pub(crate) credit_specification: std::option::Option<crate::model::CreditSpecification>,
        pub(crate) cpu_options: std::option::Option<crate::model::LaunchTemplateCpuOptions>,
        pub(crate) capacity_reservation_specification: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationResponse>,
        pub(crate) license_specifications: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfiguration>>,
        pub(crate) hibernation_options: std::option::Option<crate::model::LaunchTemplateHibernationOptions>,
        pub(crate) metadata_options: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptions>,
    }
    impl Builder {
        /// <p>The ID of the kernel, if applicable.</p>
        pub fn kernel_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kernel_id = Some(input.into());
            self
        }
        /// <p>The ID of the kernel, if applicable.</p>
        pub fn set_kernel_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kernel_id = input;
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
        pub fn iam_instance_profile(mut self, input: crate::model::LaunchTemplateIamInstanceProfileSpecification) -> Self {
            self.iam_instance_profile = Some(input);
            self
        }
        /// <p>The IAM instance profile.</p>
        pub fn set_iam_instance_profile(mut self, input: std::option::Option<crate::model::LaunchTemplateIamInstanceProfileSpecification>) -> Self {
            self.iam_instance_profile = input;
            self
        }

        /// Appends an item to `block_device_mappings`.
        ///
        /// To override the contents of this collection use [`set_block_device_mappings`](Self::set_block_device_mappings).
        ///
        /// <p>The block device mappings.</p>
        pub fn block_device_mappings(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateBlockDeviceMapping>) -> Self {
            let mut v = self.block_device_mappings.unwrap_or_default();
            v.push(input.into());
            self.block_device_mappings = Some(v);
            self
        }
        /// <p>The block device mappings.</p>
        pub fn set_block_device_mappings(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateBlockDeviceMapping>>) -> Self {
            self.block_device_mappings = input;
            self
        }

        /// Appends an item to `network_interfaces`.
        ///
        /// To override the contents of this collection use [`set_network_interfaces`](Self::set_network_interfaces).
        ///
        /// <p>The network interfaces.</p>
        pub fn network_interfaces(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification>) -> Self {
            let mut v = self.network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.network_interfaces = Some(v);
            self
        }
        /// <p>The network interfaces.</p>
        pub fn set_network_interfaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateInstanceNetworkInterfaceSpecification>>) -> Self {
            self.network_interfaces = input;
            self
        }

        /// <p>The ID of the AMI that was used to launch the instance.</p>
        pub fn image_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_id = Some(input.into());
            self
        }
        /// <p>The ID of the AMI that was used to launch the instance.</p>
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

        /// <p>The monitoring for the instance.</p>
        pub fn monitoring(mut self, input: crate::model::LaunchTemplatesMonitoring) -> Self {
            self.monitoring = Some(input);
            self
        }
        /// <p>The monitoring for the instance.</p>
        pub fn set_monitoring(mut self, input: std::option::Option<crate::model::LaunchTemplatesMonitoring>) -> Self {
            self.monitoring = input;
            self
        }

        /// <p>The placement of the instance.</p>
        pub fn placement(mut self, input: crate::model::LaunchTemplatePlacement) -> Self {
            self.placement = Some(input);
            self
        }
        /// <p>The placement of the instance.</p>
        pub fn set_placement(mut self, input: std::option::Option<crate::model::LaunchTemplatePlacement>) -> Self {
            self.placement = input;
            self
        }

        /// <p>The ID of the RAM disk, if applicable.</p>
        pub fn ram_disk_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ram_disk_id = Some(input.into());
            self
        }
        /// <p>The ID of the RAM disk, if applicable.</p>
        pub fn set_ram_disk_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ram_disk_id = input;
            self
        }

        /// <p>If set to <code>true</code>, indicates that the instance cannot be terminated using the Amazon EC2 console, command line tool, or API.</p>
        pub fn disable_api_termination(mut self, input: bool) -> Self {
            self.disable_api_termination = Some(input);
            self
        }
        /// <p>If set to <code>true</code>, indicates that the instance cannot be terminated using the Amazon EC2 console, command line tool, or API.</p>
        pub fn set_disable_api_termination(mut self, input: std::option::Option<bool>) -> Self {
            self.disable_api_termination = input;
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

        /// <p>The user data for the instance.</p>
        pub fn user_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_data = Some(input.into());
            self
        }
        /// <p>The user data for the instance.</p>
        pub fn set_user_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_data = input;
            self
        }

        /// Appends an item to `tag_specifications`.
        ///
        /// To override the contents of this collection use [`set_tag_specifications`](Self::set_tag_specifications).
        ///
        /// <p>The tags.</p>
        pub fn tag_specifications(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateTagSpecification>) -> Self {
            let mut v = self.tag_specifications.unwrap_or_default();
            v.push(input.into());
            self.tag_specifications = Some(v);
            self
        }
        /// <p>The tags.</p>
        pub fn set_tag_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateTagSpecification>>) -> Self {
            self.tag_specifications = input;
            self
        }

        /// Appends an item to `elastic_gpu_specifications`.
        ///
        /// To override the contents of this collection use [`set_elastic_gpu_specifications`](Self::set_elastic_gpu_specifications).
        ///
        /// <p>The elastic GPU specification.</p>
        pub fn elastic_gpu_specifications(mut self, input: impl std::convert::Into<crate::model::ElasticGpuSpecificationResponse>) -> Self {
            let mut v = self.elastic_gpu_specifications.unwrap_or_default();
            v.push(input.into());
            self.elastic_gpu_specifications = Some(v);
            self
        }
        /// <p>The elastic GPU specification.</p>
        pub fn set_elastic_gpu_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::ElasticGpuSpecificationResponse>>) -> Self {
            self.elastic_gpu_specifications = input;
            self
        }

        /// Appends an item to `elastic_inference_accelerators`.
        ///
        /// To override the contents of this collection use [`set_elastic_inference_accelerators`](Self::set_elastic_inference_accelerators).
        ///
        /// <p>The elastic inference accelerator for the instance.</p>
        pub fn elastic_inference_accelerators(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateElasticInferenceAcceleratorResponse>) -> Self {
            let mut v = self.elastic_inference_accelerators.unwrap_or_default();
            v.push(input.into());
            self.elastic_inference_accelerators = Some(v);
            self
        }
        /// <p>The elastic inference accelerator for the instance.</p>
        pub fn set_elastic_inference_accelerators(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateElasticInferenceAcceleratorResponse>>) -> Self {
            self.elastic_inference_accelerators = input;
            self
        }

        /// Appends an item to `security_group_ids`.
        ///
        /// To override the contents of this collection use [`set_security_group_ids`](Self::set_security_group_ids).
        ///
        /// <p>The security group IDs.</p>
        pub fn security_group_ids(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        /// <p>The security group IDs.</p>
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }

        /// Appends an item to `security_groups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        ///
        /// <p>The security group names.</p>
        pub fn security_groups(mut self, input: impl std::convert::Into<std::string::String>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        /// <p>The security group names.</p>
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_groups = input;
            self
        }

        /// <p>The market (purchasing) option for the instances.</p>
        pub fn instance_market_options(mut self, input: crate::model::LaunchTemplateInstanceMarketOptions) -> Self {
            self.instance_market_options = Some(input);
            self
        }
        /// <p>The market (purchasing) option for the instances.</p>
        pub fn set_instance_market_options(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMarketOptions>) -> Self {
            self.instance_market_options = input;
            self
        }

        /// <p>The credit option for CPU usage of the instance.</p>
        pub fn credit_specification(mut self, input: crate::model::CreditSpecification) -> Self {
            self.credit_specification = Some(input);
            self
        }
        /// <p>The credit option for CPU usage of the instance.</p>
        pub fn set_credit_specification(mut self, input: std::option::Option<crate::model::CreditSpecification>) -> Self {
            self.credit_specification = input;
            self
        }

        /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn cpu_options(mut self, input: crate::model::LaunchTemplateCpuOptions) -> Self {
            self.cpu_options = Some(input);
            self
        }
        /// <p>The CPU options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-optimize-cpu.html">Optimizing CPU Options</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_cpu_options(mut self, input: std::option::Option<crate::model::LaunchTemplateCpuOptions>) -> Self {
            self.cpu_options = input;
            self
        }

        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn capacity_reservation_specification(mut self, input: crate::model::LaunchTemplateCapacityReservationSpecificationResponse) -> Self {
            self.capacity_reservation_specification = Some(input);
            self
        }
        /// <p>Information about the Capacity Reservation targeting option.</p>
        pub fn set_capacity_reservation_specification(mut self, input: std::option::Option<crate::model::LaunchTemplateCapacityReservationSpecificationResponse>) -> Self {
            self.capacity_reservation_specification = input;
            self
        }

        /// Appends an item to `license_specifications`.
        ///
        /// To override the contents of this collection use [`set_license_specifications`](Self::set_license_specifications).
        ///
        /// <p>The license configurations.</p>
        pub fn license_specifications(mut self, input: impl std::convert::Into<crate::model::LaunchTemplateLicenseConfiguration>) -> Self {
            let mut v = self.license_specifications.unwrap_or_default();
            v.push(input.into());
            self.license_specifications = Some(v);
            self
        }
        /// <p>The license configurations.</p>
        pub fn set_license_specifications(mut self, input: std::option::Option<std::vec::Vec<crate::model::LaunchTemplateLicenseConfiguration>>) -> Self {
            self.license_specifications = input;
            self
        }

        /// <p>Indicates whether an instance is configured for hibernation. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn hibernation_options(mut self, input: crate::model::LaunchTemplateHibernationOptions) -> Self {
            self.hibernation_options = Some(input);
            self
        }
        /// <p>Indicates whether an instance is configured for hibernation. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Hibernate.html">Hibernate Your Instance</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_hibernation_options(mut self, input: std::option::Option<crate::model::LaunchTemplateHibernationOptions>) -> Self {
            self.hibernation_options = input;
            self
        }

        /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn metadata_options(mut self, input: crate::model::LaunchTemplateInstanceMetadataOptions) -> Self {
            self.metadata_options = Some(input);
            self
        }
        /// <p>The metadata options for the instance. For more information, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-instance-metadata.html">Instance Metadata and User Data</a> in the <i>Amazon Elastic Compute Cloud User Guide</i>.</p>
        pub fn set_metadata_options(mut self, input: std::option::Option<crate::model::LaunchTemplateInstanceMetadataOptions>) -> Self {
            self.metadata_options = input;
            self
        }
        /// Consumes the builder and constructs a [`ResponseLaunchTemplateData`](crate::model::ResponseLaunchTemplateData)
        pub fn build(self) -> crate::model::ResponseLaunchTemplateData {
            crate::model::ResponseLaunchTemplateData {
                kernel_id: self.kernel_id,
                ebs_optimized: self.ebs_optimized,
                iam_instance_profile: self.iam_instance_profile,
                block_device_mappings: self.block_device_mappings,
                network_interfaces: self.network_interfaces,
                image_id: self.image_id,
                instance_type: self.instance_type,
                key_name: self.key_name,
                monitoring: self.monitoring,
                placement: self.placement,
                ram_disk_id: self.ram_disk_id,
                disable_api_termination: self.disable_api_termination,
                instance_initiated_shutdown_behavior: self.instance_initiated_shutdown_behavior,
                user_data: self.user_data,
                tag_specifications: self.tag_specifications,
                elastic_gpu_specifications: self.elastic_gpu_specifications,
                elastic_inference_accelerators: self.elastic_inference_accelerators,
                security_group_ids: self.security_group_ids,
                security_groups: self.security_groups,
                instance_market_options: self.instance_market_options,
                credit_specification: self.credit_specification,
                cpu_options: self.cpu_options,
                capacity_reservation_specification: self.capacity_reservation_specification,
                license_specifications: self.license_specifications,
                hibernation_options: self.hibernation_options,
                metadata_options: self.metadata_options,
            }
        }
    }
}
impl ResponseLaunchTemplateData {
    /// Creates a new builder-style object to manufacture [`ResponseLaunchTemplateData`](crate::model::ResponseLaunchTemplateData)
    pub fn builder() -> crate::model::response_launch_template_data::Builder {
        crate::model::response_launch_template_data::Builder::default()
    }
}
