/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An AWS region name such as `us-east-1`.
///
/// The EC2 endpoint is derived from it, and it travels with each built operation in the
/// property bag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // usually static, owned when read from the environment
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Something that can name a [`Region`]: a region itself, an optional region, a static string,
/// or a [`ChainProvider`] of those.
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl<'a> ProvideRegion for &'a Region {
    fn region(&self) -> Option<Region> {
        Some((*self).clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

impl ProvideRegion for &'static str {
    fn region(&self) -> Option<Region> {
        Some(Region::from_static(self))
    }
}

/// Tries each provider in order and returns the first region found.
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, ProvideRegion, Region};
/// use aws_types::os_shim_internal::Env;
/// // check the `CUSTOM_REGION` environment variable, then fall back to us-east-2
/// let env = Env::from_slice(&[]);
/// let provider = ChainProvider::first_try(env.get("CUSTOM_REGION").ok().map(Region::new))
///     .or_else(Region::new("us-east-2"));
/// assert_eq!(provider.region(), Some(Region::new("us-east-2")));
/// ```
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }

    pub fn or_default_provider(mut self) -> Self {
        self.providers.push(Box::new(default_provider()));
        self
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> Option<Region> {
        self.providers.iter().find_map(|provider| provider.region())
    }
}

/// Region provider used when none is configured: the process environment.
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Load a region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn new_with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = self
            .env
            .get("AWS_REGION")
            .or_else(|_| self.env.get("AWS_DEFAULT_REGION"))
            .map(Region::new)
            .ok();
        if region.is_none() {
            tracing::debug!("no region found in AWS_REGION or AWS_DEFAULT_REGION");
        }
        region
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{ChainProvider, EnvironmentProvider, ProvideRegion, Region};

    fn env_provider(vars: &[(&str, &str)]) -> EnvironmentProvider {
        EnvironmentProvider::new_with_env(Env::from_slice(vars))
    }

    #[test]
    fn load_from_env() {
        let provider = env_provider(&[("AWS_REGION", "us-east-1")]);
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));
    }

    #[test]
    fn aws_region_takes_precedence() {
        let provider = env_provider(&[
            ("AWS_REGION", "us-east-1"),
            ("AWS_DEFAULT_REGION", "us-east-2"),
        ]);
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let provider = env_provider(&[("AWS_DEFAULT_REGION", "us-east-2")]);
        assert_eq!(provider.region(), Some(Region::new("us-east-2")));
    }

    #[test]
    fn no_region() {
        assert_eq!(env_provider(&[]).region(), None);
    }

    #[test]
    fn chain_uses_first_match() {
        let chain = ChainProvider::first_try(None::<Region>)
            .or_else(env_provider(&[("AWS_REGION", "ap-south-1")]))
            .or_else("us-west-2");
        assert_eq!(chain.region(), Some(Region::from_static("ap-south-1")));
    }

    #[test]
    fn region_display() {
        assert_eq!(Region::from_static("cn-north-1").to_string(), "cn-north-1");
        assert_eq!(Region::new(String::from("eu-west-1")).as_ref(), "eu-west-1");
    }
}
