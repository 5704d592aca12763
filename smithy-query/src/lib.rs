/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Writers for the EC2 query protocol.
//!
//! Members are written as flat `name=value` parameters. Nested structures join member names with
//! `.`, and list entries are numbered from 1:
//!
//! ```rust
//! use smithy_query::{QueryParams, QueryWriter};
//!
//! let mut params = QueryParams::new();
//! let mut writer = QueryWriter::new(&mut params);
//! let mut filters = writer.prefix("Filter").start_list(true, None);
//! let mut filter = filters.entry();
//! filter.prefix("Name").string("instance-state-name");
//! let mut values = filter.prefix("Value").start_list(true, None);
//! values.entry().string("running");
//! values.finish();
//! filters.finish();
//! writer.finish();
//!
//! assert_eq!(params.get("Filter.1.Name"), Some("instance-state-name"));
//! assert_eq!(params.get("Filter.1.Value.1"), Some("running"));
//! ```

mod params;
mod request;

pub use params::QueryParams;
pub use request::QueryRequest;

use smithy_types::instant::{DateTimeFormatError, Format};
use smithy_types::primitive::encode_number;
use smithy_types::{Instant, Number};

/// Writes the top-level members of a request.
pub struct QueryWriter<'a> {
    params: &'a mut QueryParams,
}

impl<'a> QueryWriter<'a> {
    pub fn new(params: &'a mut QueryParams) -> Self {
        QueryWriter { params }
    }

    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.params, prefix.to_owned())
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes a single value, or a nested structure, under a parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    params: &'a mut QueryParams,
    prefix: String,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(params: &'a mut QueryParams, prefix: String) -> Self {
        QueryValueWriter { params, prefix }
    }

    /// Starts a nested member of this value, eg. `Placement` + `Tenancy` => `Placement.Tenancy`.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.params, format!("{}.{}", self.prefix, prefix))
    }

    /// Starts a list. Flat lists number their entries directly under the prefix
    /// (`Name.1`), other lists insert a member name (`Name.member.1`).
    pub fn start_list(self, flat: bool, member_override: Option<&str>) -> QueryListWriter<'a> {
        QueryListWriter {
            params: self.params,
            prefix: self.prefix,
            flat,
            member_name: member_override.unwrap_or("member").to_owned(),
            next_index: 1,
        }
    }

    pub fn boolean(self, value: bool) {
        self.string(if value { "true" } else { "false" });
    }

    pub fn string(self, value: &str) {
        self.params.insert(self.prefix, value);
    }

    pub fn number(self, value: Number) {
        let encoded = encode_number(value);
        self.string(&encoded);
    }

    pub fn instant(self, value: &Instant, format: Format) -> Result<(), DateTimeFormatError> {
        let formatted = value.fmt(format)?;
        self.string(&formatted);
        Ok(())
    }
}

/// Writes the entries of a list.
pub struct QueryListWriter<'a> {
    params: &'a mut QueryParams,
    prefix: String,
    flat: bool,
    member_name: String,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!("{}.{}.{}", self.prefix, self.member_name, self.next_index)
        };
        self.next_index += 1;
        QueryValueWriter::new(self.params, prefix)
    }

    /// Finishes the list. A list that had no entries is written as its bare name with an empty
    /// value so that an explicitly empty list is not confused with an absent one.
    pub fn finish(self) {
        if self.next_index == 1 {
            self.params.insert(self.prefix, "");
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{QueryParams, QueryWriter};
    use proptest::prelude::*;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn no_params() {
        let mut params = QueryParams::new();
        let writer = QueryWriter::new(&mut params);
        writer.finish();
        assert!(params.is_empty());
    }

    #[test]
    fn nested_structures_and_scalars() {
        let mut params = QueryParams::new();
        let mut writer = QueryWriter::new(&mut params);
        writer.prefix("MinCount").number(Number::NegInt(1));
        writer.prefix("EbsOptimized").boolean(true);
        let mut placement = writer.prefix("Placement");
        placement.prefix("Tenancy").string("dedicated");
        placement.prefix("PartitionNumber").number(Number::NegInt(3));
        writer
            .prefix("EndDate")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime)
            .expect("valid date");
        writer.finish();

        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![
                ("MinCount", "1"),
                ("EbsOptimized", "true"),
                ("Placement.Tenancy", "dedicated"),
                ("Placement.PartitionNumber", "3"),
                ("EndDate", "2019-12-16T23:48:18Z"),
            ]
        );
    }

    #[test]
    fn flat_and_member_lists() {
        let mut params = QueryParams::new();
        let mut writer = QueryWriter::new(&mut params);
        let mut ids = writer.prefix("InstanceId").start_list(true, None);
        ids.entry().string("i-1");
        ids.entry().string("i-2");
        ids.finish();
        let mut wrapped = writer.prefix("Names").start_list(false, None);
        wrapped.entry().string("a");
        wrapped.finish();
        let mut renamed = writer.prefix("Items").start_list(false, Some("item"));
        renamed.entry().string("b");
        renamed.finish();
        writer.finish();

        assert_eq!(params.get("InstanceId.1"), Some("i-1"));
        assert_eq!(params.get("InstanceId.2"), Some("i-2"));
        assert_eq!(params.get("Names.member.1"), Some("a"));
        assert_eq!(params.get("Items.item.1"), Some("b"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn empty_list_is_written_as_empty_value() {
        let mut params = QueryParams::new();
        let mut writer = QueryWriter::new(&mut params);
        writer.prefix("GroupId").start_list(true, None).finish();
        writer.finish();
        assert_eq!(params.get("GroupId"), Some(""));
        assert_eq!(params.to_form_body(), "GroupId=");
    }

    #[test]
    fn out_of_range_instant_is_an_error() {
        let mut params = QueryParams::new();
        let mut writer = QueryWriter::new(&mut params);
        let result = writer
            .prefix("ValidUntil")
            .instant(&Instant::from_secs_and_nanos(0, 2_000_000_000), Format::DateTime);
        assert!(result.is_err());
        writer.finish();
        assert!(params.is_empty());
    }

    proptest! {
        #[test]
        fn list_entries_are_numbered_from_one(values in proptest::collection::vec("[a-z0-9 /-]{0,12}", 1..20)) {
            let mut params = QueryParams::new();
            let mut writer = QueryWriter::new(&mut params);
            let mut list = writer.prefix("Value").start_list(true, None);
            for value in &values {
                list.entry().string(value);
            }
            list.finish();
            writer.finish();

            prop_assert_eq!(params.len(), values.len());
            for (idx, value) in values.iter().enumerate() {
                let name = format!("Value.{}", idx + 1);
                prop_assert_eq!(params.get(&name), Some(value.as_str()));
            }
            prop_assert!(!params.contains("Value"));
        }
    }
}
