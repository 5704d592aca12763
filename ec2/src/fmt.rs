/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

/// Debug output for models: `{Name: value, Other: value}`.
///
/// Members that are `None` are skipped entirely, so the output only names the members that were
/// set. Enum members print their wire value (`Tenancy: dedicated`) rather than the variant name.
pub(crate) struct SetFields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> SetFields<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        SetFields {
            f,
            result,
            has_fields: false,
        }
    }

    pub(crate) fn field<T: fmt::Debug>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                let separator = if self.has_fields { ", " } else { "" };
                self.result = write!(self.f, "{}{}: {:?}", separator, name, value);
            }
            self.has_fields = true;
        }
        self
    }

    pub(crate) fn enum_field<T: AsRef<str>>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        self.field(name, &value.as_ref().map(WireValue))
    }

    pub(crate) fn enum_list_field<T: AsRef<str>>(
        &mut self,
        name: &str,
        value: &Option<Vec<T>>,
    ) -> &mut Self {
        let values = value
            .as_ref()
            .map(|items| items.iter().map(WireValue).collect::<Vec<_>>());
        self.field(name, &values)
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

struct WireValue<'a, T>(&'a T);

impl<T: AsRef<str>> fmt::Debug for WireValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::SetFields;
    use crate::model::{ArchitectureType, Tenancy};
    use std::fmt;

    struct Sample {
        first: Option<&'static str>,
        second: Option<i32>,
        third: Option<Vec<bool>>,
    }

    impl fmt::Debug for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = SetFields::new(f);
            formatter.field("First", &self.first);
            formatter.field("Second", &self.second);
            formatter.field("Third", &self.third);
            formatter.finish()
        }
    }

    #[test]
    fn only_set_fields_are_listed() {
        let sample = Sample {
            first: None,
            second: Some(5),
            third: Some(vec![]),
        };
        assert_eq!(format!("{:?}", sample), "{Second: 5, Third: []}");
    }

    #[test]
    fn empty() {
        let sample = Sample {
            first: None,
            second: None,
            third: None,
        };
        assert_eq!(format!("{:?}", sample), "{}");
    }

    #[test]
    fn no_trailing_separator() {
        let sample = Sample {
            first: Some("a"),
            second: None,
            third: None,
        };
        assert_eq!(format!("{:?}", sample), "{First: \"a\"}");
    }

    struct WithEnums {
        tenancy: Option<Tenancy>,
        architectures: Option<Vec<ArchitectureType>>,
    }

    impl fmt::Debug for WithEnums {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = SetFields::new(f);
            formatter.enum_field("Tenancy", &self.tenancy);
            formatter.enum_list_field("Architectures", &self.architectures);
            formatter.finish()
        }
    }

    #[test]
    fn enums_print_wire_values() {
        let sample = WithEnums {
            tenancy: Some(Tenancy::Dedicated),
            architectures: Some(vec![ArchitectureType::X8664, ArchitectureType::from("riscv")]),
        };
        assert_eq!(
            format!("{:?}", sample),
            "{Tenancy: dedicated, Architectures: [x86_64, riscv]}"
        );

        let unknown = WithEnums {
            tenancy: Some(Tenancy::from("shared")),
            architectures: None,
        };
        assert_eq!(format!("{:?}", unknown), "{Tenancy: shared}");
    }
}
