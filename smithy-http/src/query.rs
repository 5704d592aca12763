/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into query strings and form bodies.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Everything except the RFC-3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`)
const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

#[cfg(test)]
mod test {
    use crate::query::fmt_string;
    use proptest::prelude::*;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;+").as_str(), "%26%3D%3B%2B");
        assert_eq!(fmt_string("ami-0abc.123_x~").as_str(), "ami-0abc.123_x~");
    }

    proptest! {
        #[test]
        fn encoded_strings_have_no_separators(s in any::<String>()) {
            let encoded = fmt_string(&s);
            prop_assert!(!encoded.contains('&'));
            prop_assert!(!encoded.contains('='));
            prop_assert!(encoded.is_ascii());
        }
    }
}
