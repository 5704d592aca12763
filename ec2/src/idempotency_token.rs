/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::sync::Mutex;

/// Lays out random bits as a version 4 UUID string.
///
/// Nibbles are consumed from the low end of `random` and written left to right. The version digit
/// does not consume one, and the variant digit has its high bit forced on.
pub(crate) fn uuid_v4(random: u128) -> String {
    let mut remaining = random;
    let mut next_nibble = || {
        let nibble = (remaining & 0xf) as u32;
        remaining >>= 4;
        nibble
    };
    (0..36)
        .map(|position| match position {
            8 | 13 | 18 | 23 => '-',
            14 => '4',
            19 => hex_digit(next_nibble() | 0b1000),
            _ => hex_digit(next_nibble()),
        })
        .collect()
}

fn hex_digit(nibble: u32) -> char {
    std::char::from_digit(nibble, 16).unwrap_or('0')
}

/// Generates the `ClientToken` of operations that accept one when the caller leaves it unset.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// Random UUID v4 tokens.
pub fn default_provider() -> impl MakeIdempotencyToken {
    Mutex::new(fastrand::Rng::new())
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        let input: u128 = self
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .u128(..);
        uuid_v4(input)
    }
}

/// A fixed token, for tests and for callers that manage their own tokens.
impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod test {
    use crate::idempotency_token::{default_provider, uuid_v4, MakeIdempotencyToken};
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn uuid_from_known_bits() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(0xbc4ff2), "2ff4cb00-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-ffff-ffffffffffff");
    }

    #[test]
    fn random_tokens_differ() {
        let provider = default_provider();
        let first = provider.make_idempotency_token();
        assert_eq!(first.len(), 36);
        assert_ne!(first, provider.make_idempotency_token());
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let a = Mutex::new(fastrand::Rng::with_seed(123));
        let b = Mutex::new(fastrand::Rng::with_seed(123));
        assert_eq!(a.make_idempotency_token(), b.make_idempotency_token());
    }

    #[test]
    fn static_token() {
        let provider = "client-token-1";
        assert_eq!(provider.make_idempotency_token(), "client-token-1");
        assert_eq!(provider.make_idempotency_token(), "client-token-1");
    }

    proptest! {
        #[test]
        fn tokens_are_well_formed_v4_uuids(random in any::<u128>()) {
            let uuid = uuid_v4(random);
            let groups: Vec<&str> = uuid.split('-').collect();
            prop_assert_eq!(
                groups.iter().map(|group| group.len()).collect::<Vec<_>>(),
                vec![8, 4, 4, 4, 12]
            );
            prop_assert!(uuid
                .chars()
                .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
            prop_assert!(groups[2].starts_with('4'));
            prop_assert!(matches!(groups[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b'));
        }
    }
}
