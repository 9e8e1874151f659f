//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::filter::FilterToken;
    use crate::core::platform::Platform;

    /// Generate a plausible GOOS value
    pub fn os_value() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("linux".to_string()),
            Just("darwin".to_string()),
            Just("windows".to_string()),
            Just("freebsd".to_string()),
            Just("netbsd".to_string()),
            Just("plan9".to_string()),
        ]
    }

    /// Generate a plausible GOARCH value
    pub fn arch_value() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("amd64".to_string()),
            Just("386".to_string()),
            Just("arm".to_string()),
            Just("arm64".to_string()),
            Just("riscv64".to_string()),
        ]
    }

    /// Generate a platform from the plausible OS and Arch pools
    pub fn platform() -> impl Strategy<Value = Platform> {
        (os_value(), arch_value()).prop_map(|(os, arch)| Platform::new(os, arch))
    }

    /// Generate a small deduplicated platform universe
    pub fn universe() -> impl Strategy<Value = Vec<Platform>> {
        proptest::collection::hash_set(platform(), 1..12)
            .prop_map(|set| set.into_iter().collect())
    }

    /// Generate a bare or negated OS filter token
    pub fn os_token() -> impl Strategy<Value = FilterToken> {
        (os_value(), any::<bool>()).prop_map(|(value, negate)| FilterToken { value, negate })
    }

    /// Generate a bare or negated Arch filter token
    pub fn arch_token() -> impl Strategy<Value = FilterToken> {
        (arch_value(), any::<bool>()).prop_map(|(value, negate)| FilterToken { value, negate })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::filter::PlatformFilter;
    use crate::core::selector::select_platforms;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn selection_is_deterministic(
            universe in universe(),
            os in proptest::collection::vec(os_token(), 0..4),
            arch in proptest::collection::vec(arch_token(), 0..4),
        ) {
            let filter = PlatformFilter { os, arch, pairs: Vec::new() };
            let first = select_platforms(&filter, &universe);
            let second = select_platforms(&filter, &universe);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn selection_never_duplicates(
            universe in universe(),
            os in proptest::collection::vec(os_token(), 0..4),
        ) {
            let filter = PlatformFilter { os, arch: Vec::new(), pairs: Vec::new() };
            let selected = select_platforms(&filter, &universe);
            let unique: std::collections::HashSet<_> = selected.iter().cloned().collect();
            prop_assert_eq!(unique.len(), selected.len());
        }

        #[test]
        fn selection_is_a_subset_of_the_universe(
            universe in universe(),
            os in proptest::collection::vec(os_token(), 0..4),
            arch in proptest::collection::vec(arch_token(), 0..4),
        ) {
            let filter = PlatformFilter { os, arch, pairs: Vec::new() };
            for platform in select_platforms(&filter, &universe) {
                prop_assert!(universe.contains(&platform));
            }
        }

        #[test]
        fn positive_os_tokens_bound_the_result(
            universe in universe(),
            os in proptest::collection::vec(os_value(), 1..3),
        ) {
            let filter = PlatformFilter {
                os: os.iter().map(|value| crate::core::filter::FilterToken {
                    value: value.clone(),
                    negate: false,
                }).collect(),
                arch: Vec::new(),
                pairs: Vec::new(),
            };
            for platform in select_platforms(&filter, &universe) {
                prop_assert!(os.contains(&platform.os));
            }
        }
    }
}
