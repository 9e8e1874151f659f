//! Platform selection
//!
//! Resolves the three independent filter lists against the registry
//! universe. Selection runs in three stages:
//!
//! 1. Start from the full universe.
//! 2. Keep platforms whose OS and Arch are both allowed by the
//!    independent `--os` and `--arch` lists.
//! 3. Apply `--osarch` pair overrides: positive pairs are added back
//!    even if stage 2 excluded them, negated pairs always win and
//!    remove the platform.
//!
//! The result iterates in the universe's canonical order, so identical
//! inputs always produce identical output.

use std::collections::HashSet;

use crate::core::filter::{allowed_values, PlatformFilter};
use crate::core::platform::Platform;

/// Select the platforms to build for.
pub fn select_platforms(filter: &PlatformFilter, universe: &[Platform]) -> Vec<Platform> {
    let os_values = unique_values(universe.iter().map(|p| p.os.clone()));
    let arch_values = unique_values(universe.iter().map(|p| p.arch.clone()));

    let allowed_os = allowed_values(&filter.os, &os_values);
    let allowed_arch = allowed_values(&filter.arch, &arch_values);

    let mut included: HashSet<&Platform> = universe
        .iter()
        .filter(|p| allowed_os.contains(&p.os) && allowed_arch.contains(&p.arch))
        .collect();

    for pair in filter.pairs.iter().filter(|p| !p.negate) {
        match universe.iter().find(|p| **p == pair.platform) {
            Some(platform) => {
                included.insert(platform);
            }
            None => {
                tracing::warn!(
                    "requested pair {} is not supported by this toolchain, skipping",
                    pair.platform
                );
            }
        }
    }

    let removed: HashSet<&Platform> = filter
        .pairs
        .iter()
        .filter(|p| p.negate)
        .map(|p| &p.platform)
        .collect();

    // OS-major walk in canonical order, deduplicated
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for os in &os_values {
        for platform in universe.iter().filter(|p| &p.os == os) {
            if included.contains(platform) && !removed.contains(platform) && seen.insert(platform) {
                selected.push(platform.clone());
            }
        }
    }
    selected
}

fn unique_values(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<Platform> {
        vec![
            Platform::new("linux", "amd64"),
            Platform::new("linux", "arm"),
            Platform::new("darwin", "amd64"),
        ]
    }

    fn filter(os: &[&str], arch: &[&str], osarch: &[&str]) -> PlatformFilter {
        let to_vec = |v: &[&str]| v.iter().map(ToString::to_string).collect::<Vec<_>>();
        PlatformFilter::parse(&to_vec(os), &to_vec(arch), &to_vec(osarch)).unwrap()
    }

    #[test]
    fn empty_filter_selects_the_whole_universe() {
        assert_eq!(select_platforms(&PlatformFilter::default(), &universe()), universe());
    }

    #[test]
    fn negated_pair_removes_from_unfiltered_universe() {
        // spec'd behavior for `-osarch '!darwin/amd64'` with no other filters
        let selected = select_platforms(&filter(&[], &[], &["!darwin/amd64"]), &universe());
        assert_eq!(
            selected,
            vec![Platform::new("linux", "amd64"), Platform::new("linux", "arm")]
        );
    }

    #[test]
    fn positive_pair_overrides_os_filter() {
        let selected = select_platforms(&filter(&["linux"], &[], &["darwin/amd64"]), &universe());
        assert_eq!(
            selected,
            vec![
                Platform::new("linux", "amd64"),
                Platform::new("linux", "arm"),
                Platform::new("darwin", "amd64"),
            ]
        );
    }

    #[test]
    fn positive_os_list_is_exact() {
        let selected = select_platforms(&filter(&["darwin"], &[], &[]), &universe());
        assert_eq!(selected, vec![Platform::new("darwin", "amd64")]);
    }

    #[test]
    fn os_and_arch_filters_are_independent() {
        let selected = select_platforms(&filter(&["linux"], &["amd64"], &[]), &universe());
        assert_eq!(selected, vec![Platform::new("linux", "amd64")]);
    }

    #[test]
    fn negated_os_subtracts_from_universe() {
        let selected = select_platforms(&filter(&["!linux"], &[], &[]), &universe());
        assert_eq!(selected, vec![Platform::new("darwin", "amd64")]);
    }

    #[test]
    fn pair_negation_beats_pair_addition() {
        let selected = select_platforms(
            &filter(&[], &[], &["darwin/amd64", "!darwin/amd64"]),
            &universe(),
        );
        assert!(!selected.contains(&Platform::new("darwin", "amd64")));
    }

    #[test]
    fn pair_negation_beats_stage_two_inclusion() {
        let selected = select_platforms(&filter(&["linux"], &[], &["!linux/arm"]), &universe());
        assert_eq!(selected, vec![Platform::new("linux", "amd64")]);
    }

    #[test]
    fn unknown_positive_pair_is_a_no_op() {
        let selected = select_platforms(&filter(&[], &[], &["plan9/sparc"]), &universe());
        assert_eq!(selected, universe());
    }

    #[test]
    fn filters_can_resolve_to_nothing() {
        let selected = select_platforms(&filter(&["freebsd"], &[], &[]), &universe());
        assert!(selected.is_empty());
    }
}
