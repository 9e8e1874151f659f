//! Platform registry
//!
//! The statically known universe of (OS, Arch) pairs each Go release
//! supports. Platform support is cumulative: each tier lists the pairs
//! a release added or dropped relative to the previous one. A separate
//! denylist removes pairs the toolchain documents but cannot actually
//! produce working binaries for; entries with a fix version are
//! re-admitted once the toolchain reaches it.

use crate::core::platform::Platform;
use crate::core::version::GoVersion;

/// Platform changes introduced by one Go release
struct VersionTier {
    /// First (major, minor) release this tier applies to
    since: (u32, u32),
    /// Pairs added by this release
    added: &'static [(&'static str, &'static str)],
    /// Pairs dropped by this release
    removed: &'static [(&'static str, &'static str)],
}

/// A documented pair that does not produce working binaries
struct DenyEntry {
    os: &'static str,
    arch: &'static str,
    /// Release that fixed the pair, None if it never worked
    fixed_in: Option<(u32, u32)>,
}

const TIERS: &[VersionTier] = &[
    VersionTier {
        since: (1, 0),
        added: &[
            ("darwin", "386"),
            ("darwin", "amd64"),
            ("freebsd", "386"),
            ("freebsd", "amd64"),
            ("linux", "386"),
            ("linux", "amd64"),
            ("linux", "arm"),
            ("openbsd", "386"),
            ("openbsd", "amd64"),
            ("windows", "386"),
            ("windows", "amd64"),
        ],
        removed: &[],
    },
    VersionTier {
        since: (1, 1),
        added: &[
            ("freebsd", "arm"),
            ("netbsd", "386"),
            ("netbsd", "amd64"),
            ("netbsd", "arm"),
            ("plan9", "386"),
        ],
        removed: &[],
    },
    VersionTier {
        since: (1, 3),
        added: &[
            ("dragonfly", "386"),
            ("dragonfly", "amd64"),
            ("nacl", "386"),
            ("nacl", "arm"),
            ("solaris", "amd64"),
        ],
        removed: &[],
    },
    VersionTier {
        since: (1, 4),
        added: &[
            ("android", "arm"),
            ("nacl", "amd64p32"),
            ("plan9", "amd64"),
        ],
        removed: &[],
    },
    VersionTier {
        since: (1, 5),
        added: &[
            ("darwin", "arm"),
            ("darwin", "arm64"),
            ("linux", "arm64"),
            ("linux", "ppc64"),
            ("linux", "ppc64le"),
        ],
        removed: &[("dragonfly", "386")],
    },
    VersionTier {
        since: (1, 6),
        added: &[
            ("android", "386"),
            ("android", "amd64"),
            ("linux", "mips64"),
            ("linux", "mips64le"),
        ],
        removed: &[],
    },
    VersionTier {
        since: (1, 7),
        added: &[("linux", "s390x"), ("plan9", "arm")],
        removed: &[],
    },
    VersionTier {
        since: (1, 8),
        added: &[("linux", "mips"), ("linux", "mipsle")],
        removed: &[],
    },
    VersionTier {
        since: (1, 11),
        added: &[("js", "wasm")],
        removed: &[],
    },
    VersionTier {
        since: (1, 12),
        added: &[("aix", "ppc64"), ("windows", "arm")],
        removed: &[],
    },
    VersionTier {
        since: (1, 13),
        added: &[("illumos", "amd64")],
        removed: &[],
    },
    VersionTier {
        since: (1, 14),
        added: &[("freebsd", "arm64"), ("linux", "riscv64")],
        removed: &[
            ("nacl", "386"),
            ("nacl", "arm"),
            ("nacl", "amd64p32"),
        ],
    },
    VersionTier {
        since: (1, 15),
        added: &[],
        removed: &[("darwin", "386"), ("darwin", "arm")],
    },
    VersionTier {
        since: (1, 17),
        added: &[("windows", "arm64")],
        removed: &[],
    },
    VersionTier {
        since: (1, 19),
        added: &[("linux", "loong64")],
        removed: &[],
    },
];

const DENYLIST: &[DenyEntry] = &[
    // needs an external iOS toolchain, plain `go build` never links
    DenyEntry {
        os: "darwin",
        arch: "arm",
        fixed_in: None,
    },
    // needs the Android NDK
    DenyEntry {
        os: "android",
        arch: "arm",
        fixed_in: None,
    },
    // listed since 1.12 but the linker produced broken images until 1.13
    DenyEntry {
        os: "windows",
        arch: "arm",
        fixed_in: Some((1, 13)),
    },
    // internal linking was unusable before 1.16
    DenyEntry {
        os: "linux",
        arch: "riscv64",
        fixed_in: Some((1, 16)),
    },
];

/// Return every platform the given toolchain version supports.
///
/// Pure function; the output order is the registry's canonical order
/// and contains no duplicates.
pub fn supported_platforms(version: &GoVersion) -> Vec<Platform> {
    let release = version.release();
    let mut platforms: Vec<Platform> = Vec::new();

    for tier in TIERS {
        if release < tier.since {
            continue;
        }
        for &(os, arch) in tier.added {
            let platform = Platform::new(os, arch);
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        for &(os, arch) in tier.removed {
            platforms.retain(|p| !(p.os == os && p.arch == arch));
        }
    }

    for deny in DENYLIST {
        let still_broken = deny.fixed_in.map_or(true, |fixed| release < fixed);
        if still_broken {
            platforms.retain(|p| !(p.os == deny.os && p.arch == deny.arch));
        }
    }

    platforms
}
