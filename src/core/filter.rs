//! Filter token parsing
//!
//! The `--os`, `--arch`, and `--osarch` flags each take a
//! space-separated token list and may be repeated. A leading `!`
//! negates a token. The three lists are independent; how they combine
//! is decided in [`crate::core::selector`].

use std::collections::HashSet;

use crate::core::platform::Platform;
use crate::error::FilterError;

/// One bare or negated value in an `--os` or `--arch` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToken {
    /// The OS or Arch value
    pub value: String,
    /// True for `!value` tokens
    pub negate: bool,
}

impl FilterToken {
    /// Parse one raw token; `flag` names the list for error messages
    pub fn parse(raw: &str, flag: &str) -> Result<Self, FilterError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FilterError::EmptyToken {
                flag: flag.to_string(),
            });
        }
        match raw.strip_prefix('!') {
            Some("") => Err(FilterError::BareNegation {
                flag: flag.to_string(),
            }),
            Some(value) => Ok(Self {
                value: value.to_string(),
                negate: true,
            }),
            None => Ok(Self {
                value: raw.to_string(),
                negate: false,
            }),
        }
    }
}

/// One bare or negated `os/arch` pair in an `--osarch` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairToken {
    /// The named platform
    pub platform: Platform,
    /// True for `!os/arch` tokens
    pub negate: bool,
}

/// The three parsed filter lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFilter {
    /// Tokens from the `--os` flag
    pub os: Vec<FilterToken>,
    /// Tokens from the `--arch` flag
    pub arch: Vec<FilterToken>,
    /// Tokens from the `--osarch` flag
    pub pairs: Vec<PairToken>,
}

impl PlatformFilter {
    /// Parse the raw flag values into a filter.
    ///
    /// Fails on the first malformed token; nothing is selected or
    /// dispatched after a parse failure.
    pub fn parse(os: &[String], arch: &[String], osarch: &[String]) -> Result<Self, FilterError> {
        let os = split_tokens(os)
            .map(|t| FilterToken::parse(t, "os"))
            .collect::<Result<Vec<_>, _>>()?;
        let arch = split_tokens(arch)
            .map(|t| FilterToken::parse(t, "arch"))
            .collect::<Result<Vec<_>, _>>()?;
        let pairs = split_tokens(osarch)
            .map(|t| {
                let token = FilterToken::parse(t, "osarch")?;
                Ok(PairToken {
                    platform: Platform::parse(&token.value)?,
                    negate: token.negate,
                })
            })
            .collect::<Result<Vec<_>, FilterError>>()?;

        Ok(Self { os, arch, pairs })
    }
}

/// Resolve a token list into the set of allowed values.
///
/// A list with at least one non-negated token defines the allow-set
/// exactly (negated tokens are then ignored). A negated-only or empty
/// list allows the whole universe minus the negated values.
pub fn allowed_values(tokens: &[FilterToken], universe: &[String]) -> HashSet<String> {
    let includes: HashSet<String> = tokens
        .iter()
        .filter(|t| !t.negate)
        .map(|t| t.value.clone())
        .collect();
    if !includes.is_empty() {
        return includes;
    }

    let excludes: HashSet<&str> = tokens
        .iter()
        .filter(|t| t.negate)
        .map(|t| t.value.as_str())
        .collect();
    universe
        .iter()
        .filter(|v| !excludes.contains(v.as_str()))
        .cloned()
        .collect()
}

fn split_tokens(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().flat_map(|v| v.split_whitespace())
}
