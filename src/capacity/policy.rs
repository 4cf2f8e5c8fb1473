//! Selecting a capacity policy at construction time.
//!
//! [`CapacityPolicy`] is the configuration value a sequence stores or parses
//! from its settings; [`PolicyCapacityStrategy`] is the closed set of installed
//! strategies it turns into.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::forwarding::{DoublingCapacityStrategy, MinimalCapacityStrategy};
use super::{HeadCapacityStrategy, InitialCapacityStrategy, SplitCapacityStrategy, TailCapacityStrategy};
use crate::error::Result;
use crate::range::IndexRange;
use crate::storage::LinearIndexStorage;

/// How a storage grows when an operation runs out of room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CapacityPolicy {
    /// Allocate exactly what the operation needs.
    #[default]
    Minimal,
    /// Allocate at least the current capacity again.
    Doubling,
}

impl CapacityPolicy {
    pub fn strategy(self) -> PolicyCapacityStrategy {
        match self {
            CapacityPolicy::Minimal => PolicyCapacityStrategy::Minimal(MinimalCapacityStrategy::default()),
            CapacityPolicy::Doubling => PolicyCapacityStrategy::Doubling(DoublingCapacityStrategy::default()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CapacityPolicy::Minimal => "minimal",
            CapacityPolicy::Doubling => "doubling",
        }
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A policy name that matches no [`CapacityPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown capacity policy `{0}` (expected `minimal` or `doubling`)")]
pub struct UnknownPolicyError(pub String);

impl FromStr for CapacityPolicy {
    type Err = UnknownPolicyError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("minimal") {
            return Ok(CapacityPolicy::Minimal);
        }
        if name.eq_ignore_ascii_case("doubling") {
            return Ok(CapacityPolicy::Doubling);
        }
        Err(UnknownPolicyError(name.to_string()))
    }
}

/// The strategy installed for a [`CapacityPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolicyCapacityStrategy {
    Minimal(MinimalCapacityStrategy),
    Doubling(DoublingCapacityStrategy),
}

impl PolicyCapacityStrategy {
    pub fn policy(&self) -> CapacityPolicy {
        match self {
            PolicyCapacityStrategy::Minimal(_) => CapacityPolicy::Minimal,
            PolicyCapacityStrategy::Doubling(_) => CapacityPolicy::Doubling,
        }
    }
}

impl Default for PolicyCapacityStrategy {
    fn default() -> Self {
        CapacityPolicy::default().strategy()
    }
}

impl From<CapacityPolicy> for PolicyCapacityStrategy {
    fn from(policy: CapacityPolicy) -> Self {
        policy.strategy()
    }
}

impl InitialCapacityStrategy for PolicyCapacityStrategy {
    fn initialize<S>(&self, storage: &mut S, range: &IndexRange) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized,
    {
        match self {
            PolicyCapacityStrategy::Minimal(strategy) => strategy.initialize(storage, range),
            PolicyCapacityStrategy::Doubling(strategy) => strategy.initialize(storage, range),
        }
    }
}

impl HeadCapacityStrategy for PolicyCapacityStrategy {
    fn ensure_head_capacity<S>(&self, storage: &mut S, range: &mut IndexRange, head_capacity: isize) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized,
    {
        match self {
            PolicyCapacityStrategy::Minimal(strategy) => strategy.ensure_head_capacity(storage, range, head_capacity),
            PolicyCapacityStrategy::Doubling(strategy) => strategy.ensure_head_capacity(storage, range, head_capacity),
        }
    }
}

impl TailCapacityStrategy for PolicyCapacityStrategy {
    fn ensure_tail_capacity<S>(&self, storage: &mut S, range: &mut IndexRange, tail_capacity: isize) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized,
    {
        match self {
            PolicyCapacityStrategy::Minimal(strategy) => strategy.ensure_tail_capacity(storage, range, tail_capacity),
            PolicyCapacityStrategy::Doubling(strategy) => strategy.ensure_tail_capacity(storage, range, tail_capacity),
        }
    }
}

impl SplitCapacityStrategy for PolicyCapacityStrategy {
    fn ensure_split_capacity<S>(
        &self,
        storage: &mut S,
        range: &mut IndexRange,
        split_index: isize,
        split_capacity: isize,
    ) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized,
    {
        match self {
            PolicyCapacityStrategy::Minimal(strategy) => {
                strategy.ensure_split_capacity(storage, range, split_index, split_capacity)
            }
            PolicyCapacityStrategy::Doubling(strategy) => {
                strategy.ensure_split_capacity(storage, range, split_index, split_capacity)
            }
        }
    }
}
