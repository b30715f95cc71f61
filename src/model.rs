use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use strum::{Display, EnumIter, EnumString, FromRepr};

use crate::RouteError;

/// Stable position of a node in the network, assigned at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Accumulated cost of a path under a single criterion.
///
/// Additions saturate at [`Cost::INFINITY`], which is never reported as the cost of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Self = Self(0);
    pub const INFINITY: Self = Self(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub const fn is_infinite(&self) -> bool {
        self.0 == u64::MAX
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Add<u32> for Cost {
    type Output = Self;
    fn add(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_add(u64::from(rhs)))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, cost| acc + cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weights of a single undirected route between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeWeight {
    pub distance: u32,
    pub fare: u32,
    pub time: u32,
}

impl EdgeWeight {
    pub const fn new(distance: u32, fare: u32, time: u32) -> Self {
        Self {
            distance,
            fare,
            time,
        }
    }

    /// Gets the only weight field considered when optimizing for the given criterion.
    pub const fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Fare => self.fare,
            Criterion::Time => self.time,
        }
    }
}

/// The weight dimension a shortest path query optimizes.
///
/// The discriminants are the numeric selectors travellers pick from:
/// 1 for distance, 2 for fare and 3 for time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Criterion {
    /// Shortest distance.
    Distance = 1,
    /// Smallest fare.
    Fare = 2,
    /// Shortest time.
    Time = 3,
}

impl TryFrom<u8> for Criterion {
    type Error = RouteError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        Self::from_repr(selector).ok_or(RouteError::InvalidCriterion(selector))
    }
}

impl Criterion {
    /// Parses a criterion from its name, case insensitive.
    pub fn parse(name: &str) -> Result<Self, RouteError> {
        name.trim()
            .parse()
            .map_err(|_| RouteError::UnknownCriterion(name.to_owned()))
    }
}
