//! Resources: the three currencies plants are grown with.
//!
//! ## Resource
//!
//! Closed set of resource kinds: water, light, compost.
//!
//! ## ResourcePool
//!
//! A player's bounded resource counts. Every mutation keeps each count in
//! `[0, max]`: gains saturate at the configured maximum, and spending is
//! all-or-nothing - a cost that cannot be fully paid leaves the pool
//! untouched.
//!
//! ## ResourceCost
//!
//! A possibly-empty list of (resource, amount) pairs. Plants with an empty
//! growth cost can never be grown; they only score their base points at
//! placement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::engine::error::GameError;

/// A resource kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Water,
    Light,
    Compost,
}

impl Resource {
    /// All resource kinds, in a fixed order.
    pub const ALL: [Resource; 3] = [Resource::Water, Resource::Light, Resource::Compost];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Light => "light",
            Resource::Compost => "compost",
        };
        write!(f, "{name}")
    }
}

/// A resource cost: zero or more (resource, amount) pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost(SmallVec<[(Resource, u8); 3]>);

impl ResourceCost {
    /// An empty cost.
    #[must_use]
    pub fn free() -> Self {
        Self(SmallVec::new())
    }

    /// Build a cost from (resource, amount) pairs.
    #[must_use]
    pub fn of(parts: &[(Resource, u8)]) -> Self {
        Self(parts.iter().copied().filter(|&(_, n)| n > 0).collect())
    }

    /// True if this cost has no components.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the cost components.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u8)> + '_ {
        self.0.iter().copied()
    }
}

/// A player's bounded resource counts.
///
/// Counts never leave `[0, max]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    water: u8,
    light: u8,
    compost: u8,
    max: u8,
}

impl ResourcePool {
    /// Create a pool with every count set to `initial`, capped at `max`.
    #[must_use]
    pub fn new(initial: u8, max: u8) -> Self {
        let initial = initial.min(max);
        Self {
            water: initial,
            light: initial,
            compost: initial,
            max,
        }
    }

    /// Get the count for a resource.
    #[must_use]
    pub fn get(&self, resource: Resource) -> u8 {
        match resource {
            Resource::Water => self.water,
            Resource::Light => self.light,
            Resource::Compost => self.compost,
        }
    }

    /// The configured per-resource maximum.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    fn slot(&mut self, resource: Resource) -> &mut u8 {
        match resource {
            Resource::Water => &mut self.water,
            Resource::Light => &mut self.light,
            Resource::Compost => &mut self.compost,
        }
    }

    /// Gain `amount` of a resource, saturating at the maximum.
    pub fn gain(&mut self, resource: Resource, amount: u8) {
        let max = self.max;
        let slot = self.slot(resource);
        *slot = slot.saturating_add(amount).min(max);
    }

    /// Check whether every component of `cost` can be paid.
    #[must_use]
    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        cost.iter().all(|(resource, amount)| self.get(resource) >= amount)
    }

    /// Pay a cost, or fail without mutating the pool.
    ///
    /// Returns the first short resource on failure.
    pub fn spend(&mut self, cost: &ResourceCost) -> Result<(), GameError> {
        for (resource, needed) in cost.iter() {
            let available = self.get(resource);
            if available < needed {
                return Err(GameError::InsufficientResources {
                    resource,
                    needed,
                    available,
                });
            }
        }
        for (resource, amount) in cost.iter() {
            *self.slot(resource) -= amount;
        }
        Ok(())
    }
}
