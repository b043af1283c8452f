//! Focus allocation domain model.
//!
//! Users split a fixed budget of focus points across four life areas. Each
//! area feeds a fixed set of values through its weight map.

use serde::{Deserialize, Serialize};

use super::value::Value;
use crate::domain::errors::{DomainError, DomainResult};

/// Points every allocation must distribute.
pub const ALLOCATION_BUDGET: u32 = 12;

/// Multiplier applied to category weights when scoring an allocation.
pub const ALLOCATION_WEIGHT_SCALE: u32 = 4;

/// Life-area category.
///
/// Declaration order doubles as the tie-break priority when two categories
/// hold the same number of points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AllocationCategory {
    Career,
    Relationships,
    Health,
    Adventure,
}

impl AllocationCategory {
    /// All categories in priority order.
    pub const ALL: [Self; 4] = [
        Self::Career,
        Self::Relationships,
        Self::Health,
        Self::Adventure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Relationships => "Relationships",
            Self::Health => "Health",
            Self::Adventure => "Adventure",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "career" => Some(Self::Career),
            "relationships" => Some(Self::Relationships),
            "health" => Some(Self::Health),
            "adventure" => Some(Self::Adventure),
            _ => None,
        }
    }

    /// Position in priority order.
    pub const fn index(&self) -> usize {
        match self {
            Self::Career => 0,
            Self::Relationships => 1,
            Self::Health => 2,
            Self::Adventure => 3,
        }
    }

    /// Values fed by this category and their weights.
    pub fn weights(&self) -> &'static [(Value, u32)] {
        match self {
            Self::Career => &[(Value::Ambition, 2), (Value::Security, 1)],
            Self::Relationships => &[(Value::Loyalty, 2), (Value::Harmony, 1)],
            Self::Health => &[(Value::Security, 2), (Value::Compassion, 1)],
            Self::Adventure => &[(Value::Freedom, 3), (Value::Ambition, 1)],
        }
    }

    /// First character of every question id in this category's track.
    pub const fn id_prefix(&self) -> char {
        match self {
            Self::Career => 'c',
            Self::Relationships => 'r',
            Self::Health => 'h',
            Self::Adventure => 'a',
        }
    }

    pub const fn from_id_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'c' => Some(Self::Career),
            'r' => Some(Self::Relationships),
            'h' => Some(Self::Health),
            'a' => Some(Self::Adventure),
            _ => None,
        }
    }
}

impl std::fmt::Display for AllocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points assigned to each category.
///
/// Unknown category keys are ignored on deserialization, so they contribute
/// nothing to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Allocation {
    pub career: u32,
    pub relationships: u32,
    pub health: u32,
    pub adventure: u32,
}

impl Allocation {
    /// Build an allocation and check it spends exactly the budget.
    pub fn new(career: u32, relationships: u32, health: u32, adventure: u32) -> DomainResult<Self> {
        let allocation = Self::from_points(career, relationships, health, adventure);
        allocation.validate()?;
        Ok(allocation)
    }

    /// Build an allocation without checking the budget.
    pub const fn from_points(career: u32, relationships: u32, health: u32, adventure: u32) -> Self {
        Self {
            career,
            relationships,
            health,
            adventure,
        }
    }

    pub const fn points(&self, category: AllocationCategory) -> u32 {
        match category {
            AllocationCategory::Career => self.career,
            AllocationCategory::Relationships => self.relationships,
            AllocationCategory::Health => self.health,
            AllocationCategory::Adventure => self.adventure,
        }
    }

    /// `(category, points)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (AllocationCategory, u32)> + '_ {
        AllocationCategory::ALL
            .into_iter()
            .map(move |category| (category, self.points(category)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, points)| points).sum()
    }

    /// Every category within `[0, 12]` and the total equal to the budget.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some((category, points)) = self.iter().find(|(_, p)| *p > ALLOCATION_BUDGET) {
            return Err(DomainError::InvalidAllocation(format!(
                "{category} has {points} points, at most {ALLOCATION_BUDGET} allowed"
            )));
        }

        let total = self.total();
        if total != ALLOCATION_BUDGET {
            return Err(DomainError::InvalidAllocation(format!(
                "allocation spends {total} points, expected exactly {ALLOCATION_BUDGET}"
            )));
        }

        Ok(())
    }
}
