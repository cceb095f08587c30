//! The bounded set of cars selected for comparison.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::RecommendationId;

/// Errors from comparison-set mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("the comparison already holds {max} cars")]
    Full { max: usize },

    #[error("car {0} is already in the comparison")]
    AlreadyPresent(RecommendationId),

    #[error("car {0} is not in the comparison")]
    NotPresent(RecommendationId),

    #[error("no recommendation with id {0} exists in this session")]
    UnknownRecommendation(RecommendationId),
}

/// Ordered, capacity-bounded set of recommendation ids.
///
/// Order is insertion order, which is also column order in the derived
/// table. The capacity guard keeps the side-by-side view readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<RecommendationId>,
    max_size: usize,
}

impl ComparisonSet {
    /// Creates an empty set with the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            ids: Vec::new(),
            max_size,
        }
    }

    /// The selected ids in insertion order.
    pub fn ids(&self) -> &[RecommendationId] {
        &self.ids
    }

    /// Number of selected cars.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when the id is selected.
    pub fn contains(&self, id: &RecommendationId) -> bool {
        self.ids.contains(id)
    }

    /// Adds a car to the comparison.
    ///
    /// # Errors
    ///
    /// Fails when the set is at capacity or the id is already present.
    pub fn add(&mut self, id: RecommendationId) -> Result<(), ComparisonError> {
        if self.contains(&id) {
            return Err(ComparisonError::AlreadyPresent(id));
        }
        if self.ids.len() >= self.max_size {
            return Err(ComparisonError::Full { max: self.max_size });
        }
        self.ids.push(id);
        Ok(())
    }

    /// Removes a car from the comparison.
    pub fn remove(&mut self, id: &RecommendationId) -> Result<(), ComparisonError> {
        let pos = self
            .ids
            .iter()
            .position(|x| x == id)
            .ok_or(ComparisonError::NotPresent(*id))?;
        self.ids.remove(pos);
        Ok(())
    }

    /// Drops every selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut set = ComparisonSet::new(4);
        let a = RecommendationId::new();
        let b = RecommendationId::new();
        set.add(a).unwrap();
        set.add(b).unwrap();
        assert_eq!(set.ids(), &[a, b]);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut set = ComparisonSet::new(2);
        set.add(RecommendationId::new()).unwrap();
        set.add(RecommendationId::new()).unwrap();
        let err = set.add(RecommendationId::new()).unwrap_err();
        assert_eq!(err, ComparisonError::Full { max: 2 });
    }

    #[test]
    fn double_add_is_rejected() {
        let mut set = ComparisonSet::new(4);
        let id = RecommendationId::new();
        set.add(id).unwrap();
        assert!(matches!(
            set.add(id),
            Err(ComparisonError::AlreadyPresent(_))
        ));
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut set = ComparisonSet::new(4);
        assert!(matches!(
            set.remove(&RecommendationId::new()),
            Err(ComparisonError::NotPresent(_))
        ));
    }
}
