// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Snapshot support: persist subset membership independently of the
//! element type, rebind it to a live universe on load.
//!
//! A snapshot records member positions plus the universe size they were
//! taken against. Elements themselves are not serialized; the universe a
//! snapshot is restored into supplies them, and only the size is checked.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetError};
use crate::subset::Subset;
use crate::universe::Universe;

/// Serializable membership state of one subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetSnapshot {
    /// Size of the universe the snapshot was taken against.
    pub universe_size: usize,
    /// Member positions, increasing.
    pub positions: Vec<usize>,
}

impl SubsetSnapshot {
    /// Serialize the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SetError::SerializationError(e.to_string()))
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SetError::DeserializationError(e.to_string()))
    }
}

impl<E> Subset<E> {
    /// Capture the subset's membership as a snapshot.
    pub fn snapshot(&self) -> SubsetSnapshot {
        #[cfg(feature = "profiling")]
        let _span = tracing::info_span!("subset.snapshot", size = self.universe_size()).entered();

        SubsetSnapshot {
            universe_size: self.universe_size(),
            positions: self.positions().collect(),
        }
    }

    /// Rebuild a subset from a snapshot, bound to `universe`.
    ///
    /// Fails with [`SetError::SizeMismatch`] when the universe's size
    /// differs from the size the snapshot was taken against, and with
    /// [`SetError::OutOfRange`] when a recorded position does not fit the
    /// universe.
    pub fn from_snapshot(universe: &Universe<E>, snapshot: &SubsetSnapshot) -> Result<Subset<E>> {
        #[cfg(feature = "profiling")]
        let _span = tracing::info_span!(
            "subset.from_snapshot",
            positions = snapshot.positions.len()
        )
        .entered();

        if snapshot.universe_size != universe.len() {
            return Err(SetError::SizeMismatch {
                expected: snapshot.universe_size,
                found: universe.len(),
            });
        }
        Subset::from_positions(universe.clone(), snapshot.positions.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrip() {
        let universe = Universe::new(["a", "b", "c", "d", "e"]);
        let subset = universe.subset_from([1, 3]).unwrap();

        let json = subset.snapshot().to_json().unwrap();
        let snapshot = SubsetSnapshot::from_json(&json).unwrap();
        let restored = Subset::from_snapshot(&universe, &snapshot).unwrap();

        assert_eq!(restored, subset);
    }

    #[test]
    fn test_snapshot_restores_into_another_instance() {
        let first = Universe::new(["a", "b", "c"]);
        let second = Universe::new(["a", "b", "c"]);
        let snapshot = first.subset_from([0, 2]).unwrap().snapshot();

        // Snapshots carry no universe identity, only a size to check.
        let restored = Subset::from_snapshot(&second, &snapshot).unwrap();
        assert_eq!(restored.positions().collect::<Vec<_>>(), vec![0, 2]);
        assert!(Universe::ptr_eq(restored.universe(), &second));
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let small = Universe::new(["a", "b"]);
        let snapshot = SubsetSnapshot {
            universe_size: 5,
            positions: vec![1],
        };

        assert_eq!(
            Subset::from_snapshot(&small, &snapshot),
            Err(SetError::SizeMismatch {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn test_corrupt_positions_are_rejected() {
        let universe = Universe::new(["a", "b", "c"]);
        let snapshot = SubsetSnapshot {
            universe_size: 3,
            positions: vec![0, 7],
        };

        assert_eq!(
            Subset::from_snapshot(&universe, &snapshot),
            Err(SetError::OutOfRange {
                position: 7,
                size: 3
            })
        );
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = SubsetSnapshot::from_json("not json").unwrap_err();
        assert!(matches!(err, SetError::DeserializationError(_)));
    }
}
