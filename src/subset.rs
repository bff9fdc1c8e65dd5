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

//! Subset: bit-vector set state and algebra, bound to one universe
//!
//! Positional operations on subsets are tolerant: an out-of-range
//! position is simply "not a member" and is reported through a bool or
//! the end cursor, never through an error. The algebra operations are the
//! strict exception: combining subsets of different universe instances
//! is a contract violation and fails fast.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::bits::BitVector;
use crate::error::{Result, SetError};
use crate::iter::{PositionIter, Positions};
use crate::universe::Universe;

/// A subset of one universe's positions, stored as a fixed-width bit
/// vector.
///
/// Subsets are created through their universe, mutated in place by
/// [`insert`]/[`remove`], and combined by the algebra operations, which
/// build new subsets and leave their operands untouched. Two subsets are
/// equal only when they are bound to the *same* universe instance and
/// hold identical bits.
///
/// # Examples
///
/// ```
/// use universe_set::Universe;
///
/// let letters = Universe::new(["a", "b", "c", "d", "e"]);
/// let mut subset = letters.empty_subset();
///
/// let (_, inserted) = subset.insert(1);
/// assert!(inserted);
/// subset.insert(3);
///
/// assert!(subset.contains(1));
/// assert_eq!(subset.len(), 2);
/// assert_eq!(subset.iter().copied().collect::<Vec<_>>(), vec!["b", "d"]);
/// ```
///
/// [`insert`]: Subset::insert
/// [`remove`]: Subset::remove
pub struct Subset<E> {
    universe: Universe<E>,
    bits: BitVector,
}

impl<E> Subset<E> {
    pub(crate) fn empty(universe: Universe<E>) -> Self {
        let bits = BitVector::new(universe.len());
        Self { universe, bits }
    }

    pub(crate) fn full(universe: Universe<E>) -> Self {
        let mut subset = Self::empty(universe);
        subset.bits.set_all();
        subset
    }

    pub(crate) fn from_parts(universe: Universe<E>, bits: BitVector) -> Self {
        debug_assert_eq!(bits.len(), universe.len());
        Self { universe, bits }
    }

    pub(crate) fn from_positions(
        universe: Universe<E>,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut subset = Self::empty(universe);
        for position in positions {
            if position >= subset.bits.len() {
                return Err(SetError::OutOfRange {
                    position,
                    size: subset.bits.len(),
                });
            }
            subset.bits.set(position);
        }
        Ok(subset)
    }

    /// The universe this subset is bound to.
    pub fn universe(&self) -> &Universe<E> {
        &self.universe
    }

    /// Size of the bound universe, which is also the subset's bit width.
    pub fn universe_size(&self) -> usize {
        self.bits.len()
    }

    /// Number of members, by population count over the bit words.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// True when the subset has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test. Tolerant: any position at or past
    /// [`universe_size`] is simply not a member.
    ///
    /// [`universe_size`]: Subset::universe_size
    pub fn contains(&self, position: usize) -> bool {
        self.bits.get(position)
    }

    /// Remove `position` from the subset.
    ///
    /// Returns `false` without mutating when the position is out of range
    /// or already absent.
    pub fn remove(&mut self, position: usize) -> bool {
        if !self.bits.get(position) {
            return false;
        }
        self.bits.clear(position);
        true
    }

    /// Remove all members.
    pub fn clear(&mut self) {
        self.bits.clear_all();
    }

    /// Iterator over member positions as plain indices, increasing.
    pub fn positions(&self) -> Positions<'_> {
        Positions::new(self.bits.ones())
    }

    pub(crate) fn next_member(&self, from: usize) -> Option<usize> {
        self.bits.next_set_bit(from)
    }

    fn check_same_universe(&self, other: &Subset<E>) -> Result<()> {
        if Universe::ptr_eq(&self.universe, &other.universe) {
            Ok(())
        } else {
            Err(SetError::MismatchedUniverse)
        }
    }

    /// Set union of `self` and `other`.
    ///
    /// Builds a new subset bound to `self`'s universe; operands are left
    /// untouched. Fails with [`SetError::MismatchedUniverse`] unless both
    /// operands are bound to the same universe instance.
    pub fn union(&self, other: &Subset<E>) -> Result<Subset<E>> {
        self.check_same_universe(other)?;
        Ok(Self::from_parts(
            self.universe.clone(),
            self.bits.union(&other.bits),
        ))
    }

    /// Set difference: members of `self` that are not in `other`.
    ///
    /// Fails with [`SetError::MismatchedUniverse`] on operands from
    /// different universe instances.
    pub fn difference(&self, other: &Subset<E>) -> Result<Subset<E>> {
        self.check_same_universe(other)?;
        Ok(Self::from_parts(
            self.universe.clone(),
            self.bits.difference(&other.bits),
        ))
    }

    /// Set intersection of `self` and `other`.
    ///
    /// Fails with [`SetError::MismatchedUniverse`] on operands from
    /// different universe instances.
    pub fn intersection(&self, other: &Subset<E>) -> Result<Subset<E>> {
        self.check_same_universe(other)?;
        Ok(Self::from_parts(
            self.universe.clone(),
            self.bits.intersection(&other.bits),
        ))
    }

    /// Symmetric difference: members of exactly one operand.
    ///
    /// Fails with [`SetError::MismatchedUniverse`] on operands from
    /// different universe instances.
    pub fn symmetric_difference(&self, other: &Subset<E>) -> Result<Subset<E>> {
        self.check_same_universe(other)?;
        Ok(Self::from_parts(
            self.universe.clone(),
            self.bits.symmetric_difference(&other.bits),
        ))
    }

    /// Complement within the universe: every position not in `self`.
    pub fn complement(&self) -> Subset<E> {
        Self::from_parts(self.universe.clone(), self.bits.complement())
    }
}

impl<E: Default> Subset<E> {
    /// Add `position` to the subset.
    ///
    /// On success returns a cursor at the new member and `true`. When the
    /// position is out of range or already a member, returns the end
    /// cursor and `false` with no mutation; double insertion is reported
    /// through the bool, not treated as an error.
    pub fn insert(&mut self, position: usize) -> (PositionIter<'_, E>, bool) {
        if position >= self.bits.len() || self.bits.get(position) {
            return (self.end(), false);
        }
        self.bits.set(position);
        (PositionIter::at(self, position), true)
    }

    /// Cursor at the lowest member position, or the end cursor when the
    /// subset is empty.
    pub fn iter(&self) -> PositionIter<'_, E> {
        let pos = self.bits.next_set_bit(0).unwrap_or(self.bits.len());
        PositionIter::at(self, pos)
    }

    /// The end cursor: the sentinel one past the last universe position.
    /// Never dereferences to a member.
    pub fn end(&self) -> PositionIter<'_, E> {
        PositionIter::at(self, self.bits.len())
    }

    /// Cursor at `position` when it is a member, otherwise the end
    /// cursor. Never mutates, never fails.
    pub fn iter_at(&self, position: usize) -> PositionIter<'_, E> {
        if self.bits.get(position) {
            PositionIter::at(self, position)
        } else {
            self.end()
        }
    }
}

impl<E> PartialEq for Subset<E> {
    fn eq(&self, other: &Self) -> bool {
        Universe::ptr_eq(&self.universe, &other.universe) && self.bits == other.bits
    }
}

impl<E> Eq for Subset<E> {}

impl<E> Clone for Subset<E> {
    fn clone(&self) -> Self {
        Self {
            universe: self.universe.clone(),
            bits: self.bits.clone(),
        }
    }
}

impl<E> fmt::Debug for Subset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subset")?;
        f.debug_set().entries(self.positions()).finish()
    }
}

impl<'a, E: Default> IntoIterator for &'a Subset<E> {
    type Item = &'a E;
    type IntoIter = PositionIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> BitOr for &Subset<E> {
    type Output = Subset<E>;

    /// Union operator.
    ///
    /// # Panics
    /// Panics when the operands are bound to different universe
    /// instances; use [`Subset::union`] for the checked form.
    fn bitor(self, rhs: Self) -> Subset<E> {
        self.union(rhs)
            .expect("subset algebra requires operands of the same universe")
    }
}

impl<E> Sub for &Subset<E> {
    type Output = Subset<E>;

    /// Difference operator.
    ///
    /// # Panics
    /// Panics when the operands are bound to different universe
    /// instances; use [`Subset::difference`] for the checked form.
    fn sub(self, rhs: Self) -> Subset<E> {
        self.difference(rhs)
            .expect("subset algebra requires operands of the same universe")
    }
}

impl<E> BitAnd for &Subset<E> {
    type Output = Subset<E>;

    /// Intersection operator.
    ///
    /// # Panics
    /// Panics when the operands are bound to different universe
    /// instances; use [`Subset::intersection`] for the checked form.
    fn bitand(self, rhs: Self) -> Subset<E> {
        self.intersection(rhs)
            .expect("subset algebra requires operands of the same universe")
    }
}

impl<E> BitXor for &Subset<E> {
    type Output = Subset<E>;

    /// Symmetric difference operator.
    ///
    /// # Panics
    /// Panics when the operands are bound to different universe
    /// instances; use [`Subset::symmetric_difference`] for the checked
    /// form.
    fn bitxor(self, rhs: Self) -> Subset<E> {
        self.symmetric_difference(rhs)
            .expect("subset algebra requires operands of the same universe")
    }
}

impl<E> Not for &Subset<E> {
    type Output = Subset<E>;

    /// Complement operator.
    fn not(self) -> Subset<E> {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Universe<&'static str> {
        Universe::new(["a", "b", "c", "d", "e"])
    }

    #[test]
    fn test_insert_and_contains() {
        let universe = letters();
        let mut subset = universe.empty_subset();
        assert!(!subset.contains(1));

        let (cursor, inserted) = subset.insert(1);
        assert!(inserted);
        assert_eq!(cursor.position(), Some(1));
        assert_eq!(cursor.element(), &"b");
        drop(cursor);

        assert!(subset.contains(1));
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn test_double_insert_is_reported_not_an_error() {
        let universe = letters();
        let mut subset = universe.empty_subset();

        assert!(subset.insert(2).1);
        let (cursor, inserted) = subset.insert(2);
        assert!(!inserted);
        assert!(!cursor.is_valid());
        drop(cursor);
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn test_remove() {
        let universe = letters();
        let mut subset = universe.subset_from([1, 3]).unwrap();

        assert!(subset.remove(1));
        assert!(!subset.contains(1));
        assert_eq!(subset.len(), 1);

        // Absent position: no mutation, reported through the bool.
        assert!(!subset.remove(1));
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn test_out_of_range_positions_are_tolerated() {
        let universe = letters();
        let mut subset = universe.subset_from([1]).unwrap();

        assert!(!subset.contains(5));
        assert!(!subset.contains(999));
        assert!(!subset.remove(5));

        let (cursor, inserted) = subset.insert(10);
        assert!(!inserted);
        assert!(!cursor.is_valid());
        drop(cursor);
        assert_eq!(subset.len(), 1);

        assert!(subset.iter_at(5) == subset.end());
    }

    #[test]
    fn test_iter_at() {
        let universe = letters();
        let subset = universe.subset_from([1, 3]).unwrap();

        let cursor = subset.iter_at(3);
        assert_eq!(cursor.position(), Some(3));
        assert_eq!(cursor.element(), &"d");

        // In range but absent: same as end().
        assert!(subset.iter_at(2) == subset.end());
    }

    #[test]
    fn test_len_matches_membership() {
        let universe = letters();
        let mut subset = universe.empty_subset();
        subset.insert(0);
        subset.insert(2);
        subset.insert(4);
        subset.remove(2);

        let by_query = (0..universe.len()).filter(|&p| subset.contains(p)).count();
        assert_eq!(subset.len(), by_query);
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn test_clear() {
        let universe = letters();
        let mut subset = universe.full_subset();
        assert_eq!(subset.len(), 5);

        subset.clear();
        assert!(subset.is_empty());
        assert!((0..5).all(|p| !subset.contains(p)));
    }

    #[test]
    fn test_equality_is_universe_instance_sensitive() {
        let universe = letters();
        let a = universe.subset_from([1, 3]).unwrap();
        let b = universe.subset_from([1, 3]).unwrap();
        assert_eq!(a, b);

        let c = universe.subset_from([1]).unwrap();
        assert_ne!(a, c);

        // Identical bit patterns over a structurally identical universe,
        // but a different instance: never equal.
        let other = letters();
        let d = other.subset_from([1, 3]).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_algebra() {
        let universe = letters();
        let a = universe.subset_from([1, 3]).unwrap();
        let b = universe.subset_from([2, 3]).unwrap();

        let union = a.union(&b).unwrap();
        assert_eq!(union.positions().collect::<Vec<_>>(), vec![1, 2, 3]);

        let intersection = a.intersection(&b).unwrap();
        assert_eq!(intersection.positions().collect::<Vec<_>>(), vec![3]);

        let difference = a.difference(&b).unwrap();
        assert_eq!(difference.positions().collect::<Vec<_>>(), vec![1]);

        let symmetric = a.symmetric_difference(&b).unwrap();
        assert_eq!(symmetric.positions().collect::<Vec<_>>(), vec![1, 2]);

        // Operands are untouched.
        assert_eq!(a.positions().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(b.positions().collect::<Vec<_>>(), vec![2, 3]);

        // Results stay bound to the left operand's universe.
        assert!(Universe::ptr_eq(union.universe(), a.universe()));
    }

    #[test]
    fn test_mismatched_universe_fails_fast() {
        let first = letters();
        let second = letters();
        let a = first.subset_from([1]).unwrap();
        let b = second.subset_from([2]).unwrap();

        assert_eq!(a.union(&b), Err(SetError::MismatchedUniverse));
        assert_eq!(a.difference(&b), Err(SetError::MismatchedUniverse));
        assert_eq!(a.intersection(&b), Err(SetError::MismatchedUniverse));
        assert_eq!(
            a.symmetric_difference(&b),
            Err(SetError::MismatchedUniverse)
        );
    }

    #[test]
    fn test_operator_sugar() {
        let universe = letters();
        let a = universe.subset_from([1, 3]).unwrap();
        let b = universe.subset_from([2, 3]).unwrap();

        assert_eq!(&a | &b, a.union(&b).unwrap());
        assert_eq!(&a & &b, a.intersection(&b).unwrap());
        assert_eq!(&a - &b, a.difference(&b).unwrap());
        assert_eq!(&a ^ &b, a.symmetric_difference(&b).unwrap());
        assert_eq!(!&a, a.complement());
    }

    #[test]
    #[should_panic(expected = "same universe")]
    fn test_operator_panics_across_universes() {
        let first = letters();
        let second = letters();
        let a = first.subset_from([1]).unwrap();
        let b = second.subset_from([2]).unwrap();
        let _ = &a | &b;
    }

    #[test]
    fn test_complement() {
        let universe = letters();
        let a = universe.subset_from([1, 3]).unwrap();

        let complement = a.complement();
        assert_eq!(complement.positions().collect::<Vec<_>>(), vec![0, 2, 4]);

        assert_eq!(a.union(&complement).unwrap(), universe.full_subset());
        assert!(a.intersection(&complement).unwrap().is_empty());
    }

    #[test]
    fn test_debug_lists_positions() {
        let universe = letters();
        let subset = universe.subset_from([1, 3]).unwrap();
        assert_eq!(format!("{subset:?}"), "Subset{1, 3}");
    }
}
