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

//! Forward cursors over a subset's members
//!
//! [`PositionIter`] is the full cursor: it knows its position, can be
//! compared against [`Subset::end`], dereferences through the universe,
//! and tolerates being read at the end sentinel. [`Positions`] is the
//! lightweight companion that yields member positions as plain `usize`.
//!
//! Both borrow their subset, so mutating a subset while any cursor from
//! it is alive is rejected at compile time.
//!
//! [`Subset::end`]: crate::subset::Subset::end

use std::fmt;

use crate::bits::Ones;
use crate::subset::Subset;

/// Cursor over the member positions of one [`Subset`], in increasing order.
///
/// A cursor is either at a member position or at the end sentinel, one
/// past the last universe position. Cursors compare equal only when they
/// come from the same subset instance and sit at the same position.
pub struct PositionIter<'a, E> {
    subset: &'a Subset<E>,
    /// Current position; `subset.universe_size()` is the end sentinel.
    pos: usize,
    /// Handed out by `element` at the sentinel instead of failing.
    fallback: E,
}

impl<'a, E: Default> PositionIter<'a, E> {
    pub(crate) fn at(subset: &'a Subset<E>, pos: usize) -> Self {
        debug_assert!(pos == subset.universe_size() || subset.contains(pos));
        Self {
            subset,
            pos,
            fallback: E::default(),
        }
    }
}

impl<'a, E> PositionIter<'a, E> {
    /// Current position, `None` at the end sentinel.
    pub fn position(&self) -> Option<usize> {
        if self.pos < self.subset.universe_size() {
            Some(self.pos)
        } else {
            None
        }
    }

    /// True while the cursor points at a member, false at the end sentinel.
    ///
    /// The idiomatic loop test; no comparison against [`Subset::end`]
    /// needed.
    ///
    /// [`Subset::end`]: crate::subset::Subset::end
    pub fn is_valid(&self) -> bool {
        self.pos < self.subset.universe_size()
    }

    /// Step to the next member position, or to the end sentinel when none
    /// remains. At the sentinel this is a no-op: the cursor saturates.
    pub fn advance(&mut self) {
        if self.pos >= self.subset.universe_size() {
            return;
        }
        self.pos = self
            .subset
            .next_member(self.pos + 1)
            .unwrap_or(self.subset.universe_size());
    }

    /// Element at the cursor.
    ///
    /// At the end sentinel this returns a default-constructed element held
    /// by the cursor itself, a tolerant read for callers that check
    /// [`is_valid`] instead of matching on an `Option`.
    ///
    /// [`is_valid`]: PositionIter::is_valid
    pub fn element(&self) -> &E {
        self.subset.universe().get(self.pos).unwrap_or(&self.fallback)
    }
}

impl<'a, E> Iterator for PositionIter<'a, E> {
    type Item = &'a E;

    /// Yields the element at the cursor, then advances past it.
    fn next(&mut self) -> Option<&'a E> {
        let subset = self.subset;
        let elem = subset.universe().get(self.pos)?;
        self.advance();
        Some(elem)
    }
}

impl<'a, E> PartialEq for PositionIter<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.subset, other.subset) && self.pos == other.pos
    }
}

impl<'a, E> Eq for PositionIter<'a, E> {}

impl<'a, E: Clone> Clone for PositionIter<'a, E> {
    fn clone(&self) -> Self {
        Self {
            subset: self.subset,
            pos: self.pos,
            fallback: self.fallback.clone(),
        }
    }
}

impl<'a, E> fmt::Debug for PositionIter<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionIter")
            .field("position", &self.position())
            .finish()
    }
}

/// Iterator over member positions as plain indices, increasing.
pub struct Positions<'a> {
    ones: Ones<'a>,
}

impl<'a> Positions<'a> {
    pub(crate) fn new(ones: Ones<'a>) -> Self {
        Self { ones }
    }
}

impl<'a> Iterator for Positions<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.ones.next()
    }
}
