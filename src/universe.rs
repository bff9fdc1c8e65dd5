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

//! Universe: immutable ordered registry of elements
//!
//! A universe fixes the ordered collection of all possible elements and
//! assigns each one a stable position `0..len()`. Subsets are created
//! through their universe and stay bound to it for their whole life.

use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::sync::{Arc, OnceLock};

use ahash::AHashMap;

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::error::{Result, SetError};
use crate::subset::Subset;

/// Fixed, ordered registry of all possible elements.
///
/// The handle is reference counted: cloning it is cheap and every clone
/// denotes the same universe instance. Subsets hold such a handle, so a
/// universe can never be dropped while a subset built from it is alive.
/// Identity of the instance, not equality of its elements, is what makes
/// two subsets comparable and combinable.
///
/// # Examples
///
/// ```
/// use universe_set::Universe;
///
/// let days = Universe::new(["mon", "tue", "wed", "thu", "fri"]);
/// assert_eq!(days.len(), 5);
/// assert_eq!(days.elem(2).unwrap(), &"wed");
///
/// let mut open = days.empty_subset();
/// open.insert(0);
/// open.insert(4);
/// assert_eq!(open.len(), 2);
/// ```
pub struct Universe<E> {
    inner: Arc<UniverseInner<E>>,
}

struct UniverseInner<E> {
    elements: Box<[E]>,
    /// Reverse index, built once on first `position_of` call.
    index: OnceLock<AHashMap<E, usize>>,
}

impl<E> Universe<E> {
    /// Create a universe from an ordered sequence of elements.
    ///
    /// Positions follow the sequence order and stay stable for the
    /// universe's entire lifetime.
    pub fn new(elements: impl IntoIterator<Item = E>) -> Self {
        #[cfg(feature = "profiling")]
        let span = info_span!("universe.new");
        #[cfg(feature = "profiling")]
        let _guard = span.enter();

        let elements: Box<[E]> = elements.into_iter().collect();
        Self {
            inner: Arc::new(UniverseInner {
                elements,
                index: OnceLock::new(),
            }),
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.inner.elements.len()
    }

    /// True when the universe holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.elements.is_empty()
    }

    /// Bounds-checked element lookup.
    ///
    /// Registry lookups are strict: a position at or past [`len`] fails
    /// with [`SetError::OutOfRange`] instead of being masked by a sentinel
    /// value. (Subset queries are the tolerant side of the API.)
    ///
    /// [`len`]: Universe::len
    pub fn elem(&self, position: usize) -> Result<&E> {
        self.inner
            .elements
            .get(position)
            .ok_or(SetError::OutOfRange {
                position,
                size: self.len(),
            })
    }

    /// Element lookup without the error machinery, `None` out of range.
    pub fn get(&self, position: usize) -> Option<&E> {
        self.inner.elements.get(position)
    }

    /// Element lookup without any bounds check.
    ///
    /// # Safety
    /// Caller must ensure `position < self.len()`.
    pub unsafe fn elem_unchecked(&self, position: usize) -> &E {
        self.inner.elements.get_unchecked(position)
    }

    /// Iterate elements in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.inner.elements.iter()
    }

    /// True when both handles denote the same universe instance.
    ///
    /// Subset equality and the algebra precondition are defined over this
    /// identity; structurally equal universes built separately are still
    /// different instances.
    pub fn ptr_eq(a: &Universe<E>, b: &Universe<E>) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// New subset bound to this universe, with no members.
    pub fn empty_subset(&self) -> Subset<E> {
        Subset::empty(self.clone())
    }

    /// New subset containing every universe position.
    pub fn full_subset(&self) -> Subset<E> {
        Subset::full(self.clone())
    }

    /// Strictly build a subset from member positions.
    ///
    /// Universe-side constructors are strict: any out-of-range position
    /// fails with [`SetError::OutOfRange`] rather than being dropped.
    pub fn subset_from(&self, positions: impl IntoIterator<Item = usize>) -> Result<Subset<E>> {
        Subset::from_positions(self.clone(), positions)
    }
}

impl<E: Clone + Eq + Hash> Universe<E> {
    /// Reverse lookup: the position of `elem`, if it is in the universe.
    ///
    /// The index map is built on first use and shared by all handles;
    /// later calls are hash lookups. Duplicate elements resolve to the
    /// lowest position.
    pub fn position_of(&self, elem: &E) -> Option<usize> {
        let index = self.inner.index.get_or_init(|| {
            let mut map = AHashMap::with_capacity(self.inner.elements.len());
            for (position, e) in self.inner.elements.iter().enumerate() {
                map.entry(e.clone()).or_insert(position);
            }
            map
        });
        index.get(elem).copied()
    }
}

impl<E> Clone for Universe<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Universe<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Universe")
            .field(&self.inner.elements)
            .finish()
    }
}

impl<E> Index<usize> for Universe<E> {
    type Output = E;

    /// Operator indexing.
    ///
    /// # Panics
    /// Panics when `position >= self.len()`. Use [`Universe::elem`] or
    /// [`Universe::get`] for checked access.
    fn index(&self, position: usize) -> &E {
        &self.inner.elements[position]
    }
}

impl<E> From<Vec<E>> for Universe<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::new(elements)
    }
}

impl<E, const N: usize> From<[E; N]> for Universe<E> {
    fn from(elements: [E; N]) -> Self {
        Self::new(elements)
    }
}

impl<E> FromIterator<E> for Universe<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, E> IntoIterator for &'a Universe<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
