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

//! Error types

use std::fmt;

/// Set container error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Position lies outside the universe
    OutOfRange { position: usize, size: usize },

    /// Operands are bound to different universe instances
    MismatchedUniverse,

    /// Snapshot was taken over a universe of a different size
    SizeMismatch { expected: usize, found: usize },

    /// Serialization error
    SerializationError(String),

    /// Deserialization error
    DeserializationError(String),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::OutOfRange { position, size } => {
                write!(
                    f,
                    "Position {position} out of range for universe of size {size}"
                )
            }
            SetError::MismatchedUniverse => {
                write!(f, "Subsets are bound to different universe instances")
            }
            SetError::SizeMismatch { expected, found } => {
                write!(f, "Universe size mismatch: snapshot needs {expected}, universe has {found}")
            }
            SetError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            SetError::DeserializationError(msg) => write!(f, "Deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for SetError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, SetError>;
