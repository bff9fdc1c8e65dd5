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

//! Universe Set - Fixed-universe set containers
//!
//! Bit-vector subsets over a shared element universe, with cursor-style
//! iteration and fail-fast set algebra.

mod bits;

pub mod error;
pub mod iter;
pub mod prelude;
pub mod snapshot;
pub mod subset;
pub mod universe;

pub use error::*;
pub use iter::*;
pub use snapshot::*;
pub use subset::*;
pub use universe::*;
