//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use universe_set::prelude::*;
//! ```

pub use crate::error::{Result, SetError};
pub use crate::iter::{PositionIter, Positions};
pub use crate::snapshot::SubsetSnapshot;
pub use crate::subset::Subset;
pub use crate::universe::Universe;
