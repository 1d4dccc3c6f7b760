//! Array-backed list containers.
//!
//! [`ArrayList`] is a resizable list over an [`Array`] buffer with
//! bounds-checked access and pure transformations (`reverse`, `take`, `drop`,
//! `mid`, `nth_largest`). [`OrderedList`] keeps an `ArrayList` sorted.

pub mod capacity_policy;
pub mod array;
pub mod list;
pub mod ordered;

mod errors;

pub use errors::{BoundsError, OutOfRange};
pub use array::Array;
pub use capacity_policy::{CapacityPolicy, Doubling, Exact};
pub use list::{ArrayList, DEFAULT_CAPACITY};
pub use ordered::{OrderedList, nth_largest};

pub type Result<T> = core::result::Result<T, OutOfRange>;
