//! Zero-copy views over matrix-like objects
//!
//! Each view remaps indices and forwards to the object it wraps:
//! - [`Transpose`]: swaps row and column arguments (read-only)
//! - [`Augment`]: horizontal concatenation `[left | right]`, writable when both sides are
//! - [`RowSwapper`]: logical row permutation, swaps rows in O(1) without moving data
//!
//! Views follow the same ownership rule as expression nodes: pass `&m` (or
//! `&mut m`) to borrow, pass an owned value to move it into the view.

mod augment;
mod row_swapper;
mod transpose;

pub use augment::{Augment, augment};
pub use row_swapper::{RowSwapper, row_swapper};
pub use transpose::{Transpose, transpose};
