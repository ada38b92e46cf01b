//! # Menu Ordering Engine
//!
//! Pure functions that turn a flat list of [`MenuItem`](crate::model::MenuItem)s into what the
//! menu pages show: category groups in category-number order, sequential item numbers, and the
//! write-plan for a drag-and-drop move.
//!
//! Nothing here touches storage or keeps state between calls. Every function takes a complete
//! list and returns a new result, so callers recompute on every snapshot rather than patching
//! previous output.
//!
//! ## Category identity
//!
//! Category labels are free text. [`normalize_category_key`] is the only place that decides
//! whether two labels name the same category; grouping, filtering, counting and de-duplication
//! all go through it.
//!
//! ## Reorder convention
//!
//! [`reorder`] uses splice semantics: the moved item is taken out of the list and reinserted at
//! the index the target had *before* the removal. The moved item therefore takes over the
//! target's slot: dragging downwards lands just after the target, dragging upwards lands just
//! before it.
//!
//! [`reorder`] numbers the result from 0, which is right for the complete menu. A manager usually
//! drags within one category, so [`reorder_in_slots`] hands the slice's own display orders back
//! out in the new sequence instead, and nothing outside the slice changes.

mod category;
mod filter;
mod grouping;
mod numbering;
mod reorder;

#[cfg(test)]
mod fixtures;

pub use category::*;
pub use filter::*;
pub use grouping::*;
pub use numbering::*;
pub use reorder::*;
