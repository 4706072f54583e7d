//! Podskaz — fuzzy text matching and suggestion ranking for the supplier
//! search box.
//!
//! Tolerates typos and Russian morphological variation, ranks and
//! deduplicates heterogeneous suggestion types (tags, categories, products),
//! and produces highlighted match spans for display. Retrieval itself lives
//! behind the [`SearchBackend`] trait; this crate only decides, ranks, and
//! annotates — no network I/O, no persistence.

pub mod distance;
pub mod highlight;
pub mod interface;
pub mod matcher;
pub mod session;
pub mod stem;
pub mod suggest;

pub use interface::*;
pub use session::{SearchBackend, SuggestSession};
