//! Small helpers shared across apps
//!
//! - [`builder`]: ordered, conditional `Vec` construction
//! - [`collections`]: pairwise iteration and deduplication on slices
//! - [`parent`]: access through weak back-references
//! - [`text`]: `${VAR}` substitution and error descriptions

pub mod builder;
pub mod collections;
pub mod parent;
pub mod text;
