//! Validated stipend-certificate records with fixed-schema CSV persistence.
//!
//! - [`certificate`]: the record type with per-field validation, plus the
//!   typed field selector used for sorting.
//! - [`collection`]: ordered in-memory collection (add / sort / filter).
//! - [`store`]: bulk load/save against the fixed five-column CSV schema.

pub mod certificate;
pub mod collection;
pub mod logging;
pub mod store;
