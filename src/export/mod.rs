//! Export stages.
//!
//! This module turns query results into the delivered artifact:
//! TSV serialization, gzip compression, and scp delivery.

pub mod archive;
pub mod delivery;
mod tsv;

pub use archive::{compress, compressed_path};
pub use delivery::deliver;
pub use tsv::write_tsv;
