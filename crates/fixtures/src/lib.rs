//! Synthetic XML fixture generation for roster.
//!
//! Each run generates one record per id, renders it as a single-record XML document and
//! writes it to `{element}_{id}.xml` in the output directory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fixtures::prelude::*;
//!
//! let writer = FixtureWriter::new(FixtureConfig::students());
//! let summary = writer.write_all(&StudentGenerator::new(), &mut rand::thread_rng())?;
//! println!("{summary}");
//! ```

pub mod config;
pub mod generators;
pub mod writer;

// Re-export record types from the roster crate
pub use roster::{Record, StudentRecord, Subject, TeacherRecord};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{FixtureConfig, StudentGenConfig, TeacherGenConfig};
    pub use crate::generators::{FixtureGenerator, StudentGenerator, TeacherGenerator};
    pub use crate::writer::{FixtureWriter, GenerationSummary, WriteError};
    pub use crate::{Record, StudentRecord, Subject, TeacherRecord};
}
