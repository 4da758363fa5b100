//! Writing generated records to disk as pretty-printed XML fixtures.

use std::fmt;
use std::path::PathBuf;

use rand::Rng;
use roster::{Record, XmlError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::FixtureConfig;
use crate::generators::FixtureGenerator;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render {file}: {source}")]
    Render { file: String, source: XmlError },
}

/// Outcome of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub count: usize,
    pub output_dir: PathBuf,
    /// Paths written, in id order.
    pub files: Vec<PathBuf>,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} formatted XML files in the '{}' folder.",
            self.count,
            self.output_dir.display()
        )
    }
}

/// Renders records and writes one file per record into the configured directory.
///
/// Existing files with the same name are overwritten. A failed write aborts the run;
/// files written before the failure are left in place.
pub struct FixtureWriter {
    config: FixtureConfig,
}

impl FixtureWriter {
    pub fn new(config: FixtureConfig) -> Self {
        Self { config }
    }

    /// Creates the output directory (and parents) if missing.
    pub fn prepare(&self) -> Result<(), WriteError> {
        let path = &self.config.output_dir;
        std::fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
            path: path.clone(),
            source,
        })?;

        info!("Output directory ready: {}", path.display());
        Ok(())
    }

    /// Renders a single record and writes it to `{output_dir}/{element}_{id}.xml`.
    ///
    /// Assumes the output directory already exists.
    pub fn write_record<R: Record>(&self, record: &R) -> Result<PathBuf, WriteError> {
        let file = record.file_name();
        let xml = record
            .to_document()
            .to_pretty_string(&self.config.indent)
            .map_err(|source| WriteError::Render {
                file: file.clone(),
                source,
            })?;

        let path = self.config.output_dir.join(file);
        std::fs::write(&path, xml).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Generates and writes one record per configured id, in order.
    pub fn write_all<G: FixtureGenerator>(
        &self,
        generator: &G,
        rng: &mut impl Rng,
    ) -> Result<GenerationSummary, WriteError> {
        self.prepare()?;

        let mut files = Vec::with_capacity(self.config.count());
        for id in self.config.ids.clone() {
            let record = generator.generate(id, rng);
            files.push(self.write_record(&record)?);
        }

        info!(
            "Generated {} {} fixtures in {}",
            files.len(),
            <G::Record as Record>::ELEMENT,
            self.config.output_dir.display()
        );

        Ok(GenerationSummary {
            count: files.len(),
            output_dir: self.config.output_dir.clone(),
            files,
        })
    }
}
