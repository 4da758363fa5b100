//! Configuration types for fixture generation.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use roster::Subject;

/// First record id generated per run.
pub const FIRST_ID: u32 = 101;

/// Last record id generated per run (inclusive).
pub const LAST_ID: u32 = 150;

pub const STUDENTS_DIR: &str = "students_xml";
pub const TEACHERS_DIR: &str = "teachers_xml";

/// Where fixtures are written and which ids they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Record ids, one file per id.
    pub ids: RangeInclusive<u32>,

    /// Output directory, created if missing.
    pub output_dir: PathBuf,

    /// Indentation unit for the pretty-printed documents.
    pub indent: String,
}

impl FixtureConfig {
    fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            ids: FIRST_ID..=LAST_ID,
            output_dir: output_dir.into(),
            indent: roster::xml::DEFAULT_INDENT.to_string(),
        }
    }

    /// Student fixtures: ids 101-150 into `students_xml/`.
    pub fn students() -> Self {
        Self::new(STUDENTS_DIR)
    }

    /// Teacher fixtures: ids 101-150 into `teachers_xml/`.
    pub fn teachers() -> Self {
        Self::new(TEACHERS_DIR)
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_ids(mut self, ids: RangeInclusive<u32>) -> Self {
        self.ids = ids;
        self
    }

    /// Number of files a full run produces.
    pub fn count(&self) -> usize {
        self.ids.clone().count()
    }
}

/// Configuration for student generation.
#[derive(Debug, Clone)]
pub struct StudentGenConfig {
    /// Age range, inclusive on both ends.
    pub age_range: RangeInclusive<u32>,
    /// Grade assigned to every student.
    pub grade: String,
}

impl Default for StudentGenConfig {
    fn default() -> Self {
        Self {
            age_range: 15..=26,
            grade: "A".to_string(),
        }
    }
}

/// Configuration for teacher generation.
#[derive(Debug, Clone)]
pub struct TeacherGenConfig {
    /// Age range, inclusive on both ends.
    pub age_range: RangeInclusive<u32>,
    /// Years of experience, inclusive on both ends.
    pub experience_range: RangeInclusive<u32>,
    /// Subjects drawn from uniformly. Empty means all subjects.
    pub subjects: Vec<Subject>,
}

impl Default for TeacherGenConfig {
    fn default() -> Self {
        Self {
            age_range: 25..=65,
            experience_range: 1..=40,
            subjects: Subject::ALL.to_vec(),
        }
    }
}
