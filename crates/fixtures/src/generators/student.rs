//! Student generation.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use roster::StudentRecord;

use super::FixtureGenerator;
use crate::config::StudentGenConfig;

/// Generates student records.
pub struct StudentGenerator {
    config: StudentGenConfig,
    age: Uniform<u32>,
}

impl StudentGenerator {
    /// Creates a new student generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(StudentGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the age range is empty.
    pub fn with_config(config: StudentGenConfig) -> Self {
        let age = Uniform::from(config.age_range.clone());
        Self { config, age }
    }
}

impl FixtureGenerator for StudentGenerator {
    type Record = StudentRecord;

    fn generate(&self, id: u32, rng: &mut impl Rng) -> StudentRecord {
        StudentRecord {
            id,
            name: format!("Student {id}"),
            age: self.age.sample(rng),
            grade: self.config.grade.clone(),
        }
    }
}

impl Default for StudentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
