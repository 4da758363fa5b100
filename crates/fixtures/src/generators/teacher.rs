//! Teacher generation.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use roster::{Subject, TeacherRecord};

use super::FixtureGenerator;
use crate::config::TeacherGenConfig;

/// Generates teacher records.
pub struct TeacherGenerator {
    config: TeacherGenConfig,
    age: Uniform<u32>,
    experience: Uniform<u32>,
}

impl TeacherGenerator {
    /// Creates a new teacher generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(TeacherGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the age or experience range is empty.
    pub fn with_config(config: TeacherGenConfig) -> Self {
        let age = Uniform::from(config.age_range.clone());
        let experience = Uniform::from(config.experience_range.clone());
        Self {
            config,
            age,
            experience,
        }
    }

    /// Picks a subject uniformly from the configured set.
    fn generate_subject(&self, rng: &mut impl Rng) -> Subject {
        let subjects: &[Subject] = if self.config.subjects.is_empty() {
            &Subject::ALL
        } else {
            &self.config.subjects
        };

        subjects[rng.gen_range(0..subjects.len())]
    }
}

impl FixtureGenerator for TeacherGenerator {
    type Record = TeacherRecord;

    fn generate(&self, id: u32, rng: &mut impl Rng) -> TeacherRecord {
        TeacherRecord {
            id,
            name: format!("Teacher {id}"),
            age: self.age.sample(rng),
            subject: self.generate_subject(rng),
            experience: self.experience.sample(rng),
        }
    }
}

impl Default for TeacherGenerator {
    fn default() -> Self {
        Self::new()
    }
}
