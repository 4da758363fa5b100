//! Record generators for fixture data.
//!
//! - [`StudentGenerator`]: students with a random age and a fixed grade
//! - [`TeacherGenerator`]: teachers with a random age, subject and experience

use std::ops::RangeInclusive;

use rand::Rng;
use roster::Record;

pub mod student;
pub mod teacher;

pub use student::StudentGenerator;
pub use teacher::TeacherGenerator;

/// Builds one record per id, drawing its random fields from the caller's RNG.
pub trait FixtureGenerator {
    type Record: Record;

    /// Generates the record for a single id.
    fn generate(&self, id: u32, rng: &mut impl Rng) -> Self::Record;

    /// Generates records for every id in the range, in order.
    fn generate_batch(&self, ids: RangeInclusive<u32>, rng: &mut impl Rng) -> Vec<Self::Record> {
        ids.map(|id| self.generate(id, rng)).collect()
    }
}
