//! Student and teacher records and their mapping onto XML documents.

use std::fmt;

use crate::xml::Element;

/// A flat record that renders as a single-record XML document.
///
/// The document is a `COLLECTION` root wrapping exactly one `ELEMENT` child whose
/// leaf children are the record's fields, in order.
pub trait Record {
    /// Root element name, e.g. `students`.
    const COLLECTION: &'static str;
    /// Record element name, e.g. `student`. Also the file name prefix.
    const ELEMENT: &'static str;

    fn id(&self) -> u32;

    /// Field name and text content pairs, in document order.
    fn fields(&self) -> Vec<(&'static str, String)>;

    fn to_document(&self) -> Element {
        let record = self
            .fields()
            .into_iter()
            .fold(Element::new(Self::ELEMENT), |el, (name, value)| {
                el.text_field(name, value)
            });

        Element::new(Self::COLLECTION).with_child(record)
    }

    /// File name for this record, `{element}_{id}.xml`.
    fn file_name(&self) -> String {
        format!("{}_{}.xml", Self::ELEMENT, self.id())
    }
}

/// Subjects a teacher can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Mathematics,
    Science,
    History,
    Geography,
    English,
    Art,
    PhysicalEducation,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::History,
        Subject::Geography,
        Subject::English,
        Subject::Art,
        Subject::PhysicalEducation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::English => "English",
            Subject::Art => "Art",
            Subject::PhysicalEducation => "Physical Education",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.as_str() == s)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub grade: String,
}

impl Record for StudentRecord {
    const COLLECTION: &'static str = "students";
    const ELEMENT: &'static str = "student";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("age", self.age.to_string()),
            ("grade", self.grade.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub subject: Subject,
    /// Years of teaching experience.
    pub experience: u32,
}

impl Record for TeacherRecord {
    const COLLECTION: &'static str = "teachers";
    const ELEMENT: &'static str = "teacher";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("age", self.age.to_string()),
            ("subject", self.subject.to_string()),
            ("experience", self.experience.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn student() -> StudentRecord {
        StudentRecord {
            id: 101,
            name: "Student 101".to_string(),
            age: 18,
            grade: "A".to_string(),
        }
    }

    #[test]
    fn test_subject_set() {
        let unique: HashSet<_> = Subject::ALL.iter().map(Subject::as_str).collect();
        assert_eq!(unique.len(), 7);
        assert_eq!(Subject::PhysicalEducation.to_string(), "Physical Education");
    }

    #[test]
    fn test_subject_from_name() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_name(subject.as_str()), Some(subject));
        }
        assert_eq!(Subject::from_name("Music"), None);
    }

    #[test]
    fn test_student_document_shape() {
        let doc = student().to_document();

        assert_eq!(doc.name(), "students");
        assert_eq!(doc.children().len(), 1);

        let record = &doc.children()[0];
        assert_eq!(record.name(), "student");
        let names: Vec<_> = record.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["name", "age", "grade"]);
        assert_eq!(record.child("age").and_then(|c| c.text()), Some("18"));
    }

    #[test]
    fn test_teacher_document_shape() {
        let teacher = TeacherRecord {
            id: 150,
            name: "Teacher 150".to_string(),
            age: 40,
            subject: Subject::PhysicalEducation,
            experience: 12,
        };
        let doc = teacher.to_document();

        assert_eq!(doc.name(), "teachers");
        let record = doc.child("teacher").unwrap();
        let names: Vec<_> = record.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["name", "age", "subject", "experience"]);
        assert_eq!(
            record.child("subject").and_then(|c| c.text()),
            Some("Physical Education")
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(student().file_name(), "student_101.xml");

        let teacher = TeacherRecord {
            id: 123,
            name: "Teacher 123".to_string(),
            age: 30,
            subject: Subject::Art,
            experience: 1,
        };
        assert_eq!(teacher.file_name(), "teacher_123.xml");
    }
}
