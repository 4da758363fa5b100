//! Domain model for the roster fixtures.
//!
//! Records are plain structs; the [`Record`](models::Record) trait maps each one onto a
//! single-record XML document built from [`xml::Element`] and rendered with
//! [`xml::Element::to_pretty_string`].

pub mod models;
pub mod xml;

pub use models::{Record, StudentRecord, Subject, TeacherRecord};
pub use xml::{Element, XmlError};
