//! Reads generated fixture files back for assertions.
//!
//! Documents go through a real XML parser, so malformed output or broken escaping
//! fails the test instead of slipping through. Field values come back with entities
//! decoded.

use std::path::Path;

use roxmltree::{Document, Node};

/// A fixture file read back from disk.
#[derive(Debug)]
pub struct ParsedFixture {
    pub root: String,
    /// Names of the record elements under the root.
    pub records: Vec<String>,
    /// Leaf fields of the first record, in document order.
    pub fields: Vec<(String, String)>,
}

impl ParsedFixture {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}

pub fn read_fixture(path: &Path) -> ParsedFixture {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    parse_fixture(&contents)
}

/// Parses a fixture document, panicking if it is not well-formed XML.
pub fn parse_fixture(contents: &str) -> ParsedFixture {
    assert!(
        contents.starts_with("<?xml version=\"1.0\" ?>\n"),
        "document must start with the XML declaration"
    );
    assert!(contents.ends_with('\n'), "document must end with a newline");

    let doc = Document::parse(contents).unwrap_or_else(|e| panic!("malformed XML: {e}"));
    let root = doc.root_element();
    let records: Vec<Node> = element_children(root).collect();

    let fields = records
        .first()
        .map(|record| {
            element_children(*record)
                .map(|field| {
                    assert!(
                        element_children(field).next().is_none(),
                        "field <{}> has nested elements",
                        field.tag_name().name()
                    );
                    let value = field.text().unwrap_or_default().to_string();
                    (field.tag_name().name().to_string(), value)
                })
                .collect()
        })
        .unwrap_or_default();

    ParsedFixture {
        root: root.tag_name().name().to_string(),
        records: records
            .iter()
            .map(|r| r.tag_name().name().to_string())
            .collect(),
        fields,
    }
}

fn element_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}
