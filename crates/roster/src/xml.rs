//! Minimal XML element tree with a pretty-printing serializer.
//!
//! Produces the layout the fixture importer expects:
//! - `<?xml version="1.0" ?>` declaration on the first line
//! - One element per line, nested elements indented by a fixed unit
//! - Leaf elements with text written inline (`<age>17</age>`)
//! - Empty elements self-closed (`<note/>`)

use thiserror::Error;

/// Declaration line written at the top of every document.
pub const DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

/// Default indentation unit (four spaces).
pub const DEFAULT_INDENT: &str = "    ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("Invalid element name: {0:?}")]
    InvalidName(String),

    #[error("Character {0:?} is not allowed in XML text")]
    InvalidChar(char),
}

/// A node in an XML document: a name, optional text content and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets the text content of this element.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a `<name>value</name>` leaf child.
    pub fn text_field(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.with_child(Element::new(name).with_text(value.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Serializes the tree as a complete document, indenting each level by `indent`.
    ///
    /// Fails if any element in the tree carries a name that is not a valid XML name, or
    /// text containing a character XML 1.0 does not allow.
    pub fn to_pretty_string(&self, indent: &str) -> Result<String, XmlError> {
        let mut out = String::new();
        out.push_str(DECLARATION);
        out.push('\n');
        self.write_pretty(&mut out, indent, 0)?;
        Ok(out)
    }

    fn write_pretty(&self, out: &mut String, indent: &str, depth: usize) -> Result<(), XmlError> {
        if !is_valid_name(&self.name) {
            return Err(XmlError::InvalidName(self.name.clone()));
        }

        if let Some(c) = self.text.as_deref().and_then(find_invalid_char) {
            return Err(XmlError::InvalidChar(c));
        }

        let pad = indent.repeat(depth);

        if self.children.is_empty() {
            match &self.text {
                Some(text) => {
                    out.push_str(&format!(
                        "{pad}<{name}>{text}</{name}>\n",
                        name = self.name,
                        text = escape_xml(text)
                    ));
                }
                None => out.push_str(&format!("{pad}<{}/>\n", self.name)),
            }
            return Ok(());
        }

        out.push_str(&format!("{pad}<{}>\n", self.name));
        if let Some(text) = &self.text {
            out.push_str(&format!("{pad}{indent}{}\n", escape_xml(text)));
        }
        for child in &self.children {
            child.write_pretty(out, indent, depth + 1)?;
        }
        out.push_str(&format!("{pad}</{}>\n", self.name));

        Ok(())
    }
}

/// Checks the element name against the XML `Name` production (ASCII subset plus any
/// non-ASCII letter).
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let name_start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    name_start(first)
        && chars.all(|c| name_start(c) || c.is_alphanumeric() || matches!(c, '-' | '.'))
}

/// Returns the first character outside the XML 1.0 `Char` production.
///
/// `char` already excludes surrogates, leaving C0 controls other than tab, newline and
/// carriage return, plus U+FFFE and U+FFFF.
fn find_invalid_char(text: &str) -> Option<char> {
    text.chars().find(|&c| match c {
        '\t' | '\n' | '\r' => false,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => true,
        _ => false,
    })
}

/// Escapes XML special characters in a string.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
