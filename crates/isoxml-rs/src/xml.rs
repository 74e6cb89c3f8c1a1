// crates/isoxml-rs/src/xml.rs

//! XML text <-> owned element tree, built on `quick-xml` events.
//!
//! ISOXML carries all information in element names and attributes, so text
//! nodes, comments and processing instructions are dropped on read.

use crate::error::IsoxmlError;
use log::warn;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

/// An XML element with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }
}

impl core::str::FromStr for XmlElement {
    type Err = IsoxmlError;

    /// Parses XML text without interpreting it as ISOXML.
    fn from_str(xml: &str) -> Result<Self, Self::Err> {
        parse_str(xml)
    }
}

/// Parses XML text and returns its root element.
///
/// # Errors
/// `XmlParsing` for syntax errors or unclosed elements, `MissingElement`
/// if the text holds no element at all.
pub fn parse_str(xml: &str) -> Result<XmlElement, IsoxmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(element_from(e)?),
            Event::Empty(ref e) => {
                let element = element_from(e)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                // quick-xml has already matched the end name against the start.
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(IsoxmlError::XmlParsing(quick_xml::Error::IllFormed(
            IllFormedError::MissingEndTag(open.name),
        )));
    }

    root.ok_or(IsoxmlError::MissingElement {
        element: "document root",
    })
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlElement, IsoxmlError> {
    let name = core::str::from_utf8(start.name().as_ref())?.to_string();
    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = core::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => warn!("Ignoring additional top-level element <{}>", element.name),
    }
}

/// Serializes `root` into an XML document with an `utf-8` declaration and
/// two-space indentation.
pub fn to_string(root: &XmlElement) -> Result<String, IsoxmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| IsoxmlError::InvalidUtf8(e.utf8_error()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), IsoxmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in &element.children {
            write_element(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ROOT A="1">
  <!-- comment -->
  <DVC A="DVC1" B="Sprayer &amp; Co">
    <DET A="DET1"/>
  </DVC>
  <TSK A="TSK1"/>
</ROOT>"#;
        let root = parse_str(xml).unwrap();
        assert_eq!(root.name, "ROOT");
        assert_eq!(root.attribute("A"), Some("1"));
        assert_eq!(root.children.len(), 2);

        let dvc = &root.children[0];
        assert_eq!(dvc.name, "DVC");
        assert_eq!(dvc.attribute("B"), Some("Sprayer & Co"));
        assert_eq!(dvc.children[0].name, "DET");
        assert_eq!(root.children[1].name, "TSK");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_str("<A><B></A>"),
            Err(IsoxmlError::XmlParsing(_))
        ));
        assert!(matches!(parse_str("<A><B/>"), Err(IsoxmlError::XmlParsing(_))));
        assert!(matches!(
            parse_str("<?xml version=\"1.0\"?>"),
            Err(IsoxmlError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_write_and_reparse() {
        let root = XmlElement::new("ISO11783_TaskData")
            .with_attribute("VersionMajor", "4")
            .with_child(XmlElement::new("CTR").with_attribute("B", "Smith <&> \"Sons\""))
            .with_child(XmlElement::new("TSK").with_child(XmlElement::new("TIM")));

        let text = to_string(&root).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(text.contains("<CTR B="));
        assert!(text.contains("  <TSK>"));

        let reparsed = parse_str(&text).unwrap();
        assert_eq!(reparsed, root);
    }
}
