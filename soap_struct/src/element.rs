/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::Error;

/// A content node within an [`XmlElement`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element built in memory and rendered once complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing the value of any existing attribute with
    /// the same name while keeping its position.
    pub fn add_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_owned(), value)),
        }

        self
    }

    /// Appends a child element after any existing content.
    pub fn append(&mut self, child: XmlElement) -> &mut Self {
        self.children.push(XmlNode::Element(child));

        self
    }

    /// Appends a text node after any existing content.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(XmlNode::Text(text.into()));

        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates over child elements, skipping text nodes.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Iterates over the child elements with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children().filter(move |child| child.name == name)
    }

    /// The concatenation of all direct text nodes.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Writes this element and its content to `writer`.
    ///
    /// Elements with no content are written as empty-element tags.
    pub fn write_to<W>(&self, writer: &mut Writer<W>) -> Result<(), Error>
    where
        W: std::io::Write,
    {
        let start = BytesStart::new(self.name.as_str()).with_attributes(
            self.attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;

        for node in &self.children {
            match node {
                XmlNode::Element(element) => element.write_to(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }

        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;

        Ok(())
    }

    /// Renders this element as an XML fragment, without a declaration.
    pub fn to_xml_string(&self) -> Result<String, Error> {
        let mut writer = {
            let inner: Vec<u8> = Default::default();
            Writer::new(inner)
        };
        self.write_to(&mut writer)?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}
