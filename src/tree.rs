// Copyright 2019 Leonardo Schwarz <mail@leoschwarz.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An ordered property tree with XML serialization.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::{Error, Result};

/// An ordered tree of string values addressed by dot separated paths.
///
/// Every node holds an optional value and a list of named children.
/// Duplicate child keys are allowed; path lookups resolve to the first
/// child with a matching key in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTree {
    value: Option<String>,
    children: Vec<(String, PropertyTree)>,
}

impl PropertyTree {
    /// Create an empty tree with no value and no children.
    pub fn new() -> Self {
        PropertyTree::default()
    }

    /// Set the value at `path`, creating missing intermediate nodes.
    ///
    /// If the full path already exists its value is overwritten.
    pub fn put<V: ToString>(&mut self, path: &str, value: V) {
        self.locate(path, false).value = Some(value.to_string());
    }

    /// Set the value of a freshly appended node at `path`.
    ///
    /// Intermediate nodes are reused like in [`PropertyTree::put`], but
    /// the final path segment always creates a new child, so repeated
    /// calls build up a list of equally named siblings.
    pub fn add<V: ToString>(&mut self, path: &str, value: V) {
        self.locate(path, true).value = Some(value.to_string());
    }

    /// Append `child` as a new node at `path`.
    pub fn add_child(&mut self, path: &str, child: PropertyTree) {
        *self.locate(path, true) = child;
    }

    /// The value stored at `path`, if the path exists and has one.
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut node = self;
        for key in path.split('.') {
            node = node
                .children
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, child)| child)?;
        }
        node.value.as_deref()
    }

    /// The value of this node itself.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The children of this node in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PropertyTree)> {
        self.children.iter().map(|(k, child)| (k.as_str(), child))
    }

    /// Serialize the tree as an XML document.
    ///
    /// The document starts with an UTF-8 declaration and is indented by
    /// two spaces per nesting level. Each top level child becomes a
    /// document element; the root's own value is not written. Nodes
    /// without value and children serialize as self closing elements.
    pub fn write_xml<W: Write>(&self, output: W) -> Result<()> {
        let mut writer = Writer::new_with_indent(output, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| Error::Xml(e.to_string()))?;
        for (key, child) in &self.children {
            write_element(&mut writer, key, child)?;
        }
        Ok(())
    }

    /// Serialize the tree as an XML document into a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_xml(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Xml(e.to_string()))
    }

    fn locate(&mut self, path: &str, append_last: bool) -> &mut PropertyTree {
        let mut node = self;
        let mut segments = path.split('.').peekable();
        while let Some(key) = segments.next() {
            let append = append_last && segments.peek().is_none();
            node = node.child_entry(key, append);
        }
        node
    }

    fn child_entry(&mut self, key: &str, append: bool) -> &mut PropertyTree {
        let found = if append {
            None
        } else {
            self.children.iter().position(|(k, _)| k == key)
        };
        let index = match found {
            Some(index) => index,
            None => {
                self.children.push((key.to_string(), PropertyTree::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    node: &PropertyTree,
) -> Result<()> {
    if node.value.is_none() && node.children.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(|e| Error::Xml(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| Error::Xml(e.to_string()))?;
    if let Some(ref value) = node.value {
        writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    for (key, child) in &node.children {
        write_element(writer, key, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| Error::Xml(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_creates_and_overwrites() {
        let mut tree = PropertyTree::new();
        tree.put("a.b", 1);
        assert_eq!(tree.get("a.b"), Some("1"));
        assert_eq!(tree.get("a"), None);

        tree.put("a.b", 2);
        assert_eq!(tree.get("a.b"), Some("2"));
        assert_eq!(tree.children().count(), 1);
    }

    #[test]
    fn add_appends_equally_named_siblings() {
        let mut tree = PropertyTree::new();
        tree.add("list.item", "one");
        tree.add("list.item", "two");

        assert_eq!(tree.get("list.item"), Some("one"));

        let (key, list) = tree.children().next().unwrap();
        assert_eq!(key, "list");
        assert_eq!(list.children().count(), 2);
    }

    #[test]
    fn get_missing_path_is_none() {
        let mut tree = PropertyTree::new();
        tree.put("a.b", "v");
        assert_eq!(tree.get("a.c"), None);
        assert_eq!(tree.get("x"), None);
    }

    #[test]
    fn serializes_nested_tree() {
        let mut tree = PropertyTree::new();
        tree.put("config.name", "demo");
        tree.put("config.port", 8080);
        tree.add("config.hosts.host", "alpha");
        tree.add("config.hosts.host", "beta");

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<config>
  <name>demo</name>
  <port>8080</port>
  <hosts>
    <host>alpha</host>
    <host>beta</host>
  </hosts>
</config>"#;
        assert_eq!(tree.to_xml_string().unwrap(), expected);
    }

    #[test]
    fn empty_node_serializes_self_closing() {
        let mut tree = PropertyTree::new();
        tree.add_child("list.empty", PropertyTree::new());
        assert!(tree.to_xml_string().unwrap().contains("<empty/>"));
    }

    #[test]
    fn text_values_are_escaped() {
        let mut tree = PropertyTree::new();
        tree.put("a.b", "x < y & z");
        let xml = tree.to_xml_string().unwrap();
        assert!(xml.contains("<b>x &lt; y &amp; z</b>"));
    }
}
