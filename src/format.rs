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

//! Plain text rendering of evaluated node sets.

use std::io::Write;

use sxd_xpath::nodeset::Node;

use crate::errors::Result;

/// Write a node set report to `output`.
///
/// The report starts with a `Result (N nodes):` header followed by one
/// line per node in the order of the slice. Namespace declarations print
/// their binding and owner element, elements print their expanded name
/// and all remaining kinds fall back to a generic name and type line.
pub fn write_node_set<W: Write>(output: &mut W, nodes: &[Node<'_>]) -> Result<()> {
    writeln!(output, "Result ({} nodes):", nodes.len())?;
    for node in nodes {
        write_node(output, *node)?;
    }
    Ok(())
}

/// Write the report line of a single node to `output`.
pub fn write_node<W: Write>(output: &mut W, node: Node<'_>) -> Result<()> {
    match node {
        Node::Namespace(ns) => {
            let owner = ns.parent().name();
            match owner.namespace_uri() {
                Some(uri) => writeln!(
                    output,
                    "= namespace \"{}\"=\"{}\" for node {}:{}",
                    ns.prefix(),
                    ns.uri(),
                    uri,
                    owner.local_part()
                )?,
                None => writeln!(
                    output,
                    "= namespace \"{}\"=\"{}\" for node {}",
                    ns.prefix(),
                    ns.uri(),
                    owner.local_part()
                )?,
            }
        }
        Node::Element(element) => {
            let name = element.name();
            match name.namespace_uri() {
                Some(uri) => writeln!(output, "= element node \"{}:{}\"", uri, name.local_part())?,
                None => writeln!(output, "= element node \"{}\"", name.local_part())?,
            }
        }
        other => writeln!(
            output,
            "= node \"{}\": type {}",
            node_name(other),
            node_type_code(other)
        )?,
    }
    Ok(())
}

// Numeric codes follow libxml2's xmlElementType values.
fn node_type_code(node: Node<'_>) -> u32 {
    match node {
        Node::Element(_) => 1,
        Node::Attribute(_) => 2,
        Node::Text(_) => 3,
        Node::ProcessingInstruction(_) => 7,
        Node::Comment(_) => 8,
        Node::Root(_) => 9,
        Node::Namespace(_) => 18,
    }
}

fn node_name(node: Node<'_>) -> &str {
    match node {
        Node::Element(e) => e.name().local_part(),
        Node::Attribute(a) => a.name().local_part(),
        Node::Text(_) => "text",
        Node::ProcessingInstruction(pi) => pi.target(),
        Node::Comment(_) => "comment",
        Node::Root(_) => "document",
        Node::Namespace(ns) => ns.prefix(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::reader::Reader;

    fn render(nodes: &[Node<'_>]) -> String {
        let mut out = Vec::new();
        write_node_set(&mut out, nodes).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_node_set_prints_header_only() {
        assert_eq!(render(&[]), "Result (0 nodes):\n");
    }

    #[test]
    fn element_nodes_print_local_name() {
        let xml = r#"<root><child/><child/></root>"#;
        let reader = Reader::from_str(xml, None).unwrap();
        let nodes = reader.node_set("//child").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (2 nodes):\n\
             = element node \"child\"\n\
             = element node \"child\"\n"
        );
    }

    #[test]
    fn namespaced_element_prints_uri_and_local_name() {
        let xml = r#"<root xmlns:x="urn:example"><x:child/></root>"#;
        let context = Context::from_namespace_list("x=urn:example").unwrap();
        let reader = Reader::from_str(xml, Some(&context)).unwrap();
        let nodes = reader.node_set("//x:child").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (1 nodes):\n= element node \"urn:example:child\"\n"
        );
    }

    #[test]
    fn namespace_node_prints_binding_and_owner() {
        let xml = r#"<root xmlns:x="urn:example"><x:child/></root>"#;
        let context = Context::from_namespace_list("x=urn:example").unwrap();
        let reader = Reader::from_str(xml, Some(&context)).unwrap();

        // Owner without a namespace of its own.
        let nodes = reader.node_set("/root/namespace::x").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (1 nodes):\n= namespace \"x\"=\"urn:example\" for node root\n"
        );

        // Owner with a namespace prints its expanded name.
        let nodes = reader.node_set("//x:child/namespace::x").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (1 nodes):\n= namespace \"x\"=\"urn:example\" for node urn:example:child\n"
        );
    }

    #[test]
    fn attribute_and_text_nodes_use_fallback_line() {
        let xml = r#"<root attr="v">some text</root>"#;
        let reader = Reader::from_str(xml, None).unwrap();

        let nodes = reader.node_set("//@attr").unwrap();
        assert_eq!(render(&nodes), "Result (1 nodes):\n= node \"attr\": type 2\n");

        let nodes = reader.node_set("//text()").unwrap();
        assert_eq!(render(&nodes), "Result (1 nodes):\n= node \"text\": type 3\n");
    }

    #[test]
    fn comment_pi_and_root_nodes_use_fallback_line() {
        let xml = r#"<root><!--note--><?mypi data?></root>"#;
        let reader = Reader::from_str(xml, None).unwrap();

        let nodes = reader.node_set("//comment()").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (1 nodes):\n= node \"comment\": type 8\n"
        );

        let nodes = reader.node_set("//processing-instruction()").unwrap();
        assert_eq!(render(&nodes), "Result (1 nodes):\n= node \"mypi\": type 7\n");

        let nodes = reader.node_set("/").unwrap();
        assert_eq!(
            render(&nodes),
            "Result (1 nodes):\n= node \"document\": type 9\n"
        );
    }
}
