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

//! One shot execution of an XPath query against a document string.

use std::io::Write;

use sxd_document::parser::parse as sxd_parse;

use crate::context::Context;
use crate::errors::{Error, Result};
use crate::format::write_node_set;
use crate::reader::Reader;

/// Evaluate `xpath` against the document in `xml` and write the node set
/// report to `output`.
///
/// `namespaces` optionally holds a space separated list of `prefix=href`
/// bindings which are registered before evaluation. The document is
/// parsed before the list so that an unreadable document is reported
/// even when the list is malformed too.
pub fn execute_xpath_expression<W: Write>(
    xml: &str,
    xpath: &str,
    namespaces: Option<&str>,
    output: &mut W,
) -> Result<()> {
    let package = sxd_parse(xml).map_err(Error::ParseXml)?;

    let context = match namespaces {
        Some(list) => Context::from_namespace_list(list)?,
        None => Context::new(),
    };

    let reader = Reader::from_package(package, Some(&context));
    let nodes = reader.node_set(xpath)?;
    write_node_set(output, &nodes)
}
