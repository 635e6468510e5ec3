// Copyright 2017-2019 Leonardo Schwarz <mail@leoschwarz.com>
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

//! Evaluate XPath queries on XML documents and report the results.
//!
//! The evaluation side of this crate is mostly a wrapper around the
//! crate [sxd_xpath](https://github.com/shepmaster/sxd-xpath): documents
//! are parsed with `sxd_document`, queried through a [`Reader`] and the
//! matched node sets can be rendered as a plain text report with
//! [`write_node_set`]. Namespace prefixes are bound through a [`Context`],
//! optionally parsed from a `prefix=href` list with
//! [`parse_namespace_list`].
//!
//! The writing side is independent of XPath: a [`PropertyTree`] holds
//! values addressed by dot separated paths and serializes itself as an
//! XML document, which [`DebugSettings`] uses for its settings file.
//!
//! # Examples
//! ```
//! use xpath_eval::{Context, Reader};
//!
//! # fn main() -> Result<(), xpath_eval::Error> {
//! let xml = r#"<?xml version="1.0"?><book xmlns:b="books" name="Neuromancer" author="William Gibson"><b:tags><b:tag name="cyberpunk"/><b:tag name="sci-fi"/></b:tags></book>"#;
//!
//! let context = Context::from_namespace_list("b=books")?;
//! let reader = Reader::from_str(xml, Some(&context))?;
//!
//! let name: String = reader.read("//@name")?;
//! assert_eq!(name, "Neuromancer".to_string());
//!
//! let publisher: Option<String> = reader.read("//@publisher")?;
//! let author: Option<String> = reader.read("//@author")?;
//! assert_eq!(publisher, None);
//! assert_eq!(author, Some("William Gibson".to_string()));
//!
//! let tags: Vec<String> = reader.read("//b:tags/b:tag/@name")?;
//! assert_eq!(tags, vec!["cyberpunk".to_string(), "sci-fi".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub use self::errors::{Error, Result};

pub mod context;
pub use self::context::{parse_namespace_list, Context};

pub mod expression;
pub use self::expression::XPathExpression;

pub mod reader;
pub use self::reader::{FromXml, Reader};

pub mod format;
pub use self::format::{write_node, write_node_set};

pub mod query;
pub use self::query::execute_xpath_expression;

pub mod tree;
pub use self::tree::PropertyTree;

pub mod settings;
pub use self::settings::DebugSettings;
