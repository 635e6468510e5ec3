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

//! Errors used in this crate.
//!
//! There is a single error type for everything; the variants carry the
//! underlying library errors where one exists. `Display` output is
//! self-contained, so a caller can print an error as a one-line diagnostic
//! without walking a source chain.

use std::io;

use thiserror::Error;

/// The error type used throughout this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The XML document could not be parsed.
    #[error("unable to parse XML document: {0}")]
    ParseXml(sxd_document::parser::Error),

    /// The XPath expression could not be compiled.
    #[error("unable to parse XPath expression {0:?}: {1}")]
    ParseXPath(String, sxd_xpath::ParserError),

    /// The XPath expression compiled to nothing at all.
    #[error("empty XPath expression")]
    EmptyXPath,

    /// Evaluation of a compiled XPath expression failed.
    #[error("unable to evaluate XPath expression {0:?}: {1}")]
    EvalXPath(String, sxd_xpath::ExecutionError),

    /// The XPath library aborted evaluation of the expression.
    ///
    /// `sxd-xpath` panics instead of returning an execution error in a few
    /// cases, an unregistered namespace prefix in a name test being the
    /// common one. The panic is caught at the evaluation boundary and
    /// reported here, with the payload as the reason.
    #[error("unable to evaluate XPath expression {0:?}: {1}")]
    EvalAborted(String, String),

    /// The expression evaluated to a number, string or boolean where a node
    /// set was required. The `String` holds the expression text.
    #[error("XPath expression {0:?} did not evaluate to a node set")]
    NotNodeset(String),

    /// XPath expression failed to evaluate to a node.
    /// The `String` holds a copy of the XPath expression.
    #[error("XPath expression {0:?} failed to find a node")]
    NodeNotFound(String),

    /// The reader was asked for its anchor node but has none.
    #[error("reader has no anchor node")]
    MissingAnchor,

    /// Conversion of a matched value into the requested type failed.
    #[error("unable to convert value from XML: {0}")]
    ParseValue(Box<dyn std::error::Error + Send + Sync>),

    /// A required value was missing in the document.
    #[error("missing value in document: {0}")]
    MissingValue(String),

    /// A segment of a namespace list did not have the `prefix=uri` shape.
    /// The `String` holds the remainder of the list starting at the bad
    /// segment.
    #[error("invalid namespace list format at {0:?}: expected \"prefix=uri\"")]
    NamespaceListFormat(String),

    /// An I/O error while reading or writing a document.
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// XML output could not be produced.
    #[error("unable to write XML: {0}")]
    Xml(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
