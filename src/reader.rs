// Copyright 2017-2018 Leonardo Schwarz <mail@leoschwarz.com>
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

//! XPath based document reading and evaluation.

use std::any::Any;
use std::borrow::Cow;
use std::panic::{catch_unwind, AssertUnwindSafe};

use sxd_document::parser::parse as sxd_parse;
use sxd_document::Package;
use sxd_xpath::nodeset::{Node, Nodeset};
use sxd_xpath::{Factory, Value};

use crate::context::Context;
use crate::errors::{Error, Result};
use crate::expression::XPathExpression;

/// A value that can be deserialized from a XML reader.
pub trait FromXml
where
    Self: Sized,
{
    /// Read an instance of `Self` from the provided `reader`.
    ///
    /// The exact semantics of when this fails or succeeds are implementor
    /// defined. However for `Option<T>` a best effort approach should
    /// be followed, returning `Ok(None)` in absence of a value instead of
    /// an error.
    fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self>;
}

enum Anchor<'d> {
    Nodeset(Nodeset<'d>),
    Root(Package),
}

enum ContextRef<'d> {
    Owned(Context<'d>),
    Borrowed(&'d Context<'d>),
}

impl<'d> ContextRef<'d> {
    fn get(&self) -> &Context<'d> {
        match self {
            ContextRef::Owned(ref context) => context,
            ContextRef::Borrowed(context) => context,
        }
    }

    fn reborrow(&'d self) -> ContextRef<'d> {
        ContextRef::Borrowed(self.get())
    }
}

/// Reads a XML tree using XPath queries.
///
/// In the most basic case the XML tree equates a complete XML document,
/// however using the `relative` and `from_node` methods it's also
/// possible to create `Reader` instances anchored at a specific nodeset.
///
/// The parsed document, the evaluation context and any node set produced
/// from them are plain owned or borrowed values; everything is released
/// when the reader goes out of scope, in reverse order of acquisition.
pub struct Reader<'d> {
    context: ContextRef<'d>,
    factory: Factory,
    anchor: Anchor<'d>,
}

impl<'d> Reader<'d> {
    /// Construct a new reader for the specified XML document.
    ///
    /// A context can be specified to provide namespace bindings for the
    /// evaluated expressions.
    pub fn from_str(xml: &str, context: Option<&'d Context<'d>>) -> Result<Self> {
        let package = sxd_parse(xml).map_err(Error::ParseXml)?;
        Ok(Reader::from_package(package, context))
    }

    /// Construct a reader from an already parsed document.
    pub fn from_package(package: Package, context: Option<&'d Context<'d>>) -> Self {
        Reader {
            context: borrow_or_default(context),
            factory: Factory::default(),
            anchor: Anchor::Root(package),
        }
    }

    /// Construct a reader anchored at a single node of another document.
    pub fn from_node(node: Node<'d>, context: Option<&'d Context<'d>>) -> Self {
        let mut nodeset = Nodeset::new();
        nodeset.add(node);

        Reader {
            context: borrow_or_default(context),
            factory: Factory::default(),
            anchor: Anchor::Nodeset(nodeset),
        }
    }

    /// The evaluation context used by this reader.
    pub fn context(&'d self) -> &'d Context<'d> {
        self.context.get()
    }

    /// Read the result of the xpath expression into a value of type `V`.
    pub fn read<'a, V, X>(&'d self, xpath: X) -> Result<V>
    where
        V: FromXml,
        X: Into<XPathExpression<'a>>,
    {
        let expr = xpath.into();
        let reader = self.relative(&expr)?;
        match V::from_xml(&reader) {
            // Name the expression instead of the reader internals.
            Err(Error::MissingAnchor) => Err(Error::NodeNotFound(expr.to_string())),
            other => other,
        }
    }

    /// Evaluate an xpath expression against this reader's anchor.
    ///
    /// The raw library value is returned; it can be a node set, a number,
    /// a string or a boolean depending on the expression.
    pub fn evaluate<'a, X>(&'d self, xpath: X) -> Result<Value<'d>>
    where
        X: Into<XPathExpression<'a>>,
    {
        self.eval(&xpath.into())
    }

    /// Evaluate an xpath expression and return the matched nodes in
    /// document order.
    ///
    /// Expressions producing a number, string or boolean yield an empty
    /// list. Use [`Reader::relative`] when a node set is required.
    pub fn node_set<'a, X>(&'d self, xpath: X) -> Result<Vec<Node<'d>>>
    where
        X: Into<XPathExpression<'a>>,
    {
        match self.evaluate(xpath)? {
            Value::Nodeset(nodeset) => Ok(nodeset.document_order()),
            _ => Ok(Vec::new()),
        }
    }

    /// Returns the anchor node of the current XML tree.
    ///
    /// If there are multiple nodes the first node in document order
    /// will be returned.
    pub fn anchor_node(&'d self) -> Option<Node<'d>> {
        match self.anchor {
            Anchor::Nodeset(ref nodeset) => nodeset.document_order_first(),
            Anchor::Root(ref package) => Some(package.as_document().root().into()),
        }
    }

    /// Returns the anchor node set of the current reader.
    pub fn anchor_nodeset(&'d self) -> Cow<Nodeset<'d>> {
        match self.anchor {
            Anchor::Nodeset(ref nodeset) => Cow::Borrowed(nodeset),
            Anchor::Root(ref package) => {
                let mut nodeset = Nodeset::new();
                nodeset.add(Node::Root(package.as_document().root()));
                Cow::Owned(nodeset)
            }
        }
    }

    /// Evaluates an XPath query and creates a new reader with the resulting
    /// node set as its anchor.
    pub fn relative<'a, X>(&'d self, xpath: X) -> Result<Reader<'d>>
    where
        X: Into<XPathExpression<'a>>,
    {
        let expr = xpath.into();
        let nodeset = match self.eval(&expr)? {
            Value::Nodeset(nodeset) => nodeset,
            _ => return Err(Error::NotNodeset(expr.to_string())),
        };
        Ok(Reader {
            context: self.context.reborrow(),
            factory: Factory::default(),
            anchor: Anchor::Nodeset(nodeset),
        })
    }

    fn eval(&'d self, expr: &XPathExpression<'_>) -> Result<Value<'d>> {
        let anchor = self.anchor_node().ok_or(Error::MissingAnchor)?;
        expr.with_compiled(&self.factory, |xpath| {
            // sxd-xpath panics on an unbound prefix in a name test instead
            // of returning an execution error.
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                xpath.evaluate(self.context.get().inner(), anchor)
            }));
            match outcome {
                Ok(result) => result.map_err(|e| Error::EvalXPath(expr.to_string(), e)),
                Err(payload) => Err(Error::EvalAborted(
                    expr.to_string(),
                    panic_reason(payload),
                )),
            }
        })
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(reason) => *reason,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(reason) => (*reason).to_string(),
            Err(_) => "unknown reason".to_string(),
        },
    }
}

fn borrow_or_default<'d>(context: Option<&'d Context<'d>>) -> ContextRef<'d> {
    match context {
        Some(context) => ContextRef::Borrowed(context),
        None => ContextRef::Owned(Context::default()),
    }
}

impl FromXml for String {
    fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self> {
        reader
            .anchor_node()
            .ok_or(Error::MissingAnchor)
            .map(|n| n.string_value())
    }
}

impl FromXml for Option<String> {
    fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self> {
        Ok(reader.anchor_node().and_then(|node| {
            let s = node.string_value();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }))
    }
}

impl<T> FromXml for Vec<T>
where
    T: FromXml,
{
    fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self> {
        reader
            .anchor_nodeset()
            .document_order()
            .iter()
            .map(|node| {
                let reader = Reader::from_node(*node, Some(reader.context()));
                T::from_xml(&reader)
            })
            .collect()
    }
}

macro_rules! from_parse_str {
    ( $( $type:ty ),* ) => {
        $(
            impl FromXml for $type {
                fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self>
                {
                    let s = String::from_xml(reader)?;
                    s.parse::<$type>().map_err(|e| Error::ParseValue(Box::new(e)))
                }
            }

            impl FromXml for Option<$type> {
                fn from_xml<'d>(reader: &'d Reader<'d>) -> Result<Self>
                {
                    if let Some(s) = Option::<String>::from_xml(reader)? {
                        Ok(Some(s.parse::<$type>().map_err(|e| Error::ParseValue(Box::new(e)))?))
                    } else {
                        Ok(None)
                    }
                }
            }
        )*
    }
}

from_parse_str!(f32, f64, u8, u16, u32, u64, i8, i16, i32, i64, bool);
