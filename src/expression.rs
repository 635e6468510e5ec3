// Copyright 2018-2019 Leonardo Schwarz <mail@leoschwarz.com>
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

//! XPath expression convenience typing.
//!
//! Provides a way to pass both pre-compiled and uncompiled expressions
//! as parameter to other methods.

use std::borrow::Cow;
use std::fmt;

use sxd_xpath::{Factory, XPath};

use crate::errors::{Error, Result};

/// An XPath expression that can be evaluated on documents.
///
/// `From` implementations exist so you can pass plain strings as XPath
/// expressions directly. However for repeated evaluation of the same
/// expression you should use the module level function [`parse`] so it is
/// compiled exactly once.
#[derive(Debug)]
pub struct XPathExpression<'a>(Repr<'a>);

/// Compile an expression in advance, this can be useful
/// if you want to avoid an XPath expression being compiled
/// on every invocation.
pub fn parse(xpath_expr: &str) -> Result<XPathExpression<'static>> {
    build_xpath(&Factory::default(), xpath_expr).map(|x| XPathExpression(Repr::Owned(x)))
}

#[derive(Debug)]
enum Repr<'a> {
    Owned(XPath),
    Borrowed(&'a XPath),
    Unparsed(Cow<'a, str>),
}

impl<'a> XPathExpression<'a> {
    /// Run `f` with the compiled form of this expression, compiling it with
    /// `factory` first when it is still a plain string.
    pub(crate) fn with_compiled<T, F>(&self, factory: &Factory, f: F) -> Result<T>
    where
        F: FnOnce(&XPath) -> Result<T>,
    {
        match self.0 {
            Repr::Owned(ref xpath) => f(xpath),
            Repr::Borrowed(xpath) => f(xpath),
            Repr::Unparsed(ref s) => f(&build_xpath(factory, s)?),
        }
    }
}

impl<'a> fmt::Display for XPathExpression<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            // There is no way to recover the source text of a compiled
            // expression, the debug form is the best we can do.
            Repr::Owned(ref xpath) => write!(f, "{:?}", xpath),
            Repr::Borrowed(xpath) => write!(f, "{:?}", xpath),
            Repr::Unparsed(ref s) => write!(f, "{}", s),
        }
    }
}

impl From<XPath> for XPathExpression<'static> {
    fn from(xpath: XPath) -> Self {
        XPathExpression(Repr::Owned(xpath))
    }
}

impl<'a> From<&'a XPath> for XPathExpression<'a> {
    fn from(xpath: &'a XPath) -> Self {
        XPathExpression(Repr::Borrowed(xpath))
    }
}

impl<'a> From<&'a str> for XPathExpression<'a> {
    fn from(s: &'a str) -> Self {
        XPathExpression(Repr::Unparsed(Cow::Borrowed(s)))
    }
}

impl<'a> From<String> for XPathExpression<'a> {
    fn from(s: String) -> Self {
        XPathExpression(Repr::Unparsed(Cow::Owned(s)))
    }
}

impl<'a> From<&'a XPathExpression<'a>> for XPathExpression<'a> {
    fn from(x: &'a XPathExpression<'a>) -> Self {
        match x.0 {
            Repr::Owned(ref xpath) => XPathExpression(Repr::Borrowed(xpath)),
            Repr::Borrowed(xpath) => XPathExpression(Repr::Borrowed(xpath)),
            Repr::Unparsed(ref s) => XPathExpression(Repr::Unparsed(Cow::Borrowed(&**s))),
        }
    }
}

fn build_xpath(factory: &Factory, xpath_expr: &str) -> Result<XPath> {
    factory
        .build(xpath_expr)
        .map_err(|e| Error::ParseXPath(xpath_expr.to_string(), e))?
        .ok_or(Error::EmptyXPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compiles_once() {
        let expr = parse("//child::node()").unwrap();
        // A pre-compiled expression never consults the factory again.
        let factory = Factory::default();
        let visited = expr.with_compiled(&factory, |_| Ok(true)).unwrap();
        assert!(visited);
    }

    #[test]
    fn invalid_expression_is_reported() {
        let err = parse("//[").unwrap_err();
        assert!(matches!(err, Error::ParseXPath(..)));
    }

    #[test]
    fn unparsed_expression_compiles_lazily() {
        let expr = XPathExpression::from("//item");
        let factory = Factory::default();
        assert!(expr.with_compiled(&factory, |_| Ok(())).is_ok());

        let bad = XPathExpression::from("//[");
        assert!(bad.with_compiled(&factory, |_| Ok(())).is_err());
    }

    #[test]
    fn display_of_unparsed_expression_is_source_text() {
        let expr = XPathExpression::from("//item");
        assert_eq!(expr.to_string(), "//item");
    }
}
