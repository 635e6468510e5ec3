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

//! Evaluation context and namespace registration.
//!
//! An XPath expression like `//b:tag` can only be evaluated once the prefix
//! `b` has been bound to a namespace URI. Bindings can be registered one by
//! one with [`Context::set_namespace`], or in bulk from a
//! `"prefix1=href1 prefix2=href2 ..."` list as accepted on the command line.

use sxd_xpath::Context as SxdContext;

use crate::errors::{Error, Result};

/// Wrapper around the evaluation context of the XPath library.
///
/// A fresh context already contains the core XPath function library; this
/// type only adds namespace handling on top.
pub struct Context<'d> {
    inner: SxdContext<'d>,
}

impl<'d> Context<'d> {
    /// Create a new context without any namespace bindings.
    pub fn new() -> Self {
        Context {
            inner: SxdContext::new(),
        }
    }

    /// Create a context with all bindings from a namespace list registered.
    ///
    /// The list is parsed with [`parse_namespace_list`] and is applied
    /// atomically: if any segment is malformed, no binding is registered and
    /// the error is returned.
    pub fn from_namespace_list(list: &str) -> Result<Self> {
        let bindings = parse_namespace_list(list)?;
        let mut context = Context::new();
        for (prefix, uri) in bindings {
            context.set_namespace(prefix, uri);
        }
        Ok(context)
    }

    /// Bind `prefix` to the namespace `uri` for expression evaluation.
    pub fn set_namespace(&mut self, prefix: &str, uri: &str) {
        self.inner.set_namespace(prefix, uri);
    }

    pub(crate) fn inner(&self) -> &SxdContext<'d> {
        &self.inner
    }
}

impl<'d> Default for Context<'d> {
    fn default() -> Self {
        Context::new()
    }
}

/// Split a namespace list of the form `"prefix1=href1 prefix2=href2 ..."`
/// into its `(prefix, uri)` pairs.
///
/// Leading and separating spaces are skipped; each remaining segment must
/// contain a `=` with a non-empty prefix before it and a non-empty URI after
/// it (the URI runs to the next space or the end of the list, and may itself
/// contain further `=` characters). Any malformed segment fails the whole
/// list, so a caller never observes a partially parsed result.
pub fn parse_namespace_list(list: &str) -> Result<Vec<(&str, &str)>> {
    let mut bindings = Vec::new();
    let mut rest = list;

    loop {
        // skip spaces
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        // find prefix
        let (prefix, tail) = rest
            .split_once('=')
            .ok_or_else(|| Error::NamespaceListFormat(rest.to_string()))?;

        // find href
        let (uri, tail) = match tail.split_once(' ') {
            Some((uri, tail)) => (uri, tail),
            None => (tail, ""),
        };

        if prefix.is_empty() || uri.is_empty() {
            return Err(Error::NamespaceListFormat(rest.to_string()));
        }

        bindings.push((prefix, uri));
        rest = tail;
    }

    Ok(bindings)
}
