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

use xpath_eval::{execute_xpath_expression, Error};

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog xmlns:m="urn:media">
  <book id="bk101">
    <title>Neuromancer</title>
    <m:format>paperback</m:format>
  </book>
  <book id="bk102">
    <title>Snow Crash</title>
    <m:format>hardcover</m:format>
  </book>
</catalog>"#;

fn run(xml: &str, xpath: &str, namespaces: Option<&str>) -> Result<String, Error> {
    let mut out = Vec::new();
    execute_xpath_expression(xml, xpath, namespaces, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_report_of_elements() {
    assert_eq!(
        run(CATALOG, "//book", None).unwrap(),
        "Result (2 nodes):\n\
         = element node \"book\"\n\
         = element node \"book\"\n"
    );
}

#[test]
fn test_report_of_empty_node_set() {
    assert_eq!(
        run(CATALOG, "//magazine", None).unwrap(),
        "Result (0 nodes):\n"
    );
}

#[test]
fn test_namespaced_elements_report_href() {
    assert_eq!(
        run(CATALOG, "//m:format", Some("m=urn:media")).unwrap(),
        "Result (2 nodes):\n\
         = element node \"urn:media:format\"\n\
         = element node \"urn:media:format\"\n"
    );
}

#[test]
fn test_prefix_in_list_may_differ_from_document() {
    assert_eq!(
        run(CATALOG, "//media:format", Some("media=urn:media")).unwrap(),
        "Result (2 nodes):\n\
         = element node \"urn:media:format\"\n\
         = element node \"urn:media:format\"\n"
    );
}

#[test]
fn test_report_of_attributes() {
    assert_eq!(
        run(CATALOG, "//book/@id", None).unwrap(),
        "Result (2 nodes):\n\
         = node \"id\": type 2\n\
         = node \"id\": type 2\n"
    );
}

#[test]
fn test_report_follows_document_order() {
    assert_eq!(
        run(CATALOG, "//title | //m:format", Some("m=urn:media")).unwrap(),
        "Result (4 nodes):\n\
         = element node \"title\"\n\
         = element node \"urn:media:format\"\n\
         = element node \"title\"\n\
         = element node \"urn:media:format\"\n"
    );
}

#[test]
fn test_scalar_expression_reports_zero_nodes() {
    assert_eq!(
        run(CATALOG, "count(//book)", None).unwrap(),
        "Result (0 nodes):\n"
    );
}

#[test]
fn test_unreadable_document_is_rejected() {
    let err = run("<broken", "//book", None).unwrap_err();
    assert!(matches!(err, Error::ParseXml(_)));
}

#[test]
fn test_document_errors_take_precedence_over_list_errors() {
    let err = run("<broken", "//book", Some("no equals sign")).unwrap_err();
    assert!(matches!(err, Error::ParseXml(_)));
}

#[test]
fn test_malformed_namespace_list_is_rejected() {
    let err = run(CATALOG, "//book", Some("nonsense")).unwrap_err();
    assert!(matches!(err, Error::NamespaceListFormat(_)));
}

#[test]
fn test_invalid_expression_is_rejected() {
    let err = run(CATALOG, "//book[", None).unwrap_err();
    assert!(matches!(err, Error::ParseXPath(..)));
}

#[test]
fn test_unknown_prefix_fails_evaluation() {
    let err = run(CATALOG, "//m:format", None).unwrap_err();
    assert!(matches!(err, Error::EvalAborted(..)));
}
