/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};
use soap_struct::{SoapRequest, XmlElement, CONTENT_KEY};

/// Assert the expected result of XML serialization.
pub fn assert_serialized_xml<R: SoapRequest>(request: &R, expected_xml_content: &str) {
    let actual_xml_content = request.to_xml().to_xml_string().unwrap();

    assert_eq!(actual_xml_content, expected_xml_content);
}

/// Assert the expected result of array serialization.
pub fn assert_serialized_array<R: SoapRequest>(request: &R, expected: Value) {
    let actual = Value::Object(request.to_array());

    assert_eq!(actual, expected);
}

/// Assert that the array and XML forms of a request carry the same content.
///
/// Both forms are reduced to a common shape first: scalars become strings, and
/// a single repeated element is indistinguishable from a single child.
pub fn assert_forms_agree<R: SoapRequest>(request: &R) {
    let from_array = normalize_array_value(Value::Object(request.to_array()));
    let from_xml = normalize_xml(&request.to_xml());

    assert_eq!(
        from_array, from_xml,
        "array and XML forms of {} should be equivalent",
        R::NAME
    );
}

fn normalize_array_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_array_value(value)))
                .collect(),
        ),
        Value::Array(mut values) if values.len() == 1 => {
            normalize_array_value(values.remove(0))
        }
        Value::Array(values) => values.into_iter().map(normalize_array_value).collect(),
        Value::Number(number) => Value::String(number.to_string()),
        Value::Bool(_) | Value::Null => panic!("array form should not contain {value}"),
        Value::String(_) => value,
    }
}

fn normalize_xml(element: &XmlElement) -> Value {
    let mut map = Map::new();

    for (name, value) in element.attributes() {
        map.insert(name.to_owned(), Value::from(value));
    }

    let text = element.text();
    if !text.is_empty() {
        map.insert(CONTENT_KEY.to_owned(), Value::from(text));
    }

    for child in element.children() {
        if map.contains_key(child.name()) {
            continue;
        }

        let mut siblings: Vec<Value> = element
            .children_named(child.name())
            .map(normalize_xml)
            .collect();
        let value = if siblings.len() == 1 {
            siblings.remove(0)
        } else {
            Value::Array(siblings)
        };
        map.insert(child.name().to_owned(), value);
    }

    Value::Object(map)
}
