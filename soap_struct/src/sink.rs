/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The field-merge policy shared by both wire forms.

use serde_json::{map::Entry, Map, Value};

use crate::{AttrValue, SoapStruct, TypedSequence, XmlElement};

/// The array-form key holding the text content of a struct.
pub const CONTENT_KEY: &str = "_content";

/// An accumulator into which structs and requests write their fields.
pub trait FieldSink {
    /// Writes a scalar as an attribute.
    fn attr<V>(&mut self, name: &str, value: &V)
    where
        V: AttrValue + ?Sized;

    /// Writes the text content of the enclosing element.
    fn text(&mut self, value: &str);

    /// Writes a nested struct under `name`, or under the struct's own name if
    /// none is given.
    fn child<T>(&mut self, value: &T, name: Option<&str>)
    where
        T: SoapStruct;

    /// Writes every element of a sequence under `name`.
    ///
    /// Nothing is written for an empty sequence.
    fn children<T>(&mut self, name: &str, values: &TypedSequence<T>)
    where
        T: SoapStruct;

    /// Writes a scalar as an attribute if it is set.
    ///
    /// An unset value produces no output at all, which keeps it
    /// distinguishable from `false` or `0`.
    fn opt_attr<V>(&mut self, name: &str, value: &Option<V>)
    where
        V: AttrValue,
    {
        if let Some(value) = value {
            self.attr(name, value);
        }
    }

    /// Writes a nested struct if it is present.
    fn opt_child<T>(&mut self, value: &Option<T>, name: Option<&str>)
    where
        T: SoapStruct,
    {
        if let Some(value) = value {
            self.child(value, name);
        }
    }
}

/// The array form.
///
/// Keys already present are left untouched, so the first field written under a
/// given name wins.
impl FieldSink for Map<String, Value> {
    fn attr<V>(&mut self, name: &str, value: &V)
    where
        V: AttrValue + ?Sized,
    {
        insert_if_vacant(self, name, || value.to_array_value());
    }

    fn text(&mut self, value: &str) {
        insert_if_vacant(self, CONTENT_KEY, || Value::from(value));
    }

    fn child<T>(&mut self, value: &T, name: Option<&str>)
    where
        T: SoapStruct,
    {
        insert_if_vacant(self, name.unwrap_or(T::NAME), || {
            Value::Object(value.to_inner_array())
        });
    }

    fn children<T>(&mut self, name: &str, values: &TypedSequence<T>)
    where
        T: SoapStruct,
    {
        if values.is_empty() {
            return;
        }

        insert_if_vacant(self, name, || {
            values
                .iter()
                .map(|value| Value::Object(value.to_inner_array()))
                .collect()
        });
    }
}

fn insert_if_vacant<F>(map: &mut Map<String, Value>, key: &str, value: F)
where
    F: FnOnce() -> Value,
{
    if let Entry::Vacant(entry) = map.entry(key) {
        entry.insert(value());
    }
}

/// The XML form.
///
/// As with the array form, the first value written for an attribute wins.
impl FieldSink for XmlElement {
    fn attr<V>(&mut self, name: &str, value: &V)
    where
        V: AttrValue + ?Sized,
    {
        if self.attribute(name).is_none() {
            self.add_attribute(name, value.to_attr_string());
        }
    }

    fn text(&mut self, value: &str) {
        self.append_text(value);
    }

    fn child<T>(&mut self, value: &T, name: Option<&str>)
    where
        T: SoapStruct,
    {
        self.append(value.to_xml(name));
    }

    fn children<T>(&mut self, name: &str, values: &TypedSequence<T>)
    where
        T: SoapStruct,
    {
        for value in values {
            self.append(value.to_xml(Some(name)));
        }
    }
}
