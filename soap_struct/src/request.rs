/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::{FieldSink, XmlElement};

/// The array-form key carrying a request's namespace.
const NAMESPACE_KEY: &str = "_jsns";

/// The XML attribute carrying a request's namespace.
const NAMESPACE_ATTR: &str = "xmlns";

/// Options applied when finalizing a serialized request.
///
/// The default options leave the request content untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Whether to declare [`SoapRequest::NAMESPACE`] on the request, as
    /// `xmlns` in the XML form and `_jsns` in the array form.
    pub include_namespace: bool,
}

impl SerializeOptions {
    pub fn with_namespace(mut self, include_namespace: bool) -> Self {
        self.include_namespace = include_namespace;
        self
    }
}

/// A top-level request for a single remote operation.
pub trait SoapRequest {
    /// The name of the root element of the request.
    const NAME: &'static str;

    /// The namespace the request belongs to.
    const NAMESPACE: &'static str;

    /// Writes the fields of this request into a freshly created accumulator.
    fn serialize_fields<S: FieldSink>(&self, sink: &mut S);

    /// Returns the array form of this request.
    fn to_array(&self) -> Map<String, Value> {
        self.to_array_with(&SerializeOptions::default())
    }

    /// Returns the XML form of this request, as an element named
    /// [`Self::NAME`].
    fn to_xml(&self) -> XmlElement {
        self.to_xml_with(&SerializeOptions::default())
    }

    fn to_array_with(&self, options: &SerializeOptions) -> Map<String, Value> {
        let mut fields = Map::new();
        self.serialize_fields(&mut fields);

        finalize_array::<Self>(fields, options)
    }

    fn to_xml_with(&self, options: &SerializeOptions) -> XmlElement {
        let mut root = XmlElement::new(Self::NAME);
        self.serialize_fields(&mut root);

        finalize_xml::<Self>(root, options)
    }
}

/// Completes the array form of request `R` once its fields are written.
pub fn finalize_array<R>(
    mut fields: Map<String, Value>,
    options: &SerializeOptions,
) -> Map<String, Value>
where
    R: SoapRequest + ?Sized,
{
    if options.include_namespace && !fields.contains_key(NAMESPACE_KEY) {
        fields.insert(NAMESPACE_KEY.to_owned(), Value::from(R::NAMESPACE));
    }

    log::trace!("finalized {} array form with {} keys", R::NAME, fields.len());

    fields
}

/// Completes the XML form of request `R` once its fields are written.
pub fn finalize_xml<R>(mut root: XmlElement, options: &SerializeOptions) -> XmlElement
where
    R: SoapRequest + ?Sized,
{
    if options.include_namespace && root.attribute(NAMESPACE_ATTR).is_none() {
        root.add_attribute(NAMESPACE_ATTR, R::NAMESPACE);
    }

    log::trace!(
        "finalized {} XML form with {} child nodes",
        R::NAME,
        root.nodes().len()
    );

    root
}
