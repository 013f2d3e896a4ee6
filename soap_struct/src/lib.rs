/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! This crate provides a mechanism for serializing SOAP request structures in
//! two equivalent wire forms: an XML element tree and an associative array
//! (a JSON object) suitable for a JSON-style SOAP envelope.
//!
//! Types describe their content once, by writing fields into a [`FieldSink`].
//! Both accumulators, [`serde_json::Map`] for the array form and
//! [`XmlElement`] for the XML form, implement that trait, so the two forms of
//! the same value always carry the same logical content.
//!
//! # Usage
//!
//! ```
//! use soap_struct::{FieldSink, SoapRequest, SoapStruct, TypedSequence};
//!
//! #[derive(Debug)]
//! struct Volume {
//!     id: i32,
//! }
//!
//! impl SoapStruct for Volume {
//!     const NAME: &'static str = "id";
//!
//!     fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
//!         sink.attr("id", &self.id);
//!     }
//! }
//!
//! struct CheckVolumes {
//!     strict: Option<bool>,
//!     volumes: TypedSequence<Volume>,
//! }
//!
//! impl SoapRequest for CheckVolumes {
//!     const NAME: &'static str = "CheckVolumesRequest";
//!     const NAMESPACE: &'static str = "urn:example";
//!
//!     fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
//!         sink.opt_attr("strict", &self.strict);
//!         sink.children("volume", &self.volumes);
//!     }
//! }
//!
//! let request = CheckVolumes {
//!     strict: Some(false),
//!     volumes: vec![Volume { id: 3 }].into(),
//! };
//!
//! assert_eq!(
//!     serde_json::Value::Object(request.to_array()),
//!     serde_json::json!({ "strict": 0, "volume": [{ "id": 3 }] }),
//! );
//! assert_eq!(
//!     request.to_xml().to_xml_string().unwrap(),
//!     r#"<CheckVolumesRequest strict="0"><volume id="3"/></CheckVolumesRequest>"#,
//! );
//! ```

mod element;
mod impls;
mod request;
mod sequence;
mod sink;

use serde_json::{Map, Value};
use thiserror::Error;

pub use element::{XmlElement, XmlNode};
pub use request::{finalize_array, finalize_xml, SerializeOptions, SoapRequest};
pub use sequence::{DynStruct, TypedSequence};
pub use sink::{FieldSink, CONTENT_KEY};

#[doc(hidden)]
pub use serde_json;

/// A composable value object which can be embedded in a request or in another
/// struct.
pub trait SoapStruct {
    /// The name under which this struct is serialized when its parent does
    /// not supply one.
    const NAME: &'static str;

    /// Writes the attributes, text content and children of this struct.
    fn serialize_fields<S: FieldSink>(&self, sink: &mut S);

    /// Returns the inner array representation, without the enclosing name.
    fn to_inner_array(&self) -> Map<String, Value> {
        let mut inner = Map::new();
        self.serialize_fields(&mut inner);

        inner
    }

    /// Returns the array representation as a single-key map, keyed by `name`
    /// or by [`Self::NAME`] if no name is given.
    fn to_array(&self, name: Option<&str>) -> Map<String, Value> {
        let mut outer = Map::new();
        outer.insert(
            name.unwrap_or(Self::NAME).to_owned(),
            Value::Object(self.to_inner_array()),
        );

        outer
    }

    /// Returns the XML representation as a single element, tagged `name` or
    /// [`Self::NAME`] if no name is given.
    fn to_xml(&self, name: Option<&str>) -> XmlElement {
        let mut element = XmlElement::new(name.unwrap_or(Self::NAME));
        self.serialize_fields(&mut element);

        element
    }
}

/// A scalar which can be serialized as an attribute value.
pub trait AttrValue {
    /// The value as it appears in the array form.
    fn to_array_value(&self) -> Value;

    /// The value as it appears in an XML attribute.
    fn to_attr_string(&self) -> String;
}

/// An error generated while building or rendering a request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("expected element of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to process XML document")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to write XML document")]
    Io(#[from] std::io::Error),

    #[error("rendered XML document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
