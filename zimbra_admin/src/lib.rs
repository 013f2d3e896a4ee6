/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Typed request models for the Zimbra administrative SOAP API.
//!
//! Every operation is a plain value populated through its constructor and
//! accessors, then serialized with [`SoapRequest::to_array`] (the JSON-style
//! form) or [`SoapRequest::to_xml`].

use thiserror::Error;

mod types;

pub use soap_struct::{SerializeOptions, SoapRequest, SoapStruct, TypedSequence, XmlElement};
pub use types::*;

#[cfg(test)]
mod test_utils;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to serialize request")]
    Serialize(#[from] soap_struct::Error),

    #[error("error manipulating XML data")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to write XML document")]
    Io(#[from] std::io::Error),
}
