/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, Event},
    Writer,
};
use serde_json::{json, Map, Value};
use soap_struct::{SerializeOptions, SoapRequest, XmlElement};

use crate::{AdminRequest, Error, SOAP_NS_URI, ZIMBRA_NS_URI};

/// Content which can be placed in the body of a SOAP envelope.
pub trait EnvelopeBody {
    /// The name of the body element.
    fn body_name(&self) -> &'static str;

    fn body_array(&self, options: &SerializeOptions) -> Map<String, Value>;

    fn body_xml(&self, options: &SerializeOptions) -> XmlElement;
}

impl<R> EnvelopeBody for R
where
    R: SoapRequest,
{
    fn body_name(&self) -> &'static str {
        R::NAME
    }

    fn body_array(&self, options: &SerializeOptions) -> Map<String, Value> {
        self.to_array_with(options)
    }

    fn body_xml(&self, options: &SerializeOptions) -> XmlElement {
        self.to_xml_with(options)
    }
}

impl EnvelopeBody for AdminRequest {
    fn body_name(&self) -> &'static str {
        self.name()
    }

    fn body_array(&self, options: &SerializeOptions) -> Map<String, Value> {
        self.to_array_with(options)
    }

    fn body_xml(&self, options: &SerializeOptions) -> XmlElement {
        self.to_xml_with(options)
    }
}

/// A SOAP envelope containing a single admin request.
///
/// The header carries an empty `context` element; session details belong to
/// the transport layer.
#[derive(Clone, Debug)]
pub struct Envelope<B> {
    pub body: B,
}

impl<B> Envelope<B>
where
    B: EnvelopeBody,
{
    pub fn new(body: B) -> Self {
        Self { body }
    }

    /// The options the body is serialized with. Requests inside an envelope
    /// always declare their namespace.
    fn body_options() -> SerializeOptions {
        SerializeOptions::default().with_namespace(true)
    }

    /// Serializes the SOAP envelope as a complete XML document.
    pub fn as_xml_document(&self) -> Result<Vec<u8>, Error> {
        const SOAP_ENVELOPE: &str = "soap:Envelope";
        const SOAP_HEADER: &str = "soap:Header";
        const SOAP_BODY: &str = "soap:Body";

        let mut writer = {
            let inner: Vec<u8> = Default::default();
            Writer::new(inner)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new(SOAP_ENVELOPE).with_attributes([("xmlns:soap", SOAP_NS_URI)]),
        ))?;

        writer.write_event(Event::Start(BytesStart::new(SOAP_HEADER)))?;
        context_xml().write_to(&mut writer)?;
        writer.write_event(Event::End(BytesEnd::new(SOAP_HEADER)))?;

        writer.write_event(Event::Start(BytesStart::new(SOAP_BODY)))?;
        self.body
            .body_xml(&Self::body_options())
            .write_to(&mut writer)?;
        writer.write_event(Event::End(BytesEnd::new(SOAP_BODY)))?;

        writer.write_event(Event::End(BytesEnd::new(SOAP_ENVELOPE)))?;

        let document = writer.into_inner();
        log::debug!(
            "serialized {} envelope as {} bytes of XML",
            self.body.body_name(),
            document.len()
        );

        Ok(document)
    }

    /// Serializes the SOAP envelope in its JSON form.
    pub fn as_json(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            self.body.body_name().to_owned(),
            Value::Object(self.body.body_array(&Self::body_options())),
        );

        log::debug!("serialized {} envelope as JSON", self.body.body_name());

        json!({
            "Header": { "context": { "_jsns": ZIMBRA_NS_URI } },
            "Body": body,
        })
    }
}

fn context_xml() -> XmlElement {
    let mut context = XmlElement::new("context");
    context.add_attribute("xmlns", ZIMBRA_NS_URI);

    context
}
