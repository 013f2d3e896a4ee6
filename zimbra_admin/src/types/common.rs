/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use soap_struct::{impl_attr_value_via_display, FieldSink, SoapStruct};
use strum::Display;

pub const ADMIN_NS_URI: &str = "urn:zimbraAdmin";
pub const ZIMBRA_NS_URI: &str = "urn:zimbra";
pub const SOAP_NS_URI: &str = "http://www.w3.org/2003/05/soap-envelope";

/// A struct carrying a single integer `id` attribute.
///
/// Parents usually embed it under a name of their own, such as `volume` or
/// `mbox`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntIdAttr {
    pub id: i32,
}

impl IntIdAttr {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl SoapStruct for IntIdAttr {
    const NAME: &'static str = "id";

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.attr("id", &self.id);
    }
}

/// The kind of entry a right is evaluated against.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TargetType {
    Account,
    CalResource,
    Cos,
    Dl,
    Group,
    Domain,
    Server,
    UcService,
    XmppComponent,
    Zimlet,
    Config,
    Global,
}

/// How a target entry is identified.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TargetBy {
    Id,
    Name,
}

/// The kind of principal rights are granted to.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum GranteeType {
    #[strum(serialize = "usr")]
    User,
    #[strum(serialize = "grp")]
    Group,
    #[strum(serialize = "egp")]
    ExternalGroup,
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "dom")]
    Domain,
    #[strum(serialize = "gst")]
    Guest,
    #[strum(serialize = "key")]
    Key,
    #[strum(serialize = "pub")]
    Public,
    #[strum(serialize = "email")]
    Email,
}

/// How a grantee is identified.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum GranteeBy {
    Id,
    Name,
}

/// Which attribute list to expand when all attributes of a target are
/// gettable or settable.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum AttrMethod {
    GetAttrs,
    SetAttrs,
}

impl_attr_value_via_display!(TargetType, TargetBy, GranteeType, GranteeBy, AttrMethod);

/// Selects the entry effective rights are computed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveRightsTargetSelector {
    pub target_type: TargetType,

    /// How [`Self::value`] identifies the entry.
    pub by: Option<TargetBy>,

    /// The identifier of the entry, serialized as text content.
    pub value: Option<String>,
}

impl EffectiveRightsTargetSelector {
    pub fn new(target_type: TargetType, value: Option<String>, by: Option<TargetBy>) -> Self {
        Self {
            target_type,
            by,
            value,
        }
    }
}

impl SoapStruct for EffectiveRightsTargetSelector {
    const NAME: &'static str = "target";

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.attr("type", &self.target_type);
        sink.opt_attr("by", &self.by);
        if let Some(value) = &self.value {
            sink.text(value);
        }
    }
}

/// Selects the principal whose rights are examined.
///
/// When no grantee is given, operations default to the authenticated admin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GranteeSelector {
    /// The identifier of the grantee, serialized as text content.
    pub value: Option<String>,

    pub grantee_type: Option<GranteeType>,

    pub by: Option<GranteeBy>,

    /// The password of a guest grantee or the access key of a key grantee.
    pub secret: Option<String>,

    /// Whether to include rights granted to groups the grantee belongs to.
    pub all: Option<bool>,
}

impl GranteeSelector {
    pub fn new(
        value: Option<String>,
        grantee_type: Option<GranteeType>,
        by: Option<GranteeBy>,
        secret: Option<String>,
        all: Option<bool>,
    ) -> Self {
        Self {
            value,
            grantee_type,
            by,
            secret,
            all,
        }
    }
}

impl SoapStruct for GranteeSelector {
    const NAME: &'static str = "grantee";

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.opt_attr("type", &self.grantee_type);
        sink.opt_attr("by", &self.by);
        sink.opt_attr("secret", &self.secret);
        sink.opt_attr("all", &self.all);
        if let Some(value) = &self.value {
            sink.text(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use soap_struct::SoapStruct;

    use super::{
        AttrMethod, EffectiveRightsTargetSelector, GranteeBy, GranteeSelector, GranteeType,
        IntIdAttr, TargetBy, TargetType,
    };

    #[test]
    fn enum_wire_values() {
        assert_eq!(TargetType::CalResource.to_string(), "calresource");
        assert_eq!(TargetType::XmppComponent.to_string(), "xmppcomponent");
        assert_eq!(TargetBy::Name.to_string(), "name");
        assert_eq!(GranteeType::ExternalGroup.to_string(), "egp");
        assert_eq!(GranteeType::Public.to_string(), "pub");
        assert_eq!(GranteeBy::Id.to_string(), "id");
        assert_eq!(AttrMethod::GetAttrs.to_string(), "getAttrs");
        assert_eq!(AttrMethod::SetAttrs.to_string(), "setAttrs");
    }

    #[test]
    fn int_id_attr_under_parent_names() {
        let id = IntIdAttr::new(5);

        assert_eq!(
            Value::Object(id.to_array(Some("volume"))),
            json!({ "volume": { "id": 5 } })
        );
        assert_eq!(
            id.to_xml(Some("mbox")).to_xml_string().unwrap(),
            r#"<mbox id="5"/>"#
        );
    }

    #[test]
    fn target_selector_with_value() {
        let target = EffectiveRightsTargetSelector::new(
            TargetType::Account,
            Some("user@example.com".to_string()),
            Some(TargetBy::Name),
        );

        assert_eq!(
            Value::Object(target.to_array(None)),
            json!({
                "target": { "type": "account", "by": "name", "_content": "user@example.com" }
            })
        );
        assert_eq!(
            target.to_xml(None).to_xml_string().unwrap(),
            r#"<target type="account" by="name">user@example.com</target>"#
        );
    }

    #[test]
    fn target_selector_without_value() {
        let target = EffectiveRightsTargetSelector::new(TargetType::Global, None, None);

        assert_eq!(
            Value::Object(target.to_array(None)),
            json!({ "target": { "type": "global" } })
        );
        assert_eq!(
            target.to_xml(None).to_xml_string().unwrap(),
            r#"<target type="global"/>"#
        );
    }

    #[test]
    fn grantee_selector_all_fields() {
        let grantee = GranteeSelector::new(
            Some("guest@example.com".to_string()),
            Some(GranteeType::Guest),
            Some(GranteeBy::Name),
            Some("s3cret".to_string()),
            Some(false),
        );

        assert_eq!(
            Value::Object(grantee.to_array(None)),
            json!({
                "grantee": {
                    "type": "gst",
                    "by": "name",
                    "secret": "s3cret",
                    "all": 0,
                    "_content": "guest@example.com",
                }
            })
        );
        assert_eq!(
            grantee.to_xml(None).to_xml_string().unwrap(),
            r#"<grantee type="gst" by="name" secret="s3cret" all="0">guest@example.com</grantee>"#
        );
    }
}
