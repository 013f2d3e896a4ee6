/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use soap_struct::{FieldSink, SoapRequest};

use crate::{AttrMethod, GranteeSelector, ADMIN_NS_URI};

/// A request for all effective admin rights a grantee has, across every
/// target type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetAllEffectiveRights {
    grantee: Option<GranteeSelector>,
    expand_all_attrs: Option<AttrMethod>,
}

impl GetAllEffectiveRights {
    pub fn new(grantee: Option<GranteeSelector>, expand_all_attrs: Option<AttrMethod>) -> Self {
        Self {
            grantee,
            expand_all_attrs,
        }
    }

    pub fn grantee(&self) -> Option<&GranteeSelector> {
        self.grantee.as_ref()
    }

    pub fn set_grantee(&mut self, grantee: GranteeSelector) -> &mut Self {
        self.grantee = Some(grantee);
        self
    }

    pub fn clear_grantee(&mut self) -> &mut Self {
        self.grantee = None;
        self
    }

    pub fn expand_all_attrs(&self) -> Option<AttrMethod> {
        self.expand_all_attrs
    }

    pub fn set_expand_all_attrs(&mut self, expand_all_attrs: AttrMethod) -> &mut Self {
        self.expand_all_attrs = Some(expand_all_attrs);
        self
    }

    pub fn clear_expand_all_attrs(&mut self) -> &mut Self {
        self.expand_all_attrs = None;
        self
    }
}

impl SoapRequest for GetAllEffectiveRights {
    const NAME: &'static str = "GetAllEffectiveRightsRequest";
    const NAMESPACE: &'static str = ADMIN_NS_URI;

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.opt_child(&self.grantee, None);
        sink.opt_attr("expandAllAttrs", &self.expand_all_attrs);
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::{
        get_all_effective_rights::GetAllEffectiveRights,
        test_utils::{assert_forms_agree, assert_serialized_array, assert_serialized_xml},
        AttrMethod, GranteeBy, GranteeSelector, GranteeType,
    };

    #[test]
    fn test_serialize_get_all_effective_rights() {
        let mut request = GetAllEffectiveRights::default();
        request
            .set_grantee(GranteeSelector::new(
                Some("ops".to_string()),
                Some(GranteeType::Group),
                Some(GranteeBy::Name),
                None,
                None,
            ))
            .set_expand_all_attrs(AttrMethod::SetAttrs);

        assert_serialized_array(
            &request,
            json!({
                "grantee": { "type": "grp", "by": "name", "_content": "ops" },
                "expandAllAttrs": "setAttrs",
            }),
        );
        assert_serialized_xml(
            &request,
            r#"<GetAllEffectiveRightsRequest expandAllAttrs="setAttrs"><grantee type="grp" by="name">ops</grantee></GetAllEffectiveRightsRequest>"#,
        );
        assert_forms_agree(&request);
    }

    #[test]
    fn test_serialize_empty_get_all_effective_rights() {
        let request = GetAllEffectiveRights::new(None, None);

        assert_serialized_array(&request, json!({}));
        assert_serialized_xml(&request, "<GetAllEffectiveRightsRequest/>");
        assert!(request.grantee().is_none());
    }
}
