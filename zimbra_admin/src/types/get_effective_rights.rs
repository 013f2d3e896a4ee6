/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use soap_struct::{FieldSink, SoapRequest};

use crate::{AttrMethod, EffectiveRightsTargetSelector, GranteeSelector, ADMIN_NS_URI};

/// A request for the effective admin rights a grantee has on a target entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetEffectiveRights {
    target: EffectiveRightsTargetSelector,

    /// Defaults to the authenticated admin when unset.
    grantee: Option<GranteeSelector>,

    /// Whether to list every attribute name in the `getAttrs`/`setAttrs`
    /// elements of the response when all attributes of the target are
    /// gettable/settable.
    expand_all_attrs: Option<AttrMethod>,
}

impl GetEffectiveRights {
    pub fn new(
        target: EffectiveRightsTargetSelector,
        grantee: Option<GranteeSelector>,
        expand_all_attrs: Option<AttrMethod>,
    ) -> Self {
        Self {
            target,
            grantee,
            expand_all_attrs,
        }
    }

    pub fn target(&self) -> &EffectiveRightsTargetSelector {
        &self.target
    }

    pub fn set_target(&mut self, target: EffectiveRightsTargetSelector) -> &mut Self {
        self.target = target;
        self
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

impl SoapRequest for GetEffectiveRights {
    const NAME: &'static str = "GetEffectiveRightsRequest";
    const NAMESPACE: &'static str = ADMIN_NS_URI;

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.child(&self.target, None);
        sink.opt_child(&self.grantee, None);
        sink.opt_attr("expandAllAttrs", &self.expand_all_attrs);
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};
    use soap_struct::{SoapRequest, SoapStruct};

    use crate::{
        get_effective_rights::GetEffectiveRights,
        test_utils::{assert_forms_agree, assert_serialized_array, assert_serialized_xml},
        AttrMethod, EffectiveRightsTargetSelector, GranteeBy, GranteeSelector, GranteeType,
        TargetBy, TargetType,
    };

    fn target() -> EffectiveRightsTargetSelector {
        EffectiveRightsTargetSelector::new(
            TargetType::Domain,
            Some("example.com".to_string()),
            Some(TargetBy::Name),
        )
    }

    #[test]
    fn test_serialize_get_effective_rights_target_only() {
        let request = GetEffectiveRights::new(target(), None, None);

        assert_eq!(
            Value::Object(request.to_array()),
            Value::Object(target().to_array(None)),
            "array form should be exactly the target's own array form"
        );
        assert_serialized_xml(
            &request,
            r#"<GetEffectiveRightsRequest><target type="domain" by="name">example.com</target></GetEffectiveRightsRequest>"#,
        );
        assert_forms_agree(&request);
    }

    #[test]
    fn test_serialize_get_effective_rights_all_fields() {
        let grantee = GranteeSelector::new(
            Some("admin@example.com".to_string()),
            Some(GranteeType::User),
            Some(GranteeBy::Name),
            None,
            Some(true),
        );
        let request =
            GetEffectiveRights::new(target(), Some(grantee), Some(AttrMethod::GetAttrs));

        assert_serialized_array(
            &request,
            json!({
                "target": { "type": "domain", "by": "name", "_content": "example.com" },
                "grantee": { "type": "usr", "by": "name", "all": 1, "_content": "admin@example.com" },
                "expandAllAttrs": "getAttrs",
            }),
        );
        assert_serialized_xml(
            &request,
            r#"<GetEffectiveRightsRequest expandAllAttrs="getAttrs"><target type="domain" by="name">example.com</target><grantee type="usr" by="name" all="1">admin@example.com</grantee></GetEffectiveRightsRequest>"#,
        );
        assert_forms_agree(&request);
    }

    #[test]
    fn test_accessors() {
        let mut request = GetEffectiveRights::new(target(), None, None);
        assert!(request.grantee().is_none());
        assert_eq!(request.expand_all_attrs(), None);

        request
            .set_expand_all_attrs(AttrMethod::SetAttrs)
            .set_grantee(GranteeSelector::default())
            .set_target(EffectiveRightsTargetSelector::new(
                TargetType::Global,
                None,
                None,
            ));

        assert_eq!(request.expand_all_attrs(), Some(AttrMethod::SetAttrs));
        assert_eq!(request.grantee(), Some(&GranteeSelector::default()));
        assert_eq!(request.target().target_type, TargetType::Global);

        request.clear_grantee().clear_expand_all_attrs();
        assert_serialized_array(&request, json!({ "target": { "type": "global" } }));
    }
}
