/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};
use soap_struct::{SerializeOptions, SoapRequest, XmlElement};

use crate::{
    check_blob_consistency::CheckBlobConsistency,
    get_all_effective_rights::GetAllEffectiveRights, get_effective_rights::GetEffectiveRights,
};

/// Available admin operations (requests), for callers which pick the
/// operation at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminRequest {
    /// Check blob and item metadata for inconsistencies.
    CheckBlobConsistency(CheckBlobConsistency),

    /// Retrieve the effective rights of a grantee on one target.
    GetEffectiveRights(GetEffectiveRights),

    /// Retrieve all effective rights of a grantee.
    GetAllEffectiveRights(GetAllEffectiveRights),
}

/// Expands to `$body` with `$request` bound to the operation inside `$self`.
macro_rules! dispatch {
    ($self:expr, $request:ident => $body:expr) => {
        match $self {
            AdminRequest::CheckBlobConsistency($request) => $body,
            AdminRequest::GetEffectiveRights($request) => $body,
            AdminRequest::GetAllEffectiveRights($request) => $body,
        }
    };
}

impl AdminRequest {
    /// The name of the root element of the request.
    pub fn name(&self) -> &'static str {
        fn name_of<R: SoapRequest>(_: &R) -> &'static str {
            R::NAME
        }

        dispatch!(self, request => name_of(request))
    }

    pub fn namespace(&self) -> &'static str {
        fn namespace_of<R: SoapRequest>(_: &R) -> &'static str {
            R::NAMESPACE
        }

        dispatch!(self, request => namespace_of(request))
    }

    pub fn to_array_with(&self, options: &SerializeOptions) -> Map<String, Value> {
        dispatch!(self, request => request.to_array_with(options))
    }

    pub fn to_xml_with(&self, options: &SerializeOptions) -> XmlElement {
        dispatch!(self, request => request.to_xml_with(options))
    }
}

impl From<CheckBlobConsistency> for AdminRequest {
    fn from(value: CheckBlobConsistency) -> Self {
        Self::CheckBlobConsistency(value)
    }
}

impl From<GetEffectiveRights> for AdminRequest {
    fn from(value: GetEffectiveRights) -> Self {
        Self::GetEffectiveRights(value)
    }
}

impl From<GetAllEffectiveRights> for AdminRequest {
    fn from(value: GetAllEffectiveRights) -> Self {
        Self::GetAllEffectiveRights(value)
    }
}
