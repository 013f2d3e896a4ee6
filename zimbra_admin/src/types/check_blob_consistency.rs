/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use soap_struct::{FieldSink, SoapRequest, TypedSequence};

use crate::{IntIdAttr, ADMIN_NS_URI};

/// A request to check for items that have no blob, blobs that have no item,
/// and items whose metadata records an incorrect blob size.
///
/// Without any volume or mailbox, every volume of every mailbox is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckBlobConsistency {
    volumes: TypedSequence<IntIdAttr>,
    mboxes: TypedSequence<IntIdAttr>,
    check_size: Option<bool>,
    report_used_blobs: Option<bool>,
}

impl CheckBlobConsistency {
    pub fn new(
        volumes: Vec<IntIdAttr>,
        mboxes: Vec<IntIdAttr>,
        check_size: Option<bool>,
        report_used_blobs: Option<bool>,
    ) -> Self {
        Self {
            volumes: volumes.into(),
            mboxes: mboxes.into(),
            check_size,
            report_used_blobs,
        }
    }

    /// Adds a volume to restrict the check to.
    pub fn add_volume(&mut self, volume: IntIdAttr) -> &mut Self {
        self.volumes.add(volume);
        self
    }

    pub fn volumes(&self) -> &TypedSequence<IntIdAttr> {
        &self.volumes
    }

    /// Adds a mailbox to restrict the check to.
    pub fn add_mbox(&mut self, mbox: IntIdAttr) -> &mut Self {
        self.mboxes.add(mbox);
        self
    }

    pub fn mboxes(&self) -> &TypedSequence<IntIdAttr> {
        &self.mboxes
    }

    /// Whether blob sizes are checked against item metadata.
    pub fn check_size(&self) -> Option<bool> {
        self.check_size
    }

    pub fn set_check_size(&mut self, check_size: bool) -> &mut Self {
        self.check_size = Some(check_size);
        self
    }

    pub fn clear_check_size(&mut self) -> &mut Self {
        self.check_size = None;
        self
    }

    /// Whether the response lists the blobs in use.
    pub fn report_used_blobs(&self) -> Option<bool> {
        self.report_used_blobs
    }

    pub fn set_report_used_blobs(&mut self, report_used_blobs: bool) -> &mut Self {
        self.report_used_blobs = Some(report_used_blobs);
        self
    }

    pub fn clear_report_used_blobs(&mut self) -> &mut Self {
        self.report_used_blobs = None;
        self
    }
}

impl SoapRequest for CheckBlobConsistency {
    const NAME: &'static str = "CheckBlobConsistencyRequest";
    const NAMESPACE: &'static str = ADMIN_NS_URI;

    fn serialize_fields<S: FieldSink>(&self, sink: &mut S) {
        sink.opt_attr("checkSize", &self.check_size);
        sink.opt_attr("reportUsedBlobs", &self.report_used_blobs);
        sink.children("volume", &self.volumes);
        sink.children("mbox", &self.mboxes);
    }
}
