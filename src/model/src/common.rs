// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small records shared by several resources.

use serde::{Deserialize, Serialize};

/// An open-ended map of settings.
///
/// The shape of these maps is defined by each provider and may change without
/// notice. The builders in [connectors][crate::connectors] and
/// [credentials][crate::credentials] populate the well-known keys.
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// An email participant: a sender or a recipient.
///
/// # Example
/// ```
/// # use mailsuite_model::common::Participant;
/// let p = Participant::new("jane@example.com").set_name("Jane Doe");
/// assert_eq!(p.email, "jane@example.com");
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Participant {
    /// The display name, omitted from the JSON payload when not set.
    pub name: Option<String>,

    /// The email address.
    pub email: String,
}

impl Participant {
    /// Creates a new participant with the given email address and no name.
    pub fn new<T: Into<String>>(email: T) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    /// Sets the value of [name][Participant::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Participant::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(Into::into);
        self
    }
}

/// Describes a file attached to a message or draft.
///
/// By convention `is_inline` is `true` if and only if `content_disposition` is
/// `"inline"`. This library does not enforce that convention.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Attachment {
    /// The attachment id, assigned by the service.
    pub id: String,

    /// The grant that owns the message containing this attachment.
    pub grant_id: Option<String>,

    /// The name of the file.
    pub filename: Option<String>,

    /// The MIME type, for example `image/png`.
    pub content_type: Option<String>,

    /// The size in bytes.
    pub size: Option<i64>,

    /// The `Content-ID`, used to reference inline attachments from the body.
    pub content_id: Option<String>,

    /// The `Content-Disposition`, typically `inline` or `attachment`.
    pub content_disposition: Option<String>,

    /// True if the attachment is displayed inline in the body.
    pub is_inline: Option<bool>,
}

/// A file to upload as part of a message or draft.
///
/// The `content` field holds the **base64-encoded** file contents. This
/// library neither encodes nor validates it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AttachmentUploadRequest {
    /// The name of the file.
    pub filename: String,

    /// The MIME type, for example `application/pdf`.
    pub content_type: String,

    /// The base64-encoded file contents.
    pub content: String,

    /// The `Content-ID` used to reference the attachment from the body.
    pub content_id: Option<String>,

    /// Request the attachment to be displayed inline.
    pub is_inline: Option<bool>,
}

impl AttachmentUploadRequest {
    /// Creates a new upload request with the required fields.
    pub fn new<F, T, C>(filename: F, content_type: T, content: C) -> Self
    where
        F: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [content_id][AttachmentUploadRequest::content_id].
    pub fn set_content_id<T: Into<String>>(mut self, v: T) -> Self {
        self.content_id = Some(v.into());
        self
    }

    /// Sets the value of [is_inline][AttachmentUploadRequest::is_inline].
    pub fn set_is_inline(mut self, v: bool) -> Self {
        self.is_inline = Some(v);
        self
    }
}

/// Requests the service to track what happens to an outbound message.
///
/// All the fields are omitted from the JSON payload when they are `false` or
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TrackingOptions {
    /// Track when the message is opened.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub opens: bool,

    /// Track clicks on the links in the message.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub links: bool,

    /// Track replies in the message thread.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub thread_replies: bool,

    /// A label attached to the tracking events.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl TrackingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [opens][TrackingOptions::opens].
    pub fn set_opens(mut self, v: bool) -> Self {
        self.opens = v;
        self
    }

    /// Sets the value of [links][TrackingOptions::links].
    pub fn set_links(mut self, v: bool) -> Self {
        self.links = v;
        self
    }

    /// Sets the value of [thread_replies][TrackingOptions::thread_replies].
    pub fn set_thread_replies(mut self, v: bool) -> Self {
        self.thread_replies = v;
        self
    }

    /// Sets the value of [label][TrackingOptions::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = v.into();
        self
    }
}
