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

//! Drafts, the messages saved before they are sent.

use crate::Result;
use crate::common::{Attachment, AttachmentUploadRequest, Participant, TrackingOptions};
use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};

/// A draft, as returned by the service.
///
/// `date` and `created_at` are seconds since the Unix epoch. Use
/// [date_time][Draft::date_time] and [created_at_time][Draft::created_at_time]
/// to get wall-clock times. A zero value is the Unix epoch, there is no
/// separate "unset" state for these fields.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Draft {
    pub id: String,
    pub grant_id: Option<String>,
    pub thread_id: Option<String>,
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub from: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub to: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub cc: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub bcc: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub reply_to: Vec<Participant>,
    /// The HTML or plain text body.
    pub body: Option<String>,
    /// A short, plain text preview of the body.
    pub snippet: Option<String>,
    pub starred: Option<bool>,
    /// The ids of the folders containing this draft.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub folders: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub attachments: Vec<Attachment>,
    pub date: i64,
    pub created_at: i64,
    pub object: Option<String>,
}

impl Draft {
    /// The `date` field as a wall-clock time.
    pub fn date_time(&self) -> Result<time::OffsetDateTime> {
        crate::timestamp::to_offset_date_time(self.date)
    }

    /// The `created_at` field as a wall-clock time.
    pub fn created_at_time(&self) -> Result<time::OffsetDateTime> {
        crate::timestamp::to_offset_date_time(self.created_at)
    }

    /// The `date` field as a [chrono::DateTime].
    #[cfg(feature = "chrono")]
    pub fn date_utc(&self) -> Result<chrono::DateTime<chrono::Utc>> {
        crate::timestamp::to_chrono(self.date)
    }

    /// The `created_at` field as a [chrono::DateTime].
    #[cfg(feature = "chrono")]
    pub fn created_at_utc(&self) -> Result<chrono::DateTime<chrono::Utc>> {
        crate::timestamp::to_chrono(self.created_at)
    }
}

/// The request to create a draft.
///
/// # Example
/// ```
/// # use mailsuite_model::common::Participant;
/// # use mailsuite_model::drafts::CreateDraftRequest;
/// let request = CreateDraftRequest::new()
///     .set_subject("Quarterly report")
///     .set_to([Participant::new("cfo@example.com").set_name("CFO")])
///     .set_send_at(1_700_000_000);
/// let json = serde_json::to_value(&request)?;
/// assert_eq!(json["send_at"], 1_700_000_000);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateDraftRequest {
    pub subject: Option<String>,
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub to: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub cc: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub bcc: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub reply_to: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub attachments: Vec<AttachmentUploadRequest>,
    pub starred: Option<bool>,
    /// Schedule the message, in seconds since the Unix epoch.
    pub send_at: Option<i64>,
    /// The message this draft replies to.
    pub reply_to_message_id: Option<String>,
    pub tracking_options: Option<TrackingOptions>,
}

impl CreateDraftRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subject][CreateDraftRequest::subject].
    pub fn set_subject<T: Into<String>>(mut self, v: T) -> Self {
        self.subject = Some(v.into());
        self
    }

    /// Sets the value of [body][CreateDraftRequest::body].
    pub fn set_body<T: Into<String>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sets the value of [to][CreateDraftRequest::to].
    pub fn set_to<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.to = v.into_iter().collect();
        self
    }

    /// Sets the value of [cc][CreateDraftRequest::cc].
    pub fn set_cc<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.cc = v.into_iter().collect();
        self
    }

    /// Sets the value of [bcc][CreateDraftRequest::bcc].
    pub fn set_bcc<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.bcc = v.into_iter().collect();
        self
    }

    /// Sets the value of [reply_to][CreateDraftRequest::reply_to].
    pub fn set_reply_to<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.reply_to = v.into_iter().collect();
        self
    }

    /// Sets the value of [attachments][CreateDraftRequest::attachments].
    pub fn set_attachments<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = AttachmentUploadRequest>,
    {
        self.attachments = v.into_iter().collect();
        self
    }

    /// Sets the value of [starred][CreateDraftRequest::starred].
    pub fn set_starred(mut self, v: bool) -> Self {
        self.starred = Some(v);
        self
    }

    /// Sets the value of [send_at][CreateDraftRequest::send_at].
    pub fn set_send_at(mut self, v: i64) -> Self {
        self.send_at = Some(v);
        self
    }

    /// Sets the value of
    /// [reply_to_message_id][CreateDraftRequest::reply_to_message_id].
    pub fn set_reply_to_message_id<T: Into<String>>(mut self, v: T) -> Self {
        self.reply_to_message_id = Some(v.into());
        self
    }

    /// Sets the value of [tracking_options][CreateDraftRequest::tracking_options].
    pub fn set_tracking_options(mut self, v: TrackingOptions) -> Self {
        self.tracking_options = Some(v);
        self
    }
}

/// The request to change a draft.
///
/// Fields that are not set are not changed. Setting a list to an empty value
/// clears it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateDraftRequest {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub to: Option<Vec<Participant>>,
    pub cc: Option<Vec<Participant>>,
    pub bcc: Option<Vec<Participant>>,
    pub reply_to: Option<Vec<Participant>>,
    pub attachments: Option<Vec<AttachmentUploadRequest>>,
    pub starred: Option<bool>,
    pub send_at: Option<i64>,
    pub reply_to_message_id: Option<String>,
    pub tracking_options: Option<TrackingOptions>,
}

impl UpdateDraftRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subject][UpdateDraftRequest::subject].
    pub fn set_subject<T: Into<String>>(mut self, v: T) -> Self {
        self.subject = Some(v.into());
        self
    }

    /// Sets the value of [body][UpdateDraftRequest::body].
    pub fn set_body<T: Into<String>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sets the value of [to][UpdateDraftRequest::to].
    pub fn set_to<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.to = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [cc][UpdateDraftRequest::cc].
    pub fn set_cc<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.cc = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [bcc][UpdateDraftRequest::bcc].
    pub fn set_bcc<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.bcc = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [reply_to][UpdateDraftRequest::reply_to].
    pub fn set_reply_to<T: IntoIterator<Item = Participant>>(mut self, v: T) -> Self {
        self.reply_to = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [attachments][UpdateDraftRequest::attachments].
    pub fn set_attachments<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = AttachmentUploadRequest>,
    {
        self.attachments = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [starred][UpdateDraftRequest::starred].
    pub fn set_starred(mut self, v: bool) -> Self {
        self.starred = Some(v);
        self
    }

    /// Sets or clears the value of [send_at][UpdateDraftRequest::send_at].
    pub fn set_or_clear_send_at(mut self, v: Option<i64>) -> Self {
        self.send_at = v;
        self
    }

    /// Sets the value of
    /// [reply_to_message_id][UpdateDraftRequest::reply_to_message_id].
    pub fn set_reply_to_message_id<T: Into<String>>(mut self, v: T) -> Self {
        self.reply_to_message_id = Some(v.into());
        self
    }

    /// Sets the value of [tracking_options][UpdateDraftRequest::tracking_options].
    pub fn set_tracking_options(mut self, v: TrackingOptions) -> Self {
        self.tracking_options = Some(v);
        self
    }
}

/// The filters to list drafts.
///
/// # Example
/// ```
/// # use mailsuite_model::drafts::DraftListOptions;
/// # use mailsuite_model::query::{ListOptions, QueryValue};
/// let options = DraftListOptions::new().set_unread(false);
/// let params = options.encode();
/// assert_eq!(params.get("unread"), Some(&QueryValue::Bool(false)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct DraftListOptions {
    pub limit: Option<i32>,
    pub page_token: String,
    pub subject: Option<String>,
    /// Match drafts with any of these addresses in `to`, `cc`, or `bcc`.
    pub any_email: Vec<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub unread: Option<bool>,
    pub starred: Option<bool>,
    pub has_attachment: Option<bool>,
    pub thread_id: Option<String>,
}

impl DraftListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][DraftListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [page_token][DraftListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [subject][DraftListOptions::subject].
    pub fn set_subject<T: Into<String>>(mut self, v: T) -> Self {
        self.subject = Some(v.into());
        self
    }

    /// Sets the value of [any_email][DraftListOptions::any_email].
    pub fn set_any_email<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.any_email = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [to][DraftListOptions::to].
    pub fn set_to<T: Into<String>>(mut self, v: T) -> Self {
        self.to = Some(v.into());
        self
    }

    /// Sets the value of [cc][DraftListOptions::cc].
    pub fn set_cc<T: Into<String>>(mut self, v: T) -> Self {
        self.cc = Some(v.into());
        self
    }

    /// Sets the value of [bcc][DraftListOptions::bcc].
    pub fn set_bcc<T: Into<String>>(mut self, v: T) -> Self {
        self.bcc = Some(v.into());
        self
    }

    /// Sets the value of [unread][DraftListOptions::unread].
    pub fn set_unread(mut self, v: bool) -> Self {
        self.unread = Some(v);
        self
    }

    /// Sets or clears the value of [unread][DraftListOptions::unread].
    pub fn set_or_clear_unread(mut self, v: Option<bool>) -> Self {
        self.unread = v;
        self
    }

    /// Sets the value of [starred][DraftListOptions::starred].
    pub fn set_starred(mut self, v: bool) -> Self {
        self.starred = Some(v);
        self
    }

    /// Sets the value of [has_attachment][DraftListOptions::has_attachment].
    pub fn set_has_attachment(mut self, v: bool) -> Self {
        self.has_attachment = Some(v);
        self
    }

    /// Sets the value of [thread_id][DraftListOptions::thread_id].
    pub fn set_thread_id<T: Into<String>>(mut self, v: T) -> Self {
        self.thread_id = Some(v.into());
        self
    }
}

impl ListOptions for DraftListOptions {
    fn encode(&self) -> QueryMap {
        [
            format("limit", &self.limit),
            format("page_token", &self.page_token),
            format("subject", &self.subject),
            format("any_email", &self.any_email),
            format("to", &self.to),
            format("cc", &self.cc),
            format("bcc", &self.bcc),
            format("unread", &self.unread),
            format("starred", &self.starred),
            format("has_attachment", &self.has_attachment),
            format("thread_id", &self.thread_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryValue;
    use serde_json::{Value, json};
    use test_case::test_case;
    use time::macros::datetime;
    type Result = anyhow::Result<()>;

    #[test_case(DraftListOptions::new(), QueryMap::new())]
    #[test_case(DraftListOptions::new().set_any_email(["a@test.com", "b@test.com"]),
        QueryMap::from([("any_email", QueryValue::Strings(vec!["a@test.com".into(), "b@test.com".into()]))]))]
    #[test_case(DraftListOptions::new().set_any_email(Vec::<String>::new()), QueryMap::new())]
    #[test_case(DraftListOptions::new().set_subject(""), QueryMap::from([("subject", QueryValue::from(""))]))]
    #[test_case(DraftListOptions::new().set_to("to@example.com"), QueryMap::from([("to", QueryValue::from("to@example.com"))]))]
    #[test_case(DraftListOptions::new().set_cc("cc@example.com"), QueryMap::from([("cc", QueryValue::from("cc@example.com"))]))]
    #[test_case(DraftListOptions::new().set_bcc("bcc@example.com"), QueryMap::from([("bcc", QueryValue::from("bcc@example.com"))]))]
    #[test_case(DraftListOptions::new().set_unread(false), QueryMap::from([("unread", QueryValue::Bool(false))]))]
    #[test_case(DraftListOptions::new().set_unread(true).set_or_clear_unread(None), QueryMap::new())]
    #[test_case(DraftListOptions::new().set_starred(true), QueryMap::from([("starred", QueryValue::Bool(true))]))]
    #[test_case(DraftListOptions::new().set_has_attachment(false), QueryMap::from([("has_attachment", QueryValue::Bool(false))]))]
    #[test_case(DraftListOptions::new().set_thread_id("t-1"), QueryMap::from([("thread_id", QueryValue::from("t-1"))]))]
    #[test_case(DraftListOptions::new().set_limit(50).set_page_token(""), QueryMap::from([("limit", QueryValue::Int(50))]))]
    fn list_options(input: DraftListOptions, want: QueryMap) {
        let got = input.encode();
        assert_eq!(got, want);
    }

    #[test]
    fn list_options_all() {
        let input = DraftListOptions::new()
            .set_limit(5)
            .set_page_token("p")
            .set_subject("s")
            .set_any_email(["a@test.com"])
            .set_to("t")
            .set_cc("c")
            .set_bcc("b")
            .set_unread(true)
            .set_starred(false)
            .set_has_attachment(true)
            .set_thread_id("th");
        let got = input.encode();
        assert_eq!(got.len(), 11, "{got:?}");
        assert_eq!(got.get("any_email"), Some(&QueryValue::Strings(vec!["a@test.com".into()])));
        assert_eq!(got.get("starred"), Some(&QueryValue::Bool(false)));
    }

    fn canonical() -> Value {
        json!({
            "id": "draft-1",
            "grant_id": "grant-1",
            "thread_id": "thread-1",
            "subject": "Hello",
            "from": [{"name": "Me", "email": "me@example.com"}],
            "to": [{"email": "you@example.com"}],
            "cc": [{"name": "Cc", "email": "cc@example.com"}],
            "reply_to": [{"email": "reply@example.com"}],
            "body": "<p>Hi</p>",
            "snippet": "Hi",
            "starred": false,
            "folders": ["drafts"],
            "labels": ["important"],
            "attachments": [{"id": "att-1", "filename": "a.txt", "content_type": "text/plain", "size": 12, "is_inline": false}],
            "date": 1_700_000_000_i64,
            "created_at": 1_699_999_000_i64,
            "object": "draft",
        })
    }

    #[test]
    fn draft() -> Result {
        let input = canonical();
        let got = serde_json::from_value::<Draft>(input.clone())?;
        assert_eq!(got.to, vec![Participant::new("you@example.com")]);
        assert!(got.bcc.is_empty(), "{got:?}");
        assert_eq!(got.attachments[0].size, Some(12));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn draft_time() -> Result {
        let got = serde_json::from_value::<Draft>(canonical())?;
        assert_eq!(got.date_time()?, datetime!(2023-11-14 22:13:20 UTC));
        assert_eq!(got.created_at_time()?.unix_timestamp(), 1_699_999_000);
        Ok(())
    }

    #[test]
    fn draft_time_zero() -> Result {
        let got = Draft::default();
        assert_eq!(got.date_time()?, time::OffsetDateTime::UNIX_EPOCH);
        assert_eq!(got.created_at_time()?, time::OffsetDateTime::UNIX_EPOCH);
        Ok(())
    }

    #[test]
    fn draft_time_out_of_range() {
        let mut draft = Draft::default();
        draft.created_at = i64::MIN;
        let got = draft.created_at_time();
        assert!(matches!(got, Err(crate::Error::TimestampOutOfRange { .. })), "{got:?}");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn draft_time_chrono() -> Result {
        let got = serde_json::from_value::<Draft>(canonical())?;
        assert_eq!(got.date_utc()?.timestamp(), 1_700_000_000);
        assert_eq!(got.created_at_utc()?.timestamp(), 1_699_999_000);
        assert_eq!(Draft::default().date_utc()?.timestamp(), 0);
        Ok(())
    }

    #[test]
    fn create() -> Result {
        let input = CreateDraftRequest::new()
            .set_subject("Hello")
            .set_body("Hi")
            .set_to([Participant::new("you@example.com").set_name("You")])
            .set_cc([Participant::new("cc@example.com")])
            .set_bcc([Participant::new("bcc@example.com")])
            .set_reply_to([Participant::new("me@example.com")])
            .set_attachments([AttachmentUploadRequest::new("a.txt", "text/plain", "aGVsbG8=")
                .set_content_id("cid-1")
                .set_is_inline(true)])
            .set_starred(true)
            .set_send_at(1_700_000_000)
            .set_reply_to_message_id("msg-1")
            .set_tracking_options(TrackingOptions::new().set_opens(true).set_label("campaign"));
        let want = json!({
            "subject": "Hello",
            "body": "Hi",
            "to": [{"name": "You", "email": "you@example.com"}],
            "cc": [{"email": "cc@example.com"}],
            "bcc": [{"email": "bcc@example.com"}],
            "reply_to": [{"email": "me@example.com"}],
            "attachments": [{
                "filename": "a.txt",
                "content_type": "text/plain",
                "content": "aGVsbG8=",
                "content_id": "cid-1",
                "is_inline": true,
            }],
            "starred": true,
            "send_at": 1_700_000_000_i64,
            "reply_to_message_id": "msg-1",
            "tracking_options": {"opens": true, "label": "campaign"},
        });
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, want);
        assert_eq!(serde_json::from_value::<CreateDraftRequest>(got)?, input);
        Ok(())
    }

    #[test]
    fn create_empty() -> Result {
        let got = serde_json::to_value(CreateDraftRequest::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test_case(UpdateDraftRequest::new(), json!({}))]
    #[test_case(UpdateDraftRequest::new().set_to([]), json!({"to": []}))]
    #[test_case(UpdateDraftRequest::new().set_starred(false), json!({"starred": false}))]
    #[test_case(UpdateDraftRequest::new().set_or_clear_send_at(Some(0)), json!({"send_at": 0}))]
    #[test_case(UpdateDraftRequest::new().set_subject("s").set_body("b"), json!({"subject": "s", "body": "b"}))]
    fn update(input: UpdateDraftRequest, want: Value) -> Result {
        assert_eq!(serde_json::to_value(&input)?, want);
        Ok(())
    }
}
