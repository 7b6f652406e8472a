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

//! Webhooks notify the application when data changes.

use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};

/// The well-known trigger types.
///
/// Trigger types are strings, the service may add more at any time. These
/// constants name the values known to this library.
pub mod trigger_type {
    pub const CALENDAR_CREATED: &str = "calendar.created";
    pub const CALENDAR_UPDATED: &str = "calendar.updated";
    pub const CALENDAR_DELETED: &str = "calendar.deleted";
    pub const EVENT_CREATED: &str = "event.created";
    pub const EVENT_UPDATED: &str = "event.updated";
    pub const EVENT_DELETED: &str = "event.deleted";
    pub const FOLDER_CREATED: &str = "folder.created";
    pub const FOLDER_UPDATED: &str = "folder.updated";
    pub const FOLDER_DELETED: &str = "folder.deleted";
    pub const GRANT_CREATED: &str = "grant.created";
    pub const GRANT_UPDATED: &str = "grant.updated";
    pub const GRANT_DELETED: &str = "grant.deleted";
    pub const GRANT_EXPIRED: &str = "grant.expired";
    pub const MESSAGE_CREATED: &str = "message.created";
    pub const MESSAGE_UPDATED: &str = "message.updated";
    pub const MESSAGE_SEND_SUCCESS: &str = "message.send_success";
    pub const MESSAGE_SEND_FAILED: &str = "message.send_failed";
    pub const MESSAGE_OPENED: &str = "message.opened";
    pub const MESSAGE_LINK_CLICKED: &str = "message.link_clicked";
    pub const THREAD_REPLIED: &str = "thread.replied";
}

wire_enum! {
    /// The delivery status of a webhook.
    WebhookStatus {
        Active => "active",
        /// Recent deliveries failed, the service keeps retrying.
        Failing => "failing",
        /// The service stopped delivering notifications.
        Failed => "failed",
        Paused => "paused",
    }
}

/// A webhook, as returned by the service.
///
/// The `webhook_secret` is only returned when the webhook is created, or when
/// the secret is rotated.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Webhook {
    pub id: String,
    pub description: Option<String>,
    /// See [trigger_type] for the well-known values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub trigger_types: Vec<String>,
    pub webhook_url: Option<String>,
    pub webhook_secret: Option<String>,
    pub status: Option<WebhookStatus>,
    /// Who to notify when the webhook starts failing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub notification_email_addresses: Vec<String>,
    pub status_updated_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// The request to create a webhook.
///
/// # Example
/// ```
/// # use mailsuite_model::webhooks::{CreateWebhookRequest, trigger_type};
/// let request = CreateWebhookRequest::new(
///     "https://example.com/hooks", [trigger_type::MESSAGE_CREATED, trigger_type::EVENT_CREATED]);
/// assert_eq!(request.trigger_types.len(), 2);
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateWebhookRequest {
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub trigger_types: Vec<String>,
    pub webhook_url: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub notification_email_addresses: Vec<String>,
}

impl CreateWebhookRequest {
    pub fn new<U, T, V>(webhook_url: U, trigger_types: T) -> Self
    where
        U: Into<String>,
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            webhook_url: webhook_url.into(),
            trigger_types: trigger_types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the value of [description][CreateWebhookRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of
    /// [notification_email_addresses][CreateWebhookRequest::notification_email_addresses].
    pub fn set_notification_email_addresses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.notification_email_addresses = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The request to change a webhook.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateWebhookRequest {
    pub trigger_types: Option<Vec<String>>,
    pub webhook_url: Option<String>,
    pub description: Option<String>,
    pub notification_email_addresses: Option<Vec<String>>,
    /// Use [WebhookStatus::Active] or [WebhookStatus::Paused] to resume or
    /// pause deliveries.
    pub status: Option<WebhookStatus>,
}

impl UpdateWebhookRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [trigger_types][UpdateWebhookRequest::trigger_types].
    pub fn set_trigger_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.trigger_types = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [webhook_url][UpdateWebhookRequest::webhook_url].
    pub fn set_webhook_url<T: Into<String>>(mut self, v: T) -> Self {
        self.webhook_url = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateWebhookRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of
    /// [notification_email_addresses][UpdateWebhookRequest::notification_email_addresses].
    pub fn set_notification_email_addresses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.notification_email_addresses = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [status][UpdateWebhookRequest::status].
    pub fn set_status<T: Into<WebhookStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// The response to rotating a webhook secret.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RotateWebhookSecretResponse {
    pub webhook_secret: String,
}

/// The IP addresses used by the service to deliver notifications.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct WebhookIpAddressesResponse {
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub ip_addresses: Vec<String>,
    /// Seconds since the Unix epoch.
    pub updated_at: i64,
}

/// The filters to list webhooks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct WebhooksListOptions {
    pub limit: Option<i32>,
    pub page_token: String,
}

impl WebhooksListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][WebhooksListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [page_token][WebhooksListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl ListOptions for WebhooksListOptions {
    fn encode(&self) -> QueryMap {
        [
            format("limit", &self.limit),
            format("page_token", &self.page_token),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
