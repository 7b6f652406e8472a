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

//! Grants represent the user accounts authorized to use the application.

use crate::common::Settings;
use crate::connectors::Provider;
use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// The status of a grant.
    GrantStatus {
        Valid => "valid",
        /// The grant needs to be re-authenticated.
        Invalid => "invalid",
        Pending => "pending",
    }
}

/// A grant, as returned by the service.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Grant {
    pub id: String,
    pub provider: Option<Provider>,
    pub grant_status: Option<GrantStatus>,
    pub email: Option<String>,
    /// The OAuth scopes granted by the user.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub scope: Vec<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    /// The `state` passed through the OAuth flow.
    pub state: Option<String>,
    /// Seconds since the Unix epoch.
    pub created_at: Option<i64>,
    /// Seconds since the Unix epoch.
    pub updated_at: Option<i64>,
    /// Provider-specific settings.
    #[serde(skip_serializing_if = "Settings::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub settings: Settings,
}

/// The request to change a grant.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateGrantRequest {
    pub settings: Option<Settings>,
    pub scope: Option<Vec<String>>,
}

impl UpdateGrantRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [settings][UpdateGrantRequest::settings].
    pub fn set_settings(mut self, v: Settings) -> Self {
        self.settings = Some(v);
        self
    }

    /// Sets the value of [scope][UpdateGrantRequest::scope].
    pub fn set_scope<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scope = Some(v.into_iter().map(Into::into).collect());
        self
    }
}

/// The filters to list grants.
///
/// Unlike the other list filters, grants are paginated with `offset`, there
/// is no page token. `since` and `before` are seconds since the Unix epoch.
///
/// # Example
/// ```
/// # use mailsuite_model::grants::GrantsListOptions;
/// # use mailsuite_model::query::{ListOptions, QueryValue};
/// let options = GrantsListOptions::new().set_since(1_700_000_000).set_grant_status("valid");
/// let params = options.encode();
/// assert_eq!(params.get("since"), Some(&QueryValue::Int64(1_700_000_000)));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GrantsListOptions {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub since: Option<i64>,
    pub before: Option<i64>,
    pub email: Option<String>,
    pub grant_status: Option<String>,
    pub ip: Option<String>,
    pub provider: Option<String>,
}

impl GrantsListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][GrantsListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [offset][GrantsListOptions::offset].
    pub fn set_offset(mut self, v: i32) -> Self {
        self.offset = Some(v);
        self
    }

    /// Sets the value of [sort_by][GrantsListOptions::sort_by].
    pub fn set_sort_by<T: Into<String>>(mut self, v: T) -> Self {
        self.sort_by = Some(v.into());
        self
    }

    /// Sets the value of [order_by][GrantsListOptions::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = Some(v.into());
        self
    }

    /// Sets the value of [since][GrantsListOptions::since].
    pub fn set_since(mut self, v: i64) -> Self {
        self.since = Some(v);
        self
    }

    /// Sets or clears the value of [since][GrantsListOptions::since].
    pub fn set_or_clear_since(mut self, v: Option<i64>) -> Self {
        self.since = v;
        self
    }

    /// Sets the value of [before][GrantsListOptions::before].
    pub fn set_before(mut self, v: i64) -> Self {
        self.before = Some(v);
        self
    }

    /// Sets the value of [email][GrantsListOptions::email].
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the value of [grant_status][GrantsListOptions::grant_status].
    ///
    /// # Example
    /// ```
    /// # use mailsuite_model::grants::{GrantStatus, GrantsListOptions};
    /// let options = GrantsListOptions::new().set_grant_status(GrantStatus::Invalid.name());
    /// assert_eq!(options.grant_status.as_deref(), Some("invalid"));
    /// ```
    pub fn set_grant_status<T: Into<String>>(mut self, v: T) -> Self {
        self.grant_status = Some(v.into());
        self
    }

    /// Sets the value of [ip][GrantsListOptions::ip].
    pub fn set_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.ip = Some(v.into());
        self
    }

    /// Sets the value of [provider][GrantsListOptions::provider].
    pub fn set_provider<T: Into<String>>(mut self, v: T) -> Self {
        self.provider = Some(v.into());
        self
    }
}

impl ListOptions for GrantsListOptions {
    fn encode(&self) -> QueryMap {
        [
            format("limit", &self.limit),
            format("offset", &self.offset),
            format("sort_by", &self.sort_by),
            format("order_by", &self.order_by),
            format("since", &self.since),
            format("before", &self.before),
            format("email", &self.email),
            format("grant_status", &self.grant_status),
            format("ip", &self.ip),
            format("provider", &self.provider),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
