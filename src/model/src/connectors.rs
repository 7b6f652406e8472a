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

//! Connectors configure how the application authenticates with each email
//! and calendar provider.

use crate::common::Settings;
use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};
use serde_json::Value;

wire_enum! {
    /// The email and calendar providers.
    Provider {
        Google => "google",
        Microsoft => "microsoft",
        Imap => "imap",
        VirtualCalendars => "virtual-calendars",
    }
}

/// A connector, as returned by the service.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Connector {
    pub provider: Option<Provider>,
    pub name: Option<String>,
    /// Provider-specific settings, the keys depend on the provider.
    #[serde(skip_serializing_if = "Settings::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub settings: Settings,
    /// The OAuth scopes requested by default for new grants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub scope: Vec<String>,
}

/// The request to create a connector.
///
/// Prefer [google][CreateConnectorRequest::google] and
/// [microsoft][CreateConnectorRequest::microsoft] for those providers, they
/// populate the settings with the keys each provider requires.
///
/// # Example
/// ```
/// # use mailsuite_model::connectors::{CreateConnectorRequest, Provider};
/// let request = CreateConnectorRequest::microsoft("Outlook", "client-id", "secret", "")
///     .set_scope(["Mail.Read"]);
/// assert_eq!(request.provider, Provider::Microsoft);
/// assert!(!request.settings.contains_key("tenant"));
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CreateConnectorRequest {
    pub name: Option<String>,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Settings::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub scope: Vec<String>,
}

impl CreateConnectorRequest {
    /// Creates a request with empty settings.
    ///
    /// Use this for providers, such as IMAP, that need no settings.
    pub fn new(provider: Provider) -> Self {
        Self {
            name: None,
            provider,
            settings: Settings::new(),
            scope: Vec::new(),
        }
    }

    /// Creates a request for a Google connector.
    pub fn google<N, I, S>(name: N, client_id: I, client_secret: S) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        Self::new(Provider::Google)
            .set_name(name)
            .set_settings(client_settings(client_id, client_secret))
    }

    /// Creates a request for a Microsoft connector.
    ///
    /// The `tenant` is only included in the settings when it is not empty.
    pub fn microsoft<N, I, S, T>(name: N, client_id: I, client_secret: S, tenant: T) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut settings = client_settings(client_id, client_secret);
        let tenant = tenant.into();
        if tenant.is_empty() {
            tracing::trace!("empty tenant omitted from Microsoft connector settings");
        } else {
            settings.insert("tenant".to_string(), Value::String(tenant));
        }
        Self::new(Provider::Microsoft)
            .set_name(name)
            .set_settings(settings)
    }

    /// Sets the value of [name][CreateConnectorRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [settings][CreateConnectorRequest::settings].
    pub fn set_settings(mut self, v: Settings) -> Self {
        self.settings = v;
        self
    }

    /// Sets the value of [scope][CreateConnectorRequest::scope].
    pub fn set_scope<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scope = v.into_iter().map(Into::into).collect();
        self
    }
}

fn client_settings<I, S>(client_id: I, client_secret: S) -> Settings
where
    I: Into<String>,
    S: Into<String>,
{
    Settings::from_iter([
        ("client_id".to_string(), Value::String(client_id.into())),
        ("client_secret".to_string(), Value::String(client_secret.into())),
    ])
}

/// The request to change a connector.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateConnectorRequest {
    pub name: Option<String>,
    pub settings: Option<Settings>,
    pub scope: Option<Vec<String>>,
}

impl UpdateConnectorRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateConnectorRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [settings][UpdateConnectorRequest::settings].
    pub fn set_settings(mut self, v: Settings) -> Self {
        self.settings = Some(v);
        self
    }

    /// Sets the value of [scope][UpdateConnectorRequest::scope].
    ///
    /// An empty list clears the scopes.
    pub fn set_scope<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scope = Some(v.into_iter().map(Into::into).collect());
        self
    }
}

/// The filters to list connectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConnectorListOptions {
    pub limit: Option<i32>,
    pub page_token: String,
}

impl ConnectorListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][ConnectorListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets or clears the value of [limit][ConnectorListOptions::limit].
    pub fn set_or_clear_limit(mut self, v: Option<i32>) -> Self {
        self.limit = v;
        self
    }

    /// Sets the value of [page_token][ConnectorListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl ListOptions for ConnectorListOptions {
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
