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

//! Redirect URIs for hosted authentication, and the settings for each
//! platform.
//!
//! On the wire a redirect URI carries a `platform` name and an optional
//! `settings` object shared by all platforms. The records in this module keep
//! both exactly as received. [Platform] is the typed view of that pair, and
//! the way to build requests for a known platform.

use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// The platforms supported by redirect and callback URIs.
    PlatformType {
        Web => "web",
        Ios => "ios",
        Android => "android",
        Js => "js",
    }
}

/// Settings for iOS redirect URIs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IosSettings {
    /// The application bundle id, for example `com.example.app`.
    pub bundle_id: Option<String>,
    /// The App Store id of the application.
    pub app_store_id: Option<String>,
    /// The Apple developer team id.
    pub team_id: Option<String>,
}

impl IosSettings {
    pub fn new<T: Into<String>>(bundle_id: T) -> Self {
        Self {
            bundle_id: Some(bundle_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [app_store_id][IosSettings::app_store_id].
    pub fn set_app_store_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_store_id = Some(v.into());
        self
    }

    /// Sets the value of [team_id][IosSettings::team_id].
    pub fn set_team_id<T: Into<String>>(mut self, v: T) -> Self {
        self.team_id = Some(v.into());
        self
    }
}

/// Settings for Android redirect URIs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AndroidSettings {
    /// The application package, for example `com.example.app`.
    pub package_name: Option<String>,
    /// The SHA-1 fingerprint of the signing certificate.
    pub sha1_certificate_fingerprint: Option<String>,
}

impl AndroidSettings {
    pub fn new<T: Into<String>>(package_name: T) -> Self {
        Self {
            package_name: Some(package_name.into()),
            ..Default::default()
        }
    }

    /// Sets the value of
    /// [sha1_certificate_fingerprint][AndroidSettings::sha1_certificate_fingerprint].
    pub fn set_sha1_certificate_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.sha1_certificate_fingerprint = Some(v.into());
        self
    }
}

/// Settings for JavaScript redirect URIs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JsSettings {
    /// The origin allowed to start the flow, for example `https://example.com`.
    pub origin: Option<String>,
}

impl JsSettings {
    pub fn new<T: Into<String>>(origin: T) -> Self {
        Self {
            origin: Some(origin.into()),
        }
    }
}

/// The `settings` object as it appears on the wire.
///
/// This record holds the fields for all platforms. The service may send keys
/// that do not belong to the platform, they are kept as received.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RedirectSettings {
    pub origin: Option<String>,
    pub bundle_id: Option<String>,
    pub app_store_id: Option<String>,
    pub team_id: Option<String>,
    pub package_name: Option<String>,
    pub sha1_certificate_fingerprint: Option<String>,
}

impl RedirectSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [origin][RedirectSettings::origin].
    pub fn set_origin<T: Into<String>>(mut self, v: T) -> Self {
        self.origin = Some(v.into());
        self
    }

    /// Sets the value of [bundle_id][RedirectSettings::bundle_id].
    pub fn set_bundle_id<T: Into<String>>(mut self, v: T) -> Self {
        self.bundle_id = Some(v.into());
        self
    }

    /// Sets the value of [app_store_id][RedirectSettings::app_store_id].
    pub fn set_app_store_id<T: Into<String>>(mut self, v: T) -> Self {
        self.app_store_id = Some(v.into());
        self
    }

    /// Sets the value of [team_id][RedirectSettings::team_id].
    pub fn set_team_id<T: Into<String>>(mut self, v: T) -> Self {
        self.team_id = Some(v.into());
        self
    }

    /// Sets the value of [package_name][RedirectSettings::package_name].
    pub fn set_package_name<T: Into<String>>(mut self, v: T) -> Self {
        self.package_name = Some(v.into());
        self
    }

    /// Sets the value of
    /// [sha1_certificate_fingerprint][RedirectSettings::sha1_certificate_fingerprint].
    pub fn set_sha1_certificate_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.sha1_certificate_fingerprint = Some(v.into());
        self
    }
}

impl From<IosSettings> for RedirectSettings {
    fn from(value: IosSettings) -> Self {
        Self {
            bundle_id: value.bundle_id,
            app_store_id: value.app_store_id,
            team_id: value.team_id,
            ..Default::default()
        }
    }
}

impl From<AndroidSettings> for RedirectSettings {
    fn from(value: AndroidSettings) -> Self {
        Self {
            package_name: value.package_name,
            sha1_certificate_fingerprint: value.sha1_certificate_fingerprint,
            ..Default::default()
        }
    }
}

impl From<JsSettings> for RedirectSettings {
    fn from(value: JsSettings) -> Self {
        Self {
            origin: value.origin,
            ..Default::default()
        }
    }
}

/// The platform of a redirect URI and its platform-specific settings.
///
/// This is the typed view of the `platform` and `settings` wire fields. Each
/// known platform only sees the settings it uses. Requests built from a
/// `Platform` send `settings` only for platforms that have them.
///
/// # Example
/// ```
/// # use mailsuite_model::redirect_uris::{CreateRedirectUriRequest, IosSettings, Platform};
/// let request = CreateRedirectUriRequest::new(
///     "com.example.app://callback",
///     Platform::Ios(IosSettings::new("com.example.app")),
/// );
/// let json = serde_json::to_value(&request)?;
/// assert_eq!(json["platform"], "ios");
/// assert_eq!(json["settings"]["bundle_id"], "com.example.app");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Platform {
    /// A web application. Web redirect URIs have no settings.
    #[default]
    Web,
    Ios(IosSettings),
    Android(AndroidSettings),
    Js(JsSettings),
    /// Use this variant to handle new platforms that are not yet known to this
    /// library.
    UnknownValue {
        platform: String,
        settings: Option<RedirectSettings>,
    },
}

impl Platform {
    /// Builds the typed view from the wire fields.
    pub fn new(platform: PlatformType, settings: Option<RedirectSettings>) -> Self {
        match platform {
            PlatformType::Web => Self::Web,
            PlatformType::Ios => {
                let s = settings.unwrap_or_default();
                Self::Ios(IosSettings {
                    bundle_id: s.bundle_id,
                    app_store_id: s.app_store_id,
                    team_id: s.team_id,
                })
            }
            PlatformType::Android => {
                let s = settings.unwrap_or_default();
                Self::Android(AndroidSettings {
                    package_name: s.package_name,
                    sha1_certificate_fingerprint: s.sha1_certificate_fingerprint,
                })
            }
            PlatformType::Js => {
                let s = settings.unwrap_or_default();
                Self::Js(JsSettings { origin: s.origin })
            }
            PlatformType::UnknownValue(platform) => Self::UnknownValue { platform, settings },
        }
    }

    /// The platform name.
    pub fn platform_type(&self) -> PlatformType {
        match self {
            Self::Web => PlatformType::Web,
            Self::Ios(_) => PlatformType::Ios,
            Self::Android(_) => PlatformType::Android,
            Self::Js(_) => PlatformType::Js,
            Self::UnknownValue { platform, .. } => PlatformType::from(platform.as_str()),
        }
    }

    fn into_parts(self) -> (PlatformType, Option<RedirectSettings>) {
        let platform = self.platform_type();
        let settings = match self {
            Self::Web => None,
            Self::Ios(s) => Some(s.into()),
            Self::Android(s) => Some(s.into()),
            Self::Js(s) => Some(s.into()),
            Self::UnknownValue { settings, .. } => settings,
        };
        (platform, settings)
    }
}

/// A redirect URI registered for hosted authentication.
///
/// Applications also report their callback URIs using this record.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RedirectUri {
    /// The redirect URI id, assigned by the service.
    pub id: String,
    pub url: String,
    pub platform: Option<PlatformType>,
    /// The settings exactly as sent by the service.
    pub settings: Option<RedirectSettings>,
}

impl RedirectUri {
    /// The typed view of [platform][RedirectUri::platform] and
    /// [settings][RedirectUri::settings], if the platform is present.
    pub fn to_platform(&self) -> Option<Platform> {
        self.platform
            .clone()
            .map(|p| Platform::new(p, self.settings.clone()))
    }
}

/// The request to register a new redirect URI.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CreateRedirectUriRequest {
    pub url: String,
    pub platform: PlatformType,
    pub settings: Option<RedirectSettings>,
}

impl CreateRedirectUriRequest {
    pub fn new<T: Into<String>>(url: T, platform: Platform) -> Self {
        let (platform, settings) = platform.into_parts();
        Self {
            url: url.into(),
            platform,
            settings,
        }
    }

    /// Sets the value of [settings][CreateRedirectUriRequest::settings].
    ///
    /// Use this to send settings not covered by [Platform].
    pub fn set_settings(mut self, v: RedirectSettings) -> Self {
        self.settings = Some(v);
        self
    }
}

/// The request to change an existing redirect URI.
///
/// Fields that are not set are not changed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateRedirectUriRequest {
    pub url: Option<String>,
    pub platform: Option<PlatformType>,
    pub settings: Option<RedirectSettings>,
}

impl UpdateRedirectUriRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [url][UpdateRedirectUriRequest::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets [platform][UpdateRedirectUriRequest::platform] and
    /// [settings][UpdateRedirectUriRequest::settings] from the typed view.
    ///
    /// For [Platform::Web] the settings are left unset.
    pub fn set_platform(mut self, v: Platform) -> Self {
        let (platform, settings) = v.into_parts();
        self.platform = Some(platform);
        self.settings = settings;
        self
    }

    /// Sets the value of [settings][UpdateRedirectUriRequest::settings].
    pub fn set_settings(mut self, v: RedirectSettings) -> Self {
        self.settings = Some(v);
        self
    }
}

/// The filters to list redirect URIs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct RedirectUrisListOptions {
    /// The maximum number of results.
    pub limit: Option<i32>,
    /// The token returned by a previous call, used to fetch the next page.
    pub page_token: String,
}

impl RedirectUrisListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][RedirectUrisListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [page_token][RedirectUrisListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl ListOptions for RedirectUrisListOptions {
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
