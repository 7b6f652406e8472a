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

//! The configuration of the application using the API.

use crate::redirect_uris::RedirectUri;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// The data residency region of an application.
    Region {
        Us => "us",
        Eu => "eu",
    }
}

wire_enum! {
    /// The environment of an application.
    Environment {
        Production => "production",
        Staging => "staging",
    }
}

/// The details of the application, as returned by the service.
///
/// # Example
/// ```
/// # use mailsuite_model::applications::{ApplicationDetails, Region};
/// let details = serde_json::from_value::<ApplicationDetails>(serde_json::json!({
///     "application_id": "app-123",
///     "region": "us",
/// }))?;
/// assert_eq!(details.region, Some(Region::Us));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationDetails {
    pub application_id: String,
    pub organization_id: Option<String>,
    pub region: Option<Region>,
    pub environment: Option<Environment>,
    pub branding: Option<Branding>,
    pub hosted_authentication: Option<HostedAuthentication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub callback_uris: Vec<RedirectUri>,
}

/// The branding shown to end users during authentication.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Branding {
    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

/// Customizes the hosted authentication pages.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct HostedAuthentication {
    pub background_image_url: Option<String>,
    pub alignment: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_color: Option<String>,
    pub spacing: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect_uris::{JsSettings, Platform};
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn minimal() -> Result {
        let input = json!({
            "application_id": "app-123",
            "region": "us",
            "environment": "production",
            "branding": {"name": "My App"},
        });
        let got = serde_json::from_value::<ApplicationDetails>(input.clone())?;
        assert_eq!(got.application_id, "app-123");
        assert_eq!(got.region, Some(Region::Us));
        assert_eq!(got.environment, Some(Environment::Production));
        let branding = got.branding.as_ref().expect("branding is present");
        assert_eq!(branding.name.as_deref(), Some("My App"));
        assert_eq!(branding.icon_url, None);
        assert_eq!(got.hosted_authentication, None);
        assert_eq!(got.organization_id, None);
        assert!(got.callback_uris.is_empty());
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn full() -> Result {
        let input = json!({
            "application_id": "app-123",
            "organization_id": "org-456",
            "region": "eu",
            "environment": "staging",
            "branding": {
                "name": "My App",
                "icon_url": "https://example.com/icon.png",
                "website_url": "https://example.com",
                "description": "An app",
            },
            "hosted_authentication": {
                "background_image_url": "https://example.com/bg.png",
                "alignment": "left",
                "color_primary": "#000000",
                "color_secondary": "#ffffff",
                "title": "Sign in",
                "subtitle": "to continue",
                "background_color": "#cccccc",
                "spacing": 4,
            },
            "callback_uris": [
                {"id": "cb-1", "url": "https://example.com/cb", "platform": "web"},
                {"id": "cb-2", "url": "https://example.com/js", "platform": "js", "settings": {"origin": "https://example.com"}},
            ],
        });
        let got = serde_json::from_value::<ApplicationDetails>(input.clone())?;
        assert_eq!(got.region, Some(Region::Eu));
        assert_eq!(got.callback_uris.len(), 2);
        assert_eq!(got.callback_uris[0].to_platform(), Some(Platform::Web));
        assert_eq!(
            got.callback_uris[1].to_platform(),
            Some(Platform::Js(JsSettings::new("https://example.com")))
        );
        assert_eq!(
            got.hosted_authentication.as_ref().and_then(|h| h.spacing),
            Some(4)
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn unknown_region() -> Result {
        let input = json!({"application_id": "app-123", "region": "ap", "callback_uris": null});
        let got = serde_json::from_value::<ApplicationDetails>(input)?;
        assert_eq!(got.region, Some(Region::UnknownValue("ap".into())));
        assert!(got.callback_uris.is_empty());
        Ok(())
    }
}
