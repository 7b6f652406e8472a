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

//! Folders and labels.
//!
//! Some providers organize messages with folders, others with labels. The
//! service presents both as folders.

use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};

/// A folder, as returned by the service.
///
/// The counts are only present when the provider reports them.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Folder {
    pub id: String,
    pub grant_id: Option<String>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    /// True for folders created by the provider, such as the inbox.
    pub system_folder: Option<bool>,
    pub child_count: Option<i32>,
    pub unread_count: Option<i32>,
    pub total_count: Option<i32>,
    /// The IMAP attributes, for example `\Sent`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub attributes: Vec<String>,
    pub object: Option<String>,
}

/// The request to create a folder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_id: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl CreateFolderRequest {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [parent_id][CreateFolderRequest::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the value of [background_color][CreateFolderRequest::background_color].
    pub fn set_background_color<T: Into<String>>(mut self, v: T) -> Self {
        self.background_color = Some(v.into());
        self
    }

    /// Sets the value of [text_color][CreateFolderRequest::text_color].
    pub fn set_text_color<T: Into<String>>(mut self, v: T) -> Self {
        self.text_color = Some(v.into());
        self
    }
}

/// The request to change a folder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateFolderRequest {
    pub name: Option<String>,
    pub parent_id: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl UpdateFolderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateFolderRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [parent_id][UpdateFolderRequest::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the value of [background_color][UpdateFolderRequest::background_color].
    pub fn set_background_color<T: Into<String>>(mut self, v: T) -> Self {
        self.background_color = Some(v.into());
        self
    }

    /// Sets the value of [text_color][UpdateFolderRequest::text_color].
    pub fn set_text_color<T: Into<String>>(mut self, v: T) -> Self {
        self.text_color = Some(v.into());
        self
    }
}

/// The filters to list folders.
///
/// An empty `parent_id` is still sent, unlike an empty `page_token`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct FoldersListOptions {
    pub limit: Option<i32>,
    pub page_token: String,
    pub parent_id: Option<String>,
}

impl FoldersListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][FoldersListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [page_token][FoldersListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [parent_id][FoldersListOptions::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_id][FoldersListOptions::parent_id].
    pub fn set_or_clear_parent_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.parent_id = v.map(Into::into);
        self
    }
}

impl ListOptions for FoldersListOptions {
    fn encode(&self) -> QueryMap {
        [
            format("limit", &self.limit),
            format("page_token", &self.page_token),
            format("parent_id", &self.parent_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
