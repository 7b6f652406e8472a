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

//! Resource model and request types for the Mailsuite APIs.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. We welcome feedback about the
//! APIs, documentation, missing features, bugs, etc.
//!
//! The crate only shapes data: it describes the resources returned by the
//! service, the payloads sent to create or update them, and the filters used
//! when listing them. It performs no I/O.
//!
//! List filters are plain records with optional fields. Each one implements
//! [ListOptions][query::ListOptions], which projects the fields that are set
//! into a [QueryMap][query::QueryMap]:
//!
//! ```
//! # use mailsuite_model::calendars::CalendarListOptions;
//! # use mailsuite_model::query::{self, QueryValue};
//! let options = CalendarListOptions::new().set_limit(10);
//! let params = query::encode(Some(&options)).unwrap_or_default();
//! assert_eq!(params.get("limit"), Some(&QueryValue::Int(10)));
//! assert!(query::encode::<CalendarListOptions>(None).is_none());
//! ```

#[macro_use]
mod enums;

pub mod applications;
pub mod attachments;
pub mod calendars;
pub mod common;
pub mod connectors;
pub mod credentials;
pub mod drafts;
mod error;
pub use error::*;
pub mod folders;
pub mod grants;
pub mod query;
pub mod redirect_uris;
pub mod smart_compose;
mod timestamp;
pub mod webhooks;
