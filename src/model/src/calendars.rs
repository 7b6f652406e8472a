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

//! Calendars, availability checks, and free/busy queries.

use crate::query::{ListOptions, QueryMap, format};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A calendar, as returned by the service.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Calendar {
    /// The calendar id, assigned by the service.
    pub id: String,
    pub grant_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// An IANA time zone name, for example `America/New_York`.
    pub timezone: Option<String>,
    pub is_primary: Option<bool>,
    pub read_only: Option<bool>,
    pub is_owned_by_user: Option<bool>,
    /// The background color, as a hex string.
    pub hex_color: Option<String>,
    /// The foreground color, as a hex string.
    pub hex_foreground_color: Option<String>,
    /// Free-form key/value pairs attached to the calendar.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub metadata: HashMap<String, String>,
    pub object: Option<String>,
}

/// The request to create a calendar.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateCalendarRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl CreateCalendarRequest {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [description][CreateCalendarRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [location][CreateCalendarRequest::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [timezone][CreateCalendarRequest::timezone].
    pub fn set_timezone<T: Into<String>>(mut self, v: T) -> Self {
        self.timezone = Some(v.into());
        self
    }

    /// Sets the value of [metadata][CreateCalendarRequest::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The request to change a calendar.
///
/// Fields that are not set are not changed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateCalendarRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub hex_color: Option<String>,
    pub hex_foreground_color: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
}

impl UpdateCalendarRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateCalendarRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateCalendarRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [location][UpdateCalendarRequest::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [timezone][UpdateCalendarRequest::timezone].
    pub fn set_timezone<T: Into<String>>(mut self, v: T) -> Self {
        self.timezone = Some(v.into());
        self
    }

    /// Sets the value of [hex_color][UpdateCalendarRequest::hex_color].
    pub fn set_hex_color<T: Into<String>>(mut self, v: T) -> Self {
        self.hex_color = Some(v.into());
        self
    }

    /// Sets the value of
    /// [hex_foreground_color][UpdateCalendarRequest::hex_foreground_color].
    pub fn set_hex_foreground_color<T: Into<String>>(mut self, v: T) -> Self {
        self.hex_foreground_color = Some(v.into());
        self
    }

    /// Sets the value of [metadata][UpdateCalendarRequest::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

/// The filters to list calendars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CalendarListOptions {
    /// The maximum number of results.
    pub limit: Option<i32>,
    /// The token returned by a previous call, used to fetch the next page.
    pub page_token: String,
}

impl CalendarListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [limit][CalendarListOptions::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets or clears the value of [limit][CalendarListOptions::limit].
    pub fn set_or_clear_limit(mut self, v: Option<i32>) -> Self {
        self.limit = v;
        self
    }

    /// Sets the value of [page_token][CalendarListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl ListOptions for CalendarListOptions {
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

wire_enum! {
    /// How the availability of several participants is combined.
    AvailabilityMethod {
        /// Only return slots where all participants are available.
        Collective => "collective",
        /// Round-robin, prefer the participant that has been booked least
        /// recently.
        MaxFairness => "max-fairness",
        /// Round-robin, prefer the slots where most participants are
        /// available.
        MaxAvailability => "max-availability",
    }
}

/// The request to find the time slots where participants are available.
///
/// The window `[start_time, end_time)` is in seconds since the Unix epoch. The
/// service expects `end_time >= start_time`, this library does not check it.
///
/// # Example
/// ```
/// # use mailsuite_model::calendars::{AvailabilityParticipant, AvailabilityRequest};
/// let request = AvailabilityRequest::new(1_700_000_000, 1_700_086_400, 30)
///     .set_participants([AvailabilityParticipant::new("a@example.com")]);
/// assert_eq!(request.effective_interval_minutes(), 30);
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AvailabilityRequest {
    pub start_time: i64,
    pub end_time: i64,
    pub duration_minutes: i32,
    /// The spacing between candidate slots. Defaults to `duration_minutes`.
    pub interval_minutes: Option<i32>,
    /// Only return slots starting on the hour or half hour.
    pub round_to_30_minutes: Option<bool>,
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub participants: Vec<AvailabilityParticipant>,
    pub availability_rules: Option<AvailabilityRules>,
}

impl AvailabilityRequest {
    pub fn new(start_time: i64, end_time: i64, duration_minutes: i32) -> Self {
        Self {
            start_time,
            end_time,
            duration_minutes,
            ..Default::default()
        }
    }

    /// The interval between candidate slots, in minutes.
    pub fn effective_interval_minutes(&self) -> i32 {
        self.interval_minutes.unwrap_or(self.duration_minutes)
    }

    /// Sets the value of [interval_minutes][AvailabilityRequest::interval_minutes].
    pub fn set_interval_minutes(mut self, v: i32) -> Self {
        self.interval_minutes = Some(v);
        self
    }

    /// Sets the value of
    /// [round_to_30_minutes][AvailabilityRequest::round_to_30_minutes].
    pub fn set_round_to_30_minutes(mut self, v: bool) -> Self {
        self.round_to_30_minutes = Some(v);
        self
    }

    /// Sets the value of [participants][AvailabilityRequest::participants].
    pub fn set_participants<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = AvailabilityParticipant>,
    {
        self.participants = v.into_iter().collect();
        self
    }

    /// Sets the value of
    /// [availability_rules][AvailabilityRequest::availability_rules].
    pub fn set_availability_rules(mut self, v: AvailabilityRules) -> Self {
        self.availability_rules = Some(v);
        self
    }
}

/// A participant in an availability check.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AvailabilityParticipant {
    /// The email address of the participant.
    pub email: String,
    /// Restrict the check to these calendars. All calendars are used if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub calendar_ids: Vec<String>,
    /// The participant's recurring open hours.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub open_hours: Vec<OpenHours>,
}

impl AvailabilityParticipant {
    /// Creates a participant for `email`, using all of its calendars.
    pub fn new<T: Into<String>>(email: T) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [calendar_ids][AvailabilityParticipant::calendar_ids].
    pub fn set_calendar_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.calendar_ids = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [open_hours][AvailabilityParticipant::open_hours].
    pub fn set_open_hours<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = OpenHours>,
    {
        self.open_hours = v.into_iter().collect();
        self
    }
}

/// A recurring weekly availability window.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OpenHours {
    /// The days of the week, `0` is Sunday and `6` is Saturday.
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub days: Vec<i32>,
    /// An IANA time zone name.
    pub timezone: String,
    /// The start of the window, in `HH:MM` 24-hour format.
    pub start: String,
    /// The end of the window, in `HH:MM` 24-hour format.
    pub end: String,
    /// Dates excluded from the window, in `YYYY-MM-DD` format.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub exdates: Vec<String>,
}

impl OpenHours {
    /// Creates a window repeated on `days`, from `start` to `end` in
    /// `timezone`.
    ///
    /// `days` uses `0` for Sunday through `6` for Saturday. `start` and `end`
    /// use the `HH:MM` 24-hour format.
    ///
    /// # Example
    /// ```
    /// # use mailsuite_model::calendars::OpenHours;
    /// // Monday to Friday, nine to five in Paris.
    /// let hours = OpenHours::new(1..=5, "Europe/Paris", "09:00", "17:00")
    ///     .set_exdates(["2025-12-25"]);
    /// assert_eq!(hours.days, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn new<Z, S, E>(days: impl IntoIterator<Item = i32>, timezone: Z, start: S, end: E) -> Self
    where
        Z: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            days: days.into_iter().collect(),
            timezone: timezone.into(),
            start: start.into(),
            end: end.into(),
            exdates: Vec::new(),
        }
    }

    /// Sets the value of [exdates][OpenHours::exdates].
    ///
    /// Each date uses the `YYYY-MM-DD` format.
    pub fn set_exdates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exdates = v.into_iter().map(Into::into).collect();
        self
    }
}

/// Rules applied to an availability check.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AvailabilityRules {
    pub availability_method: Option<AvailabilityMethod>,
    pub buffer: Option<MeetingBuffer>,
    /// Open hours applied to participants that do not define their own.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub default_open_hours: Vec<OpenHours>,
    pub round_robin_group_id: Option<String>,
}

impl AvailabilityRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [availability_method][AvailabilityRules::availability_method].
    pub fn set_availability_method(mut self, v: AvailabilityMethod) -> Self {
        self.availability_method = Some(v);
        self
    }

    /// Sets the value of [buffer][AvailabilityRules::buffer].
    pub fn set_buffer(mut self, v: MeetingBuffer) -> Self {
        self.buffer = Some(v);
        self
    }

    /// Sets the value of
    /// [default_open_hours][AvailabilityRules::default_open_hours].
    pub fn set_default_open_hours<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = OpenHours>,
    {
        self.default_open_hours = v.into_iter().collect();
        self
    }

    /// Sets the value of
    /// [round_robin_group_id][AvailabilityRules::round_robin_group_id].
    pub fn set_round_robin_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.round_robin_group_id = Some(v.into());
        self
    }
}

/// Minutes kept free before and after each meeting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MeetingBuffer {
    /// Minutes kept free before a meeting starts.
    pub before: i32,
    /// Minutes kept free after a meeting ends.
    pub after: i32,
}

impl MeetingBuffer {
    /// Creates a buffer of `before` and `after` minutes.
    pub fn new(before: i32, after: i32) -> Self {
        Self { before, after }
    }
}

/// The response to an availability check.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AvailabilityResponse {
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub time_slots: Vec<AvailableTimeSlot>,
    /// For round-robin checks, the order in which participants are booked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub order: Vec<String>,
}

/// A window `[start_time, end_time)` where some participants are available.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AvailableTimeSlot {
    /// The start of the slot in seconds since the Unix epoch, inclusive.
    pub start_time: i64,
    /// The end of the slot in seconds since the Unix epoch, exclusive.
    pub end_time: i64,
    /// The participants available during this slot.
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub emails: Vec<String>,
}

/// The request to query the busy periods of some email addresses.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetFreeBusyRequest {
    pub start_time: i64,
    pub end_time: i64,
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub emails: Vec<String>,
}

impl GetFreeBusyRequest {
    pub fn new<T, V>(start_time: i64, end_time: i64, emails: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            start_time,
            end_time,
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }
}

wire_enum! {
    /// The status of a busy period.
    FreeBusyStatus {
        Busy => "busy",
        Tentative => "tentative",
    }
}

/// The busy periods of one email address.
///
/// The service returns non-overlapping slots. This library does not reorder or
/// coalesce them.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FreeBusy {
    pub email: String,
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    pub time_slots: Vec<FreeBusyTimeSlot>,
    pub object: Option<String>,
}

/// A window `[start_time, end_time)` where a participant is not available.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FreeBusyTimeSlot {
    pub start_time: i64,
    pub end_time: i64,
    pub status: Option<FreeBusyStatus>,
}
