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

//! Converts the epoch-seconds fields used on the wire to wall-clock times.
//!
//! All timestamps sent by the service are seconds since the Unix epoch. Zero
//! is not treated as "unset", it converts to `1970-01-01T00:00:00Z`.

use crate::{Error, Result};

pub(crate) fn to_offset_date_time(seconds: i64) -> Result<time::OffsetDateTime> {
    time::OffsetDateTime::from_unix_timestamp(seconds)
        .map_err(|source| Error::TimestampOutOfRange { seconds, source })
}

#[cfg(feature = "chrono")]
const EXPECT_CHRONO_CONVERTS: &str = concat!(
    "converting a time::OffsetDateTime to chrono::DateTime should always succeed. ",
    "The range supported by chrono is wider than the range supported by time."
);

#[cfg(feature = "chrono")]
pub(crate) fn to_chrono(seconds: i64) -> Result<chrono::DateTime<chrono::Utc>> {
    // Validate with `time` so both conversions agree on which values are valid.
    let dt = to_offset_date_time(seconds)?;
    Ok(chrono::DateTime::from_timestamp(dt.unix_timestamp(), 0).expect(EXPECT_CHRONO_CONVERTS))
}
