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

/// Represent failures in the few fallible helpers in this crate.
///
/// Encoding list filters and (de)serializing records never produce this type.
/// Only the helpers that interpret wire values, such as converting epoch
/// seconds to a wall-clock time, or that read a downloaded payload can fail.
///
/// # Examples
/// ```
/// # use mailsuite_model::{drafts::Draft, Error};
/// let mut draft = Draft::default();
/// draft.date = i64::MAX;
/// assert!(matches!(draft.date_time(), Err(Error::TimestampOutOfRange { .. })));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The epoch seconds cannot be represented as a wall-clock time.
    #[error("unix timestamp {seconds} is out of range")]
    TimestampOutOfRange {
        seconds: i64,
        #[source]
        source: time::error::ComponentRange,
    },

    /// Reading a downloaded payload failed.
    #[error("cannot read the downloaded payload, source={0}")]
    Io(#[from] std::io::Error),
}

/// A specialized [Result][std::result::Result] for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn timestamp_out_of_range() {
        let source = time::OffsetDateTime::from_unix_timestamp(i64::MAX).unwrap_err();
        let err = Error::TimestampOutOfRange {
            seconds: i64::MAX,
            source,
        };
        assert!(err.to_string().contains(&i64::MAX.to_string()), "{err}");
        assert!(err.source().is_some(), "{err:?}");
    }

    #[test]
    fn io() {
        let err = Error::from(std::io::Error::other("connection reset"));
        assert!(matches!(err, Error::Io(_)), "{err:?}");
        assert!(err.to_string().contains("connection reset"), "{err}");
    }
}
