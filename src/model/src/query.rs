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

//! Defines traits and helpers to encode list filters as query parameters.
//!
//! Every list operation accepts an optional filter record. The fields in these
//! records are independently optional and typically sparse. This module
//! projects the fields that are set into a [QueryMap], keyed by the name of the
//! query parameter on the wire, keeping the native type of each value.
//!
//! What "set" means depends on the shape of the field:
//! - [Option] fields are set if they contain a value, even if that value is
//!   zero, `false`, or the empty string.
//! - Plain [String] fields are set if they are not empty.
//! - Plain [`Vec<String>`] fields are set if they are not empty.
//!
//! The values are not formatted as strings. The transport layer can encode the
//! map as a URL query string (see [append_to_url]) or as JSON.

use std::collections::BTreeMap;

/// A single query parameter value.
///
/// Consumers discriminate on the variant to choose an encoding.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum QueryValue {
    Int(i32),
    Int64(i64),
    Bool(bool),
    String(String),
    Strings(Vec<String>),
}

/// Formats the value as it appears in a URL query.
///
/// Sequences are joined with commas. Use [to_query_pairs] to repeat the
/// parameter once per element instead.
impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Strings(v) => f.write_str(&v.join(",")),
        }
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::Strings(value)
    }
}

/// The query parameters produced by [ListOptions::encode].
///
/// The keys are the parameter names on the wire. The map is ordered by key
/// only as a convenience, the order carries no meaning.
pub type QueryMap = BTreeMap<&'static str, QueryValue>;

/// Implemented by every list filter record.
pub trait ListOptions {
    /// Returns one entry per filter field that is set.
    ///
    /// This function is pure: calling it repeatedly returns equal maps and it
    /// never modifies the record.
    fn encode(&self) -> QueryMap;
}

/// Encodes an optional filter record.
///
/// An absent record produces `None`, which is different from an empty map.
/// Callers can use `None` to skip the query string entirely.
///
/// # Example
/// ```
/// # use mailsuite_model::folders::FoldersListOptions;
/// # use mailsuite_model::query::{encode, QueryValue};
/// let options = FoldersListOptions::new().set_parent_id("");
/// let params = encode(Some(&options)).expect("the record is present");
/// assert_eq!(params.get("parent_id"), Some(&QueryValue::String(String::new())));
/// assert_eq!(encode::<FoldersListOptions>(None), None);
/// ```
pub fn encode<T>(options: Option<&T>) -> Option<QueryMap>
where
    T: ListOptions,
{
    options.map(ListOptions::encode)
}

/// Formats a single field as a query parameter.
///
/// Returns `None` if the field is not set, see [QueryParameter].
pub fn format<T>(name: &'static str, parameter: &T) -> Option<(&'static str, QueryValue)>
where
    T: QueryParameter,
{
    parameter.query_value().map(|v| (name, v))
}

/// [QueryParameter] is a trait representing the field shapes that can be used
/// as a query parameter.
///
/// Each implementation decides whether the field is set, and converts it to a
/// [QueryValue] if it is.
pub trait QueryParameter {
    fn query_value(&self) -> Option<QueryValue>;
}

impl QueryParameter for Option<i32> {
    fn query_value(&self) -> Option<QueryValue> {
        self.map(QueryValue::Int)
    }
}

impl QueryParameter for Option<i64> {
    fn query_value(&self) -> Option<QueryValue> {
        self.map(QueryValue::Int64)
    }
}

impl QueryParameter for Option<bool> {
    fn query_value(&self) -> Option<QueryValue> {
        self.map(QueryValue::Bool)
    }
}

impl QueryParameter for Option<String> {
    fn query_value(&self) -> Option<QueryValue> {
        self.clone().map(QueryValue::String)
    }
}

impl QueryParameter for String {
    fn query_value(&self) -> Option<QueryValue> {
        if self.is_empty() {
            return None;
        }
        Some(QueryValue::String(self.clone()))
    }
}

impl QueryParameter for Vec<String> {
    fn query_value(&self) -> Option<QueryValue> {
        if self.is_empty() {
            return None;
        }
        Some(QueryValue::Strings(self.clone()))
    }
}

/// Flattens the map into `(name, value)` pairs suitable for a URL query.
///
/// Scalars are formatted as usual. Sequences produce one pair per element,
/// all with the same name.
pub fn to_query_pairs(params: &QueryMap) -> Vec<(&'static str, String)> {
    params
        .iter()
        .flat_map(|(name, value)| -> Vec<(&'static str, String)> {
            match value {
                QueryValue::Strings(v) => v.iter().map(|s| (*name, s.clone())).collect(),
                scalar => vec![(*name, scalar.to_string())],
            }
        })
        .collect()
}

/// Appends the query parameters to `url`.
///
/// An empty map leaves the URL unchanged, in particular it does not add an
/// empty `?`.
pub fn append_to_url(url: &mut url::Url, params: &QueryMap) {
    let pairs = to_query_pairs(params);
    if pairs.is_empty() {
        return;
    }
    url.query_pairs_mut().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn none() {
        assert_eq!(None, format("limit", &None::<i32>));
        assert_eq!(None, format("since", &None::<i64>));
        assert_eq!(None, format("unread", &None::<bool>));
        assert_eq!(None, format("subject", &None::<String>));
    }

    #[test_case(format("limit", &Some(0_i32)), QueryValue::Int(0))]
    #[test_case(format("limit", &Some(42_i32)), QueryValue::Int(42))]
    #[test_case(format("limit", &Some(-1_i64)), QueryValue::Int64(-1))]
    #[test_case(format("limit", &Some(false)), QueryValue::Bool(false))]
    #[test_case(format("limit", &Some(String::new())), QueryValue::String(String::new()))]
    fn with_value(got: Option<(&'static str, QueryValue)>, want: QueryValue) {
        assert_eq!(got, Some(("limit", want)));
    }

    #[test]
    fn plain_string() {
        assert_eq!(None, format("page_token", &String::new()));
        assert_eq!(
            Some(("page_token", QueryValue::from("abc"))),
            format("page_token", &"abc".to_string())
        );
    }

    #[test]
    fn plain_strings() {
        assert_eq!(None, format("any_email", &Vec::<String>::new()));
        let emails = vec!["a@test.com".to_string(), "b@test.com".to_string()];
        assert_eq!(
            Some(("any_email", QueryValue::Strings(emails.clone()))),
            format("any_email", &emails)
        );
    }

    #[test_case(QueryValue::Int(7), json!(7))]
    #[test_case(QueryValue::Int64(1_700_000_000), json!(1_700_000_000_i64))]
    #[test_case(QueryValue::Bool(true), json!(true))]
    #[test_case(QueryValue::from("abc"), json!("abc"))]
    #[test_case(QueryValue::from(vec!["a".to_string(), "b".to_string()]), json!(["a", "b"]))]
    fn serialize(input: QueryValue, want: serde_json::Value) -> Result {
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(QueryValue::Int(-3), "-3")]
    #[test_case(QueryValue::Int64(1_700_000_000), "1700000000")]
    #[test_case(QueryValue::Bool(false), "false")]
    #[test_case(QueryValue::from("a b"), "a b")]
    #[test_case(QueryValue::from(vec!["a".to_string(), "b".to_string()]), "a,b")]
    fn display(input: QueryValue, want: &str) {
        assert_eq!(input.to_string(), want);
    }

    #[test]
    fn query_pairs() {
        let params = QueryMap::from([
            ("limit", QueryValue::Int(5)),
            ("unread", QueryValue::Bool(false)),
            (
                "any_email",
                QueryValue::Strings(vec!["a@test.com".into(), "b@test.com".into()]),
            ),
        ]);
        let got = to_query_pairs(&params);
        assert_eq!(
            got,
            vec![
                ("any_email", "a@test.com".to_string()),
                ("any_email", "b@test.com".to_string()),
                ("limit", "5".to_string()),
                ("unread", "false".to_string()),
            ]
        );
    }

    #[test]
    fn url() -> Result {
        let mut url = url::Url::parse("https://api.example.com/v3/grants")?;
        append_to_url(&mut url, &QueryMap::new());
        assert_eq!(url.as_str(), "https://api.example.com/v3/grants");

        let params = QueryMap::from([
            ("email", QueryValue::from("user@example.com")),
            ("since", QueryValue::Int64(1_700_000_000)),
        ]);
        append_to_url(&mut url, &params);
        assert_eq!(
            url.query(),
            Some("email=user%40example.com&since=1700000000")
        );
        Ok(())
    }
}
