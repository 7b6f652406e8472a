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

#[cfg(test)]
mod test {
    use mailsuite_model as model;
    use model::calendars::CalendarListOptions;
    use model::connectors::{ConnectorListOptions, Provider};
    use model::credentials::CredentialsListOptions;
    use model::drafts::DraftListOptions;
    use model::folders::FoldersListOptions;
    use model::grants::GrantsListOptions;
    use model::query::{self, ListOptions, QueryMap, QueryValue};
    use model::redirect_uris::RedirectUrisListOptions;
    use model::webhooks::WebhooksListOptions;
    use std::fmt::Debug;
    use test_case::test_case;

    // Encoding twice gives the same result and leaves the options unchanged.
    fn encode_pure<T>(input: &T) -> QueryMap
    where
        T: ListOptions + Clone + Debug + PartialEq,
    {
        let before = input.clone();
        let got = input.encode();
        assert_eq!(input.encode(), got, "{input:?}");
        assert_eq!(input, &before);
        assert_eq!(query::encode(Some(input)), Some(got.clone()));
        got
    }

    fn absent<T: ListOptions>() -> Option<QueryMap> {
        query::encode::<T>(None)
    }

    #[test]
    fn absence_propagates() {
        assert_eq!(absent::<CalendarListOptions>(), None);
        assert_eq!(absent::<ConnectorListOptions>(), None);
        assert_eq!(absent::<CredentialsListOptions>(), None);
        assert_eq!(absent::<DraftListOptions>(), None);
        assert_eq!(absent::<FoldersListOptions>(), None);
        assert_eq!(absent::<GrantsListOptions>(), None);
        assert_eq!(absent::<RedirectUrisListOptions>(), None);
        assert_eq!(absent::<WebhooksListOptions>(), None);
    }

    #[test]
    fn empty_is_empty() {
        assert!(encode_pure(&CalendarListOptions::new()).is_empty());
        assert!(encode_pure(&ConnectorListOptions::new()).is_empty());
        assert!(encode_pure(&CredentialsListOptions::new()).is_empty());
        assert!(encode_pure(&DraftListOptions::new()).is_empty());
        assert!(encode_pure(&FoldersListOptions::new()).is_empty());
        assert!(encode_pure(&GrantsListOptions::new()).is_empty());
        assert!(encode_pure(&RedirectUrisListOptions::new()).is_empty());
        assert!(encode_pure(&WebhooksListOptions::new()).is_empty());
    }

    #[test_case(encode_pure(&CalendarListOptions::new().set_limit(7)); "calendars")]
    #[test_case(encode_pure(&ConnectorListOptions::new().set_limit(7)); "connectors")]
    #[test_case(encode_pure(&CredentialsListOptions::new().set_limit(7)); "credentials")]
    #[test_case(encode_pure(&DraftListOptions::new().set_limit(7)); "drafts")]
    #[test_case(encode_pure(&FoldersListOptions::new().set_limit(7)); "folders")]
    #[test_case(encode_pure(&GrantsListOptions::new().set_limit(7)); "grants")]
    #[test_case(encode_pure(&RedirectUrisListOptions::new().set_limit(7)); "redirect uris")]
    #[test_case(encode_pure(&WebhooksListOptions::new().set_limit(7)); "webhooks")]
    fn limit(got: QueryMap) {
        assert_eq!(got, QueryMap::from([("limit", QueryValue::Int(7))]));
    }

    #[test_case(encode_pure(&CalendarListOptions::new().set_page_token("")); "calendars")]
    #[test_case(encode_pure(&ConnectorListOptions::new().set_page_token("")); "connectors")]
    #[test_case(encode_pure(&CredentialsListOptions::new().set_page_token("")); "credentials")]
    #[test_case(encode_pure(&DraftListOptions::new().set_page_token("")); "drafts")]
    #[test_case(encode_pure(&FoldersListOptions::new().set_page_token("")); "folders")]
    #[test_case(encode_pure(&RedirectUrisListOptions::new().set_page_token("")); "redirect uris")]
    #[test_case(encode_pure(&WebhooksListOptions::new().set_page_token("")); "webhooks")]
    fn empty_page_token(got: QueryMap) {
        assert!(got.is_empty(), "{got:?}");
    }

    #[test_case(encode_pure(&CalendarListOptions::new().set_page_token("tok")); "calendars")]
    #[test_case(encode_pure(&ConnectorListOptions::new().set_page_token("tok")); "connectors")]
    #[test_case(encode_pure(&CredentialsListOptions::new().set_page_token("tok")); "credentials")]
    #[test_case(encode_pure(&DraftListOptions::new().set_page_token("tok")); "drafts")]
    #[test_case(encode_pure(&FoldersListOptions::new().set_page_token("tok")); "folders")]
    #[test_case(encode_pure(&RedirectUrisListOptions::new().set_page_token("tok")); "redirect uris")]
    #[test_case(encode_pure(&WebhooksListOptions::new().set_page_token("tok")); "webhooks")]
    fn page_token(got: QueryMap) {
        assert_eq!(got, QueryMap::from([("page_token", QueryValue::from("tok"))]));
    }

    #[test_case(DraftListOptions::new().set_unread(false), "unread")]
    #[test_case(DraftListOptions::new().set_starred(false), "starred")]
    #[test_case(DraftListOptions::new().set_has_attachment(false), "has_attachment")]
    fn false_is_sent(input: DraftListOptions, key: &str) {
        let got = encode_pure(&input);
        assert_eq!(got.get(key), Some(&QueryValue::Bool(false)));
        assert_eq!(got.len(), 1, "{got:?}");
        assert!(!encode_pure(&DraftListOptions::new()).contains_key(key));
    }

    #[test]
    fn empty_sequence_is_not_sent() {
        let got = encode_pure(&DraftListOptions::new().set_any_email([""; 0]));
        assert!(!got.contains_key("any_email"), "{got:?}");
    }

    #[test_case(CalendarListOptions::new().set_limit(10), QueryMap::from([("limit", QueryValue::Int(10))]); "limit only")]
    #[test_case(CalendarListOptions::new().set_page_token("abc"), QueryMap::from([("page_token", QueryValue::from("abc"))]); "page token only")]
    #[test_case(CalendarListOptions::new().set_limit(25).set_page_token("abc"),
        QueryMap::from([("limit", QueryValue::Int(25)), ("page_token", QueryValue::from("abc"))]); "limit and page token")]
    fn calendars(input: CalendarListOptions, want: QueryMap) {
        assert_eq!(encode_pure(&input), want);
    }

    #[test]
    fn grants_all_fields() {
        let input = GrantsListOptions::new()
            .set_limit(100)
            .set_offset(20)
            .set_sort_by("created_at")
            .set_order_by("desc")
            .set_since(1_700_000_000)
            .set_before(1_710_000_000)
            .set_email("user@example.com")
            .set_grant_status("valid")
            .set_ip("192.168.1.1")
            .set_provider("google");
        let got = encode_pure(&input);
        assert_eq!(got.len(), 10, "{got:?}");
        assert_eq!(got.get("since"), Some(&QueryValue::Int64(1_700_000_000)));
        assert_eq!(got.get("before"), Some(&QueryValue::Int64(1_710_000_000)));
        assert_eq!(got.get("offset"), Some(&QueryValue::Int(20)));
        assert_eq!(got.get("provider"), Some(&QueryValue::from("google")));
    }

    #[test]
    fn drafts_any_email() {
        let got = encode_pure(&DraftListOptions::new().set_any_email(["a@test.com", "b@test.com"]));
        assert_eq!(
            got,
            QueryMap::from([(
                "any_email",
                QueryValue::Strings(vec!["a@test.com".into(), "b@test.com".into()])
            )])
        );
    }

    #[test]
    fn folders_empty_parent() {
        let got = encode_pure(&FoldersListOptions::new().set_parent_id(""));
        assert_eq!(got, QueryMap::from([("parent_id", QueryValue::from(""))]));
    }

    #[test]
    fn credentials_provider() {
        let input = CredentialsListOptions::new().set_provider(Provider::Microsoft);
        assert!(encode_pure(&input).is_empty());
        assert_eq!(input.provider(), Some(&Provider::Microsoft));
    }

    #[test]
    fn to_url() -> anyhow::Result<()> {
        let options = DraftListOptions::new()
            .set_limit(5)
            .set_any_email(["a@test.com", "b@test.com"])
            .set_unread(false);
        let mut url = url::Url::parse("https://api.example.com/v3/grants/g-1/drafts")?;
        let params = query::encode(Some(&options)).unwrap_or_default();
        query::append_to_url(&mut url, &params);
        assert_eq!(
            url.query(),
            Some("any_email=a%40test.com&any_email=b%40test.com&limit=5&unread=false")
        );

        let mut url = url::Url::parse("https://api.example.com/v3/grants/g-1/drafts")?;
        query::append_to_url(&mut url, &QueryMap::new());
        assert_eq!(url.query(), None);
        Ok(())
    }
}
