//! Cocktail API Client
//!
//! URL building, GET through a [`Transport`], and parsing of the
//! `{ "drinks": [...] | null }` envelope every endpoint answers with.

mod fetch;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, Cocktail, CocktailSummary};

pub use fetch::BrowserTransport;

/// Same set `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

// ========================
// Transport
// ========================

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues plain GET requests
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> ApiResult<RawResponse>;
}

// ========================
// Endpoints
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Random,
    SearchByName(String),
    LookupById(String),
    ListCategories,
    FilterByCategory(String),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Random => "random.php",
            Endpoint::SearchByName(_) => "search.php",
            Endpoint::LookupById(_) => "lookup.php",
            Endpoint::ListCategories => "list.php",
            Endpoint::FilterByCategory(_) => "filter.php",
        }
    }

    /// Query string including the leading `?`, values percent-encoded once
    pub fn query(&self) -> String {
        match self {
            Endpoint::Random => String::new(),
            Endpoint::SearchByName(name) => format!("?s={}", encode_component(name)),
            Endpoint::LookupById(id) => format!("?i={}", encode_component(id)),
            Endpoint::ListCategories => "?c=list".to_string(),
            Endpoint::FilterByCategory(category) => format!("?c={}", encode_component(category)),
        }
    }
}

// ========================
// Client
// ========================

pub struct CocktailApi<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> CocktailApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}{}", self.config.base_url(), endpoint.path(), endpoint.query())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// First cocktail of the response collection, as returned
    pub async fn fetch_single_cocktail(&self, endpoint: &Endpoint) -> ApiResult<Option<Cocktail>> {
        let drinks: Option<Vec<Cocktail>> = self.fetch_drinks(endpoint).await?;
        Ok(drinks.and_then(|list| list.into_iter().next()))
    }

    pub async fn fetch_category_list(&self) -> ApiResult<Option<Vec<Category>>> {
        self.fetch_drinks(&Endpoint::ListCategories).await
    }

    pub async fn fetch_cocktails_by_category(&self, category: &str) -> ApiResult<Option<Vec<CocktailSummary>>> {
        self.fetch_drinks(&Endpoint::FilterByCategory(category.to_string())).await
    }

    async fn fetch_drinks<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<Option<Vec<R>>> {
        let url = self.url(endpoint);
        tracing::debug!(url = %url, "GET");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(ApiError::Http { status: response.status });
        }
        parse_drinks(&response.body)
    }
}

/// Unwrap the `drinks` envelope.
///
/// `null`, a missing key, an empty array, or a string marker such as
/// `"no data found"` all mean "no results".
pub fn parse_drinks<R: DeserializeOwned>(body: &str) -> ApiResult<Option<Vec<R>>> {
    let envelope: serde_json::Value = serde_json::from_str(body)?;
    let drinks = match envelope {
        serde_json::Value::Object(mut map) => map.remove("drinks"),
        other => {
            return Err(ApiError::Parse(format!("expected an object, got {}", json_kind(&other))));
        }
    };

    match drinks {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::String(_)) => Ok(None),
        Some(list @ serde_json::Value::Array(_)) => {
            let records: Vec<R> = serde_json::from_value(list)?;
            Ok((!records.is_empty()).then_some(records))
        }
        Some(other) => Err(ApiError::Parse(format!("unexpected `drinks` value: {}", json_kind(&other)))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for tests

    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use futures::channel::oneshot;

    use super::{RawResponse, Transport};
    use crate::error::{ApiError, ApiResult};

    enum Reply {
        Ready(ApiResult<RawResponse>),
        Deferred(oneshot::Receiver<RawResponse>),
    }

    #[derive(Default)]
    pub struct MockTransport {
        replies: Mutex<HashMap<String, VecDeque<Reply>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockTransport {
        pub fn respond(&self, url: &str, reply: ApiResult<RawResponse>) {
            self.push(url, Reply::Ready(reply));
        }

        pub fn respond_json(&self, url: &str, body: serde_json::Value) {
            self.respond(url, Ok(RawResponse::ok(body.to_string())));
        }

        /// Reply arrives only when the returned sender fires
        pub fn defer(&self, url: &str) -> oneshot::Sender<RawResponse> {
            let (tx, rx) = oneshot::channel();
            self.push(url, Reply::Deferred(rx));
            tx
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn push(&self, url: &str, reply: Reply) {
            self.replies.lock().unwrap().entry(url.to_string()).or_default().push_back(reply);
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, url: &str) -> ApiResult<RawResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            let reply = self.replies.lock().unwrap().get_mut(url).and_then(VecDeque::pop_front);
            match reply {
                Some(Reply::Ready(result)) => result,
                Some(Reply::Deferred(rx)) => rx.await.map_err(|_| ApiError::Network("request dropped".into())),
                None => Err(ApiError::Network(format!("no scripted reply for {}", url))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    const BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

    fn api() -> CocktailApi<MockTransport> {
        CocktailApi::new(ApiConfig::default(), MockTransport::default())
    }

    #[test]
    fn test_urls() {
        let api = api();
        assert_eq!(api.url(&Endpoint::Random), format!("{}random.php", BASE));
        assert_eq!(api.url(&Endpoint::ListCategories), format!("{}list.php?c=list", BASE));
        assert_eq!(api.url(&Endpoint::LookupById("11007".into())), format!("{}lookup.php?i=11007", BASE));
        assert_eq!(
            api.url(&Endpoint::SearchByName("Long Island Tea".into())),
            format!("{}search.php?s=Long%20Island%20Tea", BASE)
        );
    }

    #[test]
    fn test_category_encoded_exactly_once() {
        let api = api();
        let cases = [
            ("Ordinary Drink", "Ordinary%20Drink"),
            ("Coffee / Tea", "Coffee%20%2F%20Tea"),
            ("Punch & Party?", "Punch%20%26%20Party%3F"),
            ("100%", "100%25"),
            ("Shot%20", "Shot%2520"),
            ("Café", "Caf%C3%A9"),
        ];
        for (category, encoded) in cases {
            api.transport().respond_json(
                &format!("{}filter.php?c={}", BASE, encoded),
                json!({ "drinks": null }),
            );
            block_on(api.fetch_cocktails_by_category(category)).unwrap();
        }

        let calls = api.transport().calls();
        assert_eq!(calls.len(), cases.len());
        for (call, (_, encoded)) in calls.iter().zip(cases.iter()) {
            assert_eq!(call, &format!("{}filter.php?c={}", BASE, encoded));
            assert!(!call.contains(' '));
        }
    }

    #[test]
    fn test_single_cocktail_takes_first() {
        let api = api();
        let url = api.url(&Endpoint::SearchByName("marg".into()));
        api.transport().respond_json(&url, json!({ "drinks": [
            { "idDrink": "11007", "strDrink": "Margarita" },
            { "idDrink": "11118", "strDrink": "Blue Margarita" }
        ]}));

        let cocktail = block_on(api.fetch_single_cocktail(&Endpoint::SearchByName("marg".into())))
            .unwrap()
            .unwrap();
        assert_eq!(cocktail.id, "11007");
    }

    #[test]
    fn test_empty_results_are_absent() {
        let api = api();
        let url = api.url(&Endpoint::Random);
        api.transport().respond_json(&url, json!({ "drinks": null }));
        api.transport().respond_json(&url, json!({ "drinks": [] }));
        api.transport().respond_json(&url, json!({ "drinks": "no data found" }));
        api.transport().respond_json(&url, json!({}));

        for _ in 0..4 {
            assert_eq!(block_on(api.fetch_single_cocktail(&Endpoint::Random)).unwrap(), None);
        }
    }

    #[test]
    fn test_http_error() {
        let api = api();
        let url = api.url(&Endpoint::ListCategories);
        api.transport().respond(&url, Ok(RawResponse { status: 500, body: "oops".into() }));

        let err = block_on(api.fetch_category_list()).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500 });
    }

    #[test]
    fn test_parse_errors() {
        let api = api();
        let url = api.url(&Endpoint::ListCategories);
        api.transport().respond(&url, Ok(RawResponse::ok("<html>not json</html>")));
        api.transport().respond_json(&url, json!({ "drinks": [{ "name": "wrong field" }] }));
        api.transport().respond_json(&url, json!([1, 2, 3]));
        api.transport().respond_json(&url, json!({ "drinks": 42 }));

        for _ in 0..4 {
            let err = block_on(api.fetch_category_list()).unwrap_err();
            assert!(matches!(err, ApiError::Parse(_)), "got {:?}", err);
        }
    }

    #[test]
    fn test_network_error_passes_through() {
        let api = api();
        let err = block_on(api.fetch_single_cocktail(&Endpoint::Random)).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn test_category_list_parses() {
        let api = api();
        let url = api.url(&Endpoint::ListCategories);
        api.transport().respond_json(&url, json!({ "drinks": [
            { "strCategory": "Cocktail" },
            { "strCategory": "Shot" }
        ]}));

        let categories = block_on(api.fetch_category_list()).unwrap().unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Cocktail", "Shot"]);
    }
}
