//! Drive `HeroService` through the JSON vectors stored in `test-vectors/`.
//!
//! Each case gives an input, the request the service must send, the response
//! the transport replays, the value the service must resolve to, and the one
//! message it must record. Bodies are compared as parsed JSON so field order
//! does not matter.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hero_core::{
    Hero, HeroClient, HeroService, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    MessageService, NewHero, TransportError,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Replays one response and remembers every request.
struct ReplayTransport {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl HttpTransport for ReplayTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

fn service_for(case: &Value) -> (HeroService<Arc<ReplayTransport>, MessageService>, Arc<ReplayTransport>) {
    let sim = &case["simulated_response"];
    let transport = Arc::new(ReplayTransport {
        response: HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        },
        requests: Mutex::new(Vec::new()),
    });
    let service = HeroService::new(
        HeroClient::new(BASE_URL),
        Arc::clone(&transport),
        MessageService::new(),
    );
    (service, transport)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Assert the single request sent and return it.
fn sent_request(name: &str, transport: &ReplayTransport, expected: &Value) -> HttpRequest {
    let requests = transport.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1, "{name}: exactly one request");
    let req = requests.into_iter().next().unwrap();
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");
    req
}

fn assert_message(name: &str, service: &HeroService<Arc<ReplayTransport>, MessageService>, case: &Value) {
    let messages = service.sink().messages();
    assert_eq!(messages.len(), 1, "{name}: exactly one message");
    if let Some(expected) = case.get("expected_message") {
        assert_eq!(messages[0], expected.as_str().unwrap(), "{name}: message");
    } else {
        let prefix = case["expected_message_prefix"].as_str().unwrap();
        assert!(messages[0].starts_with(prefix), "{name}: message {:?}", messages[0]);
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap() as u32;
        let (service, transport) = service_for(case);

        let result = service.get_hero(id).await;

        let req = sent_request(name, &transport, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");
        let expected: Option<Hero> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result, expected, "{name}: result");
        assert_message(name, &service, case);
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let term = case["input_term"].as_str().unwrap();
        let (service, transport) = service_for(case);

        let result = service.search_heroes(term).await;

        sent_request(name, &transport, &case["expected_request"]);
        let expected: Vec<Hero> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result, expected, "{name}: result");
        assert_message(name, &service, case);
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: NewHero = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];
        let (service, transport) = service_for(case);

        let result = service.add_hero(&input).await;

        let req = sent_request(name, &transport, expected_req);
        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
        let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        let expected: Option<Hero> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result, expected, "{name}: result");
        assert_message(name, &service, case);
    }
}
