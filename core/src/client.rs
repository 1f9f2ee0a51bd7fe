//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroClient` holds only a base URL and the resource path, and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The round-trip in between belongs to an `HttpTransport`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ack, Hero, NewHero};

/// Collection path of the hero resource, relative to the base URL.
pub const HEROES_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the hero API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    base_url: String,
    resource_path: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: HEROES_PATH.to_string(),
        }
    }

    /// Point the client at a different collection, e.g. `v2/heroes`.
    pub fn with_resource_path(mut self, path: &str) -> Self {
        self.resource_path = path.trim_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource_path)
    }

    fn hero_url(&self, id: u32) -> String {
        format!("{}/{id}", self.collection_url())
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.hero_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `PUT` goes to the collection; the id travels in the body.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(hero)?),
        })
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(hero)?),
        })
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.hero_url(id),
            headers: json_headers(),
            body: None,
        }
    }

    /// Build a name-contains search. The term is sent as given (no trimming)
    /// and percent-encoded so it always stays a single query parameter.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        let term: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/?name={term}", self.collection_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Any 2xx is success. An empty body is a valid acknowledgement; a non-empty
/// one must still be JSON.
fn parse_ack(response: HttpResponse) -> Result<Ack, ApiError> {
    check_status(&response)?;
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(from_json(&response.body)?)
    };
    Ok(Ack {
        status: response.status,
        body,
    })
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
