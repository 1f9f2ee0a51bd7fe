//! `HeroService`: hero CRUD and search over an `HttpTransport`, with every
//! outcome recorded in a `MessageSink`.
//!
//! # Design
//! Each operation builds its request with `HeroClient`, hands it to the
//! transport, and parses the response. Success records one message and
//! returns the value. Any failure (unbuildable request, transport error,
//! non-2xx status, undecodable body) is reported on the `tracing` error
//! channel, recorded as one message, and replaced by a fallback value. No
//! public method returns an error.
//!
//! Operations share no mutable state, so concurrent calls are fine. Nothing
//! orders or cancels them, though: two quick searches may resolve in either
//! order.

use thiserror::Error;
use tracing::{debug, error};

use crate::client::HeroClient;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::message::MessageSink;
use crate::transport::HttpTransport;
use crate::types::{Ack, Hero, NewHero};

const LOG_PREFIX: &str = "HeroService";

/// Everything that can go wrong in a single round-trip.
#[derive(Debug, Error)]
enum Failure {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone)]
pub struct HeroService<T, S> {
    client: HeroClient,
    transport: T,
    sink: S,
}

impl<T: HttpTransport, S: MessageSink> HeroService<T, S> {
    pub fn new(client: HeroClient, transport: T, sink: S) -> Self {
        Self {
            client,
            transport,
            sink,
        }
    }

    pub fn client(&self) -> &HeroClient {
        &self.client
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// All heroes, or an empty list on failure.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        let request = self.client.build_list_heroes();
        match self.send(Ok(request), HeroClient::parse_list_heroes).await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.handle_error("list_heroes", err, Vec::new()),
        }
    }

    /// The hero with `id`, or `None` if it is missing or the call failed.
    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let request = self.client.build_get_hero(id);
        match self.send(Ok(request), HeroClient::parse_get_hero).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(err) => self.handle_error(&format!("get_hero id={id}"), err, None),
        }
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<Ack> {
        let request = self.client.build_update_hero(hero);
        match self.send(request, HeroClient::parse_update_hero).await {
            Ok(ack) => {
                self.log(format!("updated hero id={}", hero.id));
                Some(ack)
            }
            Err(err) => self.handle_error("update_hero", err, None),
        }
    }

    /// Create a hero; the returned value carries the server-assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let request = self.client.build_add_hero(hero);
        match self.send(request, HeroClient::parse_add_hero).await {
            Ok(created) => {
                self.log(format!("added hero w/ id={}", created.id));
                Some(created)
            }
            Err(err) => self.handle_error("add_hero", err, None),
        }
    }

    pub async fn delete_hero(&self, id: u32) -> Option<Ack> {
        let request = self.client.build_delete_hero(id);
        match self.send(Ok(request), HeroClient::parse_delete_hero).await {
            Ok(ack) => {
                self.log(format!("deleted hero id={id}"));
                Some(ack)
            }
            Err(err) => self.handle_error("delete_hero", err, None),
        }
    }

    /// Heroes whose name contains `term`. A blank term returns an empty list
    /// right away, without a request or a message.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.client.build_search_heroes(term);
        match self.send(Ok(request), HeroClient::parse_search_heroes).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{term}\""));
                } else {
                    self.log(format!("found heroes matching \"{term}\""));
                }
                heroes
            }
            Err(err) => self.handle_error("search_heroes", err, Vec::new()),
        }
    }

    async fn send<R>(
        &self,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&HeroClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, Failure> {
        let request = request?;
        debug!(method = %request.method, url = %request.url, "Sending hero request");
        let response = self.transport.execute(request).await?;
        Ok(parse(&self.client, response)?)
    }

    fn handle_error<R>(&self, operation: &str, err: Failure, fallback: R) -> R {
        error!(%operation, error = ?err, "Hero request failed");
        self.log(format!("{operation} failed: {err}"));
        fallback
    }

    fn log(&self, message: impl AsRef<str>) {
        self.sink.add(format!("{LOG_PREFIX}: {}", message.as_ref()));
    }
}
