//! Hero DTOs.
//!
//! These mirror the hero server's schema but are defined independently so the
//! core never links against axum. The live integration test catches drift.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A hero as stored by the remote resource. `id` is its identity; the client
/// performs no validation of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Payload for creating a hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Opaque acknowledgement of a successful update or delete.
///
/// The hero API answers mutations with either an empty body or a JSON echo
/// of the affected hero, so the body is kept as an untyped value.
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl Ack {
    /// Read the acknowledgement body as `T`, e.g. the `Hero` a delete removed.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let body = self.body.clone()?;
        serde_json::from_value(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_hero_serializes_without_id() {
        let json = serde_json::to_value(NewHero::new("Magneta")).unwrap();
        assert_eq!(json, json!({ "name": "Magneta" }));
    }

    #[test]
    fn hero_rejects_missing_id() {
        let result: Result<Hero, _> = serde_json::from_str(r#"{"name":"Nobody"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ack_decodes_echoed_hero() {
        let ack = Ack {
            status: 200,
            body: Some(json!({ "id": 13, "name": "Bombasto" })),
        };
        let hero: Hero = ack.decode().unwrap();
        assert_eq!(hero.id, 13);
    }

    #[test]
    fn empty_ack_decodes_to_none() {
        let ack = Ack {
            status: 204,
            body: None,
        };
        assert!(ack.decode::<Hero>().is_none());
    }
}
