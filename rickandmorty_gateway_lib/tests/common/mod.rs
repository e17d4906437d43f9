#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use rickandmorty_gateway_lib::types::{Character, CharacterGender, CharacterStatus, ResourceLink};
use rickandmorty_gateway_lib::{CharacterSource, SourceError};
use serde_json::Value;
use tower::ServiceExt;

pub fn character(id: i64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: CharacterGender::Male,
        origin: ResourceLink {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: ResourceLink {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        url: format!("https://rickandmortyapi.com/api/character/{}", id),
        created: DateTime::parse_from_rfc3339("2017-11-04T18:48:46.250Z")
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// What every call on a [`ScriptedSource`] answers with.
pub enum Script {
    Characters(Vec<Character>),
    Fail(&'static str),
    Panic,
}

/// Test double that records each call and replays its script.
pub struct ScriptedSource {
    script: Script,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: String) -> Result<Vec<Character>, SourceError> {
        self.calls.lock().unwrap().push(call);
        match &self.script {
            Script::Characters(characters) => Ok(characters.clone()),
            Script::Fail(message) => Err((*message).into()),
            Script::Panic => panic!("scripted panic"),
        }
    }
}

#[async_trait]
impl CharacterSource for ScriptedSource {
    async fn get_one(&self, id: &str) -> Result<Character, SourceError> {
        let mut characters = self.respond(format!("get_one:{}", id))?;
        Ok(characters.remove(0))
    }

    async fn get_many(&self, ids: &str) -> Result<Vec<Character>, SourceError> {
        self.respond(format!("get_many:{}", ids))
    }

    async fn search(&self, name: &str) -> Result<Vec<Character>, SourceError> {
        self.respond(format!("search:{}", name))
    }

    async fn list_all(&self) -> Result<Vec<Character>, SourceError> {
        self.respond("list_all".to_string())
    }
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
