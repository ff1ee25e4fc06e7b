//! Template loader (C11, §4.12/§6): the external collaborator that turns a
//! creature id into the raw data a `Creature` is built from. Two
//! implementations share one trait — an in-process default catalog with no
//! I/O, and a memoizing HTTP provider.
//!
//! Grounded on `milan090-pokemonlegends-backend`'s `DashMap`-backed shared
//! state (`app_state.rs`'s `lobbies: DashMap<...>`) for the memoization
//! cache shape, and that repo's `reqwest`-adjacent HTTP-client conventions;
//! `poke_engine` itself has no runtime template-loading story since it
//! codegens species/move data at build time (`poke_engine_codegen`), which
//! is exactly what this component replaces.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::abilities::Ability;
use crate::config::EngineConfig;
use crate::creature::Creature;
use crate::error::EngineError;
use crate::items::Item;
use crate::natures::Nature;
use crate::stats::DEFAULT_LEVEL;
use crate::types::Type;
use crate::value::{EffortValues, IndividualValues, Move, MoveCategory};

/// Raw creature data as the loader collaborator hands it over, §3/§6. Moves
/// are plain tuples here (rather than `value::Move`) because accuracy and
/// priority arrive from an untyped source (JSON, or a hand-authored literal)
/// before this module's range invariants are enforced by `Move::new`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub types: Vec<Type>,
    pub terastal_type: Option<Type>,
    pub base_stats: [u16; 6],
    pub evs: [u8; 6],
    #[serde(default)]
    pub ivs: Option<[u8; 6]>,
    pub moves: Vec<(String, Type, MoveCategory, u16, u8, i8)>,
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

impl Template {
    /// Instantiate a battle-ready `Creature` from this template, §3
    /// "Lifecycles: Creatures are created by the template-loading
    /// collaborator."
    pub fn instantiate(&self) -> Creature {
        let ivs = self.ivs.map(IndividualValues::new).unwrap_or_default();
        let evs = EffortValues::new_normal(self.evs);
        let moves = self
            .moves
            .iter()
            .map(|(name, t, cat, power, acc, prio)| Move::new(name.clone(), *t, *cat, *power, *acc, *prio))
            .collect();
        let mut creature = Creature::new(
            self.name.clone(),
            self.level,
            self.types.clone(),
            self.base_stats,
            ivs,
            evs,
            Nature::Hardy,
            moves,
            Item::None,
            Ability::None,
        );
        creature.terastal_type = self.terastal_type;
        creature
    }
}

/// The loader's two operations, §6. `async` because the HTTP provider is the
/// one true suspension point outside the turn loop proper, §5.
#[async_trait::async_trait]
pub trait TemplateProvider: Send + Sync {
    async fn config_by_id(&self, id: &str) -> Result<Option<Template>, EngineError>;
    async fn has(&self, id: &str) -> bool {
        matches!(self.config_by_id(id).await, Ok(Some(_)))
    }
}

/// In-process catalog: a handful of hand-authored templates, built once at
/// construction. Never performs I/O, never fails, §4.12.
pub struct DefaultCatalogProvider {
    catalog: std::collections::HashMap<String, Template>,
}

impl DefaultCatalogProvider {
    pub fn new() -> Self {
        let mut catalog = std::collections::HashMap::new();
        catalog.insert(
            "charizard".to_string(),
            Template {
                name: "Charizard".into(),
                types: vec![Type::Fire, Type::Flying],
                terastal_type: Some(Type::Fire),
                base_stats: [78, 84, 78, 109, 85, 100],
                evs: [0, 0, 0, 252, 4, 252],
                ivs: None,
                moves: vec![
                    ("Flamethrower".into(), Type::Fire, MoveCategory::Special, 90, 100, 0),
                    ("Air Slash".into(), Type::Flying, MoveCategory::Special, 75, 95, 0),
                    ("Dragon Pulse".into(), Type::Dragon, MoveCategory::Special, 85, 100, 0),
                    ("Roost".into(), Type::Flying, MoveCategory::Status, 0, 100, 0),
                ],
                level: DEFAULT_LEVEL,
            },
        );
        catalog.insert(
            "blastoise".to_string(),
            Template {
                name: "Blastoise".into(),
                types: vec![Type::Water],
                terastal_type: Some(Type::Water),
                base_stats: [79, 83, 100, 85, 105, 78],
                evs: [0, 0, 252, 252, 4, 0],
                ivs: None,
                moves: vec![
                    ("Surf".into(), Type::Water, MoveCategory::Special, 90, 100, 0),
                    ("Ice Beam".into(), Type::Ice, MoveCategory::Special, 90, 100, 0),
                    ("Dark Pulse".into(), Type::Dark, MoveCategory::Special, 80, 100, 0),
                    ("Shell Smash".into(), Type::Normal, MoveCategory::Status, 0, 100, 0),
                ],
                level: DEFAULT_LEVEL,
            },
        );
        catalog.insert(
            "venusaur".to_string(),
            Template {
                name: "Venusaur".into(),
                types: vec![Type::Grass, Type::Poison],
                terastal_type: Some(Type::Grass),
                base_stats: [80, 82, 83, 100, 100, 80],
                evs: [0, 0, 0, 252, 4, 252],
                ivs: None,
                moves: vec![
                    ("Giga Drain".into(), Type::Grass, MoveCategory::Special, 75, 100, 0),
                    ("Sludge Bomb".into(), Type::Poison, MoveCategory::Special, 90, 100, 0),
                    ("Earth Power".into(), Type::Ground, MoveCategory::Special, 90, 100, 0),
                    ("Synthesis".into(), Type::Grass, MoveCategory::Status, 0, 100, 0),
                ],
                level: DEFAULT_LEVEL,
            },
        );
        Self { catalog }
    }
}

impl Default for DefaultCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TemplateProvider for DefaultCatalogProvider {
    async fn config_by_id(&self, id: &str) -> Result<Option<Template>, EngineError> {
        Ok(self.catalog.get(id).cloned())
    }

    async fn has(&self, id: &str) -> bool {
        self.catalog.contains_key(id)
    }
}

/// Memoizing HTTP provider: GETs `{base_url}/templates/{id}` and caches both
/// hits and misses so a retry storm never re-hits the network for a known
/// 404, §4.12/§5 ("read-mostly and keyed by immutable template id, hence
/// `DashMap` rather than a `RefCell`-guarded map").
pub struct HttpTemplateProvider {
    client: reqwest::Client,
    base_url: String,
    cache: DashMap<String, Option<Template>>,
}

impl HttpTemplateProvider {
    pub fn new(config: &EngineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("reqwest client builds with a fixed timeout");
        Self { client, base_url: config.environment.base_url().to_string(), cache: DashMap::new() }
    }

    async fn fetch(&self, id: &str, url: &str) -> Result<Option<Template>, EngineError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EngineError::NetworkTransient(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            self.cache.insert(id.to_string(), None);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(EngineError::NetworkTransient(format!(
                "unexpected status {} for {url}",
                response.status()
            )));
        }

        let template: Template = response
            .json()
            .await
            .map_err(|e| EngineError::NetworkTransient(e.to_string()))?;
        self.cache.insert(id.to_string(), Some(template.clone()));
        Ok(Some(template))
    }
}

#[async_trait::async_trait]
impl TemplateProvider for HttpTemplateProvider {
    async fn config_by_id(&self, id: &str) -> Result<Option<Template>, EngineError> {
        if let Some(entry) = self.cache.get(id) {
            return Ok(entry.clone());
        }

        let url = format!("{}/templates/{id}", self.base_url);
        let outcome = self.fetch(id, &url).await;

        // §7: NetworkTransient is the internal failure kind, but a battle
        // setup caller only ever observes TemplateUnavailable — a transient
        // fetch failure and "no such creature" are indistinguishable from
        // the embedder's point of view.
        outcome.map_err(|e| match e {
            EngineError::NetworkTransient(msg) => EngineError::TemplateUnavailable(msg),
            other => other,
        })
    }
}
