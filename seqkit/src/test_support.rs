//! Test-only fixtures: a sample type hierarchy, a property-bag struct, and
//! sampler configs.

use std::path::{Path, PathBuf};

use crate::core::hierarchy::{Tagged, TypeHandle};
use crate::core::props::Props;
use crate::io::config::{SamplerConfig, WeightedChoice, write_config};

/// Closed type hierarchy: `Entity > Animal > {Dog, Cat}`, with `Rock` as an
/// unrelated root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Entity,
    Animal,
    Dog,
    Cat,
    Rock,
}

impl TypeHandle for Kind {
    fn parent(self) -> Option<Self> {
        match self {
            Kind::Entity | Kind::Rock => None,
            Kind::Animal => Some(Kind::Entity),
            Kind::Dog | Kind::Cat => Some(Kind::Animal),
        }
    }
}

/// A value tagged with its [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specimen {
    pub kind: Kind,
}

impl Specimen {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }
}

impl Tagged for Specimen {
    type Tag = Kind;

    fn type_tag(&self) -> Kind {
        self.kind
    }
}

/// Struct whose fields are addressable as string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
}

impl<'a> Props<&'a str, &'a str> for Endpoint {
    fn set_prop(&mut self, key: &'a str, value: &'a str) {
        match key {
            "scheme" => self.scheme = value.to_string(),
            "host" => self.host = value.to_string(),
            _ => {}
        }
    }

    fn has_prop(&self, key: &&'a str) -> bool {
        match *key {
            "scheme" => !self.scheme.is_empty(),
            "host" => !self.host.is_empty(),
            _ => false,
        }
    }
}

/// Fair two-sided coin with a fixed number of draws.
pub fn coin_config(draws: u32) -> SamplerConfig {
    SamplerConfig {
        fallback: "none".to_string(),
        draws,
        seed: None,
        choices: vec![
            WeightedChoice::new("heads", 1.0),
            WeightedChoice::new("tails", 1.0),
        ],
    }
}

/// Config whose choices all carry zero weight.
pub fn zero_weight_config(draws: u32) -> SamplerConfig {
    SamplerConfig {
        fallback: "nothing".to_string(),
        draws,
        seed: None,
        choices: vec![
            WeightedChoice::new("a", 0.0),
            WeightedChoice::new("b", 0.0),
        ],
    }
}

/// Write `cfg` as `seqkit.toml` under `dir` and return its path.
pub fn write_config_fixture(dir: &Path, cfg: &SamplerConfig) -> PathBuf {
    let path = dir.join("seqkit.toml");
    write_config(&path, cfg).expect("write config fixture");
    path
}
