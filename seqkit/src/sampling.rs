//! Weighted draws for `seqkit draw` and `seqkit check`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::pairs::{defaults, map_value};
use crate::core::sequence::parallel_foldl1;
use crate::core::weighted::select_with_rng;
use crate::io::config::{SamplerConfig, load_config};

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawOverrides {
    pub draws: Option<u32>,
    pub seed: Option<u64>,
}

/// Outcome of one `draw` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawReport {
    pub draws: u32,
    /// Draws that returned the fallback (total weight was zero).
    pub fallbacks: u32,
    pub fallback: String,
    pub total_weight: f64,
    /// Count per configured value, zero-weight values included.
    pub tallies: BTreeMap<String, u32>,
}

impl DrawReport {
    /// True when every draw returned the fallback.
    pub fn all_fallback(&self) -> bool {
        self.draws > 0 && self.fallbacks == self.draws
    }
}

/// Aggregate weights of a config, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSummary {
    pub choices: usize,
    pub total: f64,
    pub max: f64,
}

/// Total and maximum weight. An empty choice list sums to zero.
pub fn weight_summary(cfg: &SamplerConfig) -> WeightSummary {
    let weights = cfg.choices.iter().map(|choice| choice.weight);
    let reducers = [(|a: f64, b: f64| a + b) as fn(f64, f64) -> f64, f64::max];
    let (total, max) = match parallel_foldl1(weights, reducers).as_deref() {
        Ok([total, max]) => (*total, *max),
        _ => (0.0, 0.0),
    };
    WeightSummary {
        choices: cfg.choices.len(),
        total,
        max,
    }
}

/// Apply command-line overrides to the loaded config.
pub fn apply_overrides(mut base: SamplerConfig, overrides: &DrawOverrides) -> Result<SamplerConfig> {
    if let Some(draws) = overrides.draws {
        base.draws = draws;
    }
    if let Some(seed) = overrides.seed {
        base.seed = Some(seed);
    }
    base.validate()?;
    Ok(base)
}

/// Run `cfg.draws` weighted selections using `rng`.
pub fn draw<R: Rng>(cfg: &SamplerConfig, rng: &mut R) -> Result<DrawReport> {
    let weighted: Vec<(f64, Option<&str>)> = map_value(
        cfg.choices
            .iter()
            .map(|choice| (choice.weight, choice.value.as_str())),
        Some,
    )
    .collect();

    let mut tallies = BTreeMap::new();
    defaults(
        &mut tallies,
        cfg.choices.iter().map(|choice| (choice.value.clone(), 0u32)),
    );

    let mut fallbacks = 0u32;
    for _ in 0..cfg.draws {
        match select_with_rng(rng, &weighted, None).context("weighted selection")? {
            Some(value) => *tallies.entry(value.to_string()).or_insert(0) += 1,
            None => fallbacks += 1,
        }
    }

    let summary = weight_summary(cfg);
    debug!(
        draws = cfg.draws,
        fallbacks,
        total_weight = summary.total,
        "draw complete"
    );
    Ok(DrawReport {
        draws: cfg.draws,
        fallbacks,
        fallback: cfg.fallback.clone(),
        total_weight: summary.total,
        tallies,
    })
}

/// Load config from `path`, apply overrides, seed the generator and draw.
pub fn draw_from_path(path: &Path, overrides: &DrawOverrides) -> Result<DrawReport> {
    let cfg = load_config(path).with_context(|| "load config for draw")?;
    let cfg = apply_overrides(cfg, overrides)?;
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(draws = cfg.draws, seeded = cfg.seed.is_some(), "drawing");
    draw(&cfg, &mut rng)
}
