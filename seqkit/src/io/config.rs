//! Sampler configuration stored as TOML (default `seqkit.toml`).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "seqkit.toml";

/// Weighted sampler configuration (TOML).
///
/// Meant to be edited by hand. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// Value reported when the total weight is zero.
    pub fallback: String,

    /// Number of selections per `draw`.
    pub draws: u32,

    /// Seed for reproducible draws. Entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub choices: Vec<WeightedChoice>,
}

/// One `[[choices]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightedChoice {
    pub value: String,
    pub weight: f64,
}

impl WeightedChoice {
    pub fn new(value: &str, weight: f64) -> Self {
        Self {
            value: value.to_string(),
            weight,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            fallback: "none".to_string(),
            draws: 10,
            seed: None,
            choices: vec![
                WeightedChoice::new("heads", 1.0),
                WeightedChoice::new("tails", 1.0),
            ],
        }
    }
}

impl SamplerConfig {
    /// Reject configs the sampler cannot draw from meaningfully.
    ///
    /// Weights must be finite and non-negative, and so must their sum; the
    /// core selector does not check this itself.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.draws == 0 {
            errors.push("draws must be > 0".to_string());
        }
        if self.fallback.trim().is_empty() {
            errors.push("fallback must be a non-empty string".to_string());
        }

        let mut seen = HashSet::new();
        for (idx, choice) in self.choices.iter().enumerate() {
            if choice.value.trim().is_empty() {
                errors.push(format!("choices[{}]: value must be non-empty", idx));
            } else if !seen.insert(choice.value.as_str()) {
                errors.push(format!(
                    "choices[{}]: duplicate value '{}'",
                    idx, choice.value
                ));
            }
            if !choice.weight.is_finite() || choice.weight < 0.0 {
                errors.push(format!(
                    "choices[{}]: weight {} must be finite and >= 0",
                    idx, choice.weight
                ));
            }
        }
        let total: f64 = self.choices.iter().map(|choice| choice.weight).sum();
        if total.is_infinite() {
            errors.push("choices: total weight overflows".to_string());
        }

        if !errors.is_empty() {
            bail!("invalid sampler config:\n- {}", errors.join("\n- "));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SamplerConfig::default()`.
pub fn load_config(path: &Path) -> Result<SamplerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = SamplerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SamplerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), choices = cfg.choices.len(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SamplerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
