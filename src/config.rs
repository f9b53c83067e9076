//! Simulation settings: built-in defaults + optional TOML config + env overrides.
//!
//! - `SimConfig::default()` → tolerance `1e-5`, fresh entropy
//! - `SimConfig::from_toml_file(path)` → load user settings
//! - `SimConfig::from_user_default_or_builtin()` → ~/.qubit-sim/config.toml if present
//! - `with_env_overrides()` → `QUBIT_SIM_SEED`, `QUBIT_SIM_TOLERANCE`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::basis::OrthonormalBasisPair;
use crate::core::error::Result as CoreResult;
use crate::core::random::RngSource;
use crate::core::vector::{ColumnVector, DEFAULT_TOLERANCE};

pub const SEED_ENV: &str = "QUBIT_SIM_SEED";
pub const TOLERANCE_ENV: &str = "QUBIT_SIM_TOLERANCE";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Closeness threshold for unit/orthogonality checks.
    pub tolerance: f64,
    /// Fixed generator seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE, seed: None }
    }
}

impl SimConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: SimConfig = toml::from_str(txt).context("parsing simulation config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg = Self::from_toml_str(&txt)
            .with_context(|| format!("loading {}", path.display()))?;
        debug!(path = %path.display(), tolerance = cfg.tolerance, seed = ?cfg.seed, "loaded config");
        Ok(cfg)
    }

    /// Use ~/.qubit-sim/config.toml if present; otherwise built-in.
    pub fn from_user_default_or_builtin() -> Self {
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => return cfg,
                    Err(e) => warn!("failed loading {}, using builtin config: {e:#}", p.display()),
                }
            }
        }
        Self::default()
    }

    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse::<u64>()
                .with_context(|| format!("{SEED_ENV}={raw:?} is not an unsigned integer"))?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(TOLERANCE_ENV) {
            self.tolerance = raw.trim().parse::<f64>()
                .with_context(|| format!("{TOLERANCE_ENV}={raw:?} is not a number"))?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.tolerance.is_finite() && self.tolerance > 0.0,
            "tolerance must be a positive finite number, got {}",
            self.tolerance
        );
        Ok(())
    }

    pub fn random_source(&self) -> RngSource<StdRng> {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }

    /// Basis validated against the configured tolerance.
    pub fn basis(&self, b0: ColumnVector, b1: ColumnVector) -> CoreResult<OrthonormalBasisPair> {
        OrthonormalBasisPair::with_tolerance(b0, b1, self.tolerance)
    }
}

// ----- helpers for default path -----

/// ~/.qubit-sim/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".qubit-sim").join("config.toml"))
}
