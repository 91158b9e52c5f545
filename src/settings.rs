use serde::Deserialize;
use log::warn;
use once_cell::sync::Lazy;
use config::{Config, Environment, File};

use crate::matching::{EDIT_PROXIMITY_WEIGHT, MATCH_THRESHOLD, TOKEN_OVERLAP_WEIGHT};

/// Matcher policy, tunable without a rebuild: an optional `pairmate.toml`
/// next to the process plus `PAIRMATE_*` environment variables
/// (`PAIRMATE_MATCH_THRESHOLD`, `PAIRMATE_TOKEN_OVERLAP_WEIGHT`,
/// `PAIRMATE_EDIT_PROXIMITY_WEIGHT`). The compiled constants are the
/// defaults; the threshold and blend are still under product calibration.
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherSettings {
    pub match_threshold: f64,
    pub token_overlap_weight: f64,
    pub edit_proximity_weight: f64,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            token_overlap_weight: TOKEN_OVERLAP_WEIGHT,
            edit_proximity_weight: EDIT_PROXIMITY_WEIGHT,
        }
    }
}

impl MatcherSettings {
    /// Clamp the threshold into [0, 1] and renormalize the weights to sum
    /// to 1, falling back to defaults for unusable values.
    fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            warn!(
                "Match threshold {} outside [0, 1], using default {}",
                self.match_threshold, MATCH_THRESHOLD
            );
            self.match_threshold = MATCH_THRESHOLD;
        }

        let weight_sum = self.token_overlap_weight + self.edit_proximity_weight;
        if self.token_overlap_weight < 0.0 || self.edit_proximity_weight < 0.0 || weight_sum <= 0.0 {
            warn!(
                "Unusable matcher weights {}/{}, using defaults",
                self.token_overlap_weight, self.edit_proximity_weight
            );
            self.token_overlap_weight = TOKEN_OVERLAP_WEIGHT;
            self.edit_proximity_weight = EDIT_PROXIMITY_WEIGHT;
        } else if (weight_sum - 1.0).abs() > 1e-9 {
            self.token_overlap_weight /= weight_sum;
            self.edit_proximity_weight /= weight_sum;
        }

        self
    }
}

static MATCHER_SETTINGS: Lazy<MatcherSettings> = Lazy::new(load_matcher_settings);

/// Process-wide matcher policy, loaded once on first use.
pub fn matcher_settings() -> &'static MatcherSettings {
    &MATCHER_SETTINGS
}

fn load_matcher_settings() -> MatcherSettings {
    // Pick up a .env file in development; ignore when absent.
    dotenvy::dotenv().ok();

    let defaults = MatcherSettings::default();
    let loaded = Config::builder()
        .set_default("match_threshold", defaults.match_threshold)
        .and_then(|builder| builder.set_default("token_overlap_weight", defaults.token_overlap_weight))
        .and_then(|builder| builder.set_default("edit_proximity_weight", defaults.edit_proximity_weight))
        .map(|builder| {
            builder
                .add_source(File::with_name("pairmate").required(false))
                .add_source(Environment::with_prefix("PAIRMATE"))
        })
        .and_then(|builder| builder.build())
        .and_then(|settings| settings.try_deserialize::<MatcherSettings>());

    match loaded {
        Ok(settings) => settings.sanitized(),
        Err(e) => {
            warn!("Failed to load matcher settings, using defaults: {}", e);
            defaults
        }
    }
}
