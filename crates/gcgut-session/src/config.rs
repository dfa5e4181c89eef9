use gcgut_core::AnalysisError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// User-tunable parameters for one analysis pass.
///
/// Every field has a default, so a partial JSON object is a valid override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisParams {
    /// Motif to locate; matched case-insensitively.
    pub motif: String,
    /// Sliding GC window, in bases.
    pub window_size: usize,
    /// Smallest accepted window.
    pub window_min: usize,
    /// Largest accepted window.
    pub window_max: usize,
    /// 0-based position for the simulated point mutation.
    pub mutation_position: usize,
    /// Bases shown either side of the mutation site.
    pub context_flank: usize,
    /// Fixed seed for the mutation draw (None = OS entropy).
    pub seed: Option<u64>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            motif: "TATA".to_string(),
            window_size: 50,
            window_min: 10,
            window_max: 200,
            mutation_position: 50,
            context_flank: 5,
            seed: None,
        }
    }
}

impl AnalysisParams {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::InvalidParams(e.to_string()))
    }

    /// Check the window against its configured bounds.
    ///
    /// Out-of-bounds windows are rejected rather than clamped. Mutation
    /// position depends on the loaded sequence and is checked by the engine.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.window_min == 0 || self.window_min > self.window_max {
            return Err(SessionError::InvalidParams(format!(
                "window bounds {}..={} are not a valid range",
                self.window_min, self.window_max
            )));
        }
        if !(self.window_min..=self.window_max).contains(&self.window_size) {
            return Err(AnalysisError::OutOfRange {
                parameter: "window size",
                value: self.window_size,
                min: self.window_min,
                max: self.window_max,
            }
            .into());
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Inclusive slider range for the mutation position, `None` for an empty sequence.
pub fn mutation_position_bounds(length: usize) -> Option<(usize, usize)> {
    length.checked_sub(1).map(|max| (0, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let params = AnalysisParams::default();
        assert_eq!(params.motif, "TATA");
        assert_eq!(params.window_size, 50);
        assert_eq!(params.mutation_position, 50);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let json = r#"{"motif": "gaattc", "windowSize": 20, "seed": 3}"#;
        let params = AnalysisParams::from_json(json).unwrap();
        assert_eq!(params.motif, "gaattc");
        assert_eq!(params.window_size, 20);
        assert_eq!(params.window_max, 200);
        assert_eq!(params.seed, Some(3));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            AnalysisParams::from_json("{\"windowSize\": -1}"),
            Err(SessionError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_window_out_of_bounds() {
        let params = AnalysisParams {
            window_size: 201,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SessionError::Analysis(AnalysisError::OutOfRange { value: 201, .. }))
        ));

        let params = AnalysisParams {
            window_size: 9,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_inverted_bounds() {
        let params = AnalysisParams {
            window_min: 100,
            window_max: 10,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(SessionError::InvalidParams(_))));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let params = AnalysisParams {
            seed: Some(11),
            ..Default::default()
        };
        let a: u64 = params.rng().random();
        let b: u64 = params.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutation_position_bounds() {
        assert_eq!(mutation_position_bounds(0), None);
        assert_eq!(mutation_position_bounds(1), Some((0, 0)));
        assert_eq!(mutation_position_bounds(110), Some((0, 109)));
    }
}
