//! Scene code parsing
//!
//! Mosaic filenames embed a fixed five-character code describing the
//! acquisition, e.g. `F02DAR`: observation mode, two-character beam number,
//! polarization count, orbit direction, look direction, in that order.

use crate::types::{LookDirection, OrbitDirection, PalsarError, PalsarResult, PolarizationCount};
use regex::Regex;
use std::sync::OnceLock;

fn scene_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<MODE>[FU])(?P<BEAM_NUMBER>[0-9A-Za-z]{2})(?P<POLARIZATIONS>[DQ])(?P<ORBIT>[AD])(?P<OBSERVATION>[RL])$",
        )
        .expect("scene code pattern is valid")
    })
}

/// Parsed acquisition descriptor from a mosaic scene code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCode {
    /// Observation mode, `F` (fine) or `U` (ScanSAR)
    pub mode: char,
    /// Two-character beam number, e.g. `02` or `P6`
    pub beam_number: String,
    pub polarization_count: PolarizationCount,
    pub orbit: OrbitDirection,
    pub observation: LookDirection,
}

impl SceneCode {
    /// Parse a five-character scene code. Anything that does not match the
    /// fixed pattern exactly is a hard error.
    pub fn parse(code: &str) -> PalsarResult<Self> {
        let captures = scene_code_pattern().captures(code).ok_or_else(|| {
            PalsarError::MalformedCode(format!(
                "scene code {:?} does not match the expected pattern",
                code
            ))
        })?;

        let mode = captures["MODE"].chars().next().expect("single char group");
        let polarization_count = match &captures["POLARIZATIONS"] {
            "D" => PolarizationCount::Dual,
            _ => PolarizationCount::Quad,
        };
        let orbit = match &captures["ORBIT"] {
            "A" => OrbitDirection::Ascending,
            _ => OrbitDirection::Descending,
        };
        let observation = match &captures["OBSERVATION"] {
            "L" => LookDirection::Left,
            _ => LookDirection::Right,
        };

        Ok(SceneCode {
            mode,
            beam_number: captures["BEAM_NUMBER"].to_string(),
            polarization_count,
            orbit,
            observation,
        })
    }

    /// Reassemble the original five-character code
    pub fn code(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.mode,
            self.beam_number,
            self.polarization_count.code(),
            self.orbit.code(),
            self.observation.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fine_dual_ascending_right() {
        let code = SceneCode::parse("F02DAR").unwrap();
        assert_eq!(code.mode, 'F');
        assert_eq!(code.beam_number, "02");
        assert_eq!(code.polarization_count, PolarizationCount::Dual);
        assert_eq!(code.orbit, OrbitDirection::Ascending);
        assert_eq!(code.observation, LookDirection::Right);
    }

    #[test]
    fn parses_quad_beam_with_letter() {
        let code = SceneCode::parse("FP6QAR").unwrap();
        assert_eq!(code.beam_number, "P6");
        assert_eq!(code.polarization_count, PolarizationCount::Quad);
    }

    #[test]
    fn parses_scansar_descending_left() {
        let code = SceneCode::parse("U02DDL").unwrap();
        assert_eq!(code.mode, 'U');
        assert_eq!(code.orbit, OrbitDirection::Descending);
        assert_eq!(code.observation, LookDirection::Left);
    }

    #[test]
    fn round_trips_valid_codes() {
        for raw in ["F02DAR", "FP6QAR", "U02DDL", "UA1QDR"] {
            assert_eq!(SceneCode::parse(raw).unwrap().code(), raw);
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for raw in ["X02DAR", "F02DA", "F02DARR", "F02XAR", "f02dar", ""] {
            let err = SceneCode::parse(raw).unwrap_err();
            assert!(matches!(err, PalsarError::MalformedCode(_)), "{:?}", raw);
        }
    }
}
