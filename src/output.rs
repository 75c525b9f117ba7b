// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for the non-interactive commands

use crate::display;
use crate::types::{Requirements, Verdict};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn serialize_requirements(&self, round: u32, reqs: &Requirements) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(format!(
                "Round {}\n{}",
                round,
                display::render_requirements(reqs)
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&RoundRules {
                round,
                requirements: reqs,
            })?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&RoundRules {
                round,
                requirements: reqs,
            })?),
        }
    }

    pub fn serialize_verdict(&self, verdict: &Verdict) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(display::render_verdict(verdict)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(verdict)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(verdict)?),
        }
    }
}

#[derive(Serialize)]
struct RoundRules<'a> {
    round: u32,
    requirements: &'a Requirements,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Violation;

    #[test]
    fn test_json_requirements_round_trip_fields() {
        let reqs = Requirements {
            min_length: 7,
            min_digits: 1,
            ..Requirements::default()
        };
        let json = OutputFormat::Json
            .serialize_requirements(1, &reqs)
            .expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["round"], 1);
        assert_eq!(value["requirements"]["min_length"], 7);
        assert_eq!(value["requirements"]["require_palindrome"], false);
    }

    #[test]
    fn test_yaml_verdict_mentions_rule() {
        let verdict = Verdict::Invalid(Violation::DigitSumMismatch {
            actual: 1,
            target: 2,
        });
        let yaml = OutputFormat::Yaml.serialize_verdict(&verdict).expect("yaml");
        assert!(yaml.contains("digit_sum_mismatch"));
        assert!(yaml.contains("target: 2"));
    }
}
