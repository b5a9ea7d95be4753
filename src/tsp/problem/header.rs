use std::str::FromStr;

use log::{debug, warn};
use regex::Regex;
use strum::EnumString;

/// `TYPE` field of a TSPLIB preamble.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum ProblemType {
    #[strum(ascii_case_insensitive)]
    Tsp,
    #[strum(ascii_case_insensitive)]
    Atsp,
    #[strum(ascii_case_insensitive)]
    Sop,
    #[strum(ascii_case_insensitive)]
    Hcp,
    #[strum(ascii_case_insensitive)]
    Cvrp,
    #[strum(ascii_case_insensitive)]
    Tour,
}

/// `EDGE_WEIGHT_TYPE` field. Recorded for reporting only; tours are always
/// measured with planar Euclidean distance.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum EdgeWeightType {
    #[strum(serialize = "EUC_2D")]
    Euc2d,
    #[strum(serialize = "CEIL_2D")]
    Ceil2d,
    #[strum(serialize = "MAN_2D")]
    Man2d,
    #[strum(serialize = "MAX_2D")]
    Max2d,
    #[strum(serialize = "ATT")]
    Att,
    #[strum(serialize = "GEO")]
    Geo,
    #[strum(serialize = "EXPLICIT")]
    Explicit,
}

/// Metadata from the lines preceding `NODE_COORD_SECTION`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Header {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub problem_type: Option<ProblemType>,
    pub dimension: Option<usize>,
    pub edge_weight_type: Option<EdgeWeightType>,
}

impl Header {
    /// Records a `KEY : VALUE` line. Anything else in the preamble is ignored.
    pub(super) fn read_line(&mut self, pattern: &KeyValue, line: &str) {
        match pattern.split(line) {
            Some((key, value)) => self.apply(key, value),
            None => debug!("skipping preamble line '{}'", line),
        }
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "NAME" => self.name = Some(value.to_string()),
            "COMMENT" => self.comment = Some(value.to_string()),
            "TYPE" => self.problem_type = parse_or_warn(key, value),
            "DIMENSION" => self.dimension = parse_or_warn(key, value),
            "EDGE_WEIGHT_TYPE" => self.edge_weight_type = parse_or_warn(key, value),
            _ => debug!("ignoring header field {}", key),
        }
    }
}

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse::<T>().ok();
    if parsed.is_none() {
        warn!("unrecognised {} value '{}'", key, value);
    }
    parsed
}

/// Matches `KEY : VALUE` preamble lines.
pub(super) struct KeyValue(Regex);

impl KeyValue {
    pub(super) fn new() -> Self {
        Self(
            Regex::new(r"^\s*(?P<key>[A-Z_]+)\s*:\s*(?P<value>.*?)\s*$")
                .expect("header pattern is a valid regex"),
        )
    }

    fn split<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let captures = self.0.captures(line)?;
        Some((captures.name("key")?.as_str(), captures.name("value")?.as_str()))
    }
}
