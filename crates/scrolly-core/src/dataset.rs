// File: crates/scrolly-core/src/dataset.rs
// Summary: Raw observation records, wide per-year records, and the reshaping between them.
// Notes:
// - Only "Asset" / "Total Assets" observations for the four tracked groups are kept.
// - The raw label "Hispanic" is presented as "Latinx" everywhere downstream.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Metric type every charted observation must carry.
pub const METRIC_TYPE: &str = "Asset";
/// Metric name every charted observation must carry.
pub const METRIC: &str = "Total Assets";
/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/median_assets_by_race.json";

/// Demographic series drawn on the chart, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    Black,
    White,
    Latinx,
    Asian,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Black, Group::White, Group::Latinx, Group::Asian];

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Black => "Black",
            Group::White => "White",
            Group::Latinx => "Latinx",
            Group::Asian => "Asian",
        }
    }

    /// Map a raw `racecl4` label onto its group. Unrecognized labels yield `None`.
    pub fn from_raw_label(label: &str) -> Option<Self> {
        match label {
            "Black" => Some(Group::Black),
            "White" => Some(Group::White),
            "Hispanic" => Some(Group::Latinx),
            "Asian" => Some(Group::Asian),
            _ => None,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Group::Black => 0,
            Group::White => 1,
            Group::Latinx => 2,
            Group::Asian => 3,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = Error;

    /// Parses presentation names (`Latinx`, not `Hispanic`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        Group::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::MalformedInput(format!("unknown group '{s}'")))
    }
}

/// One observation as it appears in the dataset file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(deserialize_with = "year_from_number_or_str")]
    pub year: i32,
    pub metric_type: String,
    pub metric: String,
    pub racecl4: String,
    #[serde(default)]
    pub median: Option<f64>,
}

impl RawRecord {
    /// True when this observation feeds the chart.
    pub fn is_charted(&self) -> bool {
        self.metric_type == METRIC_TYPE
            && self.metric == METRIC
            && Group::from_raw_label(&self.racecl4).is_some()
    }
}

fn year_from_number_or_str<'de, D>(de: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(de)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| D::Error::custom(format!("year {n} is not an integer"))),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("year '{s}' is not numeric"))),
        other => Err(D::Error::custom(format!("unexpected year value {other}"))),
    }
}

/// One row per year with a value slot for every tracked group.
///
/// Serializes with the group names as keys; absent values serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WideRecord {
    pub year: i32,
    #[serde(rename = "Black")]
    pub black: Option<f64>,
    #[serde(rename = "White")]
    pub white: Option<f64>,
    #[serde(rename = "Latinx")]
    pub latinx: Option<f64>,
    #[serde(rename = "Asian")]
    pub asian: Option<f64>,
}

impl WideRecord {
    pub const fn empty(year: i32) -> Self {
        Self { year, black: None, white: None, latinx: None, asian: None }
    }

    pub fn get(&self, group: Group) -> Option<f64> {
        match group {
            Group::Black => self.black,
            Group::White => self.white,
            Group::Latinx => self.latinx,
            Group::Asian => self.asian,
        }
    }

    fn slot_mut(&mut self, group: Group) -> &mut Option<f64> {
        match group {
            Group::Black => &mut self.black,
            Group::White => &mut self.white,
            Group::Latinx => &mut self.latinx,
            Group::Asian => &mut self.asian,
        }
    }

    /// Largest non-null value in this row.
    pub fn max_value(&self) -> Option<f64> {
        Group::ALL
            .into_iter()
            .filter_map(|g| self.get(g))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}

/// Parse the dataset document. The top level must be an array; elements that
/// do not look like observations are skipped.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    let doc: Value = serde_json::from_str(json)?;
    let items = match doc {
        Value::Array(items) => items,
        Value::Null => return Err(Error::MalformedInput("dataset is null".into())),
        other => {
            return Err(Error::MalformedInput(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let mut out = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(item) {
            Ok(rec) => out.push(rec),
            Err(err) => debug!(index, %err, "skipping unreadable record"),
        }
    }
    debug!(total, parsed = out.len(), "parsed raw records");
    Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reshape raw observations into wide per-year rows, ascending by year.
///
/// When several observations share a (year, group) pair the first one wins.
pub fn reshape(raw: &[RawRecord]) -> Vec<WideRecord> {
    let mut by_year: BTreeMap<i32, (WideRecord, [bool; 4])> = BTreeMap::new();

    for rec in raw.iter().filter(|r| r.is_charted()) {
        let Some(group) = Group::from_raw_label(&rec.racecl4) else { continue };
        let (row, seen) = by_year
            .entry(rec.year)
            .or_insert_with(|| (WideRecord::empty(rec.year), [false; 4]));
        if seen[group.slot()] {
            continue;
        }
        seen[group.slot()] = true;
        *row.slot_mut(group) = rec.median;
    }

    let rows: Vec<WideRecord> = by_year.into_values().map(|(row, _)| row).collect();
    debug!(input = raw.len(), years = rows.len(), "reshaped dataset");
    rows
}

/// Parse and reshape in one step.
pub fn load_wide(json: &str) -> Result<Vec<WideRecord>> {
    Ok(reshape(&parse_records(json)?))
}

/// Read the dataset file and reshape it.
pub fn load_wide_from_path(path: impl AsRef<Path>) -> Result<Vec<WideRecord>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    load_wide(&text)
}
