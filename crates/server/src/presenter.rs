//! JSON contract of `GET /movie/awards-result`.
//!
//! ```json
//! { "min": [ { "producers": "Joel Silver", "interval": 1,
//!              "previousWin": 1990, "followingWin": 1991 } ],
//!   "max": [ ... ] }
//! ```
//!
//! Years render as integers by default, or as 4-digit strings with
//! [`YearFormat::Text`]. Both lists are always present, even when empty.

use clap::ValueEnum;
use data_loader::Year;
use pipeline::{AwardsSummary, IntervalResult};
use serde::{Deserialize, Serialize};

/// How years appear in the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFormat {
    /// `1990`
    #[default]
    Number,
    /// `"1990"`
    Text,
}

impl YearFormat {
    pub fn render(self, year: Year) -> YearValue {
        match self {
            YearFormat::Number => YearValue::Number(year),
            YearFormat::Text => YearValue::Text(format!("{:04}", year)),
        }
    }
}

/// A rendered year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(Year),
    Text(String),
}

#[cfg(test)]
impl YearValue {
    fn year(&self) -> Option<Year> {
        match self {
            YearValue::Number(year) => Some(*year),
            YearValue::Text(text) => text.parse().ok(),
        }
    }
}

/// One interval entry of the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardIntervalDto {
    pub producers: String,
    pub interval: u16,
    pub previous_win: YearValue,
    pub following_win: YearValue,
}

impl AwardIntervalDto {
    fn from_result(result: &IntervalResult, format: YearFormat) -> Self {
        Self {
            producers: result.producer.clone(),
            interval: result.interval,
            previous_win: format.render(result.previous_win),
            following_win: format.render(result.following_win),
        }
    }
}

/// Response body of the awards endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardsResultResponse {
    pub min: Vec<AwardIntervalDto>,
    pub max: Vec<AwardIntervalDto>,
}

impl AwardsResultResponse {
    pub fn from_summary(summary: &AwardsSummary, format: YearFormat) -> Self {
        let convert = |results: &[IntervalResult]| -> Vec<AwardIntervalDto> {
            results
                .iter()
                .map(|result| AwardIntervalDto::from_result(result, format))
                .collect()
        };

        Self {
            min: convert(&summary.min),
            max: convert(&summary.max),
        }
    }
}
