//! Enums behind the language switch, the target-language picker and the model picker.

use crate::{ErrorLocation, ModelError};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language a document is translated into.
///
/// Serialized as the ISO 639-1 code the translation API expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "th")]
    Thai,
}

impl TargetLanguage {
    /// Every language offered by the picker, in display order.
    pub const ALL: [TargetLanguage; 9] = [
        TargetLanguage::Vietnamese,
        TargetLanguage::English,
        TargetLanguage::Chinese,
        TargetLanguage::Japanese,
        TargetLanguage::Korean,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Spanish,
        TargetLanguage::Thai,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Vietnamese => "vi",
            TargetLanguage::English => "en",
            TargetLanguage::Chinese => "zh",
            TargetLanguage::Japanese => "ja",
            TargetLanguage::Korean => "ko",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Spanish => "es",
            TargetLanguage::Thai => "th",
        }
    }
}

impl Display for TargetLanguage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim().to_ascii_lowercase();
        TargetLanguage::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| ModelError::UnknownCode {
                code: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Language the page itself is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiLanguage {
    #[default]
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "en")]
    English,
}

impl UiLanguage {
    pub fn toggled(self) -> Self {
        match self {
            UiLanguage::Vietnamese => UiLanguage::English,
            UiLanguage::English => UiLanguage::Vietnamese,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UiLanguage::Vietnamese => "vi",
            UiLanguage::English => "en",
        }
    }
}

/// Model tier shown in the hero picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    #[default]
    Standard,
    Advanced,
}

impl FromStr for ModelTier {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ModelTier::Standard),
            "advanced" => Ok(ModelTier::Advanced),
            _ => Err(ModelError::UnknownCode {
                code: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
