use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::errors::PredictError;

/// Model families the service exposes. The wire value is `as_str()`; nothing
/// else is ever sent as a `model_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKey {
    Decade,
    Century,
}

impl ModelKey {
    pub const ALL: [ModelKey; 2] = [ModelKey::Decade, ModelKey::Century];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKey::Decade => "decade",
            ModelKey::Century => "century",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKey::Decade => "Decade",
            ModelKey::Century => "Century",
        }
    }

    pub fn parse(value: &str) -> Option<ModelKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }

    /// Threshold choices for the binary endpoint: decades 1610..=2010, or the
    /// three century boundaries the service was trained on.
    pub fn threshold_options(&self) -> Vec<String> {
        match self {
            ModelKey::Decade => (0..41).map(|i| (1610 + i * 10).to_string()).collect(),
            ModelKey::Century => [18, 19, 20].iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One time-period prediction. After sanitization the label carries no
/// unescaped HTML-significant characters and the probability sits in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionItem {
    pub label: String,
    pub probability: f64,
}

/// Result of the base endpoint. Server order is preserved; the client never
/// re-sorts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatPrediction {
    pub top_k_predictions: Vec<PredictionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryGroup {
    pub total_probability: f64,
    pub items: Vec<PredictionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryTopK {
    pub older: BinaryGroup,
    pub equal_or_younger: BinaryGroup,
}

/// Result of the binary endpoint. `prediction` is server text and goes
/// through the same sanitization as item labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryPrediction {
    pub prediction: String,
    pub top_k: BinaryTopK,
}

/// A picked file, read fully into memory at selection time. The content type
/// comes from the extension; the service only accepts plain text.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub contents: Vec<u8>,
}

impl UploadFile {
    pub fn from_path(path: &Path) -> Result<Self, PredictError> {
        let contents = fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.txt")
            .to_string();

        Ok(Self { name, content_type: content_type_for(path).to_string(), contents })
    }

    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
