//! Card data export.
//!
//! Exports the editor's card record as pretty JSON (for integration) or
//! as compact bincode (for archiving). Image and print formats are not
//! produced here.

use serde::{Deserialize, Serialize};

use super::input::CardInput;

/// Export target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Binary,
}

impl ExportFormat {
    /// Suggested download file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "card.json",
            ExportFormat::Binary => "card.bin",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Binary => "application/octet-stream",
        }
    }
}

/// Export failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary export failed: {0}")]
    Binary(#[from] bincode::Error),
}

/// Serialize a card record in the chosen format.
pub fn export_card(card: &CardInput, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(card)?,
        ExportFormat::Binary => bincode::serialize(card)?,
    };
    Ok(bytes)
}

/// Read back a binary export.
pub fn import_binary(bytes: &[u8]) -> Result<CardInput, ExportError> {
    Ok(bincode::deserialize(bytes)?)
}
