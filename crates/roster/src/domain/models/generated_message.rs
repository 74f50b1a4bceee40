// crates/roster/src/domain/models/generated_message.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Paramètres de génération, ordonnés pour une sortie JSON déterministe
pub type GenerationParameters = BTreeMap<String, Value>;

/// Objet d'explicabilité obligatoire.
/// `rationale` contient exactement deux phrases (garanti par `ExplanationBuilder`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub model: String,
    pub method: String,
    pub parameters: GenerationParameters,
    pub rationale: String,
}

/// Forme JSON : {"message": ..., "explanation": {...}}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMessage {
    #[serde(rename = "message")]
    pub text: String,
    pub explanation: Explanation,
}
