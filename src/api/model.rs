//! Wire types for the adventure catalog API
//!
//! Field names follow the remote collection's JSON contract, which is in
//! Portuguese (json-server backed). The structs keep English names and
//! map to the wire names via serde renames.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder full description assigned to records created from the form.
pub const DEFAULT_FULL_DESCRIPTION: &str = "Conteúdo detalhado padrão.";

/// Deserialize the server-assigned identifier as a string.
///
/// json-server assigns numeric ids to seeded records and string ids to
/// records created over POST, so both must be accepted.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "unsupported id representation: {other}"
        ))),
    }
}

/// One adventure catalog record as stored remotely.
///
/// Every field other than the id is treated as present-or-absent with no
/// client-side validation; missing fields default to empty values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Adventure {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "localizacao", default)]
    pub location: String,
    #[serde(rename = "dificuldade", default)]
    pub difficulty: String,
    #[serde(rename = "descricao_breve", default)]
    pub summary: String,
    #[serde(rename = "conteudo_completo", default)]
    pub full_description: String,
    #[serde(rename = "imagem_principal", default)]
    pub main_image: String,
    #[serde(rename = "imagem_card", default)]
    pub card_image: String,
    /// Attraction entries have no fixed shape on the wire.
    #[serde(rename = "atracoes", default)]
    pub attractions: Vec<Value>,
    #[serde(rename = "destaque", default)]
    pub featured: bool,
}

/// A record to be created. Carries no id: the server assigns one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAdventure {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "dificuldade")]
    pub difficulty: String,
    #[serde(rename = "descricao_breve")]
    pub summary: String,
    #[serde(rename = "conteudo_completo")]
    pub full_description: String,
    #[serde(rename = "imagem_principal")]
    pub main_image: String,
    #[serde(rename = "imagem_card")]
    pub card_image: String,
    #[serde(rename = "atracoes")]
    pub attractions: Vec<Value>,
    #[serde(rename = "destaque")]
    pub featured: bool,
}

impl NewAdventure {
    /// Build a record from the creation form fields.
    ///
    /// Client-assigned defaults: fixed placeholder full description, the
    /// card image doubles as the main image, no attractions, not featured.
    pub fn from_form(
        name: &str,
        location: &str,
        difficulty: &str,
        summary: &str,
        card_image: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            difficulty: difficulty.to_string(),
            summary: summary.to_string(),
            full_description: DEFAULT_FULL_DESCRIPTION.to_string(),
            main_image: card_image.to_string(),
            card_image: card_image.to_string(),
            attractions: Vec::new(),
            featured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids_both_parse() {
        let numeric: Adventure =
            serde_json::from_value(json!({"id": 7, "nome": "Chapada"})).unwrap();
        assert_eq!(numeric.id, "7");

        let string: Adventure =
            serde_json::from_value(json!({"id": "a1b2", "nome": "Chapada"})).unwrap();
        assert_eq!(string.id, "a1b2");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record: Adventure = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(record.name, "");
        assert!(record.attractions.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn form_record_carries_creation_defaults() {
        let record = NewAdventure::from_form(
            "Trilha do Ouro",
            "Serra da Bocaina",
            "Moderada",
            "Travessia histórica",
            "https://img/card.jpg",
        );
        assert_eq!(record.full_description, DEFAULT_FULL_DESCRIPTION);
        assert_eq!(record.main_image, record.card_image);
        assert!(record.attractions.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn new_record_serializes_wire_names_without_id() {
        let record = NewAdventure::from_form("a", "b", "c", "d", "e");
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("nome"));
        assert!(object.contains_key("imagem_principal"));
        assert!(object.contains_key("destaque"));
        assert!(!object.contains_key("id"));
    }
}
