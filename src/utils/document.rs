use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use super::error::AppError;

/// Parses a 24-character hex id taken from a path parameter.
pub fn parse_object_id(id: &str, entity: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidRequest(format!("Invalid {} ID", entity)))
}

pub fn id_to_hex(id: Option<ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}

/// Converts pass-through fields to relaxed extended JSON for responses.
pub fn extra_to_json(extra: Document) -> Map<String, Value> {
    match Bson::Document(extra).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Drops fields the client must not control from a request body:
/// the id and any timestamps the server stamps itself.
pub fn sanitize_extra(mut extra: Document, managed: &[&str]) -> Document {
    extra.remove("_id");
    for key in managed {
        extra.remove(*key);
    }
    extra
}

/// Case-insensitive whole-value match, e.g. for emails.
pub fn exact_match_regex(text: &str) -> Document {
    doc! {
        "$regex": format!("^{}$", regex::escape(text)),
        "$options": "i",
    }
}

/// Case-insensitive substring match.
pub fn contains_regex(text: &str) -> Document {
    doc! {
        "$regex": regex::escape(text),
        "$options": "i",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let hex = "65f1a2b3c4d5e6f708192a3b";
        assert_eq!(parse_object_id(hex, "session").unwrap().to_hex(), hex);

        match parse_object_id("not-an-id", "session") {
            Err(AppError::InvalidRequest(msg)) => assert_eq!(msg, "Invalid session ID"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_exact_match_regex_escapes_metacharacters() {
        let filter = exact_match_regex("a.b+c@x.com");
        assert_eq!(filter.get_str("$regex").unwrap(), r"^a\.b\+c@x\.com$");
        assert_eq!(filter.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_contains_regex_is_unanchored() {
        let filter = contains_regex("ann");
        assert_eq!(filter.get_str("$regex").unwrap(), "ann");
    }

    #[test]
    fn test_sanitize_extra_drops_managed_fields() {
        let extra = doc! { "_id": "client-chosen", "updatedAt": "x", "title": "Algebra" };
        let cleaned = sanitize_extra(extra, &["updatedAt"]);
        assert!(!cleaned.contains_key("_id"));
        assert!(!cleaned.contains_key("updatedAt"));
        assert_eq!(cleaned.get_str("title").unwrap(), "Algebra");
    }

    #[test]
    fn test_extra_to_json_renders_plain_values() {
        let oid = ObjectId::new();
        let json = extra_to_json(doc! { "fee": 20, "ref": oid });
        assert_eq!(json["fee"], 20);
        assert_eq!(json["ref"]["$oid"], oid.to_hex());
    }
}
