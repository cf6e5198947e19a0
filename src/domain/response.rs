use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Decoded success envelope, returned to the caller verbatim.
///
/// The gateway's success bodies are free-form beyond the `success` flag, so no
/// field is stripped or renamed; callers pick out what they need.
pub struct ApiBody {
    fields: Map<String, Value>,
}

impl ApiBody {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Borrow the whole body.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Take ownership of the body.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn body_is_preserved_verbatim() {
        let Value::Object(map) = json!({
            "success": true,
            "data": [{"id": "dev-1", "name": "Work Phone"}],
            "quota": 250,
        }) else {
            unreachable!()
        };

        let body = ApiBody::new(map.clone());
        assert_eq!(body.get("success"), Some(&Value::Bool(true)));
        assert_eq!(body.get("quota"), Some(&json!(250)));
        assert_eq!(body.fields(), &map);
        assert_eq!(body.into_fields(), map);
    }

    #[test]
    fn serializes_transparently() {
        let Value::Object(map) = json!({"success": true, "id": "m-1"}) else {
            unreachable!()
        };
        let body = ApiBody::new(map.clone());
        assert_eq!(serde_json::to_value(&body).unwrap(), Value::Object(map));
    }
}
