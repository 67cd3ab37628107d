use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::api::ApiError;

pub const DEFAULT_PAGE_INDEX: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// User identifier as the backend sends it: usually an integer, occasionally a string.
/// Any other JSON value (a float, an integer beyond `i64`, a bool) is kept verbatim
/// in [`UserId::Other`] and forwarded unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl UserId {
    /// Integers parse as [`UserId::Number`], anything else is kept as text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number)
    }

    /// Zero, the empty string, `false` and `null` do not identify a user.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(value) => *value != 0,
            Self::Text(value) => !value.is_empty(),
            Self::Other(value) => value_is_truthy(value),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Text(value) => formatter.write_str(value),
            Self::Other(value) => write!(formatter, "{value}"),
        }
    }
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|float| float != 0.0 && !float.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A user payload. Only `id` is understood here; every other field is carried
/// through untouched, in both directions, and the server owns the schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a passthrough field. An `"id"` key is routed to [`User::id`] so the
    /// payload never carries two ids; a `null` id clears it.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "id" {
            self.id = match value {
                Value::Null => None,
                value => serde_json::from_value(value).ok(),
            };
        } else {
            self.fields.insert(key, value);
        }
        self
    }

    /// Builds a user from an arbitrary JSON object.
    ///
    /// # Errors
    /// Returns an error if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id.as_ref().is_some_and(UserId::is_truthy)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Listing query. `pageindex` and `pagesize` are always sent; the filters only
/// when set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    #[serde(rename = "pageindex")]
    pub page_index: u32,
    #[serde(rename = "pagesize")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "sortby", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_flag"
    )]
    pub descending: Option<bool>,
}

impl PageRequest {
    #[must_use]
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.sort_by = Some(column.into());
        self.descending = Some(descending);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
            sort_by: None,
            descending: None,
        }
    }
}

// The backend reads the flag as an integer.
fn serialize_flag<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::{PageRequest, User, UserId};
    use serde_json::json;

    #[test]
    fn user_id_truthiness() {
        assert!(UserId::Number(5).is_truthy());
        assert!(UserId::Number(-1).is_truthy());
        assert!(!UserId::Number(0).is_truthy());
        assert!(UserId::from("abc").is_truthy());
        assert!(!UserId::from("").is_truthy());
    }

    #[test]
    fn user_id_parse_prefers_integers() {
        assert_eq!(UserId::parse("42"), UserId::Number(42));
        assert_eq!(UserId::parse(" 7 "), UserId::Number(7));
        assert_eq!(
            UserId::parse("01J9ZK"),
            UserId::Text("01J9ZK".to_string())
        );
        assert_eq!(UserId::parse("42").to_string(), "42");
    }

    #[test]
    fn user_keeps_unknown_fields() {
        let raw = json!({
            "id": 3,
            "name": "alice",
            "age": 31,
            "birthdate": "1993-04-01",
            "status_code": null
        });
        let user = User::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, Some(UserId::Number(3)));
        assert_eq!(user.field("name"), Some(&json!("alice")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn user_without_id_serializes_without_id() {
        let user = User::new().with_field("name", "a");
        assert!(!user.has_id());
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"name": "a"}));
    }

    #[test]
    fn null_or_zero_id_is_missing() {
        let user = User::from_value(json!({"id": null, "name": "a"})).unwrap();
        assert_eq!(user.id, None);
        assert!(!user.has_id());

        let user = User::from_value(json!({"id": 0})).unwrap();
        assert!(!user.has_id());

        let user = User::from_value(json!({"id": ""})).unwrap();
        assert!(!user.has_id());
    }

    #[test]
    fn with_field_routes_id() {
        let user = User::new().with_field("id", 9).with_field("name", "bob");
        assert_eq!(user.id, Some(UserId::Number(9)));
        assert!(user.field("id").is_none());
        assert!(user.has_id());
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(User::from_value(json!([1, 2])).is_err());
        assert!(User::from_value(json!("alice")).is_err());
    }

    #[test]
    fn unusual_ids_are_forwarded_verbatim() {
        for raw in [
            json!({"id": 5.0, "name": "a"}),
            json!({"id": u64::MAX}),
            json!({"id": true}),
        ] {
            let user = User::from_value(raw.clone()).unwrap();
            assert!(matches!(user.id, Some(UserId::Other(_))));
            assert!(user.has_id());
            assert_eq!(serde_json::to_value(&user).unwrap(), raw);
        }

        for raw in [json!({"id": 0.0}), json!({"id": false})] {
            let user = User::from_value(raw).unwrap();
            assert!(!user.has_id());
        }
    }

    #[test]
    fn with_field_null_id_clears() {
        let user = User::new().with_id(3_i64).with_field("id", serde_json::Value::Null);
        assert_eq!(user.id, None);
    }

    #[test]
    fn page_request_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_size, 10);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"pageindex": 0, "pagesize": 10})
        );
    }

    #[test]
    fn page_request_filters_serialize_when_set() {
        let page = PageRequest::new(2, 25)
            .with_status("active")
            .sorted_by("name", true);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "pageindex": 2,
                "pagesize": 25,
                "status": "active",
                "sortby": "name",
                "descending": 1
            })
        );
    }
}
