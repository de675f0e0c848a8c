//! User settings bundle returned by the user configuration endpoint.

use serde_json::Value;

/// The `result` object of a user configuration response.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettingsBundle(Value);

impl UserSettingsBundle {
    /// Unwrap the response envelope.
    ///
    /// Errors on a `"success": false` envelope (carrying the server message)
    /// or when `result` is missing or not an object.
    pub fn from_envelope(mut envelope: Value) -> Result<Self, String> {
        if !envelope.is_object() {
            return Err("response is not a JSON object".to_string());
        }
        if envelope.get("success").and_then(Value::as_bool) == Some(false) {
            let message = envelope
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("no error message");
            return Err(format!("server reported failure: {message}"));
        }
        match envelope.get_mut("result").map(Value::take) {
            Some(result @ Value::Object(_)) => Ok(Self(result)),
            Some(_) => Err("'result' is not an object".to_string()),
            None => Err("response has no 'result' field".to_string()),
        }
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the bundle carries a `clock` section.
    pub fn has_clock(&self) -> bool {
        self.0.get("clock").is_some_and(|c| !c.is_null())
    }

    /// `clock.provider`, when it is a string.
    pub fn clock_provider_name(&self) -> Option<&str> {
        self.0.pointer("/clock/provider").and_then(Value::as_str)
    }
}
