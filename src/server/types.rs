use serde::Serialize;
use serde_json::Value;

/// Inbound `/askmedical` body. Fields are kept as raw JSON so presence is
/// judged by truthiness rather than by type.
#[derive(Debug, Default)]
pub struct AskMedicalRequest {
    pub question: Option<Value>,
    pub context: Option<Value>,
}

impl From<Value> for AskMedicalRequest {
    /// Only a JSON object carries named fields; any other body has none.
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                question: fields.remove("question"),
                context: fields.remove("context"),
            },
            _ => Self::default(),
        }
    }
}

/// A validated question/context pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub question: String,
    pub context: String,
}

impl AskMedicalRequest {
    /// Returns the query when both fields are present and truthy.
    pub fn into_query(self) -> Option<Query> {
        let question = self.question.filter(is_truthy)?;
        let context = self.context.filter(is_truthy)?;

        Some(Query {
            question: value_text(question),
            context: value_text(context),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AskMedicalResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value the way a JavaScript template literal would.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(&n),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}
