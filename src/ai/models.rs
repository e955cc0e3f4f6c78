//! Learning content shared by the server handlers and the client.
use std::fmt;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Any JSON scalar. Model output is not held to a schema, so module
/// fields accept whichever scalar the model produced.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// A number or a numeric string such as `"1"`
fn module_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n),
        Scalar::Float(n) if n.fract() == 0.0 => Ok(n as i64),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid module id: {:?}", s))),
        other => Err(D::Error::custom(format!("invalid module id: {}", other))),
    }
}

/// Any scalar as text, null as empty
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Any scalar as text
fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| s.to_string()))
}

/// One curriculum unit with a recommended video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(deserialize_with = "module_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "text")]
    pub video_url: String,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllabus {
    #[serde(default)]
    pub topic: String,
    // Shared so a selected module is referenced rather than copied
    #[serde(default)]
    pub modules: Vec<Arc<Module>>,
    #[serde(default)]
    pub generated_at: String,
}

impl Syllabus {
    pub fn module(&self, id: i64) -> Option<&Arc<Module>> {
        self.modules.iter().find(|m| m.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

/// A `m:ss` mention in a tutor reply, converted to seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampReference {
    pub text: String,
    pub seconds: u32,
}
