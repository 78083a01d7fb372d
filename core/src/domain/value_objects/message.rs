//! Message content held by a driver between composition and sending

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of SMS being sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// One-time password to a single phone
    Otp,
    /// Provider-side template filled with variables
    Pattern,
    /// Free text to one or many phones
    Text,
}

impl MessageType {
    pub const ALL: [MessageType; 3] = [MessageType::Otp, MessageType::Pattern, MessageType::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Otp => "otp",
            MessageType::Pattern => "pattern",
            MessageType::Text => "text",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "otp" => Some(MessageType::Otp),
            "pattern" => Some(MessageType::Pattern),
            "text" => Some(MessageType::Text),
            _ => None,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One or many phone numbers, always stored as a list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Recipients {
    fn from(phone: &str) -> Self {
        Self(vec![phone.to_string()])
    }
}

impl From<String> for Recipients {
    fn from(phone: String) -> Self {
        Self(vec![phone])
    }
}

impl From<&String> for Recipients {
    fn from(phone: &String) -> Self {
        Self(vec![phone.clone()])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(phones: Vec<String>) -> Self {
        Self(phones)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(phones: Vec<&str>) -> Self {
        Self(phones.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Recipients {
    fn from(phones: &[String]) -> Self {
        Self(phones.to_vec())
    }
}

impl From<&[&str]> for Recipients {
    fn from(phones: &[&str]) -> Self {
        Self(phones.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(phones: [&str; N]) -> Self {
        Self(phones.iter().map(|p| p.to_string()).collect())
    }
}

/// Variables filling a pattern template
///
/// Either positional values or named values in insertion order. An empty set
/// counts as positional, so providers requiring names reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternVariables {
    List(Vec<String>),
    Map(IndexMap<String, String>),
}

impl Default for PatternVariables {
    fn default() -> Self {
        PatternVariables::List(Vec::new())
    }
}

impl PatternVariables {
    /// True when the variables carry names
    ///
    /// A map keyed `"0"`, `"1"`, ... in order is positional.
    pub fn is_key_value(&self) -> bool {
        match self {
            PatternVariables::List(_) => false,
            PatternVariables::Map(map) => {
                !map.is_empty()
                    && !map
                        .keys()
                        .enumerate()
                        .all(|(index, key)| *key == index.to_string())
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PatternVariables::List(values) => values.len(),
            PatternVariables::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in order, names discarded
    pub fn values(&self) -> Vec<&str> {
        match self {
            PatternVariables::List(values) => values.iter().map(String::as_str).collect(),
            PatternVariables::Map(map) => map.values().map(String::as_str).collect(),
        }
    }

    /// Named pairs in insertion order; positional values are keyed by index
    pub fn entries(&self) -> Vec<(String, &str)> {
        match self {
            PatternVariables::List(values) => values
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value.as_str()))
                .collect(),
            PatternVariables::Map(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), value.as_str()))
                .collect(),
        }
    }
}

impl From<Vec<String>> for PatternVariables {
    fn from(values: Vec<String>) -> Self {
        PatternVariables::List(values)
    }
}

impl From<Vec<&str>> for PatternVariables {
    fn from(values: Vec<&str>) -> Self {
        PatternVariables::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PatternVariables {
    fn from(values: [&str; N]) -> Self {
        PatternVariables::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<IndexMap<String, String>> for PatternVariables {
    fn from(map: IndexMap<String, String>) -> Self {
        PatternVariables::Map(map)
    }
}

impl From<Vec<(&str, &str)>> for PatternVariables {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        PatternVariables::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PatternVariables {
    fn from(pairs: [(&str, &str); N]) -> Self {
        PatternVariables::Map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Composed SMS content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Otp {
        phone: String,
        message: String,
    },
    Pattern {
        phones: Vec<String>,
        code: String,
        variables: PatternVariables,
    },
    Text {
        phones: Vec<String>,
        message: String,
    },
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::Otp { .. } => MessageType::Otp,
            Message::Pattern { .. } => MessageType::Pattern,
            Message::Text { .. } => MessageType::Text,
        }
    }

    /// Recipients as a list, whatever the message kind
    pub fn recipients(&self) -> Vec<String> {
        match self {
            Message::Otp { phone, .. } => vec![phone.clone()],
            Message::Pattern { phones, .. } | Message::Text { phones, .. } => phones.clone(),
        }
    }
}
