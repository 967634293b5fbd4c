use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mouse,
    Keyboard,
    Emotion,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mouse, Category::Keyboard, Category::Emotion];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mouse => "mouse",
            Category::Keyboard => "keyboard",
            Category::Emotion => "emotion",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Mouse => 0,
            Category::Keyboard => 1,
            Category::Emotion => 2,
        }
    }

    pub fn panel_id(self) -> String {
        format!("{}-data", self.as_str())
    }

    pub fn body_id(self) -> String {
        format!("{}-data-body", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mouse" => Ok(Category::Mouse),
            "keyboard" => Ok(Category::Keyboard),
            "emotion" => Ok(Category::Emotion),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(value)) => value.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    data: Option<Vec<Record>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnvelope")]
pub enum DataEnvelope {
    Data(Vec<Record>),
    Error(String),
}

impl From<RawEnvelope> for DataEnvelope {
    fn from(raw: RawEnvelope) -> Self {
        match raw.error {
            Some(message) => DataEnvelope::Error(message),
            None => DataEnvelope::Data(raw.data.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default, deserialize_with = "flexible_bool")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// The stop endpoint reports success as 1/0 rather than a boolean.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.as_str(), "1" | "true"),
        _ => false,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorType {
    All,
    Mouse,
    Keyboard,
}

impl MonitorType {
    pub fn from_flags(mouse: bool, keyboard: bool) -> Self {
        match (mouse, keyboard) {
            (true, false) => MonitorType::Mouse,
            (false, true) => MonitorType::Keyboard,
            _ => MonitorType::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorType::All => "all",
            MonitorType::Mouse => "mouse",
            MonitorType::Keyboard => "keyboard",
        }
    }
}

pub fn start_body(monitor_type: MonitorType, extra: &Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert("type".into(), Value::String(monitor_type.as_str().into()));
    for (key, value) in extra {
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    A,
    B,
    C,
    D,
}

impl Mood {
    pub fn letter(self) -> &'static str {
        match self {
            Mood::A => "A",
            Mood::B => "B",
            Mood::C => "C",
            Mood::D => "D",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Mood::A),
            "B" => Ok(Mood::B),
            "C" => Ok(Mood::C),
            "D" => Ok(Mood::D),
            other => Err(format!("unknown mood '{other}', expected A, B, C or D")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmotionRequest {
    pub mood_type: Mood,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    #[serde(default)]
    pub registered_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentsResponse {
    #[serde(default)]
    pub students: Vec<StudentSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MonitorState {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub listening: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub mouse: MonitorState,
    #[serde(default)]
    pub keyboard: MonitorState,
    #[serde(default)]
    pub emotion: MonitorState,
}
