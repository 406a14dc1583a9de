use serde::{Deserialize, Serialize};

/// Response urgency attached to a prediction result.
///
/// The service is expected to send one of four upper-case labels; anything
/// else is kept verbatim so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unrecognized(String),
}

/// Visual emphasis for the priority banner. Four outcomes only: unrecognized
/// priorities share the low style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityStyle {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::Unrecognized(raw) => raw,
        }
    }

    pub fn style(&self) -> PriorityStyle {
        match self {
            Priority::Critical => PriorityStyle::Critical,
            Priority::High => PriorityStyle::High,
            Priority::Medium => PriorityStyle::Medium,
            Priority::Low | Priority::Unrecognized(_) => PriorityStyle::Low,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Priority::Critical => "🔴",
            Priority::High => "🟠",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
            Priority::Unrecognized(_) => "⚪",
        }
    }

    /// Banner text, e.g. `🔴 CRITICAL PRIORITY`.
    pub fn banner_label(&self) -> String {
        format!("{} {} PRIORITY", self.emoji(), self.as_str())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CRITICAL" => Priority::Critical,
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::Unrecognized(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// A resource figure the service reports either as a plain count or as a
/// descriptive range such as `"500+ emergency responders"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceCount {
    Count(i64),
    Described(String),
}

impl std::fmt::Display for ResourceCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCount::Count(count) => write!(f, "{count}"),
            ResourceCount::Described(text) => f.write_str(text),
        }
    }
}
