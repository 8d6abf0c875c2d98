use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Console message type that produced the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    Log,
    Dir,
    Table,
    Trace,
    Clear,
    StartGroup,
    StartGroupCollapsed,
    EndGroup,
    Assert,
    Profile,
    ProfileEnd,
    Result,
    Command,
    Other(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Log => "log",
            MessageType::Dir => "dir",
            MessageType::Table => "table",
            MessageType::Trace => "trace",
            MessageType::Clear => "clear",
            MessageType::StartGroup => "startGroup",
            MessageType::StartGroupCollapsed => "startGroupCollapsed",
            MessageType::EndGroup => "endGroup",
            MessageType::Assert => "assert",
            MessageType::Profile => "profile",
            MessageType::ProfileEnd => "profileEnd",
            MessageType::Result => "result",
            MessageType::Command => "command",
            MessageType::Other(s) => s,
        }
    }
}

impl From<&str> for MessageType {
    fn from(s: &str) -> Self {
        match s {
            "log" => MessageType::Log,
            "dir" => MessageType::Dir,
            "table" => MessageType::Table,
            "trace" => MessageType::Trace,
            "clear" => MessageType::Clear,
            "startGroup" => MessageType::StartGroup,
            "startGroupCollapsed" => MessageType::StartGroupCollapsed,
            "endGroup" => MessageType::EndGroup,
            "assert" => MessageType::Assert,
            "profile" => MessageType::Profile,
            "profileEnd" => MessageType::ProfileEnd,
            "result" => MessageType::Result,
            "command" => MessageType::Command,
            other => MessageType::Other(other.to_string()),
        }
    }
}

impl From<String> for MessageType {
    fn from(s: String) -> Self {
        MessageType::from(s.as_str())
    }
}

impl From<MessageType> for String {
    fn from(t: MessageType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MessageType::from(s))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console helper command (`inspect()`, `clear()`, ...) that produced the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HelperType {
    Inspect,
    ClearOutput,
    Help,
    CopyValueToClipboard,
    Other(String),
}

impl HelperType {
    pub fn as_str(&self) -> &str {
        match self {
            HelperType::Inspect => "inspectObject",
            HelperType::ClearOutput => "clearOutput",
            HelperType::Help => "help",
            HelperType::CopyValueToClipboard => "copyValueToClipboard",
            HelperType::Other(s) => s,
        }
    }
}

impl From<&str> for HelperType {
    fn from(s: &str) -> Self {
        match s {
            "inspectObject" => HelperType::Inspect,
            "clearOutput" => HelperType::ClearOutput,
            "help" => HelperType::Help,
            "copyValueToClipboard" => HelperType::CopyValueToClipboard,
            other => HelperType::Other(other.to_string()),
        }
    }
}

impl From<String> for HelperType {
    fn from(s: String) -> Self {
        HelperType::from(s.as_str())
    }
}

impl From<HelperType> for String {
    fn from(t: HelperType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for HelperType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HelperType::from(s))
    }
}

impl fmt::Display for HelperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much detail the downstream renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Tiny,
    Short,
    #[default]
    Long,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(RenderMode::Tiny),
            "short" => Ok(RenderMode::Short),
            "long" => Ok(RenderMode::Long),
            other => Err(format!("unknown render mode '{other}' (tiny, short, long)")),
        }
    }
}

/// Why a value is being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderIntent {
    pub message_type: Option<MessageType>,
    pub helper_type: Option<HelperType>,
    pub use_quotes: bool,
    pub escape_whitespace: bool,
    pub mode: RenderMode,
}

impl RenderIntent {
    pub fn with_message_type(mut self, message_type: impl Into<MessageType>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    pub fn with_helper_type(mut self, helper_type: impl Into<HelperType>) -> Self {
        self.helper_type = Some(helper_type.into());
        self
    }

    pub fn with_quotes(mut self, use_quotes: bool) -> Self {
        self.use_quotes = use_quotes;
        self
    }

    pub fn with_escape_whitespace(mut self, escape_whitespace: bool) -> Self {
        self.escape_whitespace = escape_whitespace;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}
