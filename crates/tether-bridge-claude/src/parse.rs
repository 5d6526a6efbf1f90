use std::fmt;

// ── Hook stdin parsing ──

/// Lifecycle event that triggered a hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    SessionStart,
    UserPromptSubmit,
    Other(String),
}

impl HookEvent {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SessionStart => "SessionStart",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for HookEvent {
    fn from(name: &str) -> Self {
        match name {
            "SessionStart" => Self::SessionStart,
            "UserPromptSubmit" => Self::UserPromptSubmit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the hook payload this bridge cares about.
///
/// Every field is optional; a missing key, a non-string value, and a payload
/// that is not a JSON object all read as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInput {
    pub event: HookEvent,
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
}

impl HookInput {
    pub fn from_value(raw: &serde_json::Value) -> Self {
        Self {
            event: HookEvent::from(get_str(raw, "hook_event_name").unwrap_or_default()),
            session_id: get_str(raw, "session_id").map(str::to_string),
            transcript_path: get_str(raw, "transcript_path").map(str::to_string),
        }
    }

    /// Session id, treating an empty string as absent.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parse the stdin JSON from a Claude Code hook.
pub(crate) fn parse_hook_stdin(stdin: &str) -> serde_json::Result<serde_json::Value> {
    serde_json::from_str(stdin)
}

/// Get a string field from JSON, trying snake_case first then camelCase.
/// Claude Code sends snake_case keys, but some wrappers re-emit the payload
/// in camelCase (e.g. `hookEventName`).
pub(crate) fn get_str<'a>(v: &'a serde_json::Value, snake_key: &str) -> Option<&'a str> {
    if let Some(s) = v.get(snake_key).and_then(|x| x.as_str()) {
        return Some(s);
    }
    let camel = snake_to_camel(snake_key);
    v.get(&camel).and_then(|x| x.as_str())
}

pub(crate) fn snake_to_camel(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snake_to_camel_converts_correctly() {
        assert_eq!(snake_to_camel("hook_event_name"), "hookEventName");
        assert_eq!(snake_to_camel("session_id"), "sessionId");
        assert_eq!(snake_to_camel("transcript_path"), "transcriptPath");
        assert_eq!(snake_to_camel("cwd"), "cwd");
    }

    #[test]
    fn hook_event_from_name() {
        assert_eq!(HookEvent::from("SessionStart"), HookEvent::SessionStart);
        assert_eq!(
            HookEvent::from("UserPromptSubmit"),
            HookEvent::UserPromptSubmit
        );
        assert_eq!(
            HookEvent::from("PreToolUse"),
            HookEvent::Other("PreToolUse".into())
        );
        assert_eq!(HookEvent::from("PreToolUse").to_string(), "PreToolUse");
    }

    #[test]
    fn input_reads_snake_case_fields() {
        let raw = json!({
            "hook_event_name": "UserPromptSubmit",
            "session_id": "abc123",
            "transcript_path": "/tmp/t.jsonl",
            "cwd": "/work"
        });
        let input = HookInput::from_value(&raw);
        assert_eq!(input.event, HookEvent::UserPromptSubmit);
        assert_eq!(input.session_id(), Some("abc123"));
        assert_eq!(input.transcript_path.as_deref(), Some("/tmp/t.jsonl"));
    }

    #[test]
    fn input_falls_back_to_camel_case() {
        let raw = json!({
            "hookEventName": "SessionStart",
            "sessionId": "s-camel",
            "transcriptPath": "/tmp/c.jsonl"
        });
        let input = HookInput::from_value(&raw);
        assert_eq!(input.event, HookEvent::SessionStart);
        assert_eq!(input.session_id(), Some("s-camel"));
        assert_eq!(input.transcript_path.as_deref(), Some("/tmp/c.jsonl"));
    }

    #[test]
    fn input_non_string_and_empty_fields_are_absent() {
        let raw = json!({"hook_event_name": 7, "session_id": "", "transcript_path": null});
        let input = HookInput::from_value(&raw);
        assert_eq!(input.event, HookEvent::Other(String::new()));
        assert_eq!(input.session_id(), None);
        assert_eq!(input.transcript_path, None);
    }

    #[test]
    fn input_from_non_object_payload() {
        let input = HookInput::from_value(&json!(["SessionStart"]));
        assert_eq!(input.session_id(), None);
        assert_eq!(input.event, HookEvent::Other(String::new()));
    }
}
