//! Rendering of the context reminder and the hook output envelope.

use serde::Serialize;

use crate::parse::HookEvent;

// ── Session Reminder ──

/// Reminder sentence injected into the conversation for `session_id`.
pub fn session_reminder(session_id: &str) -> String {
    format!(
        "System Note: The current session ID is {session_id}. \
         I must use this ID for session-specific tasks."
    )
}

// ── Hook Output ──

/// Top-level JSON object Claude Code reads from hook stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

impl HookOutput {
    pub fn additional_context(event: &HookEvent, context: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: event.as_str().to_string(),
                additional_context: context,
            },
        }
    }

    /// Single-line JSON, as the host parses stdout as one value.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_embeds_session_id_verbatim() {
        assert_eq!(
            session_reminder("abc123"),
            "System Note: The current session ID is abc123. I must use this ID for session-specific tasks."
        );
    }

    #[test]
    fn output_uses_claude_code_field_names() {
        let out = HookOutput::additional_context(&HookEvent::SessionStart, "ctx".into());
        let line = out.to_line().unwrap();
        assert_eq!(
            line,
            r#"{"hookSpecificOutput":{"hookEventName":"SessionStart","additionalContext":"ctx"}}"#
        );
        assert!(!line.contains('\n'));
    }
}
