use std::path::Path;

use tether_transcript::TAIL_LINES;
use tracing::{debug, info, warn};

use crate::parse::*;
use crate::render::{self, HookOutput};

// ── Hook Result ──

/// Result from a hook dispatch.
///
/// `stdout` is the JSON line to print to stdout (consumed by Claude Code).
/// `None` means the hook has nothing to say and exits 0 silently.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HookResult {
    pub stdout: Option<String>,
}

impl HookResult {
    /// Construct a result with stdout (normal output, exit 0).
    pub fn output(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
        }
    }

    /// Construct an empty result (no output, exit 0).
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("malformed hook input: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("failed to serialize hook output: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Hook dispatch ──

/// Main hook entrypoint: parse stdin, dispatch by hook_event_name.
///
/// Empty or whitespace-only input is a no-op. Input that is not valid JSON
/// is the only error a well-behaved host can trigger.
pub fn hook_entrypoint_from_stdin(stdin: &str) -> Result<HookResult, HookError> {
    if stdin.trim().is_empty() {
        return Ok(HookResult::empty());
    }
    let raw = parse_hook_stdin(stdin).map_err(HookError::MalformedInput)?;
    dispatch(&HookInput::from_value(&raw))
}

/// Dispatch an already-parsed payload.
///
/// Injection strategy:
///   SessionStart     → always inject the session reminder
///   UserPromptSubmit → inject only when the id has scrolled out of the
///                      transcript tail
///   anything else    → no output
pub fn dispatch(input: &HookInput) -> Result<HookResult, HookError> {
    let Some(session_id) = input.session_id() else {
        debug!(event = %input.event, "no session id in payload");
        return Ok(HookResult::empty());
    };

    let inject = match &input.event {
        HookEvent::SessionStart => true,
        HookEvent::UserPromptSubmit => {
            session_id_missing(input.transcript_path.as_deref(), session_id)
        }
        HookEvent::Other(_) => false,
    };
    info!(event = %input.event, session_id, inject, "dispatched hook");

    if !inject {
        return Ok(HookResult::empty());
    }
    let output =
        HookOutput::additional_context(&input.event, render::session_reminder(session_id));
    let line = output.to_line().map_err(HookError::Serialize)?;
    Ok(HookResult::output(line))
}

/// Whether `session_id` looks forgotten by the host's active context.
/// Every uncertain case answers `true`.
fn session_id_missing(transcript_path: Option<&str>, session_id: &str) -> bool {
    let transcript = match transcript_path.filter(|p| !p.is_empty()) {
        Some(p) => Path::new(p),
        None => return true,
    };
    if !transcript.exists() {
        debug!(path = %transcript.display(), "transcript not found");
        return true;
    }
    match tether_transcript::tail_contains(transcript, session_id, TAIL_LINES) {
        Ok(found) => !found,
        Err(e) => {
            warn!("{e}; re-injecting session id");
            true
        }
    }
}
