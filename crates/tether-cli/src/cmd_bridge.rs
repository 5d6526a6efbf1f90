use std::io::{IsTerminal, Read, Write};

use anyhow::Context;
use tracing::info;

/// Tracing target of the per-invocation entry line; always enabled.
pub const ENTRY_TARGET: &str = "tether::entry";

/// `tether hook claude` — read stdin, dispatch hook
///
/// Stdout carries nothing but the hook's JSON line; every diagnostic goes
/// through `tracing` to stderr. Errors returned here end the process with
/// exit code 1.
pub fn hook_claude() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|e| format!("<unavailable: {e}>"));

    let stdin = std::io::stdin();
    let mut stdin_buf = String::new();
    // A terminal on stdin means a manual run without a payload
    if !stdin.is_terminal() {
        stdin
            .lock()
            .read_to_string(&mut stdin_buf)
            .context("failed to read hook input from stdin")?;
    }

    let input_detected = !stdin_buf.trim().is_empty();
    info!(target: ENTRY_TARGET, cwd = %cwd, input_detected, "hook invoked");
    if !input_detected {
        return Ok(());
    }

    let result = tether_bridge_claude::hook_entrypoint_from_stdin(&stdin_buf)?;
    if let Some(output) = &result.stdout {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{output}")?;
        out.flush()?;
    }
    Ok(())
}
