use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;

/// The desktop clipboard, reached through the platform's command line tool.
pub(crate) struct SystemClipboard;

impl passgen::Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        send_to_clipboard(text.as_bytes())
    }
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    pipe_into(clipboard_cmd(), data)
}

/// Run `cmd` with `data` on its stdin. The child is always waited for, even if writing fails.
fn pipe_into(mut cmd: Command, data: &[u8]) -> anyhow::Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start `{program}`"))?;
    // Dropping stdin after the write closes the pipe, so the child sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(data),
        None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "no stdin")),
    };
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for `{program}` to finish"))?;
    if !exit_status.success() {
        anyhow::bail!("`{program}` exited with {exit_status}");
    }
    written.with_context(|| format!("failed to write to `{program}`"))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
