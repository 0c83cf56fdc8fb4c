use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Probes every tool with `<tool> --version` and fails on the first one that is missing.
pub fn check_tools<S: AsRef<str>>(tools: &[S]) -> Result<()> {
    for tool in tools {
        let tool = tool.as_ref();
        log::debug!("Checking that '{tool}' is installed");

        let status = Command::new(tool)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::MissingTool { tool: tool.to_string(), reason: e.to_string() })?;

        if !status.success() {
            return Err(Error::MissingTool {
                tool: tool.to_string(),
                reason: format!("'{tool} --version' exited with {status}"),
            });
        }
    }
    Ok(())
}
