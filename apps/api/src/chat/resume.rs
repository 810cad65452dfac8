//! Resume store: the static markdown resume the chat answers from.

use std::path::Path;

use tracing::warn;

/// Returned in place of the resume when the file is absent.
pub const RESUME_UNAVAILABLE: &str = "Resume data not available.";

/// Reads the resume from disk. Called once per request; never cached.
///
/// A missing or unreadable file yields [`RESUME_UNAVAILABLE`] instead of an error,
/// so the chat keeps answering (the LLM will just report missing details).
pub async fn load_resume(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume at {} could not be read: {e}", path.display());
            RESUME_UNAVAILABLE.to_string()
        }
    }
}

/// Returns the block under `## <section_name>` up to (not including) the next `## ` header.
///
/// The header line is matched case-insensitively against the whole trimmed line and is
/// included in the output. Returns an empty string when the section does not exist.
pub fn extract_section(resume_text: &str, section_name: &str) -> String {
    let target = format!("## {section_name}").to_lowercase();
    let mut capture = false;
    let mut out: Vec<&str> = Vec::new();

    for line in resume_text.lines() {
        if line.trim().to_lowercase() == target {
            capture = true;
            out.push(line);
            continue;
        }
        if capture && line.starts_with("## ") {
            break;
        }
        if capture {
            out.push(line);
        }
    }

    out.join("\n").trim().to_string()
}
