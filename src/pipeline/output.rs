//! Where rendered reports go: the terminal or an `--output-file`.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Environment variable that disables color regardless of flags.
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Destination of a command's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `--output-file` when given, stdout otherwise.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Whether reports for this target get ANSI colors.
    ///
    /// Files and pipes never do; a terminal does unless `--no-color` or
    /// `NO_COLOR` is set.
    #[must_use]
    pub fn wants_color(&self, no_color: bool) -> bool {
        !no_color && std::env::var_os(NO_COLOR_ENV).is_none() && self.is_terminal()
    }

    /// Human-readable name for log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "stdout".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Write one report, terminated by exactly one newline.
    ///
    /// Missing parent directories of a file target are created. In quiet
    /// mode the "written to" notice is demoted to debug.
    pub fn write(&self, content: &str, quiet: bool) -> Result<()> {
        let newline = if content.ends_with('\n') { "" } else { "\n" };
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                write!(out, "{content}{newline}")
                    .and_then(|()| out.flush())
                    .context("Failed to write to stdout")
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                std::fs::write(path, format!("{content}{newline}"))
                    .with_context(|| format!("Failed to write output to {}", path.display()))?;
                if quiet {
                    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
                } else {
                    tracing::info!("Output written to {}", path.display());
                }
                Ok(())
            }
        }
    }
}
