//! Clipboard extraction through per-platform helper scripts.
//!
//! Each helper receives the destination path as its only argument and
//! prints one line: the saved path, `no image`, or (on Linux) `no xclip`.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tempfile::TempPath;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::entities::ClipboardOutcome;
use crate::domain::errors::ClipboardError;
use crate::domain::ports::ClipboardPort;

const NO_IMAGE: &str = "no image";
const NO_XCLIP: &str = "no xclip";

/// Platform helper used to read the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helper {
    /// `sh` with an xclip script.
    Shell,
    /// `osascript`.
    AppleScript,
    /// Windows `powershell`.
    PowerShell,
}

impl Helper {
    /// Helper for an OS name as reported by `std::env::consts::OS`.
    #[must_use]
    pub fn for_os(os: &str) -> Self {
        match os {
            "windows" => Self::PowerShell,
            "macos" => Self::AppleScript,
            _ => Self::Shell,
        }
    }

    /// Helper for the running platform.
    #[must_use]
    pub fn current() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// File name looked up in a scripts directory override.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::Shell => "linux.sh",
            Self::AppleScript => "mac.applescript",
            Self::PowerShell => "pc.ps1",
        }
    }

    /// Interpreter binary.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Shell => "sh",
            Self::AppleScript => "osascript",
            Self::PowerShell => "powershell",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Shell => include_str!("../../../res/linux.sh"),
            Self::AppleScript => include_str!("../../../res/mac.applescript"),
            Self::PowerShell => include_str!("../../../res/pc.ps1"),
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Shell => ".sh",
            Self::AppleScript => ".applescript",
            Self::PowerShell => ".ps1",
        }
    }

    fn args(self, script: &Path, destination: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = match self {
            Self::PowerShell => [
                "-noprofile",
                "-noninteractive",
                "-nologo",
                "-sta",
                "-executionpolicy",
                "unrestricted",
                "-windowstyle",
                "hidden",
                "-file",
            ]
            .into_iter()
            .map(OsString::from)
            .collect(),
            Self::Shell | Self::AppleScript => Vec::new(),
        };
        args.push(script.as_os_str().to_owned());
        args.push(destination.as_os_str().to_owned());
        args
    }

    /// Only the xclip script can report a missing dependency.
    const fn reports_missing_dependency(self) -> bool {
        matches!(self, Self::Shell)
    }
}

/// Interprets the single line a helper prints.
///
/// # Errors
/// Returns [`ClipboardError::EmptyOutput`] when the helper printed nothing.
pub fn parse_helper_output(
    helper: Helper,
    stdout: &str,
) -> Result<ClipboardOutcome, ClipboardError> {
    let line = stdout.trim();

    match line {
        "" => Err(ClipboardError::EmptyOutput {
            program: helper.program().to_string(),
        }),
        NO_IMAGE => Ok(ClipboardOutcome::NoImage),
        NO_XCLIP if helper.reports_missing_dependency() => {
            Ok(ClipboardOutcome::MissingDependency("xclip".to_string()))
        }
        path => Ok(ClipboardOutcome::Saved(PathBuf::from(path))),
    }
}

enum Script {
    Embedded(TempPath),
    External(PathBuf),
}

impl Script {
    fn path(&self) -> &Path {
        match self {
            Self::Embedded(path) => path.as_ref(),
            Self::External(path) => path.as_path(),
        }
    }
}

/// Clipboard extractor that shells out to a platform helper.
#[derive(Debug, Clone)]
pub struct ScriptClipboard {
    helper: Helper,
    scripts_dir: Option<PathBuf>,
}

impl Default for ScriptClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptClipboard {
    /// Extractor for the running platform using the bundled scripts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            helper: Helper::current(),
            scripts_dir: None,
        }
    }

    /// Uses a different helper.
    #[must_use]
    pub fn with_helper(mut self, helper: Helper) -> Self {
        self.helper = helper;
        self
    }

    /// Loads helper scripts from `dir` instead of the bundled copies.
    #[must_use]
    pub fn with_scripts_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scripts_dir = dir;
        self
    }

    fn script(&self) -> Result<Script, ClipboardError> {
        if let Some(dir) = &self.scripts_dir {
            return Ok(Script::External(dir.join(self.helper.script_name())));
        }

        let mut file = tempfile::Builder::new()
            .prefix("imgpaste-")
            .suffix(self.helper.suffix())
            .tempfile()
            .map_err(ClipboardError::Script)?;
        file.write_all(self.helper.source().as_bytes())
            .map_err(ClipboardError::Script)?;

        Ok(Script::Embedded(file.into_temp_path()))
    }
}

#[async_trait]
impl ClipboardPort for ScriptClipboard {
    async fn save_image(&self, destination: &Path) -> Result<ClipboardOutcome, ClipboardError> {
        let script = self.script()?;
        let program = self.helper.program();

        debug!(
            program,
            script = %script.path().display(),
            destination = %destination.display(),
            "Running clipboard helper"
        );

        let output = Command::new(program)
            .args(self.helper.args(script.path(), destination))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                warn!(program, error = %e, "Failed to launch clipboard helper");
                ClipboardError::spawn(program, e)
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            debug!(
                program,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Clipboard helper exited with failure"
            );
        }

        parse_helper_output(self.helper, &stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("linux", Helper::Shell ; "linux")]
    #[test_case("freebsd", Helper::Shell ; "other unix")]
    #[test_case("macos", Helper::AppleScript ; "macos")]
    #[test_case("windows", Helper::PowerShell ; "windows")]
    fn test_helper_for_os(os: &str, expected: Helper) {
        assert_eq!(Helper::for_os(os), expected);
    }

    #[test_case(Helper::Shell, "no image\n", ClipboardOutcome::NoImage ; "no image")]
    #[test_case(Helper::PowerShell, "no image\r\n", ClipboardOutcome::NoImage ; "no image crlf")]
    #[test_case(
        Helper::Shell,
        "no xclip\n",
        ClipboardOutcome::MissingDependency("xclip".into())
        ; "missing xclip"
    )]
    #[test_case(
        Helper::AppleScript,
        "no xclip\n",
        ClipboardOutcome::Saved(PathBuf::from("no xclip"))
        ; "xclip sentinel ignored off linux"
    )]
    #[test_case(
        Helper::Shell,
        "/tmp/imgpaste-x/image.png\n",
        ClipboardOutcome::Saved(PathBuf::from("/tmp/imgpaste-x/image.png"))
        ; "saved path"
    )]
    fn test_parse_helper_output(helper: Helper, stdout: &str, expected: ClipboardOutcome) {
        assert_eq!(parse_helper_output(helper, stdout).unwrap(), expected);
    }

    #[test]
    fn test_parse_empty_output() {
        let err = parse_helper_output(Helper::Shell, "  \n").unwrap_err();
        assert!(matches!(err, ClipboardError::EmptyOutput { program } if program == "sh"));
    }

    #[test]
    fn test_powershell_args() {
        let args = Helper::PowerShell.args(Path::new("s.ps1"), Path::new("out.png"));
        assert_eq!(args.len(), 11);
        assert_eq!(args[8], OsString::from("-file"));
        assert_eq!(args[9], OsString::from("s.ps1"));
        assert_eq!(args[10], OsString::from("out.png"));
    }

    #[test]
    fn test_embedded_script_is_removed_after_use() {
        let clipboard = ScriptClipboard::new().with_helper(Helper::Shell);
        let script = clipboard.script().unwrap();
        let path = script.path().to_path_buf();

        assert!(std::fs::read_to_string(&path).unwrap().contains(NO_XCLIP));
        drop(script);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    fn fake_helper(body: &str) -> (tempfile::TempDir, ScriptClipboard) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("linux.sh"), body).unwrap();
        let clipboard = ScriptClipboard::new()
            .with_helper(Helper::Shell)
            .with_scripts_dir(Some(dir.path().to_path_buf()));
        (dir, clipboard)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_helper_saves_image() {
        let (_scripts, clipboard) = fake_helper("printf 'png' > \"$1\"\necho \"$1\"\n");
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("image.png");

        let first = clipboard.save_image(&destination).await.unwrap();
        let second = clipboard.save_image(&destination).await.unwrap();

        assert_eq!(first, ClipboardOutcome::Saved(destination.clone()));
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&destination).unwrap(), b"png");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_helper_without_image() {
        let (_scripts, clipboard) = fake_helper("echo 'no image'\n");
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("image.png");

        let outcome = clipboard.save_image(&destination).await.unwrap();

        assert_eq!(outcome, ClipboardOutcome::NoImage);
        assert!(!destination.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_helper_missing_xclip_with_failure_status() {
        let (_scripts, clipboard) = fake_helper("echo 'no xclip'\nexit 1\n");
        let out = tempfile::tempdir().unwrap();

        let outcome = clipboard
            .save_image(&out.path().join("image.png"))
            .await
            .unwrap();

        assert_eq!(outcome, ClipboardOutcome::MissingDependency("xclip".into()));
    }
}
