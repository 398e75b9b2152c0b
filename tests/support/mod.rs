use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn getcamcaps_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_getcamcaps"))
}

pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

/// How the fake tool answers one query.
#[derive(Clone)]
pub enum Reply {
    Stdout(String),
    Fail(String),
}

/// A shell-script stand-in for `v4l2-ctl`.
///
/// The script appends its argument list to `calls.log` and answers `--help`,
/// `--list-subdev-mbus-codes` and `--list-subdev-framesizes` from canned
/// replies keyed by the fourth argument (`pad=N,code=0xCODE`).
pub struct FakeTool {
    dir: TempDir,
    help_status: i32,
    codes: Reply,
    framesizes: Vec<(String, Reply)>,
}

impl FakeTool {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to allocate fake tool dir")?,
            help_status: 0,
            codes: Reply::Stdout(String::new()),
            framesizes: Vec::new(),
        })
    }

    pub fn help_status(mut self, status: i32) -> Self {
        self.help_status = status;
        self
    }

    pub fn codes(mut self, reply: Reply) -> Self {
        self.codes = reply;
        self
    }

    pub fn framesizes(mut self, selector: &str, reply: Reply) -> Self {
        self.framesizes.push((selector.to_string(), reply));
        self
    }

    /// Write the script and return its path.
    pub fn install(&self) -> Result<PathBuf> {
        let log = self.calls_log();
        let mut script = String::from("#!/bin/sh\n");
        writeln!(script, "echo \"$*\" >> '{}'", log.display())?;
        writeln!(
            script,
            "if [ \"$1\" = \"--help\" ]; then echo 'Usage: v4l2-ctl <options>'; exit {}; fi",
            self.help_status
        )?;
        script.push_str("case \"$3\" in\n  --list-subdev-mbus-codes)\n");
        script.push_str(&reply_body(&self.codes));
        script.push_str("    ;;\n  --list-subdev-framesizes)\n    case \"$4\" in\n");
        for (selector, reply) in &self.framesizes {
            writeln!(script, "      '{selector}')")?;
            script.push_str(&reply_body(reply));
            script.push_str("        ;;\n");
        }
        script.push_str(
            "      *)\n        echo \"unexpected framesize query: $4\" >&2\n        exit 1\n        ;;\n    esac\n    ;;\n  *)\n    echo \"unexpected query: $*\" >&2\n    exit 1\n    ;;\nesac\n",
        );

        let path = self.dir.path().join("v4l2-ctl");
        fs::write(&path, script).context("failed to write fake v4l2-ctl")?;
        make_executable(&path)?;
        Ok(path)
    }

    pub fn calls_log(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Argument lists the script saw, one per invocation.
    pub fn calls(&self) -> Result<Vec<String>> {
        let log = self.calls_log();
        if !log.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(&log)?
            .lines()
            .map(str::to_string)
            .collect())
    }
}

fn reply_body(reply: &Reply) -> String {
    match reply {
        Reply::Stdout(text) => format!("    cat <<'CAMCAPS_EOF'\n{text}\nCAMCAPS_EOF\n"),
        Reply::Fail(message) => format!("    echo '{message}' >&2\n    exit 1\n"),
    }
}

/// Run `getcamcaps` against `tool` with a clean `CAMCAPS_*` environment.
pub fn run_getcamcaps(tool: &Path, envs: &[(&str, &str)]) -> Result<Output> {
    let mut cmd = Command::new(getcamcaps_binary());
    cmd.env_remove("CAMCAPS_DEVICE")
        .env_remove("CAMCAPS_PAD")
        .env_remove("CAMCAPS_LOG")
        .env("CAMCAPS_V4L2_CTL", tool);
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}
