//! Blocking invocation of external tools.
//!
//! Both binaries only ever spawn a process, wait for it, and look at how it
//! exited. [`CommandRunner`] is the seam between that and the logic deciding
//! which commands to run, so the latter can be tested without spawning anything.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A fully resolved external command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        if let Some(dir) = &self.current_dir {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}

/// How an external process finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit. `None` when the process was killed by a signal.
    Failed(Option<i32>),
}

impl Outcome {
    pub fn success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<ExitStatus> for Outcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            Outcome::Success
        } else {
            Outcome::Failed(status.code())
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("exit code 0"),
            Outcome::Failed(Some(code)) => write!(f, "exit code {code}"),
            Outcome::Failed(None) => f.write_str("terminated by signal"),
        }
    }
}

pub trait CommandRunner {
    /// Runs `invocation` to completion.
    ///
    /// Returns an error only if the process could not be started; a process
    /// that starts and exits non-zero is reported through [`Outcome::Failed`].
    fn run(&mut self, invocation: &Invocation) -> Result<Outcome>;
}

/// Spawns real processes, inheriting stdio so the tool's own output streams
/// straight to the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<Outcome> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }
        let status = command
            .status()
            .with_context(|| format!("failed to run `{invocation}`"))?;
        Ok(status.into())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use anyhow::anyhow;

    /// Records every invocation. Invocations whose arguments contain one of the
    /// `failing` markers exit with code 1, those matching `unspawnable` fail to
    /// start at all.
    #[derive(Default)]
    pub(crate) struct ScriptedRunner {
        pub calls: Vec<Invocation>,
        failing: Vec<OsString>,
        unspawnable: Vec<OsString>,
    }

    fn markers(markers: &[&str]) -> Vec<OsString> {
        markers.iter().map(OsString::from).collect()
    }

    fn hits(invocation: &Invocation, markers: &[OsString]) -> bool {
        invocation.args.iter().any(|arg| markers.contains(arg))
    }

    impl ScriptedRunner {
        pub fn failing_on(failing: &[&str]) -> Self {
            Self {
                failing: markers(failing),
                ..Self::default()
            }
        }

        pub fn spawn_failing_on(unspawnable: &[&str]) -> Self {
            Self {
                unspawnable: markers(unspawnable),
                ..Self::default()
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, invocation: &Invocation) -> Result<Outcome> {
            self.calls.push(invocation.clone());
            if hits(invocation, &self.unspawnable) {
                return Err(anyhow!("failed to run `{invocation}`"));
            }
            Ok(if hits(invocation, &self.failing) {
                Outcome::Failed(Some(1))
            } else {
                Outcome::Success
            })
        }
    }
}
