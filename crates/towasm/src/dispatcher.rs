use std::{fs, path::PathBuf};

use log::{debug, info, warn};

use crate::{CompilationFailure, Error, Result, Toolchain, ToolchainSettings};

/// A single compilation request: one source file and the binary it should become.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }
}

/// What a successful dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub toolchain: Toolchain,
    /// Whether the output file was present after the toolchain exited.
    pub output_exists: bool,
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    settings: ToolchainSettings,
}

impl Dispatcher {
    pub fn new(settings: ToolchainSettings) -> Self {
        Self { settings }
    }

    /// Validates the job's source file and hands it to the matching external toolchain.
    /// The toolchain inherits stdout and stderr, and this blocks until it exits.
    pub fn dispatch(&self, job: &Job) -> Result<Outcome> {
        let content = fs::read(&job.source).map_err(|source| Error::FileRead {
            path: job.source.clone(),
            source,
        })?;
        info!(
            "read source file `{}` ({} bytes)",
            job.source.display(),
            content.len()
        );

        // an unsupported extension is reported even for empty files
        let toolchain = Toolchain::from_path(&job.source)?;

        if content.is_empty() {
            return Err(Error::EmptySource(job.source.clone()));
        }

        let invocation = toolchain.invocation(&self.settings, job);
        debug!("invoking {toolchain}: {invocation}");

        let status = invocation
            .command()
            .status()
            .map_err(|err| Error::Compilation {
                source_path: job.source.clone(),
                toolchain,
                reason: CompilationFailure::Launch {
                    program: invocation.program.to_string_lossy().into_owned(),
                    err,
                },
            })?;

        if !status.success() {
            return Err(Error::Compilation {
                source_path: job.source.clone(),
                toolchain,
                reason: CompilationFailure::Exit(status),
            });
        }

        let output_exists = job.output.exists();
        if !output_exists {
            warn!(
                "{toolchain} succeeded but the output file `{}` is missing",
                job.output.display()
            );
        }

        Ok(Outcome {
            toolchain,
            output_exists,
        })
    }
}
