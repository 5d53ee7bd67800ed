use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use crate::Toolchain;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read the source file `{}`: {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },
    #[error("source file `{}` is empty", .0.display())]
    EmptySource(PathBuf),
    #[error(
        "unsupported file extension `{extension}` of `{}`, supported extensions are .go and .cpp",
        .path.display()
    )]
    UnsupportedExtension { path: PathBuf, extension: String },
    #[error(
        "failed to compile `{}` to WebAssembly with {toolchain}: {reason}",
        .source_path.display()
    )]
    Compilation {
        source_path: PathBuf,
        toolchain: Toolchain,
        reason: CompilationFailure,
    },
}

/// Why an external toolchain run did not succeed.
#[derive(Error, Debug)]
pub enum CompilationFailure {
    /// The program could not be started, usually because it is not on the search path.
    #[error("could not invoke `{program}`: {err}")]
    Launch { program: String, err: io::Error },
    /// The program ran but exited unsuccessfully.
    #[error("{}", exit_message(.0))]
    Exit(ExitStatus),
}

fn exit_message(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("terminated with code {code}"),
        None => "terminated by a signal".to_string(),
    }
}
