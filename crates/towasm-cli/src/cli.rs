use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum};
use towasm::{GoTarget, Job, ToolchainSettings};

/// Compile a Go or C++ source file to WebAssembly using TinyGo or Emscripten
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Source file to compile, either `.go` or `.cpp`
    #[clap(allow_hyphen_values = true)]
    pub source_file: Option<PathBuf>,
    /// Path of the WebAssembly binary to produce
    #[clap(allow_hyphen_values = true)]
    pub output_file: Option<PathBuf>,
    /// Program used to compile `.go` sources
    #[clap(long, value_name = "PROGRAM", default_value = "tinygo")]
    pub tinygo: OsString,
    /// Program used to compile `.cpp` sources
    #[clap(long, value_name = "PROGRAM", default_value = "emcc")]
    pub emcc: OsString,
    /// Target passed to TinyGo
    #[clap(long, value_enum, default_value_t = GoTargetArg::Wasm)]
    pub go_target: GoTargetArg,
    /// Anything after the output file is ignored
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<OsString>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoTargetArg {
    /// Plain WebAssembly for browsers and embedders
    Wasm,
    /// WebAssembly System Interface
    Wasi,
}

impl From<GoTargetArg> for GoTarget {
    fn from(src: GoTargetArg) -> Self {
        match src {
            GoTargetArg::Wasm => Self::Wasm,
            GoTargetArg::Wasi => Self::Wasi,
        }
    }
}

impl Cli {
    /// Returns the compilation job, or `None` when a positional argument is missing.
    pub fn job(&self) -> Option<Job> {
        match (&self.source_file, &self.output_file) {
            (Some(source), Some(output)) => Some(Job::new(source, output)),
            _ => None,
        }
    }

    pub fn settings(&self) -> ToolchainSettings {
        ToolchainSettings {
            tinygo: self.tinygo.clone(),
            emcc: self.emcc.clone(),
            go_target: self.go_target.into(),
        }
    }
}
