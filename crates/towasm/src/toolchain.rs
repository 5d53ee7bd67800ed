use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::Path,
    process::{Command, Stdio},
};

use crate::{Error, Job, Result};

/// An external compiler which turns a source file into a WebAssembly binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// TinyGo, used for `.go` sources
    TinyGo,
    /// Emscripten's `emcc`, used for `.cpp` sources
    Emscripten,
}

/// The value passed to TinyGo's `-target` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoTarget {
    #[default]
    Wasm,
    Wasi,
}

impl fmt::Display for GoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wasm => write!(f, "wasm"),
            Self::Wasi => write!(f, "wasi"),
        }
    }
}

/// Which programs to launch for each toolchain and how to configure them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSettings {
    pub tinygo: OsString,
    pub emcc: OsString,
    pub go_target: GoTarget,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            tinygo: "tinygo".into(),
            emcc: "emcc".into(),
            go_target: GoTarget::default(),
        }
    }
}

impl Toolchain {
    /// Selects the toolchain responsible for the given source path by its extension.
    /// Matching is case-sensitive, so `main.GO` is rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("go") => Ok(Self::TinyGo),
            Some("cpp") => Ok(Self::Emscripten),
            _ => Err(Error::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TinyGo => "TinyGo",
            Self::Emscripten => "Emscripten",
        }
    }

    /// Builds the command line which compiles `job.source` into `job.output`.
    pub fn invocation(&self, settings: &ToolchainSettings, job: &Job) -> Invocation {
        match self {
            Self::TinyGo => Invocation {
                program: settings.tinygo.clone(),
                args: vec![
                    "build".into(),
                    "-o".into(),
                    job.output.clone().into_os_string(),
                    format!("-target={}", settings.go_target).into(),
                    job.source.clone().into_os_string(),
                ],
            },
            Self::Emscripten => Invocation {
                program: settings.emcc.clone(),
                args: vec![
                    job.source.clone().into_os_string(),
                    "-o".into(),
                    job.output.clone().into_os_string(),
                    "-s".into(),
                    "WASM=1".into(),
                ],
            },
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Creates a [`Command`] whose stdout and stderr are those of the current process.
    /// Stdin is the null device, so a toolchain never waits on the terminal.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn job(source: &str, output: &str) -> Job {
        Job {
            source: PathBuf::from(source),
            output: PathBuf::from(output),
        }
    }

    #[test]
    fn selects_by_extension() {
        assert_eq!(
            Toolchain::from_path(Path::new("main.go")).unwrap(),
            Toolchain::TinyGo
        );
        assert_eq!(
            Toolchain::from_path(Path::new("src/app.cpp")).unwrap(),
            Toolchain::Emscripten
        );
    }

    #[test]
    fn rejects_other_extensions() {
        for (path, expected) in [
            ("main.c", ".c"),
            ("main.GO", ".GO"),
            ("main.cc", ".cc"),
            ("archive.go.txt", ".txt"),
            ("Makefile", ""),
            (".go", ""),
        ] {
            match Toolchain::from_path(Path::new(path)) {
                Err(Error::UnsupportedExtension { path: p, extension }) => {
                    assert_eq!(p, Path::new(path));
                    assert_eq!(extension, expected, "extension of `{path}`");
                }
                other => panic!("expected unsupported extension for `{path}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn tinygo_arguments() {
        let invocation = Toolchain::TinyGo
            .invocation(&ToolchainSettings::default(), &job("main.go", "out.wasm"));
        assert_eq!(invocation.program, "tinygo");
        assert_eq!(
            invocation.args,
            ["build", "-o", "out.wasm", "-target=wasm", "main.go"]
        );
        assert_eq!(
            invocation.to_string(),
            "tinygo build -o out.wasm -target=wasm main.go"
        );
    }

    #[test]
    fn tinygo_wasi_target() {
        let settings = ToolchainSettings {
            go_target: GoTarget::Wasi,
            ..Default::default()
        };
        let invocation = Toolchain::TinyGo.invocation(&settings, &job("main.go", "out.wasm"));
        assert_eq!(invocation.args[3], "-target=wasi");
    }

    #[test]
    fn emcc_arguments() {
        let settings = ToolchainSettings {
            emcc: "/opt/emsdk/upstream/emscripten/emcc".into(),
            ..Default::default()
        };
        let invocation = Toolchain::Emscripten.invocation(&settings, &job("app.cpp", "app.wasm"));
        assert_eq!(invocation.program, "/opt/emsdk/upstream/emscripten/emcc");
        assert_eq!(
            invocation.args,
            ["app.cpp", "-o", "app.wasm", "-s", "WASM=1"]
        );
    }
}
