use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to start menu program `{}`: {}", .program, .source)]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Menu program `{}` {}{}", .program, describe_exit(.code), describe_stderr(.stderr))]
    SubProcessExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("No profiles were found in the menu configuration. Is `{}` empty?", .path)]
    EmptyConfig { path: String },

    #[error("No profile named `{}` is defined", .0)]
    UnknownProfile(String),

    #[error("Unknown menu backend `{}`, expected one of: rofi, wmenu, dmenu", .0)]
    UnknownBackend(String),

    #[error("Invalid color `{}`: expected `rrggbb` or `rrggbbaa` hex digits", .0)]
    InvalidColor(String),

    #[error("Invalid profile name: name may not be empty")]
    EmptyId,

    #[error("Invalid profile name `{}`: name may not contain whitespace", .0)]
    IdWithSpace(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(127) => "exited with code 127 (command not found)".to_string(),
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl Error {
    pub fn empty_config(path: String) -> Self {
        Self::EmptyConfig { path }
    }

    pub fn spawn_error(program: &str, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.to_string(),
            source,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
