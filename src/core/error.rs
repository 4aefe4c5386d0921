//! Error types for relgraph with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Configuration problems abort graph
//! construction before any job is emitted; integrity problems indicate a factory
//! bug and are always fatal.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Graph integrity failure (duplicate names, dangling deps)
  Integrity = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relgraph
#[derive(Debug)]
pub enum GraphError {
  /// Configuration errors
  Config(ConfigError),

  /// Graph integrity errors detected at assembly
  Integrity(IntegrityError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl GraphError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    GraphError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    GraphError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      GraphError::Message { message, context, help } => GraphError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GraphError::Config(_) => ExitCode::User,
      GraphError::Integrity(_) => ExitCode::Integrity,
      GraphError::Io(_) => ExitCode::System,
      GraphError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GraphError::Config(e) => e.help_message(),
      GraphError::Integrity(e) => e.help_message(),
      GraphError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for GraphError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GraphError::Config(e) => write!(f, "{}", e),
      GraphError::Integrity(e) => write!(f, "{}", e),
      GraphError::Io(e) => write!(f, "I/O error: {}", e),
      GraphError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for GraphError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GraphError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<ConfigError> for GraphError {
  fn from(err: ConfigError) -> Self {
    GraphError::Config(err)
  }
}

impl From<IntegrityError> for GraphError {
  fn from(err: IntegrityError) -> Self {
    GraphError::Integrity(err)
  }
}

impl From<io::Error> for GraphError {
  fn from(err: io::Error) -> Self {
    GraphError::Io(err)
  }
}

impl From<String> for GraphError {
  fn from(msg: String) -> Self {
    GraphError::message(msg)
  }
}

impl From<&str> for GraphError {
  fn from(msg: &str) -> Self {
    GraphError::message(msg)
  }
}

impl From<toml_edit::TomlError> for GraphError {
  fn from(err: toml_edit::TomlError) -> Self {
    GraphError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for GraphError {
  fn from(err: toml_edit::de::Error) -> Self {
    GraphError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for GraphError {
  fn from(err: serde_json::Error) -> Self {
    GraphError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
///
/// All of these abort graph construction before any job is emitted;
/// no partial graph is ever returned.
#[derive(Debug)]
pub enum ConfigError {
  /// Release config file not found
  NotFound { path: PathBuf },

  /// Chunk count is zero or exceeds the platform's locale count
  ChunkCount {
    platform: String,
    chunks: u32,
    locales: usize,
  },

  /// Platform has no locales configured
  NoLocales { platform: String },

  /// Platform referenced with no locale configuration
  PlatformNotConfigured { platform: String },

  /// A patch version lists a locale that no platform configures
  UnknownPartialLocale { version: String, locale: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Pass the release config file with --config <path>.".to_string())
      }
      ConfigError::ChunkCount { platform, locales, .. } => Some(format!(
        "Set [platforms.{}] chunks between 1 and {} (the number of configured locales).",
        platform, locales
      )),
      ConfigError::UnknownPartialLocale { locale, .. } => Some(format!(
        "Add '{}' to a platform locale list or remove it from the patch version.",
        locale
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Release config not found: {}", path.display())
      }
      ConfigError::ChunkCount {
        platform,
        chunks,
        locales,
      } => {
        write!(
          f,
          "Invalid chunk count {} for platform '{}' with {} locales",
          chunks, platform, locales
        )
      }
      ConfigError::NoLocales { platform } => {
        write!(f, "Platform '{}' has no locales configured", platform)
      }
      ConfigError::PlatformNotConfigured { platform } => {
        write!(f, "Platform '{}' has no locale configuration", platform)
      }
      ConfigError::UnknownPartialLocale { version, locale } => {
        write!(
          f,
          "Patch version '{}' lists locale '{}' which no platform configures",
          version, locale
        )
      }
    }
  }
}

/// Graph integrity errors
///
/// These indicate a factory bug: the builder emitted jobs that cannot form a
/// valid graph. Never retried.
#[derive(Debug)]
pub enum IntegrityError {
  /// Two emitted jobs share a name
  DuplicateName { name: String },

  /// A job depends on a name absent from the final graph
  DanglingDependency { job: String, requires: String },

  /// Dependency edges form a cycle
  Cycle { job: String },
}

impl IntegrityError {
  fn help_message(&self) -> Option<String> {
    match self {
      IntegrityError::DuplicateName { .. } => {
        Some("Job names are derived from (platform, chunk, version); check the release config for repeated entries.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for IntegrityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IntegrityError::DuplicateName { name } => {
        write!(f, "Duplicate job name in graph: {}", name)
      }
      IntegrityError::DanglingDependency { job, requires } => {
        write!(f, "Job '{}' depends on '{}' which is not in the graph", job, requires)
      }
      IntegrityError::Cycle { job } => {
        write!(f, "Dependency cycle detected involving job '{}'", job)
      }
    }
  }
}

/// Result type alias for relgraph
pub type GraphResult<T> = Result<T, GraphError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> GraphResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> GraphResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<GraphError>,
{
  fn context(self, ctx: impl Into<String>) -> GraphResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> GraphResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &GraphError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

/// Convert anyhow::Error to GraphError
impl From<anyhow::Error> for GraphError {
  fn from(err: anyhow::Error) -> Self {
    GraphError::message(err.to_string())
  }
}
