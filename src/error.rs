use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A `key=value` argument that could not be split into a key and a value.
    #[error("{reason}, got {input:?}")]
    FormatError { input: String, reason: &'static str },

    #[error("{action} '{path}': {source}")]
    IoError {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unmarshaling values file '{path}': {source}")]
    ValuesParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("parsing template file '{name}': {source}")]
    TemplateParseError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("executing template '{name}': {source}")]
    RenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The include ceiling was exceeded for one template name.
    #[error("rendering template has a nested reference name: {name}")]
    RecursionError { name: String },
}

/// Convenience type alias for Results with stencil's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Wraps an engine failure for the template `name`.
    ///
    /// A recursion failure raised by a nested `include` travels through the
    /// engine as the source of a `minijinja::Error`; it is unwrapped here so
    /// callers see a `RecursionError` instead of a generic render error.
    pub fn render(name: impl Into<String>, source: minijinja::Error) -> Self {
        let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(&source);
        while let Some(err) = cause {
            if let Some(Error::RecursionError { name: nested }) = err.downcast_ref::<Error>()
            {
                return Error::RecursionError { name: nested.clone() };
            }
            cause = err.source();
        }
        Error::RenderError { name: name.into(), source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints `Error: <message>` to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(exit_codes::FAILURE);
}
