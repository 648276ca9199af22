use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the genuine faults that can occur while driving a verification run. Expected
/// analysis outcomes — missing classes, broken references, illegal member access — are never
/// errors; they are recorded as [`crate::problems::CompatibilityProblem`] values on the run's
/// reporter. An `Err` from this library means the run itself could not proceed.
///
/// # Error Categories
///
/// ## Run Control
/// - [`Error::Interrupted`] - Cooperative cancellation was requested mid-run
///
/// ## Input Errors
/// - [`Error::Malformed`] - Structurally invalid descriptor or metadata handed to the engine
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors raised by resolver implementations
///
/// # Examples
///
/// ```rust
/// use linkscope::{Error, verification::{VerificationContext, VerificationEngine}};
/// use linkscope::resolver::InMemoryResolver;
/// use std::sync::Arc;
///
/// let context = VerificationContext::new(Arc::new(InMemoryResolver::new()));
/// let engine = VerificationEngine::new(context);
///
/// match engine.verify(["com/example/Main"], |_| {}) {
///     Ok(summary) => {
///         println!("verified {} classes", summary.classes_verified);
///     }
///     Err(Error::Interrupted) => {
///         eprintln!("run was cancelled; partial results remain valid");
///     }
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("malformed input: {} ({}:{})", message, file, line);
///     }
///     Err(e) => {
///         eprintln!("other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Run control
    /// The verification run was cancelled cooperatively.
    ///
    /// Raised when the run's cancellation flag is observed between classes or
    /// between methods. Distinguishable from every crash-like failure so callers
    /// can treat an aborted run differently from a broken one. All problems and
    /// usages registered before the abort remain valid on the reporter.
    #[error("The verification run was interrupted")]
    Interrupted,

    /// The input metadata is damaged and could not be processed.
    ///
    /// This error indicates that metadata handed to the engine is structurally
    /// invalid, such as a member descriptor that does not follow the class-file
    /// grammar. The error includes the source location where the malformation
    /// was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that resolver implementations can raise while
    /// reading class data from disk. A resolver that can classify the failure
    /// should return a read-failure outcome instead; this variant is for faults
    /// that break the resolver contract itself.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for
    /// wrapping resolver-implementation errors with additional context.
    #[error("{0}")]
    Error(String),
}
