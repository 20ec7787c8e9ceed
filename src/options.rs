//! Configuration options for sink report parsing.
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`DecibelPolicy`]: How non-finite decibel readings are treated
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::{parse_with_options, DecibelPolicy, ParseOptions};
//!
//! let report = "Sink #0\n\tBase Volume: 0 / 0% / -inf dB\n";
//!
//! // Default: `-inf dB` is accepted as negative infinity
//! assert!(parse_with_options(report, &ParseOptions::new()).is_ok());
//!
//! // Strict: only finite decibel readings are accepted
//! let strict = ParseOptions::new().with_decibels(DecibelPolicy::FiniteOnly);
//! assert!(parse_with_options(report, &strict).is_err());
//! ```

/// Treatment of decibel tokens that are not finite numbers.
///
/// `pactl` prints `-inf dB` for a volume of zero. NaN tokens are rejected
/// under every policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecibelPolicy {
    /// `-inf` / `inf` parse to IEEE infinities.
    #[default]
    AllowInfinite,
    /// Any non-finite decibel token is a field error.
    FiniteOnly,
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::ParseOptions;
///
/// let options = ParseOptions::new().with_canonical_keys(false);
/// assert!(!options.canonical_keys);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    /// Rename well-known keys (`sample specification` -> `sampling`, ...).
    pub canonical_keys: bool,
    pub decibels: DecibelPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            canonical_keys: true,
            decibels: DecibelPolicy::default(),
        }
    }
}

impl ParseOptions {
    /// Creates default options (canonical keys, infinite decibels accepted).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pactl_sinks::{DecibelPolicy, ParseOptions};
    ///
    /// let options = ParseOptions::new();
    /// assert!(options.canonical_keys);
    /// assert_eq!(options.decibels, DecibelPolicy::AllowInfinite);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether well-known keys are renamed to their canonical output names.
    ///
    /// When disabled, output keys are the lower-cased keys of the report.
    #[must_use]
    pub fn with_canonical_keys(mut self, canonical_keys: bool) -> Self {
        self.canonical_keys = canonical_keys;
        self
    }

    /// Sets the decibel policy.
    #[must_use]
    pub fn with_decibels(mut self, decibels: DecibelPolicy) -> Self {
        self.decibels = decibels;
        self
    }
}
