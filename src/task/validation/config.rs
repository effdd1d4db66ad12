//! Configuration for task intake validation.

/// Limits applied when validating raw task input.
///
/// # Examples
///
/// ```
/// use taskdeck::task::validation::IntakeConfig;
///
/// let config = IntakeConfig::default();
/// assert_eq!(config.max_description_chars, 500);
/// assert!(!config.allow_past_due_dates);
///
/// let lenient = IntakeConfig::lenient();
/// assert!(lenient.allow_past_due_dates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Maximum description length in characters, counted after trimming.
    pub max_description_chars: usize,
    /// Whether due dates before today are accepted.
    pub allow_past_due_dates: bool,
    /// Whether surrounding whitespace is stripped from stored descriptions.
    pub trim_description: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_description_chars: 500,
            allow_past_due_dates: false,
            trim_description: true,
        }
    }
}

impl IntakeConfig {
    /// Creates a configuration that accepts past due dates.
    ///
    /// Useful for importing historical tasks.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_past_due_dates: true,
            ..Default::default()
        }
    }

    /// Creates a configuration with a tighter description limit.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_description_chars: 140,
            allow_past_due_dates: false,
            trim_description: true,
        }
    }
}
