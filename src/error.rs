//! Error types for the grainscore library

use thiserror::Error;

/// Result type alias for grainscore operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for grain statistics computation
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No grains were supplied for analysis
    #[error("No grains supplied for analysis")]
    EmptyInput,

    /// Every grain diameter fell outside the score table
    #[error("No classifiable grains: all {excluded} diameters exceed the score table")]
    NoClassifiableGrains { excluded: usize },

    /// Measured image area cannot be used for density normalization
    #[error("Invalid image area: {area}")]
    InvalidArea { area: u64 },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Report could not be encoded
    #[error("Report serialization failed")]
    SerializationError(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Input-shaped failures can be retried with a different grain set or
    /// image; configuration and encoding failures cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput
                | AnalysisError::NoClassifiableGrains { .. }
                | AnalysisError::InvalidArea { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::EmptyInput => {
                "No grains were detected in the image. Please check the segmentation step.".to_string()
            }
            AnalysisError::NoClassifiableGrains { excluded } => {
                format!(
                    "All {} detected grains are larger than the coarsest grade. Please check the image scale.",
                    excluded
                )
            }
            AnalysisError::InvalidArea { .. } => {
                "The analyzed image area must be positive.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("Configuration value '{}' is invalid.", parameter)
            }
            _ => "Grain statistics could not be computed.".to_string(),
        }
    }
}
