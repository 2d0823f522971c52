use thiserror::Error;

/// Everything that can go wrong between picking a file and rendering a
/// prediction. The `#[error]` strings are the user-facing messages; the GUI
/// shows them verbatim and never a raw transport or parsing error.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Please select a file")]
    NoFileSelected,

    #[error("File size must be less than {limit_mb} MB")]
    FileTooLarge { limit_mb: u64 },

    #[error("Only .txt files are allowed")]
    InvalidFileType,

    #[error("Please select a valid model type")]
    InvalidModelKey,

    #[error("Request timeout. Please try again.")]
    Timeout,

    #[error("Network error. Please check your connection.")]
    Network,

    #[error("Invalid request. Please check your input.")]
    InvalidRequest,

    #[error("Server error. Please try again later.")]
    ServerError,

    #[error("Invalid response format")]
    InvalidResponseShape,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Prediction error: {0}")]
    Custom(String),
}

impl From<std::io::Error> for PredictError {
    fn from(error: std::io::Error) -> Self {
        PredictError::Io(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_the_user_facing_messages() {
        assert_eq!(PredictError::NoFileSelected.to_string(), "Please select a file");
        assert_eq!(
            PredictError::FileTooLarge { limit_mb: 5 }.to_string(),
            "File size must be less than 5 MB"
        );
        assert_eq!(PredictError::InvalidFileType.to_string(), "Only .txt files are allowed");
        assert_eq!(
            PredictError::InvalidModelKey.to_string(),
            "Please select a valid model type"
        );
        assert_eq!(PredictError::Timeout.to_string(), "Request timeout. Please try again.");
        assert_eq!(
            PredictError::Network.to_string(),
            "Network error. Please check your connection."
        );
        assert_eq!(
            PredictError::InvalidRequest.to_string(),
            "Invalid request. Please check your input."
        );
        assert_eq!(
            PredictError::ServerError.to_string(),
            "Server error. Please try again later."
        );
        assert_eq!(PredictError::InvalidResponseShape.to_string(), "Invalid response format");
    }
}
