use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("no URL provided")]
    EmptyInput,

    #[error("invalid URL: {reason}")]
    MalformedUrl { reason: String },

    #[error("QR encoding failed: {message}")]
    Encoding { message: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidOption {
        field: String,
        value: String,
        reason: String,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrError>;

impl QrError {
    /// Message shown to the end user, matching the wording of the original form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            QrError::EmptyInput => "Please enter a URL.".to_string(),
            QrError::MalformedUrl { .. } => "Please enter a valid URL.".to_string(),
            QrError::Encoding { message } => format!("Error generating QR code: {}", message),
            QrError::InvalidOption {
                field,
                value,
                reason,
            } => format!("Invalid {}: {} ({})", field, value, reason),
            other => other.to_string(),
        }
    }

    /// Exit code for the CLI: usage errors, encoding failures and system
    /// faults get distinct codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            QrError::EmptyInput | QrError::MalformedUrl { .. } | QrError::InvalidOption { .. } => 2,
            QrError::Encoding { .. } => 1,
            QrError::Image(_) | QrError::Io(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        assert_eq!(
            QrError::EmptyInput.user_friendly_message(),
            "Please enter a URL."
        );
        let malformed = QrError::MalformedUrl {
            reason: "empty host".to_string(),
        };
        assert_eq!(malformed.user_friendly_message(), "Please enter a valid URL.");
        let encoding = QrError::Encoding {
            message: "data too long".to_string(),
        };
        assert_eq!(
            encoding.user_friendly_message(),
            "Error generating QR code: data too long"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(QrError::EmptyInput.exit_code(), 2);
        let encoding = QrError::Encoding {
            message: "data too long".to_string(),
        };
        assert_eq!(encoding.exit_code(), 1);
        let invalid = QrError::InvalidOption {
            field: "box-size".to_string(),
            value: "4".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);
    }
}
