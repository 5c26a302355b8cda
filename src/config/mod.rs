use crate::domain::model::{EncodeOptions, ErrorCorrection};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "urlqr")]
#[command(about = "Generate a QR code PNG from a URL")]
pub struct CliConfig {
    /// URL to encode; http:// is prepended when no scheme is given
    pub url: String,

    /// Error correction level: L (~7%), M (~15%), Q (~25%), H (~30%)
    #[arg(long, default_value = "M", value_parser = ErrorCorrection::from_str)]
    pub ec_level: ErrorCorrection,

    /// Pixel scale per module
    #[arg(long, default_value = "10")]
    pub box_size: u32,

    /// Quiet-zone width in modules
    #[arg(long, default_value = "4")]
    pub border_size: u32,

    /// Directory the PNG is written to
    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Print the QR code to the terminal as well")]
    pub preview: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            ec_level: self.ec_level,
            box_size: self.box_size,
            border_size: self.border_size,
        }
    }
}

impl Validate for CliConfig {
    // Recommended UI ranges. The encoder itself accepts any positive
    // box size and non-negative border; only the CLI boundary narrows them.
    fn validate(&self) -> Result<()> {
        validate_range("box-size", self.box_size, 5, 20)?;
        validate_range("border-size", self.border_size, 1, 10)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(box_size: u32, border_size: u32) -> CliConfig {
        CliConfig {
            url: "example.com".to_string(),
            ec_level: ErrorCorrection::M,
            box_size,
            border_size,
            output_path: ".".to_string(),
            preview: false,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(config(10, 4).validate().is_ok());
    }

    #[test]
    fn test_range_boundaries() {
        assert!(config(5, 1).validate().is_ok());
        assert!(config(20, 10).validate().is_ok());
        assert!(config(4, 4).validate().is_err());
        assert!(config(21, 4).validate().is_err());
        assert!(config(10, 0).validate().is_err());
        assert!(config(10, 11).validate().is_err());
    }

    #[test]
    fn test_encode_options_mirror_config() {
        let opts = config(7, 2).encode_options();
        assert_eq!(opts.box_size, 7);
        assert_eq!(opts.border_size, 2);
        assert_eq!(opts.ec_level, ErrorCorrection::M);
    }
}
