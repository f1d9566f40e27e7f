//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. Every engine knob has a flag;
//! [`ConvertArgs::to_config`] turns them into a [`ConversionConfig`].

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use entities_utilities::Radix;
use usecases_conversion::{ConversionConfig, DigitMargin, PadPolicy, RescalePolicy};

use crate::error::CliError;

/// Rescaling strategy as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Fast exponentiation, one multiply and one divide
    Exact,
    /// Repeated single-digit multiply and divide
    Iterative,
}

impl From<PolicyArg> for RescalePolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Exact => RescalePolicy::ExactPower,
            PolicyArg::Iterative => RescalePolicy::IterativeApproximate,
        }
    }
}

/// Decimal digit string to arbitrary radix converter
#[derive(Parser, Debug)]
#[command(name = "radix_rebase")]
#[command(about = "Convert a decimal digit string into radix 2-62 without inventing precision")]
pub struct ConvertArgs {
    /// File holding the decimal digits
    pub input: PathBuf,

    /// Output radix, 2 to 62
    #[arg(short, long, default_value_t = 27)]
    pub radix: u32,

    /// Drop this many digits from the estimated output count (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub margin: u8,

    /// Rescaling strategy
    #[arg(long, value_enum, default_value_t = PolicyArg::Exact)]
    pub policy: PolicyArg,

    /// Do not left-pad the output to the estimated digit count
    #[arg(long)]
    pub no_pad: bool,

    /// Leading input digits forming the integer part (e.g. 1 for "3" in pi)
    #[arg(long, default_value_t = 0)]
    pub integer_digits: usize,

    /// Directory receiving the output artifact
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the output digits to stdout instead of an artifact
    #[arg(long)]
    pub stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.stdout && self.output_dir.is_some() {
            return Err("Cannot specify both --stdout and --output-dir".to_string());
        }

        Ok(())
    }

    /// Directory receiving the artifact
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Build the engine configuration
    ///
    /// # Errors
    ///
    /// [`CliError::Conversion`] if the radix is out of range.
    pub fn to_config(&self) -> Result<ConversionConfig, CliError> {
        let radix = Radix::new(self.radix).map_err(usecases_conversion::ConversionError::from)?;
        let margin = DigitMargin::from_count(self.margin).ok_or_else(|| {
            CliError::InvalidArguments(format!("margin must be 0 or 1, got {}", self.margin))
        })?;
        let pad = if self.no_pad {
            PadPolicy::None
        } else {
            PadPolicy::ToDigitCount
        };

        Ok(ConversionConfig::new(radix)
            .with_margin(margin)
            .with_rescale_policy(self.policy.into())
            .with_pad_policy(pad)
            .with_integer_digits(self.integer_digits))
    }
}
