//! Frameworks Layer: Command-Line Interface
//!
//! Wires the layers together for one run of the `radix_rebase` binary:
//!
//! 1. Build the [`ConversionConfig`](usecases_conversion::ConversionConfig)
//!    from the arguments; an invalid radix is reported here, before any input
//!    is read
//! 2. Read the digit file
//! 3. Convert
//! 4. Write the artifact (or stdout)
//!
//! Nothing is written unless every earlier step succeeded.

pub mod args;
pub mod error;

use std::path::PathBuf;

use adapters_io_operations::{ArtifactWriter, DigitFile};
use tracing::info;
use usecases_conversion::{Conversion, Converter};

pub use args::{ConvertArgs, PolicyArg};
pub use error::CliError;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Conversion report
    pub conversion: Conversion,
    /// Written artifact, `None` when the output went to stdout
    pub artifact: Option<PathBuf>,
}

/// Run one conversion as described by `args`
pub fn run(args: &ConvertArgs) -> Result<RunOutcome, CliError> {
    args.validate().map_err(CliError::InvalidArguments)?;
    let config = args.to_config()?;

    let buffer = DigitFile::read(&args.input)?;
    let conversion = Converter::new(config).convert_buffer(buffer)?;
    info!(
        in_digit_count = conversion.in_digit_count,
        out_digit_count = conversion.out_digit_count,
        "converted"
    );

    let artifact = if args.stdout {
        ArtifactWriter::write_to(std::io::stdout().lock(), &conversion.symbols)?;
        None
    } else {
        let writer = ArtifactWriter::new(args.output_dir());
        let path = writer.write(
            &DigitFile::stem(&args.input),
            conversion.radix,
            conversion.out_digit_count,
            &conversion.symbols,
        )?;
        Some(path)
    };

    Ok(RunOutcome {
        conversion,
        artifact,
    })
}
