//! Program launch support.

use std::process::ExitCode;

use crate::core::text::TextValue;
use crate::throw::Throw;
use crate::util::Capabilities;

/// Runs a program entry point.
///
/// An error the entry point never handles is printed as a full cause chain
/// on the error sink, and the launch reports failure status.
pub fn run_entry<F>(caps: &mut Capabilities, args: &[TextValue], entry: F) -> ExitCode
where
    F: FnOnce(&mut Capabilities, &[TextValue]) -> Result<(), Throw>,
{
    match entry(caps, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(uncaught) => {
            uncaught.print_chain(&mut *caps.err);
            ExitCode::FAILURE
        }
    }
}
