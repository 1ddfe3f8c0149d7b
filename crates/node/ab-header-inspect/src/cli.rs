pub(crate) mod decode;
pub(crate) mod sample;
pub(crate) mod tags;

use crate::Error;

pub(crate) trait CliCommand {
    /// Run the command
    fn run(self) -> Result<(), Error>;
}
