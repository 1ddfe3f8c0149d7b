use crate::Error;
use crate::cli::CliCommand;
use ab_block_header::header_registry;
use clap::Parser;

/// List registered header revisions
#[derive(Debug, Parser)]
pub(crate) struct Tags {}

impl CliCommand for Tags {
    fn run(self) -> Result<(), Error> {
        let registry = header_registry();
        for tag in registry.tags() {
            let type_name = registry.type_name_of(tag).unwrap_or_default();
            println!("{tag}\t{type_name}");
        }

        Ok(())
    }
}
