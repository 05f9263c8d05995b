use crate::args::{Cli, Commands};
use crate::{handlers, source};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let mailbox = source::load_mailbox(cli.input.as_deref())?;

    match cli.command {
        Commands::List {
            folder,
            fields,
            limit,
            offset,
            page,
        } => handlers::list::handle(&mailbox, folder, fields, limit, offset, page, cli.format),
        Commands::Read { id, fields } => handlers::read::handle(&mailbox, &id, fields, cli.format),
        Commands::Search {
            query,
            fields,
            limit,
            offset,
            page,
        } => handlers::search::handle(&mailbox, &query, fields, limit, offset, page, cli.format),
        Commands::Fields => handlers::fields::handle(&mailbox),
    }
}
