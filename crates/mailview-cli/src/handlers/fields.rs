use crate::source::{Mailbox, available_fields};
use anyhow::Result;

pub fn handle(mailbox: &Mailbox) -> Result<()> {
    for field in available_fields(&mailbox.emails) {
        println!("{}", field);
    }
    Ok(())
}
