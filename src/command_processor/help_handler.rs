//! Help command handler

use super::{CommandArgs, CommandHandler, CommandOutcome, Session};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute<'a>(
        &'a self,
        _args: CommandArgs,
        session: &'a mut Session,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + 'a>> {
        Box::pin(async move {
            session.output.show_help();
            Ok(CommandOutcome::Continue)
        })
    }
    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
    fn priority(&self) -> u32 {
        10
    }
}
