//! Exit command handler
//!
//! Handles `exit`, `quit` and `q`.

use super::{CommandArgs, CommandHandler, CommandOutcome, Session};
use anyhow::Result;
use log::info;
use std::future::Future;
use std::pin::Pin;

const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "q"];

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute<'a>(
        &'a self,
        _args: CommandArgs,
        session: &'a mut Session,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + 'a>> {
        Box::pin(async move {
            info!("Exit command received");
            session.output.show_exit();
            Ok(CommandOutcome::Exit)
        })
    }
    fn can_handle(&self, command: &str) -> bool {
        EXIT_KEYWORDS.contains(&command)
    }
    fn priority(&self) -> u32 {
        5
    }
}
