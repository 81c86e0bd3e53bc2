//! Time conversion handler
//!
//! The fallback for every line no other handler claims: the line is parsed
//! as a time and read back in words.

use super::{CommandArgs, CommandHandler, CommandOutcome, Session};
use crate::{convert_time, parse_time};
use anyhow::Result;
use log::{error, info, warn};
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct TimeHandler;

impl CommandHandler for TimeHandler {
    fn execute<'a>(
        &'a self,
        args: CommandArgs,
        session: &'a mut Session,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + 'a>> {
        Box::pin(async move {
            info!("Executing time conversion for input: '{}'", args.raw);
            let phrase = parse_time(&args.raw)
                .map_err(|e| {
                    error!("Failed to parse time input '{}': {}", args.raw, e);
                    e
                })
                .and_then(|time| convert_time(&time));
            match phrase {
                Ok(phrase) => {
                    info!("Successfully converted input '{}' to '{}'", args.raw, phrase);
                    session.output.show_result(&phrase);
                }
                Err(e) => {
                    warn!("Time conversion failed for input: '{}'", args.raw);
                    session.output.show_error(&e.to_string());
                }
            }
            Ok(CommandOutcome::Continue)
        })
    }
    fn can_handle(&self, _command: &str) -> bool {
        true
    }
    fn priority(&self) -> u32 {
        u32::MAX
    }
}
