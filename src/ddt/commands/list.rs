use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::DowntimesApi;

pub fn run<A: DowntimesApi>(api: &A, debug: bool) -> Result<CmdResult> {
    let downtimes = api.list_downtimes()?;

    let mut result = CmdResult::default();
    if debug {
        result.add_message(CmdMessage::info(format!(
            "Raw response:\n{}",
            serde_json::to_string_pretty(&downtimes)?
        )));
    }
    if downtimes.is_empty() {
        result.add_message(CmdMessage::info("No downtimes found."));
    }
    Ok(result.with_downtimes(downtimes))
}
