use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::DowntimesApi;

pub fn run<A: DowntimesApi>(api: &A, id: i64, debug: bool) -> Result<CmdResult> {
    let downtime = api.get_downtime(id)?;

    let mut result = CmdResult::default();
    if debug {
        result.add_message(CmdMessage::info(format!(
            "Raw response:\n{}",
            serde_json::to_string_pretty(&downtime)?
        )));
    }
    Ok(result.with_downtime(downtime))
}
