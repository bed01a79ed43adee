use crate::commands::{CmdMessage, CmdResult};
use crate::duration;
use crate::error::Result;
use crate::model::{split_scopes, DowntimePatch};
use crate::remote::DowntimesApi;
use chrono::Utc;

/// Substituted when no message flag is given (or it is empty).
pub const DEFAULT_MESSAGE: &str = "Downtime scheduled by CEPSRE";

/// Translate the create flags into a request payload.
///
/// Scopes are split on commas, the duration becomes an absolute end
/// timestamp measured from now, and the start is left for the remote
/// service to default.
pub fn build_patch(scope: &str, time: &str, message: Option<&str>) -> Result<DowntimePatch> {
    let message = match message {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => DEFAULT_MESSAGE.to_string(),
    };

    Ok(DowntimePatch {
        scope: Some(split_scopes(scope)),
        message: Some(message),
        end: Some(duration::end_timestamp(Utc::now(), time)?),
    })
}

pub fn run<A: DowntimesApi>(
    api: &mut A,
    scope: &str,
    time: &str,
    message: Option<&str>,
    debug: bool,
) -> Result<CmdResult> {
    let patch = build_patch(scope, time, message)?;

    let mut result = CmdResult::default();
    if debug {
        result.add_message(CmdMessage::info(format!(
            "Request payload:\n{}",
            serde_json::to_string_pretty(&patch)?
        )));
    }

    let downtime = api.create_downtime(&patch)?;
    result.add_message(CmdMessage::success(format!(
        "Downtime {} created",
        downtime.id
    )));
    Ok(result.with_downtime(downtime))
}
