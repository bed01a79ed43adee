use crate::commands::{CmdMessage, CmdResult};
use crate::duration;
use crate::error::{DdtError, Result};
use crate::model::{split_scopes, DowntimePatch};
use crate::remote::DowntimesApi;
use chrono::Utc;

/// Translate the update flags into a partial payload.
///
/// Only the supplied fields are set; supplying none is a local error and
/// no remote call is made.
pub fn build_patch(
    scope: Option<&str>,
    time: Option<&str>,
    message: Option<&str>,
) -> Result<DowntimePatch> {
    let mut supplied = 0;
    let mut patch = DowntimePatch::default();

    if let Some(scope) = scope {
        supplied += 1;
        patch.scope = Some(split_scopes(scope));
    }
    if let Some(time) = time {
        supplied += 1;
        patch.end = Some(duration::end_timestamp(Utc::now(), time)?);
    }
    if let Some(message) = message {
        supplied += 1;
        patch.message = Some(message.to_string());
    }

    if supplied == 0 {
        return Err(DdtError::Input(
            "must provide at least scope, time or message".to_string(),
        ));
    }
    Ok(patch)
}

pub fn run<A: DowntimesApi>(
    api: &mut A,
    id: i64,
    scope: Option<&str>,
    time: Option<&str>,
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

    let downtime = api.update_downtime(id, &patch)?;
    result.add_message(CmdMessage::success(format!(
        "Downtime {} updated",
        downtime.id
    )));
    Ok(result.with_downtime(downtime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Downtime;
    use crate::remote::memory::InMemoryApi;

    fn seeded() -> InMemoryApi {
        InMemoryApi::new().with_downtime(Downtime {
            id: 42,
            active: true,
            message: Some("original".into()),
            scope: vec!["env:prod".into()],
            start: Some(100),
            end: Some(200),
        })
    }

    #[test]
    fn no_fields_is_rejected_before_the_remote_call() {
        // A failing API proves rejection happens locally.
        let mut api = InMemoryApi::failing();
        let err = run(&mut api, 42, None, None, None, false).unwrap_err();
        assert!(matches!(err, DdtError::Input(_)));
        assert!(err.to_string().contains("scope, time or message"));
    }

    #[test]
    fn message_only_leaves_other_fields_alone() {
        let mut api = seeded();
        let result = run(&mut api, 42, None, None, Some("patched"), false).unwrap();
        let downtime = result.downtime.unwrap();
        assert_eq!(downtime.message.unwrap(), "patched");
        assert_eq!(downtime.scope, vec!["env:prod"]);
        assert_eq!(downtime.end, Some(200));
    }

    #[test]
    fn scope_is_split_on_commas() {
        let mut api = seeded();
        let result = run(&mut api, 42, Some("env:prod,host:web"), None, None, false).unwrap();
        assert_eq!(
            result.downtime.unwrap().scope,
            vec!["env:prod", "host:web"]
        );
    }

    #[test]
    fn time_moves_the_end() {
        let mut api = seeded();
        let before = Utc::now().timestamp();
        let result = run(&mut api, 42, None, Some("1h"), None, false).unwrap();
        let end = result.downtime.unwrap().end.unwrap();
        assert!(end >= before + 3600);
    }

    #[test]
    fn bad_duration_is_a_local_error() {
        let mut api = InMemoryApi::failing();
        let err = run(&mut api, 42, None, Some("soon"), None, false).unwrap_err();
        assert!(matches!(err, DdtError::Duration(_)));
    }

    #[test]
    fn unknown_id_propagates_the_api_error() {
        let mut api = InMemoryApi::new();
        let err = run(&mut api, 42, None, None, Some("patched"), false).unwrap_err();
        assert!(matches!(err, DdtError::Api { status: 404, .. }));
    }
}
