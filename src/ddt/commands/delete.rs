use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::DowntimesApi;

pub fn run<A: DowntimesApi>(api: &mut A, id: i64) -> Result<CmdResult> {
    // The confirmation is only emitted once the cancel call succeeded.
    api.cancel_downtime(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Downtime with ID [ {id} ] deleted successfully!"
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DdtError;
    use crate::model::Downtime;
    use crate::remote::memory::InMemoryApi;

    fn seeded() -> InMemoryApi {
        InMemoryApi::new().with_downtime(Downtime {
            id: 99,
            active: true,
            message: None,
            scope: vec!["env:prod".into()],
            start: Some(100),
            end: None,
        })
    }

    #[test]
    fn cancels_and_confirms() {
        let mut api = seeded();
        let result = run(&mut api, 99).unwrap();
        assert!(!api.contains(99));
        assert_eq!(
            result.messages[0].content,
            "Downtime with ID [ 99 ] deleted successfully!"
        );
    }

    #[test]
    fn no_confirmation_on_failure() {
        let mut api = InMemoryApi::failing();
        let err = run(&mut api, 99).unwrap_err();
        assert!(matches!(err, DdtError::Api { status: 403, .. }));
    }

    #[test]
    fn unknown_id_is_an_api_error() {
        let mut api = InMemoryApi::new();
        let err = run(&mut api, 99).unwrap_err();
        assert!(matches!(err, DdtError::Api { status: 404, .. }));
    }
}
