use serde::{Deserialize, Serialize};

/// A scheduled alert-suppression window, as the remote service returns it.
///
/// Owned and persisted by the remote service; this tool only holds a copy
/// for the lifetime of a single invocation. Timestamps are epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Downtime {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
}

impl Downtime {
    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }
}

/// Partial downtime payload for create and update calls.
///
/// Absent fields are omitted from the serialized body so the remote
/// service keeps their prior value on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DowntimePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// Split a comma-joined scope string into individual tag selectors.
///
/// The `key:value` shape is not validated here; malformed selectors are
/// passed through for the remote service to accept or reject.
pub fn split_scopes(scope: &str) -> Vec<String> {
    scope.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas() {
        assert_eq!(
            split_scopes("env:prod,service:api"),
            vec!["env:prod", "service:api"]
        );
        assert_eq!(split_scopes("env:prod"), vec!["env:prod"]);
    }

    #[test]
    fn split_length_and_rejoin_round_trip() {
        for scope in ["env:prod", "env:prod,service:api", "a,b,c", "", "host:web, host:db"] {
            let parts = split_scopes(scope);
            assert_eq!(parts.len(), scope.matches(',').count() + 1);
            assert_eq!(parts.join(","), scope);
        }
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = DowntimePatch {
            message: Some("maintenance".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"message":"maintenance"}"#);
    }

    #[test]
    fn has_end_tracks_end_field() {
        let mut downtime = Downtime {
            id: 1,
            active: true,
            message: None,
            scope: vec!["env:prod".into()],
            start: Some(100),
            end: None,
        };
        assert!(!downtime.has_end());
        downtime.end = Some(200);
        assert!(downtime.has_end());
    }
}
