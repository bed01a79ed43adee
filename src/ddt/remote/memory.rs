use crate::error::{DdtError, Result};
use crate::model::{Downtime, DowntimePatch};
use crate::remote::DowntimesApi;
use chrono::Utc;
use std::collections::BTreeMap;

/// In-memory stand-in for the remote service, used in tests.
///
/// The [`failing`](InMemoryApi::failing) variant rejects every call with a
/// 403 so error paths can be exercised without a server.
#[derive(Debug)]
pub struct InMemoryApi {
    downtimes: BTreeMap<i64, Downtime>,
    next_id: i64,
    fail: bool,
}

impl Default for InMemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self {
            downtimes: BTreeMap::new(),
            next_id: 1,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn with_downtime(mut self, downtime: Downtime) -> Self {
        self.next_id = self.next_id.max(downtime.id + 1);
        self.downtimes.insert(downtime.id, downtime);
        self
    }

    pub fn contains(&self, id: i64) -> bool {
        self.downtimes.contains_key(&id)
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(DdtError::Api {
                status: 403,
                body: r#"{"errors":["Forbidden"]}"#.to_string(),
            });
        }
        Ok(())
    }

    fn not_found(id: i64) -> DdtError {
        DdtError::Api {
            status: 404,
            body: format!(r#"{{"errors":["Downtime {id} not found"]}}"#),
        }
    }
}

impl DowntimesApi for InMemoryApi {
    fn validate(&self) -> Result<()> {
        self.check()
    }

    fn get_downtime(&self, id: i64) -> Result<Downtime> {
        self.check()?;
        self.downtimes
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn list_downtimes(&self) -> Result<Vec<Downtime>> {
        self.check()?;
        Ok(self.downtimes.values().cloned().collect())
    }

    fn create_downtime(&mut self, patch: &DowntimePatch) -> Result<Downtime> {
        self.check()?;
        let downtime = Downtime {
            id: self.next_id,
            active: true,
            message: patch.message.clone(),
            scope: patch.scope.clone().unwrap_or_default(),
            // The remote service defaults the start to "now".
            start: Some(Utc::now().timestamp()),
            end: patch.end,
        };
        self.next_id += 1;
        self.downtimes.insert(downtime.id, downtime.clone());
        Ok(downtime)
    }

    fn update_downtime(&mut self, id: i64, patch: &DowntimePatch) -> Result<Downtime> {
        self.check()?;
        let downtime = self
            .downtimes
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(scope) = &patch.scope {
            downtime.scope = scope.clone();
        }
        if let Some(message) = &patch.message {
            downtime.message = Some(message.clone());
        }
        if let Some(end) = patch.end {
            downtime.end = Some(end);
        }
        Ok(downtime.clone())
    }

    fn cancel_downtime(&mut self, id: i64) -> Result<()> {
        self.check()?;
        self.downtimes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
