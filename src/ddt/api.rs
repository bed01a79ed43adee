//! # API Facade
//!
//! Thin facade over the command layer; the single entry point any UI goes
//! through. It dispatches to the right command module and returns
//! structured [`CmdResult`](crate::commands::CmdResult) values — no
//! business logic, no stdout/stderr, no process exits.
//!
//! `DdtApi<A: DowntimesApi>` is generic over the remote boundary:
//! production wires in `remote::http::DatadogClient`, tests wire in
//! `remote::memory::InMemoryApi`.

use crate::commands;
use crate::error::Result;
use crate::remote::DowntimesApi;

pub struct DdtApi<A: DowntimesApi> {
    remote: A,
}

impl<A: DowntimesApi> DdtApi<A> {
    pub fn new(remote: A) -> Self {
        Self { remote }
    }

    /// One credentials check against the remote service.
    pub fn validate(&self) -> Result<()> {
        self.remote.validate()
    }

    pub fn get_downtime(&self, id: i64, debug: bool) -> Result<commands::CmdResult> {
        commands::get::run(&self.remote, id, debug)
    }

    pub fn list_downtimes(&self, debug: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.remote, debug)
    }

    pub fn create_downtime(
        &mut self,
        scope: &str,
        time: &str,
        message: Option<&str>,
        debug: bool,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.remote, scope, time, message, debug)
    }

    pub fn update_downtime(
        &mut self,
        id: i64,
        scope: Option<&str>,
        time: Option<&str>,
        message: Option<&str>,
        debug: bool,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.remote, id, scope, time, message, debug)
    }

    pub fn delete_downtime(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.remote, id)
    }
}
