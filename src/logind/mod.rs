pub mod bus;

use std::time::Duration;

use dbus::blocking::stdintf::org_freedesktop_dbus::Properties as _;
use dbus::blocking::{Connection, Proxy};

use crate::session::{Action, Availability, ScheduleState, SessionSnapshot};

const CALL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Blocking client for the logind manager object and the calling process's
/// own session object on the system bus.
pub struct Manager {
    connection: Connection,
}

impl Manager {
    pub fn connect() -> Result<Self, dbus::Error> {
        Ok(Self {
            connection: Connection::new_system()?,
        })
    }

    fn manager_proxy(&self) -> Proxy<'_, &Connection> {
        self.connection.with_proxy(
            bus::LOGIN1_BUS_NAME,
            bus::LOGIN1_MANAGER_PATH,
            CALL_TIMEOUT,
        )
    }

    fn session_proxy(&self) -> Proxy<'_, &Connection> {
        self.connection.with_proxy(
            bus::LOGIN1_BUS_NAME,
            bus::LOGIN1_SELF_SESSION_PATH,
            CALL_TIMEOUT,
        )
    }

    /// Queries everything the menu needs in one pass. Capability and
    /// schedule queries degrade to safe defaults; only the session id query
    /// can fail out of here.
    pub fn gather(&self) -> Result<SessionSnapshot, dbus::Error> {
        let session_id = self.session_id()?;

        let availability = Availability {
            power_off: self.capability(Action::PowerOff),
            reboot: self.capability(Action::Reboot),
            suspend: self.capability(Action::Suspend),
            hibernate: self.capability(Action::Hibernate),
            hybrid_sleep: self.capability(Action::HybridSleep),
        };

        let schedule = self.scheduled_shutdown();

        debug!(%session_id, ?availability, ?schedule, "Gathered session snapshot");

        Ok(SessionSnapshot {
            session_id,
            availability,
            schedule,
        })
    }

    fn session_id(&self) -> Result<String, dbus::Error> {
        self.session_proxy().get(bus::LOGIN1_SESSION_IFACE, "Id")
    }

    fn capability(&self, action: Action) -> bool {
        let Some(member) = action.capability_member() else {
            return true;
        };

        let reply: Result<(String,), dbus::Error> =
            self.manager_proxy()
                .method_call(bus::LOGIN1_MANAGER_IFACE, member, ());

        match reply {
            Ok((reply,)) => is_affirmative(&reply),
            Err(err) => {
                debug!(%err, member, "Capability query failed, treating as disabled");
                false
            }
        }
    }

    /// The ScheduledShutdown property is a (kind, microseconds) pair; an
    /// empty kind means nothing is scheduled.
    fn scheduled_shutdown(&self) -> ScheduleState {
        let property: Result<(String, u64), dbus::Error> = self
            .manager_proxy()
            .get(bus::LOGIN1_MANAGER_IFACE, "ScheduledShutdown");

        match property {
            Ok((kind, _)) if kind.is_empty() => ScheduleState::None,
            Ok((kind, when_micros)) => ScheduleState::Scheduled { kind, when_micros },
            Err(err) => {
                warn!(%err, "Failed to read the ScheduledShutdown property");
                ScheduleState::Unknown
            }
        }
    }

    /// Fire-and-forget power-management call with the interactive flag set.
    pub fn power_action(&self, member: &str) {
        let result: Result<(), dbus::Error> =
            self.manager_proxy()
                .method_call(bus::LOGIN1_MANAGER_IFACE, member, (true,));

        if let Err(err) = result {
            debug!(%err, member, "Power action call failed");
        }
    }

    /// Terminates the caller's own session, scoped by the id captured at
    /// startup (terminate-this-session, not terminate-arbitrary-session).
    pub fn terminate_session(&self, session_id: &str) {
        let result: Result<(), dbus::Error> = self.manager_proxy().method_call(
            bus::LOGIN1_MANAGER_IFACE,
            "TerminateSession",
            (session_id,),
        );

        if let Err(err) = result {
            debug!(%err, session_id, "TerminateSession call failed");
        }
    }
}

/// `CanX` replies are strings; only the literal "yes" enables an action.
/// "no", "challenge", "na" and anything else disable it.
pub fn is_affirmative(reply: &str) -> bool {
    reply == "yes"
}

#[cfg(test)]
mod tests {
    use super::is_affirmative;

    #[test]
    fn only_the_literal_yes_enables_an_action() {
        assert!(is_affirmative("yes"));

        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("challenge"));
        assert!(!is_affirmative("na"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("Yes"));
        assert!(!is_affirmative("yes "));
    }
}
