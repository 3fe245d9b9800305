use chrono::TimeZone as _;

use crate::logind;

const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const MSG_NO_SCHEDULED_TASKS: &str = "The system has no scheduled tasks.";
pub const MSG_SCHEDULE_NOT_RETRIEVED: &str = "The data of scheduled tasks was not retrieved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LogOut,
    PowerOff,
    Reboot,
    Suspend,
    Hibernate,
    HybridSleep,
}

impl Action {
    /// Menu order, top to bottom.
    pub const ALL: [Action; 6] = [
        Action::LogOut,
        Action::PowerOff,
        Action::Reboot,
        Action::Suspend,
        Action::Hibernate,
        Action::HybridSleep,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::LogOut => "Log Out",
            Action::PowerOff => "Power Off",
            Action::Reboot => "Reboot",
            Action::Suspend => "Suspend",
            Action::Hibernate => "Hibernate",
            Action::HybridSleep => "Hybrid Sleep",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Action::LogOut => "system-log-out",
            Action::PowerOff => "system-shutdown",
            Action::Reboot => "system-reboot",
            Action::Suspend => "system-suspend",
            Action::Hibernate => "system-hibernate",
            Action::HybridSleep => "system-suspend-hibernate",
        }
    }

    /// The capability query member on the manager interface. Logging out is
    /// not gated by one.
    pub fn capability_member(&self) -> Option<&'static str> {
        match self {
            Action::LogOut => None,
            Action::PowerOff => Some("CanPowerOff"),
            Action::Reboot => Some("CanReboot"),
            Action::Suspend => Some("CanSuspend"),
            Action::Hibernate => Some("CanHibernate"),
            Action::HybridSleep => Some("CanHybridSleep"),
        }
    }

    /// The power-management method on the manager interface. Logging out
    /// goes through TerminateSession instead.
    pub fn manager_member(&self) -> Option<&'static str> {
        match self {
            Action::LogOut => None,
            Action::PowerOff => Some("PowerOff"),
            Action::Reboot => Some("Reboot"),
            Action::Suspend => Some("Suspend"),
            Action::Hibernate => Some("Hibernate"),
            Action::HybridSleep => Some("HybridSleep"),
        }
    }

    /// Issues exactly one logind call for this action, or none at all when
    /// the snapshot marked it unavailable. The reply is never inspected; the
    /// session manager's side effects outlive this process anyway.
    pub fn dispatch(&self, logind: &logind::Manager, snapshot: &SessionSnapshot) {
        if !snapshot.availability.allows(*self) {
            warn!(action = self.label(), "Ignoring dispatch of an unavailable action");
            return;
        }

        match self.manager_member() {
            None => logind.terminate_session(&snapshot.session_id),
            Some(member) => logind.power_action(member),
        }
    }
}

/// One flag per gated action, each derived from the matching `CanX` query.
#[derive(Debug, Clone, Copy, Default)]
pub struct Availability {
    pub power_off: bool,
    pub reboot: bool,
    pub suspend: bool,
    pub hibernate: bool,
    pub hybrid_sleep: bool,
}

impl Availability {
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::LogOut => true,
            Action::PowerOff => self.power_off,
            Action::Reboot => self.reboot,
            Action::Suspend => self.suspend,
            Action::Hibernate => self.hibernate,
            Action::HybridSleep => self.hybrid_sleep,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleState {
    /// The property was read and no shutdown is scheduled.
    None,

    /// The property could not be read.
    Unknown,

    /// A shutdown of the given kind is pending at `when_micros` microseconds
    /// since the Unix epoch.
    Scheduled { kind: String, when_micros: u64 },
}

/// Everything the menu needs, captured once at startup. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub availability: Availability,
    pub schedule: ScheduleState,
}

pub fn schedule_message(state: &ScheduleState) -> String {
    match state {
        ScheduleState::None => MSG_NO_SCHEDULED_TASKS.to_owned(),
        ScheduleState::Unknown => MSG_SCHEDULE_NOT_RETRIEVED.to_owned(),
        ScheduleState::Scheduled { kind, when_micros } => format!(
            "The task {}, was scheduled on {}.",
            kind,
            format_schedule_time(*when_micros)
        ),
    }
}

fn format_schedule_time(when_micros: u64) -> String {
    let secs = (when_micros / 1_000_000) as i64;

    match chrono::Local.timestamp_opt(secs, 0).single() {
        Some(time) => time.format(SCHEDULE_TIME_FORMAT).to_string(),
        None => secs.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn log_out_is_always_allowed() {
        let availability = Availability::default();
        assert!(availability.allows(Action::LogOut));
    }

    #[test]
    fn gated_actions_follow_their_own_flag() {
        let availability = Availability {
            power_off: true,
            ..Availability::default()
        };

        assert!(availability.allows(Action::PowerOff));
        assert!(!availability.allows(Action::Reboot));
        assert!(!availability.allows(Action::Suspend));
        assert!(!availability.allows(Action::Hibernate));
        assert!(!availability.allows(Action::HybridSleep));
    }

    #[test]
    fn every_gated_action_has_matching_members() {
        for action in Action::ALL {
            match action {
                Action::LogOut => {
                    assert_eq!(action.capability_member(), None);
                    assert_eq!(action.manager_member(), None);
                }
                _ => {
                    let member = action.manager_member().unwrap();
                    let capability = action.capability_member().unwrap();
                    assert_eq!(capability, format!("Can{}", member));
                }
            }
        }
    }

    #[test]
    fn menu_starts_with_log_out() {
        assert_eq!(Action::ALL[0], Action::LogOut);
        assert_eq!(Action::ALL.len(), 6);
    }

    #[test]
    fn empty_kind_means_no_scheduled_tasks() {
        assert_eq!(schedule_message(&ScheduleState::None), MSG_NO_SCHEDULED_TASKS);
    }

    #[test]
    fn failed_query_has_its_own_message() {
        assert_eq!(
            schedule_message(&ScheduleState::Unknown),
            MSG_SCHEDULE_NOT_RETRIEVED
        );
    }

    #[test]
    fn scheduled_message_names_the_kind_and_truncates_to_seconds() {
        let when_micros = 1_700_000_000_123_456;
        let state = ScheduleState::Scheduled {
            kind: "reboot".to_owned(),
            when_micros,
        };

        let expected_time = chrono::Local
            .timestamp_opt(1_700_000_000, 0)
            .single()
            .unwrap()
            .format(SCHEDULE_TIME_FORMAT)
            .to_string();

        assert_eq!(
            schedule_message(&state),
            format!("The task reboot, was scheduled on {}.", expected_time)
        );
    }

    #[test]
    fn schedule_message_is_a_pure_function_of_its_input() {
        let state = ScheduleState::Scheduled {
            kind: "poweroff".to_owned(),
            when_micros: 1_800_000_000_000_000,
        };

        assert_eq!(schedule_message(&state), schedule_message(&state));
    }
}
