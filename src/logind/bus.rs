pub const LOGIN1_BUS_NAME: &str = "org.freedesktop.login1";
pub const LOGIN1_MANAGER_PATH: &str = "/org/freedesktop/login1";
pub const LOGIN1_MANAGER_IFACE: &str = "org.freedesktop.login1.Manager";
pub const LOGIN1_SELF_SESSION_PATH: &str = "/org/freedesktop/login1/session/self";
pub const LOGIN1_SESSION_IFACE: &str = "org.freedesktop.login1.Session";
