//! Display front ends (`-display`, `-vnc`, `-nographic`).

use camino::Utf8Path;

use crate::cmdline::QemuOption;

/// Graphical front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DisplayKind {
    /// GTK window.
    Gtk,
    /// SDL window.
    Sdl,
    /// Curses rendering on the controlling terminal.
    Curses,
    /// No display output.
    None,
    /// Launch a SPICE client.
    SpiceApp,
    /// Headless EGL rendering for remote access.
    EglHeadless,
    /// Export the display over D-Bus.
    Dbus,
}

/// Builder for one `-display` option.
#[derive(Debug, Clone)]
pub struct Display {
    opt: QemuOption,
}

impl Display {
    /// Select a display front end.
    pub fn new(kind: DisplayKind) -> Self {
        Self {
            opt: QemuOption::new("display").with_name(kind.to_string()),
        }
    }

    /// Enable OpenGL acceleration.
    pub fn gl(mut self, gl: bool) -> Self {
        self.opt = self.opt.property("gl", gl);
        self
    }
}

impl From<Display> for QemuOption {
    fn from(d: Display) -> Self {
        d.opt
    }
}

/// Disable graphical output and redirect the serial console to the terminal
/// (`-nographic`).
pub fn nographic() -> QemuOption {
    QemuOption::new("nographic")
}

/// How concurrent VNC clients share the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SharePolicy {
    /// A client may request exclusive access, dropping the others.
    AllowExclusive,
    /// All clients see the same session; exclusive requests are refused.
    ForceShared,
    /// Ignore share requests entirely.
    Ignore,
}

/// Builder for one `-vnc` option.
#[derive(Debug, Clone)]
pub struct Vnc {
    opt: QemuOption,
}

impl Vnc {
    fn with_listen(listen: String) -> Self {
        Self {
            opt: QemuOption::new("vnc").with_name(listen),
        }
    }

    /// Listen on all interfaces at display number `n` (TCP port 5900+n).
    pub fn display(n: u16) -> Self {
        Self::with_listen(format!(":{}", n))
    }

    /// Listen on `host` at display number `n`.
    pub fn host_display(host: impl Into<String>, n: u16) -> Self {
        Self::with_listen(format!("{}:{}", host.into(), n))
    }

    /// Listen on a Unix socket.
    pub fn unix(path: impl AsRef<Utf8Path>) -> Self {
        Self::with_listen(format!("unix:{}", path.as_ref()))
    }

    /// Start the VNC server without listening; a listener can be added later
    /// over the monitor.
    pub fn none() -> Self {
        Self::with_listen("none".to_owned())
    }

    /// Require password authentication (set the password via the monitor).
    pub fn password(mut self, password: bool) -> Self {
        self.opt = self.opt.property("password", password);
        self
    }

    /// Also listen for websocket connections on the given port.
    pub fn websocket(mut self, port: u16) -> Self {
        self.opt = self.opt.property("websocket", port);
        self
    }

    /// Enable lossy compression.
    pub fn lossy(mut self, lossy: bool) -> Self {
        self.opt = self.opt.property("lossy", lossy);
        self
    }

    /// Set the client sharing policy.
    pub fn share(mut self, policy: SharePolicy) -> Self {
        self.opt = self.opt.property("share", policy.to_string());
        self
    }

    /// Allow clients to control VM power state.
    pub fn power_control(mut self, allow: bool) -> Self {
        self.opt = self.opt.property("power-control", allow);
        self
    }
}

impl From<Vnc> for QemuOption {
    fn from(v: Vnc) -> Self {
        v.opt
    }
}
