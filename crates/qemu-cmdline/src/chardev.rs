//! Character device backends (`-chardev`).
//!
//! A character device connects a virtual serial/console port to host-side
//! I/O: sockets, files, pipes, the terminal, or a SPICE channel. Every
//! backend requires an `id`, which other options reference; the id is always
//! the first property emitted.

use camino::Utf8Path;

use crate::cmdline::QemuOption;

/// Builder for one `-chardev` option.
#[derive(Debug, Clone)]
pub struct Chardev {
    opt: QemuOption,
}

impl Chardev {
    fn backend(backend: &str, id: impl Into<String>) -> Self {
        Self {
            opt: QemuOption::new("chardev")
                .with_name(backend)
                .property("id", id.into()),
        }
    }

    /// Discard all output, produce no input.
    pub fn null(id: impl Into<String>) -> Self {
        Self::backend("null", id)
    }

    /// Connect to the process's standard input/output.
    pub fn stdio(id: impl Into<String>) -> Self {
        Self::backend("stdio", id)
    }

    /// Allocate a pseudo-terminal on the host.
    pub fn pty(id: impl Into<String>) -> Self {
        Self::backend("pty", id)
    }

    /// A QEMU text console.
    pub fn vc(id: impl Into<String>) -> Self {
        Self::backend("vc", id)
    }

    /// Log output to a host file.
    pub fn file(id: impl Into<String>, path: impl AsRef<Utf8Path>) -> Self {
        Self::backend("file", id).path(path)
    }

    /// Connect to a pair of host named pipes (`path.in`/`path.out`).
    pub fn pipe(id: impl Into<String>, path: impl AsRef<Utf8Path>) -> Self {
        Self::backend("pipe", id).path(path)
    }

    /// Connect to a host serial device such as `/dev/ttyS0`.
    pub fn serial(id: impl Into<String>, path: impl AsRef<Utf8Path>) -> Self {
        Self::backend("serial", id).path(path)
    }

    /// A fixed-size ring buffer readable over the monitor.
    pub fn ringbuf(id: impl Into<String>) -> Self {
        Self::backend("ringbuf", id)
    }

    /// A Unix stream socket at `path`.
    pub fn socket_unix(id: impl Into<String>, path: impl AsRef<Utf8Path>) -> Self {
        Self::backend("socket", id).path(path)
    }

    /// A TCP socket on `host:port`.
    pub fn socket_tcp(id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        let mut this = Self::backend("socket", id);
        this.opt = this.opt.property("host", host.into()).property("port", port);
        this
    }

    /// A UDP socket sending to `host:port`.
    pub fn udp(id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        let mut this = Self::backend("udp", id);
        this.opt = this.opt.property("host", host.into()).property("port", port);
        this
    }

    /// A SPICE virtual machine channel (e.g. `usbredir`, `vdagent`).
    pub fn spicevmc(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut this = Self::backend("spicevmc", id);
        this.opt = this.opt.property("name", name.into());
        this
    }

    /// A SPICE port channel with the given fully-qualified name.
    pub fn spiceport(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut this = Self::backend("spiceport", id);
        this.opt = this.opt.property("name", name.into());
        this
    }

    fn path(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.opt = self.opt.property("path", path.as_ref());
        self
    }

    /// Listen instead of connecting; `wait` blocks startup until a client
    /// connects (socket backends).
    pub fn server(mut self, wait: bool) -> Self {
        self.opt = self.opt.property("server", true).property("wait", wait);
        self
    }

    /// Use the telnet protocol instead of raw bytes (socket backends).
    pub fn telnet(mut self, telnet: bool) -> Self {
        self.opt = self.opt.property("telnet", telnet);
        self
    }

    /// Allow multiple front ends to share this backend.
    pub fn mux(mut self, mux: bool) -> Self {
        self.opt = self.opt.property("mux", mux);
        self
    }

    /// Also log all traffic to a host file.
    pub fn logfile(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.opt = self.opt.property("logfile", path.as_ref());
        self
    }

    /// Whether the stdio backend forwards terminal signals (Ctrl-C) to QEMU.
    pub fn signal(mut self, signal: bool) -> Self {
        self.opt = self.opt.property("signal", signal);
        self
    }

    /// Ring buffer capacity in bytes (ringbuf backend).
    pub fn size(mut self, bytes: u64) -> Self {
        self.opt = self.opt.property("size", bytes);
        self
    }
}

impl From<Chardev> for QemuOption {
    fn from(c: Chardev) -> Self {
        c.opt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spicevmc_usbredir() {
        let opt = QemuOption::from(Chardev::spicevmc("usbredirchardev1", "usbredir"));
        assert_eq!(
            opt.line(),
            "-chardev spicevmc,id=usbredirchardev1,name=usbredir"
        );
    }

    #[test]
    fn test_unix_socket_server() {
        let opt = QemuOption::from(
            Chardev::socket_unix("mon0", "/tmp/qemu-mon.sock").server(false),
        );
        assert_eq!(
            opt.line(),
            "-chardev socket,id=mon0,path=/tmp/qemu-mon.sock,server=on,wait=off"
        );
    }

    #[test]
    fn test_stdio_without_signal_forwarding() {
        let opt = QemuOption::from(Chardev::stdio("con0").signal(false));
        assert_eq!(opt.line(), "-chardev stdio,id=con0,signal=off");
    }

    #[test]
    fn test_tcp_socket() {
        let opt = QemuOption::from(Chardev::socket_tcp("net0", "127.0.0.1", 4444).telnet(true));
        assert_eq!(
            opt.line(),
            "-chardev socket,id=net0,host=127.0.0.1,port=4444,telnet=on"
        );
    }
}
