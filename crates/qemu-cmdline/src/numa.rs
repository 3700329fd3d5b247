//! NUMA topology (`-numa node`, `-numa dist`, `-numa hmat-lb`).

use color_eyre::eyre::bail;
use color_eyre::Result;

use crate::cmdline::QemuOption;

/// Builder for one `-numa node` option.
#[derive(Debug, Clone)]
pub struct NumaNode {
    opt: QemuOption,
}

impl NumaNode {
    /// Declare a NUMA node with the given id.
    pub fn new(nodeid: u32) -> Self {
        Self {
            opt: QemuOption::new("numa")
                .with_name("node")
                .property("nodeid", nodeid),
        }
    }

    /// Back the node with a previously declared memory backend.
    pub fn memdev(mut self, id: impl Into<String>) -> Self {
        self.opt = self.opt.property("memdev", id.into());
        self
    }

    /// Legacy memory size for the node, e.g. `2G` (prefer [`NumaNode::memdev`]).
    pub fn mem(mut self, size: impl Into<String>) -> Self {
        self.opt = self.opt.property("mem", size.into());
        self
    }

    /// Assign CPUs to the node.
    ///
    /// QEMU's `cpus=` accepts a single index or an inclusive `first-last`
    /// range, so `cpus` must hold exactly one or two entries.
    pub fn cpus(mut self, cpus: &[u32]) -> Result<Self> {
        let rendered = match cpus {
            [index] => index.to_string(),
            [first, last] => format!("{}-{}", first, last),
            _ => bail!(
                "a NUMA cpus assignment takes one CPU index or a first/last pair, got {} values",
                cpus.len()
            ),
        };
        self.opt = self.opt.property("cpus", rendered);
        Ok(self)
    }
}

impl From<NumaNode> for QemuOption {
    fn from(n: NumaNode) -> Self {
        n.opt
    }
}

/// Inter-node distance (`-numa dist,src=..,dst=..,val=..`).
pub fn distance(src: u32, dst: u32, val: u8) -> QemuOption {
    QemuOption::new("numa")
        .with_name("dist")
        .property("src", src)
        .property("dst", dst)
        .property("val", val)
}

/// Memory hierarchy level an HMAT entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Hierarchy {
    /// Directly attached memory.
    Memory,
    /// First-level memory-side cache.
    FirstLevel,
    /// Second-level memory-side cache.
    SecondLevel,
    /// Third-level memory-side cache.
    ThirdLevel,
}

/// Builder for one `-numa hmat-lb` latency/bandwidth entry.
///
/// A link describes either its access latency or its bandwidth, never both;
/// [`HmatLb::build`] enforces that exactly one was set.
#[derive(Debug, Clone)]
pub struct HmatLb {
    initiator: u32,
    target: u32,
    hierarchy: Hierarchy,
    latency_ns: Option<u64>,
    bandwidth_bytes: Option<u64>,
}

impl HmatLb {
    /// Describe the link from initiator node to target node at the given
    /// hierarchy level.
    pub fn new(initiator: u32, target: u32, hierarchy: Hierarchy) -> Self {
        Self {
            initiator,
            target,
            hierarchy,
            latency_ns: None,
            bandwidth_bytes: None,
        }
    }

    /// Access latency in nanoseconds.
    pub fn latency_ns(mut self, ns: u64) -> Self {
        self.latency_ns = Some(ns);
        self
    }

    /// Access bandwidth in bytes per second.
    pub fn bandwidth_bytes(mut self, bytes: u64) -> Self {
        self.bandwidth_bytes = Some(bytes);
        self
    }

    /// Finalize into a `-numa hmat-lb` option.
    pub fn build(self) -> Result<QemuOption> {
        let opt = QemuOption::new("numa")
            .with_name("hmat-lb")
            .property("initiator", self.initiator)
            .property("target", self.target)
            .property("hierarchy", self.hierarchy.to_string());

        match (self.latency_ns, self.bandwidth_bytes) {
            (Some(_), Some(_)) => {
                bail!("latency and bandwidth are mutually exclusive on one HMAT link")
            }
            (None, None) => bail!("an HMAT link needs either a latency or a bandwidth"),
            (Some(ns), None) => Ok(opt
                .property("data-type", "access-latency")
                .property("latency", ns)),
            (None, Some(bytes)) => Ok(opt
                .property("data-type", "access-bandwidth")
                .property("bandwidth", bytes)),
        }
    }
}
