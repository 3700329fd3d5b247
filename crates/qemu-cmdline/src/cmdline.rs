//! Core option/property model for QEMU command lines.
//!
//! QEMU options all follow the same shape: a dashed flag, an optional bare
//! name token, and zero or more comma-separated `key=value` properties, e.g.
//! `-accel kvm,kernel-irqchip=on`. This module provides the generic
//! [`QemuOption`]/[`Property`] pair that every domain catalog in this crate
//! builds on.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

/// A single typed value attached to a [`Property`].
///
/// QEMU spells booleans as `on`/`off` on the command line, so rendering a
/// boolean value never produces `true`/`false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Boolean, rendered as `on` or `off`.
    Bool(bool),
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    Uint(u64),
    /// Literal string, rendered as-is.
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(true) => f.write_str("on"),
            PropertyValue::Bool(false) => f.write_str("off"),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Uint(v) => write!(f, "{}", v),
            PropertyValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<u8> for PropertyValue {
    fn from(v: u8) -> Self {
        PropertyValue::Uint(v.into())
    }
}

impl From<u16> for PropertyValue {
    fn from(v: u16) -> Self {
        PropertyValue::Uint(v.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(v: u32) -> Self {
        PropertyValue::Uint(v.into())
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        PropertyValue::Uint(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Str(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.to_owned())
    }
}

impl From<&Utf8Path> for PropertyValue {
    fn from(v: &Utf8Path) -> Self {
        PropertyValue::Str(v.as_str().to_owned())
    }
}

impl From<Utf8PathBuf> for PropertyValue {
    fn from(v: Utf8PathBuf) -> Self {
        PropertyValue::Str(v.into_string())
    }
}

/// One `key=value` parameter attached to a [`QemuOption`].
///
/// Values containing commas are not escaped here; QEMU's convention is that
/// the caller doubles them (`,,`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: PropertyValue,
}

impl Property {
    /// Create a property. The key must be non-empty.
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "property key must be non-empty");
        Self {
            key,
            value: value.into(),
        }
    }

    /// The property key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The property value.
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A single top-level QEMU command-line flag and its comma-separated
/// parameters.
///
/// Property serialization order exactly matches insertion order; QEMU's own
/// parser is order-sensitive for some flags (throttling groups among them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QemuOption {
    flag: String,
    name: Option<String>,
    properties: Vec<Property>,
    dashed: bool,
}

impl QemuOption {
    /// Create an option for `flag`, given without the leading dash; the dash
    /// is added at render time.
    pub fn new(flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            name: None,
            properties: Vec::new(),
            dashed: true,
        }
    }

    /// Create a bare token that renders without the leading dash.
    ///
    /// This covers the few positional operands QEMU accepts, such as a guest
    /// disk image given directly as the last argument.
    pub fn bare(token: impl Into<String>) -> Self {
        Self {
            flag: token.into(),
            name: None,
            properties: Vec::new(),
            dashed: false,
        }
    }

    /// Set the bare name token emitted before any properties
    /// (the `kvm` in `-accel kvm,kernel-irqchip=on`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a property; insertion order is preserved in the output.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Append an already-built [`Property`].
    pub fn push_property(&mut self, property: Property) -> &mut Self {
        self.properties.push(property);
        self
    }

    /// The flag name, without the leading dash.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The bare name token, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The attached properties, in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Render as argv tokens: `["-flag", "name,k1=v1,k2=v2"]`.
    ///
    /// The second token is omitted entirely when there is neither a name nor
    /// any properties; an empty name is skipped so properties never gain a
    /// leading comma. Rendering is read-only and idempotent.
    pub fn args(&self) -> Vec<String> {
        let flag = if self.dashed {
            format!("-{}", self.flag)
        } else {
            self.flag.clone()
        };

        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                parts.push(name.to_owned());
            }
        }
        parts.extend(self.properties.iter().map(|p| p.to_string()));

        if parts.is_empty() {
            vec![flag]
        } else {
            vec![flag, parts.join(",")]
        }
    }

    /// Space-joined form of [`QemuOption::args`], for display and tests.
    pub fn line(&self) -> String {
        self.args().join(" ")
    }
}

impl fmt::Display for QemuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_renders_on_off() {
        assert_eq!(Property::new("readonly", true).to_string(), "readonly=on");
        assert_eq!(Property::new("readonly", false).to_string(), "readonly=off");
    }

    #[test]
    fn test_int_and_string_values() {
        assert_eq!(Property::new("bps", 50u64).to_string(), "bps=50");
        assert_eq!(Property::new("val", -1i64).to_string(), "val=-1");
        assert_eq!(
            Property::new("file", "disk.img").to_string(),
            "file=disk.img"
        );
    }

    #[test]
    fn test_name_only_option() {
        let opt = QemuOption::new("accel").with_name("kvm");
        assert_eq!(opt.line(), "-accel kvm");
    }

    #[test]
    fn test_flag_only_option() {
        let opt = QemuOption::new("nodefaults");
        assert_eq!(opt.args(), vec!["-nodefaults".to_owned()]);
    }

    #[test]
    fn test_empty_name_gets_no_leading_comma() {
        let opt = QemuOption::new("drive")
            .with_name("")
            .property("file", "disk.img");
        assert_eq!(opt.line(), "-drive file=disk.img");
    }

    #[test]
    fn test_property_order_preserved() {
        let opt = QemuOption::new("chardev")
            .with_name("spicevmc")
            .property("id", "usbredirchardev1")
            .property("name", "usbredir");
        assert_eq!(opt.line(), "-chardev spicevmc,id=usbredirchardev1,name=usbredir");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let opt = QemuOption::new("accel")
            .with_name("kvm")
            .property("kernel-irqchip", "on");
        assert_eq!(opt.args(), opt.args());
        assert_eq!(opt.line(), opt.line());
    }

    #[test]
    fn test_bare_token_has_no_dash() {
        let opt = QemuOption::bare("disk.img");
        assert_eq!(opt.args(), vec!["disk.img".to_owned()]);
    }
}
