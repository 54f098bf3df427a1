//! Multi-line address list editor state.

use super::TextBuffer;
use crate::validate::AddressRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressListKind {
    DnsServers,
    SplitTunnelExclusions,
}

impl AddressListKind {
    pub(crate) fn rule(self) -> AddressRule {
        match self {
            AddressListKind::DnsServers => AddressRule::Ipv4,
            AddressListKind::SplitTunnelExclusions => AddressRule::Ipv4OrCidr,
        }
    }

    pub(crate) fn prompt(self) -> &'static str {
        match self {
            AddressListKind::DnsServers => "Enter your custom DNS servers, one per line:",
            AddressListKind::SplitTunnelExclusions => "Enter the IPv4 addresses or CIDR ranges to exclude, one per line:",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AddressListEditor {
    pub(crate) kind: AddressListKind,
    pub(crate) buffer: TextBuffer,
    pub(crate) error: Option<String>,
}

impl AddressListEditor {
    /// Seed with one saved entry per line, ending on an empty line.
    pub(crate) fn new(kind: AddressListKind, saved: &[String]) -> Self {
        let mut seed = saved.join("\n");
        if !seed.is_empty() {
            seed.push('\n');
        }

        Self {
            kind,
            buffer: TextBuffer::with_text(&seed),
            error: None,
        }
    }

    /// Enter submits when the cursor sits on an empty trailing line.
    pub(crate) fn enter_submits(&self) -> bool {
        self.buffer.is_empty() || self.buffer.as_str().ends_with('\n')
    }

    pub(crate) fn lines(&self) -> Vec<&str> {
        self.buffer.as_str().split('\n').collect()
    }
}
