//! Setting categories listed in the navigation pane.

/// Fixed, ordered set of categories. The order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Credentials,
    PlanTier,
    Protocol,
    DnsManagement,
    KillSwitch,
    SplitTunneling,
    Purge,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Credentials,
        Category::PlanTier,
        Category::Protocol,
        Category::DnsManagement,
        Category::KillSwitch,
        Category::SplitTunneling,
        Category::Purge,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Credentials => "Username and Password",
            Category::PlanTier => "VPN Plan",
            Category::Protocol => "Default Protocol",
            Category::DnsManagement => "DNS Management",
            Category::KillSwitch => "Kill Switch",
            Category::SplitTunneling => "Split Tunneling",
            Category::Purge => "Purge Configuration",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
