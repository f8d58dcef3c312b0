/// Number of leading rows that allow VIP bookings in the VIP-row layout.
pub const DEFAULT_VIP_ROWS: usize = 2;

/// Seating policy selected when an engine is built.
///
/// The two layouts disagree on what a seat can be, how a group fits and how
/// bookings are placed, so each one keeps its own rules end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Randomly occupied auditorium with broken seats and VIP seats in the
    /// middle band. Groups are placed automatically.
    RandomFill,
    /// Initially empty auditorium whose first `vip_rows` rows accept VIP
    /// bookings. Callers choose the exact block.
    VipRows { vip_rows: usize },
}

impl Profile {
    pub fn vip_rows() -> Self {
        Profile::VipRows { vip_rows: DEFAULT_VIP_ROWS }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::RandomFill => "random_fill",
            Profile::VipRows { .. } => "vip_rows",
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::vip_rows()
    }
}
