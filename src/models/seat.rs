/// State of a single seat in the auditorium.
///
/// `Available`, `Booked`, `Broken` and `Vip` belong to the random-fill layout,
/// where VIP is a seat class. `RegularBooked` and `VipBooked` belong to the
/// VIP-row layout, where VIP is the outcome of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Seat {
    #[default]
    Available,
    Booked,
    Broken,
    Vip,
    RegularBooked,
    VipBooked,
}

impl Seat {
    pub fn is_available(self) -> bool {
        self == Seat::Available
    }

    pub fn is_broken(self) -> bool {
        self == Seat::Broken
    }

    /// Booked, VIP and both booking outcomes count as occupied.
    /// Available and broken seats never do.
    pub fn is_occupied(self) -> bool {
        matches!(
            self,
            Seat::Booked | Seat::Vip | Seat::RegularBooked | Seat::VipBooked
        )
    }

    /// Holds a booking of any kind.
    pub fn is_booked(self) -> bool {
        matches!(self, Seat::Booked | Seat::RegularBooked | Seat::VipBooked)
    }

    /// Numeric code used by the random-fill seating printout.
    pub fn code(self) -> u8 {
        match self {
            Seat::Available => 0,
            Seat::Booked | Seat::RegularBooked => 1,
            Seat::Broken => 2,
            Seat::Vip | Seat::VipBooked => 3,
        }
    }

    /// Letter used by the VIP-row seating layout.
    pub fn symbol(self) -> char {
        match self {
            Seat::Available => '_',
            Seat::Booked | Seat::RegularBooked => 'R',
            Seat::VipBooked | Seat::Vip => 'V',
            Seat::Broken => 'X',
        }
    }
}
