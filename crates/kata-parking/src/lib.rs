//! Parking lot capacity tracker with three fixed slot categories

use kata_core::KataError;
use tracing::debug;

/// Slot category a car needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Big = 1,
    Medium = 2,
    Small = 3,
}

impl TryFrom<i64> for CarType {
    type Error = KataError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Big),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Small),
            _ => Err(KataError::invalid_car_type(code)),
        }
    }
}

impl std::fmt::Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Big => "big",
            Self::Medium => "medium",
            Self::Small => "small",
        };
        f.write_str(name)
    }
}

/// Free slot counts per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSystem {
    big: u32,
    medium: u32,
    small: u32,
}

impl ParkingSystem {
    #[must_use]
    pub const fn new(big: u32, medium: u32, small: u32) -> Self {
        Self { big, medium, small }
    }

    /// Park a car, taking one free slot of its category
    ///
    /// Returns `false` and leaves the lot untouched when the category is full.
    pub fn add_car(&mut self, car: CarType) -> bool {
        let slots = self.slots_mut(car);
        if *slots == 0 {
            debug!(%car, "no free slot");
            return false;
        }

        *slots -= 1;
        debug!(%car, remaining = *slots, "car parked");
        true
    }

    /// Free slots left for a category
    #[must_use]
    pub const fn available(&self, car: CarType) -> u32 {
        match car {
            CarType::Big => self.big,
            CarType::Medium => self.medium,
            CarType::Small => self.small,
        }
    }

    fn slots_mut(&mut self, car: CarType) -> &mut u32 {
        match car {
            CarType::Big => &mut self.big,
            CarType::Medium => &mut self.medium,
            CarType::Small => &mut self.small,
        }
    }
}
