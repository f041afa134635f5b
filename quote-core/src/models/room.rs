use serde::{Deserialize, Serialize};

/// Highest quantity a single room counter accepts.
pub const MAX_ROOM_QUANTITY: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    MasterSuite,
    Suite,
    Bedroom,
    LivingRoom,
    Office,
    Kitchen,
    DiningRoom,
    PowderRoom,
    HomeTheater,
    GourmetArea,
    CoveredGarage,
    Closet,
    Storage,
    Pool,
}

impl RoomKind {
    pub const ALL: [RoomKind; 14] = [
        Self::MasterSuite,
        Self::Suite,
        Self::Bedroom,
        Self::LivingRoom,
        Self::Office,
        Self::Kitchen,
        Self::DiningRoom,
        Self::PowderRoom,
        Self::HomeTheater,
        Self::GourmetArea,
        Self::CoveredGarage,
        Self::Closet,
        Self::Storage,
        Self::Pool,
    ];

    /// Built area, in square meters, that one unit of this room adds.
    pub fn area_per_unit(&self) -> u32 {
        match self {
            Self::MasterSuite => 35,
            Self::Suite => 30,
            Self::Bedroom => 16,
            Self::LivingRoom => 20,
            Self::Office => 16,
            Self::Kitchen => 20,
            Self::DiningRoom => 20,
            Self::PowderRoom => 3,
            Self::HomeTheater => 16,
            Self::GourmetArea => 40,
            Self::CoveredGarage => 20,
            Self::Closet => 5,
            Self::Storage => 6,
            Self::Pool => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MasterSuite => "master_suite",
            Self::Suite => "suite",
            Self::Bedroom => "bedroom",
            Self::LivingRoom => "living_room",
            Self::Office => "office",
            Self::Kitchen => "kitchen",
            Self::DiningRoom => "dining_room",
            Self::PowderRoom => "powder_room",
            Self::HomeTheater => "home_theater",
            Self::GourmetArea => "gourmet_area",
            Self::CoveredGarage => "covered_garage",
            Self::Closet => "closet",
            Self::Storage => "storage",
            Self::Pool => "pool",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MasterSuite => "Suíte Master",
            Self::Suite => "Suíte",
            Self::Bedroom => "Quarto",
            Self::LivingRoom => "Sala de Estar",
            Self::Office => "Escritório",
            Self::Kitchen => "Cozinha",
            Self::DiningRoom => "Sala de Jantar",
            Self::PowderRoom => "Lavabo",
            Self::HomeTheater => "Home Theater",
            Self::GourmetArea => "Área Gourmet",
            Self::CoveredGarage => "Garagem Coberta",
            Self::Closet => "Roupeiro",
            Self::Storage => "Depósito",
            Self::Pool => "Piscina",
        }
    }
}

/// Quantity of each room type the client wants.
///
/// Every counter starts at zero. The widget-facing [`increment`] and
/// [`decrement`] saturate at `0..=MAX_ROOM_QUANTITY`; values loaded through
/// [`with`] or deserialization are range-checked by the rooms validator.
///
/// [`increment`]: RoomCounters::increment
/// [`decrement`]: RoomCounters::decrement
/// [`with`]: RoomCounters::with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomCounters {
    pub master_suite: u8,
    pub suite: u8,
    pub bedroom: u8,
    pub living_room: u8,
    pub office: u8,
    pub kitchen: u8,
    pub dining_room: u8,
    pub powder_room: u8,
    pub home_theater: u8,
    pub gourmet_area: u8,
    pub covered_garage: u8,
    pub closet: u8,
    pub storage: u8,
    pub pool: u8,
}

impl RoomCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter; does not enforce the quantity bound.
    pub fn with(
        mut self,
        kind: RoomKind,
        quantity: u8,
    ) -> Self {
        *self.slot_mut(kind) = quantity;
        self
    }

    pub fn get(
        &self,
        kind: RoomKind,
    ) -> u8 {
        match kind {
            RoomKind::MasterSuite => self.master_suite,
            RoomKind::Suite => self.suite,
            RoomKind::Bedroom => self.bedroom,
            RoomKind::LivingRoom => self.living_room,
            RoomKind::Office => self.office,
            RoomKind::Kitchen => self.kitchen,
            RoomKind::DiningRoom => self.dining_room,
            RoomKind::PowderRoom => self.powder_room,
            RoomKind::HomeTheater => self.home_theater,
            RoomKind::GourmetArea => self.gourmet_area,
            RoomKind::CoveredGarage => self.covered_garage,
            RoomKind::Closet => self.closet,
            RoomKind::Storage => self.storage,
            RoomKind::Pool => self.pool,
        }
    }

    /// Adds one unit unless the counter is already at the maximum.
    /// Returns whether the counter changed.
    pub fn increment(
        &mut self,
        kind: RoomKind,
    ) -> bool {
        let slot = self.slot_mut(kind);
        if *slot < MAX_ROOM_QUANTITY {
            *slot += 1;
            true
        } else {
            false
        }
    }

    /// Removes one unit unless the counter is already zero.
    /// Returns whether the counter changed.
    pub fn decrement(
        &mut self,
        kind: RoomKind,
    ) -> bool {
        let slot = self.slot_mut(kind);
        if *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    /// Iterates `(kind, quantity)` in declaration order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (RoomKind, u8)> + '_ {
        RoomKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
    }

    /// Raw sum of all counters, ignoring how large each room is.
    pub fn unit_count(&self) -> u32 {
        self.iter().map(|(_, quantity)| u32::from(quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_count() == 0
    }

    fn slot_mut(
        &mut self,
        kind: RoomKind,
    ) -> &mut u8 {
        match kind {
            RoomKind::MasterSuite => &mut self.master_suite,
            RoomKind::Suite => &mut self.suite,
            RoomKind::Bedroom => &mut self.bedroom,
            RoomKind::LivingRoom => &mut self.living_room,
            RoomKind::Office => &mut self.office,
            RoomKind::Kitchen => &mut self.kitchen,
            RoomKind::DiningRoom => &mut self.dining_room,
            RoomKind::PowderRoom => &mut self.powder_room,
            RoomKind::HomeTheater => &mut self.home_theater,
            RoomKind::GourmetArea => &mut self.gourmet_area,
            RoomKind::CoveredGarage => &mut self.covered_garage,
            RoomKind::Closet => &mut self.closet,
            RoomKind::Storage => &mut self.storage,
            RoomKind::Pool => &mut self.pool,
        }
    }
}

impl FromIterator<(RoomKind, u8)> for RoomCounters {
    /// Later entries for the same kind overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (RoomKind, u8)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |counters, (kind, quantity)| counters.with(kind, quantity))
    }
}
