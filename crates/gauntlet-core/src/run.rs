use crate::gateway::{Gateway, Vital};
use crate::variant::Variant;

/// Latest vital readings, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vitals {
    pub health: u8,
    pub prayer: u8,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: 100,
            prayer: 100,
        }
    }
}

impl Vitals {
    pub fn read(env: &dyn Gateway) -> Self {
        Self {
            health: env.read_vital(Vital::Health),
            prayer: env.read_vital(Vital::Prayer),
        }
    }
}

/// Run-level flags owned by the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunState {
    pub active: bool,
    pub variant: Variant,
    pub starting_room_confirmed: bool,
    pub vitals: Vitals,
}

impl RunState {
    pub fn new(variant: Variant) -> Self {
        Self {
            active: true,
            variant,
            starting_room_confirmed: false,
            vitals: Vitals::default(),
        }
    }

    pub fn refresh_vitals(&mut self, env: &dyn Gateway) {
        self.vitals = Vitals::read(env);
    }

    /// Clears per-run flags so the next run starts with a fresh entry check.
    pub fn reset_for_new_run(&mut self) {
        self.starting_room_confirmed = false;
    }
}
