use crate::gateway::Posture;

/// Attack style the boss is currently using.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum AttackStyle {
    Magic,
    Missiles,
}

impl AttackStyle {
    /// Posture that blocks this style.
    pub const fn protection(self) -> Posture {
        match self {
            AttackStyle::Magic => Posture::ProtectFromMagic,
            AttackStyle::Missiles => Posture::ProtectFromMissiles,
        }
    }

    const fn flipped(self) -> Self {
        match self {
            AttackStyle::Magic => AttackStyle::Missiles,
            AttackStyle::Missiles => AttackStyle::Magic,
        }
    }
}

/// Attacks the boss makes before switching style.
pub const ATTACKS_PER_STYLE: u8 = 4;

/// Counts boss attacks and flips the style every [`ATTACKS_PER_STYLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackCycle {
    counter: u8,
    style: AttackStyle,
}

impl Default for AttackCycle {
    fn default() -> Self {
        Self {
            counter: 0,
            style: AttackStyle::Missiles,
        }
    }
}

impl AttackCycle {
    pub fn counter(&self) -> u8 {
        self.counter
    }

    pub fn style(&self) -> AttackStyle {
        self.style
    }

    /// Records one boss attack. Returns true when the style flipped.
    pub fn advance(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= ATTACKS_PER_STYLE {
            self.counter = 0;
            self.style = self.style.flipped();
            return true;
        }
        false
    }
}
