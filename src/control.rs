use bitfield_struct::bitfield;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::mem::BANK_SIZE;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
  pub struct ControlFlags: u8 {
    const we     = 0b1000_0000;
    const select = 0b0100_0000;
    const addr   = 0b0011_1111;
  }
}

impl ControlFlags {
  /// Control byte presenting `addr` on `bank`, with the write strobe if `we`.
  pub fn compose(we: bool, bank: Bank, addr: u8) -> u8 {
    let mut flags = Self::from_bits_retain(addr) & Self::addr;
    flags.set(Self::we, we);
    flags.set(Self::select, bank == Bank::Data);
    flags.bits()
  }
}

/// Decoded view of the `ui_in` control bus.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct ControlWord {
  #[bits(6)]
  pub addr: u8,
  pub select: bool,
  pub we: bool,
}

impl ControlWord {
  pub fn bank(&self) -> Bank {
    Bank::from(self.select())
  }

  /// Address wrapped into the 32 slots a bank holds.
  pub fn slot(&self) -> u8 {
    self.addr() & (BANK_SIZE as u8 - 1)
  }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
  #[default]
  Program,
  Data,
}

impl Bank {
  pub const ALL: [Bank; 2] = [Bank::Program, Bank::Data];
}

impl From<bool> for Bank {
  fn from(select: bool) -> Self {
    if select { Bank::Data } else { Bank::Program }
  }
}

impl std::fmt::Display for Bank {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Bank::Program => write!(f, "program"),
      Bank::Data => write!(f, "data"),
    }
  }
}
