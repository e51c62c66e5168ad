use crate::control::Bank;
use crate::mem::{AddressableBank, Memory};

/// Routes accesses to one of the two storage arrays by bank tag.
#[derive(Default, Clone)]
pub struct Bus {
  program: AddressableBank,
  data: AddressableBank,
}

impl Bus {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn read(&self, bank: Bank, addr: u8) -> u8 {
    self.map(bank).read(addr)
  }

  pub fn write(&mut self, bank: Bank, addr: u8, val: u8) {
    self.map_mut(bank).write(addr, val);
  }

  pub fn clear(&mut self) {
    self.program.clear();
    self.data.clear();
  }

  pub fn bank(&self, bank: Bank) -> &AddressableBank {
    self.map(bank)
  }

  fn map(&self, bank: Bank) -> &AddressableBank {
    match bank {
      Bank::Program => &self.program,
      Bank::Data => &self.data,
    }
  }

  fn map_mut(&mut self, bank: Bank) -> &mut AddressableBank {
    match bank {
      Bank::Program => &mut self.program,
      Bank::Data => &mut self.data,
    }
  }
}
