pub const BANK_SIZE: usize = 32;

pub trait Memory {
  fn read(&self, addr: u8) -> u8;
  fn write(&mut self, addr: u8, val: u8);
  fn clear(&mut self);
}

/// Fixed 32-byte storage array. Addresses wrap into the array.
#[derive(Clone, PartialEq, Eq)]
pub struct AddressableBank {
  mem: [u8; BANK_SIZE],
}

impl Default for AddressableBank {
  fn default() -> Self {
    Self { mem: [0; BANK_SIZE] }
  }
}

impl AddressableBank {
  fn index(addr: u8) -> usize {
    addr as usize & (BANK_SIZE - 1)
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.mem
  }
}

impl Memory for AddressableBank {
  fn read(&self, addr: u8) -> u8 { self.mem[Self::index(addr)] }
  fn write(&mut self, addr: u8, val: u8) { self.mem[Self::index(addr)] = val; }
  fn clear(&mut self) { self.mem.fill(0); }
}

impl std::fmt::Debug for AddressableBank {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (row, chunk) in self.mem.chunks(8).enumerate() {
      write!(f, "{:02X}:", row * 8)?;
      for byte in chunk {
        write!(f, " {byte:02X}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
