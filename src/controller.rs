use log::{debug, trace};

use crate::bus::Bus;
use crate::config::ControllerConfig;
use crate::control::{Bank, ControlWord};
use crate::mem::AddressableBank;
use crate::pipeline::{Latch, ReadPipeline};

/// Input pins sampled on each rising clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pins {
  pub ui_in: u8,
  pub uio_in: u8,
  pub ena: bool,
  pub rst_n: bool,
}

impl Default for Pins {
  fn default() -> Self {
    Self { ui_in: 0, uio_in: 0, ena: true, rst_n: true }
  }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs {
  pub uo_out: u8,
  pub uio_out: u8,
  pub uio_oe: u8,
}

/// Dual-bank storage controller. Every state change happens inside `tick`.
#[derive(Default, Clone)]
pub struct MemController {
  bus: Bus,
  pipeline: ReadPipeline,
  config: ControllerConfig,
  cycles: u64,
  in_reset: bool,
}

impl MemController {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ControllerConfig) -> Self {
    debug!("controller config: {config:?}");
    Self { config, ..Default::default() }
  }

  pub fn config(&self) -> ControllerConfig { self.config }

  /// Advances one clock edge and returns `uo_out` after it.
  pub fn tick(&mut self, control: u8, data_in: u8, reset: bool, enable: bool) -> u8 {
    self.cycles += 1;

    if reset {
      if !self.in_reset {
        debug!("[{}] reset asserted", self.cycles);
      }
      self.in_reset = true;
      self.reset();
      return self.out();
    }
    self.in_reset = false;

    if !enable { return self.out(); }

    let word = ControlWord::from(control);
    let next = Latch { bank: word.bank(), addr: word.slot() };
    let write = word.we().then_some(data_in);

    if let Some(val) = write {
      trace!("[{}] write {}[{:02X}] <- {val:02X}", self.cycles, next.bank, next.addr);
    }

    self.pipeline.advance(&mut self.bus, next, write, self.config.collision);
    trace!("[{}] latch {}[{:02X}], out {:02X}",
      self.cycles, next.bank, next.addr, self.pipeline.out());

    self.out()
  }

  /// Pin-level view of `tick`.
  pub fn step(&mut self, pins: &Pins) -> Outputs {
    self.tick(pins.ui_in, pins.uio_in, !pins.rst_n, pins.ena);
    self.outputs()
  }

  pub fn reset(&mut self) {
    self.bus.clear();
    self.pipeline.reset();
  }

  pub fn out(&self) -> u8 { self.pipeline.out() }

  /// `uio` is input-only, its output enable is never driven.
  pub fn oe(&self) -> u8 { 0 }

  pub fn outputs(&self) -> Outputs {
    Outputs { uo_out: self.out(), uio_out: 0, uio_oe: self.oe() }
  }

  pub fn pipeline(&self) -> &ReadPipeline { &self.pipeline }
  pub fn cycles(&self) -> u64 { self.cycles }

  /// Reads storage without going through the clocked path.
  pub fn peek(&self, bank: Bank, addr: u8) -> u8 {
    self.bus.read(bank, addr)
  }

  pub fn bank(&self, bank: Bank) -> &AddressableBank {
    self.bus.bank(bank)
  }
}

impl std::fmt::Debug for MemController {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "cycle {} {:?} out {:02X}", self.cycles, self.pipeline.state(), self.out())?;
    for bank in Bank::ALL {
      writeln!(f, "{bank}:")?;
      write!(f, "{:?}", self.bank(bank))?;
    }
    Ok(())
  }
}
