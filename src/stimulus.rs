use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;
use crate::control::{Bank, ControlFlags};
use crate::controller::{MemController, Pins};
use crate::error::{BenchError, Result, Signal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
  Drive {
    #[serde(default)]
    we: bool,
    #[serde(default)]
    bank: Bank,
    addr: u8,
    #[serde(default)]
    data: u8,
  },
  DriveRaw {
    control: u8,
    #[serde(default)]
    data: u8,
  },
  Enable(bool),
  Cycles(usize),
  /// Holds `rst_n` low for this many cycles, then releases it.
  Reset(usize),
  Expect(u8),
  ExpectOe(u8),
  Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stimulus {
  pub name: String,
  #[serde(default)]
  pub config: ControllerConfig,
  pub steps: Vec<Step>,
}

impl Stimulus {
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let json = std::fs::read_to_string(path)?;
    Self::from_json(&json)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
  pub cycles: u64,
  pub checks: usize,
}

/// Holds the pin levels between clock edges, like a simulator would.
pub struct Testbench {
  pub dut: MemController,
  pub pins: Pins,
  checks: usize,
}

impl Testbench {
  pub fn new(config: ControllerConfig) -> Self {
    Self {
      dut: MemController::with_config(config),
      pins: Pins::default(),
      checks: 0,
    }
  }

  pub fn drive(&mut self, control: u8, data: u8) {
    self.pins.ui_in = control;
    self.pins.uio_in = data;
  }

  pub fn cycles(&mut self, n: usize) {
    for _ in 0..n {
      self.dut.step(&self.pins);
    }
  }

  pub fn reset(&mut self, n: usize) {
    self.pins.rst_n = false;
    self.cycles(n);
    self.pins.rst_n = true;
  }

  pub fn report(&self) -> Report {
    Report { cycles: self.dut.cycles(), checks: self.checks }
  }

  fn check(&mut self, step: usize, signal: Signal, expected: u8) -> Result<()> {
    self.checks += 1;
    let found = match signal {
      Signal::UoOut => self.dut.out(),
      Signal::UioOe => self.dut.oe(),
    };

    if found != expected {
      return Err(BenchError::Mismatch {
        step, cycle: self.dut.cycles(), signal, expected, found,
      });
    }
    Ok(())
  }

  pub fn apply(&mut self, index: usize, step: &Step) -> Result<()> {
    match step {
      Step::Drive { we, bank, addr, data } => {
        self.drive(ControlFlags::compose(*we, *bank, *addr), *data)
      }
      Step::DriveRaw { control, data } => self.drive(*control, *data),
      Step::Enable(ena) => self.pins.ena = *ena,
      Step::Cycles(n) => self.cycles(*n),
      Step::Reset(n) => self.reset(*n),
      Step::Expect(val) => self.check(index, Signal::UoOut, *val)?,
      Step::ExpectOe(val) => self.check(index, Signal::UioOe, *val)?,
      Step::Log(msg) => info!("{msg}"),
    }
    Ok(())
  }

  pub fn run(stimulus: &Stimulus) -> Result<Report> {
    info!("running '{}' ({} steps)", stimulus.name, stimulus.steps.len());
    let mut bench = Self::new(stimulus.config);

    for (i, step) in stimulus.steps.iter().enumerate() {
      bench.apply(i, step)?;
    }

    let report = bench.report();
    info!("'{}' passed: {} checks over {} cycles", stimulus.name, report.checks, report.cycles);
    Ok(report)
  }
}
