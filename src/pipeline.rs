use crate::bus::Bus;
use crate::config::CollisionPolicy;
use crate::control::Bank;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
  #[default]
  Idle,
  AddrLatched,
  ValueReady,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
  pub bank: Bank,
  pub addr: u8,
}

/// Two register stages between the address bus and `uo_out`:
/// the address latch, then the output register.
#[derive(Default, Debug, Clone)]
pub struct ReadPipeline {
  latch: Latch,
  out: u8,
  state: PipelineState,
}

impl ReadPipeline {
  pub fn out(&self) -> u8 { self.out }
  pub fn latch(&self) -> Latch { self.latch }
  pub fn state(&self) -> PipelineState { self.state }

  pub fn reset(&mut self) {
    *self = Self::default();
  }

  /// One clock edge. `write` is the access committed on this same edge;
  /// the policy decides whether the output stage sees it.
  pub fn advance(
    &mut self,
    bus: &mut Bus,
    next: Latch,
    write: Option<u8>,
    policy: CollisionPolicy,
  ) {
    if policy == CollisionPolicy::ReadFirst {
      self.out = bus.read(self.latch.bank, self.latch.addr);
    }

    if let Some(val) = write {
      bus.write(next.bank, next.addr, val);
    }

    if policy == CollisionPolicy::WriteFirst {
      self.out = bus.read(self.latch.bank, self.latch.addr);
    }

    self.latch = next;
    self.state = match self.state {
      PipelineState::Idle => PipelineState::AddrLatched,
      _ => PipelineState::ValueReady,
    };
  }
}
