use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
  UoOut,
  UioOe,
}

impl std::fmt::Display for Signal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Signal::UoOut => write!(f, "uo_out"),
      Signal::UioOe => write!(f, "uio_oe"),
    }
  }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("stimulus parse error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("step {step} (cycle {cycle}): {signal} expected {expected:#04X}, found {found:#04X}")]
  Mismatch {
    step: usize,
    cycle: u64,
    signal: Signal,
    expected: u8,
    found: u8,
  },
}
