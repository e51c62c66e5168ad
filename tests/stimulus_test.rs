#[cfg(test)]
mod stimulus_tests {
  use circular_buffer::CircularBuffer;
  use dualbank_mem::*;
  use config::CollisionPolicy;
  use error::{BenchError, Signal};
  use stimulus::{Step, Stimulus, Testbench};

  #[test]
  fn run_vectors() {
    let mut dir = std::fs::read_dir("./tests/vectors/")
      .expect("directory not found")
      .enumerate();

    let mut files = 0;
    while let Some((i, Ok(f))) = dir.next() {
      let stimulus = Stimulus::from_file(f.path()).expect("couldn't parse stimulus");
      println!("Running file {i}: {:?} ({})", f.file_name(), stimulus.name);

      let mut bench = Testbench::new(stimulus.config);
      let mut last_ten = CircularBuffer::<10, String>::new();

      for (step_idx, step) in stimulus.steps.iter().enumerate() {
        last_ten.push_back(format!("{step_idx}: {step:?} (cycle {})", bench.dut.cycles()));

        if let Err(e) = bench.apply(step_idx, step) {
          for line in last_ten {
            println!("{line}");
          }
          println!("{:?}", bench.dut);
          panic!("{:?}: {e}", f.file_name());
        }
      }
      files += 1;
    }

    assert!(files >= 4);
  }

  #[test]
  fn reference_vector_report() {
    let stimulus = Stimulus::from_file("./tests/vectors/program_memory.json").unwrap();
    let report = Testbench::run(&stimulus).unwrap();
    // 7 reads, 32 reads after reset, two oe checks
    assert_eq!(report.checks, 7 + 32 + 2);
    assert_eq!(report.cycles, 10 + 4 + 4 * 2 + 2 + 3 * 2 + 10 + 32 * 2);
  }

  #[test]
  fn parse_steps() {
    let stimulus = Stimulus::from_json(r#"{
      "name": "parse",
      "config": { "collision": "write_first" },
      "steps": [
        { "drive": { "we": true, "bank": "data", "addr": 3, "data": 9 } },
        { "drive": { "addr": 4 } },
        { "drive_raw": { "control": 200 } },
        { "enable": false },
        { "cycles": 2 },
        { "reset": 10 },
        { "expect": 0 },
        { "expect_oe": 0 },
        { "log": "done" }
      ]
    }"#).unwrap();

    assert_eq!(stimulus.config.collision, CollisionPolicy::WriteFirst);
    assert_eq!(stimulus.steps[0], Step::Drive { we: true, bank: Bank::Data, addr: 3, data: 9 });
    assert_eq!(stimulus.steps[1], Step::Drive { we: false, bank: Bank::Program, addr: 4, data: 0 });
    assert_eq!(stimulus.steps[2], Step::DriveRaw { control: 200, data: 0 });
    assert_eq!(stimulus.steps[5], Step::Reset(10));
    assert_eq!(stimulus.steps.len(), 9);
  }

  #[test]
  fn missing_config_uses_default() {
    let stimulus = Stimulus::from_json(r#"{ "name": "bare", "steps": [] }"#).unwrap();
    assert_eq!(stimulus.config.collision, CollisionPolicy::ReadFirst);
    assert_eq!(Testbench::run(&stimulus).unwrap().checks, 0);
  }

  #[test]
  fn mismatch_names_the_step() {
    let stimulus = Stimulus {
      name: "broken".into(),
      config: Default::default(),
      steps: vec![
        Step::Drive { we: true, bank: Bank::Data, addr: 2, data: 0x42 },
        Step::Cycles(1),
        Step::Drive { we: false, bank: Bank::Program, addr: 2, data: 0 },
        Step::Cycles(2),
        Step::Expect(0x42),
      ],
    };

    match Testbench::run(&stimulus) {
      Err(BenchError::Mismatch { step, cycle, signal, expected, found }) => {
        assert_eq!(step, 4);
        assert_eq!(cycle, 3);
        assert_eq!(signal, Signal::UoOut);
        assert_eq!(expected, 0x42);
        assert_eq!(found, 0);
      }
      other => panic!("expected mismatch, got {other:?}"),
    }
  }

  #[test]
  fn bad_json_is_an_error() {
    let err = Stimulus::from_json(r#"{ "name": "x", "steps": [ { "jump": 1 } ] }"#).unwrap_err();
    assert!(matches!(err, BenchError::Json(_)));

    let err = Stimulus::from_file("./tests/vectors/does_not_exist.json").unwrap_err();
    assert!(matches!(err, BenchError::Io(_)));
  }
}
