//! Trial runner interaction tests with scripted collaborators.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use coldread::{
    BenchmarkError, CacheInvalidator, Clock, Config, MatrixHandle, MatrixLoadProbe, TrialRunner,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Invalidate,
    Load,
    Release,
}

type EventLog = Rc<RefCell<Vec<Event>>>;

/// Clock advancing by a fixed step on every read.
struct StepClock {
    now: f64,
    step: f64,
}

impl StepClock {
    fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl Clock for StepClock {
    fn now_secs(&mut self) -> f64 {
        let t = self.now;
        self.now += self.step;
        t
    }
}

struct LoggingInvalidator {
    log: EventLog,
    fail: bool,
}

impl CacheInvalidator for LoggingInvalidator {
    fn invalidate(&mut self) -> Result<(), BenchmarkError> {
        self.log.borrow_mut().push(Event::Invalidate);
        if self.fail {
            return Err(BenchmarkError::CacheFlush("scripted failure".into()));
        }
        Ok(())
    }
}

struct LoggingHandle {
    bytes: u64,
    log: EventLog,
}

impl MatrixHandle for LoggingHandle {
    fn byte_size(&self) -> u64 {
        self.bytes
    }
}

impl Drop for LoggingHandle {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::Release);
    }
}

struct LoggingProbe {
    log: EventLog,
    /// Byte size reported per load, cycled by load count.
    sizes: Vec<u64>,
    loads: usize,
    /// 0-based load index at which to fail, if any.
    fail_at: Option<usize>,
}

impl LoggingProbe {
    fn new(log: EventLog, sizes: Vec<u64>) -> Self {
        Self {
            log,
            sizes,
            loads: 0,
            fail_at: None,
        }
    }
}

impl MatrixLoadProbe for LoggingProbe {
    type Handle = LoggingHandle;

    fn load(&mut self, path: &Path) -> Result<Self::Handle, BenchmarkError> {
        self.log.borrow_mut().push(Event::Load);
        let index = self.loads;
        self.loads += 1;

        if self.fail_at == Some(index) {
            return Err(BenchmarkError::Load {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "scripted failure"),
            });
        }

        Ok(LoggingHandle {
            bytes: self.sizes[index % self.sizes.len()],
            log: Rc::clone(&self.log),
        })
    }
}

#[test]
fn strict_alternation_of_invalidate_load_release() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![4096]);

    let trials = 6;
    let mut runner =
        TrialRunner::new(StepClock::new(0.25), invalidator, Config::new().trials(trials)).unwrap();
    let set = runner.run(&mut probe, Path::new("matrix.h5")).unwrap();

    assert_eq!(set.len(), trials);
    assert_eq!(set.byte_size(), 4096);

    // Exactly `trials` full invalidate -> load -> release cycles, never
    // overlapping.
    let events = log.borrow();
    assert_eq!(events.len(), trials * 3);
    for cycle in events.chunks(3) {
        assert_eq!(cycle, [Event::Invalidate, Event::Load, Event::Release].as_slice());
    }
}

#[test]
fn durations_come_from_the_clock() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![1]);

    // Each trial reads the clock twice, so every duration equals one step.
    let mut runner =
        TrialRunner::new(StepClock::new(0.5), invalidator, Config::new().trials(4)).unwrap();
    let set = runner.run(&mut probe, Path::new("matrix.h5")).unwrap();

    for &d in set.durations_secs() {
        assert!((d - 0.5).abs() < 1e-12);
    }
}

#[test]
fn last_byte_size_persists() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    // Sizes differ across trials; the harness keeps the last one without
    // enforcing equality.
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![100, 200, 300]);

    let mut runner =
        TrialRunner::new(StepClock::new(0.1), invalidator, Config::new().trials(3)).unwrap();
    let set = runner.run(&mut probe, Path::new("matrix.h5")).unwrap();

    assert_eq!(set.byte_size(), 300);
}

#[test]
fn cache_flush_failure_aborts_before_any_load() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: true,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![1]);

    let mut runner =
        TrialRunner::new(StepClock::new(0.1), invalidator, Config::default()).unwrap();
    let err = runner.run(&mut probe, Path::new("matrix.h5")).unwrap_err();

    assert!(matches!(err, BenchmarkError::CacheFlush(_)));
    assert_eq!(*log.borrow(), vec![Event::Invalidate]);
}

#[test]
fn load_failure_aborts_mid_run_without_partial_duration() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![1]);
    probe.fail_at = Some(2);

    let mut runner =
        TrialRunner::new(StepClock::new(0.1), invalidator, Config::new().trials(10)).unwrap();
    let err = runner.run(&mut probe, Path::new("matrix.h5")).unwrap_err();
    assert!(matches!(err, BenchmarkError::Load { .. }));

    // Two complete cycles, then the third trial stops at its failed load.
    let events = log.borrow();
    let expected = vec![
        Event::Invalidate,
        Event::Load,
        Event::Release,
        Event::Invalidate,
        Event::Load,
        Event::Release,
        Event::Invalidate,
        Event::Load,
    ];
    assert_eq!(*events, expected);
}

#[test]
fn backward_clock_surfaces_as_error() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![1]);

    // A decreasing timestamp source must fail the run, never record a
    // negative duration.
    let mut runner =
        TrialRunner::new(StepClock::new(-1.0), invalidator, Config::default()).unwrap();
    let err = runner.run(&mut probe, Path::new("matrix.h5")).unwrap_err();
    assert!(matches!(err, BenchmarkError::ClockAnomaly { .. }));
}

#[test]
fn frozen_clock_surfaces_as_invalid_duration() {
    let log: EventLog = Rc::default();
    let invalidator = LoggingInvalidator {
        log: Rc::clone(&log),
        fail: false,
    };
    let mut probe = LoggingProbe::new(Rc::clone(&log), vec![1]);

    // Zero elapsed subtracts fine but is not a valid trial duration.
    let mut runner =
        TrialRunner::new(StepClock::new(0.0), invalidator, Config::default()).unwrap();
    let err = runner.run(&mut probe, Path::new("matrix.h5")).unwrap_err();
    assert!(matches!(err, BenchmarkError::InvalidDuration(d) if d == 0.0));
}
