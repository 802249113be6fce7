use crate::{
    ControlError, CoreResult, ExclusiveFileProbe, HotkeyKey, KeyInjector, ProcessExit,
    ProcessRunner, WindowLister,
};

use std::{
    cell::RefCell,
    collections::HashSet,
    ffi::OsString,
    panic::Location,
    path::{Path, PathBuf},
    rc::Rc,
    time::Instant,
};

use error_location::ErrorLocation;

/// Side effect observed by a fake capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    ListWindows,
    Press(HotkeyKey),
    Release(HotkeyKey),
    Probe(PathBuf),
    Run {
        program: PathBuf,
        args: Vec<OsString>,
    },
}

/// Ordered, timestamped record shared by all fakes of one test.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog(Rc<RefCell<Vec<(Instant, Event)>>>);

impl EventLog {
    pub(crate) fn push(&self, event: Event) {
        self.0.borrow_mut().push((Instant::now(), event));
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().iter().map(|(_, e)| e.clone()).collect()
    }

    /// When the first event matching `wanted` happened.
    pub(crate) fn first_at(&self, wanted: impl Fn(&Event) -> bool) -> Option<Instant> {
        self.0
            .borrow()
            .iter()
            .find(|(_, e)| wanted(e))
            .map(|(at, _)| *at)
    }

    /// When the last event matching `wanted` happened.
    pub(crate) fn last_at(&self, wanted: impl Fn(&Event) -> bool) -> Option<Instant> {
        self.0
            .borrow()
            .iter()
            .rev()
            .find(|(_, e)| wanted(e))
            .map(|(at, _)| *at)
    }

    pub(crate) fn key_events(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::Press(_) | Event::Release(_)))
            .collect()
    }

    pub(crate) fn count(&self, wanted: &Event) -> usize {
        self.0.borrow().iter().filter(|(_, e)| e == wanted).count()
    }
}

/// Returns one title snapshot per call, repeating the last one.
pub(crate) struct FakeWindows {
    pub(crate) snapshots: Vec<Vec<String>>,
    pub(crate) calls: usize,
    pub(crate) log: EventLog,
}

impl FakeWindows {
    pub(crate) fn new(log: &EventLog, titles: &[&str]) -> Self {
        Self::with_snapshots(log, vec![titles.iter().map(|t| t.to_string()).collect()])
    }

    pub(crate) fn with_snapshots(log: &EventLog, snapshots: Vec<Vec<String>>) -> Self {
        Self {
            snapshots,
            calls: 0,
            log: log.clone(),
        }
    }
}

impl WindowLister for FakeWindows {
    fn window_titles(&mut self) -> CoreResult<Vec<String>> {
        self.log.push(Event::ListWindows);
        let index = self.calls.min(self.snapshots.len().saturating_sub(1));
        self.calls += 1;
        Ok(self.snapshots.get(index).cloned().unwrap_or_default())
    }
}

/// Records key events, optionally failing on one key's press.
pub(crate) struct FakeKeys {
    pub(crate) log: EventLog,
    pub(crate) fail_press_on: Option<HotkeyKey>,
}

impl FakeKeys {
    pub(crate) fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_press_on: None,
        }
    }
}

impl KeyInjector for FakeKeys {
    fn press(&mut self, key: HotkeyKey) -> CoreResult<()> {
        if self.fail_press_on == Some(key) {
            return Err(ControlError::KeyInjection {
                reason: format!("simulated failure pressing {}", key),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.log.push(Event::Press(key));
        Ok(())
    }

    fn release(&mut self, key: HotkeyKey) -> CoreResult<()> {
        self.log.push(Event::Release(key));
        Ok(())
    }
}

/// Reports the configured paths as locked.
pub(crate) struct FakeProbe {
    pub(crate) locked: HashSet<PathBuf>,
    pub(crate) log: EventLog,
}

impl FakeProbe {
    pub(crate) fn new(log: &EventLog, locked: &[PathBuf]) -> Self {
        Self {
            locked: locked.iter().cloned().collect(),
            log: log.clone(),
        }
    }
}

impl ExclusiveFileProbe for FakeProbe {
    fn is_locked(&self, path: &Path) -> bool {
        self.log.push(Event::Probe(path.to_path_buf()));
        self.locked.contains(path)
    }
}

/// Records invocations and writes the last argument as the output file.
pub(crate) struct FakeRunner {
    pub(crate) log: EventLog,
    pub(crate) exit_code: Option<i32>,
}

impl FakeRunner {
    pub(crate) fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            exit_code: Some(0),
        }
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> CoreResult<ProcessExit> {
        self.log.push(Event::Run {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        if self.exit_code == Some(0) {
            if let Some(output) = args.last() {
                std::fs::write(output, b"transcoded")?;
            }
        }
        Ok(ProcessExit {
            code: self.exit_code,
        })
    }
}
