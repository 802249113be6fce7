//! AmaRecTV control core library.
//!
//! Start and stop an external screen recorder by hotkey, infer whether it is
//! recording from the lock it holds on its output file, and collect the
//! finished recording.
//!
//! # Example
//!
//! ```no_run
//! use amarec_control_core::{
//!     CommandRunner, CoreResult, Dispatcher, DispatcherConfig, HotkeyKey, KeyInjector,
//!     OpenForWriteProbe, Operation, WindowLister,
//! };
//!
//! struct NoWindows;
//! impl WindowLister for NoWindows {
//!     fn window_titles(&mut self) -> CoreResult<Vec<String>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! struct NoKeys;
//! impl KeyInjector for NoKeys {
//!     fn press(&mut self, _key: HotkeyKey) -> CoreResult<()> {
//!         Ok(())
//!     }
//!     fn release(&mut self, _key: HotkeyKey) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let mut dispatcher = Dispatcher::new(
//!         DispatcherConfig::default(),
//!         NoWindows,
//!         NoKeys,
//!         OpenForWriteProbe,
//!         CommandRunner,
//!     );
//!     dispatcher.dispatch(Operation::Start)?;
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod destination;
mod dispatcher;
mod error;
pub mod hotkey;
pub mod recorder;
pub mod transcode;

pub use {
    capabilities::{
        CommandRunner, ExclusiveFileProbe, KeyInjector, OpenForWriteProbe, ProcessExit,
        ProcessRunner, WindowLister,
    },
    destination::DestinationVars,
    dispatcher::{
        DEFAULT_POST_STOP_DELAY, DEFAULT_PRE_STOP_DELAY, DispatchReport, Dispatcher,
        DispatcherConfig, FinalizeOutcome, Operation, StopReport,
    },
    error::{ControlError, Result as CoreResult},
    hotkey::HotkeyKey,
    recorder::RecorderLayout,
    transcode::TranscodeSettings,
};

#[cfg(test)]
mod tests;
