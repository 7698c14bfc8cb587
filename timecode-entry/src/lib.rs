//! Key-press handling for timecode entry fields.
//!
//! A UI toolkit owns the text field; this crate decides what each key does
//! to the typed components. Everything is a pure function of the current
//! [`EntryState`], the [`Key`] and an [`EntryConfig`], so the behaviour can
//! be tested without any UI.
//!
//! ## Quick Start
//!
//! ```
//! use timecode_entry::{handle_key, EntryConfig, EntryState, Key, KeyOutcome};
//! use timecode_core::{Components, Properties, TimecodeFrameRate};
//!
//! let config = EntryConfig::default();
//! let mut state = EntryState::new(Properties::new(TimecodeFrameRate::Fps25));
//! for c in "01000000".chars() {
//!     let response = handle_key(&state, Key::from(c), &config);
//!     assert_eq!(response.outcome, KeyOutcome::Handled);
//!     state = response.state;
//! }
//! assert_eq!(state.components, Components::hmsf(1, 0, 0, 0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

mod config;
mod error;
mod handler;
mod state;

pub use config::{EntryConfig, InputStyle, ValidationPolicy};
pub use error::{EntryError, Result};
pub use handler::{handle_key, FocusMove, Key, KeyOutcome, KeyResponse, Rejection};
pub use state::EntryState;
