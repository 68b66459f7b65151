//! UI abstraction layer
//!
//! Interactive front ends read user input through the [`UserInput`] trait so
//! the browse session logic can run against scripted input in tests.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Browse session                     │
//! └────────────────┬────────────────────────┘
//!                  │ Uses trait
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UserInput                          │
//! └────────────────┬────────────────────────┘
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ DialoguerInput│  │ MockInput         │
//! └───────┬───────┘  └───────────────────┘
//!         │ stdin not a terminal
//!         ▼
//! ┌───────────────┐
//! │ LineInput     │
//! └───────────────┘
//! ```

pub mod input;
pub mod mock;

pub use input::{DialoguerInput, InputError, LineInput, UserInput};
pub use mock::MockInput;
