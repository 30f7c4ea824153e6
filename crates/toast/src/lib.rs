//! Timed toast notifications for terminal frontends.
//!
//! A [`Manager`] owns an ordered stack of [`Toast`]s and is driven entirely
//! by [`Event`] values. Operations that would change the stack, such as
//! [`Manager::push`] and [`Manager::dismiss_all`], return a [`Command`]
//! instead; the host loop delivers each command's event back into
//! [`Manager::dispatch`] after the requested delay. Every dispatch returns
//! further commands (countdown ticks, elapse and expiry notices) to be
//! redelivered the same way.
//!
//! ```
//! use std::time::Duration;
//!
//! use xeno_toast::{Category, CommandQueue, Manager};
//!
//! let mut manager = Manager::new();
//! let mut queue = CommandQueue::new();
//!
//! queue.schedule([manager.push("Saved", Category::INFO, Duration::from_secs(1))]);
//! queue.run_for(&mut manager, Duration::ZERO);
//! assert_eq!(manager.render().lines[0].to_string(), "ℹ Saved");
//!
//! queue.run_for(&mut manager, Duration::from_secs(1));
//! assert!(manager.is_empty());
//! ```

mod config;
mod countdown;
mod event;
mod manager;
mod overlay;
mod position;
mod queue;
mod style;
mod toast;

pub use config::{ConfigError, StyleConfig, ToastConfig};
pub use countdown::{Countdown, DEFAULT_TICK_INTERVAL, ElapsedSignal, TickSignal};
pub use event::{Command, Event};
pub use manager::{DEFAULT_DURATION, DEFAULT_MAX_VISIBLE, DEFAULT_WIDTH, Manager, Overflow};
pub use position::Position;
pub use queue::CommandQueue;
pub use style::{Category, ToastStyle, resolve_style};
pub use toast::{Toast, ToastId};
