//! Single-threaded change notification.
//!
//! - [`Observable`]: shared value that notifies subscribers when it changes.
//! - [`Emitter`]: value-less event channel.
//! - [`Subscription`]: guard returned by both; dropping it unsubscribes.
//!
//! Everything here uses `Rc<RefCell<..>>` and is meant to be driven from the
//! UI thread only.

mod emitter;
mod observable;

pub use emitter::Emitter;
pub use observable::{Observable, Subscription};
