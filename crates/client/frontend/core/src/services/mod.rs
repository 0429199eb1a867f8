//! Services that move data between the event source and the view model.
pub mod polling;
mod updater;

#[cfg(test)]
pub(crate) mod testing;

pub use polling::{PollHandle, Poller};
pub use updater::ViewModelUpdater;
