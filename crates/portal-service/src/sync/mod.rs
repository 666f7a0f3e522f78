//! Background synchronization

mod poller;

pub use poller::Poller;
