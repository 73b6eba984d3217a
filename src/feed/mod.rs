//! Remote command feed: the TCP reader the gateway consumes and a mock
//! source to run it against.

pub mod mock;
pub mod reader;

pub use mock::MockCommandServer;
pub use reader::CommandFeed;
