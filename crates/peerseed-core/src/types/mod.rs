mod address;
mod gossip;

pub use address::*;
pub use gossip::*;
