use crate::types::*;

#[derive(Debug)]
pub enum Request {
    Host(HostReq),
    /// One elapsed second for the round of the given generation.
    Tick(u64),
}
