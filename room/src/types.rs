use tokio::sync::mpsc;

pub use protocol::{Request as HostReq, Response as HostResp};

pub type RespTx = mpsc::Sender<HostResp>;
pub type RespRx = mpsc::Receiver<HostResp>;
