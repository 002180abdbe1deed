mod logger;
mod types;
mod consts;
mod room;
mod timer;
mod canvas;
mod hint;
mod guess;

// # 任务
// 1. 房间：负责逻辑，独占所有状态
// 2. 读入：stdin 一行一个请求
// 3. 输出：把响应写到 stdout
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use protocol::JsonMessage;
use crate::consts::*;
use crate::room::{Config, RoomReq};
use crate::types::*;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Draw and guess, both seats in one terminal", long_about = None)]
struct Args {
    /// Seconds per round
    #[clap(short, long, default_value_t = ROUND_SECS)]
    duration: u32,
    /// Seconds per revealed hint letter
    #[clap(short, long, default_value_t = REVEAL_SECS)]
    reveal_interval: u32,
    /// Points for each side when the word is guessed
    #[clap(short, long, default_value_t = AWARD)]
    award: u32,
    /// Read requests and write responses as JSON lines
    #[clap(short, long)]
    json: bool,
    /// Log filter, overrides RUST_LOG
    #[clap(short, long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(args.log.as_deref());

    let config = Config {
        duration: args.duration,
        reveal_secs: args.reveal_interval,
        award: args.award,
    }.validate()?;

    let (resp_tx, resp_rx) = mpsc::channel::<HostResp>(CHANNEL_SIZE);
    let mut room = room::Room::new(config, resp_tx);
    let room_tx = room.get_tx();
    let room_handle = tokio::spawn(async move { room.run().await });
    let writer_handle = tokio::spawn(write_responses(resp_rx, args.json));

    read_requests(room_tx, args.json).await?;
    room_handle.await?;
    writer_handle.await??;
    Ok(())
}

async fn read_requests(room_tx: mpsc::Sender<RoomReq>, json: bool) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = if json {
            HostReq::from_json(&line).map_err(|e| e.to_string())
        } else {
            line.parse::<HostReq>().map_err(|e| e.to_string())
        };
        match parsed {
            Ok(req) => {
                let quit = req == HostReq::Quit;
                if room_tx.send(RoomReq::Host(req)).await.is_err() || quit {
                    return Ok(());
                }
            }
            Err(e) => log::warn!("ignored `{}`: {}", line, e),
        }
    }
    room_tx.send(RoomReq::Host(HostReq::Quit)).await.unwrap_or_default();
    Ok(())
}

async fn write_responses(mut resp_rx: RespRx, json: bool) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    while let Some(resp) = resp_rx.recv().await {
        let line = if json { resp.to_json()? } else { resp.to_string() };
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
