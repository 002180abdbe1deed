use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;

use crate::consts::TICK;
use crate::room::RoomReq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Generation mismatch, or the countdown is not running. No effect.
    Stale,
    Running { remaining: u32, elapsed: u32 },
    Expired { elapsed: u32 },
}

/// Remaining-time bookkeeping for one round. Ticks are keyed by generation,
/// so anything scheduled for an earlier round is ignored.
#[derive(Debug)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    generation: u64,
    running: bool,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            generation: 0,
            running: false,
        }
    }

    /// Starts over with the full duration and returns the new generation.
    pub fn reset(&mut self) -> u64 {
        self.generation += 1;
        self.remaining = self.duration;
        self.running = true;
        self.generation
    }

    /// Invalidates every tick issued so far.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    pub fn tick(&mut self, generation: u64) -> Tick {
        if !self.running || generation != self.generation {
            return Tick::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired { elapsed: self.elapsed() }
        } else {
            Tick::Running { remaining: self.remaining, elapsed: self.elapsed() }
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Sends `secs` ticks, one per second, into the room loop. Dropping or firing
/// the returned sender stops it before the next send.
pub fn spawn_ticker(secs: u32, generation: u64, loopback: mpsc::Sender<RoomReq>) -> oneshot::Sender<()> {
    let (tx, mut rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        for _ in 0..secs {
            sleep(TICK).await;
            match rx.try_recv() {
                Err(oneshot::error::TryRecvError::Empty) => {}
                _ => return,
            }
            if loopback.send(RoomReq::Tick(generation)).await.is_err() {
                return;
            }
        }
    });
    tx
}
