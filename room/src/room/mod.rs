mod config;
mod state;
mod request;
mod error;

use tokio::sync::mpsc::{Sender, Receiver, channel};
use tokio::sync::oneshot;

pub use config::Config;
pub use error::{RoomResult, ErrorKind};
pub use request::Request as RoomReq;
use state::{Session, Round};

use crate::canvas::Canvas;
use crate::consts::*;
use crate::guess::GuessForm;
use crate::hint::{hint, normalize, spaced};
use crate::timer::{spawn_ticker, Countdown, Tick};
use crate::types::*;

use protocol::{Notice, Role, Stage, View};

/// Owns one session: the role, the score pair, the current round, its countdown and the drawing surface.
/// Every input arrives through one channel, so host requests and timer ticks never interleave.
pub struct Room {
    config: Config,
    session: Session,
    round: Round,

    countdown: Countdown,
    stopper: Option<oneshot::Sender<()>>,

    canvas: Canvas,
    form: GuessForm,

    rm_rx: Receiver<RoomReq>,
    loopback: Sender<RoomReq>,
    resp_tx: RespTx,
}

impl Room {
    pub fn new(config: Config, resp_tx: RespTx) -> Self {
        let (loopback, rm_rx) = channel::<RoomReq>(CHANNEL_SIZE);
        Self {
            countdown: Countdown::new(config.duration),
            config,
            session: Session::default(),
            round: Round::new(),

            stopper: None,

            canvas: Canvas::new(),
            form: GuessForm::new(),

            rm_rx,
            loopback,
            resp_tx,
        }
    }

    pub fn get_tx(&self) -> Sender<RoomReq> {
        self.loopback.clone()
    }

    pub async fn run(&mut self) {
        log::info!("room ready, {}s rounds", self.config.duration);
        while let Some(req) = self.rm_rx.recv().await {
            if !self.handle(req).await {
                break;
            }
        }
        self.stop_timer();
        log::info!("room closed");
    }

    /// Returns false once the host asks to quit.
    pub async fn handle(&mut self, req: RoomReq) -> bool {
        let res = match req {
            RoomReq::Tick(generation) => {
                self.on_tick(generation).await;
                Ok(())
            }
            RoomReq::Host(req) => match req {
                HostReq::SelectRole(role) => self.select_role(role).await,
                HostReq::SetWord { word } => self.set_word(word),
                HostReq::StartRound => self.start_round().await,
                HostReq::Guess { text } => self.guess(text).await,
                HostReq::PointerDown(at) => {
                    self.canvas.pointer_down(at);
                    Ok(())
                }
                HostReq::PointerMove(to) => {
                    if let Some(seg) = self.canvas.pointer_move(to) {
                        log::trace!("segment {:?} -> {:?}", seg.from, seg.to);
                    }
                    Ok(())
                }
                HostReq::PointerUp | HostReq::PointerLeave => {
                    self.canvas.pointer_up();
                    Ok(())
                }
                HostReq::ResetRound => self.reset_round().await,
                HostReq::Show => {
                    self.send(HostResp::View(self.view())).await;
                    Ok(())
                }
                HostReq::Quit => return false,
            },
        };
        if let Err(reason) = res {
            log::debug!("ignored: {}", reason);
        }
        true
    }

    pub async fn select_role(&mut self, role: Role) -> RoomResult<()> {
        if self.round.stage != Stage::Idle {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        match self.session.role {
            Some(chosen) if chosen != role => return Err(ErrorKind::RoleLocked(chosen)),
            _ => {}
        }
        self.session.role = Some(role);
        self.round.stage = Stage::AwaitingWord;
        log::info!("playing as {}", role);
        self.send_stage().await;
        Ok(())
    }

    /// The drawer's word-entry box. Kept raw until the round starts.
    pub fn set_word(&mut self, word: String) -> RoomResult<()> {
        match self.session.role {
            None => return Err(ErrorKind::NoRole),
            Some(Role::Guesser) => return Err(ErrorKind::NotDrawer),
            Some(Role::Drawer) => {}
        }
        if !matches!(self.round.stage, Stage::Idle | Stage::AwaitingWord) {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        self.round.input = word;
        Ok(())
    }

    /// The word the round would start with. Also drives the start affordance.
    fn check_start(&self) -> RoomResult<(Role, String)> {
        if !matches!(self.round.stage, Stage::Idle | Stage::AwaitingWord) {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        let role = self.session.role.ok_or(ErrorKind::NoRole)?;
        let word = match role {
            Role::Drawer => normalize(&self.round.input),
            Role::Guesser => self.round.word.clone(),
        };
        match (role, word.is_empty()) {
            (Role::Drawer, true) => Err(ErrorKind::EmptyWord),
            (Role::Guesser, true) => Err(ErrorKind::NoWordYet),
            (_, false) => Ok((role, word)),
        }
    }

    pub async fn start_round(&mut self) -> RoomResult<()> {
        let (role, word) = self.check_start()?;
        self.round.word = word;

        self.round.guessed = false;
        self.round.elapsed = 0;
        self.round.stage = Stage::Active;

        self.canvas.clear();
        self.canvas.set_active(role == Role::Drawer);
        self.form.input("");
        self.form.set_disabled(false);

        self.stop_timer();
        let generation = self.countdown.reset();
        self.stopper = Some(spawn_ticker(self.config.duration, generation, self.get_tx()));

        log::info!("round {} started, {} letters", generation, self.round.word.chars().count());
        self.send_stage().await;
        self.send(HostResp::CountDown { remaining: self.countdown.remaining(), elapsed: 0 }).await;
        self.send(HostResp::Hint { text: self.hint() }).await;
        Ok(())
    }

    /// Routes text through the guess form, which clears itself on submit.
    pub async fn guess(&mut self, text: String) -> RoomResult<()> {
        self.form.input(text);
        let submitted = self.form.submit().ok_or(ErrorKind::FormDisabled)?;
        self.submit_guess(&submitted).await
    }

    pub async fn submit_guess(&mut self, text: &str) -> RoomResult<()> {
        if self.round.stage != Stage::Active {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        if normalize(text) != self.round.word {
            self.send(HostResp::Notice(Notice::Incorrect)).await;
            return Ok(());
        }

        self.round.guessed = true;
        self.round.stage = Stage::Resolved;
        self.stop_timer();
        self.form.set_disabled(true);
        let scores = &mut self.session.scores;
        scores.drawer = scores.drawer.saturating_add(self.config.award);
        scores.guesser = scores.guesser.saturating_add(self.config.award);

        log::info!("guessed after {}s", self.round.elapsed);
        self.send(HostResp::Notice(Notice::Correct)).await;
        self.send(HostResp::Scores(self.session.scores)).await;
        self.send_stage().await;
        Ok(())
    }

    async fn on_tick(&mut self, generation: u64) {
        match self.countdown.tick(generation) {
            Tick::Stale => log::debug!("stale tick from round {}", generation),
            Tick::Running { remaining, elapsed } => {
                self.round.elapsed = elapsed;
                self.send(HostResp::CountDown { remaining, elapsed }).await;
                self.send(HostResp::Hint { text: self.hint() }).await;
            }
            Tick::Expired { elapsed } => {
                self.round.elapsed = elapsed;
                self.send(HostResp::CountDown { remaining: 0, elapsed }).await;
                if let Err(reason) = self.on_time_expired().await {
                    log::debug!("expiry ignored: {}", reason);
                }
            }
        }
    }

    /// Reveals the word and wipes everything but the scores.
    pub async fn on_time_expired(&mut self) -> RoomResult<()> {
        if self.round.stage != Stage::Active {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        if self.round.guessed {
            return Ok(());
        }
        let word = std::mem::take(&mut self.round.word);
        log::info!("time is up, word was {}", word);
        self.send(HostResp::Notice(Notice::TimesUp { word })).await;

        self.stop_timer();
        self.session.role = None;
        self.round.clear();
        self.canvas.set_active(false);
        self.form.input("");
        self.send_stage().await;
        Ok(())
    }

    /// Play again: role and scores stay.
    pub async fn reset_round(&mut self) -> RoomResult<()> {
        if self.round.stage != Stage::Resolved {
            return Err(ErrorKind::WrongStage(self.round.stage));
        }
        self.stop_timer();
        self.round.clear();
        self.canvas.set_active(false);
        self.form.input("");
        log::info!("round reset");
        self.send_stage().await;
        Ok(())
    }

    fn stop_timer(&mut self) {
        if self.countdown.is_running() {
            log::debug!("countdown stopped at {}s", self.countdown.elapsed());
        }
        self.countdown.stop();
        if let Some(stopper) = self.stopper.take() {
            let _ = stopper.send(());
        }
    }

    fn hint(&self) -> String {
        hint(&self.round.word, self.round.elapsed, self.config.reveal_secs)
    }

    fn view(&self) -> View {
        let word_line = match self.session.role {
            Some(Role::Drawer) => spaced(&self.round.word),
            Some(Role::Guesser) => self.hint(),
            None => String::new(),
        };
        let remaining = match self.round.stage {
            Stage::Active | Stage::Resolved => self.countdown.remaining(),
            Stage::Idle | Stage::AwaitingWord => self.config.duration,
        };
        View {
            role: self.session.role,
            stage: self.round.stage,
            scores: self.session.scores,
            remaining,
            can_start: self.check_start().is_ok(),
            word_line,
            canvas: self.canvas.render_ascii(ASCII_COLS, ASCII_ROWS),
        }
    }

    async fn send_stage(&self) {
        self.send(HostResp::StageChanged {
            stage: self.round.stage,
            role: self.session.role,
        }).await;
    }

    async fn send(&self, resp: HostResp) {
        self.resp_tx.send(resp).await.unwrap_or_default()
    }
}
