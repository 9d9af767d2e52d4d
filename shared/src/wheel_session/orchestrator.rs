use std::cell::RefCell;

use log::{debug, error, info};

use crate::error::IllegalStateError;
use crate::shared_wheel_game::{choose_outcome, SegmentRng, SessionConfig, SpinOutcome};
use crate::validation::PlayerProfile;

use super::attempts::AttemptTracker;
use super::boundary::{Pacer, PrizeClient, WheelView};
use super::resolver::SpinResolver;
use super::state::{ResultMessage, SessionState};

/// What a call to [`SessionOrchestrator::spin`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinReport {
    /// The spin control was effectively disabled when the intent arrived.
    Ignored,
    Completed(SpinOutcome),
}

struct Session {
    state: SessionState,
    attempts: AttemptTracker,
    profile: Option<PlayerProfile>,
    // Bumped on every reset so work started by an older session can tell
    generation: u64,
}

/// Drives one player's session: login, spins, results and the way back to
/// the form.
///
/// Intents come in through `&self` so the presentation layer can keep firing
/// them while a spin is suspended. Borrows of the session are never held
/// across an await.
pub struct SessionOrchestrator<V, P, T, R> {
    config: SessionConfig,
    view: V,
    prize_client: P,
    pacer: T,
    rng: RefCell<R>,
    resolver: SpinResolver,
    session: RefCell<Session>,
}

impl<V, P, T, R> SessionOrchestrator<V, P, T, R>
where
    V: WheelView,
    P: PrizeClient,
    T: Pacer,
    R: SegmentRng,
{
    pub fn new(config: SessionConfig, view: V, prize_client: P, pacer: T, rng: R) -> Self {
        let resolver = SpinResolver::new(config.prize_timeout);
        let attempts = AttemptTracker::new(config.total_attempts);
        Self {
            config,
            view,
            prize_client,
            pacer,
            rng: RefCell::new(rng),
            resolver,
            session: RefCell::new(Session {
                state: SessionState::AwaitingLogin,
                attempts,
                profile: None,
                generation: 0,
            }),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn prize_client(&self) -> &P {
        &self.prize_client
    }

    pub fn state(&self) -> SessionState {
        self.session.borrow().state.clone()
    }

    pub fn attempts_left(&self) -> u32 {
        self.session.borrow().attempts.remaining()
    }

    pub fn can_spin(&self) -> bool {
        let session = self.session.borrow();
        session.state.is_on_wheel() && session.attempts.can_spin()
    }

    pub fn profile(&self) -> Option<PlayerProfile> {
        self.session.borrow().profile.clone()
    }

    /// Starts a session for a validated profile. Ignored unless the form is
    /// showing.
    pub fn login(&self, profile: PlayerProfile) -> bool {
        let total = self.config.total_attempts;
        {
            let mut session = self.session.borrow_mut();
            if session.state != SessionState::AwaitingLogin {
                debug!("login ignored in state {}", session.state.name());
                return false;
            }
            info!("{} {} started a session with {} attempts", profile.name(), profile.surname(), total);
            session.attempts.reset(total);
            session.profile = Some(profile);
            session.state = SessionState::Playing {
                attempts_left: total,
                is_spinning: false,
            };
        }
        self.view.render(total, false, None);
        true
    }

    /// Runs one spin end to end: pacing delay, rotation, prize resolution and
    /// bookkeeping. Resolves once the result is on screen.
    pub async fn spin(&self) -> Result<SpinReport, IllegalStateError> {
        let (outcome, attempts_left, generation) = {
            let mut session = self.session.borrow_mut();
            if !session.state.is_on_wheel() || !session.attempts.can_spin() {
                debug!(
                    "spin ignored in state {} ({} attempts left, spinning: {})",
                    session.state.name(),
                    session.attempts.remaining(),
                    session.attempts.is_spinning()
                );
                return Ok(SpinReport::Ignored);
            }
            session.attempts.begin_spin().map_err(fault)?;

            let outcome = choose_outcome(
                &self.config.wheel,
                self.config.full_rotations,
                &mut *self.rng.borrow_mut(),
            );
            let attempts_left = session.attempts.remaining();
            session.state = SessionState::Playing {
                attempts_left,
                is_spinning: true,
            };
            (outcome, attempts_left, session.generation)
        };

        self.view.update_spin_control(attempts_left, true);
        self.view.show_message(&ResultMessage::cleared());

        self.pacer.sleep(self.config.pre_spin_delay).await;

        self.session.borrow_mut().state = SessionState::SpinAnimating {
            attempts_left,
            chosen_segment: outcome.segment_index,
        };
        self.view.run_spin(outcome.rotation_degrees).await;

        let message = self
            .resolver
            .resolve(&outcome, &self.prize_client, &self.pacer)
            .await;

        let attempts_left = {
            let mut session = self.session.borrow_mut();
            session.attempts.complete_spin().map_err(fault)?;
            let attempts_left = session.attempts.remaining();
            session.state = SessionState::Result {
                attempts_left,
                message: message.clone(),
            };
            attempts_left
        };
        info!(
            "spin landed on segment {} (winning: {}), {} attempts left",
            outcome.segment_index, outcome.is_winning, attempts_left
        );

        self.view.update_spin_control(attempts_left, false);
        self.view.show_message(&message);

        if attempts_left == 0 {
            self.announce_depletion(generation).await;
        }

        Ok(SpinReport::Completed(outcome))
    }

    // The last spin's own message stays up for the hold, then the notice replaces it
    async fn announce_depletion(&self, generation: u64) {
        self.pacer.sleep(self.config.depletion_hold).await;

        let notice = ResultMessage::attempts_exhausted();
        {
            let mut session = self.session.borrow_mut();
            if session.generation != generation {
                debug!("session reset before the depletion notice, dropping it");
                return;
            }
            session.state = SessionState::Result {
                attempts_left: 0,
                message: notice.clone(),
            };
        }
        self.view.show_message(&notice);
    }

    /// Discards the session and returns to the form. Ignored while a spin is
    /// in flight.
    pub fn back_to_form(&self) -> bool {
        {
            let mut session = self.session.borrow_mut();
            if !session.state.is_on_wheel() || session.attempts.is_spinning() {
                debug!("back to form ignored in state {}", session.state.name());
                return false;
            }
            session.attempts.reset(self.config.total_attempts);
            session.profile = None;
            session.generation += 1;
            session.state = SessionState::AwaitingLogin;
        }
        info!("session discarded, back to the form");
        self.view.clear();
        true
    }
}

fn fault(err: IllegalStateError) -> IllegalStateError {
    error!("session integrity violated: {}", err);
    err
}
