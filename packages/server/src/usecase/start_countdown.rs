//! UseCase: カウントダウンの開始
//!
//! A round's clock is a single spawned task driving `countdown::tick` from a
//! `tokio::time::interval`. The first tick fires one interval after the start,
//! never immediately.

use std::sync::Arc;

use tokio::{
    task::JoinHandle,
    time::{Instant, interval_at},
};

use crate::domain::{GameConfig, MessagePusher, Room, RoomError};

use super::SharedRoom;

/// Handle of a running round clock; completes after `GAME_OVER`
pub type RoundHandle = JoinHandle<()>;

pub struct StartCountdownUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
    config: GameConfig,
}

impl StartCountdownUseCase {
    pub fn new(
        room: SharedRoom,
        message_pusher: Arc<dyn MessagePusher>,
        config: GameConfig,
    ) -> Self {
        Self {
            room,
            message_pusher,
            config,
        }
    }

    /// Start the round clock.
    ///
    /// # Errors
    ///
    /// `RoomError::RoundAlreadyActive` if a clock is already running; the
    /// running clock is left untouched.
    pub async fn execute(&self) -> Result<RoundHandle, RoomError> {
        let mut room = self.room.lock().await;
        self.start_locked(&mut room)
    }

    /// Same as `execute` for a caller that already holds the room lock
    pub(crate) fn start_locked(&self, room: &mut Room) -> Result<RoundHandle, RoomError> {
        room.begin_countdown(self.config.max_time)?;
        tracing::info!(
            "Round started with {} seconds on the clock",
            self.config.max_time
        );

        Ok(tokio::spawn(run_round_clock(
            self.room.clone(),
            self.message_pusher.clone(),
            self.config,
        )))
    }
}

async fn run_round_clock(
    shared_room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
    config: GameConfig,
) {
    let period = config.tick_interval;
    let mut ticker = interval_at(Instant::now() + period, period);

    loop {
        ticker.tick().await;

        let mut room = shared_room.lock().await;
        let Some(outcome) = room.advance_countdown() else {
            tracing::warn!("Round clock ticked with no active round, stopping");
            break;
        };

        for event in &outcome.events {
            if let Err(e) = message_pusher.broadcast(event, None).await {
                tracing::warn!("Failed to broadcast {:?}: {}", event, e);
            }
        }

        if outcome.stop {
            tracing::info!("Round over, room reset");
            break;
        }
        tracing::debug!("Countdown: {} remaining", outcome.next);
    }
}
