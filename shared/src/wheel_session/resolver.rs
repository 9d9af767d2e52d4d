use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use log::{debug, info, warn};

use crate::shared_wheel_game::SpinOutcome;

use super::boundary::{Pacer, PrizeClient};
use super::state::ResultMessage;

/// Turns a settled spin into the message the player sees. Only winning
/// segments touch the prize client, and only once.
#[derive(Debug, Clone)]
pub struct SpinResolver {
    prize_timeout: Duration,
}

impl SpinResolver {
    pub fn new(prize_timeout: Duration) -> Self {
        Self { prize_timeout }
    }

    pub async fn resolve<P, T>(&self, outcome: &SpinOutcome, prize_client: &P, pacer: &T) -> ResultMessage
    where
        P: PrizeClient,
        T: Pacer,
    {
        if !outcome.is_winning {
            debug!("segment {} is not a winner", outcome.segment_index);
            return ResultMessage::try_next_time();
        }

        let lookup = pin!(prize_client.fetch_prize());
        let deadline = pin!(pacer.sleep(self.prize_timeout));

        // A failed or late lookup still reports the win
        match select(lookup, deadline).await {
            Either::Left((Ok(prize), _)) => {
                info!("segment {} won prize {:?}", outcome.segment_index, prize);
                ResultMessage::prize_won(&prize)
            }
            Either::Left((Err(err), _)) => {
                warn!("segment {} won but {}", outcome.segment_index, err);
                ResultMessage::prize_unavailable()
            }
            Either::Right(((), _)) => {
                warn!(
                    "segment {} won but the prize lookup timed out after {:?}",
                    outcome.segment_index, self.prize_timeout
                );
                ResultMessage::prize_unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRY_NEXT_TIME;
    use crate::shared_wheel_game::rotation_for_segment;
    use crate::wheel_session::state::MessageKind;
    use crate::wheel_session::test_support::{FakePrizeClient, InstantPacer};
    use futures::executor::block_on;

    fn outcome(segment_index: u32, is_winning: bool) -> SpinOutcome {
        SpinOutcome {
            segment_index,
            rotation_degrees: rotation_for_segment(12, segment_index, 3),
            is_winning,
        }
    }

    #[test]
    fn test_loss_skips_lookup() {
        let client = FakePrizeClient::prize("Free Coffee");
        let resolver = SpinResolver::new(Duration::from_secs(5));
        let message = block_on(resolver.resolve(&outcome(1, false), &client, &InstantPacer::default()));
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, TRY_NEXT_TIME);
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_win_with_prize() {
        let client = FakePrizeClient::prize("Free Coffee");
        let resolver = SpinResolver::new(Duration::from_secs(5));
        let message = block_on(resolver.resolve(&outcome(3, true), &client, &InstantPacer::default()));
        assert_eq!(message.kind, MessageKind::Success);
        assert!(message.text.contains("Free Coffee"));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn test_failed_lookup_keeps_the_win() {
        let client = FakePrizeClient::failing();
        let resolver = SpinResolver::new(Duration::from_secs(5));
        let message = block_on(resolver.resolve(&outcome(6, true), &client, &InstantPacer::default()));
        assert_eq!(message, ResultMessage::prize_unavailable());
        assert!(message.text.contains("won"));
        assert!(!message.text.contains(TRY_NEXT_TIME));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn test_hung_lookup_times_out() {
        let client = FakePrizeClient::hanging();
        let pacer = InstantPacer::default();
        let resolver = SpinResolver::new(Duration::from_millis(750));
        let message = block_on(resolver.resolve(&outcome(9, true), &client, &pacer));
        assert_eq!(message, ResultMessage::prize_unavailable());
        assert_eq!(pacer.sleeps(), vec![Duration::from_millis(750)]);
    }
}
