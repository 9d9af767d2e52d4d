use std::collections::BTreeSet;
use std::time::Duration;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{PrizeLookupError, SessionConfigError, WheelConfigError};

/// Segment layout of the wheel. Segments are equal slices indexed clockwise
/// starting at the top, where the pointer sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWheelConfig")]
pub struct WheelConfig {
    segment_count: u32,
    winning_segments: BTreeSet<u32>,
}

#[derive(Deserialize)]
struct RawWheelConfig {
    segment_count: u32,
    winning_segments: BTreeSet<u32>,
}

impl TryFrom<RawWheelConfig> for WheelConfig {
    type Error = WheelConfigError;

    fn try_from(raw: RawWheelConfig) -> Result<Self, Self::Error> {
        WheelConfig::new(raw.segment_count, raw.winning_segments)
    }
}

impl WheelConfig {
    pub fn new(
        segment_count: u32,
        winning_segments: impl IntoIterator<Item = u32>,
    ) -> Result<Self, WheelConfigError> {
        if segment_count == 0 {
            return Err(WheelConfigError::NoSegments);
        }
        let winning_segments: BTreeSet<u32> = winning_segments.into_iter().collect();
        if let Some(&index) = winning_segments.iter().find(|&&i| i >= segment_count) {
            return Err(WheelConfigError::WinningSegmentOutOfRange { index, segment_count });
        }
        Ok(Self {
            segment_count,
            winning_segments,
        })
    }

    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    pub fn winning_segments(&self) -> &BTreeSet<u32> {
        &self.winning_segments
    }

    pub fn is_winning(&self, segment_index: u32) -> bool {
        self.winning_segments.contains(&segment_index)
    }

    /// Angular width of one segment in degrees.
    pub fn segment_angle(&self) -> f64 {
        360.0 / self.segment_count as f64
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            winning_segments: DEFAULT_WINNING_SEGMENTS.into_iter().collect(),
        }
    }
}

/// Everything a session needs that stays fixed for its lifetime. Missing
/// fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionConfig")]
pub struct SessionConfig {
    pub wheel: WheelConfig,
    pub total_attempts: u32,
    pub full_rotations: u32,
    pub pre_spin_delay: Duration,
    pub spin_duration: Duration,
    pub prize_timeout: Duration,
    pub depletion_hold: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            total_attempts: TOTAL_ATTEMPTS,
            full_rotations: FULL_ROTATIONS,
            pre_spin_delay: PRE_SPIN_DELAY,
            spin_duration: SPIN_DURATION,
            prize_timeout: PRIZE_LOOKUP_TIMEOUT,
            depletion_hold: DEPLETION_NOTICE_HOLD,
        }
    }
}

impl SessionConfig {
    /// A session needs at least one attempt, and every spin at least one
    /// whole turn before it stops.
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.total_attempts == 0 {
            return Err(SessionConfigError::NoAttempts);
        }
        if self.full_rotations == 0 {
            return Err(SessionConfigError::NoFullRotations);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSessionConfig {
    wheel: WheelConfig,
    total_attempts: u32,
    full_rotations: u32,
    pre_spin_delay: Duration,
    spin_duration: Duration,
    prize_timeout: Duration,
    depletion_hold: Duration,
}

impl Default for RawSessionConfig {
    fn default() -> Self {
        let SessionConfig {
            wheel,
            total_attempts,
            full_rotations,
            pre_spin_delay,
            spin_duration,
            prize_timeout,
            depletion_hold,
        } = SessionConfig::default();
        Self {
            wheel,
            total_attempts,
            full_rotations,
            pre_spin_delay,
            spin_duration,
            prize_timeout,
            depletion_hold,
        }
    }
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = SessionConfigError;

    fn try_from(raw: RawSessionConfig) -> Result<Self, Self::Error> {
        let config = SessionConfig {
            wheel: raw.wheel,
            total_attempts: raw.total_attempts,
            full_rotations: raw.full_rotations,
            pre_spin_delay: raw.pre_spin_delay,
            spin_duration: raw.spin_duration,
            prize_timeout: raw.prize_timeout,
            depletion_hold: raw.depletion_hold,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Result of one draw. Replaced on every spin, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub segment_index: u32,
    pub rotation_degrees: f64,
    pub is_winning: bool,
}

impl SpinOutcome {
    /// Angle the wheel rests at once the rotation settles, in `[0, 360)`.
    pub fn resting_angle(&self) -> f64 {
        self.rotation_degrees.rem_euclid(360.0)
    }
}

/// Source of uniformly distributed segment indices.
pub trait SegmentRng {
    /// Returns a value in `[0, segment_count)`.
    fn next_segment(&mut self, segment_count: u32) -> u32;
}

/// Adapts any `rand` generator into a [`SegmentRng`].
#[derive(Debug, Clone)]
pub struct UniformSegments<R>(R);

impl<R: Rng> UniformSegments<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl Default for UniformSegments<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> SegmentRng for UniformSegments<R> {
    fn next_segment(&mut self, segment_count: u32) -> u32 {
        self.0.gen_range(0..segment_count)
    }
}

/// Total clockwise rotation that brings the centre of `segment_index` under
/// the pointer after `full_rotations` whole turns.
pub fn rotation_for_segment(segment_count: u32, segment_index: u32, full_rotations: u32) -> f64 {
    let segment_angle = 360.0 / segment_count as f64;
    let stop_angle = 360.0 - (segment_index as f64 * segment_angle) - segment_angle / 2.0;
    full_rotations as f64 * 360.0 + stop_angle
}

/// Segment sitting under the pointer once the wheel has turned clockwise by
/// `rotation_degrees`.
pub fn segment_at_pointer(segment_count: u32, rotation_degrees: f64) -> u32 {
    let segment_angle = 360.0 / segment_count as f64;
    // Rotating the wheel clockwise moves the slice at -rotation under the pointer
    let under_pointer = (360.0 - rotation_degrees.rem_euclid(360.0)).rem_euclid(360.0);
    ((under_pointer / segment_angle).floor() as u32).min(segment_count - 1)
}

pub fn choose_outcome<R: SegmentRng + ?Sized>(
    config: &WheelConfig,
    full_rotations: u32,
    rng: &mut R,
) -> SpinOutcome {
    let drawn = rng.next_segment(config.segment_count());
    debug_assert!(
        drawn < config.segment_count(),
        "segment source returned {} for a wheel of {}",
        drawn,
        config.segment_count()
    );
    // Clamp in release builds so a broken source cannot pick a segment that does not exist
    let segment_index = if drawn < config.segment_count() {
        drawn
    } else {
        warn!(
            "segment source returned {} for a wheel of {} segments, clamping",
            drawn,
            config.segment_count()
        );
        config.segment_count() - 1
    };
    SpinOutcome {
        segment_index,
        rotation_degrees: rotation_for_segment(config.segment_count(), segment_index, full_rotations),
        is_winning: config.is_winning(segment_index),
    }
}

// === API Types ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeResponse {
    pub prize: String,
}

impl PrizeResponse {
    /// A blank prize name counts as a failed lookup.
    pub fn into_prize(self) -> Result<String, PrizeLookupError> {
        let prize = self.prize.trim();
        if prize.is_empty() {
            return Err(PrizeLookupError::new("response carried no prize"));
        }
        Ok(prize.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<u32>);

    impl SegmentRng for Scripted {
        fn next_segment(&mut self, _segment_count: u32) -> u32 {
            self.0.pop_front().unwrap()
        }
    }

    #[test]
    fn test_config_rejects_bad_layouts() {
        assert_eq!(WheelConfig::new(0, []), Err(WheelConfigError::NoSegments));
        assert_eq!(
            WheelConfig::new(4, [1, 4]),
            Err(WheelConfigError::WinningSegmentOutOfRange { index: 4, segment_count: 4 })
        );
        assert!(WheelConfig::new(1, [0]).is_ok());
    }

    #[test]
    fn test_config_deserialize_validates() {
        let ok: WheelConfig =
            serde_json::from_str(r#"{"segment_count":6,"winning_segments":[0,5]}"#).unwrap();
        assert!(ok.is_winning(5));
        assert!(serde_json::from_str::<WheelConfig>(r#"{"segment_count":6,"winning_segments":[6]}"#).is_err());
    }

    #[test]
    fn test_reference_rotation() {
        // 12 segments, segment 3: 3 * 360 + 360 - 90 - 15
        assert_eq!(rotation_for_segment(12, 3, 3), 1335.0);
        assert_eq!(rotation_for_segment(12, 0, 3), 1425.0);
    }

    #[test]
    fn test_pointer_lands_on_chosen_segment() {
        for segment_count in 1..=40u32 {
            for index in 0..segment_count {
                let rotation = rotation_for_segment(segment_count, index, FULL_ROTATIONS);
                assert!(rotation > FULL_ROTATIONS as f64 * 360.0);
                assert_eq!(segment_at_pointer(segment_count, rotation), index);
            }
        }
    }

    #[test]
    fn test_resting_angle_is_segment_centre() {
        let config = WheelConfig::default();
        let outcome = choose_outcome(&config, 3, &mut Scripted(VecDeque::from([6])));
        let centre_under_pointer = (360.0 - outcome.resting_angle()).rem_euclid(360.0);
        assert!((centre_under_pointer - 6.5 * config.segment_angle()).abs() < 1e-9);
    }

    #[test]
    fn test_single_segment_wheel() {
        let config = WheelConfig::new(1, [0]).unwrap();
        let outcome = choose_outcome(&config, 3, &mut Scripted(VecDeque::from([0])));
        assert_eq!(outcome.rotation_degrees, 3.0 * 360.0 + 180.0);
        assert!(outcome.is_winning);
        assert_eq!(segment_at_pointer(1, outcome.rotation_degrees), 0);
    }

    #[test]
    fn test_choose_outcome_flags_winners() {
        let config = WheelConfig::default();
        let mut rng = Scripted(VecDeque::from([3, 1]));
        assert!(choose_outcome(&config, 3, &mut rng).is_winning);
        assert!(!choose_outcome(&config, 3, &mut rng).is_winning);
    }

    #[test]
    fn test_uniform_segments_cover_wheel() {
        let config = WheelConfig::default();
        let mut rng = UniformSegments::default();
        let mut seen = BTreeSet::new();
        for _ in 0..2000 {
            let outcome = choose_outcome(&config, 3, &mut rng);
            assert!(outcome.segment_index < config.segment_count());
            seen.insert(outcome.segment_index);
        }
        assert_eq!(seen.len(), config.segment_count() as usize);
    }

    #[test]
    fn test_prize_response_requires_a_name() {
        let body: PrizeResponse = serde_json::from_str(r#"{"prize":" Free Coffee "}"#).unwrap();
        assert_eq!(body.into_prize(), Ok("Free Coffee".to_string()));

        let blank = PrizeResponse { prize: "  ".to_string() };
        assert!(blank.into_prize().is_err());
        assert!(serde_json::from_str::<PrizeResponse>(r#"{"gift":"Mug"}"#).is_err());
    }

    #[test]
    fn test_session_config_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"total_attempts":3}"#).unwrap();
        assert_eq!(config.total_attempts, 3);
        assert_eq!(config.full_rotations, FULL_ROTATIONS);
        assert_eq!(config.wheel, WheelConfig::default());
    }

    #[test]
    fn test_session_config_rejects_degenerate_spins() {
        assert!(serde_json::from_str::<SessionConfig>(r#"{"full_rotations":0}"#).is_err());
        assert!(serde_json::from_str::<SessionConfig>(r#"{"total_attempts":0}"#).is_err());

        let config = SessionConfig {
            full_rotations: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(SessionConfigError::NoFullRotations));
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "segment source returned 12")]
    #[cfg(debug_assertions)]
    fn test_out_of_range_segment_is_caught_in_debug() {
        let config = WheelConfig::default();
        choose_outcome(&config, 3, &mut Scripted(VecDeque::from([12])));
    }
}
