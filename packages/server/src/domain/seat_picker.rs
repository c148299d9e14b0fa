//! Choice of the first potato holder, injectable for testing.

use rand::Rng;

use super::value_object::SeatIndex;

/// Picks a seat in `0..capacity`
pub trait SeatPicker: Send + Sync {
    fn pick(&self, capacity: usize) -> SeatIndex;
}

/// Uniformly random picker (uses the thread-local RNG)
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeatPicker;

impl SeatPicker for RandomSeatPicker {
    fn pick(&self, capacity: usize) -> SeatIndex {
        SeatIndex::new(rand::rng().random_range(0..capacity))
    }
}

/// Picker that always returns the same seat
#[derive(Debug, Clone, Copy)]
pub struct FixedSeatPicker {
    seat: SeatIndex,
}

impl FixedSeatPicker {
    pub fn new(seat: usize) -> Self {
        Self {
            seat: SeatIndex::new(seat),
        }
    }
}

impl SeatPicker for FixedSeatPicker {
    fn pick(&self, _capacity: usize) -> SeatIndex {
        self.seat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_stays_in_range_and_covers_all_seats() {
        // テスト項目: RandomSeatPicker が 0..4 の範囲で全座席を選び得る
        // given (前提条件):
        let picker = RandomSeatPicker;
        let mut seen = [0usize; 4];

        // when (操作):
        for _ in 0..4000 {
            let seat = picker.pick(4);
            assert!(seat.value() < 4);
            seen[seat.value()] += 1;
        }

        // then (期待する結果):
        // each bucket expects ~1000; 700 is far outside normal variance
        for count in seen {
            assert!(count > 700, "distribution too skewed: {seen:?}");
        }
    }

    #[test]
    fn test_fixed_picker_returns_configured_seat() {
        // given (前提条件):
        let picker = FixedSeatPicker::new(2);

        // when (操作):
        let seat = picker.pick(4);

        // then (期待する結果):
        assert_eq!(seat, SeatIndex::new(2));
    }
}
