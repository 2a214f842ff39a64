use yew::prelude::*;

/// Remaining-seconds state for the offer countdown. Ticked once per second
/// by the interval the landing page owns; saturates at zero.
pub struct CountdownState {
    remaining: u64,
}

impl CountdownState {
    pub fn new(start_seconds: u64) -> Self {
        Self {
            remaining: start_seconds,
        }
    }

    /// One 1-second tick. Returns the new value; once at zero, stays at zero.
    pub fn tick(&mut self) -> u64 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

/// Floors a raw second count to a displayable value. Negative or non-finite
/// input becomes zero.
pub fn clamp_non_negative(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw.floor() as u64
    } else {
        0
    }
}

/// HH/MM/SS projection of a second count. Holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DisplayParts {
    pub fn from_seconds(raw: f64) -> Self {
        let total = clamp_non_negative(raw);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

/// Zero-pads to two digits; hour counts past 99 keep their natural width.
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub total_seconds: f64,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let parts = DisplayParts::from_seconds(props.total_seconds);

    html! {
        <div class="countdown">
            <TimeBlock value={pad2(parts.hours)} label="HORAS" />
            <span class="countdown-separator">{":"}</span>
            <TimeBlock value={pad2(parts.minutes)} label="MIN" />
            <span class="countdown-separator">{":"}</span>
            <TimeBlock value={pad2(parts.seconds)} label="SEG" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimeBlockProps {
    value: String,
    label: &'static str,
}

#[function_component(TimeBlock)]
fn time_block(props: &TimeBlockProps) -> Html {
    html! {
        <div class="countdown-block">
            <div class="countdown-value">{ &props.value }</div>
            <div class="countdown-label">{ props.label }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn formatted(total: u64) -> (String, String, String) {
        let parts = DisplayParts::from_seconds(total as f64);
        (pad2(parts.hours), pad2(parts.minutes), pad2(parts.seconds))
    }

    fn tick_n(state: &mut CountdownState, n: u64) -> u64 {
        let mut last = 0;
        for _ in 0..n {
            last = state.tick();
        }
        last
    }

    #[test]
    fn parts_recompose_to_the_original_value() {
        for s in [0u64, 1, 59, 60, 61, 3599, 3600, 3661, 4416, 86_399, 360_000] {
            let parts = DisplayParts::from_seconds(s as f64);
            assert_eq!(parts.hours * 3600 + parts.minutes * 60 + parts.seconds, s);
        }
    }

    #[test]
    fn negative_and_non_finite_inputs_clamp_to_zero() {
        for raw in [
            -1.0,
            -0.0,
            -4416.0,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ] {
            assert_eq!(clamp_non_negative(raw), 0);
        }
        assert_eq!(
            DisplayParts::from_seconds(f64::NAN),
            DisplayParts::from_seconds(0.0)
        );
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(clamp_non_negative(7.9), 7);
        assert_eq!(clamp_non_negative(0.4), 0);
    }

    #[test]
    fn tick_at_zero_stays_at_zero() {
        let mut state = CountdownState::new(0);
        assert_eq!(state.tick(), 0);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn ticks_decrease_monotonically_and_saturate() {
        let mut state = CountdownState::new(5);
        let observed: Vec<u64> = (0..8).map(|_| state.tick()).collect();
        assert_eq!(observed, vec![4, 3, 2, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn single_digit_components_are_zero_padded() {
        for v in 0..=9 {
            assert_eq!(pad2(v), format!("0{}", v));
        }
        assert_eq!(pad2(10), "10");
        assert_eq!(pad2(59), "59");
    }

    #[test]
    fn hours_past_two_digits_are_not_truncated() {
        let parts = DisplayParts::from_seconds(360_000.0);
        assert_eq!(parts.hours, 100);
        assert_eq!(pad2(parts.hours), "100");
    }

    #[test]
    fn offer_countdown_scenario() {
        assert_eq!(config::CTA_COUNTDOWN_START, 4416);
        assert_eq!(
            formatted(config::CTA_COUNTDOWN_START),
            ("01".to_string(), "13".to_string(), "36".to_string())
        );

        let mut state = CountdownState::new(config::CTA_COUNTDOWN_START);

        let after_36 = tick_n(&mut state, 36);
        assert_eq!(after_36, 4380);
        assert_eq!(
            formatted(after_36),
            ("01".to_string(), "13".to_string(), "00".to_string())
        );

        let after_hour = tick_n(&mut state, 3600);
        assert_eq!(after_hour, 780);
        assert_eq!(
            formatted(after_hour),
            ("00".to_string(), "13".to_string(), "00".to_string())
        );

        let exhausted = tick_n(&mut state, 780);
        assert_eq!(exhausted, 0);

        let past_zero = tick_n(&mut state, 5);
        assert_eq!(past_zero, 0);
        assert_eq!(
            formatted(past_zero),
            ("00".to_string(), "00".to_string(), "00".to_string())
        );
    }
}
