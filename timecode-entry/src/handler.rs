//! Key-press handling.
//!
//! [`handle_key`] is a pure function of the field state, the key and the
//! configuration. It never touches a UI toolkit; the response tells the
//! caller whether the key was consumed and where focus should go.

use crate::config::{EntryConfig, InputStyle, ValidationPolicy};
use crate::state::EntryState;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use timecode_core::validation::valid_range;
use timecode_core::TimecodeComponent;
use tracing::{debug, trace};

/// A key press delivered to an entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character.
    Character(char),
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Tab.
    Tab,
    /// Shift-tab.
    BackTab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Escape.
    Escape,
    /// Return or enter.
    Return,
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            '\t' => Key::Tab,
            '\r' | '\n' => Key::Return,
            '\u{1b}' => Key::Escape,
            '\u{8}' | '\u{7f}' => Key::Backspace,
            c => Key::Character(c),
        }
    }
}

/// What the field did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyOutcome {
    /// The key was consumed.
    Handled,
    /// The key was not consumed; the caller may pass it on.
    Ignored,
    /// The caller should run its escape action.
    DeferToEscape,
    /// The caller should run its return action.
    DeferToReturn,
}

/// Direction focus moved between components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusMove {
    /// Towards days.
    Previous,
    /// Towards sub-frames.
    Next,
}

/// Why a key was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The character has no meaning in a timecode field.
    #[error("Invalid character: {0:?}")]
    InvalidCharacter(char),

    /// The digit would put the component out of its valid range.
    #[error("Value {value} out of range for {component}")]
    OutOfRange {
        /// Component being typed into.
        component: TimecodeComponent,
        /// Value the digit would have produced.
        value: i32,
    },
}

/// Result of [`handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    /// What happened to the key.
    pub outcome: KeyOutcome,
    /// Focus movement, if any.
    pub focus: Option<FocusMove>,
    /// Reason the key was refused, if it was.
    pub rejection: Option<Rejection>,
    /// Field state after the key.
    pub state: EntryState,
}

impl KeyResponse {
    fn handled(state: EntryState) -> Self {
        Self {
            outcome: KeyOutcome::Handled,
            focus: None,
            rejection: None,
            state,
        }
    }

    fn with_outcome(outcome: KeyOutcome, state: EntryState) -> Self {
        Self {
            outcome,
            ..Self::handled(state)
        }
    }

    fn moved(state: EntryState, direction: FocusMove) -> Self {
        Self {
            focus: Some(direction),
            ..Self::handled(state)
        }
    }

    fn rejected(state: EntryState, rejection: Rejection) -> Self {
        Self {
            rejection: Some(rejection),
            ..Self::with_outcome(KeyOutcome::Ignored, state)
        }
    }
}

/// Handle one key press.
pub fn handle_key(state: &EntryState, key: Key, config: &EntryConfig) -> KeyResponse {
    let response = match key {
        Key::Character(c) => match c {
            '0'..='9' => type_digit(state, c as i32 - '0' as i32, config),
            ':' | ';' | '.' | ' ' => move_focus(state, FocusMove::Next, config),
            c => KeyResponse::rejected(*state, Rejection::InvalidCharacter(c)),
        },
        Key::Left | Key::BackTab => move_focus(state, FocusMove::Previous, config),
        Key::Right | Key::Tab => move_focus(state, FocusMove::Next, config),
        Key::Up => KeyResponse::handled(step_value(state, 1)),
        Key::Down => KeyResponse::handled(step_value(state, -1)),
        Key::Backspace => {
            let mut next = *state;
            let value = state.components.get(state.focus);
            next.components.set(state.focus, value / 10);
            next.digits_entered = state.digits_entered.saturating_sub(1);
            KeyResponse::handled(next)
        }
        Key::Delete => {
            let mut next = *state;
            next.components.set(state.focus, 0);
            next.digits_entered = 0;
            KeyResponse::handled(next)
        }
        Key::Escape => KeyResponse::with_outcome(KeyOutcome::DeferToEscape, *state),
        Key::Return => KeyResponse::with_outcome(KeyOutcome::DeferToReturn, *state),
    };

    trace!(
        ?key,
        outcome = ?response.outcome,
        focus = %response.state.focus,
        "Handled entry key"
    );
    response
}

fn neighbour(
    state: &EntryState,
    direction: FocusMove,
    config: &EntryConfig,
) -> Option<TimecodeComponent> {
    let visible = state.visible_components(config);
    let index = visible.iter().position(|&component| component == state.focus)?;
    match direction {
        FocusMove::Previous => index.checked_sub(1).map(|i| visible[i]),
        FocusMove::Next => visible.get(index + 1).copied(),
    }
}

/// Ignored at either end so the caller can move focus out of the field.
fn move_focus(state: &EntryState, direction: FocusMove, config: &EntryConfig) -> KeyResponse {
    match neighbour(state, direction, config) {
        Some(component) => {
            let mut next = *state;
            next.focus = component;
            next.digits_entered = 0;
            KeyResponse::moved(next, direction)
        }
        None => KeyResponse::with_outcome(KeyOutcome::Ignored, *state),
    }
}

/// Increment or decrement the focused component, wrapping inside its range.
fn step_value(state: &EntryState, delta: i32) -> EntryState {
    let range = valid_range(state.focus, &state.components, &state.properties);
    let (start, end) = (*range.start(), *range.end());
    let value = state.components.get(state.focus);
    let stepped = if delta > 0 {
        if value < start || value >= end {
            start
        } else {
            value + 1
        }
    } else if value <= start || value > end {
        end
    } else {
        value - 1
    };

    let mut next = *state;
    next.components.set(state.focus, stepped);
    next.digits_entered = 0;
    next
}

fn type_digit(state: &EntryState, digit: i32, config: &EntryConfig) -> KeyResponse {
    let component = state.focus;
    let width = state.digit_count(component);
    let current = state.components.get(component);
    let fresh = state.digits_entered == 0;

    let (value, entered) = match config.input_style {
        InputStyle::AutoAdvance => {
            if fresh || state.digits_entered >= width {
                (digit, 1)
            } else {
                (current * 10 + digit, state.digits_entered + 1)
            }
        }
        InputStyle::ContinuousWithinComponent => {
            let modulus = 10i32.pow(width as u32);
            (
                (current.rem_euclid(modulus) * 10 + digit) % modulus,
                (state.digits_entered + 1).min(width),
            )
        }
        InputStyle::Unbounded => {
            let appended = if fresh {
                Some(digit)
            } else {
                current.checked_mul(10).and_then(|v| v.checked_add(digit))
            };
            match appended {
                Some(value) => (value, state.digits_entered + 1),
                None => {
                    return KeyResponse::rejected(
                        *state,
                        Rejection::OutOfRange {
                            component,
                            value: current,
                        },
                    )
                }
            }
        }
    };

    let complete = entered >= width;
    let components = state.components.with(component, value);

    if config.validation_policy == ValidationPolicy::EnforceValid {
        let range = valid_range(component, &components, &state.properties);
        // partial input only has to leave room below the upper bound
        let accepted = if complete {
            range.contains(&value)
        } else {
            value <= *range.end()
        };
        if !accepted {
            debug!(%component, value, "Rejected out-of-range entry");
            return KeyResponse::rejected(*state, Rejection::OutOfRange { component, value });
        }
    }

    let mut next = *state;
    next.components = components;
    next.digits_entered = entered;

    if complete && config.input_style == InputStyle::AutoAdvance {
        if let Some(following) = neighbour(state, FocusMove::Next, config) {
            next.focus = following;
            next.digits_entered = 0;
            return KeyResponse::moved(next, FocusMove::Next);
        }
    }
    KeyResponse::handled(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use timecode_core::{Components, Properties, TimecodeFrameRate, UpperLimit};

    fn state(rate: TimecodeFrameRate) -> EntryState {
        EntryState::new(Properties::new(rate))
    }

    fn type_keys(mut state: EntryState, keys: &str, config: &EntryConfig) -> EntryState {
        for c in keys.chars() {
            state = handle_key(&state, Key::from(c), config).state;
        }
        state
    }

    #[test]
    fn test_auto_advance() {
        let config = EntryConfig::default();
        let start = state(TimecodeFrameRate::Fps25);

        let first = handle_key(&start, Key::Character('0'), &config);
        assert_eq!(first.outcome, KeyOutcome::Handled);
        assert_eq!(first.focus, None);

        let second = handle_key(&first.state, Key::Character('1'), &config);
        assert_eq!(second.focus, Some(FocusMove::Next));
        assert_eq!(second.state.focus, TimecodeComponent::Minutes);

        let typed = type_keys(start, "01020304", &config);
        assert_eq!(typed.components, Components::hmsf(1, 2, 3, 4));
        assert_eq!(typed.focus, TimecodeComponent::Frames);

        // the last component starts over once full
        let typed = type_keys(typed, "1", &config);
        assert_eq!(typed.components.frames, 1);
    }

    #[test]
    fn test_continuous_within_component() {
        let config = EntryConfig::default().with_input_style(InputStyle::ContinuousWithinComponent);
        let typed = type_keys(state(TimecodeFrameRate::Fps25), "123", &config);
        assert_eq!(typed.focus, TimecodeComponent::Hours);
        assert_eq!(typed.components.hours, 23);
    }

    #[test]
    fn test_unbounded() {
        let config = EntryConfig::default().with_input_style(InputStyle::Unbounded);
        let typed = type_keys(state(TimecodeFrameRate::Fps25), "1234", &config);
        assert_eq!(typed.focus, TimecodeComponent::Hours);
        assert_eq!(typed.components.hours, 1234);

        let mut full = typed;
        full.components.hours = i32::MAX;
        let response = handle_key(&full, Key::Character('9'), &config);
        assert_eq!(response.outcome, KeyOutcome::Ignored);
        assert_eq!(response.state, full);
    }

    #[test]
    fn test_enforce_valid_rejects_out_of_range() {
        let config = EntryConfig::default().with_validation_policy(ValidationPolicy::EnforceValid);
        let start = state(TimecodeFrameRate::Fps24);

        let partial = handle_key(&start, Key::Character('3'), &config);
        assert_eq!(partial.outcome, KeyOutcome::Handled);

        let response = handle_key(&partial.state, Key::Character('0'), &config);
        assert_eq!(response.outcome, KeyOutcome::Ignored);
        assert_eq!(
            response.rejection,
            Some(Rejection::OutOfRange {
                component: TimecodeComponent::Hours,
                value: 30,
            })
        );
        assert_eq!(response.state, partial.state);
    }

    #[test]
    fn test_enforce_valid_drop_frame() {
        let config = EntryConfig::default().with_validation_policy(ValidationPolicy::EnforceValid);
        let mut start = state(TimecodeFrameRate::Fps29_97d);
        start.components = Components::hmsf(0, 1, 0, 0);
        let start = start.focused(TimecodeComponent::Frames, &config).unwrap();

        let typed = type_keys(start, "0", &config);
        assert_eq!(typed.digits_entered, 1);
        let response = handle_key(&typed, Key::Character('1'), &config);
        assert!(response.rejection.is_some());

        let typed = type_keys(start, "02", &config);
        assert_eq!(typed.components.frames, 2);
    }

    #[test]
    fn test_allow_invalid_keeps_values() {
        let typed = type_keys(state(TimecodeFrameRate::Fps24), "99", &EntryConfig::default());
        assert_eq!(typed.components.hours, 99);
    }

    #[test]
    fn test_separators_and_arrows() {
        let config = EntryConfig::default();
        let start = state(TimecodeFrameRate::Fps25);

        for separator in [':', ';', '.', ' '] {
            let response = handle_key(&start, Key::Character(separator), &config);
            assert_eq!(response.focus, Some(FocusMove::Next));
            assert_eq!(response.state.focus, TimecodeComponent::Minutes);
        }

        let response = handle_key(&start, Key::Left, &config);
        assert_eq!(response.outcome, KeyOutcome::Ignored);
        assert_eq!(response.rejection, None);

        let frames = start.focused(TimecodeComponent::Frames, &config).unwrap();
        let response = handle_key(&frames, Key::Tab, &config);
        assert_eq!(response.outcome, KeyOutcome::Ignored);

        let response = handle_key(&frames, Key::BackTab, &config);
        assert_eq!(response.focus, Some(FocusMove::Previous));
        assert_eq!(response.state.focus, TimecodeComponent::Seconds);
    }

    #[test]
    fn test_days_field() {
        let config = EntryConfig::default();
        let start = EntryState::new(
            Properties::new(TimecodeFrameRate::Fps25).with_upper_limit(UpperLimit::Max100Days),
        );
        let response = handle_key(&start, Key::Left, &config);
        assert_eq!(response.state.focus, TimecodeComponent::Days);

        let typed = type_keys(response.state, "42", &config);
        assert_eq!(typed.components.days, 42);
        assert_eq!(typed.focus, TimecodeComponent::Hours);
    }

    #[test]
    fn test_up_down_wrap() {
        let config = EntryConfig::default();
        let start = state(TimecodeFrameRate::Fps24);

        let down = handle_key(&start, Key::Down, &config);
        assert_eq!(down.state.components.hours, 23);
        let up = handle_key(&down.state, Key::Up, &config);
        assert_eq!(up.state.components.hours, 0);

        let mut drop = state(TimecodeFrameRate::Fps29_97d);
        drop.components = Components::hmsf(0, 1, 0, 2);
        let drop = drop.focused(TimecodeComponent::Frames, &config).unwrap();
        let down = handle_key(&drop, Key::Down, &config);
        assert_eq!(down.state.components.frames, 29);
    }

    #[test]
    fn test_backspace_and_delete() {
        let config = EntryConfig::default().with_input_style(InputStyle::ContinuousWithinComponent);
        let typed = type_keys(state(TimecodeFrameRate::Fps24), "12", &config);

        let back = handle_key(&typed, Key::Backspace, &config);
        assert_eq!(back.state.components.hours, 1);
        assert_eq!(back.state.digits_entered, 1);

        let deleted = handle_key(&typed, Key::Delete, &config);
        assert_eq!(deleted.state.components.hours, 0);
        assert_eq!(deleted.state.digits_entered, 0);
    }

    #[test]
    fn test_escape_return_and_invalid_characters() {
        let config = EntryConfig::default();
        let start = state(TimecodeFrameRate::Fps24);

        assert_eq!(
            handle_key(&start, Key::Escape, &config).outcome,
            KeyOutcome::DeferToEscape
        );
        assert_eq!(
            handle_key(&start, Key::from('\r'), &config).outcome,
            KeyOutcome::DeferToReturn
        );

        let response = handle_key(&start, Key::Character('x'), &config);
        assert_eq!(response.outcome, KeyOutcome::Ignored);
        assert_eq!(response.rejection, Some(Rejection::InvalidCharacter('x')));
        assert_eq!(response.state, start);
    }
}
