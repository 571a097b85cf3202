use super::*;

#[test]
fn initial_state_is_closed() {
    assert_eq!(MapState::default(), MapState::Closed);
    assert!(!MapState::default().is_open());
}

#[test]
fn toggle_flips_both_ways() {
    assert_eq!(MapState::Closed.toggled(), MapState::Open);
    assert_eq!(MapState::Open.toggled(), MapState::Closed);
}

#[test]
fn even_number_of_toggles_returns_to_start() {
    let mut state = MapState::Closed;
    for _ in 0..6 {
        state = state.toggled();
    }
    assert_eq!(state, MapState::Closed);
}
