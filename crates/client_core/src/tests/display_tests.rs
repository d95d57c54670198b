use super::*;

fn success(text: &str) -> CommandOutcome {
    CommandOutcome::Success(text.to_string())
}

#[test]
fn starts_idle_with_empty_text() {
    let display = OutcomeDisplay::new();
    assert!(display.is_idle());
    assert_eq!(display.text(), "");
    assert_eq!(display.shown_ticket(), None);
    assert_eq!(display.last_outcome(), None);
}

#[test]
fn first_resolution_enters_displaying() {
    let mut display = OutcomeDisplay::new();
    assert!(display.accept(Ticket(1), success("Hello, Ada! Welcome!")));
    assert_eq!(
        display.state(),
        &DisplayState::Displaying("Hello, Ada! Welcome!".to_string())
    );
}

#[test]
fn failures_are_shown_with_error_prefix() {
    let mut display = OutcomeDisplay::new();
    display.accept(Ticket(1), CommandOutcome::Failure("network down".to_string()));
    assert_eq!(display.text(), "Error: network down");
    assert!(!display.is_idle());
}

#[test]
fn newer_outcome_replaces_older_one() {
    let mut display = OutcomeDisplay::new();
    display.accept(Ticket(1), success("first"));
    display.accept(Ticket(2), success("second"));
    assert_eq!(display.text(), "second");
    assert_eq!(display.shown_ticket(), Some(Ticket(2)));
}

#[test]
fn stale_outcome_resolving_late_is_discarded() {
    let mut display = OutcomeDisplay::new();
    assert!(display.accept(Ticket(2), success("newer")));
    assert!(!display.accept(Ticket(1), success("older")));
    assert_eq!(display.text(), "newer");
    assert_eq!(display.last_outcome(), Some(&success("newer")));
}

#[test]
fn same_ticket_may_refresh_the_display() {
    let mut display = OutcomeDisplay::new();
    display.accept(Ticket(3), success("a"));
    assert!(display.accept(Ticket(3), success("b")));
    assert_eq!(display.text(), "b");
}
