use super::*;

#[test]
fn test_progress_bar_hidden_in_quiet_mode() {
    let progress = LintProgress::new(100, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.counter.load(Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn test_progress_bar_increment() {
    let progress = LintProgress::new(10, true);

    for _ in 0..10 {
        progress.inc();
    }

    assert_eq!(progress.counter.load(Ordering::Relaxed), 10);
    progress.finish();
}

#[test]
fn test_progress_bar_clone_shares_the_counter() {
    let progress = LintProgress::new(100, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.counter.load(Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn test_visible_progress_bar_construction() {
    // Forces the styled path even when stderr is not a terminal.
    let progress = LintProgress::new_with_visibility(5, false, true);
    progress.inc();
    progress.finish();
}
