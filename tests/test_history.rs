use sigcga::{
    history::{DoublingHistory, History, HistoryKind, HistorySummary},
    rng::RandomNumberGenerator,
    significance::{significance, Decision},
};

fn spans(history: &History) -> Vec<u64> {
    history.iter().map(|w| w.span).collect()
}

#[test]
fn test_simple_scenario_against_significance() {
    let n = 50usize;
    let ln_n = (n as f64).ln();
    let mut history = History::new(HistoryKind::Simple, n);

    for _ in 0..40 {
        history.add(1);
    }
    for _ in 0..10 {
        history.add(0);
    }
    let windows = history.windows();
    assert_eq!(windows, vec![HistorySummary::new(40, 10)]);

    // eps = 5 demands more than 74 ones out of 50: no decision.
    assert_eq!(
        significance(0.5, &windows[0], 5.0, ln_n),
        Decision::Stay
    );
    // eps = 1 only needs about 35.
    assert_eq!(
        significance(0.5, &windows[0], 1.0, ln_n),
        Decision::Increase
    );

    // Ten more ones are still not enough at eps = 5.
    for _ in 0..10 {
        history.add(1);
    }
    let window = history.windows()[0];
    assert_eq!(window, HistorySummary::new(50, 10));
    assert_eq!(significance(0.5, &window, 5.0, ln_n), Decision::Stay);

    history.wipe();
    assert_eq!(history.windows(), vec![HistorySummary::default()]);
}

#[test]
fn test_doubling_scenario_min_size_three() {
    // floor(ln 50) = 3
    let mut history = History::new(HistoryKind::Doubling, 50);
    for _ in 0..3 {
        history.add(1);
    }
    assert_eq!(spans(&history), vec![3]);

    history.add(1);
    assert_eq!(spans(&history), vec![1, 3]);

    for _ in 0..5 {
        history.add(0);
    }
    assert_eq!(spans(&history), vec![3, 3, 3]);

    history.add(0);
    assert_eq!(spans(&history), vec![1, 3, 6]);
    assert_eq!(history.windows()[2], HistorySummary::new(4, 2));
}

#[test]
fn test_doubling_detects_recent_shift() {
    // After a long alternating stretch, a run of ones shows up in the newest
    // windows of the doubling history well before the single window of the
    // simple history moves enough.
    let n = 100usize;
    let ln_n = (n as f64).ln();
    let mut simple = History::new(HistoryKind::Simple, n);
    let mut doubling = History::new(HistoryKind::Doubling, n);

    for i in 0..4000 {
        let bit = (i % 2) as u8;
        simple.add(bit);
        doubling.add(bit);
    }

    let fires = |h: &History| {
        h.iter()
            .any(|w| significance(0.5, &w, 1.0, ln_n) == Decision::Increase)
    };
    assert!(!fires(&simple));

    let mut doubling_fired_at = None;
    for step in 1..=2000 {
        simple.add(1);
        doubling.add(1);
        if doubling_fired_at.is_none() && fires(&doubling) {
            doubling_fired_at = Some(step);
        }
        if fires(&simple) {
            let at = doubling_fired_at.expect("doubling history should fire first");
            assert!(at < step);
            return;
        }
    }
    assert!(doubling_fired_at.is_some());
}

#[test]
fn test_doubling_chain_stays_logarithmic() {
    let mut history = DoublingHistory::new(1000);
    let mut rng = RandomNumberGenerator::from_seed(99);
    let adds = 200_000u64;
    for _ in 0..adds {
        history.add(u8::from(rng.uniform() < 0.3));
    }
    let bound = 2.0 * ((adds as f64 / history.min_size() as f64) + 1.0).log2() + 2.0;
    assert!((history.len() as f64) <= bound);
    assert_eq!(history.iter().map(|w| w.span).sum::<u64>(), adds);
}

#[test]
fn test_fresh_histories_equal_wiped_ones() {
    for kind in [HistoryKind::Simple, HistoryKind::Doubling] {
        let mut history = History::new(kind, 30);
        for i in 0..77 {
            history.add((i % 2) as u8);
        }
        history.wipe();
        history.wipe();
        assert_eq!(history, History::new(kind, 30));
    }
}
