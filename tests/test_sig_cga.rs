use sigcga::{
    benchmarks::{one_max, Budget, Problem},
    candidate::Candidate,
    error::OptimizerError,
    history::HistoryKind,
    optimizer::{Optimizer, SigCga, SigCgaOptions},
    rng::RandomNumberGenerator,
};

#[test]
fn test_constant_fitness_stops_after_ten_evaluations() {
    let options = SigCgaOptions::builder()
        .problem_size(50)
        .epsilon(5.0)
        .history(HistoryKind::Doubling)
        .build();
    let mut sig = SigCga::new(options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let constant = |_: &Candidate| 0.0_f64;
    let stop = |evaluations: usize, _: f64| evaluations >= 10;

    let result = sig.run(&constant, &stop, &mut rng).unwrap();
    assert_eq!(result.evaluations, 10);
    assert_eq!(result.best_fitness, 0.0);
}

#[test]
fn test_solves_one_max() {
    for history in [HistoryKind::Simple, HistoryKind::Doubling] {
        let n = 30;
        let options = SigCgaOptions::new(n, 1.0, history);
        let mut sig = SigCga::new(options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let budget = Budget::new(20_000, n as f64);
        let result = sig.run(&one_max, &budget, &mut rng).unwrap();
        assert_eq!(result.best_fitness, n as f64, "{:?} did not solve OneMax", history);
        assert!(result.evaluations < budget.max_evaluations);
    }
}

#[test]
fn test_same_seed_same_result() {
    let options = SigCgaOptions::new(40, 1.0, HistoryKind::Doubling);
    let budget = Problem::LeadingOnes.budget(40).unwrap();

    let mut a = SigCga::new(options.clone()).unwrap();
    let mut b = SigCga::new(options).unwrap();
    let ra = a
        .run(&Problem::LeadingOnes, &budget, &mut RandomNumberGenerator::from_seed(7))
        .unwrap();
    let rb = b
        .run(&Problem::LeadingOnes, &budget, &mut RandomNumberGenerator::from_seed(7))
        .unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a.frequencies(), b.frequencies());
}

#[test]
fn test_rejects_degenerate_configuration() {
    let result = SigCga::new(SigCgaOptions::new(1, 1.0, HistoryKind::Simple));
    match result {
        Err(OptimizerError::Configuration(msg)) => {
            assert!(msg.contains("Problem size must be greater than 1"));
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_usable_as_trait_object() {
    let mut optimizers: Vec<Box<dyn Optimizer>> = vec![
        Box::new(SigCga::new(SigCgaOptions::new(10, 1.0, HistoryKind::Simple)).unwrap()),
        Box::new(SigCga::new(SigCgaOptions::new(10, 1.0, HistoryKind::Doubling)).unwrap()),
    ];
    for optimizer in optimizers.iter_mut() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let stop = |evaluations: usize, _: f64| evaluations >= 20;
        let result = optimizer.run(&one_max, &stop, &mut rng).unwrap();
        assert_eq!(result.evaluations, 20);
        assert_eq!(optimizer.name(), "sig-cGA");
    }
}
