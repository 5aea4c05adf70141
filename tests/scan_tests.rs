//! Integration tests for the scan pipeline.

use vigorish::config::Config;
use vigorish::domain::{
    consensus_probability, rank_bets, scan_events, sharp_outliers, ConsensusBlend,
    PerturbedImplied, ProbabilityEstimator, RankingConfig, ScanConfig,
};
use vigorish::testkit::{event_with_quotes, sample_board, seeded_rng, FixedEstimator};

#[test]
fn fixed_estimator_finds_the_underpriced_side() {
    let board = sample_board();
    // 0.45 true probability beats the ~0.40 implied by +150/+155 but none of
    // the favorite prices.
    let bets = scan_events(&board, &ScanConfig::default(), &mut FixedEstimator(0.45)).unwrap();

    assert_eq!(bets.len(), 2);
    assert!(bets.iter().all(|b| b.matchup().contains("Detroit Lions")));
    // best price first
    assert_eq!(bets[0].odds(), 155.0);
    assert!(bets[0].expected_value() >= bets[1].expected_value());
}

#[test]
fn scan_results_rank_with_book_bonus() {
    let board = sample_board();
    let bets = scan_events(&board, &ScanConfig::default(), &mut FixedEstimator(0.45)).unwrap();
    let ranked = rank_bets(bets, &RankingConfig::default());

    // FanDuel's +155 wins on raw score and carries the bonus too.
    assert_eq!(ranked[0].bet().bookmaker(), "FanDuel");
    assert!(ranked[0].score() > ranked[1].score());
}

#[test]
fn seeded_scans_are_reproducible() {
    let board = sample_board();
    let config = ScanConfig::default();

    let mut first = PerturbedImplied::new(seeded_rng(42));
    let mut second = PerturbedImplied::new(seeded_rng(42));

    let a = scan_events(&board, &config, &mut first).unwrap();
    let b = scan_events(&board, &config, &mut second).unwrap();

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.expected_value(), y.expected_value());
        assert_eq!(x.edge(), y.edge());
    }
}

#[test]
fn consensus_blend_tracks_the_board() {
    let event = event_with_quotes(
        "NFL",
        "Home",
        "Away",
        &[("A", "Home", -110.0), ("B", "Home", -110.0)],
    );
    let implied = 110.0 / 210.0;
    assert!((consensus_probability(&event, "Home") - implied).abs() < 1e-9);

    let mut estimator = ConsensusBlend::new(seeded_rng(7));
    let estimate = estimator.estimate(
        vigorish::domain::Odds::american(-110).unwrap().implied_probability(),
        "Home",
        &event,
    );
    // blend of two equal terms plus bounded noise stays near the implied value
    assert!((estimate.value() - implied).abs() < 0.01);
}

#[test]
fn pipeline_end_to_end_with_fixed_estimator() {
    let board = sample_board();
    let config = Config::default();
    let mut estimator = FixedEstimator(0.45);

    let ranked = vigorish::app::scan_and_rank(&board, &config, &mut estimator).unwrap();

    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].score() >= ranked[1].score());
}

#[test]
fn unusable_quotes_do_not_abort_the_board() {
    let board = vec![event_with_quotes(
        "NFL",
        "Home",
        "Away",
        &[("A", "Home", 0.0), ("B", "Home", -50.0), ("C", "Home", 150.0)],
    )];
    let bets = scan_events(&board, &ScanConfig::default(), &mut FixedEstimator(0.55)).unwrap();
    assert_eq!(bets.len(), 1);
    assert_eq!(bets[0].bookmaker(), "C");
}

#[test]
fn sharp_outliers_respect_the_threshold() {
    let event = event_with_quotes(
        "NFL",
        "Home",
        "Away",
        &[
            ("A", "Home", -110.0),
            ("B", "Home", -108.0),
            ("C", "Home", -112.0),
            ("D", "Home", -150.0),
        ],
    );

    assert_eq!(sharp_outliers(&event, 15.0), vec![-150.0]);
    assert!(sharp_outliers(&event, 50.0).is_empty());
}
