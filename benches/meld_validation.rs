use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rummy_engine::cards::{CardCatalog, Coordinates};
use rummy_engine::melds::{MeldValidator, ValidationMode};
use rummy_engine::rules::{RulesEngine, TurnEngine};

fn bench_validator(c: &mut Criterion) {
    let validator = MeldValidator::default();
    let run: Vec<Coordinates> = [(5, 2), (3, 2), (4, 2), (6, 2)].map(Coordinates::from).to_vec();
    let catalog = CardCatalog::standard();
    let pool: Vec<Coordinates> = catalog.cards().take(20).map(|card| catalog.coordinates_of(card)).collect();

    c.bench_function("selecting_suit_meld", |b| {
        b.iter(|| validator.is_valid_meld(ValidationMode::Selecting, black_box(&run), Coordinates::new(5, 2)))
    });
    c.bench_function("probing_20_card_pool", |b| {
        b.iter(|| validator.is_valid_meld(ValidationMode::Probing, black_box(&pool), Coordinates::new(4, 3)))
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let engine = TurnEngine::default();
    let mut state = engine.start_game("Ann", "Bo", Some(42));
    // Build up a discard pile so every pickup index gets tried
    for _ in 0..10 {
        engine.draw_from_deck(&mut state).ok();
        engine.discard_card(&mut state, 0).ok();
    }

    c.bench_function("legal_actions_picking", |b| b.iter(|| engine.legal_actions(black_box(&state))));
}

criterion_group!(benches, bench_validator, bench_legal_actions);
criterion_main!(benches);
