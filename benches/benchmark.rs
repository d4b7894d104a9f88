use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoops_core::constants::TEAMS;
use hoops_core::game::{simulate_game, GameKind};
use hoops_core::odds::estimate_odds;
use hoops_core::playoffs::simulate_playoffs;
use hoops_core::profile::{NormalParams, PlayerProfile, RateParams};
use hoops_core::standings::Standings;
use hoops_core::team::{Conference, Roster};
use hoops_core::{sample_box_score, League, LeagueState, Period, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_player(usage: f64) -> PlayerProfile {
    PlayerProfile {
        two_pt_attempts: NormalParams::new(10.0 * usage, 3.0 * usage),
        three_pt_attempts: NormalParams::new(5.0 * usage, 2.0 * usage),
        free_throw_attempts: NormalParams::new(4.0 * usage, 2.0 * usage),
        two_pt_make: RateParams::new(11.0, 10.0),
        three_pt_make: RateParams::new(8.0, 13.0),
        free_throw_make: RateParams::new(16.0, 5.0),
        assists: NormalParams::new(4.0 * usage, 2.0),
        rebounds: NormalParams::new(6.0 * usage, 2.5),
        steals: NormalParams::new(usage, 0.8),
        blocks: NormalParams::new(0.7 * usage, 0.7),
        current_minutes: 34.0 * usage,
        previous_minutes: 33.0 * usage,
    }
}

fn create_league() -> League {
    let usages = [1.2, 1.1, 1.0, 0.9, 0.9, 0.6, 0.5, 0.4, 0.3];
    let rosters = TEAMS
        .iter()
        .map(|code| {
            usages
                .iter()
                .enumerate()
                .fold(Roster::new(code), |roster, (i, usage)| {
                    roster.with_player(&format!("{} {}", code, i + 1), create_player(*usage))
                })
        })
        .collect();
    League::new(rosters, SimConfig::default()).expect("benchmark league is valid")
}

fn bench_sample_box_score(c: &mut Criterion) {
    let profile = create_player(1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("sample_box_score", |b| {
        b.iter(|| sample_box_score(black_box(&profile), Period::Full, &mut rng))
    });
}

fn bench_simulate_game(c: &mut Criterion) {
    let league = create_league();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_game", |b| {
        b.iter(|| {
            let mut state = LeagueState::new(&league);
            simulate_game(&league, &mut state, &mut rng, "G", "PHI", "BOS", GameKind::RegularSeason)
        })
    });
}

fn bench_playoffs(c: &mut Criterion) {
    let league = create_league();
    let standings = Standings::new();
    let east = standings.seeds(Conference::East);
    let west = standings.seeds(Conference::West);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_playoffs", |b| {
        b.iter(|| {
            let mut state = LeagueState::new(&league);
            simulate_playoffs(&league, &mut state, &mut rng, &east, &west)
        })
    });
}

fn bench_odds(c: &mut Criterion) {
    let league = create_league();

    let mut group = c.benchmark_group("odds");
    group.sample_size(10);
    group.bench_function("estimate_odds_1000_trials", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            estimate_odds(black_box(&league), "2023-01-15", "PHI", "BOS", 1000, &mut rng)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_box_score,
    bench_simulate_game,
    bench_playoffs,
    bench_odds,
);
criterion_main!(benches);
