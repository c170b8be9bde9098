use armada::{
    place_fleet, AiOpponent, AiPlayer, Difficulty, Grid, Lfsr16, LineTransport, Message, Outcome,
    Player, GRID_COLS, GRID_ROWS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn fleet(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    place_fleet(&mut grid, &mut rng).unwrap();
    grid
}

fn drain(ai: &mut AiOpponent) -> Vec<String> {
    let mut lines = Vec::new();
    loop {
        ai.queue_mut().begin_tick();
        match ai.queue_mut().poll_line() {
            Some(line) => lines.push(line),
            None => return lines,
        }
    }
}

#[test]
fn test_difficulty_table() {
    assert_eq!(Difficulty::Easy.hit_probability(), 0.10);
    assert_eq!(Difficulty::Medium.hit_probability(), 0.20);
    assert_eq!(Difficulty::Hard.hit_probability(), 0.50);
    assert_eq!(Difficulty::Hard.to_string(), "Admiral");
    assert_eq!(Difficulty::Easy.cycle().cycle().cycle(), Difficulty::Easy);
}

#[test]
fn test_ready_places_fleet_once() {
    let mut rng = Lfsr16::new(0xBEEF);
    let mut ai = AiOpponent::new(Difficulty::Easy);
    let target = Grid::new();

    ai.respond(&Message::Ready { token: 500 }, &target, &mut rng);
    assert_eq!(drain(&mut ai), vec!["READY 1"]);
    assert_eq!(ai.grid().occupied().count_ones(), 17);
    assert_eq!(ai.grid().remaining(), 17);
    let placed = ai.grid().clone();

    ai.respond(&Message::Ready { token: 500 }, &target, &mut rng);
    assert_eq!(drain(&mut ai), vec!["READY 1"]);
    assert_eq!(ai.grid(), &placed);
}

#[test]
fn test_attack_answered_with_result_and_counter() {
    let mut rng = Lfsr16::new(31);
    let mut ai = AiOpponent::new(Difficulty::Medium);
    let target = fleet(5);
    ai.respond(&Message::Ready { token: 2 }, &target, &mut rng);
    drain(&mut ai);

    let hit_cell = ai.grid().fleet()[0].unwrap();
    ai.respond(
        &Message::Attack {
            row: hit_cell.row,
            col: hit_cell.col,
        },
        &target,
        &mut rng,
    );
    let lines = drain(&mut ai);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        Message::parse(&lines[0]),
        Some(Message::Result {
            row: hit_cell.row,
            col: hit_cell.col,
            outcome: Outcome::Hit
        })
    );
    assert!(matches!(Message::parse(&lines[1]), Some(Message::Attack { .. })));
    assert_eq!(ai.grid().remaining(), 16);
}

#[test]
fn test_retransmitted_attack_replays_answer() {
    let mut rng = Lfsr16::new(77);
    let mut ai = AiOpponent::new(Difficulty::Hard);
    let target = fleet(9);
    ai.respond(&Message::Ready { token: 2 }, &target, &mut rng);
    drain(&mut ai);

    let attack = Message::Attack { row: 0, col: 0 };
    ai.respond(&attack, &target, &mut rng);
    let first = drain(&mut ai);
    let remaining = ai.grid().remaining();
    ai.respond(&attack, &target, &mut rng);
    let second = drain(&mut ai);

    assert_eq!(first, second);
    assert_eq!(ai.grid().remaining(), remaining);
}

#[test]
fn test_off_grid_attack_ignored() {
    let mut rng = Lfsr16::new(3);
    let mut ai = AiOpponent::new(Difficulty::Easy);
    ai.respond(&Message::Attack { row: 10, col: 0 }, &Grid::new(), &mut rng);
    assert!(drain(&mut ai).is_empty());
}

#[test]
fn test_ai_targets_never_repeat() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut target = fleet(12);
    let mut ai = AiPlayer::new(Difficulty::Hard);
    for _ in 0..100 {
        let (r, c) = ai.select_target(&mut rng, &target).unwrap();
        assert!(target.mark_attacked(r, c).unwrap());
    }
    assert_eq!(ai.select_target(&mut rng, &target), None);
    assert_eq!(ai.ship_squares_attacked(), 17);
    assert_eq!(ai.ocean_squares_attacked(), 83);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn exhausted_ocean_falls_back_to_ships(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target = fleet(seed);
        for r in 0..GRID_ROWS {
            for c in 0..GRID_COLS {
                if !target.is_occupied(r, c) {
                    target.mark_attacked(r, c).unwrap();
                }
            }
        }
        let mut ai = AiPlayer::new(Difficulty::Easy);
        for _ in 0..17 {
            let (r, c) = ai.select_target(&mut rng, &target).unwrap();
            prop_assert!(target.is_occupied(r, c));
            prop_assert!(target.mark_attacked(r, c).unwrap());
        }
        prop_assert_eq!(ai.select_target(&mut rng, &target), None);
    }

    #[test]
    fn easy_ai_mostly_hits_ocean(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target = fleet(seed);
        let mut ai = AiPlayer::new(Difficulty::Easy);
        for _ in 0..40 {
            let (r, c) = ai.select_target(&mut rng, &target).unwrap();
            target.mark_attacked(r, c).unwrap();
        }
        // Only aimed shots can land on a ship.
        prop_assert!(ai.ship_squares_attacked() < 17);
        prop_assert_eq!(ai.ship_squares_attacked() + ai.ocean_squares_attacked(), 40);
    }
}
