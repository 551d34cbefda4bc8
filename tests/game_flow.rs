//! End-to-end turn flow tests, driven entirely through the public API.

use verdant::cards::{CardKind, PestName};
use verdant::{GameConfig, GameError, GardenGame, PlayerId, TurnPhase};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// A two-player game whose entire deck sits in the draft zone, so tests
/// can pick cards by name. One copy of each plant per player, no pests,
/// no actions.
fn open_game() -> GardenGame {
    let config = GameConfig::default()
        .with_deck_copies(1, 0, 0)
        .with_draft_size(64);
    GardenGame::new(2, config, 42).unwrap()
}

/// Index of the first draft card with the given display name.
fn draft_index(game: &GardenGame, name: &str) -> usize {
    game.state()
        .draft_zone
        .iter()
        .position(|card| card.to_string() == name)
        .unwrap_or_else(|| panic!("no {name} in the draft zone"))
}

#[test]
fn placing_a_tree_scores_base_points_and_enters_grow() {
    let mut game = open_game();
    let index = draft_index(&game, "Tree");

    game.place_card(P0, index, 2, 2).unwrap();

    let p0 = &game.state().players[P0];
    assert_eq!(p0.score, 3);
    assert_eq!(p0.phase, TurnPhase::Grow);
    assert!(p0.garden.get(2, 2).is_some());
}

#[test]
fn trees_can_never_be_grown() {
    let mut game = open_game();
    let index = draft_index(&game, "Tree");
    game.place_card(P0, index, 2, 2).unwrap();

    let before = game.state().clone();
    let err = game.grow_plant(P0, 2, 2).unwrap_err();

    assert_eq!(err, GameError::NoGrowthCost { x: 2, y: 2 });
    assert_eq!(game.state(), &before);
}

#[test]
fn locust_destroys_a_grown_plant_and_deducts_damage() {
    let mut game = open_game();

    // Player 0 stalls with a Tree.
    let index = draft_index(&game, "Tree");
    game.place_card(P0, index, 4, 4).unwrap();
    game.skip_growth(P0).unwrap();
    game.next_turn(P0).unwrap();

    // Player 1 places and grows a Lavender (costs 1 water + 1 light).
    let index = draft_index(&game, "Lavender");
    game.place_card(P1, index, 1, 1).unwrap();
    game.grow_plant(P1, 1, 1).unwrap();
    let lavender_score = game.state().players[P1].score;
    assert_eq!(lavender_score, 2); // base points, no plant neighbors
    game.next_turn(P1).unwrap();

    // Player 0 grows a LemonTree and now owes a pest.
    let index = draft_index(&game, "LemonTree");
    game.place_card(P0, index, 0, 0).unwrap();
    game.grow_plant(P0, 0, 0).unwrap();
    assert_eq!(game.state().players[P0].phase, TurnPhase::Pest);

    game.place_pest(P0, PestName::Locust, 1, 1, P1).unwrap();

    let p1 = &game.state().players[P1];
    assert_eq!(p1.score, lavender_score - 3);
    assert!(matches!(
        p1.garden.get(1, 1).unwrap().kind(),
        CardKind::Pest
    ));
    assert!(game
        .state()
        .log
        .iter()
        .any(|line| line.contains("placed Locust on Player 1's Lavender, causing 3 damage")));
    assert_eq!(game.state().players[P0].phase, TurnPhase::End);
}

#[test]
fn pests_cannot_target_your_own_garden() {
    let mut game = open_game();
    let index = draft_index(&game, "LemonTree");
    game.place_card(P0, index, 0, 0).unwrap();
    game.grow_plant(P0, 0, 0).unwrap();

    let err = game.place_pest(P0, PestName::Aphid, 2, 2, P0).unwrap_err();
    assert_eq!(err, GameError::PestTargetSelf);
}

/// Play a full game with a plants-only deck: always place the first
/// plant into the first empty cell, never grow. Gardens fill up and the
/// game must end with a winner.
#[test]
fn full_game_runs_to_completion_on_small_gardens() {
    let config = GameConfig::default()
        .with_grid_size(3)
        .with_deck_copies(2, 0, 0);
    let mut game = GardenGame::new(2, config, 7).unwrap();

    let mut guard = 0;
    while !game.is_game_over() {
        guard += 1;
        assert!(guard < 1000, "game did not terminate");

        let player = game.current_player();
        match game.state().players[player].phase {
            TurnPhase::Place => {
                let (x, y) = first_empty_cell(&game, player).expect("active player has room");
                game.place_card(player, 0, x, y).unwrap();
            }
            TurnPhase::Grow => game.skip_growth(player).unwrap(),
            TurnPhase::End => game.next_turn(player).unwrap(),
            phase => panic!("unexpected phase {phase} with a pest-free deck"),
        }
    }

    assert!(game.winner().is_some());
    for (_, p) in game.state().players.iter() {
        assert!(p.garden.is_full());
    }
    assert!(game
        .state()
        .log
        .iter()
        .any(|line| line.contains("Game over! Winner:")));
}

/// Play a full game with the standard deck: pests, outbreaks, and action
/// cards included. The bot tries moves until one sticks.
#[test]
fn full_game_with_pests_terminates() {
    let config = GameConfig::default().with_grid_size(3);
    let mut game = GardenGame::new(2, config, 3).unwrap();

    let mut guard = 0;
    while !game.is_game_over() {
        guard += 1;
        assert!(guard < 10_000, "game did not terminate");

        let player = game.current_player();
        match game.state().players[player].phase {
            TurnPhase::Place => place_anything(&mut game, player),
            TurnPhase::Grow => {
                if try_grow_anything(&mut game, player).is_none() {
                    game.skip_growth(player).unwrap();
                }
            }
            TurnPhase::Pest => place_pest_anywhere(&mut game, player),
            TurnPhase::End => game.next_turn(player).unwrap(),
            TurnPhase::Done => panic!("done player holds the turn"),
        }
    }

    let winner = game.winner().expect("finished game has a winner");
    assert!(game.state().players[winner].phase.is_done());

    // The winner has the best (score, infestation, seat) ordering among
    // all players.
    let w = &game.state().players[winner];
    for (id, p) in game.state().players.iter() {
        assert!(
            (p.score, std::cmp::Reverse(p.infestation), std::cmp::Reverse(id.index()))
                <= (w.score, std::cmp::Reverse(w.infestation), std::cmp::Reverse(winner.index()))
        );
    }
}

#[test]
fn same_seed_and_moves_replay_identically() {
    let run = |seed: u64| {
        let config = GameConfig::default()
            .with_grid_size(3)
            .with_deck_copies(2, 0, 0);
        let mut game = GardenGame::new(2, config, seed).unwrap();
        for _ in 0..200 {
            if game.is_game_over() {
                break;
            }
            let player = game.current_player();
            match game.state().players[player].phase {
                TurnPhase::Place => {
                    let (x, y) = first_empty_cell(&game, player).unwrap();
                    game.place_card(player, 0, x, y).unwrap();
                }
                TurnPhase::Grow => game.skip_growth(player).unwrap(),
                TurnPhase::End => game.next_turn(player).unwrap(),
                phase => panic!("unexpected phase {phase}"),
            }
        }
        game
    };

    let a = run(11);
    let b = run(11);
    assert_eq!(a.state(), b.state());

    let c = run(12);
    assert_ne!(a.state().log, c.state().log);
}

fn first_empty_cell(game: &GardenGame, player: PlayerId) -> Option<(u8, u8)> {
    let garden = &game.state().players[player].garden;
    for y in 0..garden.size() {
        for x in 0..garden.size() {
            if garden.get(x, y).is_none() {
                return Some((x, y));
            }
        }
    }
    None
}

fn place_anything(game: &mut GardenGame, player: PlayerId) {
    let spot = first_empty_cell(game, player);
    let draft_len = game.state().draft_zone.len();

    for index in 0..draft_len {
        let kind = game.state().draft_zone[index].kind();
        let ok = match kind {
            CardKind::Plant => {
                let Some((x, y)) = spot else { continue };
                game.place_card(player, index, x, y).is_ok()
            }
            CardKind::Action => game.play_action_card(player, index, None).is_ok(),
            CardKind::Pest => panic!("draft zone must never hold pests"),
        };
        if ok {
            return;
        }
    }

    // Last resort: a Fertilizer pointed at every cell in turn.
    let size = game.state().players[player].garden.size();
    for index in 0..game.state().draft_zone.len() {
        for y in 0..size {
            for x in 0..size {
                if game.play_action_card(player, index, Some((x, y))).is_ok() {
                    return;
                }
            }
        }
    }
    panic!("no legal placement available");
}

fn try_grow_anything(game: &mut GardenGame, player: PlayerId) -> Option<(u8, u8)> {
    let size = game.state().players[player].garden.size();
    for y in 0..size {
        for x in 0..size {
            if game.grow_plant(player, x, y).is_ok() {
                return Some((x, y));
            }
        }
    }
    None
}

fn place_pest_anywhere(game: &mut GardenGame, player: PlayerId) {
    let targets: Vec<PlayerId> = game
        .state()
        .players
        .iter()
        .filter(|&(id, p)| id != player && !p.phase.is_done())
        .map(|(id, _)| id)
        .collect();

    for target in targets {
        let size = game.state().players[target].garden.size();
        for y in 0..size {
            for x in 0..size {
                if game.place_pest(player, PestName::Aphid, x, y, target).is_ok() {
                    return;
                }
            }
        }
    }
    panic!("no legal pest placement available");
}
