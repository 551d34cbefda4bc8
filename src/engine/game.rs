//! The game engine: one owned object per match, mutated only through its
//! operations.
//!
//! ## Operation shape
//!
//! Every operation takes the acting player, validates fully, and only then
//! mutates: a returned error always leaves the state exactly as it was.
//! Validation runs in a fixed order: seated player, current player, done
//! check, phase check, then operation-specific rules.
//!
//! ## Turn flow
//!
//! A turn is `place_card` or `play_action_card`, then `grow_plant` or
//! `skip_growth`, then `place_pest` until no pests are owed, then
//! `next_turn`. The engine never acts on its own between operations; hosts
//! drive it one call at a time, so a match is fully reproducible from the
//! seed and the call sequence.

use tracing::{debug, info};

use crate::cards::{CardKind, CardLibrary, DraftCard, PestName, PestTile, Tile};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::resources::Resource;
use crate::core::rng::GameRng;
use crate::engine::effects;
use crate::engine::error::{GameError, Result};
use crate::engine::phase::TurnPhase;
use crate::engine::state::GameState;

/// A running match.
#[derive(Debug)]
pub struct GardenGame {
    pub(crate) config: GameConfig,
    pub(crate) library: CardLibrary,
    pub(crate) rng: GameRng,
    pub(crate) state: GameState,
}

impl GardenGame {
    /// Create a new game with seated players in turn order.
    ///
    /// Fails unless `player_count` is between 2 and 8. The deck is minted
    /// and shuffled from the seed, and the draft zone filled; an outbreak
    /// during the initial fill can leave players owing pests from turn one.
    pub fn new(player_count: usize, config: GameConfig, seed: u64) -> Result<Self> {
        if !(2..=8).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
            });
        }

        let mut game = Self {
            config,
            library: CardLibrary::standard(),
            rng: GameRng::new(seed),
            state: GameState::new(player_count, &config),
        };
        game.generate_deck();
        game.fill_draft_zone();
        info!(players = player_count, seed, "game created");
        Ok(game)
    }

    /// The match state, for rendering and inspection.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The card library in play.
    #[must_use]
    pub fn library(&self) -> &CardLibrary {
        &self.library
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// True once every player has finished playing.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.players.iter().all(|(_, p)| p.phase.is_done())
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Take a plant (or building) card from the draft zone and place it
    /// into an empty cell of the acting player's garden.
    ///
    /// Scores the card's base points immediately and applies any placement
    /// gain (buildings). Advances the player to the grow phase and refills
    /// the draft zone.
    pub fn place_card(&mut self, player: PlayerId, draft_index: usize, x: u8, y: u8) -> Result<()> {
        self.require_current(player)?;
        self.require_phase(player, TurnPhase::Place)?;

        let card = self
            .state
            .draft_zone
            .get(draft_index)
            .ok_or(GameError::InvalidDraftIndex { index: draft_index })?;
        if card.kind() != CardKind::Plant {
            return Err(GameError::WrongCardKind {
                index: draft_index,
                required: CardKind::Plant,
                actual: card.kind(),
            });
        }

        let garden = &self.state.players[player].garden;
        if !garden.in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        if garden.get(x, y).is_some() {
            return Err(GameError::CellOccupied { x, y });
        }

        let DraftCard::Plant(tile) = self.state.draft_zone.remove(draft_index) else {
            unreachable!("kind checked above")
        };
        let name = tile.name;
        let def = self.library.plant(name);
        let base_points = def.base_points;
        let place_gain = def.place_gain;

        let p = self.state.players.get_mut(player);
        p.garden.place(x, y, Tile::Plant(tile))?;
        p.score += base_points;
        if let Some((resource, amount)) = place_gain {
            p.resources.gain(resource, amount);
        }

        debug!(%player, %name, x, y, "placed card");
        self.state
            .push_log(format!("{player} placed {name} at ({x}, {y})"));
        self.advance_phase(player);
        self.fill_draft_zone();
        Ok(())
    }

    /// Take an action card from the draft zone and play it for its
    /// immediate effect. Counts as the turn's placement.
    ///
    /// Fertilizer requires a target: an un-grown plant with a non-empty
    /// growth cost, which it grows without paying that cost. The other
    /// actions ignore `target`. The card's own cost is always paid first.
    pub fn play_action_card(
        &mut self,
        player: PlayerId,
        draft_index: usize,
        target: Option<(u8, u8)>,
    ) -> Result<()> {
        use crate::cards::ActionName;

        self.require_current(player)?;
        self.require_phase(player, TurnPhase::Place)?;

        let card = self
            .state
            .draft_zone
            .get(draft_index)
            .ok_or(GameError::InvalidDraftIndex { index: draft_index })?;
        let name = match card {
            DraftCard::Action(action) => action.name,
            card => {
                return Err(GameError::WrongCardKind {
                    index: draft_index,
                    required: CardKind::Action,
                    actual: card.kind(),
                })
            }
        };
        let cost = self.library.action(name).cost.clone();

        if name == ActionName::Fertilizer {
            let Some((x, y)) = target else {
                return Err(GameError::ActionNeedsTarget { action: name });
            };
            let garden = &self.state.players[player].garden;
            if !garden.in_bounds(x, y) {
                return Err(GameError::OutOfBounds { x, y });
            }
            let plant_name = match garden.get(x, y) {
                None => return Err(GameError::EmptyCell { x, y }),
                Some(Tile::Pest(_)) => return Err(GameError::NotAPlant { x, y }),
                Some(Tile::Plant(plant)) if plant.grown => {
                    return Err(GameError::AlreadyGrown { x, y })
                }
                Some(Tile::Plant(plant)) => plant.name,
            };
            if self.library.plant(plant_name).growth_cost.is_free() {
                return Err(GameError::NoGrowthCost { x, y });
            }

            self.state.players.get_mut(player).resources.spend(&cost)?;
            self.state.draft_zone.remove(draft_index);

            let p = self.state.players.get_mut(player);
            let neighbors = p.garden.neighbors(x, y);
            if let Some(Tile::Plant(plant)) = p.garden.get_mut(x, y) {
                plant.grown = true;
            }
            effects::resolve_growth(plant_name, &neighbors, p);

            debug!(%player, %plant_name, x, y, "fertilized");
            self.state.push_log(format!(
                "{player} played action card: Fertilizer, growing {plant_name} at ({x}, {y})"
            ));
        } else {
            self.state.players.get_mut(player).resources.spend(&cost)?;
            self.state.draft_zone.remove(draft_index);

            let p = self.state.players.get_mut(player);
            let grown_plants = p.garden.grown_plant_count();
            effects::resolve_action(name, grown_plants, p);

            debug!(%player, %name, "played action card");
            self.state
                .push_log(format!("{player} played action card: {name}"));
        }

        self.advance_phase(player);
        self.fill_draft_zone();
        Ok(())
    }

    /// Grow an un-grown plant in the acting player's garden, paying its
    /// growth cost and running its growth effect once.
    ///
    /// Plants with an empty growth cost (Tree and the buildings) can never
    /// be grown.
    pub fn grow_plant(&mut self, player: PlayerId, x: u8, y: u8) -> Result<()> {
        self.require_current(player)?;
        self.require_phase(player, TurnPhase::Grow)?;

        let garden = &self.state.players[player].garden;
        if !garden.in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        let name = match garden.get(x, y) {
            None => return Err(GameError::EmptyCell { x, y }),
            Some(Tile::Pest(_)) => return Err(GameError::NotAPlant { x, y }),
            Some(Tile::Plant(plant)) if plant.grown => {
                return Err(GameError::AlreadyGrown { x, y })
            }
            Some(Tile::Plant(plant)) => plant.name,
        };
        let cost = self.library.plant(name).growth_cost.clone();
        if cost.is_free() {
            return Err(GameError::NoGrowthCost { x, y });
        }

        let p = self.state.players.get_mut(player);
        p.resources.spend(&cost)?;
        let neighbors = p.garden.neighbors(x, y);
        if let Some(Tile::Plant(plant)) = p.garden.get_mut(x, y) {
            plant.grown = true;
        }
        effects::resolve_growth(name, &neighbors, p);

        debug!(%player, %name, x, y, "grew plant");
        self.state
            .push_log(format!("{player} grew {name} at ({x}, {y})"));
        self.advance_phase(player);
        Ok(())
    }

    /// Decline to grow a plant this turn.
    pub fn skip_growth(&mut self, player: PlayerId) -> Result<()> {
        self.require_current(player)?;
        self.require_phase(player, TurnPhase::Grow)?;

        self.state.push_log(format!("{player} skipped growing"));
        self.advance_phase(player);
        Ok(())
    }

    /// Place one owed pest onto an opponent's garden.
    ///
    /// The pest may land on an empty cell or on a plant; landing on a
    /// plant destroys it and deducts the pest's damage from the target's
    /// score. Pests never stack on pests. After placement the pest's
    /// spread effect runs against the target, and the target's infestation
    /// rises by one if the new pest touches another pest.
    pub fn place_pest(
        &mut self,
        player: PlayerId,
        pest: PestName,
        x: u8,
        y: u8,
        target: PlayerId,
    ) -> Result<()> {
        self.require_current(player)?;
        self.require_phase(player, TurnPhase::Pest)?;
        debug_assert!(self.state.players[player].pest_to_place > 0);

        if target == player {
            return Err(GameError::PestTargetSelf);
        }
        if !self.state.players.contains(target) {
            return Err(GameError::UnknownPlayer { player: target });
        }
        if self.state.players[target].phase.is_done() {
            return Err(GameError::PlayerDone { player: target });
        }
        let garden = &self.state.players[target].garden;
        if !garden.in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        if matches!(garden.get(x, y), Some(Tile::Pest(_))) {
            return Err(GameError::PestOnPest { x, y });
        }

        let damage = self.library.pest(pest).damage;
        let max_infestations = self.config.max_infestations;
        let id = self.state.alloc_tile_id();

        let t = self.state.players.get_mut(target);
        let prior = t.garden.overwrite(x, y, Tile::Pest(PestTile { id, name: pest }));
        let log_line = if let Some(Tile::Plant(plant)) = prior {
            t.score -= damage;
            format!(
                "{player} placed {pest} on {target}'s {}, causing {damage} damage",
                plant.name
            )
        } else {
            format!("{player} placed {pest} at ({x}, {y}) in {target}'s garden")
        };

        let neighbors = t.garden.neighbors(x, y);
        effects::resolve_spread(pest, &neighbors, t);

        let mut infestation_log = None;
        if neighbors.iter().any(|n| n.is_pest()) {
            t.raise_infestation(max_infestations);
            infestation_log = Some(format!(
                "{target}'s infestation increased to {}",
                t.infestation
            ));
        }

        debug!(%player, %pest, %target, x, y, "placed pest");
        self.state.push_log(log_line);
        if let Some(line) = infestation_log {
            self.state.push_log(line);
        }

        self.state.players.get_mut(player).pest_to_place -= 1;
        self.advance_phase(player);
        Ok(())
    }

    /// End the acting player's turn and hand play to the next player who
    /// is still in the game.
    ///
    /// The actor draws one random resource, then becomes done if their
    /// done predicate holds. When the deck and draft zone are both empty
    /// the game ends for everyone; when no active player remains, the
    /// winner is decided: highest score, ties broken by lower infestation,
    /// then seating order.
    pub fn next_turn(&mut self, player: PlayerId) -> Result<()> {
        self.require_current(player)?;
        self.require_phase(player, TurnPhase::End)?;

        self.advance_phase(player);
        if self.state.players[player].phase.is_done() {
            info!(%player, "player finished");
            self.state.push_log(format!("{player} is done playing!"));
        }

        if let Some(&resource) = self.rng.choose(&Resource::ALL) {
            self.state.players.get_mut(player).resources.gain(resource, 1);
            self.state
                .push_log(format!("{player} gained 1 {resource}"));
        }

        self.fill_draft_zone();
        if self.state.deck.is_empty() && self.state.draft_zone.is_empty() {
            for (_, p) in self.state.players.iter_mut() {
                p.phase = TurnPhase::Done;
            }
            self.state.push_log("The deck is exhausted; the game is over");
            self.finish_game();
            return Ok(());
        }

        // Hand play to the next player still in the game. A candidate
        // whose done predicate holds (garden filled by a pest, or the
        // infestation cap reached) is finalized here rather than given a
        // turn it could not play.
        let count = self.state.players.player_count();
        let current_index = player.index();
        let mut next = None;
        for step in 1..=count {
            let candidate = PlayerId::new(((current_index + step) % count) as u8);
            let p = self.state.players.get_mut(candidate);
            if p.phase.is_done() {
                continue;
            }
            if p.is_done_playing(self.config.max_infestations) {
                p.phase = TurnPhase::Done;
                info!(player = %candidate, "player finished");
                self.state
                    .push_log(format!("{candidate} is done playing!"));
                continue;
            }
            next = Some(candidate);
            break;
        }

        match next {
            Some(next_player) => {
                if next_player.index() <= current_index {
                    self.state.current_turn += 1;
                }
                self.state.current_player = next_player;
            }
            None => self.finish_game(),
        }
        Ok(())
    }

    fn finish_game(&mut self) {
        let winner = self.compute_winner();
        self.state.winner = winner;
        if let Some(w) = winner {
            info!(winner = %w, "game over");
            self.state.push_log(format!("Game over! Winner: {w}"));
        }
    }

    /// Decide the winner among finished players: highest score, ties
    /// broken by lower infestation, then seating order.
    fn compute_winner(&self) -> Option<PlayerId> {
        self.state
            .players
            .iter()
            .filter(|(_, p)| p.phase.is_done())
            .min_by_key(|(id, p)| (std::cmp::Reverse(p.score), p.infestation, id.index()))
            .map(|(id, _)| id)
    }

    fn require_current(&self, player: PlayerId) -> Result<()> {
        if !self.state.players.contains(player) {
            return Err(GameError::UnknownPlayer { player });
        }
        if player != self.state.current_player {
            return Err(GameError::NotYourTurn {
                player,
                current: self.state.current_player,
            });
        }
        if self.state.players[player].phase.is_done() {
            return Err(GameError::PlayerDone { player });
        }
        Ok(())
    }

    fn require_phase(&self, player: PlayerId, required: TurnPhase) -> Result<()> {
        let actual = self.state.players[player].phase;
        if actual != required {
            return Err(GameError::WrongPhase { required, actual });
        }
        Ok(())
    }

    /// Step the player's phase machine after a successful operation.
    ///
    /// If the player owes pests but every opponent has finished, the debt
    /// is cleared: finished players can never be targeted again.
    fn advance_phase(&mut self, player: PlayerId) {
        let has_opponent = self.state.has_active_opponent(player);
        let max_infestations = self.config.max_infestations;

        let p = self.state.players.get_mut(player);
        if p.pest_to_place > 0 && !has_opponent {
            p.pest_to_place = 0;
        }
        let done = p.is_done_playing(max_infestations);
        p.phase = p.phase.advance(p.pest_to_place, done);
    }
}
