//! Deck generation and the shared draft zone.
//!
//! The deck is minted once at game construction: for every catalog entry,
//! a fixed number of copies per seated player, in catalog order, then a
//! single seeded shuffle. Cards are drawn from the end of the deck.
//!
//! The draft zone is topped up from the deck whenever a card leaves it and
//! at every turn boundary. Pests never sit in the draft zone: drawing one
//! is an outbreak, which obliges every still-active player to place a pest
//! on an opponent's garden, and the draw continues until a non-pest card
//! lands or the deck runs dry.

use tracing::debug;

use crate::cards::{ActionCard, DraftCard, PestTile, PlantTile};
use crate::engine::game::GardenGame;

impl GardenGame {
    /// Mint and shuffle the deck. Called once, from the constructor.
    pub(crate) fn generate_deck(&mut self) {
        let seats = self.state.players.player_count() as u32;
        let plant_names: Vec<_> = self.library.plants().map(|d| d.name).collect();
        let pest_names: Vec<_> = self.library.pests().map(|d| d.name).collect();
        let action_names: Vec<_> = self.library.actions().map(|d| d.name).collect();

        let mut deck = Vec::new();
        for name in plant_names {
            for _ in 0..self.config.plant_copies * seats {
                let id = self.state.alloc_tile_id();
                deck.push(DraftCard::Plant(PlantTile::new(id, name)));
            }
        }
        for name in pest_names {
            for _ in 0..self.config.pest_copies * seats {
                let id = self.state.alloc_tile_id();
                deck.push(DraftCard::Pest(PestTile { id, name }));
            }
        }
        for name in action_names {
            for _ in 0..self.config.action_copies * seats {
                let id = self.state.alloc_tile_id();
                deck.push(DraftCard::Action(ActionCard { id, name }));
            }
        }

        self.rng.shuffle(&mut deck);
        debug!(cards = deck.len(), "deck generated");
        self.state.deck = deck;
    }

    /// Top up the draft zone from the deck, resolving pest outbreaks.
    pub(crate) fn fill_draft_zone(&mut self) {
        let capacity = self.config.draft_size as usize;
        while self.state.draft_zone.len() < capacity {
            let Some(card) = self.state.deck.pop() else {
                break;
            };
            match card {
                DraftCard::Pest(pest) => {
                    for (_, p) in self.state.players.iter_mut() {
                        if !p.phase.is_done() {
                            p.pest_to_place += 1;
                        }
                    }
                    debug!(pest = %pest.name, "pest outbreak");
                    self.state.push_log(format!(
                        "Pest outbreak! A {} emerges: every active player must place a pest",
                        pest.name
                    ));
                }
                card => self.state.draft_zone.push(card),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::CardKind;
    use crate::core::config::GameConfig;
    use crate::engine::game::GardenGame;

    #[test]
    fn test_deck_composition() {
        let game = GardenGame::new(2, GameConfig::default(), 42).unwrap();

        // 16 plants x3, 2 pests x8, 5 actions x4, per seated player.
        let minted = 2 * (16 * 3 + 2 * 8 + 5 * 4);
        let owed: u32 = game
            .state()
            .players
            .iter()
            .map(|(_, p)| p.pest_to_place)
            .sum();
        // Outbreak draws consume one pest card per two obligations granted.
        let consumed = (owed / 2) as usize;
        assert_eq!(
            game.state().deck.len() + game.state().draft_zone.len() + consumed,
            minted
        );
        assert_eq!(game.state().draft_zone.len(), 5);
    }

    #[test]
    fn test_draft_zone_never_holds_pests() {
        for seed in 0..20 {
            let game = GardenGame::new(3, GameConfig::default(), seed).unwrap();
            assert!(game
                .state()
                .draft_zone
                .iter()
                .all(|card| card.kind() != CardKind::Pest));
        }
    }

    #[test]
    fn test_setup_is_seed_deterministic() {
        let a = GardenGame::new(2, GameConfig::default(), 7).unwrap();
        let b = GardenGame::new(2, GameConfig::default(), 7).unwrap();
        assert_eq!(a.state(), b.state());

        let c = GardenGame::new(2, GameConfig::default(), 8).unwrap();
        assert_ne!(a.state().deck, c.state().deck);
    }

    #[test]
    fn test_pest_free_deck_fills_cleanly() {
        let config = GameConfig::default().with_deck_copies(3, 0, 4);
        let game = GardenGame::new(2, config, 1).unwrap();

        assert_eq!(game.state().draft_zone.len(), 5);
        assert!(game.state().players.iter().all(|(_, p)| p.pest_to_place == 0));
    }

    #[test]
    fn test_small_deck_fills_what_it_can() {
        let config = GameConfig::default().with_deck_copies(1, 0, 0).with_grid_size(2);
        let game = GardenGame::new(2, config.with_draft_size(200), 1).unwrap();

        // Whole deck lands in the draft zone: 16 plants x1 x2 seats.
        assert_eq!(game.state().draft_zone.len(), 32);
        assert!(game.state().deck.is_empty());
    }
}
