//! Whole-turn integration tests: battles assembled from the public API
//! (`Party`, `Battle`, `TemplateProvider`) rather than poking at a single
//! module's internals, covering interactions the per-module unit tests don't
//! reach on their own (item/ability hooks feeding into a real turn, weather
//! decrementing across several turns, a switch outranking a move end to end).

use poke_engine::abilities::Ability;
use poke_engine::config::EngineConfig;
use poke_engine::creature::Creature;
use poke_engine::events::UserEvent;
use poke_engine::field::{Field, Weather};
use poke_engine::items::Item;
use poke_engine::logger::RecordingLogger;
use poke_engine::natures::{Nature, Stat};
use poke_engine::party::{InputProvider, Party};
use poke_engine::random::FixedRandomSource;
use poke_engine::template::{DefaultCatalogProvider, TemplateProvider};
use poke_engine::types::Type;
use poke_engine::value::{EffortValues, IndividualValues, Move, MoveCategory};
use poke_engine::{Battle, Side};

fn mon(name: &str, speed_base: u16, moves: Vec<Move>, item: Item, ability: Ability) -> Creature {
    Creature::new(
        name,
        50,
        vec![Type::Normal],
        [200, 100, 100, 100, 100, speed_base],
        IndividualValues::perfect(),
        EffortValues::new_normal([0; 6]),
        Nature::Hardy,
        moves,
        item,
        ability,
    )
}

fn scripted_provider(events: Vec<UserEvent>) -> InputProvider {
    let events = std::sync::Mutex::new(events.into_iter());
    Box::new(move || {
        let next = events.lock().unwrap().next().unwrap_or(UserEvent::SelectMove(0));
        Box::pin(async move { next })
    })
}

#[tokio::test]
async fn choice_band_style_item_changes_which_creature_faints_first() {
    let tackle = Move::new("Tackle", Type::Normal, MoveCategory::Physical, 40, 100, 0);

    // With a plain 1.5x Attack item, the boosted attacker should knock out
    // a defender that an unboosted attacker of identical stats could not in
    // one hit.
    let boosted_item = Item::StatBoost { name: "Choice Band".into(), stat: Stat::Atk, pct: 50 };
    let attacker = mon("Attacker", 100, vec![tackle.clone()], boosted_item, Ability::None);
    // Unboosted Tackle here deals 20; the 1.5x-Attack item raises that to 28.
    // Leaving the defender at 25 HP means only the boosted hit finishes it.
    let mut defender = mon("Defender", 50, vec![tackle], Item::None, Ability::None);
    defender = defender.take_damage(defender.max_hp - 25);

    let side_a = Party::new("A", vec![attacker], scripted_provider(vec![UserEvent::SelectMove(0)]));
    let side_b = Party::new("B", vec![defender], scripted_provider(vec![UserEvent::SelectMove(0)]));

    let mut battle = Battle::new(side_a, side_b, Field::new(), 9, FixedRandomSource(100));
    let logger = RecordingLogger::default();
    let outcome = battle.run_turn(&logger).await;

    assert!(outcome.finish);
    assert_eq!(outcome.winner, Some(Side::A));
}

#[tokio::test]
async fn weather_counter_reaches_normal_after_several_turns() {
    let splash = Move::new("Splash", Type::Normal, MoveCategory::Status, 0, 100, 0);
    let side_a = Party::new(
        "A",
        vec![mon("A1", 50, vec![splash.clone()], Item::None, Ability::None)],
        scripted_provider(vec![UserEvent::SelectMove(0); 3]),
    );
    let side_b = Party::new(
        "B",
        vec![mon("B1", 50, vec![splash], Item::None, Ability::None)],
        scripted_provider(vec![UserEvent::SelectMove(0); 3]),
    );

    let mut field = Field::new();
    field.set_weather(Weather::Sandstorm, 2);
    let mut battle = Battle::new(side_a, side_b, field, 9, FixedRandomSource(100));
    let logger = RecordingLogger::default();

    battle.run_turn(&logger).await;
    assert_eq!(battle.field.weather, Weather::Sandstorm);
    battle.run_turn(&logger).await;
    assert_eq!(battle.field.weather, Weather::Normal);
}

#[tokio::test]
async fn switch_beats_a_priority_move_and_the_new_active_faces_it_next_turn() {
    // S3: a switch always outranks an attacking move regardless of the
    // move's own priority or either side's speed.
    let quick_attack = Move::new("Quick Attack", Type::Normal, MoveCategory::Physical, 40, 100, 1);
    let splash = Move::new("Splash", Type::Normal, MoveCategory::Status, 0, 100, 0);

    let fast_attacker = mon("Fast", 200, vec![quick_attack], Item::None, Ability::None);
    let switcher = mon("Slow", 10, vec![splash.clone()], Item::None, Ability::None);
    let backup = mon("Backup", 10, vec![splash], Item::None, Ability::None);

    let side_a = Party::new("A", vec![fast_attacker], scripted_provider(vec![UserEvent::SelectMove(0)]));
    let side_b = Party::new(
        "B",
        vec![switcher, backup],
        scripted_provider(vec![UserEvent::SwitchTo(1)]),
    );

    let mut battle = Battle::new(side_a, side_b, Field::new(), 9, FixedRandomSource(100));
    let logger = RecordingLogger::default();
    let outcome = battle.run_turn(&logger).await;

    // The switch resolves before the attack lands, so Backup (not Slow)
    // takes the hit this turn.
    assert_eq!(battle.side_b.active, 1);
    assert!(!outcome.finish);
}

#[tokio::test]
async fn default_catalog_battle_runs_to_completion_with_a_declared_winner() {
    let provider = DefaultCatalogProvider::new();
    let charizard = provider.config_by_id("charizard").await.unwrap().unwrap().instantiate();
    let blastoise = provider.config_by_id("blastoise").await.unwrap().unwrap().instantiate();

    let side_a = Party::new("A", vec![charizard], scripted_provider(vec![UserEvent::SelectMove(0); 50]));
    let side_b = Party::new("B", vec![blastoise], scripted_provider(vec![UserEvent::SelectMove(1); 50]));

    let mut battle = Battle::new(side_a, side_b, Field::new(), 9, FixedRandomSource(100));
    let logger = RecordingLogger::default();
    let winner = battle.run_to_completion(&logger).await;

    assert!(matches!(winner, Side::A | Side::B));
    assert!(!logger.lines().is_empty());
}

#[test]
fn default_config_points_at_the_production_base_url() {
    let config = EngineConfig::default();
    assert!(config.environment.base_url().starts_with("https://"));
}
