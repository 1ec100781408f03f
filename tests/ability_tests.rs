//! Ability integration tests.
//!
//! Activation, targeting, cancellation and resolution of Dash and Smite
//! through the `TurnController`.

use rpg_checkers::{
    AbilityKind, Board, CastEffect, IntentError, IntentOutcome, LogCategory, Phase, Player,
    Position, Rank, RulesConfig, StartingProgress, TurnController,
};

fn rich_config() -> RulesConfig {
    RulesConfig::default().with_starting(StartingProgress {
        mana: 5,
        ..StartingProgress::default()
    })
}

fn game_from(pieces: &[(u8, u8, Player, Rank)], config: RulesConfig) -> TurnController {
    let mut board = Board::empty();
    for &(row, col, player, rank) in pieces {
        board.spawn(Position::new(row, col), player, rank);
    }
    TurnController::from_board(board, config)
}

fn target_count(game: &TurnController) -> usize {
    game.board().cells().filter(|c| c.targeted).count()
}

// =============================================================================
// Activation
// =============================================================================

/// Activating flags targets, clears move selection and logs the cast.
#[test]
fn test_activate_dash_marks_own_pieces() {
    let mut game = TurnController::new();
    game.select_or_act(5, 0).unwrap();

    let outcome = game.activate_ability(AbilityKind::Dash).unwrap();

    assert_eq!(
        outcome,
        IntentOutcome::AbilityActivated {
            kind: AbilityKind::Dash,
            targets: 12
        }
    );
    assert_eq!(game.phase(), Phase::AbilityTargeting);
    assert_eq!(game.selected(), None);
    assert!(game.board().cells().all(|c| !c.highlighted));
    assert!(game
        .board()
        .cells()
        .filter(|c| c.targeted)
        .all(|c| c.owner() == Some(Player::Red)));
    assert_eq!(
        game.log().last().map(|e| e.message.as_str()),
        Some("Casting DASH... Select target.")
    );
}

/// Activating with too little mana is refused and changes nothing.
#[test]
fn test_activate_without_mana_is_noop() {
    let mut game = TurnController::new();
    let before = game.snapshot();

    let err = game.activate_ability(AbilityKind::Smite).unwrap_err();

    assert_eq!(
        err,
        IntentError::InsufficientMana {
            kind: AbilityKind::Smite,
            needed: 4,
            available: 2
        }
    );
    assert_eq!(game.snapshot(), before);
    assert!(!game.can_activate(AbilityKind::Smite));
    assert!(game.can_activate(AbilityKind::Dash));
}

/// Activating the active ability again cancels it for free.
#[test]
fn test_reactivate_toggles_off() {
    let mut game = TurnController::new();
    game.activate_ability(AbilityKind::Dash).unwrap();

    let outcome = game.activate_ability(AbilityKind::Dash).unwrap();

    assert_eq!(outcome, IntentOutcome::AbilityCancelled(AbilityKind::Dash));
    assert_eq!(game.phase(), Phase::IdleSelection);
    assert_eq!(game.current_player(), Player::Red);
    assert_eq!(game.progress(Player::Red).mana, 2);
    assert_eq!(target_count(&game), 0);
}

/// Explicit cancel behaves like the toggle.
#[test]
fn test_cancel_ability() {
    let mut game = TurnController::with_config(rich_config());
    game.activate_ability(AbilityKind::Smite).unwrap();

    assert_eq!(
        game.cancel_ability(),
        Ok(IntentOutcome::AbilityCancelled(AbilityKind::Smite))
    );
    assert_eq!(game.active_ability(), None);
    assert_eq!(target_count(&game), 0);
    assert_eq!(game.progress(Player::Red).mana, 5);

    assert_eq!(game.cancel_ability(), Err(IntentError::NoActiveAbility));
}

/// Switching abilities retargets.
#[test]
fn test_switch_ability() {
    let mut game = TurnController::with_config(rich_config());
    game.activate_ability(AbilityKind::Dash).unwrap();
    game.activate_ability(AbilityKind::Smite).unwrap();

    assert_eq!(game.active_ability(), Some(AbilityKind::Smite));
    assert!(game
        .board()
        .cells()
        .filter(|c| c.targeted)
        .all(|c| c.owner() == Some(Player::Blue)));
}

/// Clicking an untargeted cell while casting does nothing.
#[test]
fn test_untargeted_click_keeps_ability() {
    let mut game = TurnController::with_config(rich_config());
    game.activate_ability(AbilityKind::Smite).unwrap();
    let before = game.snapshot();

    for (row, col) in [(5, 0), (4, 1), (3, 3)] {
        assert!(matches!(
            game.select_or_act(row, col),
            Err(IntentError::NotAnAbilityTarget { .. })
        ));
    }

    assert_eq!(game.snapshot(), before);
    assert!(game.is_interactable(2, 1));
    assert!(!game.is_interactable(5, 0));
}

// =============================================================================
// Smite
// =============================================================================

/// Smite spends 4 mana, removes the target, pays 30 xp and ends the turn.
#[test]
fn test_smite_resolves() {
    let mut game = TurnController::with_config(rich_config());
    game.activate_ability(AbilityKind::Smite).unwrap();

    let outcome = game.select_or_act(2, 3).unwrap();

    let IntentOutcome::Cast(cast) = outcome else {
        panic!("expected a cast");
    };
    assert_eq!(cast.mana_spent, 4);
    assert!(matches!(cast.effect, CastEffect::Smote { at, .. } if at == Position::new(2, 3)));

    assert!(game.board().cell(Position::new(2, 3)).is_empty());
    assert_eq!(game.board().count_pieces(Player::Blue), 11);
    assert_eq!(game.progress(Player::Red).mana, 1);
    assert_eq!(game.progress(Player::Red).xp, 30);
    assert_eq!(game.current_player(), Player::Blue);
    assert_eq!(game.active_ability(), None);
    assert_eq!(target_count(&game), 0);
    assert_eq!(
        game.log().last().map(|e| e.message.as_str()),
        Some("RED used Smite! Enemy obliterated.")
    );
}

// =============================================================================
// Dash
// =============================================================================

/// Dash moves two rows when clear.
#[test]
fn test_dash_two_rows_forward() {
    let mut game = game_from(
        &[
            (5, 1, Player::Red, Rank::Soldier),
            (0, 7, Player::Blue, Rank::Soldier),
        ],
        RulesConfig::default(),
    );
    game.activate_ability(AbilityKind::Dash).unwrap();
    game.select_or_act(5, 1).unwrap();

    assert_eq!(game.board().cell(Position::new(3, 1)).owner(), Some(Player::Red));
    assert_eq!(game.progress(Player::Red).mana, 0);
    assert_eq!(game.current_player(), Player::Blue);
}

/// Dash falls back to one row when two rows ahead is occupied.
#[test]
fn test_dash_falls_back() {
    let mut game = game_from(
        &[
            (5, 1, Player::Red, Rank::Soldier),
            (3, 1, Player::Blue, Rank::Soldier),
        ],
        RulesConfig::default(),
    );
    game.activate_ability(AbilityKind::Dash).unwrap();
    let outcome = game.select_or_act(5, 1).unwrap();

    let expected = CastEffect::Dashed {
        from: Position::new(5, 1),
        to: Position::new(4, 1),
    };
    assert!(matches!(outcome, IntentOutcome::Cast(ref c) if c.effect == expected));
    assert_eq!(game.board().cell(Position::new(4, 1)).owner(), Some(Player::Red));
    assert_eq!(game.board().cell(Position::new(3, 1)).owner(), Some(Player::Blue));
}

/// Fully blocked Dash still costs mana and ends the turn.
#[test]
fn test_dash_blocked() {
    let mut game = game_from(
        &[
            (5, 1, Player::Red, Rank::Soldier),
            (4, 1, Player::Blue, Rank::Soldier),
            (3, 1, Player::Blue, Rank::Soldier),
        ],
        RulesConfig::default(),
    );
    let board_before = game.board().clone();
    game.activate_ability(AbilityKind::Dash).unwrap();
    let outcome = game.select_or_act(5, 1).unwrap();

    assert!(matches!(
        outcome,
        IntentOutcome::Cast(ref c) if matches!(c.effect, CastEffect::DashBlocked { .. })
    ));
    let mut board_after = game.board().clone();
    board_after.clear_targets();
    assert_eq!(board_after, board_before);
    assert_eq!(game.progress(Player::Red).mana, 0);
    assert_eq!(game.current_player(), Player::Blue);
    assert_eq!(game.active_ability(), None);
    assert_eq!(
        game.log().of_category(LogCategory::Magic).last().map(|e| e.message.as_str()),
        Some("Dash failed! Path blocked. Mana consumed.")
    );
}

/// Blue dashes toward higher rows.
#[test]
fn test_blue_dash_direction() {
    let mut game = TurnController::new();
    game.select_or_act(5, 0).unwrap();
    game.select_or_act(4, 1).unwrap();

    game.activate_ability(AbilityKind::Dash).unwrap();
    game.select_or_act(2, 1).unwrap();

    assert_eq!(game.board().cell(Position::new(3, 1)).owner(), Some(Player::Blue));
    assert!(game.board().cell(Position::new(2, 1)).is_empty());
    // Blue regenerated to 3, then spent 2
    assert_eq!(game.progress(Player::Blue).mana, 1);
    // Red regenerates at handoff
    assert_eq!(game.progress(Player::Red).mana, 3);
}
