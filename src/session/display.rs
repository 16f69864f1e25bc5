//! Rendering for the console.
//!
//! All functions write to any `io::Write`, so tests render into a `Vec<u8>`.

use std::io::{self, Write};

use crate::combat::{BattleResult, CombatOutcome};
use crate::core::{PlayerId, PlayerMap};
use crate::missions::Mission;
use crate::rules::GameResult;
use crate::territory::Registry;

use super::{SessionError, SessionReport};

/// How the end-of-game summary is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report.
    Json,
}

/// One line per territory: `[i] name - Color: c - Troops: n`.
pub fn write_map<W: Write + ?Sized>(out: &mut W, registry: &Registry) -> io::Result<()> {
    for (id, territory) in registry.entries() {
        writeln!(
            out,
            "{id} {} - Color: {} - Troops: {}",
            territory.name, territory.color, territory.troops
        )?;
    }
    Ok(())
}

/// Block listing used right after registration.
pub fn write_listing<W: Write + ?Sized>(out: &mut W, registry: &Registry) -> io::Result<()> {
    for (id, territory) in registry.entries() {
        writeln!(out, "\nTerritory {}:", id.number())?;
        writeln!(out, "Name: {}", territory.name)?;
        writeln!(out, "Army color: {}", territory.color)?;
        writeln!(out, "Troops: {}", territory.troops)?;
        writeln!(out, "-------------------------------------")?;
    }
    Ok(())
}

/// Narrate one attack from its outcome.
pub fn write_outcome<W: Write + ?Sized>(out: &mut W, outcome: &CombatOutcome) -> io::Result<()> {
    let attacker = &outcome.attacker_before;
    let defender = &outcome.defender_before;

    writeln!(
        out,
        "\n{} ({}) attacks {} ({})!",
        attacker.name, attacker.color, defender.name, defender.color
    )?;
    writeln!(
        out,
        "Attacker die: {} | Defender die: {}",
        outcome.rolls.attacker, outcome.rolls.defender
    )?;

    match outcome.result {
        BattleResult::AttackerWins => writeln!(
            out,
            "The attacker won! {} now belongs to {} with {} troops.",
            defender.name, outcome.defender_after.color, outcome.defender_after.troops
        ),
        BattleResult::DefenderHolds => writeln!(
            out,
            "The defender held! {} is down to {} troops.",
            attacker.name, outcome.attacker_after.troops
        ),
        BattleResult::Tie => writeln!(out, "Tie! No territory changes hands."),
    }
}

/// List every player's mission.
pub fn write_missions<W: Write + ?Sized>(
    out: &mut W,
    missions: &PlayerMap<Mission>,
) -> io::Result<()> {
    writeln!(out, "\n=== MISSIONS ===")?;
    for (player, mission) in missions.iter() {
        writeln!(out, "{player}: {mission}")?;
    }
    Ok(())
}

/// Announce a winner.
pub fn write_victory<W: Write + ?Sized>(
    out: &mut W,
    player: PlayerId,
    mission: &Mission,
) -> io::Result<()> {
    writeln!(out, "\n{player} wins! Mission accomplished: {mission}")
}

/// Write the end-of-game summary.
///
/// # Errors
///
/// Returns `SessionError::Io` on write failure or `SessionError::Summary` if
/// JSON encoding fails.
pub fn write_summary<W: Write + ?Sized>(
    out: &mut W,
    report: &SessionReport,
    format: SummaryFormat,
) -> Result<(), SessionError> {
    match format {
        SummaryFormat::Text => {
            let ending = match &report.result {
                Some(GameResult::Victory { player, .. }) => format!("{player} won"),
                Some(GameResult::Stopped) => "war called off".to_string(),
                None => "registration only".to_string(),
            };
            writeln!(
                out,
                "\nGame over after {} turn(s): {ending} (seed {}).",
                report.turns, report.seed
            )?;
        }
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{resolve_with_rolls, DiceRolls};
    use crate::territory::Territory;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_map() {
        let registry = Registry::new(vec![
            Territory::new("Norte", "Vermelho", 10),
            Territory::new("Sul", "Azul", 4),
        ])
        .unwrap();

        let text = render(|out| write_map(out, &registry));
        assert_eq!(
            text,
            "[1] Norte - Color: Vermelho - Troops: 10\n[2] Sul - Color: Azul - Troops: 4\n"
        );
    }

    #[test]
    fn test_write_outcome_variants() {
        let mut a = Territory::new("Norte", "Vermelho", 10);
        let mut b = Territory::new("Sul", "Azul", 4);

        let tie = resolve_with_rolls(&mut a, &mut b, DiceRolls::new(3, 3));
        let text = render(|out| write_outcome(out, &tie));
        assert!(text.contains("Norte (Vermelho) attacks Sul (Azul)!"));
        assert!(text.contains("Attacker die: 3 | Defender die: 3"));
        assert!(text.contains("Tie!"));

        let win = resolve_with_rolls(&mut a, &mut b, DiceRolls::new(6, 1));
        let text = render(|out| write_outcome(out, &win));
        assert!(text.contains("Sul now belongs to Vermelho with 5 troops"));
    }

    #[test]
    fn test_write_missions_and_victory() {
        let missions = PlayerMap::new(2, |p| Mission::new(format!("Goal {}", p.number())));
        let text = render(|out| write_missions(out, &missions));
        assert!(text.contains("Player 1: Goal 1"));
        assert!(text.contains("Player 2: Goal 2"));

        let text = render(|out| write_victory(out, PlayerId::new(1), &Mission::new("Goal 2")));
        assert!(text.contains("Player 2 wins! Mission accomplished: Goal 2"));
    }
}
