//! Territory registration from console answers.

use std::io::{BufRead, Write};

use tracing::info;

use super::{Prompter, SessionError};
use crate::core::GameConfig;
use crate::territory::{Registry, Territory};

/// Ask for `count` territories and build the registry.
///
/// Names and colors are truncated to the configured lengths; troop counts are
/// re-prompted until they are non-negative whole numbers.
///
/// # Errors
///
/// Returns `GameError::Allocation` (wrapped) if the registry cannot be
/// allocated, `GameError::EmptyRegistry` for `count == 0`, or an input error.
pub fn register_territories<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    count: usize,
    config: &GameConfig,
) -> Result<Registry, SessionError> {
    let built: Result<Registry, SessionError> = Registry::try_build(count, |id| {
        writeln!(prompter.output(), "\nTerritory {}:", id.number())?;
        let name = prompter.read_line("Name: ")?;
        let color = prompter.read_line("Army color (e.g. Red, Blue, Green): ")?;
        let troops = prompter.read_troops("Initial troops: ")?;
        Ok(Territory::registered(&name, &color, troops, config))
    });
    let registry = built?;

    info!(territories = registry.len(), "registration complete");
    Ok(registry)
}

/// Ask how many territories to register, then register them.
///
/// # Errors
///
/// See [`register_territories`].
pub fn read_registry<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
) -> Result<Registry, SessionError> {
    let count = prompter.read_count("How many territories do you want to register? ", 1)?;
    register_territories(prompter, count, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_register_two() {
        let mut p = prompter("Norte\nVermelho\n10\nSul\nAzul\n4\n");
        let registry = register_territories(&mut p, 2, &GameConfig::new()).unwrap();

        assert_eq!(
            registry.as_slice(),
            &[
                Territory::new("Norte", "Vermelho", 10),
                Territory::new("Sul", "Azul", 4),
            ]
        );
    }

    #[test]
    fn test_register_truncates_and_reprompts() {
        let long_name = "N".repeat(35);
        let input = format!("{long_name}\nVermelhissimo\nmany\n-1\n8\n");
        let mut p = prompter(&input);
        let registry = register_territories(&mut p, 1, &GameConfig::new()).unwrap();

        let t = &registry.as_slice()[0];
        assert_eq!(t.name.len(), 29);
        assert_eq!(t.color, "Vermelhis");
        assert_eq!(t.troops, 8);
    }

    #[test]
    fn test_read_registry_count_reprompt() {
        let mut p = prompter("0\n1\nIlha\nVerde\n3\n");
        let registry = read_registry(&mut p, &GameConfig::new()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_allocation_failure_surfaces() {
        let mut p = prompter("");
        let err = register_territories(&mut p, usize::MAX, &GameConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Game(GameError::Allocation { .. })
        ));
    }

    #[test]
    fn test_input_closed_mid_registration() {
        let mut p = prompter("Norte\nVermelho\n");
        let err = register_territories(&mut p, 1, &GameConfig::new()).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
    }
}
