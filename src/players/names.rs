//! Choosing player names at the start of a session.

use crate::config::{GameConfig, validate_name};
use crate::console::LineIo;
use anyhow::{Result, bail, ensure};
use connect_four_core::Player;
use tracing::{debug, info, instrument};

/// Asks for `token`'s name until a valid, untaken one is entered.
///
/// A blank answer, or closed input, keeps `default`. Names equal to `taken`
/// are refused.
///
/// # Errors
///
/// Fails if input closes while `default` is itself taken, or on I/O errors.
#[instrument(skip(io))]
pub async fn ask_name(
    io: &mut dyn LineIo,
    token: Player,
    default: &str,
    taken: Option<&str>,
) -> Result<String> {
    let question = format!("Enter a name for {} [{}]: ", token, default);
    loop {
        let answer = match io.prompt(&question).await? {
            Some(answer) => answer,
            None if taken == Some(default) => {
                bail!("Input closed while waiting for {}'s name", token)
            }
            None => return Ok(default.to_string()),
        };

        let answer = match answer.trim() {
            "" => default,
            typed => typed,
        };
        if let Err(e) = validate_name(answer) {
            io.write_line(&format!("Invalid name: {}.", e.message)).await?;
        } else if taken == Some(answer) {
            debug!(name = answer, "Name already taken");
            io.write_line(&format!("{} is already taken.", answer)).await?;
        } else {
            return Ok(answer.to_string());
        }
    }
}

/// Default name for a seat that does not collide with `taken`.
fn free_default(base: &str, taken: Option<&str>) -> String {
    if taken == Some(base) {
        format!("{} (2)", base)
    } else {
        base.to_string()
    }
}

/// Names for both seats: configured names first, the rest asked for.
///
/// # Errors
///
/// Fails when both configured names are equal, or when input closes with
/// no usable default.
#[instrument(skip_all)]
pub async fn resolve_names(config: &GameConfig, io: &mut dyn LineIo) -> Result<(String, String)> {
    let preset_one = config.players().one().as_deref().map(str::trim);
    let preset_two = config.players().two().as_deref().map(str::trim);

    let one = match preset_one {
        Some(name) => name.to_string(),
        None => {
            let default = free_default("Player 1", preset_two);
            ask_name(io, Player::One, &default, preset_two).await?
        }
    };
    let two = match preset_two {
        Some(name) => name.to_string(),
        None => {
            let default = free_default("Player 2", Some(one.as_str()));
            ask_name(io, Player::Two, &default, Some(one.as_str())).await?
        }
    };

    ensure!(one != two, "Both players are named '{}'", one);
    info!(%one, %two, "Players named");
    Ok((one, two))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;

    fn config(one: Option<&str>, two: Option<&str>) -> GameConfig {
        GameConfig::default().with_overrides(
            one.map(String::from),
            two.map(String::from),
            None,
            false,
        )
    }

    async fn resolve(
        config: &GameConfig,
        input: &'static str,
    ) -> (Result<(String, String)>, String) {
        let mut io = Console::new(input.as_bytes(), Vec::new());
        let names = resolve_names(config, &mut io).await;
        let (_, out) = io.into_inner();
        (names, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_ask_name() {
        let mut io = Console::new(&b"  Ada  \n"[..], Vec::new());
        assert_eq!(
            ask_name(&mut io, Player::One, "Player 1", None).await.unwrap(),
            "Ada"
        );

        let mut io = Console::new(&b"\n"[..], Vec::new());
        assert_eq!(
            ask_name(&mut io, Player::Two, "Player 2", None).await.unwrap(),
            "Player 2"
        );

        let mut io = Console::new(&b""[..], Vec::new());
        assert_eq!(
            ask_name(&mut io, Player::Two, "Player 2", None).await.unwrap(),
            "Player 2"
        );
    }

    #[tokio::test]
    async fn test_ask_name_rejects_long_names() {
        let input = format!("{}\nGrace\n", "g".repeat(40));
        let mut io = Console::new(input.as_bytes(), Vec::new());
        assert_eq!(
            ask_name(&mut io, Player::Two, "Player 2", None).await.unwrap(),
            "Grace"
        );
        let (_, out) = io.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Enter a name for player two [Player 2]: "));
        assert!(out.contains("Invalid name: name must be at most 32 characters."));
    }

    #[tokio::test]
    async fn test_ask_name_refuses_taken_name() {
        let mut io = Console::new(&b"Ada\n Ada \nGrace\n"[..], Vec::new());
        let name = ask_name(&mut io, Player::Two, "Player 2", Some("Ada"))
            .await
            .unwrap();
        assert_eq!(name, "Grace");

        let (_, out) = io.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Ada is already taken.").count(), 2);
    }

    #[tokio::test]
    async fn test_ask_name_closed_input_with_taken_default_fails() {
        let mut io = Console::new(&b"\n"[..], Vec::new());
        let err = ask_name(&mut io, Player::Two, "Ada", Some("Ada"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Input closed"));

        let (_, out) = io.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Ada is already taken.").count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_asks_both_seats() {
        let (names, out) = resolve(&GameConfig::default(), "Ada\nGrace\n").await;
        assert_eq!(names.unwrap(), ("Ada".to_string(), "Grace".to_string()));
        assert!(out.contains("Enter a name for player one [Player 1]: "));
        assert!(out.contains("Enter a name for player two [Player 2]: "));
    }

    #[tokio::test]
    async fn test_resolve_defaults_on_closed_input() {
        let (names, _) = resolve(&GameConfig::default(), "").await;
        assert_eq!(
            names.unwrap(),
            ("Player 1".to_string(), "Player 2".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_uses_presets_without_asking() {
        let (names, out) = resolve(&config(Some(" Ada "), Some("Grace")), "").await;
        assert_eq!(names.unwrap(), ("Ada".to_string(), "Grace".to_string()));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_default_avoids_preset_one() {
        // Player one already holds player two's usual default.
        let (names, out) = resolve(&config(Some("Player 2"), None), "").await;
        assert_eq!(
            names.unwrap(),
            ("Player 2".to_string(), "Player 2 (2)".to_string())
        );
        assert!(out.contains("Enter a name for player two [Player 2 (2)]: "));
        assert!(!out.contains("already taken"));
    }

    #[tokio::test]
    async fn test_resolve_checks_player_one_against_preset_two() {
        let (names, out) = resolve(&config(None, Some("Ada")), "Ada\nLin\n").await;
        assert_eq!(names.unwrap(), ("Lin".to_string(), "Ada".to_string()));
        assert!(out.contains("Ada is already taken."));
    }

    #[tokio::test]
    async fn test_resolve_default_avoids_preset_two() {
        let (names, out) = resolve(&config(None, Some("Player 1")), "\n").await;
        assert_eq!(
            names.unwrap(),
            ("Player 1 (2)".to_string(), "Player 1".to_string())
        );
        assert!(out.contains("[Player 1 (2)]"));
    }

    #[tokio::test]
    async fn test_resolve_rejects_equal_presets() {
        let (names, _) = resolve(&config(Some("Ada"), Some("Ada")), "").await;
        assert!(names.is_err());
    }
}
