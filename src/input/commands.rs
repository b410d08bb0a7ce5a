//! # Command Parsing
//!
//! Textual key names for scripted and line-based play.
//!
//! A script is a sequence of key names separated by whitespace or commas,
//! for example `"right right down space i e i"`.

use crate::input::PlayerInput;
use crate::{CrawlerError, CrawlerResult, Direction};

/// Parses one key name. Names are case-insensitive.
///
/// Vi-style movement keys (`h`, `j`, `k`, `l`) are recognised only when
/// `vi_keys` is set.
///
/// # Examples
///
/// ```
/// use mazecrawl::{input::parse_command, Direction, PlayerInput};
///
/// assert_eq!(parse_command("W", false), Some(PlayerInput::Move(Direction::Up)));
/// assert_eq!(parse_command("space", false), Some(PlayerInput::Attack));
/// assert_eq!(parse_command("k", false), None);
/// ```
pub fn parse_command(token: &str, vi_keys: bool) -> Option<PlayerInput> {
    let token = token.trim().to_ascii_lowercase();
    let input = match token.as_str() {
        "up" | "w" => PlayerInput::Move(Direction::Up),
        "down" | "s" => PlayerInput::Move(Direction::Down),
        "left" | "a" => PlayerInput::Move(Direction::Left),
        "right" | "d" => PlayerInput::Move(Direction::Right),
        "k" if vi_keys => PlayerInput::Move(Direction::Up),
        "j" if vi_keys => PlayerInput::Move(Direction::Down),
        "h" if vi_keys => PlayerInput::Move(Direction::Left),
        "l" if vi_keys => PlayerInput::Move(Direction::Right),
        "space" | "attack" | "f" => PlayerInput::Attack,
        "i" | "inventory" => PlayerInput::Inventory,
        "e" | "equip" => PlayerInput::Equip,
        "q" | "quit" | "escape" => PlayerInput::Quit,
        "?" | "help" | "f1" => PlayerInput::Help,
        _ => return None,
    };
    Some(input)
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`CrawlerError::InvalidAction`] naming the first unknown key.
pub fn parse_script(script: &str, vi_keys: bool) -> CrawlerResult<Vec<PlayerInput>> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_command(token, vi_keys)
                .ok_or_else(|| CrawlerError::InvalidAction(format!("unknown key '{}'", token)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_aliases() {
        for (token, direction) in [
            ("up", Direction::Up),
            ("S", Direction::Down),
            ("a", Direction::Left),
            ("Right", Direction::Right),
        ] {
            assert_eq!(parse_command(token, false), Some(PlayerInput::Move(direction)));
        }
    }

    #[test]
    fn test_vi_keys_toggle() {
        assert_eq!(parse_command("h", true), Some(PlayerInput::Move(Direction::Left)));
        assert_eq!(parse_command("h", false), None);
    }

    #[test]
    fn test_parse_script() {
        let inputs = parse_script("right, right\n down space i e", false).unwrap();
        assert_eq!(
            inputs,
            vec![
                PlayerInput::Move(Direction::Right),
                PlayerInput::Move(Direction::Right),
                PlayerInput::Move(Direction::Down),
                PlayerInput::Attack,
                PlayerInput::Inventory,
                PlayerInput::Equip,
            ]
        );
        assert!(parse_script("", false).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            parse_script("up jump", false),
            Err(CrawlerError::InvalidAction(_))
        ));
    }
}
