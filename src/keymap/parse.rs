//! Key string parsing for configuration files
//!
//! Accepts strings like `"tab"`, `"i"`, `"f1"`, `"shift+c"`.

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors that can occur when parsing hotkeys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    InvalidKey(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
        }
    }
}

impl std::error::Error for KeymapError {}

/// Parse a key string like "shift+c" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::InvalidKey("empty key".to_string()));
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in trimmed.split('+') {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" | "cmd" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "space" => Ok(KeyCode::Space),
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=24).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            if let Some(n) = key
                .strip_prefix("numpad")
                .or_else(|| key.strip_prefix("num"))
                .and_then(|n| n.parse::<u8>().ok())
            {
                if n <= 9 {
                    return Ok(KeyCode::Numpad(n));
                }
            }
            Err(KeymapError::InvalidKey(format!("Unknown key: {}", key)))
        }
    }
}
