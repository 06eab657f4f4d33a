//! Per-frame keyboard input resource.
//!
//! Tracks the keys the game polls in the [`InputState`] resource. Each key
//! moves through [`ButtonState`]: `Pressed` only on the frame of the
//! transition (edge), then `Down` while held (level), `Released` on the frame
//! it goes up, then `Up`. [`InputState::advance_frame`] performs the
//! Pressed→Down and Released→Up steps at the end of every frame.
//!
//! Without a window, key transitions come from an [`InputScript`]: a
//! timeline of `frame key down|up` lines replayed by
//! [`apply_input_script`](crate::systems::input::apply_input_script).
use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Enter,
    W,
    A,
    S,
    D,
    T,
    Q,
    Y,
    U,
    I,
    O,
    K,
    L,
    P,
    Num1,
    Num2,
    Num3,
    F11,
}

impl KeyCode {
    pub const ALL: [KeyCode; 19] = [
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::W,
        KeyCode::A,
        KeyCode::S,
        KeyCode::D,
        KeyCode::T,
        KeyCode::Q,
        KeyCode::Y,
        KeyCode::U,
        KeyCode::I,
        KeyCode::O,
        KeyCode::K,
        KeyCode::L,
        KeyCode::P,
        KeyCode::Num1,
        KeyCode::Num2,
        KeyCode::Num3,
        KeyCode::F11,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyCode::Space => "space",
            KeyCode::Enter => "enter",
            KeyCode::W => "w",
            KeyCode::A => "a",
            KeyCode::S => "s",
            KeyCode::D => "d",
            KeyCode::T => "t",
            KeyCode::Q => "q",
            KeyCode::Y => "y",
            KeyCode::U => "u",
            KeyCode::I => "i",
            KeyCode::O => "o",
            KeyCode::K => "k",
            KeyCode::L => "l",
            KeyCode::P => "p",
            KeyCode::Num1 => "1",
            KeyCode::Num2 => "2",
            KeyCode::Num3 => "3",
            KeyCode::F11 => "f11",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyCode {
    type Err = InputScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        KeyCode::ALL
            .iter()
            .copied()
            .find(|k| k.name() == lower)
            .ok_or_else(|| InputScriptError::UnknownKey(s.to_string()))
    }
}

/// Edge/level state of a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Up,
    Pressed,
    Down,
    Released,
}

impl ButtonState {
    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Down)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    keys: FxHashMap<KeyCode, ButtonState>,
}

impl InputState {
    pub fn state(&self, key: KeyCode) -> ButtonState {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Press `key`. A key that is already held stays as it is.
    pub fn press(&mut self, key: KeyCode) {
        let state = self.keys.entry(key).or_default();
        if !state.is_down() {
            *state = ButtonState::Pressed;
        }
    }

    /// Release `key`. A key that is already up stays as it is.
    pub fn release(&mut self, key: KeyCode) {
        let state = self.keys.entry(key).or_default();
        if state.is_down() {
            *state = ButtonState::Released;
        }
    }

    /// True only on the frame the key went down.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.state(key) == ButtonState::Pressed
    }

    pub fn just_released(&self, key: KeyCode) -> bool {
        self.state(key) == ButtonState::Released
    }

    /// True while the key is held, including the frame it went down.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.state(key).is_down()
    }

    /// Settle edge states: Pressed becomes Down, Released becomes Up.
    pub fn advance_frame(&mut self) {
        for state in self.keys.values_mut() {
            *state = match *state {
                ButtonState::Pressed => ButtonState::Down,
                ButtonState::Released => ButtonState::Up,
                other => other,
            };
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// One scripted key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: KeyCode,
    pub pressed: bool,
}

/// Timeline of key transitions replayed frame by frame.
///
/// Text form, one transition per line, `#` starts a comment:
///
/// ```text
/// # frame key state
/// 0   space down
/// 1   space up
/// 10  w     down
/// ```
///
/// A key cannot go both down and up on the same frame: the release would
/// swallow the press edge, so [`InputScript::parse`] rejects it.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    entries: Vec<ScriptedKey>,
    /// Next frame to replay.
    pub frame: u64,
}

impl InputScript {
    pub fn new(mut entries: Vec<ScriptedKey>) -> Self {
        entries.sort_by_key(|e| e.frame);
        Self { entries, frame: 0 }
    }

    pub fn parse(text: &str) -> Result<Self, InputScriptError> {
        let mut entries = Vec::new();
        let mut seen: FxHashMap<(u64, KeyCode), bool> = FxHashMap::default();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                return Err(InputScriptError::Syntax {
                    line: line_no,
                    message: format!("expected `frame key down|up`, got `{line}`"),
                });
            }
            let frame = parts[0].parse::<u64>().map_err(|e| InputScriptError::Syntax {
                line: line_no,
                message: format!("bad frame `{}`: {e}", parts[0]),
            })?;
            let key = parts[1].parse::<KeyCode>()?;
            let pressed = match parts[2] {
                "down" => true,
                "up" => false,
                other => {
                    return Err(InputScriptError::Syntax {
                        line: line_no,
                        message: format!("expected `down` or `up`, got `{other}`"),
                    });
                }
            };
            if let Some(&earlier) = seen.get(&(frame, key))
                && earlier != pressed
            {
                return Err(InputScriptError::Syntax {
                    line: line_no,
                    message: format!("`{}` goes both down and up on frame {frame}", parts[1]),
                });
            }
            seen.insert((frame, key), pressed);
            entries.push(ScriptedKey { frame, key, pressed });
        }
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[ScriptedKey] {
        &self.entries
    }

    /// Transitions scheduled for the current frame, then step to the next one.
    pub fn take_current(&mut self) -> impl Iterator<Item = ScriptedKey> + '_ {
        let frame = self.frame;
        self.frame += 1;
        self.entries.iter().copied().filter(move |e| e.frame == frame)
    }
}
