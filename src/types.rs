//! 颜色与玩家类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点颜色
///
/// 序列化为小写名称；反序列化同时接受名称和整数编码（见 [`Color::from_code`]）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "ColorRepr")]
pub enum Color {
    /// 未被任何玩家标记
    Unmarked,
    /// 银色玩家
    Silver,
    /// 青色玩家
    Teal,
}

/// 快照中颜色的两种写法
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Code(i64),
    Name(ColorName),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ColorName {
    Unmarked,
    Silver,
    Teal,
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self> {
        match repr {
            ColorRepr::Code(code) => Color::from_code(code),
            ColorRepr::Name(ColorName::Unmarked) => Ok(Color::Unmarked),
            ColorRepr::Name(ColorName::Silver) => Ok(Color::Silver),
            ColorRepr::Name(ColorName::Teal) => Ok(Color::Teal),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Unmarked
    }
}

impl Color {
    /// 从整数编码解析：-1 未标记，0 银色，1 青色
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            -1 => Ok(Color::Unmarked),
            0 => Ok(Color::Silver),
            1 => Ok(Color::Teal),
            other => Err(Error::InvalidColorCode(other)),
        }
    }

    /// 整数编码
    pub fn code(&self) -> i64 {
        match self {
            Color::Unmarked => -1,
            Color::Silver => 0,
            Color::Teal => 1,
        }
    }

    pub fn is_marked(&self) -> bool {
        *self != Color::Unmarked
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Unmarked => "unmarked",
            Color::Silver => "silver",
            Color::Teal => "teal",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 玩家（只有银色和青色两方）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Silver,
    Teal,
}

impl Player {
    /// 该玩家占据的顶点颜色
    pub fn color(&self) -> Color {
        match self {
            Player::Silver => Color::Silver,
            Player::Teal => Color::Teal,
        }
    }

    /// 对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::Silver => Player::Teal,
            Player::Teal => Player::Silver,
        }
    }
}

impl TryFrom<Color> for Player {
    type Error = Error;

    fn try_from(color: Color) -> Result<Self> {
        match color {
            Color::Silver => Ok(Player::Silver),
            Color::Teal => Ok(Player::Teal),
            Color::Unmarked => Err(Error::InvalidPlayer(color.to_string())),
        }
    }
}

impl From<Player> for Color {
    fn from(player: Player) -> Self {
        player.color()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color())
    }
}
