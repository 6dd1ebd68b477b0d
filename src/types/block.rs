use crate::types::RuleError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 状态条件可监视的变量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatVariable {
    Life,
    Mana,
    Es,
}

impl StatVariable {
    /// 合法取值,按声明顺序
    pub const TOKENS: &'static [&'static str] = &["life", "mana", "es"];

    pub fn token(&self) -> &'static str {
        match self {
            StatVariable::Life => "life",
            StatVariable::Mana => "mana",
            StatVariable::Es => "es",
        }
    }

    /// 校验并窄化一个原始令牌,缺失或不在合法集合内都会失败
    pub fn from_token(token: Option<&str>) -> Result<Self, RuleError> {
        match token {
            Some("life") => Ok(StatVariable::Life),
            Some("mana") => Ok(StatVariable::Mana),
            Some("es") => Ok(StatVariable::Es),
            Some(other) => Err(RuleError::IllegalValue {
                token: other.to_string(),
                legal: Self::TOKENS,
            }),
            None => Err(RuleError::MissingValue {
                legal: Self::TOKENS,
            }),
        }
    }
}

/// 状态条件的比较方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatCondition {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
}

impl StatCondition {
    pub const TOKENS: &'static [&'static str] = &["<", ">"];

    pub fn token(&self) -> &'static str {
        match self {
            StatCondition::Lt => "<",
            StatCondition::Gt => ">",
        }
    }

    pub fn from_token(token: Option<&str>) -> Result<Self, RuleError> {
        match token {
            Some("<") => Ok(StatCondition::Lt),
            Some(">") => Ok(StatCondition::Gt),
            Some(other) => Err(RuleError::IllegalValue {
                token: other.to_string(),
                legal: Self::TOKENS,
            }),
            None => Err(RuleError::MissingValue {
                legal: Self::TOKENS,
            }),
        }
    }
}

/// 鼠标按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const TOKENS: &'static [&'static str] = &["left", "middle", "right"];

    pub fn token(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
        }
    }

    pub fn from_token(token: Option<&str>) -> Result<Self, RuleError> {
        match token {
            Some("left") => Ok(MouseButton::Left),
            Some("middle") => Ok(MouseButton::Middle),
            Some("right") => Ok(MouseButton::Right),
            Some(other) => Err(RuleError::IllegalValue {
                token: other.to_string(),
                legal: Self::TOKENS,
            }),
            None => Err(RuleError::MissingValue {
                legal: Self::TOKENS,
            }),
        }
    }
}

/// 滚轮方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub const TOKENS: &'static [&'static str] = &["up", "down"];

    pub fn token(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }

    pub fn from_token(token: Option<&str>) -> Result<Self, RuleError> {
        match token {
            Some("up") => Ok(ScrollDirection::Up),
            Some("down") => Ok(ScrollDirection::Down),
            Some(other) => Err(RuleError::IllegalValue {
                token: other.to_string(),
                legal: Self::TOKENS,
            }),
            None => Err(RuleError::MissingValue {
                legal: Self::TOKENS,
            }),
        }
    }
}

/// 自动化块定义,kind 决定变体与字段布局
///
/// value 字段为自由文本,数值解析由后台引擎负责。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockDefinition {
    // 条件
    Stat {
        variable: StatVariable,
        condition: StatCondition,
        value: String,
    },
    Key {
        value: String,
    },
    Mouse {
        variable: MouseButton,
    },
    // 动作
    Press {
        value: String,
    },
    Type {
        value: String,
    },
    Disconnect,
    Click {
        variable: MouseButton,
    },
    Scroll {
        variable: ScrollDirection,
    },
    // 定时
    Cooldown {
        value: String,
    },
    Delay {
        value: String,
    },
}

impl BlockDefinition {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockDefinition::Stat { .. } => BlockKind::Stat,
            BlockDefinition::Key { .. } => BlockKind::Key,
            BlockDefinition::Mouse { .. } => BlockKind::Mouse,
            BlockDefinition::Press { .. } => BlockKind::Press,
            BlockDefinition::Type { .. } => BlockKind::Type,
            BlockDefinition::Disconnect => BlockKind::Disconnect,
            BlockDefinition::Click { .. } => BlockKind::Click,
            BlockDefinition::Scroll { .. } => BlockKind::Scroll,
            BlockDefinition::Cooldown { .. } => BlockKind::Cooldown,
            BlockDefinition::Delay { .. } => BlockKind::Delay,
        }
    }
}

/// 块类型标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Stat,
    Key,
    Mouse,
    Press,
    Type,
    Disconnect,
    Click,
    Scroll,
    Cooldown,
    Delay,
}

lazy_static! {
    // 标签到块类型的索引
    static ref KIND_INDEX: HashMap<&'static str, BlockKind> = BlockKind::ALL
        .iter()
        .map(|kind| (kind.token(), *kind))
        .collect();
}

impl BlockKind {
    /// 全部块类型,按声明顺序
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Stat,
        BlockKind::Key,
        BlockKind::Mouse,
        BlockKind::Press,
        BlockKind::Type,
        BlockKind::Disconnect,
        BlockKind::Click,
        BlockKind::Scroll,
        BlockKind::Cooldown,
        BlockKind::Delay,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            BlockKind::Stat => "stat",
            BlockKind::Key => "key",
            BlockKind::Mouse => "mouse",
            BlockKind::Press => "press",
            BlockKind::Type => "type",
            BlockKind::Disconnect => "disconnect",
            BlockKind::Click => "click",
            BlockKind::Scroll => "scroll",
            BlockKind::Cooldown => "cooldown",
            BlockKind::Delay => "delay",
        }
    }

    /// 识别标签令牌,未声明的标签一律拒绝
    pub fn from_token(token: &str) -> Result<Self, RuleError> {
        KIND_INDEX
            .get(token)
            .copied()
            .ok_or_else(|| RuleError::UnknownKind(token.to_string()))
    }
}
