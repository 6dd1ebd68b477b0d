use crate::types::{
    BlockDefinition, BlockKind, MouseButton, RuleError, ScrollDirection, StatCondition,
    StatVariable,
};

// 自由文本字段,只要求该位置存在
fn text_field(token: Option<&str>) -> Result<String, RuleError> {
    match token {
        Some(text) => Ok(text.to_string()),
        None => Err(RuleError::MissingValue { legal: &[] }),
    }
}

impl BlockDefinition {
    /// 编码为单行文本
    ///
    /// 标签后按声明顺序拼接字段,单个空格分隔,不做转义。
    /// 除 type 的值占据行尾外,其余自由文本字段不应包含空格。
    pub fn to_line(&self) -> String {
        let kind = self.kind().token();
        match self {
            BlockDefinition::Stat {
                variable,
                condition,
                value,
            } => format!("{} {} {} {}", kind, variable.token(), condition.token(), value),
            BlockDefinition::Key { value } => format!("{} {}", kind, value),
            BlockDefinition::Mouse { variable } => format!("{} {}", kind, variable.token()),
            BlockDefinition::Press { value } => format!("{} {}", kind, value),
            BlockDefinition::Type { value } => format!("{} {}", kind, value),
            BlockDefinition::Disconnect => kind.to_string(),
            BlockDefinition::Click { variable } => format!("{} {}", kind, variable.token()),
            BlockDefinition::Scroll { variable } => format!("{} {}", kind, variable.token()),
            BlockDefinition::Cooldown { value } => format!("{} {}", kind, value),
            BlockDefinition::Delay { value } => format!("{} {}", kind, value),
        }
    }

    /// 从单行文本解码
    ///
    /// 首个令牌为标签,其余字段按位置消费并逐个校验。
    /// 任一字段校验失败则整行失败,不返回部分结果。
    pub fn from_line(line: &str) -> Result<Self, RuleError> {
        let mut parts = line.split(' ');
        // split 至少产生一个令牌
        let tag = parts.next().unwrap_or_default();
        match BlockKind::from_token(tag)? {
            BlockKind::Stat => Ok(BlockDefinition::Stat {
                variable: StatVariable::from_token(parts.next())?,
                condition: StatCondition::from_token(parts.next())?,
                value: text_field(parts.next())?,
            }),
            BlockKind::Key => Ok(BlockDefinition::Key {
                value: text_field(parts.next())?,
            }),
            BlockKind::Mouse => Ok(BlockDefinition::Mouse {
                variable: MouseButton::from_token(parts.next())?,
            }),
            BlockKind::Press => Ok(BlockDefinition::Press {
                value: text_field(parts.next())?,
            }),
            // type 的值是标签与分隔符之后的整个行尾,原样保留空格
            BlockKind::Type => Ok(BlockDefinition::Type {
                value: line.get(tag.len() + 1..).unwrap_or_default().to_string(),
            }),
            BlockKind::Disconnect => Ok(BlockDefinition::Disconnect),
            BlockKind::Click => Ok(BlockDefinition::Click {
                variable: MouseButton::from_token(parts.next())?,
            }),
            BlockKind::Scroll => Ok(BlockDefinition::Scroll {
                variable: ScrollDirection::from_token(parts.next())?,
            }),
            BlockKind::Cooldown => Ok(BlockDefinition::Cooldown {
                value: text_field(parts.next())?,
            }),
            BlockKind::Delay => Ok(BlockDefinition::Delay {
                value: text_field(parts.next())?,
            }),
        }
    }
}
