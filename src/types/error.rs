use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("未知的块类型: {0:?}")]
    UnknownKind(String),

    #[error("字段值不合法: {token:?},合法值: {legal:?}")]
    IllegalValue {
        token: String,
        legal: &'static [&'static str],
    },

    #[error("字段值缺失,合法值: {legal:?}")]
    MissingValue { legal: &'static [&'static str] },

    #[error("规则 {rule:?} 的第 {index} 个块解析失败: {source}")]
    InvalidBlock {
        rule: String,
        index: usize,
        #[source]
        source: Box<RuleError>,
    },

    #[error("配置错误: {0}")]
    ConfigError(String),
}
