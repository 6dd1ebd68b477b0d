use crate::types::BlockKind;

/// 当前块行语法版本
pub const SCHEMA_VERSION: u64 = 2;

// 旧版状态条件标签
const LEGACY_STAT_TAG: &str = "when";

/// 将版本 1 的块行重写为当前语法
///
/// 旧版差异: 状态条件标签为 when;click 与 scroll 末尾多一个幅度字段。
/// 迁移只重写行文本,解码仍然只走当前语法;对当前语法的行调用是幂等的。
pub fn upgrade_line(line: &str) -> String {
    let mut parts: Vec<&str> = line.split(' ').collect();
    match parts.first().copied() {
        Some(LEGACY_STAT_TAG) => {
            parts[0] = BlockKind::Stat.token();
            parts.join(" ")
        }
        Some("click") | Some("scroll") if parts.len() > 2 => {
            // 丢弃旧版幅度字段
            parts.truncate(2);
            parts.join(" ")
        }
        _ => line.to_string(),
    }
}
