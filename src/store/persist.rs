use crate::codec::{upgrade_line, SCHEMA_VERSION};
use crate::types::{BlockDefinition, ProfileDefinition, RuleDefinition, RuleError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

// 持久化文档,块保存为编码后的行文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default = "legacy_version")]
    pub version: u64,
    pub profiles: Vec<StoredProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub name: String,
    pub rules: Vec<StoredRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRule {
    pub name: String,
    pub blocks: Vec<String>,
}

// 早期文档没有版本字段
fn legacy_version() -> u64 {
    1
}

/// 解析持久化文档为方案列表
///
/// 低于当前版本的文档先逐行迁移再解码;任何一行失败都会使所在规则的载入失败。
pub fn load_profiles(content: &str) -> Result<Vec<ProfileDefinition>, RuleError> {
    let stored: StoredConfig =
        serde_json::from_str(content).map_err(|e| RuleError::ConfigError(e.to_string()))?;

    if stored.version > SCHEMA_VERSION {
        return Err(RuleError::ConfigError(format!(
            "不支持的配置版本: {}",
            stored.version
        )));
    }
    let migrate = stored.version < SCHEMA_VERSION;
    if migrate {
        warn!(
            "检测到版本 {} 的配置,迁移到版本 {}",
            stored.version, SCHEMA_VERSION
        );
    }

    let mut profiles = Vec::with_capacity(stored.profiles.len());
    for profile in stored.profiles {
        let mut rules = Vec::with_capacity(profile.rules.len());
        for rule in profile.rules {
            rules.push(decode_rule(rule, migrate)?);
        }
        profiles.push(ProfileDefinition {
            name: profile.name,
            rules,
        });
    }
    info!("载入了 {} 个配置方案", profiles.len());
    Ok(profiles)
}

pub fn load_profiles_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ProfileDefinition>, RuleError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| RuleError::ConfigError(e.to_string()))?;
    load_profiles(&content)
}

/// 编码为当前版本的持久化文档
pub fn dump_profiles(profiles: &[ProfileDefinition]) -> Result<String, RuleError> {
    let stored = StoredConfig {
        version: SCHEMA_VERSION,
        profiles: profiles
            .iter()
            .map(|profile| StoredProfile {
                name: profile.name.clone(),
                rules: profile
                    .rules
                    .iter()
                    .map(|rule| StoredRule {
                        name: rule.name.clone(),
                        blocks: rule.blocks.iter().map(|block| block.to_line()).collect(),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&stored).map_err(|e| RuleError::ConfigError(e.to_string()))
}

pub fn save_profiles_to_file<P: AsRef<Path>>(
    path: P,
    profiles: &[ProfileDefinition],
) -> Result<(), RuleError> {
    let content = dump_profiles(profiles)?;
    std::fs::write(&path, content).map_err(|e| RuleError::ConfigError(e.to_string()))?;
    info!("配置已写入 {}", path.as_ref().display());
    Ok(())
}

// 单条规则的块行解码,记录首个失败行的位置
fn decode_rule(stored: StoredRule, migrate: bool) -> Result<RuleDefinition, RuleError> {
    let mut blocks = Vec::with_capacity(stored.blocks.len());
    for (index, line) in stored.blocks.iter().enumerate() {
        let line = if migrate {
            upgrade_line(line)
        } else {
            line.clone()
        };
        let block = BlockDefinition::from_line(&line).map_err(|e| RuleError::InvalidBlock {
            rule: stored.name.clone(),
            index,
            source: Box::new(e),
        })?;
        blocks.push(block);
    }
    Ok(RuleDefinition {
        name: stored.name,
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use crate::types::{MouseButton, StatCondition, StatVariable};

    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_profiles() -> Vec<ProfileDefinition> {
        vec![ProfileDefinition {
            name: "法师".to_string(),
            rules: vec![
                RuleDefinition {
                    name: "自动喝血".to_string(),
                    blocks: vec![
                        BlockDefinition::Stat {
                            variable: StatVariable::Life,
                            condition: StatCondition::Lt,
                            value: "50".to_string(),
                        },
                        BlockDefinition::Press {
                            value: "1".to_string(),
                        },
                        BlockDefinition::Cooldown {
                            value: "2000".to_string(),
                        },
                    ],
                },
                RuleDefinition {
                    name: "求救喊话".to_string(),
                    blocks: vec![
                        BlockDefinition::Mouse {
                            variable: MouseButton::Right,
                        },
                        BlockDefinition::Type {
                            value: "help me  now".to_string(),
                        },
                    ],
                },
            ],
        }]
    }

    #[test_log::test]
    fn document_round_trips() {
        let profiles = sample_profiles();
        let dumped = dump_profiles(&profiles).unwrap();
        assert_eq!(load_profiles(&dumped).unwrap(), profiles);
    }

    #[test]
    fn dump_writes_the_current_version() {
        let dumped = dump_profiles(&sample_profiles()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&dumped).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(
            value["profiles"][0]["rules"][0]["blocks"][0],
            "stat life < 50"
        );
    }

    #[test_log::test]
    fn versionless_document_loads_through_migration() {
        let content = r#"{
            "profiles": [
                {
                    "name": "旧配置",
                    "rules": [
                        {
                            "name": "喝血",
                            "blocks": ["when life < 50", "click left 1", "press 1"]
                        }
                    ]
                }
            ]
        }"#;

        let profiles = load_profiles(content).unwrap();
        assert_eq!(
            profiles[0].rules[0].blocks,
            vec![
                BlockDefinition::Stat {
                    variable: StatVariable::Life,
                    condition: StatCondition::Lt,
                    value: "50".to_string(),
                },
                BlockDefinition::Click {
                    variable: MouseButton::Left,
                },
                BlockDefinition::Press {
                    value: "1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn current_version_document_skips_migration() {
        // 版本 2 不迁移,when 是未知标签
        let content = r#"{
            "version": 2,
            "profiles": [
                {
                    "name": "p",
                    "rules": [{ "name": "r", "blocks": ["when life < 50"] }]
                }
            ]
        }"#;

        let err = load_profiles(content).unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidBlock { ref rule, index, ref source }
                if rule == "r"
                    && index == 0
                    && matches!(**source, RuleError::UnknownKind(ref tag) if tag == "when")
        ));
    }

    #[test]
    fn bad_line_fails_the_rule_with_its_position() {
        let content = r#"{
            "version": 2,
            "profiles": [
                {
                    "name": "p",
                    "rules": [
                        { "name": "r", "blocks": ["press 1", "mouse up"] }
                    ]
                }
            ]
        }"#;

        let err = load_profiles(content).unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidBlock { ref rule, index, .. } if rule == "r" && index == 1
        ));
    }

    #[test]
    fn newer_versions_are_refused() {
        let content = r#"{ "version": 3, "profiles": [] }"#;
        assert!(matches!(
            load_profiles(content).unwrap_err(),
            RuleError::ConfigError(_)
        ));
    }

    #[test]
    fn malformed_json_maps_to_a_config_error() {
        assert!(matches!(
            load_profiles("not json").unwrap_err(),
            RuleError::ConfigError(_)
        ));
    }
}
