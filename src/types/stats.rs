use crate::types::{StatCondition, StatVariable};
use serde::{Deserialize, Serialize};

/// 生命状态快照,由后台引擎按内存布局填充
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
    pub unreserved_hp: i32,
    pub es: i32,
    pub max_es: i32,
}

/// 魔力状态快照
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mana {
    pub mana: i32,
    pub max_mana: i32,
    pub unreserved_mana: i32,
}

impl StatVariable {
    /// 从快照中取出该变量的当前值
    pub fn sample(&self, health: &Health, mana: &Mana) -> i32 {
        match self {
            StatVariable::Life => health.hp,
            StatVariable::Mana => mana.mana,
            StatVariable::Es => health.es,
        }
    }
}

impl StatCondition {
    pub fn compare(&self, current: i32, threshold: i32) -> bool {
        match self {
            StatCondition::Lt => current < threshold,
            StatCondition::Gt => current > threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_picks_the_right_field() {
        let health = Health {
            hp: 37,
            max_hp: 100,
            unreserved_hp: 90,
            es: 12,
            max_es: 50,
        };
        let mana = Mana {
            mana: 80,
            max_mana: 120,
            unreserved_mana: 100,
        };

        assert_eq!(StatVariable::Life.sample(&health, &mana), 37);
        assert_eq!(StatVariable::Mana.sample(&health, &mana), 80);
        assert_eq!(StatVariable::Es.sample(&health, &mana), 12);
    }

    #[test]
    fn compare_follows_the_condition_direction() {
        assert!(StatCondition::Lt.compare(37, 50));
        assert!(!StatCondition::Lt.compare(50, 50));
        assert!(StatCondition::Gt.compare(80, 50));
        assert!(!StatCondition::Gt.compare(50, 50));
    }
}
