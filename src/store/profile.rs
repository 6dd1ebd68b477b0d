use crate::types::{ProfileDefinition, RuleDefinition};
use tracing::debug;

/// 配置方案存储
///
/// 所有修改都经由定义好的更新操作进行,并显式维护与持久层的同步标志。
/// 载入或写回成功后由调用方调用 mark_synced。
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<ProfileDefinition>,
    synced: bool,
    revision: u64,
    updated_at: i64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            synced: true,
            revision: 0,
            updated_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn profiles(&self) -> &[ProfileDefinition] {
        &self.profiles
    }

    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// 整体替换方案列表
    pub fn replace(&mut self, profiles: Vec<ProfileDefinition>) {
        self.profiles = profiles;
        self.touch();
    }

    pub fn push_profile(&mut self, profile: ProfileDefinition) {
        self.profiles.push(profile);
        self.touch();
    }

    /// 按名称移除方案,返回是否确有移除
    pub fn remove_profile(&mut self, name: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|profile| profile.name != name);
        let removed = self.profiles.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// 替换指定方案的规则列表,方案不存在时返回 false
    pub fn set_rules(&mut self, profile: &str, rules: Vec<RuleDefinition>) -> bool {
        match self.profiles.iter_mut().find(|p| p.name == profile) {
            Some(found) => {
                found.rules = rules;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// 与持久层同步完成后打上标记,不改变修订号
    pub fn mark_synced(&mut self) {
        self.synced = true;
    }

    fn touch(&mut self) {
        self.synced = false;
        self.revision += 1;
        self.updated_at = chrono::Utc::now().timestamp_millis();
        debug!("配置已变更,当前修订号: {}", self.revision);
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(name: &str) -> ProfileDefinition {
        ProfileDefinition {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    #[test]
    fn new_store_is_synced_and_empty() {
        let store = ProfileStore::new();
        assert!(store.is_synced());
        assert_eq!(store.revision(), 0);
        assert!(store.profiles().is_empty());
    }

    #[test]
    fn mutations_clear_the_sync_flag_and_bump_the_revision() {
        let mut store = ProfileStore::new();

        store.push_profile(profile("a"));
        assert!(!store.is_synced());
        assert_eq!(store.revision(), 1);

        store.replace(vec![profile("b"), profile("c")]);
        assert_eq!(store.revision(), 2);
        assert_eq!(store.profiles().len(), 2);

        assert!(store.set_rules(
            "b",
            vec![RuleDefinition {
                name: "r".to_string(),
                blocks: Vec::new(),
            }],
        ));
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn mark_synced_restores_the_flag_without_bumping() {
        let mut store = ProfileStore::new();
        store.push_profile(profile("a"));

        store.mark_synced();
        assert!(store.is_synced());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn removing_an_absent_profile_changes_nothing() {
        let mut store = ProfileStore::new();
        store.push_profile(profile("a"));
        store.mark_synced();

        assert!(!store.remove_profile("missing"));
        assert!(store.is_synced());
        assert_eq!(store.revision(), 1);

        assert!(store.remove_profile("a"));
        assert!(!store.is_synced());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn set_rules_on_an_absent_profile_returns_false() {
        let mut store = ProfileStore::new();
        assert!(!store.set_rules("missing", Vec::new()));
        assert_eq!(store.revision(), 0);
    }
}
