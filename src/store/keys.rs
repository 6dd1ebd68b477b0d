use std::collections::HashMap;
use std::hash::Hash;

/// 界面列表渲染用的键分配器
///
/// 第一次见到某个实体键时分配自增的界面键,此后对同一实体键保持稳定。
/// 实体键应当是持久的标识,例如方案或规则的名称。
#[derive(Debug)]
pub struct UiKeyMap<K> {
    cur_id: u64,
    ids: HashMap<K, u64>,
}

impl<K: Eq + Hash> UiKeyMap<K> {
    pub fn new() -> Self {
        Self {
            cur_id: 0,
            ids: HashMap::new(),
        }
    }

    /// 取实体键对应的界面键,尚未分配时先分配
    pub fn key(&mut self, entity: K) -> u64 {
        if let Some(id) = self.ids.get(&entity) {
            return *id;
        }
        self.cur_id += 1;
        self.ids.insert(entity, self.cur_id);
        self.cur_id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Eq + Hash> Default for UiKeyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}
