use crate::types::BlockKind;
use serde::{Deserialize, Serialize};

/// 块类型描述,供界面列出可插入的块
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BlockDescriptor {
    pub kind: BlockKind,
    pub name: String,
    pub description: String,
}

impl BlockDescriptor {
    /// 全部块类型的描述,按声明顺序
    pub fn all() -> Vec<BlockDescriptor> {
        BlockKind::ALL.iter().map(|kind| kind.descriptor()).collect()
    }
}

impl BlockKind {
    pub fn descriptor(&self) -> BlockDescriptor {
        let (name, description) = match self {
            BlockKind::Stat => ("状态条件", "根据生命、魔力或能量护盾的当前值触发"),
            BlockKind::Key => ("按键条件", "检测到指定按键按下时触发"),
            BlockKind::Mouse => ("鼠标条件", "检测到指定鼠标按键按下时触发"),
            BlockKind::Press => ("按键动作", "按下指定按键"),
            BlockKind::Type => ("输入动作", "输入一段文本,保留其中的空格"),
            BlockKind::Disconnect => ("断线动作", "立即断开连接"),
            BlockKind::Click => ("点击动作", "点击指定鼠标按键"),
            BlockKind::Scroll => ("滚轮动作", "向指定方向滚动"),
            BlockKind::Cooldown => ("冷却时间", "限制所在规则的最小触发间隔"),
            BlockKind::Delay => ("延迟时间", "执行后续块前等待指定时长"),
        };
        BlockDescriptor {
            kind: *self,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
