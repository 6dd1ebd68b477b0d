use anyhow::Result;
use tracing::{info, Level};
use trigger_rs::{
    dump_profiles, load_profiles, BlockDefinition, Health, Mana, MouseButton, ProfileDefinition,
    ProfileStore, RuleDefinition, UiKeyMap,
};

// 版本 1 的持久化文档,载入时会被迁移
const LEGACY_CONFIG: &str = r#"{
    "profiles": [
        {
            "name": "法师",
            "rules": [
                {
                    "name": "自动喝血",
                    "blocks": [
                        "when life < 50",
                        "press 1",
                        "cooldown 2000"
                    ]
                },
                {
                    "name": "低血断线",
                    "blocks": [
                        "when life < 10",
                        "disconnect"
                    ]
                }
            ]
        }
    ]
}"#;

fn main() -> Result<()> {
    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    // 载入旧版文档
    let profiles = load_profiles(LEGACY_CONFIG)?;
    info!("载入方案: {}", profiles[0].name);

    let mut store = ProfileStore::new();
    store.replace(profiles);

    // 手动构建一个新方案
    store.push_profile(ProfileDefinition {
        name: "快速施法".to_string(),
        rules: vec![RuleDefinition {
            name: "右键连点".to_string(),
            blocks: vec![
                BlockDefinition::Mouse {
                    variable: MouseButton::Right,
                },
                BlockDefinition::Click {
                    variable: MouseButton::Left,
                },
                BlockDefinition::Delay {
                    value: "120".to_string(),
                },
            ],
        }],
    });

    // 用一份状态快照评估第一条规则的状态条件
    let health = Health {
        hp: 37,
        max_hp: 100,
        unreserved_hp: 100,
        es: 0,
        max_es: 0,
    };
    let mana = Mana {
        mana: 80,
        max_mana: 100,
        unreserved_mana: 100,
    };
    if let BlockDefinition::Stat {
        variable,
        condition,
        value,
    } = &store.profiles()[0].rules[0].blocks[0]
    {
        let current = variable.sample(&health, &mana);
        let threshold: i32 = value.parse()?;
        info!(
            "条件 {} {} {} 当前值 {},是否触发: {}",
            variable.token(),
            condition.token(),
            value,
            current,
            condition.compare(current, threshold)
        );
    }

    // 写回当前版本的文档
    let dumped = dump_profiles(store.profiles())?;
    store.mark_synced();
    info!("同步状态: {}", store.is_synced());
    println!("{}", dumped);

    // 界面键按首次出现顺序分配
    let mut keys = UiKeyMap::new();
    for profile in store.profiles() {
        info!("方案 {} 的界面键: {}", profile.name, keys.key(profile.name.clone()));
    }

    Ok(())
}
