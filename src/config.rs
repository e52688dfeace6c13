use std::fs;

use macroquad::prelude::Conf;
use serde::Deserialize;

// 屏幕逻辑尺寸与单步移动距离：全部固定常量，供移动夹取与渲染使用
pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 400.0;
pub const MOVE_STEP: f32 = 50.0;

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf() -> Conf {
    Conf {
        window_title: "大鱼吃小鱼 迷你版".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

// 数据驱动的可调参数：从 data/config.json 读取，失败时回退到默认值
#[derive(Clone, Debug, Deserialize)]
pub struct GameConfig {
    pub texture_path: String,
    pub enemy_count: usize,
    pub enemy_size: f32,
    pub save_name: String,
}

impl GameConfig {
    // 从 JSON 文件加载配置，I/O 或解析错误统一转为字符串交给调用方处理
    pub fn load_from_file(path: &str) -> Result<GameConfig, String> {
        let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&text).map_err(|e| e.to_string())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            texture_path: "assets/creature.png".to_string(),
            enemy_count: 5,
            enemy_size: 50.0,
            save_name: "player".to_string(),
        }
    }
}
