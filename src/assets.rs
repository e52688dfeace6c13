use std::path::Path;

use log::warn;
use macroquad::prelude::*;

// 加载生物贴图，失败时返回None改用纯色方块渲染
pub async fn load_creature_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(e) => {
            warn!("贴图 {} 加载失败: {:?}", path, e);
            None
        }
    }
}

// 加载UI字体，优先使用项目资源中的字体，其次尝试系统字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "assets/NotoSansSC-Regular.ttf",
        "assets/msyh.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "C:/Windows/Fonts/msyh.ttc",
        "C:/Windows/Fonts/simhei.ttf",
    ];

    for path in candidates {
        // 跳过不存在的候选路径
        if !Path::new(path).exists() {
            continue;
        }
        // 成功加载即可返回
        if let Ok(font) = load_ttf_font(path).await {
            return Some(font);
        }
    }

    None
}
