use log::warn;
use macroquad::prelude::next_frame;

use crate::assets::{load_creature_texture, load_ui_font};
use crate::config::GameConfig;
use crate::model::Game;
use crate::render::draw_game;
use crate::save::SaveStore;
use crate::systems::{poll_input, update};
use crate::ui::Ui;

// 游戏主循环：加载配置与资源，逐帧处理输入、更新与渲染
pub async fn run() {
    // 加载可调参数（数据驱动）
    let config = GameConfig::load_from_file("data/config.json").unwrap_or_else(|e| {
        warn!("配置加载失败: {}，使用默认参数", e);
        GameConfig::default()
    });

    let ui = Ui {
        font: load_ui_font().await,
    };
    let texture = load_creature_texture(&config.texture_path).await;
    let store = SaveStore::new();

    let mut rng = rand::thread_rng();
    let mut game = Game::new(&config, texture, &mut rng);

    loop {
        let input = poll_input();
        update(&mut game, &input, &store, &config, &mut rng);
        draw_game(&ui, &game);

        next_frame().await;
    }
}
