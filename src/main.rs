mod app;
mod assets;
mod config;
mod model;
mod render;
mod save;
mod spawn;
mod systems;
mod ui;

use crate::config::window_conf;

#[macroquad::main(window_conf)]
// 程序入口：初始化日志与窗口配置并启动游戏主循环
async fn main() {
    env_logger::init();
    app::run().await;
}
