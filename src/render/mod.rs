use macroquad::prelude::*;

use crate::model::{Creature, Game, GamePhase};
use crate::ui::{draw_centered_text, draw_text_ui, Ui};

// 绘制整帧画面
pub fn draw_game(ui: &Ui, game: &Game) {
    clear_background(WHITE);

    match game.phase {
        GamePhase::Playing => {
            draw_creature(ui, &game.player);
            for enemy in &game.enemies {
                draw_creature(ui, enemy);
            }
            draw_hud(ui);
        }
        GamePhase::GameOver => {
            draw_centered_text(ui, "你输了！按 R 重新开始", crate::config::SCREEN_H * 0.5, 40, RED);
        }
        GamePhase::Won => {
            draw_centered_text(ui, "你赢了！按 R 重新开始", crate::config::SCREEN_H * 0.5, 40, GREEN);
        }
    }
}

// 绘制单个生物：贴图按尺寸缩放并以本体颜色着色，没有贴图就画色块
fn draw_creature(ui: &Ui, creature: &Creature) {
    match &creature.texture {
        Some(texture) => {
            draw_texture_ex(
                texture,
                creature.pos.x,
                creature.pos.y,
                creature.color,
                DrawTextureParams {
                    dest_size: Some(vec2(creature.size, creature.size)),
                    ..Default::default()
                },
            );
        }
        None => {
            draw_rectangle(
                creature.pos.x,
                creature.pos.y,
                creature.size,
                creature.size,
                creature.color,
            );
        }
    }

    // 左上角标注点数
    let label = format!("{}", creature.value as i32);
    draw_text_ui(ui, &label, creature.pos.x - 10.0, creature.pos.y - 10.0, 20, BLACK);
}

// 绘制底部操作提示
fn draw_hud(ui: &Ui) {
    let hint = "WASD 移动  P 存档  L 读档";
    draw_text_ui(ui, hint, 16.0, crate::config::SCREEN_H - 14.0, 20, GRAY);
}
