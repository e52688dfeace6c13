// 不用 prelude 通配导入：它自带的 rand 别名会与 rand crate 冲突
use macroquad::prelude::{vec2, Color, Texture2D, Vec2, BLUE};
use rand::Rng;

use crate::config::{GameConfig, SCREEN_H, SCREEN_W};
use crate::spawn::spawn_enemies;

// 游戏阶段：进行中、失败、胜利
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GamePhase {
    Playing,
    GameOver,
    Won,
}

// 生物实体：玩家与敌人共用同一结构
#[derive(Clone, Debug)]
pub struct Creature {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub value: f32,
    pub color: Color,
    pub texture: Option<Texture2D>,
}

impl Creature {
    pub fn new(
        x: f32,
        y: f32,
        speed: f32,
        size: f32,
        value: f32,
        color: Color,
        texture: Option<Texture2D>,
    ) -> Self {
        Self {
            pos: vec2(x, y),
            size,
            speed,
            value,
            color,
            texture,
        }
    }

    // 判断两个生物的包围盒是否相交（边界相切不算）
    pub fn overlaps(&self, other: &Creature) -> bool {
        self.pos.x < other.pos.x + other.size
            && self.pos.x + self.size > other.pos.x
            && self.pos.y < other.pos.y + other.size
            && self.pos.y + self.size > other.pos.y
    }

    // 按偏移移动，并把整个包围盒留在屏幕内
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.size > SCREEN_W {
            self.pos.x = SCREEN_W - self.size;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        }
        if self.pos.y + self.size > SCREEN_H {
            self.pos.y = SCREEN_H - self.size;
        }
    }
}

// 整局游戏状态：玩家、敌人与当前阶段
#[derive(Clone, Debug)]
pub struct Game {
    pub player: Creature,
    pub enemies: Vec<Creature>,
    pub phase: GamePhase,
}

impl Game {
    // 开一局新游戏：初始玩家加随机撒布的敌人
    pub fn new(config: &GameConfig, texture: Option<Texture2D>, rng: &mut impl Rng) -> Self {
        let player = Creature::new(50.0, 50.0, 200.0, 50.0, 1.0, BLUE, texture);
        let enemies = spawn_enemies(
            rng,
            config.enemy_count,
            config.enemy_size,
            &player,
            SCREEN_W,
            SCREEN_H,
        );
        Self {
            player,
            enemies,
            phase: GamePhase::Playing,
        }
    }

    // 重新开始：换新玩家并重新撒布敌人，贴图句柄沿用
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        let texture = self.player.texture.clone();
        *self = Game::new(config, texture, rng);
    }
}
