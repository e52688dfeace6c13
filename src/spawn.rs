use log::warn;
use macroquad::prelude::RED;
use rand::Rng;

use crate::model::Creature;

// 单个敌人随机取点的尝试上限，超过后改用网格扫描兜底
const MAX_PLACE_TRIES: u32 = 1000;

// 撒布敌人：点数依次为 1..=count，位置保证互不重叠且不压住玩家
pub fn spawn_enemies(
    rng: &mut impl Rng,
    count: usize,
    enemy_size: f32,
    player: &Creature,
    screen_w: f32,
    screen_h: f32,
) -> Vec<Creature> {
    if enemy_size <= 0.0 {
        warn!("敌人尺寸 {} 非法，本局不生成敌人", enemy_size);
        return Vec::new();
    }

    let mut enemies: Vec<Creature> = Vec::with_capacity(count);

    for i in 0..count {
        let value = (i + 1) as f32;
        match place_one(rng, enemy_size, value, player, &enemies, screen_w, screen_h) {
            Some(enemy) => enemies.push(enemy),
            None => warn!("没有能放下 {} 号敌人的空位，跳过", i + 1),
        }
    }

    enemies
}

// 放置单个敌人：先随机取点，取不到再按网格逐格找第一个空位
fn place_one(
    rng: &mut impl Rng,
    enemy_size: f32,
    value: f32,
    player: &Creature,
    placed: &[Creature],
    screen_w: f32,
    screen_h: f32,
) -> Option<Creature> {
    let max_x = screen_w - enemy_size;
    let max_y = screen_h - enemy_size;
    if max_x < 0.0 || max_y < 0.0 {
        return None;
    }

    for _ in 0..MAX_PLACE_TRIES {
        let x = rng.gen_range(0.0..=max_x);
        let y = rng.gen_range(0.0..=max_y);
        let enemy = enemy_at(x, y, enemy_size, value, player);
        if is_free(&enemy, player, placed) {
            return Some(enemy);
        }
    }

    let mut y = 0.0;
    while y <= max_y {
        let mut x = 0.0;
        while x <= max_x {
            let enemy = enemy_at(x, y, enemy_size, value, player);
            if is_free(&enemy, player, placed) {
                return Some(enemy);
            }
            x += enemy_size;
        }
        y += enemy_size;
    }

    None
}

// 敌人不移动，速度固定为0，贴图与玩家共用同一句柄
fn enemy_at(x: f32, y: f32, size: f32, value: f32, player: &Creature) -> Creature {
    Creature::new(x, y, 0.0, size, value, RED, player.texture.clone())
}

// 候选位置必须与玩家及所有已放置敌人都不重叠
fn is_free(candidate: &Creature, player: &Creature, placed: &[Creature]) -> bool {
    !candidate.overlaps(player) && placed.iter().all(|e| !candidate.overlaps(e))
}
