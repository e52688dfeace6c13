use log::{info, warn};
use macroquad::prelude::{is_key_pressed, KeyCode};
use rand::Rng;

use crate::config::{GameConfig, MOVE_STEP};
use crate::model::{Game, GamePhase};
use crate::save::{PlayerSave, SaveStore};

// 一帧的输入快照：与窗口解耦，便于无窗口推进游戏逻辑
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub dx: f32,
    pub dy: f32,
    pub save: bool,
    pub load: bool,
    pub restart: bool,
}

// 采集本帧按键，移动键按"按下沿"触发，一次按键只走一步
pub fn poll_input() -> FrameInput {
    let mut input = FrameInput::default();

    if is_key_pressed(KeyCode::W) {
        input.dy -= MOVE_STEP;
    }
    if is_key_pressed(KeyCode::S) {
        input.dy += MOVE_STEP;
    }
    if is_key_pressed(KeyCode::A) {
        input.dx -= MOVE_STEP;
    }
    if is_key_pressed(KeyCode::D) {
        input.dx += MOVE_STEP;
    }
    input.save = is_key_pressed(KeyCode::P);
    input.load = is_key_pressed(KeyCode::L);
    input.restart = is_key_pressed(KeyCode::R);

    input
}

// 推进一帧游戏逻辑
pub fn update(
    game: &mut Game,
    input: &FrameInput,
    store: &SaveStore,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    match game.phase {
        GamePhase::Playing => {
            if input.dx != 0.0 || input.dy != 0.0 {
                game.player.move_by(input.dx, input.dy);
            }
            if input.save {
                handle_save(game, store, config);
            }
            if input.load {
                handle_load(game, store, config);
            }
            resolve_collisions(game);
        }
        // 结束画面只响应重新开始
        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                game.reset(config, rng);
            }
        }
    }
}

// 结算玩家与敌人的碰撞：同帧压住多个敌人时按点数从小到大处理
pub fn resolve_collisions(game: &mut Game) {
    let mut hits: Vec<usize> = (0..game.enemies.len())
        .filter(|&i| game.player.overlaps(&game.enemies[i]))
        .collect();
    hits.sort_by(|&a, &b| game.enemies[a].value.total_cmp(&game.enemies[b].value));

    let mut absorbed = vec![false; game.enemies.len()];
    for i in hits {
        if game.player.value >= game.enemies[i].value {
            game.player.value += game.enemies[i].value;
            absorbed[i] = true;
        } else {
            game.phase = GamePhase::GameOver;
            break;
        }
    }

    // 两段式删除：先标记再压缩，不在遍历中改集合
    let mut idx = 0;
    game.enemies.retain(|_| {
        let keep = !absorbed[idx];
        idx += 1;
        keep
    });

    if game.phase == GamePhase::Playing && game.enemies.is_empty() {
        game.phase = GamePhase::Won;
    }
}

// 保存玩家存档
fn handle_save(game: &Game, store: &SaveStore, config: &GameConfig) {
    match store.save_player(&config.save_name, &PlayerSave::from_creature(&game.player)) {
        Ok(()) => info!("存档已写入 {:?}", store.player_path(&config.save_name)),
        Err(e) => warn!("存档失败: {}", e),
    }
}

// 读档并覆盖当前玩家，失败时当前状态保持不变
fn handle_load(game: &mut Game, store: &SaveStore, config: &GameConfig) {
    match store.load_player(&config.save_name) {
        Ok(save) => save.apply(&mut game.player),
        Err(e) => warn!("读档失败: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Creature;
    use macroquad::prelude::{vec2, BLUE, RED};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(value: f32) -> Creature {
        Creature::new(100.0, 100.0, 200.0, 50.0, value, BLUE, None)
    }

    fn enemy_at(x: f32, y: f32, value: f32) -> Creature {
        Creature::new(x, y, 0.0, 50.0, value, RED, None)
    }

    fn game_with(player: Creature, enemies: Vec<Creature>) -> Game {
        Game {
            player,
            enemies,
            phase: GamePhase::Playing,
        }
    }

    #[test]
    fn absorbs_weaker_enemy() {
        let mut game = game_with(
            player(3.0),
            vec![enemy_at(120.0, 120.0, 2.0), enemy_at(400.0, 200.0, 4.0)],
        );
        resolve_collisions(&mut game);

        assert_eq!(game.player.value, 5.0);
        assert_eq!(game.enemies.len(), 1);
        assert_eq!(game.enemies[0].value, 4.0);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn stronger_enemy_ends_the_game() {
        let mut game = game_with(
            player(2.0),
            vec![enemy_at(120.0, 120.0, 3.0), enemy_at(400.0, 200.0, 1.0)],
        );
        resolve_collisions(&mut game);

        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.player.value, 2.0);
        assert_eq!(game.enemies.len(), 2);
    }

    #[test]
    fn weaker_first_can_carry_past_a_stronger_enemy() {
        // 同帧压住 2 和 4：先吃 2 变 5，再吃 4 变 9
        let mut game = game_with(
            player(3.0),
            vec![enemy_at(130.0, 100.0, 4.0), enemy_at(80.0, 100.0, 2.0)],
        );
        resolve_collisions(&mut game);

        assert_eq!(game.player.value, 9.0);
        assert!(game.enemies.is_empty());
        assert_eq!(game.phase, GamePhase::Won);
    }

    #[test]
    fn losing_keeps_absorbs_granted_this_frame() {
        // 同帧压住 1 和 10：先吃 1 变 3，再被 10 终结
        let mut game = game_with(
            player(2.0),
            vec![
                enemy_at(130.0, 100.0, 10.0),
                enemy_at(80.0, 100.0, 1.0),
                enemy_at(400.0, 200.0, 3.0),
            ],
        );
        resolve_collisions(&mut game);

        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.player.value, 3.0);
        let values: Vec<f32> = game.enemies.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![10.0, 3.0]);
    }

    #[test]
    fn absorbing_the_last_enemy_wins_the_same_frame() {
        let mut game = game_with(player(5.0), vec![enemy_at(120.0, 120.0, 2.0)]);
        resolve_collisions(&mut game);

        assert_eq!(game.player.value, 7.0);
        assert_eq!(game.phase, GamePhase::Won);
    }

    #[test]
    fn update_moves_and_clamps_player() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::with_root(dir.path());
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut game = game_with(player(1.0), vec![enemy_at(700.0, 300.0, 5.0)]);
        let input = FrameInput {
            dx: -1000.0,
            ..Default::default()
        };
        update(&mut game, &input, &store, &config, &mut rng);

        assert_eq!(game.player.pos.x, 0.0);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn end_screen_ignores_movement() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::with_root(dir.path());
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut game = game_with(player(1.0), vec![enemy_at(700.0, 300.0, 5.0)]);
        game.phase = GamePhase::GameOver;
        let input = FrameInput {
            dx: MOVE_STEP,
            ..Default::default()
        };
        update(&mut game, &input, &store, &config, &mut rng);

        assert_eq!(game.player.pos.x, 100.0);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn restart_rebuilds_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::with_root(dir.path());
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut game = game_with(player(9.0), Vec::new());
        game.phase = GamePhase::Won;
        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        update(&mut game, &input, &store, &config, &mut rng);

        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.player.value, 1.0);
        assert_eq!(game.enemies.len(), config.enemy_count);
    }

    #[test]
    fn save_and_load_keys_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::with_root(dir.path());
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);

        let mut saved_player = player(7.0);
        saved_player.pos = vec2(42.0, 17.0);
        let mut game = game_with(saved_player, vec![enemy_at(700.0, 300.0, 9.0)]);

        let save_input = FrameInput {
            save: true,
            ..Default::default()
        };
        update(&mut game, &save_input, &store, &config, &mut rng);

        // 改动玩家后读档，应回到保存时的状态
        game.player.pos = vec2(300.0, 200.0);
        game.player.value = 1.0;
        let load_input = FrameInput {
            load: true,
            ..Default::default()
        };
        update(&mut game, &load_input, &store, &config, &mut rng);

        assert_eq!(game.player.pos.x, 42.0);
        assert_eq!(game.player.pos.y, 17.0);
        assert_eq!(game.player.value, 7.0);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn failed_load_leaves_player_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::with_root(dir.path());
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);

        let mut game = game_with(player(4.0), vec![enemy_at(700.0, 300.0, 9.0)]);
        let input = FrameInput {
            load: true,
            ..Default::default()
        };
        update(&mut game, &input, &store, &config, &mut rng);

        assert_eq!(game.player.value, 4.0);
        assert_eq!(game.player.pos.x, 100.0);
    }
}
