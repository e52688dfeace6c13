use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Creature;

// 玩家存档快照：颜色与贴图不入档
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerSave {
    pub x_pos: f32,
    pub y_pos: f32,
    pub speed: f32,
    pub size: f32,
    pub value: f32,
}

impl PlayerSave {
    // 从玩家实体截取快照
    pub fn from_creature(creature: &Creature) -> Self {
        Self {
            x_pos: creature.pos.x,
            y_pos: creature.pos.y,
            speed: creature.speed,
            size: creature.size,
            value: creature.value,
        }
    }

    // 把快照写回玩家实体
    pub fn apply(&self, creature: &mut Creature) {
        creature.pos.x = self.x_pos;
        creature.pos.y = self.y_pos;
        creature.speed = self.speed;
        creature.size = self.size;
        creature.value = self.value;
    }
}

pub struct SaveStore {
    root: PathBuf,
}

impl SaveStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("save"),
        }
    }

    // 指定存档根目录（测试使用临时目录）
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    pub fn player_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    pub fn save_player(&self, name: &str, save: &PlayerSave) -> io::Result<()> {
        self.ensure_dirs()?;
        write_json_atomic(&self.player_path(name), save)
    }

    // 读取存档：文件缺失或内容损坏都按错误返回，由调用方决定善后
    pub fn load_player(&self, name: &str) -> io::Result<PlayerSave> {
        let text = fs::read_to_string(self.player_path(name))?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

// 先写临时文件再改名，避免写到一半留下坏档
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::rename(tmp, path)?;
    Ok(())
}
