use image::{ImageBuffer, Rgba, RgbaImage};
use std::fs;

const SIZE: u32 = 64;
const OUT_PATH: &str = "assets/creature.png";

// 贴图画成浅灰白色，游戏里再按生物颜色着色
const BODY: [u8; 4] = [232, 232, 236, 255];
const BELLY: [u8; 4] = [250, 250, 252, 255];
const FIN: [u8; 4] = [198, 198, 206, 255];
const OUTLINE: [u8; 4] = [150, 150, 160, 255];
const EYE: [u8; 4] = [40, 40, 48, 255];

fn set_px(img: &mut RgbaImage, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x as u32 >= SIZE || y as u32 >= SIZE {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgba(color));
}

fn fill_ellipse(img: &mut RgbaImage, cx: i32, cy: i32, rx: i32, ry: i32, color: [u8; 4]) {
    let rx2 = (rx * rx) as f32;
    let ry2 = (ry * ry) as f32;
    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx / rx2 + dy * dy / ry2 <= 1.0 {
                set_px(img, x, y, color);
            }
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: [u8; 4]) {
    fill_ellipse(img, cx, cy, r, r, color);
}

fn fill_triangle(img: &mut RgbaImage, p0: (i32, i32), p1: (i32, i32), p2: (i32, i32), color: [u8; 4]) {
    let min_x = p0.0.min(p1.0).min(p2.0);
    let max_x = p0.0.max(p1.0).max(p2.0);
    let min_y = p0.1.min(p1.1).min(p2.1);
    let max_y = p0.1.max(p1.1).max(p2.1);

    let edge = |a: (i32, i32), b: (i32, i32), p: (i32, i32)| -> i32 {
        (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x, y);
            let e0 = edge(p0, p1, p);
            let e1 = edge(p1, p2, p);
            let e2 = edge(p2, p0, p);
            if (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0) {
                set_px(img, x, y, color);
            }
        }
    }
}

fn draw_fish(img: &mut RgbaImage) {
    // 尾鳍与背鳍
    fill_triangle(img, (6, 32), (22, 20), (22, 44), FIN);
    fill_triangle(img, (30, 10), (44, 20), (26, 20), FIN);

    // 身体：深色轮廓上叠浅色本体与肚皮
    fill_ellipse(img, 38, 32, 20, 14, OUTLINE);
    fill_ellipse(img, 38, 32, 18, 12, BODY);
    fill_ellipse(img, 38, 38, 13, 5, BELLY);

    // 眼睛
    fill_circle(img, 47, 28, 3, EYE);
    set_px(img, 46, 27, [255, 255, 255, 255]);

    // 嘴
    for x in 54..=57 {
        set_px(img, x, 34, OUTLINE);
    }
}

fn main() -> Result<(), String> {
    let mut img: RgbaImage = ImageBuffer::new(SIZE, SIZE);
    draw_fish(&mut img);

    fs::create_dir_all("assets").map_err(|e| e.to_string())?;
    img.save(OUT_PATH).map_err(|e| e.to_string())?;
    println!("已生成 {}", OUT_PATH);
    Ok(())
}
