//! SDL で動作する最小 UI。
//!
//! 人間（○）がマウスでマスをクリックし、コンピュータ（×）がミニマックスで応手する。

use marubatsu_core::ai::types::Ai;
use marubatsu_core::{ai, engine};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point, Rect};
use std::time::Duration;

/// 盤面のオフセット（左上）。
const OFFSET: i32 = 16;

/// 1マスのピクセルサイズ。
const CELL_SIZE: i32 = 96;

/// 盤面の一辺の長さ（マス）。
const BOARD_LEN: i32 = 3;

/// 盤面の一辺の長さ（ピクセル）。
const BOARD_PX: i32 = BOARD_LEN * CELL_SIZE;

/// ウィンドウ幅（ピクセル）。
const WINDOW_W: u32 = (OFFSET + BOARD_PX + OFFSET) as u32;

/// ウィンドウ高さ（ピクセル）。
const WINDOW_H: u32 = (OFFSET + BOARD_PX + OFFSET) as u32;

/// 記号の線の太さ（ピクセル）。
const STROKE: i32 = 3;

#[derive(Debug)]
enum Controller {
    Human,
    Minimax(ai::minimax::Agent),
    Random(ai::random::Agent),
}

impl Controller {
    fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    fn select_move(
        &mut self,
        position: engine::Position,
        mark: engine::Mark,
    ) -> Option<engine::Square> {
        match self {
            Self::Minimax(agent) => agent.select_move(position, mark),
            Self::Random(agent) => agent.select_move(position, mark),
            Self::Human => None,
        }
    }
}

#[derive(Debug)]
struct App {
    crosses: Controller,
    game: engine::Game,
    noughts: Controller,
}

impl App {
    fn new() -> Self {
        Self {
            crosses: Controller::Minimax(ai::minimax::Agent::new()),
            game: engine::Game::initial(),
            noughts: Controller::Human,
        }
    }

    fn controller_for_mut(&mut self, mark: engine::Mark) -> &mut Controller {
        match mark {
            engine::Mark::Nought => &mut self.noughts,
            engine::Mark::Cross => &mut self.crosses,
            _ => &mut self.noughts,
        }
    }

    fn controller_for(&self, mark: engine::Mark) -> &Controller {
        match mark {
            engine::Mark::Nought => &self.noughts,
            engine::Mark::Cross => &self.crosses,
            _ => &self.noughts,
        }
    }

    fn status_text(&self) -> String {
        let side = self.game.side_to_move();
        let side_text = match side {
            engine::Mark::Nought => "O",
            engine::Mark::Cross => "X",
            _ => "Unknown",
        };

        let status = self.game.status();
        match status {
            engine::GameStatus::InProgress => format!("{side_text} to move"),
            engine::GameStatus::Won { winner } => match winner {
                engine::Mark::Nought => "Game Over: Player (O) wins".to_owned(),
                engine::Mark::Cross => "Game Over: AI (X) wins".to_owned(),
                _ => "Game Over".to_owned(),
            },
            engine::GameStatus::Draw => "Game Over: Draw".to_owned(),
            _ => "Unknown status".to_owned(),
        }
    }

    fn try_play(&mut self, square: engine::Square) {
        let play_result = self.game.play(square);
        let _: Result<engine::GameStatus, engine::PlayError> = play_result;
    }

    fn step_ai_once(&mut self) {
        if self.game.is_game_over() {
            return;
        }

        let side = self.game.side_to_move();
        let is_human = self.controller_for(side).is_human();
        if is_human {
            return;
        }

        let position = self.game.position();
        let mv = self.controller_for_mut(side).select_move(position, side);
        if let Some(square) = mv {
            self.try_play(square);
        }
    }

    fn try_human_click(&mut self, x: i32, y: i32) -> bool {
        if self.game.is_game_over() {
            return false;
        }

        let side = self.game.side_to_move();
        if !self.controller_for(side).is_human() {
            return false;
        }

        let file = x - OFFSET;
        let rank = y - OFFSET;
        if file < 0 || rank < 0 {
            return false;
        }

        let xx = file / CELL_SIZE;
        let yy = rank / CELL_SIZE;
        if !(0..BOARD_LEN).contains(&xx) || !(0..BOARD_LEN).contains(&yy) {
            return false;
        }

        let x_u8 = match u8::try_from(xx) {
            Ok(value) => value,
            Err(_err) => return false,
        };
        let y_u8 = match u8::try_from(yy) {
            Ok(value) => value,
            Err(_err) => return false,
        };

        let square = match engine::Square::from_xy(x_u8, y_u8) {
            Some(value) => value,
            None => return false,
        };

        let play_result = self.game.play(square);
        play_result.is_ok()
    }
}

/// 終局状態に応じた背景色を返す。
fn background_color(status: engine::GameStatus) -> SdlColor {
    match status {
        engine::GameStatus::InProgress => SdlColor::RGB(0, 0, 0),
        engine::GameStatus::Won { winner } => match winner {
            engine::Mark::Nought => SdlColor::RGB(0, 112, 0),
            engine::Mark::Cross => SdlColor::RGB(144, 0, 0),
            _ => SdlColor::RGB(0, 0, 0),
        },
        engine::GameStatus::Draw => SdlColor::RGB(120, 120, 120),
        _ => SdlColor::RGB(0, 0, 0),
    }
}

/// ○（入れ子の矩形枠）を描画する。
fn draw_nought(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, xx: i32, yy: i32) {
    canvas.set_draw_color(SdlColor::RGB(240, 240, 240));
    for extra in 0..STROKE {
        let inset = CELL_SIZE / 4 + extra;
        let rect = Rect::new(
            xx + inset,
            yy + inset,
            (CELL_SIZE - inset * 2) as u32,
            (CELL_SIZE - inset * 2) as u32,
        );
        let _: Result<(), String> = canvas.draw_rect(rect);
    }
}

/// ×（対角線2本）を描画する。
fn draw_cross(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, xx: i32, yy: i32) {
    canvas.set_draw_color(SdlColor::RGB(240, 240, 240));
    let inset = CELL_SIZE / 4;
    let near = inset;
    let far = CELL_SIZE - inset;

    for extra in 0..STROKE {
        let _: Result<(), String> = canvas.draw_line(
            Point::new(xx + near + extra, yy + near),
            Point::new(xx + far, yy + far - extra),
        );
        let _: Result<(), String> = canvas.draw_line(
            Point::new(xx + near + extra, yy + far),
            Point::new(xx + far, yy + near + extra),
        );
    }
}

fn draw_board(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, app: &App) {
    let position = app.game.position();
    let empties = position.empties();
    let in_progress = !app.game.is_game_over();
    let highlight = in_progress && app.controller_for(app.game.side_to_move()).is_human();

    canvas.set_draw_color(background_color(app.game.status()));
    canvas.clear();

    // マス。
    for y in 0..BOARD_LEN {
        for x in 0..BOARD_LEN {
            let xx = OFFSET + x * CELL_SIZE;
            let yy = OFFSET + y * CELL_SIZE;
            let rect = Rect::new(xx, yy, CELL_SIZE as u32, CELL_SIZE as u32);

            canvas.set_draw_color(SdlColor::RGB(32, 32, 32));
            let _: Result<(), String> = canvas.fill_rect(rect);

            canvas.set_draw_color(SdlColor::RGB(200, 200, 200));
            let _: Result<(), String> = canvas.draw_rect(rect);

            let x_u8 = match u8::try_from(x) {
                Ok(value) => value,
                Err(_err) => continue,
            };
            let y_u8 = match u8::try_from(y) {
                Ok(value) => value,
                Err(_err) => continue,
            };
            let square = match engine::Square::from_xy(x_u8, y_u8) {
                Some(value) => value,
                None => continue,
            };

            if highlight && empties & square.bit() != u16::MIN {
                let inset = CELL_SIZE / 3;
                let hint_rect = Rect::new(
                    xx + inset,
                    yy + inset,
                    (CELL_SIZE - inset * 2) as u32,
                    (CELL_SIZE - inset * 2) as u32,
                );
                canvas.set_draw_color(SdlColor::RGB(64, 64, 32));
                let _: Result<(), String> = canvas.fill_rect(hint_rect);
            }

            // 記号。
            match position.mark_at(square) {
                Some(engine::Mark::Nought) => draw_nought(canvas, xx, yy),
                Some(engine::Mark::Cross) => draw_cross(canvas, xx, yy),
                Some(_) | None => {}
            }
        }
    }
}

/// JSON形式のログ出力を初期化する。
fn init_tracing() {
    tracing_subscriber::fmt().json().init();
}

fn main() -> Result<(), String> {
    init_tracing();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;

    let window = video
        .window("marubatsu (Tic-Tac-Toe)", WINDOW_W, WINDOW_H)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let mut app = App::new();
    let mut event_pump = sdl.event_pump()?;

    tracing::info!(width = WINDOW_W, height = WINDOW_H, "window created");

    let draw_and_present = |canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, app: &App| {
        let title = app.status_text();
        let _ = canvas.window_mut().set_title(&title);
        draw_board(canvas, app);
        canvas.present();
    };

    'running: loop {
        let mut did_human_move = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => did_human_move |= app.try_human_click(x, y),
                _ => {}
            }
        }

        if did_human_move {
            // 人間の手を打った直後に一度描画更新する。
            draw_and_present(&mut canvas, &app);

            // その後に少し待ってからAIが手を打ち、再度描画更新する。
            if !app.game.is_game_over() {
                let side = app.game.side_to_move();
                if !app.controller_for(side).is_human() {
                    std::thread::sleep(Duration::from_millis(300));
                    app.step_ai_once();
                }
            }
        } else {
            app.step_ai_once();
        }

        draw_and_present(&mut canvas, &app);
    }

    Ok(())
}
