//! WASM entry points for the presentation layer.
//!
//! Every DOM event (cell click, undo, reset, assist toggle, the reset
//! timer's expiry) forwards into exactly one function here. Calls never
//! overlap: the browser delivers events one at a time.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::{GameSession, ResetStep};
use crate::types::GameView;

const BOARD_SIZE: u8 = 8;

static SESSION: Lazy<Mutex<GameSession>> = Lazy::new(|| Mutex::new(GameSession::new()));

/// Reset press outcome shipped to the presentation: which step happened,
/// plus the state to render.
#[derive(Debug, Clone, Serialize)]
struct ResetOutcome {
    step: ResetStep,
    view: GameView,
}

fn session() -> Result<MutexGuard<'static, GameSession>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("game session lock poisoned"))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Discards the current session and starts a fresh game immediately.
/// Used on page load; the in-game reset button goes through `press_reset`.
#[wasm_bindgen]
pub fn new_game() -> Result<JsValue, JsValue> {
    let mut session = session()?;
    *session = GameSession::new();
    to_js(&session.view())
}

/// Returns the current render input.
#[wasm_bindgen]
pub fn game_view() -> Result<JsValue, JsValue> {
    let session = session()?;
    to_js(&session.view())
}

/// Cell click at `(row, col)`.
///
/// Returns the fresh view when the move applied, or `null` when the request
/// was illegal and ignored; `null` tells the presentation to skip its
/// re-render. Out-of-range coordinates are an error.
#[wasm_bindgen]
pub fn click_cell(row: u8, col: u8) -> Result<JsValue, JsValue> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(JsValue::from_str("row/col out of range"));
    }

    let mut session = session()?;
    if session.try_move(row as usize, col as usize) {
        to_js(&session.view())
    } else {
        Ok(JsValue::NULL)
    }
}

/// Undo button. Same view-or-`null` contract as `click_cell`.
#[wasm_bindgen]
pub fn click_undo() -> Result<JsValue, JsValue> {
    let mut session = session()?;
    if session.undo() {
        to_js(&session.view())
    } else {
        Ok(JsValue::NULL)
    }
}

/// Reset button. `step` is `"armed"` (show the prompt, schedule the expiry
/// timer) or `"done"` (cancel the timer, revert the prompt, re-render).
#[wasm_bindgen]
pub fn press_reset() -> Result<JsValue, JsValue> {
    let mut session = session()?;
    let step = session.press_reset();
    to_js(&ResetOutcome {
        step,
        view: session.view(),
    })
}

/// Expiry of the reset confirmation timer.
#[wasm_bindgen]
pub fn reset_window_elapsed() -> Result<(), JsValue> {
    let mut session = session()?;
    session.reset_window_elapsed();
    Ok(())
}

/// True while the reset confirmation prompt should be shown.
#[wasm_bindgen]
pub fn reset_pending() -> Result<bool, JsValue> {
    let session = session()?;
    Ok(session.reset_pending())
}

/// Assist button: flips the highlight hint and returns the fresh view.
#[wasm_bindgen]
pub fn toggle_assist() -> Result<JsValue, JsValue> {
    let mut session = session()?;
    session.toggle_assist();
    to_js(&session.view())
}

/// Current assist flag, for the button label.
#[wasm_bindgen]
pub fn assist_enabled() -> Result<bool, JsValue> {
    let session = session()?;
    Ok(session.assist_enabled())
}
