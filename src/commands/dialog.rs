use wasm_bindgen::prelude::*;
use serde::Serialize;
use super::invoke;

#[derive(Serialize)]
struct NotifyArgs<'a> {
    title: &'a str,
    message: &'a str,
}

/// Native "Quitter" prompt; `true` when the user chose to leave
pub async fn confirm_exit() -> Result<bool, String> {
    let result = invoke("confirm_exit", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn exit_app() -> Result<(), String> {
    let _ = invoke("exit_app", JsValue::NULL).await;
    Ok(())
}

pub async fn notify(title: &str, message: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&NotifyArgs { title, message }).map_err(|e| e.to_string())?;
    let _ = invoke("notify", js_args).await;
    Ok(())
}
