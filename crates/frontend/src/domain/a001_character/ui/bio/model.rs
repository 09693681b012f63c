use crate::shared::api_utils::{api_base, CHARACTER_ID};
use contracts::domain::a001_character::{CharacterRecord, CharacterUpdate, SaveAck};

/// Where the sheet is loaded from and saved to
#[allow(async_fn_in_trait)]
pub trait CharacterStore {
    /// `Ok(None)` when nothing has been saved for the character yet
    async fn load(&self) -> Result<Option<CharacterRecord>, String>;
    async fn save(&self, update: &CharacterUpdate) -> Result<SaveAck, String>;
}

/// The character REST API on [`crate::shared::api_utils::API_PORT`]
#[derive(Debug, Clone, Copy)]
pub struct ApiStore {
    pub character_id: i32,
}

impl Default for ApiStore {
    fn default() -> Self {
        Self {
            character_id: CHARACTER_ID,
        }
    }
}

impl CharacterStore for ApiStore {
    async fn load(&self) -> Result<Option<CharacterRecord>, String> {
        fetch_by_id(self.character_id).await
    }

    async fn save(&self, update: &CharacterUpdate) -> Result<SaveAck, String> {
        save_form(self.character_id, update).await
    }
}

pub async fn fetch_by_id(id: i32) -> Result<Option<CharacterRecord>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/character/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let record = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(Some(record))
}

pub async fn save_form(id: i32, update: &CharacterUpdate) -> Result<SaveAck, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = serde_json::to_string(update).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = format!("{}/api/character/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {}: {}", resp.status(), text));
    }
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
