use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Hidden input rendered by the surrounding page's form
pub const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// Current anti-forgery token, or an empty string when the page has none
pub fn csrf_token() -> String {
    gloo::utils::document()
        .query_selector(CSRF_FIELD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
