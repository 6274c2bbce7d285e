use crate::core::{interpret, Dispatch, SubmissionPolicy, SubmitError, SubmitOutcome, TransportMode};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// POST `body` as JSON to `endpoint` and judge the result under `policy`.
pub async fn send(
    endpoint: &str,
    policy: SubmissionPolicy,
    body: &str,
) -> Result<SubmitOutcome, SubmitError> {
    log::info!("[submit] POST {} ({:?})", endpoint, policy);
    let dispatch = dispatch(endpoint, policy.transport_mode(), body).await;
    log::debug!("[submit] dispatch result {:?}", dispatch);
    interpret(policy, dispatch)
}

async fn dispatch(endpoint: &str, mode: TransportMode, body: &str) -> Result<Dispatch, String> {
    let window = web::window().ok_or_else(|| "no window".to_string())?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(match mode {
        TransportMode::NoCors => web::RequestMode::NoCors,
        TransportMode::Cors => web::RequestMode::Cors,
    });
    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", mode.content_type())
        .map_err(js_err)?;
    init.set_headers(&headers.into());
    init.set_body(&JsValue::from_str(body));

    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = value.dyn_into().map_err(js_err)?;
    if response.type_() == web::ResponseType::Opaque {
        Ok(Dispatch::Opaque)
    } else {
        Ok(Dispatch::Status(response.status()))
    }
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}
