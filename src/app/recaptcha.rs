use leptos::{html, prelude::*};

/// reCAPTCHA v2 checkbox. The API script is injected on first use and the
/// widget is rendered explicitly into this component's container.
#[component]
pub fn Recaptcha(
    site_key: String,
    #[prop(into)] on_verified: Callback<String>,
    #[prop(into)] on_expired: Callback<()>,
    #[prop(into)] on_error: Callback<()>,
    /// Notify to clear the checkbox, e.g. after a successful submission.
    reset: ArcTrigger,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let widget_id = StoredValue::new_local(None::<wasm_bindgen::JsValue>);

        Effect::new(move |_| {
            let Some(el) = container.get() else {
                return;
            };
            let site_key = site_key.clone();
            let loaded = widget::load(
                move || match widget::render(&el, &site_key, on_verified, on_expired, on_error) {
                    Ok(id) => widget_id.set_value(Some(id)),
                    Err(err) => {
                        log::warn!("couldn't render reCAPTCHA: {err:?}");
                        on_error.run(());
                    }
                },
                move || {
                    log::warn!("reCAPTCHA script failed to load");
                    on_error.run(());
                },
            );
            if let Err(err) = loaded {
                log::warn!("couldn't load reCAPTCHA: {err:?}");
                on_error.run(());
            }
        });

        Effect::new(move |prev: Option<()>| {
            reset.track();
            if prev.is_some() {
                widget_id.with_value(|id| {
                    if let Some(id) = id {
                        widget::reset(id);
                    }
                });
            }
        });

        on_cleanup(widget::unload);
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (site_key, on_verified, on_expired, on_error, reset);

    view! { <div node_ref=container class="min-h-[78px]" /> }
}

#[cfg(feature = "hydrate")]
mod widget {
    use js_sys::{Function, Object, Reflect};
    use leptos::prelude::*;
    use wasm_bindgen::{prelude::*, JsCast};
    use web_sys::{HtmlElement, HtmlScriptElement};

    const LOAD_CALLBACK: &str = "onRecaptchaLoad";
    const SCRIPT_ID: &str = "recaptcha-api";
    const SCRIPT_SRC: &str =
        "https://www.google.com/recaptcha/api.js?onload=onRecaptchaLoad&render=explicit";

    /// `grecaptcha.<name>` bound to its receiver, once the API is ready.
    fn api_fn(name: &str) -> Option<(JsValue, Function)> {
        let api = Reflect::get(&window(), &"grecaptcha".into())
            .ok()
            .filter(|api| !api.is_undefined())?;
        let f = Reflect::get(&api, &name.into()).ok()?.dyn_into().ok()?;
        Some((api, f))
    }

    /// Run `on_load` once the API is ready, injecting the script if needed.
    pub fn load(on_load: impl Fn() + 'static, on_error: impl Fn() + 'static) -> Result<(), JsValue> {
        if api_fn("render").is_some() {
            on_load();
            return Ok(());
        }
        Reflect::set(
            &window(),
            &LOAD_CALLBACK.into(),
            &Closure::<dyn Fn()>::new(on_load).into_js_value(),
        )?;

        let document = document();
        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return Ok(());
        }
        let script = document.create_element("script")?.dyn_into::<HtmlScriptElement>()?;
        script.set_id(SCRIPT_ID);
        script.set_src(SCRIPT_SRC);
        script.set_async(true);
        script.set_defer(true);
        let on_error = Closure::<dyn Fn()>::new(on_error).into_js_value();
        script.set_onerror(Some(on_error.unchecked_ref()));
        document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?
            .append_child(&script)?;
        Ok(())
    }

    /// Returns the widget id.
    pub fn render(
        container: &HtmlElement,
        site_key: &str,
        on_verified: Callback<String>,
        on_expired: Callback<()>,
        on_error: Callback<()>,
    ) -> Result<JsValue, JsValue> {
        let (api, render) =
            api_fn("render").ok_or_else(|| JsValue::from_str("grecaptcha is not ready"))?;

        let params = Object::new();
        Reflect::set(&params, &"sitekey".into(), &site_key.into())?;
        Reflect::set(&params, &"theme".into(), &"dark".into())?;
        let callbacks = [
            (
                "callback",
                Closure::<dyn Fn(String)>::new(move |token| on_verified.run(token)).into_js_value(),
            ),
            (
                "expired-callback",
                Closure::<dyn Fn()>::new(move || on_expired.run(())).into_js_value(),
            ),
            (
                "error-callback",
                Closure::<dyn Fn()>::new(move || on_error.run(())).into_js_value(),
            ),
        ];
        for (name, callback) in callbacks {
            Reflect::set(&params, &name.into(), &callback)?;
        }
        render.call2(&api, container, &params)
    }

    pub fn reset(widget_id: &JsValue) {
        if let Some((api, reset)) = api_fn("reset") {
            if let Err(err) = reset.call1(&api, widget_id) {
                log::debug!("reCAPTCHA reset failed: {err:?}");
            }
        }
    }

    pub fn unload() {
        let _ = Reflect::delete_property(&window(), &LOAD_CALLBACK.into());
    }
}
