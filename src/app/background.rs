use leptos::{ev, html, prelude::*, server_fn::codec::GetUrl, task::spawn_local};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use crate::background::{
    acquire_frame, DrawOp, Frame, FrameError, FrameSource, Paint, Rect, Renderer, Size, Surface,
    FRAME_CADENCE_MS,
};

/// Proxy one frame request to the backend. Never cached; every call is a new frame.
#[server(input = GetUrl)]
pub async fn fetch_frame_server() -> Result<Frame, ServerFnError> {
    use crate::config::SiteConfig;
    use http::{header::CACHE_CONTROL, HeaderValue};

    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.insert_header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    crate::upstream::fetch_frame(SiteConfig::global())
        .await
        .map_err(|err| {
            tracing::debug!("frame request failed: {err}");
            ServerFnError::new(err)
        })
}

struct ServerFrameSource;

impl FrameSource for ServerFrameSource {
    async fn fetch_frame(&self) -> Result<Frame, FrameError> {
        fetch_frame_server()
            .await
            .map_err(|err| FrameError::Transport(err.to_string()))
    }
}

/// The canvas's container size, or the window's when it has no container.
fn container_size(canvas: &HtmlCanvasElement) -> Size {
    match canvas
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    {
        Some(parent) => Size::new(parent.offset_width().into(), parent.offset_height().into()),
        None => {
            let window = window();
            let dim = |v: Result<wasm_bindgen::JsValue, _>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or_default()
            };
            Size::new(dim(window.inner_width()), dim(window.inner_height()))
        }
    }
}

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| format!("{err:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "context is not 2d")?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the container's layout size.
    fn fit(canvas: HtmlCanvasElement) {
        let size = container_size(&canvas);
        match Self::new(canvas) {
            Ok(surface) => surface.resize(size),
            Err(err) => log::debug!("couldn't size background canvas: {err}"),
        }
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> Size {
        Size::new(self.canvas.width().into(), self.canvas.height().into())
    }

    fn resize(&self, size: Size) {
        let (width, height) = size.pixel_dims();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&self) {
        let Size { width, height } = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill(&self, op: &DrawOp) {
        match &op.paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::Linear(linear) => {
                let gradient = self.ctx.create_linear_gradient(
                    linear.start.x,
                    linear.start.y,
                    linear.end.x,
                    linear.end.y,
                );
                for stop in &linear.stops {
                    if let Err(err) = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string()) {
                        log::debug!("bad color stop {stop:?}: {err:?}");
                    }
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        let Rect { x, y, width, height } = op.rect;
        self.ctx.fill_rect(x, y, width, height);
    }

    fn draw_image(&self, image: &HtmlImageElement, rect: Rect) {
        if let Err(err) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        ) {
            log::debug!("couldn't draw frame: {err:?}");
        }
    }

    fn image_size(image: &HtmlImageElement) -> Size {
        Size::new(image.natural_width().into(), image.natural_height().into())
    }

    async fn decode(&self, frame: &Frame) -> Result<HtmlImageElement, FrameError> {
        let image = HtmlImageElement::new().map_err(|err| FrameError::Decode(format!("{err:?}")))?;
        image.set_src(&frame.source);
        JsFuture::from(image.decode())
            .await
            .map_err(|err| FrameError::Decode(format!("{err:?}")))?;
        Ok(image)
    }
}

/// Full-bleed animated backdrop for the hero. Paints remote frames when the
/// backend delivers them and a drifting gradient when it doesn't.
#[component]
pub fn FluidBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (is_loaded, set_is_loaded) = signal(false);
    let renderer = StoredValue::new(Renderer::new(FRAME_CADENCE_MS));

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            CanvasSurface::fit(canvas);
        }
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            CanvasSurface::fit(canvas);
        }
    });

    // the raf loop stops itself when this component is cleaned up
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let now = args.timestamp;
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        if !renderer.try_update_value(|r| r.begin_cycle(now)).unwrap_or(false) {
            return;
        }
        let surface = match CanvasSurface::new(canvas) {
            Ok(surface) => surface,
            Err(err) => {
                log::warn!("background canvas unavailable: {err}");
                renderer.try_update_value(|r| r.abandon_cycle(now));
                return;
            }
        };

        spawn_local(async move {
            let acquired = acquire_frame(&ServerFrameSource, &surface).await;
            // None here means the component is gone and the result is dropped
            let outcome = renderer
                .try_update_value(|r| r.paint(&surface, acquired, now))
                .flatten();
            if outcome.is_some_and(|o| o.became_ready) {
                set_is_loaded.set(true);
            }
        });
    });

    on_cleanup(move || {
        renderer.try_update_value(|r| r.teardown());
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="absolute inset-0 w-full h-full z-0 transition-opacity duration-1000 ease-in-out"
            style:opacity=move || if is_loaded.get() { "1" } else { "0" }
            aria-hidden="true"
        />
        <Show when=move || !is_loaded.get()>
            <div class="absolute inset-0 z-10 flex flex-col items-center justify-center gap-4">
                <div class="w-10 h-10 rounded-full border-2 border-teal-300/30 border-t-teal-300 animate-spin" />
                <p class="text-sm tracking-widest text-teal-200/80">"Initializing AI Dynamics..."</p>
            </div>
        </Show>
    }
}
