use leptos::{ev::mousemove, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::parallax::{ParallaxLayer, PointerPosition, Viewport};

fn viewport() -> Viewport {
    let window = window();
    let extent = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    Viewport {
        width: extent(window.inner_width()),
        height: extent(window.inner_height()),
    }
}

/// Fixed decorative layer behind the page. Blobs drift against the pointer.
#[component]
pub fn ParallaxBackground(layers: &'static [ParallaxLayer]) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerPosition::CENTER);

    let _ = use_event_listener(use_window(), mousemove, move |ev| {
        set_pointer.set(PointerPosition::from_client(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            viewport(),
        ));
    });

    let blobs = layers
        .iter()
        .map(|layer| {
            view! {
                <div
                    class=format!(
                        "parallax-element absolute rounded-full blur-3xl transition-transform duration-200 ease-out {}",
                        layer.class,
                    )
                    style=move || layer.style(pointer.get())
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 bg-gradient-to-br from-background via-background to-background/95 animate-gradient-y pointer-events-none"></div>
        <div class="fixed inset-0 pointer-events-none z-0">
            {blobs}
            <div class="absolute top-[25%] left-[40%] w-32 h-32 rounded-full bg-gradient-to-r from-primary/10 to-purple-400/10 blur-2xl animate-pulse-subtle"></div>
            <div class="absolute bottom-[40%] right-[35%] w-24 h-24 rounded-full bg-gradient-to-r from-blue-400/10 to-primary/10 blur-2xl animate-float"></div>
            <div class="absolute inset-0 bg-[radial-gradient(#e5e7eb_1px,transparent_1px)] [background-size:20px_20px] opacity-[0.03]"></div>
        </div>
    }
}
