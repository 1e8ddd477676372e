use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay with a centered surface for editors opened from a list.
///
/// Closes on an overlay click only when both press and release happened on
/// the overlay, so selecting text inside the surface never closes it.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Extra style for the surface (`div.modal`)
    #[prop(optional, into)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let handle_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(on_overlay(&ev));

    let handle_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            // the overlay must not be removed while its own click is dispatched
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div class="modal-overlay" on:mousedown=handle_mouse_down on:click=handle_click>
            <div class="modal" style=surface_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
