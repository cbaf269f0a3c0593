use js_sys::Reflect;
use portfolio_shared::{
    carousel::{advance, Direction, ScrollSurface},
    reveal::{should_reveal, ViewportRect},
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

/// Mounted carousel strip seen as a [`ScrollSurface`]. The browser clamps
/// `scrollTo` targets and runs the smooth animation.
struct ElementStrip(HtmlElement);

impl ScrollSurface for ElementStrip {
    fn offset(&self) -> f64 {
        // scrollLeft is fractional on scaled displays; the typed getter rounds.
        Reflect::get(self.0.as_ref(), &JsValue::from_str("scrollLeft"))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(self.0.scroll_left() as f64)
    }

    fn viewport_width(&self) -> f64 {
        self.0.client_width() as f64
    }

    fn scroll_to(&mut self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_left(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

/// Page-wise scrolling for a horizontal strip.
///
/// Attach the returned ref to the scroll container and emit a [`Direction`]
/// on the callback to move one container width. Emitting before the strip is
/// mounted does nothing.
///
/// # Example
/// ```rust
/// use crate::hooks::use_carousel;
/// use portfolio_shared::Direction;
///
/// #[function_component(Strip)]
/// fn strip() -> Html {
///     let (strip_ref, on_advance) = use_carousel();
///     let next = on_advance.reform(|_: MouseEvent| Direction::Right);
///     html! {
///         <>
///             <div ref={strip_ref} class="flex overflow-x-auto" />
///             <button onclick={next}>{ "›" }</button>
///         </>
///     }
/// }
/// ```
#[hook]
pub fn use_carousel() -> (NodeRef, Callback<Direction>) {
    let strip_ref = use_node_ref();

    let on_advance = {
        let strip_ref = strip_ref.clone();
        Callback::from(move |direction: Direction| {
            if let Some(element) = strip_ref.cast::<HtmlElement>() {
                advance(&mut ElementStrip(element), direction);
            }
        })
    };

    (strip_ref, on_advance)
}

/// Returns `true` once the referenced element has scrolled into view, and
/// stays `true` afterwards. Scrolls of the window and of any inner scroll
/// container (such as a carousel strip) are both watched. The scroll listener is dropped as soon as the
/// element reveals or the component unmounts.
#[hook]
pub fn use_reveal_once(node_ref: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((node_ref, *revealed), move |(node_ref, already)| {
            let mut listener: Option<(Window, Closure<dyn Fn()>)> = None;

            if !*already {
                if let Some(window) = web_sys::window() {
                    if in_view(&window, node_ref) {
                        revealed.set(true);
                    } else {
                        let closure = {
                            let window = window.clone();
                            let node_ref = node_ref.clone();
                            Closure::wrap(Box::new(move || {
                                if in_view(&window, &node_ref) {
                                    revealed.set(true);
                                }
                            }) as Box<dyn Fn()>)
                        };
                        // Capture so scrolls of inner strips reach the window too.
                        let _ = window.add_event_listener_with_callback_and_bool(
                            "scroll",
                            closure.as_ref().unchecked_ref(),
                            true,
                        );
                        listener = Some((window, closure));
                    }
                }
            }

            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback_and_bool(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                        true,
                    );
                    drop(closure);
                }
            }
        });
    }

    *revealed
}

fn in_view(window: &Window, node_ref: &NodeRef) -> bool {
    let Some(element) = node_ref.cast::<Element>() else {
        return false;
    };
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
    };
    let rect = element.get_bounding_client_rect();
    should_reveal(
        ViewportRect {
            top: rect.top(),
            left: rect.left(),
            right: rect.right(),
        },
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}
