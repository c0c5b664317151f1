#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use std::num::NonZeroUsize;

use chfi_frontend::carousel::hook::{use_carousel_on, CarouselOptions};
use chfi_frontend::carousel::schedule::{FrameScheduler, IntervalScheduler};
use chfi_frontend::carousel::{Carousel, CarouselState, Scheduler};
use chfi_frontend::components::reviews::{Reviews, ReviewsProps};
use chfi_frontend::content::{SiteContent, Variant};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
    let count = Rc::new(Cell::new(0));
    let tick: Rc<dyn Fn()> = {
        let count = count.clone();
        Rc::new(move || count.set(count.get() + 1))
    };
    (count, tick)
}

#[wasm_bindgen_test]
async fn interval_scheduler_repeats_until_dropped() {
    let (count, tick) = counter();
    let handle = IntervalScheduler { period_ms: 10 }.schedule(tick);

    TimeoutFuture::new(100).await;
    assert!(count.get() >= 2);

    drop(handle);
    let after_drop = count.get();
    TimeoutFuture::new(60).await;
    assert_eq!(count.get(), after_drop);
}

#[wasm_bindgen_test]
async fn frame_scheduler_rearms_each_frame() {
    let (count, tick) = counter();
    let handle = FrameScheduler.schedule(tick);

    TimeoutFuture::new(200).await;
    assert!(count.get() >= 2);

    drop(handle);
    let after_drop = count.get();
    TimeoutFuture::new(100).await;
    assert_eq!(count.get(), after_drop);
}

#[wasm_bindgen_test]
async fn review_strip_engine_scrolls_and_stops() {
    let state = CarouselState::continuous_with_step(1_000_000.0, 1.0).unwrap();
    let mut carousel = Carousel::new(state, FrameScheduler);
    carousel.start();

    TimeoutFuture::new(200).await;
    assert!(carousel.position() > 0.0);

    carousel.stop();
    let stopped_at = carousel.position();
    TimeoutFuture::new(100).await;
    assert_eq!(carousel.position(), stopped_at);
}

/// Wraps a scheduler and counts every callback the host actually fires.
#[derive(Clone)]
struct Counting<S> {
    inner: S,
    fired: Rc<Cell<u32>>,
}

impl<S: PartialEq> PartialEq for Counting<S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && Rc::ptr_eq(&self.fired, &other.fired)
    }
}

impl<S: Scheduler> Scheduler for Counting<S> {
    type Handle = S::Handle;

    fn schedule(&self, tick: Rc<dyn Fn()>) -> S::Handle {
        let fired = self.fired.clone();
        self.inner.schedule(Rc::new(move || {
            fired.set(fired.get() + 1);
            tick();
        }))
    }
}

#[derive(Properties, PartialEq)]
struct FrameStripProps {
    scheduler: Counting<FrameScheduler>,
}

#[function_component(FrameStrip)]
fn frame_strip(props: &FrameStripProps) -> Html {
    let carousel = use_carousel_on(
        CarouselOptions::Continuous {
            half_width: 1_000_000.0,
        },
        Some(props.scheduler.clone()),
    );
    html! { <span class="offset">{carousel.position()}</span> }
}

#[derive(Properties, PartialEq)]
struct TimedSlidesProps {
    scheduler: Counting<IntervalScheduler>,
}

#[function_component(TimedSlides)]
fn timed_slides(props: &TimedSlidesProps) -> Html {
    let carousel = use_carousel_on(
        CarouselOptions::Discrete {
            item_count: NonZeroUsize::new(3).unwrap(),
            autoplay_ms: Some(10),
        },
        Some(props.scheduler.clone()),
    );
    html! { <span class="index">{carousel.index()}</span> }
}

fn mount_root() -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("test runs in a document");
    let root = document.create_element("div").expect("create root");
    document
        .document_element()
        .expect("document has a root element")
        .append_child(&root)
        .expect("attach root");
    root
}

#[wasm_bindgen_test]
async fn unmounting_frame_driven_carousel_cancels_its_loop() {
    let fired = Rc::new(Cell::new(0));
    let root = mount_root();
    let app = yew::Renderer::<FrameStrip>::with_root_and_props(
        root.clone(),
        FrameStripProps {
            scheduler: Counting {
                inner: FrameScheduler,
                fired: fired.clone(),
            },
        },
    )
    .render();

    TimeoutFuture::new(200).await;
    assert!(fired.get() >= 2);
    let offset: f64 = root
        .text_content()
        .unwrap_or_default()
        .parse()
        .expect("offset is rendered");
    assert!(offset > 0.0);

    app.destroy();
    let after_unmount = fired.get();
    TimeoutFuture::new(200).await;
    assert_eq!(fired.get(), after_unmount);
}

#[wasm_bindgen_test]
async fn unmounting_timed_carousel_clears_its_interval() {
    let fired = Rc::new(Cell::new(0));
    let app = yew::Renderer::<TimedSlides>::with_root_and_props(
        mount_root(),
        TimedSlidesProps {
            scheduler: Counting {
                inner: IntervalScheduler { period_ms: 10 },
                fired: fired.clone(),
            },
        },
    )
    .render();

    TimeoutFuture::new(100).await;
    assert!(fired.get() >= 2);

    app.destroy();
    let after_unmount = fired.get();
    TimeoutFuture::new(100).await;
    assert_eq!(fired.get(), after_unmount);
}

#[wasm_bindgen_test]
async fn reviews_render_grid_or_doubled_strip_per_variant() {
    let content = SiteContent::load().expect("embedded content is valid");

    for (variant, list_selector, copies) in [
        (Variant::Classic, ".review-grid", 1),
        (Variant::Stories, ".review-track", 2),
    ] {
        let reviews = content.reviews_for(variant).to_vec();
        let expected = reviews.len() * copies;
        let root = mount_root();
        let app = yew::Renderer::<Reviews>::with_root_and_props(
            root.clone(),
            ReviewsProps {
                reviews,
                background: content.reviews_background.clone(),
                variant,
            },
        )
        .render();

        TimeoutFuture::new(50).await;
        let list = root
            .query_selector(list_selector)
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("{:?} renders {}", variant, list_selector));
        assert_eq!(list.child_element_count() as usize, expected);

        app.destroy();
    }
}
