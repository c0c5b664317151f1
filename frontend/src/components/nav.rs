use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{Brand, NavItem};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub items: Vec<NavItem>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, items } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            if let Ok(scroll_y) = window.scroll_y() {
                                is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD_PX);
                            }
                        }) as Box<dyn FnMut()>)
                    };
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for scroll: {:?}", err);
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove scroll listener: {:?}", err);
                        }
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate, only the dropdown closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str, on_click: Option<Callback<MouseEvent>>| -> Html {
        items
            .iter()
            .map(|item| {
                html! {
                    <a key={item.anchor.clone()}
                        href={format!("#{}", item.anchor)}
                        class={class}
                        onclick={on_click.clone()}>
                        {&item.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" class="nav-logo">
                    {&brand.mark}
                    <span class="nav-logo-accent">{&brand.accent}</span>
                </a>

                <div class="nav-links">
                    { links("nav-link", None) }
                </div>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                { links("mobile-nav-link", Some(close_menu)) }
            </div>

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #60a5fa;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                }
                .nav-logo-accent {
                    color: #ef4444;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link, .mobile-nav-link {
                    color: #1f2937;
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .mobile-nav-link:hover {
                    color: #60a5fa;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 26px;
                    height: 3px;
                    background: #1f2937;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                .mobile-menu {
                    display: none;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .mobile-menu.mobile-menu-open {
                    max-height: 16rem;
                    opacity: 1;
                }
                .mobile-nav-link {
                    display: block;
                    padding: 0.75rem 1rem;
                    border-radius: 0.25rem;
                }
                .mobile-nav-link:hover {
                    background: #eff6ff;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                    .mobile-menu {
                        display: block;
                        border-top: 1px solid #e5e7eb;
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
