use std::num::NonZeroUsize;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::hook::{use_carousel, CarouselAction, CarouselOptions};
use crate::carousel::state::Direction;

#[derive(Properties, PartialEq)]
pub struct FullMenuProps {
    pub cards: Vec<String>,
    pub background: String,
}

#[derive(Properties, PartialEq)]
struct MenuCardsProps {
    cards: Vec<String>,
    item_count: NonZeroUsize,
}

#[function_component(MenuCards)]
fn menu_cards(props: &MenuCardsProps) -> Html {
    let carousel = use_carousel(CarouselOptions::Discrete {
        item_count: props.item_count,
        autoplay_ms: None,
    });
    let current = carousel.index();

    let dispatch = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            carousel.dispatch(action);
        })
    };

    let slide_class = match carousel.direction() {
        Direction::Forward => "slide-from-right",
        Direction::Backward => "slide-from-left",
    };

    html! {
        <div class="menu-viewer">
            <div class="menu-card">
                <img key={current}
                    class={slide_class}
                    src={props.cards.get(current).cloned().unwrap_or_default()}
                    alt={format!("Menu card {}", current + 1)} />
            </div>

            <button class="menu-arrow menu-arrow-left"
                onclick={dispatch(CarouselAction::Retreat)}
                aria-label="Previous menu">
                {"‹"}
            </button>
            <button class="menu-arrow menu-arrow-right"
                onclick={dispatch(CarouselAction::Advance)}
                aria-label="Next menu">
                {"›"}
            </button>

            <div class="menu-dots">
                {
                    (0..props.item_count.get()).map(|index| html! {
                        <button key={index}
                            class={classes!("menu-dot", (index == current).then(|| "active"))}
                            onclick={dispatch(CarouselAction::JumpTo(index))}
                            aria-label={format!("Go to menu {}", index + 1)} />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[function_component(FullMenu)]
pub fn full_menu(props: &FullMenuProps) -> Html {
    html! {
        <section id="full-menu" class="full-menu">
            <div class="section-background">
                <img src={props.background.clone()} alt="Background" />
            </div>

            <div class="section-inner">
                <h2 class="section-title light">{"📜 The Complete Menu"}</h2>
                <p class="full-menu-subtitle">
                    {"Chai, Coffee, Maggi, and all the light bites you crave!"}
                </p>
                {
                    match NonZeroUsize::new(props.cards.len()) {
                        Some(item_count) => html! {
                            <MenuCards cards={props.cards.clone()} item_count={item_count} />
                        },
                        None => html! {},
                    }
                }
            </div>

            <style>
                {r#"
                .full-menu {
                    position: relative;
                    padding: 6rem 0;
                }
                .full-menu-subtitle {
                    text-align: center;
                    color: #ffffff;
                    margin-bottom: 3rem;
                }
                .menu-viewer {
                    position: relative;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .menu-card {
                    border-radius: 0.75rem;
                    overflow: hidden;
                    aspect-ratio: 3 / 4.5;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .menu-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .slide-from-right { animation: slideFromRight 0.4s ease-out; }
                .slide-from-left { animation: slideFromLeft 0.4s ease-out; }
                @keyframes slideFromRight {
                    from { opacity: 0; transform: translateX(2rem); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slideFromLeft {
                    from { opacity: 0; transform: translateX(-2rem); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .menu-arrow {
                    position: absolute;
                    top: 50%;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #1e3a8a;
                    font-size: 1.75rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .menu-arrow:hover {
                    background: #60a5fa;
                    transform: translateY(-50%) scale(1.1);
                }
                .menu-arrow-left { left: 0; transform: translate(-1rem, -50%); }
                .menu-arrow-right { right: 0; transform: translate(1rem, -50%); }
                .menu-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .menu-dot {
                    width: 0.625rem;
                    height: 0.625rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .menu-dot:hover {
                    background: rgba(255, 255, 255, 0.8);
                }
                .menu-dot.active {
                    width: 2rem;
                    background: #60a5fa;
                }
                "#}
            </style>
        </section>
    }
}
