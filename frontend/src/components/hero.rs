use std::num::NonZeroUsize;

use yew::prelude::*;

use crate::carousel::hook::{use_carousel, CarouselOptions};
use crate::config;
use crate::content::{Hero, Slide};

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub hero: Hero,
}

#[derive(Properties, PartialEq)]
struct SlidesProps {
    slides: Vec<Slide>,
    item_count: NonZeroUsize,
}

#[function_component(Slides)]
fn slides(props: &SlidesProps) -> Html {
    let carousel = use_carousel(CarouselOptions::Discrete {
        item_count: props.item_count,
        autoplay_ms: Some(config::HERO_INTERVAL_MS),
    });
    let current = carousel.index();

    props
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            html! {
                <div key={slide.src.clone()}
                    class={classes!("hero-slide", (index == current).then(|| "active"))}>
                    <img src={slide.src.clone()}
                        alt={slide.alt.clone()}
                        loading={if index == 0 { "eager" } else { "lazy" }} />
                </div>
            }
        })
        .collect()
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let hero = &props.hero;

    html! {
        <section id="hero" class="hero">
            {
                match NonZeroUsize::new(hero.slides.len()) {
                    Some(item_count) => html! {
                        <Slides slides={hero.slides.clone()} item_count={item_count} />
                    },
                    None => html! {},
                }
            }
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>
                    {&hero.title}
                    <span class="hero-accent">{&hero.title_accent}</span>
                </h1>
                <p class="hero-tagline">{&hero.tagline}</p>
                <a href="#menu" class="hero-cta">{&hero.cta}</a>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 80vh;
                    overflow: hidden;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    z-index: 0;
                    transition: opacity 1s ease;
                }
                .hero-slide.active {
                    opacity: 1;
                    z-index: 10;
                }
                .hero-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center 30%;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 20;
                }
                .hero-content {
                    position: relative;
                    z-index: 30;
                    height: 100%;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                }
                .hero-content h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    color: #ffffff;
                    margin-bottom: 1rem;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                }
                .hero-accent {
                    color: #60a5fa;
                }
                .hero-tagline {
                    font-size: 1.5rem;
                    font-style: italic;
                    color: #ffffff;
                    margin-bottom: 3rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #ffffff;
                    color: #3b82f6;
                    padding: 1rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 0 30px 7px rgba(255, 255, 255, 0.5);
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }
                .hero-cta:hover {
                    background: #f1f5f9;
                    box-shadow: 0 0 30px 14px rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 768px) {
                    .hero { height: 60vh; }
                    .hero-content h1 { font-size: 2rem; }
                    .hero-tagline { font-size: 1rem; margin-bottom: 2rem; }
                }
                "#}
            </style>
        </section>
    }
}
