use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::carousel::hook::{use_carousel, CarouselAction, CarouselOptions};
use crate::components::rich_text::RichText;
use crate::config;
use crate::content::{Review, Variant};

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub reviews: Vec<Review>,
    pub background: String,
    pub variant: Variant,
}

#[derive(Properties, PartialEq)]
struct ReviewListProps {
    reviews: Vec<Review>,
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: Review,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let review = &props.review;
    let name = if review.featured {
        format!("{} (Featured)", review.name)
    } else {
        review.name.clone()
    };

    html! {
        <div class={classes!("review-card", review.featured.then(|| "featured"))}>
            <div class="review-rating">
                { for (0..review.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                <span class="rating-label">{format!("({}/5)", review.rating)}</span>
            </div>
            <p class="review-name">{name}</p>
            <p class="review-text"><RichText text={review.review.clone()} /></p>
            <p class="review-date">{&review.date}</p>
        </div>
    }
}

#[function_component(ReviewGrid)]
fn review_grid(props: &ReviewListProps) -> Html {
    html! {
        <div class="review-grid">
            {
                props.reviews.iter().enumerate().map(|(index, review)| html! {
                    <ReviewCard key={index} review={review.clone()} />
                }).collect::<Html>()
            }
        </div>
    }
}

/// Reviews rendered twice back to back and scrolled continuously; the
/// offset resets once the first copy has fully scrolled past.
#[function_component(ReviewStrip)]
fn review_strip(props: &ReviewListProps) -> Html {
    let track_ref = use_node_ref();
    let provisional_width = config::REVIEW_CARD_WIDTH_PX * props.reviews.len() as f64;
    let carousel = use_carousel(CarouselOptions::Continuous {
        half_width: provisional_width,
    });
    let window_size = use_window_size();

    {
        let track_ref = track_ref.clone();
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                if let Some(track) = track_ref.cast::<Element>() {
                    let half_width = f64::from(track.scroll_width()) / 2.0;
                    dispatcher.dispatch(CarouselAction::Measure(half_width));
                }
                || ()
            },
            (window_size, props.reviews.len()),
        );
    }

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Pause))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Resume))
    };

    html! {
        <div class="review-strip" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="review-track"
                ref={track_ref}
                style={format!("transform: translateX(-{}px);", carousel.position())}>
                {
                    props.reviews.iter().chain(props.reviews.iter()).enumerate().map(|(index, review)| html! {
                        <div key={index} class="review-slot">
                            <ReviewCard review={review.clone()} />
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let list = match props.variant {
        Variant::Classic => html! { <ReviewGrid reviews={props.reviews.clone()} /> },
        Variant::Stories => html! { <ReviewStrip reviews={props.reviews.clone()} /> },
    };

    html! {
        <section id="reviews" class={classes!("reviews", format!("reviews-{:?}", props.variant).to_lowercase())}>
            <div class="section-background">
                <img src={props.background.clone()} alt="Background" />
            </div>
            <div class="section-inner">
                <h2 class="section-title accent">{"⭐ Reviews & Feedback from Duddy! ⭐"}</h2>
                { list }
            </div>

            <style>
                {r#"
                .reviews {
                    position: relative;
                    padding: 6rem 0;
                    background: #fafaf7;
                    overflow: hidden;
                }
                .review-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .review-card {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    border-top: 4px solid rgba(96, 165, 250, 0.5);
                    background: #ffffff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease;
                }
                .review-card:hover {
                    transform: scale(1.02);
                }
                .review-card.featured {
                    background: #fefce8;
                    border-top-color: #eab308;
                }
                .review-rating {
                    display: flex;
                    align-items: center;
                    margin-bottom: 0.75rem;
                }
                .star {
                    color: #facc15;
                    font-size: 1.25rem;
                }
                .rating-label {
                    margin-left: 0.5rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .review-name {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    color: #60a5fa;
                }
                .review-card.featured .review-name {
                    color: #3b82f6;
                }
                .review-text {
                    color: #374151;
                    font-style: italic;
                    margin-bottom: 1rem;
                }
                .review-date {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .review-strip {
                    overflow: hidden;
                    mask-image: linear-gradient(to right, transparent, black 5%, black 95%, transparent);
                }
                .review-track {
                    display: flex;
                    width: max-content;
                    will-change: transform;
                }
                .review-slot {
                    width: 22rem;
                    padding: 0 1rem;
                    flex-shrink: 0;
                }
                .reviews-stories .review-card:hover {
                    transform: none;
                }
                @media (max-width: 768px) {
                    .reviews { padding: 4rem 0; }
                    .review-grid { grid-template-columns: 1fr; }
                    .review-slot { width: 18rem; }
                }
                "#}
            </style>
        </section>
    }
}
