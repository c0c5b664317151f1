use yew::prelude::*;

use crate::content::Highlight;

#[derive(Properties, PartialEq)]
pub struct HighlightsProps {
    pub items: Vec<Highlight>,
}

#[function_component(Highlights)]
pub fn highlights(props: &HighlightsProps) -> Html {
    html! {
        <section id="menu" class="highlights">
            <div class="section-inner">
                <h2 class="section-title">{"🍵 Our Must-Try Items 🥪"}</h2>

                <div class="highlights-grid">
                    {
                        props.items.iter().map(|item| html! {
                            <div key={item.title.clone()} class="highlight-card">
                                <div class="highlight-image">
                                    <img src={item.image.clone()} alt={item.alt.clone()} loading="lazy" />
                                </div>
                                <div class="highlight-body">
                                    <h3>{&item.title}</h3>
                                    <p>{&item.desc}</p>
                                    <span class="highlight-price">{&item.price}</span>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="highlights-more">
                    <a href="#full-menu">{"See Full Menu Below"}</a>
                </div>
            </div>

            <style>
                {r#"
                .highlights {
                    padding: 6rem 0;
                    background: #ffffff;
                }
                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .highlight-card {
                    background: #fafaf7;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .highlight-card:hover {
                    transform: translateY(-0.25rem);
                    box-shadow: 0 25px 50px -12px rgba(96, 165, 250, 0.5);
                }
                .highlight-image {
                    height: 16rem;
                }
                .highlight-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .highlight-body {
                    padding: 1.5rem;
                    text-align: center;
                }
                .highlight-body h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #60a5fa;
                    margin-bottom: 0.5rem;
                }
                .highlight-body p {
                    color: #4b5563;
                }
                .highlight-price {
                    display: block;
                    margin-top: 0.75rem;
                    font-weight: 700;
                    color: #4b5563;
                }
                .highlights-more {
                    text-align: center;
                    margin-top: 3rem;
                }
                .highlights-more a {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #60a5fa;
                }
                @media (max-width: 768px) {
                    .highlights { padding: 4rem 0; }
                    .highlights-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
