use yew::prelude::*;

use crate::components::rich_text::RichText;
use crate::content::{DeliveryLink, Location};

#[derive(Properties, PartialEq)]
pub struct LocateProps {
    pub location: Location,
    pub delivery: Vec<DeliveryLink>,
}

#[function_component(Locate)]
pub fn locate(props: &LocateProps) -> Html {
    let LocateProps { location, delivery } = props;

    html! {
        <section id="locate" class="locate">
            <div class="section-inner">
                <h2 class="section-title muted">{"📍 Find Us & Order Online"}</h2>

                <div class="locate-grid">
                    <div class="locate-card">
                        <h3>{"Our Address"}</h3>
                        <p class="address">
                            <RichText text={location.name.clone()} />
                            { for location.address_lines.iter().map(|line| html! {
                                <>
                                    <br />
                                    {line}
                                </>
                            }) }
                            <br />
                            <RichText text={location.city.clone()} />
                        </p>
                        <a href={location.maps_href.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="directions-link">
                            {"Get Directions on Maps 🗺️"}
                        </a>
                    </div>

                    <div class="locate-card">
                        <h3>{"Order Right Away!"}</h3>
                        <p class="delivery-blurb">{"Delivering the best Chai and Maggi to your door."}</p>
                        {
                            delivery.iter().map(|link| html! {
                                <a key={link.platform.clone()}
                                    href={link.href.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class={classes!("delivery-link", format!("delivery-{}", link.platform.to_lowercase()))}>
                                    {format!("Order on {}", link.platform)}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .locate {
                    padding: 6rem 0;
                    background: #ffffff url('/images/map.png');
                    text-align: center;
                }
                .locate-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .locate-card {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    border-left: 4px solid #60a5fa;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .locate-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #6b7280;
                    margin-bottom: 1rem;
                }
                .address {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #374151;
                }
                .directions-link {
                    display: inline-block;
                    margin-top: 1rem;
                    font-weight: 600;
                    color: #3b82f6;
                }
                .directions-link:hover {
                    color: #b91c1c;
                }
                .delivery-blurb {
                    font-size: 1.125rem;
                    color: #374151;
                    margin-bottom: 1.5rem;
                }
                .delivery-link {
                    display: block;
                    padding: 0.75rem 0;
                    margin-bottom: 1rem;
                    border-radius: 0.5rem;
                    color: #ffffff;
                    font-weight: 700;
                    text-decoration: none;
                    background: #f97316;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    transition: background 0.3s ease;
                }
                .delivery-link:hover { background: #ea580c; }
                .delivery-zomato { background: #9a3412; }
                .delivery-zomato:hover { background: #b91c1c; }
                @media (max-width: 768px) {
                    .locate { padding: 4rem 0; }
                    .locate-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
