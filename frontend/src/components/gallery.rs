use yew::prelude::*;

use crate::content::GalleryImage;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <section id="ambiance" class="gallery">
            <div class="section-inner">
                <h2 class="section-title">{"✨ The Ambiance - Your Happy Place"}</h2>
                <div class="gallery-grid">
                    {
                        props.images.iter().enumerate().map(|(index, image)| html! {
                            <div key={index} class={classes!("gallery-item", image.span.class())}>
                                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .gallery {
                    padding: 6rem 0;
                    background: #ffffff;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: 200px;
                    gap: 1rem;
                }
                .gallery-item {
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                    cursor: pointer;
                }
                .gallery-item:hover {
                    transform: scale(1.02);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .span-feature {
                    grid-column: span 2;
                    grid-row: span 2;
                }
                .span-wide {
                    grid-column: span 2;
                }
                @media (max-width: 768px) {
                    .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
