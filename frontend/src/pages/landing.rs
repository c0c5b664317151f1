use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    footer::Footer, gallery::Gallery, hero::HeroSlider, highlights::Highlights,
    locate::Locate, menu_viewer::FullMenu, nav::Nav, reviews::Reviews,
};
use crate::content::{SiteContent, Variant};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub variant: Variant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let LandingProps { content, variant } = props;

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Nav brand={content.brand.clone()} items={content.nav.clone()} />
            <HeroSlider hero={content.hero.clone()} />
            <Highlights items={content.highlights.clone()} />
            <hr class="section-divider" />
            <FullMenu cards={content.menu_cards.clone()} background={content.menu_background.clone()} />
            <hr class="section-divider" />
            <Gallery images={content.gallery.clone()} />
            <hr class="section-divider" />
            <Reviews
                reviews={content.reviews_for(*variant).to_vec()}
                background={content.reviews_background.clone()}
                variant={*variant} />
            <Locate location={content.location.clone()} delivery={content.delivery.clone()} />
            <Footer footer={content.footer.clone()} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #fafaf7;
                    color: #1f2937;
                }
                .section-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                    color: #1f2937;
                }
                .section-title.light { color: #e5e7eb; margin-bottom: 2rem; }
                .section-title.muted { color: #9ca3af; margin-bottom: 1.5rem; }
                .section-title.accent { color: #60a5fa; }
                .section-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .section-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .section-divider {
                    max-width: 72rem;
                    margin: 0 auto;
                    border: none;
                    border-top: 2px solid rgba(96, 165, 250, 0.2);
                }
                @media (max-width: 768px) {
                    .section-title { font-size: 1.875rem; }
                }
                "#}
            </style>
        </div>
    }
}
