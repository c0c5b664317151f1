use std::rc::Rc;

use log::error;
use yew::prelude::*;

pub mod config;
pub mod content;

pub mod carousel {
    pub mod engine;
    pub mod error;
    pub mod hook;
    pub mod schedule;
    pub mod state;

    pub use engine::{Carousel, CarouselEngine};
    pub use error::CarouselError;
    pub use schedule::Scheduler;
    pub use state::{CarouselState, Direction, Mode};
}

pub mod components {
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod highlights;
    pub mod locate;
    pub mod menu_viewer;
    pub mod nav;
    pub mod reviews;
    pub mod rich_text;
}

pub mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    let content = use_state(|| SiteContent::load().map(Rc::new));

    match &*content {
        Ok(content) => html! {
            <Landing content={content.clone()} variant={config::DEFAULT_VARIANT} />
        },
        Err(err) => {
            error!("Failed to load site content: {}", err);
            html! {
                <div class="content-error">
                    <p>{"We're brewing something. Please check back shortly."}</p>
                </div>
            }
        }
    }
}
