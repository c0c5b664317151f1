use chrono::Datelike;
use yew::prelude::*;

use crate::content::Footer as FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {} - All rights reserved.", year, props.footer.owner)}</p>
            <p class="footer-tagline">{&props.footer.tagline}</p>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .footer-tagline {
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                    color: #9ca3af;
                }
                "#}
            </style>
        </footer>
    }
}
