use yew::prelude::*;

use crate::content::{text_fragments, Fragment};

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub text: String,
}

/// Renders `**bold**` runs as `<strong>` without going through raw HTML.
#[function_component(RichText)]
pub fn rich_text(props: &RichTextProps) -> Html {
    text_fragments(&props.text)
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => html! { <>{text}</> },
            Fragment::Bold(text) => html! { <strong>{text}</strong> },
        })
        .collect()
}
