//! Static page content.
//!
//! Copy, image paths and outbound links live in `content/site.json` and are
//! embedded at compile time.

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hero needs at least one slide")]
    NoSlides,
    #[error("full menu needs at least one card")]
    NoMenuCards,
    #[error("{0:?} variant has no reviews")]
    NoReviews(Variant),
    #[error("review by {name} has rating {rating}, expected 1 to 5")]
    InvalidRating { name: String, rating: u8 },
}

/// The two landing page layouts. They share everything except how reviews
/// are presented and which reviews are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Static three-column review grid.
    Classic,
    /// Continuously scrolling review strip that pauses on hover.
    #[default]
    Stories,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub menu_cards: Vec<String>,
    pub menu_background: String,
    pub gallery: Vec<GalleryImage>,
    pub reviews: ReviewSets,
    pub reviews_background: String,
    pub location: Location,
    pub delivery: Vec<DeliveryLink>,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub mark: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    pub title_accent: String,
    pub tagline: String,
    pub cta: String,
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub price: String,
    pub desc: String,
    pub image: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySpan {
    /// Two columns by two rows.
    Feature,
    /// Two columns by one row.
    Wide,
    #[default]
    Single,
}

impl GallerySpan {
    pub fn class(self) -> &'static str {
        match self {
            GallerySpan::Feature => "span-feature",
            GallerySpan::Wide => "span-wide",
            GallerySpan::Single => "span-single",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub span: GallerySpan,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub review: String,
    pub date: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewSets {
    pub classic: Vec<Review>,
    pub stories: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub address_lines: Vec<String>,
    pub city: String,
    pub maps_href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeliveryLink {
    pub platform: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub owner: String,
    pub tagline: String,
}

impl SiteContent {
    /// Parses and validates the embedded site content.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        if self.menu_cards.is_empty() {
            return Err(ContentError::NoMenuCards);
        }
        for variant in [Variant::Classic, Variant::Stories] {
            let reviews = self.reviews_for(variant);
            if reviews.is_empty() {
                return Err(ContentError::NoReviews(variant));
            }
            if let Some(review) = reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
                return Err(ContentError::InvalidRating {
                    name: review.name.clone(),
                    rating: review.rating,
                });
            }
        }
        Ok(())
    }

    pub fn reviews_for(&self, variant: Variant) -> &[Review] {
        match variant {
            Variant::Classic => &self.reviews.classic,
            Variant::Stories => &self.reviews.stories,
        }
    }
}

/// A run of review or address text, split on `**bold**` markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Splits `text` on paired `**` markers. An unpaired marker is kept as
/// plain text.
pub fn text_fragments(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            fragments.push(Fragment::Plain(&rest[..open]));
        }
        if close > 0 {
            fragments.push(Fragment::Bold(&after[..close]));
        }
        rest = &after[close + 2..];
    }

    if !rest.is_empty() {
        fragments.push(Fragment::Plain(rest));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_bold_runs() {
        assert_eq!(
            text_fragments("Try the **Tandoori Maggi** today"),
            vec![
                Fragment::Plain("Try the "),
                Fragment::Bold("Tandoori Maggi"),
                Fragment::Plain(" today"),
            ]
        );
    }

    #[test]
    fn keeps_unpaired_marker() {
        assert_eq!(
            text_fragments("**Chai** and **more"),
            vec![Fragment::Bold("Chai"), Fragment::Plain(" and **more")]
        );
    }

    #[test]
    fn plain_text_is_one_fragment() {
        assert_eq!(text_fragments("just chai"), vec![Fragment::Plain("just chai")]);
        assert!(text_fragments("").is_empty());
    }
}
