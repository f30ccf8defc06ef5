//! Overview panel arrangements

use super::{StyleRegistry, StyleTemplate};
use crate::appearance::OverviewStyle;

impl StyleRegistry for OverviewStyle {
    const SURFACE: &'static str = "overview";

    fn template(self) -> StyleTemplate {
        let (name, source) = match self {
            Self::Classic => ("overview/classic", CLASSIC),
            Self::Magazine => ("overview/magazine", MAGAZINE),
            Self::Minimal => ("overview/minimal", MINIMAL),
            Self::Hero => ("overview/hero", HERO),
            Self::Split => ("overview/split", SPLIT),
        };
        StyleTemplate { name, source }
    }
}

const CLASSIC: &str = r#".overview {
    padding: 1rem 0;
}

.overview-title {
    margin: 0 0 0.75rem;
    font-size: 1.8rem;
}

.overview-links {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.overview-image {
    display: block;
    max-width: 100%;
    margin: 1rem auto 0;
    border-radius: 6px;
}

.overview-text p {
    margin: 0 0 1rem;
}
"#;

const MAGAZINE: &str = r#".overview {
    padding: 1.5rem 0;
}

.overview-title {
    margin: 0 0 1rem;
    font-size: 2.4rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
    border-bottom: 4px solid {{ colors.accent }};
}

.overview-links {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1.25rem;
}

.overview-image {
    float: right;
    width: 40%;
    margin: 0 0 1rem 1.5rem;
}

.overview-text {
    column-count: 2;
    column-gap: 2rem;
}

.overview-text p:first-child::first-letter {
    float: left;
    font-family: {{ fonts.heading }};
    font-size: 3.2rem;
    line-height: 1;
    padding-right: 0.4rem;
    color: {{ colors.primary }};
}

@media (max-width: 768px) {
    .overview-text {
        column-count: 1;
    }

    .overview-image {
        float: none;
        width: 100%;
        margin: 0 0 1rem;
    }
}
"#;

const MINIMAL: &str = r#".overview {
    padding: 0.5rem 0;
}

.overview-title {
    margin: 0 0 0.5rem;
    font-size: 1.4rem;
    font-weight: 500;
}

.overview-links {
    display: flex;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
    font-size: 0.9rem;
}

.overview-image {
    max-width: 240px;
}

.overview-text p {
    margin: 0 0 0.75rem;
    color: {{ colors.text }};
}
"#;

const HERO: &str = r#".overview {
    padding: 2.5rem 1rem;
    text-align: center;
}

.overview-title {
    margin: 0 0 1rem;
    font-size: 3rem;
    font-family: {{ fonts.accent }};
    color: {{ colors.primary }};
}

.overview-links {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.overview-image {
    display: block;
    width: 100%;
    max-height: 360px;
    object-fit: cover;
    margin-bottom: 1.5rem;
    border-radius: 8px;
}

.overview-text {
    max-width: 680px;
    margin: 0 auto;
    font-size: 1.1rem;
}
"#;

const SPLIT: &str = r#".overview {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    padding: 1rem 0;
    align-items: start;
}

.overview-title {
    grid-column: 1 / -1;
    margin: 0;
    font-size: 2rem;
}

.overview-links {
    grid-column: 1 / -1;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.overview-image {
    width: 100%;
    border: 1px solid {{ colors.border }};
    border-radius: 6px;
}

@media (max-width: 768px) {
    .overview {
        grid-template-columns: 1fr;
    }
}
"#;
