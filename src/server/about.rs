//! About page - hero banner plus a carousel of company-history slides.
//!
//! Purely presentational; the slide data is hardcoded and the render never
//! fails.

use super::pages::{html_escape, page_layout};

/// One carousel slide.
pub struct Slide {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub contents: &'static [&'static str],
}

/// Banner image shown behind the page title.
pub const HERO_IMAGE: &str = "/banner/banner-about.jpeg";

/// Hardcoded history slides, rendered in order.
pub const SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        image: "/placeholder.jpg",
        title: "",
        contents: &[
            "Founded as a small directory of academic collaborators, the \
             company began by matching research groups with outside experts.",
        ],
    },
    Slide {
        id: 2,
        image: "/placeholder.jpg",
        title: "",
        contents: &[
            "The directory grew into a curated network spanning dozens of \
             disciplines, with verified identifiers for every listed expert.",
        ],
    },
    Slide {
        id: 3,
        image: "/placeholder.jpg",
        title: "",
        contents: &[
            "Today the platform serves partner institutions worldwide, \
             keeping expert profiles current through the same open registry.",
        ],
    },
];

/// Render the about page.
pub fn render_about_html() -> String {
    let slides_html: String = SLIDES.iter().map(render_slide).collect();

    let body = format!(
        r#"<main>
    <section class="hero" style="background-image: url('{hero}')">
        <h1>About Us</h1>
    </section>
    <section class="carousel">
{slides}    </section>
</main>"#,
        hero = html_escape(HERO_IMAGE),
        slides = slides_html,
    );

    page_layout("About Us", &body)
}

fn render_slide(slide: &Slide) -> String {
    let paragraphs: String = slide
        .contents
        .iter()
        .map(|text| format!("            <p>{}</p>\n", html_escape(text)))
        .collect();

    let title_html = if slide.title.is_empty() {
        String::new()
    } else {
        format!("            <h2>{}</h2>\n", html_escape(slide.title))
    };

    format!(
        r#"        <article class="slide" id="slide-{id}">
            <img src="{image}" alt="">
            <div class="slide-body">
{title}{paragraphs}            </div>
        </article>
"#,
        id = slide.id,
        image = html_escape(slide.image),
        title = title_html,
        paragraphs = paragraphs,
    )
}

// =============================================================================
// Tests
// =============================================================================
