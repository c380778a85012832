use leptos::*;
use leptos_meta::{Body, Html, Link, Meta, Title};

pub const SITE_NAME: &str = "Moobi";
pub const SITE_URL: &str = "https://epiphanusonyeso.vercel.app";
pub const DESCRIPTION: &str = "Moobi is a virtual smartphone experience in your browser \u{2014} explore apps, play media, browse the web, and more within a simulated mobile interface.";
pub const OG_DESCRIPTION: &str = "Experience a fully interactive mobile phone inside your browser. Browse, call, text, and launch apps \u{2014} all in one virtual interface.";
pub const LOGO: &str = "/images/logo.png";

pub const KEYWORDS: &[&str] = &[
    "Moobi",
    "virtual phone",
    "web phone emulator",
    "simulated smartphone",
    "virtual mobile OS",
    "web apps",
    "browser-based phone",
    "UI simulation",
    "digital phone interface",
];

/// OpenGraph preview image.
pub struct OgImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

pub const OG_IMAGE: OgImage = OgImage {
    url: "https://epiphanusonyeso.vercel.app/images/logo.png",
    width: 650,
    height: 300,
    alt: "Moobi logo",
};

/// Document-level metadata: title, description, keywords, favicon and OpenGraph tags.
#[component]
pub fn SiteHead() -> impl IntoView {
    view! {
        <Html lang="en"/>
        <Body class="bg-black antialiased"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta name="keywords" content=KEYWORDS.join(", ")/>
        <Link rel="icon" href=LOGO/>

        <Meta property="og:title" content=SITE_NAME/>
        <Meta property="og:description" content=OG_DESCRIPTION/>
        <Meta property="og:url" content=SITE_URL/>
        <Meta property="og:site_name" content=SITE_NAME/>
        <Meta property="og:image" content=OG_IMAGE.url/>
        <Meta property="og:image:width" content=OG_IMAGE.width.to_string()/>
        <Meta property="og:image:height" content=OG_IMAGE.height.to_string()/>
        <Meta property="og:image:alt" content=OG_IMAGE.alt/>
    }
}
