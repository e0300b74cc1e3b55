use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::sections::{
    Collaboration, FeatureTabs, FinalCta, Footer, Hero, MeetNobot, Pro, Templates,
};

const TITLE: &str = "Nodal - a visual thinking tool";
const DESCRIPTION: &str = "Put your ideas down on a board and organize them how you see fit. Nodes, files, links, AI and real-time collaboration in one place.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <main>
            <Hero />
            <FeatureTabs />
            <MeetNobot />
            <Templates />
            <Collaboration />
            <Pro />
            <FinalCta />
        </main>
        <Footer />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=TITLE />
        <Meta name="description" content=DESCRIPTION />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://nodalapp.com/" />
        <Meta property="og:title" content=TITLE />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:image" content="https://nodalapp.com/og-image.png" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=TITLE />
        <Meta name="twitter:description" content=DESCRIPTION />

        <Link rel="canonical" href="https://nodalapp.com/" />
    }
}
