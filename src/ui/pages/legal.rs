//! Terms of Service and Privacy Policy pages

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{LegalDoc, PRIVACY, TERMS};
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;
use crate::ui::sections::Footer;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage doc=TERMS /> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage doc=PRIVACY /> }
}

/// One legal document rendered from Markdown
#[component]
fn LegalPage(doc: LegalDoc) -> impl IntoView {
    view! {
        <Title text=doc.title />
        <Meta name="robots" content="noindex" />

        <div class="min-h-screen bg-zinc-950 text-zinc-300">
            <main class="max-w-3xl mx-auto px-4 py-24">
                <a
                    href="/"
                    class="inline-flex items-center gap-2 text-sm text-zinc-400 hover:text-white transition-colors mb-10"
                    on:click=go_back
                >
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4 invert" />
                    "Back to Nodal"
                </a>

                <h1 class="font-heading text-4xl text-white mb-2">{doc.title}</h1>
                <p class="text-sm text-zinc-500 mb-8">{format!("Effective date: {}", doc.effective_date)}</p>

                <Markdown content=doc.body />
            </main>
            <Footer />
        </div>
    }
}

/// Go back in history when there is somewhere to go, otherwise follow the
/// link to `/`
fn go_back(ev: leptos::ev::MouseEvent) {
    #[cfg(not(feature = "ssr"))]
    {
        let Ok(history) = window().history() else {
            return;
        };
        if history.length().unwrap_or(0) > 1 {
            ev.prevent_default();
            let _ = history.back();
        }
    }

    #[cfg(feature = "ssr")]
    let _ = ev;
}
