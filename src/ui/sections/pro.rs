use leptos::prelude::*;

use crate::core::content::{
    PRICING, PRICING_PLANS, PRO, PricingContent, PricingPlan, ProContent,
};
use crate::ui::common::{ButtonSize, ButtonVariant, CtaLink};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;
use crate::ui::sections::heading::{PillarCard, stagger};

/// Pro pitch followed by the pricing block (`#pricing`)
#[component]
pub fn Pro(
    #[prop(default = PRO)]
    content: ProContent,
    #[prop(default = PRICING)]
    pricing: PricingContent,
    #[prop(default = PRICING_PLANS)]
    plans: &'static [PricingPlan],
) -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-12">
                    <span class="text-sm font-semibold uppercase tracking-widest text-primary-600 dark:text-primary-400">
                        {content.kicker}
                    </span>
                    <h2 class="font-heading text-4xl sm:text-5xl text-zinc-900 dark:text-white mt-2 mb-4">
                        {content.heading}
                    </h2>
                    <p class="text-lg text-zinc-600 dark:text-zinc-300 max-w-2xl mx-auto">{content.body}</p>
                    <p class="mt-4 font-semibold text-zinc-900 dark:text-white">{content.tagline}</p>
                    <div class="mt-8">
                        <CtaLink cta=content.cta size=ButtonSize::Large />
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8 mb-16">
                    {content
                        .pillars
                        .iter()
                        .enumerate()
                        .map(|(i, pillar)| view! { <PillarCard pillar=*pillar delay_ms=stagger(i) /> })
                        .collect_view()}
                </div>

                <Reveal class="text-center mb-24">
                    <blockquote class="font-heading text-2xl text-zinc-900 dark:text-white">
                        {content.quote}
                    </blockquote>
                    <p class="mt-2 text-zinc-600 dark:text-zinc-300">{content.quote_author}</p>
                    <p class="mt-1 text-xs text-zinc-500">{content.quote_footnote}</p>
                </Reveal>

                <Pricing content=pricing plans=plans />
            </div>
        </section>
    }
}

#[component]
fn Pricing(content: PricingContent, plans: &'static [PricingPlan]) -> impl IntoView {
    view! {
        <div id="pricing" class="scroll-mt-24">
            <Reveal class="text-center mb-12">
                <h3 class="font-heading text-3xl sm:text-4xl text-zinc-900 dark:text-white mb-2">
                    {content.heading}
                </h3>
                <p class="text-zinc-600 dark:text-zinc-300">{content.subheading}</p>
            </Reveal>

            <div class="grid lg:grid-cols-3 gap-8 items-stretch">
                {plans
                    .iter()
                    .enumerate()
                    .map(|(i, plan)| view! { <PricingCard plan=*plan delay_ms=stagger(i) /> })
                    .collect_view()}

                <Reveal delay_ms=stagger(plans.len()) class="h-full">
                    <div class="h-full flex flex-col justify-center p-8 rounded-2xl bg-zinc-900 text-white dark:bg-white dark:text-zinc-900">
                        <h4 class="font-heading text-2xl mb-2">{content.side_heading}</h4>
                        <p class="mb-6 opacity-80">{content.side_body}</p>
                        <CtaLink cta=content.side_cta variant=ButtonVariant::Primary />
                    </div>
                </Reveal>
            </div>

            <p class="text-center text-sm text-zinc-500 mt-8">{content.footnote}</p>
        </div>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, delay_ms: u32) -> impl IntoView {
    let card_class = if plan.highlighted {
        "relative h-full p-8 rounded-2xl border-2 border-primary-500 bg-white dark:bg-zinc-900 shadow-xl"
    } else {
        "h-full p-8 rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white dark:bg-zinc-900"
    };

    view! {
        <Reveal delay_ms=delay_ms class="h-full">
            <div class=card_class>
                {plan.highlighted.then(|| view! {
                    <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-primary-500 text-zinc-900 text-sm font-medium rounded-full">
                        "Most Popular"
                    </div>
                })}
                <h4 class="font-heading text-xl text-zinc-900 dark:text-white">{plan.name}</h4>
                <div class="text-4xl font-bold text-zinc-900 dark:text-white mt-2 mb-6">{plan.price}</div>
                <ul class="space-y-3">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start gap-3 text-sm text-zinc-700 dark:text-zinc-200">
                                    <Icon name=icons::CHECK class="w-5 h-5 shrink-0 dark:invert" />
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
