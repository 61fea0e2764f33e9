use leptos::prelude::*;

use crate::content::{content, SkillCard};

use super::bento::{BentoCard, BentoTilt};

#[component]
pub fn Skills() -> impl IntoView {
    let cards = &content().skills;
    let tilted = |card: &'static SkillCard| {
        view! {
            <BentoTilt class_name=format!(
                "transition-transform duration-1000 ease-out {}",
                card.layout,
            )>
                <BentoCard card />
            </BentoTilt>
        }
    };

    view! {
        <section id="skills" class="bg-gradient-to-t from-primary to-secondary pb-20">
            <div class="container mx-auto px-3 md:px-10">
                <p class="hero-heading">"Skills."</p>
                <p class="hero-text">"What can I do?"</p>
                <p class="text-white pb-5 text-xs italic">
                    "(Psst... If you don't know an icon you can hover over it)"
                </p>
                {cards.iter().filter(|c| c.featured).map(tilted).collect_view()}
                <div class="grid h-[135vh] w-full grid-cols-2 grid-rows-4 gap-7">
                    {cards.iter().filter(|c| !c.featured).map(tilted).collect_view()}
                </div>
            </div>
        </section>
    }
}
