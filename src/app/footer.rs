use leptos::prelude::*;

use crate::content::{build_year, content};

#[component]
pub fn Footer() -> impl IntoView {
    let site = &content().site;
    let notice = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", site.full_name),
        None => format!("© {}. All rights reserved.", site.full_name),
    };

    view! {
        <footer class="w-full bg-primary p-4 text-black h-24">
            <div class="container m-auto flex items-center justify-between px-4 h-full">
                <p class="text-center text-lg font-light md:text-left">{notice}</p>
                <div class="flex justify-center gap-4">
                    {site
                        .socials
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="cursor-none text-black text-5xl transition-colors duration-500 ease-in-out hover:text-white hover:scale-150"
                                >
                                    <i class=link.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
