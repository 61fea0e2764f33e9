use leptos::{either::Either, prelude::*};

#[component]
fn LocationArrow() -> impl IntoView {
    view! {
        <svg
            class="inline-block h-4 w-4"
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d="M19.375 3.4a1.034 1.034 0 0 0-.707-.294c-.135 0-.27.026-.396.078L3.654 9.235a1.035 1.035 0 0 0-.081 1.877l5.894 2.946 2.946 5.894a1.037 1.037 0 0 0 .926.572h.046a1.038 1.038 0 0 0 .906-.653l6.05-14.618a1.036 1.036 0 0 0-.222-1.133z" />
        </svg>
    }
}

/// Pill button whose label rolls up on hover. Renders an `<a>` when given
/// an `href`.
#[component]
pub fn Button(
    #[prop(into)] title: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] container_class: String,
    /// Trailing location arrow.
    #[prop(optional)]
    arrow: bool,
) -> impl IntoView {
    let class = format!(
        "group relative z-10 w-fit overflow-hidden rounded-full px-7 py-3 text-black {container_class}"
    );
    let label = move || {
        view! {
            <span class="relative inline-flex items-center overflow-hidden font-general text-xs md:text-xl font-bold uppercase">
                <div class="translate-y-0 skew-y-0 transition duration-500 group-hover:translate-y-[-160%] group-hover:skew-y-12">
                    {title.clone()}
                </div>
                <div class="absolute translate-y-[164%] skew-y-12 transition duration-500 group-hover:translate-y-0 group-hover:skew-y-0">
                    {title.clone()}
                </div>
            </span>
            {arrow.then(|| view! { <span class="ml-2"><LocationArrow /></span> })}
        }
    };

    match href {
        Some(href) => Either::Left(view! {
            <a id=id href=href target="_blank" rel="noopener noreferrer" class=class>
                {label()}
            </a>
        }),
        None => Either::Right(view! {
            <button id=id class=class>
                {label()}
            </button>
        }),
    }
}
