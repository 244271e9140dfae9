use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Title band at the top of the secondary pages
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="bg-gradient-to-br from-blue-50 to-indigo-100 py-16 px-6 text-center">
            <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">{props.title.clone()}</h1>
            if let Some(subtitle) = &props.subtitle {
                <p class="text-lg text-gray-600 max-w-2xl mx-auto">{subtitle.clone()}</p>
            }
        </section>
    }
}
