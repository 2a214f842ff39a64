use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod head;
mod components {
    pub mod countdown;
    pub mod faq;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsOfUse},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/termos")]
    Terms,
    #[at("/privacidade")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering terms page");
            html! { <TermsOfUse /> }
        }
        Route::Privacy => {
            info!("Rendering privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > config::HEADER_SCROLL_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    {"WealthSyncX"}
                </Link<Route>>
                <a
                    class="header-cta"
                    href={config::CHECKOUT_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"ACESSAR O PRODUTO"}
                </a>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(18, 18, 18, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(11, 183, 218, 0.15);
                }

                .header-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                }

                .header-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .header-cta {
                    color: #fff;
                    font-weight: 600;
                    padding: 0.5rem 1.5rem;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    box-shadow: 0 0 16px rgba(11, 183, 218, 0.3);
                    transition: transform 0.3s ease;
                }

                .header-cta:hover {
                    transform: scale(1.05);
                }

                @media (max-width: 768px) {
                    .header-content {
                        padding: 0.8rem 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
