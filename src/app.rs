mod background;
mod contact;
mod header;
mod homepage;
mod projects;
mod recaptcha;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PERSONAL_INFO;
use header::Header;
use homepage::HomePage;

pub use background::{fetch_frame_server, FluidBackground};
pub use contact::{get_public_config, send_contact, send_test_email};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.name) />
        <Meta name="description" content=PERSONAL_INFO.tagline />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // from build.rs, so server and client render the same text
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built.map(|t| t.format("%Y").to_string()).unwrap_or_default();
    let date = built
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="py-8 px-6 border-t border-white/10 text-center text-sm text-white/50">
            <p>{format!("© {year} {}", PERSONAL_INFO.name)}</p>
            <p class="mt-1">"Built with Rust & Leptos · last built " {date}</p>
        </footer>
    }
}
