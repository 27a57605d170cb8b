use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, NotificationProvider, PageHeader};
use views::{
    About, Activities, BirthingCenterOnboarding, Community, Dashboard, DoulaOnboarding,
    FindDoula, Landing, Messages, MotherOnboarding, OrganizationOnboarding, Privacy, Profile,
    Resources, Terms,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/about")]
    About {},
    #[route("/terms")]
    Terms {},
    #[route("/privacy")]
    Privacy {},
    #[route("/onboarding/mother")]
    MotherOnboarding {},
    #[route("/onboarding/doula")]
    DoulaOnboarding {},
    #[route("/onboarding/birthing-center")]
    BirthingCenterOnboarding {},
    #[route("/onboarding/organization")]
    OrganizationOnboarding {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/find-doula")]
    FindDoula {},
    #[route("/messages")]
    Messages {},
    #[route("/activities")]
    Activities {},
    #[route("/community")]
    Community {},
    #[route("/resources")]
    Resources {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        // Uploaded avatars are plain files on disk
        .nest_service("/uploads", ServeDir::new(api::storage::base_dir()))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Wraps the signed-in views: unauthenticated visitors are sent to the
/// landing page, everyone else gets the page header with notification badges.
#[component]
pub(crate) fn Protected(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }
    if state.user.is_none() {
        nav.replace(Route::Landing {});
        return rsx! {};
    }

    rsx! {
        PageHeader {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::FindDoula {}, "Find a Doula" }
            Link { to: Route::Messages {}, "Messages" }
            Link { to: Route::Activities {}, "Activities" }
            Link { to: Route::Community {}, "Community" }
            Link { to: Route::Resources {}, "Resources" }
            Link { to: Route::Profile {}, "Profile" }
        }
        {children}
    }
}

/// Unknown paths land on the dashboard when signed in, the landing page
/// otherwise.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }
    if state.user.is_some() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Landing {});
    }
    rsx! {}
}
