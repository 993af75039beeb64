pub mod count;
pub mod run;
pub mod signup;
pub mod videos;

use dev404_core::HttpSignupApi;

/// Build the backend client: `--backend` wins, then `DEV404_BACKEND_URL`,
/// then the default localhost URL.
pub fn make_api(backend: Option<&str>) -> HttpSignupApi {
    match backend {
        Some(url) => HttpSignupApi::new(url),
        None => HttpSignupApi::from_env(),
    }
}
