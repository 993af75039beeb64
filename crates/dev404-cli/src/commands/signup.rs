use dev404_core::{SignupApi, SignupRequest};

pub fn run(email: &str, name: &str, backend: Option<&str>) {
    if email.is_empty() {
        eprintln!("An email address is required.");
        std::process::exit(2);
    }

    let api = super::make_api(backend);
    let request = SignupRequest::new(email, name);
    match api.submit(&request) {
        Ok(message) => println!("{message}"),
        Err(e) => {
            log::debug!("signup failed: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
