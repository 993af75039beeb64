use dev404_core::SignupApi;

pub fn run(backend: Option<&str>, json: bool) {
    let api = super::make_api(backend);
    match api.fetch_count() {
        Ok(count) => {
            if json {
                println!("{}", serde_json::json!({ "count": count }));
            } else {
                println!("{count} fans and counting");
            }
        }
        Err(e) => {
            eprintln!("Failed to fetch signup count: {e}");
            std::process::exit(1);
        }
    }
}
