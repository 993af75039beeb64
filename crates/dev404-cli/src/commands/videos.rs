use dev404_core::VIDEO_LIBRARY;

pub fn run(json: bool) {
    if json {
        // Static catalog; serialization cannot fail.
        let out = serde_json::to_string_pretty(VIDEO_LIBRARY).expect("catalog serializes");
        println!("{out}");
        return;
    }

    for (i, video) in VIDEO_LIBRARY.iter().enumerate() {
        println!("{:>2}. {:<24} {}", i + 1, video.title, video.watch_url());
        if !video.description.is_empty() {
            println!("    {}", video.description);
        }
    }
}
