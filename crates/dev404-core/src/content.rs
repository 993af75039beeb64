//! Static site copy: albums, bio, social links.
//!
//! Presentation data only. Nothing here is fetched or mutated at runtime.

pub const HERO_TITLE: &str = "DEV 404";
pub const HERO_TAGLINE: &str = "Full-Stack Web Developer Turned Sonic Architect";

pub const CONTACT_EMAIL: &str = "DEV@devmusic404.com";

/// External form-handling endpoint for the fanbase mailing list. Displayed as
/// an opaque collaborator; this crate never posts to it.
pub const FAN_FORM_URL: &str = "https://formspree.io/f/xkgzpnvw";

pub const BIO: &str = "DEV 404 is a full-stack web developer turned sonic architect. \
With a background in code and a heart wired for creation, he blends tech and music \
into one seamless experience. More than just an artist — he's a Full-Stack Wizard \
of sound and syntax, building from the static.";

/// One album card on the music tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Album {
    pub title: &'static str,
    pub blurb: &'static str,
    pub embed_url: &'static str,
}

/// Release-page order, newest first.
pub const ALBUMS: &[Album] = &[
    Album {
        title: "BROKEN",
        blurb: "",
        embed_url: "https://www.youtube.com/embed/videoseries?si=sNUcSJ7p3U35BQCV&list=OLAK5uy_mgbjUkaeNGAw52C-6PSWgUJ_cYoJp4skI&fs=1&modestbranding=1&rel=0",
    },
    Album {
        title: "Movies, Lies, and War",
        blurb: "New Album",
        embed_url: "https://www.youtube.com/embed/JbC7SXparFE?si=Q1WNdrrka4fYhEX-&fs=1&modestbranding=1&rel=0",
    },
    Album {
        title: "Fractured Horizons",
        blurb: "Album",
        embed_url: "https://www.youtube.com/embed/videoseries?si=dmK9mknN0vEmsbPL&list=OLAK5uy_mMAopvO3gpyJ5M143_JGK7WGzctI-vm2M&fs=1&modestbranding=1&rel=0",
    },
    Album {
        title: "Hello, World!",
        blurb: "Debut Album",
        embed_url: "https://www.youtube.com/embed/videoseries?si=Y_KMn3roPYpPBG78&list=OLAK5uy_l5VwiQtYvUpLvL9eC1qym-mN5oAC_hgo0&fs=1&modestbranding=1&rel=0",
    },
];

/// One social media destination on the contact tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "YouTube",
        url: "https://www.youtube.com/@DEV_Music_404",
    },
    SocialLink {
        label: "Spotify",
        url: "https://open.spotify.com/artist/7lvmTahHl3ViENKZrWjsG4?si=uoxP-bxMQ_yQm_OsxkBBaQ",
    },
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/profile.php?id=61578195951086",
    },
    SocialLink {
        label: "X",
        url: "https://twitter.com/dev_40435715",
    },
    SocialLink {
        label: "TikTok",
        url: "https://www.tiktok.com/@X_dev404_X",
    },
];
