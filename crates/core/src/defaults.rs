//! Built-in seed content used when no stored configuration exists yet.
//!
//! The seed is deterministic, fixed ids included, so a fresh install always
//! presents the same catalog until an editor saves changes. It is never
//! persisted on its own; only an explicit save writes it out.

use crate::site::{Movie, SiteConfig, SlideAsset};

/// Number of movies in the seed catalog.
pub const DEFAULT_MOVIE_COUNT: usize = 8;

const MOVIE_TITLES: [&str; DEFAULT_MOVIE_COUNT] = [
    "Neon Genesis",
    "Cyber Soul",
    "The Algorithm",
    "Binary Sunset",
    "Silicon Dreams",
    "Data Heist",
    "Virtual Reality",
    "Chrome Heart",
];

const MOVIE_DESCRIPTION: &str =
    "In a world dominated by AI, one rogue program decides to rewrite history.";

const MOVIE_VIDEO_URL: &str =
    "https://archive.org/download/BigBuckBunny_124/Content/big_buck_bunny_720p_surround.mp4";

fn landing_slide(id: &str, name: &str, url: &str, color: &str) -> SlideAsset {
    SlideAsset {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        color: color.to_string(),
        quote: None,
    }
}

fn casting_slide(id: &str, name: &str, url: &str, quote: &str) -> SlideAsset {
    SlideAsset {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        color: "#fff".to_string(),
        quote: Some(quote.to_string()),
    }
}

/// The seed movie catalog. Genres rotate Sci-Fi / Action / Drama and the
/// release year steps up after the fourth title.
pub fn default_movies() -> Vec<Movie> {
    MOVIE_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| Movie {
            id: format!("mov-{i}"),
            title: (*title).to_string(),
            thumbnail: format!("https://picsum.photos/seed/{}/400/600", i + 50),
            video_url: MOVIE_VIDEO_URL.to_string(),
            genre: match i % 3 {
                0 => "Sci-Fi",
                1 => "Action",
                _ => "Drama",
            }
            .to_string(),
            year: 2024 + (i / 4) as i32,
            description: MOVIE_DESCRIPTION.to_string(),
        })
        .collect()
}

/// The complete seed configuration: landing slideshow, casting slideshow,
/// and the movie catalog.
pub fn default_site_config() -> SiteConfig {
    SiteConfig {
        landing_slides: vec![
            landing_slide(
                "1",
                "CYBER SOUL",
                "https://images.unsplash.com/photo-1626814026160-2237a95fc5a0?q=80&w=2670&auto=format&fit=crop",
                "#bc13fe",
            ),
            landing_slide(
                "2",
                "NEON HORIZON",
                "https://images.unsplash.com/photo-1535016120720-40c6874c3b13?q=80&w=2664&auto=format&fit=crop",
                "#00f3ff",
            ),
            landing_slide(
                "3",
                "CHROME HEART",
                "https://images.unsplash.com/photo-1504639725590-34d0984388bd?q=80&w=2574&auto=format&fit=crop",
                "#ffffff",
            ),
            landing_slide(
                "4",
                "VELOCITY",
                "https://images.unsplash.com/photo-1614726365723-49faaa5f26c3?q=80&w=2670&auto=format&fit=crop",
                "#ff0055",
            ),
        ],
        casting_slides: vec![
            casting_slide(
                "c1",
                "Slide 1",
                "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1964&auto=format&fit=crop",
                "UNLEASH YOUR POTENTIAL",
            ),
            casting_slide(
                "c2",
                "Slide 2",
                "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?q=80&w=1964&auto=format&fit=crop",
                "THE WORLD IS WATCHING",
            ),
            casting_slide(
                "c3",
                "Slide 3",
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=1887&auto=format&fit=crop",
                "BECOME THE ICON",
            ),
        ],
        movies: default_movies(),
    }
}
