//! Stand-in values used when a generation step comes back short.

use rand::Rng;

/// Image host used for stand-in illustrations.
pub const DEFAULT_FALLBACK_HOST: &str = "images.pexels.com";

const PHOTO_ID_RANGE: u32 = 1_000_000;

/// Image prompt for a scene the prompt step did not cover.
///
/// # Examples
///
/// ```
/// use fabulist_pipeline::fallback_prompt;
///
/// assert_eq!(
///     fallback_prompt("cartoon", "The fox leaps."),
///     "cartoon illustration of: The fox leaps."
/// );
/// ```
pub fn fallback_prompt(art_style: &str, scene_text: &str) -> String {
    format!("{} illustration of: {}", art_style, scene_text)
}

/// Random stock photo URL on `host`.
pub fn fallback_image_url(host: &str) -> String {
    fallback_image_url_with(host, &mut rand::thread_rng())
}

/// Random stock photo URL on `host`, drawing from `rng`.
pub fn fallback_image_url_with<R: Rng + ?Sized>(host: &str, rng: &mut R) -> String {
    let photo = rng.gen_range(0..PHOTO_ID_RANGE);
    let file = rng.gen_range(0..PHOTO_ID_RANGE);
    format!(
        "https://{}/photos/{}/pexels-photo-{}.jpeg?auto=compress&cs=tinysrgb&w=1024",
        host, photo, file
    )
}
