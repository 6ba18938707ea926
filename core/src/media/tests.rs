use super::*;
use crate::content::MediaRecord;

fn record(url: &str) -> MediaRecord {
    MediaRecord::new(url)
}

fn hinted(url: &str, hint: &str) -> MediaRecord {
    MediaRecord::with_hint(url, hint)
}

#[test]
fn test_explicit_hint_overrides_sniffing() {
    // URL looks like nothing special; the hint decides.
    assert_eq!(
        classify(&hinted("https://example.com/x", "slides")),
        MediaKind::Slides
    );
    // URL looks like YouTube; the hint still wins.
    assert_eq!(
        classify(&hinted("https://www.youtube.com/watch?v=abc", "linkedin_post")),
        MediaKind::LinkedIn
    );
}

#[test]
fn test_hint_synonyms() {
    let cases = [
        ("google_slides", MediaKind::Slides),
        ("slides", MediaKind::Slides),
        ("linkedin_post", MediaKind::LinkedIn),
        ("linkedin", MediaKind::LinkedIn),
        ("google_drive_video", MediaKind::GDrive),
        ("google_drive", MediaKind::GDrive),
        ("youtube", MediaKind::YouTube),
        ("yt", MediaKind::YouTube),
        ("image", MediaKind::Image),
        ("video", MediaKind::Video),
        ("link", MediaKind::Link),
    ];
    for (hint, expected) in cases {
        assert_eq!(classify(&hinted("https://example.com/x", hint)), expected);
    }
}

#[test]
fn test_hint_matching_is_case_insensitive() {
    assert_eq!(
        classify(&hinted("https://example.com/x", "YouTube")),
        MediaKind::YouTube
    );
}

#[test]
fn test_unrecognized_hint_falls_back_to_sniffing() {
    assert_eq!(
        classify(&hinted("https://youtu.be/abc123", "banana")),
        MediaKind::YouTube
    );
}

#[test]
fn test_local_hint_inspects_extension() {
    assert_eq!(classify(&hinted("photo.PNG", "local")), MediaKind::Image);
    assert_eq!(classify(&hinted("clip.MOV", "local_path")), MediaKind::Video);
    assert_eq!(classify(&hinted("report.pdf", "local")), MediaKind::Link);
}

#[test]
fn test_sniff_providers() {
    let cases = [
        ("https://www.youtube.com/watch?v=abc123", MediaKind::YouTube),
        ("https://youtu.be/abc123", MediaKind::YouTube),
        ("https://www.youtube.com/playlist?list=PL1", MediaKind::YouTube),
        ("https://drive.google.com/file/d/XYZ/view", MediaKind::GDrive),
        (
            "https://docs.google.com/presentation/d/DECK/edit",
            MediaKind::Slides,
        ),
        ("https://onedrive.live.com/view.aspx?resid=1", MediaKind::OneDrive),
        ("https://1drv.ms/v/s!abc", MediaKind::OneDrive),
        (
            "https://www.linkedin.com/posts/someone_activity-123-xyz",
            MediaKind::LinkedIn,
        ),
    ];
    for (url, expected) in cases {
        assert_eq!(classify(&record(url)), expected, "url: {url}");
    }
}

#[test]
fn test_sniff_extensions() {
    assert_eq!(
        classify(&record("https://example.com/shot.jpg")),
        MediaKind::Image
    );
    assert_eq!(classify(&record("media/demo.mp4")), MediaKind::Video);
    assert_eq!(classify(&record("/assets/logo.svg")), MediaKind::Image);
}

#[test]
fn test_unclassifiable_falls_back_to_link() {
    assert_eq!(classify(&record("")), MediaKind::Link);
    assert_eq!(classify(&record("not a url at all")), MediaKind::Link);
    assert_eq!(classify(&record("https://example.com/page")), MediaKind::Link);
}

#[test]
fn test_classify_is_deterministic() {
    let inputs = [
        "",
        "garbage :: ///",
        "https://youtu.be/abc123",
        "photo.png",
        "https://www.linkedin.com/feed/update/urn:li:activity:42/",
    ];
    for url in inputs {
        let rec = record(url);
        assert_eq!(classify(&rec), classify(&rec), "url: {url}");
    }
}

#[test]
fn test_youtube_watch_and_short_form_agree() {
    let opts = EmbedOptions::inline();
    let watch = embed(
        &record("https://www.youtube.com/watch?v=abc123"),
        MediaKind::YouTube,
        opts,
    );
    let short = embed(&record("https://youtu.be/abc123"), MediaKind::YouTube, opts);
    assert_eq!(watch.embed_url, short.embed_url);
    assert!(
        watch
            .embed_url
            .unwrap()
            .starts_with("https://www.youtube.com/embed/abc123?")
    );
}

#[test]
fn test_youtube_embed_playback_flags() {
    let rec = record("https://youtu.be/abc123");
    let inline = embed(&rec, MediaKind::YouTube, EmbedOptions::inline())
        .embed_url
        .unwrap();
    assert!(inline.ends_with("autoplay=0&mute=1"));
    let expanded = embed(&rec, MediaKind::YouTube, EmbedOptions::expanded())
        .embed_url
        .unwrap();
    assert!(expanded.ends_with("autoplay=1&mute=0"));
}

#[test]
fn test_youtube_playlist_embeds_as_videoseries() {
    let rec = record("https://www.youtube.com/playlist?list=PLxyz");
    let result = embed(&rec, MediaKind::YouTube, EmbedOptions::inline());
    assert_eq!(
        result.embed_url.as_deref(),
        Some("https://www.youtube.com/embed/videoseries?list=PLxyz")
    );
}

#[test]
fn test_youtube_without_id_yields_no_embed() {
    let rec = record("https://www.youtube.com/watch");
    let result = embed(&rec, MediaKind::YouTube, EmbedOptions::inline());
    assert_eq!(result.embed_url, None);
}

#[test]
fn test_gdrive_embed_from_path_and_query() {
    let by_path = embed(
        &record("https://drive.google.com/file/d/XYZ/view"),
        MediaKind::GDrive,
        EmbedOptions::inline(),
    );
    assert_eq!(
        by_path.embed_url.as_deref(),
        Some("https://drive.google.com/file/d/XYZ/preview")
    );
    let by_query = embed(
        &record("https://drive.google.com/open?id=XYZ"),
        MediaKind::GDrive,
        EmbedOptions::inline(),
    );
    assert_eq!(by_query.embed_url, by_path.embed_url);
}

#[test]
fn test_gdrive_without_file_id_yields_no_embed() {
    let rec = record("https://drive.google.com/drive/folders/shared");
    let result = resolve(&rec, EmbedOptions::inline());
    assert_eq!(result.kind, MediaKind::GDrive);
    assert_eq!(result.embed_url, None);
    assert!(result.kind.requires_embed());
}

#[test]
fn test_drive_urls_for_resume_links() {
    let urls = drive_urls("https://drive.google.com/file/d/FILE123/view?usp=sharing").unwrap();
    assert_eq!(urls.file_id, "FILE123");
    assert_eq!(urls.view_url, "https://drive.google.com/file/d/FILE123/view");
    assert_eq!(
        urls.download_url,
        "https://drive.google.com/uc?export=download&id=FILE123"
    );
    // Bare /d/ form is also recognized.
    assert!(drive_urls("https://drive.google.com/d/FILE123").is_some());
    assert!(drive_urls("https://example.com/resume.pdf").is_none());
}

#[test]
fn test_slides_embed_variants() {
    let normal = embed(
        &record("https://docs.google.com/presentation/d/DECK/edit"),
        MediaKind::Slides,
        EmbedOptions::inline(),
    );
    assert_eq!(
        normal.embed_url.as_deref(),
        Some("https://docs.google.com/presentation/d/DECK/embed?start=true&loop=true&delayms=4000")
    );
    let published = embed(
        &record("https://docs.google.com/presentation/d/e/2PACX-abc/pub"),
        MediaKind::Slides,
        EmbedOptions::inline(),
    );
    assert_eq!(
        published.embed_url.as_deref(),
        Some(
            "https://docs.google.com/presentation/d/e/2PACX-abc/embed?start=true&loop=true&delayms=4000"
        )
    );
    let already = embed(
        &record("https://docs.google.com/presentation/d/DECK/embed"),
        MediaKind::Slides,
        EmbedOptions::inline(),
    );
    assert_eq!(
        already.embed_url.as_deref(),
        Some(
            "https://docs.google.com/presentation/d/DECK/embed?start=true&loop=true&delayms=4000"
        )
    );
}

#[test]
fn test_slides_unparseable_url_yields_no_embed() {
    let rec = record("docs.google.com/presentation/d/DECK");
    let result = embed(&rec, MediaKind::Slides, EmbedOptions::inline());
    assert_eq!(result.embed_url, None);
}

#[test]
fn test_linkedin_activity_token() {
    let rec = record("https://www.linkedin.com/posts/someone_title-activity-7031234567890-xyz");
    let result = embed(&rec, MediaKind::LinkedIn, EmbedOptions::inline());
    assert_eq!(
        result.embed_url.as_deref(),
        Some("https://www.linkedin.com/embed/feed/update/urn:li:activity:7031234567890")
    );
}

#[test]
fn test_linkedin_ugc_post_token_wins_over_activity() {
    let urn = extract_urn("https://www.linkedin.com/posts/x_ugcPost-111-activity-222").unwrap();
    assert_eq!(urn, "urn:li:ugcPost:111");
}

#[test]
fn test_linkedin_activity_path_segment() {
    let urn = extract_urn("https://www.linkedin.com/feed/update/activity/424242/").unwrap();
    assert_eq!(urn, "urn:li:activity:424242");
}

#[test]
fn test_linkedin_raw_urn_strips_query() {
    let urn =
        extract_urn("https://www.linkedin.com/embed/feed/update/urn:li:share:99?trk=x").unwrap();
    assert_eq!(urn, "urn:li:share:99");
}

#[test]
fn test_linkedin_profile_url_yields_no_embed() {
    let rec = record("https://www.linkedin.com/in/someone");
    let result = resolve(&rec, EmbedOptions::inline());
    assert_eq!(result.kind, MediaKind::LinkedIn);
    assert_eq!(result.embed_url, None);
}

#[test]
fn test_onedrive_embed_rules() {
    // Already-embeddable URLs pass through untouched.
    let keep = "https://onedrive.live.com/embed?resid=1";
    assert_eq!(
        embed(&record(keep), MediaKind::OneDrive, EmbedOptions::inline()).embed_url
            .as_deref(),
        Some(keep)
    );
    // view.aspx has a direct substitution.
    let swapped = embed(
        &record("https://onedrive.live.com/view.aspx?resid=1"),
        MediaKind::OneDrive,
        EmbedOptions::inline(),
    );
    assert_eq!(
        swapped.embed_url.as_deref(),
        Some("https://onedrive.live.com/embed?resid=1")
    );
    // Anything else cannot be embedded.
    let none = embed(
        &record("https://1drv.ms/v/s!abc"),
        MediaKind::OneDrive,
        EmbedOptions::inline(),
    );
    assert_eq!(none.embed_url, None);
}

#[test]
fn test_direct_media_embeds_as_normalized_url() {
    let absolute = embed(
        &record("https://example.com/shot.jpg"),
        MediaKind::Image,
        EmbedOptions::inline(),
    );
    assert_eq!(absolute.embed_url.as_deref(), Some("https://example.com/shot.jpg"));
    let relative = embed(&record("media/demo.mp4"), MediaKind::Video, EmbedOptions::inline());
    assert_eq!(relative.embed_url.as_deref(), Some("/media/demo.mp4"));
}

#[test]
fn test_link_kind_never_embeds() {
    let result = resolve(&record("https://example.com/page"), EmbedOptions::inline());
    assert_eq!(result.kind, MediaKind::Link);
    assert_eq!(result.embed_url, None);
}

#[test]
fn test_normalize_url() {
    assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
    assert_eq!(normalize_url("/media/a.png"), "/media/a.png");
    assert_eq!(normalize_url("media/a.png"), "/media/a.png");
}

#[test]
fn test_link_card_strips_www_and_builds_favicon() {
    let card = link_card("https://www.example.com/some/page");
    assert_eq!(card.domain, "example.com");
    assert_eq!(
        card.favicon_url.as_deref(),
        Some("https://icons.duckduckgo.com/ip3/example.com.ico")
    );
}

#[test]
fn test_link_card_degrades_on_parse_failure() {
    let card = link_card("not a url");
    assert_eq!(card.domain, "not a url");
    assert_eq!(card.favicon_url, None);
}
