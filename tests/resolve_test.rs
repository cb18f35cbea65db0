//! Layered resolution tests against in-memory pages

mod helper;

use helper::{StaticFetcher, feed};
use kpatch_watch::version::resolver::{KSERIES, LayeredResolver, Resolution, UnsupportedReason};
use kpatch_watch::version::template::Placeholders;

const AUFS_LISTING: &str = r#"
<a href="aufs-sources-3.10.5.ebuild">aufs-sources-3.10.5.ebuild</a>
<a href="aufs-sources-3.10.17.ebuild">aufs-sources-3.10.17.ebuild</a>
<a href="aufs-sources-3.9.11.ebuild">aufs-sources-3.9.11.ebuild</a>
"#;

const AUFS_EBUILD: &str = r#"
EAPI=5
AUFS_VERSION=3.10_p20130819
AUFS_TARBALL="aufs-sources-${AUFS_VERSION}.tar.xz"
"#;

fn aufs_feed() -> kpatch_watch::feed::Feed {
    feed(
        "aufs",
        &[
            ("meta-url", "http://gentoo/aufs-sources/"),
            ("meta-pattern", r"aufs-sources-${kseries}.\d+.ebuild"),
            ("url", "http://gentoo/aufs-sources/${eval-meta-pattern}"),
            ("pattern", r"(?<=AUFS_VERSION=).*"),
        ],
    )
}

#[tokio::test]
async fn resolves_single_level_feed() {
    let fetcher = StaticFetcher::new().with_page("U/3.10", "3.10-ck1\n3.10-ck3\n");
    let ck = feed(
        "ck",
        &[("url", "U/${kseries}"), ("pattern", "${kseries}-ck[0-9]")],
    );

    let result = LayeredResolver::new(&fetcher)
        .resolve(&ck, "3.10")
        .await
        .unwrap();

    assert_eq!(result, Resolution::Resolved("3.10-ck3".to_string()));
}

#[tokio::test]
async fn resolves_two_level_feed_through_intermediate_page() {
    let fetcher = StaticFetcher::new()
        .with_page("http://gentoo/aufs-sources/", AUFS_LISTING)
        .with_page(
            "http://gentoo/aufs-sources/aufs-sources-3.10.17.ebuild",
            AUFS_EBUILD,
        );

    let resolver = LayeredResolver::new(&fetcher);
    let mut table = Placeholders::new();
    table.register(KSERIES, "3.10");
    let result = resolver.resolve_with(&aufs_feed(), &mut table).await.unwrap();

    assert_eq!(result, Resolution::Resolved("3.10_p20130819".to_string()));
    assert_eq!(
        table.get("eval-meta-pattern"),
        Some("aufs-sources-3.10.17.ebuild")
    );
    assert_eq!(
        fetcher.requests(),
        vec![
            "http://gentoo/aufs-sources/",
            "http://gentoo/aufs-sources/aufs-sources-3.10.17.ebuild",
        ]
    );
}

#[tokio::test]
async fn missing_intermediate_page_skips_final_level() {
    let fetcher = StaticFetcher::new();

    let result = LayeredResolver::new(&fetcher)
        .resolve(&aufs_feed(), "3.10")
        .await
        .unwrap();

    assert_eq!(result, Resolution::Unsupported(UnsupportedReason::NotFound));
    assert_eq!(fetcher.requests(), vec!["http://gentoo/aufs-sources/"]);
}

#[tokio::test]
async fn unknown_series_yields_no_match() {
    let fetcher = StaticFetcher::new().with_page("http://gentoo/aufs-sources/", AUFS_LISTING);

    let result = LayeredResolver::new(&fetcher)
        .resolve(&aufs_feed(), "4.2")
        .await
        .unwrap();

    assert_eq!(result, Resolution::Unsupported(UnsupportedReason::NoMatch));
    assert_eq!(fetcher.requests(), vec!["http://gentoo/aufs-sources/"]);
}

#[tokio::test]
async fn same_feed_resolves_identically_twice() {
    let fetcher = StaticFetcher::new()
        .with_page("http://gentoo/aufs-sources/", AUFS_LISTING)
        .with_page(
            "http://gentoo/aufs-sources/aufs-sources-3.10.17.ebuild",
            AUFS_EBUILD,
        );
    let aufs = aufs_feed();
    let resolver = LayeredResolver::new(&fetcher);

    let first = resolver.resolve(&aufs, "3.10").await.unwrap();
    let second = resolver.resolve(&aufs, "3.10").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(aufs, aufs_feed());
}
