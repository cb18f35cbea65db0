//! Built-in feed catalog
//!
//! Patterns may use lookaround to anchor the version on surrounding text
//! without including it in the match.

use indexmap::IndexMap;

use crate::feed::error::CatalogError;
use crate::feed::types::Feed;

type FeedEntry = (&'static str, &'static [(&'static str, &'static str)]);

const BUILTIN_FEEDS: &[FeedEntry] = &[
    (
        "aufs",
        &[
            (
                "meta-url",
                "http://sources.gentoo.org/cgi-bin/viewvc.cgi/gentoo-x86/sys-kernel/aufs-sources/",
            ),
            ("meta-pattern", r"aufs-sources-${kseries}.\d+.ebuild"),
            (
                "url",
                "http://sources.gentoo.org/cgi-bin/viewvc.cgi/gentoo-x86/sys-kernel/aufs-sources/${eval-meta-pattern}",
            ),
            ("pattern", r"(?<=AUFS_VERSION=).*"),
        ],
    ),
    (
        // ck is a superset of bfs
        "ck",
        &[
            ("url", "http://ck.kolivas.org/patches/3.0/${kseries}"),
            ("pattern", "${kseries}-ck[0-9]"),
        ],
    ),
    (
        "genpatches",
        &[
            ("url", "http://dev.gentoo.org/~mpagano/genpatches/tarballs/"),
            ("pattern", r"genpatches-${kseries}-\d+"),
        ],
    ),
    (
        "reiser4",
        &[
            (
                "url",
                "http://sourceforge.net/projects/reiser4/files/reiser4-for-linux-3.x/",
            ),
            ("pattern", r"reiser4-for-${kseries}(?:.\d+)?.patch.gz"),
        ],
    ),
    (
        "tuxonice",
        &[
            ("url", "http://tuxonice.nigelcunningham.com.au/downloads/all/"),
            (
                "pattern",
                r"tuxonice-for-linux(?:-head)?-${kseries}\.\d+-\d+-\d+-\d+",
            ),
        ],
    ),
    (
        "uksm",
        &[
            ("meta-meta-url", "http://kerneldedup.org/projects/uksm/download/"),
            ("meta-meta-pattern", r"0\.1\.\d+\.(?:\d+)?"),
            ("meta-url", "http://kerneldedup.org/projects/uksm/download/"),
            (
                "meta-pattern",
                r"(?<=http://kerneldedup.org/projects/uksm/download/uksm/${eval-meta-meta-pattern}/#wpfb-cat-)\d+",
            ),
            (
                "url",
                "http://kerneldedup.org/wp-content/plugins/wp-filebase/wpfb-ajax.php?action=tree&type=browser&base=${eval-meta-pattern}",
            ),
            ("pattern", r"uksm-0\.1\.\d+\.(?:\d+)?-for-v${kseries}.ge.\d+.patch"),
        ],
    ),
];

/// The feeds checked when no catalog is configured
pub fn builtin_catalog() -> Result<Vec<Feed>, CatalogError> {
    BUILTIN_FEEDS
        .iter()
        .map(|(name, entries)| {
            let keys: IndexMap<String, String> = entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            Feed::from_keys(*name, &keys)
        })
        .collect()
}
