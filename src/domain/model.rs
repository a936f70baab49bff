use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use super::FormError;

/// Which of the two mutually exclusive input sub-panels is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RequestMode {
    #[default]
    FromCatalogue,
    ChapterByChapter,
}

impl RequestMode {
    pub const ALL: [RequestMode; 2] = [RequestMode::FromCatalogue, RequestMode::ChapterByChapter];
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestMode::FromCatalogue => "From catalogue",
            RequestMode::ChapterByChapter => "Chapter by chapter",
        })
    }
}

/// Which source site tab is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SiteKind {
    #[default]
    Jjwxc,
    Lofter,
}

impl SiteKind {
    pub const ALL: [SiteKind; 2] = [SiteKind::Jjwxc, SiteKind::Lofter];
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SiteKind::Jjwxc => "JJWXC",
            SiteKind::Lofter => "Lofter",
        })
    }
}

/// What a Lofter URL points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LofterSource {
    #[default]
    Collection,
    Blog,
    Post,
}

impl LofterSource {
    pub const ALL: [LofterSource; 3] =
        [LofterSource::Collection, LofterSource::Blog, LofterSource::Post];
}

impl fmt::Display for LofterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LofterSource::Collection => "Collection",
            LofterSource::Blog => "Blog",
            LofterSource::Post => "Post",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    #[default]
    Jjwxc,
    Lofter { source: LofterSource },
}

impl Site {
    pub fn kind(&self) -> SiteKind {
        match self {
            Site::Jjwxc => SiteKind::Jjwxc,
            Site::Lofter { .. } => SiteKind::Lofter,
        }
    }

    /// Example shown under the catalogue field.
    pub fn helper(&self) -> &'static str {
        match self {
            Site::Jjwxc => {
                "The URL of the book, e.g. https://www.jjwxc.net/onebook.php?novelid=xxxxxx"
            }
            Site::Lofter {
                source: LofterSource::Collection,
            } => {
                "The URL of the collection, e.g. https://www.lofter.com/front/blog/collection/share?collectionId=xxxx"
            }
            Site::Lofter {
                source: LofterSource::Blog,
            } => "The URL of the blog, e.g. https://xxxx.lofter.com/",
            Site::Lofter {
                source: LofterSource::Post,
            } => "The URL of the post, e.g. https://xxxx.lofter.com/post/xxxx",
        }
    }

    /// JJWXC takes a URL or a bare novel ID, Lofter only takes URLs.
    pub fn parse_ref(&self, input: &str) -> Result<CatalogueRef, FormError> {
        let reference = CatalogueRef::parse(input)?;
        match (self, &reference) {
            (Site::Lofter { .. }, CatalogueRef::NovelId(_)) => {
                Err(FormError::MalformedCatalogueRef(input.trim().to_string()))
            }
            _ => Ok(reference),
        }
    }
}

/// Snapshot of every field of the form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub author: String,
    pub save_dir: Option<PathBuf>,
    pub preface: String,
    pub filename_format: String,
    pub start_chapter: String,
    pub mode: RequestMode,
    pub site: Site,
    /// Catalogue field of the open site tab
    pub catalogue_ref: String,
    pub chapter_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueRef {
    NovelId(u64),
    Url(Url),
}

impl CatalogueRef {
    /// Accepts either a bare numeric novel ID or an http(s) URL.
    pub fn parse(input: &str) -> Result<Self, FormError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(FormError::EmptyCatalogueRef);
        }

        if input.chars().all(|c| c.is_ascii_digit()) {
            return input
                .parse()
                .map(CatalogueRef::NovelId)
                .map_err(|_| FormError::MalformedCatalogueRef(input.to_string()));
        }

        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
                Ok(CatalogueRef::Url(url))
            }
            _ => Err(FormError::MalformedCatalogueRef(input.to_string())),
        }
    }

    /// The numeric novel ID, either given directly or as a `novelid` query parameter.
    pub fn novel_id(&self) -> Option<u64> {
        match self {
            CatalogueRef::NovelId(id) => Some(*id),
            CatalogueRef::Url(url) => url
                .query_pairs()
                .find(|(key, _)| key == "novelid")
                .and_then(|(_, value)| value.parse().ok()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookProps {
    pub filepath: PathBuf,
    pub name: String,
    pub author: String,
    pub start_chapter: u32,
    pub preface: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestTarget {
    Catalogue { site: Site, reference: CatalogueRef },
    ChapterByChapter { site: Site, input: String },
}

impl RequestTarget {
    pub fn mode(&self) -> RequestMode {
        match self {
            RequestTarget::Catalogue { .. } => RequestMode::FromCatalogue,
            RequestTarget::ChapterByChapter { .. } => RequestMode::ChapterByChapter,
        }
    }

    pub fn site(&self) -> Site {
        match self {
            RequestTarget::Catalogue { site, .. } | RequestTarget::ChapterByChapter { site, .. } => {
                *site
            }
        }
    }
}

/// A validated job, ready for whatever performs the actual download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub book: BookProps,
    pub target: RequestTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_novel_id() {
        assert_eq!(CatalogueRef::parse(" 123456 "), Ok(CatalogueRef::NovelId(123456)));
    }

    #[test]
    fn test_parse_catalogue_url() {
        let parsed = CatalogueRef::parse("https://www.jjwxc.net/onebook.php?novelid=654321").unwrap();
        assert!(matches!(parsed, CatalogueRef::Url(_)));
        assert_eq!(parsed.novel_id(), Some(654321));

        let no_id = CatalogueRef::parse("http://example.com/book/1").unwrap();
        assert_eq!(no_id.novel_id(), None);
    }

    #[test]
    fn test_parse_rejects_bad_refs() {
        assert_eq!(CatalogueRef::parse("   "), Err(FormError::EmptyCatalogueRef));
        assert_eq!(
            CatalogueRef::parse("not a url"),
            Err(FormError::MalformedCatalogueRef("not a url".into()))
        );
        assert!(matches!(
            CatalogueRef::parse("ftp://example.com/book"),
            Err(FormError::MalformedCatalogueRef(_))
        ));
        // does not fit in u64
        assert!(matches!(
            CatalogueRef::parse("99999999999999999999999"),
            Err(FormError::MalformedCatalogueRef(_))
        ));
    }

    #[test]
    fn test_site_specific_refs() {
        assert_eq!(Site::Jjwxc.parse_ref("123"), Ok(CatalogueRef::NovelId(123)));

        let lofter = Site::Lofter {
            source: LofterSource::Collection,
        };
        assert_eq!(
            lofter.parse_ref(" 123 "),
            Err(FormError::MalformedCatalogueRef("123".into()))
        );
        let url = "https://www.lofter.com/front/blog/collection/share?collectionId=77";
        assert!(matches!(lofter.parse_ref(url), Ok(CatalogueRef::Url(_))));
        assert_eq!(lofter.parse_ref(""), Err(FormError::EmptyCatalogueRef));
    }

    #[test]
    fn test_site_helpers_follow_source() {
        assert!(Site::Jjwxc.helper().contains("jjwxc.net"));
        let helpers: Vec<_> = LofterSource::ALL
            .iter()
            .map(|source| Site::Lofter { source: *source }.helper())
            .collect();
        assert!(helpers[0].contains("collection"));
        assert!(helpers[1].contains("blog"));
        assert!(helpers[2].contains("post"));
        assert_eq!(Site::Lofter { source: LofterSource::Blog }.kind(), SiteKind::Lofter);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(RequestMode::default(), RequestMode::FromCatalogue);
        assert_eq!(RequestMode::FromCatalogue.to_string(), "From catalogue");
        assert_eq!(RequestMode::ChapterByChapter.to_string(), "Chapter by chapter");
    }
}
