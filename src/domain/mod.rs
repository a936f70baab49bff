pub mod error;
pub mod model;

pub use error::{AppError, FormError};
pub use model::{
    BookProps, CatalogueRef, DownloadRequest, FormValues, LofterSource, RequestMode, RequestTarget,
    Site, SiteKind,
};
