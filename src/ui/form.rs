use std::path::PathBuf;

use crate::config::FormConfig;
use crate::domain::{FormValues, LofterSource, RequestMode, Site, SiteKind};
use crate::utils::{build_filepath, preview_filename};

/// Field state of the requester form.
///
/// Holds exactly what the user typed; nothing is validated until the values
/// are collected and handed to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterForm {
    name: String,
    author: String,
    save_dir: Option<PathBuf>,
    preface: String,
    filename_format: String,
    start_chapter: String,
    mode: RequestMode,
    site: SiteKind,
    lofter_source: LofterSource,
    jjwxc_ref: String,
    lofter_ref: String,
    chapter_input: String,
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    NameChanged(String),
    AuthorChanged(String),
    SaveDirTyped(String),
    SaveDirSelected(PathBuf),
    PrefaceChanged(String),
    FilenameFormatChanged(String),
    StartChapterChanged(String),
    ModeSelected(RequestMode),
    SiteSelected(SiteKind),
    LofterSourceSelected(LofterSource),
    /// Edits the catalogue field of the open site tab
    CatalogueRefChanged(String),
    ChapterInputChanged(String),
}

impl Default for RequesterForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl RequesterForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            save_dir: config.initial_save_dir.clone(),
            preface: String::new(),
            filename_format: config.filename_format.clone(),
            start_chapter: config.start_chapter.to_string(),
            mode: RequestMode::default(),
            site: SiteKind::default(),
            lofter_source: LofterSource::default(),
            jjwxc_ref: String::new(),
            lofter_ref: String::new(),
            chapter_input: String::new(),
        }
    }

    pub fn update(&mut self, message: FormMessage) {
        match message {
            FormMessage::NameChanged(name) => self.name = name,
            FormMessage::AuthorChanged(author) => self.author = author,
            FormMessage::SaveDirTyped(path) => {
                self.save_dir = if path.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(path))
                };
            }
            FormMessage::SaveDirSelected(path) => self.save_dir = Some(path),
            FormMessage::PrefaceChanged(preface) => self.preface = preface,
            FormMessage::FilenameFormatChanged(format) => self.filename_format = format,
            FormMessage::StartChapterChanged(start) => self.start_chapter = start,
            FormMessage::ModeSelected(mode) => self.mode = mode,
            FormMessage::SiteSelected(site) => self.site = site,
            FormMessage::LofterSourceSelected(source) => self.lofter_source = source,
            FormMessage::CatalogueRefChanged(reference) => match self.site {
                SiteKind::Jjwxc => self.jjwxc_ref = reference,
                SiteKind::Lofter => self.lofter_ref = reference,
            },
            FormMessage::ChapterInputChanged(input) => self.chapter_input = input,
        }
    }

    /// Read back every current value.
    pub fn collect(&self) -> FormValues {
        FormValues {
            name: self.name.clone(),
            author: self.author.clone(),
            save_dir: self.save_dir.clone(),
            preface: self.preface.clone(),
            filename_format: self.filename_format.clone(),
            start_chapter: self.start_chapter.clone(),
            mode: self.mode,
            site: self.site(),
            catalogue_ref: self.catalogue_ref().to_string(),
            chapter_input: self.chapter_input.clone(),
        }
    }

    pub fn filepath_preview(&self) -> String {
        let filename = preview_filename(&self.filename_format, &self.name, &self.author);
        build_filepath(self.save_dir.as_deref(), &filename)
            .display()
            .to_string()
    }

    pub fn modes(&self) -> &'static [RequestMode] {
        &RequestMode::ALL
    }

    pub fn mode(&self) -> RequestMode {
        self.mode
    }

    pub fn is_active(&self, mode: RequestMode) -> bool {
        self.mode == mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn save_dir(&self) -> Option<&PathBuf> {
        self.save_dir.as_ref()
    }

    pub fn filename_format(&self) -> &str {
        &self.filename_format
    }

    pub fn start_chapter(&self) -> &str {
        &self.start_chapter
    }

    pub fn sites(&self) -> &'static [SiteKind] {
        &SiteKind::ALL
    }

    /// The open site tab, with the Lofter source choice folded in.
    pub fn site(&self) -> Site {
        match self.site {
            SiteKind::Jjwxc => Site::Jjwxc,
            SiteKind::Lofter => Site::Lofter {
                source: self.lofter_source,
            },
        }
    }

    pub fn lofter_source(&self) -> LofterSource {
        self.lofter_source
    }

    pub fn catalogue_ref(&self) -> &str {
        match self.site {
            SiteKind::Jjwxc => &self.jjwxc_ref,
            SiteKind::Lofter => &self.lofter_ref,
        }
    }

    pub fn chapter_input(&self) -> &str {
        &self.chapter_input
    }
}
