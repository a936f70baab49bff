pub mod form;

pub use form::{FormMessage, RequesterForm};

use iced::{
    widget::{
        button, column, container, pick_list, row, text, text_editor, text_input, tooltip, Space,
    },
    Alignment, Element, Length, Theme,
};

use crate::config::FormConfig;
use crate::domain::{LofterSource, RequestMode, Site, SiteKind};

const LABEL_WIDTH: f32 = 160.0;

/// Main view state
pub struct RequesterView {
    pub form: RequesterForm,
    pub preface_editor: text_editor::Content,
    pub chapter_input_label: String,
    pub status_message: String,
    pub status_is_error: bool,
    pub is_submitting: bool,
}

impl Default for RequesterView {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    Form(FormMessage),
    PrefaceEdited(text_editor::Action),
    BrowsePressed,
    DownloadPressed,
}

impl RequesterView {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: RequesterForm::new(config),
            preface_editor: text_editor::Content::new(),
            chapter_input_label: config.chapter_input_label.clone(),
            status_message: "Fill in the book properties and press Download".to_string(),
            status_is_error: false,
            is_submitting: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = message.into();
        self.status_is_error = is_error;
    }

    pub fn update(&mut self, message: ViewMessage) {
        match message {
            ViewMessage::Form(FormMessage::PrefaceChanged(preface)) => {
                // keep the editor showing what collect() returns
                self.preface_editor = text_editor::Content::with_text(&preface);
                self.form.update(FormMessage::PrefaceChanged(preface));
            }
            ViewMessage::Form(form_msg) => self.form.update(form_msg),
            ViewMessage::PrefaceEdited(action) => {
                let is_edit = action.is_edit();
                self.preface_editor.perform(action);
                if is_edit {
                    self.form
                        .update(FormMessage::PrefaceChanged(self.preface_editor.text()));
                }
            }
            ViewMessage::BrowsePressed | ViewMessage::DownloadPressed => {
                // Will be handled by the app
            }
        }
    }

    pub fn view(&self) -> Element<'_, ViewMessage> {
        column![
            self.site_tabs(),
            container(self.book_properties())
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box),
            container(self.request_settings())
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box),
            self.footer(),
        ]
        .padding(20)
        .spacing(12)
        .into()
    }

    fn site_tabs(&self) -> Element<'_, ViewMessage> {
        let open = self.form.site().kind();
        let tabs: Vec<Element<'_, ViewMessage>> = self
            .form
            .sites()
            .iter()
            .map(|kind| {
                let style: fn(&Theme, button::Status) -> button::Style = if *kind == open {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(kind.to_string()))
                    .style(style)
                    .padding([6, 16])
                    .on_press(ViewMessage::Form(FormMessage::SiteSelected(*kind)))
                    .into()
            })
            .collect();
        row(tabs).spacing(4).into()
    }

    fn book_properties(&self) -> Element<'_, ViewMessage> {
        let form = &self.form;
        let save_dir = form
            .save_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();

        column![
            text("Book properties").size(18),
            row![
                label("Name:"),
                text_input("", form.name())
                    .on_input(|value| ViewMessage::Form(FormMessage::NameChanged(value)))
                    .width(Length::Fixed(200.0)),
                text("Author:"),
                text_input("", form.author())
                    .on_input(|value| ViewMessage::Form(FormMessage::AuthorChanged(value)))
                    .width(Length::Fill),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            row![
                label("Save to"),
                text_input("Select a folder", &save_dir)
                    .on_input(|value| ViewMessage::Form(FormMessage::SaveDirTyped(value)))
                    .width(Length::Fill),
                button("Browse...").on_press(ViewMessage::BrowsePressed),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            row![
                label("Filename Format"),
                column![
                    text_input("", form.filename_format()).on_input(|value| {
                        ViewMessage::Form(FormMessage::FilenameFormatChanged(value))
                    }),
                    text("{author}: author, {name}: book name").size(12),
                ]
                .spacing(4)
                .width(Length::Fill),
            ]
            .spacing(10),
            row![label("Filepath:"), text(form.filepath_preview())].spacing(10),
            row![
                label("Chapter index starts at"),
                text_input("1", form.start_chapter())
                    .on_input(|value| ViewMessage::Form(FormMessage::StartChapterChanged(value)))
                    .width(Length::Fixed(60.0)),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            text("Preface (content before first chapter):"),
            text_editor(&self.preface_editor)
                .on_action(ViewMessage::PrefaceEdited)
                .height(Length::Fixed(120.0)),
        ]
        .spacing(8)
        .into()
    }

    fn request_settings(&self) -> Element<'_, ViewMessage> {
        let form = &self.form;

        let site = form.site();
        let (ref_label, ref_tip) = match site {
            Site::Jjwxc => ("Catalogue (URL or novel ID):", "Catalogue URL or novel ID"),
            Site::Lofter { .. } => ("URL:", "Lofter URL"),
        };

        let mode_panel: Element<'_, ViewMessage> = match form.mode() {
            RequestMode::FromCatalogue => column![
                tooltip(
                    text(ref_label),
                    container(text(ref_tip))
                        .padding(6)
                        .style(container::rounded_box),
                    tooltip::Position::Bottom,
                ),
                text_input("https://...", form.catalogue_ref())
                    .on_input(|value| ViewMessage::Form(FormMessage::CatalogueRefChanged(value)))
                    .width(Length::Fill),
                text(site.helper()).size(12),
            ]
            .spacing(6)
            .into(),
            RequestMode::ChapterByChapter => row![
                text(self.chapter_input_label.as_str()),
                text_input("", form.chapter_input())
                    .on_input(|value| ViewMessage::Form(FormMessage::ChapterInputChanged(value)))
                    .width(Length::Fill),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into(),
        };

        let source_row: Element<'_, ViewMessage> = match site.kind() {
            SiteKind::Jjwxc => Space::new().into(),
            SiteKind::Lofter => row![
                label("Source"),
                pick_list(
                    LofterSource::ALL,
                    Some(form.lofter_source()),
                    |source| ViewMessage::Form(FormMessage::LofterSourceSelected(source)),
                ),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into(),
        };

        column![
            source_row,
            row![
                label("Request Type"),
                pick_list(form.modes(), Some(form.mode()), |mode| {
                    ViewMessage::Form(FormMessage::ModeSelected(mode))
                }),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            mode_panel,
        ]
        .spacing(10)
        .into()
    }

    fn footer(&self) -> Element<'_, ViewMessage> {
        let status = if self.status_is_error {
            text(self.status_message.as_str()).style(text::danger)
        } else {
            text(self.status_message.as_str())
        };

        row![
            status.size(14).width(Length::Fill),
            Space::new().width(Length::Fixed(10.0)),
            button("Download")
                .on_press_maybe((!self.is_submitting).then_some(ViewMessage::DownloadPressed))
                .padding([10, 20]),
        ]
        .align_y(Alignment::Center)
        .into()
    }
}

fn label(content: &str) -> Element<'_, ViewMessage> {
    text(content).width(Length::Fixed(LABEL_WIDTH)).into()
}
