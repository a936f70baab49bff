use crate::application::RequestCoordinator;
use crate::config::FormConfig;
use crate::domain::{AppError, DownloadRequest, FormError, RequestTarget};
use crate::ui::{FormMessage, RequesterView, ViewMessage};
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct RequesterApp {
    view: RequesterView,
    coordinator: RequestCoordinator,
    title: String,
}

impl Default for RequesterApp {
    fn default() -> Self {
        Self::new(&FormConfig::default(), RequestCoordinator::default())
    }
}

impl RequesterApp {
    pub fn new(config: &FormConfig, coordinator: RequestCoordinator) -> Self {
        Self {
            view: RequesterView::new(config),
            coordinator,
            title: config.window_title.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(ViewMessage),
    /// Folder chosen in the picker, `None` if the dialog was dismissed
    SaveDirPicked(Option<PathBuf>),
    RequestPrepared(Result<DownloadRequest, FormError>),
}

pub fn title(app: &RequesterApp) -> String {
    app.title.clone()
}

pub fn update(app: &mut RequesterApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                ViewMessage::BrowsePressed => {
                    let coordinator = app.coordinator.clone();
                    let start = app.view.form.save_dir().cloned();

                    // iced Task::perform runs in the background tokio executor
                    return Task::perform(
                        async move { coordinator.choose_save_dir(start).await },
                        Message::SaveDirPicked,
                    );
                }
                ViewMessage::DownloadPressed if !app.view.is_submitting => {
                    let coordinator = app.coordinator.clone();
                    let values = app.view.form.collect();

                    app.view.is_submitting = true;
                    app.view.set_status("Checking book properties...", false);

                    return Task::perform(
                        async move { coordinator.prepare_request(values).await },
                        Message::RequestPrepared,
                    );
                }
                _ => {}
            }
        }
        Message::SaveDirPicked(Some(path)) => {
            debug!(path = %path.display(), "save folder selected");
            app.view.form.update(FormMessage::SaveDirSelected(path));
        }
        Message::SaveDirPicked(None) => {
            // User cancelled dialog
        }
        Message::RequestPrepared(result) => {
            app.view.is_submitting = false;
            match result
                .map_err(AppError::from)
                .and_then(|request| app.coordinator.dispatch(request))
            {
                Ok(request) => {
                    let novel_id = match &request.target {
                        RequestTarget::Catalogue { reference, .. } => reference.novel_id(),
                        RequestTarget::ChapterByChapter { .. } => None,
                    };
                    info!(
                        filepath = %request.book.filepath.display(),
                        mode = %request.target.mode(),
                        site = %request.target.site().kind(),
                        ?novel_id,
                        "request handed over"
                    );
                    app.view.set_status(
                        format!("Requested: {}", request.book.filepath.display()),
                        false,
                    );
                }
                Err(e) => {
                    debug!(error = %e, "request not submitted");
                    app.view.set_status(e.to_string(), true);
                }
            }
        }
    }
    Task::none()
}

pub fn view(app: &RequesterApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::JobSink;
    use crate::domain::{BookProps, CatalogueRef, Site};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<DownloadRequest>>,
    }

    impl JobSink for RecordingSink {
        fn submit(&self, request: &DownloadRequest) -> Result<(), AppError> {
            self.received.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn sample_request() -> DownloadRequest {
        DownloadRequest {
            book: BookProps {
                filepath: PathBuf::from("/srv/novels/book.txt"),
                name: "Book".into(),
                author: "Anon".into(),
                start_chapter: 1,
                preface: String::new(),
            },
            target: RequestTarget::Catalogue {
                site: Site::Jjwxc,
                reference: CatalogueRef::NovelId(42),
            },
        }
    }

    #[test]
    fn test_download_press_marks_submitting_once() {
        let mut app = RequesterApp::default();
        let _ = update(&mut app, Message::UiMessage(ViewMessage::DownloadPressed));
        assert!(app.view.is_submitting);
        assert_eq!(app.view.status_message, "Checking book properties...");

        app.view.set_status("still working", false);
        let _ = update(&mut app, Message::UiMessage(ViewMessage::DownloadPressed));
        assert_eq!(app.view.status_message, "still working");
    }

    #[test]
    fn test_picked_dir_lands_in_form() {
        let mut app = RequesterApp::default();
        let path = PathBuf::from("/srv/novels");
        let _ = update(&mut app, Message::SaveDirPicked(Some(path.clone())));
        assert_eq!(app.view.form.save_dir(), Some(&path));

        let _ = update(&mut app, Message::SaveDirPicked(None));
        assert_eq!(app.view.form.save_dir(), Some(&path));
    }

    #[test]
    fn test_validation_error_shown_in_status() {
        let mut app = RequesterApp::default();
        app.view.is_submitting = true;
        let _ = update(&mut app, Message::RequestPrepared(Err(FormError::MissingSaveDir)));

        assert!(!app.view.is_submitting);
        assert!(app.view.status_is_error);
        assert_eq!(app.view.status_message, "Please select a folder to save to");
    }

    #[test]
    fn test_prepared_request_is_dispatched() {
        let sink = Arc::new(RecordingSink::default());
        let mut app = RequesterApp::new(&FormConfig::default(), RequestCoordinator::new(sink.clone()));

        let _ = update(&mut app, Message::RequestPrepared(Ok(sample_request())));

        assert!(!app.view.status_is_error);
        assert_eq!(sink.received.lock().unwrap().as_slice(), &[sample_request()]);
    }

    #[test]
    fn test_title_from_config() {
        let config = FormConfig {
            window_title: "Requester".into(),
            ..FormConfig::default()
        };
        let app = RequesterApp::new(&config, RequestCoordinator::default());
        assert_eq!(title(&app), "Requester");
    }
}
